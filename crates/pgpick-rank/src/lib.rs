//! pgpick-rank — primary/secondary selection.
//!
//! Probes both candidates (concurrently; the probes are independent and
//! idempotent, so concurrency is an optimization rather than a
//! requirement) and orders them ascending by measured load. The
//! lowest-loaded host becomes the primary. Ties keep input order, and a
//! run where neither host could be measured fails outright instead of
//! producing a meaningless pair.

pub mod error;
pub mod ranker;

pub use error::RankError;
pub use ranker::{rank, rank_samples};
