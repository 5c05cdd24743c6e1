//! pgpick-probe — load measurement over SSH.
//!
//! A probe opens one SSH session against one candidate host, runs the
//! configured status command, and extracts the one-minute load average
//! from its output. Every failure mode (key load, connect, timeout,
//! authentication, command execution, parsing) stays inside the probe:
//! the host is reported as `Load::Unreachable` and a diagnostic is
//! emitted, so a bad host is deprioritized instead of aborting the
//! sibling probe.
//!
//! # Architecture
//!
//! ```text
//! probe(host, config)
//!   ├── SshSession::connect   bounded by connect_timeout
//!   ├── SshSession::exec      captures stdout + exit status
//!   ├── parse_one_minute_load
//!   └── SshSession::close     on every path that opened a session
//! ```

pub mod error;
pub mod probe;
pub mod session;
pub mod uptime;

pub use error::ProbeError;
pub use probe::probe;
pub use session::SshSession;
pub use uptime::parse_one_minute_load;
