//! Ordering of probed candidates.

use tracing::info;

use pgpick_core::{LoadSample, ProbeConfig, RankedPair};
use pgpick_probe::probe;

use crate::error::RankError;

/// Probe both candidates and select the primary/secondary pair.
///
/// The two probes run concurrently; a failure in one never aborts the
/// other. See [`rank_samples`] for the ordering rules.
pub async fn rank(
    first: &str,
    second: &str,
    config: &ProbeConfig,
) -> Result<RankedPair, RankError> {
    let (a, b) = tokio::join!(probe(first, config), probe(second, config));
    rank_samples(vec![a, b])
}

/// Order exactly two samples ascending by load.
///
/// The sort is stable, so equal loads keep input order. An unreachable
/// host sorts last; if even the best sample is unreachable the whole
/// selection fails, since a pair whose primary cannot be measured is
/// useless to provision.
pub fn rank_samples(samples: Vec<LoadSample>) -> Result<RankedPair, RankError> {
    let mut ordered = samples;
    ordered.sort_by(|a, b| a.load.cmp_load(&b.load));

    let [primary, secondary]: [LoadSample; 2] = match ordered.try_into() {
        Ok(pair) => pair,
        Err(rest) => return Err(RankError::NotEnoughSamples(rest.len())),
    };

    if !primary.load.is_measured() {
        return Err(RankError::AllUnreachable);
    }

    info!(primary = %primary.host, load = %primary.load, "selected primary host");
    Ok(RankedPair {
        primary: primary.host,
        secondary: secondary.host,
    })
}
