//! Shared data model for probing and ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of a single load measurement.
///
/// `Unreachable` ranks after any measurement, so a failed probe is
/// deprioritized rather than aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Load {
    /// Finite one-minute load average reported by the host.
    Measured(f64),
    /// The host could not be measured.
    Unreachable,
}

impl Load {
    pub fn is_measured(&self) -> bool {
        matches!(self, Load::Measured(_))
    }

    /// Numeric view for display; `Unreachable` maps to infinity.
    pub fn as_f64(&self) -> f64 {
        match self {
            Load::Measured(value) => *value,
            Load::Unreachable => f64::INFINITY,
        }
    }

    /// Total order: measurements ascending, `Unreachable` last.
    pub fn cmp_load(&self, other: &Load) -> Ordering {
        match (self, other) {
            (Load::Measured(a), Load::Measured(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Load::Measured(_), Load::Unreachable) => Ordering::Less,
            (Load::Unreachable, Load::Measured(_)) => Ordering::Greater,
            (Load::Unreachable, Load::Unreachable) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Measured(value) => write!(f, "{value:.2}"),
            Load::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// One probe attempt against one host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSample {
    pub host: String,
    pub load: Load,
}

/// The selection result: `load(primary) <= load(secondary)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPair {
    pub primary: String,
    pub secondary: String,
}
