//! Parsing of `uptime`-style status output.
//!
//! Grammar: the load-average figures follow the last colon-delimited
//! prefix of the status line, e.g.
//!
//! ```text
//!  16:34:12 up 12 days,  3:05,  2 users,  load average: 0.50, 0.30, 0.10
//! ```
//!
//! The first figure is the one-minute average. The decimal separator is
//! `.` or `,` depending on the remote locale, so a figure is any
//! `digits`-separator-`digits` token.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ProbeError;

static LOAD_FIGURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[.,](\d+)").expect("static regex"));

/// Extract the one-minute load average from status command output.
///
/// Returns `ProbeError::Parse` when the text carries no recognizable
/// load figure; the caller treats that the same as an unreachable host.
pub fn parse_one_minute_load(text: &str) -> Result<f64, ProbeError> {
    let tail = text.rsplit(':').next().unwrap_or(text);

    let caps = LOAD_FIGURE
        .captures(tail)
        .ok_or_else(|| ProbeError::Parse(text.trim().to_string()))?;

    let normalized = format!("{}.{}", &caps[1], &caps[2]);
    let value: f64 = normalized
        .parse()
        .map_err(|_| ProbeError::Parse(text.trim().to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(ProbeError::Parse(text.trim().to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_period_locale() {
        let text = " 16:34:12 up 12 days,  3:05,  2 users,  load average: 0.50, 0.30, 0.10\n";
        assert_eq!(parse_one_minute_load(text).unwrap(), 0.50);
    }

    #[test]
    fn parses_comma_locale() {
        let text = " 16:34:12 up 12 days,  3:05,  2 users,  load average: 0,50, 0,30, 0,10\n";
        assert_eq!(parse_one_minute_load(text).unwrap(), 0.50);
    }

    #[test]
    fn locale_variants_agree() {
        let period = " 10:00:00 up 1 day,  1 user,  load average: 1.42, 0.90, 0.40\n";
        let comma = " 10:00:00 up 1 day,  1 user,  load average: 1,42, 0,90, 0,40\n";
        assert_eq!(
            parse_one_minute_load(period).unwrap(),
            parse_one_minute_load(comma).unwrap()
        );
    }

    #[test]
    fn takes_first_figure_only() {
        let text = " 09:15:01 up 3 min,  1 user,  load average: 1.15, 0.70, 0.28\n";
        assert_eq!(parse_one_minute_load(text).unwrap(), 1.15);
    }

    #[test]
    fn tolerates_space_separated_figures() {
        // BSD-style output separates the figures with spaces.
        let text = "10:02  up 2 days, 12:30, 3 users, load averages: 1.15 1.20 1.30\n";
        assert_eq!(parse_one_minute_load(text).unwrap(), 1.15);
    }

    #[test]
    fn tolerates_localized_prefix() {
        let text = " 16:34:12 up,  Durchschnittslast: 0,52 0,58 0,59\n";
        assert_eq!(parse_one_minute_load(text).unwrap(), 0.52);
    }

    #[test]
    fn rejects_output_without_figures() {
        assert!(parse_one_minute_load("bash: uptime: command not found\n").is_err());
    }

    #[test]
    fn rejects_empty_output() {
        assert!(parse_one_minute_load("").is_err());
    }

    #[test]
    fn rejects_truncated_output() {
        assert!(parse_one_minute_load(" 16:34:12 up 12 days").is_err());
    }

    #[test]
    fn parse_error_carries_the_offending_text() {
        let err = parse_one_minute_load("garbage\n").unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }
}
