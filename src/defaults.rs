//! Centralized constants for the report layout and the chart service.
//!
//! The report format is fixed: the file name, the two rewritten line
//! positions, and the rendering endpoint are not configurable.

/// Name of the benchmark report, resolved against the working directory.
/// Read first, then overwritten in place.
pub const TIMES_FILE: &str = "times.md";

/// Line (0-based) carrying the total-runtime heading.
pub const SUMMARY_LINE: usize = 4;

/// Line (0-based) carrying the embedded chart image link.
pub const CHART_LINE: usize = 5;

/// Minimum number of lines the report must have for both rewrite targets to
/// exist.
pub const MIN_REPORT_LINES: usize = 6;

/// Prefix of the external chart-rendering endpoint. The serialized chart
/// configuration is appended percent-encoded as the `c` query parameter.
pub const QUICKCHART_PREFIX: &str = "https://quickchart.io/chart?c=";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_targets_within_minimum() {
        assert!(SUMMARY_LINE < MIN_REPORT_LINES);
        assert!(CHART_LINE < MIN_REPORT_LINES);
    }

    #[test]
    fn test_quickchart_prefix_ends_in_query_parameter() {
        assert!(QUICKCHART_PREFIX.ends_with("?c="));
    }
}
