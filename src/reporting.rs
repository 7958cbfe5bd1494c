use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::chart::ChartConfig;
use crate::data::ScanOutcome;
use crate::defaults;
use crate::scan::scan_lines;

/// Characters percent-encoded in the chart query parameter: everything
/// except alphanumerics and the marks `-_.!~*'()`.
const CHART_QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the link under which the external service renders a chart.
pub trait ChartUrlBuilder {
    fn chart_url(&self, chart: &ChartConfig) -> Result<String>;
}

/// QuickChart's GET endpoint: the JSON chart configuration travels
/// percent-encoded in the `c` query parameter. No length cap is applied.
pub struct QuickChart;

impl ChartUrlBuilder for QuickChart {
    fn chart_url(&self, chart: &ChartConfig) -> Result<String> {
        let json =
            serde_json::to_string(chart).context("Failed to serialize chart configuration")?;
        let encoded = utf8_percent_encode(&json, CHART_QUERY_SET);
        Ok(format!("{}{}", defaults::QUICKCHART_PREFIX, encoded))
    }
}

/// Split report text into lines, accepting both bare and carriage-return
/// prefixed line endings.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn summary_line(outcome: &ScanOutcome) -> String {
    format!("## Distribution of {:.2} ms", outcome.total_millis())
}

fn chart_line(outcome: &ScanOutcome, url_builder: &dyn ChartUrlBuilder) -> Result<String> {
    let chart = ChartConfig::from_sections(&outcome.sections);
    Ok(format!("![Pie Chart]({})", url_builder.chart_url(&chart)?))
}

/// Rewrite the summary heading and chart link of the report at `path` in
/// place, using QuickChart as the renderer.
pub fn rewrite_report(path: impl AsRef<Path>) -> Result<()> {
    rewrite_report_with(path, &QuickChart)
}

/// Rewrite with an injected URL builder.
///
/// The report is written back only after the whole scan has succeeded; a
/// scan failure leaves the file untouched.
pub fn rewrite_report_with(
    path: impl AsRef<Path>,
    url_builder: &dyn ChartUrlBuilder,
) -> Result<()> {
    let path = path.as_ref();
    let buffer = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file {}", path.display()))?;

    let mut lines = split_lines(&buffer);
    if lines.len() < defaults::MIN_REPORT_LINES {
        bail!(
            "Report file {} has {} lines, expected at least {}",
            path.display(),
            lines.len(),
            defaults::MIN_REPORT_LINES
        );
    }

    let outcome = scan_lines(lines.iter().copied())?;
    info!(
        "aggregated {} sections totalling {}µs",
        outcome.sections.len(),
        outcome.total_micros
    );

    let summary = summary_line(&outcome);
    let chart = chart_line(&outcome, url_builder)?;
    lines[defaults::SUMMARY_LINE] = summary.as_str();
    lines[defaults::CHART_LINE] = chart.as_str();

    fs::write(path, lines.join("\n"))
        .with_context(|| format!("Failed to write report file {}", path.display()))?;

    Ok(())
}
