use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;

use crate::data::{ScanOutcome, SectionId, SectionTotal};
use crate::units::{to_micros, TimeUnit, UnitError};

/// Cached regex for section header lines (compiled once)
static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached regex for measurement lines (compiled once)
static MEASUREMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn header_regex() -> &'static Regex {
    HEADER_REGEX
        .get_or_init(|| Regex::new(r"## Day (\d+) Part (1|2)").expect("Invalid header regex"))
}

fn measurement_regex() -> &'static Regex {
    MEASUREMENT_REGEX.get_or_init(|| {
        Regex::new(r"- (\w+): ([\d.]+)([µ\w]+)").expect("Invalid measurement regex")
    })
}

/// Scan state threaded through the fold: the section currently being
/// accumulated, if any, plus everything already closed.
#[derive(Default)]
struct ScanState {
    open: Option<OpenSection>,
    outcome: ScanOutcome,
}

struct OpenSection {
    id: SectionId,
    micros: u64,
}

impl ScanState {
    fn open_section(&mut self, id: SectionId) {
        self.close_open_section();
        self.open = Some(OpenSection { id, micros: 0 });
    }

    fn close_open_section(&mut self) {
        if let Some(open) = self.open.take() {
            debug!("closing section {} with {}µs", open.id, open.micros);
            self.outcome.total_micros += open.micros;
            self.outcome.sections.push(SectionTotal {
                id: open.id,
                micros: open.micros,
            });
        }
    }
}

/// Aggregate all measurement lines of a report into per-section totals and a
/// grand total.
///
/// The header and measurement patterns are matched independently on every
/// line; lines matching neither pass through without effect. An unknown time
/// unit aborts the scan.
pub fn scan_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<ScanOutcome, UnitError> {
    let mut state = ScanState::default();

    for line in lines {
        if let Some(captures) = header_regex().captures(line) {
            // Part is constrained to 1|2 by the pattern, the day digits can
            // still overflow.
            match captures[1].parse::<u32>() {
                Ok(day) => {
                    let part = captures[2].parse::<u8>().expect("part is a single digit");
                    state.open_section(SectionId { day, part });
                }
                Err(err) => {
                    warn!("Cannot parse day '{}': {err}, skipping header", &captures[1]);
                }
            }
        }

        if let Some(captures) = measurement_regex().captures(line) {
            let unit: TimeUnit = captures[3].parse()?;
            match captures[2].parse::<f64>() {
                Ok(amount) => match &mut state.open {
                    Some(open) => open.micros += to_micros(amount, unit),
                    None => {
                        warn!("Measurement '{}' before any section header, skipping", &captures[1])
                    }
                },
                Err(err) => {
                    warn!("Cannot parse amount '{}': {err}, skipping record", &captures[2]);
                }
            }
        }
    }

    state.close_open_section();
    Ok(state.outcome)
}
