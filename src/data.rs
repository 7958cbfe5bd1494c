use std::fmt::Display;

/// Identity of one report section, parsed from a `## Day <n> Part <1|2>`
/// header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionId {
    pub day: u32,
    pub part: u8,
}

impl Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {}.{}", self.day, self.part)
    }
}

/// A closed section with its accumulated runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTotal {
    pub id: SectionId,
    pub micros: u64,
}

/// Result of scanning a whole report.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Closed sections in order of appearance.
    pub sections: Vec<SectionTotal>,
    /// Sum of all section totals, in microseconds.
    pub total_micros: u64,
}

impl ScanOutcome {
    /// Grand total in milliseconds.
    #[must_use]
    pub fn total_millis(&self) -> f64 {
        self.total_micros as f64 / 1_000.0
    }
}
