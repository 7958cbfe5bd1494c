pub mod chart;
pub mod cli;
pub mod data;
pub mod defaults;
pub mod palette;
pub mod reporting;
pub mod scan;
pub mod units;
