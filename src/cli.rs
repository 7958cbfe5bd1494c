use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::Level;

use crate::defaults;
use crate::reporting::rewrite_report;

#[derive(Parser)]
#[command(version, name = "times-chart")]
#[command(about = "Aggregate benchmark timings from times.md and embed a pie-chart link")]
pub struct Cli {
    /// Increase verbosity level (can be specified multiple times.) The first level sets level
    /// "info", second sets level "debug", and third sets level "trace" for the logger.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn handle_calls() -> Result<()> {
    let cli = Cli::parse();
    let logger_level = match cli.verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(logger_level.as_str())).init();

    rewrite_report(defaults::TIMES_FILE)
}
