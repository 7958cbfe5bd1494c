use anyhow::Result;
use times_chart::cli;

// Main entry point
fn main() -> Result<()> {
    cli::handle_calls()
}
