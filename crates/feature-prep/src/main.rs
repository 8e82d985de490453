//! Flight Delay Pipeline - Batch Preparation Entry Point

use feature_prep::{init_logging, run, PrepConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Flight Feature Prep v{} ===", env!("CARGO_PKG_VERSION"));

    // Optional path to a TOML config file; defaults otherwise.
    let config_path = std::env::args().nth(1);
    let config = PrepConfig::load(config_path.as_deref())?;

    let summary = run(&config)?;
    info!(
        "Prepared {} of {} raw records into {}",
        summary.rows_written, summary.raw_records, config.output_path
    );

    Ok(())
}
