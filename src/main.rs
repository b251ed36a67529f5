//! Application entry point.

use hello_triangle::logging::{init_logging, LoggingConfig};
use hello_triangle::AppConfig;
use log::{error, info};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    info!("Logger initialized");

    if let Err(e) = hello_triangle::run(AppConfig::default()) {
        error!("Exiting with error: {:#}", e);
        return Err(e);
    }

    info!("Exited cleanly");
    Ok(())
}
