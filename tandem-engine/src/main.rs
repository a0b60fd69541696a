//! Tandem Engine - JSON HTTP front-end for the two-track allocation engine.

use anyhow::Result;
use tandem_common::config::Config;
use tandem_common::logging::init_logging;
use tandem_engine::AllocationService;

#[tokio::main]
async fn main() -> Result<()> {
    let startup_start = std::time::Instant::now();

    // Load configuration (file + TANDEM_* overrides)
    let config = Config::load_and_validate(None)?;

    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Tandem Engine v{}", env!("CARGO_PKG_VERSION"));

    let service = AllocationService::new(config);

    let startup_duration = startup_start.elapsed();
    tracing::info!(
        duration_ms = startup_duration.as_millis() as u64,
        "Service initialized in {:?}",
        startup_duration
    );

    service.start().await
}
