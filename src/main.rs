use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use storyreel::cli::Cli;
use storyreel::config::Config;
use storyreel::logging::init_tracing;
use storyreel::storage::{load_payload, FileSink, MemorySink, StorySink};
use storyreel::ui::runtime::{run, RunOptions};

/// Artificial latency of `--dry-run` saves, so the saving state is visible.
const DRY_RUN_SAVE_DELAY: Duration = Duration::from_millis(800);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(log_file) = init_tracing() {
        tracing::info!(path = %log_file.display(), "Logging to file");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let initial = match &cli.open {
        Some(path) => Some(
            runtime
                .block_on(load_payload(path))
                .with_context(|| format!("Failed to open story '{}'", path.display()))?,
        ),
        None => None,
    };

    let sink: Arc<dyn StorySink> = if cli.dry_run {
        Arc::new(MemorySink::with_delay(DRY_RUN_SAVE_DELAY))
    } else {
        let dir = cli
            .storage_dir
            .clone()
            .unwrap_or_else(|| config.storage.resolved_dir());
        Arc::new(FileSink::new(dir))
    };
    tracing::info!(sink = sink.name(), "Starting storyreel");

    run(
        RunOptions {
            config,
            sink,
            initial,
        },
        runtime.handle(),
    )
    .context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
