use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tossapp::config::{Config, LogFormat};
use tossapp::ui::{terminal, App};

fn init_logging(config: &Config) -> Result<()> {
    // The terminal owns stdout, so logs go to a file
    let file = File::create(&config.logging.file)
        .with_context(|| format!("Failed to open log file {}", config.logging.file))?;
    let writer = Mutex::new(file);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tossapp=info,shared=info".into());

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init(),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    tracing::info!(
        service = "tossapp",
        version = env!("CARGO_PKG_VERSION"),
        log_format = ?config.logging.format,
        frame_interval_ms = config.animation.frame_interval_ms,
        min_flips = config.coin.min_flips,
        max_flips = config.coin.max_flips,
        spin_duration_ms = config.bottle.spin_duration_ms,
        "Starting tossapp"
    );

    let root = CancellationToken::new();
    let (app, frame_rx) = App::new(&config, root.clone());

    let mut tui = terminal::enter()?;
    let outcome = app.run(&mut tui, frame_rx).await;
    terminal::exit()?;
    root.cancel();

    if let Err(e) = &outcome {
        tracing::error!(error = %e, "tossapp exited with error");
    }
    outcome
}
