mod config;
mod emit;
mod face;
mod frame;
mod layout;
mod models;

use anyhow::{Context, Result};
use config::Config;
use layout::BitmapPacker;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordclock_gen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word clock table generator...");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let face = match &config.face_path {
        Some(path) => face::load(path).await?,
        None => {
            tracing::info!("FACE_PATH not set, using the builtin face");
            face::builtin()
        }
    };

    let table = BitmapPacker::build_table(&face)?;
    tracing::info!("Packed {} word bitmaps", table.len());

    let output = emit::emit(config.output_format, &table)?;
    match &config.output_path {
        Some(path) => {
            tokio::fs::write(path, &output)
                .await
                .with_context(|| format!("writing table to {path}"))?;
            tracing::info!("Table written to {}", path);
        }
        None => print!("{output}"),
    }

    if let Some((hour, minute)) = config.preview_time {
        let composed = frame::compose_time(&table, hour, minute, config.allow_half_to)?;
        tracing::info!(
            "Preview of {:02}:{:02}:\n{}",
            hour,
            minute,
            frame::render(&composed, &face.grid)
        );
    }

    Ok(())
}
