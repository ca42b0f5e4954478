use gametora_scraper::gametora::{CharacterJob, SkillJob, SupportCardJob};
use gametora_scraper::run_job;
use std::time::Instant;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "info,chromiumoxide=warn,tungstenite=warn".into()),
        )
        .with(ErrorLayer::default())
        .init();

    let start = Instant::now();

    run_job(&SkillJob).await?;
    run_job(&CharacterJob).await?;
    run_job(&SupportCardJob).await?;

    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "Total time for processing all jobs: {:.2} seconds or {:.2} minutes.",
        elapsed,
        elapsed / 60.0
    );

    Ok(())
}
