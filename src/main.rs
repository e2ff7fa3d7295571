//! Interactive voice-ordering terminal for the food truck menu

use anyhow::{Context, Result};
use foodtruck_voice::announce::{ConsoleAnnouncer, OrderSession};
use foodtruck_voice::config::Config;
use foodtruck_voice::{telemetry, OrderExtractor};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    println!("✓ Config loaded from ~/.foodtruck-voice.toml");

    telemetry::init(&config.telemetry)?;
    tracing::info!("foodtruck-voice starting");

    let catalog = Arc::new(config.catalog()?);
    let extractor = OrderExtractor::new(catalog).context("failed to build order extractor")?;
    let session = OrderSession::new(extractor, ConsoleAnnouncer);

    println!("\nMenu:");
    for item in session.extractor().catalog() {
        println!("  {:<18} ${:>6.2}  {}", item.name, item.price, item.description);
    }
    println!("\nSay (type) your order, e.g. \"Two chicken tacos please\". Ctrl+C to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received");
                println!("\nShutting down...");
                break;
            }
            line = lines.next_line() => {
                let Some(utterance) = line.context("failed to read utterance")? else {
                    tracing::info!("input closed");
                    break;
                };
                if utterance.trim().is_empty() {
                    continue;
                }
                let order = session.handle_utterance(&utterance);
                let total: f64 = order.iter().map(foodtruck_voice::OrderLine::line_total).sum();
                if !order.is_empty() {
                    println!("  (${total:.2})");
                }
            }
        }
    }

    Ok(())
}
