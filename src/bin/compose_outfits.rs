//! Compose outfit cards from a cloth-details payload
//!
//! Reads a backend cloth-details JSON file, composes the chosen outfit set at
//! the payload's feels-like temperature and prints one card per style.
//!
//! Usage: cargo run --features cli --bin compose_outfits -- <details.json> [--not-recommended]
//!
//! Environment:
//! - OUTFIT_CONFIG: composer config JSON (optional)
//! - FEELS_LIKE: override the payload's feels-like temperature (optional)

use anyhow::{Context, Result};
use outfit_composer::{ClothDetails, ComposerConfig, OutfitComposer, RecommendationMode};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: compose_outfits <details.json> [--not-recommended]";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outfit_composer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let payload_path = args.next().context(USAGE)?;
    let mode = if args.any(|a| a == "--not-recommended") {
        RecommendationMode::NotRecommended
    } else {
        RecommendationMode::Recommended
    };

    let config = match std::env::var("OUTFIT_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading composer config: {}", path);
            ComposerConfig::load(Path::new(&path))?
        }
        Err(_) => ComposerConfig::default(),
    };

    let mut details = ClothDetails::from_path(Path::new(&payload_path))
        .with_context(|| format!("Failed to load cloth details from {}", payload_path))?;

    if let Ok(raw) = std::env::var("FEELS_LIKE") {
        let feels_like: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("FEELS_LIKE is not a number: {}", raw))?;
        tracing::info!("Overriding feels-like temperature with {}", feels_like);
        details.weather_info.feels_like_temperature = feels_like;
    }

    tracing::info!(
        "{} {} - feels like {:.1}",
        details.weather_info.location,
        details.weather_info.date,
        details.feels_like()
    );

    let composer = OutfitComposer::new(config);
    tracing::debug!(
        "hide_unspecified={} hide_extra_placeholder={}",
        composer.config().hide_unspecified,
        composer.config().hide_extra_placeholder
    );
    let deck = composer.compose_details(&details, mode);
    print!("{}", deck.render_text());

    Ok(())
}
