//! Avatar renderer
//!
//! Prints one avatar as HTML or JSON.

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use leptos_avatar::config::{Cli, Settings};
use leptos_avatar::render;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED); stdout is reserved for output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("Failed to load settings")?;
    debug!(?settings, "Settings loaded");

    let avatar = render::build(&cli, &settings).context("Invalid --attr")?;
    let output = render::render(&avatar, &settings.output).context("Failed to serialize")?;
    println!("{output}");

    Ok(())
}
