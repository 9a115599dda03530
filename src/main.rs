#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod app;
mod contact;
mod gallery;
mod image;
mod music;
mod nav;
mod sections;

use color_eyre::Result;
use kk_studios_lib::{config::CONFIG_FILE, SiteConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;

    let config = SiteConfig::load_or_default(CONFIG_FILE)?;
    info!("starting {}", config.studio_name);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(app::App);
    Ok(())
}
