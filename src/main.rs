#![allow(non_snake_case)]

mod app;
mod components;
mod content;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::Section;

/// Portfolio sections, set once at startup from the built-in content or a
/// content file
static SECTIONS: OnceLock<Vec<Section>> = OnceLock::new();

/// Get the portfolio sections loaded at startup
pub fn get_sections() -> Vec<Section> {
    SECTIONS
        .get()
        .cloned()
        .unwrap_or_else(content::default_sections)
}

/// Folio - animated personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - animated personal portfolio")]
struct Args {
    /// JSON file with portfolio sections (overrides the built-in content)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 840.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let sections = match args.content {
        Some(ref path) => content::load_sections(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => content::default_sections(),
    };
    tracing::info!("Loaded {} portfolio sections", sections.len());
    let _ = SECTIONS.set(sections);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
