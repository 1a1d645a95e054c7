#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod reveal;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lifeline_core::config::default_data_dir;
use lifeline_core::logging::LoggingBuilder;
use lifeline_core::{ContentLocation, PageConfig, StaggerStep, Theme, DEFAULT_STAGGER_MS};

/// Page configuration, set once from the command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page configuration (set from command line or default)
pub fn page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Lifeline - animated personal timeline
#[derive(Parser, Debug)]
#[command(name = "lifeline-desktop")]
#[command(about = "Lifeline - renders a data.json timeline with theme and scroll reveal")]
struct Args {
    /// Directory or http(s) base URL containing data.json
    #[arg(short, long, default_value = ".")]
    content: String,

    /// Data directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Theme used until the user picks one (light or dark)
    #[arg(long, default_value = "light")]
    default_theme: Theme,

    /// Delay between consecutive card reveals, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STAGGER_MS)]
    stagger_ms: u32,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<PageConfig> {
        Ok(PageConfig {
            content: ContentLocation::parse(&self.content)?,
            data_dir: self.data_dir.unwrap_or_else(default_data_dir),
            default_theme: self.default_theme,
            stagger: StaggerStep::from_millis(self.stagger_ms),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = args.log.take() {
        logging = logging.with_filter(filter);
    }
    logging.init();

    let config = args.into_config()?;
    tracing::info!(
        "Starting with content {:?}, data dir {:?}",
        config.content,
        config.data_dir
    );
    let _ = PAGE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Lifeline")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 1000.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
