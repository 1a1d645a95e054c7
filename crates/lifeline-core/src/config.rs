//! Runtime configuration for the page.

use std::path::PathBuf;

use crate::loader::ContentLocation;
use crate::render::StaggerStep;
use crate::theme::Theme;

/// Default delay between consecutive card reveals, in milliseconds
pub const DEFAULT_STAGGER_MS: u32 = 100;

/// Everything the page controller needs to know at startup
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Where `data.json` is read from
    pub content: ContentLocation,
    /// Directory holding the preference database
    pub data_dir: PathBuf,
    /// Theme applied when nothing is persisted yet
    pub default_theme: Theme,
    /// Per-index transition delay step
    pub stagger: StaggerStep,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            content: ContentLocation::Directory(PathBuf::from(".")),
            data_dir: default_data_dir(),
            default_theme: Theme::Light,
            stagger: StaggerStep::from_millis(DEFAULT_STAGGER_MS),
        }
    }
}

/// `<platform data dir>/lifeline`, or `./lifeline` when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lifeline")
}
