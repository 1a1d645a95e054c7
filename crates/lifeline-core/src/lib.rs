//! Lifeline Core Library
//!
//! Content model, preference storage and page state for the Lifeline
//! timeline page.
//!
//! ## Overview
//!
//! The page shows a personal or project timeline described by a single
//! `data.json` content document. This crate holds everything that does not
//! need a rendering surface:
//!
//! - **Theme**: light/dark preference, persisted under the `theme` key
//! - **Sidebar**: the open/closed flag shared by the panel and its backdrop
//! - **Loader**: one fetch of the content document, from disk or over HTTP
//! - **Render**: deterministic card models with staggered transition delays
//! - **Reveal**: which cards have crossed the viewport threshold
//!
//! [`PageController`] ties them together in the order the page needs them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lifeline_core::{MemoryStore, PageConfig, PageController};
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = PageController::new(PageConfig::default(), MemoryStore::new());
//!     let mut state = controller.initial_state();
//!
//!     let result = controller.load().await;
//!     controller.apply_load(&mut state, result);
//!
//!     println!("{} cards", state.timeline.cards().len());
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod logging;
pub mod render;
pub mod reveal;
pub mod sidebar;
pub mod storage;
pub mod theme;
pub mod types;

// Re-exports
pub use config::{PageConfig, DEFAULT_STAGGER_MS};
pub use controller::{HeroText, PageController, PageState, TimelineState};
pub use error::{LifelineError, LifelineResult};
pub use loader::{ContentLocation, ContentSource, CONTENT_FILE};
pub use render::{render_timeline, CardView, StaggerStep, AGE_LABEL, LOAD_ERROR_MESSAGE};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use sidebar::SidebarState;
pub use storage::{MemoryStore, PreferenceStore, Storage};
pub use theme::{RestoredTheme, Theme, ThemeController, THEME_KEY};
pub use types::{ContentDocument, EventIcon, EventRecord, FieldValue, ProjectInfo};
