//! Page context provider for Lifeline.
//!
//! Provides the controller and the page state to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let controller = use_controller();
//! let mut state = use_page_state();
//! controller.toggle_menu(&mut state.write());
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use lifeline_core::{MemoryStore, PageConfig, PageController, PageState, Storage};

/// Shared controller type for context.
pub type SharedController = Arc<PageController>;

/// Build the controller, backed by the preference database when it opens.
///
/// Preference persistence is best-effort: if the database cannot be opened
/// the page still works, it just forgets the theme on exit.
pub fn build_controller(config: PageConfig) -> PageController {
    match Storage::open_in(&config.data_dir) {
        Ok(storage) => PageController::new(config, storage),
        Err(e) => {
            tracing::warn!(
                "Preferences unavailable at {:?}, using in-memory store: {}",
                config.data_dir,
                e
            );
            PageController::new(config, MemoryStore::new())
        }
    }
}

/// Hook to access the PageController from context.
pub fn use_controller() -> SharedController {
    use_context::<SharedController>()
}

/// Hook to access the page state.
///
/// Returns a reactive signal; writes re-render every reader.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}
