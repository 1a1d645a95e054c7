//! Lifeline UI Components
//!
//! Dioxus components for the timeline page. Components are stateless:
//! they draw from `lifeline_core` models and report clicks through
//! event handlers, leaving state changes to the page.
//!
//! ## Fixed element ids
//!
//! - `theme-toggle`, `menu-toggle`, `close-sidebar`: controls
//! - `sidebar`, `sidebar-overlay`: off-canvas panel and backdrop
//! - `timeline-container`: card list watched by the reveal observer

pub mod components;

pub use components::*;
