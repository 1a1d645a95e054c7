//! Reusable UI components for the timeline page.

mod button;
mod loading;
mod sidebar;
mod theme_toggle;
mod timeline;

pub use button::*;
pub use loading::*;
pub use sidebar::*;
pub use theme_toggle::*;
pub use timeline::*;
