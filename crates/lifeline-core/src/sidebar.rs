//! Off-canvas sidebar state.
//!
//! The panel and its backdrop share one flag, so every trigger (open
//! button, close button, backdrop click) is the same flip.

/// CSS class marking the panel and overlay as shown
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    /// Closed, as on every page load
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "sidebar active"
        } else {
            "sidebar"
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.open {
            "sidebar-overlay active"
        } else {
            "sidebar-overlay"
        }
    }
}
