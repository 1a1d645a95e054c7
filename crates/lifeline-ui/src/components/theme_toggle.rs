//! Theme Toggle
//!
//! Moon while light (offers dark), sun while dark (offers light).

use dioxus::prelude::*;
use lifeline_core::Theme;

use super::button::IconButton;

#[component]
pub fn ThemeToggle(
    /// Currently applied theme
    theme: Theme,
    /// Called on every click; the page flips and persists the theme
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        IconButton {
            id: "theme-toggle",
            icon: theme.icon_class(),
            label: "Toggle theme",
            onclick: on_toggle,
        }
    }
}
