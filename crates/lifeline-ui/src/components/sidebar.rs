//! Sidebar Component
//!
//! Off-canvas panel plus dimming backdrop. Both take their class from the
//! same [`SidebarState`], and all three triggers (open button on the page,
//! close button, backdrop) report the same toggle.

use dioxus::prelude::*;
use lifeline_core::SidebarState;

use super::button::IconButton;

#[component]
pub fn Sidebar(
    /// Shared open/closed flag
    state: SidebarState,
    /// Flip the sidebar
    on_toggle: EventHandler<()>,
    /// Navigation content
    children: Element,
) -> Element {
    rsx! {
        div {
            id: "sidebar-overlay",
            class: state.overlay_class(),
            onclick: move |_| on_toggle.call(()),
        }

        aside {
            id: "sidebar",
            class: state.panel_class(),
            "aria-hidden": if state.is_open() { "false" } else { "true" },

            div { class: "sidebar-header",
                IconButton {
                    id: "close-sidebar",
                    icon: "fa-solid fa-xmark",
                    label: "Close menu",
                    onclick: on_toggle,
                    class: "close-btn".to_string(),
                }
            }

            nav { class: "sidebar-nav",
                {children}
            }
        }
    }
}
