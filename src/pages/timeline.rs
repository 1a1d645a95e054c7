//! Timeline page.
//!
//! Header with menu and theme controls, sidebar, hero, the card list and
//! the footer. Arms the reveal watcher once cards exist.

use dioxus::prelude::*;
use lifeline_ui::{IconButton, Sidebar, ThemeToggle, TimelineContainer};

use crate::context::{use_controller, use_page_state};
use crate::reveal::watch_reveals;

#[component]
pub fn TimelinePage() -> Element {
    let controller = use_controller();
    let mut state = use_page_state();
    let mut watching = use_signal(|| false);

    let theme_controller = controller.clone();
    let toggle_theme = use_callback(move |_: ()| {
        if let Err(e) = theme_controller.toggle_theme(&mut state.write()) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    });

    let menu_controller = controller.clone();
    let toggle_menu = use_callback(move |_: ()| {
        menu_controller.toggle_menu(&mut state.write());
    });

    // Effects run after render, so the cards are in the DOM by now
    let reveal_controller = controller.clone();
    use_effect(move || {
        let has_cards = !state.read().timeline.cards().is_empty();
        if has_cards && !*watching.peek() {
            watching.set(true);
            spawn(watch_reveals(reveal_controller.clone(), state));
        }
    });

    let page = state.read();
    let theme = page.theme;
    let sidebar = page.sidebar;
    let hero = page.hero.clone();
    let timeline = page.timeline.clone();
    let reveals = page.reveals.clone();
    drop(page);

    let document_title = hero.document_title().to_string();

    rsx! {
        document::Title { "{document_title}" }

        div { class: "page", "data-theme": theme.as_str(),
            header { class: "top-bar",
                IconButton {
                    id: "menu-toggle",
                    icon: "fa-solid fa-bars",
                    label: "Open menu",
                    onclick: toggle_menu,
                }
                ThemeToggle { theme, on_toggle: toggle_theme }
            }

            Sidebar { state: sidebar, on_toggle: toggle_menu,
                a { href: "#hero", "Home" }
                a { href: "#timeline-container", "Timeline" }
            }

            section { id: "hero", class: "hero",
                h1 { id: "hero-title", "{hero.title}" }
                p { id: "hero-subtitle", "{hero.subtitle}" }
            }

            main { class: "timeline-section",
                TimelineContainer { timeline, reveals }
            }

            footer { class: "site-footer",
                p { id: "footer-text", "{hero.footer_text}" }
            }
        }
    }
}
