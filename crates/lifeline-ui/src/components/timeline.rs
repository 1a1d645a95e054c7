//! Timeline Components
//!
//! Renders the card list from [`TimelineState`]. Every field is inserted as
//! text, so markup in the content document is shown, never executed.

use dioxus::prelude::*;
use lifeline_core::{CardView, EventIcon, RevealTracker, TimelineState};

use super::loading::LoadingIndicator;

/// Element id of the card list
pub const TIMELINE_CONTAINER_ID: &str = "timeline-container";

/// Class list for a card given its reveal state
pub fn card_class(visible: bool) -> &'static str {
    if visible {
        "event-card visible"
    } else {
        "event-card"
    }
}

/// One timeline card
///
/// `data-index` is what the reveal observer reports back.
#[component]
pub fn EventCard(card: CardView, visible: bool) -> Element {
    let delay = card.transition_delay();

    rsx! {
        div {
            class: card_class(visible),
            style: "transition-delay: {delay}",
            "data-index": "{card.index}",

            div { class: "content",
                span { class: "event-icon",
                    {match &card.icon {
                        EventIcon::IconClass(icon_class) => rsx! { i { class: "{icon_class}" } },
                        EventIcon::Glyph(glyph) => rsx! { "{glyph}" },
                    }}
                }
                span { class: "year-badge", "{card.badge}" }
                h3 { "{card.title}" }
                p { "{card.description}" }
            }
        }
    }
}

/// The timeline container: loader, error message, or cards
#[component]
pub fn TimelineContainer(timeline: TimelineState, reveals: RevealTracker) -> Element {
    rsx! {
        div { id: TIMELINE_CONTAINER_ID, class: "timeline",
            {match &timeline {
                TimelineState::Loading => rsx! {
                    LoadingIndicator {}
                },
                TimelineState::Failed(message) => rsx! {
                    p { class: "timeline-error", "{message}" }
                },
                TimelineState::Loaded(cards) => rsx! {
                    for card in cards.iter() {
                        EventCard {
                            key: "{card.index}",
                            visible: reveals.is_revealed(card.index),
                            card: card.clone(),
                        }
                    }
                },
            }}
        }
    }
}
