//! Loading Indicator
//!
//! Placeholder shown in the timeline container until the content document
//! arrives. A request that never completes leaves it spinning.

use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "loader", role: "status",
            span { class: "loader-ring" }
        }
    }
}
