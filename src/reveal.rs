//! Scroll-reveal watcher.
//!
//! Installs one `IntersectionObserver` over the rendered cards. Each card is
//! reported once, the first time it is at least `REVEAL_THRESHOLD` visible,
//! and is then unobserved.

use dioxus::prelude::*;
use lifeline_core::{PageState, REVEAL_THRESHOLD};
use lifeline_ui::TIMELINE_CONTAINER_ID;

use crate::context::SharedController;

const REVEAL_SCRIPT: &str = r#"
const cards = document.querySelectorAll("#__CONTAINER__ .event-card");
const observer = new IntersectionObserver((entries, obs) => {
    for (const entry of entries) {
        if (entry.isIntersecting) {
            dioxus.send(Number(entry.target.dataset.index));
            obs.unobserve(entry.target);
        }
    }
}, { threshold: __THRESHOLD__ });
cards.forEach((card) => observer.observe(card));
// keep the channel open while cards remain
await new Promise(() => {});
"#;

pub fn reveal_script(container_id: &str, threshold: f64) -> String {
    REVEAL_SCRIPT
        .replace("__CONTAINER__", container_id)
        .replace("__THRESHOLD__", &threshold.to_string())
}

/// Forward reveal reports from the page into the state until the page goes away
pub async fn watch_reveals(controller: SharedController, mut state: Signal<PageState>) {
    let mut eval = document::eval(&reveal_script(TIMELINE_CONTAINER_ID, REVEAL_THRESHOLD));
    tracing::debug!(
        cards = state.peek().timeline.cards().len(),
        "Reveal watcher armed"
    );

    loop {
        match eval.recv::<usize>().await {
            Ok(index) => {
                if controller.reveal(&mut state.write(), index) {
                    tracing::trace!(index, "Card revealed");
                }
            }
            Err(e) => {
                tracing::debug!("Reveal watcher stopped: {:?}", e);
                break;
            }
        }
    }
}
