use std::sync::Arc;

use dioxus::prelude::*;

use crate::context::{build_controller, SharedController};
use crate::pages::TimelinePage;
use crate::theme::{FONT_AWESOME_CSS, GLOBAL_STYLES};

/// Root application component.
///
/// Restores the theme while building the initial state, provides the
/// controller and state to the page, then loads the content document once.
#[component]
pub fn App() -> Element {
    let controller: SharedController =
        use_hook(|| Arc::new(build_controller(crate::page_config())));
    let state = use_signal(|| controller.initial_state());

    use_context_provider(|| controller.clone());
    use_context_provider(|| state);

    // Single load of data.json; the page re-renders when it lands
    let loader = controller.clone();
    use_effect(move || {
        let controller = loader.clone();
        let mut state = state;
        spawn(async move {
            let result = controller.load().await;
            controller.apply_load(&mut state.write(), result);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        style { {GLOBAL_STYLES} }
        TimelinePage {}
    }
}
