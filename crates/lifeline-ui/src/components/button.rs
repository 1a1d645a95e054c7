//! Icon Button
//!
//! Compact control showing a single icon-font glyph.

use dioxus::prelude::*;

/// Properties for the IconButton component
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// Element id the page binds to
    pub id: &'static str,
    /// Icon font classes, e.g. `fa-solid fa-bars`
    pub icon: &'static str,
    /// Accessible label for screen readers
    pub label: &'static str,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = icon_button_class(props.class.as_deref());

    rsx! {
        button {
            id: props.id,
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.label,
            onclick: move |_| props.onclick.call(()),
            i { class: props.icon }
        }
    }
}

fn icon_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    }
}
