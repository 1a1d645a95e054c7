//! Page styling.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Icon font used by the controls and by `fa-*` event icons
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
