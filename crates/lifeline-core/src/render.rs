//! Timeline card models.
//!
//! Each card is a pure function of one event record and its index. The
//! index only feeds the transition delay, never the content.

use std::fmt;

use crate::types::{EventIcon, EventRecord};

/// Label placed between year and age on every card ("age")
pub const AGE_LABEL: &str = "تەمەن";

/// Shown in place of the timeline when the content document fails to load
pub const LOAD_ERROR_MESSAGE: &str = "هەڵەیەک ڕوویدا لە بارکردنی زانیارییەکان";

/// Delay added per card index, in whole milliseconds
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct StaggerStep(u32);

impl StaggerStep {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub fn millis(&self) -> u32 {
        self.0
    }

    /// Delay for the card at `index`; zero for the first card
    pub fn delay_for(&self, index: usize) -> u64 {
        index as u64 * u64::from(self.0)
    }
}

impl fmt::Display for StaggerStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Everything needed to draw one card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Position in the event sequence
    pub index: usize,
    pub icon: EventIcon,
    /// `{year} | تەمەن: {age}`
    pub badge: String,
    pub title: String,
    pub description: String,
    pub delay_ms: u64,
}

impl CardView {
    pub fn new(index: usize, event: &EventRecord, step: StaggerStep) -> Self {
        Self {
            index,
            icon: event.parsed_icon(),
            badge: format!("{} | {}: {}", event.year, AGE_LABEL, event.age),
            title: event.title.clone(),
            description: event.description.clone(),
            delay_ms: step.delay_for(index),
        }
    }

    /// Inline style value for the card's `transition-delay`
    pub fn transition_delay(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

/// Build one card per event, in document order
pub fn render_timeline(events: &[EventRecord], step: StaggerStep) -> Vec<CardView> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| CardView::new(index, event, step))
        .collect()
}
