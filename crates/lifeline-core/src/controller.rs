//! Page controller.
//!
//! Startup runs in a fixed order: restore the theme, wire the controls,
//! then load the content document once and render it. The controller owns
//! the collaborators; [`PageState`] is the plain data the view draws from.

use std::sync::Arc;

use crate::config::PageConfig;
use crate::error::LifelineResult;
use crate::loader::ContentSource;
use crate::render::{render_timeline, CardView, StaggerStep, LOAD_ERROR_MESSAGE};
use crate::reveal::RevealTracker;
use crate::sidebar::SidebarState;
use crate::storage::PreferenceStore;
use crate::theme::{Theme, ThemeController};
use crate::types::{ContentDocument, ProjectInfo};

/// Hero and footer text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroText {
    pub title: String,
    pub subtitle: String,
    pub footer_text: String,
}

impl HeroText {
    /// Text shown until the content document arrives, and kept if it never does
    pub fn placeholder() -> Self {
        Self {
            title: "Lifeline".to_string(),
            subtitle: "...".to_string(),
            footer_text: String::new(),
        }
    }

    /// The document (window) title mirrors the hero title
    pub fn document_title(&self) -> &str {
        &self.title
    }
}

impl From<ProjectInfo> for HeroText {
    fn from(info: ProjectInfo) -> Self {
        Self {
            title: info.title,
            subtitle: info.subtitle,
            footer_text: info.footer_text,
        }
    }
}

/// Contents of the timeline container
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TimelineState {
    /// Loading placeholder; also the state of a request that never completes
    #[default]
    Loading,
    Loaded(Vec<CardView>),
    /// Single error message, no cards
    Failed(String),
}

impl TimelineState {
    pub fn cards(&self) -> &[CardView] {
        match self {
            TimelineState::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TimelineState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, TimelineState::Loading)
    }
}

/// Everything the view renders
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub sidebar: SidebarState,
    pub hero: HeroText,
    pub timeline: TimelineState,
    pub reveals: RevealTracker,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            sidebar: SidebarState::new(),
            hero: HeroText::placeholder(),
            timeline: TimelineState::Loading,
            reveals: RevealTracker::new(),
        }
    }

    /// Whether the card at `index` carries the `visible` marker
    pub fn is_card_visible(&self, index: usize) -> bool {
        self.reveals.is_revealed(index)
    }
}

/// Coordinates theme, sidebar, loading, rendering and reveal
pub struct PageController {
    config: PageConfig,
    theme: ThemeController<Arc<dyn PreferenceStore>>,
    source: ContentSource,
}

impl PageController {
    pub fn new(config: PageConfig, store: impl PreferenceStore + 'static) -> Self {
        let store: Arc<dyn PreferenceStore> = Arc::new(store);
        let theme = ThemeController::new(store, config.default_theme);
        let source = ContentSource::new(config.content.clone());
        Self {
            config,
            theme,
            source,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn stagger(&self) -> StaggerStep {
        self.config.stagger
    }

    /// State at page-ready: restored theme, closed sidebar, placeholders
    pub fn initial_state(&self) -> PageState {
        let restored = self.theme.restore();
        tracing::info!(
            theme = %restored.theme,
            persisted = restored.persisted,
            "Theme restored"
        );
        PageState::new(restored.theme)
    }

    /// Apply the opposite theme, then persist it.
    ///
    /// The new theme stays applied even when persisting fails; the error is
    /// returned so the caller can report it.
    pub fn toggle_theme(&self, state: &mut PageState) -> LifelineResult<Theme> {
        let next = state.theme.toggled();
        state.theme = next;
        self.theme.persist(next)?;
        Ok(next)
    }

    pub fn toggle_menu(&self, state: &mut PageState) {
        state.sidebar.toggle();
    }

    /// The single fetch of the content document
    pub async fn load(&self) -> LifelineResult<ContentDocument> {
        self.source.fetch().await
    }

    /// Fold a load result into the page.
    ///
    /// Success replaces hero text and renders every event; failure leaves
    /// the hero alone and shows only [`LOAD_ERROR_MESSAGE`].
    pub fn apply_load(&self, state: &mut PageState, result: LifelineResult<ContentDocument>) {
        match result {
            Ok(content) => {
                let cards = render_timeline(&content.events, self.config.stagger);
                state.hero = HeroText::from(content.project_info);
                state.reveals.clear();
                state.timeline = TimelineState::Loaded(cards);
            }
            Err(e) => {
                tracing::error!("Error loading content document: {}", e);
                state.timeline = TimelineState::Failed(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Record that a card crossed the reveal threshold.
    ///
    /// Returns true when the card became visible now; indices outside the
    /// rendered timeline are ignored.
    pub fn reveal(&self, state: &mut PageState, index: usize) -> bool {
        if index >= state.timeline.cards().len() {
            tracing::debug!(index, "Ignoring reveal for unknown card");
            return false;
        }
        state.reveals.reveal(index)
    }
}
