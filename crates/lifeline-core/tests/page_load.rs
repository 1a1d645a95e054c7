//! End-to-end page loading tests
//!
//! Drives the controller against real content documents on disk and over
//! a throwaway local HTTP server.

use std::fs;

use lifeline_core::{
    ContentLocation, EventIcon, HeroText, LifelineError, MemoryStore, PageConfig, PageController,
    PreferenceStore, StaggerStep, Storage, Theme, TimelineState, LOAD_ERROR_MESSAGE, THEME_KEY,
};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SAMPLE: &str = r#"{
  "project_info": {
    "title": "ژیانی من",
    "subtitle": "A short history",
    "footer_text": "© 2024"
  },
  "events": [
    { "icon": "👶", "year": 1990, "age": 0, "title": "Born", "description": "Hello world" },
    { "icon": "fa-solid fa-school", "year": "1996", "age": "6", "title": "School", "description": "First day" },
    { "icon": "<b>x</b>", "year": 2008, "age": 18, "title": "<script>", "description": "a & b" }
  ]
}"#;

fn config_for(location: ContentLocation, data_dir: &std::path::Path) -> PageConfig {
    PageConfig {
        content: location,
        data_dir: data_dir.to_path_buf(),
        default_theme: Theme::Light,
        stagger: StaggerStep::from_millis(100),
    }
}

/// Serve one canned HTTP response per connection, forever
async fn serve(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

// ============================================================================
// Filesystem source
// ============================================================================

#[tokio::test]
async fn test_load_from_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.json"), SAMPLE).unwrap();

    let config = config_for(ContentLocation::Directory(temp.path().to_path_buf()), temp.path());
    let controller = PageController::new(config, MemoryStore::new());
    let mut state = controller.initial_state();

    let result = controller.load().await;
    controller.apply_load(&mut state, result);

    assert_eq!(state.hero.title, "ژیانی من");
    assert_eq!(state.hero.document_title(), "ژیانی من");
    assert_eq!(state.hero.footer_text, "© 2024");

    let cards = state.timeline.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Born");
    assert_eq!(cards[0].badge, "1990 | تەمەن: 0");
    assert_eq!(cards[1].badge, "1996 | تەمەن: 6");
    assert_eq!(cards[1].icon, EventIcon::IconClass("fa-solid fa-school".to_string()));

    // Untrusted-looking fields pass through as plain text
    assert_eq!(cards[2].title, "<script>");
    assert_eq!(cards[2].icon, EventIcon::Glyph("<b>x</b>".to_string()));
    assert_eq!(cards[2].description, "a & b");

    let delays: Vec<_> = cards.iter().map(|c| c.transition_delay()).collect();
    assert_eq!(delays, vec!["0ms", "100ms", "200ms"]);
}

#[tokio::test]
async fn test_missing_document_shows_error() {
    let temp = TempDir::new().unwrap();

    let config = config_for(ContentLocation::Directory(temp.path().to_path_buf()), temp.path());
    let controller = PageController::new(config, MemoryStore::new());
    let mut state = controller.initial_state();

    let result = controller.load().await;
    assert!(matches!(result, Err(LifelineError::Io(_))));

    controller.apply_load(&mut state, result);
    assert_eq!(state.timeline, TimelineState::Failed(LOAD_ERROR_MESSAGE.to_string()));
    assert_eq!(state.hero, HeroText::placeholder());
}

#[tokio::test]
async fn test_malformed_document_shows_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.json"), r#"{"project_info": {}}"#).unwrap();

    let config = config_for(ContentLocation::Directory(temp.path().to_path_buf()), temp.path());
    let controller = PageController::new(config, MemoryStore::new());
    let mut state = controller.initial_state();

    let result = controller.load().await;
    assert!(matches!(result, Err(LifelineError::Parse(_))));

    controller.apply_load(&mut state, result);
    assert!(state.timeline.cards().is_empty());
    assert_eq!(state.timeline.error_message(), Some(LOAD_ERROR_MESSAGE));
}

// ============================================================================
// HTTP source
// ============================================================================

#[tokio::test]
async fn test_load_over_http() {
    let base = serve("200 OK", SAMPLE).await;
    let temp = TempDir::new().unwrap();

    let location = ContentLocation::parse(&base).unwrap();
    let controller = PageController::new(config_for(location, temp.path()), MemoryStore::new());
    let mut state = controller.initial_state();

    let result = controller.load().await;
    controller.apply_load(&mut state, result);

    assert_eq!(state.timeline.cards().len(), 3);
    assert_eq!(state.hero.subtitle, "A short history");
}

#[tokio::test]
async fn test_http_error_status_shows_error() {
    let base = serve("404 Not Found", "{}").await;
    let temp = TempDir::new().unwrap();

    let location = ContentLocation::parse(&base).unwrap();
    let controller = PageController::new(config_for(location, temp.path()), MemoryStore::new());
    let mut state = controller.initial_state();

    let result = controller.load().await;
    assert!(matches!(result, Err(LifelineError::Status { status: 404, .. })));

    controller.apply_load(&mut state, result);
    assert_eq!(state.timeline.error_message(), Some(LOAD_ERROR_MESSAGE));
    assert!(state.timeline.cards().is_empty());
    assert_eq!(state.hero, HeroText::placeholder());
}

#[tokio::test]
async fn test_http_transport_failure_shows_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let temp = TempDir::new().unwrap();
    let location = ContentLocation::parse(&format!("http://{}", addr)).unwrap();
    let controller = PageController::new(config_for(location, temp.path()), MemoryStore::new());
    let mut state = controller.initial_state();

    let result = controller.load().await;
    assert!(matches!(result, Err(LifelineError::Http(_))));

    controller.apply_load(&mut state, result);
    assert_eq!(state.timeline.error_message(), Some(LOAD_ERROR_MESSAGE));
}

// ============================================================================
// Theme persistence across page loads
// ============================================================================

#[test]
fn test_theme_survives_restart() {
    let temp = TempDir::new().unwrap();
    let config = config_for(ContentLocation::Directory(temp.path().to_path_buf()), temp.path());

    {
        let storage = Storage::open_in(temp.path()).unwrap();
        let controller = PageController::new(config.clone(), storage);
        let mut state = controller.initial_state();
        assert_eq!(state.theme, Theme::Light);
        controller.toggle_theme(&mut state).unwrap();
    }

    let storage = Storage::open_in(temp.path()).unwrap();
    assert_eq!(storage.get(THEME_KEY).unwrap(), Some("dark".to_string()));

    let controller = PageController::new(config, storage);
    let state = controller.initial_state();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.theme.icon_class(), "fa-solid fa-sun");
}

#[test]
fn test_dark_default_is_not_written() {
    let temp = TempDir::new().unwrap();
    let mut config = config_for(ContentLocation::Directory(temp.path().to_path_buf()), temp.path());
    config.default_theme = Theme::Dark;

    let store = MemoryStore::new();
    let controller = PageController::new(config, store.clone());
    let state = controller.initial_state();

    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.theme.icon_class(), "fa-solid fa-sun");
    assert_eq!(store.get(THEME_KEY).unwrap(), None);
}
