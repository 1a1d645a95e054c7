//! Content document loading.
//!
//! The document is fetched exactly once per page load. There is no retry
//! and no timeout; a hung request leaves the page in its loading state.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::{LifelineError, LifelineResult};
use crate::types::ContentDocument;

/// Name of the content document under its location
pub const CONTENT_FILE: &str = "data.json";

/// Where the content document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    /// Local directory containing `data.json`
    Directory(PathBuf),
    /// HTTP(S) base URL; `data.json` is resolved relative to it
    Url(Url),
}

impl ContentLocation {
    /// Parse a location from user input.
    ///
    /// Anything starting with `http://` or `https://` is a URL base; every
    /// other string is a directory path.
    pub fn parse(input: &str) -> LifelineResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LifelineError::InvalidLocation("empty location".to_string()));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            // A base without a trailing slash would have its last segment
            // replaced by `data.json` when joined.
            let base = if input.ends_with('/') {
                input.to_string()
            } else {
                format!("{}/", input)
            };
            let url = Url::parse(&base)
                .map_err(|e| LifelineError::InvalidLocation(format!("{}: {}", input, e)))?;
            Ok(ContentLocation::Url(url))
        } else {
            Ok(ContentLocation::Directory(PathBuf::from(input)))
        }
    }

    /// Full location of the document, for requests and diagnostics
    pub fn document(&self) -> LifelineResult<DocumentLocation> {
        match self {
            ContentLocation::Directory(dir) => Ok(DocumentLocation::File(dir.join(CONTENT_FILE))),
            ContentLocation::Url(base) => base
                .join(CONTENT_FILE)
                .map(DocumentLocation::Url)
                .map_err(|e| LifelineError::InvalidLocation(e.to_string())),
        }
    }
}

/// Resolved location of `data.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    File(PathBuf),
    Url(Url),
}

impl fmt::Display for DocumentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentLocation::File(path) => write!(f, "{}", path.display()),
            DocumentLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Performs the single fetch of the content document
#[derive(Debug, Clone)]
pub struct ContentSource {
    location: ContentLocation,
    client: reqwest::Client,
}

impl ContentSource {
    pub fn new(location: ContentLocation) -> Self {
        Self {
            location,
            client: reqwest::Client::new(),
        }
    }

    pub fn location(&self) -> &ContentLocation {
        &self.location
    }

    /// Fetch and parse the document.
    ///
    /// A non-success status, a transport failure and a malformed body are
    /// all errors; callers treat them alike.
    pub async fn fetch(&self) -> LifelineResult<ContentDocument> {
        let document = self.location.document()?;
        tracing::debug!(location = %document, "Fetching content document");

        let bytes = match &document {
            DocumentLocation::File(path) => tokio::fs::read(path).await?,
            DocumentLocation::Url(url) => {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LifelineError::Status {
                        status: status.as_u16(),
                        location: url.to_string(),
                    });
                }
                response.bytes().await?.to_vec()
            }
        };

        let content = ContentDocument::from_json(&bytes)?;
        tracing::info!(
            location = %document,
            events = content.events.len(),
            "Content document loaded"
        );
        Ok(content)
    }
}
