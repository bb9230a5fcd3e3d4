use serde::Serialize;

use crate::RouteParams;

pub const SITE_TITLE: &str = "AstraSim";
pub const SITE_DESCRIPTION: &str = "Scenario-first Monte Carlo simulator with factor-aware events.";

/// Prefix a page-specific title with the site name.
pub fn site_title(page: &str) -> String {
    format!("{SITE_TITLE} — {page}")
}

/// Metadata a page declares; unset fields fall back to the site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageMetadata {
    pub fn inherit() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resolve(self, defaults: &DocumentMetadata) -> DocumentMetadata {
        DocumentMetadata {
            title: self.title.unwrap_or_else(|| defaults.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| defaults.description.clone()),
        }
    }
}

/// Fully resolved `<head>` metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
}

impl DocumentMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self::new(SITE_TITLE, SITE_DESCRIPTION)
    }
}

/// Metadata for a resolved route, as handed to head writers and link previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMetadata {
    pub path: String,
    pub pattern: String,
    pub page: &'static str,
    pub params: RouteParams,
    pub title: String,
    pub description: String,
}
