//! Library configuration: default label texts and application shell defaults.
//!
//! [`Labels`] is a process-wide table loaded at most once (see [`init_labels`]);
//! components read it through [`labels`] when a text property is left empty.
//! [`LibraryConfig`] carries the document-level defaults used by the
//! application shell.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Default texts shown by components when no explicit label is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub table_yes: String,
    pub table_no: String,
    pub table_add: String,
    pub table_filter_placeholder: String,
    pub selector_title: String,
    pub selector_filter_placeholder: String,
    pub search_title: String,
    pub search_filter_placeholder: String,
    pub inputbox_title: String,
    pub inputbox_ok: String,
    pub inputbox_cancel: String,
    pub menubar_menu: String,
    pub menubar_hide: String,
    pub upload_placeholder: String,
    pub upload_toast_message: String,
    pub pagination_page: String,
    pub pagination_size: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            table_yes: "YES".into(),
            table_no: "NO".into(),
            table_add: String::new(),
            table_filter_placeholder: String::new(),
            selector_title: "Search for data".into(),
            selector_filter_placeholder: String::new(),
            search_title: "Search for data".into(),
            search_filter_placeholder: "Search conditions".into(),
            inputbox_title: "Warning".into(),
            inputbox_ok: "OK".into(),
            inputbox_cancel: "Cancel".into(),
            menubar_menu: "Menu".into(),
            menubar_hide: "Hide".into(),
            upload_placeholder: "Choose file to upload".into(),
            upload_toast_message: "Successful file upload".into(),
            pagination_page: "Page".into(),
            pagination_size: "Size".into(),
        }
    }
}

impl Labels {
    /// Parse a label table from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

static LABELS: OnceLock<Labels> = OnceLock::new();

/// Install the process-wide label table.
///
/// Must run before the first [`labels`] call; afterwards the table is fixed.
pub fn init_labels(labels: Labels) -> Result<(), StoreError> {
    LABELS
        .set(labels)
        .map_err(|_| StoreError::AlreadyInitialized)
}

/// The active label table (built-in defaults unless [`init_labels`] ran first).
pub fn labels() -> &'static Labels {
    LABELS.get_or_init(Labels::default)
}

// ---------------------------------------------------------------------------
// LibraryConfig
// ---------------------------------------------------------------------------

/// A `<link>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadLink {
    pub rel: String,
    pub href: String,
    #[serde(default, rename = "type")]
    pub link_type: String,
}

impl HeadLink {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            link_type: String::new(),
        }
    }

    pub fn with_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = link_type.into();
        self
    }
}

/// Scripts loaded by every application page.
pub const DEFAULT_SCRIPTS: &[&str] = &[
    "https://unpkg.com/htmx.org@2.0.2",
    "https://unpkg.com/htmx-ext-remove-me@2.0.0/remove-me.js",
];

pub const DEFAULT_EVENT_URL: &str = "/event";

/// Document-level defaults for the application shell.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Where components post their events.
    pub event_url: String,
    /// Script sources used when an application sets none.
    pub scripts: Vec<String>,
    /// Head links always emitted ahead of the application's own links.
    pub head_links: Vec<HeadLink>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            event_url: DEFAULT_EVENT_URL.to_owned(),
            scripts: DEFAULT_SCRIPTS.iter().map(|s| (*s).to_owned()).collect(),
            head_links: vec![
                HeadLink::new("preconnect", "https://fonts.gstatic.com"),
                HeadLink::new(
                    "stylesheet",
                    "https://fonts.googleapis.com/css2?family=Noto+Sans:ital,wght@0,400;0,700;1,400;1,700&display=swap",
                ),
            ],
        }
    }
}

impl LibraryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_url(mut self, event_url: impl Into<String>) -> Self {
        self.event_url = event_url.into();
        self
    }

    /// Replace the default scripts (builder).
    pub fn with_scripts<I, S>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts = scripts.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default head links (builder).
    pub fn with_head_links(mut self, links: Vec<HeadLink>) -> Self {
        self.head_links = links;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_default_texts() {
        let labels = Labels::default();
        assert_eq!(labels.table_yes, "YES");
        assert_eq!(labels.selector_title, "Search for data");
        assert_eq!(labels.inputbox_cancel, "Cancel");
    }

    #[test]
    fn labels_from_partial_json() {
        let labels = Labels::from_json(r#"{"table_yes": "IGEN", "menubar_menu": "Menü"}"#).unwrap();
        assert_eq!(labels.table_yes, "IGEN");
        assert_eq!(labels.menubar_menu, "Menü");
        assert_eq!(labels.table_no, "NO");
    }

    #[test]
    fn labels_from_bad_json() {
        assert!(Labels::from_json("[1, 2").is_err());
    }

    #[test]
    fn labels_are_fixed_once_read() {
        let _ = labels();
        assert!(init_labels(Labels::default()).is_err());
    }

    #[test]
    fn config_builder() {
        let config = LibraryConfig::new()
            .with_event_url("/ui/event")
            .with_scripts(["/static/htmx.js"])
            .with_head_links(vec![HeadLink::new("icon", "/favicon.svg").with_type("image/svg+xml")]);
        assert_eq!(config.event_url, "/ui/event");
        assert_eq!(config.scripts, vec!["/static/htmx.js"]);
        assert_eq!(config.head_links[0].link_type, "image/svg+xml");
    }

    #[test]
    fn default_config_loads_htmx() {
        let config = LibraryConfig::default();
        assert!(config.scripts[0].contains("htmx.org"));
        assert_eq!(config.head_links.len(), 2);
    }
}
