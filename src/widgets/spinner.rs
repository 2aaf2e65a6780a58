//! Spinner: the htmx request indicator.
//!
//! Not an event source, so it carries no base properties. Components point
//! their `hx-indicator` at it by id.

use maud::{html, Markup};

pub const SPINNER_ID: &str = "spinner";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    pub id: String,
    /// Keep the rest of the page usable while a request runs.
    pub no_modal: bool,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            id: SPINNER_ID.to_owned(),
            no_modal: false,
        }
    }
}

impl Spinner {
    pub fn new(no_modal: bool) -> Self {
        Self {
            no_modal,
            ..Self::default()
        }
    }

    pub fn render(&self) -> Markup {
        let id = if self.id.is_empty() { SPINNER_ID } else { self.id.as_str() };
        html! {
            div id=(id) class=(if self.no_modal { "htmx-indicator" } else { "htmx-indicator modal" }) {
                div class="loading-middle" {
                    div class="loading" {
                        @for _ in 0..8 { div {} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_by_default() {
        let html = Spinner::default().render().into_string();
        assert!(html.starts_with(r#"<div id="spinner" class="htmx-indicator modal">"#));
        assert_eq!(html.matches("<div></div>").count(), 8);
    }

    #[test]
    fn empty_id_falls_back() {
        let spinner = Spinner {
            id: String::new(),
            no_modal: true,
        };
        let html = spinner.render().into_string();
        assert!(html.starts_with(r#"<div id="spinner" class="htmx-indicator">"#));
    }
}
