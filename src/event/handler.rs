//! Transport boundary: an htmx request in, a rendered fragment out.
//!
//! [`TriggerEvent::from_request`] reads the htmx request headers and the
//! url-encoded form body. [`EventDispatcher`] routes the trigger into the
//! root component of a freshly built tree, and [`ResponseEvent::render`]
//! turns the answer into response headers and html.

use maud::Markup;

use super::message::{ResponseEvent, TriggerEvent};
use crate::component::Component;
use crate::value::StringMap;
use crate::widgets::toast::{toast_response, ToastType};

/// htmx request header names.
pub mod request {
    /// Present on every htmx request.
    pub const REQUEST: &str = "HX-Request";
    /// Id of the element that fired.
    pub const TRIGGER: &str = "HX-Trigger";
    /// Name of the element that fired.
    pub const TRIGGER_NAME: &str = "HX-Trigger-Name";
    /// Id of the swap target.
    pub const TARGET: &str = "HX-Target";
}

/// The error toast answering a trigger no component is registered for.
pub fn invalid_trigger_response(event: &TriggerEvent) -> ResponseEvent {
    toast_response(
        ToastType::Error,
        format!("Invalid parameter: {}", event.id),
        &event.name,
    )
}

impl TriggerEvent {
    /// Build a trigger from request headers and a url-encoded form body.
    ///
    /// Header names match case-insensitively. A missing trigger name falls
    /// back to the trigger id.
    pub fn from_request<'a, I>(headers: I, form: &str) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut event = TriggerEvent::default();
        for (key, value) in headers {
            if key.eq_ignore_ascii_case(request::TRIGGER) {
                event.id = value.to_owned();
            } else if key.eq_ignore_ascii_case(request::TRIGGER_NAME) {
                event.name = value.to_owned();
            } else if key.eq_ignore_ascii_case(request::TARGET) {
                event.target = value.to_owned();
            }
        }
        if event.name.is_empty() {
            event.name = event.id.clone();
        }
        for (key, value) in url::form_urlencoded::parse(form.as_bytes()) {
            event.add_value(key, value);
        }
        event
    }
}

impl ResponseEvent {
    /// Response headers and the html of the answering component.
    ///
    /// A component that fails to render is replaced by an error toast.
    pub fn render(self) -> (StringMap, String) {
        let Some(mut trigger) = self.trigger else {
            return (self.header, String::new());
        };
        match trigger.render() {
            Ok(markup) => (self.header, markup.into_string()),
            Err(err) => {
                tracing::warn!(id = %trigger.base().id, error = %err, "response render failed");
                let mut fallback = toast_response(ToastType::Error, err.to_string(), &self.trigger_name);
                let html = fallback
                    .trigger
                    .as_mut()
                    .and_then(|toast| toast.render().ok())
                    .map(Markup::into_string)
                    .unwrap_or_default();
                (fallback.header, html)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EventDispatcher
// ---------------------------------------------------------------------------

/// Routes posted triggers into a component tree.
///
/// The tree is rebuilt for every request, so it must share the request store
/// the previous render registered its event sources in.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    check_registration: bool,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            check_registration: true,
        }
    }

    /// Accept triggers whose id was never registered (builder).
    pub fn unchecked(mut self) -> Self {
        self.check_registration = false;
        self
    }

    /// Hand `event` to `root` and return its answer.
    ///
    /// Ids missing from the root's request store get an error toast.
    pub fn dispatch(&self, root: &mut dyn Component, event: &TriggerEvent) -> ResponseEvent {
        let component_type = root.base().store.component_type(&event.id);
        if self.check_registration && component_type.is_none() {
            tracing::warn!(id = %event.id, name = %event.name, "unregistered trigger");
            return invalid_trigger_response(event);
        }
        tracing::debug!(
            id = %event.id,
            name = %event.name,
            component_type = component_type.as_deref().unwrap_or(""),
            root = root.component_type(),
            "dispatching trigger"
        );
        root.handle_request(event)
    }

    /// [`dispatch`](Self::dispatch) followed by [`ResponseEvent::render`].
    pub fn respond(&self, root: &mut dyn Component, event: &TriggerEvent) -> (StringMap, String) {
        self.dispatch(root, event).render()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentExt, RequestStore};
    use crate::event::message::header;
    use crate::widgets::{Application, Label, Toggle, TOAST_CONTAINER};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // ── from_request ─────────────────────────────────────────────────

    #[test]
    fn trigger_from_headers_and_form() {
        let headers = [
            ("hx-request", "true"),
            ("hx-trigger", "tbl_filter"),
            ("HX-Trigger-Name", "filter"),
            ("HX-Target", "tbl"),
        ];
        let event = TriggerEvent::from_request(headers, "value=ab+c%26d&tag=1&tag=2");
        assert_eq!(event.id, "tbl_filter");
        assert_eq!(event.name, "filter");
        assert_eq!(event.target, "tbl");
        assert_eq!(event.value("value"), Some("ab c&d"));
        assert_eq!(event.values["tag"], vec!["1".to_owned(), "2".to_owned()]);
    }

    #[test]
    fn trigger_name_falls_back_to_id() {
        let event = TriggerEvent::from_request([("HX-Trigger", "btn")], "");
        assert_eq!(event.name, "btn");
        assert!(event.values.is_empty());
    }

    // ── dispatch ─────────────────────────────────────────────────────

    #[test]
    fn unregistered_trigger_gets_toast() {
        let mut root = Toggle::new(false).with_id("tg").with_event_url("/event");
        let evt = EventDispatcher::new().dispatch(&mut root, &TriggerEvent::new("tg", "tg"));
        assert_eq!(evt.header[header::RETARGET], TOAST_CONTAINER);
        assert_eq!(evt.trigger_id(), "");
    }

    #[test]
    fn registered_trigger_is_routed() {
        let store = RequestStore::new();
        let mut page = Toggle::new(false)
            .with_id("tg")
            .with_event_url("/event")
            .with_store(&store);
        page.render().unwrap();

        let mut rebuilt = Toggle::new(false)
            .with_id("tg")
            .with_event_url("/event")
            .with_store(&store);
        let evt = EventDispatcher::new().dispatch(&mut rebuilt, &TriggerEvent::new("tg", "tg"));
        assert_eq!(evt.name, "toggle_change");
        assert_eq!(evt.value, json!(true));
    }

    #[test]
    fn unchecked_dispatch_skips_registration() {
        let mut root = Toggle::new(true).with_id("tg");
        let evt = EventDispatcher::default()
            .unchecked()
            .dispatch(&mut root, &TriggerEvent::new("tg", "tg"));
        assert_eq!(evt.value, json!(false));
    }

    // ── render ───────────────────────────────────────────────────────

    #[test]
    fn render_headers_and_html() {
        let label = Label::new("Saved").with_id("msg");
        let evt = ResponseEvent::new(&label, "click").with_header(header::RETARGET, "#msg");
        let (headers, html) = evt.render();
        assert_eq!(headers[header::RETARGET], "#msg");
        assert!(html.contains("Saved"));
    }

    #[test]
    fn detached_renders_empty() {
        let (headers, html) = ResponseEvent::detached("x", "y").render();
        assert!(headers.is_empty());
        assert_eq!(html, "");
    }

    #[test]
    fn render_failure_becomes_toast() {
        let evt = ResponseEvent::detached("app", "value")
            .with_trigger(Application::new("Broken").with_id("app").boxed());
        let (headers, html) = evt.render();
        assert_eq!(headers[header::RESWAP], "innerHTML");
        assert!(html.contains(r#"type="error""#));
        assert!(html.contains("no child component for slot `main`"));
    }
}
