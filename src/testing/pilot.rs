//! Pilot: drive a component tree through simulated htmx requests.
//!
//! A server rebuilds its component tree for every request and keeps only
//! the request store between them. The `Pilot` does the same with a builder
//! closure: [`load`](Pilot::load) renders the full page, and
//! [`post`](Pilot::post) rebuilds the tree, dispatches a trigger into it and
//! renders the answer.

use crate::component::{Component, RequestStore};
use crate::error::StoreError;
use crate::event::handler::EventDispatcher;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::StringMap;

use super::snapshot::render_to_string;

/// Builds a fresh component tree around the session's request store.
pub type TreeBuilder = Box<dyn Fn(&RequestStore) -> Box<dyn Component>>;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless request loop for testing.
///
/// # Examples
///
/// ```ignore
/// use hx_components::component::ComponentExt;
/// use hx_components::testing::Pilot;
/// use hx_components::widgets::Toggle;
///
/// let mut pilot = Pilot::new(|store| {
///     Toggle::new(false).with_id("tg").with_event_url("/event").with_store(store).boxed()
/// });
/// pilot.load();
/// pilot.click("tg");
/// assert!(pilot.html().contains("checked"));
/// ```
pub struct Pilot {
    build: TreeBuilder,
    store: RequestStore,
    dispatcher: EventDispatcher,
    html: String,
    headers: StringMap,
}

impl Pilot {
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(&RequestStore) -> Box<dyn Component> + 'static,
    {
        Self {
            build: Box::new(build),
            store: RequestStore::new(),
            dispatcher: EventDispatcher::new(),
            html: String::new(),
            headers: StringMap::new(),
        }
    }

    /// Start from a saved session (builder).
    pub fn with_store(mut self, store: RequestStore) -> Self {
        self.store = store;
        self
    }

    /// Use a custom dispatcher (builder).
    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Render the whole tree, like a page load.
    pub fn load(&mut self) -> &str {
        let mut root = (self.build)(&self.store);
        self.html = render_to_string(root.as_mut());
        self.headers.clear();
        &self.html
    }

    /// Rebuild the tree and hand it `event`, without rendering the answer.
    pub fn trigger(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let mut root = (self.build)(&self.store);
        self.dispatcher.dispatch(root.as_mut(), event)
    }

    /// Rebuild the tree, dispatch `event` and render the answer.
    pub fn post(&mut self, event: &TriggerEvent) -> &str {
        let (headers, html) = self.trigger(event).render();
        self.headers = headers;
        self.html = html;
        &self.html
    }

    /// Post a trigger fired by the element `id`.
    pub fn click(&mut self, id: &str) -> &str {
        self.post(&TriggerEvent::new(id, id))
    }

    /// Post a trigger from the element `id` carrying form values.
    pub fn submit(&mut self, id: &str, values: &[(&str, &str)]) -> &str {
        let mut event = TriggerEvent::new(id, id);
        for (key, value) in values {
            event.add_value(*key, *value);
        }
        self.post(&event)
    }

    /// Save and reload the request store, as a server persisting the
    /// session between requests would.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.store = RequestStore::from_json(&self.store.to_json()?)?;
        Ok(())
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Html of the last load or post.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Response headers of the last post.
    pub fn headers(&self) -> &StringMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn store(&self) -> &RequestStore {
        &self.store
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentExt;
    use crate::event::message::header;
    use crate::widgets::{Application, Input, Toggle, TOAST_CONTAINER};

    fn toggle_pilot() -> Pilot {
        Pilot::new(|store| {
            Toggle::new(false)
                .with_id("tg")
                .with_event_url("/event")
                .with_store(store)
                .boxed()
        })
    }

    // ── Loading ──────────────────────────────────────────────────────

    #[test]
    fn load_registers_event_sources() {
        let mut pilot = toggle_pilot();
        assert!(pilot.load().contains(r#"id="tg""#));
        assert!(pilot.store().is_registered("tg"));
        assert!(pilot.headers().is_empty());
    }

    // ── Posting ──────────────────────────────────────────────────────

    #[test]
    fn state_survives_rebuilds() {
        let mut pilot = toggle_pilot();
        pilot.load();
        assert!(pilot.click("tg").contains("checked"));
        assert!(!pilot.click("tg").contains("checked"));
        assert!(pilot.click("tg").contains("checked"));
    }

    #[test]
    fn click_before_load_is_rejected() {
        let mut pilot = toggle_pilot();
        pilot.click("tg");
        assert_eq!(pilot.header(header::RETARGET), Some(TOAST_CONTAINER));
        assert!(pilot.html().contains("Invalid parameter: tg"));
    }

    #[test]
    fn submit_carries_form_values() {
        let mut pilot = Pilot::new(|store| {
            Input::new("")
                .with_id("inp")
                .with_event_url("/event")
                .with_store(store)
                .boxed()
        });
        pilot.load();
        let evt = pilot.trigger(&TriggerEvent::new("inp", "inp").with_value("inp", "typed"));
        assert_eq!(evt.name, "change");
        assert_eq!(evt.value, serde_json::json!("typed"));
        assert!(pilot.submit("inp", &[("inp", "again")]).contains(r#"value="again""#));
    }

    #[test]
    fn persisted_session_keeps_state() {
        let mut pilot = toggle_pilot();
        pilot.load();
        pilot.click("tg");
        pilot.persist().unwrap();
        assert!(pilot.store().is_registered("tg"));
        assert!(!pilot.click("tg").contains("checked"));
    }

    #[test]
    fn application_page_round_trip() {
        let mut pilot = Pilot::new(|store| {
            Application::new("Demo")
                .with_id("app")
                .with_store(store)
                .with_main(Toggle::new(false).with_id("tg").boxed())
                .boxed()
        });
        assert!(pilot.load().starts_with("<!DOCTYPE html>"));
        let html = pilot.click("tg").to_owned();
        assert!(html.starts_with("<div id=\"tg\""));
        assert!(html.contains("checked"));
    }
}
