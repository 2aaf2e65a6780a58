//! Trigger and response events, and the htmx response header names.
//!
//! A [`TriggerEvent`] is what the client posted: the id and name of the
//! element that fired, the swap target, and the form values. A
//! [`ResponseEvent`] is what a component made of it: a semantic event name,
//! a value, optional response headers, and the component that should be
//! rendered as the answer.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::component::Component;
use crate::value::{PropertyMap, StringMap};

// ---------------------------------------------------------------------------
// Response headers
// ---------------------------------------------------------------------------

/// htmx response header names.
pub mod header {
    /// Client-side redirect without a full page reload.
    pub const LOCATION: &str = "HX-Location";
    /// Push a new url into the history stack.
    pub const PUSH_URL: &str = "HX-Push-Url";
    /// Client-side redirect to a new location.
    pub const REDIRECT: &str = "HX-Redirect";
    /// `"true"` forces a full page refresh.
    pub const REFRESH: &str = "HX-Refresh";
    /// Replace the current url in the location bar.
    pub const REPLACE_URL: &str = "HX-Replace-Url";
    /// Override how the response is swapped.
    pub const RESWAP: &str = "HX-Reswap";
    /// CSS selector replacing the target of the swap.
    pub const RETARGET: &str = "HX-Retarget";
    /// CSS selector choosing which part of the response is swapped in.
    pub const RESELECT: &str = "HX-Reselect";
    pub const TRIGGER: &str = "HX-Trigger";
    pub const TRIGGER_AFTER_SETTLE: &str = "HX-Trigger-After-Settle";
    pub const TRIGGER_AFTER_SWAP: &str = "HX-Trigger-After-Swap";

    pub const ALL: &[&str] = &[
        LOCATION,
        PUSH_URL,
        REDIRECT,
        REFRESH,
        REPLACE_URL,
        RESWAP,
        RETARGET,
        RESELECT,
        TRIGGER,
        TRIGGER_AFTER_SETTLE,
        TRIGGER_AFTER_SWAP,
    ];
}

// ---------------------------------------------------------------------------
// TriggerEvent
// ---------------------------------------------------------------------------

/// A client interaction posted back to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Id of the element that fired.
    pub id: String,
    /// Name attribute of the element that fired.
    pub name: String,
    /// Id of the swap target element.
    pub target: String,
    /// Posted form values. A key may repeat.
    pub values: BTreeMap<String, Vec<String>>,
}

impl TriggerEvent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the target element id (builder).
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Append a form value (builder).
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_value(key, value);
        self
    }

    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// First posted value for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First posted value for `key`, or `""`.
    pub fn value_or_empty(&self, key: &str) -> &str {
        self.value(key).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// ResponseEvent
// ---------------------------------------------------------------------------

/// The outcome of handling a [`TriggerEvent`].
pub struct ResponseEvent {
    /// The component that answers the request; rendered into the response body.
    pub trigger: Option<Box<dyn Component>>,
    /// Name of the component that produced the event.
    pub trigger_name: String,
    /// Semantic event name, e.g. `"change"` or `"row_selected"`.
    pub name: String,
    pub value: Value,
    /// htmx response headers, see [`header`].
    pub header: StringMap,
}

impl ResponseEvent {
    /// An event produced by `trigger`, named after the trigger's `name` property.
    pub fn new(trigger: &dyn Component, name: impl Into<String>) -> Self {
        Self {
            trigger_name: trigger.base().name.clone(),
            trigger: Some(trigger.box_clone()),
            name: name.into(),
            value: Value::Null,
            header: StringMap::new(),
        }
    }

    /// An event with no answering component.
    pub fn detached(trigger_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            trigger: None,
            trigger_name: trigger_name.into(),
            name: name.into(),
            value: Value::Null,
            header: StringMap::new(),
        }
    }

    /// Set the value (builder).
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Add a response header (builder).
    pub fn with_header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.header.insert(key.to_owned(), value.into());
        self
    }

    /// Replace the answering component (builder).
    pub fn with_trigger(mut self, trigger: Box<dyn Component>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Downcast the answering component.
    pub fn trigger_as<T: Component>(&self) -> Option<&T> {
        self.trigger
            .as_ref()
            .and_then(|trigger| trigger.as_any().downcast_ref::<T>())
    }

    /// Mutable downcast of the answering component.
    pub fn trigger_as_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.trigger
            .as_mut()
            .and_then(|trigger| trigger.as_any_mut().downcast_mut::<T>())
    }

    /// The `data` property of the answering component, or an empty map.
    pub fn trigger_data(&self) -> PropertyMap {
        self.trigger
            .as_ref()
            .map(|trigger| trigger.base().data.clone())
            .unwrap_or_default()
    }

    /// Id of the answering component, or `""`.
    pub fn trigger_id(&self) -> &str {
        self.trigger
            .as_ref()
            .map_or("", |trigger| trigger.base().id.as_str())
    }
}

impl Clone for ResponseEvent {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.as_ref().map(|trigger| trigger.box_clone()),
            trigger_name: self.trigger_name.clone(),
            name: self.name.clone(),
            value: self.value.clone(),
            header: self.header.clone(),
        }
    }
}

impl fmt::Debug for ResponseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseEvent")
            .field("trigger", &self.trigger.as_ref().map(|t| t.component_type()))
            .field("trigger_id", &self.trigger_id())
            .field("trigger_name", &self.trigger_name)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("header", &self.header)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, ComponentExt};
    use crate::widgets::Label;
    use serde_json::json;

    // ── TriggerEvent ─────────────────────────────────────────────────

    #[test]
    fn trigger_values_first_wins() {
        let te = TriggerEvent::new("inp", "value")
            .with_value("value", "a")
            .with_value("value", "b");
        assert_eq!(te.value("value"), Some("a"));
        assert_eq!(te.values["value"].len(), 2);
        assert_eq!(te.value("missing"), None);
        assert_eq!(te.value_or_empty("missing"), "");
    }

    #[test]
    fn trigger_target_builder() {
        let te = TriggerEvent::new("a", "b").with_target("main");
        assert_eq!(te.target, "main");
    }

    // ── ResponseEvent ────────────────────────────────────────────────

    #[test]
    fn response_from_component() {
        let label = Label::new("Hello").with_id("lbl").prop("name", "greeting");
        let evt = ResponseEvent::new(&label, "click").with_value(json!(1));
        assert_eq!(evt.trigger_name, "greeting");
        assert_eq!(evt.trigger_id(), "lbl");
        assert_eq!(evt.trigger_as::<Label>().map(|l| l.value.as_str()), Some("Hello"));
    }

    #[test]
    fn response_trigger_can_be_edited() {
        let label = Label::new("Draft").with_id("lbl");
        let mut evt = ResponseEvent::new(&label, "click");
        if let Some(label) = evt.trigger_as_mut::<Label>() {
            label.value = "Final".into();
        }
        assert_eq!(evt.trigger_as::<Label>().map(|l| l.value.as_str()), Some("Final"));
        assert!(evt.trigger_as_mut::<crate::widgets::Button>().is_none());
    }

    #[test]
    fn response_headers_builder() {
        let evt = ResponseEvent::detached("x", "y")
            .with_header(header::RETARGET, "#main")
            .with_header(header::RESWAP, "innerHTML");
        assert_eq!(evt.header.len(), 2);
        assert_eq!(evt.header[header::RETARGET], "#main");
        assert_eq!(evt.trigger_id(), "");
        assert!(evt.trigger_data().is_empty());
    }

    #[test]
    fn response_clone_copies_trigger() {
        let label = Label::new("Hi").with_id("lbl");
        let evt = ResponseEvent::new(&label, "click");
        let copy = evt.clone();
        assert_eq!(copy.trigger.as_ref().map(|t| t.component_type()), Some("label"));
        assert!(format!("{copy:?}").contains("lbl"));
    }

    #[test]
    fn all_headers_listed() {
        assert_eq!(header::ALL.len(), 11);
        assert!(header::ALL.iter().all(|h| h.starts_with("HX-")));
    }
}
