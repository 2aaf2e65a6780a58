//! Base component: the property set shared by every component.
//!
//! Identity (`id`, `name`), htmx wiring (`event_url`, `target`, `swap`,
//! `indicator`, `sync`), presentation (`class`, `style`) and free-form
//! `data`. Components delegate unknown property names here. It also carries
//! the request store handle, the response callback and the init flag that
//! suppresses request recording while properties are being normalised.

use std::any::Any;
use std::fmt;

use maud::{html, Markup};
use serde_json::Value;

use super::enums::{check_enum_value, Indicator, Swap, SyncMode};
use super::store::RequestStore;
use super::traits::{Component, ResponseHandler};
use crate::error::RenderError;
use crate::event::message::ResponseEvent;
use crate::render::{class_attr, style_attr};
use crate::value::{
    component_id, merge_string_map, merge_value_map, string_map_value, to_string,
    to_string_list, to_string_map, to_value_map, PropertyMap, StringMap,
};

pub const COMPONENT_TYPE_BASE: &str = "base";

/// Normalise an htmx target: `"this"` stays, anything else gets a `#` prefix.
/// An empty value yields `default`.
pub fn target_value(value: &Value, default: &str) -> String {
    let target = to_string(value, default);
    if target == "this" || target.starts_with('#') || target.is_empty() {
        target
    } else {
        format!("#{target}")
    }
}

/// Whether a routed `slot` is `name` itself or one of its descendants
/// (`{name}_...`).
pub fn in_slot(slot: &str, name: &str) -> bool {
    slot == name
        || slot
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('_'))
}

// ---------------------------------------------------------------------------
// BaseComponent
// ---------------------------------------------------------------------------

/// Properties and plumbing common to all components.
#[derive(Clone, Default)]
pub struct BaseComponent {
    /// Unique element id. Generated when left empty.
    pub id: String,
    /// The element's `name` attribute. Defaults to the id.
    pub name: String,
    /// Where `hx-post` sends events. Empty means the component is static.
    pub event_url: String,
    /// `hx-target`: `"this"` or a `#id` selector.
    pub target: String,
    pub swap: Swap,
    pub indicator: Indicator,
    pub sync: SyncMode,
    /// Extra CSS class names.
    pub class: Vec<String>,
    /// Inline style declarations.
    pub style: StringMap,
    /// Arbitrary data carried with the component.
    pub data: PropertyMap,
    pub store: RequestStore,
    pub on_response: Option<ResponseHandler>,
    pub(crate) init: bool,
}

impl fmt::Debug for BaseComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseComponent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("event_url", &self.event_url)
            .field("target", &self.target)
            .field("swap", &self.swap)
            .field("indicator", &self.indicator)
            .field("sync", &self.sync)
            .field("class", &self.class)
            .field("style", &self.style)
            .field("data", &self.data)
            .field("on_response", &self.on_response.is_some())
            .finish()
    }
}

impl BaseComponent {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Base properties as a map.
    pub fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        props.insert("id".into(), Value::from(self.id.as_str()));
        props.insert("name".into(), Value::from(self.name.as_str()));
        props.insert("event_url".into(), Value::from(self.event_url.as_str()));
        props.insert("target".into(), Value::from(self.target.as_str()));
        props.insert("swap".into(), self.swap.into());
        props.insert("indicator".into(), self.indicator.into());
        props.insert("sync".into(), self.sync.into());
        props.insert("class".into(), Value::from(self.class.clone()));
        props.insert("style".into(), string_map_value(&self.style));
        props.insert("data".into(), Value::Object(self.data.clone()));
        props
    }

    /// Base properties overlaid with a component's own.
    pub fn merge_properties<const N: usize>(&self, own: [(&str, Value); N]) -> PropertyMap {
        let mut props = self.properties();
        for (name, value) in own {
            props.insert(name.to_owned(), value);
        }
        props
    }

    pub fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "id" => Value::from(to_string(value, &component_id())),
            "name" => Value::from(to_string(value, &self.id)),
            "event_url" => Value::from(to_string(value, "")),
            "target" => Value::from(target_value(value, "this")),
            "swap" => check_enum_value(value, Swap::OuterHtml).into(),
            "indicator" => check_enum_value(value, Indicator::None).into(),
            "sync" => check_enum_value(value, SyncMode::None).into(),
            "class" => Value::from(to_string_list(value)),
            "style" => {
                let overlay = to_string_map(value).unwrap_or_default();
                string_map_value(&merge_string_map(&self.style, &overlay))
            }
            "data" => {
                Value::Object(merge_value_map(&self.data, &to_value_map(value)))
            }
            _ => value.clone(),
        }
    }

    pub fn set_property(&mut self, name: &str, value: Value) -> Value {
        if name == "name" {
            self.ensure_id();
        }
        let stored = match name {
            "id" | "name" | "event_url" | "target" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "id" => self.id = text.clone(),
                    "name" => self.name = text.clone(),
                    "event_url" => self.event_url = text.clone(),
                    _ => self.target = text.clone(),
                }
                Value::from(text)
            }
            "swap" => {
                self.swap = check_enum_value(&value, Swap::OuterHtml);
                self.swap.into()
            }
            "indicator" => {
                self.indicator = check_enum_value(&value, Indicator::None);
                self.indicator.into()
            }
            "sync" => {
                self.sync = check_enum_value(&value, SyncMode::None);
                self.sync.into()
            }
            "class" => {
                self.class = to_string_list(&value);
                Value::from(self.class.clone())
            }
            "style" => {
                let overlay = to_string_map(&value).unwrap_or_default();
                self.style = merge_string_map(&self.style, &overlay);
                string_map_value(&self.style)
            }
            "data" => {
                self.data = merge_value_map(&self.data, &to_value_map(&value));
                Value::Object(self.data.clone())
            }
            _ => return value,
        };
        self.set_request_value(name, &stored);
        stored
    }

    /// Record a stored property value in the request store.
    ///
    /// Skipped while initialising and for components without an id.
    pub fn set_request_value(&self, name: &str, value: &Value) {
        if !self.init && !self.id.is_empty() {
            self.store.record(&self.id, name, value.clone());
        }
    }

    /// Generate an id if none is set yet.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.set_property("id", Value::Null);
        }
    }

    /// Hand `evt` to the response callback, if one is installed.
    pub fn respond(&self, evt: ResponseEvent) -> ResponseEvent {
        match &self.on_response {
            Some(handler) => handler(evt),
            None => evt,
        }
    }

    /// Register the id as an event source when an event URL is configured.
    pub fn register(&self, component_type: &str) {
        if !self.event_url.is_empty() && !self.id.is_empty() {
            self.store.register(&self.id, component_type);
        }
    }

    /// The part of `id` after this component's `{id}_` prefix.
    ///
    /// Child components are named `{parent_id}_{slot}`, so this is how a
    /// parent finds which of its children a trigger belongs to.
    pub fn route<'a>(&self, id: &'a str) -> Option<&'a str> {
        if self.id.is_empty() {
            return None;
        }
        id.strip_prefix(self.id.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .filter(|rest| !rest.is_empty())
    }

    /// Base for a child in `slot`: id `{id}_{slot}`, name `slot`, and the
    /// parent's event URL, target and request store.
    pub fn child(&self, slot: &str) -> BaseComponent {
        BaseComponent {
            id: format!("{}_{}", self.id, slot),
            name: slot.to_owned(),
            event_url: self.event_url.clone(),
            target: self.target.clone(),
            store: self.store.clone(),
            ..BaseComponent::default()
        }
    }

    /// Base for a child that is displayed only and never posts events.
    pub fn static_child(&self, slot: &str) -> BaseComponent {
        BaseComponent {
            id: format!("{}_{}", self.id, slot),
            name: slot.to_owned(),
            store: self.store.clone(),
            ..BaseComponent::default()
        }
    }

    /// Class attribute value: `fixed` classes followed by the custom ones.
    pub fn class_with(&self, fixed: &[&str]) -> String {
        class_attr(fixed, &self.class)
    }

    /// Inline style attribute value, `None` when empty.
    pub fn style_attr(&self) -> Option<String> {
        style_attr(&self.style)
    }
}

impl Component for BaseComponent {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_BASE
    }

    fn base(&self) -> &BaseComponent {
        self
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        self
    }

    fn properties(&self) -> PropertyMap {
        BaseComponent::properties(self)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        Ok(html! {
            div id=(self.id) class=(self.class_with(&[])) style=[self.style_attr()] {}
        })
    }

    fn box_clone(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }

    fn as_dyn(&self) -> &dyn Component {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentExt;
    use crate::event::message::TriggerEvent;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    #[test]
    fn id_defaults_to_generated() {
        let base = BaseComponent::default();
        let id = base.validation("id", &Value::Null);
        assert!(id.as_str().unwrap().starts_with("ID"));
        assert_eq!(base.validation("id", &json!("abc")), json!("abc"));
    }

    #[test]
    fn name_defaults_to_id() {
        let mut base = BaseComponent::new("comp");
        assert_eq!(base.set_property("name", Value::Null), json!("comp"));
        assert_eq!(base.set_property("name", json!("nm")), json!("nm"));
    }

    #[test]
    fn name_generates_missing_id() {
        let mut base = BaseComponent::default();
        let name = base.set_property("name", Value::Null);
        assert!(!base.id.is_empty());
        assert_eq!(name, json!(base.id));
    }

    #[test]
    fn target_prefix() {
        let base = BaseComponent::default();
        assert_eq!(base.validation("target", &Value::Null), json!("this"));
        assert_eq!(base.validation("target", &json!("this")), json!("this"));
        assert_eq!(base.validation("target", &json!("main")), json!("#main"));
        assert_eq!(base.validation("target", &json!("#main")), json!("#main"));
    }

    #[test]
    fn enum_defaults() {
        let base = BaseComponent::default();
        assert_eq!(base.validation("swap", &json!("sideways")), json!("outerHTML"));
        assert_eq!(base.validation("swap", &json!("innerHTML")), json!("innerHTML"));
        assert_eq!(base.validation("indicator", &json!("bogus")), json!(""));
        assert_eq!(base.validation("sync", &json!("drop")), json!("drop"));
    }

    #[test]
    fn unknown_name_passes_through() {
        let mut base = BaseComponent::new("b");
        assert_eq!(base.validation("nope", &json!(5)), json!(5));
        assert_eq!(base.set_property("nope", json!(5)), json!(5));
        assert!(base.get_property("nope").is_none());
        assert!(base.store.values("b").is_none());
    }

    // -----------------------------------------------------------------------
    // Set / get
    // -----------------------------------------------------------------------

    #[test]
    fn style_and_data_merge() {
        let mut base = BaseComponent::new("b");
        base.set_property("style", json!({"color": "red"}));
        base.set_property("style", json!({"padding": "4px"}));
        assert_eq!(base.style.len(), 2);
        base.set_property("data", json!({"a": 1}));
        let expected = base.validation("data", &json!({"b": 2}));
        base.set_property("data", json!({"b": 2}));
        assert_eq!(base.get_property("data"), Some(expected));
    }

    #[test]
    fn set_then_get_equals_validation() {
        let mut base = BaseComponent::new("b");
        for (name, value) in [
            ("target", json!("panel")),
            ("swap", json!("nope")),
            ("class", json!(["a", "b"])),
            ("event_url", json!("/event")),
        ] {
            let expected = base.validation(name, &value);
            base.set_property(name, value);
            assert_eq!(base.get_property(name), Some(expected), "{name}");
        }
    }

    #[test]
    fn set_records_request_value() {
        let mut base = BaseComponent::new("b");
        base.set_property("swap", json!("innerHTML"));
        assert_eq!(base.store.values("b").unwrap()["swap"], json!("innerHTML"));
    }

    #[test]
    fn init_does_not_record() {
        let mut base = BaseComponent::new("b");
        base.init_props();
        assert!(base.store.values("b").is_none());
        assert_eq!(base.target, "this");
        assert_eq!(base.name, "b");
    }

    #[test]
    fn builder_does_not_record() {
        let base = BaseComponent::new("b").prop("swap", "none");
        assert_eq!(base.swap, Swap::None);
        assert!(base.store.values("b").is_none());
    }

    #[test]
    fn init_restores_recorded_values() {
        let store = RequestStore::new();
        store.record("b", "class", json!(["restored"]));
        let mut base = BaseComponent::new("b").with_store(&store);
        base.init_props();
        assert_eq!(base.class, vec!["restored"]);
    }

    // -----------------------------------------------------------------------
    // Routing and events
    // -----------------------------------------------------------------------

    #[test]
    fn route_strips_prefix() {
        let base = BaseComponent::new("tbl");
        assert_eq!(base.route("tbl_filter"), Some("filter"));
        assert_eq!(base.route("tbl_top_pagination_btn"), Some("top_pagination_btn"));
        assert_eq!(base.route("tbl"), None);
        assert_eq!(base.route("tbl_"), None);
        assert_eq!(base.route("tblx_filter"), None);
    }

    #[test]
    fn slot_prefix_match() {
        assert!(in_slot("top_pagination", "top_pagination"));
        assert!(in_slot("top_pagination_pagination_btn_next", "top_pagination"));
        assert!(!in_slot("top_paginationx", "top_pagination"));
    }

    #[test]
    fn child_inherits_wiring() {
        let base = BaseComponent::new("p")
            .prop("event_url", "/event")
            .prop("target", "main");
        let child = base.child("btn");
        assert_eq!(child.id, "p_btn");
        assert_eq!(child.name, "btn");
        assert_eq!(child.target, "#main");
        assert!(child.store.same_store(&base.store));
        assert!(base.static_child("lbl").event_url.is_empty());
    }

    #[test]
    fn default_request_event() {
        let mut base = BaseComponent::new("b");
        let evt = base.on_request(&TriggerEvent::new("b", "field"));
        assert_eq!(evt.name, "value");
        assert_eq!(evt.trigger_name, "field");
    }

    #[test]
    fn response_callback_rewrites() {
        let mut base = BaseComponent::new("b").on_response(|mut evt| {
            evt.name = "rewritten".into();
            evt
        });
        let evt = base.on_request(&TriggerEvent::new("b", "x"));
        assert_eq!(evt.name, "rewritten");
    }

    #[test]
    fn register_only_with_event_url() {
        let mut base = BaseComponent::new("b");
        base.register("base");
        assert!(!base.store.is_registered("b"));
        base.event_url = "/event".into();
        base.register("base");
        assert!(base.store.is_registered("b"));
    }

    #[test]
    fn render_plain_div() {
        let mut base = BaseComponent::new("b").prop("style", json!({"color": "red"}));
        let html = base.render().unwrap().into_string();
        assert_eq!(html, r#"<div id="b" class="" style="color:red;"></div>"#);
    }
}
