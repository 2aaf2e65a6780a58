//! Icon: an inline SVG from the built-in icon table.

use maud::{html, Markup, PreEscaped};
use serde_json::Value;

use crate::component::{component_boilerplate, BaseComponent, Component, ComponentExt};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{float_value, to_float, to_string, PropertyMap};

pub const COMPONENT_TYPE_ICON: &str = "icon";
pub const ICON_EVENT_CLICK: &str = "click";
pub const ICON_DEFAULT: &str = "Exclamation";

/// 24x24 path data keyed by icon name.
const ICON_PATHS: &[(&str, &str)] = &[
    ("Bars", "M3 5h18v2H3zM3 11h18v2H3zM3 17h18v2H3z"),
    ("Calendar", "M5 4h2V2h2v2h6V2h2v2h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm0 6v10h14V10z"),
    ("Check", "M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z"),
    ("CheckSquare", "M19 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V5a2 2 0 0 0-2-2zm-9 14-5-5 1.4-1.4 3.6 3.6 7.6-7.6L19 8z"),
    ("Clock", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 11h-5v-2h3V6h2z"),
    ("Close", "M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"),
    ("Cog", "M19.4 13a7.5 7.5 0 0 0 0-2l2.1-1.6-2-3.5-2.5 1a7.4 7.4 0 0 0-1.7-1L15 3h-4l-.4 2.9a7.4 7.4 0 0 0-1.7 1l-2.5-1-2 3.5L6.6 11a7.5 7.5 0 0 0 0 2l-2.1 1.6 2 3.5 2.5-1a7.4 7.4 0 0 0 1.7 1L11 21h4l.4-2.9a7.4 7.4 0 0 0 1.7-1l2.5 1 2-3.5zM13 15.5a3.5 3.5 0 1 1 0-7 3.5 3.5 0 0 1 0 7z"),
    ("Edit", "M3 17.2V21h3.8L17.8 9.9l-3.7-3.7zM20.7 7a1 1 0 0 0 0-1.4l-2.3-2.3a1 1 0 0 0-1.4 0l-1.8 1.8 3.7 3.7z"),
    ("Exclamation", "M11 4h2v11h-2zM11 17h2v3h-2z"),
    ("ExclamationTriangle", "M1 21h22L12 2zm12-3h-2v-2h2zm0-4h-2v-4h2z"),
    ("FileText", "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM8 12h8v2H8zm0 4h8v2H8zm5-7V3.5L18.5 9z"),
    ("Filter", "M3 4h18l-7 8.5V19l-4 2v-8.5z"),
    ("Home", "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"),
    ("InfoCircle", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-6h2zm0-8h-2V7h2z"),
    ("Link", "M3.9 12a3.1 3.1 0 0 1 3.1-3.1h4V7H7a5 5 0 0 0 0 10h4v-1.9H7A3.1 3.1 0 0 1 3.9 12zM8 13h8v-2H8zm9-6h-4v1.9h4a3.1 3.1 0 0 1 0 6.2h-4V17h4a5 5 0 0 0 0-10z"),
    ("Plus", "M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6z"),
    ("QuestionCircle", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 17h-2v-2h2zm2.1-7.8-.9.9c-.7.7-1.2 1.3-1.2 2.9h-2v-.5c0-1.1.4-2.1 1.2-2.8l1.2-1.3a2 2 0 1 0-3.4-1.4H7a5 5 0 1 1 8.1 4.2z"),
    ("Search", "M15.5 14h-.8l-.3-.3A6.5 6.5 0 1 0 14 15.5l.3.3v.8l5 5 1.5-1.5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z"),
    ("SortDown", "M7 10l5 5 5-5z"),
    ("SortUp", "M7 14l5-5 5 5z"),
    ("SquareEmpty", "M19 5v14H5V5h14m0-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V5a2 2 0 0 0-2-2z"),
    ("Times", "M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"),
    ("ToggleOff", "M17 7H7a5 5 0 0 0 0 10h10a5 5 0 0 0 0-10zM7 15a3 3 0 1 1 0-6 3 3 0 0 1 0 6z"),
    ("ToggleOn", "M17 7H7a5 5 0 0 0 0 10h10a5 5 0 0 0 0-10zm0 8a3 3 0 1 1 0-6 3 3 0 0 1 0 6z"),
    ("Upload", "M9 16h6v-6h4l-7-7-7 7h4zm-4 2h14v2H5z"),
];

/// Path data for `key`, if it is a known icon.
pub fn icon_path(key: &str) -> Option<&'static str> {
    ICON_PATHS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, path)| *path)
}

/// Names of all built-in icons.
pub fn icon_keys() -> impl Iterator<Item = &'static str> {
    ICON_PATHS.iter().map(|(name, _)| *name)
}

/// Static SVG markup for an icon, for templates that do not need a full component.
pub fn svg_icon(key: &str, width: f64, height: f64, style: Option<&str>) -> Markup {
    let path = icon_path(key).or_else(|| icon_path(ICON_DEFAULT)).unwrap_or("");
    html! {
        svg width=(width) height=(height) viewBox="0 0 24 24" style=[style] {
            path d=(PreEscaped(path)) {}
        }
    }
}

// ---------------------------------------------------------------------------
// Icon
// ---------------------------------------------------------------------------

/// A clickable SVG icon.
#[derive(Debug, Clone)]
pub struct Icon {
    pub base: BaseComponent,
    /// Icon key, e.g. `"Search"`.
    pub value: String,
    pub width: f64,
    pub height: f64,
    /// Fill color.
    pub color: String,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            value: ICON_DEFAULT.to_owned(),
            width: 24.0,
            height: 24.0,
            color: String::new(),
        }
    }
}

impl Icon {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the size in pixels (builder).
    pub fn size(self, width: f64, height: f64) -> Self {
        self.prop("width", width).prop("height", height)
    }
}

impl Component for Icon {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_ICON
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", Value::from(self.value.as_str())),
            ("width", float_value(self.width)),
            ("height", float_value(self.height)),
            ("color", Value::from(self.color.as_str())),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "value" => {
                let key = to_string(value, ICON_DEFAULT);
                Value::from(if icon_path(&key).is_some() { key } else { ICON_DEFAULT.to_owned() })
            }
            "width" | "height" => float_value(to_float(value, 24.0)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "value" => {
                self.value = to_string(&self.validation(name, &value), ICON_DEFAULT);
                Value::from(self.value.as_str())
            }
            "width" => {
                self.width = to_float(&value, 24.0);
                float_value(self.width)
            }
            "height" => {
                self.height = to_float(&value, 24.0);
                float_value(self.height)
            }
            "color" => {
                self.color = to_string(&value, "");
                Value::from(self.color.as_str())
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, _event: &TriggerEvent) -> ResponseEvent {
        let evt = ResponseEvent::new(self, ICON_EVENT_CLICK).with_value(self.value.as_str());
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, true);
        let path = icon_path(&self.value).unwrap_or("");
        let markup = html! {
            svg id=(self.base.id) name=(self.base.name)
                class=(self.base.class_with(&["icon"]))
                width=(self.width) height=(self.height)
                viewBox="0 0 24 24"
                fill=[(!self.color.is_empty()).then_some(self.color.as_str())]
                style=[self.base.style_attr()]
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                path d=(PreEscaped(path)) {}
            }
        };
        self.base.register(COMPONENT_TYPE_ICON);
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_icon_uses_default() {
        let icon = Icon::new("Search");
        assert_eq!(icon.validation("value", &json!("Nope")), json!(ICON_DEFAULT));
        assert_eq!(icon.validation("value", &json!("Plus")), json!("Plus"));
    }

    #[test]
    fn size_defaults() {
        let icon = Icon::default();
        assert_eq!(icon.validation("width", &json!(0.0)), json!(24));
        assert_eq!(icon.validation("height", &json!("16")), json!(16));
    }

    #[test]
    fn every_key_resolves() {
        assert!(icon_keys().all(|key| icon_path(key).is_some()));
        assert!(icon_path("Missing").is_none());
    }

    #[test]
    fn render_svg() {
        let mut icon = Icon::new("Check").with_id("ico").size(16.0, 16.0);
        let html = icon.render().unwrap().into_string();
        assert!(html.starts_with(r#"<svg id="ico" name="ico" class="icon" width="16" height="16""#));
        assert!(html.contains("<path d=\"M9 16.2"));
        assert!(!html.contains("hx-post"));
    }

    #[test]
    fn click_reports_key() {
        let mut icon = Icon::new("Cog").with_id("ico").with_event_url("/event");
        icon.render().unwrap();
        assert!(icon.base.store.is_registered("ico"));
        let evt = icon.on_request(&TriggerEvent::new("ico", "ico"));
        assert_eq!(evt.name, ICON_EVENT_CLICK);
        assert_eq!(evt.value, json!("Cog"));
    }

    #[test]
    fn svg_helper_falls_back() {
        let html = svg_icon("Nope", 20.0, 20.0, None).into_string();
        assert!(html.contains("M11 4h2v11h-2z"));
    }
}
