//! Button widget: a `<button>` element with an optional icon and badge.
//!
//! Buttons show a spinner indicator by default while their request is in
//! flight. A click reports the button's value, taken from the posted
//! `{id}_value` field or, failing that, from `data.value`.

use maud::{html, Markup};
use serde_json::Value;

use super::icon::Icon;
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, BaseComponent, Component, ComponentExt, EnumValue,
    Indicator, TextAlign,
};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_integer, to_string, PropertyMap};

pub const COMPONENT_TYPE_BUTTON: &str = "button";
pub const BUTTON_EVENT_CLICK: &str = "click";

string_enum! {
    /// The `type` attribute of a button.
    pub enum ButtonType {
        Button => "button",
        Reset => "reset",
        Submit => "submit",
    }
    default Button
}

string_enum! {
    pub enum ButtonStyle {
        Default => "",
        Primary => "primary",
        Border => "border",
    }
    default Default
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// An interactive button.
///
/// # Examples
///
/// ```ignore
/// let btn = Button::new("Save")
///     .with_id("save")
///     .prop("button_style", "primary")
///     .prop("icon", "Check");
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    pub base: BaseComponent,
    pub button_type: ButtonType,
    pub button_style: ButtonStyle,
    pub align: TextAlign,
    pub label: String,
    pub icon: String,
    pub disabled: bool,
    pub auto_focus: bool,
    pub full: bool,
    pub small: bool,
    pub selected: bool,
    pub hide_label: bool,
    /// Counter shown next to the label; hidden when 0.
    pub badge: i64,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            base: BaseComponent {
                indicator: Indicator::Spinner,
                ..BaseComponent::default()
            },
            button_type: ButtonType::Button,
            button_style: ButtonStyle::Default,
            align: TextAlign::Center,
            label: String::new(),
            icon: String::new(),
            disabled: false,
            auto_focus: false,
            full: false,
            small: false,
            selected: false,
            hide_label: false,
            badge: 0,
        }
    }
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A button whose base is already wired, used by composite components.
    pub fn with_base(base: BaseComponent, label: impl Into<String>) -> Self {
        Self {
            base: BaseComponent {
                indicator: Indicator::Spinner,
                ..base
            },
            ..Self::new(label)
        }
    }

    fn icon_markup(&self) -> Result<Markup, RenderError> {
        Icon {
            base: self.base.static_child("icon"),
            ..Icon::new(self.icon.as_str())
        }
        .prop("width", 20.0)
        .render()
    }
}

impl Component for Button {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_BUTTON
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("type", self.button_type.into()),
            ("button_style", self.button_style.into()),
            ("align", self.align.into()),
            ("label", Value::from(self.label.as_str())),
            ("icon", Value::from(self.icon.as_str())),
            ("disabled", Value::from(self.disabled)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
            ("small", Value::from(self.small)),
            ("selected", Value::from(self.selected)),
            ("hide_label", Value::from(self.hide_label)),
            ("badge", Value::from(self.badge)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "type" => check_enum_value(value, ButtonType::Button).into(),
            "button_style" => check_enum_value(value, ButtonStyle::Default).into(),
            "align" => check_enum_value(value, TextAlign::Center).into(),
            "indicator" => check_enum_value(value, Indicator::Spinner).into(),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "type" => {
                self.button_type = check_enum_value(&value, ButtonType::Button);
                self.button_type.into()
            }
            "button_style" => {
                self.button_style = check_enum_value(&value, ButtonStyle::Default);
                self.button_style.into()
            }
            "align" => {
                self.align = check_enum_value(&value, TextAlign::Center);
                self.align.into()
            }
            "indicator" => {
                self.base.indicator = check_enum_value(&value, Indicator::Spinner);
                self.base.indicator.into()
            }
            "label" => {
                self.label = to_string(&value, "");
                Value::from(self.label.as_str())
            }
            "icon" => {
                self.icon = to_string(&value, "");
                Value::from(self.icon.as_str())
            }
            "disabled" => {
                self.disabled = to_boolean(&value, false);
                Value::from(self.disabled)
            }
            "auto_focus" => {
                self.auto_focus = to_boolean(&value, false);
                Value::from(self.auto_focus)
            }
            "full" => {
                self.full = to_boolean(&value, false);
                Value::from(self.full)
            }
            "small" => {
                self.small = to_boolean(&value, false);
                Value::from(self.small)
            }
            "selected" => {
                self.selected = to_boolean(&value, false);
                Value::from(self.selected)
            }
            "hide_label" => {
                self.hide_label = to_boolean(&value, false);
                Value::from(self.hide_label)
            }
            "badge" => {
                self.badge = to_integer(&value, 0);
                Value::from(self.badge)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let posted = event.value(&format!("{}_value", self.base.id));
        let value = match posted {
            Some(value) => Value::from(value),
            None => self.base.data.get("value").cloned().unwrap_or(Value::Null),
        };
        let evt = ResponseEvent::new(&*self, BUTTON_EVENT_CLICK).with_value(value);
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, !self.disabled);
        let button_style = matches!(self.button_style, ButtonStyle::Primary | ButtonStyle::Border)
            .then_some(self.button_style.as_str());
        let label = (!self.label.is_empty()).then_some(self.label.as_str());
        let class = self.base.class_with(&[
            self.align.as_str(),
            if self.small { "small-button" } else { "" },
            if self.full { "full" } else { "" },
            if self.selected { "selected" } else { "" },
            if self.hide_label { "hidelabel" } else { "" },
        ]);
        let icon = if self.icon.is_empty() {
            None
        } else {
            Some(self.icon_markup()?)
        };
        let icon_right = self.align == TextAlign::Right;
        let markup = html! {
            button id=(self.base.id) name=(self.base.name) type=(self.button_type.as_str())
                button-type=[button_style]
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                disabled[self.disabled] autofocus[self.auto_focus]
                aria-label=[label] title=[label]
                class=(class) style=[self.base.style_attr()] {
                @if !icon_right {
                    @if let Some(icon) = &icon { (icon) }
                }
                span { (self.label) }
                @if icon_right {
                    @if let Some(icon) = &icon { (icon) }
                }
                @if self.badge != 0 {
                    span class="right" {
                        span class=(if self.selected { "badge selected-badge" } else { "badge" }) {
                            (self.badge)
                        }
                    }
                }
            }
        };
        self.base.register(COMPONENT_TYPE_BUTTON);
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

    // ---------------------------------------------------------------------------
    // Properties
    // ---------------------------------------------------------------------------

    #[test]
    fn defaults() {
        let btn = Button::new("OK");
        assert_eq!(btn.button_type, ButtonType::Button);
        assert_eq!(btn.align, TextAlign::Center);
        assert_eq!(btn.base.indicator, Indicator::Spinner);
        assert_eq!(btn.badge, 0);
    }

    #[test]
    fn enum_validation() {
        let btn = Button::new("OK");
        assert_eq!(btn.validation("type", &json!("submit")), json!("submit"));
        assert_eq!(btn.validation("type", &json!("link")), json!("button"));
        assert_eq!(btn.validation("button_style", &json!("fancy")), json!(""));
        assert_eq!(btn.validation("align", &json!("")), json!("center"));
        assert_eq!(btn.validation("indicator", &json!("")), json!("spinner"));
    }

    #[test]
    fn set_and_get() {
        let mut btn = Button::new("OK").with_id("b");
        btn.set_property("badge", json!("3"));
        assert_eq!(btn.get_property("badge"), Some(json!(3)));
        btn.set_property("disabled", json!("true"));
        assert!(btn.disabled);
        assert_eq!(btn.base.store.values("b").unwrap().len(), 2);
    }

    // ---------------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------------

    #[test]
    fn render_minimal() {
        let mut btn = Button::new("OK").with_id("b");
        let html = btn.render().unwrap().into_string();
        assert_eq!(
            html,
            r#"<button id="b" name="b" type="button" aria-label="OK" title="OK" class="center"><span>OK</span></button>"#
        );
    }

    #[test]
    fn render_wired_primary() {
        let mut btn = Button::new("Save")
            .with_id("b")
            .with_event_url("/event")
            .prop("button_style", "primary")
            .prop("badge", 2)
            .prop("selected", true);
        let html = btn.render().unwrap().into_string();
        assert!(html.contains(r#"button-type="primary""#));
        assert!(html.contains(r#"hx-post="/event" hx-target="this" hx-swap="outerHTML""#));
        assert!(html.contains(r##"hx-indicator="#spinner""##));
        assert!(html.contains(r#"<span class="badge selected-badge">2</span>"#));
        assert!(btn.base.store.is_registered("b"));
    }

    #[test]
    fn disabled_drops_htmx() {
        let mut btn = Button::new("No")
            .with_id("b")
            .with_event_url("/event")
            .prop("disabled", true);
        let html = btn.render().unwrap().into_string();
        assert!(html.contains(" disabled"));
        assert!(!html.contains("hx-post"));
    }

    #[test]
    fn icon_follows_align() {
        let mut left = Button::new("A").with_id("l").prop("icon", "Check");
        let html = left.render().unwrap().into_string();
        assert!(html.find("<svg") < html.find("<span>"));

        let mut right = Button::new("A")
            .with_id("r")
            .prop("icon", "Check")
            .prop("align", "align-right");
        let html = right.render().unwrap().into_string();
        assert!(html.find("<span>") < html.find("<svg"));
    }

    // ---------------------------------------------------------------------------
    // Events
    // ---------------------------------------------------------------------------

    #[test]
    fn click_prefers_posted_value() {
        let mut btn = Button::new("A").with_id("b").with_data(json!({"value": "data"}));
        let posted = TriggerEvent::new("b", "b").with_value("b_value", "form");
        assert_eq!(btn.on_request(&posted).value, json!("form"));
        let evt = btn.on_request(&TriggerEvent::new("b", "b"));
        assert_eq!(evt.name, BUTTON_EVENT_CLICK);
        assert_eq!(evt.value, json!("data"));
    }
}
