//! Label: a bold text span, optionally framed and flanked by an icon.

use maud::{html, Markup};
use serde_json::Value;

use super::icon::Icon;
use crate::component::{component_boilerplate, BaseComponent, Component, ComponentExt};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{
    merge_string_map, string_map_value, to_boolean, to_string, to_string_map, PropertyMap,
    StringMap,
};

pub const COMPONENT_TYPE_LABEL: &str = "label";
pub const LABEL_EVENT_CLICK: &str = "click";

/// A text label. Clickable when an event URL is set.
#[derive(Debug, Clone, Default)]
pub struct Label {
    pub base: BaseComponent,
    pub value: String,
    /// Center the content of an icon label.
    pub centered: bool,
    pub border: bool,
    pub full: bool,
    pub left_icon: String,
    pub right_icon: String,
    /// Inline style of the icons. `color` also sets their fill.
    pub icon_style: StringMap,
}

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    fn icon(&self, slot: &str, key: &str) -> Result<Markup, RenderError> {
        let mut icon = Icon {
            base: self.base.static_child(slot),
            ..Icon::new(key)
        }
        .prop("width", 20.0)
        .prop("style", string_map_value(&self.icon_style));
        if let Some(color) = self.icon_style.get("color") {
            icon = icon.prop("color", color.as_str());
        }
        icon.render()
    }
}

impl Component for Label {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_LABEL
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", Value::from(self.value.as_str())),
            ("centered", Value::from(self.centered)),
            ("border", Value::from(self.border)),
            ("full", Value::from(self.full)),
            ("left_icon", Value::from(self.left_icon.as_str())),
            ("right_icon", Value::from(self.right_icon.as_str())),
            ("icon_style", string_map_value(&self.icon_style)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "icon_style" => {
                let overlay = to_string_map(value).unwrap_or_default();
                string_map_value(&merge_string_map(&self.icon_style, &overlay))
            }
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "value" => {
                self.value = to_string(&value, "");
                Value::from(self.value.as_str())
            }
            "centered" => {
                self.centered = to_boolean(&value, false);
                Value::from(self.centered)
            }
            "border" => {
                self.border = to_boolean(&value, false);
                Value::from(self.border)
            }
            "full" => {
                self.full = to_boolean(&value, false);
                Value::from(self.full)
            }
            "left_icon" => {
                self.left_icon = to_string(&value, "");
                Value::from(self.left_icon.as_str())
            }
            "right_icon" => {
                self.right_icon = to_string(&value, "");
                Value::from(self.right_icon.as_str())
            }
            "icon_style" => {
                let overlay = to_string_map(&value).unwrap_or_default();
                self.icon_style = merge_string_map(&self.icon_style, &overlay);
                string_map_value(&self.icon_style)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, _event: &TriggerEvent) -> ResponseEvent {
        let evt = ResponseEvent::new(&*self, LABEL_EVENT_CLICK).with_value(self.value.as_str());
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, true);
        let kind = if hx.is_active() { "label-link" } else { "label-text" };
        let style = self.base.style_attr();
        let markup = if !self.left_icon.is_empty() || !self.right_icon.is_empty() {
            let centered = !self.left_icon.is_empty() && self.centered;
            let class = self.base.class_with(&[
                "label row",
                if self.border { "label-border" } else { "" },
                if self.full { "full" } else { "" },
                kind,
                if centered { "centered" } else { "" },
            ]);
            let content = if !self.left_icon.is_empty() {
                let icon = self.icon("left_icon", &self.left_icon)?;
                html! {
                    div class="cell label-icon-left" { (icon) }
                    div class="cell label-info-left bold" style=[style] { (self.value) }
                }
            } else {
                let icon = self.icon("right_icon", &self.right_icon)?;
                html! {
                    div class="cell label-info-right bold" style=[style] { (self.value) }
                    div class="cell label-icon-right" { (icon) }
                }
            };
            html! {
                div id=(self.base.id) name=(self.base.name) class=(class)
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                    (content)
                }
            }
        } else if self.border {
            html! {
                div id=(self.base.id) name=(self.base.name)
                    class=(if self.full { "label-border full" } else { "label-border" })
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                    span class={ "label bold " (kind) } style=[style] { (self.value) }
                }
            }
        } else {
            html! {
                span id=(self.base.id) name=(self.base.name) class={ "label bold " (kind) }
                    style=[style]
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                    (self.value)
                }
            }
        };
        self.base.register(COMPONENT_TYPE_LABEL);
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
