//! NumberInput: a numeric `<input>` with optional bounds.

use maud::{html, Markup};
use serde_json::Value;

use crate::component::{component_boilerplate, BaseComponent, Component};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{float_value, to_boolean, to_float, to_string, PropertyMap};

pub const COMPONENT_TYPE_NUMBER: &str = "number";
pub const NUMBER_EVENT_CHANGE: &str = "number_change";

/// A number input. The value is clamped to the enabled bounds and floored
/// when `integer` is set.
#[derive(Debug, Clone, Default)]
pub struct NumberInput {
    pub base: BaseComponent,
    pub value: f64,
    pub integer: bool,
    pub set_min: bool,
    pub min_value: f64,
    pub set_max: bool,
    pub max_value: f64,
    pub label: String,
    pub disabled: bool,
    pub readonly: bool,
    pub auto_focus: bool,
    pub full: bool,
}

impl NumberInput {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if self.set_max && value > self.max_value {
            value = self.max_value;
        }
        if self.set_min && value < self.min_value {
            value = self.min_value;
        }
        if self.integer {
            value = value.floor();
        }
        value
    }
}

impl Component for NumberInput {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_NUMBER
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", float_value(self.value)),
            ("integer", Value::from(self.integer)),
            ("set_min", Value::from(self.set_min)),
            ("min_value", float_value(self.min_value)),
            ("set_max", Value::from(self.set_max)),
            ("max_value", float_value(self.max_value)),
            ("label", Value::from(self.label.as_str())),
            ("disabled", Value::from(self.disabled)),
            ("readonly", Value::from(self.readonly)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "value" => float_value(self.clamp(to_float(value, 0.0))),
            "min_value" | "max_value" => float_value(to_float(value, 0.0)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "value" => {
                self.value = self.clamp(to_float(&value, 0.0));
                float_value(self.value)
            }
            "min_value" => {
                self.min_value = to_float(&value, 0.0);
                float_value(self.min_value)
            }
            "max_value" => {
                self.max_value = to_float(&value, 0.0);
                float_value(self.max_value)
            }
            "label" => {
                self.label = to_string(&value, "");
                Value::from(self.label.as_str())
            }
            "integer" | "set_min" | "set_max" | "disabled" | "readonly" | "auto_focus" | "full" => {
                let flag = to_boolean(&value, false);
                match name {
                    "integer" => self.integer = flag,
                    "set_min" => self.set_min = flag,
                    "set_max" => self.set_max = flag,
                    "disabled" => self.disabled = flag,
                    "readonly" => self.readonly = flag,
                    "auto_focus" => self.auto_focus = flag,
                    _ => self.full = flag,
                }
                Value::from(flag)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let value = self.set_property("value", Value::from(event.value_or_empty(&event.name)));
        let evt = ResponseEvent::new(&*self, NUMBER_EVENT_CHANGE).with_value(value);
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, true);
        let label = (!self.label.is_empty()).then_some(self.label.as_str());
        let class = self.base.class_with(&[if self.full { "full" } else { "" }]);
        let markup = html! {
            input id=(self.base.id) name=(self.base.name) type="number" value=(self.value)
                step=(if self.integer { "1" } else { "any" })
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                readonly[self.readonly] disabled[self.disabled] autofocus[self.auto_focus]
                aria-label=[label]
                class=(class) style=[self.base.style_attr()];
        };
        self.base.register(COMPONENT_TYPE_NUMBER);
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
