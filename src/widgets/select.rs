//! Select: a drop-down list of options.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{component_boilerplate, BaseComponent, Component};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_string, PropertyMap};

pub const COMPONENT_TYPE_SELECT: &str = "select";
pub const SELECT_EVENT_CHANGE: &str = "change";

/// One entry of a drop-down list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

impl From<&SelectOption> for Value {
    fn from(option: &SelectOption) -> Self {
        serde_json::json!({"value": option.value, "text": option.text})
    }
}

/// Parse a list of `{value, text}` maps; anything malformed yields an empty list.
pub fn select_options(value: &Value) -> Vec<SelectOption> {
    serde_json::from_value(value.clone()).unwrap_or_else(|err| {
        if !value.is_null() {
            tracing::debug!(error = %err, "select options replaced by empty list");
        }
        Vec::new()
    })
}

pub fn select_options_value(options: &[SelectOption]) -> Value {
    serde_json::to_value(options).unwrap_or(Value::Array(Vec::new()))
}

// ---------------------------------------------------------------------------
// Select
// ---------------------------------------------------------------------------

/// A `<select>` element.
///
/// The value is always one of the options, or `""` when `is_null` allows an
/// empty choice.
#[derive(Debug, Clone, Default)]
pub struct Select {
    pub base: BaseComponent,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub is_null: bool,
    pub label: String,
    pub disabled: bool,
    pub auto_focus: bool,
    pub full: bool,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent, options: Vec<SelectOption>) -> Self {
        Self {
            base,
            ..Self::new(options)
        }
    }

    fn check_value(&self, value: &Value) -> String {
        let value = to_string(value, "");
        if value.is_empty() && self.is_null {
            return value;
        }
        if self.options.iter().any(|opt| opt.value == value) {
            return value;
        }
        self.options
            .first()
            .map(|opt| opt.value.clone())
            .unwrap_or_default()
    }
}

impl Component for Select {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_SELECT
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("options", select_options_value(&self.options)),
            ("value", Value::from(self.value.as_str())),
            ("is_null", Value::from(self.is_null)),
            ("label", Value::from(self.label.as_str())),
            ("disabled", Value::from(self.disabled)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "options" => select_options_value(&select_options(value)),
            "value" => Value::from(self.check_value(value)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "options" => {
                self.options = select_options(&value);
                self.value = self.check_value(&Value::from(self.value.as_str()));
                select_options_value(&self.options)
            }
            "value" => {
                self.value = self.check_value(&value);
                Value::from(self.value.as_str())
            }
            "label" => {
                self.label = to_string(&value, "");
                Value::from(self.label.as_str())
            }
            "is_null" | "disabled" | "auto_focus" | "full" => {
                let flag = to_boolean(&value, false);
                match name {
                    "is_null" => self.is_null = flag,
                    "disabled" => self.disabled = flag,
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
        let evt = ResponseEvent::new(&*self, SELECT_EVENT_CHANGE).with_value(value);
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, true);
        let label = (!self.label.is_empty()).then_some(self.label.as_str());
        let class = self.base.class_with(&[if self.full { "full" } else { "" }]);
        let markup = html! {
            select id=(self.base.id) name=(self.base.name) value=(self.value)
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                disabled[self.disabled] autofocus[self.auto_focus]
                aria-label=[label]
                class=(class) style=[self.base.style_attr()] {
                @if self.is_null {
                    option selected[self.value.is_empty()] key="-1" value="" {}
                }
                @for (index, option) in self.options.iter().enumerate() {
                    option selected[option.value == self.value] key=(index) value=(option.value) {
                        (option.text)
                    }
                }
            }
        };
        self.base.register(COMPONENT_TYPE_SELECT);
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn colors() -> Vec<SelectOption> {
        vec![SelectOption::new("red", "Red"), SelectOption::new("blue", "Blue")]
    }

    #[test]
    fn unknown_value_takes_first_option() {
        let select = Select::new(colors());
        assert_eq!(select.validation("value", &json!("green")), json!("red"));
        assert_eq!(select.validation("value", &json!("blue")), json!("blue"));
        assert_eq!(Select::default().validation("value", &json!("x")), json!(""));
    }

    #[test]
    fn null_allows_empty() {
        let select = Select::new(colors()).prop("is_null", true);
        assert_eq!(select.validation("value", &json!("")), json!(""));
        assert_eq!(select.validation("value", &json!("green")), json!("red"));
    }

    #[test]
    fn options_revalidate_value() {
        let mut select = Select::new(colors()).prop("value", "blue");
        assert_eq!(select.value, "blue");
        select.set_property("options", json!([{"value": "a", "text": "A"}]));
        assert_eq!(select.value, "a");
    }

    #[test]
    fn malformed_options_are_empty() {
        let select = Select::default();
        assert_eq!(select.validation("options", &json!("nope")), json!([]));
        assert_eq!(
            select.validation("options", &json!([{"value": "x"}])),
            json!([{"value": "x", "text": ""}])
        );
    }

    #[test]
    fn render_options() {
        let mut select = Select::new(colors()).with_id("sel").prop("value", "blue");
        let html = select.render().unwrap().into_string();
        assert_eq!(
            html,
            concat!(
                r#"<select id="sel" name="sel" value="blue" class="">"#,
                r#"<option key="0" value="red">Red</option>"#,
                r#"<option selected key="1" value="blue">Blue</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn change_event() {
        let mut select = Select::new(colors()).with_id("sel");
        let evt = select.on_request(&TriggerEvent::new("sel", "sel").with_value("sel", "blue"));
        assert_eq!(evt.name, SELECT_EVENT_CHANGE);
        assert_eq!(evt.value, json!("blue"));
    }
}
