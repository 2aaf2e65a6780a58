//! Input widget: a single-line `<input>` or a multi-line `<textarea>`.

use maud::{html, Markup};
use serde_json::Value;

use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, BaseComponent, Component, EnumValue,
};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_integer, to_string, PropertyMap};

pub const COMPONENT_TYPE_INPUT: &str = "input";
pub const INPUT_EVENT_CHANGE: &str = "change";

string_enum! {
    /// Input kinds. `area` renders a `<textarea>`.
    pub enum InputType {
        Text => "text",
        Color => "color",
        Password => "password",
        Area => "area",
        Url => "url",
        Email => "email",
        Tel => "tel",
    }
    default Text
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A text input.
///
/// A change posts the new value under the input's `name`; the response
/// event carries the stored value.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub base: BaseComponent,
    pub input_type: InputType,
    pub value: String,
    pub placeholder: String,
    pub label: String,
    pub disabled: bool,
    pub readonly: bool,
    pub auto_focus: bool,
    /// Marks the value as rejected (`invalid` class).
    pub invalid: bool,
    pub accept: String,
    pub max_length: i64,
    pub size: i64,
    /// Visible rows of a textarea.
    pub rows: i64,
    pub full: bool,
}

impl Input {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl Component for Input {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_INPUT
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("type", self.input_type.into()),
            ("value", Value::from(self.value.as_str())),
            ("placeholder", Value::from(self.placeholder.as_str())),
            ("label", Value::from(self.label.as_str())),
            ("disabled", Value::from(self.disabled)),
            ("readonly", Value::from(self.readonly)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("invalid", Value::from(self.invalid)),
            ("accept", Value::from(self.accept.as_str())),
            ("max_length", Value::from(self.max_length)),
            ("size", Value::from(self.size)),
            ("rows", Value::from(self.rows)),
            ("full", Value::from(self.full)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "type" => check_enum_value(value, InputType::Text).into(),
            "max_length" | "size" | "rows" => Value::from(to_integer(value, 0).max(0)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "type" => {
                self.input_type = check_enum_value(&value, InputType::Text);
                self.input_type.into()
            }
            "value" | "placeholder" | "label" | "accept" => {
                let text = to_string(&value, "");
                match name {
                    "value" => self.value = text.clone(),
                    "placeholder" => self.placeholder = text.clone(),
                    "label" => self.label = text.clone(),
                    _ => self.accept = text.clone(),
                }
                Value::from(text)
            }
            "disabled" | "readonly" | "auto_focus" | "invalid" | "full" => {
                let flag = to_boolean(&value, false);
                match name {
                    "disabled" => self.disabled = flag,
                    "readonly" => self.readonly = flag,
                    "auto_focus" => self.auto_focus = flag,
                    "invalid" => self.invalid = flag,
                    _ => self.full = flag,
                }
                Value::from(flag)
            }
            "max_length" | "size" | "rows" => {
                let number = to_integer(&value, 0).max(0);
                match name {
                    "max_length" => self.max_length = number,
                    "size" => self.size = number,
                    _ => self.rows = number,
                }
                Value::from(number)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let value = self.set_property("value", Value::from(event.value_or_empty(&event.name)));
        let evt = ResponseEvent::new(&*self, INPUT_EVENT_CHANGE).with_value(value);
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, true);
        let positive = |number: i64| (number > 0).then_some(number);
        let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_owned());
        let class = self.base.class_with(&[
            if self.full { "full" } else { "" },
            if self.invalid { "invalid" } else { "" },
        ]);
        let markup = if self.input_type == InputType::Area {
            html! {
                textarea id=(self.base.id) name=(self.base.name)
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                    placeholder=[non_empty(&self.placeholder)]
                    readonly[self.readonly] disabled[self.disabled] autofocus[self.auto_focus]
                    aria-label=[non_empty(&self.label)]
                    maxlength=[positive(self.max_length)] size=[positive(self.size)]
                    rows=[positive(self.rows)]
                    class=(class) style=[self.base.style_attr()] {
                    (self.value)
                }
            }
        } else {
            html! {
                input id=(self.base.id) name=(self.base.name)
                    type=(self.input_type.as_str()) value=(self.value)
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                    placeholder=[non_empty(&self.placeholder)]
                    accept=[non_empty(&self.accept)]
                    readonly[self.readonly] disabled[self.disabled] autofocus[self.auto_focus]
                    aria-label=[non_empty(&self.label)]
                    maxlength=[positive(self.max_length)] size=[positive(self.size)]
                    class=(class) style=[self.base.style_attr()];
            }
        };
        self.base.register(COMPONENT_TYPE_INPUT);
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
    use serde_json::json;

    #[test]
    fn type_falls_back_to_text() {
        let input = Input::default();
        assert_eq!(input.validation("type", &json!("email")), json!("email"));
        assert_eq!(input.validation("type", &json!("number")), json!("text"));
        assert_eq!(input.validation("rows", &json!(-3)), json!(0));
    }

    #[test]
    fn render_text_input() {
        let mut input = Input::new("abc")
            .with_id("inp")
            .prop("placeholder", "Name")
            .prop("max_length", 8)
            .prop("full", true);
        let html = input.render().unwrap().into_string();
        assert_eq!(
            html,
            r#"<input id="inp" name="inp" type="text" value="abc" placeholder="Name" maxlength="8" class="full">"#
        );
    }

    #[test]
    fn area_renders_textarea() {
        let mut input = Input::new("line1\nline2")
            .with_id("txt")
            .prop("type", "area")
            .prop("rows", 4);
        let html = input.render().unwrap().into_string();
        assert!(html.starts_with(r#"<textarea id="txt""#));
        assert!(html.contains(r#"rows="4""#));
        assert!(html.ends_with("line1\nline2</textarea>"));
    }

    #[test]
    fn change_stores_posted_value() {
        let mut input = Input::default().with_id("inp").prop("name", "email");
        let te = TriggerEvent::new("inp", "email").with_value("email", "a@b.c");
        let evt = input.on_request(&te);
        assert_eq!(evt.name, INPUT_EVENT_CHANGE);
        assert_eq!(evt.value, json!("a@b.c"));
        assert_eq!(input.value, "a@b.c");
        assert_eq!(input.base.store.values("inp").unwrap()["value"], json!("a@b.c"));
    }

    #[test]
    fn callback_marks_invalid() {
        let mut input = Input::default().with_id("inp").on_response(|mut evt| {
            let valid = evt.value == json!("valid");
            if let Some(trigger) = evt.trigger.as_mut() {
                trigger.set_property("invalid", Value::from(!valid));
            }
            evt
        });
        let evt = input.on_request(&TriggerEvent::new("inp", "inp").with_value("inp", "nope"));
        assert_eq!(evt.trigger_as::<Input>().map(|i| i.invalid), Some(true));
    }
}
