//! InputBox: a modal message box, optionally asking for a value.

use maud::{html, Markup};
use serde_json::{json, Value};

use super::button::Button;
use super::input::{Input, InputType};
use super::select::{select_options, select_options_value, Select, SelectOption};
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, target_value, value_response, BaseComponent,
    Component, ComponentExt,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{to_boolean, to_string, PropertyMap};

pub const COMPONENT_TYPE_INPUTBOX: &str = "inputbox";

pub const INPUTBOX_EVENT_OK: &str = "input_ok";
pub const INPUTBOX_EVENT_CANCEL: &str = "input_cancel";
pub const INPUTBOX_EVENT_VALUE_CHANGE: &str = "input_value";

const SLOT_BTN_OK: &str = "btn_ok";
const SLOT_BTN_CANCEL: &str = "btn_cancel";
const SLOT_INPUT_VALUE: &str = "input_value";
const SLOT_SELECT_VALUE: &str = "select_value";

string_enum! {
    pub enum InputBoxType {
        /// OK and Cancel buttons.
        Cancel => "IBOX_CANCEL",
        /// A single OK button.
        Ok => "IBOX_OK",
        /// A text input with OK and Cancel.
        Input => "IBOX_INPUT",
        /// A drop-down list with OK and Cancel.
        Select => "IBOX_SELECT",
    }
    default Cancel
}

#[derive(Debug, Clone)]
pub struct InputBox {
    pub base: BaseComponent,
    pub input_type: InputBoxType,
    pub value: String,
    /// Choices of an [`InputBoxType::Select`] box.
    pub value_options: Vec<SelectOption>,
    pub title: String,
    pub message: String,
    pub info: String,
    /// Caller data returned with every event.
    pub tag: String,
    pub label_ok: String,
    pub label_cancel: String,
    /// Focus the OK button instead of Cancel.
    pub default_ok: bool,
}

impl Default for InputBox {
    fn default() -> Self {
        let labels = labels();
        Self {
            base: BaseComponent::default(),
            input_type: InputBoxType::Cancel,
            value: String::new(),
            value_options: Vec::new(),
            title: labels.inputbox_title.clone(),
            message: String::new(),
            info: String::new(),
            tag: String::new(),
            label_ok: labels.inputbox_ok.clone(),
            label_cancel: labels.inputbox_cancel.clone(),
            default_ok: false,
        }
    }
}

impl InputBox {
    pub fn new(input_type: InputBoxType, message: impl Into<String>) -> Self {
        Self {
            input_type,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn button(&self, slot: &str, label: &str, icon: &str, primary: bool, focus: bool) -> Button {
        Button::with_base(self.base.child(slot), label)
            .prop("button_style", if primary { "primary" } else { "" })
            .prop("icon", icon)
            .prop("full", true)
            .prop("auto_focus", focus)
            .prop("selected", focus)
    }

    fn btn_ok(&self) -> Button {
        self.button(SLOT_BTN_OK, &self.label_ok, "Check", true, self.default_ok)
    }

    fn btn_cancel(&self) -> Button {
        self.button(SLOT_BTN_CANCEL, &self.label_cancel, "Times", false, false)
    }

    fn input_value(&self) -> Input {
        Input::with_base(self.base.child(SLOT_INPUT_VALUE))
            .prop("type", InputType::Text)
            .prop("label", self.message.as_str())
            .prop("auto_focus", true)
            .prop("full", true)
            .with_style(json!({"border-radius": "0", "margin": "1px 0 2px"}))
            .prop("value", Value::from(self.value.as_str()))
    }

    fn select_value(&self) -> Select {
        Select::with_base(self.base.child(SLOT_SELECT_VALUE), self.value_options.clone())
            .with_style(json!({"border-radius": "0", "margin": "1px 0 2px"}))
            .prop("value", Value::from(self.value.as_str()))
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let name = match evt.trigger_name.as_str() {
            SLOT_BTN_OK => INPUTBOX_EVENT_OK,
            SLOT_INPUT_VALUE | SLOT_SELECT_VALUE => {
                self.set_property("value", evt.value.clone());
                INPUTBOX_EVENT_VALUE_CHANGE
            }
            _ => INPUTBOX_EVENT_CANCEL,
        };
        let evt = ResponseEvent::new(&*self, name)
            .with_value(json!({"value": self.value, "tag": self.tag}));
        self.base.respond(evt)
    }
}

impl Component for InputBox {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_INPUTBOX
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("input_type", self.input_type.into()),
            ("value", Value::from(self.value.as_str())),
            ("value_options", select_options_value(&self.value_options)),
            ("title", Value::from(self.title.as_str())),
            ("message", Value::from(self.message.as_str())),
            ("info", Value::from(self.info.as_str())),
            ("tag", Value::from(self.tag.as_str())),
            ("label_ok", Value::from(self.label_ok.as_str())),
            ("label_cancel", Value::from(self.label_cancel.as_str())),
            ("default_ok", Value::from(self.default_ok)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "input_type" => check_enum_value(value, InputBoxType::Cancel).into(),
            "value_options" => select_options_value(&select_options(value)),
            "title" => Value::from(to_string(value, &labels().inputbox_title)),
            "label_ok" => Value::from(to_string(value, &labels().inputbox_ok)),
            "label_cancel" => Value::from(to_string(value, &labels().inputbox_cancel)),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "input_type" => {
                self.input_type = check_enum_value(&value, InputBoxType::Cancel);
                self.input_type.into()
            }
            "value_options" => {
                self.value_options = select_options(&value);
                select_options_value(&self.value_options)
            }
            "value" | "title" | "message" | "info" | "tag" | "label_ok" | "label_cancel" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "value" => self.value = text.clone(),
                    "title" => self.title = text.clone(),
                    "message" => self.message = text.clone(),
                    "info" => self.info = text.clone(),
                    "tag" => self.tag = text.clone(),
                    "label_ok" => self.label_ok = text.clone(),
                    _ => self.label_cancel = text.clone(),
                }
                Value::from(text)
            }
            "default_ok" => {
                self.default_ok = to_boolean(&value, false);
                Value::from(self.default_ok)
            }
            "target" => {
                self.base.ensure_id();
                self.base.target = target_value(&value, &self.base.id);
                Value::from(self.base.target.as_str())
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let Some(slot) = self.base.route(&event.id).map(str::to_owned) else {
            return value_response(&*self, event);
        };
        let evt = match slot.as_str() {
            SLOT_BTN_OK => self.btn_ok().handle_request(event),
            SLOT_BTN_CANCEL => self.btn_cancel().handle_request(event),
            SLOT_INPUT_VALUE => self.input_value().handle_request(event),
            SLOT_SELECT_VALUE => self.select_value().handle_request(event),
            _ => return value_response(&*self, event),
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let value_input = match self.input_type {
            InputBoxType::Input => Some(self.input_value().render()?),
            InputBoxType::Select => Some(self.select_value().render()?),
            InputBoxType::Cancel | InputBoxType::Ok => None,
        };
        let with_cancel = self.input_type != InputBoxType::Ok;
        let btn_cancel = if with_cancel {
            Some(self.btn_cancel().render()?)
        } else {
            None
        };
        let btn_ok = self.btn_ok().render()?;
        let ok_class = if with_cancel { "cell padding-small half" } else { "cell padding-small" };
        Ok(html! {
            div id=(self.base.id) name=(self.base.name) class=(self.base.class_with(&["row"]))
                style=[self.base.style_attr()] {
                div class="modal" { div class="dialog" { div class="panel" {
                    div class="panel-title" {
                        div class="cell title-cell" { span { (self.title) } }
                    }
                    div class="section" { div class="row full container" {
                        div class="bold" { (self.message) }
                        @if !self.info.is_empty() { div { (self.info) } }
                        @if let Some(value_input) = value_input {
                            div class="section-small-top" { (value_input) }
                        }
                    } }
                    div class="section buttons" { div class="row full container" {
                        @if let Some(btn_cancel) = btn_cancel {
                            div class="cell padding-small half" { (btn_cancel) }
                        }
                        div class=(ok_class) { (btn_ok) }
                    } }
                } } }
            }
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
