//! Field: one form control chosen by type.
//!
//! A field wraps exactly one input component (`{id}_{type}`) and configures
//! it from its `value` map, so forms can be described as data. Events of the
//! wrapped component are handed to the field's response callback unchanged.

use maud::Markup;
use serde_json::Value;

use super::button::Button;
use super::datetime::{DateTime, DateTimeType};
use super::input::{Input, InputType};
use super::label::Label;
use super::link::Link;
use super::list::List;
use super::number_input::NumberInput;
use super::select::Select;
use super::selector::Selector;
use super::toggle::Toggle;
use super::upload::Upload;
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, in_slot, value_response, BaseComponent, Component,
    ComponentExt, EnumValue,
};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{merge_value_map, to_value_map, PropertyMap};

pub const COMPONENT_TYPE_FIELD: &str = "field";

string_enum! {
    pub enum FieldType {
        Button => "button",
        /// A plain hyperlink; never posts events.
        UrlLink => "url",
        Text => "text",
        Area => "area",
        Color => "color",
        Password => "password",
        Integer => "integer",
        Float => "float",
        Date => "date",
        Time => "time",
        DateTime => "datetime-local",
        Bool => "bool",
        Select => "select",
        /// A clickable bordered label.
        Link => "link",
        Upload => "upload",
        Selector => "selector",
        List => "list",
    }
    default Text
}

#[derive(Debug, Clone, Default)]
pub struct Field {
    pub base: BaseComponent,
    pub field_type: FieldType,
    /// Properties of the wrapped component.
    pub value: PropertyMap,
}

impl Field {
    pub fn new(field_type: FieldType, value: Value) -> Self {
        Self {
            field_type,
            value: to_value_map(&value),
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// The wrapped component, configured from `value`.
    pub fn component(&self) -> Box<dyn Component> {
        let base = self.base.child(self.field_type.as_str());
        let mut component: Box<dyn Component> = match self.field_type {
            FieldType::Text | FieldType::Area | FieldType::Color | FieldType::Password => {
                let input_type = check_enum_value(&self.field_type.into(), InputType::Text);
                Input::with_base(base)
                    .prop("type", input_type)
                    .prop("full", true)
                    .boxed()
            }
            FieldType::Integer | FieldType::Float => NumberInput::with_base(base)
                .prop("integer", self.field_type == FieldType::Integer)
                .prop("full", true)
                .boxed(),
            FieldType::Date | FieldType::Time | FieldType::DateTime => {
                let date_type = check_enum_value(&self.field_type.into(), DateTimeType::Date);
                DateTime::with_base(base, date_type).prop("full", true).boxed()
            }
            FieldType::Button => Button::with_base(base, "").prop("full", true).boxed(),
            FieldType::UrlLink => Link {
                base: self.base.static_child(self.field_type.as_str()),
                ..Link::default()
            }
            .prop("full", true)
            .boxed(),
            FieldType::Bool => Toggle::with_base(base)
                .prop("border", true)
                .prop("full", true)
                .boxed(),
            FieldType::Select => Select::with_base(base, Vec::new()).prop("full", true).boxed(),
            FieldType::Link => Label {
                base,
                ..Label::default()
            }
            .prop("border", true)
            .prop("full", true)
            .boxed(),
            FieldType::Upload => Upload::with_base(base).prop("full", true).boxed(),
            FieldType::Selector => Selector::with_base(base).prop("full", true).boxed(),
            FieldType::List => List::with_base(base).boxed(),
        };
        // Configuration, not user input: nothing is recorded in the store.
        let previous = std::mem::replace(&mut component.base_mut().init, true);
        // `value` last: it is validated against options, bounds and types set before it.
        let last: Vec<&str> = component.restore_last().iter().copied().chain(["value"]).collect();
        for (name, value) in self.value.iter().filter(|(name, _)| !last.contains(&name.as_str())) {
            component.set_property(name, value.clone());
        }
        for name in last {
            if let Some(value) = self.value.get(name) {
                component.set_property(name, value.clone());
            }
        }
        component.base_mut().init = previous;
        component
    }
}

impl Component for Field {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_FIELD
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("type", self.field_type.into()),
            ("value", Value::Object(self.value.clone())),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "type" => check_enum_value(value, FieldType::Text).into(),
            "value" => {
                let overlay = to_value_map(value);
                Value::Object(merge_value_map(&self.value, &overlay))
            }
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "type" => {
                self.field_type = check_enum_value(&value, FieldType::Text);
                self.field_type.into()
            }
            "value" => {
                let overlay = to_value_map(&value);
                self.value = merge_value_map(&self.value, &overlay);
                Value::Object(self.value.clone())
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let routed = self
            .base
            .route(&event.id)
            .is_some_and(|slot| in_slot(slot, self.field_type.as_str()));
        if !routed {
            return value_response(&*self, event);
        }
        let evt = self.component().handle_request(event);
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        self.component().render()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
