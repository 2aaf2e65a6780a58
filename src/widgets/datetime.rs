//! DateTime: a date, time or datetime-local input.
//!
//! Values are kept in the input's wire format (`YYYY-MM-DD`, `HH:MM` or
//! `YYYY-MM-DDTHH:MM`). An empty value defaults to the current local time
//! unless the input accepts nulls.

use chrono::Local;
use maud::{html, Markup};
use serde_json::Value;

use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, BaseComponent, Component, EnumValue, Swap,
};
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{string_to_datetime, to_boolean, to_string, truncate, PropertyMap};

pub const COMPONENT_TYPE_DATETIME: &str = "datetime";
pub const DATETIME_EVENT_CHANGE: &str = "datetime_change";

string_enum! {
    pub enum DateTimeType {
        Date => "date",
        Time => "time",
        DateTime => "datetime-local",
    }
    default Date
}

impl DateTimeType {
    /// chrono format of the wire value.
    pub fn layout(self) -> &'static str {
        match self {
            DateTimeType::Date => "%Y-%m-%d",
            DateTimeType::Time => "%H:%M",
            DateTimeType::DateTime => "%Y-%m-%dT%H:%M",
        }
    }

    /// Length of the wire value.
    pub fn value_length(self) -> usize {
        match self {
            DateTimeType::Date => 10,
            DateTimeType::Time => 5,
            DateTimeType::DateTime => 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DateTime {
    pub base: BaseComponent,
    pub date_type: DateTimeType,
    pub value: String,
    pub label: String,
    /// An empty value stays empty instead of defaulting to now.
    pub is_null: bool,
    /// Open the browser picker on focus.
    pub picker: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub auto_focus: bool,
    pub full: bool,
}

impl Default for DateTime {
    fn default() -> Self {
        Self {
            base: BaseComponent {
                swap: Swap::InnerHtml,
                ..BaseComponent::default()
            },
            date_type: DateTimeType::Date,
            value: String::new(),
            label: String::new(),
            is_null: false,
            picker: false,
            disabled: false,
            readonly: false,
            auto_focus: false,
            full: false,
        }
    }
}

impl DateTime {
    pub fn new(date_type: DateTimeType) -> Self {
        Self {
            date_type,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent, date_type: DateTimeType) -> Self {
        Self {
            base: BaseComponent {
                swap: Swap::InnerHtml,
                ..base
            },
            ..Self::new(date_type)
        }
    }

    fn default_value(&self) -> String {
        if self.is_null {
            return String::new();
        }
        Local::now().format(self.date_type.layout()).to_string()
    }

    fn check_value(&self, value: &Value) -> String {
        let text = to_string(value, &self.default_value());
        let text = match string_to_datetime(&text) {
            Some(parsed) => parsed.format(self.date_type.layout()).to_string(),
            None => text,
        };
        truncate(&text, self.date_type.value_length())
    }
}

impl Component for DateTime {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_DATETIME
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("type", self.date_type.into()),
            ("value", Value::from(self.value.as_str())),
            ("label", Value::from(self.label.as_str())),
            ("is_null", Value::from(self.is_null)),
            ("picker", Value::from(self.picker)),
            ("disabled", Value::from(self.disabled)),
            ("readonly", Value::from(self.readonly)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "type" => check_enum_value(value, DateTimeType::Date).into(),
            "value" => Value::from(self.check_value(value)),
            "swap" => check_enum_value(value, Swap::InnerHtml).into(),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "type" => {
                self.date_type = check_enum_value(&value, DateTimeType::Date);
                self.date_type.into()
            }
            "value" => {
                self.value = self.check_value(&value);
                Value::from(self.value.as_str())
            }
            "swap" => {
                self.base.swap = check_enum_value(&value, Swap::InnerHtml);
                self.base.swap.into()
            }
            "label" => {
                self.label = to_string(&value, "");
                Value::from(self.label.as_str())
            }
            "is_null" | "picker" | "disabled" | "readonly" | "auto_focus" | "full" => {
                let flag = to_boolean(&value, false);
                match name {
                    "is_null" => self.is_null = flag,
                    "picker" => self.picker = flag,
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

    /// A normalised value that differs from what was typed is swapped back
    /// into the page as a whole element.
    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let posted = event.value_or_empty(&event.name);
        let value = self.set_property("value", Value::from(posted));
        let mut evt = ResponseEvent::new(&*self, DATETIME_EVENT_CHANGE).with_value(value.clone());
        if value.as_str() != Some(posted) && self.base.swap == Swap::InnerHtml {
            evt = evt.with_header(header::RESWAP, Swap::OuterHtml.as_str());
        }
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, true);
        let trigger = hx.is_active().then_some("blur, keyup[keyCode==13]");
        let label = (!self.label.is_empty()).then_some(self.label.as_str());
        let class = self.base.class_with(&[if self.full { "full" } else { "" }]);
        let markup = html! {
            input id=(self.base.id) name=(self.base.name) type=(self.date_type.as_str())
                value=(self.value)
                hx-post=[hx.post] hx-trigger=[trigger] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                onfocus=[self.picker.then_some("this.showPicker()")]
                readonly[self.readonly] disabled[self.disabled] autofocus[self.auto_focus]
                aria-label=[label]
                class=(class) style=[self.base.style_attr()];
        };
        self.base.register(COMPONENT_TYPE_DATETIME);
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
    fn null_value_stays_empty() {
        let mut dt = DateTime::default().with_id("dt").prop("is_null", true);
        assert_eq!(dt.validation("value", &Value::Null), json!(""));
        let html = dt.render().unwrap().into_string();
        assert!(html.contains(r#"value="""#));
    }

    #[test]
    fn empty_value_defaults_to_now() {
        for (kind, length) in [
            (DateTimeType::Date, 10),
            (DateTimeType::Time, 5),
            (DateTimeType::DateTime, 16),
        ] {
            let dt = DateTime::new(kind);
            let value = dt.validation("value", &Value::Null);
            assert_eq!(value.as_str().map(str::len), Some(length), "{kind}");
        }
    }

    #[test]
    fn values_are_reformatted() {
        let date = DateTime::new(DateTimeType::Date);
        assert_eq!(date.validation("value", &json!("2024-03-05T10:20:30")), json!("2024-03-05"));
        let time = DateTime::new(DateTimeType::Time);
        assert_eq!(time.validation("value", &json!("2024-03-05 08:15")), json!("08:15"));
        let local = DateTime::new(DateTimeType::DateTime);
        assert_eq!(local.validation("value", &json!("2024-03-05")), json!("2024-03-05T00:00"));
    }

    #[test]
    fn swap_defaults_to_inner() {
        let dt = DateTime::default();
        assert_eq!(dt.base.swap, Swap::InnerHtml);
        assert_eq!(dt.validation("swap", &json!("")), json!("innerHTML"));
    }

    #[test]
    fn changed_value_reswaps() {
        let mut dt = DateTime::default().with_id("dt");
        let evt = dt.on_request(&TriggerEvent::new("dt", "dt").with_value("dt", "2024-03-05T10:00"));
        assert_eq!(evt.name, DATETIME_EVENT_CHANGE);
        assert_eq!(evt.value, json!("2024-03-05"));
        assert_eq!(evt.header[header::RESWAP], "outerHTML");

        let evt = dt.on_request(&TriggerEvent::new("dt", "dt").with_value("dt", "2024-03-06"));
        assert!(evt.header.is_empty());
    }

    #[test]
    fn render_picker() {
        let mut dt = DateTime::new(DateTimeType::Time)
            .with_id("dt")
            .with_event_url("/event")
            .prop("value", "09:30")
            .prop("picker", true);
        let html = dt.render().unwrap().into_string();
        assert!(html.contains(r#"type="time" value="09:30""#));
        assert!(html.contains(r#"hx-trigger="blur, keyup[keyCode==13]""#));
        assert!(html.contains(r#"hx-swap="innerHTML""#));
        assert!(html.contains(r#"onfocus="this.showPicker()""#));
    }
}
