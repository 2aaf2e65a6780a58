//! Toast: a short notification that removes itself on click or after a timeout.

use maud::{html, Markup};
use serde_json::Value;

use super::icon::Icon;
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, BaseComponent, Component, ComponentExt, EnumValue,
    Swap,
};
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent};
use crate::value::{to_integer, to_string, PropertyMap};

pub const COMPONENT_TYPE_TOAST: &str = "toast";
/// Id of the page element toasts are swapped into.
pub const TOAST_CONTAINER: &str = "#toast-msg";

string_enum! {
    pub enum ToastType {
        Info => "info",
        Error => "error",
        Success => "success",
    }
    default Info
}

impl ToastType {
    pub fn icon(self) -> &'static str {
        match self {
            ToastType::Info => "InfoCircle",
            ToastType::Error => "ExclamationTriangle",
            ToastType::Success => "CheckSquare",
        }
    }
}

/// A notification message.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    pub base: BaseComponent,
    pub toast_type: ToastType,
    pub value: String,
    /// Seconds until the toast removes itself; 0 keeps it until clicked.
    pub timeout: i64,
}

impl Toast {
    pub fn new(toast_type: ToastType, value: impl Into<String>) -> Self {
        Self {
            toast_type,
            value: value.into(),
            ..Self::default()
        }
    }

    /// Timeout in seconds (builder).
    pub fn timeout(mut self, seconds: i64) -> Self {
        self.timeout = seconds.max(0);
        self
    }
}

/// A response that shows `message` as a toast instead of swapping the trigger.
///
/// Used for requests that cannot be answered by any component.
pub fn toast_response(toast_type: ToastType, message: impl Into<String>, trigger_name: &str) -> ResponseEvent {
    ResponseEvent::detached(trigger_name, trigger_name)
        .with_trigger(Toast::new(toast_type, message).boxed())
        .with_header(header::RETARGET, TOAST_CONTAINER)
        .with_header(header::RESWAP, Swap::InnerHtml.as_str())
}

impl Component for Toast {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_TOAST
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("type", self.toast_type.into()),
            ("value", Value::from(self.value.as_str())),
            ("timeout", Value::from(self.timeout)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "type" => check_enum_value(value, ToastType::Info).into(),
            "timeout" => Value::from(to_integer(value, 0).max(0)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "type" => {
                self.toast_type = check_enum_value(&value, ToastType::Info);
                self.toast_type.into()
            }
            "value" => {
                self.value = to_string(&value, "");
                Value::from(self.value.as_str())
            }
            "timeout" => {
                self.timeout = to_integer(&value, 0).max(0);
                Value::from(self.timeout)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let mut icon = Icon {
            base: self.base.static_child("icon"),
            ..Icon::new(self.toast_type.icon())
        }
        .size(32.0, 32.0)
        .with_style(serde_json::json!({"margin": "auto"}));
        let icon = icon.render()?;
        let remove = format!("htmx.remove(htmx.find('#{}'))", self.base.id);
        let remove_me = (self.timeout > 0).then(|| format!("{}s", self.timeout));
        Ok(html! {
            div id=(self.base.id) name=(self.base.name) type=(self.toast_type.as_str())
                class=(self.base.class_with(&["toast"])) onclick=(remove)
                remove-me=[remove_me]
                style=[self.base.style_attr()] {
                span class="toast-icon" { (icon) }
                span id={ (self.base.id) "-value" } { (self.value) }
            }
        })
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
    fn type_and_timeout_validation() {
        let toast = Toast::default();
        assert_eq!(toast.validation("type", &json!("success")), json!("success"));
        assert_eq!(toast.validation("type", &json!("warning")), json!("info"));
        assert_eq!(toast.validation("timeout", &json!(-5)), json!(0));
    }

    #[test]
    fn render_with_timeout() {
        let mut toast = Toast::new(ToastType::Error, "Failed").with_id("msg").timeout(4);
        let html = toast.render().unwrap().into_string();
        assert!(html.starts_with(r#"<div id="msg" name="msg" type="error" class="toast""#));
        assert!(html.contains(r#"onclick="htmx.remove(htmx.find(&#39;#msg&#39;))""#)
            || html.contains(r#"onclick="htmx.remove(htmx.find('#msg'))""#));
        assert!(html.contains(r#"remove-me="4s""#));
        assert!(html.contains(r#"<span id="msg-value">Failed</span>"#));
        assert!(html.contains(r#"width="32""#));
    }

    #[test]
    fn error_toast_response() {
        let evt = toast_response(ToastType::Error, "Invalid parameter: x", "btn");
        assert_eq!(evt.name, "btn");
        assert_eq!(evt.header[header::RETARGET], TOAST_CONTAINER);
        assert_eq!(evt.header[header::RESWAP], "innerHTML");
        let toast = evt.trigger_as::<Toast>().unwrap();
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.value, "Invalid parameter: x");
    }

    #[test]
    fn sticky_toast_has_no_timer() {
        let mut toast = Toast::new(ToastType::Info, "Hi").with_id("msg");
        assert!(!toast.render().unwrap().into_string().contains("remove-me"));
    }
}
