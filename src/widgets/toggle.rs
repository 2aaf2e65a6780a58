//! Toggle: a switch or checkbox bound to a boolean.

use maud::{html, Markup};
use serde_json::Value;

use crate::component::{component_boilerplate, BaseComponent, Component};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, PropertyMap};

pub const COMPONENT_TYPE_TOGGLE: &str = "toggle";
pub const TOGGLE_EVENT_CHANGE: &str = "toggle_change";

#[derive(Debug, Clone, Default)]
pub struct Toggle {
    pub base: BaseComponent,
    pub value: bool,
    /// Render as a checkbox instead of a switch.
    pub check_box: bool,
    pub border: bool,
    pub full: bool,
    pub disabled: bool,
}

impl Toggle {
    pub fn new(value: bool) -> Self {
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
}

impl Component for Toggle {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_TOGGLE
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", Value::from(self.value)),
            ("check_box", Value::from(self.check_box)),
            ("border", Value::from(self.border)),
            ("full", Value::from(self.full)),
            ("disabled", Value::from(self.disabled)),
        ])
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let flag = to_boolean(&value, false);
        match name {
            "value" => self.value = flag,
            "check_box" => self.check_box = flag,
            "border" => self.border = flag,
            "full" => self.full = flag,
            "disabled" => self.disabled = flag,
            _ => return self.base.set_property(name, value),
        }
        let stored = Value::from(flag);
        self.base.set_request_value(name, &stored);
        stored
    }

    /// A click flips the value; the posted form data is not needed.
    fn on_request(&mut self, _event: &TriggerEvent) -> ResponseEvent {
        let value = self.set_property("value", Value::from(!self.value));
        let evt = ResponseEvent::new(&*self, TOGGLE_EVENT_CHANGE).with_value(value);
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, !self.disabled);
        let class = self.base.class_with(&[
            "toggle",
            if self.full { "full" } else { "" },
            if self.disabled { "toggle-disabled" } else { "" },
            if self.border { "toggle-border" } else { "" },
        ]);
        let (container, mark) = if self.check_box {
            ("checkmark-container", "checkmark")
        } else {
            ("switch", "slider round")
        };
        let markup = html! {
            div id=(self.base.id)
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                class=(class) style=[self.base.style_attr()] {
                label class=(container) {
                    input name=(self.base.name) type="checkbox" value=(self.value)
                        checked[self.value] disabled[self.disabled];
                    span class=(if self.disabled { format!("{mark} toggle-disabled") } else { mark.to_owned() }) {}
                }
            }
        };
        self.base.register(COMPONENT_TYPE_TOGGLE);
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
    fn string_values_coerce() {
        let mut toggle = Toggle::default();
        assert_eq!(toggle.set_property("value", json!("true")), json!(true));
        assert_eq!(toggle.set_property("value", json!(0)), json!(false));
    }

    #[test]
    fn request_flips() {
        let mut toggle = Toggle::new(true).with_id("tgl");
        let evt = toggle.on_request(&TriggerEvent::new("tgl", "tgl"));
        assert_eq!(evt.name, TOGGLE_EVENT_CHANGE);
        assert_eq!(evt.value, json!(false));
        assert_eq!(toggle.base.store.values("tgl").unwrap()["value"], json!(false));
    }

    #[test]
    fn render_switch() {
        let mut toggle = Toggle::new(true).with_id("tgl").with_event_url("/event");
        let html = toggle.render().unwrap().into_string();
        assert!(html.contains(r#"<label class="switch">"#));
        assert!(html.contains(r#"value="true" checked"#));
        assert!(html.contains("hx-post"));
    }

    #[test]
    fn render_disabled_checkbox() {
        let mut toggle = Toggle::default()
            .with_id("tgl")
            .with_event_url("/event")
            .prop("check_box", true)
            .prop("disabled", true);
        let html = toggle.render().unwrap().into_string();
        assert!(html.contains("checkmark-container"));
        assert!(html.contains(r#"class="toggle toggle-disabled""#));
        assert!(html.contains(r#"<span class="checkmark toggle-disabled"></span>"#));
        assert!(!html.contains("hx-post"));
    }
}
