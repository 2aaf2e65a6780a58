//! Upload: a multipart file upload form with progress reporting.
//!
//! The form posts the chosen file to the event URL. A successful upload is
//! answered with a success [`Toast`] swapped into the page's `#toast-msg`
//! container.

use maud::{html, Markup, PreEscaped};
use serde_json::Value;

use super::button::{Button, ButtonType};
use super::toast::{Toast, ToastType, TOAST_CONTAINER};
use crate::component::{
    component_boilerplate, BaseComponent, Component, ComponentExt, EnumValue, Swap,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_integer, to_string, PropertyMap};

pub const COMPONENT_TYPE_UPLOAD: &str = "upload";
pub const UPLOAD_EVENT_UPLOAD: &str = "upload";

#[derive(Debug, Clone)]
pub struct Upload {
    pub base: BaseComponent,
    /// File type filter of the file dialog, e.g. `image/*`.
    pub accept: String,
    pub placeholder: String,
    /// Text of the toast shown after a successful upload.
    pub toast_message: String,
    pub disabled: bool,
    /// Longest file name shown before it is shortened; 0 disables the limit.
    pub max_length: i64,
    pub full: bool,
}

impl Default for Upload {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            accept: String::new(),
            placeholder: labels().upload_placeholder.clone(),
            toast_message: labels().upload_toast_message.clone(),
            disabled: false,
            max_length: 0,
            full: false,
        }
    }
}

impl Upload {
    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn script(&self) -> String {
        let id = &self.base.id;
        let placeholder =
            serde_json::to_string(&self.placeholder).unwrap_or_else(|_| "\"\"".to_owned());
        format!(
            r#"
htmx.on('#{id}_input', 'change', function(evt) {{
  var maxlen = {maxlen};
  if (evt.target.files[0]) {{
    var fName = evt.target.files[0].name;
    if ((maxlen > 0) && (fName.length > maxlen)) {{
      fName = fName.substring(0,maxlen)+'...';
    }}
    htmx.find('#{id}_label').textContent = fName;
    htmx.find('#{id}_submit_cell').className = 'cell';
  }} else {{
    htmx.find('#{id}_label').textContent = {placeholder};
    htmx.find('#{id}_submit_cell').className = 'hide';
  }}
}});
htmx.on('#{id}', 'htmx:xhr:progress', function(evt) {{
  htmx.find('#{id}_progress').setAttribute('value', evt.detail.loaded/evt.detail.total * 100)
}});
htmx.on('#{id}', 'htmx:xhr:loadstart', function(evt) {{
  htmx.find('#{id}_progress_cell').className = 'cell';
}});
htmx.on('#{id}', 'htmx:xhr:abort', function(evt) {{
  htmx.find('#{id}_progress_cell').className = 'hide';
}});
htmx.on('#{id}', 'htmx:xhr:loadend', function(evt) {{
  htmx.find('#{id}_progress_cell').className = 'hide';
  htmx.find('#{id}_submit_cell').className = 'hide';
  htmx.find('#{id}_input').setAttribute('value', null);
  htmx.find('#{id}_label').textContent = {placeholder};
}});
"#,
            maxlen = self.max_length,
        )
    }
}

impl Component for Upload {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_UPLOAD
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("accept", Value::from(self.accept.as_str())),
            ("placeholder", Value::from(self.placeholder.as_str())),
            ("toast_message", Value::from(self.toast_message.as_str())),
            ("disabled", Value::from(self.disabled)),
            ("max_length", Value::from(self.max_length)),
            ("full", Value::from(self.full)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "placeholder" => Value::from(to_string(value, &labels().upload_placeholder)),
            "toast_message" => Value::from(to_string(value, &labels().upload_toast_message)),
            "max_length" => Value::from(to_integer(value, 0).max(0)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "accept" => {
                self.accept = to_string(&value, "");
                Value::from(self.accept.as_str())
            }
            "placeholder" => {
                self.placeholder = to_string(&value, &labels().upload_placeholder);
                Value::from(self.placeholder.as_str())
            }
            "toast_message" => {
                self.toast_message = to_string(&value, &labels().upload_toast_message);
                Value::from(self.toast_message.as_str())
            }
            "disabled" => {
                self.disabled = to_boolean(&value, false);
                Value::from(self.disabled)
            }
            "max_length" => {
                self.max_length = to_integer(&value, 0).max(0);
                Value::from(self.max_length)
            }
            "full" => {
                self.full = to_boolean(&value, false);
                Value::from(self.full)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, _event: &TriggerEvent) -> ResponseEvent {
        let toast = Toast {
            base: self.base.static_child("toast"),
            ..Toast::new(ToastType::Success, self.toast_message.as_str())
        };
        let mut evt = ResponseEvent::new(&*self, UPLOAD_EVENT_UPLOAD)
            .with_trigger(toast.boxed())
            .with_header(header::RETARGET, TOAST_CONTAINER)
            .with_header(header::RESWAP, Swap::InnerHtml.as_str());
        evt.trigger_name = self.base.name.clone();
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, !self.disabled);
        let id = &self.base.id;
        let mut submit = Button {
            base: self.base.static_child("submit"),
            ..Button::default()
        }
        .prop("type", ButtonType::Submit)
        .prop("icon", "Upload")
        .with_style(serde_json::json!({"padding": "8px"}));
        let submit = submit.render()?;
        let full = if self.full { "full" } else { "" };
        let markup = html! {
            form id=(id) name=(self.base.name) method="POST" enctype="multipart/form-data"
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                div class=(self.base.class_with(&["upload", full])) style=[self.base.style_attr()] {
                    div class=(if self.full { "row full" } else { "row" }) {
                        div class="cell" {
                            label id={ (id) "_label" } for={ (id) "_input" }
                                class=(if self.disabled { "upload-disabled" } else { "link" }) {
                                (self.placeholder)
                            }
                        }
                        div class="cell" style="width: 1px;" {
                            input id={ (id) "_input" } type="file" name="file"
                                accept=[(!self.accept.is_empty()).then_some(self.accept.as_str())]
                                disabled[self.disabled];
                        }
                        div id={ (id) "_submit_cell" } class="hide" { (submit) }
                    }
                    div class="row full" {
                        div id={ (id) "_progress_cell" } class="hide" {
                            progress id={ (id) "_progress" } value="0" max="100" {}
                        }
                    }
                }
            }
            script { (PreEscaped(self.script())) }
        };
        self.base.register(COMPONENT_TYPE_UPLOAD);
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

    #[test]
    fn label_defaults() {
        let upload = Upload::default();
        assert_eq!(upload.validation("placeholder", &json!("")), json!("Choose file to upload"));
        assert_eq!(upload.validation("toast_message", &Value::Null), json!("Successful file upload"));
    }

    #[test]
    fn answers_with_toast() {
        let mut upload = Upload::default().with_id("upl").prop("toast_message", "Done");
        let evt = upload.on_request(&TriggerEvent::new("upl", "upl"));
        assert_eq!(evt.name, UPLOAD_EVENT_UPLOAD);
        assert_eq!(evt.header[header::RETARGET], "#toast-msg");
        assert_eq!(evt.header[header::RESWAP], "innerHTML");
        let toast = evt.trigger_as::<Toast>().unwrap();
        assert_eq!(toast.toast_type, ToastType::Success);
        assert_eq!(toast.value, "Done");
    }

    #[test]
    fn render_form_and_script() {
        let mut upload = Upload::default()
            .with_id("upl")
            .with_event_url("/upload")
            .prop("accept", "image/*")
            .prop("max_length", 12);
        let html = upload.render().unwrap().into_string();
        assert!(html.starts_with(r#"<form id="upl" name="upl" method="POST" enctype="multipart/form-data" hx-post="/upload""#));
        assert!(html.contains(r#"accept="image/*""#));
        assert!(html.contains(r#"id="upl_submit" name="submit" type="submit""#));
        assert!(html.contains("var maxlen = 12;"));
        assert!(html.contains(r#"textContent = "Choose file to upload";"#));
    }

    #[test]
    fn disabled_form_is_inert() {
        let mut upload = Upload::default()
            .with_id("upl")
            .with_event_url("/upload")
            .prop("disabled", true);
        let html = upload.render().unwrap().into_string();
        assert!(!html.contains("hx-post"));
        assert!(html.contains("upload-disabled"));
    }
}
