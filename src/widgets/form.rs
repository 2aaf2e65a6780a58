//! Form: a titled input form, inline or as a modal dialog.
//!
//! The `<form>` element posts its field values when submitted. A submit button
//! named `form_ok` makes it a `form_ok` event, anything else is `form_cancel`.
//! Fields marked `form_trigger` post their own events too; those come back as
//! `form_change`.

use maud::{html, Markup};
use serde_json::{json, Value};

use super::editor::{apply_components, child_index, components_value};
use super::icon::{icon_path, Icon};
use super::label::Label;
use super::row::Row;
use crate::component::{
    component_boilerplate, target_value, value_response, BaseComponent, Component, ComponentExt,
};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_string, PropertyMap};

pub const COMPONENT_TYPE_FORM: &str = "form";

pub const FORM_EVENT_OK: &str = "form_ok";
pub const FORM_EVENT_CANCEL: &str = "form_cancel";
pub const FORM_EVENT_CHANGE: &str = "form_change";

const SLOT_FORM: &str = "form";
const SLOT_BTN_CLOSE: &str = "btn_close";
const NAME_BODY_ROW: &str = "body_row";
const NAME_FOOTER_ROW: &str = "footer_row";

fn form_icon(value: &Value) -> String {
    let key = to_string(value, "FileText");
    match icon_path(&key) {
        Some(_) => key,
        None => "FileText".into(),
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    pub base: BaseComponent,
    pub title: String,
    pub icon: String,
    pub body_rows: Vec<Row>,
    /// Usually the submit buttons.
    pub footer_rows: Vec<Row>,
    pub modal: bool,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            title: String::new(),
            icon: "FileText".into(),
            body_rows: Vec::new(),
            footer_rows: Vec::new(),
            modal: false,
        }
    }
}

impl Form {
    pub fn new(title: impl Into<String>, body_rows: Vec<Row>, footer_rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            body_rows,
            footer_rows,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn title_label(&self) -> Label {
        Label {
            base: self.base.static_child("title"),
            left_icon: self.icon.clone(),
            ..Label::new(self.title.as_str())
        }
    }

    fn close_icon(&self) -> Icon {
        Icon {
            base: self.base.child(SLOT_BTN_CLOSE),
            ..Icon::new("Times")
        }
        .with_class("close-icon")
    }

    fn wire_row(&self, rows: &[Row], name: &str, index: usize) -> Row {
        let mut row = rows[index].clone();
        row.base.id = format!("{}_{}_{}", self.base.id, name, index);
        row.base.name = name.to_owned();
        row.base.event_url = self.base.event_url.clone();
        row.base.target = self.base.target.clone();
        row.base.store = self.base.store.clone();
        row.base.on_response = None;
        row.form = true;
        row
    }

    fn body_row(&self, index: usize) -> Row {
        self.wire_row(&self.body_rows, NAME_BODY_ROW, index)
    }

    fn footer_row(&self, index: usize) -> Row {
        self.wire_row(&self.footer_rows, NAME_FOOTER_ROW, index)
    }

    /// The posted form: every value except the event markers, first value per key.
    fn submit(&self, event: &TriggerEvent) -> ResponseEvent {
        let name = if event.values.contains_key(FORM_EVENT_OK) {
            FORM_EVENT_OK
        } else {
            FORM_EVENT_CANCEL
        };
        let values: PropertyMap = event
            .values
            .iter()
            .filter(|(key, _)| {
                ![FORM_EVENT_OK, FORM_EVENT_CANCEL, FORM_EVENT_CHANGE].contains(&key.as_str())
            })
            .filter_map(|(key, values)| {
                values.first().map(|first| (key.clone(), Value::from(first.as_str())))
            })
            .collect();
        tracing::debug!(id = %self.base.id, event = name, fields = values.len(), "form submitted");
        let evt = ResponseEvent::new(self, name)
            .with_value(json!({"value": values, "data": self.base.data}));
        self.base.respond(evt)
    }

    /// Translate an event of a wired field or of the close icon.
    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let (name, value) = if evt.trigger_name == SLOT_BTN_CLOSE {
            let value = json!({
                "name": SLOT_BTN_CLOSE,
                "event": FORM_EVENT_CANCEL,
                "value": SLOT_BTN_CLOSE,
                "data": self.base.data,
            });
            (FORM_EVENT_CANCEL, value)
        } else {
            let value = json!({
                "name": evt.trigger_name,
                "event": evt.name,
                "value": evt.value,
                "data": self.base.data,
            });
            (FORM_EVENT_CHANGE, value)
        };
        let evt = ResponseEvent::new(&*self, name).with_value(value);
        self.base.respond(evt)
    }
}

impl Component for Form {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_FORM
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("title", Value::from(self.title.as_str())),
            ("icon", Value::from(self.icon.as_str())),
            ("body_rows", components_value(&self.body_rows)),
            ("footer_rows", components_value(&self.footer_rows)),
            ("modal", Value::from(self.modal)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "icon" => Value::from(form_icon(value)),
            "body_rows" => components_value(&apply_components(&self.body_rows, value)),
            "footer_rows" => components_value(&apply_components(&self.footer_rows, value)),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "title" => {
                self.title = to_string(&value, "");
                Value::from(self.title.as_str())
            }
            "icon" => {
                self.icon = form_icon(&value);
                Value::from(self.icon.as_str())
            }
            "body_rows" => {
                self.body_rows = apply_components(&self.body_rows, &value);
                components_value(&self.body_rows)
            }
            "footer_rows" => {
                self.footer_rows = apply_components(&self.footer_rows, &value);
                components_value(&self.footer_rows)
            }
            "modal" => {
                self.modal = to_boolean(&value, false);
                Value::from(self.modal)
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
        let evt = if slot == SLOT_FORM {
            return self.submit(event);
        } else if slot == SLOT_BTN_CLOSE {
            self.close_icon().handle_request(event)
        } else if let Some(index) =
            child_index(&slot, NAME_BODY_ROW).filter(|&index| index < self.body_rows.len())
        {
            self.body_row(index).handle_request(event)
        } else if let Some(index) =
            child_index(&slot, NAME_FOOTER_ROW).filter(|&index| index < self.footer_rows.len())
        {
            self.footer_row(index).handle_request(event)
        } else {
            return value_response(&*self, event);
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let title = self.title_label().render()?;
        let close = self.modal.then(|| self.close_icon().render()).transpose()?;
        let mut body = Vec::with_capacity(self.body_rows.len());
        for index in 0..self.body_rows.len() {
            body.push(self.body_row(index).render()?);
        }
        let mut footer = Vec::with_capacity(self.footer_rows.len());
        for index in 0..self.footer_rows.len() {
            footer.push(self.footer_row(index).render()?);
        }
        let form = self.base.child(SLOT_FORM);
        let hx = HxAttrs::from_base(&self.base, true);
        let editor = html! {
            div class="editor" style=[(!self.modal).then(|| self.base.style_attr()).flatten()] {
                div class="editor-title" {
                    div class="cell" { (title) }
                    @if let Some(close) = close {
                        div class="cell align-right" { (close) }
                    }
                }
                div class="section-small container-small" {
                    @for row in &body { (row) }
                }
                @if !footer.is_empty() {
                    div class="section-small container-small buttons full" {
                        @for row in &footer { (row) }
                    }
                }
            }
        };
        let markup = html! {
            div id=(self.base.id) class=(self.base.class_with(&["row full"])) {
                form id=(form.id) name="inputbox_form"
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                    @if self.modal {
                        div class="modal" {
                            div class="dialog" style=[self.base.style_attr()] { (editor) }
                        }
                    } @else {
                        (editor)
                    }
                }
            }
        };
        form.register(COMPONENT_TYPE_FORM);
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
