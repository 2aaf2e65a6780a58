//! Selector: a read-only value field with a search dialog.
//!
//! The field shows the selected text. The modal button opens a dialog with a
//! filter input and a result [`Table`]; selecting a row posts
//! `selector_selected` with the row. Searching and applying the selection are
//! left to the response callback, which usually reloads `rows` or sets
//! `value`.

use maud::{html, Markup};
use serde_json::{json, Value};

use super::button::{Button, ButtonStyle};
use super::icon::{icon_path, Icon};
use super::input::Input;
use super::label::Label;
use super::select::SelectOption;
use super::table::{check_table_fields, table_fields_value, Table, TableField, TABLE_EVENT_ROW_SELECTED};
use crate::component::{
    component_boilerplate, in_slot, target_value, value_response, BaseComponent, Component,
    ComponentExt, PaginationType,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::value::{to_boolean, to_map_list, to_string, PropertyMap};

pub const COMPONENT_TYPE_SELECTOR: &str = "selector";

pub const SELECTOR_EVENT_LINK: &str = "selector_link";
pub const SELECTOR_EVENT_SEARCH: &str = "selector_search";
pub const SELECTOR_EVENT_DELETE: &str = "selector_delete";
pub const SELECTOR_EVENT_SHOW_MODAL: &str = "selector_modal";
pub const SELECTOR_EVENT_SELECTED: &str = "selector_selected";

const SLOT_BTN_MODAL: &str = "btn_modal";
const SLOT_BTN_DELETE: &str = "btn_delete";
const SLOT_BTN_SEARCH: &str = "btn_search";
const SLOT_BTN_CLOSE: &str = "btn_close";
const SLOT_TEXT: &str = "selector_text";
const SLOT_FILTER: &str = "filter_value";
const SLOT_RESULT: &str = "selector_result";

/// The selected value: `{value, text}`. Anything else reads as empty.
fn selector_value(value: &Value) -> SelectOption {
    match value {
        Value::Object(map) => SelectOption::new(
            to_string(map.get("value").unwrap_or(&Value::Null), ""),
            to_string(map.get("text").unwrap_or(&Value::Null), ""),
        ),
        _ => SelectOption::default(),
    }
}

fn modal_icon(value: &Value) -> String {
    let key = to_string(value, "Search");
    match icon_path(&key) {
        Some(_) => key,
        None => "Search".into(),
    }
}

#[derive(Debug, Clone)]
pub struct Selector {
    pub base: BaseComponent,
    pub value: SelectOption,
    pub rows: Vec<PropertyMap>,
    pub fields: Vec<TableField>,
    /// Title of the search dialog.
    pub title: String,
    pub filter_placeholder: String,
    pub filter_value: String,
    /// The selected text is clickable and posts `selector_link`.
    pub link: bool,
    /// Show a delete button that clears the value.
    pub is_null: bool,
    pub disabled: bool,
    pub auto_focus: bool,
    pub full: bool,
    pub show_modal: bool,
    /// The modal button only posts the event; the application shows its own dialog.
    pub custom_modal: bool,
    pub modal_icon: String,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            value: SelectOption::default(),
            rows: Vec::new(),
            fields: Vec::new(),
            title: labels().selector_title.clone(),
            filter_placeholder: labels().selector_filter_placeholder.clone(),
            filter_value: String::new(),
            link: false,
            is_null: false,
            disabled: false,
            auto_focus: false,
            full: false,
            show_modal: false,
            custom_modal: false,
            modal_icon: "Search".into(),
        }
    }
}

impl Selector {
    pub fn new(fields: Vec<TableField>, rows: Vec<PropertyMap>) -> Self {
        Self {
            fields,
            rows,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn button(&self, slot: &str, icon: &str, auto_focus: bool) -> Button {
        Button::with_base(self.base.child(slot), "")
            .prop("button_style", ButtonStyle::Border)
            .prop("icon", icon)
            .prop("disabled", self.disabled)
            .prop("auto_focus", auto_focus)
            .with_style(json!({"padding": "8px", "margin": "1px 0 2px 1px"}))
    }

    fn text_label(&self) -> Label {
        let linked = self.link && !self.disabled && !self.value.text.is_empty();
        let base = if linked {
            self.base.child(SLOT_TEXT)
        } else {
            self.base.static_child(SLOT_TEXT)
        };
        Label {
            base,
            ..Label::new(self.value.text.as_str())
        }
        .prop("border", true)
        .prop("full", true)
    }

    fn close_icon(&self) -> Icon {
        Icon {
            base: self.base.child(SLOT_BTN_CLOSE),
            ..Icon::new("Times")
        }
        .with_class("close-icon")
    }

    fn filter_input(&self) -> Input {
        Input::with_base(self.base.child(SLOT_FILTER))
            .prop("label", self.filter_placeholder.as_str())
            .prop("placeholder", self.filter_placeholder.as_str())
            .prop("auto_focus", true)
            .prop("full", true)
            .with_style(json!({"border-radius": "0", "margin": "1px 0 2px"}))
            .prop("value", Value::from(self.filter_value.as_str()))
    }

    fn result_table(&self) -> Table {
        let mut base = self.base.child(SLOT_RESULT);
        base.target = String::new();
        Table {
            base,
            ..Table::new(self.fields.clone(), self.rows.clone())
        }
        .prop("pagination", PaginationType::Top)
        .prop("page_size", 5)
        .prop("hide_paginaton_size", true)
        .prop("row_selected", true)
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let mut value = Value::from(&self.value);
        let mut retarget = false;
        let name = match evt.trigger_name.as_str() {
            SLOT_RESULT => {
                if evt.name != TABLE_EVENT_ROW_SELECTED {
                    return evt;
                }
                self.set_property("show_modal", Value::from(false));
                value = evt.value.clone();
                retarget = true;
                SELECTOR_EVENT_SELECTED
            }
            SLOT_BTN_DELETE => {
                value = self.set_property("value", Value::Null);
                SELECTOR_EVENT_DELETE
            }
            SLOT_BTN_MODAL => {
                self.set_property("show_modal", Value::from(!self.custom_modal));
                SELECTOR_EVENT_SHOW_MODAL
            }
            SLOT_BTN_CLOSE => {
                self.set_property("show_modal", Value::from(false));
                SELECTOR_EVENT_SHOW_MODAL
            }
            SLOT_FILTER => {
                value = self.set_property("filter_value", evt.value.clone());
                SELECTOR_EVENT_SEARCH
            }
            SLOT_BTN_SEARCH => {
                value = Value::from(self.filter_value.as_str());
                SELECTOR_EVENT_SEARCH
            }
            SLOT_TEXT => SELECTOR_EVENT_LINK,
            _ => return evt,
        };
        let mut evt = ResponseEvent::new(&*self, name).with_value(value);
        if retarget {
            evt = evt.with_header(header::RETARGET, format!("#{}", self.base.id));
        }
        self.base.respond(evt)
    }
}

impl Component for Selector {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_SELECTOR
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", Value::from(&self.value)),
            ("rows", Value::from(self.rows.clone())),
            ("fields", table_fields_value(&self.fields)),
            ("title", Value::from(self.title.as_str())),
            ("filter_placeholder", Value::from(self.filter_placeholder.as_str())),
            ("filter_value", Value::from(self.filter_value.as_str())),
            ("link", Value::from(self.link)),
            ("is_null", Value::from(self.is_null)),
            ("disabled", Value::from(self.disabled)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
            ("show_modal", Value::from(self.show_modal)),
            ("custom_modal", Value::from(self.custom_modal)),
            ("modal_icon", Value::from(self.modal_icon.as_str())),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "value" => Value::from(&selector_value(value)),
            "rows" => Value::from(to_map_list(value)),
            "fields" => table_fields_value(&check_table_fields(&self.fields, &self.rows, value)),
            "title" => Value::from(to_string(value, &labels().selector_title)),
            "filter_placeholder" => {
                Value::from(to_string(value, &labels().selector_filter_placeholder))
            }
            "modal_icon" => Value::from(modal_icon(value)),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "value" => {
                self.value = selector_value(&value);
                Value::from(&self.value)
            }
            "rows" => {
                self.rows = to_map_list(&value);
                Value::from(self.rows.clone())
            }
            "fields" => {
                self.fields = check_table_fields(&self.fields, &self.rows, &value);
                table_fields_value(&self.fields)
            }
            "title" | "filter_placeholder" | "filter_value" | "modal_icon" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "title" => self.title = text.clone(),
                    "filter_placeholder" => self.filter_placeholder = text.clone(),
                    "filter_value" => self.filter_value = text.clone(),
                    _ => self.modal_icon = text.clone(),
                }
                Value::from(text)
            }
            "link" | "is_null" | "disabled" | "auto_focus" | "full" | "show_modal"
            | "custom_modal" => {
                let flag = to_boolean(&value, false);
                match name {
                    "link" => self.link = flag,
                    "is_null" => self.is_null = flag,
                    "disabled" => self.disabled = flag,
                    "auto_focus" => self.auto_focus = flag,
                    "full" => self.full = flag,
                    "show_modal" => self.show_modal = flag,
                    _ => self.custom_modal = flag,
                }
                Value::from(flag)
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
            SLOT_BTN_MODAL => self
                .button(SLOT_BTN_MODAL, &self.modal_icon, self.auto_focus)
                .handle_request(event),
            SLOT_BTN_DELETE => self.button(SLOT_BTN_DELETE, "Times", false).handle_request(event),
            SLOT_BTN_SEARCH => self.button(SLOT_BTN_SEARCH, "Search", false).handle_request(event),
            SLOT_BTN_CLOSE => self.close_icon().handle_request(event),
            SLOT_TEXT => self.text_label().handle_request(event),
            SLOT_FILTER => self.filter_input().handle_request(event),
            _ if in_slot(&slot, SLOT_RESULT) => self.result_table().handle_request(event),
            _ => return value_response(&*self, event),
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let modal_button = (!self.disabled)
            .then(|| self.button(SLOT_BTN_MODAL, &self.modal_icon, self.auto_focus).render())
            .transpose()?;
        let delete_button = (!self.disabled && self.is_null)
            .then(|| self.button(SLOT_BTN_DELETE, "Times", false).render())
            .transpose()?;
        let text = self.text_label().render()?;
        let dialog = if self.show_modal {
            let close = self.close_icon().render()?;
            let filter = self.filter_input().render()?;
            let search = self.button(SLOT_BTN_SEARCH, "Search", false).render()?;
            let result = self.result_table().render()?;
            Some(html! {
                div class="modal" {
                    div class="dialog" {
                        div class="panel" {
                            div class="panel-title" {
                                div class="cell title-cell" { span { (self.title) } }
                                div class="cell align-right" { (close) }
                            }
                            div class="section" {
                                div class="row full container" {
                                    div class="cell" { (filter) }
                                    div class="cell" style="width: 20px;" { (search) }
                                }
                                div class="row full container" { (result) }
                            }
                        }
                    }
                }
            })
        } else {
            None
        };
        let full = if self.full { "full" } else { "" };
        Ok(html! {
            div id=(self.base.id) name=(self.base.name)
                class=(self.base.class_with(&["selector row", full]))
                style=[self.base.style_attr()] {
                @if let Some(button) = modal_button {
                    div class="cell" style="width: 39px;" { (button) }
                }
                @if let Some(button) = delete_button {
                    div class="cell" style="width: 39px;" { (button) }
                }
                div class="cell" { (text) }
                @if let Some(dialog) = dialog { (dialog) }
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
    use crate::widgets::table::TableFieldType;
    use pretty_assertions::assert_eq;

    fn customers() -> Vec<PropertyMap> {
        [
            json!({"id": "1", "custname": "First Customer", "city": "Dublin"}),
            json!({"id": "2", "custname": "Second Customer", "city": "Paris"}),
        ]
        .iter()
        .filter_map(|row| row.as_object().cloned())
        .collect()
    }

    fn selector() -> Selector {
        let fields = vec![
            TableField::new("custname", TableFieldType::String, "Name"),
            TableField::new("city", TableFieldType::String, "City"),
        ];
        Selector::new(fields, customers())
            .with_id("sel")
            .with_event_url("/event")
            .prop("value", json!({"value": "1", "text": "First Customer"}))
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn value_is_option_pair() {
        let sel = selector();
        assert_eq!(sel.value, SelectOption::new("1", "First Customer"));
        assert_eq!(sel.validation("value", &json!("text")), json!({"value": "", "text": ""}));
    }

    #[test]
    fn label_and_icon_defaults() {
        let sel = selector();
        assert_eq!(sel.validation("title", &Value::Null), json!("Search for data"));
        assert_eq!(sel.validation("modal_icon", &json!("Nope")), json!("Search"));
        assert_eq!(sel.validation("modal_icon", &json!("Edit")), json!("Edit"));
    }

    #[test]
    fn target_defaults_to_self() {
        let mut sel = selector();
        sel.init_props();
        assert_eq!(sel.base.target, "#sel");
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn render_closed() {
        let mut sel = selector().prop("is_null", true);
        let html = sel.render().unwrap().into_string();
        assert!(html.starts_with(r#"<div id="sel" name="sel" class="selector row">"#));
        assert!(html.contains(r#"id="sel_btn_modal""#));
        assert!(html.contains(r#"id="sel_btn_delete""#));
        assert!(html.contains("First Customer"));
        assert!(!html.contains(r#"class="modal""#));
    }

    #[test]
    fn render_dialog() {
        let mut sel = selector().prop("show_modal", true);
        let html = sel.render().unwrap().into_string();
        assert!(html.contains(r#"<div class="modal">"#));
        assert!(html.contains("<span>Search for data</span>"));
        assert!(html.contains(r#"id="sel_selector_result""#));
        assert!(html.contains(r#"id="sel_selector_result_row_2""#));
    }

    #[test]
    fn disabled_hides_buttons() {
        let mut sel = selector().prop("disabled", true).prop("is_null", true);
        let html = sel.render().unwrap().into_string();
        assert!(!html.contains("sel_btn_modal"));
        assert!(!html.contains("sel_btn_delete"));
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn modal_button_opens_dialog() {
        let mut sel = selector();
        let evt = sel.on_request(&TriggerEvent::new("sel_btn_modal", "btn_modal"));
        assert_eq!(evt.name, SELECTOR_EVENT_SHOW_MODAL);
        assert!(sel.show_modal);
        let mut custom = selector().prop("custom_modal", true);
        custom.on_request(&TriggerEvent::new("sel_btn_modal", "btn_modal"));
        assert!(!custom.show_modal);
    }

    #[test]
    fn delete_clears_value() {
        let mut sel = selector().prop("is_null", true);
        let evt = sel.on_request(&TriggerEvent::new("sel_btn_delete", "btn_delete"));
        assert_eq!(evt.name, SELECTOR_EVENT_DELETE);
        assert_eq!(evt.value, json!({"value": "", "text": ""}));
        assert_eq!(sel.value, SelectOption::default());
    }

    #[test]
    fn search_events() {
        let mut sel = selector().prop("show_modal", true);
        let te = TriggerEvent::new("sel_filter_value", "filter_value").with_value("filter_value", "Par");
        let evt = sel.on_request(&te);
        assert_eq!(evt.name, SELECTOR_EVENT_SEARCH);
        assert_eq!(evt.value, json!("Par"));
        let evt = sel.on_request(&TriggerEvent::new("sel_btn_search", "btn_search"));
        assert_eq!(evt.name, SELECTOR_EVENT_SEARCH);
        assert_eq!(evt.value, json!("Par"));
    }

    #[test]
    fn row_selection_closes_dialog() {
        let mut sel = selector().prop("show_modal", true);
        let evt = sel.on_request(&TriggerEvent::new("sel_selector_result_row_2", "data_row"));
        assert_eq!(evt.name, SELECTOR_EVENT_SELECTED);
        assert_eq!(evt.value["row"]["custname"], json!("Second Customer"));
        assert_eq!(evt.header[header::RETARGET], "#sel");
        assert!(!sel.show_modal);
    }

    #[test]
    fn result_paging_passes_through() {
        let mut sel = selector().prop("show_modal", true);
        let evt = sel.on_request(&TriggerEvent::new("sel_selector_result_header_city", "header_cell"));
        assert_eq!(evt.name, "table_sort");
        assert_eq!(evt.trigger_id(), "sel_selector_result");
    }

    #[test]
    fn link_click() {
        let mut sel = selector().prop("link", true);
        let evt = sel.on_request(&TriggerEvent::new("sel_selector_text", "selector_text"));
        assert_eq!(evt.name, SELECTOR_EVENT_LINK);
        assert_eq!(evt.value["text"], json!("First Customer"));
    }
}
