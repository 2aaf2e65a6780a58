//! Search: a filter input with a search button above a selectable result table.
//!
//! The component does not query anything itself. `search_search` hands the
//! filter text to the response callback, which usually reloads `rows`. The
//! text is kept in `data.filter_value` so it survives the next request.

use maud::{html, Markup};
use serde_json::{json, Value};

use super::button::{Button, ButtonStyle};
use super::input::Input;
use super::link::{Link, LinkStyle};
use super::pagination::{valid_page_size, VALID_PAGE_SIZE};
use super::table::{check_table_fields, table_fields_value, Table, TableField, TABLE_EVENT_ROW_SELECTED};
use crate::component::{
    component_boilerplate, in_slot, target_value, value_response, BaseComponent, Component,
    ComponentExt, PaginationType,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::value::{to_boolean, to_integer, to_map_list, to_string, PropertyMap};

pub const COMPONENT_TYPE_SEARCH: &str = "search";

pub const SEARCH_EVENT_SEARCH: &str = "search_search";
pub const SEARCH_EVENT_SELECTED: &str = "search_selected";
pub const SEARCH_EVENT_HELP: &str = "search_help";

const SLOT_FILTER: &str = "filter_value";
const SLOT_BTN_SEARCH: &str = "btn_search";
const SLOT_BTN_HELP: &str = "btn_help";
const SLOT_RESULT: &str = "search_result";

#[derive(Debug, Clone)]
pub struct Search {
    pub base: BaseComponent,
    pub rows: Vec<PropertyMap>,
    pub fields: Vec<TableField>,
    pub title: String,
    pub page_size: i64,
    pub hide_paginaton_size: bool,
    pub filter_placeholder: String,
    pub auto_focus: bool,
    pub full: bool,
    pub show_help: bool,
    /// The help button opens this page instead of posting `search_help`.
    pub help_url: String,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            rows: Vec::new(),
            fields: Vec::new(),
            title: labels().search_title.clone(),
            page_size: 10,
            hide_paginaton_size: false,
            filter_placeholder: labels().search_filter_placeholder.clone(),
            auto_focus: false,
            full: true,
            show_help: false,
            help_url: String::new(),
        }
    }
}

impl Search {
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

    /// The last submitted filter text.
    pub fn filter_value(&self) -> String {
        self.base
            .data
            .get(SLOT_FILTER)
            .map(|value| to_string(value, ""))
            .unwrap_or_default()
    }

    fn button(&self, slot: &str, icon: &str) -> Button {
        Button::with_base(self.base.child(slot), "")
            .prop("button_style", ButtonStyle::Border)
            .prop("icon", icon)
            .with_style(json!({"padding": "8px", "margin": "1px 0 2px 1px"}))
    }

    fn help_link(&self) -> Link {
        Link {
            base: self.base.static_child(SLOT_BTN_HELP),
            ..Link::new("", self.help_url.as_str())
        }
        .prop("link_style", LinkStyle::Border)
        .prop("icon", "QuestionCircle")
        .prop("hide_label", true)
        .prop("link_target", "_blank")
        .with_style(json!({"padding": "8px", "margin": "1px 0 2px 1px"}))
    }

    fn filter_input(&self) -> Input {
        Input::with_base(self.base.child(SLOT_FILTER))
            .prop("label", self.filter_placeholder.as_str())
            .prop("placeholder", self.filter_placeholder.as_str())
            .prop("auto_focus", self.auto_focus)
            .prop("full", true)
            .with_style(json!({"border-radius": "0", "margin": "1px 0 2px"}))
            .prop("value", self.filter_value())
    }

    fn result_table(&self) -> Table {
        let mut base = self.base.child(SLOT_RESULT);
        base.target = String::new();
        Table {
            base,
            ..Table::new(self.fields.clone(), self.rows.clone())
        }
        .prop("pagination", PaginationType::Top)
        .prop("page_size", self.page_size)
        .prop("hide_paginaton_size", self.hide_paginaton_size)
        .prop("row_selected", true)
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let mut retarget = false;
        let (name, value) = match evt.trigger_name.as_str() {
            SLOT_RESULT => {
                if evt.name != TABLE_EVENT_ROW_SELECTED {
                    return evt;
                }
                retarget = true;
                (SEARCH_EVENT_SELECTED, evt.value.clone())
            }
            SLOT_FILTER => {
                self.set_property("data", json!({ SLOT_FILTER: evt.value }));
                (SEARCH_EVENT_SEARCH, evt.value.clone())
            }
            SLOT_BTN_SEARCH => (SEARCH_EVENT_SEARCH, Value::from(self.filter_value())),
            SLOT_BTN_HELP => (SEARCH_EVENT_HELP, Value::Null),
            _ => return evt,
        };
        let mut evt = ResponseEvent::new(&*self, name).with_value(value);
        if retarget {
            evt = evt.with_header(header::RETARGET, format!("#{}", self.base.id));
        }
        self.base.respond(evt)
    }
}

impl Component for Search {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_SEARCH
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("rows", Value::from(self.rows.clone())),
            ("fields", table_fields_value(&self.fields)),
            ("title", Value::from(self.title.as_str())),
            ("page_size", Value::from(self.page_size)),
            ("hide_paginaton_size", Value::from(self.hide_paginaton_size)),
            ("filter_placeholder", Value::from(self.filter_placeholder.as_str())),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
            ("show_help", Value::from(self.show_help)),
            ("help_url", Value::from(self.help_url.as_str())),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "rows" => Value::from(to_map_list(value)),
            "fields" => table_fields_value(&check_table_fields(&self.fields, &self.rows, value)),
            "title" => Value::from(to_string(value, &labels().search_title)),
            "filter_placeholder" => Value::from(to_string(value, &labels().search_filter_placeholder)),
            "page_size" => Value::from(valid_page_size(to_integer(value, 10), VALID_PAGE_SIZE[0])),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "rows" => {
                self.rows = to_map_list(&value);
                Value::from(self.rows.clone())
            }
            "fields" => {
                self.fields = check_table_fields(&self.fields, &self.rows, &value);
                table_fields_value(&self.fields)
            }
            "page_size" => {
                self.page_size = valid_page_size(to_integer(&value, 10), VALID_PAGE_SIZE[0]);
                Value::from(self.page_size)
            }
            "title" | "filter_placeholder" | "help_url" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "title" => self.title = text.clone(),
                    "filter_placeholder" => self.filter_placeholder = text.clone(),
                    _ => self.help_url = text.clone(),
                }
                Value::from(text)
            }
            "hide_paginaton_size" | "auto_focus" | "full" | "show_help" => {
                let flag = to_boolean(&value, false);
                match name {
                    "hide_paginaton_size" => self.hide_paginaton_size = flag,
                    "auto_focus" => self.auto_focus = flag,
                    "full" => self.full = flag,
                    _ => self.show_help = flag,
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
            SLOT_FILTER => self.filter_input().handle_request(event),
            SLOT_BTN_SEARCH => self.button(SLOT_BTN_SEARCH, "Search").handle_request(event),
            SLOT_BTN_HELP => self.button(SLOT_BTN_HELP, "QuestionCircle").handle_request(event),
            _ if in_slot(&slot, SLOT_RESULT) => self.result_table().handle_request(event),
            _ => return value_response(&*self, event),
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let filter = self.filter_input().render()?;
        let search = self.button(SLOT_BTN_SEARCH, "Search").render()?;
        let help = match (self.show_help, self.help_url.is_empty()) {
            (false, _) => None,
            (true, true) => Some(self.button(SLOT_BTN_HELP, "QuestionCircle").render()?),
            (true, false) => Some(self.help_link().render()?),
        };
        let result = self.result_table().render()?;
        let full = if self.full { "full" } else { "" };
        Ok(html! {
            div id=(self.base.id) name=(self.base.name) class=(self.base.class_with(&["row", full]))
                style=[self.base.style_attr()] {
                div class="panel" {
                    div class="panel-title" {
                        div class="cell title-cell" { span { (self.title) } }
                    }
                    div class="section" {
                        div class="row full container" {
                            div class="cell" { (filter) }
                            div class="cell" style="width: 20px;" { (search) }
                            @if let Some(help) = help {
                                div class="cell" style="width: 20px;" { (help) }
                            }
                        }
                        div class="row full container" { (result) }
                    }
                }
            }
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
