//! List: a paged list of label/value rows with optional edit and delete actions.
//!
//! Each row shows the `label_field` and `label_value` entries of its map. The
//! filter matches either of them. Like [`Table`](super::Table), the list
//! answers its own events and retargets every response to its id.

use maud::{html, Markup};
use serde_json::{json, Value};

use super::button::{Button, ButtonStyle};
use super::icon::svg_icon;
use super::input::Input;
use super::label::{Label, COMPONENT_TYPE_LABEL};
use super::pagination::{valid_page_size, Pagination, PAGINATION_EVENT_PAGE_SIZE, VALID_PAGE_SIZE};
use crate::component::{
    check_enum_value, component_boilerplate, in_slot, target_value, value_response, BaseComponent,
    Component, ComponentExt, PaginationType,
};
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_integer, to_map_list, to_string, PropertyMap};

pub const COMPONENT_TYPE_LIST: &str = "list";

pub const LIST_EVENT_CURRENT_PAGE: &str = "current_page";
pub const LIST_EVENT_FILTER_CHANGE: &str = "filter_change";
pub const LIST_EVENT_ADD_ITEM: &str = "add_item";
pub const LIST_EVENT_EDIT_ITEM: &str = "edit_item";
pub const LIST_EVENT_DELETE_ITEM: &str = "delete_item";

const SLOT_TOP_PAGINATION: &str = "top_pagination";
const SLOT_BOTTOM_PAGINATION: &str = "bottom_pagination";
const SLOT_FILTER: &str = "filter";
const SLOT_BTN_ADD: &str = "btn_add";
const NAME_EDIT_ITEM: &str = "edit_item";
const NAME_DELETE_ITEM: &str = "delete_item";

#[derive(Debug, Clone)]
pub struct List {
    pub base: BaseComponent,
    pub rows: Vec<PropertyMap>,
    pub pagination: PaginationType,
    pub current_page: i64,
    pub page_size: i64,
    pub hide_paginaton_size: bool,
    /// Show the filter input.
    pub list_filter: bool,
    /// Show the add button next to the filter input.
    pub add_item: bool,
    /// Rows post `edit_item` when clicked.
    pub edit_item: bool,
    /// Rows get a delete cell posting `delete_item`.
    pub delete_item: bool,
    pub filter_placeholder: String,
    pub filter_value: String,
    pub case_sensitive: bool,
    pub label_add: String,
    pub add_icon: String,
    pub edit_icon: String,
    pub delete_icon: String,
    /// Row key of the label line.
    pub label_field: String,
    /// Row key of the value line.
    pub label_value: String,
}

impl Default for List {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            rows: Vec::new(),
            pagination: PaginationType::Top,
            current_page: 1,
            page_size: 10,
            hide_paginaton_size: false,
            list_filter: false,
            add_item: false,
            edit_item: false,
            delete_item: false,
            filter_placeholder: String::new(),
            filter_value: String::new(),
            case_sensitive: false,
            label_add: String::new(),
            add_icon: "Plus".into(),
            edit_icon: "Edit".into(),
            delete_icon: "Times".into(),
            label_field: "lslabel".into(),
            label_value: "lsvalue".into(),
        }
    }
}

impl List {
    pub fn new(rows: Vec<PropertyMap>) -> Self {
        Self {
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

    /// Rows whose label or value contains the filter value.
    pub fn filtered_rows(&self) -> Vec<&PropertyMap> {
        if self.filter_value.is_empty() {
            return self.rows.iter().collect();
        }
        let fold = |text: String| {
            if self.case_sensitive {
                text
            } else {
                text.to_lowercase()
            }
        };
        let filter = fold(self.filter_value.clone());
        let keys = [self.label_field.as_str(), self.label_value.as_str()];
        self.rows
            .iter()
            .filter(|row| {
                keys.iter()
                    .filter(|key| !key.is_empty())
                    .filter_map(|key| row.get(*key))
                    .any(|value| fold(to_string(value, "")).contains(&filter))
            })
            .collect()
    }

    pub fn page_count(&self) -> i64 {
        let rows = self.filtered_rows().len() as i64;
        let size = self.page_size.max(1);
        (rows + size - 1) / size
    }

    /// The rows shown on the current page.
    pub fn page_rows(&self) -> Vec<&PropertyMap> {
        let rows = self.filtered_rows();
        if self.pagination == PaginationType::None {
            return rows;
        }
        let page = self.check_page(&Value::from(self.current_page));
        let size = self.page_size.max(1) as usize;
        rows.into_iter()
            .skip((page as usize - 1) * size)
            .take(size)
            .collect()
    }

    fn check_page(&self, value: &Value) -> i64 {
        to_integer(value, 1).min(self.page_count()).max(1)
    }

    fn row_text(row: &PropertyMap, key: &str) -> String {
        row.get(key).map(|value| to_string(value, "")).unwrap_or_default()
    }

    /// The label a row cell posts as: `{id}_row_{slot}_{index}`, named after the event.
    fn item_label(&self, row: &PropertyMap, index: usize, slot: &str, name: &str) -> Label {
        let mut base = self.base.child(&format!("row_{slot}_{index}"));
        base.name = name.into();
        Label {
            base,
            ..Label::default()
        }
        .with_data(json!({"row": row, "index": index}))
    }

    fn edit_label(&self, row: &PropertyMap, index: usize) -> Label {
        self.item_label(row, index, NAME_EDIT_ITEM, NAME_EDIT_ITEM)
    }

    /// The value cell; clicking it edits the row too.
    fn value_label(&self, row: &PropertyMap, index: usize) -> Label {
        self.item_label(row, index, "value", NAME_EDIT_ITEM)
    }

    fn delete_label(&self, row: &PropertyMap, index: usize) -> Label {
        self.item_label(row, index, NAME_DELETE_ITEM, NAME_DELETE_ITEM)
    }

    fn pagination_child(&self, slot: &str) -> Pagination {
        Pagination::with_base(self.base.child(slot))
            .prop("page_count", self.page_count())
            .prop("hide_page_size", self.hide_paginaton_size)
            .prop("page_size", Value::from(self.page_size))
            .prop("value", Value::from(self.current_page))
    }

    fn filter_input(&self) -> Input {
        Input::with_base(self.base.child(SLOT_FILTER))
            .prop("label", self.filter_placeholder.as_str())
            .prop("placeholder", self.filter_placeholder.as_str())
            .prop("full", true)
            .with_style(json!({"border-radius": "0", "margin": "1px 0 2px"}))
            .prop("value", Value::from(self.filter_value.as_str()))
    }

    fn add_button(&self) -> Button {
        Button::with_base(self.base.child(SLOT_BTN_ADD), self.label_add.as_str())
            .prop("button_style", ButtonStyle::Border)
            .prop("icon", self.add_icon.as_str())
            .with_style(json!({"padding": "8px 16px", "border-radius": "0", "margin": "1px 0 2px 1px"}))
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let mut value = evt.value.clone();
        let name = match evt.trigger_name.as_str() {
            SLOT_TOP_PAGINATION | SLOT_BOTTOM_PAGINATION => {
                if evt.name == PAGINATION_EVENT_PAGE_SIZE {
                    self.set_property("page_size", value.clone());
                    self.set_property("current_page", Value::from(1));
                    PAGINATION_EVENT_PAGE_SIZE
                } else {
                    self.set_property("current_page", value.clone());
                    LIST_EVENT_CURRENT_PAGE
                }
            }
            SLOT_FILTER => {
                self.set_property("filter_value", value.clone());
                LIST_EVENT_FILTER_CHANGE
            }
            SLOT_BTN_ADD => LIST_EVENT_ADD_ITEM,
            NAME_EDIT_ITEM => {
                value = Value::Object(evt.trigger_data());
                LIST_EVENT_EDIT_ITEM
            }
            NAME_DELETE_ITEM => {
                value = Value::Object(evt.trigger_data());
                LIST_EVENT_DELETE_ITEM
            }
            _ => return evt,
        };
        let evt = ResponseEvent::new(&*self, name)
            .with_value(value)
            .with_header(header::RETARGET, format!("#{}", self.base.id));
        self.base.respond(evt)
    }

    /// Find the row cell a trigger id belongs to.
    fn row_label(&self, id: &str) -> Option<Label> {
        for (index, row) in self.page_rows().into_iter().enumerate() {
            let mut labels = Vec::with_capacity(3);
            if self.edit_item {
                labels.push(self.edit_label(row, index));
                labels.push(self.value_label(row, index));
            }
            if self.delete_item {
                labels.push(self.delete_label(row, index));
            }
            if let Some(label) = labels.into_iter().find(|label| label.base.id == id) {
                return Some(label);
            }
        }
        None
    }

    fn render_row(&self, row: &PropertyMap, index: usize) -> Markup {
        let label = Self::row_text(row, &self.label_field);
        let value = Self::row_text(row, &self.label_value);
        let edit = self.edit_item.then(|| self.edit_label(row, index));
        let cell = self.value_label(row, index);
        let delete = self.delete_item.then(|| self.delete_label(row, index));
        for wired in edit.iter().chain(delete.iter()) {
            wired.base.register(COMPONENT_TYPE_LABEL);
        }
        if self.edit_item {
            cell.base.register(COMPONENT_TYPE_LABEL);
        }
        let hx = HxAttrs::from_base(&self.base, true);
        let value_hx = HxAttrs::from_base(&self.base, self.edit_item);
        let value_class = if self.edit_item { "list-value-cell cursor-pointer" } else { "list-value-cell" };
        html! {
            li class="list-row border-bottom" {
                @if let Some(edit) = &edit {
                    div id=(edit.base.id) class="list-edit-cell"
                        hx-post=[hx.post.as_deref()] hx-target=[hx.target.as_deref()]
                        hx-swap=[hx.swap.as_deref()] hx-sync=[hx.sync.as_deref()]
                        hx-indicator=[hx.indicator.as_deref()] {
                        (svg_icon(&self.edit_icon, 24.0, 24.0, None))
                    }
                }
                div id=[self.edit_item.then_some(cell.base.id.as_str())] class=(value_class)
                    hx-post=[value_hx.post] hx-target=[value_hx.target] hx-swap=[value_hx.swap]
                    hx-sync=[value_hx.sync] hx-indicator=[value_hx.indicator] {
                    @if !label.is_empty() {
                        div class="border-bottom list-label" { span { (label) } }
                    }
                    @if !value.is_empty() {
                        div class="list-value" { span { (value) } }
                    }
                }
                @if let Some(delete) = &delete {
                    div id=(delete.base.id) class="list-delete-cell"
                        hx-post=[hx.post.as_deref()] hx-target=[hx.target.as_deref()]
                        hx-swap=[hx.swap.as_deref()] hx-sync=[hx.sync.as_deref()]
                        hx-indicator=[hx.indicator.as_deref()] {
                        (svg_icon(&self.delete_icon, 24.0, 24.0, None))
                    }
                }
            }
        }
    }
}

impl Component for List {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_LIST
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("rows", Value::from(self.rows.clone())),
            ("pagination", self.pagination.into()),
            ("current_page", Value::from(self.current_page)),
            ("page_size", Value::from(self.page_size)),
            ("hide_paginaton_size", Value::from(self.hide_paginaton_size)),
            ("list_filter", Value::from(self.list_filter)),
            ("add_item", Value::from(self.add_item)),
            ("edit_item", Value::from(self.edit_item)),
            ("delete_item", Value::from(self.delete_item)),
            ("filter_placeholder", Value::from(self.filter_placeholder.as_str())),
            ("filter_value", Value::from(self.filter_value.as_str())),
            ("case_sensitive", Value::from(self.case_sensitive)),
            ("label_add", Value::from(self.label_add.as_str())),
            ("add_icon", Value::from(self.add_icon.as_str())),
            ("edit_icon", Value::from(self.edit_icon.as_str())),
            ("delete_icon", Value::from(self.delete_icon.as_str())),
            ("label_field", Value::from(self.label_field.as_str())),
            ("label_value", Value::from(self.label_value.as_str())),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "rows" => Value::from(to_map_list(value)),
            "pagination" => check_enum_value(value, PaginationType::Top).into(),
            "current_page" => Value::from(self.check_page(value)),
            "page_size" => Value::from(valid_page_size(to_integer(value, 10), VALID_PAGE_SIZE[0])),
            "add_icon" => Value::from(to_string(value, "Plus")),
            "edit_icon" => Value::from(to_string(value, "Edit")),
            "delete_icon" => Value::from(to_string(value, "Times")),
            "label_field" => Value::from(to_string(value, "lslabel")),
            "label_value" => Value::from(to_string(value, "lsvalue")),
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
            "pagination" => {
                self.pagination = check_enum_value(&value, PaginationType::Top);
                self.pagination.into()
            }
            "current_page" => {
                self.current_page = self.check_page(&value);
                Value::from(self.current_page)
            }
            "page_size" => {
                self.page_size = valid_page_size(to_integer(&value, 10), VALID_PAGE_SIZE[0]);
                Value::from(self.page_size)
            }
            "hide_paginaton_size" | "list_filter" | "add_item" | "edit_item" | "delete_item"
            | "case_sensitive" => {
                let flag = to_boolean(&value, false);
                match name {
                    "hide_paginaton_size" => self.hide_paginaton_size = flag,
                    "list_filter" => self.list_filter = flag,
                    "add_item" => self.add_item = flag,
                    "edit_item" => self.edit_item = flag,
                    "delete_item" => self.delete_item = flag,
                    _ => self.case_sensitive = flag,
                }
                Value::from(flag)
            }
            "filter_placeholder" | "filter_value" | "label_add" | "add_icon" | "edit_icon"
            | "delete_icon" | "label_field" | "label_value" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "filter_placeholder" => self.filter_placeholder = text.clone(),
                    "filter_value" => self.filter_value = text.clone(),
                    "label_add" => self.label_add = text.clone(),
                    "add_icon" => self.add_icon = text.clone(),
                    "edit_icon" => self.edit_icon = text.clone(),
                    "delete_icon" => self.delete_icon = text.clone(),
                    "label_field" => self.label_field = text.clone(),
                    _ => self.label_value = text.clone(),
                }
                Value::from(text)
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

    fn restore_last(&self) -> &'static [&'static str] {
        &["current_page"]
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let Some(slot) = self.base.route(&event.id).map(str::to_owned) else {
            return value_response(&*self, event);
        };
        let evt = if in_slot(&slot, SLOT_TOP_PAGINATION) {
            self.pagination_child(SLOT_TOP_PAGINATION).handle_request(event)
        } else if in_slot(&slot, SLOT_BOTTOM_PAGINATION) {
            self.pagination_child(SLOT_BOTTOM_PAGINATION).handle_request(event)
        } else if slot == SLOT_FILTER {
            self.filter_input().handle_request(event)
        } else if slot == SLOT_BTN_ADD {
            self.add_button().handle_request(event)
        } else if let Some(mut label) = self.row_label(&event.id) {
            label.handle_request(event)
        } else {
            return value_response(&*self, event);
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let page_count = self.page_count();
        let top = page_count > 1
            && matches!(self.pagination, PaginationType::Top | PaginationType::All);
        let bottom = page_count > 1
            && matches!(self.pagination, PaginationType::Bottom | PaginationType::All);

        let top_pagination = top
            .then(|| self.pagination_child(SLOT_TOP_PAGINATION).render())
            .transpose()?;
        let bottom_pagination = bottom
            .then(|| self.pagination_child(SLOT_BOTTOM_PAGINATION).render())
            .transpose()?;
        let filter = self
            .list_filter
            .then(|| self.filter_input().render())
            .transpose()?;
        let add = (self.list_filter && self.add_item)
            .then(|| self.add_button().render())
            .transpose()?;
        let items: Vec<Markup> = self
            .page_rows()
            .into_iter()
            .enumerate()
            .map(|(index, row)| self.render_row(row, index))
            .collect();

        Ok(html! {
            div id=(self.base.id) name=(self.base.name) class=(self.base.class_with(&["responsive"])) {
                @if self.list_filter || top_pagination.is_some() {
                    div {
                        @if let Some(pagination) = &top_pagination {
                            div { (pagination) }
                        }
                        @if let Some(filter) = &filter {
                            div class="row full" {
                                div class="cell" { (filter) }
                                @if let Some(add) = &add {
                                    div class="cell" style="width: 20px;" { (add) }
                                }
                            }
                        }
                    }
                }
                ul class="list" style=[self.base.style_attr()] {
                    @for item in &items { (item) }
                }
                @if let Some(pagination) = &bottom_pagination {
                    div { (pagination) }
                }
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
    use pretty_assertions::assert_eq;

    fn items() -> Vec<PropertyMap> {
        to_map_list(&json!([
            {"lslabel": "Label 1", "lsvalue": "Value row 1"},
            {"lslabel": "Label 2", "lsvalue": "Value Row 2"},
            {"lslabel": "", "lsvalue": "Value row 3"},
            {"lslabel": "", "lsvalue": "Value row 6"},
            {"lslabel": "Label 5", "lsvalue": "Value row 6"},
            {"lslabel": "Label 6", "lsvalue": "Value row 6"},
            {"lslabel": "Label 7", "lsvalue": "Value Row 7"},
            {"lslabel": "Label 8", "lsvalue": "Value row 8"},
            {"lslabel": "Label 9", "lsvalue": "Value row 9"},
        ]))
    }

    fn list() -> List {
        List::new(items())
            .with_id("lst")
            .with_event_url("/event")
            .prop("page_size", 5)
            .prop("edit_item", true)
            .prop("delete_item", true)
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn defaults_and_fallbacks() {
        let lst = List::default();
        assert_eq!(lst.validation("label_field", &Value::Null), json!("lslabel"));
        assert_eq!(lst.validation("label_value", &json!("")), json!("lsvalue"));
        assert_eq!(lst.validation("page_size", &json!(7)), json!(5));
        assert_eq!(lst.validation("page_size", &Value::Null), json!(10));
        assert_eq!(lst.validation("edit_icon", &Value::Null), json!("Edit"));
        assert_eq!(lst.validation("pagination", &json!("side")), json!("top"));
    }

    #[test]
    fn current_page_clamped_to_filtered_rows() {
        let mut lst = list();
        assert_eq!(lst.page_count(), 2);
        assert_eq!(lst.validation("current_page", &json!(10)), json!(2));
        lst.set_property("filter_value", json!("6"));
        assert_eq!(lst.page_count(), 1);
        assert_eq!(lst.validation("current_page", &json!(2)), json!(1));
    }

    #[test]
    fn restored_page_survives_rebuild() {
        let store = crate::component::RequestStore::new();
        store.record("lst", "page_size", json!(5));
        store.record("lst", "current_page", json!(2));

        let mut lst = List::new(items()).with_id("lst").with_store(&store);
        lst.init_props();
        assert_eq!(lst.current_page, 2);
        assert_eq!(lst.page_rows()[0]["lslabel"], json!("Label 6"));
    }

    // -----------------------------------------------------------------------
    // Rows
    // -----------------------------------------------------------------------

    #[test]
    fn filter_matches_label_or_value() {
        let mut lst = list().prop("filter_value", "6");
        assert_eq!(lst.filtered_rows().len(), 3);
        lst.set_property("filter_value", json!("ROW"));
        assert_eq!(lst.filtered_rows().len(), 9);
        lst.set_property("case_sensitive", json!(true));
        lst.set_property("filter_value", json!("Row"));
        assert_eq!(lst.filtered_rows().len(), 2);
    }

    #[test]
    fn filter_ignores_other_keys() {
        let rows = to_map_list(&json!([{"lslabel": "A", "lsvalue": "B", "note": "match"}]));
        let lst = List::new(rows).prop("filter_value", "match");
        assert!(lst.filtered_rows().is_empty());
    }

    #[test]
    fn page_rows_follow_current_page() {
        let lst = list().prop("current_page", 2);
        let rows = lst.page_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["lslabel"], json!("Label 6"));
        assert_eq!(list().prop("pagination", "none").page_rows().len(), 9);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn render_rows_with_actions() {
        let mut lst = list().prop("list_filter", true).prop("add_item", true);
        let html = lst.render().unwrap().into_string();
        assert!(html.starts_with(r#"<div id="lst" name="lst" class="responsive">"#));
        assert!(html.contains(r#"id="lst_top_pagination""#));
        assert!(html.contains(r#"id="lst_filter""#));
        assert!(html.contains(r#"id="lst_btn_add""#));
        assert!(html.contains(r#"<div id="lst_row_edit_item_0" class="list-edit-cell" hx-post="/event""#));
        assert!(html.contains(r#"<div id="lst_row_value_0" class="list-value-cell cursor-pointer""#));
        assert!(html.contains(r#"id="lst_row_delete_item_4""#));
        assert!(!html.contains("lst_row_value_5"));
        assert_eq!(html.matches("list-label").count(), 3);
        assert!(lst.base.store.is_registered("lst_row_delete_item_0"));
    }

    #[test]
    fn render_plain_rows() {
        let mut lst = List::new(items()).with_id("lst").prop("pagination", "bottom");
        let html = lst.render().unwrap().into_string();
        assert!(html.contains(r#"<div class="list-value-cell">"#));
        assert!(!html.contains("list-edit-cell"));
        assert!(!html.contains("list-delete-cell"));
        assert!(!html.contains("bottom_pagination"));
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn pagination_moves_current_page() {
        let mut lst = list();
        let te = TriggerEvent::new("lst_top_pagination_pagination_btn_next", "pagination_btn_next");
        let evt = lst.handle_request(&te);
        assert_eq!(evt.name, LIST_EVENT_CURRENT_PAGE);
        assert_eq!(evt.value, json!(2));
        assert_eq!(evt.header[header::RETARGET], "#lst");
        assert_eq!(lst.current_page, 2);
    }

    #[test]
    fn filter_change() {
        let mut lst = list().prop("list_filter", true);
        let te = TriggerEvent::new("lst_filter", "filter").with_value("filter", "label 2");
        let evt = lst.on_request(&te);
        assert_eq!(evt.name, LIST_EVENT_FILTER_CHANGE);
        assert_eq!(lst.filter_value, "label 2");
        assert_eq!(lst.filtered_rows().len(), 1);
    }

    #[test]
    fn edit_and_delete_carry_row() {
        let mut lst = list();
        let evt = lst.on_request(&TriggerEvent::new("lst_row_value_1", "edit_item"));
        assert_eq!(evt.name, LIST_EVENT_EDIT_ITEM);
        assert_eq!(evt.value["row"]["lslabel"], json!("Label 2"));
        assert_eq!(evt.value["index"], json!(1));

        let evt = lst.on_request(&TriggerEvent::new("lst_row_edit_item_0", "edit_item"));
        assert_eq!(evt.name, LIST_EVENT_EDIT_ITEM);

        let evt = lst.on_request(&TriggerEvent::new("lst_row_delete_item_2", "delete_item"));
        assert_eq!(evt.name, LIST_EVENT_DELETE_ITEM);
        assert_eq!(evt.value["row"]["lsvalue"], json!("Value row 3"));
    }

    #[test]
    fn disabled_actions_do_not_route() {
        let mut lst = List::new(items()).with_id("lst");
        let evt = lst.on_request(&TriggerEvent::new("lst_row_delete_item_0", "delete_item"));
        assert_eq!(evt.name, "value");
    }

    #[test]
    fn add_button_event() {
        let mut lst = list().prop("list_filter", true).prop("add_item", true);
        let evt = lst.on_request(&TriggerEvent::new("lst_btn_add", "btn_add"));
        assert_eq!(evt.name, LIST_EVENT_ADD_ITEM);
    }
}
