//! Editor: a titled form with view tabs, field rows and tables.
//!
//! Only the selected view is expanded; it shows every row and table of the
//! editor. Field and table item events are folded into one `edit_field`
//! event so an application can handle the whole form in a single callback.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::button::Button;
use super::label::Label;
use super::row::Row;
use super::table::{
    Table, TABLE_EVENT_ADD_ITEM, TABLE_EVENT_EDIT_CELL, TABLE_EVENT_ROW_SELECTED,
};
use crate::component::{
    component_boilerplate, target_value, value_response, BaseComponent, Component, ComponentExt,
    TextAlign,
};
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::value::{to_string, PropertyMap};

pub const COMPONENT_TYPE_EDITOR: &str = "editor";

pub const EDITOR_EVENT_VIEW: &str = "edit_view";
pub const EDITOR_EVENT_FIELD: &str = "edit_field";

const NAME_TAB_BTN: &str = "tab_btn";
const NAME_VIEW_ROW: &str = "view_row";
const NAME_VIEW_TABLE: &str = "view_table";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub badge: String,
}

impl EditorView {
    pub fn new(key: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: icon.into(),
            badge: String::new(),
        }
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }
}

fn editor_views(value: &Value) -> Vec<EditorView> {
    serde_json::from_value(value.clone()).unwrap_or_else(|err| {
        if !value.is_null() {
            tracing::debug!(error = %err, "editor views replaced by empty list");
        }
        Vec::new()
    })
}

fn editor_views_value(views: &[EditorView]) -> Value {
    serde_json::to_value(views).unwrap_or(Value::Array(Vec::new()))
}

/// Apply a list of property maps onto `current`, position by position.
///
/// Wiring (`id`, `name`, `event_url`, `target`) is assigned by the owner and
/// skipped here. Anything that is not a list of maps yields an empty list.
pub(super) fn apply_components<T: Component + Clone + Default>(current: &[T], value: &Value) -> Vec<T> {
    let Some(items) = value.as_array() else {
        if !value.is_null() {
            tracing::debug!("editor children replaced by empty list");
        }
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let props = item.as_object()?;
            let mut component = current.get(index).cloned().unwrap_or_default();
            let previous = std::mem::replace(&mut component.base_mut().init, true);
            for (name, value) in props {
                if !matches!(name.as_str(), "id" | "name" | "event_url" | "target") {
                    component.set_property(name, value.clone());
                }
            }
            component.base_mut().init = previous;
            Some(component)
        })
        .collect()
}

pub(super) fn components_value<T: Component>(components: &[T]) -> Value {
    Value::Array(
        components
            .iter()
            .map(|component| Value::Object(component.properties()))
            .collect(),
    )
}

/// `view_row_3_...` → 3
pub(super) fn child_index(slot: &str, name: &str) -> Option<usize> {
    let rest = slot.strip_prefix(name)?.strip_prefix('_')?;
    rest.split('_').next()?.parse().ok()
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Editor {
    pub base: BaseComponent,
    pub title: String,
    pub icon: String,
    /// Key of the expanded view.
    pub view: String,
    pub views: Vec<EditorView>,
    pub rows: Vec<Row>,
    pub tables: Vec<Table>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            title: String::new(),
            icon: "FileText".into(),
            view: String::new(),
            views: Vec::new(),
            rows: Vec::new(),
            tables: Vec::new(),
        }
    }
}

impl Editor {
    pub fn new(title: impl Into<String>, views: Vec<EditorView>) -> Self {
        Self {
            title: title.into(),
            view: views.first().map(|view| view.key.clone()).unwrap_or_default(),
            views,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = tables;
        self
    }

    fn title_label(&self) -> Label {
        Label {
            base: self.base.static_child("title"),
            left_icon: self.icon.clone(),
            ..Label::new(self.title.as_str())
        }
    }

    fn tab_button(&self, view: &EditorView) -> Button {
        let mut base = self.base.child(&format!("{NAME_TAB_BTN}_{}", view.key));
        base.name = NAME_TAB_BTN.into();
        base.target = format!("#{}", self.base.id);
        let selected = view.key == self.view;
        Button::with_base(base, view.label.as_str())
            .prop("icon", view.icon.as_str())
            .prop("badge", view.badge.as_str())
            .prop("full", true)
            .prop("align", TextAlign::Left)
            .prop("selected", selected)
            .prop("disabled", selected)
            .with_data(json!({"key": view.key}))
            .with_style(json!({"border-radius": "0", "margin-top": "2px", "opacity": "1"}))
    }

    fn wire(&self, base: &mut BaseComponent, name: &str, index: usize) {
        base.id = format!("{}_{}_{}", self.base.id, name, index);
        base.name = name.to_owned();
        base.event_url = self.base.event_url.clone();
        base.target = self.base.target.clone();
        base.store = self.base.store.clone();
        base.on_response = None;
    }

    fn view_row(&self, index: usize) -> Row {
        let mut row = self.rows[index].clone();
        self.wire(&mut row.base, NAME_VIEW_ROW, index);
        row
    }

    fn view_table(&self, index: usize) -> Table {
        let mut table = self.tables[index].clone();
        self.wire(&mut table.base, NAME_VIEW_TABLE, index);
        table
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let (name, value) = match evt.trigger_name.as_str() {
            NAME_TAB_BTN => {
                let data = evt.trigger_data();
                let key = to_string(data.get("key").unwrap_or(&Value::Null), "");
                (EDITOR_EVENT_VIEW, Value::from(key))
            }
            NAME_VIEW_TABLE => {
                if ![TABLE_EVENT_ADD_ITEM, TABLE_EVENT_EDIT_CELL, TABLE_EVENT_ROW_SELECTED]
                    .contains(&evt.name.as_str())
                {
                    return self.base.respond(evt);
                }
                let value = json!({
                    "name": evt.name,
                    "value": evt.value,
                    "data": evt.trigger_data(),
                });
                (EDITOR_EVENT_FIELD, value)
            }
            _ => {
                let value = json!({
                    "name": evt.trigger_name,
                    "event": evt.name,
                    "value": evt.value,
                    "data": evt.trigger_data(),
                });
                (EDITOR_EVENT_FIELD, value)
            }
        };
        let evt = ResponseEvent::new(&*self, name)
            .with_value(value)
            .with_header(header::RETARGET, format!("#{}", self.base.id));
        self.base.respond(evt)
    }
}

impl Component for Editor {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_EDITOR
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("title", Value::from(self.title.as_str())),
            ("icon", Value::from(self.icon.as_str())),
            ("view", Value::from(self.view.as_str())),
            ("views", editor_views_value(&self.views)),
            ("rows", components_value(&self.rows)),
            ("tables", components_value(&self.tables)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "icon" => Value::from(to_string(value, "FileText")),
            "views" => editor_views_value(&editor_views(value)),
            "rows" => components_value(&apply_components(&self.rows, value)),
            "tables" => components_value(&apply_components(&self.tables, value)),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "title" | "icon" | "view" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "title" => self.title = text.clone(),
                    "icon" => self.icon = text.clone(),
                    _ => self.view = text.clone(),
                }
                Value::from(text)
            }
            "views" => {
                self.views = editor_views(&value);
                editor_views_value(&self.views)
            }
            "rows" => {
                self.rows = apply_components(&self.rows, &value);
                components_value(&self.rows)
            }
            "tables" => {
                self.tables = apply_components(&self.tables, &value);
                components_value(&self.tables)
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
        let evt = if let Some(view) = self
            .views
            .iter()
            .find(|view| slot == format!("{NAME_TAB_BTN}_{}", view.key))
        {
            self.tab_button(view).handle_request(event)
        } else if let Some(index) =
            child_index(&slot, NAME_VIEW_ROW).filter(|&index| index < self.rows.len())
        {
            self.view_row(index).handle_request(event)
        } else if let Some(index) =
            child_index(&slot, NAME_VIEW_TABLE).filter(|&index| index < self.tables.len())
        {
            self.view_table(index).handle_request(event)
        } else {
            return value_response(&*self, event);
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let title = self.title_label().render()?;
        let mut sections = Vec::with_capacity(self.views.len());
        for view in &self.views {
            let tab = self.tab_button(view).render()?;
            let mut panel = Vec::new();
            if view.key == self.view {
                for index in 0..self.rows.len() {
                    panel.push(self.view_row(index).render()?);
                }
                for index in 0..self.tables.len() {
                    panel.push(self.view_table(index).render()?);
                }
            }
            sections.push(html! {
                (tab)
                @if view.key == self.view {
                    div class="row-panel" { @for part in &panel { (part) } }
                }
            });
        }
        Ok(html! {
            div id=(self.base.id) class=(self.base.class_with(&[])) style=[self.base.style_attr()] {
                div class="page" {
                    div class="editor" {
                        div class="editor-title" { div class="cell" { (title) } }
                        div class="section-container" {
                            @for section in &sections { (section) }
                        }
                    }
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
    use crate::widgets::field::FieldType;
    use crate::widgets::row::{RowColumn, RowField};
    use crate::widgets::table::{TableField, TableFieldType};
    use pretty_assertions::assert_eq;

    fn editor() -> Editor {
        let views = vec![
            EditorView::new("main", "Main input", "ShoppingCart"),
            EditorView::new("item", "Item rows", "User").badge("3"),
        ];
        let row = Row::new(vec![RowColumn::new(
            "Active",
            RowField::new(FieldType::Bool, json!({"name": "active", "value": false})),
        )]);
        let table = Table::new(
            vec![TableField::new("name", TableFieldType::String, "Name")],
            vec![json!({"id": 1, "name": "Alpha"}).as_object().cloned().unwrap()],
        )
        .prop("add_item", true);
        Editor::new("Customer", views)
            .rows(vec![row])
            .tables(vec![table])
            .with_id("edi")
            .with_event_url("/event")
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn defaults() {
        let edi = Editor::default();
        assert_eq!(edi.icon, "FileText");
        assert_eq!(edi.validation("icon", &Value::Null), json!("FileText"));
        assert_eq!(edi.validation("views", &json!(3)), json!([]));
    }

    #[test]
    fn target_defaults_to_self() {
        let mut edi = editor();
        edi.render().unwrap();
        assert_eq!(edi.base.target, "#edi");
    }

    #[test]
    fn rows_survive_property_round_trip() {
        let mut edi = editor();
        let rows = edi.get_property("rows").unwrap();
        edi.set_property("rows", rows);
        assert_eq!(edi.rows.len(), 1);
        assert_eq!(edi.rows[0].columns[0].label, "Active");
        assert_eq!(edi.validation("rows", &json!("x")), json!([]));
    }

    #[test]
    fn child_index_parses_prefix() {
        assert_eq!(child_index("view_row_2_active_bool", NAME_VIEW_ROW), Some(2));
        assert_eq!(child_index("view_table_0", NAME_VIEW_TABLE), Some(0));
        assert_eq!(child_index("view_rowx", NAME_VIEW_ROW), None);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn only_selected_view_is_expanded() {
        let mut edi = editor();
        let html = edi.render().unwrap().into_string();
        assert_eq!(html.matches(r#"class="row-panel""#).count(), 1);
        assert!(html.contains(r#"id="edi_tab_btn_main""#));
        assert!(html.contains(r#"id="edi_view_row_0""#));
        assert!(html.contains(r#"id="edi_view_table_0""#));

        edi.set_property("view", json!("missing"));
        let html = edi.render().unwrap().into_string();
        assert!(!html.contains("row-panel"));
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn tab_selects_view() {
        let mut edi = editor();
        edi.render().unwrap();
        let evt = edi.on_request(&TriggerEvent::new("edi_tab_btn_item", NAME_TAB_BTN));
        assert_eq!(evt.name, EDITOR_EVENT_VIEW);
        assert_eq!(evt.value, json!("item"));
        assert_eq!(evt.header.get(header::RETARGET).map(String::as_str), Some("#edi"));
    }

    #[test]
    fn field_event_is_wrapped() {
        let mut edi = editor();
        let evt = edi.on_request(&TriggerEvent::new("edi_view_row_0_0_active_bool", "active"));
        assert_eq!(evt.name, EDITOR_EVENT_FIELD);
        assert_eq!(evt.value["name"], json!("active"));
        assert_eq!(evt.value["event"], json!("toggle_change"));
        assert_eq!(evt.value["value"], json!(true));
    }

    #[test]
    fn table_add_item_is_wrapped() {
        let mut edi = editor();
        let evt = edi.on_request(&TriggerEvent::new("edi_view_table_0_btn_add", "btn_add"));
        assert_eq!(evt.name, EDITOR_EVENT_FIELD);
        assert_eq!(evt.value["name"], json!(TABLE_EVENT_ADD_ITEM));
    }
}
