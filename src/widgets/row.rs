//! Row: a responsive line of labelled fields.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::{Field, FieldType};
use super::label::Label;
use crate::component::{component_boilerplate, value_response, BaseComponent, Component};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{to_boolean, to_string, to_value_map, PropertyMap};

pub const COMPONENT_TYPE_ROW: &str = "row";

const COLUMN_CLASSES: [&str; 4] = ["m12 l12", "m6 l6", "m4 l4", "m3 l3"];

/// Type and properties of a field placed in a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowField {
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub value: PropertyMap,
    /// Inside a form, only these fields post their own events.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub form_trigger: bool,
}

impl RowField {
    pub fn new(field_type: FieldType, value: Value) -> Self {
        Self {
            field_type,
            value: to_value_map(&value),
            form_trigger: false,
        }
    }

    /// Post events of this field even inside a form (builder).
    pub fn with_form_trigger(mut self) -> Self {
        self.form_trigger = true;
        self
    }

    /// The `name` entry of the field's properties.
    pub fn name(&self) -> String {
        self.value.get("name").map(|name| to_string(name, "")).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowColumn {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: RowField,
}

impl RowColumn {
    pub fn new(label: impl Into<String>, value: RowField) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub fn row_columns(value: &Value) -> Vec<RowColumn> {
    serde_json::from_value(value.clone()).unwrap_or_else(|err| {
        if !value.is_null() {
            tracing::debug!(error = %err, "row columns replaced by empty list");
        }
        Vec::new()
    })
}

pub fn row_columns_value(columns: &[RowColumn]) -> Value {
    serde_json::to_value(columns).unwrap_or(Value::Array(Vec::new()))
}

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// Up to four labelled fields side by side, stacked on small screens.
///
/// With `field_col` a single column is laid out label-left instead.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub base: BaseComponent,
    pub columns: Vec<RowColumn>,
    pub full: bool,
    pub border_top: bool,
    pub border_bottom: bool,
    pub field_col: bool,
    /// Set by the owning form: fields without `form_trigger` are left unwired
    /// and only submitted with the form.
    pub form: bool,
}

impl Row {
    pub fn new(columns: Vec<RowColumn>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn field_id(&self, index: usize) -> String {
        format!("{}_{}_{}", self.base.id, index, self.columns[index].value.name())
    }

    /// The field of column `index`, wired to the row's event URL, store and callback.
    fn field(&self, index: usize) -> Field {
        let column = &self.columns[index].value;
        let wired = !self.form || column.form_trigger;
        Field {
            base: BaseComponent {
                id: self.field_id(index),
                name: column.name(),
                event_url: if wired { self.base.event_url.clone() } else { String::new() },
                target: self.base.target.clone(),
                store: self.base.store.clone(),
                on_response: self.base.on_response.clone(),
                ..BaseComponent::default()
            },
            field_type: column.field_type,
            value: column.value.clone(),
        }
    }

    fn label(&self, index: usize, slot: &str) -> Result<Markup, RenderError> {
        Label {
            base: self.base.static_child(&format!("{index}_{slot}")),
            ..Label::new(self.columns[index].label.as_str())
        }
        .render()
    }

    fn field_markup(&self, index: usize) -> Result<Markup, RenderError> {
        self.field(index).render()
    }

    fn render_field_col(&self) -> Result<Markup, RenderError> {
        Ok(html! {
            div class="cell padding-small hide-small" style="width: 150px;" {
                (self.label(0, "label")?)
            }
            div class="cell padding-small" {
                div class="section-tiny-bottom hide-medium hide-large" {
                    (self.label(0, "label_small")?)
                }
                (self.field_markup(0)?)
            }
        })
    }

    fn render_columns(&self) -> Result<Markup, RenderError> {
        let col_class = format!("cell padding-small s12 {}", COLUMN_CLASSES[self.columns.len() - 1]);
        let mut cells = Vec::with_capacity(self.columns.len());
        for index in 0..self.columns.len() {
            cells.push(html! {
                div class=(col_class) {
                    div class="section-tiny-bottom" { (self.label(index, "label")?) }
                    (self.field_markup(index)?)
                }
            });
        }
        Ok(html! { @for cell in cells { (cell) } })
    }
}

impl Component for Row {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_ROW
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("columns", row_columns_value(&self.columns)),
            ("full", Value::from(self.full)),
            ("border_top", Value::from(self.border_top)),
            ("border_bottom", Value::from(self.border_bottom)),
            ("field_col", Value::from(self.field_col)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "columns" => row_columns_value(&row_columns(value)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "columns" => {
                self.columns = row_columns(&value);
                row_columns_value(&self.columns)
            }
            "full" | "border_top" | "border_bottom" | "field_col" => {
                let flag = to_boolean(&value, false);
                match name {
                    "full" => self.full = flag,
                    "border_top" => self.border_top = flag,
                    "border_bottom" => self.border_bottom = flag,
                    _ => self.field_col = flag,
                }
                Value::from(flag)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    /// Field events are answered by the field itself, through the row's callback.
    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let owner = (0..self.columns.len()).find(|&index| {
            let id = self.field_id(index);
            event.id == id || event.id.strip_prefix(id.as_str()).is_some_and(|rest| rest.starts_with('_'))
        });
        match owner {
            Some(index) => self.field(index).handle_request(event),
            None => value_response(&*self, event),
        }
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let class = self.base.class_with(&["row section-tiny"]);
        let class = [
            class.as_str(),
            if self.full { "full" } else { "" },
            if self.border_top { "border-top" } else { "" },
            if self.border_bottom { "border-bottom" } else { "" },
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
        let count = self.columns.len();
        let content = if count == 1 && self.field_col {
            self.render_field_col()?
        } else if (1..=COLUMN_CLASSES.len()).contains(&count) && !self.field_col {
            self.render_columns()?
        } else {
            html! {}
        };
        Ok(html! {
            div id=(self.base.id) name=(self.base.name) class=(class) style=[self.base.style_attr()] {
                (content)
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
    use crate::component::ComponentExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text_column(label: &str, name: &str) -> RowColumn {
        RowColumn::new(label, RowField::new(FieldType::Text, json!({"name": name})))
    }

    // -----------------------------------------------------------------------
    // Columns
    // -----------------------------------------------------------------------

    #[test]
    fn columns_round_trip_through_json() {
        let row = Row::default();
        let columns = json!([{"label": "Note", "value": {"type": "area", "value": {"name": "note"}}}]);
        assert_eq!(row.validation("columns", &columns), columns);
        assert_eq!(row.validation("columns", &json!("broken")), json!([]));
    }

    #[test]
    fn unknown_field_type_is_text() {
        let columns = row_columns(&json!([{"label": "X", "value": {"type": "slider"}}]));
        assert_eq!(columns[0].value.field_type, FieldType::Text);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn column_class_by_count() {
        let mut row = Row::new(vec![
            text_column("A", "a"),
            text_column("B", "b"),
            text_column("C", "c"),
        ])
        .with_id("row");
        let html = row.render().unwrap().into_string();
        assert_eq!(html.matches("cell padding-small s12 m4 l4").count(), 3);
        assert!(html.contains(r#"id="row_1_b_text""#));
    }

    #[test]
    fn field_col_layout() {
        let mut row = Row::new(vec![text_column("Comment", "comment")])
            .with_id("row")
            .prop("field_col", true)
            .prop("border_top", true);
        let html = row.render().unwrap().into_string();
        assert!(html.starts_with(r#"<div id="row" name="row" class="row section-tiny border-top">"#));
        assert!(html.contains(r#"style="width: 150px;""#));
        assert_eq!(html.matches("Comment").count(), 2);
    }

    #[test]
    fn too_many_columns_render_empty() {
        let columns = (0..5).map(|i| text_column("L", &format!("f{i}"))).collect();
        let mut row = Row::new(columns).with_id("row");
        let html = row.render().unwrap().into_string();
        assert!(!html.contains("cell"));
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn forwards_field_event() {
        let mut row = Row::new(vec![
            text_column("Name", "name"),
            RowColumn::new("Active", RowField::new(FieldType::Bool, json!({"name": "active"}))),
        ])
        .with_id("row")
        .with_event_url("/event");
        let evt = row.on_request(&TriggerEvent::new("row_1_active_bool", "active"));
        assert_eq!(evt.name, "toggle_change");
        assert_eq!(evt.value, json!(true));
    }

    #[test]
    fn form_rows_wire_trigger_fields_only() {
        let mut row = Row::new(vec![
            text_column("Name", "name"),
            RowColumn::new(
                "Active",
                RowField::new(FieldType::Bool, json!({"name": "active"})).with_form_trigger(),
            ),
        ])
        .with_id("row")
        .with_event_url("/event");
        row.form = true;
        let html = row.render().unwrap().into_string();
        assert!(!row.base.store.is_registered("row_0_name_text"));
        assert!(row.base.store.is_registered("row_1_active_bool"));
        assert_eq!(html.matches(r#"hx-post="/event""#).count(), 1);
    }

    #[test]
    fn unknown_trigger_is_a_value_event() {
        let mut row = Row::new(vec![text_column("Name", "name")]).with_id("row");
        let evt = row.on_request(&TriggerEvent::new("row_7_x", "x"));
        assert_eq!(evt.name, "value");
    }
}
