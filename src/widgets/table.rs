//! Table: a filterable, sortable, paged data grid.
//!
//! Rows are free-form value maps. Columns come from `fields`, or from the
//! keys of the first row when no fields are given. The table answers its own
//! events: every response retargets to the table id so the whole grid is
//! re-rendered after a page, filter or sort change.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset};
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::button::{Button, ButtonStyle};
use super::icon::svg_icon;
use super::input::Input;
use super::label::{Label, COMPONENT_TYPE_LABEL};
use super::pagination::{valid_page_size, Pagination, PAGINATION_EVENT_PAGE_SIZE, VALID_PAGE_SIZE};
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, in_slot, target_value, value_response, BaseComponent,
    Component, ComponentExt, EnumValue, PaginationType, TextAlign, VerticalAlign,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::render::{style_attr, HxAttrs};
use crate::value::{
    string_to_datetime, to_boolean, to_float, to_integer, to_map_list, to_string, PropertyMap,
    StringMap,
};

pub const COMPONENT_TYPE_TABLE: &str = "table";

pub const TABLE_EVENT_CURRENT_PAGE: &str = "current_page";
pub const TABLE_EVENT_FILTER_CHANGE: &str = "filter_change";
pub const TABLE_EVENT_ADD_ITEM: &str = "add_item";
pub const TABLE_EVENT_EDIT_CELL: &str = "edit_cell";
pub const TABLE_EVENT_ROW_SELECTED: &str = "row_selected";
pub const TABLE_EVENT_SORT: &str = "table_sort";

const SLOT_TOP_PAGINATION: &str = "top_pagination";
const SLOT_BOTTOM_PAGINATION: &str = "bottom_pagination";
const SLOT_FILTER: &str = "filter";
const SLOT_BTN_ADD: &str = "btn_add";
const NAME_HEADER_SORT: &str = "header_sort";
const NAME_LINK_CELL: &str = "link_cell";
const NAME_DATA_ROW: &str = "data_row";

string_enum! {
    /// Value type of a table field; selects the cell format.
    pub enum TableFieldType {
        String => "string",
        Integer => "integer",
        Float => "float",
        DateTime => "datetime",
        Date => "date",
        Time => "time",
        Bool => "bool",
        Link => "link",
        /// The real type is read per row from `{name}_meta`.
        Meta => "meta",
    }
    default String
}

impl TableFieldType {
    fn date_layout(self) -> Option<&'static str> {
        match self {
            TableFieldType::Date => Some("%Y-%m-%d"),
            TableFieldType::Time => Some("%H:%M"),
            TableFieldType::DateTime => Some("%Y-%m-%d %H:%M"),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Fields and columns
// ---------------------------------------------------------------------------

/// Renders the cell of a custom column from the row and the cell value.
pub type CellRenderer = Rc<dyn Fn(&PropertyMap, &Value) -> Markup>;

/// A custom column with its own header and, optionally, its own cell renderer.
///
/// The renderer is code, not data: it is not serialized, and a column
/// restored from a property value keeps the renderer of the column with the
/// same id.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableColumn {
    pub id: String,
    pub header: String,
    pub header_style: StringMap,
    pub cell_style: StringMap,
    #[serde(skip)]
    pub cell: Option<CellRenderer>,
}

impl TableColumn {
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            ..Self::default()
        }
    }

    /// Install a cell renderer (builder).
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&PropertyMap, &Value) -> Markup + 'static,
    {
        self.cell = Some(Rc::new(render));
        self
    }
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("header_style", &self.header_style)
            .field("cell_style", &self.cell_style)
            .field("cell", &self.cell.is_some())
            .finish()
    }
}

/// A table column bound to a row field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableField {
    pub name: String,
    pub field_type: TableFieldType,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    /// Color number cells by value.
    pub format: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<TableColumn>,
}

impl TableField {
    pub fn new(name: impl Into<String>, field_type: TableFieldType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
            ..Self::default()
        }
    }

    /// A field rendered by a custom column.
    pub fn custom(column: TableColumn) -> Self {
        Self {
            name: column.id.clone(),
            column: Some(column),
            ..Self::default()
        }
    }

    pub fn align(mut self, text_align: TextAlign) -> Self {
        self.text_align = Some(text_align);
        self
    }

    pub fn vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.vertical_align = Some(vertical_align);
        self
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Column id: the custom column's id or the field name.
    pub fn key(&self) -> &str {
        match &self.column {
            Some(column) => column.id.as_str(),
            None => self.name.as_str(),
        }
    }
}

/// Parse a list of field definitions, skipping malformed entries.
pub fn table_fields(value: &Value) -> Vec<TableField> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Field definitions as a property value.
pub fn table_fields_value(fields: &[TableField]) -> Value {
    serde_json::to_value(fields).unwrap_or_default()
}

/// Parse `value` into fields, keeping the cell renderers of the `current`
/// custom columns with the same id. An empty list is derived from the first
/// of `rows`.
pub fn check_table_fields(current: &[TableField], rows: &[PropertyMap], value: &Value) -> Vec<TableField> {
    let mut fields = table_fields(value);
    if fields.is_empty() {
        return derive_fields(rows.first());
    }
    for column in fields.iter_mut().filter_map(|field| field.column.as_mut()) {
        if column.cell.is_none() {
            column.cell = current
                .iter()
                .filter_map(|field| field.column.as_ref())
                .find(|known| known.id == column.id)
                .and_then(|known| known.cell.clone());
        }
    }
    fields
}

/// One string field per key of `row`, labelled with the key.
pub fn derive_fields(row: Option<&PropertyMap>) -> Vec<TableField> {
    row.map(|row| {
        row.keys()
            .map(|key| TableField::new(key.as_str(), TableFieldType::String, key.as_str()))
            .collect()
    })
    .unwrap_or_default()
}

/// A column as it is rendered: header text and the resolved styles.
struct ColumnView<'a> {
    id: &'a str,
    header: &'a str,
    field: &'a TableField,
    header_style: StringMap,
    cell_style: StringMap,
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Table {
    pub base: BaseComponent,
    /// Row field holding the row id. Rows without it are identified by index.
    pub row_key: String,
    pub rows: Vec<PropertyMap>,
    pub fields: Vec<TableField>,
    pub pagination: PaginationType,
    pub current_page: i64,
    pub page_size: i64,
    pub hide_paginaton_size: bool,
    /// Show the filter input.
    pub table_filter: bool,
    /// Show the add button next to the filter input.
    pub add_item: bool,
    pub filter_placeholder: String,
    pub filter_value: String,
    pub case_sensitive: bool,
    pub label_yes: String,
    pub label_no: String,
    pub label_add: String,
    pub add_icon: String,
    /// Cell padding of generated columns.
    pub table_padding: String,
    pub sort_col: String,
    pub sort_asc: bool,
    /// Rows are clickable and post `row_selected`.
    pub row_selected: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            row_key: "id".into(),
            rows: Vec::new(),
            fields: Vec::new(),
            pagination: PaginationType::Top,
            current_page: 1,
            page_size: 10,
            hide_paginaton_size: false,
            table_filter: false,
            add_item: false,
            filter_placeholder: labels().table_filter_placeholder.clone(),
            filter_value: String::new(),
            case_sensitive: false,
            label_yes: labels().table_yes.clone(),
            label_no: labels().table_no.clone(),
            label_add: labels().table_add.clone(),
            add_icon: "Plus".into(),
            table_padding: String::new(),
            sort_col: String::new(),
            sort_asc: false,
            row_selected: false,
        }
    }
}

impl Table {
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

    /// Fields to render: the configured ones or those derived from the first row.
    pub fn view_fields(&self) -> Vec<TableField> {
        if self.fields.is_empty() {
            derive_fields(self.rows.first())
        } else {
            self.fields.clone()
        }
    }

    /// Rows matching the filter value; a match is a substring of any row value.
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
        self.rows
            .iter()
            .filter(|row| row.values().any(|value| fold(to_string(value, "")).contains(&filter)))
            .collect()
    }

    /// Filtered rows in sort order.
    pub fn view_rows(&self) -> Vec<&PropertyMap> {
        let mut rows = self.filtered_rows();
        if self.sort_col.is_empty() {
            return rows;
        }
        let field_type = self
            .view_fields()
            .iter()
            .find(|field| field.key() == self.sort_col)
            .map(|field| field.field_type)
            .unwrap_or_default();
        let col = self.sort_col.as_str();
        let cell = |row: &PropertyMap| row.get(col).cloned().unwrap_or(Value::Null);
        rows.sort_by(|a, b| {
            let (a, b) = (cell(a), cell(b));
            let order = match field_type {
                TableFieldType::Integer => to_integer(&a, 0).cmp(&to_integer(&b, 0)),
                TableFieldType::Float => to_float(&a, 0.0)
                    .partial_cmp(&to_float(&b, 0.0))
                    .unwrap_or(Ordering::Equal),
                _ => to_string(&a, "").cmp(&to_string(&b, "")),
            };
            if self.sort_asc {
                order
            } else {
                order.reverse()
            }
        });
        rows
    }

    /// Number of pages of the filtered rows.
    pub fn page_count(&self) -> i64 {
        let rows = self.filtered_rows().len() as i64;
        let size = self.page_size.max(1);
        (rows + size - 1) / size
    }

    /// The rows shown on the current page.
    pub fn page_rows(&self) -> Vec<&PropertyMap> {
        let rows = self.view_rows();
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

    /// Row identifier: the `row_key` value, or the index on the page.
    fn row_ident(&self, row: &PropertyMap, index: usize) -> String {
        row.get(&self.row_key)
            .map(|key| to_string(key, ""))
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| index.to_string())
    }

    fn columns<'a>(&self, fields: &'a [TableField]) -> Vec<ColumnView<'a>> {
        fields
            .iter()
            .map(|field| match &field.column {
                Some(column) => ColumnView {
                    id: column.id.as_str(),
                    header: if column.header.is_empty() {
                        column.id.as_str()
                    } else {
                        column.header.as_str()
                    },
                    field,
                    header_style: column.header_style.clone(),
                    cell_style: column.cell_style.clone(),
                },
                None => {
                    let mut header_style = StringMap::new();
                    let mut cell_style = StringMap::new();
                    if matches!(field.field_type, TableFieldType::Integer | TableFieldType::Float) {
                        header_style.insert("text-align".into(), "right".into());
                    }
                    if !self.table_padding.is_empty() {
                        header_style.insert("padding".into(), self.table_padding.clone());
                        cell_style.insert("padding".into(), self.table_padding.clone());
                    }
                    if let Some(align) = field.vertical_align {
                        cell_style.insert("vertical-align".into(), align.as_str().into());
                    }
                    if let Some(align) = field.text_align {
                        cell_style.insert("text-align".into(), align.css().into());
                    }
                    ColumnView {
                        id: field.name.as_str(),
                        header: if field.label.is_empty() {
                            field.name.as_str()
                        } else {
                            field.label.as_str()
                        },
                        field,
                        header_style,
                        cell_style,
                    }
                }
            })
            .collect()
    }

    /// Type a `meta` field takes in `row`.
    fn meta_type(row: &PropertyMap, field: &TableField) -> TableFieldType {
        let meta = row
            .get(&format!("{}_meta", field.name))
            .cloned()
            .unwrap_or(Value::Null);
        match check_enum_value(&meta, TableFieldType::String) {
            TableFieldType::Meta => TableFieldType::String,
            field_type => field_type,
        }
    }

    /// Text of the link a cell shows, or `None` for a plain cell.
    fn link_text(row: &PropertyMap, field: &TableField) -> Option<String> {
        let value = row.get(&field.name).cloned().unwrap_or(Value::Null);
        match field.field_type {
            _ if field.column.is_some() => None,
            TableFieldType::Link => Some(to_string(&value, "")),
            TableFieldType::Meta if Self::meta_type(row, field) == TableFieldType::Link => {
                Some(to_string(&value, ""))
            }
            TableFieldType::String => row
                .get(&format!("{}_link", field.name))
                .map(|link| to_string(link, "")),
            _ => None,
        }
    }

    fn header_label(&self, column: &ColumnView<'_>) -> Label {
        let mut base = self.base.child(&format!("header_{}", column.id));
        base.name = NAME_HEADER_SORT.into();
        Label {
            base,
            ..Label::default()
        }
        .with_data(json!({"fieldname": column.id, "fieldtype": column.field.field_type}))
    }

    fn row_label(&self, row: &PropertyMap, index: usize) -> Label {
        let mut base = self.base.child(&format!("row_{}", self.row_ident(row, index)));
        base.name = NAME_DATA_ROW.into();
        Label {
            base,
            ..Label::default()
        }
        .with_data(json!({"row": row, "index": index}))
    }

    fn link_label(&self, row: &PropertyMap, index: usize, field: &TableField, text: String) -> Label {
        let slot = format!("link_{}_{}", field.name, self.row_ident(row, index));
        let mut base = self.base.child(&slot);
        base.name = NAME_LINK_CELL.into();
        Label {
            base,
            ..Label::new(text.as_str())
        }
        .with_data(json!({
            "value": text,
            "fieldname": field.name,
            "result": row.get(&field.name).cloned().unwrap_or(Value::Null),
            "row": row,
        }))
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

    // -----------------------------------------------------------------------
    // Cells
    // -----------------------------------------------------------------------

    fn number_cell(&self, row: &PropertyMap, field: &TableField, value: &Value, format: bool) -> Markup {
        let number = to_float(value, 0.0);
        let mut style = StringMap::new();
        if format {
            style.insert("font-weight".into(), "bold".into());
            if to_boolean(row.get("edited").unwrap_or(&Value::Null), false) {
                style.insert("text-decoration".into(), "line-through".into());
            } else if number != 0.0 {
                style.insert("color".into(), "red".into());
            } else {
                style.insert("color".into(), "green".into());
            }
        }
        html! {
            div class="number-cell" {
                span class="cell-label" { (field.label) }
                span style=[style_attr(&style)] { (number) }
            }
        }
    }

    fn date_cell(field: &TableField, value: &Value, field_type: TableFieldType) -> Markup {
        let layout = field_type.date_layout().unwrap_or("%Y-%m-%d");
        let text = string_to_datetime(&to_string(value, ""))
            .map(|dt: DateTime<FixedOffset>| dt.format(layout).to_string())
            .unwrap_or_default();
        html! {
            span class="cell-label" { (field.label) }
            span { (text) }
        }
    }

    fn bool_cell(&self, field: &TableField, value: &Value) -> Markup {
        let (icon, text) = if to_boolean(value, false) {
            ("CheckSquare", &self.label_yes)
        } else {
            ("SquareEmpty", &self.label_no)
        };
        html! {
            span class="cell-label" { (field.label) }
            (svg_icon(icon, 24.0, 24.0, None))
            span class="middle" { " " (text) }
        }
    }

    fn string_cell(field: &TableField, text: &str, color: Option<String>) -> Markup {
        let style = color.map(|color| format!("color:{color};"));
        html! {
            span class="cell-label" { (field.label) }
            span style=[style] { (text) }
        }
    }

    fn cell(&self, row: &PropertyMap, index: usize, field: &TableField) -> Result<Markup, RenderError> {
        let value = row.get(field.key()).cloned().unwrap_or(Value::Null);
        if let Some(column) = &field.column {
            return Ok(match &column.cell {
                Some(render) => render(row, &value),
                None => html! { (to_string(&value, "")) },
            });
        }
        if let Some(text) = Self::link_text(row, field) {
            let mut label = self.link_label(row, index, field, text);
            let link = label.render()?;
            return Ok(html! {
                span class="cell-label" { (field.label) }
                (link)
            });
        }
        let field_type = match field.field_type {
            TableFieldType::Meta => Self::meta_type(row, field),
            field_type => field_type,
        };
        let markup = match field_type {
            TableFieldType::Integer | TableFieldType::Float => {
                let format = field.format && field.field_type != TableFieldType::Meta;
                self.number_cell(row, field, &value, format)
            }
            TableFieldType::Date | TableFieldType::Time | TableFieldType::DateTime
                if field.field_type != TableFieldType::Meta =>
            {
                Self::date_cell(field, &value, field_type)
            }
            TableFieldType::Bool => self.bool_cell(field, &value),
            _ => {
                let color = row
                    .get(&format!("{}_color", field.name))
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .filter(|_| field.field_type == TableFieldType::String);
                Self::string_cell(field, &to_string(&value, ""), color)
            }
        };
        Ok(markup)
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Translate an event of a child control or cell.
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
                    TABLE_EVENT_CURRENT_PAGE
                }
            }
            NAME_HEADER_SORT => {
                let data = evt.trigger_data();
                let sort_col = to_string(data.get("fieldname").unwrap_or(&Value::Null), "");
                let sort_asc = self.sort_col != sort_col || !self.sort_asc;
                self.set_property("sort_asc", Value::from(sort_asc));
                value = self.set_property("sort_col", Value::from(sort_col));
                TABLE_EVENT_SORT
            }
            SLOT_FILTER => {
                self.set_property("filter_value", value.clone());
                TABLE_EVENT_FILTER_CHANGE
            }
            SLOT_BTN_ADD => TABLE_EVENT_ADD_ITEM,
            NAME_LINK_CELL => {
                value = Value::Object(evt.trigger_data());
                TABLE_EVENT_EDIT_CELL
            }
            NAME_DATA_ROW => {
                value = Value::Object(evt.trigger_data());
                TABLE_EVENT_ROW_SELECTED
            }
            _ => return evt,
        };
        let evt = ResponseEvent::new(&*self, name)
            .with_value(value)
            .with_header(header::RETARGET, format!("#{}", self.base.id));
        self.base.respond(evt)
    }

    /// Find the header, row or link cell a trigger id belongs to.
    fn cell_label(&self, id: &str) -> Option<Label> {
        let fields = self.view_fields();
        for column in self.columns(&fields) {
            let label = self.header_label(&column);
            if label.base.id == id {
                return Some(label);
            }
        }
        for (index, row) in self.page_rows().into_iter().enumerate() {
            let label = self.row_label(row, index);
            if label.base.id == id {
                return Some(label);
            }
            for field in &fields {
                if let Some(text) = Self::link_text(row, field) {
                    let label = self.link_label(row, index, field, text);
                    if label.base.id == id {
                        return Some(label);
                    }
                }
            }
        }
        None
    }
}

impl Component for Table {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_TABLE
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("row_key", Value::from(self.row_key.as_str())),
            ("rows", Value::from(self.rows.clone())),
            ("fields", table_fields_value(&self.fields)),
            ("pagination", self.pagination.into()),
            ("current_page", Value::from(self.current_page)),
            ("page_size", Value::from(self.page_size)),
            ("hide_paginaton_size", Value::from(self.hide_paginaton_size)),
            ("table_filter", Value::from(self.table_filter)),
            ("add_item", Value::from(self.add_item)),
            ("filter_placeholder", Value::from(self.filter_placeholder.as_str())),
            ("filter_value", Value::from(self.filter_value.as_str())),
            ("case_sensitive", Value::from(self.case_sensitive)),
            ("label_yes", Value::from(self.label_yes.as_str())),
            ("label_no", Value::from(self.label_no.as_str())),
            ("label_add", Value::from(self.label_add.as_str())),
            ("add_icon", Value::from(self.add_icon.as_str())),
            ("table_padding", Value::from(self.table_padding.as_str())),
            ("sort_col", Value::from(self.sort_col.as_str())),
            ("sort_asc", Value::from(self.sort_asc)),
            ("row_selected", Value::from(self.row_selected)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "row_key" => Value::from(to_string(value, "id")),
            "rows" => Value::from(to_map_list(value)),
            "fields" => table_fields_value(&check_table_fields(&self.fields, &self.rows, value)),
            "pagination" => check_enum_value(value, PaginationType::Top).into(),
            "current_page" => Value::from(self.check_page(value)),
            "page_size" => Value::from(valid_page_size(to_integer(value, 10), VALID_PAGE_SIZE[0])),
            "filter_placeholder" => {
                Value::from(to_string(value, &labels().table_filter_placeholder))
            }
            "label_yes" => Value::from(to_string(value, &labels().table_yes)),
            "label_no" => Value::from(to_string(value, &labels().table_no)),
            "label_add" => Value::from(to_string(value, &labels().table_add)),
            "add_icon" => Value::from(to_string(value, "Plus")),
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
            "hide_paginaton_size" | "table_filter" | "add_item" | "case_sensitive" | "sort_asc"
            | "row_selected" => {
                let flag = to_boolean(&value, false);
                match name {
                    "hide_paginaton_size" => self.hide_paginaton_size = flag,
                    "table_filter" => self.table_filter = flag,
                    "add_item" => self.add_item = flag,
                    "case_sensitive" => self.case_sensitive = flag,
                    "sort_asc" => self.sort_asc = flag,
                    _ => self.row_selected = flag,
                }
                Value::from(flag)
            }
            "row_key" | "filter_placeholder" | "filter_value" | "label_yes" | "label_no"
            | "label_add" | "add_icon" | "table_padding" | "sort_col" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "row_key" => self.row_key = text.clone(),
                    "filter_placeholder" => self.filter_placeholder = text.clone(),
                    "filter_value" => self.filter_value = text.clone(),
                    "label_yes" => self.label_yes = text.clone(),
                    "label_no" => self.label_no = text.clone(),
                    "label_add" => self.label_add = text.clone(),
                    "add_icon" => self.add_icon = text.clone(),
                    "table_padding" => self.table_padding = text.clone(),
                    _ => self.sort_col = text.clone(),
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
        } else if let Some(mut label) = self.cell_label(&event.id) {
            label.handle_request(event)
        } else {
            return value_response(&*self, event);
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let fields = self.view_fields();
        let columns = self.columns(&fields);
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
            .table_filter
            .then(|| self.filter_input().render())
            .transpose()?;
        let add = (self.table_filter && self.add_item)
            .then(|| self.add_button().render())
            .transpose()?;

        let header_hx = HxAttrs::from_base(&self.base, true);
        let mut headers = Vec::with_capacity(columns.len());
        for column in &columns {
            let label = self.header_label(column);
            label.base.register(COMPONENT_TYPE_LABEL);
            let sort = match (self.sort_col == column.id, self.sort_asc) {
                (true, true) => "sort sort-asc",
                (true, false) => "sort sort-desc",
                _ => "sort sort-none",
            };
            headers.push(html! {
                th id=(label.base.id) name="header_cell" class=(sort)
                    hx-post=[header_hx.post.as_deref()] hx-target=[header_hx.target.as_deref()]
                    hx-swap=[header_hx.swap.as_deref()] hx-sync=[header_hx.sync.as_deref()]
                    hx-indicator=[header_hx.indicator.as_deref()]
                    style=[style_attr(&column.header_style)] {
                    (column.header)
                }
            });
        }

        let mut body = Vec::new();
        for (index, row) in self.page_rows().into_iter().enumerate() {
            let disabled = to_boolean(row.get("disabled").unwrap_or(&Value::Null), false);
            let label = self.row_label(row, index);
            let hx = HxAttrs::from_base(&self.base, self.row_selected && !disabled);
            if self.row_selected {
                label.base.register(COMPONENT_TYPE_LABEL);
            }
            let pointer = match (disabled, self.row_selected) {
                (true, _) => "cursor-disabled",
                (false, true) => "cursor-pointer",
                _ => "",
            };
            let mut cells = Vec::with_capacity(columns.len());
            for column in &columns {
                let cell = self.cell(row, index, column.field)?;
                cells.push(html! { td style=[style_attr(&column.cell_style)] { (cell) } });
            }
            body.push(html! {
                tr id=(label.base.id) class=(pointer)
                    hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                    hx-sync=[hx.sync] hx-indicator=[hx.indicator] {
                    @for cell in &cells { (cell) }
                }
            });
        }

        Ok(html! {
            div id=(self.base.id) name=(self.base.name) class=(self.base.class_with(&["responsive"])) {
                @if self.table_filter || top_pagination.is_some() {
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
                div class="table-wrap" {
                    table class="ui-table" style=[self.base.style_attr()] {
                        thead { tr { @for th in &headers { (th) } } }
                        tbody { @for tr in &body { (tr) } }
                    }
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

    fn row(value: Value) -> PropertyMap {
        value.as_object().cloned().unwrap_or_default()
    }

    fn pets() -> Vec<PropertyMap> {
        vec![
            row(json!({"id": 1, "name": "Fluffy", "age": 9, "breed": "calico"})),
            row(json!({"id": 2, "name": "Luna", "age": 10, "breed": "long hair"})),
            row(json!({"id": 3, "name": "Cracker", "age": 8, "breed": "fat"})),
            row(json!({"id": 4, "name": "Pig", "age": 6, "breed": "Calico"})),
            row(json!({"id": 5, "name": "Robin", "age": 11, "breed": "short hair"})),
            row(json!({"id": 6, "name": "Zoe", "age": 2, "breed": "calico"})),
        ]
    }

    fn table() -> Table {
        let fields = vec![
            TableField::new("name", TableFieldType::String, "Name"),
            TableField::new("age", TableFieldType::Integer, "Age"),
            TableField::new("breed", TableFieldType::String, "Breed"),
        ];
        Table::new(fields, pets())
            .with_id("tbl")
            .with_event_url("/event")
            .prop("page_size", 5)
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn defaults_and_fallbacks() {
        let tbl = table();
        assert_eq!(tbl.validation("row_key", &Value::Null), json!("id"));
        assert_eq!(tbl.validation("pagination", &json!("side")), json!("top"));
        assert_eq!(tbl.validation("page_size", &json!(7)), json!(5));
        assert_eq!(tbl.validation("page_size", &Value::Null), json!(10));
        assert_eq!(tbl.validation("label_yes", &json!("")), json!("YES"));
        assert_eq!(tbl.validation("add_icon", &Value::Null), json!("Plus"));
    }

    #[test]
    fn current_page_clamped_to_filtered_rows() {
        let mut tbl = table();
        assert_eq!(tbl.page_count(), 2);
        assert_eq!(tbl.validation("current_page", &json!(3)), json!(2));
        tbl.set_property("filter_value", json!("calico"));
        assert_eq!(tbl.page_count(), 1);
        assert_eq!(tbl.validation("current_page", &json!(2)), json!(1));
        assert_eq!(tbl.validation("current_page", &json!(-4)), json!(1));
    }

    #[test]
    fn fields_derived_from_first_row() {
        let tbl = Table::new(Vec::new(), pets());
        let names: Vec<_> = tbl.view_fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["age", "breed", "id", "name"]);
        let fields = table_fields(&tbl.validation("fields", &json!([])));
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].label, "age");
    }

    #[test]
    fn fields_keep_cell_renderers() {
        let column = TableColumn::new("edit", "Edit").cell(|_, _| html! { b { "x" } });
        let mut tbl = Table::new(vec![TableField::custom(column)], pets());
        tbl.init_props();
        let restored = tbl.fields[0].column.as_ref().unwrap();
        assert!(restored.cell.is_some());
        assert_eq!(restored.header, "Edit");
    }

    #[test]
    fn target_defaults_to_self() {
        let mut tbl = table();
        tbl.init_props();
        assert_eq!(tbl.base.target, "#tbl");
    }

    // -----------------------------------------------------------------------
    // Rows
    // -----------------------------------------------------------------------

    #[test]
    fn filter_ignores_case_by_default() {
        let mut tbl = table().prop("filter_value", "CALICO");
        assert_eq!(tbl.filtered_rows().len(), 3);
        tbl.set_property("case_sensitive", json!(true));
        tbl.set_property("filter_value", json!("Calico"));
        assert_eq!(tbl.filtered_rows().len(), 1);
    }

    #[test]
    fn sort_by_field_type() {
        let tbl = table().prop("sort_col", "age").prop("sort_asc", true);
        let ages: Vec<_> = tbl.view_rows().iter().map(|r| r["age"].clone()).collect();
        assert_eq!(ages, vec![json!(2), json!(6), json!(8), json!(9), json!(10), json!(11)]);
        let tbl = table().prop("sort_col", "name");
        let first = tbl.view_rows()[0]["name"].clone();
        assert_eq!(first, json!("Zoe"));
    }

    #[test]
    fn page_rows_follow_current_page() {
        let tbl = table().prop("current_page", 2);
        let rows = tbl.page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], json!("Zoe"));
        let all = table().prop("pagination", "none");
        assert_eq!(all.page_rows().len(), 6);
    }

    #[test]
    fn restored_page_survives_rebuild() {
        let rows: Vec<PropertyMap> = (1..=20)
            .map(|id| row(json!({"id": id, "name": format!("Pet {id}")})))
            .collect();
        let store = crate::component::RequestStore::new();
        store.record("tbl", "page_size", json!(5));
        store.record("tbl", "current_page", json!(3));

        let mut tbl = Table::new(Vec::new(), rows).with_id("tbl").with_store(&store);
        tbl.init_props();
        assert_eq!(tbl.page_size, 5);
        assert_eq!(tbl.current_page, 3);
        assert_eq!(tbl.page_rows()[0]["id"], json!(11));
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn render_grid() {
        let mut tbl = table().prop("table_filter", true).prop("add_item", true);
        let html = tbl.render().unwrap().into_string();
        assert!(html.starts_with(r#"<div id="tbl" name="tbl" class="responsive">"#));
        assert!(html.contains(r#"id="tbl_top_pagination""#));
        assert!(html.contains(r#"id="tbl_filter""#));
        assert!(html.contains(r#"id="tbl_btn_add""#));
        assert!(html.contains(r#"<th id="tbl_header_name" name="header_cell" class="sort sort-none" hx-post="/event""#));
        assert!(html.contains(r#"<tr id="tbl_row_1" class="">"#));
        assert!(!html.contains("tbl_row_6"));
        assert!(!html.contains("bottom_pagination"));
        assert!(tbl.base.store.is_registered("tbl_header_age"));
    }

    #[test]
    fn render_cell_formats() {
        let fields = vec![
            TableField::new("valid", TableFieldType::Bool, "Valid"),
            TableField::new("date", TableFieldType::Date, "From"),
            TableField::new("levels", TableFieldType::Float, "Levels").format(true),
            TableField::new("name", TableFieldType::String, "Name"),
            TableField::new("product", TableFieldType::Link, "Product"),
            TableField::new("deffield", TableFieldType::Meta, "Multi"),
        ];
        let rows = vec![row(json!({
            "id": 7, "valid": "true", "date": "2000-03-06T10:00:00", "levels": -3.5,
            "name": "Name1", "name_color": "red", "product": "Product1",
            "deffield": 123, "deffield_meta": "integer",
        }))];
        let mut tbl = Table::new(fields, rows).with_id("tbl").with_event_url("/event");
        let html = tbl.render().unwrap().into_string();
        assert!(html.contains(r#"<span class="middle"> YES</span>"#));
        assert!(html.contains("<span>2000-03-06</span>"));
        assert!(html.contains(r#"<span style="color:red;font-weight:bold;">-3.5</span>"#));
        assert!(html.contains(r#"<span style="color:red;">Name1</span>"#));
        assert!(html.contains(r#"id="tbl_link_product_7""#));
        assert!(html.contains("<span>123</span>"));
        assert!(tbl.base.store.is_registered("tbl_link_product_7"));
    }

    #[test]
    fn custom_column_renderer() {
        let column = TableColumn::new("name", "Custom").cell(|row, value| {
            html! { i { (to_string(value, "")) "-" (to_string(&row["id"], "")) } }
        });
        let mut tbl = Table::new(vec![TableField::custom(column)], pets()).with_id("tbl");
        let html = tbl.render().unwrap().into_string();
        assert!(html.contains("<i>Fluffy-1</i>"));
        assert!(html.contains(">Custom</th>"));
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn pagination_moves_current_page() {
        let mut tbl = table();
        let te = TriggerEvent::new("tbl_top_pagination_pagination_btn_next", "pagination_btn_next");
        let evt = tbl.handle_request(&te);
        assert_eq!(evt.name, TABLE_EVENT_CURRENT_PAGE);
        assert_eq!(evt.value, json!(2));
        assert_eq!(evt.header[header::RETARGET], "#tbl");
        assert_eq!(tbl.current_page, 2);
        assert_eq!(tbl.base.store.values("tbl").unwrap()["current_page"], json!(2));
    }

    #[test]
    fn page_size_resets_page() {
        let mut tbl = table().prop("current_page", 2);
        let te = TriggerEvent::new("tbl_top_pagination_pagination_page_size", "pagination_page_size")
            .with_value("pagination_page_size", "10");
        let evt = tbl.on_request(&te);
        assert_eq!(evt.name, PAGINATION_EVENT_PAGE_SIZE);
        assert_eq!(tbl.page_size, 10);
        assert_eq!(tbl.current_page, 1);
    }

    #[test]
    fn header_click_sorts_and_toggles() {
        let mut tbl = table();
        let te = TriggerEvent::new("tbl_header_age", "header_cell");
        let evt = tbl.on_request(&te);
        assert_eq!(evt.name, TABLE_EVENT_SORT);
        assert_eq!(evt.value, json!("age"));
        assert!(tbl.sort_asc);
        tbl.on_request(&te);
        assert!(!tbl.sort_asc);
        assert_eq!(tbl.sort_col, "age");
    }

    #[test]
    fn filter_change() {
        let mut tbl = table();
        let te = TriggerEvent::new("tbl_filter", "filter").with_value("filter", "luna");
        let evt = tbl.on_request(&te);
        assert_eq!(evt.name, TABLE_EVENT_FILTER_CHANGE);
        assert_eq!(evt.value, json!("luna"));
        assert_eq!(tbl.filter_value, "luna");
    }

    #[test]
    fn row_and_link_events_carry_row() {
        let mut tbl = table().prop("row_selected", true);
        let evt = tbl.on_request(&TriggerEvent::new("tbl_row_2", "tbl_row_2"));
        assert_eq!(evt.name, TABLE_EVENT_ROW_SELECTED);
        assert_eq!(evt.value["row"]["name"], json!("Luna"));
        assert_eq!(evt.value["index"], json!(1));

        let fields = vec![TableField::new("name", TableFieldType::Link, "Name")];
        let mut tbl = Table::new(fields, pets()).with_id("tbl");
        let evt = tbl.on_request(&TriggerEvent::new("tbl_link_name_3", "link_cell"));
        assert_eq!(evt.name, TABLE_EVENT_EDIT_CELL);
        assert_eq!(evt.value["value"], json!("Cracker"));
        assert_eq!(evt.value["fieldname"], json!("name"));
    }

    #[test]
    fn add_button_event() {
        let mut tbl = table().prop("table_filter", true).prop("add_item", true);
        let evt = tbl.on_request(&TriggerEvent::new("tbl_btn_add", "btn_add"));
        assert_eq!(evt.name, TABLE_EVENT_ADD_ITEM);
    }

    #[test]
    fn unknown_trigger_passes_through() {
        let mut tbl = table();
        assert_eq!(tbl.on_request(&TriggerEvent::new("tbl_nothing", "x")).name, "value");
        let evt = ResponseEvent::detached("other", "custom");
        assert_eq!(tbl.response(evt).name, "custom");
    }
}
