//! Demo instances of every component, filled with sample data.
//!
//! Each function returns a component wired to [`FIXTURE_EVENT_URL`] so its
//! htmx attributes render. [`fixtures`] collects them all by component type.

use serde_json::{json, Value};

use crate::component::{Component, ComponentExt};
use crate::value::{to_map_list, PropertyMap};
use crate::widgets::{
    Application, Button, ButtonType, DateTime, DateTimeType, Editor, EditorView, Field,
    FieldType, Form, Icon, Input, InputBox, InputBoxType, InputType, Label, Link, List, MenuBar,
    MenuBarItem, NumberInput, Pagination, Row, RowColumn, RowField, Search, Select,
    SelectOption, Selector, SideBar,
    SideBarElement, SideBarGroup, SideBarItem, SideBarState, SideBarStatic, Table, TableField,
    TableFieldType, Toast, ToastType, Toggle, Upload,
};

pub const FIXTURE_EVENT_URL: &str = "/event";

fn customer_rows() -> Vec<PropertyMap> {
    to_map_list(&json!([
        {"id": 1, "name": "Abbott Ltd.", "active": true, "balance": 1250.5, "created": "2024-03-01", "email": "info@abbott.example"},
        {"id": 2, "name": "First Bank", "active": false, "balance": -80, "created": "2023-11-20", "email": "bank@first.example"},
        {"id": 3, "name": "Green Field Co.", "active": true, "balance": 0, "created": "2024-06-15", "email": "hello@greenfield.example"},
        {"id": 4, "name": "Northwind", "active": true, "balance": 310, "created": "2022-01-09", "email": "office@northwind.example"},
    ]))
}

fn customer_fields() -> Vec<TableField> {
    vec![
        TableField::new("name", TableFieldType::String, "Name"),
        TableField::new("active", TableFieldType::Bool, "Active"),
        TableField::new("balance", TableFieldType::Float, "Balance"),
        TableField::new("created", TableFieldType::Date, "Created"),
    ]
}

fn contact_rows() -> Value {
    json!([
        {"lslabel": "Abbott Ltd.", "lsvalue": "info@abbott.example"},
        {"lslabel": "First Bank", "lsvalue": "bank@first.example"},
        {"lslabel": "Green Field Co.", "lsvalue": "hello@greenfield.example"},
        {"lslabel": "Northwind", "lsvalue": "office@northwind.example"},
    ])
}

fn country_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("de", "Germany"),
        SelectOption::new("hu", "Hungary"),
        SelectOption::new("uk", "United Kingdom"),
    ]
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

pub fn icon() -> Icon {
    Icon::new("Search").with_id("icon").with_event_url(FIXTURE_EVENT_URL)
}

pub fn label() -> Label {
    Label::new("Customer")
        .with_id("label")
        .prop("left_icon", "User")
        .prop("border", true)
}

pub fn button() -> Button {
    Button::new("Save")
        .with_id("button")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("button_style", "primary")
        .prop("icon", "Check")
        .prop("badge", 3)
}

pub fn link() -> Link {
    Link::new("Documentation", "https://htmx.org/docs/")
        .with_id("link")
        .prop("link_style", "button")
        .prop("link_target", "_blank")
}

pub fn input() -> Input {
    Input::new("Abbott Ltd.")
        .with_id("input")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("type", InputType::Text)
        .prop("placeholder", "Customer name")
        .prop("max_length", 64)
}

pub fn number_input() -> NumberInput {
    NumberInput::new(12.0)
        .with_id("number")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("integer", true)
        .prop("set_min", true)
        .prop("min_value", 1)
        .prop("set_max", true)
        .prop("max_value", 100)
}

pub fn toggle() -> Toggle {
    Toggle::new(true)
        .with_id("toggle")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("border", true)
}

pub fn datetime() -> DateTime {
    DateTime::new(DateTimeType::DateTime)
        .with_id("datetime")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("value", "2024-03-01T09:30")
}

pub fn select() -> Select {
    Select::new(country_options())
        .with_id("select")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("value", "hu")
}

pub fn toast() -> Toast {
    Toast::new(ToastType::Success, "Saved").with_id("toast").timeout(4)
}

pub fn upload() -> Upload {
    Upload::default()
        .with_id("upload")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("accept", "image/*")
}

// ---------------------------------------------------------------------------
// Composites
// ---------------------------------------------------------------------------

pub fn pagination() -> Pagination {
    Pagination::new(2, 5)
        .with_id("pagination")
        .with_event_url(FIXTURE_EVENT_URL)
}

pub fn table() -> Table {
    Table::new(customer_fields(), customer_rows())
        .with_id("table")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("table_filter", true)
        .prop("add_item", true)
        .prop("row_selected", true)
        .prop("page_size", 5)
}

pub fn selector() -> Selector {
    Selector::new(
        vec![
            TableField::new("name", TableFieldType::String, "Name"),
            TableField::new("email", TableFieldType::String, "Email"),
        ],
        customer_rows(),
    )
    .with_id("selector")
    .with_event_url(FIXTURE_EVENT_URL)
    .prop("value", json!({"value": "2", "text": "First Bank"}))
    .prop("link", true)
}

pub fn field() -> Field {
    Field::new(FieldType::Select, json!({"name": "country", "options": [
        {"value": "de", "text": "Germany"}, {"value": "hu", "text": "Hungary"}
    ], "value": "de"}))
    .with_id("field")
    .with_event_url(FIXTURE_EVENT_URL)
}

fn row_column(label: &str, field_type: FieldType, value: Value) -> RowColumn {
    RowColumn::new(label, RowField::new(field_type, value))
}

pub fn row() -> Row {
    Row::new(vec![
        row_column("Name", FieldType::Text, json!({"name": "name", "value": "Abbott Ltd."})),
        row_column("Active", FieldType::Bool, json!({"name": "active", "value": true})),
        row_column("Created", FieldType::Date, json!({"name": "created", "value": "2024-03-01"})),
    ])
    .with_id("row")
    .with_event_url(FIXTURE_EVENT_URL)
    .prop("full", true)
}

pub fn editor() -> Editor {
    let rows = vec![
        Row::new(vec![
            row_column("Name", FieldType::Text, json!({"name": "name", "value": "Abbott Ltd."})),
            row_column("Email", FieldType::Text, json!({"name": "email", "value": "info@abbott.example"})),
        ]),
        Row::new(vec![row_column("Note", FieldType::Area, json!({"name": "note"}))]),
    ];
    let tables = vec![Table::new(customer_fields(), customer_rows())
        .prop("add_item", true)
        .prop("pagination", "none")];
    Editor::new(
        "Customer",
        vec![
            EditorView::new("customer", "Customer", "User"),
            EditorView::new("contacts", "Contacts", "Phone").badge("4"),
        ],
    )
    .rows(rows)
    .tables(tables)
    .with_id("editor")
    .with_event_url(FIXTURE_EVENT_URL)
}

pub fn list() -> List {
    List::new(to_map_list(&contact_rows()))
        .with_id("list")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("list_filter", true)
        .prop("add_item", true)
        .prop("edit_item", true)
        .prop("delete_item", true)
        .prop("page_size", 5)
}

pub fn search() -> Search {
    Search::new(
        vec![
            TableField::new("name", TableFieldType::String, "Name"),
            TableField::new("email", TableFieldType::String, "Email"),
        ],
        customer_rows(),
    )
    .with_id("search")
    .with_event_url(FIXTURE_EVENT_URL)
    .prop("title", "Customer search")
    .prop("help_url", "https://htmx.org/docs/")
}

pub fn form() -> Form {
    let body = vec![
        Row::new(vec![row_column("Name", FieldType::Text, json!({"name": "name", "value": "Abbott Ltd."}))]),
        Row::new(vec![RowColumn::new(
            "Contacts",
            RowField::new(
                FieldType::List,
                json!({"name": "contacts", "rows": contact_rows(), "edit_item": true}),
            )
            .with_form_trigger(),
        )]),
    ];
    let footer = vec![Row::new(vec![
        row_column(
            "",
            FieldType::Button,
            json!({"name": "form_cancel", "type": ButtonType::Submit, "label": "Cancel"}),
        ),
        row_column(
            "",
            FieldType::Button,
            json!({"name": "form_ok", "type": ButtonType::Submit, "label": "OK", "button_style": "primary"}),
        ),
    ])];
    Form::new("Customer", body, footer)
        .with_id("form")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("modal", true)
}

pub fn sidebar() -> SideBar {
    SideBar::new(vec![
        SideBarItem::State(SideBarState {
            name: "state".into(),
            selected_index: 0,
            items: vec![
                SideBarElement::new("new", "New", "Plus"),
                SideBarElement::new("edit", "Edit", "Edit"),
            ],
        }),
        SideBarItem::Separator,
        SideBarItem::Element(SideBarElement::new("save", "Save", "Check")),
        SideBarItem::Group(SideBarGroup {
            name: "reports".into(),
            value: "reports".into(),
            label: "Reports".into(),
            icon: "ChartBar".into(),
            selected: true,
            items: vec![
                SideBarElement::new("monthly", "Monthly", "Calendar"),
                SideBarElement::new("yearly", "Yearly", "Calendar"),
            ],
            ..SideBarGroup::default()
        }),
        SideBarItem::Static(SideBarStatic {
            label: "Read only".into(),
            icon: "Lock".into(),
            color: "brown".into(),
        }),
    ])
    .with_id("sidebar")
    .with_event_url(FIXTURE_EVENT_URL)
}

pub fn menubar() -> MenuBar {
    MenuBar::new(vec![
        MenuBarItem::new("search", "Search", "Search"),
        MenuBarItem::new("edit", "Edit", "Edit"),
        MenuBarItem::new("help", "Help", "QuestionCircle").url("https://htmx.org/"),
    ])
    .with_id("menubar")
    .with_event_url(FIXTURE_EVENT_URL)
    .prop("value", "search")
    .prop("side_bar", true)
}

pub fn inputbox() -> InputBox {
    InputBox::new(InputBoxType::Input, "New customer name")
        .with_id("inputbox")
        .with_event_url(FIXTURE_EVENT_URL)
        .prop("tag", "rename")
        .prop("info", "Leave empty to cancel")
}

pub fn application() -> Application {
    Application::new("Customers")
        .with_id("application")
        .prop("header", json!({"X-CSRF-Token": "TOKEN0123456789"}))
        .with_main(editor().boxed())
}

/// Every fixture, keyed by component type.
pub fn fixtures() -> Vec<(&'static str, Box<dyn Component>)> {
    let components: Vec<Box<dyn Component>> = vec![
        icon().boxed(),
        label().boxed(),
        button().boxed(),
        link().boxed(),
        input().boxed(),
        number_input().boxed(),
        toggle().boxed(),
        datetime().boxed(),
        select().boxed(),
        toast().boxed(),
        upload().boxed(),
        pagination().boxed(),
        table().boxed(),
        selector().boxed(),
        field().boxed(),
        row().boxed(),
        editor().boxed(),
        list().boxed(),
        search().boxed(),
        form().boxed(),
        sidebar().boxed(),
        menubar().boxed(),
        inputbox().boxed(),
        application().boxed(),
    ];
    components
        .into_iter()
        .map(|component| (component.component_type(), component))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
