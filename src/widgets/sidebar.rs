//! SideBar: a vertical menu of buttons, groups, state switches and labels.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::button::Button;
use super::label::Label;
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, value_response, BaseComponent, Component,
    ComponentExt, EnumValue,
};
use crate::error::RenderError;
use crate::event::message::{header, ResponseEvent, TriggerEvent};
use crate::value::PropertyMap;

pub const COMPONENT_TYPE_SIDEBAR: &str = "sidebar";

pub const SIDEBAR_EVENT_ITEM: &str = "sidebar_item";
pub const SIDEBAR_EVENT_GROUP: &str = "sidebar_group";
pub const SIDEBAR_EVENT_STATE: &str = "sidebar_state";

string_enum! {
    pub enum SideBarVisibility {
        /// Shown or hidden by the stylesheet, depending on the screen size.
        Auto => "auto",
        Show => "show",
        Hide => "hide",
    }
    default Auto
}

/// A menu button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideBarElement {
    pub name: String,
    pub value: String,
    pub label: String,
    /// A [`TextAlign`](crate::component::TextAlign) value; empty for the item's default.
    pub align: String,
    pub icon: String,
    pub selected: bool,
    pub disabled: bool,
    pub not_full: bool,
}

impl SideBarElement {
    pub fn new(name: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            name,
            label: label.into(),
            icon: icon.into(),
            ..Self::default()
        }
    }
}

/// A collapsible group header with its member buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideBarGroup {
    pub name: String,
    pub value: String,
    pub label: String,
    pub align: String,
    pub icon: String,
    /// Whether the group is open.
    pub selected: bool,
    pub disabled: bool,
    pub items: Vec<SideBarElement>,
}

/// Two buttons side by side, one of them selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideBarState {
    pub name: String,
    pub selected_index: usize,
    pub items: Vec<SideBarElement>,
}

impl SideBarState {
    /// Value of the selected button.
    pub fn value(&self) -> String {
        self.items
            .get(self.selected_index)
            .map(|item| item.value.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideBarStatic {
    pub label: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SideBarItem {
    State(SideBarState),
    Group(SideBarGroup),
    Element(SideBarElement),
    Static(SideBarStatic),
    Separator,
}

impl SideBarItem {
    pub fn item_type(&self) -> &'static str {
        match self {
            SideBarItem::State(_) => "state",
            SideBarItem::Group(_) => "group",
            SideBarItem::Element(_) => "element",
            SideBarItem::Static(_) => "static",
            SideBarItem::Separator => "separator",
        }
    }

    pub fn value(&self) -> String {
        match self {
            SideBarItem::State(state) => state.value(),
            SideBarItem::Group(group) => group.value.clone(),
            SideBarItem::Element(element) => element.value.clone(),
            SideBarItem::Static(_) | SideBarItem::Separator => String::new(),
        }
    }

    pub fn selected(&self) -> bool {
        match self {
            SideBarItem::Group(group) => group.selected,
            SideBarItem::Element(element) => element.selected,
            _ => false,
        }
    }
}

pub fn sidebar_items(value: &Value) -> Vec<SideBarItem> {
    serde_json::from_value(value.clone()).unwrap_or_else(|err| {
        if !value.is_null() {
            tracing::debug!(error = %err, "sidebar items replaced by empty list");
        }
        Vec::new()
    })
}

pub fn sidebar_items_value(items: &[SideBarItem]) -> Value {
    serde_json::to_value(items).unwrap_or(Value::Array(Vec::new()))
}

/// `"3"` → (3, None), `"3_1"` → (3, Some(1))
fn item_position(slot: &str) -> Option<(usize, Option<usize>)> {
    let mut parts = slot.split('_');
    let index = parts.next()?.parse().ok()?;
    let group_index = match parts.next() {
        Some(part) => Some(part.parse().ok()?),
        None => None,
    };
    parts.next().is_none().then_some((index, group_index))
}

// ---------------------------------------------------------------------------
// SideBar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SideBar {
    pub base: BaseComponent,
    pub items: Vec<SideBarItem>,
    pub visibility: SideBarVisibility,
}

impl SideBar {
    pub fn new(items: Vec<SideBarItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn item_button(
        &self,
        index: usize,
        group_index: Option<usize>,
        element: &SideBarElement,
        default_align: &str,
    ) -> Button {
        let slot = match group_index {
            Some(group_index) => format!("{index}_{group_index}"),
            None => index.to_string(),
        };
        let mut base = self.base.child(&slot);
        base.name = element.name.clone();
        let align = if element.align.is_empty() {
            default_align
        } else {
            element.align.as_str()
        };
        let mut data = json!({"index": index});
        if let Some(group_index) = group_index {
            data["group_index"] = json!(group_index);
        }
        Button::with_base(base, element.label.as_str())
            .prop("button_style", "primary")
            .prop("icon", element.icon.as_str())
            .prop("align", align)
            .prop("full", !element.not_full)
            .prop("selected", element.selected)
            .prop("disabled", element.disabled)
            .with_data(data)
            .with_style(json!({
                "border-radius": "0",
                "border-color": "rgba(var(--accent-1c), 0.2)",
            }))
    }

    /// The button at a position, `None` for static items and out-of-range positions.
    fn button(&self, index: usize, group_index: Option<usize>) -> Option<Button> {
        match (self.items.get(index)?, group_index) {
            (SideBarItem::Element(element), None) => {
                Some(self.item_button(index, None, element, "align-left"))
            }
            (SideBarItem::Group(group), None) => {
                let header = SideBarElement {
                    name: group.name.clone(),
                    value: group.value.clone(),
                    label: group.label.clone(),
                    align: group.align.clone(),
                    icon: group.icon.clone(),
                    selected: group.selected,
                    disabled: group.disabled,
                    not_full: false,
                };
                Some(self.item_button(index, None, &header, "align-left"))
            }
            (SideBarItem::Group(group), Some(group_index)) => {
                let element = SideBarElement {
                    selected: false,
                    not_full: false,
                    ..group.items.get(group_index)?.clone()
                };
                Some(
                    self.item_button(index, Some(group_index), &element, "align-left")
                        .with_style(json!({
                            "color": "rgb(var(--functional-blue))",
                            "fill": "rgb(var(--functional-blue))",
                        })),
                )
            }
            (SideBarItem::State(state), Some(group_index)) => {
                let element = SideBarElement {
                    selected: state.selected_index == group_index,
                    not_full: false,
                    ..state.items.get(group_index)?.clone()
                };
                Some(self.item_button(index, Some(group_index), &element, "center"))
            }
            _ => None,
        }
    }

    fn static_label(&self, index: usize, item: &SideBarStatic) -> Label {
        let mut label = Label {
            base: self.base.static_child(&format!("static_{index}")),
            left_icon: item.icon.clone(),
            ..Label::new(item.label.as_str())
        };
        if !item.color.is_empty() {
            label = label
                .prop("style", json!({"color": item.color}))
                .prop("icon_style", json!({"fill": item.color}));
        }
        label
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let data = evt.trigger_data();
        let index = data.get("index").and_then(Value::as_u64).unwrap_or(0) as usize;
        let group_index = data
            .get("group_index")
            .and_then(Value::as_u64)
            .map(|group_index| group_index as usize);
        let mut items = self.items.clone();
        let Some(item) = items.get_mut(index) else {
            return evt;
        };
        let (name, value) = match (item, group_index) {
            (SideBarItem::Group(group), Some(group_index)) => {
                let value = group
                    .items
                    .get(group_index)
                    .map(|element| element.value.clone())
                    .unwrap_or_default();
                (SIDEBAR_EVENT_ITEM, value)
            }
            (SideBarItem::Group(group), None) => {
                group.selected = !group.selected;
                (SIDEBAR_EVENT_GROUP, group.value.clone())
            }
            (SideBarItem::State(state), Some(group_index)) => {
                state.selected_index = group_index;
                (SIDEBAR_EVENT_STATE, state.value())
            }
            (item, _) => (SIDEBAR_EVENT_ITEM, item.value()),
        };
        if items != self.items {
            self.set_property("items", sidebar_items_value(&items));
        }
        let evt = ResponseEvent::new(&*self, name)
            .with_value(value)
            .with_header(header::RETARGET, format!("#{}", self.base.id));
        self.base.respond(evt)
    }

    fn render_item(&self, index: usize, item: &SideBarItem) -> Result<Markup, RenderError> {
        let markup = match item {
            SideBarItem::Separator => html! {
                hr id={ "separator_" (index) } class="separator";
            },
            SideBarItem::Static(item) => html! {
                div class="row full" {
                    div id={ "static_" (index) } class="static-label" {
                        (self.static_label(index, item).render()?)
                    }
                }
            },
            SideBarItem::Element(_) => match self.button(index, None) {
                Some(mut button) => button.render()?,
                None => html! {},
            },
            SideBarItem::Group(group) => {
                let mut members = Vec::new();
                if group.selected {
                    for group_index in 0..group.items.len() {
                        if let Some(mut button) = self.button(index, Some(group_index)) {
                            members.push(button.render()?);
                        }
                    }
                }
                let header = match self.button(index, None) {
                    Some(mut button) => button.render()?,
                    None => html! {},
                };
                html! {
                    div class="row full" { (header) }
                    @if group.selected {
                        div class="row full sidebar-group" {
                            @for member in &members { (member) }
                        }
                    }
                }
            }
            SideBarItem::State(state) => {
                let mut cells = Vec::new();
                for group_index in 0..state.items.len().min(2) {
                    if let Some(mut button) = self.button(index, Some(group_index)) {
                        cells.push(button.render()?);
                    }
                }
                html! {
                    div class="row full container" {
                        @for cell in &cells { div class="cell half" { (cell) } }
                    }
                }
            }
        };
        Ok(markup)
    }
}

impl Component for SideBar {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_SIDEBAR
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("items", sidebar_items_value(&self.items)),
            ("visibility", self.visibility.into()),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "items" => sidebar_items_value(&sidebar_items(value)),
            "visibility" => check_enum_value(value, SideBarVisibility::Auto).into(),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "items" => {
                self.items = sidebar_items(&value);
                sidebar_items_value(&self.items)
            }
            "visibility" => {
                self.visibility = check_enum_value(&value, SideBarVisibility::Auto);
                self.visibility.into()
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let button = self
            .base
            .route(&event.id)
            .and_then(item_position)
            .and_then(|(index, group_index)| self.button(index, group_index));
        match button {
            Some(mut button) => {
                let evt = button.handle_request(event);
                self.response(evt)
            }
            None => value_response(&*self, event),
        }
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let visibility = match self.visibility {
            SideBarVisibility::Auto => "",
            other => other.as_str(),
        };
        let class = self.base.class_with(&["sidebar", visibility]);
        let mut parts = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            parts.push(self.render_item(index, item)?);
        }
        Ok(html! {
            div id=(self.base.id) name=(self.base.name) class=(class) style=[self.base.style_attr()] {
                @for part in &parts { (part) }
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

    fn menu() -> SideBar {
        let group = SideBarGroup {
            name: "search".into(),
            value: "search".into(),
            label: "Search".into(),
            icon: "FileText".into(),
            items: vec![
                SideBarElement::new("quick", "Quick Search", "Bolt"),
                SideBarElement::new("browser", "Browser", "Search"),
            ],
            ..SideBarGroup::default()
        };
        let state = SideBarState {
            name: "menu_state".into(),
            selected_index: 0,
            items: vec![
                SideBarElement::new("state_new", "New", "Plus"),
                SideBarElement::new("state_edit", "Edit", "Edit"),
            ],
        };
        SideBar::new(vec![
            SideBarItem::State(state),
            SideBarItem::Separator,
            SideBarItem::Static(SideBarStatic {
                label: "Warning".into(),
                icon: "ExclamationTriangle".into(),
                color: "red".into(),
            }),
            SideBarItem::Element(SideBarElement::new("save", "Save", "Check")),
            SideBarItem::Group(group),
        ])
        .with_id("sb")
        .with_event_url("/event")
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    #[test]
    fn items_are_tagged_by_type() {
        let items = sidebar_items(&json!([
            {"type": "separator"},
            {"type": "element", "name": "copy", "value": "copy", "label": "Copy"},
            {"type": "state", "selected_index": 1, "items": [{"value": "a"}, {"value": "b"}]},
        ]));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], SideBarItem::Separator);
        assert_eq!(items[1].item_type(), "element");
        assert_eq!(items[2].value(), "b");
        assert_eq!(sidebar_items(&json!([{"type": "unknown"}])), Vec::new());
    }

    #[test]
    fn visibility_falls_back_to_auto() {
        let sb = SideBar::default();
        assert_eq!(sb.validation("visibility", &json!("hide")), json!("hide"));
        assert_eq!(sb.validation("visibility", &json!("maybe")), json!("auto"));
    }

    #[test]
    fn positions() {
        assert_eq!(item_position("3"), Some((3, None)));
        assert_eq!(item_position("4_1"), Some((4, Some(1))));
        assert_eq!(item_position("4_x"), None);
        assert_eq!(item_position("4_1_2"), None);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn render_closed_group() {
        let mut sb = menu().prop("visibility", "show");
        let html = sb.render().unwrap().into_string();
        assert!(html.starts_with(r#"<div id="sb" name="sb" class="sidebar show">"#));
        assert!(html.contains(r#"<hr id="separator_1" class="separator">"#));
        assert!(html.contains(r#"id="static_2""#));
        assert!(html.contains(r#"id="sb_3""#));
        assert!(html.contains(r#"id="sb_0_1""#));
        assert!(!html.contains("sidebar-group"));
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn element_click() {
        let mut sb = menu();
        let evt = sb.on_request(&TriggerEvent::new("sb_3", "save"));
        assert_eq!(evt.name, SIDEBAR_EVENT_ITEM);
        assert_eq!(evt.value, json!("save"));
        assert_eq!(evt.header.get(header::RETARGET).map(String::as_str), Some("#sb"));
    }

    #[test]
    fn group_toggles_open() {
        let mut sb = menu();
        let evt = sb.on_request(&TriggerEvent::new("sb_4", "search"));
        assert_eq!(evt.name, SIDEBAR_EVENT_GROUP);
        assert!(sb.items[4].selected());

        let html = sb.render().unwrap().into_string();
        assert!(html.contains("sidebar-group"));
        assert!(html.contains(r#"id="sb_4_1""#));

        let evt = sb.on_request(&TriggerEvent::new("sb_4_1", "browser"));
        assert_eq!(evt.name, SIDEBAR_EVENT_ITEM);
        assert_eq!(evt.value, json!("browser"));
    }

    #[test]
    fn state_switch() {
        let mut sb = menu();
        let evt = sb.on_request(&TriggerEvent::new("sb_0_1", "state_edit"));
        assert_eq!(evt.name, SIDEBAR_EVENT_STATE);
        assert_eq!(evt.value, json!("state_edit"));
        assert_eq!(sb.items[0].value(), "state_edit");
    }

    #[test]
    fn static_item_is_not_routed() {
        let mut sb = menu();
        let evt = sb.on_request(&TriggerEvent::new("sb_2", "x"));
        assert_eq!(evt.name, "value");
    }
}
