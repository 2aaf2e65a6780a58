//! MenuBar: the application's top menu.
//!
//! Items are laid out as labels on large screens and as icons on small ones.
//! An item with an `item_url` is a plain link; the others post a `value`
//! event. The optional sidebar button posts a `side` event.

use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::icon::Icon;
use super::label::Label;
use super::link::{Link, LinkStyle};
use super::sidebar::SideBarVisibility;
use crate::component::{
    check_enum_value, component_boilerplate, target_value, value_response, BaseComponent,
    Component, ComponentExt,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{to_boolean, to_string, PropertyMap};

pub const COMPONENT_TYPE_MENUBAR: &str = "menubar";

pub const MENUBAR_EVENT_SIDE: &str = "side";
pub const MENUBAR_EVENT_VALUE: &str = "value";

const SLOT_SIDEBAR: &str = "sidebar";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBarItem {
    /// Menu key, also the item's id suffix.
    pub value: String,
    pub label: String,
    pub icon: String,
    /// Open this url instead of posting an event.
    pub item_url: String,
}

impl MenuBarItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: icon.into(),
            item_url: String::new(),
        }
    }

    pub fn url(mut self, item_url: impl Into<String>) -> Self {
        self.item_url = item_url.into();
        self
    }
}

/// Parse menu items; entries that are not maps are skipped.
pub fn menubar_items(value: &Value) -> Vec<MenuBarItem> {
    let Some(items) = value.as_array() else {
        if !value.is_null() {
            tracing::debug!("menubar items replaced by empty list");
        }
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

pub fn menubar_items_value(items: &[MenuBarItem]) -> Value {
    serde_json::to_value(items).unwrap_or(Value::Array(Vec::new()))
}

// ---------------------------------------------------------------------------
// MenuBar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MenuBar {
    pub base: BaseComponent,
    /// The selected item.
    pub value: String,
    /// Show the sidebar button (small screens).
    pub side_bar: bool,
    pub sidebar_visibility: SideBarVisibility,
    pub label_hide: String,
    pub label_menu: String,
    pub items: Vec<MenuBarItem>,
}

impl Default for MenuBar {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            value: String::new(),
            side_bar: false,
            sidebar_visibility: SideBarVisibility::Auto,
            label_hide: labels().menubar_hide.clone(),
            label_menu: labels().menubar_menu.clone(),
            items: Vec::new(),
        }
    }
}

impl MenuBar {
    pub fn new(items: Vec<MenuBarItem>) -> Self {
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

    fn item_classes(&self, item: &MenuBarItem) -> Vec<String> {
        let selected = if item.value == self.value { "selected" } else { "menu-label" };
        let mut class = vec![selected.to_owned()];
        if item.value == "logout" {
            class.push("exit".into());
        }
        class
    }

    fn sidebar_label(&self) -> Label {
        let mut base = self.base.child(SLOT_SIDEBAR);
        let shown = self.sidebar_visibility == SideBarVisibility::Show;
        let (class, icon, text) = if shown {
            ("selected exit", "Close", &self.label_hide)
        } else {
            ("menu-label", "Bars", &self.label_menu)
        };
        base.class = vec![class.to_owned()];
        let label = Label {
            base,
            left_icon: icon.to_owned(),
            ..Label::new(text.as_str())
        };
        if shown {
            label.prop("icon_style", json!({"width": "24px", "height": "24px"}))
        } else {
            label
        }
    }

    fn item_link(&self, item: &MenuBarItem, slot: &str, label: &str, style: LinkStyle) -> Link {
        Link {
            base: self.base.static_child(slot),
            link_style: style,
            icon: item.icon.clone(),
            hide_label: true,
            link_target: "_blank".into(),
            ..Link::new(label, item.item_url.as_str())
        }
    }

    fn item_base(&self, item: &MenuBarItem, name: &str) -> BaseComponent {
        let mut base = self.base.child(&item.value);
        base.name = name.to_owned();
        base.class = self.item_classes(item);
        base.data = json!({"item": item}).as_object().cloned().unwrap_or_default();
        base
    }

    fn item_label(&self, item: &MenuBarItem) -> Label {
        Label {
            base: self.item_base(item, "item"),
            left_icon: item.icon.clone(),
            ..Label::new(item.label.as_str())
        }
    }

    fn item_icon(&self, item: &MenuBarItem) -> Icon {
        Icon {
            base: self.item_base(item, "icon"),
            ..Icon::new(item.icon.as_str())
        }
    }

    fn render_item(&self, item: &MenuBarItem) -> Result<Markup, RenderError> {
        if item.item_url.is_empty() {
            self.item_label(item).render()
        } else {
            self.item_link(item, &item.value, &item.label, LinkStyle::MenuItem).render()
        }
    }

    fn render_icon(&self, item: &MenuBarItem) -> Result<Markup, RenderError> {
        if item.item_url.is_empty() {
            self.item_icon(item).render()
        } else {
            self.item_link(item, &item.value, "", LinkStyle::MenuIcon).render()
        }
    }

    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let (name, value) = match evt.trigger_name.as_str() {
            "item" | "icon" => {
                let data = evt.trigger_data();
                let value = data
                    .get("item")
                    .and_then(|item| item.get("value"))
                    .map(|value| to_string(value, ""))
                    .unwrap_or_default();
                if !self.value.is_empty() {
                    self.set_property("value", Value::from(value.as_str()));
                }
                (MENUBAR_EVENT_VALUE, Value::from(value))
            }
            _ => (MENUBAR_EVENT_SIDE, Value::from(MENUBAR_EVENT_SIDE)),
        };
        let evt = ResponseEvent::new(&*self, name).with_value(value);
        self.base.respond(evt)
    }
}

impl Component for MenuBar {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_MENUBAR
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", Value::from(self.value.as_str())),
            ("side_bar", Value::from(self.side_bar)),
            ("sidebar_visibility", self.sidebar_visibility.into()),
            ("label_hide", Value::from(self.label_hide.as_str())),
            ("label_menu", Value::from(self.label_menu.as_str())),
            ("items", menubar_items_value(&self.items)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "sidebar_visibility" => check_enum_value(value, SideBarVisibility::Auto).into(),
            "label_hide" => Value::from(to_string(value, &labels().menubar_hide)),
            "label_menu" => Value::from(to_string(value, &labels().menubar_menu)),
            "items" => menubar_items_value(&menubar_items(value)),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "value" | "label_hide" | "label_menu" => {
                let text = to_string(&self.validation(name, &value), "");
                match name {
                    "value" => self.value = text.clone(),
                    "label_hide" => self.label_hide = text.clone(),
                    _ => self.label_menu = text.clone(),
                }
                Value::from(text)
            }
            "side_bar" => {
                self.side_bar = to_boolean(&value, false);
                Value::from(self.side_bar)
            }
            "sidebar_visibility" => {
                self.sidebar_visibility = check_enum_value(&value, SideBarVisibility::Auto);
                self.sidebar_visibility.into()
            }
            "items" => {
                self.items = menubar_items(&value);
                menubar_items_value(&self.items)
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
        let evt = if slot == SLOT_SIDEBAR && self.side_bar {
            self.sidebar_label().handle_request(event)
        } else if let Some(item) = self
            .items
            .iter()
            .find(|item| item.value == slot && item.item_url.is_empty())
        {
            // label and icon post the same item
            if event.name == "icon" {
                self.item_icon(item).handle_request(event)
            } else {
                self.item_label(item).handle_request(event)
            }
        } else {
            return value_response(&*self, event);
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let sidebar = if self.side_bar {
            Some(self.sidebar_label().render()?)
        } else {
            None
        };
        let mut large = Vec::with_capacity(self.items.len());
        for item in &self.items {
            large.push((item.value.as_str(), self.render_item(item)?));
        }
        let mut medium = Vec::with_capacity(self.items.len());
        for item in self.items.iter().rev() {
            medium.push((item.value.as_str(), self.render_item(item)?, self.render_icon(item)?));
        }
        let id = self.base.id.as_str();
        let markup = html! {
            div id=(id) name=(self.base.name) class=(self.base.class_with(&["menubar"]))
                style=[self.base.style_attr()] {
                div class="cell" {
                    @if let Some(sidebar) = sidebar {
                        div id={ (id) "_menu_sidebar" } class="menuitem menu-sidebar" { (sidebar) }
                    }
                    @for (value, item) in &large {
                        div id={ (id) "_" (value) "_large" } class="hide-small hide-medium menuitem" {
                            (item)
                        }
                    }
                }
                div class="cell container" {
                    @for (value, item, icon) in &medium {
                        div id={ (id) "_" (value) "_medium" } class="right hide-large menuitem" {
                            span class="hide-small menu-text" { (item) }
                            span class="menu-label hide-medium" { (icon) }
                        }
                    }
                }
            }
        };
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn menu() -> MenuBar {
        MenuBar::new(vec![
            MenuBarItem::new("search", "Search", "Search"),
            MenuBarItem::new("edit", "Edit", "Edit"),
            MenuBarItem::new("help", "Help", "QuestionCircle").url("https://example.com/help"),
            MenuBarItem::new("logout", "Logout", "Exit"),
        ])
        .with_id("mnb")
        .with_event_url("/event")
        .prop("value", "search")
    }

    #[test]
    fn defaults() {
        let mnb = MenuBar::default();
        assert_eq!(mnb.label_menu, "Menu");
        assert_eq!(mnb.label_hide, "Hide");
        assert_eq!(mnb.validation("sidebar_visibility", &json!("x")), json!("auto"));
        assert_eq!(
            mnb.validation("items", &json!([1, {"value": "a"}])),
            json!([{"value": "a", "label": "", "icon": "", "item_url": ""}])
        );
    }

    #[test]
    fn target_defaults_to_self() {
        let mut mnb = menu();
        mnb.render().unwrap();
        assert_eq!(mnb.base.target, "#mnb");
    }

    #[test]
    fn render_items() {
        let mut mnb = menu();
        let html = mnb.render().unwrap().into_string();
        assert!(html.contains(r#"id="mnb_search_large""#));
        assert!(html.contains(r#"id="mnb_logout_medium""#));
        assert!(html.contains(r#"href="https://example.com/help""#));
        assert!(html.contains("selected"));
        assert!(html.contains("exit"));
        assert!(!html.contains("menu-sidebar"));
    }

    #[test]
    fn render_sidebar_button() {
        let mut mnb = menu().prop("side_bar", true).prop("sidebar_visibility", "show");
        let html = mnb.render().unwrap().into_string();
        assert!(html.contains(r#"id="mnb_menu_sidebar""#));
        assert!(html.contains("Hide"));
    }

    #[test]
    fn item_event_selects() {
        let mut mnb = menu();
        let evt = mnb.on_request(&TriggerEvent::new("mnb_edit", "item"));
        assert_eq!(evt.name, MENUBAR_EVENT_VALUE);
        assert_eq!(evt.value, json!("edit"));
        assert_eq!(mnb.value, "edit");

        let evt = mnb.on_request(&TriggerEvent::new("mnb_search", "icon"));
        assert_eq!(evt.value, json!("search"));
    }

    #[test]
    fn sidebar_event() {
        let mut mnb = menu().prop("side_bar", true);
        let evt = mnb.on_request(&TriggerEvent::new("mnb_sidebar", "sidebar"));
        assert_eq!(evt.name, MENUBAR_EVENT_SIDE);
        assert_eq!(evt.value, json!("side"));
    }

    #[test]
    fn url_items_do_not_post() {
        let mut mnb = menu();
        let evt = mnb.on_request(&TriggerEvent::new("mnb_help", "item"));
        assert_eq!(evt.name, "value");
        assert_eq!(evt.trigger_name, "item");
        assert_eq!(mnb.value, "search");
    }
}
