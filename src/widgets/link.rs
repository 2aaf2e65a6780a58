//! Link: an anchor styled as text, a button or a menu entry.

use maud::{html, Markup};
use serde_json::Value;

use super::icon::Icon;
use crate::component::enums::string_enum;
use crate::component::{
    check_enum_value, component_boilerplate, BaseComponent, Component, ComponentExt, EnumValue,
    Indicator, TextAlign,
};
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::render::HxAttrs;
use crate::value::{to_boolean, to_integer, to_string, PropertyMap};

pub const COMPONENT_TYPE_LINK: &str = "link";
pub const LINK_EVENT_CLICK: &str = "click";

string_enum! {
    /// Visual style of a link (`link-type` attribute).
    pub enum LinkStyle {
        Default => "",
        Button => "button",
        Primary => "primary",
        Border => "border",
        MenuItem => "menu-item",
        MenuIcon => "menu-icon",
    }
    default Default
}

/// An `<a>` element.
#[derive(Debug, Clone)]
pub struct Link {
    pub base: BaseComponent,
    pub href: String,
    pub download: String,
    pub media: String,
    pub ping: String,
    pub referrer_policy: String,
    pub rel: String,
    /// The anchor's `target` attribute, e.g. `_blank`.
    pub link_target: String,
    pub media_type: String,
    pub link_style: LinkStyle,
    pub align: TextAlign,
    pub label: String,
    pub icon: String,
    pub disabled: bool,
    pub auto_focus: bool,
    pub full: bool,
    pub small: bool,
    pub selected: bool,
    pub hide_label: bool,
    pub badge: i64,
    pub show_badge: bool,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            base: BaseComponent {
                indicator: Indicator::Spinner,
                ..BaseComponent::default()
            },
            href: String::new(),
            download: String::new(),
            media: String::new(),
            ping: String::new(),
            referrer_policy: "no-referrer".to_owned(),
            rel: String::new(),
            link_target: "_self".to_owned(),
            media_type: String::new(),
            link_style: LinkStyle::Default,
            align: TextAlign::Center,
            label: String::new(),
            icon: String::new(),
            disabled: false,
            auto_focus: false,
            full: false,
            small: false,
            selected: false,
            hide_label: false,
            badge: 0,
            show_badge: false,
        }
    }
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            ..Self::default()
        }
    }
}

impl Component for Link {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_LINK
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("href", Value::from(self.href.as_str())),
            ("download", Value::from(self.download.as_str())),
            ("media", Value::from(self.media.as_str())),
            ("ping", Value::from(self.ping.as_str())),
            ("referrerpolicy", Value::from(self.referrer_policy.as_str())),
            ("rel", Value::from(self.rel.as_str())),
            ("link_target", Value::from(self.link_target.as_str())),
            ("media_type", Value::from(self.media_type.as_str())),
            ("link_style", self.link_style.into()),
            ("align", self.align.into()),
            ("label", Value::from(self.label.as_str())),
            ("icon", Value::from(self.icon.as_str())),
            ("disabled", Value::from(self.disabled)),
            ("auto_focus", Value::from(self.auto_focus)),
            ("full", Value::from(self.full)),
            ("small", Value::from(self.small)),
            ("selected", Value::from(self.selected)),
            ("hide_label", Value::from(self.hide_label)),
            ("badge", Value::from(self.badge)),
            ("show_badge", Value::from(self.show_badge)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "link_style" => check_enum_value(value, LinkStyle::Default).into(),
            "align" => check_enum_value(value, TextAlign::Center).into(),
            "indicator" => check_enum_value(value, Indicator::Spinner).into(),
            "referrerpolicy" => Value::from(to_string(value, "no-referrer")),
            "link_target" => Value::from(to_string(value, "_self")),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let text = |default: &str| to_string(&value, default);
        let stored = match name {
            "href" => {
                self.href = text("");
                Value::from(self.href.as_str())
            }
            "download" => {
                self.download = text("");
                Value::from(self.download.as_str())
            }
            "media" => {
                self.media = text("");
                Value::from(self.media.as_str())
            }
            "ping" => {
                self.ping = text("");
                Value::from(self.ping.as_str())
            }
            "referrerpolicy" => {
                self.referrer_policy = text("no-referrer");
                Value::from(self.referrer_policy.as_str())
            }
            "rel" => {
                self.rel = text("");
                Value::from(self.rel.as_str())
            }
            "link_target" => {
                self.link_target = text("_self");
                Value::from(self.link_target.as_str())
            }
            "media_type" => {
                self.media_type = text("");
                Value::from(self.media_type.as_str())
            }
            "label" => {
                self.label = text("");
                Value::from(self.label.as_str())
            }
            "icon" => {
                self.icon = text("");
                Value::from(self.icon.as_str())
            }
            "link_style" => {
                self.link_style = check_enum_value(&value, LinkStyle::Default);
                self.link_style.into()
            }
            "align" => {
                self.align = check_enum_value(&value, TextAlign::Center);
                self.align.into()
            }
            "indicator" => {
                self.base.indicator = check_enum_value(&value, Indicator::Spinner);
                self.base.indicator.into()
            }
            "disabled" => {
                self.disabled = to_boolean(&value, false);
                Value::from(self.disabled)
            }
            "auto_focus" => {
                self.auto_focus = to_boolean(&value, false);
                Value::from(self.auto_focus)
            }
            "full" => {
                self.full = to_boolean(&value, false);
                Value::from(self.full)
            }
            "small" => {
                self.small = to_boolean(&value, false);
                Value::from(self.small)
            }
            "selected" => {
                self.selected = to_boolean(&value, false);
                Value::from(self.selected)
            }
            "hide_label" => {
                self.hide_label = to_boolean(&value, false);
                Value::from(self.hide_label)
            }
            "badge" => {
                self.badge = to_integer(&value, 0);
                Value::from(self.badge)
            }
            "show_badge" => {
                self.show_badge = to_boolean(&value, false);
                Value::from(self.show_badge)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    fn on_request(&mut self, _event: &TriggerEvent) -> ResponseEvent {
        let evt = ResponseEvent::new(&*self, LINK_EVENT_CLICK).with_value(self.href.as_str());
        self.base.respond(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let hx = HxAttrs::from_base(&self.base, !self.disabled);
        let has_href = !self.href.is_empty();
        let has_download = !self.download.is_empty();
        let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_owned());
        let label = non_empty(&self.label);
        let link_style =
            (self.link_style != LinkStyle::Default).then_some(self.link_style.as_str());
        let class = self.base.class_with(&[
            self.align.as_str(),
            if self.small { "small-button" } else { "" },
            if self.full { "full" } else { "" },
            if self.selected { "selected" } else { "" },
            if self.hide_label { "hidelabel" } else { "" },
        ]);
        let icon = if self.icon.is_empty() {
            None
        } else {
            let icon = Icon {
                base: self.base.static_child("icon"),
                ..Icon::new(self.icon.as_str())
            };
            Some(icon.prop("width", 20.0).render()?)
        };
        let icon_right = self.align == TextAlign::Right;
        let markup = html! {
            a id=(self.base.id) name=(self.base.name)
                href=[has_href.then_some(self.href.as_str())]
                target=[has_href.then_some(self.link_target.as_str())]
                referrerpolicy=[has_href.then_some(self.referrer_policy.as_str())]
                download=[has_download.then_some(self.download.as_str())]
                type=[has_download.then_some(self.media_type.as_str())]
                media=[non_empty(&self.media)] ping=[non_empty(&self.ping)] rel=[non_empty(&self.rel)]
                link-type=[link_style]
                hx-post=[hx.post] hx-target=[hx.target] hx-swap=[hx.swap]
                hx-sync=[hx.sync] hx-indicator=[hx.indicator]
                disabled[self.disabled] autofocus[self.auto_focus]
                aria-label=[label.clone()] title=[label]
                class=(class) style=[self.base.style_attr()] {
                @if !icon_right {
                    @if let Some(icon) = &icon { (icon) }
                }
                span { (self.label) }
                @if icon_right {
                    @if let Some(icon) = &icon { (icon) }
                }
                @if link_style.is_some() && self.show_badge {
                    span class="right" {
                        span class=(if self.selected { "badge selected-badge" } else { "badge" }) {
                            (self.badge)
                        }
                    }
                }
            }
        };
        self.base.register(COMPONENT_TYPE_LINK);
        Ok(markup)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_and_fallbacks() {
        let link = Link::default();
        assert_eq!(link.validation("referrerpolicy", &json!("")), json!("no-referrer"));
        assert_eq!(link.validation("link_target", &Value::Null), json!("_self"));
        assert_eq!(link.validation("link_style", &json!("menu-item")), json!("menu-item"));
        assert_eq!(link.validation("link_style", &json!("shiny")), json!(""));
    }

    #[test]
    fn href_attributes() {
        let mut link = Link::new("Docs", "https://example.com")
            .with_id("lnk")
            .prop("link_target", "_blank");
        let html = link.render().unwrap().into_string();
        assert!(html.contains(
            r#"href="https://example.com" target="_blank" referrerpolicy="no-referrer""#
        ));
        assert!(!html.contains("download="));
        assert!(!html.contains("link-type"));
    }

    #[test]
    fn badge_needs_style() {
        let mut plain = Link::new("A", "#").with_id("a").prop("show_badge", true).prop("badge", 4);
        assert!(!plain.render().unwrap().into_string().contains("badge"));

        let mut styled = Link::new("A", "#")
            .with_id("b")
            .prop("link_style", "menu-item")
            .prop("show_badge", true)
            .prop("badge", 4);
        let html = styled.render().unwrap().into_string();
        assert!(html.contains(r#"link-type="menu-item""#));
        assert!(html.contains(r#"<span class="badge">4</span>"#));
    }

    #[test]
    fn click_reports_href() {
        let mut link = Link::new("A", "/docs").with_id("a").with_event_url("/event");
        let evt = link.on_request(&TriggerEvent::new("a", "a"));
        assert_eq!(evt.name, LINK_EVENT_CLICK);
        assert_eq!(evt.value, json!("/docs"));
    }
}
