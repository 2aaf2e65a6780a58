//! Pagination: page navigation buttons, a page number input and a page-size select.
//!
//! The control re-renders itself on every change; its `target` defaults to
//! its own id.

use maud::{html, Markup};
use serde_json::{json, Value};

use super::button::{Button, ButtonStyle};
use super::number_input::NumberInput;
use super::select::{Select, SelectOption};
use crate::component::{
    component_boilerplate, target_value, value_response, BaseComponent, Component, ComponentExt,
};
use crate::config::labels;
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{to_boolean, to_integer, PropertyMap};

pub const COMPONENT_TYPE_PAGINATION: &str = "pagination";
pub const PAGINATION_EVENT_VALUE: &str = "pagination_value";
pub const PAGINATION_EVENT_PAGE_SIZE: &str = "pagination_page_size";

/// Page sizes offered by the page-size select.
pub const VALID_PAGE_SIZE: [i64; 5] = [5, 10, 20, 50, 100];

const SLOT_FIRST: &str = "pagination_btn_first";
const SLOT_PREVIOUS: &str = "pagination_btn_previous";
const SLOT_NEXT: &str = "pagination_btn_next";
const SLOT_LAST: &str = "pagination_btn_last";
const SLOT_INPUT: &str = "pagination_input_value";
const SLOT_PAGE_SIZE: &str = "pagination_page_size";

/// `value` when it is one of [`VALID_PAGE_SIZE`], otherwise `fallback`.
pub fn valid_page_size(value: i64, fallback: i64) -> i64 {
    if VALID_PAGE_SIZE.contains(&value) {
        value
    } else {
        fallback
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub base: BaseComponent,
    /// Current page, 1-based.
    pub value: i64,
    pub page_size: i64,
    pub page_count: i64,
    pub hide_page_size: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            value: 1,
            page_size: 10,
            page_count: 1,
            hide_page_size: false,
        }
    }
}

impl Pagination {
    pub fn new(value: i64, page_count: i64) -> Self {
        Self {
            value,
            page_count: page_count.max(1),
            ..Self::default()
        }
    }

    pub fn with_base(base: BaseComponent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    fn check_value(&self, value: &Value) -> i64 {
        to_integer(value, 1).min(self.page_count).max(1)
    }

    fn button(&self, slot: &str) -> Button {
        let (label, value, disabled, style) = match slot {
            SLOT_FIRST => (
                "1".to_owned(),
                1,
                self.value <= 1,
                json!({"padding": "6px 6px 7px", "font-size": "15px", "margin": "1px 1px 2px 0px"}),
            ),
            SLOT_PREVIOUS => (
                "❮".to_owned(),
                (self.value - 1).max(1),
                self.value <= 1,
                json!({"padding": "5px 6px 8px", "font-size": "15px", "margin": "1px 0 2px"}),
            ),
            SLOT_NEXT => (
                "❯".to_owned(),
                self.value + 1,
                self.value >= self.page_count,
                json!({"padding": "5px 6px 8px", "font-size": "15px", "margin": "1px 1px 2px 0px"}),
            ),
            _ => (
                self.page_count.to_string(),
                self.page_count,
                self.value >= self.page_count,
                json!({"padding": "6px 6px 7px", "font-size": "15px", "margin": "1px 0 2px"}),
            ),
        };
        Button::with_base(self.base.child(slot), label)
            .prop("button_style", ButtonStyle::Border)
            .prop("disabled", disabled)
            .with_data(json!({"value": value.to_string()}))
            .with_style(style)
    }

    fn page_input(&self) -> NumberInput {
        NumberInput::with_base(self.base.child(SLOT_INPUT))
            .prop("label", labels().pagination_page.as_str())
            .prop("integer", true)
            .prop("set_min", true)
            .prop("min_value", 1)
            .prop("set_max", true)
            .prop("max_value", self.page_count)
            .with_style(json!({"padding": "7px", "width": "60px", "font-weight": "bold"}))
            .prop("value", Value::from(self.value))
    }

    fn page_size_select(&self) -> Select {
        let options = VALID_PAGE_SIZE
            .iter()
            .map(|size| SelectOption::new(size.to_string(), size.to_string()))
            .collect();
        Select::with_base(self.base.child(SLOT_PAGE_SIZE), options)
            .prop("label", labels().pagination_size.as_str())
            .with_style(json!({"padding": "7px"}))
            .prop("value", Value::from(self.page_size.to_string()))
    }

    /// Translate an event of one of the child controls.
    fn response(&mut self, evt: ResponseEvent) -> ResponseEvent {
        let (name, value) = match evt.trigger_name.as_str() {
            SLOT_PAGE_SIZE => (
                PAGINATION_EVENT_PAGE_SIZE,
                self.set_property("page_size", evt.value.clone()),
            ),
            SLOT_INPUT => (PAGINATION_EVENT_VALUE, self.set_property("value", evt.value.clone())),
            SLOT_FIRST | SLOT_PREVIOUS | SLOT_NEXT | SLOT_LAST => {
                let page = evt.trigger_data().get("value").cloned().unwrap_or(Value::Null);
                (PAGINATION_EVENT_VALUE, self.set_property("value", page))
            }
            _ => return evt,
        };
        let evt = ResponseEvent::new(&*self, name).with_value(value);
        self.base.respond(evt)
    }
}

impl Component for Pagination {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_PAGINATION
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("value", Value::from(self.value)),
            ("page_size", Value::from(self.page_size)),
            ("page_count", Value::from(self.page_count)),
            ("hide_page_size", Value::from(self.hide_page_size)),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "value" => Value::from(self.check_value(value)),
            "page_size" => Value::from(valid_page_size(to_integer(value, 10), VALID_PAGE_SIZE[0])),
            "page_count" => Value::from(to_integer(value, 1).max(1)),
            "target" => Value::from(target_value(value, &self.base.id)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "value" => {
                self.value = self.check_value(&value);
                Value::from(self.value)
            }
            "page_size" => {
                self.page_size = valid_page_size(to_integer(&value, 10), VALID_PAGE_SIZE[0]);
                Value::from(self.page_size)
            }
            "page_count" => {
                self.page_count = to_integer(&value, 1).max(1);
                Value::from(self.page_count)
            }
            "hide_page_size" => {
                self.hide_page_size = to_boolean(&value, false);
                Value::from(self.hide_page_size)
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
        &["value"]
    }

    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        let Some(slot) = self.base.route(&event.id).map(str::to_owned) else {
            return value_response(&*self, event);
        };
        let evt = match slot.as_str() {
            SLOT_INPUT => self.page_input().handle_request(event),
            SLOT_PAGE_SIZE => self.page_size_select().handle_request(event),
            SLOT_FIRST | SLOT_PREVIOUS | SLOT_NEXT | SLOT_LAST => {
                self.button(&slot).handle_request(event)
            }
            _ => return value_response(&*self, event),
        };
        self.response(evt)
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let first = self.button(SLOT_FIRST).render()?;
        let previous = self.button(SLOT_PREVIOUS).render()?;
        let input = self.page_input().render()?;
        let next = self.button(SLOT_NEXT).render()?;
        let last = self.button(SLOT_LAST).render()?;
        let page_size = if self.hide_page_size {
            None
        } else {
            Some(self.page_size_select().render()?)
        };
        let markup = html! {
            div id=(self.base.id) name=(self.base.name) class=(self.base.class_with(&["row"]))
                style=[self.base.style_attr()] {
                div class="cell padding-small" { (first) (previous) }
                div class="cell" { (input) }
                div class="cell padding-small" { (next) (last) }
                @if let Some(page_size) = page_size {
                    div class="cell padding-small" { (page_size) }
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

    fn pager() -> Pagination {
        Pagination::new(2, 5).with_id("pgn").with_event_url("/event")
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn value_clamped_to_pages() {
        let pgn = pager();
        assert_eq!(pgn.validation("value", &json!(9)), json!(5));
        assert_eq!(pgn.validation("value", &json!(-1)), json!(1));
        assert_eq!(pgn.validation("value", &Value::Null), json!(1));
    }

    #[test]
    fn page_size_fallbacks() {
        let pgn = pager();
        assert_eq!(pgn.validation("page_size", &json!(20)), json!(20));
        assert_eq!(pgn.validation("page_size", &json!(7)), json!(5));
        assert_eq!(pgn.validation("page_size", &Value::Null), json!(10));
    }

    #[test]
    fn page_count_is_at_least_one() {
        let mut pgn = Pagination::new(1, 0).with_id("pgn");
        assert_eq!(pgn.page_count, 1);
        assert_eq!(pgn.set_property("page_count", json!("0")), json!(1));
        assert_eq!(pgn.validation("page_count", &json!(-3)), json!(1));
        let html = pgn.render().unwrap().into_string();
        assert!(!pgn.page_input().disabled);
        assert!(html.contains(r#"id="pgn_pagination_btn_last""#));
    }

    #[test]
    fn target_defaults_to_self() {
        let mut pgn = pager();
        pgn.init_props();
        assert_eq!(pgn.base.target, "#pgn");
        assert_eq!(pgn.validation("target", &json!("this")), json!("this"));
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn render_children() {
        let mut pgn = pager();
        let html = pgn.render().unwrap().into_string();
        for slot in [SLOT_FIRST, SLOT_PREVIOUS, SLOT_INPUT, SLOT_NEXT, SLOT_LAST, SLOT_PAGE_SIZE] {
            assert!(html.contains(&format!(r#"id="pgn_{slot}""#)), "{slot}");
        }
        assert!(html.contains(r##"hx-target="#pgn""##));
        assert!(html.contains(r#"<option selected key="1" value="10">10</option>"#));
        assert!(pgn.base.store.is_registered("pgn_pagination_btn_next"));
    }

    #[test]
    fn first_page_disables_back_buttons() {
        let mut pgn = Pagination::new(1, 3).with_id("pgn").prop("hide_page_size", true);
        let html = pgn.render().unwrap().into_string();
        assert!(!html.contains("pgn_pagination_page_size"));
        let first = pgn.button(SLOT_FIRST);
        assert!(first.disabled);
        assert!(!pgn.button(SLOT_NEXT).disabled);
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    #[test]
    fn next_button_moves_page() {
        let mut pgn = pager();
        let evt = pgn.on_request(&TriggerEvent::new("pgn_pagination_btn_next", SLOT_NEXT));
        assert_eq!(evt.name, PAGINATION_EVENT_VALUE);
        assert_eq!(evt.value, json!(3));
        assert_eq!(pgn.value, 3);
        assert_eq!(evt.trigger_id(), "pgn");
    }

    #[test]
    fn page_input_is_clamped() {
        let mut pgn = pager();
        let te = TriggerEvent::new("pgn_pagination_input_value", SLOT_INPUT)
            .with_value(SLOT_INPUT, "42");
        let evt = pgn.on_request(&te);
        assert_eq!(evt.name, PAGINATION_EVENT_VALUE);
        assert_eq!(evt.value, json!(5));
    }

    #[test]
    fn page_size_event() {
        let mut pgn = pager();
        let te = TriggerEvent::new("pgn_pagination_page_size", SLOT_PAGE_SIZE)
            .with_value(SLOT_PAGE_SIZE, "50");
        let evt = pgn.on_request(&te);
        assert_eq!(evt.name, PAGINATION_EVENT_PAGE_SIZE);
        assert_eq!(evt.value, json!(50));
        assert_eq!(pgn.base.store.values("pgn").unwrap()["page_size"], json!(50));
    }

    #[test]
    fn foreign_trigger_passes_through() {
        let mut pgn = pager();
        let evt = pgn.on_request(&TriggerEvent::new("other", "x"));
        assert_eq!(evt.name, "value");
        let unknown = ResponseEvent::detached("mystery", "custom");
        assert_eq!(pgn.response(unknown).name, "custom");
    }
}
