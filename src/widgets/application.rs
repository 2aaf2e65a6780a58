//! Application: the html document shell that owns the main component.
//!
//! The shell itself is rendered once per page load. Every later request is
//! routed through [`Application::on_request`] into the main component, which
//! answers with a fragment.

use maud::{html, Markup, DOCTYPE};
use serde_json::Value;

use super::spinner::Spinner;
use crate::component::{
    check_enum_value, component_boilerplate, BaseComponent, Component, EnumValue, SyncMode, Theme,
};
use crate::config::{HeadLink, LibraryConfig};
use crate::error::RenderError;
use crate::event::handler::invalid_trigger_response;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{
    merge_string_map, string_map_value, to_boolean, to_string, to_string_list, to_string_map,
    PropertyMap, StringMap,
};

pub const COMPONENT_TYPE_APPLICATION: &str = "application";

const SLOT_MAIN: &str = "main";

fn head_links(value: &Value) -> Vec<HeadLink> {
    serde_json::from_value(value.clone()).unwrap_or_else(|err| {
        if !value.is_null() {
            tracing::debug!(error = %err, "head links replaced by empty list");
        }
        Vec::new()
    })
}

fn head_links_value(links: &[HeadLink]) -> Value {
    serde_json::to_value(links).unwrap_or(Value::Array(Vec::new()))
}

#[derive(Debug, Clone)]
pub struct Application {
    pub base: BaseComponent,
    /// Document title.
    pub title: String,
    pub theme: Theme,
    /// Extra request headers sent with every htmx request (`hx-headers`).
    pub header: StringMap,
    /// Script sources. Empty means the configured defaults.
    pub script: Vec<String>,
    /// Head links emitted after the configured ones.
    pub link: Vec<HeadLink>,
    pub main: Option<Box<dyn Component>>,
    /// Keep the page usable while a request runs.
    pub spinner_notmodal: bool,
    /// `hx-sync` of the application element.
    pub component_sync: SyncMode,
    pub config: LibraryConfig,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            base: BaseComponent::default(),
            title: String::new(),
            theme: Theme::Light,
            header: StringMap::new(),
            script: Vec::new(),
            link: Vec::new(),
            main: None,
            spinner_notmodal: false,
            component_sync: SyncMode::Abort,
            config: LibraryConfig::default(),
        }
    }
}

impl Application {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the main component (builder).
    pub fn with_main(mut self, main: Box<dyn Component>) -> Self {
        self.main = Some(main);
        self
    }

    /// Replace the library configuration (builder).
    pub fn with_config(mut self, config: LibraryConfig) -> Self {
        self.config = config;
        self
    }

    /// The main component, sharing the application's request store.
    ///
    /// A main component without an event URL posts to the configured one.
    fn wired_main(&mut self) -> Option<&mut Box<dyn Component>> {
        let main = self.main.as_mut()?;
        main.base_mut().store = self.base.store.clone();
        if main.base().event_url.is_empty() {
            main.base_mut().event_url = self.config.event_url.clone();
        }
        Some(main)
    }

    fn scripts(&self) -> &[String] {
        if self.script.is_empty() {
            &self.config.scripts
        } else {
            &self.script
        }
    }

    /// The `hx-headers` JSON object, `None` without headers.
    fn hx_headers(&self) -> Option<String> {
        if self.header.is_empty() {
            return None;
        }
        serde_json::to_string(&self.header).ok()
    }
}

impl Component for Application {
    fn component_type(&self) -> &'static str {
        COMPONENT_TYPE_APPLICATION
    }

    component_boilerplate!();

    fn properties(&self) -> PropertyMap {
        self.base.merge_properties([
            ("title", Value::from(self.title.as_str())),
            ("theme", self.theme.into()),
            ("header", string_map_value(&self.header)),
            ("script", Value::from(self.script.clone())),
            ("link", head_links_value(&self.link)),
            ("spinner_notmodal", Value::from(self.spinner_notmodal)),
            ("component_sync", self.component_sync.into()),
        ])
    }

    fn validation(&self, name: &str, value: &Value) -> Value {
        match name {
            "theme" => check_enum_value(value, Theme::Light).into(),
            "component_sync" => check_enum_value(value, SyncMode::Abort).into(),
            "header" => {
                let overlay = to_string_map(value).unwrap_or_default();
                string_map_value(&merge_string_map(&self.header, &overlay))
            }
            "script" => Value::from(to_string_list(value)),
            "link" => head_links_value(&head_links(value)),
            _ => self.base.validation(name, value),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Value {
        let stored = match name {
            "title" => {
                self.title = to_string(&value, "");
                Value::from(self.title.as_str())
            }
            "theme" => {
                self.theme = check_enum_value(&value, Theme::Light);
                self.theme.into()
            }
            "component_sync" => {
                self.component_sync = check_enum_value(&value, SyncMode::Abort);
                self.component_sync.into()
            }
            "header" => {
                let overlay = to_string_map(&value).unwrap_or_default();
                self.header = merge_string_map(&self.header, &overlay);
                string_map_value(&self.header)
            }
            "script" => {
                self.script = to_string_list(&value);
                Value::from(self.script.clone())
            }
            "link" => {
                self.link = head_links(&value);
                head_links_value(&self.link)
            }
            "spinner_notmodal" => {
                self.spinner_notmodal = to_boolean(&value, false);
                Value::from(self.spinner_notmodal)
            }
            _ => return self.base.set_property(name, value),
        };
        self.base.set_request_value(name, &stored);
        stored
    }

    /// Every trigger goes to the main component. Registration is checked by
    /// the [`EventDispatcher`](crate::event::EventDispatcher) before this runs.
    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        match self.wired_main() {
            Some(main) => main.handle_request(event),
            None => {
                tracing::warn!(id = %event.id, name = %event.name, "application has no main component");
                invalid_trigger_response(event)
            }
        }
    }

    fn render(&mut self) -> Result<Markup, RenderError> {
        self.init_props();
        let main = match self.wired_main() {
            Some(main) => main.render()?,
            None => return Err(RenderError::missing(COMPONENT_TYPE_APPLICATION, SLOT_MAIN)),
        };
        let spinner = Spinner::new(self.spinner_notmodal).render();
        let sync = (self.component_sync != SyncMode::None).then(|| self.component_sync.as_str());
        let links = self.config.head_links.iter().chain(self.link.iter());
        Ok(html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0, viewport-fit=cover";
                    meta http-equiv="X-UA-Compatible" content="ie=edge";
                    @for src in self.scripts() {
                        script src=(src) {}
                    }
                    @for link in links {
                        link rel=(link.rel) href=(link.href)
                            type=[(!link.link_type.is_empty()).then_some(link.link_type.as_str())];
                    }
                    title { (self.title) }
                }
                body {
                    div id=(self.base.id) theme=(self.theme.as_str())
                        style=[self.base.style_attr()]
                        hx-ext="remove-me" hx-headers=[self.hx_headers()] hx-sync=[sync]
                        class=(self.base.class_with(&[])) {
                        div id="toast-msg" {}
                        div { (spinner) }
                        (main)
                    }
                }
            }
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
