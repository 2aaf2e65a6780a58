//! Component trait: property access, validation, rendering, event handling.
//!
//! Every component owns a [`BaseComponent`] and adds its own typed
//! properties on top. Property access goes through names so a component can
//! be driven from posted form data or restored from the request store; the
//! component-specific `match` runs first and unknown names fall through to
//! the base.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use maud::Markup;
use serde_json::Value;

use super::base::BaseComponent;
use super::store::RequestStore;
use crate::error::RenderError;
use crate::event::message::{ResponseEvent, TriggerEvent};
use crate::value::{to_string_map, PropertyMap};

/// User callback receiving a component's [`ResponseEvent`].
///
/// Whatever it returns replaces the event.
pub type ResponseHandler = Rc<dyn Fn(ResponseEvent) -> ResponseEvent>;

/// Event name of the base component's default response.
pub const BASE_EVENT_VALUE: &str = "value";

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every server-rendered component.
///
/// Object-safe: builder conveniences that need `Self: Sized` live on
/// [`ComponentExt`].
pub trait Component: Any {
    /// Short type name, e.g. `"button"`.
    fn component_type(&self) -> &'static str;

    fn base(&self) -> &BaseComponent;

    fn base_mut(&mut self) -> &mut BaseComponent;

    /// All properties, base properties included.
    fn properties(&self) -> PropertyMap;

    /// Current value of a property, `None` for an unknown name.
    fn get_property(&self, name: &str) -> Option<Value> {
        self.properties().remove(name)
    }

    /// Coerce `value` into a valid value for `name`.
    ///
    /// Unknown names return the value unchanged.
    fn validation(&self, name: &str, value: &Value) -> Value {
        self.base().validation(name, value)
    }

    /// Validate and store a property value, returning what was stored.
    ///
    /// Outside of [`init_props`](Component::init_props) the stored value is
    /// also recorded in the request store under the component id.
    fn set_property(&mut self, name: &str, value: Value) -> Value {
        self.base_mut().set_property(name, value)
    }

    /// Properties whose validation depends on other properties.
    ///
    /// [`init_props`](Component::init_props) sets them last, in this order.
    fn restore_last(&self) -> &'static [&'static str] {
        &[]
    }

    /// Bring every property to a valid state, then restore the values
    /// recorded in the request store for this component's id.
    fn init_props(&mut self) {
        let previous = std::mem::replace(&mut self.base_mut().init, true);
        let props = self.properties();
        replay(self, props);
        let id = self.base().id.clone();
        if let Some(values) = self.base().store.values(&id) {
            replay(self, values);
        }
        self.base_mut().init = previous;
    }

    /// Produce the component's markup. Calls `init_props` first.
    fn render(&mut self) -> Result<Markup, RenderError>;

    /// Translate a posted trigger into a response event.
    ///
    /// The default answers with a `"value"` event carrying the component itself.
    fn on_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        value_response(self.as_dyn(), event)
    }

    /// Restore a rebuilt component from the request store, then handle the trigger.
    ///
    /// Component trees are rebuilt for every request, so this is the entry
    /// point used by the dispatcher and by composites forwarding to a child.
    fn handle_request(&mut self, event: &TriggerEvent) -> ResponseEvent {
        self.init_props();
        self.on_request(event)
    }

    fn box_clone(&self) -> Box<dyn Component>;

    /// Upcast to a trait object.
    fn as_dyn(&self) -> &dyn Component;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Set `values` on `component`, holding back its
/// [`restore_last`](Component::restore_last) names until the end.
fn replay<C: Component + ?Sized>(component: &mut C, mut values: PropertyMap) {
    let deferred: Vec<(String, Value)> = component
        .restore_last()
        .iter()
        .filter_map(|name| values.remove_entry(*name))
        .collect();
    for (name, value) in values.into_iter().chain(deferred) {
        component.set_property(&name, value);
    }
}

/// The generic `"value"` answer to a trigger, passed through the response callback.
///
/// Composites use it for triggers that do not belong to any of their children.
pub fn value_response(component: &dyn Component, event: &TriggerEvent) -> ResponseEvent {
    let mut evt = ResponseEvent::new(component, BASE_EVENT_VALUE);
    evt.trigger_name = event.name.clone();
    component.base().respond(evt)
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("type", &self.component_type())
            .field("id", &self.base().id)
            .finish()
    }
}

/// Implements the boilerplate trait methods for a component with a `base` field.
macro_rules! component_boilerplate {
    () => {
        fn base(&self) -> &$crate::component::BaseComponent {
            &self.base
        }

        fn base_mut(&mut self) -> &mut $crate::component::BaseComponent {
            &mut self.base
        }

        fn box_clone(&self) -> Box<dyn $crate::component::Component> {
            Box::new(self.clone())
        }

        fn as_dyn(&self) -> &dyn $crate::component::Component {
            self
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

pub(crate) use component_boilerplate;

// ---------------------------------------------------------------------------
// ComponentExt
// ---------------------------------------------------------------------------

/// Builder-style configuration for components.
///
/// Values set here are validated like any other property but are not
/// recorded in the request store: they describe how the component is built,
/// not what the user changed.
pub trait ComponentExt: Component {
    /// Set any property by name (builder).
    fn prop(mut self, name: &str, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        let previous = std::mem::replace(&mut self.base_mut().init, true);
        self.set_property(name, value.into());
        self.base_mut().init = previous;
        self
    }

    fn with_id(self, id: &str) -> Self
    where
        Self: Sized,
    {
        self.prop("id", id)
    }

    fn with_name(self, name: &str) -> Self
    where
        Self: Sized,
    {
        self.prop("name", name)
    }

    fn with_event_url(self, url: &str) -> Self
    where
        Self: Sized,
    {
        self.prop("event_url", url)
    }

    fn with_target(self, target: &str) -> Self
    where
        Self: Sized,
    {
        self.prop("target", target)
    }

    /// Add a CSS class, skipping duplicates.
    fn with_class(mut self, class: &str) -> Self
    where
        Self: Sized,
    {
        let class = class.to_owned();
        if !self.base().class.contains(&class) {
            self.base_mut().class.push(class);
        }
        self
    }

    /// Merge inline style declarations.
    fn with_style(self, style: Value) -> Self
    where
        Self: Sized,
    {
        match to_string_map(&style) {
            Some(_) => self.prop("style", style),
            None => self,
        }
    }

    /// Merge custom data.
    fn with_data(self, data: Value) -> Self
    where
        Self: Sized,
    {
        self.prop("data", data)
    }

    /// Share a request store with the rest of the component tree.
    fn with_store(mut self, store: &RequestStore) -> Self
    where
        Self: Sized,
    {
        self.base_mut().store = store.clone();
        self
    }

    /// Install the response callback.
    fn on_response<F>(mut self, handler: F) -> Self
    where
        Self: Sized,
        F: Fn(ResponseEvent) -> ResponseEvent + 'static,
    {
        self.base_mut().on_response = Some(Rc::new(handler));
        self
    }

    /// Box the component as a trait object.
    fn boxed(self) -> Box<dyn Component>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl<T: Component> ComponentExt for T {}
