//! Request store: the per-session record shared by a component tree.
//!
//! Two maps live here. `request_value` keeps every property changed through
//! `set_property` after initialisation, keyed by component id, so a component
//! rebuilt on the next request can restore its state. `request_map` keeps the
//! ids that rendered with an event URL, i.e. the ids the client may post back.
//!
//! The store is a cheap `Rc` handle; cloning it shares the same maps.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::value::PropertyMap;

/// Plain data behind a [`RequestStore`]. Serializable for session persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub request_value: BTreeMap<String, PropertyMap>,
    #[serde(default)]
    pub request_map: BTreeMap<String, String>,
}

/// Shared, single-threaded handle to a [`StoreState`].
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    state: Rc<RefCell<StoreState>>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap previously saved state.
    pub fn from_state(state: StoreState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Record a changed property value for `id`.
    pub fn record(&self, id: &str, property: &str, value: Value) {
        tracing::trace!(id, property, "request value recorded");
        self.state
            .borrow_mut()
            .request_value
            .entry(id.to_owned())
            .or_default()
            .insert(property.to_owned(), value);
    }

    /// The recorded values of `id`, if any.
    pub fn values(&self, id: &str) -> Option<PropertyMap> {
        self.state.borrow().request_value.get(id).cloned()
    }

    /// Register `id` as an event source of the given component type.
    pub fn register(&self, id: &str, component_type: &str) {
        self.state
            .borrow_mut()
            .request_map
            .insert(id.to_owned(), component_type.to_owned());
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.state.borrow().request_map.contains_key(id)
    }

    /// The component type registered under `id`.
    pub fn component_type(&self, id: &str) -> Option<String> {
        self.state.borrow().request_map.get(id).cloned()
    }

    /// Number of registered event sources.
    pub fn registered_count(&self) -> usize {
        self.state.borrow().request_map.len()
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Whether both handles point at the same maps.
    pub fn same_store(&self, other: &RequestStore) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&*self.state.borrow())?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let state: StoreState = serde_json::from_str(json)?;
        Ok(Self::from_state(state))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
