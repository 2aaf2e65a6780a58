//! # hx-components
//!
//! Server-rendered html components with htmx event round-trips.
//!
//! Every component is a struct of typed properties behind a name-based
//! property contract, a `maud` template, and an event translator that turns
//! a posted htmx trigger into a named response event. Component trees are
//! rebuilt per request; the [`component::RequestStore`] carries changed
//! property values and registered event sources between requests.
//!
//! ## Core Systems
//!
//! - **[`component`]**: Component trait, base property set, enumerations, request store
//! - **[`widgets`]**: Built-in components, from Icon and Button up to Table, Editor and Application
//! - **[`event`]**: Trigger and response events, htmx headers, dispatch
//! - **[`render`]**: Shared markup helpers (class and style attributes, htmx attributes)
//! - **[`value`]**: Coercion of dynamic JSON values into typed property values
//! - **[`config`]**: Default labels and document-level configuration
//! - **[`error`]**: Render and store errors
//! - **[`testing`]**: Pilot, snapshot helpers and fixtures

// Foundation
pub mod error;
pub mod value;
pub mod config;

// Component system
pub mod component;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Testing
pub mod testing;
