//! Event system: trigger and response events, htmx headers, dispatch.

pub mod handler;
pub mod message;

pub use handler::{invalid_trigger_response, EventDispatcher};
pub use message::{header, ResponseEvent, TriggerEvent};
