//! Headless testing helpers: Pilot, snapshot helpers, fixtures.
//!
//! Use the [`Pilot`] to drive a component tree through simulated requests
//! without an http server. Use [`render_to_string`] and related helpers to
//! capture component output for snapshot-style assertions, and
//! [`fixtures`](fixtures::fixtures) for a sample instance of every component.

pub mod fixtures;
pub mod pilot;
pub mod snapshot;

pub use pilot::{Pilot, TreeBuilder};
pub use snapshot::{count_tag, pretty_html, render_pretty, render_to_string};
