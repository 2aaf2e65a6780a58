//! Component contract: trait, base property set, enumerations, request store.

pub mod base;
pub mod enums;
pub mod store;
pub mod traits;

pub use base::{in_slot, target_value, BaseComponent};
pub use enums::{
    check_enum_value, EnumValue, Indicator, PaginationType, Swap, SyncMode, TextAlign, Theme,
    VerticalAlign,
};
pub use store::{RequestStore, StoreState};
pub use traits::{value_response, Component, ComponentExt, ResponseHandler, BASE_EVENT_VALUE};

pub(crate) use traits::component_boilerplate;
