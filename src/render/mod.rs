//! Markup helpers shared by the component templates.
//!
//! Templates are written with [`maud::html!`]. Attributes that are only
//! emitted when their backing property is set are expressed as
//! `attr=[Option<..>]`; the helpers here compute those options from a
//! [`BaseComponent`].

use maud::{Markup, PreEscaped};

use crate::component::enums::{EnumValue, Indicator, SyncMode};
use crate::component::BaseComponent;
use crate::value::StringMap;

/// `style` attribute value (`key:value;` pairs), `None` when there is nothing to emit.
pub fn style_attr(style: &StringMap) -> Option<String> {
    if style.is_empty() {
        return None;
    }
    Some(
        style
            .iter()
            .map(|(key, value)| format!("{key}:{value};"))
            .collect(),
    )
}

/// `class` attribute value: the non-empty `fixed` names followed by `custom`.
pub fn class_attr(fixed: &[&str], custom: &[String]) -> String {
    fixed
        .iter()
        .copied()
        .filter(|class| !class.is_empty())
        .chain(custom.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenate rendered fragments.
pub fn join(parts: impl IntoIterator<Item = Markup>) -> Markup {
    PreEscaped(parts.into_iter().map(|part| part.into_string()).collect())
}

// ---------------------------------------------------------------------------
// HxAttrs
// ---------------------------------------------------------------------------

/// The htmx attributes of an interactive element.
///
/// All fields are `None` for a component without an event URL, or when the
/// element is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxAttrs {
    pub post: Option<String>,
    pub target: Option<String>,
    pub swap: Option<String>,
    pub sync: Option<String>,
    pub indicator: Option<String>,
}

impl HxAttrs {
    /// Attributes for `base`; `enabled = false` suppresses them all.
    pub fn from_base(base: &BaseComponent, enabled: bool) -> Self {
        if !enabled || base.event_url.is_empty() {
            return Self::default();
        }
        Self {
            post: Some(base.event_url.clone()),
            target: Some(base.target.clone()).filter(|t| !t.is_empty()),
            swap: Some(base.swap.as_str().to_owned()),
            sync: (base.sync != SyncMode::None).then(|| base.sync.as_str().to_owned()),
            indicator: (base.indicator != Indicator::None)
                .then(|| format!("#{}", base.indicator.as_str())),
        }
    }

    /// Whether the element posts events at all.
    pub fn is_active(&self) -> bool {
        self.post.is_some()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
