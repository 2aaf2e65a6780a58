//! String-backed enumerations shared by the components.
//!
//! Every enumerated property is stored as a Rust enum but travels as its
//! string form. [`check_enum_value`] maps an arbitrary value onto a member,
//! substituting the property's default for anything outside the enumeration.

use serde_json::Value;

use crate::value::to_string;

/// A closed set of string values.
pub trait EnumValue: Copy + Sized + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The wire form of this member.
    fn as_str(self) -> &'static str;

    /// Look up a member by its wire form.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == value)
    }
}

/// Return the member named by `value`, or `default` when it is empty or not a member.
pub fn check_enum_value<E: EnumValue>(value: &Value, default: E) -> E {
    let text = to_string(value, "");
    if text.is_empty() {
        return default;
    }
    match E::parse(&text) {
        Some(member) => member,
        None => {
            tracing::debug!(value = %text, default = default.as_str(), "enum value replaced by default");
            default
        }
    }
}

/// Declare a string-backed enum implementing [`EnumValue`], `Default` and `Display`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::component::enums::EnumValue for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::component::enums::EnumValue::as_str(*self))
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(member: $name) -> Self {
                serde_json::Value::String(
                    $crate::component::enums::EnumValue::as_str(member).to_owned(),
                )
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::component::enums::EnumValue::as_str(*self))
            }
        }

        // Unknown members deserialize to the default, like `check_enum_value`.
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$name as $crate::component::enums::EnumValue>::parse(&text).unwrap_or_default())
            }
        }
    };
}

pub(crate) use string_enum;

// ---------------------------------------------------------------------------
// Common enumerations
// ---------------------------------------------------------------------------

string_enum! {
    /// How a response fragment is swapped into the page (`hx-swap`).
    pub enum Swap {
        /// Replace the inner html of the target element.
        InnerHtml => "innerHTML",
        /// Replace the entire target element.
        OuterHtml => "outerHTML",
        BeforeBegin => "beforebegin",
        AfterBegin => "afterbegin",
        BeforeEnd => "beforeend",
        AfterEnd => "afterend",
        /// Delete the target regardless of the response.
        Delete => "delete",
        /// Do not append content from the response.
        None => "none",
    }
    default OuterHtml
}

string_enum! {
    /// Request indicator shown while a request is in flight (`hx-indicator`).
    pub enum Indicator {
        None => "",
        Spinner => "spinner",
    }
    default None
}

string_enum! {
    /// Request synchronization strategy (`hx-sync`).
    pub enum SyncMode {
        Drop => "drop",
        Abort => "abort",
        Replace => "replace",
        QueueFirst => "queue first",
        QueueLast => "queue last",
        QueueAll => "queue all",
        None => "none",
    }
    default None
}

string_enum! {
    pub enum Theme {
        Light => "light",
        Dark => "dark",
    }
    default Light
}

string_enum! {
    pub enum TextAlign {
        Left => "align-left",
        Center => "center",
        Right => "align-right",
    }
    default Left
}

impl TextAlign {
    /// The CSS `text-align` value.
    pub fn css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

string_enum! {
    pub enum VerticalAlign {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
    default Top
}

string_enum! {
    /// Where a table shows its pagination control.
    pub enum PaginationType {
        Top => "top",
        Bottom => "bottom",
        All => "all",
        None => "none",
    }
    default Top
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_and_display() {
        assert_eq!(Swap::parse("innerHTML"), Some(Swap::InnerHtml));
        assert_eq!(Swap::parse("inner"), None);
        assert_eq!(SyncMode::QueueAll.to_string(), "queue all");
        assert_eq!(Indicator::default(), Indicator::None);
    }

    #[test]
    fn check_enum_falls_back() {
        assert_eq!(check_enum_value(&json!("dark"), Theme::Light), Theme::Dark);
        assert_eq!(check_enum_value(&json!("blue"), Theme::Light), Theme::Light);
        assert_eq!(check_enum_value(&Value::Null, Swap::OuterHtml), Swap::OuterHtml);
    }

    #[test]
    fn empty_string_member() {
        // "" is a member for indicators, reached only through the default.
        assert_eq!(check_enum_value(&json!(""), Indicator::Spinner), Indicator::Spinner);
        assert_eq!(check_enum_value(&json!("spinner"), Indicator::None), Indicator::Spinner);
    }

    #[test]
    fn into_value() {
        assert_eq!(Value::from(TextAlign::Center), json!("center"));
        assert_eq!(PaginationType::ALL.len(), 4);
    }
}
