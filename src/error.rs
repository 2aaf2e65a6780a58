//! Error types.
//!
//! Invalid property values are never errors: validators replace them with
//! defaults. Only markup generation and (de)serialization can fail.

/// Failure while producing a component's markup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{component}: no child component for slot `{slot}`")]
    MissingComponent { component: String, slot: String },
}

impl RenderError {
    pub fn missing(component: &str, slot: impl Into<String>) -> Self {
        Self::MissingComponent {
            component: component.to_owned(),
            slot: slot.into(),
        }
    }
}

/// Failure while loading or saving JSON state (request store, label tables).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("labels already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_component_message() {
        let err = RenderError::missing("table", "header_name");
        assert_eq!(err.to_string(), "table: no child component for slot `header_name`");
    }

    #[test]
    fn json_error_converts() {
        let err: StoreError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("json: "));
    }
}
