//! Unified Error Model
use thiserror::Error;

use crate::kinds::{ComponentKind, Framework};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiGenError {
    #[error("CATALOG/NOT_FOUND: component kind \"{0}\" not found")]
    ComponentNotFound(ComponentKind),

    #[error("CODEGEN/UNIMPLEMENTED: code generation not implemented for {component} in {framework}")]
    Unimplemented {
        component: String,
        framework: Framework,
    },

    #[error("CATALOG/{0}")]
    Catalog(String),

    #[error("RENDER/{0}")]
    Render(String),

    #[error("PARSE/UNKNOWN: unknown {field} \"{value}\"")]
    UnknownValue { field: &'static str, value: String },

    #[error("PARSE/INVALID_ARGS: {0}")]
    InvalidArguments(String),
}

impl UiGenError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_missing_pieces() {
        let err = UiGenError::ComponentNotFound(ComponentKind::PricingTable);
        assert_eq!(
            err.to_string(),
            "CATALOG/NOT_FOUND: component kind \"pricing-table\" not found"
        );

        let err = UiGenError::Unimplemented {
            component: "Card".to_string(),
            framework: Framework::Vue,
        };
        assert_eq!(
            err.to_string(),
            "CODEGEN/UNIMPLEMENTED: code generation not implemented for Card in vue"
        );

        let err = UiGenError::InvalidArguments("missing field `description`".to_string());
        assert_eq!(err.to_string(), "PARSE/INVALID_ARGS: missing field `description`");
    }
}
