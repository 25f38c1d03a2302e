//! Error types for catalog parsing and validation.

use thiserror::Error;

/// Error type for catalog parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Block without a `states` list.
    #[error("block '{block}' has no 'states' entry")]
    MissingStates {
        /// Raw block name.
        block: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for catalog validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Property declared without any value.
    #[error("property '{property}' has no values")]
    EmptyProperty {
        /// Property name.
        property: String,
    },

    /// Property mixing numeric and symbolic values.
    #[error("property '{property}' mixes numeric and symbolic values (offending value '{value}')")]
    MixedPropertyKind {
        /// Property name.
        property: String,
        /// First value whose kind differs from the property kind.
        value: String,
    },

    /// Numeric value that does not fit the numeric wrapper.
    #[error("invalid numeric value '{value}' for property '{property}' (expected 0..=255)")]
    InvalidNumericValue {
        /// Property name.
        property: String,
        /// Invalid value.
        value: String,
    },

    /// Block with an empty `states` list.
    #[error("block '{block}' has no states")]
    EmptyStates {
        /// Raw block name.
        block: String,
    },

    /// State missing one of the block's properties.
    #[error("state {id} of block '{block}' does not assign property '{property}'")]
    MissingStateProperty {
        /// Raw block name.
        block: String,
        /// Property name.
        property: String,
        /// State identifier.
        id: u16,
    },

    /// Two states of one block with the same property combination.
    #[error("states {first} and {second} of block '{block}' have the same property values")]
    DuplicateState {
        /// Raw block name.
        block: String,
        /// Identifier of the earlier state.
        first: u16,
        /// Identifier of the later state.
        second: u16,
    },

    /// State assigning a property the block does not declare.
    #[error("state {id} of block '{block}' assigns undeclared property '{property}'")]
    UndeclaredStateProperty {
        /// Raw block name.
        block: String,
        /// Property name.
        property: String,
        /// State identifier.
        id: u16,
    },

    /// State assigning a value outside the block's declared values.
    #[error("state {id} of block '{block}' uses unknown value '{value}' for property '{property}'")]
    UnknownPropertyValue {
        /// Raw block name.
        block: String,
        /// Property name.
        property: String,
        /// Unknown value.
        value: String,
        /// State identifier.
        id: u16,
    },

    /// Raw name that cannot become a Rust identifier.
    #[error("'{raw}' sanitizes to '{identifier}', which is not a valid identifier")]
    InvalidIdentifier {
        /// Raw schema name.
        raw: String,
        /// Sanitized identifier.
        identifier: String,
    },

    /// Two raw names sanitizing to the same identifier.
    #[error("{scope}: '{first}' and '{second}' both map to identifier '{identifier}'")]
    IdentifierCollision {
        /// Where the collision happened.
        scope: String,
        /// Colliding identifier.
        identifier: String,
        /// Raw name that claimed the identifier first.
        first: String,
        /// Raw name that collided.
        second: String,
    },
}

impl ParseError {
    /// Creates a missing states error.
    pub fn missing_states(block: impl Into<String>) -> Self {
        Self::MissingStates {
            block: block.into(),
        }
    }
}

impl SchemaError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(raw: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            raw: raw.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates an identifier collision error.
    pub fn collision(
        scope: impl Into<String>,
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::IdentifierCollision {
            scope: scope.into(),
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}
