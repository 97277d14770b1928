use thiserror::Error;

pub type WallkitResult<T> = Result<T, WallkitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallkitError {
    #[error("Missing required property '{property}' for component '{component}'")]
    MissingProperty {
        component: String,
        property: String,
    },

    #[error("Invalid property '{property}' for component '{component}': {reason}")]
    InvalidProperty {
        component: String,
        property: String,
        reason: String,
    },

    #[error("Value out of range for '{property}': {value}. Expected range: {range}")]
    ValueOutOfRange {
        property: String,
        value: String,
        range: String,
    },

    #[error("Unknown component '{name}'")]
    UnknownComponent { name: String },

    #[error("Malformed component: {0}")]
    MalformedComponent(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Empty document: no components found")]
    EmptyDocument,

    #[error("Theme is missing required tokens: {}", missing.join(", "))]
    MissingThemeTokens { missing: Vec<String> },

    #[error("Invalid render config: {0}")]
    ConfigError(String),

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

impl WallkitError {
    pub(crate) fn missing(component: &str, property: &str) -> Self {
        WallkitError::MissingProperty {
            component: component.to_string(),
            property: property.to_string(),
        }
    }

    pub(crate) fn invalid(component: &str, property: &str, reason: impl Into<String>) -> Self {
        WallkitError::InvalidProperty {
            component: component.to_string(),
            property: property.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for WallkitError {
    fn from(err: serde_yaml::Error) -> Self {
        WallkitError::DeserializationError(err.to_string())
    }
}
