use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjectHelperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Nothing to generate: no class or method descriptor available")]
    UnresolvedRoot,

    #[error("Cannot generate copy method `{method}`: {reason}")]
    UnresolvableParticipant { method: String, reason: String },

    #[error("Feature is disabled in configuration: {0}")]
    FeatureDisabled(String),

    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("Method not found: {method} in class {class_name}")]
    MethodNotFound { method: String, class_name: String },

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Unsupported model file: {path}")]
    UnsupportedModelFile { path: PathBuf },

    #[error("Insertion point not found: {0}")]
    InsertionPointNotFound(String),
}

pub type Result<T> = std::result::Result<T, ObjectHelperError>;

impl ObjectHelperError {
    pub fn config(message: impl Into<String>) -> Self {
        ObjectHelperError::Config(message.into())
    }

    pub fn unresolvable(method: impl Into<String>, reason: impl Into<String>) -> Self {
        ObjectHelperError::UnresolvableParticipant {
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn feature_disabled(feature: impl Into<String>) -> Self {
        ObjectHelperError::FeatureDisabled(feature.into())
    }

    pub fn class_not_found(name: impl Into<String>) -> Self {
        ObjectHelperError::ClassNotFound(name.into())
    }

    pub fn method_not_found(method: impl Into<String>, class_name: impl Into<String>) -> Self {
        ObjectHelperError::MethodNotFound {
            method: method.into(),
            class_name: class_name.into(),
        }
    }

    pub fn invalid_type(message: impl Into<String>) -> Self {
        ObjectHelperError::InvalidType(message.into())
    }

    pub fn insertion_point(message: impl Into<String>) -> Self {
        ObjectHelperError::InsertionPointNotFound(message.into())
    }

    /// True for the "nothing was generated" family, which callers usually
    /// report as a soft message rather than a hard failure.
    pub fn is_nothing_generated(&self) -> bool {
        matches!(
            self,
            ObjectHelperError::UnresolvedRoot | ObjectHelperError::UnresolvableParticipant { .. }
        )
    }
}
