//! Error types for auditmill-core

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using auditmill Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for auditmill
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(auditmill::config))]
    Config(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(auditmill::io))]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    #[diagnostic(code(auditmill::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    #[diagnostic(code(auditmill::toml))]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(auditmill::serde))]
    Serde(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    #[diagnostic(code(auditmill::template))]
    Template(#[from] tera::Error),

    #[error("Bad record: {0}")]
    #[diagnostic(code(auditmill::data))]
    Data(String),

    #[error("Document generation error: {0}")]
    #[diagnostic(code(auditmill::document))]
    Document(String),
}
