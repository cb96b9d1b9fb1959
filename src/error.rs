//! Error types for dynwhere

use std::fmt;

/// Errors that can occur while loading schemas and filter requests
#[derive(Debug)]
pub enum ParseError {
    /// IO error reading file
    Io {
        path: String,
        source: std::io::Error,
    },
    /// YAML deserialization error
    Yaml {
        source: serde_yaml::Error,
    },
    /// JSON deserialization error
    Json {
        source: serde_json::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            ParseError::Yaml { source } => {
                write!(f, "Invalid YAML: {}", source)
            }
            ParseError::Json { source } => {
                write!(f, "Invalid JSON: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Yaml { source } => Some(source),
            ParseError::Json { source } => Some(source),
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io {
            path: String::new(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Yaml { source: err }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json { source: err }
    }
}
