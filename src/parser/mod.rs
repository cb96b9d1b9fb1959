//! Schema and request parser (verb module)
//!
//! Transforms YAML/JSON documents into schema and criteria types.

use std::path::Path;

use crate::criteria::FilterRequest;
use crate::entity::Schema;
use crate::error::ParseError;

/// Parse a schema from a YAML file
pub fn parse_schema_file<P: AsRef<Path>>(path: P) -> Result<Schema, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_schema_str(&contents)
}

/// Parse a schema from a YAML string
pub fn parse_schema_str(yaml: &str) -> Result<Schema, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a filter request from a YAML file
pub fn parse_request_file<P: AsRef<Path>>(path: P) -> Result<FilterRequest, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_request_str(&contents)
}

/// Parse a filter request from a YAML string
pub fn parse_request_str(yaml: &str) -> Result<FilterRequest, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a filter request from a JSON request body
pub fn parse_request_json(json: &str) -> Result<FilterRequest, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}
