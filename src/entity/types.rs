//! Data type definitions for entity fields

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Supported field data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 64-bit floating point
    F64,
    /// Boolean
    Bool,
    /// Variable-length string
    #[default]
    String,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::F64 => write!(f, "f64"),
            DataType::Bool => write!(f, "bool"),
            DataType::String => write!(f, "string"),
        }
    }
}

/// Error when parsing a data type string
#[derive(Debug, Clone)]
pub struct ParseDataTypeError {
    pub input: String,
    pub message: String,
}

impl fmt::Display for ParseDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data type '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ParseDataTypeError {}

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i32" | "int" | "integer" => Ok(DataType::I32),
            "i64" | "long" | "bigint" => Ok(DataType::I64),
            "f64" | "double" | "float" => Ok(DataType::F64),
            "bool" | "boolean" => Ok(DataType::Bool),
            "string" | "text" | "varchar" => Ok(DataType::String),
            _ => Err(ParseDataTypeError {
                input: s.to_string(),
                message: "unknown type".to_string(),
            }),
        }
    }
}

// Custom deserialize from string
impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DataType::from_str(&s).map_err(serde::de::Error::custom)
    }
}
