//! Entity schema types (nouns)
//!
//! Describes the entities a dynamic search can target: their tables, the
//! fields callers may filter on, and each field's data type.

mod schema;
mod types;

pub use schema::{Entity, Field, Schema};
pub use types::{DataType, ParseDataTypeError};
