//! Root schema definition

use serde::Deserialize;

use super::types::DataType;
use crate::expr::{Column, Path};

/// The root schema: every entity a search may target
#[derive(Debug, Deserialize)]
pub struct Schema {
    pub entities: Vec<Entity>,
}

/// A queryable entity backed by one table
#[derive(Debug, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Physical table name (may be schema-qualified)
    pub table: String,
    /// Alias used to qualify column references; defaults to the table name
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A filterable field on an entity
#[derive(Debug, Deserialize)]
pub struct Field {
    pub name: String,
    /// Physical column name, if different from the field name
    #[serde(default)]
    pub column: Option<String>,
    #[serde(rename = "type", default)]
    pub data_type: DataType,
}

impl Field {
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}

impl Schema {
    /// Get an entity by name
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }
}

impl Entity {
    /// Alias that qualifies this entity's columns
    pub fn table_alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Qualified column reference for a field
    pub fn column(&self, field: &str) -> Option<Column> {
        self.get_field(field)
            .map(|f| Column::new(self.table_alias(), f.column_name()))
    }

    /// Typed path for a field.
    ///
    /// The caller picks `T`; the schema's declared type is not checked here.
    pub fn path<T>(&self, field: &str) -> Option<Path<T>> {
        self.column(field).map(Path::from_column)
    }
}
