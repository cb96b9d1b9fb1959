use serde_json::Value;
use tracing::debug;

use super::error::ResolveError;
use super::operator::FilterOperator;
use crate::composer::compose;
use crate::criteria::{Criterion, FieldFilter, FilterRequest};
use crate::entity::{DataType, Entity, Field, Schema};
use crate::expr::{escape_like, Column, CompareOp, Literal, Predicate};

/// Resolve a filter request against the schema into ordered criteria.
///
/// Filters whose value is missing or null become absent criteria. Unknown
/// entities, fields and operators are errors even when the value is absent.
pub fn resolve_filters(
    schema: &Schema,
    request: &FilterRequest,
) -> Result<Vec<Criterion>, ResolveError> {
    let entity = schema
        .get_entity(&request.entity)
        .ok_or_else(|| ResolveError::EntityNotFound(request.entity.clone()))?;

    let Some(filters) = request.filter.as_ref() else {
        return Ok(Vec::new());
    };

    let criteria = filters
        .iter()
        .map(|filter| resolve_filter(entity, filter))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        entity = %entity.name,
        criteria = criteria.len(),
        present = criteria.iter().filter(|c| c.is_present()).count(),
        "resolved filter request"
    );

    Ok(criteria)
}

/// Resolve a filter request and compose it into one predicate
pub fn resolve_predicate(
    schema: &Schema,
    request: &FilterRequest,
) -> Result<Predicate, ResolveError> {
    Ok(compose(resolve_filters(schema, request)?))
}

fn resolve_filter(entity: &Entity, filter: &FieldFilter) -> Result<Criterion, ResolveError> {
    let field = entity
        .get_field(&filter.field)
        .ok_or_else(|| ResolveError::FieldNotFound {
            entity: entity.name.clone(),
            field: filter.field.clone(),
        })?;

    let operator = FilterOperator::parse(filter.operator.as_deref(), filter.value.as_ref())
        .ok_or_else(|| ResolveError::UnknownOperator {
            field: filter.field.clone(),
            operator: filter.operator.clone().unwrap_or_default(),
        })?;

    if operator.is_textual() && field.data_type != DataType::String {
        return Err(ResolveError::InvalidValue {
            field: field.name.clone(),
            message: format!("operator '{}' requires a string field", operator),
        });
    }

    let Some(value) = filter.value.as_ref() else {
        return Ok(Criterion::absent(&filter.field));
    };

    let column = Column::new(entity.table_alias(), field.column_name());
    let predicate = build_predicate(field, column, operator, value)?;
    Ok(Criterion::present(&filter.field, predicate))
}

fn build_predicate(
    field: &Field,
    column: Column,
    operator: FilterOperator,
    value: &Value,
) -> Result<Predicate, ResolveError> {
    let compare = |column: Column, op: CompareOp| -> Result<Predicate, ResolveError> {
        Ok(Predicate::compare(column, op, coerce(field, value)?))
    };

    match operator {
        FilterOperator::Eq => compare(column, CompareOp::Eq),
        FilterOperator::NotEq => compare(column, CompareOp::NotEq),
        FilterOperator::Lt => compare(column, CompareOp::Lt),
        FilterOperator::LtEq => compare(column, CompareOp::LtEq),
        FilterOperator::Gt => compare(column, CompareOp::Gt),
        FilterOperator::GtEq => compare(column, CompareOp::GtEq),
        FilterOperator::In => Ok(Predicate::in_list(column, coerce_list(field, value)?)),
        FilterOperator::NotIn => Ok(!Predicate::in_list(column, coerce_list(field, value)?)),
        FilterOperator::Between => match value {
            Value::Array(bounds) if bounds.len() == 2 => Ok(Predicate::between(
                column,
                coerce(field, &bounds[0])?,
                coerce(field, &bounds[1])?,
            )),
            _ => Err(ResolveError::InvalidValue {
                field: field.name.clone(),
                message: "between expects [low, high]".to_string(),
            }),
        },
        FilterOperator::Like => Ok(Predicate::like(column, expect_str(field, value)?)),
        FilterOperator::Contains => Ok(Predicate::like_escaped(
            column,
            format!("%{}%", escape_like(expect_str(field, value)?)),
        )),
        FilterOperator::StartsWith => Ok(Predicate::like_escaped(
            column,
            format!("{}%", escape_like(expect_str(field, value)?)),
        )),
        FilterOperator::EndsWith => Ok(Predicate::like_escaped(
            column,
            format!("%{}", escape_like(expect_str(field, value)?)),
        )),
        FilterOperator::IsNull => match value {
            Value::Bool(true) => Ok(Predicate::is_null(column)),
            Value::Bool(false) => Ok(Predicate::is_not_null(column)),
            other => Err(ResolveError::InvalidValue {
                field: field.name.clone(),
                message: format!("is_null expects true or false, got {}", json_type_name(other)),
            }),
        },
    }
}

fn expect_str<'v>(field: &Field, value: &'v Value) -> Result<&'v str, ResolveError> {
    value.as_str().ok_or_else(|| ResolveError::TypeMismatch {
        field: field.name.clone(),
        expected: DataType::String,
        found: json_type_name(value).to_string(),
    })
}

fn coerce_list(field: &Field, value: &Value) -> Result<Vec<Literal>, ResolveError> {
    match value {
        Value::Array(items) => items.iter().map(|v| coerce(field, v)).collect(),
        v => Ok(vec![coerce(field, v)?]),
    }
}

/// Convert a JSON value into a literal of the field's declared type
fn coerce(field: &Field, value: &Value) -> Result<Literal, ResolveError> {
    let mismatch = || ResolveError::TypeMismatch {
        field: field.name.clone(),
        expected: field.data_type,
        found: json_type_name(value).to_string(),
    };

    match field.data_type {
        DataType::I32 => {
            let n = value.as_i64().ok_or_else(mismatch)?;
            i32::try_from(n)
                .map(Literal::from)
                .map_err(|_| ResolveError::InvalidValue {
                    field: field.name.clone(),
                    message: format!("{} is out of range for i32", n),
                })
        }
        DataType::I64 => value.as_i64().map(Literal::Int).ok_or_else(mismatch),
        DataType::F64 => value.as_f64().map(Literal::Float).ok_or_else(mismatch),
        DataType::Bool => value.as_bool().map(Literal::Bool).ok_or_else(mismatch),
        DataType::String => value
            .as_str()
            .map(|s| Literal::String(s.to_string()))
            .ok_or_else(mismatch),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
