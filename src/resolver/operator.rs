use std::fmt;

/// Operators accepted in a [`FieldFilter`](crate::criteria::FieldFilter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    In,
    NotIn,
    /// Inclusive range, value is a two-element array
    Between,
    Like,
    Contains,
    StartsWith,
    EndsWith,
    /// Value `true` selects nulls, `false` selects non-nulls
    IsNull,
}

impl FilterOperator {
    /// Parse an operator name, or pick the default for the value's shape
    pub fn parse(operator: Option<&str>, value: Option<&serde_json::Value>) -> Option<FilterOperator> {
        let Some(operator) = operator else {
            return Some(match value {
                Some(serde_json::Value::Array(_)) => FilterOperator::In,
                _ => FilterOperator::Eq,
            });
        };

        match operator.to_lowercase().as_str() {
            "eq" | "=" => Some(FilterOperator::Eq),
            "neq" | "!=" | "<>" => Some(FilterOperator::NotEq),
            "lt" | "<" => Some(FilterOperator::Lt),
            "lte" | "<=" | "loe" => Some(FilterOperator::LtEq),
            "gt" | ">" => Some(FilterOperator::Gt),
            "gte" | ">=" | "goe" => Some(FilterOperator::GtEq),
            "in" => Some(FilterOperator::In),
            "not_in" => Some(FilterOperator::NotIn),
            "between" => Some(FilterOperator::Between),
            "like" => Some(FilterOperator::Like),
            "contains" => Some(FilterOperator::Contains),
            "starts_with" => Some(FilterOperator::StartsWith),
            "ends_with" => Some(FilterOperator::EndsWith),
            "is_null" => Some(FilterOperator::IsNull),
            _ => None,
        }
    }

    /// True for operators that only make sense on string fields
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FilterOperator::Like
                | FilterOperator::Contains
                | FilterOperator::StartsWith
                | FilterOperator::EndsWith
        )
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterOperator::Eq => "eq",
            FilterOperator::NotEq => "neq",
            FilterOperator::Lt => "lt",
            FilterOperator::LtEq => "lte",
            FilterOperator::Gt => "gt",
            FilterOperator::GtEq => "gte",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::Between => "between",
            FilterOperator::Like => "like",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::EndsWith => "ends_with",
            FilterOperator::IsNull => "is_null",
        };
        write!(f, "{}", name)
    }
}
