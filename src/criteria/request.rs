use serde::Deserialize;

/// One field filter of a dynamic search
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    /// Optional operator, defaults to "in" for array values or "eq" for single values
    #[serde(default)]
    pub operator: Option<String>,
    /// Missing or null means the criterion is absent and gets skipped
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, value: Option<serde_json::Value>) -> Self {
        Self {
            field: field.into(),
            operator: None,
            value,
        }
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

/// Request body for a dynamic search over one entity
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct FilterRequest {
    /// Name of the schema entity to search; required
    pub entity: String,
    pub filter: Option<Vec<FieldFilter>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_values_deserialize_as_absent() {
        let request: FilterRequest = serde_json::from_str(
            r#"{
                "entity": "member",
                "filter": [
                    { "field": "username", "value": null },
                    { "field": "age" },
                    { "field": "age", "operator": "gte", "value": 0 }
                ]
            }"#,
        )
        .unwrap();

        let filters = request.filter.unwrap();
        assert_eq!(filters.len(), 3);
        assert!(filters[0].value.is_none());
        assert!(filters[1].value.is_none());
        assert_eq!(filters[2].operator.as_deref(), Some("gte"));
        assert_eq!(filters[2].value, Some(serde_json::json!(0)));
    }
}
