//! Documents and queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Raw document as returned by the hosted store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Field filter applied to a collection query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    /// `field == value`
    Eq { field: String, value: Value },

    /// `field ∈ values`
    In { field: String, values: Vec<Value> },
}

impl Filter {
    fn matches(&self, data: &Value) -> bool {
        match self {
            Self::Eq { field, value } => data.get(field) == Some(value),
            Self::In { field, values } => data
                .get(field)
                .is_some_and(|current| values.contains(current)),
        }
    }
}

/// Conjunction of filters. An empty query matches every document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub filters: SmallVec<[Filter; 2]>,
}

impl Query {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        });

        self
    }

    #[must_use]
    pub fn any_of<I, V>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.filters.push(Filter::In {
            field: field.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });

        self
    }

    #[must_use]
    pub fn matches(&self, data: &Value) -> bool {
        self.filters.iter().all(|filter| filter.matches(data))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(Query::all().matches(&json!({ "anything": 1 })));
    }

    #[test]
    fn eq_filter_compares_field_values() {
        let query = Query::all().eq("userId", "u1");

        assert!(query.matches(&json!({ "userId": "u1" })));
        assert!(!query.matches(&json!({ "userId": "u2" })));
        assert!(!query.matches(&json!({})));
    }

    #[test]
    fn in_filter_accepts_any_listed_value() {
        let query = Query::all().any_of("status", ["pending", "in_progress"]);

        assert!(query.matches(&json!({ "status": "pending" })));
        assert!(query.matches(&json!({ "status": "in_progress" })));
        assert!(!query.matches(&json!({ "status": "completed" })));
    }

    #[test]
    fn filters_serialize_with_operation_tag() -> Result<(), serde_json::Error> {
        let query = Query::all().eq("userId", "u1");

        assert_eq!(
            serde_json::to_value(&query)?,
            json!({ "filters": [{ "op": "eq", "field": "userId", "value": "u1" }] })
        );

        Ok(())
    }
}
