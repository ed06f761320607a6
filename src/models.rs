//! Frontend Models
//!
//! Data structures matching the REST backend's JSON.

use serde::{Deserialize, Serialize};

/// Category with its nested subcategories (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub weight: i32,
    /// Present only when the request asks for `_refs=subcategory`
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// Subcategory data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub count: u32,
    pub weight: i32,
}

/// One entry of a reorder payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryWeight {
    pub id: String,
    pub weight: i32,
}

/// Full replacement ordering for the subcategories of one category.
///
/// Serializes as a bare JSON array of `{ id, weight }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReorderRequest(Vec<SubcategoryWeight>);

impl ReorderRequest {
    /// Weights are 1-based positions in the given order.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            ids.into_iter()
                .enumerate()
                .map(|(index, id)| SubcategoryWeight {
                    id: id.into(),
                    weight: index as i32 + 1,
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[SubcategoryWeight] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_without_refs_has_no_subcategories() {
        let json = r#"{"id":"odezhda","title":"Одежда","count":3,"weight":1}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "odezhda");
        assert!(category.subcategories.is_empty());
    }

    #[test]
    fn test_reorder_request_serializes_as_array() {
        let request = ReorderRequest::from_ids(["b", "a"]);
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"[{"id":"b","weight":1},{"id":"a","weight":2}]"#);
    }

    #[test]
    fn test_empty_request_serializes_as_empty_array() {
        let request = ReorderRequest::from_ids(Vec::<String>::new());
        assert!(request.is_empty());
        assert_eq!(serde_json::to_string(&request).unwrap(), "[]");
    }
}
