use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: &str) -> Self {
        Category {
            id,
            kind: kind.to_string(),
        }
    }

    /// Reference categories inserted into an empty store at startup.
    pub fn defaults() -> Vec<Category> {
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category::new(id, kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kind_as_type() {
        let json = serde_json::to_value(Category::new(2, "Art")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "type": "Art" }));
    }

    #[test]
    fn test_defaults_are_numbered_from_one() {
        let categories = Category::defaults();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], Category::new(1, "Science"));
        assert_eq!(categories[5], Category::new(6, "Sports"));
    }
}
