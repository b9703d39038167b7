use serde::Deserialize;
use validator::Validate;

use crate::models::dto::deserializers::i64_from_number_or_string;

/// `?page=` query. Anything that is not an integer falls back to page 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,

    #[validate(length(min = 1, max = 1000))]
    pub answer: String,

    #[validate(range(min = 1))]
    #[serde(deserialize_with = "i64_from_number_or_string")]
    pub category: i64,

    #[validate(range(min = 1, max = 5))]
    #[serde(deserialize_with = "i64_from_number_or_string")]
    pub difficulty: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuestionsRequest {
    #[validate(required)]
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "i64_from_number_or_string")]
    pub id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category to draw from; id 0 is the client's "ALL".
    pub fn category_filter(&self) -> Option<i64> {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .filter(|id| *id != 0)
    }
}
