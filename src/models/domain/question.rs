use serde::{Deserialize, Serialize};

use crate::models::dto::request::CreateQuestionRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64, // Category.id, not checked on insert
    pub difficulty: i64,
}

/// A question that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn from_request(request: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: request.question.trim().to_string(),
            answer: request.answer.trim().to_string(),
            category: request.category,
            difficulty: request.difficulty,
        }
    }

    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
impl Question {
    pub fn test_question(id: i64, category: i64, text: &str) -> Self {
        Question {
            id,
            question: text.to_string(),
            answer: format!("answer {}", id),
            category,
            difficulty: 1,
        }
    }
}
