use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::NewQuestion,
        dto::{
            request::{CreateQuestionRequest, SearchQuestionsRequest},
            response::{
                CategoryQuestionsResponse, CreateQuestionResponse, DeleteQuestionResponse,
                QuestionsPageResponse, SearchQuestionsResponse,
            },
        },
    },
    repositories::QuestionRepository,
    services::{category_service::CategoryService, pagination::paginate},
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    categories: Arc<CategoryService>,
    per_page: usize,
}

impl QuestionService {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        categories: Arc<CategoryService>,
        per_page: usize,
    ) -> Self {
        Self {
            repository,
            categories,
            per_page,
        }
    }

    /// One page of all questions. An empty page is `NotFound`.
    pub async fn list_questions(&self, page: i64) -> AppResult<QuestionsPageResponse> {
        let selection = self.repository.find_all().await?;
        let questions = paginate(&selection, page, self.per_page);

        if questions.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }

        Ok(QuestionsPageResponse {
            success: true,
            questions,
            total_questions: selection.len(),
            categories: self.categories.category_map().await?,
            current_category: None,
        })
    }

    pub async fn delete_question(&self, id: i64, page: i64) -> AppResult<DeleteQuestionResponse> {
        self.repository.delete(id).await?;
        log::info!("Deleted question {}", id);

        let selection = self.repository.find_all().await?;
        Ok(DeleteQuestionResponse {
            success: true,
            deleted: id,
            questions: paginate(&selection, page, self.per_page),
            total_questions: selection.len(),
        })
    }

    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
        page: i64,
    ) -> AppResult<CreateQuestionResponse> {
        request.validate()?;

        let question = self
            .repository
            .create(NewQuestion::from_request(request))
            .await?;
        log::info!(
            "Created question {} in category {}",
            question.id,
            question.category
        );

        let selection = self.repository.find_all().await?;
        Ok(CreateQuestionResponse {
            success: true,
            created: question.id,
            questions: paginate(&selection, page, self.per_page),
            total_questions: selection.len(),
        })
    }

    /// `total_questions_in_search` counts every match; `questions` holds `page` of them.
    pub async fn search_questions(
        &self,
        request: SearchQuestionsRequest,
        page: i64,
    ) -> AppResult<SearchQuestionsResponse> {
        request.validate()?;
        let term = request.search_term.unwrap_or_default();

        let selection = self.repository.search(&term).await?;
        Ok(SearchQuestionsResponse {
            success: true,
            questions: paginate(&selection, page, self.per_page),
            total_questions_in_search: selection.len(),
        })
    }

    pub async fn questions_in_category(
        &self,
        category_id: i64,
    ) -> AppResult<CategoryQuestionsResponse> {
        let category = self.categories.get_category(category_id).await?;
        let questions = self.repository.find_by_category(category.id).await?;

        Ok(CategoryQuestionsResponse {
            success: true,
            total_questions: questions.len(),
            questions,
            category: category.id,
        })
    }
}
