use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CategoryRepository, MongoCategoryRepository, MongoQuestionRepository, QuestionRepository,
    },
    services::{
        category_service::CategoryService, question_service::QuestionService,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let category_repository =
            Arc::new(MongoCategoryRepository::new(&db, &config.categories_collection));
        category_repository.ensure_indexes().await?;
        if config.seed_categories {
            category_repository.seed_defaults().await?;
        }

        let question_repository =
            Arc::new(MongoQuestionRepository::new(&db, &config.questions_collection));
        question_repository.ensure_indexes().await?;
        question_repository.sync_id_counter().await?;

        let mut state = Self::with_repositories(config, category_repository, question_repository);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the services over the given repositories without a database handle.
    pub fn with_repositories(
        config: Config,
        category_repository: Arc<dyn CategoryRepository>,
        question_repository: Arc<dyn QuestionRepository>,
    ) -> Self {
        let category_service = Arc::new(CategoryService::new(category_repository));
        let question_service = Arc::new(QuestionService::new(
            question_repository.clone(),
            category_service.clone(),
            config.questions_per_page,
        ));
        let quiz_service = Arc::new(QuizService::new(question_repository, config.quiz_draw_mode));

        Self {
            category_service,
            question_service,
            quiz_service,
            config: Arc::new(config),
            db: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
