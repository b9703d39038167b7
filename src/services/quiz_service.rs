use std::{collections::HashSet, sync::Arc};

use rand::Rng;

use crate::{
    errors::AppResult,
    models::{
        domain::Question,
        dto::{request::QuizRequest, response::QuizQuestionResponse},
    },
    repositories::QuestionRepository,
    services::quiz_selector::{draw, eligible_pool, DrawMode},
};

pub struct QuizService {
    repository: Arc<dyn QuestionRepository>,
    draw_mode: DrawMode,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuestionRepository>, draw_mode: DrawMode) -> Self {
        Self {
            repository,
            draw_mode,
        }
    }

    pub async fn next_question(&self, request: QuizRequest) -> AppResult<QuizQuestionResponse> {
        let pool = self.pool_for(&request).await?;
        self.pick(pool, &mut rand::thread_rng())
    }

    pub async fn next_question_with<R: Rng + ?Sized>(
        &self,
        request: QuizRequest,
        rng: &mut R,
    ) -> AppResult<QuizQuestionResponse> {
        let pool = self.pool_for(&request).await?;
        self.pick(pool, rng)
    }

    fn pick<R: Rng + ?Sized>(
        &self,
        pool: Vec<Question>,
        rng: &mut R,
    ) -> AppResult<QuizQuestionResponse> {
        let question = draw(pool, self.draw_mode, rng)?;
        if question.is_none() {
            log::debug!("Quiz pool exhausted");
        }
        Ok(QuizQuestionResponse {
            success: true,
            question,
        })
    }

    async fn pool_for(&self, request: &QuizRequest) -> AppResult<Vec<Question>> {
        let category = request.category_filter();
        let questions = match category {
            Some(category) => self.repository.find_by_category(category).await?,
            None => self.repository.find_all().await?,
        };

        let excluded: HashSet<i64> = request.previous_questions.iter().copied().collect();
        let pool = eligible_pool(questions, category, &excluded);
        log::debug!(
            "Quiz pool has {} questions (category {:?}, {} played)",
            pool.len(),
            category,
            excluded.len()
        );
        Ok(pool)
    }
}
