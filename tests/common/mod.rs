#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use trivia_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Category, NewQuestion, Question},
    repositories::{CategoryRepository, QuestionRepository},
    services::quiz_selector::DrawMode,
};

pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<i64, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(
                categories.into_iter().map(|c| (c.id, c)).collect(),
            )),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }
}

struct QuestionStore {
    questions: BTreeMap<i64, Question>,
    last_id: i64,
}

pub struct InMemoryQuestionRepository {
    store: Arc<RwLock<QuestionStore>>,
}

impl InMemoryQuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        let last_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        Self {
            store: Arc::new(RwLock::new(QuestionStore {
                questions: questions.into_iter().map(|q| (q.id, q)).collect(),
                last_id,
            })),
        }
    }

    fn filtered(store: &QuestionStore, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        store.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let store = self.store.read().await;
        Ok(Self::filtered(&store, |_| true))
    }

    async fn find_by_category(&self, category: i64) -> AppResult<Vec<Question>> {
        let store = self.store.read().await;
        Ok(Self::filtered(&store, |q| q.category == category))
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let store = self.store.read().await;
        Ok(Self::filtered(&store, |q| {
            q.question.to_lowercase().contains(&needle)
        }))
    }

    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let question = question.with_id(store.last_id);
        store.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut store = self.store.write().await;
        store
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }
}

/// Always fails, for exercising the per-endpoint failure statuses.
pub struct UnavailableQuestionRepository;

#[async_trait]
impl QuestionRepository for UnavailableQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Err(AppError::DatabaseError("connection refused".into()))
    }

    async fn find_by_category(&self, _category: i64) -> AppResult<Vec<Question>> {
        Err(AppError::DatabaseError("connection refused".into()))
    }

    async fn search(&self, _term: &str) -> AppResult<Vec<Question>> {
        Err(AppError::DatabaseError("connection refused".into()))
    }

    async fn create(&self, _question: NewQuestion) -> AppResult<Question> {
        Err(AppError::DatabaseError("connection refused".into()))
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Err(AppError::DatabaseError("connection refused".into()))
    }
}

fn question(id: i64, category: i64, difficulty: i64, text: &str, answer: &str) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Nineteen questions; Art (2) holds four of them and two mention "artist".
pub fn seed_questions() -> Vec<Question> {
    vec![
        question(1, 1, 1, "What is the chemical symbol for gold?", "Au"),
        question(2, 1, 2, "What planet is known as the Red Planet?", "Mars"),
        question(3, 1, 3, "What is the hardest natural substance?", "Diamond"),
        question(4, 1, 4, "Who discovered penicillin?", "Alexander Fleming"),
        question(5, 2, 3, "Which Dutch graphic artist made mathematically inspired prints?", "Escher"),
        question(6, 2, 2, "La Giaconda is better known as what?", "Mona Lisa"),
        question(7, 2, 3, "How many paintings did Van Gogh sell in his lifetime?", "One"),
        question(8, 2, 4, "Which ARTIST painted The Persistence of Memory?", "Salvador Dali"),
        question(9, 3, 2, "What is the largest lake in Africa?", "Lake Victoria"),
        question(10, 3, 3, "Which country has the most islands?", "Sweden"),
        question(11, 3, 1, "What is the capital of Australia?", "Canberra"),
        question(12, 4, 2, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou"),
        question(13, 4, 1, "Who invented Peanut Butter?", "George Washington Carver"),
        question(14, 4, 3, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab"),
        question(15, 5, 4, "What movie earned Tom Hanks his third Oscar nomination?", "Apollo 13"),
        question(16, 5, 3, "What actor did author Anne Rice first denounce?", "Tom Cruise"),
        question(17, 6, 3, "Which is the only team to play in every soccer World Cup?", "Brazil"),
        question(18, 6, 4, "Which country won the first ever soccer World Cup in 1930?", "Uruguay"),
        question(19, 6, 2, "How many players are on a basketball team on court?", "Five"),
    ]
}

pub fn test_state(questions: Arc<dyn QuestionRepository>) -> AppState {
    test_state_with(Config::test_config(), questions)
}

pub fn test_state_with(config: Config, questions: Arc<dyn QuestionRepository>) -> AppState {
    AppState::with_repositories(
        config,
        Arc::new(InMemoryCategoryRepository::new(Category::defaults())),
        questions,
    )
}

pub fn legacy_config() -> Config {
    Config {
        quiz_draw_mode: DrawMode::Legacy,
        ..Config::test_config()
    }
}
