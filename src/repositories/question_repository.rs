use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuestion, Question},
};

/// Every listing is ordered by id ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_category(&self, category: i64) -> AppResult<Vec<Question>>;
    /// Questions whose text contains `term`, ignoring case.
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;
    async fn create(&self, question: NewQuestion) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    db: Database,
    collection: Collection<Question>,
    sequence: String,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self {
            db: db.clone(),
            collection,
            sequence: collection_name.to_string(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1, "id": 1 })
            .build();

        self.collection
            .create_indexes([id_index, category_index])
            .await?;
        Ok(())
    }

    /// Keeps the id counter above ids already stored, e.g. an imported question set.
    pub async fn sync_id_counter(&self) -> AppResult<()> {
        let highest = self
            .collection
            .find_one(doc! {})
            .sort(doc! { "id": -1 })
            .await?
            .map(|q| q.id);

        if let Some(highest) = highest {
            self.db.raise_counter(&self.sequence, highest).await?;
            log::info!("Question ids continue after {}", highest);
        }
        Ok(())
    }

    async fn find_ordered(&self, filter: Document) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(filter).sort(doc! { "id": 1 }).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }
}

/// Case-insensitive substring filter on the question text.
pub(crate) fn search_filter(term: &str) -> Document {
    doc! {
        "question": {
            "$regex": regex::escape(term),
            "$options": "i",
        }
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        self.find_ordered(doc! {}).await
    }

    async fn find_by_category(&self, category: i64) -> AppResult<Vec<Question>> {
        self.find_ordered(doc! { "category": category }).await
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        self.find_ordered(search_filter(term)).await
    }

    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let id = self.db.next_id(&self.sequence).await?;
        let question = question.with_id(id);
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_escapes_regex_syntax() {
        let filter = search_filter("what (is) 1+1?");
        let regex = filter
            .get_document("question")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(regex, r"what \(is\) 1\+1\?");
    }

    #[test]
    fn test_search_filter_is_case_insensitive() {
        let filter = search_filter("artist");
        let options = filter
            .get_document("question")
            .unwrap()
            .get_str("$options")
            .unwrap();
        assert_eq!(options, "i");
    }
}
