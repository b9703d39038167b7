use std::{collections::BTreeMap, sync::Arc};

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Category, dto::response::CategoriesResponse},
    repositories::CategoryRepository,
};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_categories(&self) -> AppResult<CategoriesResponse> {
        let categories = self.repository.find_all().await?;
        Ok(CategoriesResponse {
            success: true,
            total_categories: categories.len(),
            categories,
        })
    }

    /// Categories keyed by id, the shape the question listing embeds.
    pub async fn category_map(&self) -> AppResult<BTreeMap<i64, String>> {
        let categories = self.repository.find_all().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    pub async fn get_category(&self, id: i64) -> AppResult<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id '{}' not found", id)))
    }
}
