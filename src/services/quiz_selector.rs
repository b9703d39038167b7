use std::collections::HashSet;

use rand::Rng;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// How the next quiz question is drawn from the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    /// Every question in the pool is equally likely.
    #[default]
    Uniform,
    /// Draws from `0..len-1`, so the last question of the pool is never
    /// picked and a pool of one cannot be drawn from. Kept for deployments
    /// that depend on the old behaviour.
    Legacy,
}

/// Questions still playable: in `category` when given, and not in `excluded`.
pub fn eligible_pool(
    questions: Vec<Question>,
    category: Option<i64>,
    excluded: &HashSet<i64>,
) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .filter(|q| !excluded.contains(&q.id))
        .collect()
}

/// Picks one question from `pool`. `Ok(None)` means the pool is exhausted.
pub fn draw<R: Rng + ?Sized>(
    mut pool: Vec<Question>,
    mode: DrawMode,
    rng: &mut R,
) -> AppResult<Option<Question>> {
    if pool.is_empty() {
        return Ok(None);
    }

    let upper = match mode {
        DrawMode::Uniform => pool.len(),
        DrawMode::Legacy => pool.len() - 1,
    };
    if upper == 0 {
        return Err(AppError::InternalError(
            "legacy draw from a single-question pool".to_string(),
        ));
    }

    let index = rng.gen_range(0..upper);
    Ok(Some(pool.swap_remove(index)))
}
