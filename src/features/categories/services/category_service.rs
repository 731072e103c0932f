use sqlx::SqlitePool;

use crate::core::config::MediaConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;

/// Service for public category reads
pub struct CategoryService {
    pool: SqlitePool,
    media: MediaConfig,
}

impl CategoryService {
    pub fn new(pool: SqlitePool, media: MediaConfig) -> Self {
        Self { pool, media }
    }

    /// List all categories in insertion order
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, image, status
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(CategoryResponseDto::from_models(&categories, &self.media))
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, image, status
            FROM categories
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| CategoryResponseDto::from_model(&c, &self.media))
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }
}
