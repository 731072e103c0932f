use sqlx::SqlitePool;

use crate::core::config::MediaConfig;
use crate::core::error::{AppError, Result};
use crate::features::sub_categories::dtos::{
    SubCategoryResponseDto, SubCategoryWithCategoryNameDto,
};
use crate::features::sub_categories::models::{SubCategory, SubCategoryWithCategory};

/// Service for public sub-category reads
pub struct SubCategoryService {
    pool: SqlitePool,
    media: MediaConfig,
}

impl SubCategoryService {
    pub fn new(pool: SqlitePool, media: MediaConfig) -> Self {
        Self { pool, media }
    }

    /// List all sub-categories with `category` as the parent id
    pub async fn list(&self) -> Result<Vec<SubCategoryResponseDto>> {
        let subs = sqlx::query_as::<_, SubCategory>(
            r#"
            SELECT id, category_id, sub_name, slug, unit, sub_image, percentage, gst, status
            FROM sub_categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sub-categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SubCategoryResponseDto::from_models(&subs, &self.media))
    }

    /// List all sub-categories with `category` as the parent's display name
    pub async fn list_with_category_names(&self) -> Result<Vec<SubCategoryWithCategoryNameDto>> {
        let subs = sqlx::query_as::<_, SubCategoryWithCategory>(
            r#"
            SELECT s.id, s.category_id, s.sub_name, s.slug, s.unit, s.sub_image,
                   s.percentage, s.gst, s.status, c.name AS category_name
            FROM sub_categories s
            JOIN categories c ON c.id = s.category_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sub-categories with names: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SubCategoryWithCategoryNameDto::from_models(
            &subs,
            &self.media,
        ))
    }

    /// List sub-categories belonging to the category with the given slug
    pub async fn list_by_category_slug(
        &self,
        category_slug: &str,
    ) -> Result<Vec<SubCategoryResponseDto>> {
        let category_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM categories WHERE slug = $1
            "#,
        )
        .bind(category_slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve category slug: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", category_slug)))?;

        let subs = sqlx::query_as::<_, SubCategory>(
            r#"
            SELECT id, category_id, sub_name, slug, unit, sub_image, percentage, gst, status
            FROM sub_categories
            WHERE category_id = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sub-categories by category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SubCategoryResponseDto::from_models(&subs, &self.media))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        seed_category, seed_sub_category, test_media, test_pool,
    };

    #[tokio::test]
    async fn test_list_uses_parent_id() {
        let pool = test_pool().await;
        let category_id = seed_category(&pool, "Electronics", "electronics").await;
        seed_sub_category(&pool, category_id, "Laptops", "laptops", "pcs").await;

        let service = SubCategoryService::new(pool, test_media());
        let subs = service.list().await.unwrap();

        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].category, category_id);
        assert_eq!(subs[0].sub_name, "Laptops");
    }

    #[tokio::test]
    async fn test_list_with_category_names_uses_parent_name() {
        let pool = test_pool().await;
        let category_id = seed_category(&pool, "Electronics", "electronics").await;
        seed_sub_category(&pool, category_id, "Laptops", "laptops", "pcs").await;

        let service = SubCategoryService::new(pool, test_media());
        let subs = service.list_with_category_names().await.unwrap();

        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].category, "Electronics");
    }

    #[tokio::test]
    async fn test_list_by_category_slug_filters_to_that_parent() {
        let pool = test_pool().await;
        let electronics = seed_category(&pool, "Electronics", "electronics").await;
        let fruits = seed_category(&pool, "Fruits", "fruits").await;
        seed_sub_category(&pool, electronics, "Laptops", "laptops", "pcs").await;
        seed_sub_category(&pool, fruits, "Apples", "apples", "kg").await;
        seed_sub_category(&pool, electronics, "Phones", "phones", "pcs").await;

        let service = SubCategoryService::new(pool, test_media());
        let subs = service.list_by_category_slug("electronics").await.unwrap();

        let names: Vec<&str> = subs.iter().map(|s| s.sub_name.as_str()).collect();
        assert_eq!(names, vec!["Laptops", "Phones"]);
    }

    #[tokio::test]
    async fn test_list_by_category_slug_unknown_slug() {
        let pool = test_pool().await;
        let service = SubCategoryService::new(pool, test_media());

        let err = service.list_by_category_slug("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let pool = test_pool().await;
        let category_id = seed_category(&pool, "Fruits", "fruits").await;
        seed_sub_category(&pool, category_id, "Mangoes", "mangoes", "kg").await;
        seed_sub_category(&pool, category_id, "Apples", "apples", "kg").await;
        seed_sub_category(&pool, category_id, "Bananas", "bananas", "kg").await;

        let service = SubCategoryService::new(pool, test_media());
        let subs = service.list().await.unwrap();

        let names: Vec<&str> = subs.iter().map(|s| s.sub_name.as_str()).collect();
        assert_eq!(names, vec!["Mangoes", "Apples", "Bananas"]);
    }
}
