use sqlx::SqlitePool;

use crate::core::config::MediaConfig;
use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::*;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::features::sub_categories::dtos::SubCategoryResponseDto;
use crate::features::sub_categories::models::SubCategory;

/// Service for admin reads and writes on both catalog models
pub struct AdminService {
    pool: SqlitePool,
    media: MediaConfig,
}

impl AdminService {
    pub fn new(pool: SqlitePool, media: MediaConfig) -> Self {
        Self { pool, media }
    }

    // =========================================================================
    // CATEGORIES
    // =========================================================================

    /// List categories with pagination
    pub async fn list_categories(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<CategoryResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count categories: {:?}", e);
                AppError::Database(e)
            })?;

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, image, status
            FROM categories
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        let items = CategoryResponseDto::from_models(&categories, &self.media);
        Ok((items, total))
    }

    /// Create a category
    pub async fn create_category(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, image, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, slug, image, status
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(&dto.image)
        .bind(dto.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                AppError::Validation(format!("Category with slug '{}' already exists", dto.slug))
            } else {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        Ok(CategoryResponseDto::from_model(&category, &self.media))
    }

    /// Get category by id
    pub async fn get_category(&self, id: i64) -> Result<CategoryResponseDto> {
        let category = self.fetch_category(id).await?;
        Ok(CategoryResponseDto::from_model(&category, &self.media))
    }

    /// Partially update a category
    pub async fn update_category(
        &self,
        id: i64,
        dto: UpdateCategoryDto,
    ) -> Result<CategoryResponseDto> {
        let current = self.fetch_category(id).await?;

        let name = dto.name.unwrap_or(current.name);
        let slug = dto.slug.unwrap_or(current.slug);
        let image = dto.image.or(current.image);
        let status = dto.status.unwrap_or(current.status);

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, slug = $2, image = $3, status = $4
            WHERE id = $5
            RETURNING id, name, slug, image, status
            "#,
        )
        .bind(&name)
        .bind(&slug)
        .bind(&image)
        .bind(status)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                AppError::Validation(format!("Category with slug '{}' already exists", slug))
            } else {
                tracing::error!("Failed to update category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        Ok(CategoryResponseDto::from_model(&category, &self.media))
    }

    /// Delete a category and all sub-categories referencing it.
    ///
    /// The cascade runs as one transaction so a failure leaves both tables
    /// untouched. Returns how many sub-categories went with the parent.
    pub async fn delete_category(&self, id: i64) -> Result<DeleteCategoryResponseDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin delete transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let deleted_sub_categories =
            sqlx::query("DELETE FROM sub_categories WHERE category_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete sub-categories of category: {:?}", e);
                    AppError::Database(e)
                })?
                .rows_affected() as i64;

        let deleted = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?
            .rows_affected();

        if deleted == 0 {
            // Dropping the transaction rolls back the child deletes
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit delete transaction: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(DeleteCategoryResponseDto {
            deleted_sub_categories,
        })
    }

    async fn fetch_category(&self, id: i64) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, image, status
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    // =========================================================================
    // SUB-CATEGORIES
    // =========================================================================

    /// List sub-categories with pagination
    pub async fn list_sub_categories(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<SubCategoryResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sub_categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count sub-categories: {:?}", e);
                AppError::Database(e)
            })?;

        let subs = sqlx::query_as::<_, SubCategory>(
            r#"
            SELECT id, category_id, sub_name, slug, unit, sub_image, percentage, gst, status
            FROM sub_categories
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sub-categories: {:?}", e);
            AppError::Database(e)
        })?;

        let items = SubCategoryResponseDto::from_models(&subs, &self.media);
        Ok((items, total))
    }

    /// Create a sub-category under an existing category
    pub async fn create_sub_category(
        &self,
        dto: CreateSubCategoryDto,
    ) -> Result<SubCategoryResponseDto> {
        self.ensure_parent_exists(dto.category_id).await?;

        let sub = sqlx::query_as::<_, SubCategory>(
            r#"
            INSERT INTO sub_categories
                (category_id, sub_name, slug, unit, sub_image, percentage, gst, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, category_id, sub_name, slug, unit, sub_image, percentage, gst, status
            "#,
        )
        .bind(dto.category_id)
        .bind(&dto.sub_name)
        .bind(&dto.slug)
        .bind(dto.unit)
        .bind(&dto.sub_image)
        .bind(dto.percentage)
        .bind(dto.gst)
        .bind(dto.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create sub-category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SubCategoryResponseDto::from_model(&sub, &self.media))
    }

    /// Get sub-category by id
    pub async fn get_sub_category(&self, id: i64) -> Result<SubCategoryResponseDto> {
        let sub = self.fetch_sub_category(id).await?;
        Ok(SubCategoryResponseDto::from_model(&sub, &self.media))
    }

    /// Partially update a sub-category
    pub async fn update_sub_category(
        &self,
        id: i64,
        dto: UpdateSubCategoryDto,
    ) -> Result<SubCategoryResponseDto> {
        let current = self.fetch_sub_category(id).await?;

        let category_id = match dto.category_id {
            Some(new_parent) if new_parent != current.category_id => {
                self.ensure_parent_exists(new_parent).await?;
                new_parent
            }
            Some(same) => same,
            None => current.category_id,
        };
        let sub_name = dto.sub_name.unwrap_or(current.sub_name);
        let slug = dto.slug.unwrap_or(current.slug);
        let unit = dto.unit.unwrap_or(current.unit);
        let sub_image = dto.sub_image.or(current.sub_image);
        let percentage = dto.percentage.unwrap_or(current.percentage);
        let gst = dto.gst.unwrap_or(current.gst);
        let status = dto.status.unwrap_or(current.status);

        let sub = sqlx::query_as::<_, SubCategory>(
            r#"
            UPDATE sub_categories
            SET category_id = $1, sub_name = $2, slug = $3, unit = $4,
                sub_image = $5, percentage = $6, gst = $7, status = $8
            WHERE id = $9
            RETURNING id, category_id, sub_name, slug, unit, sub_image, percentage, gst, status
            "#,
        )
        .bind(category_id)
        .bind(&sub_name)
        .bind(&slug)
        .bind(unit)
        .bind(&sub_image)
        .bind(percentage)
        .bind(gst)
        .bind(status)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update sub-category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SubCategoryResponseDto::from_model(&sub, &self.media))
    }

    /// Delete a sub-category
    pub async fn delete_sub_category(&self, id: i64) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM sub_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sub-category: {:?}", e);
                AppError::Database(e)
            })?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::NotFound(format!("Sub-category {} not found", id)));
        }

        Ok(())
    }

    async fn fetch_sub_category(&self, id: i64) -> Result<SubCategory> {
        sqlx::query_as::<_, SubCategory>(
            r#"
            SELECT id, category_id, sub_name, slug, unit, sub_image, percentage, gst, status
            FROM sub_categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get sub-category: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Sub-category {} not found", id)))
    }

    async fn ensure_parent_exists(&self, category_id: i64) -> Result<()> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categories WHERE id = $1",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check parent category: {:?}", e);
            AppError::Database(e)
        })?;

        if exists == 0 {
            return Err(AppError::Validation(format!(
                "Category {} does not exist",
                category_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::RecordStatus;
    use crate::features::sub_categories::models::SubCategoryUnit;
    use crate::shared::test_helpers::{
        seed_category, seed_sub_category, test_media, test_pool,
    };
    use fake::faker::lorem::en::Word;
    use fake::Fake;

    fn service(pool: SqlitePool) -> AdminService {
        AdminService::new(pool, test_media())
    }

    fn create_category_dto(name: &str, slug: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            slug: slug.to_string(),
            image: None,
            status: RecordStatus::Active,
        }
    }

    fn create_sub_category_dto(category_id: i64, sub_name: &str, slug: &str) -> CreateSubCategoryDto {
        CreateSubCategoryDto {
            category_id,
            sub_name: sub_name.to_string(),
            slug: slug.to_string(),
            unit: SubCategoryUnit::Pcs,
            sub_image: None,
            percentage: 0.0,
            gst: 0.0,
            status: RecordStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_create_category_assigns_sequential_ids() {
        let pool = test_pool().await;
        let service = service(pool);

        let first = service
            .create_category(create_category_dto("Electronics", "electronics"))
            .await
            .unwrap();
        let second = service
            .create_category(create_category_dto("Fruits", "fruits"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_category_duplicate_slug_is_validation_error() {
        let pool = test_pool().await;
        let service = service(pool);

        service
            .create_category(create_category_dto("Electronics", "electronics"))
            .await
            .unwrap();
        let err = service
            .create_category(create_category_dto("Gadgets", "electronics"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_sub_category_missing_parent_is_validation_error() {
        let pool = test_pool().await;
        let service = service(pool);

        let err = service
            .create_sub_category(create_sub_category_dto(42, "Laptops", "laptops"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_category_is_partial() {
        let pool = test_pool().await;
        let service = service(pool);

        let created = service
            .create_category(create_category_dto("Electronics", "electronics"))
            .await
            .unwrap();

        let updated = service
            .update_category(
                created.id,
                UpdateCategoryDto {
                    name: Some("Gadgets".to_string()),
                    slug: None,
                    image: None,
                    status: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Gadgets");
        assert_eq!(updated.slug, "electronics");
        assert_eq!(updated.status, RecordStatus::Active);
    }

    #[tokio::test]
    async fn test_update_category_to_taken_slug_is_validation_error() {
        let pool = test_pool().await;
        let service = service(pool);

        service
            .create_category(create_category_dto("Electronics", "electronics"))
            .await
            .unwrap();
        let fruits = service
            .create_category(create_category_dto("Fruits", "fruits"))
            .await
            .unwrap();

        let err = service
            .update_category(
                fruits.id,
                UpdateCategoryDto {
                    name: None,
                    slug: Some("electronics".to_string()),
                    image: None,
                    status: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_category_cascades_to_own_sub_categories_only() {
        let pool = test_pool().await;
        let electronics = seed_category(&pool, "Electronics", "electronics").await;
        let fruits = seed_category(&pool, "Fruits", "fruits").await;
        seed_sub_category(&pool, electronics, "Laptops", "laptops", "pcs").await;
        seed_sub_category(&pool, electronics, "Phones", "phones", "pcs").await;
        seed_sub_category(&pool, fruits, "Apples", "apples", "kg").await;

        let service = service(pool);
        let result = service.delete_category(electronics).await.unwrap();
        assert_eq!(result.deleted_sub_categories, 2);

        let (remaining, total) = service.list_sub_categories(0, 25).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(remaining[0].sub_name, "Apples");
        assert_eq!(remaining[0].category, fruits);
    }

    #[tokio::test]
    async fn test_delete_category_not_found() {
        let pool = test_pool().await;
        let service = service(pool);

        let err = service.delete_category(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_sub_category() {
        let pool = test_pool().await;
        let category_id = seed_category(&pool, "Electronics", "electronics").await;
        let sub_id = seed_sub_category(&pool, category_id, "Laptops", "laptops", "pcs").await;

        let service = service(pool);
        service.delete_sub_category(sub_id).await.unwrap();

        let err = service.get_sub_category(sub_id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_sub_category_moves_to_existing_parent_only() {
        let pool = test_pool().await;
        let electronics = seed_category(&pool, "Electronics", "electronics").await;
        let fruits = seed_category(&pool, "Fruits", "fruits").await;
        let sub_id = seed_sub_category(&pool, electronics, "Laptops", "laptops", "pcs").await;

        let service = service(pool);

        let update = UpdateSubCategoryDto {
            category_id: Some(fruits),
            sub_name: None,
            slug: None,
            unit: None,
            sub_image: None,
            percentage: None,
            gst: None,
            status: None,
        };
        let moved = service.update_sub_category(sub_id, update).await.unwrap();
        assert_eq!(moved.category, fruits);

        let bad_update = UpdateSubCategoryDto {
            category_id: Some(404),
            sub_name: None,
            slug: None,
            unit: None,
            sub_image: None,
            percentage: None,
            gst: None,
            status: None,
        };
        let err = service
            .update_sub_category(sub_id, bad_update)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_categories_paginates_with_total() {
        let pool = test_pool().await;
        for i in 1..=4 {
            // Names are arbitrary here, ordering is driven by the slug
            let name: String = Word().fake();
            seed_category(&pool, &name, &format!("category-{}", i)).await;
        }

        let service = service(pool);
        let (page, total) = service.list_categories(2, 2).await.unwrap();

        assert_eq!(total, 4);
        let slugs: Vec<&str> = page.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["category-3", "category-4"]);
    }

    #[tokio::test]
    async fn test_sub_category_slug_is_not_unique() {
        let pool = test_pool().await;
        let electronics = seed_category(&pool, "Electronics", "electronics").await;
        let fruits = seed_category(&pool, "Fruits", "fruits").await;

        let service = service(pool);
        service
            .create_sub_category(create_sub_category_dto(electronics, "Fresh", "fresh"))
            .await
            .unwrap();
        // Same slug under a different parent is allowed
        service
            .create_sub_category(create_sub_category_dto(fruits, "Fresh", "fresh"))
            .await
            .unwrap();

        let (_, total) = service.list_sub_categories(0, 25).await.unwrap();
        assert_eq!(total, 2);
    }
}
