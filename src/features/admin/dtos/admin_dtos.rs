use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::admin::registry::ModelAdmin;
use crate::features::categories::models::RecordStatus;
use crate::features::sub_categories::models::SubCategoryUnit;

// =============================================================================
// CATEGORY DTOs
// =============================================================================

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 100, message = "Slug must be 1-100 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must contain only lowercase letters, digits and hyphens"
        )
    )]
    pub slug: String,

    /// Relative media path or absolute URL
    pub image: Option<String>,

    #[serde(default)]
    pub status: RecordStatus,
}

/// Request DTO for partially updating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 100, message = "Slug must be 1-100 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must contain only lowercase letters, digits and hyphens"
        )
    )]
    pub slug: Option<String>,

    pub image: Option<String>,

    pub status: Option<RecordStatus>,
}

/// Response DTO for a category delete, reporting the cascade size
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteCategoryResponseDto {
    pub deleted_sub_categories: i64,
}

// =============================================================================
// SUB-CATEGORY DTOs
// =============================================================================

/// Request DTO for creating a sub-category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSubCategoryDto {
    /// Id of the parent category
    pub category_id: i64,

    #[validate(length(min = 1, max = 50, message = "Sub-category name must be 1-50 characters"))]
    pub sub_name: String,

    #[validate(
        length(min = 1, max = 50, message = "Slug must be 1-50 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must contain only lowercase letters, digits and hyphens"
        )
    )]
    pub slug: String,

    pub unit: SubCategoryUnit,

    /// Relative media path or absolute URL
    pub sub_image: Option<String>,

    #[serde(default)]
    pub percentage: f64,

    #[serde(default, rename = "GST")]
    pub gst: f64,

    #[serde(default)]
    pub status: RecordStatus,
}

/// Request DTO for partially updating a sub-category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSubCategoryDto {
    pub category_id: Option<i64>,

    #[validate(length(min = 1, max = 50, message = "Sub-category name must be 1-50 characters"))]
    pub sub_name: Option<String>,

    #[validate(
        length(min = 1, max = 50, message = "Slug must be 1-50 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must contain only lowercase letters, digits and hyphens"
        )
    )]
    pub slug: Option<String>,

    pub unit: Option<SubCategoryUnit>,

    pub sub_image: Option<String>,

    pub percentage: Option<f64>,

    #[serde(rename = "GST")]
    pub gst: Option<f64>,

    pub status: Option<RecordStatus>,
}

// =============================================================================
// REGISTRY DTOs
// =============================================================================

/// Admin view of a registered model
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminModelDto {
    pub slug: String,
    pub verbose_name: String,
    pub verbose_name_plural: String,
    pub list_display: Vec<String>,
}

impl From<&ModelAdmin> for AdminModelDto {
    fn from(model: &ModelAdmin) -> Self {
        Self {
            slug: model.slug.to_string(),
            verbose_name: model.verbose_name.to_string(),
            verbose_name_plural: model.verbose_name_plural.to_string(),
            list_display: model.list_display.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Change list for one model: registry columns plus row values in column order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminChangeListDto {
    pub model: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_dto_validates_slug() {
        let dto = CreateCategoryDto {
            name: "Electronics".to_string(),
            slug: "Electronics!".to_string(),
            image: None,
            status: RecordStatus::Active,
        };
        assert!(dto.validate().is_err());

        let dto = CreateCategoryDto {
            slug: "electronics".to_string(),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_category_dto_rejects_long_name() {
        let dto = CreateCategoryDto {
            name: "x".repeat(51),
            slug: "x".to_string(),
            image: None,
            status: RecordStatus::Active,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_sub_category_dto_defaults() {
        let dto: CreateSubCategoryDto = serde_json::from_value(serde_json::json!({
            "category_id": 1,
            "sub_name": "Laptops",
            "slug": "laptops",
            "unit": "pcs"
        }))
        .unwrap();

        assert_eq!(dto.percentage, 0.0);
        assert_eq!(dto.gst, 0.0);
        assert_eq!(dto.status, RecordStatus::Active);
    }

    #[test]
    fn test_create_sub_category_dto_reads_gst_key() {
        let dto: CreateSubCategoryDto = serde_json::from_value(serde_json::json!({
            "category_id": 1,
            "sub_name": "Laptops",
            "slug": "laptops",
            "unit": "pcs",
            "GST": 18.0
        }))
        .unwrap();

        assert_eq!(dto.gst, 18.0);
    }

    #[test]
    fn test_update_dto_allows_empty_body() {
        let dto: UpdateCategoryDto = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.name.is_none());
    }
}
