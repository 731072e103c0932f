use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::config::MediaConfig;
use crate::features::categories::models::{Category, RecordStatus};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Absolute URL of the category image, if one is set
    pub image: Option<String>,
    pub status: RecordStatus,
}

impl CategoryResponseDto {
    pub fn from_model(category: &Category, media: &MediaConfig) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            image: category.image.as_deref().map(|p| media.absolute_url(p)),
            status: category.status,
        }
    }

    /// Map a batch of models, preserving input order
    pub fn from_models(categories: &[Category], media: &MediaConfig) -> Vec<Self> {
        categories
            .iter()
            .map(|c| Self::from_model(c, media))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_media;

    fn category(id: i64, name: &str, slug: &str, image: Option<&str>) -> Category {
        Category {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            image: image.map(|s| s.to_string()),
            status: RecordStatus::Active,
        }
    }

    #[test]
    fn test_from_model_absolutizes_relative_image() {
        let model = category(1, "Electronics", "electronics", Some("cat/electronics.png"));
        let dto = CategoryResponseDto::from_model(&model, &test_media());
        assert_eq!(
            dto.image.as_deref(),
            Some("http://testserver/media/cat/electronics.png")
        );
    }

    #[test]
    fn test_from_model_keeps_absolute_image_and_null() {
        let media = test_media();

        let with_url = category(1, "A", "a", Some("https://cdn.example.com/a.png"));
        let dto = CategoryResponseDto::from_model(&with_url, &media);
        assert_eq!(dto.image.as_deref(), Some("https://cdn.example.com/a.png"));

        let without = category(2, "B", "b", None);
        let dto = CategoryResponseDto::from_model(&without, &media);
        assert_eq!(dto.image, None);
    }

    #[test]
    fn test_from_models_preserves_order() {
        let models = vec![
            category(3, "Fruits", "fruits", None),
            category(1, "Electronics", "electronics", None),
            category(2, "Toys", "toys", None),
        ];
        let dtos = CategoryResponseDto::from_models(&models, &test_media());
        let ids: Vec<i64> = dtos.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
