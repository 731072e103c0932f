use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::config::MediaConfig;
use crate::features::categories::models::RecordStatus;
use crate::features::sub_categories::models::{
    SubCategory, SubCategoryUnit, SubCategoryWithCategory,
};

/// Response DTO for sub-category
///
/// `category` carries the parent category's id. The upstream contract spells
/// the tax field `GST` in payloads, so it is renamed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubCategoryResponseDto {
    pub id: i64,
    pub sub_name: String,
    pub slug: String,
    pub unit: SubCategoryUnit,
    /// Absolute URL of the sub-category image, if one is set
    pub sub_image: Option<String>,
    pub percentage: f64,
    #[serde(rename = "GST")]
    pub gst: f64,
    pub status: RecordStatus,
    pub category: i64,
}

impl SubCategoryResponseDto {
    pub fn from_model(sub: &SubCategory, media: &MediaConfig) -> Self {
        Self {
            id: sub.id,
            sub_name: sub.sub_name.clone(),
            slug: sub.slug.clone(),
            unit: sub.unit,
            sub_image: sub.sub_image.as_deref().map(|p| media.absolute_url(p)),
            percentage: sub.percentage,
            gst: sub.gst,
            status: sub.status,
            category: sub.category_id,
        }
    }

    /// Map a batch of models, preserving input order
    pub fn from_models(subs: &[SubCategory], media: &MediaConfig) -> Vec<Self> {
        subs.iter().map(|s| Self::from_model(s, media)).collect()
    }
}

/// Response DTO for sub-category with `category` rendered as the parent's name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubCategoryWithCategoryNameDto {
    pub id: i64,
    pub sub_name: String,
    pub slug: String,
    pub unit: SubCategoryUnit,
    pub sub_image: Option<String>,
    pub percentage: f64,
    #[serde(rename = "GST")]
    pub gst: f64,
    pub status: RecordStatus,
    pub category: String,
}

impl SubCategoryWithCategoryNameDto {
    pub fn from_model(sub: &SubCategoryWithCategory, media: &MediaConfig) -> Self {
        Self {
            id: sub.id,
            sub_name: sub.sub_name.clone(),
            slug: sub.slug.clone(),
            unit: sub.unit,
            sub_image: sub.sub_image.as_deref().map(|p| media.absolute_url(p)),
            percentage: sub.percentage,
            gst: sub.gst,
            status: sub.status,
            category: sub.category_name.clone(),
        }
    }

    pub fn from_models(subs: &[SubCategoryWithCategory], media: &MediaConfig) -> Vec<Self> {
        subs.iter().map(|s| Self::from_model(s, media)).collect()
    }
}
