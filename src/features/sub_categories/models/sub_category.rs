use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

use crate::features::categories::models::RecordStatus;

/// Measurement unit a sub-category is sold in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubCategoryUnit {
    Kg,
    Pcs,
}

impl std::fmt::Display for SubCategoryUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubCategoryUnit::Kg => write!(f, "kg"),
            SubCategoryUnit::Pcs => write!(f, "pcs"),
        }
    }
}

/// Database model for sub-category
#[derive(Debug, Clone, FromRow)]
pub struct SubCategory {
    pub id: i64,
    pub category_id: i64,
    pub sub_name: String,
    pub slug: String,
    pub unit: SubCategoryUnit,
    pub sub_image: Option<String>,
    pub percentage: f64,
    pub gst: f64,
    pub status: RecordStatus,
}

/// Sub-category row joined with its parent category's name
#[derive(Debug, Clone, FromRow)]
pub struct SubCategoryWithCategory {
    pub id: i64,
    pub category_id: i64,
    pub sub_name: String,
    pub slug: String,
    pub unit: SubCategoryUnit,
    pub sub_image: Option<String>,
    pub percentage: f64,
    pub gst: f64,
    pub status: RecordStatus,
    pub category_name: String,
}
