use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::error::Result;
use crate::features::sub_categories::dtos::SubCategoryResponseDto;
use crate::features::sub_categories::services::SubCategoryService;

/// Query params for listing sub-categories
#[derive(Debug, Deserialize)]
pub struct ListSubCategoriesQuery {
    /// If true, render `category` as the parent's name. Default: false (parent id)
    #[serde(default)]
    pub display: bool,
}

/// List all sub-categories
///
/// Returns `category` as the parent id, or its display name when
/// `display=true` is passed.
#[utoipa::path(
    get,
    path = "/all-subcategory-list/",
    params(
        ("display" = Option<bool>, Query, description = "Render category as display name if true")
    ),
    responses(
        (status = 200, description = "List of sub-categories", body = Vec<SubCategoryResponseDto>),
    ),
    tag = "sub-categories"
)]
pub async fn list_sub_categories(
    State(service): State<Arc<SubCategoryService>>,
    Query(query): Query<ListSubCategoriesQuery>,
) -> Result<Json<serde_json::Value>> {
    if query.display {
        let subs = service.list_with_category_names().await?;
        Ok(Json(serde_json::to_value(subs).unwrap()))
    } else {
        let subs = service.list().await?;
        Ok(Json(serde_json::to_value(subs).unwrap()))
    }
}

/// List sub-categories of one category
#[utoipa::path(
    get,
    path = "/subcategory-list/{category_slug}/",
    params(
        ("category_slug" = String, Path, description = "Parent category slug")
    ),
    responses(
        (status = 200, description = "Sub-categories of the category", body = Vec<SubCategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "sub-categories"
)]
pub async fn list_sub_categories_by_category(
    State(service): State<Arc<SubCategoryService>>,
    Path(category_slug): Path<String>,
) -> Result<Json<Vec<SubCategoryResponseDto>>> {
    let subs = service.list_by_category_slug(&category_slug).await?;
    Ok(Json(subs))
}
