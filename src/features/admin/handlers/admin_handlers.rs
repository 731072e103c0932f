use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::*;
use crate::features::admin::registry::{
    AdminRegistry, ModelAdmin, CATEGORIES_SLUG, SUB_CATEGORIES_SLUG,
};
use crate::features::admin::routes::AdminState;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::sub_categories::dtos::SubCategoryResponseDto;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

fn require_model<'a>(registry: &'a AdminRegistry, slug: &str) -> Result<&'a ModelAdmin> {
    registry
        .get(slug)
        .ok_or_else(|| AppError::NotFound(format!("Model '{}' is not registered", slug)))
}

/// Project serialized records onto the registry's change-list columns.
fn change_list<T: Serialize>(model: &ModelAdmin, items: &[T]) -> AdminChangeListDto {
    let rows = items
        .iter()
        .map(|item| {
            let value = serde_json::to_value(item).unwrap();
            model
                .list_display
                .iter()
                .map(|col| value.get(*col).cloned().unwrap_or(serde_json::Value::Null))
                .collect()
        })
        .collect();

    AdminChangeListDto {
        model: model.slug.to_string(),
        columns: model.list_display.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// List the models managed through this admin API
#[utoipa::path(
    get,
    path = "/api/admin/models",
    responses(
        (status = 200, description = "Registered models", body = ApiResponse<Vec<AdminModelDto>>),
    ),
    tag = "admin"
)]
pub async fn list_models(
    State(state): State<AdminState>,
) -> Result<Json<ApiResponse<Vec<AdminModelDto>>>> {
    let models = state
        .registry
        .entries()
        .iter()
        .map(AdminModelDto::from)
        .collect();

    Ok(Json(ApiResponse::success(Some(models), None, None)))
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Category change list (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/categories",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Category change list", body = ApiResponse<AdminChangeListDto>),
        (status = 404, description = "Model not registered")
    ),
    tag = "admin"
)]
pub async fn list_categories(
    State(state): State<AdminState>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<AdminChangeListDto>>> {
    let model = require_model(&state.registry, CATEGORIES_SLUG)?;
    let (items, total) = state
        .service
        .list_categories(params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(change_list(model, &items)),
        None,
        Some(Meta { total }),
    )))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Model not registered")
    ),
    tag = "admin"
)]
pub async fn create_category(
    State(state): State<AdminState>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    require_model(&state.registry, CATEGORIES_SLUG)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = state.service.create_category(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category or model not found")
    ),
    tag = "admin"
)]
pub async fn get_category(
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    require_model(&state.registry, CATEGORIES_SLUG)?;
    let category = state.service.get_category(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Partially update a category
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category or model not found")
    ),
    tag = "admin"
)]
pub async fn update_category(
    State(state): State<AdminState>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    require_model(&state.registry, CATEGORIES_SLUG)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = state.service.update_category(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category and its sub-categories
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<DeleteCategoryResponseDto>),
        (status = 404, description = "Category or model not found")
    ),
    tag = "admin"
)]
pub async fn delete_category(
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeleteCategoryResponseDto>>> {
    require_model(&state.registry, CATEGORIES_SLUG)?;
    let result = state.service.delete_category(id).await?;
    Ok(Json(ApiResponse::success(
        Some(result),
        Some("Category deleted".to_string()),
        None,
    )))
}

// =============================================================================
// SUB-CATEGORIES
// =============================================================================

/// Sub-category change list (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/sub-categories",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Sub-category change list", body = ApiResponse<AdminChangeListDto>),
        (status = 404, description = "Model not registered")
    ),
    tag = "admin"
)]
pub async fn list_sub_categories(
    State(state): State<AdminState>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<AdminChangeListDto>>> {
    let model = require_model(&state.registry, SUB_CATEGORIES_SLUG)?;
    let (items, total) = state
        .service
        .list_sub_categories(params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(change_list(model, &items)),
        None,
        Some(Meta { total }),
    )))
}

/// Create a sub-category
#[utoipa::path(
    post,
    path = "/api/admin/sub-categories",
    request_body = CreateSubCategoryDto,
    responses(
        (status = 201, description = "Sub-category created", body = ApiResponse<SubCategoryResponseDto>),
        (status = 400, description = "Validation error or unknown parent category"),
        (status = 404, description = "Model not registered")
    ),
    tag = "admin"
)]
pub async fn create_sub_category(
    State(state): State<AdminState>,
    AppJson(dto): AppJson<CreateSubCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubCategoryResponseDto>>)> {
    require_model(&state.registry, SUB_CATEGORIES_SLUG)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let sub = state.service.create_sub_category(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(sub), None, None)),
    ))
}

/// Get a sub-category by id
#[utoipa::path(
    get,
    path = "/api/admin/sub-categories/{id}",
    params(
        ("id" = i64, Path, description = "Sub-category id")
    ),
    responses(
        (status = 200, description = "Sub-category found", body = ApiResponse<SubCategoryResponseDto>),
        (status = 404, description = "Sub-category or model not found")
    ),
    tag = "admin"
)]
pub async fn get_sub_category(
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    require_model(&state.registry, SUB_CATEGORIES_SLUG)?;
    let sub = state.service.get_sub_category(id).await?;
    Ok(Json(ApiResponse::success(Some(sub), None, None)))
}

/// Partially update a sub-category
#[utoipa::path(
    put,
    path = "/api/admin/sub-categories/{id}",
    params(
        ("id" = i64, Path, description = "Sub-category id")
    ),
    request_body = UpdateSubCategoryDto,
    responses(
        (status = 200, description = "Sub-category updated", body = ApiResponse<SubCategoryResponseDto>),
        (status = 400, description = "Validation error or unknown parent category"),
        (status = 404, description = "Sub-category or model not found")
    ),
    tag = "admin"
)]
pub async fn update_sub_category(
    State(state): State<AdminState>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateSubCategoryDto>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    require_model(&state.registry, SUB_CATEGORIES_SLUG)?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let sub = state.service.update_sub_category(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(sub), None, None)))
}

/// Delete a sub-category
#[utoipa::path(
    delete,
    path = "/api/admin/sub-categories/{id}",
    params(
        ("id" = i64, Path, description = "Sub-category id")
    ),
    responses(
        (status = 200, description = "Sub-category deleted"),
        (status = 404, description = "Sub-category or model not found")
    ),
    tag = "admin"
)]
pub async fn delete_sub_category(
    State(state): State<AdminState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    require_model(&state.registry, SUB_CATEGORIES_SLUG)?;
    state.service.delete_sub_category(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Sub-category deleted".to_string()),
        None,
    )))
}
