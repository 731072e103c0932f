use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::services::CategoryService;

/// List all categories
///
/// Returns a bare JSON array so storefront clients can consume it directly.
#[utoipa::path(
    get,
    path = "/category-list/",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/category-detail/{slug}/",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(category))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::shared::test_helpers::{catalog_router, seed_category, test_pool};

    #[tokio::test]
    async fn test_category_list_body() {
        let pool = test_pool().await;
        seed_category(&pool, "Electronics", "electronics").await;

        let server = TestServer::new(catalog_router(pool)).unwrap();
        let res = server.get("/category-list/").await;

        res.assert_status_ok();
        assert_eq!(
            res.json::<serde_json::Value>(),
            json!([{
                "id": 1,
                "name": "Electronics",
                "slug": "electronics",
                "image": null,
                "status": "active"
            }])
        );
    }

    #[tokio::test]
    async fn test_category_list_empty_is_empty_array() {
        let pool = test_pool().await;
        let server = TestServer::new(catalog_router(pool)).unwrap();

        let res = server.get("/category-list/").await;
        res.assert_status_ok();
        assert_eq!(res.json::<serde_json::Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_category_detail_by_slug() {
        let pool = test_pool().await;
        seed_category(&pool, "Electronics", "electronics").await;
        seed_category(&pool, "Fruits", "fruits").await;

        let server = TestServer::new(catalog_router(pool)).unwrap();
        let res = server.get("/category-detail/fruits/").await;

        res.assert_status_ok();
        let body = res.json::<serde_json::Value>();
        assert_eq!(body["name"], json!("Fruits"));
    }

    #[tokio::test]
    async fn test_category_detail_unknown_slug_is_404() {
        let pool = test_pool().await;
        let server = TestServer::new(catalog_router(pool)).unwrap();

        let res = server.get("/category-detail/missing/").await;
        res.assert_status(StatusCode::NOT_FOUND);

        let body = res.json::<serde_json::Value>();
        assert_eq!(body["success"], json!(false));
    }
}
