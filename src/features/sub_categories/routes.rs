use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sub_categories::handlers;
use crate::features::sub_categories::services::SubCategoryService;

/// Create routes for the sub-categories feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<SubCategoryService>) -> Router {
    Router::new()
        .route("/all-subcategory-list/", get(handlers::list_sub_categories))
        .route(
            "/subcategory-list/{category_slug}/",
            get(handlers::list_sub_categories_by_category),
        )
        .with_state(service)
}
