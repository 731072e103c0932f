use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::registry::AdminRegistry;
use crate::features::admin::services::AdminService;

/// Shared state for the admin routes: the model registry plus the service
/// doing the actual reads and writes.
#[derive(Clone)]
pub struct AdminState {
    pub registry: Arc<AdminRegistry>,
    pub service: Arc<AdminService>,
}

/// Create admin routes; nested under `/api/admin` by the caller
pub fn routes(state: AdminState) -> Router {
    Router::new()
        .route("/models", get(handlers::list_models))
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/sub-categories",
            get(handlers::list_sub_categories).post(handlers::create_sub_category),
        )
        .route(
            "/sub-categories/{id}",
            get(handlers::get_sub_category)
                .put(handlers::update_sub_category)
                .delete(handlers::delete_sub_category),
        )
        .with_state(state)
}
