#[cfg(test)]
use std::str::FromStr;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;
#[cfg(test)]
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::core::config::MediaConfig;
#[cfg(test)]
use crate::features::admin::{self, routes as admin_routes, AdminService, AdminState};
#[cfg(test)]
use crate::features::categories::{routes as categories_routes, CategoryService};
#[cfg(test)]
use crate::features::sub_categories::{routes as sub_categories_routes, SubCategoryService};

/// Fresh in-memory database with migrations applied.
///
/// An in-memory sqlite database lives and dies with its connection, so the
/// pool is pinned to exactly one connection that is never recycled.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory sqlite pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

#[cfg(test)]
pub fn test_media() -> MediaConfig {
    MediaConfig {
        base_url: "http://testserver".to_string(),
        path_prefix: "/media/".to_string(),
    }
}

/// Insert a category with default status and no image, returning its id.
#[cfg(test)]
pub async fn seed_category(pool: &SqlitePool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .fetch_one(pool)
    .await
    .expect("seed category")
}

/// Insert a sub category with default status/percentage/GST, returning its id.
#[cfg(test)]
pub async fn seed_sub_category(
    pool: &SqlitePool,
    category_id: i64,
    sub_name: &str,
    slug: &str,
    unit: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO sub_categories (category_id, sub_name, slug, unit)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(category_id)
    .bind(sub_name)
    .bind(slug)
    .bind(unit)
    .fetch_one(pool)
    .await
    .expect("seed sub category")
}

/// Public catalog router (category + sub category read endpoints).
#[cfg(test)]
pub fn catalog_router(pool: SqlitePool) -> Router {
    let category_service = Arc::new(CategoryService::new(pool.clone(), test_media()));
    let sub_category_service = Arc::new(SubCategoryService::new(pool, test_media()));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(sub_categories_routes::routes(sub_category_service))
}

/// Admin router with the default registry, nested exactly as in main.
#[cfg(test)]
pub fn admin_router(pool: SqlitePool) -> Router {
    let state = AdminState {
        registry: Arc::new(admin::default_registry()),
        service: Arc::new(AdminService::new(pool, test_media())),
    };
    Router::new().nest("/api/admin", admin_routes::routes(state))
}
