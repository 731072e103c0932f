use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::sub_categories::{
    dtos as sub_categories_dtos, handlers as sub_categories_handlers,
    models as sub_categories_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Sub-categories (public)
        sub_categories_handlers::list_sub_categories,
        sub_categories_handlers::list_sub_categories_by_category,
        // Admin
        admin_handlers::list_models,
        admin_handlers::list_categories,
        admin_handlers::create_category,
        admin_handlers::get_category,
        admin_handlers::update_category,
        admin_handlers::delete_category,
        admin_handlers::list_sub_categories,
        admin_handlers::create_sub_category,
        admin_handlers::get_sub_category,
        admin_handlers::update_sub_category,
        admin_handlers::delete_sub_category,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_models::RecordStatus,
            categories_dtos::CategoryResponseDto,
            // Sub-categories
            sub_categories_models::SubCategoryUnit,
            sub_categories_dtos::SubCategoryResponseDto,
            sub_categories_dtos::SubCategoryWithCategoryNameDto,
            // Admin
            admin_dtos::CreateCategoryDto,
            admin_dtos::UpdateCategoryDto,
            admin_dtos::DeleteCategoryResponseDto,
            admin_dtos::CreateSubCategoryDto,
            admin_dtos::UpdateSubCategoryDto,
            admin_dtos::AdminModelDto,
            admin_dtos::AdminChangeListDto,
            ApiResponse<Vec<admin_dtos::AdminModelDto>>,
            ApiResponse<admin_dtos::AdminChangeListDto>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<admin_dtos::DeleteCategoryResponseDto>,
            ApiResponse<sub_categories_dtos::SubCategoryResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Catalog categories (public)"),
        (name = "sub-categories", description = "Catalog sub-categories (public)"),
        (name = "admin", description = "Admin management endpoints"),
    ),
    info(
        title = "Katalog API",
        version = "0.1.0",
        description = "API documentation for the katalog catalog service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
