mod sub_category_service;

pub use sub_category_service::SubCategoryService;
