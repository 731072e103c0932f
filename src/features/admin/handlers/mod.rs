pub mod admin_handlers;

pub use admin_handlers::{
    __path_create_category, __path_create_sub_category, __path_delete_category,
    __path_delete_sub_category, __path_get_category, __path_get_sub_category,
    __path_list_categories, __path_list_models, __path_list_sub_categories,
    __path_update_category, __path_update_sub_category, create_category, create_sub_category,
    delete_category, delete_sub_category, get_category, get_sub_category, list_categories,
    list_models, list_sub_categories, update_category, update_sub_category,
};
