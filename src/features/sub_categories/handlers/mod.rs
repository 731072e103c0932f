pub mod sub_category_handler;

pub use sub_category_handler::{
    __path_list_sub_categories, __path_list_sub_categories_by_category, list_sub_categories,
    list_sub_categories_by_category,
};
