mod sub_category;

pub use sub_category::{SubCategory, SubCategoryUnit, SubCategoryWithCategory};
