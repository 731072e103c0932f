pub mod sub_category_dto;

pub use sub_category_dto::{SubCategoryResponseDto, SubCategoryWithCategoryNameDto};
