pub mod admin_dtos;

pub use admin_dtos::{
    AdminChangeListDto, AdminModelDto, CreateCategoryDto, CreateSubCategoryDto,
    DeleteCategoryResponseDto, UpdateCategoryDto, UpdateSubCategoryDto,
};
