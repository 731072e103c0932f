//! Features layer - vertical slices, one directory per domain area

pub mod admin;
pub mod categories;
pub mod sub_categories;
