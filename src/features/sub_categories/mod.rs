//! Sub-categories feature for the public storefront.
//!
//! Each sub-category belongs to exactly one category. The default
//! representation carries the parent as an id; `display=true` swaps it
//! for the parent's name.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/all-subcategory-list/` | No | List all sub-categories |
//! | GET | `/subcategory-list/{category_slug}/` | No | List sub-categories of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SubCategoryService;
