//! Product categories feature for the public storefront.
//!
//! Categories are the top level of the catalog hierarchy. The endpoints
//! here are read-only and return bare JSON bodies; writes go through the
//! admin feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/category-list/` | No | List all categories |
//! | GET | `/category-detail/{slug}/` | No | Get category by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
