//! Admin management feature: JSON CRUD for the catalog models.
//!
//! The admin API is the write surface of the service. It wraps everything
//! in the `ApiResponse` envelope and only exposes models present in the
//! injected registry.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/models` | List registered models |
//! | GET | `/api/admin/categories` | Category change list (paginated) |
//! | POST | `/api/admin/categories` | Create category |
//! | GET | `/api/admin/categories/{id}` | Get category |
//! | PUT | `/api/admin/categories/{id}` | Partially update category |
//! | DELETE | `/api/admin/categories/{id}` | Delete category (cascades) |
//! | GET | `/api/admin/sub-categories` | Sub-category change list (paginated) |
//! | POST | `/api/admin/sub-categories` | Create sub-category |
//! | GET | `/api/admin/sub-categories/{id}` | Get sub-category |
//! | PUT | `/api/admin/sub-categories/{id}` | Partially update sub-category |
//! | DELETE | `/api/admin/sub-categories/{id}` | Delete sub-category |

pub mod dtos;
pub mod handlers;
pub mod registry;
pub mod routes;
pub mod services;

pub use registry::{default_registry, AdminRegistry};
pub use routes::AdminState;
pub use services::AdminService;
