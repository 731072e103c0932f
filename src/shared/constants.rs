/// Default number of rows per admin change-list page
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Hard ceiling for admin change-list page size
pub const MAX_PAGE_SIZE: i64 = 100;
