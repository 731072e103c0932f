mod category;

pub use category::{Category, RecordStatus};
