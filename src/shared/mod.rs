//! Shared layer - envelope types, validation patterns and test support

pub mod constants;
pub mod test_helpers;
pub mod types;
pub mod validation;
