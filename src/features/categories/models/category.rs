use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Publication status shared by categories and sub-categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Deactive,
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Active
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "active"),
            RecordStatus::Deactive => write!(f, "deactive"),
        }
    }
}

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RecordStatus::Active).unwrap(),
            serde_json::json!("active")
        );
        assert_eq!(
            serde_json::to_value(RecordStatus::Deactive).unwrap(),
            serde_json::json!("deactive")
        );
    }

    #[test]
    fn test_record_status_rejects_unknown_variant() {
        let parsed: Result<RecordStatus, _> = serde_json::from_str("\"archived\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_record_status_defaults_to_active() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
    }
}
