use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("malformed identifier: {0}")]
    InvalidId(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Constraint(detail),
            _ => StoreError::Database(err),
        }
    }
}

/// Parses an externally supplied identifier into a record id.
pub fn parse_id(raw: &str) -> Result<uuid::Uuid, StoreError> {
    uuid::Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        match parse_id("not-an-id") {
            Err(StoreError::InvalidId(raw)) => assert_eq!(raw, "not-an-id"),
            other => panic!("expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_db_error_maps_to_database() {
        let err = StoreError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, StoreError::Database(_)));
    }
}
