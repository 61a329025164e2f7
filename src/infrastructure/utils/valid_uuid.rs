use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path identifier. A malformed id cannot name a stored record, so it
/// is reported as NotFound for `resource`.
pub fn valid_uuid(id: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}
