//! Request payloads with field-level validation.

pub mod request;

use tourhub_core::error::AppError;
use validator::Validate;

/// Run derive-based validation, mapping failures into the unified error.
pub fn validate_dto(dto: &impl Validate) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
