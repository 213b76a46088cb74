//! Stateless product checks run by the service before any write.
//!
//! Storage backends repeat [`check_unique_code_value`] under their write lock.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::Product;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Every field except `is_published` must be set; numbers must be positive
pub fn validate_required_fields(product: &Product) -> Result<(), ValidationError> {
    let filled = !product.name.trim().is_empty()
        && !product.code_value.trim().is_empty()
        && !product.expiration.trim().is_empty()
        && product.quantity > 0
        && product.price > 0.0;

    if filled {
        Ok(())
    } else {
        Err(ValidationError::MissingFields)
    }
}

/// Parses a `DD/MM/YYYY` calendar date
pub fn validate_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !shaped {
        return Err(ValidationError::InvalidDate);
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

/// Fails if a product with a different id already uses the candidate's `code_value`
pub fn check_unique_code_value<'a>(
    existing: impl IntoIterator<Item = &'a Product>,
    candidate: &Product,
) -> Result<(), ValidationError> {
    let taken = existing
        .into_iter()
        .any(|p| p.id != candidate.id && p.code_value == candidate.code_value);

    if taken {
        Err(ValidationError::DuplicateCodeValue)
    } else {
        Ok(())
    }
}
