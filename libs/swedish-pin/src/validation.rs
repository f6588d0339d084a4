//! Adapter for the `validator` crate.
//!
//! ```ignore
//! use validator::Validate;
//!
//! #[derive(Validate)]
//! struct Person {
//!     #[validate(custom(function = "swedish_pin::validate_personnummer"))]
//!     personal_number: String,
//! }
//! ```

use std::borrow::Cow;

use validator::ValidationError;

/// Error code reported for invalid values.
pub const VALIDATION_CODE: &str = "personnummer";

/// Fails unless `value` is a valid personnummer as of today.
pub fn validate_personnummer(value: &str) -> Result<(), ValidationError> {
    if crate::valid(value) {
        Ok(())
    } else {
        Err(ValidationError::new(VALIDATION_CODE)
            .with_message(Cow::Borrowed("invalid personnummer")))
    }
}

/// Like [`validate_personnummer`], but blank values pass.
pub fn validate_personnummer_allow_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_personnummer(value)
}
