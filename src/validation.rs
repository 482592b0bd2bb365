//! Input validation for request models.
//!
//! Everything here runs before a repository is called, so a rejected request
//! never reaches the database.

use uuid::Uuid;

use crate::error::{Error, Result};

/// Implemented by create and update inputs.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Names must be non-empty after trimming and at most 255 characters.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("Name cannot be empty".to_string()));
    }

    if name.chars().count() > 255 {
        return Err(Error::Validation(
            "Name must be at most 255 characters".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_non_negative(field: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(Error::Validation(format!("{} cannot be negative", field)));
    }
    Ok(())
}

/// Parses a path identifier as sent, rejecting anything that is not a UUID.
pub fn parse_uuid(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::Validation("Invalid UUID".to_string()))
}

/// Parses an optional non-negative query integer. Absent or blank yields `None`.
pub fn parse_query_number(field: &str, raw: Option<&str>) -> Result<Option<u32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| Error::Validation(format!("Invalid {}", field))),
    }
}
