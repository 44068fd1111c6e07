//! Payment identifier validation
//!
//! Receiver and sender identifiers are opaque to the scoring rules, but they
//! must look like a payment address (`handle@provider`) before they are used
//! as lookup keys.

use crate::error::{CoreError, Result};
use regex::Regex;
use std::sync::OnceLock;

const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z]+$";

fn identifier_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"))
}

/// Check that an identifier is a well-formed payment address
pub fn validate_identifier(id: &str) -> Result<()> {
    if identifier_regex().is_match(id) {
        Ok(())
    } else {
        log::debug!("rejected malformed identifier: {:?}", id);
        Err(CoreError::InvalidIdentifier(id.to_string()))
    }
}
