//! Errors raised when restoring saved records.
//!
//! Derivation itself is total and has no error type; only text coming back
//! from storage can be wrong.

use thiserror::Error;

use crate::signs::{Element, WesternSign};

#[derive(Debug, Error)]
pub enum RecordError {
    /// Text is not a well-formed record.
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored element does not belong to the stored Western sign.
    #[error("element {stored} does not match {sign} (expected {expected})")]
    ElementMismatch {
        sign: WesternSign,
        stored: Element,
        expected: Element,
    },
}
