//! Error types.
//!
//! Layout conversion itself is total: every string is a valid input and
//! every input produces an output. The only fallible step is resolving a
//! timezone reference supplied by the caller.

use thiserror::Error;

/// Errors that can occur when resolving a timezone reference.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("unknown time zone: {name}")]
    UnknownTimeZone { name: String },
}
