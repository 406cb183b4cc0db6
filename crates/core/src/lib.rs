//! Core data structures for Duo Grid
//!
//! Memory records as delivered by the memory data source, plus the small set
//! of shared types (identifiers, timestamp parsing, errors) every other crate
//! in the workspace builds on.

pub mod memory;
pub mod types;

pub use memory::{GridSpan, MemoryKind, MemoryRecord};
pub use types::{parse_timestamp, MemoryId};

/// Core error types
#[derive(thiserror::Error, Debug)]
pub enum DuoError {
    #[error("Invalid timestamp for {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DuoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DuoError::InvalidTimestamp {
            field: "created_at",
            value: "yesterday".to_string(),
        };
        assert!(err.to_string().contains("created_at"));
        assert!(err.to_string().contains("yesterday"));
    }
}
