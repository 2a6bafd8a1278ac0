use thiserror::Error;

use crate::marker::TemplateKind;
use crate::platform::{Bits, Platform};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot derive memory from the bare {0} template")]
    CannotDerive(TemplateKind),

    #[error("Void is not derivable; it may only appear behind a pointer")]
    VoidNotDerivable,

    #[error("Dynamic fill has no entry for {bits}-bit {platform}")]
    MissingFillEntry { bits: Bits, platform: Platform },

    #[error("Unsized array is only valid as the final field of a struct: {context}")]
    UnsizedArray { context: String },

    #[error("Recursive layout: `{0}` contains itself by value")]
    RecursiveLayout(String),

    #[error("Unknown type: `{0}` is not registered in the schema")]
    UnknownType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error describes the descriptor graph itself, as opposed
    /// to a schema file that failed to load.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_structural() {
        assert!(Error::VoidNotDerivable.is_structural());
        assert!(Error::RecursiveLayout("node".into()).is_structural());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing schema");
        assert!(!Error::Io(io_err).is_structural());
    }

    #[test]
    fn test_missing_fill_entry_message() {
        let err = Error::MissingFillEntry {
            bits: Bits::Bits64,
            platform: Platform::Linux,
        };
        assert_eq!(err.to_string(), "Dynamic fill has no entry for 64-bit linux");
    }
}
