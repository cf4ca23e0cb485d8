use syst_types::ParamId;
use thiserror::Error;

/// Reasons a merge of two collections is refused.
///
/// In both cases the target collection is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// At least one input failed validation on its own.
    #[error(
        "cannot merge invalid parameter header sets \
         (target is valid: {target_valid}, source is valid: {source_valid})"
    )]
    InvalidInput {
        target_valid: bool,
        source_valid: bool,
    },

    /// The same parameter id appears in both inputs.
    #[error("parameter id collision for id: {}", .id.quoted())]
    IdentifierCollision { id: ParamId },
}

/// Errors from loading, saving, or configuring metadata.
#[derive(Debug, Error)]
pub enum MetaDataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in {format} input: {message}")]
    Parse { format: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unsupported metadata format: {0}")]
    UnsupportedFormat(String),

    /// TOML has no null, so an option holding one cannot be written as TOML.
    #[error("option {key:?} of header {} holds null, which {format} cannot represent", .id.quoted())]
    UnrepresentableOpt {
        id: ParamId,
        key: String,
        format: String,
    },

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Convenience alias for fallible metadata I/O.
pub type Result<T> = std::result::Result<T, MetaDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_reports_both_flags() {
        let err = MergeError::InvalidInput {
            target_valid: true,
            source_valid: false,
        };
        let msg = err.to_string();
        assert!(msg.contains("target is valid: true"));
        assert!(msg.contains("source is valid: false"));
    }

    #[test]
    fn collision_quotes_the_id() {
        let err = MergeError::IdentifierCollision {
            id: ParamId::new("flux 1"),
        };
        assert_eq!(err.to_string(), "parameter id collision for id: \"flux 1\"");
    }

    #[test]
    fn merge_error_converts_into_metadata_error() {
        let err: MetaDataError = MergeError::IdentifierCollision {
            id: ParamId::new("x"),
        }
        .into();
        assert!(matches!(err, MetaDataError::Merge(_)));
    }
}
