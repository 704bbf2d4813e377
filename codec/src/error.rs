//! Error types shared by every projection of the term AST.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TermError>;

/// Every failure carries a `path` locating the offending node, written as
/// `$` for the root, `$[2]` for a list element and `$["key"]` for a map entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("Unsupported type at {path}: {detail}")]
    UnsupportedType { path: String, detail: String },

    #[error("Malformed term at {path}: {reason}")]
    MalformedTerm { path: String, reason: String },

    #[error("Schema violation at {path}: {reason}")]
    SchemaViolation { path: String, reason: String },

    #[error("Decode failure at {path}: {reason}")]
    DecodeFailure { path: String, reason: String },
}

impl TermError {
    pub fn unsupported(path: impl Into<String>, detail: impl Into<String>) -> Self {
        TermError::UnsupportedType {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TermError::MalformedTerm {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TermError::SchemaViolation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn decode_failure(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TermError::DecodeFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Location of the offending node.
    pub fn path(&self) -> &str {
        match self {
            TermError::UnsupportedType { path, .. }
            | TermError::MalformedTerm { path, .. }
            | TermError::SchemaViolation { path, .. }
            | TermError::DecodeFailure { path, .. } => path,
        }
    }

    /// Re-labels a structural error found while reading wire bytes.
    pub(crate) fn into_decode_failure(self) -> Self {
        match self {
            TermError::MalformedTerm { path, reason }
            | TermError::SchemaViolation { path, reason } => {
                TermError::DecodeFailure { path, reason }
            }
            TermError::UnsupportedType { path, detail } => TermError::DecodeFailure {
                path,
                reason: detail,
            },
            other => other,
        }
    }
}

impl From<prost::DecodeError> for TermError {
    fn from(err: prost::DecodeError) -> Self {
        TermError::decode_failure(ROOT, err.to_string())
    }
}

pub(crate) const ROOT: &str = "$";

pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

pub(crate) fn key_path(parent: &str, key: &str) -> String {
    // Debug formatting quotes and escapes the key.
    format!("{}[{:?}]", parent, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_nest() {
        let inner = key_path(&index_path(ROOT, 3), "a\"b");
        assert_eq!(inner, r#"$[3]["a\"b"]"#);
    }

    #[test]
    fn test_display_includes_path() {
        let err = TermError::malformed("$[1]", "payload has 2 terms, expected 1");
        assert_eq!(
            err.to_string(),
            "Malformed term at $[1]: payload has 2 terms, expected 1"
        );
        assert_eq!(err.path(), "$[1]");
    }

    #[test]
    fn test_into_decode_failure_keeps_location() {
        let err = TermError::schema("$[\"k\"]", "channel is not a string").into_decode_failure();
        assert_eq!(
            err,
            TermError::decode_failure("$[\"k\"]", "channel is not a string")
        );
    }
}
