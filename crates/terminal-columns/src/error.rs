//! Error types for column layout.

use thiserror::Error;

/// Configuration errors detected before any width is computed.
///
/// Layout either returns a fully rendered string or one of these; there is
/// no partially rendered output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnsError {
    /// More column specs were supplied than the data has columns.
    #[error("{specs} column specs given but the rows only have {columns} columns")]
    TooManyColumnSpecs { specs: usize, columns: usize },

    /// A column's minimum width is larger than its maximum width.
    #[error("column {column}: min width {min} is greater than max width {max}")]
    InvalidBounds {
        column: usize,
        min: usize,
        max: usize,
    },

    /// A column was given a fixed width of zero.
    #[error("column {column}: fixed width must be at least 1")]
    ZeroWidth { column: usize },

    /// The terminal width budget was zero.
    #[error("terminal width must be at least 1")]
    InvalidTerminalWidth,

    /// Layout options could not be parsed from config text.
    #[error("invalid layout config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ColumnsError {
    fn from(err: serde_json::Error) -> Self {
        ColumnsError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for ColumnsError {
    fn from(err: serde_yaml::Error) -> Self {
        ColumnsError::Config(err.to_string())
    }
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, ColumnsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_specs_message() {
        let err = ColumnsError::TooManyColumnSpecs {
            specs: 3,
            columns: 2,
        };
        assert_eq!(
            err.to_string(),
            "3 column specs given but the rows only have 2 columns"
        );
    }

    #[test]
    fn invalid_bounds_message_names_column() {
        let err = ColumnsError::InvalidBounds {
            column: 1,
            min: 10,
            max: 4,
        };
        assert!(err.to_string().contains("column 1"));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ColumnsError = json_err.into();
        assert!(matches!(err, ColumnsError::Config(_)));
    }
}
