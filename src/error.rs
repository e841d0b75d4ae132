//! Error types for lwpoly-dxf

use std::fmt;
use std::io;
use thiserror::Error;

/// Numeric kind a group code value was expected to decode as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Decimal integer
    Integer,
    /// Floating-point number
    Real,
    /// Hexadecimal entity handle
    Handle,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
            Self::Handle => write!(f, "handle"),
        }
    }
}

/// Main error type for lwpoly-dxf operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error tokenizing the DXF stream
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value could not be decoded as the kind its group code requires
    #[error("Invalid {expected} value for code '{code}': '{value}'")]
    InvalidValue {
        code: String,
        value: String,
        expected: ValueKind,
    },

    /// Polyline flag other than 0 (open) or 1 (closed)
    #[error("Invalid polyline flag for code '{code}': '{value}'")]
    InvalidFlag { code: String, value: String },

    /// Vertex component arrived in a position that would misalign the vertex sequences
    #[error("Vertex value out of order for code '{code}': '{value}'")]
    VertexOutOfOrder { code: String, value: String },

    /// Buffer finished with an X coordinate that never received its Y
    #[error("Incomplete vertex: {x_count} X values, {y_count} Y values")]
    IncompleteVertex { x_count: usize, y_count: usize },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DxfError {
    /// Whether the error is scoped to a single entity's construction.
    ///
    /// Tokenizer and IO failures leave the stream position unknown, so they
    /// can never be skipped over.
    pub fn is_entity_local(&self) -> bool {
        !matches!(self, DxfError::Io(_) | DxfError::Parse(_))
    }
}

/// Result type alias for lwpoly-dxf operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
