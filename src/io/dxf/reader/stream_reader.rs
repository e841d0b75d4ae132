//! DXF stream reader trait and common types

use crate::error::Result;
use crate::io::dxf::DxfCode;
use encoding_rs::Encoding;

/// A DXF code/value pair as it appeared in the stream
#[derive(Debug, Clone, PartialEq)]
pub struct DxfCodePair {
    /// Code line, line terminator removed, padding kept
    pub code: String,

    /// Value line, line terminator removed
    pub value: String,

    /// 1-based line number of the code line
    pub line: usize,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
            line,
        }
    }

    /// The known group code, if the code line matches one exactly
    pub fn dxf_code(&self) -> Option<DxfCode> {
        DxfCode::from_token(&self.code)
    }

    /// Check for a specific code
    pub fn is(&self, code: DxfCode) -> bool {
        self.code == code.token()
    }

    /// Check for an entity start (`"  0"`) carrying the given type name
    pub fn is_start_of(&self, name: &str) -> bool {
        self.is(DxfCode::Start) && self.value.trim() == name
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Peek at the next pair without consuming it
    fn peek_pair(&mut self) -> Result<Option<&DxfCodePair>>;

    /// Push a pair back to be read again on next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Set the fallback encoding for value lines that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);
}
