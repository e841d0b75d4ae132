//! Entity handle
//!
//! DXF writes handles as hexadecimal strings under group code 5.

use std::fmt;

/// A unique identifier for a DXF entity. Handle 0 is reserved and means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Handle(u64);

impl Handle {
    /// The null/unset handle (0)
    pub const NULL: Handle = Handle(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Parse a handle from its hexadecimal DXF text form.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for empty or non-hex input.
    pub fn from_hex(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        u64::from_str_radix(text, 16).ok().map(Handle)
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
