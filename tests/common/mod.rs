//! Shared test utilities for lwpoly-dxf integration tests.

#![allow(dead_code)]

use lwpoly_dxf::DxfReader;
use std::io::Cursor;

/// Render code/value pairs as ASCII DXF lines. Codes are right-aligned to
/// three columns the way AutoCAD writes them.
pub fn dxf_text(pairs: &[(i32, &str)]) -> String {
    let mut out = String::new();
    for (code, value) in pairs {
        out.push_str(&format!("{:>3}\n{}\n", code, value));
    }
    out
}

/// Wrap entity pairs in an ENTITIES section followed by EOF.
pub fn entities_section(entity_pairs: &[(i32, &str)]) -> String {
    let mut pairs = vec![(0, "SECTION"), (2, "ENTITIES")];
    pairs.extend_from_slice(entity_pairs);
    pairs.extend_from_slice(&[(0, "ENDSEC"), (0, "EOF")]);
    dxf_text(&pairs)
}

/// Reader over an in-memory DXF string.
pub fn reader_for(text: &str) -> DxfReader {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))
}
