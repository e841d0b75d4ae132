//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::BufRead;

/// DXF ASCII text reader.
///
/// Emits one [`DxfCodePair`] per two lines. The code line keeps its padding so
/// handlers can match it against the fixed-width tokens; only the line
/// terminator (`\n` or `\r\n`) is removed from either line.
pub struct DxfTextReader<R: BufRead> {
    reader: R,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
        }
    }

    /// Current line number (1-based, 0 before the first read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read a single line, decoding non-UTF8 bytes with the configured
    /// encoding or Latin-1.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };
        Ok(Some(line))
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let code_line = self.line_number;

        if code.trim().parse::<i32>().is_err() {
            return Err(DxfError::Parse(format!(
                "Invalid DXF code at line {}: '{}'",
                code_line, code
            )));
        }

        let value = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Parse(format!(
                    "Unexpected EOF after code '{}' at line {}",
                    code, code_line
                )))
            }
        };

        Ok(Some(DxfCodePair::new(code, process_string_value(&value), code_line)))
    }
}

/// Expand caret escapes used in DXF strings
fn process_string_value(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

impl<R: BufRead> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn peek_pair(&mut self) -> Result<Option<&DxfCodePair>> {
        if self.peeked_pair.is_none() {
            self.peeked_pair = self.read_pair_internal()?;
        }
        Ok(self.peeked_pair.as_ref())
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &[u8]) -> DxfTextReader<Cursor<&[u8]>> {
        DxfTextReader::new(Cursor::new(data))
    }

    #[test]
    fn test_code_padding_is_preserved() {
        let mut reader = reader(b"  0\nSECTION\n 10\n1.5\n");

        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, "  0");
        assert_eq!(pair.value, "SECTION");
        assert_eq!(pair.line, 1);

        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, " 10");
        assert_eq!(pair.value, "1.5");
        assert_eq!(pair.line, 3);

        assert!(reader.read_pair().unwrap().is_none());
    }

    #[test]
    fn test_crlf_terminators() {
        let mut reader = reader(b" 70\r\n     1\r\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, " 70");
        assert_eq!(pair.value, "     1");
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut reader = reader(b"  8\nWALLS");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value, "WALLS");
    }

    #[test]
    fn test_peek_then_read() {
        let mut reader = reader(b"  0\nSECTION\n  2\nENTITIES\n");

        assert_eq!(reader.peek_pair().unwrap().map(|p| p.code.clone()), Some("  0".to_string()));
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value, "SECTION");

        let next = reader.read_pair().unwrap().unwrap();
        reader.push_back(next);
        assert_eq!(reader.read_pair().unwrap().unwrap().value, "ENTITIES");
    }

    #[test]
    fn test_invalid_code_line() {
        let mut reader = reader(b"abc\nvalue\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_missing_value_line() {
        let mut reader = reader(b" 10\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_latin1_fallback_and_configured_encoding() {
        let mut latin1 = reader(b"  8\nSch\xe4den\n");
        assert_eq!(latin1.read_pair().unwrap().unwrap().value, "Schäden");

        let mut cp1251 = reader(b"  8\n\xd1\xeb\xee\xe9\n");
        cp1251.set_encoding(encoding_rs::WINDOWS_1251);
        assert_eq!(cp1251.read_pair().unwrap().unwrap().value, "Слой");
    }

    #[test]
    fn test_special_characters() {
        let mut reader = reader(b"  8\nA^JB\n");
        assert_eq!(reader.read_pair().unwrap().unwrap().value, "A\nB");
    }
}
