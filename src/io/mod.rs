//! I/O module for reading DXF files

pub mod dxf;

pub use dxf::{DxfReader, DxfReaderConfiguration};
