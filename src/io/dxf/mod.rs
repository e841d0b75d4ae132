//! DXF (Drawing Exchange Format) reading

mod dxf_code;
mod reader;

pub use dxf_code::DxfCode;
pub use reader::{
    dispatch, parse_handle, parse_int, parse_real, read_lwpolyline, skip_to_boundary,
    DxfCodePair, DxfReader, DxfReaderConfiguration, DxfStreamReader, DxfTextReader,
    EntityCommonBuffer, LwPolylineBuffer, NULL_BULGE,
};
