//! Staging buffer for an LWPOLYLINE entity
//!
//! An LWPOLYLINE writes its vertices as a flat run of group codes:
//!
//! ```text
//!  10  x0      <- opens vertex 0
//!  20  y0
//!  42  b0      <- optional, only for arc segments
//!  10  x1      <- opens vertex 1
//!  20  y1
//! ```
//!
//! Bulge and the per-vertex widths are optional, so the buffer pushes a
//! [`NULL_BULGE`] slot for each of them the moment an X arrives and overwrites
//! that slot in place if the value shows up later. Every per-vertex sequence
//! therefore has the same length as `x_values` after each applied pair, and
//! the vertex in progress is always `x_values.len() - 1`.

use super::values::{parse_int, parse_real};
use crate::entities::PolylineFlags;
use crate::error::{DxfError, Result, ValueKind};
use crate::io::dxf::DxfCode;
use crate::types::Vector3;
use tracing::trace;

/// Placeholder for a vertex whose bulge (or width) was not written
pub const NULL_BULGE: Option<f64> = None;

/// Mutable staging record for one lightweight polyline.
///
/// Fed one code/value pair at a time through [`parse`](Self::parse) and read
/// back through the accessors once the caller has seen the end of the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolylineBuffer {
    vertex_count: usize,
    is_closed: bool,
    constant_width: f64,
    elevation: f64,
    thickness: f64,
    normal: Vector3,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    bulge_values: Vec<Option<f64>>,
    start_widths: Vec<Option<f64>>,
    end_widths: Vec<Option<f64>>,
}

impl LwPolylineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            vertex_count: 0,
            is_closed: false,
            constant_width: 0.0,
            elevation: 0.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
            x_values: Vec::new(),
            y_values: Vec::new(),
            bulge_values: Vec::new(),
            start_widths: Vec::new(),
            end_widths: Vec::new(),
        }
    }

    /// Apply one code/value pair.
    ///
    /// Returns `Ok(true)` when the code belongs to LWPOLYLINE and was applied,
    /// `Ok(false)` for any other code (nothing is changed). Values that do not
    /// decode, a flag other than 0/1, and vertex codes arriving out of order
    /// are errors, and leave the buffer as it was.
    pub fn parse(&mut self, code: &str, value: &str) -> Result<bool> {
        let Some(dxf_code) = DxfCode::from_token(code) else {
            return Ok(false);
        };

        match dxf_code {
            DxfCode::VertexCount => {
                let count = parse_int(code, value)?;
                self.vertex_count = usize::try_from(count).map_err(|_| DxfError::InvalidValue {
                    code: code.to_string(),
                    value: value.to_string(),
                    expected: ValueKind::Integer,
                })?;
            }
            DxfCode::PolylineFlag => self.is_closed = parse_flag(code, value)?,
            DxfCode::ConstantWidth => self.constant_width = parse_real(code, value)?,
            DxfCode::Elevation => self.elevation = parse_real(code, value)?,
            DxfCode::Thickness => self.thickness = parse_real(code, value)?,
            DxfCode::ExtrusionX => self.normal.x = parse_real(code, value)?,
            DxfCode::ExtrusionY => self.normal.y = parse_real(code, value)?,
            DxfCode::ExtrusionZ => self.normal.z = parse_real(code, value)?,
            DxfCode::XCoordinate => self.push_x(code, value)?,
            DxfCode::YCoordinate => self.push_y(code, value)?,
            DxfCode::Bulge => {
                let bulge = parse_real(code, value)?;
                fill_open_slot(&mut self.bulge_values, bulge, code, value)?;
            }
            DxfCode::StartWidth => {
                let width = parse_real(code, value)?;
                fill_open_slot(&mut self.start_widths, width, code, value)?;
            }
            DxfCode::EndWidth => {
                let width = parse_real(code, value)?;
                fill_open_slot(&mut self.end_widths, width, code, value)?;
            }
            DxfCode::Start | DxfCode::Name | DxfCode::Handle | DxfCode::LayerName => {
                return Ok(false)
            }
        }
        Ok(true)
    }

    /// X opens a new vertex, so the previous one must have its Y.
    fn push_x(&mut self, code: &str, value: &str) -> Result<()> {
        if self.x_values.len() != self.y_values.len() {
            return Err(out_of_order(code, value));
        }
        let x = parse_real(code, value)?;
        self.x_values.push(x);
        self.bulge_values.push(NULL_BULGE);
        self.start_widths.push(NULL_BULGE);
        self.end_widths.push(NULL_BULGE);
        trace!(vertex = self.x_values.len() - 1, x, "lwpolyline vertex opened");
        Ok(())
    }

    fn push_y(&mut self, code: &str, value: &str) -> Result<()> {
        if self.x_values.len() != self.y_values.len() + 1 {
            return Err(out_of_order(code, value));
        }
        let y = parse_real(code, value)?;
        self.y_values.push(y);
        trace!(vertex = self.y_values.len() - 1, y, "lwpolyline vertex y");
        Ok(())
    }

    /// Declared number of vertices (code 90); not checked against the sequences
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn constant_width(&self) -> f64 {
        self.constant_width
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Extrusion direction, (0, 0, 1) unless codes 210/220/230 were given
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// One slot per X value; [`NULL_BULGE`] where no bulge was written
    pub fn bulge_values(&self) -> &[Option<f64>] {
        &self.bulge_values
    }

    pub fn start_widths(&self) -> &[Option<f64>] {
        &self.start_widths
    }

    pub fn end_widths(&self) -> &[Option<f64>] {
        &self.end_widths
    }

    /// Index of the vertex that has its X but not yet its Y
    pub fn open_vertex(&self) -> Option<usize> {
        (self.x_values.len() > self.y_values.len()).then(|| self.x_values.len() - 1)
    }
}

impl Default for LwPolylineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the polyline flag; only 0 (open) and 1 (closed) are accepted.
fn parse_flag(code: &str, value: &str) -> Result<bool> {
    let raw = parse_int(code, value)?;
    let flags = u16::try_from(raw)
        .ok()
        .and_then(PolylineFlags::from_bits)
        .ok_or_else(|| DxfError::InvalidFlag {
            code: code.to_string(),
            value: value.to_string(),
        })?;
    Ok(flags.contains(PolylineFlags::CLOSED))
}

/// Overwrite the slot pushed for the most recent vertex.
fn fill_open_slot(slots: &mut [Option<f64>], v: f64, code: &str, value: &str) -> Result<()> {
    match slots.last_mut() {
        Some(slot) => {
            *slot = Some(v);
            Ok(())
        }
        None => Err(out_of_order(code, value)),
    }
}

fn out_of_order(code: &str, value: &str) -> DxfError {
    DxfError::VertexOutOfOrder {
        code: code.to_string(),
        value: value.to_string(),
    }
}
