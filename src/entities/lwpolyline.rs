//! Lightweight polyline entity (2D polyline with bulges)

use super::{Entity, EntityCommon};
use crate::error::{DxfError, Result};
use crate::io::dxf::LwPolylineBuffer;
use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;
use tracing::warn;

bitflags! {
    /// Polyline flag (code 70) values accepted for LWPOLYLINE.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: u16 {
        /// Last vertex connects back to the first.
        const CLOSED = 0x1;
    }
}

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Bulge of the segment starting at this vertex
    /// 0 = straight line, positive = counterclockwise arc, negative = clockwise arc
    pub bulge: f64,
    /// Starting width at this vertex
    pub start_width: f64,
    /// Ending width at this vertex
    pub end_width: f64,
}

impl LwVertex {
    /// Create a straight-segment vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
            start_width: 0.0,
            end_width: 0.0,
        }
    }

    pub fn is_arc(&self) -> bool {
        self.bulge != 0.0
    }
}

/// A finished lightweight (2D) polyline entity
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    pub vertices: Vec<LwVertex>,
    pub is_closed: bool,
    /// Constant width (if all segments have same width)
    pub constant_width: f64,
    /// Elevation (Z coordinate)
    pub elevation: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Extrusion direction
    pub normal: Vector3,
}

impl LwPolyline {
    /// Build the entity from a completed buffer.
    ///
    /// Missing bulges and widths become 0.0. Fails if the buffer ended with an
    /// X coordinate whose Y never arrived. A declared vertex count that differs
    /// from the vertices actually read is logged and otherwise ignored.
    pub fn from_buffer(common: EntityCommon, buffer: &LwPolylineBuffer) -> Result<Self> {
        let xs = buffer.x_values();
        let ys = buffer.y_values();
        if xs.len() != ys.len() {
            return Err(DxfError::IncompleteVertex {
                x_count: xs.len(),
                y_count: ys.len(),
            });
        }

        if buffer.vertex_count() != xs.len() {
            warn!(
                handle = %common.handle,
                declared = buffer.vertex_count(),
                read = xs.len(),
                "lwpolyline vertex count mismatch"
            );
        }

        let vertices = xs
            .iter()
            .zip(ys)
            .zip(buffer.bulge_values())
            .zip(buffer.start_widths().iter().zip(buffer.end_widths()))
            .map(|(((&x, &y), bulge), (start, end))| LwVertex {
                location: Vector2::new(x, y),
                bulge: bulge.unwrap_or(0.0),
                start_width: start.unwrap_or(0.0),
                end_width: end.unwrap_or(0.0),
            })
            .collect();

        Ok(LwPolyline {
            common,
            vertices,
            is_closed: buffer.is_closed(),
            constant_width: buffer.constant_width(),
            elevation: buffer.elevation(),
            thickness: buffer.thickness(),
            normal: buffer.normal(),
        })
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of segments, counting the closing segment of a closed polyline
    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            n if self.is_closed => n,
            n => n - 1,
        }
    }
}

impl TryFrom<&LwPolylineBuffer> for LwPolyline {
    type Error = DxfError;

    fn try_from(buffer: &LwPolylineBuffer) -> Result<Self> {
        LwPolyline::from_buffer(EntityCommon::new(), buffer)
    }
}

impl Entity for LwPolyline {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }
}
