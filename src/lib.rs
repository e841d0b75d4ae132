//! # lwpoly-dxf
//!
//! Incremental reader for DXF lightweight polylines (`LWPOLYLINE`).
//!
//! A DXF entity arrives as a flat run of group code / value lines with no
//! lookahead. The reader stages each entity in two buffers, one for the
//! fields every entity shares (handle, layer) and one for the polyline
//! itself, then builds an immutable [`LwPolyline`] when the run ends.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lwpoly_dxf::{DxfReader, DxfReaderConfiguration};
//!
//! let reader = DxfReader::from_file("plan.dxf")?
//!     .with_configuration(DxfReaderConfiguration { failsafe: true, ..Default::default() });
//!
//! for lw in reader {
//!     let lw = lw?;
//!     println!("{} vertices, closed: {}", lw.vertex_count(), lw.is_closed);
//! }
//! # Ok::<(), lwpoly_dxf::DxfError>(())
//! ```
//!
//! ## Feeding pairs by hand
//!
//! Callers with their own tokenizer drive the buffers directly:
//!
//! ```rust
//! use lwpoly_dxf::io::dxf::{dispatch, EntityCommonBuffer, LwPolylineBuffer, NULL_BULGE};
//!
//! let mut common = EntityCommonBuffer::new();
//! let mut buffer = LwPolylineBuffer::new();
//! for (code, value) in [("  8", "Walls"), (" 10", "0.0"), (" 20", "0.0"), (" 42", "1.0")] {
//!     assert!(dispatch(&mut common, &mut buffer, code, value).unwrap());
//! }
//! assert_eq!(buffer.bulge_values(), &[Some(1.0)]);
//! assert_ne!(buffer.bulge_values()[0], NULL_BULGE);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod types;

pub use error::{DxfError, Result, ValueKind};
pub use types::{Handle, Vector2, Vector3};

pub use entities::{Entity, EntityCommon, LwPolyline, LwVertex, PolylineFlags};

pub use io::dxf::{DxfReader, DxfReaderConfiguration, EntityCommonBuffer, LwPolylineBuffer, NULL_BULGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
