//! CAD entity types and traits

use crate::types::Handle;

pub mod lwpolyline;

pub use lwpolyline::{LwPolyline, LwVertex, PolylineFlags};

/// Base trait for built entities
pub trait Entity {
    /// Get the entity's unique handle
    fn handle(&self) -> Handle;

    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub layer: String,
}

impl EntityCommon {
    /// Create new common entity data on layer "0"
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}
