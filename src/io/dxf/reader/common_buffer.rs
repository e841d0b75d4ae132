//! Fields shared by every entity kind

use super::values::parse_handle;
use crate::entities::EntityCommon;
use crate::error::Result;
use crate::io::dxf::DxfCode;
use crate::types::Handle;

/// Staging buffer for the handle and layer of one entity.
///
/// Offered every code/value pair of an entity before the entity-specific
/// buffer sees it. Layer defaults to "0" when the entity names none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCommonBuffer {
    common: EntityCommon,
}

impl EntityCommonBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pair if its code is a shared entity field.
    ///
    /// Returns `Ok(false)` without touching the buffer for any other code.
    pub fn try_handle(&mut self, code: &str, value: &str) -> Result<bool> {
        match DxfCode::from_token(code) {
            Some(DxfCode::Handle) => {
                self.common.handle = parse_handle(code, value)?;
                Ok(true)
            }
            Some(DxfCode::LayerName) => {
                self.common.layer = value.to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn handle(&self) -> Handle {
        self.common.handle
    }

    pub fn layer(&self) -> &str {
        &self.common.layer
    }

    /// Finish into the common data carried by a built entity
    pub fn into_common(self) -> EntityCommon {
        self.common
    }
}
