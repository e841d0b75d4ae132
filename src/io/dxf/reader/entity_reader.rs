//! Per-entity token run
//!
//! Each pair of an entity is offered to the shared-field handler first and to
//! the entity buffer only if the first declined it. The run ends at the next
//! `"  0"` code, which is pushed back for the caller.

use super::common_buffer::EntityCommonBuffer;
use super::lwpolyline_buffer::LwPolylineBuffer;
use super::stream_reader::DxfStreamReader;
use crate::entities::LwPolyline;
use crate::error::Result;
use crate::io::dxf::DxfCode;
use crate::notification::{Notification, NotificationCollection, NotificationType};
use tracing::debug;

/// Offer one pair to the handler chain.
///
/// Returns `Ok(false)` when neither handler recognised the code.
pub fn dispatch(
    common: &mut EntityCommonBuffer,
    lwpolyline: &mut LwPolylineBuffer,
    code: &str,
    value: &str,
) -> Result<bool> {
    if common.try_handle(code, value)? {
        return Ok(true);
    }
    lwpolyline.parse(code, value)
}

/// Read the body of an LWPOLYLINE whose `"  0"` start pair was already consumed.
///
/// Codes no handler consumes are recorded as warnings. On a decode error the
/// rest of the entity is skipped, so the stream is left at the next entity
/// boundary either way.
pub fn read_lwpolyline<S>(reader: &mut S, notifications: &mut NotificationCollection) -> Result<LwPolyline>
where
    S: DxfStreamReader + ?Sized,
{
    let mut common = EntityCommonBuffer::new();
    let mut buffer = LwPolylineBuffer::new();

    while let Some(pair) = reader.read_pair()? {
        if pair.is(DxfCode::Start) {
            reader.push_back(pair);
            break;
        }

        match dispatch(&mut common, &mut buffer, &pair.code, &pair.value) {
            Ok(true) => {}
            Ok(false) => notifications.push(
                Notification::new(
                    NotificationType::Warning,
                    format!("LWPOLYLINE code '{}' not handled (value '{}')", pair.code, pair.value),
                )
                .at_line(pair.line),
            ),
            Err(e) => {
                skip_to_boundary(reader)?;
                return Err(e);
            }
        }
    }

    let lwpolyline = LwPolyline::from_buffer(common.into_common(), &buffer)?;
    debug!(
        handle = %lwpolyline.common.handle,
        layer = %lwpolyline.common.layer,
        vertices = lwpolyline.vertex_count(),
        closed = lwpolyline.is_closed,
        "lwpolyline read"
    );
    Ok(lwpolyline)
}

/// Consume pairs up to (not including) the next `"  0"` code.
pub fn skip_to_boundary<S>(reader: &mut S) -> Result<()>
where
    S: DxfStreamReader + ?Sized,
{
    while let Some(pair) = reader.read_pair()? {
        if pair.is(DxfCode::Start) {
            reader.push_back(pair);
            break;
        }
    }
    Ok(())
}
