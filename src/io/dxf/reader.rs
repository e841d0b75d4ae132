//! DXF file reader

mod common_buffer;
mod entity_reader;
mod lwpolyline_buffer;
mod stream_reader;
mod text_reader;
mod values;

pub use common_buffer::EntityCommonBuffer;
pub use entity_reader::{dispatch, read_lwpolyline, skip_to_boundary};
pub use lwpolyline_buffer::{LwPolylineBuffer, NULL_BULGE};
pub use stream_reader::{DxfCodePair, DxfStreamReader};
pub use text_reader::DxfTextReader;
pub use values::{parse_handle, parse_int, parse_real};

use crate::entities::LwPolyline;
use crate::error::Result;
use crate::io::dxf::DxfCode;
use crate::notification::{Notification, NotificationCollection, NotificationType};
use encoding_rs::Encoding;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::warn;

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When `true`, an entity that fails to decode is skipped and reported as
    /// an `Error` notification instead of aborting the read.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,

    /// Encoding for value lines that are not valid UTF-8.
    ///
    /// Default: `None` (Latin-1).
    pub encoding: Option<&'static Encoding>,
}

/// Pulls LWPOLYLINE entities out of a DXF text stream, one at a time.
///
/// ```rust,ignore
/// use lwpoly_dxf::DxfReader;
///
/// let mut reader = DxfReader::from_file("plan.dxf")?;
/// while let Some(lw) = reader.next_lwpolyline()? {
///     println!("{} vertices on {}", lw.vertex_count(), lw.common.layer);
/// }
/// ```
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    config: DxfReaderConfiguration,
    notifications: NotificationCollection,
    section: Option<String>,
    skipped_kinds: HashSet<String>,
    finished: bool,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(DxfTextReader::new(BufReader::new(reader))),
            config: DxfReaderConfiguration::default(),
            notifications: NotificationCollection::new(),
            section: None,
            skipped_kinds: HashSet::new(),
            finished: false,
        }
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        if let Some(encoding) = config.encoding {
            self.reader.set_encoding(encoding);
        }
        self.config = config;
        self
    }

    /// Diagnostics collected so far
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Read up to and including the next LWPOLYLINE.
    ///
    /// Returns `Ok(None)` at `EOF` or the end of the stream. LWPOLYLINEs are
    /// picked up from any section (ENTITIES and BLOCKS alike); other entity
    /// kinds in ENTITIES are reported once per kind as `NotImplemented`.
    pub fn next_lwpolyline(&mut self) -> Result<Option<LwPolyline>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.scan();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn scan(&mut self) -> Result<Option<LwPolyline>> {
        while let Some(pair) = self.reader.read_pair()? {
            if !pair.is(DxfCode::Start) {
                continue;
            }

            match pair.value.trim() {
                "SECTION" => {
                    if let Some(name) = self.reader.read_pair()? {
                        if name.is(DxfCode::Name) {
                            self.section = Some(name.value.trim().to_string());
                        } else {
                            self.reader.push_back(name);
                        }
                    }
                }
                "ENDSEC" => self.section = None,
                "EOF" => return Ok(None),
                "LWPOLYLINE" => {
                    match read_lwpolyline(self.reader.as_mut(), &mut self.notifications) {
                        Ok(lwpolyline) => return Ok(Some(lwpolyline)),
                        Err(e) if self.config.failsafe && e.is_entity_local() => {
                            warn!(line = pair.line, error = %e, "skipping LWPOLYLINE");
                            self.notifications.push(
                                Notification::new(
                                    NotificationType::Error,
                                    format!("LWPOLYLINE skipped: {}", e),
                                )
                                .at_line(pair.line),
                            );
                        }
                        Err(e) => return Err(e),
                    }
                }
                kind => {
                    if self.section.as_deref() == Some("ENTITIES")
                        && self.skipped_kinds.insert(kind.to_string())
                    {
                        self.notifications.notify(
                            NotificationType::NotImplemented,
                            format!("{} entities skipped", kind),
                        );
                    }
                }
            }
        }
        Ok(None)
    }
}

impl Iterator for DxfReader {
    type Item = Result<LwPolyline>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lwpolyline().transpose()
    }
}
