//! DXF group codes
//!
//! Group codes tag the meaning of the value line that follows them. In ASCII
//! DXF the code line is right-aligned to three columns (`"  0"`, `" 10"`,
//! `"210"`), and the entity buffers match that padded token exactly.

/// Group codes understood by the lightweight polyline reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DxfCode {
    /// Entity type / section marker
    Start = 0,
    /// Section or block name
    Name = 2,
    /// Entity handle (hex)
    Handle = 5,
    /// Layer name
    LayerName = 8,

    /// Vertex X coordinate
    XCoordinate = 10,
    /// Vertex Y coordinate
    YCoordinate = 20,
    /// Elevation
    Elevation = 38,
    /// Thickness
    Thickness = 39,

    /// Starting width of a vertex segment
    StartWidth = 40,
    /// Ending width of a vertex segment
    EndWidth = 41,
    /// Bulge of a vertex segment
    Bulge = 42,
    /// Constant (global) width
    ConstantWidth = 43,

    /// Polyline flag
    PolylineFlag = 70,
    /// Number of vertices
    VertexCount = 90,

    /// Extrusion direction X
    ExtrusionX = 210,
    /// Extrusion direction Y
    ExtrusionY = 220,
    /// Extrusion direction Z
    ExtrusionZ = 230,
}

impl DxfCode {
    const ALL: [DxfCode; 17] = [
        DxfCode::Start,
        DxfCode::Name,
        DxfCode::Handle,
        DxfCode::LayerName,
        DxfCode::XCoordinate,
        DxfCode::YCoordinate,
        DxfCode::Elevation,
        DxfCode::Thickness,
        DxfCode::StartWidth,
        DxfCode::EndWidth,
        DxfCode::Bulge,
        DxfCode::ConstantWidth,
        DxfCode::PolylineFlag,
        DxfCode::VertexCount,
        DxfCode::ExtrusionX,
        DxfCode::ExtrusionY,
        DxfCode::ExtrusionZ,
    ];

    /// The padded token this code is written as on the code line
    pub const fn token(self) -> &'static str {
        match self {
            DxfCode::Start => "  0",
            DxfCode::Name => "  2",
            DxfCode::Handle => "  5",
            DxfCode::LayerName => "  8",
            DxfCode::XCoordinate => " 10",
            DxfCode::YCoordinate => " 20",
            DxfCode::Elevation => " 38",
            DxfCode::Thickness => " 39",
            DxfCode::StartWidth => " 40",
            DxfCode::EndWidth => " 41",
            DxfCode::Bulge => " 42",
            DxfCode::ConstantWidth => " 43",
            DxfCode::PolylineFlag => " 70",
            DxfCode::VertexCount => " 90",
            DxfCode::ExtrusionX => "210",
            DxfCode::ExtrusionY => "220",
            DxfCode::ExtrusionZ => "230",
        }
    }

    /// Match a raw code line against the known tokens.
    ///
    /// The comparison is exact: `"10"` or `" 10 "` are not `" 10"`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.token() == token)
    }

    /// Look up a code by its numeric value
    pub fn from_i32(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.to_i32() == code)
    }

    /// Convert to i32
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}
