//! Small value types shared by segments, documents and the kinematics pass

use glam::Mat4;

/// Index of a segment inside its model's segment list
pub type SegmentIndex = usize;

/// A quad face: four indices into the model's vertex pool
pub type Face = [usize; 4];

/// RGBA colour with components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Number of faces in a closed box segment
pub const BOX_FACE_COUNT: usize = 6;

/// Number of vertices per face
pub const FACE_VERTEX_COUNT: usize = 4;

/// Axis a joint rotates about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationAxis {
    X,
    Y,
    Z,
    /// Rigidly attached: the pivot transform has no rotation
    #[default]
    None,
}

impl RotationAxis {
    /// Numeric code used in model documents (0 = X, 1 = Y, 2 = Z, 3 = none)
    pub fn code(self) -> u8 {
        match self {
            RotationAxis::X => 0,
            RotationAxis::Y => 1,
            RotationAxis::Z => 2,
            RotationAxis::None => 3,
        }
    }

    /// Parse a document code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RotationAxis::X),
            1 => Some(RotationAxis::Y),
            2 => Some(RotationAxis::Z),
            3 => Some(RotationAxis::None),
            _ => None,
        }
    }

    /// Rotation matrix for `radians` about this axis
    pub fn rotation(self, radians: f32) -> Mat4 {
        match self {
            RotationAxis::X => Mat4::from_rotation_x(radians),
            RotationAxis::Y => Mat4::from_rotation_y(radians),
            RotationAxis::Z => Mat4::from_rotation_z(radians),
            RotationAxis::None => Mat4::IDENTITY,
        }
    }
}

impl std::fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationAxis::X => write!(f, "X"),
            RotationAxis::Y => write!(f, "Y"),
            RotationAxis::Z => write!(f, "Z"),
            RotationAxis::None => write!(f, "none"),
        }
    }
}

/// Shading hint for the rendering backend. Not interpreted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceMode {
    /// Reflective environment (cube) mapping
    Environment,
    /// Image texture
    Image,
    /// Normal/bump mapping
    Bump,
    /// Plain per-face vertex colour
    #[default]
    VertexColor,
}

impl SurfaceMode {
    /// Numeric code used in model documents
    pub fn code(self) -> u8 {
        match self {
            SurfaceMode::Environment => 0,
            SurfaceMode::Image => 1,
            SurfaceMode::Bump => 2,
            SurfaceMode::VertexColor => 3,
        }
    }

    /// Parse a document code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SurfaceMode::Environment),
            1 => Some(SurfaceMode::Image),
            2 => Some(SurfaceMode::Bump),
            3 => Some(SurfaceMode::VertexColor),
            _ => None,
        }
    }
}

impl std::fmt::Display for SurfaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceMode::Environment => write!(f, "environment"),
            SurfaceMode::Image => write!(f, "image"),
            SurfaceMode::Bump => write!(f, "bump"),
            SurfaceMode::VertexColor => write!(f, "vertex-color"),
        }
    }
}

/// Sign applied to the per-tick angle delta during idle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OscillationDirection {
    #[default]
    Forward,
    Reverse,
}

impl OscillationDirection {
    /// +1.0 or -1.0
    pub fn sign(self) -> f32 {
        match self {
            OscillationDirection::Forward => 1.0,
            OscillationDirection::Reverse => -1.0,
        }
    }

    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            OscillationDirection::Forward => OscillationDirection::Reverse,
            OscillationDirection::Reverse => OscillationDirection::Forward,
        }
    }

    /// Parse the document value; only 1 and -1 are accepted
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(OscillationDirection::Forward),
            -1 => Some(OscillationDirection::Reverse),
            _ => None,
        }
    }

    /// Document value (1 or -1)
    pub fn value(self) -> i8 {
        match self {
            OscillationDirection::Forward => 1,
            OscillationDirection::Reverse => -1,
        }
    }
}
