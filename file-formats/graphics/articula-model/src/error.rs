use std::io;
use thiserror::Error;

/// Which link of a segment an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The next-sibling link
    Sibling,
    /// The first-child link
    Child,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Sibling => write!(f, "sibling"),
            LinkKind::Child => write!(f, "child"),
        }
    }
}

/// Broad classification of a [`ModelError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed document or tree topology; fails the whole import
    Structural,
    /// Segment data that contradicts the model contract; fails construction
    Contract,
    /// Underlying reader or writer failed
    Io,
}

/// Error types for articulated model construction, import and posing
#[derive(Error, Debug)]
pub enum ModelError {
    /// I/O Error during reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid JSON or does not have the expected shape
    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    /// A model needs at least one segment to have a root
    #[error("Model has no segments")]
    EmptyModel,

    /// Root index does not name a segment
    #[error("Root index {root} out of range (model has {count} segments)")]
    RootOutOfRange { root: usize, count: usize },

    /// The root carries a sibling link, which would make a second root
    #[error("Root segment {root} has sibling {sibling}; a model has exactly one root")]
    RootHasSibling { root: usize, sibling: usize },

    /// A face does not have exactly four vertex indices
    #[error("Segment {segment} face {face} has {len} indices, expected 4")]
    FaceArity {
        segment: usize,
        face: usize,
        len: usize,
    },

    /// A face references a vertex outside the pool
    #[error("Segment {segment} face {face} references vertex {index} past a pool of {pool_len}")]
    VertexOutOfRange {
        segment: usize,
        face: usize,
        index: usize,
        pool_len: usize,
    },

    /// A vertex coordinate is NaN or infinite
    #[error("Vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    /// Colour list and face list differ in length
    #[error("Segment {segment} has {faces} faces but {colors} colors")]
    ColorCountMismatch {
        segment: usize,
        faces: usize,
        colors: usize,
    },

    /// `angle_min` is greater than `angle_max`, or either is not finite
    #[error("Segment {segment} has invalid angle range [{min}, {max}]")]
    InvalidAngleRange { segment: usize, min: f32, max: f32 },

    /// Joint offset is NaN or infinite
    #[error("Segment {segment} has a non-finite joint offset")]
    NonFiniteJoint { segment: usize },

    /// Rotation axis code outside 0..=3
    #[error("Segment {segment} has invalid rotation axis code {code}")]
    InvalidRotationAxis { segment: usize, code: i64 },

    /// Oscillation direction other than +1 or -1
    #[error("Segment {segment} has invalid rotate direction {value}, expected 1 or -1")]
    InvalidDirection { segment: usize, value: i64 },

    /// Surface mode code outside 0..=3
    #[error("Invalid surface mode code {0}")]
    InvalidSurfaceMode(i64),

    /// Sibling or child index does not name a segment
    #[error("Segment {segment} {link} index {target} out of range (model has {count} segments)")]
    LinkOutOfRange {
        segment: usize,
        link: LinkKind,
        target: usize,
        count: usize,
    },

    /// Sibling or child link points back at the segment itself
    #[error("Segment {segment} lists itself as its own {link}")]
    SelfLink { segment: usize, link: LinkKind },

    /// A segment is reached twice while walking the tree
    #[error("Segment {segment} is reachable more than once; links form a cycle or a shared node")]
    CycleDetected { segment: usize },

    /// A segment cannot be reached from the root
    #[error("Segment {segment} is not reachable from root {root}")]
    Unreachable { segment: usize, root: usize },

    /// Pose request for a segment that does not exist
    #[error("Segment index {index} out of range (model has {count} segments)")]
    SegmentOutOfRange { index: usize, count: usize },

    /// Pose sized for a different model
    #[error("Pose has {angles} angles but the model has {segments} segments")]
    PoseMismatch { angles: usize, segments: usize },

    /// Pose request by name that matches no segment
    #[error("No segment named '{0}'")]
    UnknownSegment(String),

    /// Built-in shape lookup by a name that is not registered
    #[error("Unknown built-in shape '{0}'")]
    UnknownShape(String),
}

impl ModelError {
    /// Classify the error into the structural / contract / I/O taxonomy
    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::Io(_) => ErrorCategory::Io,
            ModelError::Document(_)
            | ModelError::EmptyModel
            | ModelError::RootOutOfRange { .. }
            | ModelError::RootHasSibling { .. }
            | ModelError::FaceArity { .. }
            | ModelError::InvalidRotationAxis { .. }
            | ModelError::InvalidDirection { .. }
            | ModelError::InvalidSurfaceMode(_)
            | ModelError::LinkOutOfRange { .. }
            | ModelError::SelfLink { .. }
            | ModelError::CycleDetected { .. }
            | ModelError::Unreachable { .. } => ErrorCategory::Structural,
            ModelError::VertexOutOfRange { .. }
            | ModelError::NonFiniteVertex { .. }
            | ModelError::ColorCountMismatch { .. }
            | ModelError::InvalidAngleRange { .. }
            | ModelError::NonFiniteJoint { .. }
            | ModelError::SegmentOutOfRange { .. }
            | ModelError::PoseMismatch { .. }
            | ModelError::UnknownSegment(_)
            | ModelError::UnknownShape(_) => ErrorCategory::Contract,
        }
    }
}

/// Result type using ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
