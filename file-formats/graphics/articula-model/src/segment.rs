//! Rigid box-shaped body part with a single-axis joint

use glam::Vec3;

use crate::common::{Face, OscillationDirection, Rgba, RotationAxis, SegmentIndex};

/// One rigid body part: quad faces into the vertex pool, a colour per face,
/// and the joint that binds it to its parent.
///
/// `sibling` and `child` are indices into the owning model's segment list;
/// they encode the tree as first-child / next-sibling links.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Display label
    pub name: Option<String>,
    /// Faces in front, back, top, bottom, right, left order
    pub topology: Vec<Face>,
    /// One colour per face, same order as `topology`
    pub colors: Vec<Rgba>,
    /// Pivot point, in the parent's local frame
    pub joint: Vec3,
    pub rotation_axis: RotationAxis,
    /// Lower angle bound in degrees (inclusive)
    pub angle_min: f32,
    /// Upper angle bound in degrees (inclusive)
    pub angle_max: f32,
    /// Initial oscillation direction
    pub direction: OscillationDirection,
    /// Next sibling, `None` for the last child of a parent
    pub sibling: Option<SegmentIndex>,
    /// First child, `None` for a leaf
    pub child: Option<SegmentIndex>,
}

impl Segment {
    /// Create a leaf segment with no links and a fixed (axis-less) joint
    pub fn new(topology: Vec<Face>, colors: Vec<Rgba>) -> Self {
        Self {
            name: None,
            topology,
            colors,
            joint: Vec3::ZERO,
            rotation_axis: RotationAxis::None,
            angle_min: 0.0,
            angle_max: 0.0,
            direction: OscillationDirection::Forward,
            sibling: None,
            child: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set joint pivot, axis and inclusive angle limits in degrees
    pub fn with_joint(mut self, joint: Vec3, axis: RotationAxis, min: f32, max: f32) -> Self {
        self.joint = joint;
        self.rotation_axis = axis;
        self.angle_min = min;
        self.angle_max = max;
        self
    }

    pub fn with_direction(mut self, direction: OscillationDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_links(
        mut self,
        sibling: Option<SegmentIndex>,
        child: Option<SegmentIndex>,
    ) -> Self {
        self.sibling = sibling;
        self.child = child;
        self
    }

    /// Label for display; unnamed segments fall back to their index
    pub fn display_name(&self, index: SegmentIndex) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Segment {index}"))
    }

    /// Whether the oscillator moves this joint (`angle_min < angle_max`)
    pub fn is_bounded(&self) -> bool {
        self.angle_min < self.angle_max
    }

    /// Clamp a requested angle (degrees) into the joint limits
    pub fn clamp_angle(&self, degrees: f32) -> f32 {
        degrees.max(self.angle_min).min(self.angle_max)
    }

    /// Map a slider ratio in `[0, 1]` to a joint angle in degrees.
    ///
    /// Ratios outside the unit interval are clamped first.
    pub fn angle_from_ratio(&self, ratio: f32) -> f32 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self.angle_min + ratio * (self.angle_max - self.angle_min)
    }

    /// Inverse of [`Segment::angle_from_ratio`]; 0 for a zero-width range.
    ///
    /// Not clamped: an angle that overshot a limit maps slightly outside
    /// `[0, 1]`.
    pub fn ratio_for_angle(&self, degrees: f32) -> f32 {
        let range = self.angle_max - self.angle_min;
        if range <= 0.0 {
            0.0
        } else {
            (degrees - self.angle_min) / range
        }
    }

    pub fn face_count(&self) -> usize {
        self.topology.len()
    }
}
