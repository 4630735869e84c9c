//! Per-segment joint angles

use crate::common::SegmentIndex;
use crate::error::{ModelError, Result};
use crate::model::Model;

/// Current joint angle of every segment, in degrees.
///
/// Degrees are stored so the oscillator's integer steps stay exact; the
/// kinematics pass converts to radians.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pose {
    angles: Vec<f32>,
}

impl Pose {
    /// All joints at 0
    pub fn zeroed(segment_count: usize) -> Self {
        Self {
            angles: vec![0.0; segment_count],
        }
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn degrees(&self, index: SegmentIndex) -> Option<f32> {
        self.angles.get(index).copied()
    }

    pub fn radians(&self, index: SegmentIndex) -> Option<f32> {
        self.degrees(index).map(f32::to_radians)
    }

    /// Store an angle as-is. Limits are the caller's concern.
    pub fn set_degrees(&mut self, index: SegmentIndex, degrees: f32) -> Result<()> {
        let count = self.angles.len();
        let slot = self
            .angles
            .get_mut(index)
            .ok_or(ModelError::SegmentOutOfRange { index, count })?;
        *slot = degrees;
        Ok(())
    }

    pub(crate) fn angle_mut(&mut self, index: SegmentIndex) -> Option<&mut f32> {
        self.angles.get_mut(index)
    }

    /// Fails unless the pose has exactly one angle per segment of `model`
    pub fn check_model(&self, model: &Model) -> Result<()> {
        if self.angles.len() == model.segment_count() {
            Ok(())
        } else {
            Err(ModelError::PoseMismatch {
                angles: self.angles.len(),
                segments: model.segment_count(),
            })
        }
    }

    pub fn as_degrees(&self) -> &[f32] {
        &self.angles
    }

    pub fn reset(&mut self) {
        self.angles.fill(0.0);
    }
}
