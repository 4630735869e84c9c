//! Idle animation: bounce every bounded joint between its limits

use log::trace;

use crate::animation::pose::Pose;
use crate::common::{OscillationDirection, SegmentIndex};
use crate::error::Result;
use crate::model::Model;

/// Oscillator tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorConfig {
    /// Degrees added per tick, before the direction sign
    pub step_degrees: f32,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self { step_degrees: 1.0 }
    }
}

/// Per-joint bounce state.
///
/// The live direction of each joint is held here rather than in the model,
/// so the model stays immutable while animating; it starts from each
/// segment's `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseOscillator {
    config: OscillatorConfig,
    directions: Vec<OscillationDirection>,
}

impl PoseOscillator {
    pub fn new(model: &Model, config: OscillatorConfig) -> Self {
        Self {
            config,
            directions: model.segments().iter().map(|s| s.direction).collect(),
        }
    }

    pub fn config(&self) -> OscillatorConfig {
        self.config
    }

    pub fn direction(&self, index: SegmentIndex) -> Option<OscillationDirection> {
        self.directions.get(index).copied()
    }

    /// Restore every direction from the model
    pub fn reset(&mut self, model: &Model) {
        self.directions.clear();
        self.directions
            .extend(model.segments().iter().map(|s| s.direction));
    }

    /// Advance every bounded joint one step.
    ///
    /// The limit test uses the projected angle before the direction flips,
    /// and the projected angle is stored either way, so a joint can sit one
    /// step past its limit for a single tick before coming back. Fails
    /// without touching the pose if it was sized for another model.
    pub fn tick(&mut self, model: &Model, pose: &mut Pose) -> Result<()> {
        pose.check_model(model)?;
        self.step(model, pose);
        Ok(())
    }

    /// [`PoseOscillator::tick`] for a pose already known to match `model`
    pub(crate) fn step(&mut self, model: &Model, pose: &mut Pose) {
        for (index, segment) in model.segments().iter().enumerate() {
            if !segment.is_bounded() {
                continue;
            }
            let (Some(angle), Some(direction)) =
                (pose.angle_mut(index), self.directions.get_mut(index))
            else {
                continue;
            };

            let next = *angle + self.config.step_degrees * direction.sign();
            if next > segment.angle_max || next < segment.angle_min {
                *direction = direction.flipped();
                trace!(
                    "Segment {} reached {} outside [{}, {}], now {:?}",
                    index, next, segment.angle_min, segment.angle_max, direction
                );
            }
            *angle = next;
        }
    }
}
