//! Forward kinematics over the segment tree
//!
//! Each segment gets a local pivot transform `T(joint) · R(axis, angle) ·
//! T(-joint)`, which rotates its mesh about the joint point and maps it into
//! the parent's frame. World transforms are composed by a pre-order walk
//! over an explicit stack of `(segment, parent frame)` entries:
//!
//! 1. pop a segment together with the frame saved for it
//! 2. `world = frame · local[segment]`, record and emit it
//! 3. push its sibling with the same saved frame
//! 4. push its first child with `world` as the frame, so the child subtree
//!    is finished before the sibling is popped
//!
//! A sibling always gets its parent's frame back, never the frame of the
//! segment before it. The stack lives on the heap, so tree depth is bounded
//! only by the segment count.

use glam::{Mat4, Vec3};
use log::trace;

use crate::animation::pose::Pose;
use crate::common::{RotationAxis, SegmentIndex};
use crate::error::Result;
use crate::model::Model;

/// Local pivot transform for a joint at `joint` rotated by `radians`
pub fn pivot_transform(joint: Vec3, axis: RotationAxis, radians: f32) -> Mat4 {
    Mat4::from_translation(joint) * axis.rotation(radians) * Mat4::from_translation(-joint)
}

/// Reusable buffers for the kinematics pass
#[derive(Debug, Clone, Default)]
pub struct KinematicsEngine {
    locals: Vec<Mat4>,
    world: Vec<Mat4>,
    pending: Vec<(SegmentIndex, Mat4)>,
}

impl KinematicsEngine {
    pub fn new(segment_count: usize) -> Self {
        Self {
            locals: vec![Mat4::IDENTITY; segment_count],
            world: vec![Mat4::IDENTITY; segment_count],
            pending: Vec::new(),
        }
    }

    /// Recompute every world transform for `pose`
    pub fn compute(&mut self, model: &Model, pose: &Pose) -> Result<&[Mat4]> {
        self.compute_with(model, pose, Mat4::IDENTITY, |_, _| {})
    }

    /// Recompute world transforms starting from `base` (the root's parent
    /// frame), calling `emit` for each segment in traversal order as soon as
    /// its transform is known.
    ///
    /// Fails if `pose` was sized for a different model.
    pub fn compute_with<F>(
        &mut self,
        model: &Model,
        pose: &Pose,
        base: Mat4,
        emit: F,
    ) -> Result<&[Mat4]>
    where
        F: FnMut(SegmentIndex, &Mat4),
    {
        pose.check_model(model)?;
        Ok(self.compose(model, pose, base, emit))
    }

    /// The kinematics pass for a pose already known to match `model`
    pub(crate) fn compose<F>(
        &mut self,
        model: &Model,
        pose: &Pose,
        base: Mat4,
        mut emit: F,
    ) -> &[Mat4]
    where
        F: FnMut(SegmentIndex, &Mat4),
    {
        let segments = model.segments();
        self.locals.clear();
        self.locals.extend(segments.iter().enumerate().map(|(i, s)| {
            let radians = pose.radians(i).unwrap_or(0.0);
            pivot_transform(s.joint, s.rotation_axis, radians)
        }));
        self.world.clear();
        self.world.resize(segments.len(), Mat4::IDENTITY);

        self.pending.clear();
        self.pending.push((model.root(), base));
        while let Some((index, frame)) = self.pending.pop() {
            let world = frame * self.locals[index];
            self.world[index] = world;
            trace!("Visit segment {}", index);
            emit(index, &world);

            let segment = &segments[index];
            if let Some(sibling) = segment.sibling {
                self.pending.push((sibling, frame));
            }
            if let Some(child) = segment.child {
                self.pending.push((child, world));
            }
        }

        &self.world
    }

    pub fn world_transforms(&self) -> &[Mat4] {
        &self.world
    }

    pub fn world_transform(&self, index: SegmentIndex) -> Option<Mat4> {
        self.world.get(index).copied()
    }

    pub fn local_transforms(&self) -> &[Mat4] {
        &self.locals
    }
}
