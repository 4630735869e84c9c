//! Runtime state for one loaded model
//!
//! [`Articulation`] owns the model together with everything derived from it:
//! flattened buffers (built once per load), the pose, the oscillator's
//! directions, the latest world transforms and the viewer transform. It is
//! the single entry point a render loop or UI drives.
//!
//! Callers serialize access themselves. A joint set through
//! [`Articulation::set_joint_angle`] while animating is simply overwritten
//! or continued by the next [`Articulation::advance`].

use std::path::Path;

use glam::Mat4;
use log::{debug, warn};

use crate::animation::{KinematicsEngine, OscillatorConfig, Pose, PoseOscillator};
use crate::common::{RotationAxis, SegmentIndex};
use crate::error::{ModelError, Result};
use crate::flatten::RenderBuffers;
use crate::model::Model;
use crate::viewer::{ModelTransform, OrbitCamera, ViewState};

/// What a pose slider needs to know about one joint
#[derive(Debug, Clone, PartialEq)]
pub struct JointInfo {
    pub index: SegmentIndex,
    pub name: String,
    pub axis: RotationAxis,
    pub angle_degrees: f32,
    pub min_degrees: f32,
    pub max_degrees: f32,
    /// Position of `angle_degrees` within the limits, 0 for a fixed joint
    pub ratio: f32,
}

/// A loaded model and its pose, ready to animate and render
#[derive(Debug, Clone)]
pub struct Articulation {
    model: Model,
    buffers: RenderBuffers,
    /// Always sized from `model`
    pose: Pose,
    oscillator: PoseOscillator,
    engine: KinematicsEngine,
    view: ViewState,
}

impl Articulation {
    pub fn new(model: Model) -> Self {
        Self::with_config(model, OscillatorConfig::default())
    }

    pub fn with_config(model: Model, config: OscillatorConfig) -> Self {
        let count = model.segment_count();
        let mut articulation = Self {
            buffers: RenderBuffers::from_model(&model),
            pose: Pose::zeroed(count),
            oscillator: PoseOscillator::new(&model, config),
            engine: KinematicsEngine::new(count),
            view: ViewState::default(),
            model,
        };
        articulation.recompute();
        articulation
    }

    /// Replace the model. Pose and oscillation state start over; the view
    /// is kept.
    pub fn load(&mut self, model: Model) {
        let config = self.oscillator.config();
        let count = model.segment_count();
        self.buffers = RenderBuffers::from_model(&model);
        self.pose = Pose::zeroed(count);
        self.oscillator = PoseOscillator::new(&model, config);
        self.engine = KinematicsEngine::new(count);
        self.model = model;
        self.recompute();
        debug!("Loaded model with {} segments", count);
    }

    /// Import a JSON document. On failure the current model and pose are
    /// left exactly as they were.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let model = Model::from_json(text)?;
        self.load(model);
        Ok(())
    }

    /// Import a JSON file, with the same all-or-nothing behaviour as
    /// [`Articulation::import_json`]
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let model = Model::load(path)?;
        self.load(model);
        Ok(())
    }

    pub fn export_json(&self) -> Result<String> {
        self.model.to_json_pretty()
    }

    /// One animation tick: step every bounded joint, then recompute
    pub fn advance(&mut self) -> &[Mat4] {
        self.oscillator.step(&self.model, &mut self.pose);
        self.recompute()
    }

    /// Recompute world transforms from the current pose
    pub fn recompute(&mut self) -> &[Mat4] {
        self.engine.compose(&self.model, &self.pose, Mat4::IDENTITY, |_, _| {})
    }

    /// Set a joint angle in degrees, clamped into its limits, and recompute.
    /// Returns the angle actually stored.
    pub fn set_joint_angle(&mut self, index: SegmentIndex, degrees: f32) -> Result<f32> {
        let segment = self.model.try_segment(index)?;
        let clamped = segment.clamp_angle(degrees);
        if clamped != degrees {
            warn!(
                "Angle {} for segment {} clamped to {} (limits [{}, {}])",
                degrees, index, clamped, segment.angle_min, segment.angle_max
            );
        }
        self.pose.set_degrees(index, clamped)?;
        self.recompute();
        Ok(clamped)
    }

    /// Set a joint from a slider ratio in `[0, 1]`
    pub fn set_joint_ratio(&mut self, index: SegmentIndex, ratio: f32) -> Result<f32> {
        let degrees = self.model.try_segment(index)?.angle_from_ratio(ratio);
        self.set_joint_angle(index, degrees)
    }

    pub fn set_joint_angle_by_name(&mut self, name: &str, degrees: f32) -> Result<f32> {
        let index = self
            .model
            .find_segment(name)
            .ok_or_else(|| ModelError::UnknownSegment(name.to_string()))?;
        self.set_joint_angle(index, degrees)
    }

    pub fn joint_angle(&self, index: SegmentIndex) -> Option<f32> {
        self.pose.degrees(index)
    }

    /// Slider data for every segment, in segment order
    pub fn joints(&self) -> Vec<JointInfo> {
        self.model
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let angle = self.pose.degrees(index).unwrap_or(0.0);
                JointInfo {
                    index,
                    name: segment.display_name(index),
                    axis: segment.rotation_axis,
                    angle_degrees: angle,
                    min_degrees: segment.angle_min,
                    max_degrees: segment.angle_max,
                    ratio: segment.ratio_for_angle(angle),
                }
            })
            .collect()
    }

    /// Zero every joint, restore oscillation directions and the default
    /// view, then recompute
    pub fn reset(&mut self) {
        self.pose.reset();
        self.oscillator.reset(&self.model);
        self.view.reset();
        self.recompute();
        debug!("Reset pose and view");
    }

    pub fn set_camera_pose(&mut self, radius: f32, rotation_degrees: f32) {
        self.view.camera = OrbitCamera {
            radius,
            rotation_degrees,
        };
    }

    pub fn set_model_transform(&mut self, transform: ModelTransform) {
        self.view.model = transform;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// World transforms from the last recompute
    pub fn world_transforms(&self) -> &[Mat4] {
        self.engine.world_transforms()
    }

    /// `model_view · world` for every segment
    pub fn presentation_transforms(&self) -> Vec<Mat4> {
        let model_view = self.view.model_view_matrix();
        self.engine
            .world_transforms()
            .iter()
            .map(|world| model_view * *world)
            .collect()
    }

    pub fn buffers(&self) -> &RenderBuffers {
        &self.buffers
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn oscillator(&self) -> &PoseOscillator {
        &self.oscillator
    }
}
