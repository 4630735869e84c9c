//! Uniform model and camera transforms applied on top of the joint tree

use glam::{Mat4, Vec3};

/// Whole-model placement: translate, rotate about X then Y then Z, scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub translation: Vec3,
    /// Per-axis rotation in degrees
    pub rotation_degrees: Vec3,
    pub scale: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl ModelTransform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

/// Camera orbiting the origin about Y at a fixed distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub radius: f32,
    /// Orbit angle in degrees
    pub rotation_degrees: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 5.0,
            rotation_degrees: 0.0,
        }
    }
}

impl OrbitCamera {
    /// Camera placement in world space
    pub fn camera_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_degrees.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, 0.0, self.radius))
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera_matrix().inverse()
    }
}

/// Model placement plus camera, the state behind the viewer's
/// translate/rotate/scale and camera controls
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub model: ModelTransform,
    pub camera: OrbitCamera,
}

impl ViewState {
    /// `view · model`, applied before every segment's world transform
    pub fn model_view_matrix(&self) -> Mat4 {
        self.camera.view_matrix() * self.model.matrix()
    }

    /// Inverse-transpose of the model-view matrix, for transforming normals
    pub fn normal_matrix(&self) -> Mat4 {
        self.model_view_matrix().inverse().transpose()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
