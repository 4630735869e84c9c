//! Flatten a model into per-segment vertex and colour arrays
//!
//! Output order mirrors segment order and, within a segment, face order.
//! Renderers that draw every segment as a 24-vertex box with
//! [`BOX_TRIANGLE_INDICES`] depend on that layout.

use glam::Vec3;

use crate::common::{FACE_VERTEX_COUNT, Rgba};
use crate::model::Model;

/// Triangle indices for a 6-face, 24-vertex box (two triangles per face)
pub const BOX_TRIANGLE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    8, 9, 10, 8, 10, 11, // top
    12, 13, 14, 12, 14, 15, // bottom
    16, 17, 18, 16, 18, 19, // right
    20, 21, 22, 20, 22, 23, // left
];

/// Texture coordinates for one quad face, in face vertex order
pub const FACE_TEXTURE_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Flattened geometry of a single segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentBuffers {
    /// `x, y, z` per face vertex: 12 floats per face
    pub positions: Vec<f32>,
    /// One colour per face
    pub face_colors: Vec<Rgba>,
}

impl SegmentBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.face_colors.len()
    }

    /// Colour per vertex (`r, g, b, a` repeated for each of a face's 4 vertices)
    pub fn vertex_colors(&self) -> Vec<f32> {
        let mut colors = Vec::with_capacity(self.face_colors.len() * FACE_VERTEX_COUNT * 4);
        for color in &self.face_colors {
            for _ in 0..FACE_VERTEX_COUNT {
                colors.extend_from_slice(color);
            }
        }
        colors
    }

    /// Flat normal per vertex, from the first three corners of each face
    pub fn face_normals(&self) -> Vec<f32> {
        let mut normals = Vec::with_capacity(self.positions.len());
        for face in self.positions.chunks_exact(FACE_VERTEX_COUNT * 3) {
            let a = Vec3::from_slice(&face[0..3]);
            let b = Vec3::from_slice(&face[3..6]);
            let c = Vec3::from_slice(&face[6..9]);
            let normal = (b - a).cross(c - a).normalize_or_zero();
            for _ in 0..FACE_VERTEX_COUNT {
                normals.extend_from_slice(&normal.to_array());
            }
        }
        normals
    }

    /// Texture coordinates per vertex, the same unit square on every face
    pub fn texture_coords(&self) -> Vec<f32> {
        let mut coords = Vec::with_capacity(self.face_count() * FACE_VERTEX_COUNT * 2);
        for _ in 0..self.face_count() {
            for uv in FACE_TEXTURE_COORDS {
                coords.extend_from_slice(&uv);
            }
        }
        coords
    }
}

/// Flattened geometry for a whole model, one entry per segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderBuffers {
    pub segments: Vec<SegmentBuffers>,
}

impl RenderBuffers {
    /// Resolve every face of every segment through the vertex pool
    pub fn from_model(model: &Model) -> Self {
        let pool = model.vertices();
        let segments = model
            .segments()
            .iter()
            .map(|segment| {
                let mut positions =
                    Vec::with_capacity(segment.topology.len() * FACE_VERTEX_COUNT * 3);
                for face in &segment.topology {
                    for &vertex in face {
                        positions.extend_from_slice(&pool[vertex].to_array());
                    }
                }
                SegmentBuffers {
                    positions,
                    face_colors: segment.colors.clone(),
                }
            })
            .collect();

        Self { segments }
    }

    pub fn segment(&self, index: usize) -> Option<&SegmentBuffers> {
        self.segments.get(index)
    }

    pub fn total_vertex_count(&self) -> usize {
        self.segments.iter().map(SegmentBuffers::vertex_count).sum()
    }
}
