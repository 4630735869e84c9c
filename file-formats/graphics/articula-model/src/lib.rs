//! Articulated box-segment models and forward kinematics
//!
//! This crate models a jointed rigid body (a humanoid, a quadruped) built
//! from box-shaped segments. Segments live in a flat list and form a tree
//! through first-child / next-sibling indices; each joint rotates about one
//! axis between inclusive angle limits.
//!
//! ## Features
//!
//! - Validated, index-based segment trees (no cycles, no orphans)
//! - Flattening into per-segment vertex and colour arrays for a renderer
//! - Forward kinematics: pivot transforms composed in pre-order
//! - Idle animation that bounces every joint between its limits
//! - JSON import/export compatible with the browser viewer's documents
//! - Built-in person and dog shapes
//!
//! ## Example
//!
//! ```no_run
//! use articula_model::{Articulation, shapes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut articulation = Articulation::new(shapes::person()?);
//!
//! // Pose the right arm, then let the idle animation take over
//! articulation.set_joint_angle_by_name("Right Arm", 45.0)?;
//! for _ in 0..90 {
//!     articulation.advance();
//! }
//!
//! for (joint, world) in articulation.joints().iter().zip(articulation.world_transforms()) {
//!     println!("{}: {:.1} deg, origin {}", joint.name, joint.angle_degrees, world.w_axis);
//! }
//!
//! articulation.model().save("person.json")?;
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod articulation;
pub mod common;
pub mod document;
pub mod error;
pub mod flatten;
pub mod model;
pub mod segment;
pub mod shapes;
pub mod viewer;

// Re-export common types
pub use animation::{KinematicsEngine, OscillatorConfig, Pose, PoseOscillator, pivot_transform};
pub use articulation::{Articulation, JointInfo};
pub use common::{Face, OscillationDirection, Rgba, RotationAxis, SegmentIndex, SurfaceMode};
pub use document::{ModelDocument, SegmentDocument};
pub use error::{ErrorCategory, LinkKind, ModelError, Result};
pub use flatten::{RenderBuffers, SegmentBuffers};
pub use model::Model;
pub use segment::Segment;
pub use viewer::{ModelTransform, OrbitCamera, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
