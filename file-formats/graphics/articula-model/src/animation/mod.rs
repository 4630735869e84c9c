//! Pose state, forward kinematics and idle oscillation
//!
//! A [`Pose`] holds one angle per segment. [`KinematicsEngine`] turns a
//! model and a pose into one world transform per segment, and
//! [`PoseOscillator`] steps the pose between joint limits for idle
//! animation.
//!
//! ```rust,ignore
//! use articula_model::animation::{KinematicsEngine, OscillatorConfig, Pose, PoseOscillator};
//!
//! let model = articula_model::shapes::person()?;
//! let mut pose = Pose::zeroed(model.segment_count());
//! let mut oscillator = PoseOscillator::new(&model, OscillatorConfig::default());
//! let mut engine = KinematicsEngine::new(model.segment_count());
//!
//! oscillator.tick(&model, &mut pose)?;
//! let world = engine.compute(&model, &pose)?;
//! ```

pub mod kinematics;
pub mod oscillator;
pub mod pose;

pub use kinematics::{KinematicsEngine, pivot_transform};
pub use oscillator::{OscillatorConfig, PoseOscillator};
pub use pose::Pose;
