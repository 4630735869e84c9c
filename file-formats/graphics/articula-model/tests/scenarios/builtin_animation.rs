//! Idle animation on the built-in shapes
//!
//! Every joint starts at 0 and moves one step per tick in its initial
//! direction, so a forward joint reaches `angle_max` after `angle_max`
//! ticks and then bounces with at most one step of overshoot.

use articula_model::{
    Articulation, Model, OscillationDirection, OscillatorConfig, RotationAxis, Segment,
    SurfaceMode, shapes,
};
use glam::Vec3;
use test_case::test_case;

#[test_case("person" ; "person")]
#[test_case("dog" ; "dog")]
fn test_forward_joints_reach_upper_limit(name: &str) {
    let model = shapes::builtin(name).unwrap();
    let step = OscillatorConfig::default().step_degrees;

    for (index, segment) in model.segments().iter().enumerate() {
        if !segment.is_bounded() || segment.direction != OscillationDirection::Forward {
            continue;
        }

        let mut articulation = Articulation::new(model.clone());
        let ticks = segment.angle_max.round() as usize;
        for _ in 0..ticks {
            articulation.advance();
        }

        let angle = articulation.joint_angle(index).unwrap();
        assert!(
            (segment.angle_max - angle).abs() <= step,
            "{} ended at {angle} after {ticks} ticks",
            segment.display_name(index)
        );
    }
}

#[test_case("person" ; "person")]
#[test_case("dog" ; "dog")]
fn test_angles_stay_within_one_step_of_limits(name: &str) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut articulation = Articulation::new(shapes::builtin(name).unwrap());
    let step = OscillatorConfig::default().step_degrees;

    for _ in 0..1000 {
        articulation.advance();
        for joint in articulation.joints() {
            if joint.min_degrees < joint.max_degrees {
                assert!(joint.angle_degrees >= joint.min_degrees - step);
                assert!(joint.angle_degrees <= joint.max_degrees + step);
            } else {
                assert_eq!(joint.angle_degrees, 0.0);
            }
        }
    }
}

#[test]
fn test_full_range_sweep_from_rest() {
    let _ = env_logger::builder().is_test(true).try_init();
    let segment = Segment::new(vec![[0, 1, 2, 3]], vec![[1.0; 4]])
        .with_name("Hinge")
        .with_joint(Vec3::ZERO, RotationAxis::Z, 0.0, 60.0);
    let pool = vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y];
    let model = Model::new(pool, vec![segment], 0, SurfaceMode::default()).unwrap();

    let mut articulation = Articulation::new(model);
    for _ in 0..60 {
        articulation.advance();
    }
    assert_eq!(articulation.joint_angle(0), Some(60.0));
    assert_eq!(articulation.joints()[0].ratio, 1.0);

    // One step past the limit, then back
    articulation.advance();
    assert_eq!(articulation.joint_angle(0), Some(61.0));
    articulation.advance();
    assert_eq!(articulation.joint_angle(0), Some(60.0));
}

#[test]
fn test_larger_step_from_config() {
    let model = shapes::person().unwrap();
    let mut articulation =
        Articulation::with_config(model, OscillatorConfig { step_degrees: 5.0 });
    for _ in 0..9 {
        articulation.advance();
    }
    // Head: forward, limits +-45
    assert_eq!(articulation.joint_angle(1), Some(45.0));
    // Left arm: reverse, limits +-90
    assert_eq!(articulation.joint_angle(4), Some(-45.0));
}

#[test]
fn test_animation_moves_limbs_but_not_fixed_body() {
    let mut articulation = Articulation::new(shapes::person().unwrap());
    for _ in 0..30 {
        articulation.advance();
    }
    let world = articulation.world_transforms();
    assert!(world[0].abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
    assert!(!world[2].abs_diff_eq(glam::Mat4::IDENTITY, 1e-3));
}
