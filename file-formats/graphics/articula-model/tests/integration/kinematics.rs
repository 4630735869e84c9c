use articula_model::{
    KinematicsEngine, Model, Pose, RotationAxis, Segment, SurfaceMode, pivot_transform,
};
use glam::{Mat4, Vec3};
use test_case::test_case;

const EPS: f32 = 1e-5;

fn limb(axis: RotationAxis, joint: Vec3) -> Segment {
    Segment::new(vec![[0, 1, 2, 3]], vec![[1.0; 4]]).with_joint(joint, axis, -90.0, 90.0)
}

/// R with child A; B is A's sibling; C is A's child
fn branching_model() -> Model {
    let pool = vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y];
    let segments = vec![
        limb(RotationAxis::Z, Vec3::new(0.0, 0.0, 0.0)).with_links(None, Some(1)),
        limb(RotationAxis::X, Vec3::new(0.5, 1.0, 0.0)).with_links(Some(2), Some(3)),
        limb(RotationAxis::Y, Vec3::new(-0.5, 1.0, 0.0)),
        limb(RotationAxis::X, Vec3::new(0.5, 2.0, 0.0)),
    ];
    Model::new(pool, segments, 0, SurfaceMode::default()).unwrap()
}

#[test_case(RotationAxis::X ; "x axis")]
#[test_case(RotationAxis::Y ; "y axis")]
#[test_case(RotationAxis::Z ; "z axis")]
fn test_pivot_identity_at_rest_and_fixes_joint(axis: RotationAxis) {
    let joint = Vec3::new(0.25, -1.5, 0.75);
    assert!(pivot_transform(joint, axis, 0.0).abs_diff_eq(Mat4::IDENTITY, EPS));

    for degrees in [-90.0f32, -12.5, 33.0, 179.0] {
        let m = pivot_transform(joint, axis, degrees.to_radians());
        assert!(m.transform_point3(joint).abs_diff_eq(joint, EPS));
    }
}

#[test]
fn test_child_composes_and_sibling_does_not() {
    let model = branching_model();
    let mut pose = Pose::zeroed(4);
    pose.set_degrees(0, 20.0).unwrap();
    pose.set_degrees(1, 50.0).unwrap();
    pose.set_degrees(2, -35.0).unwrap();
    pose.set_degrees(3, 70.0).unwrap();

    let mut engine = KinematicsEngine::new(4);
    let world = engine.compute(&model, &pose).unwrap().to_vec();

    let pivot = |i: usize| {
        let s = model.segment(i).unwrap();
        pivot_transform(s.joint, s.rotation_axis, pose.radians(i).unwrap())
    };

    assert!(world[0].abs_diff_eq(pivot(0), EPS));
    assert!(world[1].abs_diff_eq(world[0] * pivot(1), EPS));
    assert!(world[3].abs_diff_eq(world[0] * pivot(1) * pivot(3), EPS));
    assert!(world[2].abs_diff_eq(world[0] * pivot(2), EPS));
}

#[test]
fn test_sibling_ignores_earlier_sibling_angle() {
    let model = branching_model();
    let mut engine = KinematicsEngine::new(4);

    let mut pose = Pose::zeroed(4);
    pose.set_degrees(2, 15.0).unwrap();
    let before = engine.compute(&model, &pose).unwrap()[2];

    pose.set_degrees(1, 80.0).unwrap();
    pose.set_degrees(3, -60.0).unwrap();
    let after = engine.compute(&model, &pose).unwrap()[2];

    assert!(before.abs_diff_eq(after, EPS));
}

#[test]
fn test_fixed_axis_root_is_transparent() {
    let pool = vec![Vec3::ZERO];
    let segments = vec![
        Segment::new(vec![[0, 0, 0, 0]], vec![[1.0; 4]])
            .with_joint(Vec3::new(3.0, 3.0, 3.0), RotationAxis::None, 0.0, 0.0)
            .with_links(None, Some(1)),
        limb(RotationAxis::Z, Vec3::new(1.0, 0.0, 0.0)),
    ];
    let model = Model::new(pool, segments, 0, SurfaceMode::default()).unwrap();

    let mut pose = Pose::zeroed(2);
    pose.set_degrees(0, 123.0).unwrap();
    pose.set_degrees(1, 90.0).unwrap();

    let mut engine = KinematicsEngine::new(2);
    let world = engine.compute(&model, &pose).unwrap();
    assert!(world[0].abs_diff_eq(Mat4::IDENTITY, EPS));

    // Quarter turn about Z through (1, 0, 0) takes the origin to (1, -1, 0)
    let p = world[1].transform_point3(Vec3::ZERO);
    assert!(p.abs_diff_eq(Vec3::new(1.0, -1.0, 0.0), EPS));
}

#[test]
fn test_visitor_sees_every_segment_once_in_order() {
    let model = branching_model();
    let pose = Pose::zeroed(4);
    let base = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));

    let mut seen = Vec::new();
    let mut engine = KinematicsEngine::new(4);
    let world = engine
        .compute_with(&model, &pose, base, |index, transform| {
            seen.push((index, *transform));
        })
        .unwrap()
        .to_vec();

    let order: Vec<usize> = seen.iter().map(|(i, _)| *i).collect();
    assert_eq!(order, vec![0, 1, 3, 2]);
    for (index, transform) in seen {
        assert!(transform.abs_diff_eq(world[index], EPS));
        assert!(transform.abs_diff_eq(base, EPS));
    }
}
