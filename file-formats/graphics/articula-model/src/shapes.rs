//! Built-in articulated shapes
//!
//! Every segment is an axis-aligned box of 8 pool vertices, laid out by
//! [`box_vertices`], with the 6 faces of [`box_faces`]. Segments own
//! consecutive vertex runs, so segment `i` starts at pool index `8 * i`.

use glam::Vec3;

use crate::common::{BOX_FACE_COUNT, Face, OscillationDirection, Rgba, RotationAxis, SurfaceMode};
use crate::error::{ModelError, Result};
use crate::model::Model;
use crate::segment::Segment;

/// Names accepted by [`builtin`]
pub const BUILTIN_SHAPES: &[&str] = &["person", "dog"];

const SKIN: Rgba = [0.93, 0.76, 0.62, 1.0];
const SHIRT: Rgba = [0.20, 0.45, 0.80, 1.0];
const SLEEVE: Rgba = [0.25, 0.55, 0.85, 1.0];
const TROUSERS: Rgba = [0.25, 0.25, 0.30, 1.0];
const SHOES: Rgba = [0.45, 0.28, 0.15, 1.0];
const FUR: Rgba = [0.72, 0.52, 0.30, 1.0];
const FUR_DARK: Rgba = [0.55, 0.38, 0.22, 1.0];
const FUR_LIGHT: Rgba = [0.85, 0.70, 0.50, 1.0];

/// Eight corners of an axis-aligned box.
///
/// Order: bottom-left-front, bottom-right-front, top-right-front,
/// top-left-front, then the same four on the back plane.
pub fn box_vertices(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    front: f32,
    back: f32,
) -> [Vec3; 8] {
    [
        Vec3::new(left, bottom, front),
        Vec3::new(right, bottom, front),
        Vec3::new(right, top, front),
        Vec3::new(left, top, front),
        Vec3::new(left, bottom, back),
        Vec3::new(right, bottom, back),
        Vec3::new(right, top, back),
        Vec3::new(left, top, back),
    ]
}

/// Front, back, top, bottom, right and left faces of a box whose
/// [`box_vertices`] start at pool index `base`
pub fn box_faces(base: usize) -> [Face; BOX_FACE_COUNT] {
    let o = base;
    [
        [o, o + 1, o + 2, o + 3],
        [o + 4, o + 5, o + 6, o + 7],
        [o + 3, o + 2, o + 6, o + 7],
        [o, o + 1, o + 5, o + 4],
        [o + 1, o + 5, o + 6, o + 2],
        [o, o + 4, o + 7, o + 3],
    ]
}

/// Box hanging from its top-left-back corner
fn hanging_box(corner: Vec3, length: f32, height: f32, width: f32) -> [Vec3; 8] {
    box_vertices(
        corner.x,
        corner.x + length,
        corner.y,
        corner.y - height,
        corner.z + width,
        corner.z,
    )
}

struct Part {
    name: &'static str,
    corners: [Vec3; 8],
    color: Rgba,
    joint: Vec3,
    axis: RotationAxis,
    limits: (f32, f32),
    direction: OscillationDirection,
    sibling: Option<usize>,
    child: Option<usize>,
}

fn assemble(parts: Vec<Part>, surface_mode: SurfaceMode) -> Result<Model> {
    let mut vertices = Vec::with_capacity(parts.len() * 8);
    let mut segments = Vec::with_capacity(parts.len());

    for part in parts {
        let faces = box_faces(vertices.len()).to_vec();
        vertices.extend_from_slice(&part.corners);
        segments.push(
            Segment::new(faces, vec![part.color; BOX_FACE_COUNT])
                .with_name(part.name)
                .with_joint(part.joint, part.axis, part.limits.0, part.limits.1)
                .with_direction(part.direction)
                .with_links(part.sibling, part.child),
        );
    }

    Model::new(vertices, segments, 0, surface_mode)
}

/// Humanoid: body root with head, arms (each with a hand) and legs (each
/// with a foot). Arms and legs swing about X, the head turns about Y.
pub fn person() -> Result<Model> {
    use OscillationDirection::{Forward, Reverse};

    let (head_l, head_w, head_h) = (0.5, 0.5, 0.5);
    let (body_l, body_w, body_h) = (1.0, 1.0, 1.4);
    let (leg_l, leg_w, leg_h) = (0.3, 0.3, 0.8);
    let (foot_l, foot_w, foot_h) = (0.3, 0.3, 0.4);
    let (arm_l, arm_w, arm_h) = (0.3, 0.3, 1.2);
    let (hand_l, hand_w, hand_h) = (0.3, 0.3, 0.5);

    let body = Vec3::new(-0.5 * body_l, 0.5 * body_h, -0.5 * body_w);
    let head = Vec3::new(-0.5 * head_l, 0.5 * body_h + head_h, -0.5 * head_w);
    let right_arm = Vec3::new(body.x + body_w, body.y, -0.5 * arm_w);
    let right_hand = Vec3::new(right_arm.x, right_arm.y - arm_h, right_arm.z);
    let left_arm = Vec3::new(right_arm.x - body_l - arm_l, right_arm.y, right_arm.z);
    let left_hand = Vec3::new(left_arm.x, left_arm.y - arm_h, left_arm.z);
    let right_leg = Vec3::new(body.x + body_l - leg_l, body.y - body_h, -0.5 * leg_w);
    let right_foot = Vec3::new(right_leg.x, right_leg.y - leg_h, right_leg.z);
    let left_leg = Vec3::new(body.x, body.y - body_h, -0.5 * leg_w);
    let left_foot = Vec3::new(left_leg.x, left_leg.y - leg_h, left_leg.z);

    let hand_joint_y = -arm_h + hand_h;
    let foot_joint_y = -leg_h - 0.5 * body_h;

    let parts = vec![
        Part {
            name: "Body",
            corners: hanging_box(body, body_l, body_h, body_w),
            color: SHIRT,
            joint: Vec3::ZERO,
            axis: RotationAxis::None,
            limits: (180.0, 180.0),
            direction: Forward,
            sibling: None,
            child: Some(1),
        },
        Part {
            name: "Head",
            corners: hanging_box(head, head_l, head_h, head_w),
            color: SKIN,
            joint: Vec3::new(0.0, 0.5 * body_h, 0.0),
            axis: RotationAxis::Y,
            limits: (-45.0, 45.0),
            direction: Forward,
            sibling: Some(2),
            child: None,
        },
        Part {
            name: "Right Arm",
            corners: hanging_box(right_arm, arm_l, arm_h, arm_w),
            color: SLEEVE,
            joint: Vec3::new(0.5 * body_l, 0.5 * body_h - 0.5 * arm_w, 0.0),
            axis: RotationAxis::X,
            limits: (-90.0, 90.0),
            direction: Forward,
            sibling: Some(4),
            child: Some(3),
        },
        Part {
            name: "Right Hand",
            corners: hanging_box(right_hand, hand_l, hand_h, hand_w),
            color: SKIN,
            joint: Vec3::new(0.5 * arm_l, hand_joint_y, 0.0),
            axis: RotationAxis::X,
            limits: (-40.0, 40.0),
            direction: Forward,
            sibling: None,
            child: None,
        },
        Part {
            name: "Left Arm",
            corners: hanging_box(left_arm, arm_l, arm_h, arm_w),
            color: SLEEVE,
            joint: Vec3::new(0.5 * body_l - 0.5 * arm_l, 0.5 * body_h - 0.5 * arm_w, 0.0),
            axis: RotationAxis::X,
            limits: (-90.0, 90.0),
            direction: Reverse,
            sibling: Some(6),
            child: Some(5),
        },
        Part {
            name: "Left Hand",
            corners: hanging_box(left_hand, hand_l, hand_h, hand_w),
            color: SKIN,
            joint: Vec3::new(-0.5 * arm_l, hand_joint_y, 0.0),
            axis: RotationAxis::X,
            limits: (-40.0, 40.0),
            direction: Reverse,
            sibling: None,
            child: None,
        },
        Part {
            name: "Right Leg",
            corners: hanging_box(right_leg, leg_l, leg_h, leg_w),
            color: TROUSERS,
            joint: Vec3::new(0.5 * body_l - 0.5 * leg_l, -0.5 * body_h, 0.0),
            axis: RotationAxis::X,
            limits: (-60.0, 60.0),
            direction: Reverse,
            sibling: Some(8),
            child: Some(7),
        },
        Part {
            name: "Right Foot",
            corners: hanging_box(right_foot, foot_l, foot_h, foot_w),
            color: SHOES,
            joint: Vec3::new(0.0, foot_joint_y, 0.0),
            axis: RotationAxis::X,
            limits: (-40.0, 40.0),
            direction: Reverse,
            sibling: None,
            child: None,
        },
        Part {
            name: "Left Leg",
            corners: hanging_box(left_leg, leg_w, leg_h, leg_w),
            color: TROUSERS,
            joint: Vec3::new(-(0.5 * body_l - 0.5 * leg_l), -0.5 * body_h, 0.0),
            axis: RotationAxis::X,
            limits: (-60.0, 60.0),
            direction: Forward,
            sibling: None,
            child: Some(9),
        },
        Part {
            name: "Left Foot",
            corners: hanging_box(left_foot, foot_l, foot_h, foot_w),
            color: SHOES,
            joint: Vec3::new(0.0, foot_joint_y, 0.0),
            axis: RotationAxis::X,
            limits: (-40.0, 40.0),
            direction: Forward,
            sibling: None,
            child: None,
        },
    ];

    assemble(parts, SurfaceMode::Environment)
}

/// Quadruped: body root with four legs and a neck carrying the head
pub fn dog() -> Result<Model> {
    use OscillationDirection::{Forward, Reverse};

    let (body_w, body_h, body_l) = (1.2, 0.3, 0.7);
    let (leg_l, leg_w, leg_h) = (0.3, 0.3, 0.8);
    let (neck_h, neck_w, neck_l) = (1.2, 0.3, 0.3);
    let (head_w, head_l, head_h) = (0.8, 0.3, 0.3);

    let body = Vec3::new(-0.5 * body_l, 0.5 * body_h, -0.5 * body_w);
    let neck = Vec3::new(-0.5 * neck_l, -0.5 * body_h, 0.5 * body_w + 0.5 * neck_w);
    let head = Vec3::new(-0.5 * head_l, neck.y + neck_h, neck.z + neck_w);
    let leg_top = body.y - body_h;
    let leg_bottom = leg_top - leg_h;

    let (near_x, far_x) = (body.x, body.x + body_l);
    let (back_z, front_z) = (body.z, body.z + body_w);

    let leg = |name, left: f32, right: f32, front: f32, back: f32, joint, direction, sibling| Part {
        name,
        corners: box_vertices(left, right, leg_top, leg_bottom, front, back),
        color: FUR_DARK,
        joint,
        axis: RotationAxis::X,
        limits: (-45.0, 45.0),
        direction,
        sibling,
        child: None,
    };

    let leg_x = 0.5 * body_l - 0.5 * leg_l;
    let leg_z = 0.5 * body_w - 0.5 * leg_w;
    let leg_y = -0.5 * body_h;

    let parts = vec![
        Part {
            name: "Body",
            corners: box_vertices(near_x, far_x, body.y, body.y - body_h, front_z, back_z),
            color: FUR,
            joint: Vec3::ZERO,
            axis: RotationAxis::None,
            limits: (-180.0, 180.0),
            direction: Reverse,
            sibling: None,
            child: Some(1),
        },
        leg(
            "Left Back Leg",
            near_x,
            near_x + leg_l,
            back_z + leg_w,
            back_z,
            Vec3::new(-leg_x, leg_y, -leg_z),
            Reverse,
            Some(2),
        ),
        leg(
            "Left Front Leg",
            near_x,
            near_x + leg_l,
            front_z,
            front_z - leg_w,
            Vec3::new(-leg_x, leg_y, leg_z),
            Forward,
            Some(3),
        ),
        leg(
            "Right Front Leg",
            far_x - leg_l,
            far_x,
            front_z,
            front_z - leg_w,
            Vec3::new(leg_x, leg_y, leg_z),
            Reverse,
            Some(4),
        ),
        leg(
            "Right Back Leg",
            far_x - leg_l,
            far_x,
            back_z + leg_w,
            back_z,
            Vec3::new(leg_x, leg_y, -leg_z),
            Forward,
            Some(5),
        ),
        Part {
            name: "Neck",
            corners: box_vertices(
                neck.x,
                neck.x + neck_l,
                neck.y + neck_h,
                neck.y,
                neck.z,
                neck.z - neck_w,
            ),
            color: FUR,
            joint: Vec3::new(0.0, 0.0, 0.5 * body_w + 0.5 * neck_w),
            axis: RotationAxis::X,
            limits: (-45.0, 45.0),
            direction: Forward,
            sibling: None,
            child: Some(6),
        },
        Part {
            name: "Head",
            corners: box_vertices(
                head.x,
                head.x + head_l,
                head.y,
                head.y - head_h,
                head.z,
                head.z - head_w,
            ),
            color: FUR_LIGHT,
            joint: Vec3::new(0.0, neck_h - 0.5 * head_h, 0.5 * head_w),
            axis: RotationAxis::X,
            limits: (-45.0, 45.0),
            direction: Forward,
            sibling: None,
            child: None,
        },
    ];

    assemble(parts, SurfaceMode::Environment)
}

/// Look up a built-in shape by name (case-insensitive)
pub fn builtin(name: &str) -> Result<Model> {
    match name.to_ascii_lowercase().as_str() {
        "person" => person(),
        "dog" => dog(),
        _ => Err(ModelError::UnknownShape(name.to_string())),
    }
}
