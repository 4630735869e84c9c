//! Tree invariants that every accepted model satisfies

use std::collections::HashSet;

use articula_model::{Articulation, Model, pivot_transform, shapes};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn reachable(model: &Model) -> Vec<usize> {
    let mut seen = Vec::new();
    let mut stack = vec![model.root()];
    while let Some(index) = stack.pop() {
        seen.push(index);
        let segment = model.segment(index).unwrap();
        if let Some(sibling) = segment.sibling {
            stack.push(sibling);
        }
        if let Some(child) = segment.child {
            stack.push(child);
        }
    }
    seen
}

#[test_case("person" ; "person")]
#[test_case("dog" ; "dog")]
fn test_every_segment_reached_exactly_once(name: &str) {
    let model = shapes::builtin(name).unwrap();
    let seen = reachable(&model);

    assert_eq!(seen.len(), model.segment_count());
    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(unique.len(), model.segment_count());
    assert_eq!(seen, model.traversal_order().to_vec());
}

#[test_case("person" ; "person")]
#[test_case("dog" ; "dog")]
fn test_parents_agree_with_children(name: &str) {
    let model = shapes::builtin(name).unwrap();
    for index in 0..model.segment_count() {
        for child in model.children_of(index) {
            assert_eq!(model.parent_of(child), Some(index));
            assert_eq!(model.depth_of(child), model.depth_of(index) + 1);
        }
    }
    assert_eq!(model.parent_of(model.root()), None);
}

#[test]
fn test_person_world_transforms_follow_tree() {
    let mut articulation = Articulation::new(shapes::person().unwrap());
    for (index, degrees) in [(2, 40.0), (3, -30.0), (4, 70.0), (6, 25.0), (7, 10.0)] {
        articulation.set_joint_angle(index, degrees).unwrap();
    }

    let model = articulation.model().clone();
    let world = articulation.world_transforms();
    for index in model.traversal_order().iter().copied() {
        let segment = model.segment(index).unwrap();
        let angle = articulation.joint_angle(index).unwrap().to_radians();
        let local = pivot_transform(segment.joint, segment.rotation_axis, angle);
        let expected = match model.parent_of(index) {
            Some(parent) => world[parent] * local,
            None => local,
        };
        assert!(world[index].abs_diff_eq(expected, 1e-5), "segment {index}");
    }
}

#[test]
fn test_round_trip_keeps_tree() {
    let model = shapes::dog().unwrap();
    let again = Model::from_json(&model.to_json().unwrap()).unwrap();
    assert_eq!(again.traversal_order(), model.traversal_order());
    for index in 0..model.segment_count() {
        assert_eq!(again.parent_of(index), model.parent_of(index));
    }
}
