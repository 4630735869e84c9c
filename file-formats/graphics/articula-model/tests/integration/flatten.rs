use articula_model::flatten::BOX_TRIANGLE_INDICES;
use articula_model::{Model, RenderBuffers, Segment, SurfaceMode, shapes};
use glam::Vec3;
use pretty_assertions::assert_eq;

#[test]
fn test_single_quad_flattens_in_face_order() {
    let pool = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let segment = Segment::new(vec![[0, 1, 2, 3]], vec![[0.5, 0.5, 0.5, 1.0]]);
    let model = Model::new(pool, vec![segment], 0, SurfaceMode::default()).unwrap();

    let buffers = RenderBuffers::from_model(&model);
    let flat = buffers.segment(0).unwrap();
    assert_eq!(
        flat.positions,
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(flat.face_colors.len(), 1);
}

#[test]
fn test_person_buffers_match_box_layout() {
    let model = shapes::person().unwrap();
    let buffers = RenderBuffers::from_model(&model);

    assert_eq!(buffers.segments.len(), model.segment_count());
    for flat in &buffers.segments {
        assert_eq!(flat.vertex_count(), 24);
        assert_eq!(flat.positions.len(), 72);
        assert_eq!(flat.face_colors.len(), 6);
        assert_eq!(flat.vertex_colors().len(), 96);
        assert_eq!(flat.texture_coords().len(), 48);
    }
    assert_eq!(buffers.total_vertex_count(), 240);

    let max_index = usize::from(BOX_TRIANGLE_INDICES.iter().copied().max().unwrap());
    assert!(max_index < buffers.segments[0].vertex_count());
}

#[test]
fn test_box_faces_point_outwards() {
    let model = shapes::person().unwrap();
    let buffers = RenderBuffers::from_model(&model);
    let normals = buffers.segments[0].face_normals();

    // Front face (first 4 vertices) faces +Z, top face (vertices 8..12) faces +Y
    assert!(Vec3::from_slice(&normals[0..3]).abs_diff_eq(Vec3::Z, 1e-6));
    assert!(Vec3::from_slice(&normals[24..27]).abs_diff_eq(Vec3::Y, 1e-6));
}

#[test]
fn test_flattened_positions_come_from_pool() {
    let model = shapes::dog().unwrap();
    let buffers = RenderBuffers::from_model(&model);

    for (segment, flat) in model.segments().iter().zip(&buffers.segments) {
        let mut expected = Vec::new();
        for face in &segment.topology {
            for &index in face {
                expected.extend_from_slice(&model.vertices()[index].to_array());
            }
        }
        assert_eq!(flat.positions, expected);
        assert_eq!(flat.face_colors, segment.colors);
    }
}
