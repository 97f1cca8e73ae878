/// Regression tests for the plane transform pipeline.
///
/// These tests render scenes into a `DrawList`, then validate the recorded vertex
/// positions against expected corners.
///
/// Run with:   cargo test --test scene_regression
use quadplane::{Color, DrawList, Plane, ShaderId, TextureId, Vec2};
use quadplane_test_scenes::{build_main_scene, check_vertices, VertexExpectation};

/// Main regression test: renders all 12 tiles and validates vertex expectations.
#[test]
fn main_scene_vertex_expectations() {
    let mut draw_list = DrawList::new();
    let expectations = build_main_scene(&mut draw_list);

    assert_eq!(draw_list.quad_count(), expectations.len());

    let failures = check_vertices(&draw_list, &expectations);
    if !failures.is_empty() {
        let message = format!(
            "{} vertex expectation(s) failed:\n{}",
            failures.len(),
            failures.join("\n"),
        );
        panic!("{message}");
    }
}

/// The scene groups quads into batches by texture and shader.
#[test]
fn main_scene_batches() {
    let mut draw_list = DrawList::new();
    build_main_scene(&mut draw_list);

    let batches = draw_list.batches();
    // plain ×7, textured, shader, textured (style), plain ×2
    assert_eq!(batches.len(), 5);
    assert_eq!(batches[0].index_count, 7 * 6);
    assert_eq!(batches[1].texture, Some(TextureId(100)));
    assert_eq!(batches[2].shader, Some(ShaderId(7)));
    assert_eq!(batches[2].texture, None);
    assert_eq!(batches[3].texture, Some(TextureId(100)));
    assert_eq!(batches[4].index_count, 2 * 6);

    let total: u32 = batches.iter().map(|batch| batch.index_count).sum();
    assert_eq!(total as usize, draw_list.indices().len());
}

/// Rendering the scene twice gives identical vertex data.
#[test]
fn scene_is_deterministic() {
    let mut first = DrawList::new();
    let mut second = DrawList::new();
    build_main_scene(&mut first);
    build_main_scene(&mut second);
    assert_eq!(first.vertices(), second.vertices());
    assert_eq!(first.indices(), second.indices());
}

/// Regression test: an empty draw list should not report phantom quads.
#[test]
fn empty_draw_list() {
    let draw_list = DrawList::new();
    assert!(draw_list.is_empty());
    assert!(check_vertices(&draw_list, &[]).is_empty());

    let failures = check_vertices(
        &draw_list,
        &[VertexExpectation::rect(0, (0.0, 0.0), (1.0, 1.0), "missing")],
    );
    assert_eq!(failures.len(), 1);
}

/// End-to-end example: a 100×50 white plane at the origin, then
/// turned 180° around Z.
#[test]
fn single_plane_half_turn() {
    let mut plane = Plane::with_geometry(Vec2::xy(100.0, 50.0), Vec2::zero(), Color::WHITE);
    let mut draw_list = DrawList::new();
    plane.render(&mut draw_list);

    plane.set_3d_rotation_z(180.0);
    plane.render(&mut draw_list);

    let expectations = vec![
        VertexExpectation::rect(0, (0.0, 0.0), (100.0, 50.0), "zero_pose"),
        VertexExpectation::new(
            1,
            [(50.0, 25.0), (-50.0, 25.0), (-50.0, -25.0), (50.0, -25.0)],
            "half_turn",
        )
        .with_tolerance(0.001),
    ];

    let failures = check_vertices(&draw_list, &expectations);
    if !failures.is_empty() {
        panic!(
            "{} vertex expectation(s) failed:\n{}",
            failures.len(),
            failures.join("\n"),
        );
    }
    assert!(draw_list
        .vertices()
        .iter()
        .all(|vertex| vertex.color == [1.0, 1.0, 1.0, 1.0]));
}
