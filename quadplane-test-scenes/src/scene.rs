use quadplane::{
    texture_rect, Color, DrawList, Plane, ShaderId, StyleRegistry, StyleSlot, TextureHandle,
    TextureId, Vec2, Vec3,
};

use crate::expectations::VertexExpectation;

// ── Grid layout constants ────────────────────────────────────────────────────

const TILE_SIZE: u32 = 100;
const COLUMNS: u32 = 4;
const ROWS: u32 = 3;

pub const CANVAS_WIDTH: u32 = TILE_SIZE * COLUMNS;
pub const CANVAS_HEIGHT: u32 = TILE_SIZE * ROWS;

const CHECKERBOARD_TEXTURE_ID: u64 = 100;
const TINT_SHADER_ID: u64 = 7;

/// Returns the pixel center of tile number `n` (1-based).
fn tile_center(tile_number: u32) -> (f32, f32) {
    let index = tile_number - 1;
    let column = index % COLUMNS;
    let row = index / COLUMNS;
    (
        (column * TILE_SIZE + TILE_SIZE / 2) as f32,
        (row * TILE_SIZE + TILE_SIZE / 2) as f32,
    )
}

fn tile_plane(tile_number: u32) -> Plane {
    let (cx, cy) = tile_center(tile_number);
    Plane::with_geometry(Vec2::xy(60.0, 40.0), Vec2::xy(cx, cy), Color::rgb(30, 120, 220))
}

fn offset(center: (f32, f32), corners: [(f32, f32); 4]) -> [(f32, f32); 4] {
    corners.map(|(x, y)| (x + center.0, y + center.1))
}

/// Renders the main test scene into `draw_list` and returns the vertex positions every
/// quad is expected to land on.
pub fn build_main_scene(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let mut expectations: Vec<VertexExpectation> = Vec::new();

    expectations.extend(tile_01_flat(draw_list));
    expectations.extend(tile_02_quarter_turn(draw_list));
    expectations.extend(tile_03_half_turn(draw_list));
    expectations.extend(tile_04_negative_size(draw_list));
    expectations.extend(tile_05_skew_x(draw_list));
    expectations.extend(tile_06_depth_offset(draw_list));
    expectations.extend(tile_07_scale_is_reporting_only(draw_list));
    expectations.extend(tile_08_textured(draw_list));
    expectations.extend(tile_09_shader_override(draw_list));
    expectations.extend(tile_10_from_style(draw_list));
    expectations.extend(tile_11_rotation_then_reset(draw_list));
    expectations.extend(tile_12_empty(draw_list));

    expectations
}

fn tile_01_flat(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    tile_plane(1).render(draw_list);
    vec![VertexExpectation::rect(quad, tile_center(1), (60.0, 40.0), "flat")]
}

fn tile_02_quarter_turn(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(2);
    plane.set_rotation(90.0);
    plane.render(draw_list);
    vec![VertexExpectation::new(
        quad,
        offset(
            tile_center(2),
            [(20.0, -30.0), (20.0, 30.0), (-20.0, 30.0), (-20.0, -30.0)],
        ),
        "quarter_turn",
    )]
}

fn tile_03_half_turn(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(3);
    plane.set_3d_rotation_z(180.0);
    plane.render(draw_list);
    vec![VertexExpectation::new(
        quad,
        offset(
            tile_center(3),
            [(30.0, 20.0), (-30.0, 20.0), (-30.0, -20.0), (30.0, -20.0)],
        ),
        "half_turn",
    )]
}

fn tile_04_negative_size(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(4);
    plane.set_size(Vec2::xy(-60.0, -40.0));
    plane.render(draw_list);
    vec![VertexExpectation::rect(quad, tile_center(4), (60.0, 40.0), "negative_size")]
}

fn tile_05_skew_x(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(5);
    plane.set_skew_x(0.5);
    plane.render(draw_list);
    vec![VertexExpectation::new(
        quad,
        offset(
            tile_center(5),
            [(-40.0, -20.0), (20.0, -20.0), (40.0, 20.0), (-20.0, 20.0)],
        ),
        "skew_x",
    )]
}

fn tile_06_depth_offset(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(6);
    plane.set_3d_offset(Vec3::xyz(10.0, 0.0, 1.0));
    plane.render(draw_list);
    vec![VertexExpectation::new(
        quad,
        offset(
            tile_center(6),
            [(-10.0, -10.0), (20.0, -10.0), (20.0, 10.0), (-10.0, 10.0)],
        ),
        "depth_offset",
    )]
}

fn tile_07_scale_is_reporting_only(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(7);
    plane.set_scale_uniform(2.0);
    plane.render(draw_list);
    vec![VertexExpectation::rect(quad, tile_center(7), (60.0, 40.0), "scale_is_reporting_only")]
}

fn tile_08_textured(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(8);
    plane.set_texture(Some(checkerboard()));
    plane.set_texture_rect(texture_rect(0.0, 0.0, 32.0, 32.0));
    plane.render(draw_list);
    vec![VertexExpectation::rect(quad, tile_center(8), (60.0, 40.0), "textured")]
}

fn tile_09_shader_override(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(9);
    plane.set_color(Color::rgba(255, 0, 0, 128));
    plane.render_with_shader(draw_list, ShaderId(TINT_SHADER_ID));
    vec![VertexExpectation::rect(quad, tile_center(9), (60.0, 40.0), "shader_override")]
}

fn tile_10_from_style(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let mut styles = StyleRegistry::new();
    let style = styles.slot_mut(StyleSlot::Primary);
    style.size = Vec2::xy(40.0, 40.0);
    style.rotation = Vec3::xyz(0.0, 0.0, 180.0);
    style.texture = Some(checkerboard());

    let quad = draw_list.quad_count();
    let mut plane = Plane::from_style(style);
    let (cx, cy) = tile_center(10);
    plane.set_center(Vec2::xy(cx, cy));
    plane.render(draw_list);
    vec![VertexExpectation::new(
        quad,
        offset(
            tile_center(10),
            [(20.0, 20.0), (-20.0, 20.0), (-20.0, -20.0), (20.0, -20.0)],
        ),
        "from_style",
    )]
}

fn tile_11_rotation_then_reset(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let mut plane = tile_plane(11);
    plane.set_3d_rotation(Vec3::xyz(25.0, 40.0, 10.0));
    plane.set_3d_rotation_uniform(0.0);
    plane.render(draw_list);
    vec![VertexExpectation::rect(quad, tile_center(11), (60.0, 40.0), "rotation_then_reset")]
}

fn tile_12_empty(draw_list: &mut DrawList) -> Vec<VertexExpectation> {
    let quad = draw_list.quad_count();
    let (cx, cy) = tile_center(12);
    let mut plane = Plane::new();
    plane.set_center(Vec2::xy(cx, cy));
    plane.render(draw_list);
    vec![VertexExpectation::rect(quad, tile_center(12), (0.0, 0.0), "empty")]
}

fn checkerboard() -> TextureHandle {
    TextureHandle::new(TextureId(CHECKERBOARD_TEXTURE_ID), (64, 64))
}
