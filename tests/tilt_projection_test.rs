use quadplane::{Color, Plane, Vec2, Vec3, PROJECTION_EPSILON};

/// Expected corner for a unit-focal weak perspective after a rotation around X.
fn tilted_corner(x: f32, y: f32, angle_deg: f32) -> (f32, f32) {
    let angle = angle_deg.to_radians();
    let y_rotated = y * angle.cos();
    let z_rotated = y * angle.sin();
    let depth = f32::max(z_rotated + 1.0, PROJECTION_EPSILON);
    (x / depth, y_rotated / depth)
}

#[test]
fn star_wars_tilt() {
    // A unit square tilted back 45° around X. The top edge comes towards the viewer
    // (negative z) and is drawn wider; the bottom edge recedes and narrows.
    let mut plane = Plane::with_geometry(Vec2::xy(1.0, 1.0), Vec2::zero(), Color::WHITE);
    plane.set_3d_rotation_x(45.0);

    let local_corners = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
    let epsilon = 0.0001;

    for (i, ((x, y), vertex)) in local_corners.iter().zip(plane.vertices()).enumerate() {
        let expected = tilted_corner(*x, *y, 45.0);
        let actual = vertex.position;
        assert!(
            (actual.x() - expected.0).abs() < epsilon && (actual.y() - expected.1).abs() < epsilon,
            "corner {i}: expected {expected:?}, got {actual}",
        );
    }

    let top_width = plane.vertices()[1].position.x() - plane.vertices()[0].position.x();
    let bottom_width = plane.vertices()[2].position.x() - plane.vertices()[3].position.x();
    assert!(top_width > bottom_width);
}

#[test]
fn winding_order_survives_any_pose() {
    // Whatever the pose, vertex i always comes from local corner i. Pushing the plane far
    // along +z scales it down uniformly around the center, which keeps the sign pattern
    // of each corner recognisable for moderate angles.
    let poses = [
        Vec3::zero(),
        Vec3::xyz(0.0, 0.0, 15.0),
        Vec3::xyz(0.0, 0.0, -15.0),
        Vec3::xyz(20.0, 0.0, 0.0),
        Vec3::xyz(-20.0, 0.0, 0.0),
        Vec3::xyz(0.0, 25.0, 0.0),
        Vec3::xyz(0.0, -25.0, 0.0),
        Vec3::xyz(10.0, 10.0, 10.0),
        Vec3::xyz(30.0, -20.0, 5.0),
    ];
    let expected_x = [false, true, true, false];
    let expected_y = [false, false, true, true];

    for pose in poses {
        let mut plane = Plane::with_geometry(Vec2::xy(4.0, 2.0), Vec2::zero(), Color::WHITE);
        plane.set_3d_offset_z(100.0);
        plane.set_skew_uniform(0.1);
        plane.set_3d_rotation(pose);

        for (i, vertex) in plane.vertices().iter().enumerate() {
            let position = vertex.position;
            assert_eq!(position.x() > 0.0, expected_x[i], "pose {pose}: vertex {i} at {position}");
            assert_eq!(position.y() > 0.0, expected_y[i], "pose {pose}: vertex {i} at {position}");
        }
    }
}

#[test]
fn offset_is_applied_after_rotation() {
    // Rotating first means the offset is not rotated with the quad.
    let mut plane = Plane::with_geometry(Vec2::xy(2.0, 2.0), Vec2::zero(), Color::WHITE);
    plane.set_3d_offset(Vec3::xyz(10.0, 0.0, 0.0));
    plane.set_rotation(90.0);

    let centroid = plane
        .vertices()
        .iter()
        .fold(Vec2::zero(), |sum, vertex| sum + vertex.position)
        * 0.25;
    assert!((centroid.x() - 10.0).abs() < 1e-4, "centroid {centroid}");
    assert!(centroid.y().abs() < 1e-4, "centroid {centroid}");
}

#[test]
fn plane_behind_the_viewer_stays_finite() {
    let mut plane = Plane::with_geometry(Vec2::xy(10.0, 10.0), Vec2::zero(), Color::WHITE);
    plane.set_3d_rotation_y(89.0);
    plane.set_3d_offset_z(-50.0);
    for vertex in plane.vertices() {
        assert!(vertex.position.x().is_finite());
        assert!(vertex.position.y().is_finite());
    }
}
