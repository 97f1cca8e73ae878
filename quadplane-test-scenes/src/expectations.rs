use quadplane::DrawList;

/// Corner names in quad winding order, for failure messages.
const CORNER_NAMES: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];

/// Expected screen-space positions of one recorded quad.
pub struct VertexExpectation {
    /// Index of the quad in the draw list.
    pub quad: usize,
    /// Expected positions, top-left first, clockwise.
    pub corners: [(f32, f32); 4],
    /// Absolute per-axis tolerance (default 0.01).
    pub tolerance: f32,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl VertexExpectation {
    pub fn new(quad: usize, corners: [(f32, f32); 4], label: &'static str) -> Self {
        Self {
            quad,
            corners,
            tolerance: 0.01,
            label,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Convenience: an axis-aligned rectangle of `size` around `center`.
    pub fn rect(quad: usize, center: (f32, f32), size: (f32, f32), label: &'static str) -> Self {
        let (hw, hh) = (size.0 * 0.5, size.1 * 0.5);
        Self::new(
            quad,
            [
                (center.0 - hw, center.1 - hh),
                (center.0 + hw, center.1 - hh),
                (center.0 + hw, center.1 + hh),
                (center.0 - hw, center.1 + hh),
            ],
            label,
        )
    }
}

/// Validates vertex expectations against the positions recorded in `draw_list`.
///
/// Returns a list of human-readable failure descriptions. An empty list means
/// all expectations passed.
pub fn check_vertices(draw_list: &DrawList, expectations: &[VertexExpectation]) -> Vec<String> {
    let mut failures = Vec::new();
    let vertices = draw_list.vertices();

    for expectation in expectations {
        let start = expectation.quad * 4;
        let Some(quad) = vertices.get(start..start + 4) else {
            failures.push(format!(
                "[{}] quad {} is missing (draw list has {} quads)",
                expectation.label,
                expectation.quad,
                draw_list.quad_count(),
            ));
            continue;
        };

        for ((vertex, expected), corner) in quad.iter().zip(expectation.corners).zip(CORNER_NAMES) {
            let [x, y] = vertex.position;
            let dx = (x - expected.0).abs();
            let dy = (y - expected.1).abs();
            if !(dx <= expectation.tolerance && dy <= expectation.tolerance) {
                failures.push(format!(
                    "[{}] {} expected ({}, {}) ±{} but got ({}, {})",
                    expectation.label,
                    corner,
                    expected.0,
                    expected.1,
                    expectation.tolerance,
                    x,
                    y,
                ));
            }
        }
    }

    failures
}
