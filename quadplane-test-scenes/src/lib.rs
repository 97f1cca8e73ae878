pub mod expectations;
pub mod scene;

pub use expectations::{check_vertices, VertexExpectation};
pub use scene::{build_main_scene, CANVAS_HEIGHT, CANVAS_WIDTH};
