//! A quad widget with a 2D/3D pose.
//!
//! A [`Plane`] turns a logical rectangle plus rotation, skew, offset and center into four
//! screen-space vertices, recomputed every time a parameter changes. Renderers consume the
//! cached vertices through the [`RenderTarget`] trait; [`DrawList`] and [`GpuQuadBuffers`]
//! take them the rest of the way to wgpu.

pub use wgpu;

mod color;
mod gpu;
mod id;
mod plane;
mod render;
mod style;
mod texture;
mod vector;
mod vertex;
mod widget;

pub use color::Color;
pub use gpu::GpuQuadBuffers;
pub use id::{ShaderId, TextureId};
pub use plane::{Plane, PlaneBuilder, PlaneVertex};
pub use render::{DrawBatch, DrawList, QuadPrimitive, RenderTarget, QUAD_INDICES};
pub use style::{Style, StyleRegistry, StyleSlot};
pub use texture::{texture_rect, TextureHandle, TextureRect};
pub use vector::{Vec2, Vec3, Vec4, Vector, VectorError, PROJECTION_EPSILON};
pub use vertex::QuadVertex;
pub use widget::{Element, ElementKind, InputState, Widget, WidgetBase};
