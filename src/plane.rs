//! The `plane` module holds [`Plane`], a four-vertex quad whose screen-space corners are
//! derived from a set of pose parameters.
//!
//! Every setter pushes the new parameters through the transform pipeline before it
//! returns, so the cached [`PlaneVertex`] array always matches the current pose. Rendering
//! only reads that cache.
//!
//! The pipeline, per corner:
//!
//! 1. local corner at `(±origin.x, ±origin.y, 0)`, where `origin = abs(size) / 2`
//! 2. rotate around X, then Y, then Z (degrees converted to radians)
//! 3. add the 3D offset
//! 4. shear by `skew`, both axes computed from the pre-shear point
//! 5. weak perspective divide by `max(z + 1, PROJECTION_EPSILON)`
//! 6. translate by `center`
//!
//! # Examples
//!
//! ```
//! use quadplane::{Color, Plane, Vec2};
//!
//! let mut plane = Plane::with_geometry(Vec2::xy(100.0, 50.0), Vec2::zero(), Color::WHITE);
//! assert_eq!(plane.vertices()[0].position, Vec2::xy(-50.0, -25.0));
//! assert_eq!(plane.vertices()[2].position, Vec2::xy(50.0, 25.0));
//!
//! plane.set_3d_rotation_z(180.0);
//! let top_left = plane.vertices()[0].position;
//! assert!((top_left.x() - 50.0).abs() < 1e-3);
//! assert!((top_left.y() - 25.0).abs() < 1e-3);
//! ```

mod builder;

pub use builder::PlaneBuilder;

use tracing::{debug, trace};

use crate::id::ShaderId;
use crate::render::{QuadPrimitive, RenderTarget};
use crate::style::Style;
use crate::texture::{rect_corners, TextureHandle, TextureRect};
use crate::vector::{Vec2, Vec3};
use crate::widget::{ElementKind, InputState, Widget, WidgetBase};
use crate::Color;

/// Sign pattern of the local corners: top-left, top-right, bottom-right, bottom-left.
const CORNER_SIGNS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Minimum absolute quad area for hit testing; anything smaller is treated as empty.
const MIN_HIT_AREA: f32 = 1e-6;

/// One corner of a plane, as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneVertex {
    /// Screen-space position.
    pub position: Vec2,
    /// Mirrors the plane's color.
    pub color: Color,
    /// Pixel-space texture coordinate of the matching `texture_rect` corner.
    pub tex_coords: Vec2,
}

/// A textured or flat-colored quad with a 2D/3D pose.
///
/// # Scale
///
/// `scale` does not take part in the geometric pipeline. [`Plane::set_scale`] alone leaves
/// the rendered vertices exactly where they were; it only multiplies what [`Plane::size`]
/// and [`Plane::origin`] report. Callers that want a bigger quad on screen set a bigger
/// `size`.
#[derive(Debug, Clone)]
pub struct Plane {
    center: Vec2,
    size: Vec2,
    origin: Vec2,
    scale: Vec2,
    skew: Vec2,
    /// Euler angles in degrees. `z` doubles as the 2D rotation.
    rotation: Vec3,
    offset: Vec3,
    color: Color,
    texture: Option<TextureHandle>,
    texture_rect: TextureRect,
    vertices: [PlaneVertex; 4],
    generation: u64,
    base: WidgetBase,
}

impl Default for Plane {
    fn default() -> Self {
        Self::new()
    }
}

impl Plane {
    /// Element tag reported through [`Widget::kind`].
    pub const KIND: ElementKind = ElementKind::Plane;

    /// Creates an empty plane: zero size, default pose, white.
    pub fn new() -> Self {
        PlaneBuilder::new().build()
    }

    /// Creates a plane from a size, a center and a color.
    pub fn with_geometry(size: Vec2, center: Vec2, color: Color) -> Self {
        PlaneBuilder::new()
            .size(size)
            .center(center)
            .color(color)
            .build()
    }

    /// Creates a plane from a style preset. The style is copied; editing it later does not
    /// affect this plane.
    pub fn from_style(style: &Style) -> Self {
        PlaneBuilder::new().style(style).build()
    }

    /// Starts a [`PlaneBuilder`] with default parameters.
    pub fn builder() -> PlaneBuilder {
        PlaneBuilder::new()
    }

    /// Runs every parameter through the transform pipeline and refreshes the cached vertex
    /// positions. Calling it twice without changing anything yields identical vertices.
    pub fn recompute(&mut self) {
        self.origin = self.size.abs() * 0.5;
        let angles = self.rotation.map(f32::to_radians);

        for (vertex, (sign_x, sign_y)) in self.vertices.iter_mut().zip(CORNER_SIGNS) {
            let corner = Vec3::xyz(sign_x * self.origin.x(), sign_y * self.origin.y(), 0.0);
            let posed = corner.rotate(angles) + self.offset;
            vertex.position = shear(posed, self.skew).project() + self.center;
        }

        self.generation = self.generation.wrapping_add(1);
        trace!(
            generation = self.generation,
            top_left = %self.vertices[0].position,
            bottom_right = %self.vertices[2].position,
            "plane vertices recomputed"
        );
    }

    fn apply_color(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.color = self.color;
        }
    }

    fn apply_texture_rect(&mut self) {
        let corners = rect_corners(&self.texture_rect);
        for (vertex, corner) in self.vertices.iter_mut().zip(corners) {
            vertex.tex_coords = corner;
        }
    }

    // ===== Accessors =====

    /// Screen-space position the projected quad is translated to.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Signed span between the top-left and bottom-right vertices, times `scale`.
    ///
    /// For an unrotated plane this is `abs(raw_size) * scale`. Rotation, skew and depth show
    /// up in the span, so a plane turned 180° around Z reports a negative size.
    pub fn size(&self) -> Vec2 {
        (self.vertices[2].position - self.vertices[0].position).mul_components(self.scale)
    }

    /// The size exactly as it was last set, sign included.
    pub fn raw_size(&self) -> Vec2 {
        self.size
    }

    /// Half extent, `abs(size) / 2`, times `scale`.
    pub fn origin(&self) -> Vec2 {
        self.origin.mul_components(self.scale)
    }

    /// Half extent without scale applied.
    pub fn raw_origin(&self) -> Vec2 {
        self.origin
    }

    /// Reporting scale, always non-negative.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Shear factors along X and Y.
    pub fn skew(&self) -> Vec2 {
        self.skew
    }

    /// 2D rotation in degrees, which is the Z component of the 3D rotation.
    pub fn rotation(&self) -> f32 {
        self.rotation.z()
    }

    /// Euler angles around X, Y and Z, in degrees.
    pub fn rotation_3d(&self) -> Vec3 {
        self.rotation
    }

    /// Translation applied after rotation and before projection.
    pub fn offset_3d(&self) -> Vec3 {
        self.offset
    }

    /// Color shared by all four vertices.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The bound texture, if any.
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Pixel-space region of the texture mapped onto the quad.
    pub fn texture_rect(&self) -> TextureRect {
        self.texture_rect
    }

    /// Cached vertices in top-left, top-right, bottom-right, bottom-left order.
    pub fn vertices(&self) -> &[PlaneVertex; 4] {
        &self.vertices
    }

    /// Increments every time the vertex positions are recomputed. Renderers can compare it
    /// against the value they last uploaded to skip redundant work.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the cursor was over the quad at the last [`Widget::update`].
    pub fn is_hovered(&self) -> bool {
        self.base.is_hovered()
    }

    /// Whether the quad was hovered with the primary button held at the last update.
    pub fn is_pressed(&self) -> bool {
        self.base.is_pressed()
    }

    // ===== Pose =====

    /// Moves the quad on screen.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        self.recompute();
    }

    /// Sets the local size. Negative components are accepted; the geometry uses their
    /// absolute value.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.recompute();
    }

    /// Stores `abs(scale)`. See the type-level docs: this changes the reported size and
    /// origin but not the vertex positions.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale.abs();
        self.recompute();
    }

    /// Sets the same scale on both axes.
    pub fn set_scale_uniform(&mut self, scale: f32) {
        self.set_scale(Vec2::splat(scale));
    }

    /// 2D rotation alias: sets the Z angle in degrees.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.set_3d_rotation_z(degrees);
    }

    /// Sets all three Euler angles, in degrees.
    pub fn set_3d_rotation(&mut self, degrees: Vec3) {
        self.rotation = degrees;
        self.recompute();
    }

    /// Sets the rotation around X (tilt), in degrees.
    pub fn set_3d_rotation_x(&mut self, degrees: f32) {
        self.set_3d_rotation(self.rotation.with_x(degrees));
    }

    /// Sets the rotation around Y (turn), in degrees.
    pub fn set_3d_rotation_y(&mut self, degrees: f32) {
        self.set_3d_rotation(self.rotation.with_y(degrees));
    }

    /// Sets the in-plane rotation around Z, in degrees.
    pub fn set_3d_rotation_z(&mut self, degrees: f32) {
        self.set_3d_rotation(self.rotation.with_z(degrees));
    }

    /// Sets all three angles to `degrees`.
    pub fn set_3d_rotation_uniform(&mut self, degrees: f32) {
        self.set_3d_rotation(Vec3::splat(degrees));
    }

    /// Sets both shear factors. Each axis is sheared by the other's pre-shear coordinate.
    pub fn set_skew(&mut self, skew: Vec2) {
        self.skew = skew;
        self.recompute();
    }

    /// Horizontal shear, proportional to the corner's y.
    pub fn set_skew_x(&mut self, skew: f32) {
        self.set_skew(self.skew.with_x(skew));
    }

    /// Vertical shear, proportional to the corner's x.
    pub fn set_skew_y(&mut self, skew: f32) {
        self.set_skew(self.skew.with_y(skew));
    }

    /// Sets the same shear on both axes.
    pub fn set_skew_uniform(&mut self, skew: f32) {
        self.set_skew(Vec2::splat(skew));
    }

    /// Sets the translation applied after rotation and before projection. Positive `z`
    /// pushes the plane away and shrinks it on screen.
    pub fn set_3d_offset(&mut self, offset: Vec3) {
        self.offset = offset;
        self.recompute();
    }

    /// Sets the X component of the 3D offset.
    pub fn set_3d_offset_x(&mut self, offset: f32) {
        self.set_3d_offset(self.offset.with_x(offset));
    }

    /// Sets the Y component of the 3D offset.
    pub fn set_3d_offset_y(&mut self, offset: f32) {
        self.set_3d_offset(self.offset.with_y(offset));
    }

    /// Sets the depth offset.
    pub fn set_3d_offset_z(&mut self, offset: f32) {
        self.set_3d_offset(self.offset.with_z(offset));
    }

    /// Sets all three offset components to `offset`.
    pub fn set_3d_offset_uniform(&mut self, offset: f32) {
        self.set_3d_offset(Vec3::splat(offset));
    }

    // ===== Color & texture =====

    /// Repaints all four vertices. Geometry is untouched.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.apply_color();
    }

    /// Binds a texture, or unbinds with `None`.
    ///
    /// Binding resets the texture rectangle to the texture's full bounds. Unbinding keeps
    /// the last rectangle so rebinding a same-sized texture with
    /// [`Plane::set_texture_rect`] is not needed.
    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
        match texture {
            Some(handle) => {
                debug!(texture = %handle.id, width = handle.width, height = handle.height, "plane texture bound");
                self.set_texture_rect(handle.bounds());
            }
            None => debug!("plane texture unbound"),
        }
    }

    /// Selects the pixel-space region of the texture that is mapped onto the quad.
    pub fn set_texture_rect(&mut self, rect: TextureRect) {
        self.texture_rect = rect;
        self.apply_texture_rect();
    }

    // ===== Queries =====

    /// Whether `point` lies inside the projected quad, edges included.
    ///
    /// Works for either winding, so planes flipped by a 3D rotation still hit test. Quads
    /// that have collapsed to a line or a point never contain anything.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let corners = self.vertices.map(|vertex| vertex.position);

        let twice_area: f32 = (0..4)
            .map(|i| cross_2d(corners[i], corners[(i + 1) % 4]))
            .sum();
        if twice_area.abs() < MIN_HIT_AREA {
            return false;
        }

        let mut has_positive = false;
        let mut has_negative = false;
        for i in 0..4 {
            let edge = corners[(i + 1) % 4] - corners[i];
            let side = cross_2d(edge, point - corners[i]);
            has_positive |= side > 0.0;
            has_negative |= side < 0.0;
        }
        !(has_positive && has_negative)
    }

    // ===== Rendering =====

    /// Draws the cached quad, textured if a texture is bound.
    pub fn render(&self, target: &mut dyn RenderTarget) {
        target.draw_quad(QuadPrimitive::new(&self.vertices), self.texture, None);
    }

    /// Draws the cached quad with `shader` always applied, plus the texture if one is bound.
    pub fn render_with_shader(&self, target: &mut dyn RenderTarget, shader: ShaderId) {
        target.draw_quad(
            QuadPrimitive::new(&self.vertices),
            self.texture,
            Some(shader),
        );
    }
}

/// Shears `point` in the XY plane. Both outputs are computed from the input pair.
fn shear(point: Vec3, skew: Vec2) -> Vec3 {
    let (x, y) = (point.x(), point.y());
    Vec3::xyz(x + y * skew.x(), y + x * skew.y(), point.z())
}

fn cross_2d(a: Vec2, b: Vec2) -> f32 {
    a.x() * b.y() - a.y() * b.x()
}

impl Widget for Plane {
    fn kind(&self) -> ElementKind {
        Self::KIND
    }

    fn center(&self) -> Vec2 {
        Plane::center(self)
    }

    fn set_center(&mut self, center: Vec2) {
        Plane::set_center(self, center)
    }

    fn scale(&self) -> Vec2 {
        Plane::scale(self)
    }

    fn set_scale(&mut self, scale: Vec2) {
        Plane::set_scale(self, scale)
    }

    fn size(&self) -> Vec2 {
        Plane::size(self)
    }

    fn set_size(&mut self, size: Vec2) {
        Plane::set_size(self, size)
    }

    fn rotation(&self) -> f32 {
        Plane::rotation(self)
    }

    fn set_rotation(&mut self, degrees: f32) {
        Plane::set_rotation(self, degrees)
    }

    fn color(&self) -> Color {
        Plane::color(self)
    }

    fn set_color(&mut self, color: Color) {
        Plane::set_color(self, color)
    }

    fn origin(&self) -> Vec2 {
        Plane::origin(self)
    }

    fn update(&mut self, input: &InputState, local: bool) {
        let cursor = if local {
            input.cursor + self.center
        } else {
            input.cursor
        };
        let hovered = self.contains_point(cursor);
        self.base.update(input, hovered);
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        Plane::render(self, target)
    }
}
