use crate::style::Style;
use crate::texture::{TextureHandle, TextureRect};
use crate::vector::{Vec2, Vec3};
use crate::widget::WidgetBase;
use crate::Color;

use super::{Plane, PlaneVertex};

/// A builder for creating planes using a fluent interface.
///
/// Nothing is computed until [`PlaneBuilder::build`], which runs the transform pipeline
/// exactly once. You can also get one from [`Plane::builder`].
///
/// # Examples
///
/// ```
/// use quadplane::{Color, PlaneBuilder, Vec2, Vec3};
///
/// let plane = PlaneBuilder::new()
///     .size(Vec2::xy(200.0, 120.0))
///     .center(Vec2::xy(400.0, 300.0))
///     .rotation_3d(Vec3::xyz(30.0, 0.0, 0.0))
///     .color(Color::rgb(40, 90, 200))
///     .build();
///
/// assert_eq!(plane.generation(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PlaneBuilder {
    center: Vec2,
    size: Vec2,
    scale: Vec2,
    skew: Vec2,
    rotation: Vec3,
    offset: Vec3,
    color: Color,
    texture: Option<TextureHandle>,
    texture_rect: Option<TextureRect>,
}

impl Default for PlaneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneBuilder {
    /// Zero size at the origin, unit scale, no rotation, skew or offset, white, untextured.
    pub fn new() -> Self {
        Self {
            center: Vec2::zero(),
            size: Vec2::zero(),
            scale: Vec2::one(),
            skew: Vec2::zero(),
            rotation: Vec3::zero(),
            offset: Vec3::zero(),
            color: Color::WHITE,
            texture: None,
            texture_rect: None,
        }
    }

    /// Copies size, skew, rotation, color and texture from a style preset.
    pub fn style(mut self, style: &Style) -> Self {
        self.size = style.size;
        self.skew = style.skew;
        self.rotation = style.rotation;
        self.color = style.color;
        self.texture = style.texture;
        self
    }

    pub fn center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn scale(mut self, scale: Vec2) -> Self {
        self.scale = scale.abs();
        self
    }

    pub fn skew(mut self, skew: Vec2) -> Self {
        self.skew = skew;
        self
    }

    /// Euler angles in degrees.
    pub fn rotation_3d(mut self, degrees: Vec3) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn offset_3d(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Overrides the texture rectangle. Without this, a bound texture maps in full.
    pub fn texture_rect(mut self, rect: TextureRect) -> Self {
        self.texture_rect = Some(rect);
        self
    }

    pub fn build(self) -> Plane {
        let texture_rect = self
            .texture_rect
            .or_else(|| self.texture.map(|handle| handle.bounds()))
            .unwrap_or_else(TextureRect::zero);

        let mut plane = Plane {
            center: self.center,
            size: self.size,
            origin: Vec2::zero(),
            scale: self.scale,
            skew: self.skew,
            rotation: self.rotation,
            offset: self.offset,
            color: self.color,
            texture: self.texture,
            texture_rect,
            vertices: [PlaneVertex::default(); 4],
            generation: 0,
            base: WidgetBase::default(),
        };
        plane.apply_color();
        plane.apply_texture_rect();
        plane.recompute();
        plane
    }
}
