//! Non-owning texture references and pixel-space texture rectangles.

use crate::id::TextureId;
use crate::vector::Vec2;

/// A pixel-space rectangle inside a texture. `min` is the top-left corner, `max` the
/// bottom-right one.
pub type TextureRect = lyon::math::Box2D;

/// Builds a [`TextureRect`] from its top-left corner and extent.
///
/// # Examples
///
/// ```
/// use quadplane::texture_rect;
///
/// let rect = texture_rect(16.0, 8.0, 32.0, 64.0);
/// assert_eq!(rect.max.x, 48.0);
/// assert_eq!(rect.max.y, 72.0);
/// ```
pub fn texture_rect(x: f32, y: f32, width: f32, height: f32) -> TextureRect {
    TextureRect::new(
        lyon::math::point(x, y),
        lyon::math::point(x + width, y + height),
    )
}

/// The four corners of `rect` in quad winding order: top-left, top-right, bottom-right,
/// bottom-left.
pub(crate) fn rect_corners(rect: &TextureRect) -> [Vec2; 4] {
    [
        Vec2::xy(rect.min.x, rect.min.y),
        Vec2::xy(rect.max.x, rect.min.y),
        Vec2::xy(rect.max.x, rect.max.y),
        Vec2::xy(rect.min.x, rect.max.y),
    ]
}

/// A reference to a texture that lives somewhere else.
///
/// The handle carries the texture's id and native dimensions, nothing more. Whoever owns
/// the texture is responsible for keeping it alive for as long as planes referencing it are
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    pub fn new(id: TextureId, dimensions: (u32, u32)) -> Self {
        Self {
            id,
            width: dimensions.0,
            height: dimensions.1,
        }
    }

    /// The full native bounds of the texture.
    pub fn bounds(&self) -> TextureRect {
        texture_rect(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Maps a pixel-space texture coordinate into `[0, 1]` UV space.
    pub(crate) fn normalize_coords(&self, coords: Vec2) -> [f32; 2] {
        let width = self.width.max(1) as f32;
        let height = self.height.max(1) as f32;
        [coords.x() / width, coords.y() / height]
    }
}
