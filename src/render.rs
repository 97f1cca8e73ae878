//! The seam between planes and whatever ends up drawing them.
//!
//! A [`RenderTarget`] receives one [`QuadPrimitive`] per draw call, together with the
//! texture and shader to use. [`DrawList`] is the stock target: it packs quads into
//! GPU-ready vertex and index arrays and groups consecutive quads that share a texture and
//! shader into [`DrawBatch`]es.

use smallvec::SmallVec;
use tracing::warn;

use crate::id::{ShaderId, TextureId};
use crate::plane::PlaneVertex;
use crate::texture::TextureHandle;
use crate::vertex::QuadVertex;

/// Two triangles per quad, matching the top-left, top-right, bottom-right, bottom-left
/// vertex order.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// A borrowed four-vertex quad.
#[derive(Debug, Clone, Copy)]
pub struct QuadPrimitive<'a> {
    vertices: &'a [PlaneVertex; 4],
}

impl<'a> QuadPrimitive<'a> {
    pub fn new(vertices: &'a [PlaneVertex; 4]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &'a [PlaneVertex; 4] {
        self.vertices
    }
}

pub trait RenderTarget {
    /// Draws `quad`, sampling `texture` when present and using `shader` instead of the
    /// default pipeline when present.
    fn draw_quad(
        &mut self,
        quad: QuadPrimitive<'_>,
        texture: Option<TextureHandle>,
        shader: Option<ShaderId>,
    );
}

/// A run of consecutive indices drawn with the same texture and shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: Option<TextureId>,
    pub shader: Option<ShaderId>,
    pub first_index: u32,
    pub index_count: u32,
}

/// CPU-side accumulation of quads for a frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    vertices: Vec<QuadVertex>,
    indices: Vec<u16>,
    batches: SmallVec<[DrawBatch; 4]>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded quads but keeps the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.batches.clear();
    }

    pub fn vertices(&self) -> &[QuadVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn extend_batches(
        &mut self,
        texture: Option<TextureId>,
        shader: Option<ShaderId>,
        first_index: u32,
    ) {
        let index_count = QUAD_INDICES.len() as u32;
        if let Some(last) = self.batches.last_mut() {
            if last.texture == texture && last.shader == shader {
                last.index_count += index_count;
                return;
            }
        }
        self.batches.push(DrawBatch {
            texture,
            shader,
            first_index,
            index_count,
        });
    }
}

impl RenderTarget for DrawList {
    fn draw_quad(
        &mut self,
        quad: QuadPrimitive<'_>,
        texture: Option<TextureHandle>,
        shader: Option<ShaderId>,
    ) {
        let vertex_start = self.vertices.len();
        if vertex_start + 4 > u16::MAX as usize + 1 {
            warn!(
                "Draw list vertex count ({}) would exceed the u16 index range, dropping quad",
                vertex_start
            );
            return;
        }

        let first_index = self.indices.len() as u32;
        self.vertices
            .extend(quad.vertices().iter().map(|vertex| QuadVertex {
                position: vertex.position.into(),
                color: vertex.color.normalize(),
                tex_coords: texture
                    .map(|handle| handle.normalize_coords(vertex.tex_coords))
                    .unwrap_or([0.0, 0.0]),
            }));

        let vertex_offset = vertex_start as u16;
        self.indices
            .extend(QUAD_INDICES.iter().map(|index| index + vertex_offset));

        self.extend_batches(texture.map(|handle| handle.id), shader, first_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::texture_rect;
    use crate::{Color, Plane, Vec2};

    fn plane() -> Plane {
        Plane::with_geometry(Vec2::xy(10.0, 10.0), Vec2::xy(5.0, 5.0), Color::WHITE)
    }

    fn texture() -> TextureHandle {
        TextureHandle::new(TextureId(1), (100, 50))
    }

    #[test]
    fn untextured_plane_records_one_quad() {
        let mut draw_list = DrawList::new();
        plane().render(&mut draw_list);

        assert_eq!(draw_list.quad_count(), 1);
        assert_eq!(draw_list.indices(), &QUAD_INDICES);
        assert_eq!(draw_list.vertices()[0].position, [0.0, 0.0]);
        assert_eq!(draw_list.vertices()[2].position, [10.0, 10.0]);
        assert_eq!(draw_list.vertices()[1].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            draw_list.batches(),
            &[DrawBatch {
                texture: None,
                shader: None,
                first_index: 0,
                index_count: 6,
            }]
        );
    }

    #[test]
    fn textured_plane_normalizes_tex_coords() {
        let mut plane = plane();
        plane.set_texture(Some(texture()));
        plane.set_texture_rect(texture_rect(50.0, 0.0, 50.0, 25.0));

        let mut draw_list = DrawList::new();
        plane.render(&mut draw_list);

        let coords: Vec<[f32; 2]> = draw_list.vertices().iter().map(|v| v.tex_coords).collect();
        assert_eq!(coords, vec![[0.5, 0.0], [1.0, 0.0], [1.0, 0.5], [0.5, 0.5]]);
        assert_eq!(draw_list.batches()[0].texture, Some(TextureId(1)));
    }

    #[test]
    fn shader_is_applied_even_without_texture() {
        let mut draw_list = DrawList::new();
        plane().render_with_shader(&mut draw_list, ShaderId(4));
        assert_eq!(draw_list.batches()[0].shader, Some(ShaderId(4)));
        assert_eq!(draw_list.batches()[0].texture, None);
    }

    #[test]
    fn matching_quads_share_a_batch() {
        let mut draw_list = DrawList::new();
        let mut textured = plane();
        textured.set_texture(Some(texture()));

        plane().render(&mut draw_list);
        plane().render(&mut draw_list);
        textured.render(&mut draw_list);
        plane().render(&mut draw_list);

        assert_eq!(draw_list.quad_count(), 4);
        assert_eq!(draw_list.indices()[6..12], [4, 5, 6, 6, 7, 4]);
        let batches = draw_list.batches();
        assert_eq!(batches.len(), 3);
        assert_eq!((batches[0].first_index, batches[0].index_count), (0, 12));
        assert_eq!((batches[1].first_index, batches[1].index_count), (12, 6));
        assert_eq!((batches[2].first_index, batches[2].index_count), (18, 6));
    }

    #[test]
    fn rendering_does_not_mutate_the_plane() {
        let plane = plane();
        let generation = plane.generation();
        let mut draw_list = DrawList::new();
        plane.render(&mut draw_list);
        plane.render(&mut draw_list);
        assert_eq!(plane.generation(), generation);
    }

    #[test]
    fn quads_past_the_index_range_are_dropped() {
        let plane = plane();
        let mut draw_list = DrawList::new();
        let capacity = (u16::MAX as usize + 1) / 4;
        for _ in 0..capacity {
            plane.render(&mut draw_list);
        }
        assert_eq!(draw_list.quad_count(), capacity);
        plane.render(&mut draw_list);
        assert_eq!(draw_list.quad_count(), capacity);
        assert_eq!(*draw_list.indices().last().unwrap(), (capacity * 4 - 4) as u16);
    }

    #[test]
    fn clear_empties_everything() {
        let mut draw_list = DrawList::new();
        plane().render(&mut draw_list);
        draw_list.clear();
        assert!(draw_list.is_empty());
        assert!(draw_list.batches().is_empty());
        assert!(draw_list.indices().is_empty());
    }
}
