//! Reusable plane presets.
//!
//! A [`StyleRegistry`] is an ordinary value the application owns and passes around. Slots
//! are created with default contents the first time they are asked for mutably; planes
//! built from a style copy it, so later edits only affect planes built afterwards.

use ahash::{HashMap, HashMapExt};
use tracing::debug;

use crate::texture::TextureHandle;
use crate::vector::{Vec2, Vec3};
use crate::Color;

/// A bundle of plane appearance parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub size: Vec2,
    pub skew: Vec2,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub color: Color,
    pub texture: Option<TextureHandle>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            size: Vec2::zero(),
            skew: Vec2::zero(),
            rotation: Vec3::zero(),
            color: Color::WHITE,
            texture: None,
        }
    }
}

/// Named style slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    Primary,
    Secondary,
    Tertiary,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 3] = [StyleSlot::Primary, StyleSlot::Secondary, StyleSlot::Tertiary];
}

#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<StyleSlot, Style>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Looks up a slot without creating it.
    pub fn get(&self, slot: StyleSlot) -> Option<&Style> {
        self.styles.get(&slot)
    }

    /// Mutable access to a slot, creating it with [`Style::default`] on first use.
    pub fn slot_mut(&mut self, slot: StyleSlot) -> &mut Style {
        self.styles.entry(slot).or_insert_with(|| {
            debug!(?slot, "style slot created");
            Style::default()
        })
    }

    /// Replaces a slot, returning its previous contents.
    pub fn set(&mut self, slot: StyleSlot, style: Style) -> Option<Style> {
        self.styles.insert(slot, style)
    }

    pub fn contains(&self, slot: StyleSlot) -> bool {
        self.styles.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
