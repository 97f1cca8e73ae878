//! The contract every on-screen element implements, and the closed set of elements.

use crate::plane::Plane;
use crate::render::RenderTarget;
use crate::vector::Vec2;
use crate::Color;

/// Discriminates between element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ElementKind {
    Plane,
}

impl ElementKind {
    pub const PLANE_TAG: &'static str = "plane";

    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Plane => Self::PLANE_TAG,
        }
    }
}

/// Snapshot of the pointer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Cursor position, in screen space unless the element is updated with `local = true`.
    pub cursor: Vec2,
    pub primary_pressed: bool,
}

/// State shared by every widget regardless of its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetBase {
    hovered: bool,
    pressed: bool,
}

impl WidgetBase {
    /// Records the outcome of the owner's hit test for this frame.
    pub fn update(&mut self, input: &InputState, hovered: bool) {
        self.hovered = hovered;
        self.pressed = hovered && input.primary_pressed;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

pub trait Widget {
    fn kind(&self) -> ElementKind;
    fn center(&self) -> Vec2;
    fn set_center(&mut self, center: Vec2);
    fn scale(&self) -> Vec2;
    fn set_scale(&mut self, scale: Vec2);
    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);
    /// 2D rotation in degrees.
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, degrees: f32);
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn origin(&self) -> Vec2;
    /// Feeds one frame of input. With `local` set, `input.cursor` is relative to the
    /// widget's center.
    fn update(&mut self, input: &InputState, local: bool);
    fn render(&self, target: &mut dyn RenderTarget);
}

/// Every element variant the UI knows how to host.
#[derive(Debug, Clone)]
pub enum Element {
    Plane(Plane),
}

impl Element {
    pub fn as_widget(&self) -> &dyn Widget {
        match self {
            Element::Plane(plane) => plane,
        }
    }

    pub fn as_widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            Element::Plane(plane) => plane,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.as_widget().kind()
    }

    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            Element::Plane(plane) => Some(plane),
        }
    }

    pub fn as_plane_mut(&mut self) -> Option<&mut Plane> {
        match self {
            Element::Plane(plane) => Some(plane),
        }
    }

    pub fn update(&mut self, input: &InputState, local: bool) {
        self.as_widget_mut().update(input, local);
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        self.as_widget().render(target);
    }
}

impl From<Plane> for Element {
    fn from(value: Plane) -> Self {
        Element::Plane(value)
    }
}
