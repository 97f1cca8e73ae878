/// Represents a color in RGBA format.
///
/// Each channel is an 8-bit unsigned integer. A plane paints all four of its vertices with
/// the same `Color`.
///
/// # Examples
///
/// ```
/// use quadplane::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.normalize(), [1.0, 0.0, 0.0, 1.0]);
///
/// let ghost = Color::WHITE.with_alpha(0);
/// assert_eq!(ghost.to_array(), [255, 255, 255, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// All channels zero.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// Opaque black.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// Opaque white.
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// Creates an opaque color from red, green and blue channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Returns the same color with its alpha channel replaced.
    pub fn with_alpha(self, a: u8) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, a])
    }

    /// Channels mapped to `[0.0, 1.0]`, the layout vertex buffers expect.
    pub fn normalize(&self) -> [f32; 4] {
        self.0.map(|channel| channel as f32 / 255.0)
    }

    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}
