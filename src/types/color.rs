//! Colors and vector color palettes

use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from RGB values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Blend towards white by `amount` in [0, 1]
    pub fn lighter(&self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f64 + (255.0 - c as f64) * amount).round() as u8;
        Rgb::new(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Blend towards black by `amount` in [0, 1]
    pub fn darker(&self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f64 * (1.0 - amount)).round() as u8;
        Rgb::new(mix(self.r), mix(self.g), mix(self.b))
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill and stroke colors used to draw one vector set
///
/// Main vectors, their component vectors and the set's sum vector each get
/// their own fill/stroke pair. Base vectors (Equations screen) are drawn
/// in the main colors with a lighter fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorColorPalette {
    pub main_fill: Rgb,
    pub main_stroke: Rgb,
    pub component_fill: Rgb,
    pub component_stroke: Rgb,
    pub sum_fill: Rgb,
    pub sum_stroke: Rgb,
    pub base_vector_fill: Rgb,
}

impl VectorColorPalette {
    /// Build a palette from a main color and a sum color
    pub fn from_main_and_sum(main: Rgb, sum: Rgb) -> Self {
        Self {
            main_fill: main,
            main_stroke: main.darker(0.4),
            component_fill: main.lighter(0.45),
            component_stroke: main.lighter(0.2),
            sum_fill: sum,
            sum_stroke: sum.darker(0.4),
            base_vector_fill: main.lighter(0.7),
        }
    }

    /// Blue vectors with a green sum (Explore screens, first Lab set)
    pub fn blue() -> Self {
        Self::from_main_and_sum(Rgb::new(0, 102, 255), Rgb::new(0, 181, 0))
    }

    /// Orange vectors with a purple sum (second Lab set)
    pub fn orange() -> Self {
        Self::from_main_and_sum(Rgb::new(255, 120, 0), Rgb::new(140, 0, 200))
    }

    /// Pink vectors with a green sum (Equations screen, Cartesian)
    pub fn pink() -> Self {
        Self::from_main_and_sum(Rgb::new(222, 0, 160), Rgb::new(0, 181, 0))
    }

    /// Teal vectors with a brown sum (Equations screen, polar)
    pub fn teal() -> Self {
        Self::from_main_and_sum(Rgb::new(0, 150, 150), Rgb::new(150, 90, 30))
    }
}

impl Default for VectorColorPalette {
    fn default() -> Self {
        Self::blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn test_lighter_darker() {
        let c = Rgb::new(100, 0, 200);
        assert_eq!(c.lighter(1.0), Rgb::WHITE);
        assert_eq!(c.darker(1.0), Rgb::BLACK);
        assert_eq!(c.lighter(0.0), c);
    }

    #[test]
    fn test_palettes_distinct() {
        assert_ne!(VectorColorPalette::blue(), VectorColorPalette::orange());
        assert_eq!(VectorColorPalette::default(), VectorColorPalette::blue());
        let p = VectorColorPalette::pink();
        assert_ne!(p.main_fill, p.component_fill);
    }
}
