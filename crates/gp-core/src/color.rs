//! Packed RGBA colors.

use core::fmt;
use core::str::FromStr;

use crate::colors::NAMED_COLORS;
use crate::error::CoreError;

/// A color packed as `0xAARRGGBB`.
///
/// The alpha channel follows the plotting program's convention: 0 is opaque,
/// 255 is fully transparent. Equality is identity of the packed integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Color from an already packed `0xAARRGGBB` value.
    pub const fn from_packed(rgba: u32) -> Self {
        Self(rgba)
    }

    /// Color from unit-interval channels, rounded to the nearest 8-bit step.
    pub fn from_f64(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::rgba(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The packed integer written into `linecolor rgb <int>`.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Same color channels with a new alpha.
    pub const fn fade(self, alpha: u8) -> Self {
        Self((self.0 & 0x00ff_ffff) | ((alpha as u32) << 24))
    }

    /// [`Color::fade`] with a unit-interval alpha.
    pub fn fade_f64(self, alpha: f64) -> Self {
        self.fade(unit_to_u8(alpha))
    }

    /// Case-insensitive lookup in the named color table.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

fn unit_to_u8(v: f64) -> u8 {
    (255.0 * v.clamp(0.0, 1.0) + 0.5) as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Self::from_packed(rgba)
    }
}

/// Parses a color name (`"SteelBlue"`, `"steelblue"`) or a hex literal
/// (`#RRGGBB` or `#AARRGGBB`).
impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CoreError::UnknownColor { name: s.to_string() };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !matches!(hex.len(), 6 | 8) {
                return Err(unknown());
            }
            return u32::from_str_radix(hex, 16)
                .map(Color::from_packed)
                .map_err(|_| unknown());
        }

        Color::from_name(trimmed).ok_or_else(unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_pack_as_argb() {
        let c = Color::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.packed(), 0x4411_2233);
        assert_eq!(c.red(), 0x11);
        assert_eq!(c.green(), 0x22);
        assert_eq!(c.blue(), 0x33);
        assert_eq!(c.alpha(), 0x44);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(255, 0, 0).alpha(), 0);
        assert_eq!(Color::RED.packed(), 0x00ff_0000);
    }

    #[test]
    fn fade_only_touches_alpha() {
        let faded = Color::RED.fade_f64(0.5);
        assert_eq!(faded.alpha(), 128);
        assert_eq!(faded.red(), 255);
        assert_eq!(faded.green(), 0);
        assert_eq!(faded.blue(), 0);
        assert_eq!(faded.fade(0), Color::RED);
    }

    #[test]
    fn from_f64_rounds() {
        let c = Color::from_f64(1.0, 0.5, 0.0, 0.0);
        assert_eq!((c.red(), c.green(), c.blue()), (255, 128, 0));
        // Out-of-range channels clamp instead of wrapping
        assert_eq!(Color::from_f64(2.0, -1.0, 0.0, 0.0).red(), 255);
        assert_eq!(Color::from_f64(2.0, -1.0, 0.0, 0.0).green(), 0);
    }

    #[test]
    fn parse_names_and_hex() {
        assert_eq!("SteelBlue".parse::<Color>().unwrap(), Color::STEEL_BLUE);
        assert_eq!("steelblue".parse::<Color>().unwrap(), Color::STEEL_BLUE);
        assert_eq!("#4682B4".parse::<Color>().unwrap(), Color::STEEL_BLUE);
        assert_eq!(
            "#80FF0000".parse::<Color>().unwrap(),
            Color::RED.fade(0x80)
        );
        assert!("#12345".parse::<Color>().is_err());
        assert!("not-a-color".parse::<Color>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fade_preserves_rgb(r: u8, g: u8, b: u8, a: u8, new_alpha: u8) {
            let faded = Color::rgba(r, g, b, a).fade(new_alpha);
            prop_assert_eq!(faded.red(), r);
            prop_assert_eq!(faded.green(), g);
            prop_assert_eq!(faded.blue(), b);
            prop_assert_eq!(faded.alpha(), new_alpha);
        }
    }
}
