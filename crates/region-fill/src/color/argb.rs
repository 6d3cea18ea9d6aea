//! Packed ARGB pixel type
//!
//! All pixel arithmetic in the fill engine works on 32-bit packed values with
//! alpha in the top byte, followed by red, green and blue. The operations here
//! are cheap integer approximations that are good enough for sprite and tile
//! work; none of them are gamma-aware.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A packed 32-bit ARGB pixel (`0xAARRGGBB`).
///
/// The wrapper is `repr(transparent)`, so a `[Argb]` has the same layout as
/// a `[u32]` pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black, the initial value of every scratch layer.
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Build a pixel from its four 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use region_fill::Argb;
    /// let c = Argb::from_channels(0xFF, 0x10, 0x20, 0x30);
    /// assert_eq!(c, Argb(0xFF102030));
    /// ```
    #[inline]
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque pixel from red, green and blue.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(0xFF, r, g, b)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// True when the alpha byte is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Same color with the alpha byte replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Weighted luma with weights 2:5:1 over red, green and blue.
    ///
    /// The result is in `0..=255`; alpha is ignored.
    ///
    /// # Example
    /// ```
    /// use region_fill::Argb;
    /// assert_eq!(Argb::WHITE.brightness(), 255);
    /// assert_eq!(Argb::BLACK.brightness(), 0);
    /// ```
    #[inline]
    pub fn brightness(self) -> i32 {
        let r = self.red() as i32;
        let g = self.green() as i32;
        let b = self.blue() as i32;

        (r * 2 + g * 5 + b) / 8
    }

    /// Scale red, green and blue by `factor`, keeping alpha.
    ///
    /// Each channel becomes `trunc(c * factor + 0.49)` clamped to `0..=255`.
    /// Factors above 1.0 brighten, negative factors collapse to black.
    pub fn change_brightness(self, factor: f64) -> Self {
        let scale = |c: u8| clamp_channel((c as f64 * factor + 0.49) as i32);

        Self::from_channels(
            self.alpha(),
            scale(self.red()),
            scale(self.green()),
            scale(self.blue()),
        )
    }

    /// Linear blend of `self` over `other` with an integer weight.
    ///
    /// `alpha` is in `0..=256`: 256 yields `self`, 0 yields `other`. Each
    /// channel is `other + (alpha * (self - other) >> 8)` clamped to
    /// `0..=255`. The result is always opaque.
    pub fn blend(self, other: Argb, alpha: i32) -> Self {
        let mix = |c1: u8, c2: u8| {
            let c1 = c1 as i32;
            let c2 = c2 as i32;
            clamp_channel(((alpha * (c1 - c2)) >> 8) + c2)
        };

        Self::opaque(
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
        )
    }

    /// Perceptual distance between two pixels.
    ///
    /// `(da)^2 + 2*(dr)^2 + 3*(dg)^2 + (db)^2` over the unsigned channel
    /// values, alpha included. Symmetric, non-negative, and zero only for
    /// identical pixels.
    ///
    /// # Example
    /// ```
    /// use region_fill::Argb;
    /// let a = Argb(0xFF000000);
    /// let b = Argb(0xFF010000);
    /// assert_eq!(a.diff(b), 2);
    /// assert_eq!(b.diff(a), 2);
    /// ```
    #[inline]
    pub fn diff(self, other: Argb) -> i32 {
        let d = |c1: u8, c2: u8| {
            let v = c2 as i32 - c1 as i32;
            v * v
        };

        d(self.alpha(), other.alpha())
            + d(self.red(), other.red()) * 2
            + d(self.green(), other.green()) * 3
            + d(self.blue(), other.blue())
    }

    /// Non-premultiplied source-over: `self` drawn on top of `dst`.
    ///
    /// A transparent source leaves `dst` untouched and an opaque one
    /// replaces it.
    pub fn over(self, dst: Argb) -> Argb {
        let sa = self.alpha() as u32;
        if sa == 0 {
            return dst;
        }
        if sa == 255 {
            return self;
        }

        let da = dst.alpha() as u32;
        // dst weight scaled to 0..=255*255
        let dw = da * (255 - sa);
        let out_a = sa * 255 + dw;

        let mix = |s: u8, d: u8| {
            let num = s as u32 * sa * 255 + d as u32 * dw;
            ((num + out_a / 2) / out_a) as u8
        };

        Self::from_channels(
            ((out_a + 127) / 255) as u8,
            mix(self.red(), dst.red()),
            mix(self.green(), dst.green()),
            mix(self.blue(), dst.blue()),
        )
    }

    /// Channels in `[R, G, B, A]` byte order.
    #[inline]
    pub fn to_rgba_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Build from `[R, G, B, A]` bytes.
    #[inline]
    pub fn from_rgba_bytes(bytes: [u8; 4]) -> Self {
        Self::from_channels(bytes[3], bytes[0], bytes[1], bytes[2])
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

impl From<u32> for Argb {
    fn from(v: u32) -> Self {
        Argb(v)
    }
}

impl From<Argb> for u32 {
    fn from(c: Argb) -> Self {
        c.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse a hex color.
    ///
    /// Supports `#RGB`, `#RRGGBB` (both opaque) and `#AARRGGBB`. The hash is
    /// optional, parsing is case-insensitive and surrounding whitespace is
    /// trimmed.
    ///
    /// ```
    /// use region_fill::Argb;
    ///
    /// let red: Argb = "#F00".parse().unwrap();
    /// assert_eq!(red, Argb(0xFFFF0000));
    ///
    /// let clear: Argb = "#00000000".parse().unwrap();
    /// assert!(clear.is_transparent());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let mut digits = Vec::with_capacity(8);
        for (index, found) in s.chars().enumerate() {
            match found.to_digit(16) {
                Some(d) => digits.push(d),
                None => return Err(ParseColorError::Digit { index, found }),
            }
        }
        let value = digits.iter().fold(0u32, |acc, d| (acc << 4) | d);

        match digits.len() {
            // Each digit of #RGB is doubled: 0xF -> 0xFF
            3 => Ok(Argb(0xFF00_0000 | expand_short(value))),
            6 => Ok(Argb(0xFF00_0000 | value)),
            8 => Ok(Argb(value)),
            n => Err(ParseColorError::Length(n)),
        }
    }
}

/// Spread 12-bit `0xRGB` to 24-bit `0xRRGGBB`.
fn expand_short(rgb: u32) -> u32 {
    let r = (rgb >> 8) & 0xF;
    let g = (rgb >> 4) & 0xF;
    let b = rgb & 0xF;
    ((r * 17) << 16) | ((g * 17) << 8) | (b * 17)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let c = Argb(0x80_40_20_10);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x40);
        assert_eq!(c.green(), 0x20);
        assert_eq!(c.blue(), 0x10);
        assert_eq!(Argb::from_channels(0x80, 0x40, 0x20, 0x10), c);
    }

    #[test]
    fn test_brightness_weights() {
        // 2:5:1 weighting, truncating division by 8
        assert_eq!(Argb::opaque(255, 0, 0).brightness(), 63);
        assert_eq!(Argb::opaque(0, 255, 0).brightness(), 159);
        assert_eq!(Argb::opaque(0, 0, 255).brightness(), 31);
        // alpha does not contribute
        assert_eq!(Argb(0x00FF_FFFF).brightness(), 255);
    }

    #[test]
    fn test_change_brightness_scales_and_clamps() {
        let c = Argb::from_channels(0x7F, 100, 200, 50);

        assert_eq!(c.change_brightness(1.0), c);
        assert_eq!(
            c.change_brightness(0.5),
            Argb::from_channels(0x7F, 50, 100, 25)
        );
        // Over-bright saturates at 255, alpha kept
        assert_eq!(
            c.change_brightness(2.0),
            Argb::from_channels(0x7F, 200, 255, 100)
        );
        // Negative factors clamp to 0
        assert_eq!(
            c.change_brightness(-1.0),
            Argb::from_channels(0x7F, 0, 0, 0)
        );
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Argb::opaque(200, 100, 0);
        let b = Argb::opaque(0, 100, 200);

        assert_eq!(a.blend(b, 256), a);
        assert_eq!(a.blend(b, 0), b);
        assert_eq!(a.blend(b, 128), Argb::opaque(100, 100, 100));
    }

    #[test]
    fn test_blend_is_always_opaque() {
        let a = Argb::from_channels(0, 10, 10, 10);
        let b = Argb::from_channels(0x20, 30, 30, 30);
        assert_eq!(a.blend(b, 100).alpha(), 255);
    }

    #[test]
    fn test_blend_uses_floor_shift() {
        // alpha * (c1 - c2) = 1 * -1 = -1, -1 >> 8 = -1
        let a = Argb::opaque(0, 0, 0);
        let b = Argb::opaque(1, 1, 1);
        assert_eq!(a.blend(b, 1), Argb::opaque(0, 0, 0));
    }

    #[test]
    fn test_diff_weights() {
        let base = Argb(0x0000_0000);
        assert_eq!(base.diff(Argb(0x0100_0000)), 1);
        assert_eq!(base.diff(Argb(0x0001_0000)), 2);
        assert_eq!(base.diff(Argb(0x0000_0100)), 3);
        assert_eq!(base.diff(Argb(0x0000_0001)), 1);
        assert_eq!(Argb::BLACK.diff(Argb::WHITE), 255 * 255 * 6);
    }

    #[test]
    fn test_over_extremes() {
        let dst = Argb::opaque(1, 2, 3);
        assert_eq!(Argb::TRANSPARENT.over(dst), dst);
        assert_eq!(Argb::opaque(9, 9, 9).over(dst), Argb::opaque(9, 9, 9));
    }

    #[test]
    fn test_over_half_alpha_on_opaque() {
        let src = Argb::from_channels(128, 255, 0, 0);
        let out = src.over(Argb::opaque(0, 0, 255));
        assert_eq!(out.alpha(), 255);
        assert!((out.red() as i32 - 128).abs() <= 1, "red {}", out.red());
        assert!((out.blue() as i32 - 127).abs() <= 1, "blue {}", out.blue());
    }

    #[test]
    fn test_hex_parsing_formats() {
        assert_eq!("#FFFFFF".parse::<Argb>().unwrap(), Argb::WHITE);
        assert_eq!("000".parse::<Argb>().unwrap(), Argb::BLACK);
        assert_eq!(" #ABC ".parse::<Argb>().unwrap(), Argb(0xFFAABBCC));
        assert_eq!("#80102030".parse::<Argb>().unwrap(), Argb(0x80102030));
        assert_eq!(
            "#abcdef".parse::<Argb>().unwrap(),
            "#ABCDEF".parse::<Argb>().unwrap()
        );
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!(
            "#GGG".parse::<Argb>(),
            Err(ParseColorError::Digit {
                index: 0,
                found: 'G'
            })
        );
        assert_eq!("#FFFF".parse::<Argb>(), Err(ParseColorError::Length(4)));
        assert_eq!("".parse::<Argb>(), Err(ParseColorError::Length(0)));
        assert_eq!(
            "#ééé".parse::<Argb>(),
            Err(ParseColorError::Digit {
                index: 0,
                found: 'é'
            })
        );
    }

    #[test]
    fn test_hex_parsing_rejects_signs() {
        // Integer parsing would accept a leading sign
        assert_eq!(
            "#+F0000".parse::<Argb>(),
            Err(ParseColorError::Digit {
                index: 0,
                found: '+'
            })
        );
        assert_eq!(
            "+1234567".parse::<Argb>(),
            Err(ParseColorError::Digit {
                index: 0,
                found: '+'
            })
        );
        assert_eq!(
            "#F-F".parse::<Argb>(),
            Err(ParseColorError::Digit {
                index: 1,
                found: '-'
            })
        );
    }

    #[test]
    fn test_display_round_trips() {
        let c = Argb(0x80102030);
        assert_eq!(c.to_string(), "#80102030");
        assert_eq!(c.to_string().parse::<Argb>().unwrap(), c);
    }
}
