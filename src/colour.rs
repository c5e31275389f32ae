//! 8-bit fixed-point HSV → RGB conversion.
//!
//! The hue circle is split into six 43-unit sextants. Inside a sextant the
//! remainder is scaled by 6 to a 0–252 ramp, and the three intermediate
//! intensities are computed with multiply-then-shift:
//!
//! ```text
//! p = (v * (255 - s)) >> 8
//! q = (v * (255 - ((s * rem) >> 8))) >> 8
//! t = (v * (255 - ((s * (255 - rem)) >> 8))) >> 8
//! ```
//!
//! `>> 8` is floor division by 256. Results must match the reference
//! output bit-for-bit, so nothing here rounds.
//!
//! `smart_leds::hsv::hsv2rgb` follows a different curve and does not
//! reproduce these values.

use serde::{Deserialize, Serialize};
use smart_leds::RGB8;

const SEXTANT_WIDTH: i64 = 43;

/// Hue sextant selecting which of p/q/t/v lands in each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// 0: (v, t, p)
    Red,
    /// 1: (q, v, p)
    Yellow,
    /// 2: (p, v, t)
    Green,
    /// 3: (p, q, v)
    Cyan,
    /// 4: (t, p, v)
    Blue,
    /// 5: (v, p, q)
    ///
    /// Also the catch-all. `h` in 255..=257 lands here as region 5; `h >= 258`
    /// and negative `h` fall outside the nominal range and take the same
    /// assignment. That is accepted behaviour, not a fault.
    Magenta,
}

impl Region {
    /// Sextant index as computed by floor division of the hue by 43.
    pub fn index_of_hue(h: i32) -> i64 {
        i64::from(h).div_euclid(SEXTANT_WIDTH)
    }

    pub fn of_hue(h: i32) -> Self {
        Self::from_index(Self::index_of_hue(h))
    }

    fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Red,
            1 => Self::Yellow,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Blue,
            _ => Self::Magenta,
        }
    }

    /// Order the intermediate intensities into an (r, g, b) triple.
    fn assign<T: Copy>(self, v: T, p: T, q: T, t: T) -> (T, T, T) {
        match self {
            Self::Red => (v, t, p),
            Self::Yellow => (q, v, p),
            Self::Green => (p, v, t),
            Self::Cyan => (p, q, v),
            Self::Blue => (t, p, v),
            Self::Magenta => (v, p, q),
        }
    }
}

/// Convert raw, unchecked HSV integers to an RGB triple.
///
/// Inputs are nominally in `[0, 255]` but are not validated; anything else
/// yields the direct arithmetic result, which may itself leave `[0, 255]`
/// (negative components included). Intermediates are widened to `i64`, so
/// no `i32` input overflows.
pub fn hsv_to_rgb(h: i32, s: i32, v: i32) -> (i64, i64, i64) {
    let (h, s, v) = (i64::from(h), i64::from(s), i64::from(v));
    if s == 0 {
        return (v, v, v);
    }

    let region = h.div_euclid(SEXTANT_WIDTH);
    let remainder = (h - region * SEXTANT_WIDTH) * 6;

    let p = (v * (255 - s)) >> 8;
    let q = (v * (255 - ((s * remainder) >> 8))) >> 8;
    let t = (v * (255 - ((s * (255 - remainder)) >> 8))) >> 8;

    Region::from_index(region).assign(v, p, q, t)
}

/// An HSV colour in the nominal 8-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    pub fn region(self) -> Region {
        Region::of_hue(i32::from(self.hue))
    }

    /// Convert to an 8-bit RGB pixel.
    ///
    /// With every input in `[0, 255]`, p/q/t are at most 254 and never
    /// negative, so narrowing each channel to `u8` is lossless.
    pub fn to_rgb(self) -> RGB8 {
        let (r, g, b) = hsv_to_rgb(
            i32::from(self.hue),
            i32::from(self.sat),
            i32::from(self.val),
        );
        RGB8::new(r as u8, g as u8, b as u8)
    }
}

impl From<Hsv> for RGB8 {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

// ── Well-known colours ────────────────────────────────────────

pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

/// The greenish tone the single-pixel demo shows.
pub const DEMO_HSV: Hsv = Hsv::new(128, 255, 128);
