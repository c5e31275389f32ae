//! Frame generators for the pixel demos.
//!
//! Each [`Animation`] stages one frame on a [`PixelPort`] per call and
//! returns how long the runner should pause after writing it. The runner
//! owns the write and the pause; animations only decide colours.
//!
//! | Animation  | Frame                                   | Pause    |
//! |------------|-----------------------------------------|----------|
//! | `Blink`    | pixel 0 red, then off, alternating      | 1000 ms  |
//! | `HsvStill` | pixel 0 set to one converted HSV colour | none     |
//! | `Scanner`  | 5-pixel block bouncing along the strip  | 20 ms    |

use smart_leds::RGB8;

use crate::app::ports::PixelPort;
use crate::colour::{BLACK, Hsv, RED};
use crate::config::StripConfig;
use crate::error::PixelError;

/// A frame generator.
pub trait Animation {
    /// Short name for logs and events.
    fn name(&self) -> &'static str;

    /// Stage the next frame on `strip` and return the pause, in
    /// milliseconds, that should follow its write.
    fn render<P: PixelPort>(&mut self, strip: &mut P) -> Result<u32, PixelError>;
}

// ── Blink ─────────────────────────────────────────────────────

/// Pixel 0 alternates between a colour and off.
#[derive(Debug, Clone)]
pub struct Blink {
    colour: RGB8,
    interval_ms: u32,
    lit: bool,
}

impl Blink {
    /// Starts lit.
    pub fn new(colour: RGB8, interval_ms: u32) -> Self {
        Self {
            colour,
            interval_ms,
            lit: true,
        }
    }

    pub fn from_config(config: &StripConfig) -> Self {
        Self::new(RED, config.blink_interval_ms)
    }

    /// Whether the next rendered frame is the lit one.
    pub fn next_is_lit(&self) -> bool {
        self.lit
    }
}

impl Animation for Blink {
    fn name(&self) -> &'static str {
        "blink"
    }

    fn render<P: PixelPort>(&mut self, strip: &mut P) -> Result<u32, PixelError> {
        let colour = if self.lit { self.colour } else { BLACK };
        strip.set_pixel(0, colour)?;
        self.lit = !self.lit;
        Ok(self.interval_ms)
    }
}

// ── HSV still ─────────────────────────────────────────────────

/// Pixel 0 shows one HSV colour.
#[derive(Debug, Clone, Copy)]
pub struct HsvStill {
    colour: Hsv,
}

impl HsvStill {
    pub fn new(colour: Hsv) -> Self {
        Self { colour }
    }

    pub fn rgb(&self) -> RGB8 {
        self.colour.to_rgb()
    }
}

impl Animation for HsvStill {
    fn name(&self) -> &'static str {
        "hsv-still"
    }

    fn render<P: PixelPort>(&mut self, strip: &mut P) -> Result<u32, PixelError> {
        strip.set_pixel(0, self.rgb())?;
        Ok(0)
    }
}

// ── Scanner ───────────────────────────────────────────────────

/// A block of lit pixels that bounces between the strip ends, shifting hue
/// by one step per frame.
///
/// The block turns around once its head reaches 0 or its tail reaches the
/// last pixel. Parts of the block past the end are dropped, which only
/// happens when the block is as long as the strip.
#[derive(Debug, Clone)]
pub struct Scanner {
    colour: Hsv,
    length: usize,
    interval_ms: u32,
    index: i32,
    direction: i32,
}

impl Scanner {
    pub fn new(colour: Hsv, length: usize, interval_ms: u32) -> Self {
        Self {
            colour,
            length,
            interval_ms,
            index: 0,
            direction: 1,
        }
    }

    pub fn from_config(config: &StripConfig) -> Self {
        Self::new(
            config.scanner_colour,
            config.scanner_length,
            config.scanner_interval_ms,
        )
    }

    /// First pixel of the block in the next frame.
    pub fn position(&self) -> i32 {
        self.index
    }

    pub fn colour(&self) -> Hsv {
        self.colour
    }

    fn advance(&mut self, strip_len: usize) {
        let last_start = strip_len as i32 - self.length as i32;
        if self.index <= 0 {
            self.direction = 1;
        } else if self.index >= last_start {
            self.direction = -1;
        }
        self.index += self.direction;
        // Hue wraps at 255, never 256.
        self.colour.hue = ((u16::from(self.colour.hue) + 1) % 255) as u8;
    }
}

impl Animation for Scanner {
    fn name(&self) -> &'static str {
        "scanner"
    }

    fn render<P: PixelPort>(&mut self, strip: &mut P) -> Result<u32, PixelError> {
        strip.clear();
        let rgb = self.colour.to_rgb();
        let len = strip.len();
        for offset in 0..self.length {
            let pos = self.index as usize + offset;
            if pos < len {
                strip.set_pixel(pos, rgb)?;
            }
        }
        self.advance(len);
        Ok(self.interval_ms)
    }
}
