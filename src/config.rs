//! Configuration parameters
//!
//! Tunables for the pixel demos ([`StripConfig`]) and the ring layout
//! generator ([`LayoutConfig`]). Both serialise with serde so the CLI can
//! read a layout from a JSON file.

use serde::{Deserialize, Serialize};

use crate::colour::{DEMO_HSV, Hsv};
use crate::error::{Error, Result};
use crate::pins;

/// Strip wiring and demo timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    // --- Strip ---
    /// Pixels on the chain (the demos only light the first few)
    pub pixel_count: usize,
    /// GPIO wired to DIN of the first pixel
    pub data_gpio: u32,
    /// Global brightness applied on every write (255 = unscaled)
    pub brightness: u8,
    /// Apply the WS2812 gamma table before writing
    pub gamma: bool,

    // --- Blink ---
    /// Pause after each on/off write (milliseconds)
    pub blink_interval_ms: u32,

    // --- HSV still ---
    pub demo_colour: Hsv,

    // --- Scanner ---
    /// Lit pixels in the moving block
    pub scanner_length: usize,
    /// Pause between scanner frames (milliseconds)
    pub scanner_interval_ms: u32,
    /// Starting colour of the block
    pub scanner_colour: Hsv,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            // Strip
            pixel_count: pins::LED_RING_PIXELS,
            data_gpio: pins::LED_DATA_GPIO,
            brightness: 255,
            gamma: false,

            // Blink
            blink_interval_ms: 1000, // 0.5 Hz

            // HSV still
            demo_colour: DEMO_HSV,

            // Scanner
            scanner_length: 5,
            scanner_interval_ms: 20, // 50 fps
            scanner_colour: Hsv::new(200, 255, 255),
        }
    }
}

impl StripConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pixel_count == 0 {
            return Err(Error::Config("pixel_count must be at least 1"));
        }
        if self.scanner_length == 0 || self.scanner_length > self.pixel_count {
            return Err(Error::Config("scanner_length must be in 1..=pixel_count"));
        }
        if self.brightness == 0 {
            return Err(Error::Config("brightness 0 would blank every write"));
        }
        Ok(())
    }
}

/// Ring geometry and the simulator part/wire vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of pixels on the ring
    pub count: usize,
    /// Offset added to every ring angle before projecting (degrees)
    pub phase_deg: f64,
    /// Ring angle of the first pixel (degrees); `None` = half a step
    pub start_deg: Option<f64>,
    /// Ring radius in diagram units
    pub amplitude: f64,
    /// Simulator part type of each pixel
    pub part_type: String,
    /// Prefix of the part ids (`rgb` → `rgb1`, `rgb2`, ...)
    pub id_prefix: String,
    /// Wire colour of the DOUT → DIN chain
    pub wire_colour: String,
    /// `author` field of a full diagram document
    pub author: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            count: pins::LED_RING_PIXELS,
            phase_deg: -90.0,
            start_deg: None,
            amplitude: 500.0,
            part_type: "wokwi-neopixel".into(),
            id_prefix: "rgb".into(),
            wire_colour: "green".into(),
            author: "ledring".into(),
        }
    }
}

impl LayoutConfig {
    /// Angular distance between neighbouring pixels.
    pub fn step_deg(&self) -> f64 {
        360.0 / self.count as f64
    }

    /// Ring angle of pixel 1.
    pub fn first_angle_deg(&self) -> f64 {
        self.start_deg.unwrap_or(self.step_deg() / 2.0)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::Config("count must be at least 1"));
        }
        if !self.amplitude.is_finite() {
            return Err(Error::Config("amplitude must be finite"));
        }
        if !self.phase_deg.is_finite() {
            return Err(Error::Config("phase must be finite"));
        }
        if self.start_deg.is_some_and(|s| !s.is_finite()) {
            return Err(Error::Config("start angle must be finite"));
        }
        if self.id_prefix.is_empty() {
            return Err(Error::Config("id prefix must not be empty"));
        }
        Ok(())
    }
}
