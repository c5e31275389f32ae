//! GPIO / peripheral assignments for the LED ring board.
//!
//! Single source of truth: the strip driver and the default config read
//! these rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Addressable LED strip (WS2812B, 60 pixels)
// ---------------------------------------------------------------------------

/// Data line of the first pixel (DIN of `rgb1`).
pub const LED_DATA_GPIO: u32 = 1;

/// Pixels on the ring as wired on the board.
pub const LED_RING_PIXELS: usize = 60;
