//! Port traits: the boundary between the demo logic and the LED hardware.
//!
//! ```text
//!   Animation ──▶ PixelPort ──▶ strip adapter ──▶ WS2812 driver
//!                 EventSink ──▶ log adapter
//! ```
//!
//! Adapters implement these traits and the [`DemoRunner`](super::service::DemoRunner)
//! consumes them via generics, so the demos never touch the RMT peripheral
//! directly and run unchanged against test doubles.

use smart_leds::RGB8;

use crate::error::PixelError;

// ───────────────────────────────────────────────────────────────
// Pixel port (driven adapter: domain → LED chain)
// ───────────────────────────────────────────────────────────────

/// The two-operation addressable-LED interface: stage a colour, then flush
/// the whole frame to the chain.
pub trait PixelPort {
    /// Number of addressable pixels on the chain.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage `colour` for pixel `index` (0-based). Nothing reaches the
    /// hardware until [`write`](Self::write).
    fn set_pixel(&mut self, index: usize, colour: RGB8) -> Result<(), PixelError>;

    /// Stage black for every pixel.
    fn clear(&mut self);

    /// Transmit the staged frame.
    fn write(&mut self) -> Result<(), PixelError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The runner emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
