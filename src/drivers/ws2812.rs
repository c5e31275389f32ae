//! WS2812 ("NeoPixel") chain driver.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: clocks the GRB bit stream out of an RMT TX channel via
//! `ws2812-esp32-rmt-driver`.
//! On host/test: keeps every transmitted frame in memory.
//!
//! Both expose the same `SmartLedsWrite<Color = RGB8>` surface, so
//! [`PixelStrip`](crate::adapters::strip::PixelStrip) is identical on
//! either side.

use smart_leds::{RGB8, SmartLedsWrite};

// ── ESP-IDF ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
use esp_idf_hal::{gpio::OutputPin, peripheral::Peripheral, rmt::RmtChannel};
#[cfg(target_os = "espidf")]
use ws2812_esp32_rmt_driver::{Ws2812Esp32Rmt, Ws2812Esp32RmtDriverError};

#[cfg(target_os = "espidf")]
pub struct Ws2812Driver {
    inner: Ws2812Esp32Rmt<'static>,
}

#[cfg(target_os = "espidf")]
impl Ws2812Driver {
    /// Claim `channel` and drive the chain's DIN from `pin`.
    pub fn new<C: RmtChannel>(
        channel: impl Peripheral<P = C> + 'static,
        pin: impl Peripheral<P = impl OutputPin> + 'static,
    ) -> Result<Self, crate::error::Error> {
        let inner = Ws2812Esp32Rmt::new(channel, pin).map_err(|e| {
            log::error!("ws2812: RMT driver init failed: {:?}", e);
            crate::error::Error::Init("WS2812 RMT driver")
        })?;
        log::info!("ws2812: RMT driver ready");
        Ok(Self { inner })
    }
}

#[cfg(target_os = "espidf")]
impl SmartLedsWrite for Ws2812Driver {
    type Error = Ws2812Esp32RmtDriverError;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.inner.write(iterator)
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct Ws2812Driver {
    frames: Vec<Vec<RGB8>>,
}

#[cfg(not(target_os = "espidf"))]
impl Ws2812Driver {
    pub fn new() -> Self {
        log::info!("ws2812(sim): frames kept in memory");
        Self::default()
    }

    pub fn frames_written(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn frames(&self) -> &[Vec<RGB8>] {
        &self.frames
    }
}

#[cfg(not(target_os = "espidf"))]
impl SmartLedsWrite for Ws2812Driver {
    type Error = core::convert::Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}
