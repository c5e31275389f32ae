//! Frame-buffered pixel strip: bridges any `SmartLedsWrite` driver to the
//! [`PixelPort`] trait.
//!
//! Colours are staged in a fixed-capacity buffer and only leave the chip on
//! [`PixelPort::write`], where global brightness and the optional gamma
//! table are applied on the way out.

use core::fmt::Debug;

use heapless::Vec;
use log::{debug, warn};
use smart_leds::{RGB8, SmartLedsWrite, brightness, gamma};

use crate::app::ports::PixelPort;
use crate::colour::BLACK;
use crate::config::StripConfig;
use crate::error::PixelError;

/// Frame buffer capacity. Stack-allocated, no heap.
pub const MAX_PIXELS: usize = 256;

pub struct PixelStrip<W> {
    driver: W,
    frame: Vec<RGB8, MAX_PIXELS>,
    brightness: u8,
    gamma: bool,
}

impl<W> PixelStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    /// A strip of `len` pixels, all black, unscaled.
    pub fn new(driver: W, len: usize) -> Result<Self, PixelError> {
        let mut frame = Vec::new();
        frame
            .resize(len, BLACK)
            .map_err(|()| PixelError::TooManyPixels {
                requested: len,
                capacity: MAX_PIXELS,
            })?;
        Ok(Self {
            driver,
            frame,
            brightness: u8::MAX,
            gamma: false,
        })
    }

    pub fn with_config(driver: W, config: &StripConfig) -> Result<Self, PixelError> {
        let mut strip = Self::new(driver, config.pixel_count)?;
        strip.brightness = config.brightness;
        strip.gamma = config.gamma;
        Ok(strip)
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    pub fn set_gamma(&mut self, enabled: bool) {
        self.gamma = enabled;
    }

    /// The staged frame, before brightness/gamma.
    pub fn frame(&self) -> &[RGB8] {
        &self.frame
    }

    pub fn driver(&self) -> &W {
        &self.driver
    }
}

impl<W> PixelPort for PixelStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    fn len(&self) -> usize {
        self.frame.len()
    }

    fn set_pixel(&mut self, index: usize, colour: RGB8) -> Result<(), PixelError> {
        let len = self.frame.len();
        let slot = self
            .frame
            .get_mut(index)
            .ok_or(PixelError::IndexOutOfRange { index, len })?;
        *slot = colour;
        Ok(())
    }

    fn clear(&mut self) {
        self.frame.fill(BLACK);
    }

    fn write(&mut self) -> Result<(), PixelError> {
        let pixels = self.frame.iter().copied();
        let result = if self.gamma {
            self.driver.write(brightness(gamma(pixels), self.brightness))
        } else {
            self.driver.write(brightness(pixels, self.brightness))
        };
        result.map_err(|e| {
            warn!("strip: write of {} pixels failed: {:?}", self.frame.len(), e);
            PixelError::WriteFailed
        })?;
        debug!("strip: wrote {} pixels", self.frame.len());
        Ok(())
    }
}
