//! Board bring-up shared by the firmware binaries.
//!
//! ESP-IDF only: links the runtime patches, installs the logger and hands
//! out the LED chain on the configured RMT channel and data pin.

use esp_idf_hal::gpio::AnyOutputPin;
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use crate::adapters::strip::PixelStrip;
use crate::config::StripConfig;
use crate::drivers::ws2812::Ws2812Driver;
use crate::error::{Error, Result};

/// Runtime patches, logger and a start-up banner.
pub fn init(app: &str) -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  ledring {} v{}", app, env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
    Ok(())
}

/// Claim the peripherals and wrap the chain in a frame-buffered strip.
///
/// May only be called once per boot; the peripheral singleton is consumed.
pub fn take_strip(config: &StripConfig) -> Result<PixelStrip<Ws2812Driver>> {
    config.validate()?;
    let peripherals = Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;

    // SAFETY: the data GPIO is not claimed by any other driver in this
    // firmware, and the pin singleton from `peripherals` is never used.
    let pin = unsafe { AnyOutputPin::new(config.data_gpio as i32) };
    let driver = Ws2812Driver::new(peripherals.rmt.channel0, pin)?;

    info!(
        "board: {} pixels on GPIO{} (brightness {}, gamma {})",
        config.pixel_count, config.data_gpio, config.brightness, config.gamma
    );
    Ok(PixelStrip::with_config(driver, config)?)
}
