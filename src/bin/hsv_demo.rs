//! hsv-demo: convert one HSV colour and show it on pixel 0.
//!
//! The frame is written once; the task then idles so the chain keeps its
//! latched colour.

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use log::info;

use ledring::adapters::log_sink::LogEventSink;
use ledring::animation::HsvStill;
use ledring::app::service::DemoRunner;
use ledring::config::StripConfig;
use ledring::drivers::board;
use ledring::drivers::delay::SystemDelay;

fn main() -> Result<()> {
    board::init("hsv-demo")?;

    let config = StripConfig::default();
    let strip = board::take_strip(&config)?;
    let mut still = HsvStill::new(config.demo_colour);
    info!("hsv-demo: {:?} -> {:?}", config.demo_colour, still.rgb());

    let mut runner = DemoRunner::new(strip, SystemDelay::new(), LogEventSink::new());
    runner.run(&mut still, Some(1))?;

    let (_strip, mut delay, _sink) = runner.into_parts();
    loop {
        delay.delay_ms(1000);
    }
}
