//! scanner: a block of lit pixels bounces along the ring, shifting hue
//! every frame.

use anyhow::Result;

use ledring::adapters::log_sink::LogEventSink;
use ledring::animation::Scanner;
use ledring::app::service::DemoRunner;
use ledring::config::StripConfig;
use ledring::drivers::board;
use ledring::drivers::delay::SystemDelay;

fn main() -> Result<()> {
    board::init("scanner")?;

    let config = StripConfig::default();
    let strip = board::take_strip(&config)?;
    let mut runner = DemoRunner::new(strip, SystemDelay::new(), LogEventSink::new());

    runner.run(&mut Scanner::from_config(&config), None)?;
    Ok(())
}
