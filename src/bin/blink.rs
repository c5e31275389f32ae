//! blink: pixel 0 toggles red / off once a second until reset.

use anyhow::Result;

use ledring::adapters::log_sink::LogEventSink;
use ledring::animation::Blink;
use ledring::app::service::DemoRunner;
use ledring::config::StripConfig;
use ledring::drivers::board;
use ledring::drivers::delay::SystemDelay;

fn main() -> Result<()> {
    board::init("blink")?;

    let config = StripConfig::default();
    let strip = board::take_strip(&config)?;
    let mut runner = DemoRunner::new(strip, SystemDelay::new(), LogEventSink::new());

    runner.run(&mut Blink::from_config(&config), None)?;
    Ok(())
}
