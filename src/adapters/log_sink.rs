//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing demo events to the `log` facade
//! (ESP-IDF logger on the device, the fmt subscriber on the host). Frame
//! events go out at debug level.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { animation, pixels } => {
                info!("START | animation={} pixels={}", animation, pixels);
            }
            AppEvent::FrameWritten { frame, pause_ms } => {
                debug!("FRAME | #{} pause={}ms", frame, pause_ms);
            }
            AppEvent::Finished { animation, frames } => {
                info!("DONE  | animation={} frames={}", animation, frames);
            }
        }
    }
}
