//! Outbound application events.
//!
//! The [`DemoRunner`](super::service::DemoRunner) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

/// Structured events emitted while an animation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// An animation is about to render its first frame.
    Started {
        animation: &'static str,
        pixels: usize,
    },

    /// A frame was written to the chain; `pause_ms` follows it.
    FrameWritten { frame: u32, pause_ms: u32 },

    /// A bounded run finished after `frames` writes.
    Finished { animation: &'static str, frames: u32 },
}
