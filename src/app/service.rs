//! Demo runner: the loop every pixel demo shares.
//!
//! ```text
//!  Animation ──render──▶ PixelPort ──write──▶ chain
//!       ▲                                      │
//!       └──────────── DelayNs (pause) ◀────────┘
//! ```
//!
//! One iteration stages a frame, writes it, reports it to the
//! [`EventSink`], then pauses for whatever the animation asked. A pixel
//! error ends the run; nothing is retried.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::animation::Animation;
use crate::error::Result;

use super::events::AppEvent;
use super::ports::{EventSink, PixelPort};

pub struct DemoRunner<P, D, E> {
    strip: P,
    delay: D,
    sink: E,
    frames_written: u32,
}

impl<P, D, E> DemoRunner<P, D, E>
where
    P: PixelPort,
    D: DelayNs,
    E: EventSink,
{
    pub fn new(strip: P, delay: D, sink: E) -> Self {
        Self {
            strip,
            delay,
            sink,
            frames_written: 0,
        }
    }

    /// Render, write and pause once.
    pub fn step<A: Animation>(&mut self, animation: &mut A) -> Result<()> {
        let pause_ms = animation.render(&mut self.strip)?;
        self.strip.write()?;
        self.frames_written = self.frames_written.wrapping_add(1);
        self.sink.emit(&AppEvent::FrameWritten {
            frame: self.frames_written,
            pause_ms,
        });
        if pause_ms > 0 {
            self.delay.delay_ms(pause_ms);
        }
        Ok(())
    }

    /// Run `animation` for `frames` frames, or forever with `None`.
    ///
    /// Returns the number of frames written by this call. An unbounded run
    /// only returns on a pixel error.
    pub fn run<A: Animation>(&mut self, animation: &mut A, frames: Option<u32>) -> Result<u32> {
        info!(
            "runner: {} on {} pixels ({})",
            animation.name(),
            self.strip.len(),
            frames.map_or_else(|| "until stopped".to_string(), |n| format!("{n} frames"))
        );
        self.sink.emit(&AppEvent::Started {
            animation: animation.name(),
            pixels: self.strip.len(),
        });

        let mut written = 0u32;
        match frames {
            Some(limit) => {
                while written < limit {
                    self.step(animation)?;
                    written += 1;
                }
                self.sink.emit(&AppEvent::Finished {
                    animation: animation.name(),
                    frames: written,
                });
            }
            None => loop {
                self.step(animation)?;
                written = written.wrapping_add(1);
            },
        }
        Ok(written)
    }

    pub fn frames_written(&self) -> u32 {
        self.frames_written
    }

    pub fn strip(&self) -> &P {
        &self.strip
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn into_parts(self) -> (P, D, E) {
        (self.strip, self.delay, self.sink)
    }
}
