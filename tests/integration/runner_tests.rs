//! Integration tests for the Animation → DemoRunner → PixelPort pipeline.
//!
//! These run on the host and check what reaches the chain, how long the
//! runner pauses after each frame, and which events it reports.

use ledring::adapters::strip::PixelStrip;
use ledring::animation::{Blink, HsvStill, Scanner};
use ledring::app::events::AppEvent;
use ledring::app::service::DemoRunner;
use ledring::colour::{BLACK, DEMO_HSV, Hsv, RED};
use ledring::config::StripConfig;
use ledring::drivers::ws2812::Ws2812Driver;
use ledring::error::{Error, PixelError};
use smart_leds::RGB8;

use crate::mock_hw::{FailingDriver, MockDelay, MockStrip, PixelCall, RecordingSink};

fn runner(strip: MockStrip) -> DemoRunner<MockStrip, MockDelay, RecordingSink> {
    DemoRunner::new(strip, MockDelay::default(), RecordingSink::default())
}

// ── Blink ─────────────────────────────────────────────────────

#[test]
fn blink_alternates_red_and_off_with_one_second_pauses() {
    let config = StripConfig::default();
    let mut runner = runner(MockStrip::new(config.pixel_count));

    let written = runner.run(&mut Blink::from_config(&config), Some(4)).unwrap();
    assert_eq!(written, 4);

    let (strip, delay, _) = runner.into_parts();
    assert_eq!(strip.first_pixel_history(), vec![RED, BLACK, RED, BLACK]);
    assert_eq!(delay.pauses_ms, vec![1000; 4]);
}

#[test]
fn blink_touches_only_pixel_zero() {
    let mut runner = runner(MockStrip::new(60));
    runner.run(&mut Blink::new(RED, 1000), Some(2)).unwrap();

    let (strip, _, _) = runner.into_parts();
    assert_eq!(
        strip.calls,
        vec![
            PixelCall::Set { index: 0, colour: RED },
            PixelCall::Write,
            PixelCall::Set { index: 0, colour: BLACK },
            PixelCall::Write,
        ]
    );
    assert!(strip.written.iter().all(|f| f[1..].iter().all(|c| *c == BLACK)));
}

#[test]
fn bounded_run_reports_start_frames_and_finish() {
    let mut runner = runner(MockStrip::new(60));
    runner.run(&mut Blink::new(RED, 1000), Some(2)).unwrap();

    assert_eq!(
        runner.sink().events,
        vec![
            AppEvent::Started {
                animation: "blink",
                pixels: 60
            },
            AppEvent::FrameWritten {
                frame: 1,
                pause_ms: 1000
            },
            AppEvent::FrameWritten {
                frame: 2,
                pause_ms: 1000
            },
            AppEvent::Finished {
                animation: "blink",
                frames: 2
            },
        ]
    );
}

#[test]
fn frame_counter_spans_runs() {
    let mut runner = runner(MockStrip::new(4));
    let mut blink = Blink::new(RED, 10);
    assert_eq!(runner.run(&mut blink, Some(3)).unwrap(), 3);
    assert_eq!(runner.run(&mut blink, Some(2)).unwrap(), 2);
    assert_eq!(runner.frames_written(), 5);
    // Blink state carries over: frame 4 is off, frame 5 lit.
    assert_eq!(
        runner.strip().first_pixel_history(),
        vec![RED, BLACK, RED, BLACK, RED]
    );
}

#[test]
fn zero_frame_run_writes_nothing() {
    let mut runner = runner(MockStrip::new(4));
    assert_eq!(runner.run(&mut Blink::new(RED, 10), Some(0)).unwrap(), 0);
    assert!(runner.strip().written.is_empty());
    assert_eq!(runner.sink().events.len(), 2);
}

// ── HSV still ─────────────────────────────────────────────────

#[test]
fn hsv_still_writes_reference_tone_once_without_pausing() {
    let mut runner = runner(MockStrip::new(60));
    runner.run(&mut HsvStill::new(DEMO_HSV), Some(1)).unwrap();

    let (strip, delay, sink) = runner.into_parts();
    assert_eq!(strip.written.len(), 1);
    assert_eq!(strip.written[0][0], RGB8::new(0, 128, 126));
    assert!(delay.pauses_ms.is_empty());
    assert!(sink.events.contains(&AppEvent::FrameWritten {
        frame: 1,
        pause_ms: 0
    }));
}

#[test]
fn hsv_still_on_empty_strip_is_an_index_error() {
    let mut runner = runner(MockStrip::new(0));
    let err = runner.run(&mut HsvStill::new(DEMO_HSV), Some(1)).unwrap_err();
    assert_eq!(
        err,
        Error::Pixel(PixelError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert!(runner.strip().written.is_empty());
}

// ── Scanner over the simulated chain ──────────────────────────

fn lit(frame: &[RGB8]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != BLACK)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn scanner_bounces_off_the_far_end() {
    let strip = PixelStrip::new(Ws2812Driver::new(), 8).unwrap();
    let mut runner = DemoRunner::new(strip, MockDelay::default(), RecordingSink::default());
    let mut scanner = Scanner::new(Hsv::new(0, 255, 255), 5, 20);

    runner.run(&mut scanner, Some(6)).unwrap();

    let (strip, delay, _) = runner.into_parts();
    let starts: Vec<usize> = strip
        .driver()
        .frames()
        .iter()
        .map(|f| lit(f)[0])
        .collect();
    assert_eq!(starts, vec![0, 1, 2, 3, 2, 1]);
    assert!(strip.driver().frames().iter().all(|f| lit(f).len() == 5));
    assert_eq!(delay.pauses_ms, vec![20; 6]);
}

#[test]
fn scanner_shifts_hue_every_frame() {
    let strip = PixelStrip::new(Ws2812Driver::new(), 8).unwrap();
    let mut runner = DemoRunner::new(strip, MockDelay::default(), RecordingSink::default());
    let mut scanner = Scanner::new(Hsv::new(0, 255, 255), 5, 20);

    runner.run(&mut scanner, Some(2)).unwrap();

    let frames = runner.strip().driver().frames();
    assert_eq!(frames[0][0], RGB8::new(255, 0, 0));
    assert_eq!(frames[1][1], Hsv::new(1, 255, 255).to_rgb());
    assert_eq!(scanner.colour().hue, 2);
}

// ── Error propagation ─────────────────────────────────────────

#[test]
fn driver_failure_ends_the_run() {
    let strip = PixelStrip::new(FailingDriver, 4).unwrap();
    let mut runner = DemoRunner::new(strip, MockDelay::default(), RecordingSink::default());

    let err = runner.run(&mut Blink::new(RED, 1000), Some(3)).unwrap_err();
    assert_eq!(err, Error::Pixel(PixelError::WriteFailed));

    let (_, delay, sink) = runner.into_parts();
    assert!(delay.pauses_ms.is_empty(), "no pause after a failed write");
    assert_eq!(
        sink.events,
        vec![AppEvent::Started {
            animation: "blink",
            pixels: 4
        }]
    );
}

#[test]
fn failure_mid_run_keeps_earlier_frames() {
    let mut runner = runner(MockStrip::failing_after(4, 2));
    let err = runner.run(&mut Blink::new(RED, 5), None).unwrap_err();
    assert_eq!(err, Error::Pixel(PixelError::WriteFailed));
    assert_eq!(runner.frames_written(), 2);
    assert_eq!(runner.strip().first_pixel_history(), vec![RED, BLACK]);
}
