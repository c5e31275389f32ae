//! Peripheral drivers: the WS2812 chain, the frame delay and board bring-up.

#[cfg(target_os = "espidf")]
pub mod board;
pub mod delay;
pub mod ws2812;
