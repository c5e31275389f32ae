//! LED ring library.
//!
//! Exposes the pure-logic modules (HSV conversion, ring layout, animations,
//! demo runner) for the binaries and for host-side testing. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod animation;
pub mod app;
pub mod colour;
pub mod config;
pub mod drivers;
pub mod error;
pub mod layout;
pub mod pins;
