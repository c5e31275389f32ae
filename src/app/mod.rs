//! Application core: demo orchestration, zero direct I/O.
//!
//! The runner drives an [`Animation`](crate::animation::Animation) frame by
//! frame. All interaction with the LED chain and the clock happens through
//! the port traits in [`ports`] and `embedded_hal`'s `DelayNs`, keeping
//! this layer testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
