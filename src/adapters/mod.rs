//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to                    |
//! |------------|------------|--------------------------------|
//! | `strip`    | PixelPort  | any `SmartLedsWrite` driver    |
//! | `log_sink` | EventSink  | `log` facade                   |

pub mod log_sink;
pub mod strip;
