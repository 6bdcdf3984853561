//! Kennel Core
//!
//! Foundational primitives shared by the styling crates:
//!
//! - **Color conversion**: parsing stored `#rrggbb` values and converting them
//!   into the `H S% L%` triples used by the stylesheet variable system
//! - **Style signals**: a per-browsing-context broadcast bus carrying the
//!   `RefreshRequest` / `StyleApplied` notifications
//!
//! # Example
//!
//! ```rust
//! use kennel_core::color::hex_to_hsl;
//!
//! assert_eq!(hex_to_hsl("#ff0000").unwrap(), "0 100% 50%");
//! ```

pub mod color;
pub mod signals;

pub use color::{hex_to_hsl, Color, ColorError, Hsl};
pub use signals::{ListenerId, SignalBus, SignalHandler, StyleSignal};
