//! Kennel Page Runtime
//!
//! The client half of site styling. A [`BrowsingContext`] fetches style blobs
//! from a [`StyleSource`], installs them in its [`StyleRegistry`], and keeps
//! the inline style of every mounted button in sync with the precedence rules
//! of `kennel_theme`.
//!
//! Everything here is single-threaded per context: methods take `&mut self`
//! and signals are delivered by [`BrowsingContext::pump`] in FIFO order.

pub mod context;
pub mod document;
pub mod registry;
pub mod source;

pub use context::BrowsingContext;
pub use document::{ButtonElement, ButtonId, ButtonProps, Document};
pub use registry::{StyleRegistry, StyleSlot};
pub use source::{FetchError, HttpStyleSource, InstancePreset, StyleSource};
