//! Core of the inSquare watchface: two-digit hour and minute inside a
//! framed square, in one of three color schemes picked from the phone.
//!
//! This crate is platform-agnostic and shared between the desktop
//! simulator and any watch host that implements [`host::WatchHost`]:
//!
//! - [`colors`]: RGB565 constants and the backdrop gradient blend
//! - [`config`]: Screen geometry, message keys and display capability
//! - [`scheme`]: Display modes and their resolved color schemes
//! - [`time_format`]: Hour and minute text for 12h and 24h clocks
//! - [`storage`]: Persisted display mode
//! - [`message`]: Inbound configuration messages
//! - [`render`]: Dirty tracking and the compositing pass
//! - [`host`]: Resources and services the watch platform provides
//! - [`watchface`]: Lifecycle controller and owned state
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Logging goes through the `log`
//! facade; the embedding binary picks the backend.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod host;
pub mod message;
pub mod render;
pub mod scheme;
pub mod storage;
pub mod styles;
pub mod time_format;
pub mod watchface;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use config::{Capability, MixedBackground, WatchfaceConfig};
pub use host::{Resource, Service, WatchHost};
pub use message::{AppMessage, IgnoreReason, MessageOutcome, Tuple, TupleValue};
pub use render::ComposeResult;
pub use scheme::{ColorScheme, DisplayMode, resolve};
pub use storage::{MemoryStore, ModeStore};
pub use time_format::{ClockTime, TimeStrings, format_time};
pub use watchface::{Phase, Watchface, WatchfaceError, WatchfaceState};
