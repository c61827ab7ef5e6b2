//! Inbound configuration messages from the companion phone.
//!
//! A message is a small dictionary of `(key, value)` tuples delivered by the
//! host's message channel. Only the first tuple is inspected, and only the
//! [`KEY_MODE`] key with a string value of `"0"`, `"1"` or `"2"` has an
//! effect. Everything else is dropped without touching state or storage.
//!
//! # Handling
//!
//! ```text
//! first tuple ── key != KEY_MODE ──────────────▶ Ignored(UnknownKey)
//!      │
//!      ├──── value not a string ──────────────▶ Ignored(NotAString)
//!      ├──── string not "0" / "1" / "2" ──────▶ Ignored(UnrecognizedValue)
//!      ▼
//! apply colors ─▶ mark canvas dirty ─▶ persist ─▶ Applied(mode)
//! ```

use core::fmt;

use heapless::{String, Vec};
use log::{debug, info};

use crate::config::{KEY_MODE, MixedBackground, WatchfaceConfig};
use crate::scheme::{ColorScheme, DisplayMode};
use crate::storage::ModeStore;
use crate::watchface::WatchfaceState;

/// Maximum tuples kept from one inbound message.
pub const MAX_TUPLES: usize = 4;

/// Maximum length of a string value, in bytes.
pub const MAX_VALUE_LEN: usize = 16;

/// Value half of a message tuple.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TupleValue {
    CString(String<MAX_VALUE_LEN>),
    Int(i32),
    UInt(u32),
}

/// One `(key, value)` entry of a message.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tuple {
    pub key: u32,
    pub value: TupleValue,
}

impl Tuple {
    /// String-valued tuple. Returns `None` if `value` exceeds [`MAX_VALUE_LEN`].
    pub fn cstring(
        key: u32,
        value: &str,
    ) -> Option<Self> {
        let mut s = String::new();
        s.push_str(value).ok()?;
        Some(Self {
            key,
            value: TupleValue::CString(s),
        })
    }

    pub const fn int(
        key: u32,
        value: i32,
    ) -> Self {
        Self {
            key,
            value: TupleValue::Int(value),
        }
    }
}

/// An inbound message, tuples in arrival order.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct AppMessage {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl AppMessage {
    pub const fn new() -> Self { Self { tuples: Vec::new() } }

    /// Message carrying a single mode value, as the phone sends it.
    pub fn mode(value: &str) -> Option<Self> {
        let mut message = Self::new();
        message.push(Tuple::cstring(KEY_MODE, value)?).ok()?;
        Some(message)
    }

    /// Append a tuple. Hands it back if the message is full.
    pub fn push(
        &mut self,
        tuple: Tuple,
    ) -> Result<(), Tuple> {
        self.tuples.push(tuple)
    }

    /// The only tuple the handler looks at.
    #[inline]
    pub fn first(&self) -> Option<&Tuple> { self.tuples.first() }

    #[inline]
    pub fn len(&self) -> usize { self.tuples.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.tuples.is_empty() }
}

/// Why a message had no effect.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IgnoreReason {
    /// The message carried no tuples.
    Empty,
    /// The first tuple's key is not [`KEY_MODE`].
    UnknownKey(u32),
    /// The mode value was not sent as a string.
    NotAString,
    /// The string was not one of `"0"`, `"1"`, `"2"`.
    UnrecognizedValue,
    /// The watchface is not running.
    NotRunning,
}

impl fmt::Display for IgnoreReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty message"),
            Self::UnknownKey(key) => write!(f, "unknown key {key}"),
            Self::NotAString => f.write_str("mode value is not a string"),
            Self::UnrecognizedValue => f.write_str("unrecognized mode value"),
            Self::NotRunning => f.write_str("watchface not running"),
        }
    }
}

/// Result of handling one message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageOutcome {
    /// The mode was applied and persisted.
    Applied(DisplayMode),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Pick the mode a message asks for, without touching any state.
pub fn requested_mode(message: &AppMessage) -> Result<DisplayMode, IgnoreReason> {
    let tuple = message.first().ok_or(IgnoreReason::Empty)?;
    if tuple.key != KEY_MODE {
        return Err(IgnoreReason::UnknownKey(tuple.key));
    }
    match &tuple.value {
        TupleValue::CString(value) => DisplayMode::from_message_value(value).ok_or(IgnoreReason::UnrecognizedValue),
        TupleValue::Int(_) | TupleValue::UInt(_) => Err(IgnoreReason::NotAString),
    }
}

/// Scheme a configuration change moves to from `current`.
///
/// A message always applies the mode's own frame and text colors, on color
/// displays too; the white-on-backdrop scheme only applies at startup.
/// Under [`MixedBackground::Inherit`] a switch to Mixed keeps the current
/// background color instead of Mixed's own.
pub fn scheme_after_message(
    current: &ColorScheme,
    mode: DisplayMode,
    config: &WatchfaceConfig,
) -> ColorScheme {
    let mut next = mode.scheme();
    if mode == DisplayMode::Mixed && config.mixed_background == MixedBackground::Inherit {
        next.background = current.background;
    }
    next
}

/// Apply a configuration message to `state` and persist the new mode.
///
/// Ignored messages leave `state` and `store` untouched. On a valid value
/// the in-memory colors change and the canvas is marked dirty before the
/// store is written, so a storage error is returned with the display
/// already showing the new mode.
pub fn handle_message<S: ModeStore>(
    state: &mut WatchfaceState,
    store: &mut S,
    message: &AppMessage,
    config: &WatchfaceConfig,
) -> Result<MessageOutcome, S::Error> {
    let mode = match requested_mode(message) {
        Ok(mode) => mode,
        Err(reason) => {
            debug!("config message ignored: {}", reason);
            return Ok(MessageOutcome::Ignored(reason));
        }
    };

    let scheme = scheme_after_message(state.scheme(), mode, config);
    state.apply_scheme(mode, scheme);

    store.write_mode(mode.raw())?;
    info!("display mode set to {:?}", mode);
    Ok(MessageOutcome::Applied(mode))
}
