//! Display modes and the color schemes they resolve to.
//!
//! # Modes
//!
//! | Mode | Tag | Frame | Inner | Top text | Bottom text | Background |
//! |------|-----|-------|-------|----------|-------------|------------|
//! | [`DisplayMode::Normal`] | 0 | white | black | white | white | black |
//! | [`DisplayMode::Inverted`] | 1 | black | white | black | black | white |
//! | [`DisplayMode::Mixed`] | 2 | white | black | black | white | black |
//!
//! Any other tag (including a corrupted persisted value) resolves to Normal.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, WHITE};
use crate::config::Capability;

/// Integer-tagged display mode selected from the companion phone.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[repr(i32)]
pub enum DisplayMode {
    #[default]
    Normal = 0,
    Inverted = 1,
    Mixed = 2,
}

impl DisplayMode {
    /// All modes, in tag order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Inverted, Self::Mixed];

    /// Map a raw tag to a mode. Unknown tags fall back to Normal.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Inverted,
            2 => Self::Mixed,
            _ => Self::Normal,
        }
    }

    /// Integer tag written to storage.
    #[inline]
    pub const fn raw(self) -> i32 { self as i32 }

    /// Parse the string value carried by a configuration message.
    ///
    /// Only the exact strings `"0"`, `"1"` and `"2"` are accepted.
    pub fn from_message_value(value: &str) -> Option<Self> {
        match value {
            "0" => Some(Self::Normal),
            "1" => Some(Self::Inverted),
            "2" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Color scheme for this mode on a monochrome display.
    #[inline]
    pub const fn scheme(self) -> ColorScheme {
        match self {
            Self::Normal => ColorScheme::NORMAL,
            Self::Inverted => ColorScheme::INVERTED,
            Self::Mixed => ColorScheme::MIXED,
        }
    }
}

/// Resolved colors for every drawn element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorScheme {
    /// Outer frame rectangle.
    pub frame: Rgb565,
    /// Inner fill rectangle.
    pub inner: Rgb565,
    /// Hour text.
    pub top_text: Rgb565,
    /// Minute text.
    pub bottom_text: Rgb565,
    /// Window background behind every layer.
    pub background: Rgb565,
}

impl ColorScheme {
    pub const NORMAL: Self = Self {
        frame: WHITE,
        inner: BLACK,
        top_text: WHITE,
        bottom_text: WHITE,
        background: BLACK,
    };

    pub const INVERTED: Self = Self {
        frame: BLACK,
        inner: WHITE,
        top_text: BLACK,
        bottom_text: BLACK,
        background: WHITE,
    };

    pub const MIXED: Self = Self {
        frame: WHITE,
        inner: BLACK,
        top_text: BLACK,
        bottom_text: WHITE,
        background: BLACK,
    };

    /// Scheme for `mode` on a display with the given capability.
    ///
    /// Startup scheme. Color displays keep the mode's frame colors but draw
    /// white text over the backdrop bitmap; later configuration messages
    /// switch to the mode's own colors.
    pub const fn for_capability(
        mode: DisplayMode,
        capability: Capability,
    ) -> Self {
        let scheme = mode.scheme();
        match capability {
            Capability::Monochrome => scheme,
            Capability::Color => Self {
                frame: scheme.frame,
                inner: scheme.inner,
                top_text: WHITE,
                bottom_text: WHITE,
                background: BLACK,
            },
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self { Self::NORMAL }
}

/// Resolve a raw mode tag to its color scheme. Total over `i32`.
#[inline]
pub const fn resolve(mode: i32) -> ColorScheme { DisplayMode::from_raw(mode).scheme() }
