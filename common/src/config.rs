//! Layout constants and runtime configuration.
//!
//! Geometry matches a 144x168 rectangular watch display. Layout values are
//! `const` so the renderer builds its rectangles at compile time.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate, used for centering the time text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Whole screen. The backdrop bitmap layer covers exactly this area.
pub const BACKGROUND_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Frame Geometry
// =============================================================================

/// Outer frame rectangle: origin (14, 6), 116x156.
pub const FRAME_OUTER: Rectangle = Rectangle::new(Point::new(14, 6), Size::new(116, 156));

/// Inner fill rectangle: origin (17, 9), 110x150. Leaves a 3px border of the
/// outer frame visible on every side.
pub const FRAME_INNER: Rectangle = Rectangle::new(Point::new(17, 9), Size::new(110, 150));

// =============================================================================
// Text Regions
// =============================================================================

/// Hour text region (rows 4..86), horizontally centered.
pub const TOP_TEXT_AREA: Rectangle = Rectangle::new(Point::new(0, 4), Size::new(SCREEN_WIDTH, 82));

/// Minute text region starting at row 76. The declared height runs past the
/// bottom of the screen; the compositor clips it to [`BACKGROUND_AREA`].
pub const BOTTOM_TEXT_AREA: Rectangle = Rectangle::new(Point::new(0, 76), Size::new(SCREEN_WIDTH, 156));

/// Placeholder shown in both text layers until the first time update.
pub const TEXT_PLACEHOLDER: &str = "00";

// =============================================================================
// Message / Storage Keys
// =============================================================================

/// The only configuration key. Used both as the inbound message key and as
/// the persistent storage slot for the display mode.
pub const KEY_MODE: u32 = 0;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// What the display hardware can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Capability {
    /// Black and white only. Text and background follow the stored mode.
    #[default]
    Monochrome,
    /// Color display. Text is always white over the backdrop bitmap.
    Color,
}

impl Capability {
    /// Whether the backdrop bitmap layer is shown.
    #[inline]
    pub const fn shows_backdrop(self) -> bool { matches!(self, Self::Color) }
}

/// How a Mixed-mode configuration message treats the window background.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum MixedBackground {
    /// Apply Mixed's own background (black), like the other modes do.
    #[default]
    Resolved,
    /// Leave whatever background the previous mode set.
    Inherit,
}

/// Runtime configuration of a watchface instance.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct WatchfaceConfig {
    pub capability: Capability,
    pub mixed_background: MixedBackground,
}

impl WatchfaceConfig {
    pub const fn new(
        capability: Capability,
        mixed_background: MixedBackground,
    ) -> Self {
        Self {
            capability,
            mixed_background,
        }
    }
}
