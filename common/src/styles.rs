//! Fonts and text layout styles for the two time layers.
//!
//! The hour and the minute use distinct fonts: a heavy `ProFont` face on top
//! and the lighter 10x20 mono face underneath. Colors vary with the active
//! scheme, so callers build `MonoTextStyle::new(TOP_FONT, color)` at draw
//! time; only the font references and alignment are `const`.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

/// Hour font.
pub const TOP_FONT: &MonoFont = &PROFONT_24_POINT;

/// Minute font.
pub const BOTTOM_FONT: &MonoFont = &FONT_10X20;

/// Horizontally and vertically centered on the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();
