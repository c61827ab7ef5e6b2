//! Frame renderer and compositing pass.
//!
//! The screen is a stack of layers, bottom to top:
//!
//! | Layer | Content | Redrawn when |
//! |-------|---------|--------------|
//! | Window | Solid background color | Canvas dirty |
//! | Backdrop | Full-screen bitmap (color displays only) | Canvas dirty |
//! | Canvas | Outer frame + inner fill rectangles | Canvas dirty |
//! | Text | Hour (top) and minute (bottom) | Canvas or text dirty |
//!
//! A configuration change marks the canvas dirty and the next pass repaints
//! everything. The minute tick only marks the text dirty: the pass then
//! repaints the two text areas, clipped, with the layers underneath them,
//! and leaves the rest of the screen alone.
//!
//! The frame renderer takes the resolved [`ColorScheme`] as an argument. It
//! never consults storage.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BACKDROP_BOTTOM, BACKDROP_MID, BACKDROP_TOP, LERP_ONE, lerp_rgb565};
use crate::config::{
    BACKGROUND_AREA,
    BOTTOM_TEXT_AREA,
    FRAME_INNER,
    FRAME_OUTER,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TOP_TEXT_AREA,
};
use crate::scheme::ColorScheme;
use crate::styles::{BOTTOM_FONT, CENTERED, TOP_FONT};
use crate::watchface::WatchfaceState;

// =============================================================================
// Dirty Tracking
// =============================================================================

/// Tracks which layers need repainting before the next display refresh.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderState {
    /// Frame colors or background changed.
    canvas_dirty: bool,

    /// Hour or minute text changed.
    text_dirty: bool,

    /// Nothing has been drawn yet.
    first_frame: bool,
}

impl RenderState {
    /// Render state before the first frame: everything needs drawing.
    pub const fn new() -> Self {
        Self {
            canvas_dirty: true,
            text_dirty: true,
            first_frame: true,
        }
    }

    /// Request a full repaint on the next pass.
    #[inline]
    pub const fn mark_canvas_dirty(&mut self) { self.canvas_dirty = true; }

    /// Request a repaint of the text areas on the next pass.
    #[inline]
    pub const fn mark_text_dirty(&mut self) { self.text_dirty = true; }

    /// Whether the next pass repaints the whole screen.
    #[inline]
    pub const fn canvas_dirty(&self) -> bool { self.canvas_dirty || self.first_frame }

    /// Whether the next pass repaints at least the text areas.
    #[inline]
    pub const fn text_dirty(&self) -> bool { self.text_dirty || self.canvas_dirty() }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Clear all flags once a pass has been flushed.
    #[inline]
    pub const fn end_frame(&mut self) {
        self.canvas_dirty = false;
        self.text_dirty = false;
        self.first_frame = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

/// What a compositing pass repainted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ComposeResult {
    /// Nothing was dirty.
    Idle,
    /// Only the text areas were repainted.
    Text,
    /// The whole screen was repainted.
    Full,
}

impl ComposeResult {
    /// Whether anything was drawn and the display needs flushing.
    #[inline]
    pub const fn drew(self) -> bool { !matches!(self, Self::Idle) }
}

// =============================================================================
// Layers
// =============================================================================

/// Draw the canvas layer: outer frame and inner fill, square corners.
pub fn draw_frame<D>(
    display: &mut D,
    scheme: &ColorScheme,
) where
    D: DrawTarget<Color = Rgb565>,
{
    FRAME_OUTER
        .into_styled(PrimitiveStyle::with_fill(scheme.frame))
        .draw(display)
        .ok();
    FRAME_INNER
        .into_styled(PrimitiveStyle::with_fill(scheme.inner))
        .draw(display)
        .ok();
}

/// Backdrop color for screen row `y`: top → mid over the upper half,
/// mid → bottom over the lower half.
pub fn backdrop_row_color(y: u32) -> Rgb565 {
    let half = SCREEN_HEIGHT / 2;
    if y < half {
        lerp_rgb565(BACKDROP_TOP, BACKDROP_MID, (y as i32 * LERP_ONE) / half as i32)
    } else {
        let span = (SCREEN_HEIGHT - half - 1).max(1);
        let row = (y - half).min(span);
        lerp_rgb565(BACKDROP_MID, BACKDROP_BOTTOM, (row as i32 * LERP_ONE) / span as i32)
    }
}

/// Draw the full-screen backdrop bitmap shown on color displays.
pub fn draw_backdrop<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for y in 0..SCREEN_HEIGHT {
        let row = Rectangle::new(Point::new(0, y as i32), Size::new(SCREEN_WIDTH, 1));
        display.fill_solid(&row, backdrop_row_color(y)).ok();
    }
}

/// Draw the hour and minute text, centered in their areas, no background.
pub fn draw_time_text<D>(
    display: &mut D,
    state: &WatchfaceState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let scheme = state.scheme();
    let time = state.time();

    let top_style = MonoTextStyle::new(TOP_FONT, scheme.top_text);
    Text::with_text_style(&time.hour, text_anchor(&TOP_TEXT_AREA), top_style, CENTERED)
        .draw(display)
        .ok();

    let bottom_style = MonoTextStyle::new(BOTTOM_FONT, scheme.bottom_text);
    Text::with_text_style(&time.minute, text_anchor(&BOTTOM_TEXT_AREA), bottom_style, CENTERED)
        .draw(display)
        .ok();
}

/// Center of the visible part of a text area.
fn text_anchor(area: &Rectangle) -> Point { area.intersection(&BACKGROUND_AREA).center() }

/// Paint every layer, bottom to top, onto `display`.
fn paint_layers<D>(
    display: &mut D,
    state: &WatchfaceState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&BACKGROUND_AREA, state.scheme().background).ok();
    if state.shows_backdrop() {
        draw_backdrop(display);
    }
    draw_frame(display, state.scheme());
    draw_time_text(display, state);
}

// =============================================================================
// Compositing Pass
// =============================================================================

/// Repaint whatever is dirty and clear the dirty flags.
pub fn compose<D>(
    display: &mut D,
    state: &mut WatchfaceState,
) -> ComposeResult
where
    D: DrawTarget<Color = Rgb565>,
{
    let result = if state.render().canvas_dirty() {
        paint_layers(display, state);
        ComposeResult::Full
    } else if state.render().text_dirty() {
        for area in [TOP_TEXT_AREA, BOTTOM_TEXT_AREA] {
            paint_layers(&mut display.clipped(&area), state);
        }
        ComposeResult::Text
    } else {
        ComposeResult::Idle
    };

    state.render_mut().end_frame();
    result
}
