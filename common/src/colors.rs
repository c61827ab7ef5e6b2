//! Color constants for the watchface.
//!
//! The monochrome schemes only ever use [`BLACK`] and [`WHITE`]. The accent
//! colors exist for the full-screen backdrop shown on color-capable displays.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Scheme Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Backdrop Accents
// =============================================================================

/// Deep blue at the top edge of the backdrop.
pub const BACKDROP_TOP: Rgb565 = Rgb565::new(2, 10, 20);

/// Teal at the vertical midpoint of the backdrop.
pub const BACKDROP_MID: Rgb565 = Rgb565::new(0, 36, 22);

/// Warm orange at the bottom edge of the backdrop.
pub const BACKDROP_BOTTOM: Rgb565 = Rgb565::new(31, 32, 0);

/// Fixed-point scale used by [`lerp_rgb565`] (8 fractional bits).
pub const LERP_ONE: i32 = 256;

/// Linear interpolation between two colors in RGB565 space.
///
/// `t_fixed` is a fixed-point fraction in `0..=LERP_ONE`; values outside
/// that range are clamped. Integer math only, so this is usable on targets
/// without an FPU.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t_fixed: i32,
) -> Rgb565 {
    let t = t_fixed.clamp(0, LERP_ONE);

    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let channel = |raw: u16, shift: u16, mask: u16| i32::from((raw >> shift) & mask);
    let mix = |a: i32, b: i32| a + (((b - a) * t) >> 8);

    let r = mix(channel(from_raw, 11, 0x1F), channel(to_raw, 11, 0x1F)).clamp(0, 31);
    let g = mix(channel(from_raw, 5, 0x3F), channel(to_raw, 5, 0x3F)).clamp(0, 63);
    let b = mix(channel(from_raw, 0, 0x1F), channel(to_raw, 0, 0x1F)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_rgb565_same_color() {
        assert_eq!(lerp_rgb565(BACKDROP_MID, BACKDROP_MID, 128), BACKDROP_MID);
    }

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0), BLACK);
        assert_eq!(lerp_rgb565(BLACK, WHITE, LERP_ONE), WHITE);
    }

    #[test]
    fn test_lerp_rgb565_midpoint() {
        let mid = lerp_rgb565(BLACK, WHITE, LERP_ONE / 2);
        assert_eq!(mid, Rgb565::new(15, 31, 15));
    }

    #[test]
    fn test_lerp_rgb565_clamps_fraction() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, -40), BLACK);
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1000), WHITE);
    }
}
