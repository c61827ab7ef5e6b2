//! Vibration feedback for the simulator.
//!
//! The desktop has no vibration motor, so a long vibration is shown as a
//! short horizontal shake of the whole face. The offset follows a sine wave
//! and decays to zero over [`VIBRATION_FRAMES`] frames:
//!
//! ```text
//! offset = sin(frame * frequency) * amplitude * remaining / VIBRATION_FRAMES
//! ```

// =============================================================================
// Shake Effect Constants
// =============================================================================

/// Maximum horizontal shake offset in pixels.
const SHAKE_AMPLITUDE: f32 = 4.0;

/// Shake oscillation speed. At 50 FPS, 1.2 gives roughly 10 wiggles per second.
const SHAKE_FREQUENCY: f32 = 1.2;

/// Length of one long vibration, in frames (~500ms at 50 FPS).
pub const VIBRATION_FRAMES: u32 = 25;

// =============================================================================
// Shake Effect
// =============================================================================

/// Horizontal offset for `frame` of a shake with `remaining` frames left.
///
/// Returns 0 once the shake has run out.
#[inline]
pub fn calculate_shake_offset(
    frame: u32,
    remaining: u32,
) -> i32 {
    if remaining == 0 {
        return 0;
    }
    let decay = remaining.min(VIBRATION_FRAMES) as f32 / VIBRATION_FRAMES as f32;
    let phase = frame as f32 * SHAKE_FREQUENCY;
    (phase.sin() * SHAKE_AMPLITUDE * decay) as i32
}

/// Countdown for an in-progress vibration.
#[derive(Clone, Copy, Default, Debug)]
pub struct Shake {
    remaining: u32,
    frame: u32,
}

impl Shake {
    pub const fn new() -> Self { Self { remaining: 0, frame: 0 } }

    /// Start (or restart) a long vibration.
    pub const fn trigger(&mut self) {
        self.remaining = VIBRATION_FRAMES;
        self.frame = 0;
    }

    #[inline]
    pub const fn is_active(&self) -> bool { self.remaining > 0 }

    /// Offset for the current frame, then advance one frame.
    pub fn step(&mut self) -> i32 {
        let offset = calculate_shake_offset(self.frame, self.remaining);
        self.remaining = self.remaining.saturating_sub(1);
        self.frame = self.frame.wrapping_add(1);
        offset
    }
}
