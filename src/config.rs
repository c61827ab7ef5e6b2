//! Simulator configuration: window setup, frame pacing and command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use insquare_common::{Capability, MixedBackground, WatchfaceConfig};

// =============================================================================
// Window Configuration
// =============================================================================

/// Title of the simulator window.
pub const WINDOW_TITLE: &str = "inSquare";

/// Target frame time (~50 FPS). Only the shake animation needs this rate;
/// the face itself repaints once a minute at most.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Default location of the persisted display mode.
pub const DEFAULT_STORE_PATH: &str = "insquare-mode.txt";

// =============================================================================
// Command Line
// =============================================================================

/// Desktop simulator for the inSquare watchface.
///
/// Keys: 0/1/2 send a display mode, 5 sends an invalid one, B toggles the
/// Bluetooth link, T toggles 12/24h time, Esc quits.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Simulate a color display (white text, gradient backdrop).
    #[arg(long)]
    pub color: bool,

    /// File holding the persisted display mode.
    #[arg(long, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Show the hour on a 12-hour clock.
    #[arg(long, conflicts_with = "twenty_four_hour")]
    pub twelve_hour: bool,

    /// Show the hour on a 24-hour clock (default).
    #[arg(long)]
    pub twenty_four_hour: bool,

    /// Keep the previous background when switching to Mixed.
    #[arg(long)]
    pub inherit_mixed_background: bool,

    /// Window pixel scale.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Start with the Bluetooth link down.
    #[arg(long)]
    pub disconnected: bool,
}

impl Args {
    /// Core watchface configuration selected by the flags.
    pub fn watchface_config(&self) -> WatchfaceConfig {
        let capability = if self.color { Capability::Color } else { Capability::Monochrome };
        let mixed_background = if self.inherit_mixed_background {
            MixedBackground::Inherit
        } else {
            MixedBackground::Resolved
        };
        WatchfaceConfig::new(capability, mixed_background)
    }

    pub fn use_24h(&self) -> bool { !self.twelve_hour }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["simulator"]);
        assert_eq!(args.watchface_config(), WatchfaceConfig::default());
        assert!(args.use_24h());
        assert_eq!(args.scale, 3);
        assert_eq!(args.store, PathBuf::from(DEFAULT_STORE_PATH));
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from(["simulator", "--color", "--inherit-mixed-background", "--twelve-hour"]);
        let config = args.watchface_config();
        assert_eq!(config.capability, Capability::Color);
        assert_eq!(config.mixed_background, MixedBackground::Inherit);
        assert!(!args.use_24h());
    }

    #[test]
    fn test_clock_flags_conflict() {
        assert!(Args::try_parse_from(["simulator", "--twelve-hour", "--twenty-four-hour"]).is_err());
    }

    #[test]
    fn test_scale_range() {
        assert!(Args::try_parse_from(["simulator", "--scale", "0"]).is_err());
        assert!(Args::try_parse_from(["simulator", "--scale", "4"]).is_ok());
    }
}
