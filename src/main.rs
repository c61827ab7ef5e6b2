// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // f32->i32 and u32->u8 casts for pixel and clock math
#![allow(clippy::cast_precision_loss)] // u32->f32 in the shake animation

//! Desktop simulator for the inSquare watchface.
//!
//! Plays the part of the watch platform: it owns the window, the wall clock,
//! the persisted display mode and the Bluetooth link, and drives the
//! watchface's callbacks from them.
//!
//! # Controls
//!
//! | Key     | Action                                          |
//! |---------|-------------------------------------------------|
//! | `0`-`2` | Send a configuration message with that mode     |
//! | `5`     | Send an unrecognized mode value                 |
//! | `B`     | Toggle the Bluetooth link                       |
//! | `T`     | Toggle 12/24h time (shown from the next minute) |
//! | `Esc`   | Quit                                            |
//!
//! A disconnect makes the watch vibrate, which the simulator shows as a short
//! horizontal shake of the face.

mod animations;
mod config;
mod controls;
mod host;
mod store;

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::Parser;
use config::{Args, FRAME_TIME, WINDOW_TITLE};
use controls::KeyAction;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use host::SimHost;
use insquare_common::colors::BLACK;
use insquare_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use insquare_common::{AppMessage, ClockTime, MessageOutcome, Service, WatchHost, Watchface};
use log::{info, warn};
use store::FileStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut store = FileStore::new(&args.store);
    let mut host = SimHost::new(args.use_24h(), !args.disconnected);
    let mut face = Watchface::new(args.watchface_config());
    info!("display mode stored in {}", store.path().display());

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut last_minute = wall_clock();
    face.start(&mut host, &mut store, last_minute)
        .context("watchface failed to start")?;

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match controls::key_action(keycode) {
                        Some(KeyAction::Quit) => break 'running,
                        Some(KeyAction::SendMode(value)) => send_mode(&mut face, &mut store, value),
                        Some(KeyAction::ToggleBluetooth) => {
                            let connected = !host.is_connected();
                            host.set_connected(connected);
                            info!("bluetooth {}", if connected { "connected" } else { "lost" });
                            if host.is_subscribed(Service::ConnectionEvents) {
                                face.on_connection_change(&mut host, connected);
                            }
                        }
                        Some(KeyAction::ToggleClockStyle) => {
                            host.toggle_24h();
                            info!("clock style: {}", if host.is_24h_style() { "24h" } else { "12h" });
                        }
                        None => {}
                    }
                }
                _ => {}
            }
        }

        let now = wall_clock();
        if now != last_minute {
            last_minute = now;
            if host.is_subscribed(Service::MinuteTick) {
                face.on_minute_tick(&host, now);
            }
        }

        // ======================================================================
        // Compositing
        // ======================================================================

        if host.shake().is_active() {
            let offset = host.shake_mut().step();
            display.clear(BLACK).ok();
            face.invalidate();
            face.compose(&mut display.translated(Point::new(offset, 0)));
            if !host.shake().is_active() {
                // Settle back to the origin on the next frame
                face.invalidate();
            }
        } else {
            face.compose(&mut display);
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    face.stop(&mut host).context("watchface failed to stop")?;
    Ok(())
}

/// Current local time of day.
fn wall_clock() -> ClockTime {
    let now = Local::now();
    ClockTime::new(now.hour() as u8, now.minute() as u8).unwrap_or(ClockTime::MIDNIGHT)
}

/// Deliver a one-tuple configuration message, as the companion app would.
fn send_mode(
    face: &mut Watchface,
    store: &mut FileStore,
    value: &str,
) {
    let Some(message) = AppMessage::mode(value) else {
        return;
    };
    match face.on_message(store, &message) {
        Ok(MessageOutcome::Applied(_)) => {}
        Ok(MessageOutcome::Ignored(reason)) => info!("message {value:?} ignored: {reason}"),
        Err(err) => warn!("failed to persist display mode: {err}"),
    }
}
