//! Lifecycle controller and the watchface's owned state.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──start()──▶ Running ──stop()──▶ Terminated
//!        │                                          ▲
//!        └──── start() fails (resource missing) ────┘
//! ```
//!
//! All mutable state lives in one [`WatchfaceState`] owned by the
//! [`Watchface`] and handed explicitly to the message handler and the
//! compositor. Every callback runs on the host's single event thread, so a
//! configuration change is always fully applied before the next pass.
//!
//! # Resource Order
//!
//! `start()` acquires, in order: window, background layer, top font, bottom
//! font, canvas layer, top text layer, bottom text layer, background bitmap
//! (color displays only), then subscribes to connection events and the
//! minute tick. `stop()` gives everything back in exactly the reverse order.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use heapless::Vec;
use log::{debug, info};

use crate::config::{Capability, WatchfaceConfig};
use crate::host::{Resource, Service, WatchHost};
use crate::message::{AppMessage, IgnoreReason, MessageOutcome, handle_message};
use crate::render::{ComposeResult, RenderState, compose};
use crate::scheme::{ColorScheme, DisplayMode};
use crate::storage::{ModeStore, restore_mode};
use crate::time_format::{ClockTime, TimeStrings, format_time};

/// UI handles acquired at startup, in acquisition order.
const UI_RESOURCES: [Resource; 8] = [
    Resource::Window,
    Resource::BackgroundLayer,
    Resource::TopFont,
    Resource::BottomFont,
    Resource::CanvasLayer,
    Resource::TopTextLayer,
    Resource::BottomTextLayer,
    Resource::BackgroundBitmap,
];

/// Notification services subscribed after the UI is built.
const SERVICES: [Service; 2] = [Service::ConnectionEvents, Service::MinuteTick];

/// Upper bound on simultaneously held handles and subscriptions.
const MAX_HELD: usize = UI_RESOURCES.len() + SERVICES.len();

// =============================================================================
// State
// =============================================================================

/// Everything the watchface mutates while running.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WatchfaceState {
    /// Last applied display mode.
    mode: DisplayMode,

    /// Colors currently applied to every layer.
    scheme: ColorScheme,

    /// Whether the backdrop bitmap layer is visible.
    show_backdrop: bool,

    /// Text shown in the hour and minute layers.
    time: TimeStrings,

    render: RenderState,

    /// Bluetooth link state as of the last notification.
    connected: bool,
}

impl WatchfaceState {
    /// Initial state for `mode` on a display with `capability`.
    pub fn new(
        mode: DisplayMode,
        capability: Capability,
        connected: bool,
    ) -> Self {
        Self {
            mode,
            scheme: ColorScheme::for_capability(mode, capability),
            show_backdrop: capability.shows_backdrop(),
            time: TimeStrings::placeholder(),
            render: RenderState::new(),
            connected,
        }
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    #[inline]
    pub const fn scheme(&self) -> &ColorScheme { &self.scheme }

    #[inline]
    pub const fn shows_backdrop(&self) -> bool { self.show_backdrop }

    #[inline]
    pub const fn time(&self) -> &TimeStrings { &self.time }

    #[inline]
    pub const fn render(&self) -> &RenderState { &self.render }

    #[inline]
    pub const fn render_mut(&mut self) -> &mut RenderState { &mut self.render }

    #[inline]
    pub const fn connected(&self) -> bool { self.connected }

    /// Switch to `mode` drawn with `scheme` and request a full repaint.
    pub fn apply_scheme(
        &mut self,
        mode: DisplayMode,
        scheme: ColorScheme,
    ) {
        self.mode = mode;
        self.scheme = scheme;
        self.render.mark_canvas_dirty();
    }

    /// Replace the displayed time text and request a text repaint.
    pub fn set_time(
        &mut self,
        time: TimeStrings,
    ) {
        self.time = time;
        self.render.mark_text_dirty();
    }

    /// Record a link state. Returns `true` on a connected → disconnected edge.
    pub fn record_connection(
        &mut self,
        connected: bool,
    ) -> bool {
        let dropped = self.connected && !connected;
        self.connected = connected;
        dropped
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Lifecycle phase. Moves forward only.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Uninitialized,
    Running,
    Terminated,
}

/// Errors from lifecycle transitions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WatchfaceError<H> {
    /// The host could not provide a resource or subscription.
    Host(H),
    /// The transition is not allowed from this phase.
    InvalidPhase(Phase),
}

impl<H: fmt::Display> fmt::Display for WatchfaceError<H> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Host(err) => write!(f, "host error: {err}"),
            Self::InvalidPhase(phase) => write!(f, "not allowed while {phase:?}"),
        }
    }
}

impl<H: fmt::Debug + fmt::Display> core::error::Error for WatchfaceError<H> {}

/// Something the watchface holds and must give back on shutdown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Held {
    Resource(Resource),
    Service(Service),
}

/// The watchface: owns its state and every handle it acquired.
pub struct Watchface {
    config: WatchfaceConfig,
    phase: Phase,
    state: WatchfaceState,
    held: Vec<Held, MAX_HELD>,
}

impl Watchface {
    pub fn new(config: WatchfaceConfig) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
            state: WatchfaceState::new(DisplayMode::Normal, config.capability, true),
            held: Vec::new(),
        }
    }

    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    #[inline]
    pub const fn config(&self) -> &WatchfaceConfig { &self.config }

    #[inline]
    pub const fn state(&self) -> &WatchfaceState { &self.state }

    #[inline]
    pub fn is_running(&self) -> bool { self.phase == Phase::Running }

    /// Build the UI, restore the stored mode, show `now`, subscribe.
    ///
    /// If the host fails to provide anything, whatever was acquired so far is
    /// released again and the watchface ends up Terminated.
    pub fn start<H, S>(
        &mut self,
        host: &mut H,
        store: &mut S,
        now: ClockTime,
    ) -> Result<(), WatchfaceError<H::Error>>
    where
        H: WatchHost,
        S: ModeStore,
    {
        if self.phase != Phase::Uninitialized {
            return Err(WatchfaceError::InvalidPhase(self.phase));
        }

        let mode = restore_mode(store);

        for resource in UI_RESOURCES {
            if resource == Resource::BackgroundBitmap && !self.config.capability.shows_backdrop() {
                continue;
            }
            if let Err(err) = host.acquire(resource) {
                return Err(self.abort_start(host, err));
            }
            self.hold(Held::Resource(resource));
        }

        self.state = WatchfaceState::new(mode, self.config.capability, host.is_connected());
        self.state.set_time(format_time(now, host.is_24h_style()));

        for service in SERVICES {
            if let Err(err) = host.subscribe(service) {
                return Err(self.abort_start(host, err));
            }
            self.hold(Held::Service(service));
        }

        self.phase = Phase::Running;
        info!(
            "watchface running: mode {:?}, {:?} display",
            mode, self.config.capability
        );
        Ok(())
    }

    /// Minute tick: refresh the time text only.
    pub fn on_minute_tick<H: WatchHost>(
        &mut self,
        host: &H,
        now: ClockTime,
    ) {
        if !self.is_running() {
            return;
        }
        self.state.set_time(format_time(now, host.is_24h_style()));
        debug!("tick {}:{}", self.state.time().hour, self.state.time().minute);
    }

    /// Bluetooth link change. Vibrates once per connected → disconnected edge.
    ///
    /// Returns whether a vibration was fired.
    pub fn on_connection_change<H: WatchHost>(
        &mut self,
        host: &mut H,
        connected: bool,
    ) -> bool {
        if !self.is_running() {
            return false;
        }
        let dropped = self.state.record_connection(connected);
        if dropped {
            info!("bluetooth disconnected");
            host.vibrate_long();
        }
        dropped
    }

    /// Inbound configuration message from the companion phone.
    pub fn on_message<S: ModeStore>(
        &mut self,
        store: &mut S,
        message: &AppMessage,
    ) -> Result<MessageOutcome, S::Error> {
        if !self.is_running() {
            return Ok(MessageOutcome::Ignored(IgnoreReason::NotRunning));
        }
        handle_message(&mut self.state, store, message, &self.config)
    }

    /// Compositing pass. Draws nothing unless running.
    pub fn compose<D>(
        &mut self,
        display: &mut D,
    ) -> ComposeResult
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.is_running() {
            return ComposeResult::Idle;
        }
        compose(display, &mut self.state)
    }

    /// Force a full repaint on the next pass, e.g. after the host moved or
    /// cleared the framebuffer.
    pub fn invalidate(&mut self) { self.state.render_mut().mark_canvas_dirty(); }

    /// Unsubscribe and release everything, newest first.
    pub fn stop<H: WatchHost>(
        &mut self,
        host: &mut H,
    ) -> Result<(), WatchfaceError<H::Error>> {
        if self.phase != Phase::Running {
            return Err(WatchfaceError::InvalidPhase(self.phase));
        }
        self.release_all(host);
        self.phase = Phase::Terminated;
        info!("watchface terminated");
        Ok(())
    }

    fn hold(
        &mut self,
        held: Held,
    ) {
        // MAX_HELD covers every resource and service.
        self.held.push(held).ok();
    }

    fn release_all<H: WatchHost>(
        &mut self,
        host: &mut H,
    ) {
        while let Some(held) = self.held.pop() {
            match held {
                Held::Service(service) => host.unsubscribe(service),
                Held::Resource(resource) => host.release(resource),
            }
        }
    }

    fn abort_start<H: WatchHost>(
        &mut self,
        host: &mut H,
        err: H::Error,
    ) -> WatchfaceError<H::Error> {
        self.release_all(host);
        self.phase = Phase::Terminated;
        WatchfaceError::Host(err)
    }
}
