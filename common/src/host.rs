//! Seam between the watchface and the runtime that hosts it.
//!
//! The host owns the event loop, the window system, fonts, bitmaps, the
//! vibration motor and the notification services. The watchface only asks
//! for handles and subscriptions and tells the host when to let them go.

/// A UI handle the watchface holds while running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Resource {
    Window,
    /// Full-screen bitmap layer, bottom of the layer stack.
    BackgroundLayer,
    TopFont,
    BottomFont,
    /// Custom-drawn layer holding the frame rectangles.
    CanvasLayer,
    TopTextLayer,
    BottomTextLayer,
    /// Decoded backdrop image. Loaded on color displays only.
    BackgroundBitmap,
}

/// A notification stream the watchface subscribes to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Service {
    /// Bluetooth connected/disconnected transitions.
    ConnectionEvents,
    /// Fires once at the start of every wall-clock minute.
    MinuteTick,
}

/// Services the hosting runtime provides to the watchface.
pub trait WatchHost {
    type Error;

    /// Create or load a UI handle. Failure is fatal for startup.
    fn acquire(
        &mut self,
        resource: Resource,
    ) -> Result<(), Self::Error>;

    /// Destroy a handle obtained from [`acquire`](Self::acquire).
    fn release(
        &mut self,
        resource: Resource,
    );

    fn subscribe(
        &mut self,
        service: Service,
    ) -> Result<(), Self::Error>;

    fn unsubscribe(
        &mut self,
        service: Service,
    );

    /// User's 12/24-hour locale preference.
    fn is_24h_style(&self) -> bool;

    /// Current Bluetooth link state.
    fn is_connected(&self) -> bool;

    /// Fire one long vibration pulse.
    fn vibrate_long(&mut self);
}
