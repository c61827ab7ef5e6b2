//! Desktop stand-in for the watch platform.
//!
//! Resources are bookkeeping only: the simulator window and the framebuffer
//! exist for the whole run, so acquiring a handle never fails. The 12/24h
//! flag and the Bluetooth link are driven from the keyboard.

use std::convert::Infallible;

use insquare_common::{Resource, Service, WatchHost};
use log::{debug, warn};

use crate::animations::Shake;

pub struct SimHost {
    use_24h: bool,
    connected: bool,
    held: Vec<Resource>,
    subscriptions: Vec<Service>,
    shake: Shake,
}

impl SimHost {
    pub fn new(
        use_24h: bool,
        connected: bool,
    ) -> Self {
        Self {
            use_24h,
            connected,
            held: Vec::new(),
            subscriptions: Vec::new(),
            shake: Shake::new(),
        }
    }

    /// Flip the locale's clock style. Takes effect on the next minute tick.
    pub fn toggle_24h(&mut self) { self.use_24h = !self.use_24h; }

    pub fn set_connected(
        &mut self,
        connected: bool,
    ) {
        self.connected = connected;
    }

    /// Whether events for `service` should be delivered.
    pub fn is_subscribed(
        &self,
        service: Service,
    ) -> bool {
        self.subscriptions.contains(&service)
    }

    #[cfg(test)]
    pub fn held(&self) -> &[Resource] { &self.held }

    pub fn shake(&self) -> &Shake { &self.shake }

    pub fn shake_mut(&mut self) -> &mut Shake { &mut self.shake }
}

impl WatchHost for SimHost {
    type Error = Infallible;

    fn acquire(
        &mut self,
        resource: Resource,
    ) -> Result<(), Self::Error> {
        debug!("acquire {resource:?}");
        self.held.push(resource);
        Ok(())
    }

    fn release(
        &mut self,
        resource: Resource,
    ) {
        debug!("release {resource:?}");
        self.held.retain(|held| *held != resource);
    }

    fn subscribe(
        &mut self,
        service: Service,
    ) -> Result<(), Self::Error> {
        debug!("subscribe {service:?}");
        self.subscriptions.push(service);
        Ok(())
    }

    fn unsubscribe(
        &mut self,
        service: Service,
    ) {
        debug!("unsubscribe {service:?}");
        self.subscriptions.retain(|subscribed| *subscribed != service);
    }

    fn is_24h_style(&self) -> bool { self.use_24h }

    fn is_connected(&self) -> bool { self.connected }

    fn vibrate_long(&mut self) {
        warn!("vibrate: long pulse");
        self.shake.trigger();
    }
}
