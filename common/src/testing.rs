//! Test doubles shared by the unit tests: an in-memory framebuffer and a
//! scripted host that records every call.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::host::{Resource, Service, WatchHost};

// =============================================================================
// Framebuffer
// =============================================================================

/// Full-screen framebuffer that remembers which pixels were written.
pub struct TestCanvas {
    pixels: Vec<Rgb565>,
    touched: Vec<bool>,
}

impl TestCanvas {
    pub fn new(fill: Rgb565) -> Self {
        let len = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;
        Self {
            pixels: vec![fill; len],
            touched: vec![false; len],
        }
    }

    fn index(
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
            return None;
        }
        Some(y as usize * SCREEN_WIDTH as usize + x as usize)
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[Self::index(x, y).expect("pixel out of bounds")]
    }

    pub fn touched(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        Self::index(x, y).is_some_and(|i| self.touched[i])
    }

    pub fn touched_count(&self) -> usize { self.touched.iter().filter(|t| **t).count() }

    pub fn reset_touched(&mut self) { self.touched.fill(false); }

    /// Number of pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|p| self.pixel(p.x, p.y) == color).count()
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point.x, point.y) {
                self.pixels[i] = color;
                self.touched[i] = true;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Host
// =============================================================================

/// One call made on [`ScriptedHost`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostCall {
    Acquire(Resource),
    Release(Resource),
    Subscribe(Service),
    Unsubscribe(Service),
    Vibrate,
}

/// Host fake with settable locale/link flags and an optional failing resource.
pub struct ScriptedHost {
    pub calls: Vec<HostCall>,
    pub use_24h: bool,
    pub connected: bool,
    pub fail_on: Option<Resource>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            use_24h: true,
            connected: true,
            fail_on: None,
        }
    }

    pub fn vibrations(&self) -> usize { self.calls.iter().filter(|c| **c == HostCall::Vibrate).count() }

    pub fn acquired(&self) -> Vec<HostCall> {
        self.calls
            .iter()
            .copied()
            .filter(|c| matches!(c, HostCall::Acquire(_) | HostCall::Subscribe(_)))
            .collect()
    }

    pub fn released(&self) -> Vec<HostCall> {
        self.calls
            .iter()
            .copied()
            .filter(|c| matches!(c, HostCall::Release(_) | HostCall::Unsubscribe(_)))
            .collect()
    }
}

impl WatchHost for ScriptedHost {
    type Error = Resource;

    fn acquire(
        &mut self,
        resource: Resource,
    ) -> Result<(), Self::Error> {
        if self.fail_on == Some(resource) {
            return Err(resource);
        }
        self.calls.push(HostCall::Acquire(resource));
        Ok(())
    }

    fn release(
        &mut self,
        resource: Resource,
    ) {
        self.calls.push(HostCall::Release(resource));
    }

    fn subscribe(
        &mut self,
        service: Service,
    ) -> Result<(), Self::Error> {
        self.calls.push(HostCall::Subscribe(service));
        Ok(())
    }

    fn unsubscribe(
        &mut self,
        service: Service,
    ) {
        self.calls.push(HostCall::Unsubscribe(service));
    }

    fn is_24h_style(&self) -> bool { self.use_24h }

    fn is_connected(&self) -> bool { self.connected }

    fn vibrate_long(&mut self) { self.calls.push(HostCall::Vibrate); }
}
