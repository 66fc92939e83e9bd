//! Pin-owning wrapper binding the gesture core to an `embedded-hal` input.
//!
//! [`InputButton`] reads the raw level itself on every poll, so the host
//! only supplies the current time. Pull-resistor setup stays with the HAL
//! that produced the pin.

use embedded_hal::digital::InputPin;

use crate::button::{ActiveLevel, Button, GestureHandler, Timings};

/// A [`Button`] that owns its input pin and samples it on each poll.
pub struct InputButton<PIN, H: GestureHandler> {
    pin: PIN,
    /// Raw level from the most recent successful read, reused when the
    /// pin read fails so a transient fault cannot fabricate an edge.
    last_raw_high: bool,
    button: Button<H>,
}

impl<PIN: InputPin, H: GestureHandler> InputButton<PIN, H> {
    /// Wrap `pin` and seed the debounced state from a live read, without
    /// firing callbacks. A failed initial read assumes the released level.
    pub fn new(mut pin: PIN, active_level: ActiveLevel, timings: Timings, handler: H) -> Self {
        let released_high = active_level == ActiveLevel::Low;
        let raw_high = pin.is_high().unwrap_or(released_high);
        let mut button = Button::new(active_level, timings, handler);
        button.reset_to(raw_high);
        Self {
            pin,
            last_raw_high: raw_high,
            button,
        }
    }

    /// Sample the pin and evaluate one tick of the gesture state machine.
    pub fn poll(&mut self, now_ms: u32) {
        let raw_high = self.pin.is_high().unwrap_or(self.last_raw_high);
        self.last_raw_high = raw_high;
        self.button.tick(raw_high, now_ms);
    }

    /// Whether the debounced level equals the active level.
    pub fn is_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    /// The event sink owned by the inner [`Button`].
    pub fn handler(&self) -> &H {
        self.button.handler()
    }

    /// Mutable access to the event sink.
    pub fn handler_mut(&mut self) -> &mut H {
        self.button.handler_mut()
    }

    /// Release the wrapped pin.
    pub fn free(self) -> PIN {
        self.pin
    }
}
