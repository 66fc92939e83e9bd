//! Polled debouncer and gesture recognizer for a single digital input line.
//!
//! The crate turns a raw, noisy, repeatedly sampled boolean signal into a
//! small set of mutually exclusive, time-qualified events: press, release,
//! single-press, double-press and long-press, each reported exactly once.
//! It is built for resource-constrained control loops that sample inputs
//! from a periodic tick: no interrupts, no threads, no allocation.
//!
//! The host owns the sampling loop and the clock. Each tick it hands the
//! core the raw level and the current monotonic millisecond counter;
//! classified events come back synchronously through a [`GestureHandler`]
//! owned by the instance.
//!
//! ```
//! use button_gestures::{ActiveLevel, Button, GestureHandler, Timings};
//!
//! struct Panel;
//!
//! impl GestureHandler for Panel {
//!     fn on_single_press(&mut self) { /* toggle the LED */ }
//!     fn on_long_press(&mut self) { /* enter setup mode */ }
//! }
//!
//! let timings = Timings {
//!     debounce_ms: 20,
//!     double_press_ms: 300,
//!     long_press_ms: 600,
//! };
//! let mut button = Button::new(ActiveLevel::High, timings, Panel);
//!
//! // Host control loop, one tick per sampling period.
//! for now_ms in (0u32..=1000).step_by(10) {
//!     let raw_high = now_ms < 100; // would be a GPIO read
//!     button.tick(raw_high, now_ms);
//! }
//! assert!(!button.is_pressed());
//! ```
//!
//! For hosts on `embedded-hal`, [`InputButton`] wraps the core together
//! with the pin so each poll only needs the current time. Events can be
//! surfaced through the [`log`] facade at trace/debug level by whatever
//! logger the host installs.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod input;

pub use button::{ActiveLevel, Button, GestureHandler, Timings};
pub use input::InputButton;
