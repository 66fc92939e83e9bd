//! Debounce and gesture state machine for a single polled input line.
//!
//! The host calls [`Button::tick`] once per sampling period with the raw
//! line level and the current monotonic time in milliseconds. Raw changes
//! must stay stable for the debounce window before they are accepted;
//! accepted transitions are then classified into press, release,
//! single-press, double-press and long-press events, delivered through the
//! [`GestureHandler`] owned by the instance.

use log::{debug, trace};

/// Logic level that counts as "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    /// A high raw level means the button is pressed (pull-down wiring).
    High,
    /// A low raw level means the button is pressed (pull-up wiring).
    Low,
}

/// Timing configuration, all in milliseconds.
///
/// Values are trusted as-is. Zeroes are valid and degrade to immediate
/// classification instead of failing: a zero debounce window accepts every
/// raw change on the tick it is seen, a zero long-press threshold turns
/// every press into a long-press on its acceptance tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timings {
    /// How long a raw level must be stable before it is accepted
    /// (typical range for mechanical switches: 10-50 ms).
    pub debounce_ms: u32,
    /// Maximum quiet gap after a release during which a new press turns
    /// the prior press into a double-press.
    pub double_press_ms: u32,
    /// Minimum held duration for a press to qualify as a long-press.
    pub long_press_ms: u32,
}

/// Per-instance event sink for classified button activity.
///
/// Every method defaults to a no-op, so an implementor only overrides the
/// events it cares about. The unit type `()` is the explicit do-nothing
/// sink. Callbacks run synchronously inside [`Button::tick`] and must not
/// re-enter it; a slow callback delays the host's next sampling tick.
pub trait GestureHandler {
    /// An accepted transition to the active level.
    fn on_press(&mut self) {}
    /// An accepted transition away from the active level.
    fn on_release(&mut self) {}
    /// A short press with no second press inside the double-press window.
    fn on_single_press(&mut self) {}
    /// A second press arriving inside the double-press window. Fires on
    /// the second press; the gesture completes once that press releases.
    fn on_double_press(&mut self) {}
    /// A press held for at least the long-press threshold.
    fn on_long_press(&mut self) {}
}

impl GestureHandler for () {}

/// The single outstanding, not-yet-finalized gesture.
///
/// Transitions:
/// - `None` -> `AwaitingLong` on a press with no tentative single pending.
/// - `AwaitingLong` -> `None` when the long-press threshold elapses
///   (fires long-press).
/// - `AwaitingLong` -> `AwaitingSingle` on a release held shorter than the
///   long-press threshold.
/// - `AwaitingSingle` -> `InDouble` on a new press (fires double-press).
/// - `AwaitingSingle` -> `None` when the double-press window elapses
///   quietly (fires single-press).
/// - `InDouble` -> `None` on release (the double-press is then complete).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    AwaitingSingle,
    AwaitingLong,
    InDouble,
}

/// Gesture debouncer for one input line.
///
/// All state is owned by the instance; drive one independent instance per
/// physical button. Timestamp differences use wrapping arithmetic, so a
/// single wraparound of the millisecond counter stays correct.
pub struct Button<H: GestureHandler> {
    active_level: ActiveLevel,
    timings: Timings,
    /// Authoritative debounced level (true = raw high).
    debounced_high: bool,
    /// Raw level seen on the previous tick, for edge detection only.
    last_raw_high: bool,
    /// Timestamp (ms) when the current raw level first appeared.
    debounce_start_ms: u32,
    /// Timestamp (ms) of the last accepted press.
    last_press_ms: u32,
    /// Timestamp (ms) of the last accepted release.
    last_release_ms: u32,
    pending: Pending,
    handler: H,
}

impl<H: GestureHandler> Button<H> {
    /// Create a debouncer starting at the released level with no pending
    /// gesture. Use [`Button::reset_to`] to seed from a live pin read.
    pub fn new(active_level: ActiveLevel, timings: Timings, handler: H) -> Self {
        let released_high = active_level == ActiveLevel::Low;
        Self {
            active_level,
            timings,
            debounced_high: released_high,
            last_raw_high: released_high,
            debounce_start_ms: 0,
            last_press_ms: 0,
            last_release_ms: 0,
            pending: Pending::None,
            handler,
        }
    }

    /// Adopt `raw_high` as both the raw and debounced level and discard
    /// any pending gesture, without firing callbacks. Used to seed the
    /// initial state from a live read, or to resynchronize after the host
    /// stopped ticking for a while (e.g. on a deep-sleep wake).
    pub fn reset_to(&mut self, raw_high: bool) {
        self.debounced_high = raw_high;
        self.last_raw_high = raw_high;
        self.pending = Pending::None;
    }

    /// Whether the debounced level equals the active level. Pure read.
    pub fn is_pressed(&self) -> bool {
        self.debounced_high == (self.active_level == ActiveLevel::High)
    }

    /// The event sink owned by this instance.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the event sink, e.g. to drain state a handler
    /// collected or to swap its dispatch target between ticks.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Evaluate one sample. The sole mutating entry point; call once per
    /// sampling period with the raw line level and current time.
    pub fn tick(&mut self, raw_high: bool, now_ms: u32) {
        // Any raw edge restarts the stability window, even mid-window.
        if raw_high != self.last_raw_high {
            self.debounce_start_ms = now_ms;
            trace!("raw edge to {}, debounce window restarted", raw_high);
        }

        // Accept the change once the raw level has been stable long enough.
        if now_ms.wrapping_sub(self.debounce_start_ms) >= self.timings.debounce_ms
            && raw_high != self.debounced_high
        {
            self.debounced_high = raw_high;

            if self.is_pressed() {
                self.handler.on_press();
                self.last_press_ms = now_ms;

                if self.pending == Pending::AwaitingSingle {
                    // A second press before the tentative single-press was
                    // confirmed. Fires now, completes on the next release.
                    debug!("double-press at {} ms", now_ms);
                    self.handler.on_double_press();
                    self.pending = Pending::InDouble;
                } else {
                    self.pending = Pending::AwaitingLong;
                }
            } else {
                self.handler.on_release();
                self.last_release_ms = now_ms;

                if self.pending == Pending::InDouble {
                    // Second release finishes the double-press gesture.
                    self.pending = Pending::None;
                } else if now_ms.wrapping_sub(self.last_press_ms) < self.timings.long_press_ms {
                    // Short enough to possibly be a single-press; held back
                    // until the double-press window has passed quietly.
                    self.pending = Pending::AwaitingSingle;
                }
            }
        }

        // The quiet period elapsed with no second press.
        if self.pending == Pending::AwaitingSingle
            && now_ms.wrapping_sub(self.last_release_ms) > self.timings.double_press_ms
        {
            debug!("single-press at {} ms", now_ms);
            self.handler.on_single_press();
            self.pending = Pending::None;
        }

        // Held long enough while no release was accepted in the meantime.
        if self.pending == Pending::AwaitingLong
            && now_ms.wrapping_sub(self.last_press_ms) >= self.timings.long_press_ms
        {
            debug!("long-press at {} ms", now_ms);
            self.handler.on_long_press();
            self.pending = Pending::None;
        }

        self.last_raw_high = raw_high;
    }
}
