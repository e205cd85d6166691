//! Palette gestures: long-press detection and the controls panel.
//!
//! Provides [`LongPress`], which turns press/release events on a saved color
//! into either a click (select) or a long press (delete), and [`Panel`], which
//! tracks whether the controls panel is open. Both are explicit state machines;
//! every transition out of the armed state drops the press timestamp, so a
//! stale timer can never fire.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Default hold time before a press counts as a long press.
pub const DEFAULT_LONG_PRESS_MS: u64 = 600;

/// What a press event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing to act on yet (or any more).
    Pending,
    /// Short press released: select the color.
    Click,
    /// Hold threshold reached: delete the color.
    LongPress,
}

/// Observable phase of a [`LongPress`] detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    /// No pointer is down.
    Idle,
    /// Pointer is down and the hold timer is running.
    Armed,
    /// The hold threshold passed; waiting for release.
    Fired,
}

#[derive(Debug, Clone, Copy)]
enum PressState<I> {
    Idle,
    Armed { since: I },
    Fired,
}

/// Long-press detector for a single target.
///
/// The host reports pointer events and polls while the pointer is down:
///
/// * [`press`](Self::press) arms the timer (re-arming restarts it)
/// * [`poll`](Self::poll) returns `LongPress` once the hold threshold elapses
/// * [`release`](Self::release) returns `Click` if released before that
/// * [`cancel`](Self::cancel) disarms without an outcome (pointer left, scroll)
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct LongPress<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    threshold: I::Duration,
    state: PressState<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> LongPress<'t, I, T> {
    /// Creates an idle detector with the given hold threshold.
    pub fn new(time_source: &'t T, threshold: I::Duration) -> Self {
        Self {
            time_source,
            threshold,
            state: PressState::Idle,
        }
    }

    /// Creates an idle detector with [`DEFAULT_LONG_PRESS_MS`].
    pub fn with_default_threshold(time_source: &'t T) -> Self {
        Self::new(time_source, I::Duration::from_millis(DEFAULT_LONG_PRESS_MS))
    }

    /// Pointer went down. Can be called from any state.
    pub fn press(&mut self) {
        self.state = PressState::Armed {
            since: self.time_source.now(),
        };
    }

    /// Checks the hold timer.
    ///
    /// Returns `LongPress` exactly once, on the first poll at or after the
    /// threshold; afterwards the detector waits in `Fired` for the release.
    pub fn poll(&mut self) -> PressOutcome {
        match self.state {
            PressState::Armed { since } if self.expired(since) => {
                self.state = PressState::Fired;
                PressOutcome::LongPress
            }
            _ => PressOutcome::Pending,
        }
    }

    /// Pointer went up. Always returns to `Idle`.
    ///
    /// A release after the threshold that was never polled still counts as a
    /// long press.
    pub fn release(&mut self) -> PressOutcome {
        let outcome = match self.state {
            PressState::Armed { since } if self.expired(since) => PressOutcome::LongPress,
            PressState::Armed { .. } => PressOutcome::Click,
            PressState::Fired | PressState::Idle => PressOutcome::Pending,
        };
        self.state = PressState::Idle;
        outcome
    }

    /// Abandons the press without an outcome. Can be called from any state.
    pub fn cancel(&mut self) {
        self.state = PressState::Idle;
    }

    /// Returns the current phase.
    pub fn phase(&self) -> PressPhase {
        match self.state {
            PressState::Idle => PressPhase::Idle,
            PressState::Armed { .. } => PressPhase::Armed,
            PressState::Fired => PressPhase::Fired,
        }
    }

    /// Returns the hold threshold.
    pub fn threshold(&self) -> I::Duration {
        self.threshold
    }

    fn expired(&self, since: I) -> bool {
        let held = self.time_source.now().duration_since(since);
        held.as_millis() >= self.threshold.as_millis()
    }
}

/// Visibility of the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Controls panel: opened by its toggle, closed by any click elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panel {
    state: PanelState,
}

impl Panel {
    /// Creates a closed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Click on the panel toggle.
    ///
    /// Opens a closed panel and returns `true`, meaning the saved palette
    /// should be redrawn. Clicks on an open panel are ignored.
    pub fn toggle_click(&mut self) -> bool {
        match self.state {
            PanelState::Closed => {
                self.state = PanelState::Open;
                true
            }
            PanelState::Open => false,
        }
    }

    /// Click anywhere outside the panel. Closes it if open.
    ///
    /// Returns `true` if the panel was closed by this click.
    pub fn outside_click(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = PanelState::Closed;
        was_open
    }

    /// Returns the current state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Returns true if the panel is open.
    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }
}
