//! Click combo state machine.
//!
//! Rapid clicking ramps a multiplier applied to click gains; going idle
//! decays it back to 1. The displayed phase (active / warning / decaying) is
//! derived on read from `(multiplier, idle time)` rather than stored, so it
//! can never fall out of sync with the timestamps.

/// Starting cap on the multiplier, before upgrades raise it.
pub const BASE_MAX_MULTIPLIER: f64 = 5.0;
/// Multiplier gained per click inside the combo window.
pub const BASE_RAMP_RATE: f64 = 0.05;
/// Multiplier lost per second once decay is running, before acceleration.
pub const BASE_DECAY_RATE: f64 = 0.5;

/// Clicks closer together than this keep the combo ramping.
pub const COMBO_WINDOW_MS: u64 = 1000;
/// Idle time after which the UI should warn that the combo is at risk.
pub const WARNING_DELAY_MS: u64 = 1000;
/// Idle time after which the multiplier starts decaying.
pub const DECAY_DELAY_MS: u64 = 2000;

/// Decay speeds up the longer the player stays idle: the rate scales by
/// `1 + factor` where factor ramps 0..=2 over this window of decay time.
const DECAY_RAMP_WINDOW_MS: f64 = 3000.0;
const MAX_DECAY_FACTOR: f64 = 2.0;

/// Read-derived combo phase, for UI feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComboPhase {
    /// Multiplier is at 1; no combo running.
    Inactive,
    /// Combo running, recently clicked.
    Active,
    /// Combo running but idle; decay is imminent.
    Warning,
    /// Idle past the decay delay; multiplier is draining.
    Decaying,
}

/// Combo multiplier state.
///
/// `max`, `ramp_rate` and `decay_rate` are derived stats, rewritten from the
/// owned-upgrade counts on every purchase and on load.
#[derive(Clone, Debug)]
pub struct Combo {
    /// Current multiplier on click gains, always in `[1, max]`.
    pub multiplier: f64,
    pub max: f64,
    pub ramp_rate: f64,
    pub decay_rate: f64,
    /// Timestamp of the last click in ms; 0 = never clicked.
    pub last_click_ms: u64,
    /// Timestamp of the last `decay` application, so each call charges only
    /// the wall time it actually covers.
    last_decay_ms: u64,
}

impl Combo {
    pub fn new() -> Self {
        Self {
            multiplier: 1.0,
            max: BASE_MAX_MULTIPLIER,
            ramp_rate: BASE_RAMP_RATE,
            decay_rate: BASE_DECAY_RATE,
            last_click_ms: 0,
            last_decay_ms: 0,
        }
    }

    /// Register a click at `now_ms`.
    ///
    /// The caller must read `multiplier` for the click's payout *before*
    /// calling this: the ramp-up applies to the next click, not the one
    /// being registered.
    pub fn on_click(&mut self, now_ms: u64) {
        let within_window = self.last_click_ms == 0
            || now_ms.saturating_sub(self.last_click_ms) <= COMBO_WINDOW_MS;
        if within_window {
            self.multiplier = (self.multiplier + self.ramp_rate).min(self.max);
        }
        self.last_click_ms = now_ms;
        self.last_decay_ms = now_ms;
    }

    /// Drain the multiplier if the player has been idle past the decay delay.
    ///
    /// Safe to call at any cadence: the amount drained is proportional to
    /// the wall time elapsed since the previous call, clamped to the portion
    /// of it that was actually past the delay.
    pub fn decay(&mut self, now_ms: u64) {
        let idle_ms = now_ms.saturating_sub(self.last_click_ms);
        if self.multiplier <= 1.0 || self.last_click_ms == 0 || idle_ms <= DECAY_DELAY_MS {
            self.last_decay_ms = now_ms;
            return;
        }

        let decaying_ms = (idle_ms - DECAY_DELAY_MS) as f64;
        let since_last_ms = now_ms.saturating_sub(self.last_decay_ms) as f64;
        let step_secs = since_last_ms.min(decaying_ms) / 1000.0;

        let factor = (decaying_ms / DECAY_RAMP_WINDOW_MS).min(MAX_DECAY_FACTOR);
        let amount = self.decay_rate * step_secs * (1.0 + factor);

        self.multiplier = (self.multiplier - amount).max(1.0);
        self.last_decay_ms = now_ms;
    }

    /// Current phase as a pure function of multiplier and idle time.
    pub fn phase(&self, now_ms: u64) -> ComboPhase {
        if self.multiplier <= 1.0 {
            return ComboPhase::Inactive;
        }
        let idle_ms = now_ms.saturating_sub(self.last_click_ms);
        if idle_ms < WARNING_DELAY_MS {
            ComboPhase::Active
        } else if idle_ms < DECAY_DELAY_MS {
            ComboPhase::Warning
        } else {
            ComboPhase::Decaying
        }
    }

    /// Clear the combo entirely (reset, or returning from an offline gap).
    /// Derived parameters (`max`, rates) are left alone.
    pub fn clear(&mut self) {
        self.multiplier = 1.0;
        self.last_click_ms = 0;
        self.last_decay_ms = 0;
    }
}

impl Default for Combo {
    fn default() -> Self {
        Self::new()
    }
}
