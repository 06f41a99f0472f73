//! Progression engine — the write surface the host drives.
//!
//! One engine instance owns the [`GameState`] for a session. Hosts call
//! `click`/`buy` on user input, `tick` from a periodic callback (any
//! cadence), and `reconcile_offline` exactly once at session start before
//! ticking begins. Every time-sensitive operation takes an explicit `now_ms`
//! so behavior is deterministic under test.
//!
//! Nothing here fails loudly: an unaffordable purchase is a no-op, a clock
//! that runs backwards accrues nothing. These are normal play conditions,
//! not errors.

use crate::catalog::UpgradeId;
use crate::combo::ComboPhase;
use crate::cost;
use crate::state::{GameState, PurchaseBatch};

pub struct ProgressionEngine {
    state: GameState,
}

impl ProgressionEngine {
    /// Fresh session starting at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            state: GameState::new(now_ms),
        }
    }

    /// Adopt a loaded state. Derived stats are recomputed before first use,
    /// which also grows the owned vector for catalog ids the save predates.
    pub fn from_state(mut state: GameState) -> Self {
        state.recompute_derived();
        Self { state }
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // ── Read surface ────────────────────────────────────────────────

    pub fn resource(&self) -> f64 {
        self.state.resource
    }

    pub fn click_power(&self) -> f64 {
        self.state.click_power
    }

    pub fn passive_rate(&self) -> f64 {
        self.state.passive_rate
    }

    pub fn total_clicks(&self) -> u64 {
        self.state.total_clicks
    }

    pub fn combo_multiplier(&self) -> f64 {
        self.state.combo.multiplier
    }

    pub fn max_combo_multiplier(&self) -> f64 {
        self.state.combo.max
    }

    pub fn combo_phase(&self, now_ms: u64) -> ComboPhase {
        self.state.combo.phase(now_ms)
    }

    pub fn owned(&self, id: UpgradeId) -> u32 {
        self.state.owned_count(id)
    }

    pub fn selected_batch(&self) -> PurchaseBatch {
        self.state.selected_batch
    }

    pub fn offline_multiplier(&self) -> f64 {
        self.state.offline_multiplier
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Register a manual click. Returns the hair gained, for UI feedback.
    ///
    /// The payout uses the combo multiplier in effect at the moment of the
    /// click; the ramp-up it triggers only benefits the next click.
    pub fn click(&mut self, now_ms: u64) -> f64 {
        let gain = self.state.click_power * self.state.combo.multiplier;
        self.state.resource += gain;
        self.state.total_clicks += 1;
        self.state.combo.on_click(now_ms);
        gain
    }

    /// Advance passive accrual to `now_ms` and run combo decay.
    ///
    /// Any cadence works; elapsed time is measured, not assumed. Repeated
    /// calls with the same `now_ms` accrue nothing extra, and a clock that
    /// jumped backwards accrues nothing at all.
    pub fn tick(&mut self, now_ms: u64) {
        let elapsed_secs = now_ms.saturating_sub(self.state.last_tick_ms) as f64 / 1000.0;
        self.state.resource += self.state.passive_rate * elapsed_secs;
        self.state.last_tick_ms = now_ms;
        self.state.combo.decay(now_ms);
    }

    /// Buy levels of an upgrade. Returns the quantity actually bought; 0
    /// means the purchase was unaffordable and nothing changed.
    ///
    /// All-or-nothing: either the full resolved quantity is bought and paid
    /// for, or the state is untouched.
    pub fn buy(&mut self, id: UpgradeId, batch: PurchaseBatch) -> u32 {
        let owned = self.state.owned_count(id);
        let quantity = self.resolve_quantity(id, batch, owned);
        if quantity == 0 {
            return 0;
        }

        let total = cost::bulk_cost(id.base_cost(), id.cost_growth(), owned, quantity);
        if total > self.state.resource {
            return 0;
        }

        self.state.owned[id.index()] += quantity;
        self.state.resource -= total;
        self.state.recompute_derived();
        quantity
    }

    /// Buy using the currently selected batch.
    pub fn buy_selected(&mut self, id: UpgradeId) -> u32 {
        self.buy(id, self.state.selected_batch)
    }

    /// Price preview for the shop: what `buy(id, batch)` would charge right
    /// now. For `Max` this is the total for the affordable quantity.
    pub fn cost_of(&self, id: UpgradeId, batch: PurchaseBatch) -> f64 {
        let owned = self.state.owned_count(id);
        let quantity = self.resolve_quantity(id, batch, owned);
        cost::bulk_cost(id.base_cost(), id.cost_growth(), owned, quantity)
    }

    fn resolve_quantity(&self, id: UpgradeId, batch: PurchaseBatch, owned: u32) -> u32 {
        match batch.fixed_quantity() {
            Some(quantity) => quantity,
            None => cost::max_affordable(
                id.base_cost(),
                id.cost_growth(),
                owned,
                self.state.resource,
            ),
        }
    }

    pub fn set_purchase_batch(&mut self, batch: PurchaseBatch) {
        self.state.selected_batch = batch;
    }

    /// Grant passive earnings for the gap since the last session, once,
    /// before ticking begins. Returns the whole-hair earnings granted.
    ///
    /// Calling it again with the same `now_ms` grants nothing (the gap has
    /// been consumed). Any combo left over from the previous session is
    /// stale and gets cleared.
    pub fn reconcile_offline(&mut self, now_ms: u64) -> u64 {
        let elapsed_secs = now_ms.saturating_sub(self.state.last_tick_ms) as f64 / 1000.0;
        self.state.last_tick_ms = now_ms;

        if self.state.passive_rate > 0.0 && elapsed_secs > 0.0 {
            let earnings = (self.state.passive_rate * elapsed_secs * self.state.offline_multiplier)
                .floor();
            self.state.resource += earnings;
            self.state.combo.clear();
            earnings as u64
        } else {
            0
        }
    }

    /// Wipe everything back to a fresh game.
    pub fn reset(&mut self, now_ms: u64) {
        self.state = GameState::new(now_ms);
    }
}
