//! Authoritative game state record.

use crate::catalog::{self, UpgradeId};
use crate::combo::Combo;

/// How many levels a single buy action purchases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseBatch {
    #[default]
    One,
    Ten,
    Hundred,
    /// As many as the current resource affords.
    Max,
}

impl PurchaseBatch {
    /// Fixed quantity for this batch, or None for Max (resolved against the
    /// budget at purchase time).
    pub fn fixed_quantity(&self) -> Option<u32> {
        match self {
            PurchaseBatch::One => Some(1),
            PurchaseBatch::Ten => Some(10),
            PurchaseBatch::Hundred => Some(100),
            PurchaseBatch::Max => None,
        }
    }
}

/// The single authoritative game record.
///
/// `click_power`, `passive_rate`, `offline_multiplier` and the combo
/// parameters are derived: pure functions of `owned`, rewritten by
/// [`recompute_derived`](Self::recompute_derived) on every purchase and on
/// load, never patched in place.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Accumulated hair. Never negative; fractional, floored only for display.
    pub resource: f64,
    /// Hair per click before the combo multiplier. Derived, >= 1.
    pub click_power: f64,
    /// Hair per second. Derived, >= 0.
    pub passive_rate: f64,
    /// When passive accrual was last applied (ms epoch).
    pub last_tick_ms: u64,
    /// Lifetime click counter. No gameplay effect.
    pub total_clicks: u64,
    pub combo: Combo,
    /// Owned level per upgrade, indexed by catalog order.
    pub owned: Vec<u32>,
    pub selected_batch: PurchaseBatch,
    /// Multiplier on offline earnings. Derived, >= 1.
    pub offline_multiplier: f64,
}

impl GameState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            resource: 0.0,
            click_power: 1.0,
            passive_rate: 0.0,
            last_tick_ms: now_ms,
            total_clicks: 0,
            combo: Combo::new(),
            owned: vec![0; UpgradeId::all().len()],
            selected_batch: PurchaseBatch::One,
            offline_multiplier: 1.0,
        }
    }

    /// Owned level of an upgrade.
    pub fn owned_count(&self, id: UpgradeId) -> u32 {
        self.owned.get(id.index()).copied().unwrap_or(0)
    }

    /// Rewrite every derived stat from the owned counts.
    pub fn recompute_derived(&mut self) {
        // Older saves may carry a shorter owned vector; grow it so newly
        // appended catalog ids exist at level 0.
        if self.owned.len() < UpgradeId::all().len() {
            self.owned.resize(UpgradeId::all().len(), 0);
        }

        let stats = catalog::aggregate(&self.owned);
        self.click_power = stats.click_power;
        self.passive_rate = stats.passive_rate;
        self.offline_multiplier = stats.offline_multiplier;
        self.combo.max = stats.max_combo;
        self.combo.decay_rate = stats.combo_decay_rate;
        self.combo.ramp_rate = stats.combo_ramp_rate;
        self.combo.multiplier = self.combo.multiplier.clamp(1.0, self.combo.max);
    }
}
