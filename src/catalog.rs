//! Static upgrade catalog and derived-stat aggregation.
//!
//! Catalog ids are stable and append-only: saves written under an older
//! catalog load by leaving the missing ids at zero owned. Derived stats are
//! never patched incrementally — [`aggregate`] recomputes everything from
//! the owned counts so two states with the same counts can never drift apart.

use crate::combo::{BASE_DECAY_RATE, BASE_MAX_MULTIPLIER, BASE_RAMP_RATE};

/// Every purchasable upgrade, in catalog (display) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpgradeId {
    Comb,
    Shampoo,
    Hat,
    Wig,
    Salon,
    HairTonic,
    HairClinic,
    ComboBooster,
    ComboExtender,
    HairFactory,
    HairResearch,
    HairCloner,
    ComboTrainer,
    NightSerum,
    GoldenFollicle,
}

/// What one level of an upgrade does. Additive effects scale linearly with
/// the owned count; `*Scale` effects compound multiplicatively per level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectSpec {
    ClickPowerAdd(f64),
    PassiveRateAdd(f64),
    MaxComboAdd(f64),
    ComboDecayRateScale(f64),
    ComboRampRateScale(f64),
    OfflineMultiplierAdd(f64),
    GlobalProductionMultiplierAdd(f64),
}

impl UpgradeId {
    /// All upgrades in catalog order. New upgrades are appended, never
    /// inserted or removed.
    pub fn all() -> &'static [UpgradeId] {
        &[
            UpgradeId::Comb,
            UpgradeId::Shampoo,
            UpgradeId::Hat,
            UpgradeId::Wig,
            UpgradeId::Salon,
            UpgradeId::HairTonic,
            UpgradeId::HairClinic,
            UpgradeId::ComboBooster,
            UpgradeId::ComboExtender,
            UpgradeId::HairFactory,
            UpgradeId::HairResearch,
            UpgradeId::HairCloner,
            UpgradeId::ComboTrainer,
            UpgradeId::NightSerum,
            UpgradeId::GoldenFollicle,
        ]
    }

    /// Position in catalog order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stable string id used in the save blob.
    pub fn key(&self) -> &'static str {
        match self {
            UpgradeId::Comb => "comb",
            UpgradeId::Shampoo => "shampoo",
            UpgradeId::Hat => "hat",
            UpgradeId::Wig => "wig",
            UpgradeId::Salon => "salon",
            UpgradeId::HairTonic => "hairTonic",
            UpgradeId::HairClinic => "hairClinic",
            UpgradeId::ComboBooster => "comboBooster",
            UpgradeId::ComboExtender => "comboExtender",
            UpgradeId::HairFactory => "hairFactory",
            UpgradeId::HairResearch => "hairResearch",
            UpgradeId::HairCloner => "hairCloner",
            UpgradeId::ComboTrainer => "comboTrainer",
            UpgradeId::NightSerum => "nightSerum",
            UpgradeId::GoldenFollicle => "goldenFollicle",
        }
    }

    /// Inverse of [`key`](Self::key); unknown keys (from a newer save) are None.
    pub fn from_key(key: &str) -> Option<UpgradeId> {
        Self::all().iter().copied().find(|id| id.key() == key)
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            UpgradeId::Comb => "Magic Comb",
            UpgradeId::Shampoo => "Growth Shampoo",
            UpgradeId::Hat => "Lucky Hat",
            UpgradeId::Wig => "Arturo's Wig",
            UpgradeId::Salon => "Hair Salon",
            UpgradeId::HairTonic => "Hair Tonic",
            UpgradeId::HairClinic => "Hair Clinic",
            UpgradeId::ComboBooster => "Combo Booster",
            UpgradeId::ComboExtender => "Combo Extender",
            UpgradeId::HairFactory => "Hair Factory",
            UpgradeId::HairResearch => "Hair Research Lab",
            UpgradeId::HairCloner => "Hair Cloning Tech",
            UpgradeId::ComboTrainer => "Combo Trainer",
            UpgradeId::NightSerum => "Night Serum",
            UpgradeId::GoldenFollicle => "Golden Follicle",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UpgradeId::Comb => "Increases click power by 1",
            UpgradeId::Shampoo => "Generates 1 hair per second",
            UpgradeId::Hat => "Increases click power by 5",
            UpgradeId::Wig => "Generates 5 hair per second",
            UpgradeId::Salon => "Generates 20 hair per second",
            UpgradeId::HairTonic => "Increases click power by 10",
            UpgradeId::HairClinic => "Generates 50 hair per second",
            UpgradeId::ComboBooster => "Increases max combo multiplier by 0.5",
            UpgradeId::ComboExtender => "Slows down combo decay by 10%",
            UpgradeId::HairFactory => "Generates 200 hair per second",
            UpgradeId::HairResearch => "Increases click power by 50",
            UpgradeId::HairCloner => "Generates 500 hair per second",
            UpgradeId::ComboTrainer => "Speeds up combo ramp by 10%",
            UpgradeId::NightSerum => "Hair grown while away +10%",
            UpgradeId::GoldenFollicle => "All hair production +5%",
        }
    }

    /// Cost of the first level.
    pub fn base_cost(&self) -> f64 {
        match self {
            UpgradeId::Comb => 10.0,
            UpgradeId::Shampoo => 50.0,
            UpgradeId::Hat => 200.0,
            UpgradeId::Wig => 500.0,
            UpgradeId::Salon => 2_000.0,
            UpgradeId::HairTonic => 5_000.0,
            UpgradeId::HairClinic => 10_000.0,
            UpgradeId::ComboBooster => 25_000.0,
            UpgradeId::ComboExtender => 50_000.0,
            UpgradeId::HairFactory => 100_000.0,
            UpgradeId::HairResearch => 250_000.0,
            UpgradeId::HairCloner => 500_000.0,
            UpgradeId::ComboTrainer => 75_000.0,
            UpgradeId::NightSerum => 150_000.0,
            UpgradeId::GoldenFollicle => 1_000_000.0,
        }
    }

    /// Per-level cost growth factor, always > 1.
    pub fn cost_growth(&self) -> f64 {
        match self {
            UpgradeId::Comb => 1.15,
            UpgradeId::Shampoo => 1.18,
            UpgradeId::Hat => 1.2,
            UpgradeId::Wig => 1.25,
            UpgradeId::Salon => 1.3,
            UpgradeId::HairTonic => 1.35,
            UpgradeId::HairClinic => 1.4,
            UpgradeId::ComboBooster => 1.5,
            UpgradeId::ComboExtender => 1.6,
            UpgradeId::HairFactory => 1.7,
            UpgradeId::HairResearch => 1.8,
            UpgradeId::HairCloner => 1.9,
            UpgradeId::ComboTrainer => 1.6,
            UpgradeId::NightSerum => 1.65,
            UpgradeId::GoldenFollicle => 2.0,
        }
    }

    pub fn effect(&self) -> EffectSpec {
        match self {
            UpgradeId::Comb => EffectSpec::ClickPowerAdd(1.0),
            UpgradeId::Shampoo => EffectSpec::PassiveRateAdd(1.0),
            UpgradeId::Hat => EffectSpec::ClickPowerAdd(5.0),
            UpgradeId::Wig => EffectSpec::PassiveRateAdd(5.0),
            UpgradeId::Salon => EffectSpec::PassiveRateAdd(20.0),
            UpgradeId::HairTonic => EffectSpec::ClickPowerAdd(10.0),
            UpgradeId::HairClinic => EffectSpec::PassiveRateAdd(50.0),
            UpgradeId::ComboBooster => EffectSpec::MaxComboAdd(0.5),
            UpgradeId::ComboExtender => EffectSpec::ComboDecayRateScale(0.9),
            UpgradeId::HairFactory => EffectSpec::PassiveRateAdd(200.0),
            UpgradeId::HairResearch => EffectSpec::ClickPowerAdd(50.0),
            UpgradeId::HairCloner => EffectSpec::PassiveRateAdd(500.0),
            UpgradeId::ComboTrainer => EffectSpec::ComboRampRateScale(1.1),
            UpgradeId::NightSerum => EffectSpec::OfflineMultiplierAdd(0.1),
            UpgradeId::GoldenFollicle => EffectSpec::GlobalProductionMultiplierAdd(0.05),
        }
    }
}

/// Stats recomputed from scratch out of the owned counts.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedStats {
    pub click_power: f64,
    pub passive_rate: f64,
    pub max_combo: f64,
    pub combo_decay_rate: f64,
    pub combo_ramp_rate: f64,
    pub offline_multiplier: f64,
}

/// Recompute all derived stats from the owned counts (catalog order).
///
/// Additive effects contribute `amount * owned`; scale effects compound
/// `factor^owned`. The global production multiplier is accumulated
/// additively and applied last, to click power and passive rate only, after
/// which both are floored to whole hairs.
pub fn aggregate(owned: &[u32]) -> DerivedStats {
    let mut click_power = 1.0;
    let mut passive_rate = 0.0;
    let mut max_combo = BASE_MAX_MULTIPLIER;
    let mut combo_decay_rate = BASE_DECAY_RATE;
    let mut combo_ramp_rate = BASE_RAMP_RATE;
    let mut offline_multiplier = 1.0;
    let mut global_production = 1.0;

    for id in UpgradeId::all() {
        let count = owned.get(id.index()).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let n = count as f64;
        match id.effect() {
            EffectSpec::ClickPowerAdd(amount) => click_power += amount * n,
            EffectSpec::PassiveRateAdd(amount) => passive_rate += amount * n,
            EffectSpec::MaxComboAdd(amount) => max_combo += amount * n,
            EffectSpec::ComboDecayRateScale(factor) => {
                combo_decay_rate *= factor.powi(count as i32)
            }
            EffectSpec::ComboRampRateScale(factor) => {
                combo_ramp_rate *= factor.powi(count as i32)
            }
            EffectSpec::OfflineMultiplierAdd(amount) => offline_multiplier += amount * n,
            EffectSpec::GlobalProductionMultiplierAdd(amount) => {
                global_production += amount * n
            }
        }
    }

    DerivedStats {
        click_power: (click_power * global_production).floor(),
        passive_rate: (passive_rate * global_production).floor(),
        max_combo,
        combo_decay_rate,
        combo_ramp_rate,
        offline_multiplier,
    }
}
