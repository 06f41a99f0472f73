//! Save/load via browser localStorage.
//!
//! ## Versioning policy
//!
//! - `SAVE_VERSION`: current save format version. Increment when adding
//!   fields.
//! - `MIN_COMPATIBLE_VERSION`: oldest version that can still be loaded.
//!   Leave it alone for pure field additions (`#[serde(default)]` fills the
//!   gaps); increment only for breaking changes to existing fields.
//!
//! Derived stats are deliberately absent from the payload: they are pure
//! functions of the owned counts and get recomputed on load. That also makes
//! catalog growth the only migration that ever happens — owned entries are
//! keyed by stable id string, so ids added since the save was written simply
//! load at level 0.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

#[cfg(any(target_arch = "wasm32", test))]
use crate::catalog::UpgradeId;
#[cfg(any(target_arch = "wasm32", test))]
use crate::state::{GameState, PurchaseBatch};

#[cfg(any(target_arch = "wasm32", test))]
const SAVE_VERSION: u32 = 1;

#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

/// localStorage key.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "arturo_clicker_save";

/// Suggested autosave cadence for hosts that save on a timer in addition to
/// saving after each mutating action.
pub const AUTOSAVE_INTERVAL_MS: u64 = 30_000;

/// Versioned wrapper around the save payload.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    game: GameSave,
}

/// The persisted slice of [`GameState`]. Derived stats excluded.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct GameSave {
    resource: f64,
    total_clicks: u64,
    last_tick_ms: u64,
    /// 0=One, 1=Ten, 2=Hundred, 3=Max.
    selected_batch: u8,
    combo_multiplier: f64,
    combo_last_click_ms: u64,
    /// Owned level per upgrade, keyed by stable catalog id.
    owned: Vec<(String, u32)>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn batch_to_u8(batch: PurchaseBatch) -> u8 {
    match batch {
        PurchaseBatch::One => 0,
        PurchaseBatch::Ten => 1,
        PurchaseBatch::Hundred => 2,
        PurchaseBatch::Max => 3,
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn batch_from_u8(byte: u8) -> PurchaseBatch {
    match byte {
        1 => PurchaseBatch::Ten,
        2 => PurchaseBatch::Hundred,
        3 => PurchaseBatch::Max,
        _ => PurchaseBatch::One,
    }
}

/// Extract the persistable slice of the state.
#[cfg(any(target_arch = "wasm32", test))]
fn extract_save(state: &GameState) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        game: GameSave {
            resource: state.resource,
            total_clicks: state.total_clicks,
            last_tick_ms: state.last_tick_ms,
            selected_batch: batch_to_u8(state.selected_batch),
            combo_multiplier: state.combo.multiplier,
            combo_last_click_ms: state.combo.last_click_ms,
            owned: UpgradeId::all()
                .iter()
                .map(|id| (id.key().to_string(), state.owned_count(*id)))
                .collect(),
        },
    }
}

/// Restore a save into `state` and recompute every derived stat.
///
/// Owned entries with ids this build doesn't know (save written by a newer
/// build) are ignored; catalog ids missing from the save stay at level 0.
#[cfg(any(target_arch = "wasm32", test))]
fn apply_save(state: &mut GameState, save: &GameSave) {
    state.resource = save.resource;
    state.total_clicks = save.total_clicks;
    state.last_tick_ms = save.last_tick_ms;
    state.selected_batch = batch_from_u8(save.selected_batch);
    state.combo.multiplier = save.combo_multiplier;
    state.combo.last_click_ms = save.combo_last_click_ms;

    for (key, count) in &save.owned {
        if let Some(id) = UpgradeId::from_key(key) {
            state.owned[id.index()] = *count;
        }
    }

    // Also clamps the restored combo multiplier into [1, max].
    state.recompute_derived();
}

/// Access localStorage. WASM only.
#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the state to localStorage. Failures are logged to the console and
/// otherwise ignored — losing one autosave is not worth interrupting play.
#[cfg(target_arch = "wasm32")]
pub fn save_game(state: &GameState) {
    let save_data = extract_save(state);
    let json = match serde_json::to_string(&save_data) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("arturo-clicker: failed to serialize save: {e}").into(),
            );
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("arturo-clicker: failed to write localStorage: {e:?}").into(),
            );
        }
    }
}

/// Restore the state from localStorage. Returns false (leaving `state`
/// untouched, i.e. a fresh game) when there is no save, the blob fails to
/// parse, or its version predates `MIN_COMPATIBLE_VERSION`.
#[cfg(target_arch = "wasm32")]
pub fn load_game(state: &mut GameState) -> bool {
    let storage = match get_storage() {
        Some(s) => s,
        None => return false,
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return false,
    };

    let save_data: SaveData = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("arturo-clicker: discarding unparsable save: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            return false;
        }
    };

    if save_data.version < MIN_COMPATIBLE_VERSION {
        web_sys::console::log_1(
            &format!(
                "arturo-clicker: save too old (saved={}, min_compatible={}); starting fresh",
                save_data.version, MIN_COMPATIBLE_VERSION
            )
            .into(),
        );
        let _ = storage.remove_item(STORAGE_KEY);
        return false;
    }

    apply_save(state, &save_data.game);
    true
}

/// Delete the save (used by the reset flow).
#[cfg(target_arch = "wasm32")]
pub fn delete_save() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
