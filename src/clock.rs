//! Wall-clock time source.
//!
//! Engine operations take explicit `now_ms` timestamps so they stay pure and
//! testable; hosts call [`now_ms`] once per event and pass it down.
//! `std::time::SystemTime` panics on wasm32-unknown-unknown, so the browser
//! build reads `Date.now()` through js-sys instead.

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
