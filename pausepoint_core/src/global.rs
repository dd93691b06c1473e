//! Process-wide registry for call sites that cannot thread a
//! [`PauseRegistry`] through their arguments.
//!
//! Deep inside a long-running job it is often impractical to pass a registry
//! handle down every call level, so this module keeps one behind a `static`.
//! The slot starts empty at process start, lives for the process lifetime
//! and is torn down with [`clear`].
//!
//! A mutex serializes every access, so the functions here are safe to call
//! from any thread. The lock is held while the callback runs: a callback
//! must not call back into this module or it will deadlock.

use std::sync::{Mutex, PoisonError};

use crate::callback::{BoxedPauseCallback, PauseCallback};
use crate::registry::PauseRegistry;

static REGISTRY: Mutex<PauseRegistry> = Mutex::new(PauseRegistry::new());

/// Locks the global slot, recovering from poison.
///
/// `invoke` must never fail, so a panic in some earlier callback is not
/// allowed to wedge the slot for the rest of the process.
fn lock() -> std::sync::MutexGuard<'static, PauseRegistry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registers `callback` in the process-wide slot, replacing any previous one.
pub fn register<C: PauseCallback>(callback: C) {
    lock().register(callback);
}

/// Fills or empties the process-wide slot. `None` clears it.
pub fn set(callback: Option<BoxedPauseCallback>) {
    lock().set(callback);
}

/// Empties the process-wide slot.
pub fn clear() {
    lock().clear();
}

/// Returns true when a callback is registered in the process-wide slot.
pub fn is_registered() -> bool {
    lock().is_registered()
}

/// Reports `percent` to the process-wide callback, if any.
///
/// Returns [`NO_CALLBACK`](crate::registry::NO_CALLBACK) when the slot is
/// empty, otherwise the callback's reply verbatim.
pub fn invoke(percent: i32) -> i32 {
    lock().invoke(percent)
}
