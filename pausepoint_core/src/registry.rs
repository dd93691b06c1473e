use crate::callback::{BoxedPauseCallback, PauseCallback};

/// Returned by [`PauseRegistry::invoke`] when no callback is registered.
///
/// This is a normal outcome, not an error: it simply means nobody asked to
/// be told about progress, so the operation carries on.
pub const NO_CALLBACK: i32 = 0;

/// A single-slot callback holder.
///
/// The slot holds zero or one [`PauseCallback`]. Registering a new callback
/// silently discards the previous one; clearing empties the slot. The slot
/// starts empty and is only ever mutated through [`register`], [`set`] and
/// [`clear`].
///
/// | Slot state | `invoke(p)` returns          |
/// |------------|------------------------------|
/// | empty      | [`NO_CALLBACK`] (0)          |
/// | populated  | the callback's result for `p`|
///
/// Percent values are forwarded exactly as given. The registry performs no
/// validation, no clamping, and no interpretation of the callback's reply.
///
/// [`register`]: PauseRegistry::register
/// [`set`]: PauseRegistry::set
/// [`clear`]: PauseRegistry::clear
pub struct PauseRegistry {
    slot: Option<BoxedPauseCallback>,
}

impl PauseRegistry {
    /// Creates a registry with an empty slot.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Registers `callback`, replacing whatever the slot held before.
    ///
    /// Cannot fail; no validation is performed.
    pub fn register<C: PauseCallback>(&mut self, callback: C) {
        self.set(Some(Box::new(callback)));
    }

    /// Fills or empties the slot. `None` clears it.
    pub fn set(&mut self, callback: Option<BoxedPauseCallback>) {
        match &callback {
            Some(_) => log::debug!("pause callback registered"),
            None => log::debug!("pause callback cleared"),
        }
        self.slot = callback;
    }

    /// Empties the slot. Equivalent to `set(None)`.
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// Returns true when a callback is currently registered.
    pub fn is_registered(&self) -> bool {
        self.slot.is_some()
    }

    /// Reports `percent` to the registered callback, if any.
    ///
    /// Returns [`NO_CALLBACK`] when the slot is empty, otherwise the
    /// callback's reply verbatim. Never fails itself; whatever the callback
    /// does is the callback's business.
    pub fn invoke(&mut self, percent: i32) -> i32 {
        match &mut self.slot {
            Some(callback) => {
                let code = callback.on_progress(percent);
                log::trace!("pause callback invoked: percent={percent} code={code}");
                code
            }
            None => NO_CALLBACK,
        }
    }
}

impl Default for PauseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{PauseRegistry, NO_CALLBACK};

    #[test]
    fn new_registry_starts_empty() {
        let registry = PauseRegistry::new();
        assert!(!registry.is_registered());
    }

    #[test]
    fn register_populates_the_slot() {
        let mut registry = PauseRegistry::new();
        registry.register(|_| 0);
        assert!(registry.is_registered());
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut registry = PauseRegistry::new();
        registry.register(|_| 0);
        registry.clear();
        assert!(!registry.is_registered());
        assert_eq!(registry.invoke(42), NO_CALLBACK);
    }

    #[test]
    fn default_matches_new() {
        let registry = PauseRegistry::default();
        assert!(!registry.is_registered());
    }
}
