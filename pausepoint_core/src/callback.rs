/// Trait for anything that wants to hear about the progress of a
/// long-running operation and answer with a control code.
///
/// The operation driving a [`PauseRegistry`](crate::registry::PauseRegistry)
/// calls [`on_progress`](PauseCallback::on_progress) with the current
/// percentage whenever it advances. The returned integer flows back to that
/// operation verbatim; the registry assigns it no meaning. By convention a
/// non-zero reply asks the operation to pause or abort, but the convention
/// belongs to the caller and the callback, not to this crate.
///
/// Invocation is synchronous: `on_progress` runs on the caller's thread and
/// the operation blocks for exactly as long as the callback takes.
///
/// Any `FnMut(i32) -> i32` closure implements this trait, so plain closures
/// register directly:
///
/// ```
/// use pausepoint_core::PauseRegistry;
///
/// let mut registry = PauseRegistry::new();
/// registry.register(|percent| percent * 2);
/// assert_eq!(registry.invoke(10), 20);
/// ```
pub trait PauseCallback: Send + 'static {
    /// Called with the operation's current percentage.
    ///
    /// `percent` is whatever the operation reported, unvalidated and
    /// unclamped. The return value is handed back to the operation
    /// unmodified.
    fn on_progress(&mut self, percent: i32) -> i32;
}

impl<F> PauseCallback for F
where
    F: FnMut(i32) -> i32 + Send + 'static,
{
    fn on_progress(&mut self, percent: i32) -> i32 {
        self(percent)
    }
}

/// A boxed callback, the form the slot stores.
pub type BoxedPauseCallback = Box<dyn PauseCallback>;
