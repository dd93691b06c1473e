//! pausepoint: a pause-callback registry for long-running operations.
//!
//! An operation that grinds through a big job (an archive rebuild, a bulk
//! database sweep) periodically reports its integer percentage to one
//! externally registered callback and gets an integer control code back.
//! The registry holds at most one callback, forwards the percentage
//! untouched, and returns the callback's reply verbatim, or `0` when no
//! callback is registered. What the code means (commonly: non-zero asks the
//! operation to pause or abort) is a contract between the operation and the
//! callback, not this crate.

pub mod callback;
pub mod global;
pub mod registry;

pub use callback::{BoxedPauseCallback, PauseCallback};
pub use registry::{PauseRegistry, NO_CALLBACK};
