use indicatif::{ProgressBar, ProgressStyle};

use pausepoint_core::PauseCallback;

/// Renders copy progress as an indicatif terminal bar and, when a stop
/// threshold is configured, answers the pause check with a non-zero code
/// once that threshold is reached.
pub struct TerminalPauseHook {
    bar: ProgressBar,
    stop_at: Option<i32>,
}

impl TerminalPauseHook {
    pub fn new(stop_at: Option<i32>) -> Self {
        let style = ProgressStyle::with_template("[{bar:30.cyan/blue}] {pos}% {msg}")
            .unwrap()
            .progress_chars("=>-");

        let bar = ProgressBar::new(100);
        bar.set_style(style);

        Self { bar, stop_at }
    }

    /// A handle to the bar so the caller can finish or abandon it after the
    /// copy returns. `ProgressBar` is a cheap clone over shared state.
    pub fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }
}

impl PauseCallback for TerminalPauseHook {
    fn on_progress(&mut self, percent: i32) -> i32 {
        // The registry forwards percent untouched; only the display clamps.
        self.bar.set_position(percent.clamp(0, 100) as u64);

        match self.stop_at {
            Some(threshold) if percent >= threshold => 1,
            _ => 0,
        }
    }
}
