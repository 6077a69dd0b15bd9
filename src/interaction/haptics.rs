/// Sink for selection feedback (a tick on touch devices).
pub trait HapticFeedback {
    fn play_selection(&mut self);
}

/// Feedback sink for platforms without haptics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn play_selection(&mut self) {}
}

/// Counts selection ticks; handy for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordingHaptics {
    pub selections: usize,
}

impl HapticFeedback for RecordingHaptics {
    fn play_selection(&mut self) {
        self.selections += 1;
    }
}
