mod haptics;

pub use haptics::{HapticFeedback, NoHaptics, RecordingHaptics};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Transient touch-selection state owned by one chart instance.
///
/// Transitions are explicit method calls; the caller reacts to the returned
/// flag instead of observing fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    phase: DragPhase,
    touch_location: Point,
    indicator_visible: bool,
    current_value: Option<f64>,
}

impl SelectionState {
    #[must_use]
    pub fn phase(self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn touch_location(self) -> Point {
        self.touch_location
    }

    #[must_use]
    pub fn indicator_visible(self) -> bool {
        self.indicator_visible
    }

    /// Last selected value. Kept across gestures.
    #[must_use]
    pub fn current_value(self) -> Option<f64> {
        self.current_value
    }

    /// Applies one drag update.
    ///
    /// `value` is the sample resolved under `location`, `None` when the touch
    /// is outside the selectable series. Returns `true` when the selected value
    /// changed while the indicator was already showing, which is the moment
    /// selection feedback should fire. The update that starts a gesture only
    /// records the value.
    pub fn drag_changed(&mut self, location: Point, value: Option<f64>) -> bool {
        let was_visible = self.indicator_visible;
        self.phase = DragPhase::Dragging;
        self.touch_location = location;
        self.indicator_visible = true;

        let Some(value) = value else {
            return false;
        };
        let changed = self.current_value.map(OrderedFloat) != Some(OrderedFloat(value));
        self.current_value = Some(value);
        changed && was_visible
    }

    /// Ends the gesture and hides the indicator; location and value are kept.
    pub fn drag_ended(&mut self) {
        self.phase = DragPhase::Idle;
        self.indicator_visible = false;
    }
}
