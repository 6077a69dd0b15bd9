use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect, ValueDomain};

/// Vertical room kept free above the highest sample for the indicator label.
pub const LINE_TOP_PADDING: f64 = 30.0;

/// Projected line segment in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Sample picked by a touch location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleHit {
    pub index: usize,
    pub value: f64,
    pub position: Point,
}

/// Placement of one series inside its drawing rectangle on the shared domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    frame: Rect,
    domain: ValueDomain,
    step_width: f64,
    step_height: f64,
}

impl LineGeometry {
    #[must_use]
    pub fn new(frame: Rect, domain: ValueDomain, point_count: usize) -> Self {
        let step_width = if point_count < 2 {
            0.0
        } else {
            frame.width() / (point_count - 1) as f64
        };

        let span = domain.span();
        let step_height = if span == 0.0 || !span.is_finite() {
            0.0
        } else {
            (frame.height() - LINE_TOP_PADDING) / span
        };

        Self {
            frame,
            domain,
            step_width,
            step_height,
        }
    }

    #[must_use]
    pub fn frame(self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn domain(self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn step_width(self) -> f64 {
        self.step_width
    }

    #[must_use]
    pub fn step_height(self) -> f64 {
        self.step_height
    }

    /// Maps `(index, value)` to view coordinates. Larger values sit higher.
    #[must_use]
    pub fn map_point(self, index: usize, value: f64) -> Point {
        let x = self.frame.origin.x + index as f64 * self.step_width;
        let y = self.frame.max_y() - (value - self.domain.min) * self.step_height;
        Point::new(x, y)
    }

    #[must_use]
    pub fn project_points(self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| self.map_point(index, *value))
            .collect()
    }

    /// Projects samples into adjacent segments; fewer than two samples draw nothing.
    ///
    /// Non-finite samples count as gaps: segments touching them are dropped,
    /// which breaks the polyline around the gap.
    #[must_use]
    pub fn project_segments(self, values: &[f64]) -> Vec<LineSegment> {
        if values.len() < 2 {
            return Vec::new();
        }

        values
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].is_finite() && pair[1].is_finite())
            .map(|(index, pair)| {
                let start = self.map_point(index, pair[0]);
                let end = self.map_point(index + 1, pair[1]);
                LineSegment {
                    x1: start.x,
                    y1: start.y,
                    x2: end.x,
                    y2: end.y,
                }
            })
            .collect()
    }

    /// Resolves the sample under horizontal view position `x`.
    ///
    /// Returns `None` when the rounded index falls outside the series or lands
    /// on a non-finite sample.
    #[must_use]
    pub fn closest_sample(self, x: f64, values: &[f64]) -> Option<SampleHit> {
        if values.is_empty() || !x.is_finite() {
            return None;
        }

        let index = if self.step_width == 0.0 {
            0.0
        } else {
            ((x - self.frame.origin.x) / self.step_width).round()
        };
        if index < 0.0 || index >= values.len() as f64 {
            return None;
        }

        let index = index as usize;
        let value = values[index];
        if !value.is_finite() {
            return None;
        }
        Some(SampleHit {
            index,
            value,
            position: self.map_point(index, value),
        })
    }
}
