use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Location in view space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size is drawable when both sides are finite and strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Axis-aligned rectangle; `origin` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn with_width(self, width: f64) -> Self {
        Self {
            origin: self.origin,
            size: Size::new(width, self.size.height),
        }
    }
}
