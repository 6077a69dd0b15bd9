use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::palette;

/// Ordered color stops spread evenly from start (`t = 0`) to end (`t = 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct GradientColor {
    stops: SmallVec<[Color; 2]>,
}

impl GradientColor {
    #[must_use]
    pub fn new(start: Color, end: Color) -> Self {
        Self {
            stops: smallvec![start, end],
        }
    }

    /// Builds a gradient from two or more stops.
    pub fn from_stops(stops: impl IntoIterator<Item = Color>) -> ChartResult<Self> {
        let stops: SmallVec<[Color; 2]> = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(ChartError::InvalidData(
                "gradient needs at least two color stops".to_owned(),
            ));
        }
        for stop in &stops {
            stop.validate()?;
        }
        Ok(Self { stops })
    }

    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    #[must_use]
    pub fn start(&self) -> Color {
        self.stops[0]
    }

    #[must_use]
    pub fn end(&self) -> Color {
        self.stops[self.stops.len() - 1]
    }

    /// Color at relative position `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn color_at(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let segments = (self.stops.len() - 1) as f64;
        let scaled = t * segments;
        let index = (scaled.floor() as usize).min(self.stops.len() - 2);
        self.stops[index].lerp(self.stops[index + 1], scaled - index as f64)
    }

    #[must_use]
    pub fn orange() -> Self {
        Self::new(palette::ORANGE_START, palette::ORANGE_END)
    }

    #[must_use]
    pub fn blue() -> Self {
        Self::new(palette::GRADIENT_PURPLE, palette::GRADIENT_NEON_BLUE)
    }

    #[must_use]
    pub fn green() -> Self {
        Self::new(palette::GREEN_START, palette::GREEN_END)
    }

    #[must_use]
    pub fn blu() -> Self {
        Self::new(palette::BLU_START, palette::BLU_END)
    }

    #[must_use]
    pub fn blu_purpl() -> Self {
        Self::new(palette::BLU_PURPL_START, palette::BLU_PURPL_END)
    }

    #[must_use]
    pub fn purple() -> Self {
        Self::new(palette::PURPLE_START, palette::PURPLE_END)
    }

    /// Looks up a built-in gradient by name (see [`gradient_presets`]).
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        gradient_presets().swap_remove(name)
    }
}

impl TryFrom<Vec<Color>> for GradientColor {
    type Error = ChartError;

    fn try_from(stops: Vec<Color>) -> ChartResult<Self> {
        Self::from_stops(stops)
    }
}

impl From<GradientColor> for Vec<Color> {
    fn from(gradient: GradientColor) -> Self {
        gradient.stops.into_vec()
    }
}

impl Default for GradientColor {
    fn default() -> Self {
        Self::orange()
    }
}

/// Built-in gradients keyed by name, in a stable order suitable for pickers.
#[must_use]
pub fn gradient_presets() -> IndexMap<&'static str, GradientColor> {
    IndexMap::from([
        ("orange", GradientColor::orange()),
        ("blue", GradientColor::blue()),
        ("green", GradientColor::green()),
        ("blu", GradientColor::blu()),
        ("bluPurpl", GradientColor::blu_purpl()),
        ("purple", GradientColor::purple()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_at_hits_stops_at_ends_and_middle() {
        let gradient =
            GradientColor::from_stops([Color::BLACK, Color::WHITE, Color::BLACK]).expect("stops");
        assert_eq!(gradient.color_at(0.0), Color::BLACK);
        assert_eq!(gradient.color_at(0.5), Color::WHITE);
        assert_eq!(gradient.color_at(1.0), Color::BLACK);
        assert_eq!(gradient.color_at(0.25).red, 0.5);
    }

    #[test]
    fn single_stop_gradient_is_rejected() {
        assert!(GradientColor::from_stops([Color::BLACK]).is_err());
    }

    #[test]
    fn presets_keep_insertion_order() {
        let names: Vec<_> = gradient_presets().keys().copied().collect();
        assert_eq!(names[0], "orange");
        assert_eq!(names[4], "bluPurpl");
        assert_eq!(GradientColor::preset("bluPurpl"), Some(GradientColor::blu_purpl()));
        assert!(GradientColor::preset("teal").is_none());
    }
}
