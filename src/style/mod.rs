//! Theming: color scheme, gradients, chart styles and preset chart sizes.

mod chart_style;
mod gradient;
pub mod palette;

pub use chart_style::ChartStyle;
pub use gradient::{GradientColor, gradient_presets};

use serde::{Deserialize, Serialize};

use crate::core::Size;

/// Light/dark appearance passed explicitly to each render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Preset chart sizes.
pub struct ChartForm;

impl ChartForm {
    pub const SMALL: Size = Size::new(180.0, 120.0);
    pub const MEDIUM: Size = Size::new(180.0, 240.0);
    pub const LARGE: Size = Size::new(360.0, 120.0);
    pub const EXTRA_LARGE: Size = Size::new(360.0, 240.0);
    pub const DETAIL: Size = Size::new(180.0, 120.0);
}
