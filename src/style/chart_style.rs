use serde::{Deserialize, Serialize};

use crate::render::Color;

use super::{ColorScheme, GradientColor, palette};

/// Colors used to paint one chart.
///
/// `dark_mode_style` overrides the built-in dark variant when the chart is
/// rendered with [`ColorScheme::Dark`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background_color: Color,
    pub accent_color: Color,
    pub gradient: GradientColor,
    pub text_color: Color,
    pub legend_text_color: Color,
    pub drop_shadow_color: Color,
    #[serde(default)]
    pub dark_mode_style: Option<Box<ChartStyle>>,
}

impl ChartStyle {
    #[must_use]
    pub fn line_chart_style_one() -> Self {
        Self {
            background_color: Color::WHITE,
            accent_color: palette::ORANGE_START,
            gradient: GradientColor::orange(),
            text_color: Color::BLACK,
            legend_text_color: palette::GRAY,
            drop_shadow_color: palette::GRAY,
            dark_mode_style: None,
        }
    }

    #[must_use]
    pub fn line_view_dark_mode() -> Self {
        Self {
            background_color: Color::BLACK,
            accent_color: palette::ORANGE_START,
            gradient: GradientColor::orange(),
            text_color: Color::WHITE,
            legend_text_color: Color::WHITE,
            drop_shadow_color: palette::GRAY,
            dark_mode_style: None,
        }
    }

    #[must_use]
    pub fn with_dark_mode_style(mut self, dark: ChartStyle) -> Self {
        self.dark_mode_style = Some(Box::new(dark));
        self
    }

    /// Picks the style to paint with for `scheme`.
    #[must_use]
    pub fn resolve(&self, scheme: ColorScheme) -> ChartStyle {
        match scheme {
            ColorScheme::Light => self.clone(),
            ColorScheme::Dark => self
                .dark_mode_style
                .as_deref()
                .cloned()
                .unwrap_or_else(Self::line_view_dark_mode),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::line_chart_style_one()
    }
}
