use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::scaler::validate_step_size;
use crate::core::{DEFAULT_STEP_SIZE, Size};
use crate::error::{ChartError, ChartResult};
use crate::style::{ChartForm, ChartStyle};

use super::ValueFormat;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Construction options for [`super::MultiLineChart`].
///
/// Serializable so hosts can persist chart setup; every field except
/// `step_size` falls back to a documented default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineChartConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default = "default_form")]
    pub form: Size,
    /// Display-only rate badge value.
    #[serde(default)]
    pub rate_value: Option<i32>,
    #[serde(default = "default_drop_shadow")]
    pub drop_shadow: bool,
    #[serde(default = "default_value_specifier")]
    pub value_specifier: String,
    /// Screen units per data point.
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    /// Series whose samples the drag gesture selects.
    #[serde(default)]
    pub selection_series: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChartConfigJsonContractV1 {
    schema_version: u32,
    config: MultiLineChartConfig,
}

impl MultiLineChartConfig {
    #[must_use]
    pub fn new(title: impl Into<String>, step_size: f64) -> Self {
        Self {
            title: title.into(),
            legend: None,
            style: ChartStyle::default(),
            form: default_form(),
            rate_value: None,
            drop_shadow: default_drop_shadow(),
            value_specifier: default_value_specifier(),
            step_size,
            selection_series: 0,
        }
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_form(mut self, form: Size) -> Self {
        self.form = form;
        self
    }

    #[must_use]
    pub fn with_rate_value(mut self, rate_value: i32) -> Self {
        self.rate_value = Some(rate_value);
        self
    }

    #[must_use]
    pub fn with_drop_shadow(mut self, drop_shadow: bool) -> Self {
        self.drop_shadow = drop_shadow;
        self
    }

    #[must_use]
    pub fn with_value_specifier(mut self, value_specifier: impl Into<String>) -> Self {
        self.value_specifier = value_specifier.into();
        self
    }

    #[must_use]
    pub fn with_selection_series(mut self, index: usize) -> Self {
        self.selection_series = index;
        self
    }

    /// Checks form size, step size and value pattern.
    pub fn validate(&self) -> ChartResult<()> {
        self.form.validate()?;
        validate_step_size(self.step_size)?;
        self.value_format()?;
        Ok(())
    }

    pub fn value_format(&self) -> ChartResult<ValueFormat> {
        ValueFormat::parse(&self.value_specifier)
    }

    /// Serializes using the versioned JSON contract.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract, then
    /// validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<ChartConfigJsonContractV1>(input) {
            Ok(payload) => {
                if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported chart config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
            Err(contract_err) => serde_json::from_str::<Self>(input).map_err(|e| {
                warn!(
                    contract_error = %contract_err,
                    "chart config json is neither a v1 contract nor a bare config"
                );
                ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
            })?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_form() -> Size {
    ChartForm::MEDIUM
}

fn default_drop_shadow() -> bool {
    true
}

fn default_value_specifier() -> String {
    "%.1f".to_owned()
}

fn default_step_size() -> f64 {
    DEFAULT_STEP_SIZE
}
