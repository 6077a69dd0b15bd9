use multiline_chart::ChartError;
use multiline_chart::api::{MultiLineChart, MultiLineChartConfig};
use multiline_chart::core::{ChartDataset, Size};
use multiline_chart::render::NullRenderer;
use multiline_chart::style::{ChartForm, ChartStyle};

#[test]
fn new_config_uses_documented_defaults() {
    let config = MultiLineChartConfig::new("Line chart", 12.0);
    assert_eq!(config.title, "Line chart");
    assert_eq!(config.legend, None);
    assert_eq!(config.form, ChartForm::MEDIUM);
    assert_eq!(config.style, ChartStyle::line_chart_style_one());
    assert_eq!(config.rate_value, None);
    assert!(config.drop_shadow);
    assert_eq!(config.value_specifier, "%.1f");
    assert_eq!(config.step_size, 12.0);
    assert_eq!(config.selection_series, 0);
    config.validate().expect("defaults are valid");
}

#[test]
fn zero_step_size_is_rejected_at_construction() {
    let config = MultiLineChartConfig::new("Broken", 0.0);
    let result = MultiLineChart::new(NullRenderer::default(), config, ChartDataset::default());
    assert!(matches!(result, Err(ChartError::InvalidStepSize(step)) if step == 0.0));
}

#[test]
fn invalid_form_is_rejected() {
    let config = MultiLineChartConfig::new("Broken", 12.0).with_form(Size::new(0.0, 240.0));
    assert!(matches!(
        config.validate(),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn invalid_value_specifier_is_rejected() {
    let config = MultiLineChartConfig::new("Broken", 12.0).with_value_specifier("%s");
    assert!(matches!(config.validate(), Err(ChartError::InvalidFormat(_))));
}

#[test]
fn json_contract_round_trip_keeps_settings() {
    let config = MultiLineChartConfig::new("Revenue", 8.0)
        .with_legend("Quarterly")
        .with_form(ChartForm::LARGE)
        .with_drop_shadow(false)
        .with_rate_value(14)
        .with_value_specifier("$%.2f");

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = MultiLineChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.title, "Revenue");
    assert_eq!(parsed.legend.as_deref(), Some("Quarterly"));
    assert_eq!(parsed.form, ChartForm::LARGE);
    assert!(!parsed.drop_shadow);
    assert_eq!(parsed.rate_value, Some(14));
    assert_eq!(parsed.value_specifier, "$%.2f");
    assert_eq!(parsed.step_size, 8.0);
}

#[test]
fn bare_json_object_fills_defaults() {
    let parsed = MultiLineChartConfig::from_json_str(r#"{"title":"Revenue","step_size":6.0}"#)
        .expect("bare config");
    assert_eq!(parsed.title, "Revenue");
    assert_eq!(parsed.step_size, 6.0);
    assert_eq!(parsed.form, ChartForm::MEDIUM);
    assert!(parsed.drop_shadow);
    assert_eq!(parsed.value_specifier, "%.1f");
    assert_eq!(parsed.style, ChartStyle::default());
}

#[test]
fn json_with_invalid_step_size_fails_validation() {
    let result = MultiLineChartConfig::from_json_str(r#"{"step_size":0.0}"#);
    assert!(matches!(result, Err(ChartError::InvalidStepSize(_))));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let result =
        MultiLineChartConfig::from_json_str(r#"{"schema_version":2,"config":{"step_size":12.0}}"#);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let result = MultiLineChartConfig::from_json_str("{not json");
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}
