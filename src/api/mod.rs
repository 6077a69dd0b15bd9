mod chart;
mod chart_config;
mod render_frame_builder;
mod value_format;

pub use chart::{MultiLineChart, PLOT_EXTRA_HEIGHT};
pub use chart_config::{CHART_CONFIG_JSON_SCHEMA_V1, MultiLineChartConfig};
pub use value_format::ValueFormat;
