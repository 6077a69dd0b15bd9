pub mod domain;
pub mod line_series;
pub mod scaler;
pub mod series;
pub mod types;

pub use domain::{ValueDomain, compute_domain};
pub use line_series::{LINE_TOP_PADDING, LineGeometry, LineSegment, SampleHit};
pub use scaler::{DEFAULT_STEP_SIZE, MultiSeriesScaler, compute_display_width};
pub use series::{ChartDataset, Series};
pub use types::{Point, Rect, Size};
