// File: crates/viz-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, statistics and chart rendering.

pub mod axis;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod render;
pub mod scale;
pub mod scene;
pub mod stats;
pub mod theme;
pub mod ticks;

pub use axis::{Axis, Orient, TickFormat};
pub use charts::{BarChart, DetailChart, ScatterChart, Season};
pub use config::{BarsConfig, OutputFormat, ScatterConfig, VizConfig};
pub use dataset::{Record, Table};
pub use error::{ChartError, ConfigError, DataError, StatsError};
pub use render::RasterOptions;
pub use scale::LinearScale;
pub use scene::{Element, Scene, Shape, Tooltip};
pub use stats::{arithmetic_mean, linear_regression, mean_of_products, variance, Limits, Regression};
pub use theme::{Rgba, Theme};
