// File: crates/viz-core/src/charts/mod.rs
// Summary: Chart builders that turn a loaded table into a renderable scene.

pub mod bars;
pub mod detail;
pub mod scatter;

pub use bars::{BarChart, Season};
pub use detail::DetailChart;
pub use scatter::ScatterChart;

use crate::scene::TextStyle;

/// Bold Arial, the face used for every annotation on the viewership chart.
pub(crate) fn arial_bold(style: TextStyle) -> TextStyle {
    style.bold().family("Arial")
}
