// File: crates/viz-core/src/charts/scatter.rs
// Summary: Population-over-time scatter for one selected country, joined by a trend path.

use tracing::debug;

use crate::axis::Axis;
use crate::dataset::{Record, Table};
use crate::error::{ChartError, DataError};
use crate::scale::LinearScale;
use crate::scene::{Element, Scene, Shape, Stroke, TextStyle, Tooltip};
use crate::stats::{find_limits, Limits};
use crate::theme::Theme;

pub const TIME: &str = "time";
pub const POPULATION: &str = "pop_mlns";
pub const LOCATION: &str = "location";
pub const FERTILITY: &str = "fertility_rate";
pub const LIFE_EXPECTANCY: &str = "life_expectancy";

const WIDTH: u32 = 500;
const HEIGHT: u32 = 500;
const PLOT_LO: f32 = 50.0;
const PLOT_HI: f32 = 450.0;

pub struct ScatterChart<'a> {
    table: &'a Table,
    limits: Limits,
    theme: Theme,
}

impl<'a> ScatterChart<'a> {
    /// Axis limits span every country so switching selection keeps the frame fixed.
    pub fn new(table: &'a Table, theme: Theme) -> Result<Self, ChartError> {
        table.require(&[TIME, POPULATION, LOCATION])?;
        if table.is_empty() {
            return Err(DataError::Empty.into());
        }
        let limits = find_limits(&table.column(TIME)?, &table.column(POPULATION)?)?;
        debug!(?limits, rows = table.len(), "scatter limits");
        Ok(Self { table, limits, theme })
    }

    pub fn limits(&self) -> Limits { self.limits }

    /// Selectable countries in first-appearance order.
    pub fn countries(&self) -> Vec<String> {
        self.table.unique(LOCATION)
    }

    /// `preferred` when present in the data, otherwise the first country.
    pub fn default_country(&self, preferred: &str) -> Option<String> {
        let countries = self.countries();
        if countries.iter().any(|c| c == preferred) {
            return Some(preferred.to_string());
        }
        countries.into_iter().next()
    }

    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new((self.limits.x_min - 0.5, self.limits.x_max + 0.5), (PLOT_LO, PLOT_HI))
    }

    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new((self.limits.y_max + 5.0, self.limits.y_min - 5.0), (PLOT_LO, PLOT_HI))
    }

    pub fn build(&self, country: &str) -> Result<Scene, ChartError> {
        let rows = self.table.filter_eq(LOCATION, country);
        if rows.is_empty() {
            return Err(ChartError::UnknownCountry(country.to_string()));
        }
        let theme = &self.theme;
        let (xs, ys) = (self.x_scale(), self.y_scale());
        let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);

        Axis::bottom(xs, PLOT_HI).ticks(4).render(&mut scene, theme);
        Axis::left(ys, PLOT_LO).render(&mut scene, theme);

        let mut points = Vec::with_capacity(rows.len());
        for row in &rows {
            let (cx, cy) = (xs.map(row.number(TIME)?), ys.map(row.number(POPULATION)?));
            points.push((cx, cy));
            scene.add(
                Element::new(Shape::Circle { cx, cy, r: 3.0, fill: theme.point })
                    .class("dot")
                    .tooltip(point_tooltip(row, country)),
            );
        }
        scene.add(
            Element::new(Shape::Path { points, stroke: Stroke::solid(theme.trend_path, 1.5) }).class("trend"),
        );

        scene.text(100.0, 40.0, "Countries by Life Expectancy and Fertility Rate", TextStyle::pt(14.0), theme.ink);
        scene.text(240.0, 490.0, "Time", TextStyle::pt(10.0), theme.ink);
        scene.vertical_text(15.0, 300.0, "Population (in millions)", TextStyle::pt(10.0), theme.ink);

        debug!(country, points = rows.len(), "built scatter");
        Ok(scene)
    }
}

fn point_tooltip(row: &Record, country: &str) -> Tooltip {
    let mut tip = Tooltip::new(country)
        .row("Time", row.text(TIME))
        .row("Population (mln)", row.text(POPULATION));
    for (label, field) in [("Fertility rate", FERTILITY), ("Life expectancy", LIFE_EXPECTANCY)] {
        if let Some(v) = row.get(field) {
            tip = tip.row(label, v);
        }
    }
    tip
}
