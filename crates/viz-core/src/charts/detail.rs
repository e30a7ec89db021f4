// File: crates/viz-core/src/charts/detail.rs
// Summary: Small linked chart of fertility rate vs life expectancy for the hovered country.

use tracing::debug;

use super::scatter::{FERTILITY, LIFE_EXPECTANCY, LOCATION, TIME};
use crate::axis::Axis;
use crate::dataset::Table;
use crate::error::{ChartError, DataError};
use crate::scale::LinearScale;
use crate::scene::{Element, Scene, Shape, TextStyle, Tooltip};
use crate::stats::{find_limits, Limits};
use crate::theme::Theme;

const SIZE: u32 = 300;
const X_RANGE: (f32, f32) = (50.0, 200.0);
const Y_RANGE: (f32, f32) = (30.0, 200.0);

pub struct DetailChart<'a> {
    table: &'a Table,
    limits: Limits,
    theme: Theme,
}

impl<'a> DetailChart<'a> {
    pub fn new(table: &'a Table, theme: Theme) -> Result<Self, ChartError> {
        table.require(&[FERTILITY, LIFE_EXPECTANCY, LOCATION])?;
        if table.is_empty() {
            return Err(DataError::Empty.into());
        }
        let limits = find_limits(&table.column(FERTILITY)?, &table.column(LIFE_EXPECTANCY)?)?;
        Ok(Self { table, limits, theme })
    }

    pub fn limits(&self) -> Limits { self.limits }

    pub fn build(&self, country: &str) -> Result<Scene, ChartError> {
        let rows = self.table.filter_eq(LOCATION, country);
        if rows.is_empty() {
            return Err(ChartError::UnknownCountry(country.to_string()));
        }
        let theme = &self.theme;
        let xs = LinearScale::new((self.limits.x_min - 0.5, self.limits.x_max + 0.5), X_RANGE);
        let ys = LinearScale::new((self.limits.y_max + 5.0, self.limits.y_min - 5.0), Y_RANGE);
        let mut scene = Scene::new(SIZE, SIZE, theme.background);

        Axis::bottom(xs, X_RANGE.1).ticks(4).render(&mut scene, theme);
        Axis::left(ys, X_RANGE.0).render(&mut scene, theme);

        for row in &rows {
            let cx = xs.map(row.number(FERTILITY)?);
            let cy = ys.map(row.number(LIFE_EXPECTANCY)?);
            let mut tip = Tooltip::new(country)
                .row("Fertility rate", row.text(FERTILITY))
                .row("Life expectancy", row.text(LIFE_EXPECTANCY));
            if let Some(t) = row.get(TIME) {
                tip = tip.row("Time", t);
            }
            scene.add(Element::new(Shape::Circle { cx, cy, r: 2.0, fill: theme.point }).class("dot").tooltip(tip));
        }

        scene.text(100.0, 230.0, "Fertility Rate", TextStyle::pt(8.0), theme.ink);
        scene.text(120.0, 30.0, country, TextStyle::pt(13.0), theme.ink);
        scene.vertical_text(15.0, 175.0, "Life Expectancy (years)", TextStyle::pt(8.0), theme.ink);

        debug!(country, points = rows.len(), "built detail chart");
        Ok(scene)
    }
}
