// File: crates/viz-core/src/charts/bars.rs
// Summary: Season viewership bar chart with value labels, legend, tooltips and a dashed average line.

use tracing::debug;

use super::arial_bold;
use crate::axis::{Axis, TickFormat};
use crate::config::BarsConfig;
use crate::dataset::Table;
use crate::error::{ChartError, DataError};
use crate::format::plain;
use crate::scale::LinearScale;
use crate::scene::{Anchor, Element, Scene, Shape, Stroke, TextStyle, Tooltip};
use crate::stats::{arithmetic_mean, ceil_to_twentieth, find_limits, linear_regression, round_to_tenth, Limits, Regression};
use crate::theme::Theme;
use crate::ticks::range;

pub const YEAR: &str = "Year";
pub const AVG_VIEWERS: &str = "Avg. Viewers (mil)";
pub const EPISODES: &str = "Episodes";
pub const DATA: &str = "Data";
pub const MOST_WATCHED: &str = "Most watched episode";
pub const VIEWERS: &str = "Viewers (mil)";

const WIDTH: u32 = 750;
const HEIGHT: u32 = 500;
const BASELINE: f32 = 450.0;

/// One season row. Text fields are kept as written for labels and tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct Season {
    pub year: i64,
    pub avg_viewers: f64,
    pub avg_text: String,
    pub episodes: String,
    pub data: String,
    pub most_watched: String,
    pub viewers: String,
}

impl Season {
    /// Any `Data` value other than "Actual" counts as a prediction.
    pub fn is_actual(&self) -> bool {
        self.data == "Actual"
    }

    fn tooltip(&self) -> Tooltip {
        Tooltip::new(format!("Season #{}", self.year))
            .row("Year", self.year.to_string())
            .row("Episodes", self.episodes.as_str())
            .row("Average Viewers (mil)", self.avg_text.as_str())
            .row("Most watched episode", self.most_watched.as_str())
            .row("Viewers (mil)", self.viewers.as_str())
    }
}

pub struct BarChart {
    seasons: Vec<Season>,
    limits: Limits,
    average: f64,
    regression: Option<Regression>,
    theme: Theme,
    config: BarsConfig,
}

impl BarChart {
    pub fn new(table: &Table, theme: Theme, config: BarsConfig) -> Result<Self, ChartError> {
        table.require(&[YEAR, AVG_VIEWERS])?;
        if table.is_empty() {
            return Err(DataError::Empty.into());
        }
        let seasons = table
            .rows
            .iter()
            .map(|r| {
                Ok(Season {
                    year: r.integer(YEAR)?,
                    avg_viewers: r.number(AVG_VIEWERS)?,
                    avg_text: r.text(AVG_VIEWERS).to_string(),
                    episodes: r.text(EPISODES).to_string(),
                    data: r.text(DATA).to_string(),
                    most_watched: r.text(MOST_WATCHED).to_string(),
                    viewers: r.text(VIEWERS).to_string(),
                })
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        let years: Vec<f64> = seasons.iter().map(|s| s.year as f64).collect();
        let viewers: Vec<f64> = seasons.iter().map(|s| s.avg_viewers).collect();

        let raw = find_limits(&years, &viewers)?;
        let limits = Limits {
            x_min: round_to_tenth(raw.x_min),
            x_max: round_to_tenth(raw.x_max),
            y_min: ceil_to_twentieth(raw.y_min),
            y_max: ceil_to_twentieth(raw.y_max),
        };
        let average = round_to_tenth(arithmetic_mean(&viewers)?);

        let regression = match linear_regression(&years, &viewers) {
            Ok(fit) => {
                debug!(slope = fit.slope, intercept = fit.intercept, "viewers over seasons fit");
                Some(fit)
            }
            Err(err) => {
                debug!(%err, "no regression for this dataset");
                None
            }
        };
        debug!(?limits, average, seasons = seasons.len(), "bar chart limits");
        Ok(Self { seasons, limits, average, regression, theme, config })
    }

    pub fn seasons(&self) -> &[Season] { &self.seasons }

    pub fn limits(&self) -> Limits { self.limits }

    /// Mean of the season averages, rounded to one decimal.
    pub fn average(&self) -> f64 { self.average }

    pub fn regression(&self) -> Option<Regression> { self.regression }

    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new((self.limits.x_min - 0.3, self.limits.x_max + 0.8), (50.0, 700.0))
    }

    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new((self.limits.y_max, self.limits.y_min - 5.0), (50.0, BASELINE))
    }

    pub fn build(&self) -> Scene {
        let theme = &self.theme;
        let (xs, ys) = (self.x_scale(), self.y_scale());
        let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);

        let years = self.year_ticks();
        Axis::bottom(xs, BASELINE)
            .tick_values(years)
            .format(TickFormat::Plain)
            .label_style(arial_bold(TextStyle::px(11.5)))
            .rotate_labels()
            .render(&mut scene, theme);
        Axis::left(ys, 50.0).tick_values(range(0.0, 30.0, 5.0)).render(&mut scene, theme);

        self.draw_bars(&mut scene, xs, ys);
        self.draw_legend(&mut scene);
        self.draw_average(&mut scene, xs, ys);
        if self.config.show_regression {
            self.draw_regression(&mut scene, xs, ys);
        }

        let ink = theme.ink;
        scene.text(240.0, 40.0, "Average Viewership by Season", arial_bold(TextStyle::pt(14.0)), ink);
        scene.text(335.0, 495.0, "Year of Release", arial_bold(TextStyle::pt(10.0)), ink);
        scene.vertical_text(15.0, 375.0, "Average Number of Viewers (in millions)", arial_bold(TextStyle::pt(10.0)), ink);
        scene
    }

    /// Configured years limited to the plotted domain, so a wide config range stays cheap.
    pub fn year_ticks(&self) -> Vec<f64> {
        let (lo, hi) = self.x_scale().bounds();
        let start = f64::from(self.config.tick_start).max(lo.ceil());
        let end = f64::from(self.config.tick_end).min(hi.floor() + 1.0);
        range(start, end, 1.0)
    }

    fn draw_bars(&self, scene: &mut Scene, xs: LinearScale, ys: LinearScale) {
        let theme = &self.theme;
        for s in &self.seasons {
            let x = xs.map(s.year as f64);
            let y = ys.map(s.avg_viewers);
            let fill = if s.is_actual() { theme.actual } else { theme.predicted };
            scene.add(
                Element::new(Shape::Rect {
                    x,
                    y,
                    width: self.config.bar_width,
                    height: BASELINE - y,
                    fill: Some(fill),
                    stroke: Some(Stroke::solid(theme.bar_stroke, 1.0)),
                })
                .class("bar")
                .tooltip(s.tooltip()),
            );
        }
        // labels after all bars so a neighbour never covers them
        for s in &self.seasons {
            let x = xs.map(s.year as f64);
            let y = ys.map(s.avg_viewers);
            scene.add(
                Element::new(Shape::Text {
                    x,
                    y: y - 5.0,
                    content: s.avg_text.clone(),
                    style: arial_bold(TextStyle::px(11.5)),
                    anchor: Anchor::Start,
                    rotate: 0.0,
                    fill: theme.ink,
                })
                .class("value-label"),
            );
        }
    }

    fn draw_legend(&self, scene: &mut Scene) {
        let theme = &self.theme;
        let entries = [(55.0, 65.0, theme.actual, "Actual"), (75.0, 85.0, theme.predicted, "Predicted")];
        for (swatch_y, text_y, color, label) in entries {
            scene.add(
                Element::new(Shape::Rect { x: 615.0, y: swatch_y, width: 10.0, height: 10.0, fill: Some(color), stroke: None })
                    .class("legend"),
            );
            scene.text(630.0, text_y, label, arial_bold(TextStyle::pt(10.0)), theme.ink);
        }
        scene.text(615.0, 40.0, "Viewership Data", arial_bold(TextStyle::pt(11.0)), theme.ink);
    }

    fn draw_average(&self, scene: &mut Scene, xs: LinearScale, ys: LinearScale) {
        let theme = &self.theme;
        let x1 = xs.map(self.limits.x_min) - 8.0;
        let x2 = xs.map(self.limits.x_max) + self.config.bar_width;
        let y = ys.map(self.average);
        scene.add(
            Element::new(Shape::Line { x1, y1: y, x2, y2: y, stroke: Stroke::dashed(theme.average_line, 2.0, 8.0, 8.0) })
                .class("average")
                .tooltip(Tooltip::new("Average viewers (mil)").row("Mean", plain(self.average))),
        );
        let badge_x = x2 - 28.0;
        scene.add(
            Element::new(Shape::Rect { x: badge_x, y: y - 7.0, width: 27.0, height: 15.0, fill: Some(theme.badge), stroke: None })
                .class("average-badge"),
        );
        scene.text(badge_x, y + 5.0, format!("{:.1}", self.average), arial_bold(TextStyle::pt(10.0)), theme.ink);
    }

    fn draw_regression(&self, scene: &mut Scene, xs: LinearScale, ys: LinearScale) {
        let Some(fit) = self.regression else { return };
        let (a, b) = (self.limits.x_min, self.limits.x_max);
        scene.add(
            Element::new(Shape::Line {
                x1: xs.map(a),
                y1: ys.map(fit.predict(a)),
                x2: xs.map(b) + self.config.bar_width,
                y2: ys.map(fit.predict(b)),
                stroke: Stroke::solid(self.theme.regression, 1.5),
            })
            .class("regression")
            .tooltip(
                Tooltip::new("Least-squares fit")
                    .row("Slope", format!("{:.4}", fit.slope))
                    .row("Intercept", format!("{:.2}", fit.intercept)),
            ),
        );
    }
}
