// File: crates/viz-core/src/axis.rs
// Summary: Axis model (orientation, scale, ticks, labels) and its scene primitives.

use crate::format::{plain, tick_label};
use crate::scale::LinearScale;
use crate::scene::{Anchor, Element, Scene, Shape, Stroke, TextStyle};
use crate::theme::Theme;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Step-derived precision with thousands separators.
    Auto,
    /// The value as written, no grouping.
    Plain,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub scale: LinearScale,
    /// Y of a bottom axis, X of a left axis.
    pub offset: f32,
    pub tick_values: Option<Vec<f64>>,
    pub tick_count: usize,
    pub format: TickFormat,
    pub label_style: TextStyle,
    pub rotate_labels: bool,
}

impl Axis {
    pub fn bottom(scale: LinearScale, y: f32) -> Self {
        Self::new(Orient::Bottom, scale, y)
    }

    pub fn left(scale: LinearScale, x: f32) -> Self {
        Self::new(Orient::Left, scale, x)
    }

    fn new(orient: Orient, scale: LinearScale, offset: f32) -> Self {
        Self {
            orient,
            scale,
            offset,
            tick_values: None,
            tick_count: 10,
            format: TickFormat::Auto,
            label_style: TextStyle::px(10.0).family("sans-serif"),
            rotate_labels: false,
        }
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn tick_values(mut self, values: Vec<f64>) -> Self {
        self.tick_values = Some(values);
        self
    }

    pub fn format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn rotate_labels(mut self) -> Self {
        self.rotate_labels = true;
        self
    }

    /// Visible ticks as (value, pixel, label). Explicit values outside the range are dropped.
    pub fn tick_marks(&self) -> Vec<(f64, f32, String)> {
        let (values, step) = match &self.tick_values {
            Some(v) => {
                let step = if v.len() >= 2 { (v[1] - v[0]).abs() } else { 1.0 };
                (v.clone(), step)
            }
            None => (self.scale.ticks(self.tick_count), self.scale.tick_step(self.tick_count)),
        };
        let (lo, hi) = self.scale.pixel_bounds();
        values
            .into_iter()
            .filter_map(|v| {
                let px = self.scale.map(v);
                if px < lo - 0.5 || px > hi + 0.5 {
                    return None;
                }
                let label = match self.format {
                    TickFormat::Auto => tick_label(v, step),
                    TickFormat::Plain => plain(v),
                };
                Some((v, px, label))
            })
            .collect()
    }

    pub fn render(&self, scene: &mut Scene, theme: &Theme) {
        let stroke = Stroke::solid(theme.axis, 1.0);
        let (r0, r1) = self.scale.range;
        let o = self.offset;
        let size = self.label_style.size.px();

        let domain = match self.orient {
            Orient::Bottom => vec![(r0, o + TICK_SIZE), (r0, o), (r1, o), (r1, o + TICK_SIZE)],
            Orient::Left => vec![(o - TICK_SIZE, r0), (o, r0), (o, r1), (o - TICK_SIZE, r1)],
        };
        scene.add(Element::new(Shape::Path { points: domain, stroke }).class("domain"));

        for (_, px, label) in self.tick_marks() {
            let (line, text) = match self.orient {
                Orient::Bottom => {
                    let line = Shape::Line { x1: px, y1: o, x2: px, y2: o + TICK_SIZE, stroke };
                    let text = if self.rotate_labels {
                        Shape::Text {
                            x: px + size * 0.35,
                            y: o + TICK_SIZE + TICK_PADDING,
                            content: label,
                            style: self.label_style.clone(),
                            anchor: Anchor::End,
                            rotate: -90.0,
                            fill: theme.ink,
                        }
                    } else {
                        Shape::Text {
                            x: px,
                            y: o + TICK_SIZE + TICK_PADDING + size * 0.71,
                            content: label,
                            style: self.label_style.clone(),
                            anchor: Anchor::Middle,
                            rotate: 0.0,
                            fill: theme.ink,
                        }
                    };
                    (line, text)
                }
                Orient::Left => {
                    let line = Shape::Line { x1: o - TICK_SIZE, y1: px, x2: o, y2: px, stroke };
                    let text = Shape::Text {
                        x: o - TICK_SIZE - TICK_PADDING,
                        y: px + size * 0.32,
                        content: label,
                        style: self.label_style.clone(),
                        anchor: Anchor::End,
                        rotate: 0.0,
                        fill: theme.ink,
                    };
                    (line, text)
                }
            };
            scene.add(Element::new(line).class("tick"));
            scene.add(Element::new(text).class("tick-label"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_ticks_outside_range_are_dropped() {
        let y = LinearScale::new((27.0, 3.0), (50.0, 450.0));
        let axis = Axis::left(y, 50.0).tick_values(crate::ticks::range(0.0, 30.0, 5.0));
        let labels: Vec<String> = axis.tick_marks().into_iter().map(|t| t.2).collect();
        assert_eq!(labels, vec!["5", "10", "15", "20", "25"]);
    }

    #[test]
    fn render_emits_domain_ticks_and_labels() {
        let x = LinearScale::new((0.0, 10.0), (50.0, 450.0));
        let mut scene = Scene::new(500, 500, Theme::light().background);
        Axis::bottom(x, 450.0).ticks(2).render(&mut scene, &Theme::light());
        assert_eq!(scene.with_class("domain").count(), 1);
        assert_eq!(scene.with_class("tick").count(), 3);
        assert_eq!(scene.texts(), vec!["0", "5", "10"]);
    }
}
