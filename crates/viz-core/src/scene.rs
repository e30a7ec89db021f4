// File: crates/viz-core/src/scene.rs
// Summary: Renderer-agnostic drawing primitives collected into a fixed-size scene.

use crate::theme::Rgba;

/// Text size as authored; points convert at 96 dpi.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Pt(f32),
    Px(f32),
}

impl FontSize {
    pub fn px(self) -> f32 {
        match self {
            FontSize::Pt(v) => v * 4.0 / 3.0,
            FontSize::Px(v) => v,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: FontSize,
    pub bold: bool,
    pub family: Option<String>,
}

impl TextStyle {
    pub fn pt(size: f32) -> Self {
        Self { size: FontSize::Pt(size), bold: false, family: None }
    }

    pub fn px(size: f32) -> Self {
        Self { size: FontSize::Px(size), bold: false, family: None }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    /// (on, off) dash lengths.
    pub dash: Option<(f32, f32)>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Rgba, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some((on, off)) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f32, y: f32, width: f32, height: f32, fill: Option<Rgba>, stroke: Option<Stroke> },
    Circle { cx: f32, cy: f32, r: f32, fill: Rgba },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, stroke: Stroke },
    /// Open polyline.
    Path { points: Vec<(f32, f32)>, stroke: Stroke },
    /// `rotate` is in degrees about the anchor point (x, y).
    Text { x: f32, y: f32, content: String, style: TextStyle, anchor: Anchor, rotate: f32, fill: Rgba },
}

/// Hover details attached to a mark.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl Tooltip {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), rows: Vec::new() }
    }

    pub fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((label.into(), value.into()));
        self
    }

    /// Plain multi-line form: title, then one `label: value` per line.
    pub fn to_text(&self) -> String {
        let mut out = self.title.clone();
        for (label, value) in &self.rows {
            out.push('\n');
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub class: Option<&'static str>,
    pub tooltip: Option<Tooltip>,
}

impl Element {
    pub fn new(shape: Shape) -> Self {
        Self { shape, class: None, tooltip: None }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

impl From<Shape> for Element {
    fn from(shape: Shape) -> Self { Element::new(shape) }
}

pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self { width, height, background, elements: Vec::new() }
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn text(&mut self, x: f32, y: f32, content: impl Into<String>, style: TextStyle, fill: Rgba) {
        self.add(Shape::Text { x, y, content: content.into(), style, anchor: Anchor::Start, rotate: 0.0, fill });
    }

    /// Text turned -90 degrees about (x, y), reading bottom to top.
    pub fn vertical_text(&mut self, x: f32, y: f32, content: impl Into<String>, style: TextStyle, fill: Rgba) {
        self.add(Shape::Text { x, y, content: content.into(), style, anchor: Anchor::Start, rotate: -90.0, fill });
    }

    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| e.class == Some(class))
    }

    /// Every text string in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match &e.shape {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}
