// File: crates/viz-core/src/render/svg.rs
// Summary: Serialises a scene into a standalone SVG document; tooltips become <title> children.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::scene::{Anchor, Element, FontSize, Scene, Shape, Stroke, TextStyle};
use crate::theme::Rgba;

impl Scene {
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"{}/>",
            self.background,
            opacity_attr("fill-opacity", self.background)
        );
        for element in &self.elements {
            write_element(&mut svg, element);
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        super::ensure_parent(path).with_context(|| format!("creating directory for {}", path.display()))?;
        std::fs::write(path, self.to_svg()).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), elements = self.elements.len(), "wrote svg");
        Ok(())
    }
}

fn write_element(svg: &mut String, element: &Element) {
    let class = element.class.map(|c| format!(" class=\"{c}\"")).unwrap_or_default();
    let (open, tag) = match &element.shape {
        Shape::Rect { x, y, width, height, fill, stroke } => {
            let fill = match fill {
                Some(c) => format!(" fill=\"{c}\"{}", opacity_attr("fill-opacity", *c)),
                None => " fill=\"none\"".to_string(),
            };
            let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
            (
                format!(
                    "<rect{class} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{fill}{stroke}",
                    num(*x),
                    num(*y),
                    num(*width),
                    num(height.max(0.0))
                ),
                "rect",
            )
        }
        Shape::Circle { cx, cy, r, fill } => (
            format!(
                "<circle{class} cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"{}",
                num(*cx),
                num(*cy),
                num(*r),
                opacity_attr("fill-opacity", *fill)
            ),
            "circle",
        ),
        Shape::Line { x1, y1, x2, y2, stroke } => (
            format!(
                "<line{class} x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}",
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2),
                stroke_attrs(stroke)
            ),
            "line",
        ),
        Shape::Path { points, stroke } => {
            let mut d = String::new();
            for (i, (x, y)) in points.iter().enumerate() {
                let _ = write!(d, "{}{},{}", if i == 0 { "M" } else { "L" }, num(*x), num(*y));
            }
            (format!("<path{class} d=\"{d}\" fill=\"none\"{}", stroke_attrs(stroke)), "path")
        }
        Shape::Text { x, y, content, style, anchor, rotate, fill } => {
            let anchor = match anchor {
                Anchor::Start => String::new(),
                Anchor::Middle => " text-anchor=\"middle\"".to_string(),
                Anchor::End => " text-anchor=\"end\"".to_string(),
            };
            let transform = if *rotate != 0.0 {
                format!(" transform=\"rotate({} {} {})\"", num(*rotate), num(*x), num(*y))
            } else {
                String::new()
            };
            let _ = write!(
                svg,
                "  <text{class} x=\"{}\" y=\"{}\"{anchor}{transform} style=\"{}\" fill=\"{fill}\">{}",
                num(*x),
                num(*y),
                text_style(style),
                escape(content)
            );
            if let Some(t) = &element.tooltip {
                let _ = write!(svg, "<title>{}</title>", escape(&t.to_text()));
            }
            svg.push_str("</text>\n");
            return;
        }
    };
    match &element.tooltip {
        Some(t) => {
            let _ = writeln!(svg, "  {open}><title>{}</title></{tag}>", escape(&t.to_text()));
        }
        None => {
            let _ = writeln!(svg, "  {open}/>");
        }
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(" stroke=\"{}\" stroke-width=\"{}\"", stroke.color, num(stroke.width));
    s.push_str(&opacity_attr("stroke-opacity", stroke.color));
    if let Some((on, off)) = stroke.dash {
        let _ = write!(s, " stroke-dasharray=\"{},{}\"", num(on), num(off));
    }
    s
}

fn opacity_attr(name: &str, color: Rgba) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(" {name}=\"{}\"", num(color.opacity()))
    }
}

fn text_style(style: &TextStyle) -> String {
    let mut s = match style.size {
        FontSize::Pt(v) => format!("font-size:{}pt", num(v)),
        FontSize::Px(v) => format!("font-size:{}px", num(v)),
    };
    if style.bold {
        s.push_str("; font-weight:bold");
    }
    if let Some(family) = &style.family {
        let _ = write!(s, "; font-family:{}", escape(family));
    }
    s
}

/// Coordinates with at most two decimals and no trailing zeros.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Tooltip;
    use crate::theme::Theme;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(450.0), "450");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(1.23456), "1.23");
    }

    #[test]
    fn tooltip_and_escaping() {
        let mut scene = Scene::new(100, 100, Theme::light().background);
        scene.add(
            Element::new(Shape::Circle { cx: 10.0, cy: 20.0, r: 3.0, fill: Theme::light().point })
                .class("dot")
                .tooltip(Tooltip::new("A&B <1>")),
        );
        let svg = scene.to_svg();
        assert!(svg.contains("<circle class=\"dot\" cx=\"10\" cy=\"20\" r=\"3\" fill=\"#4286f4\"><title>A&amp;B &lt;1&gt;</title></circle>"));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn dashed_line_and_rotated_text() {
        let mut scene = Scene::new(100, 100, Theme::light().background);
        scene.add(Shape::Line { x1: 0.0, y1: 5.0, x2: 50.0, y2: 5.0, stroke: Stroke::dashed(Theme::light().average_line, 2.0, 8.0, 8.0) });
        scene.vertical_text(15.0, 300.0, "Population", TextStyle::pt(10.0), Theme::light().ink);
        let svg = scene.to_svg();
        assert!(svg.contains("stroke=\"#008000\" stroke-width=\"2\" stroke-dasharray=\"8,8\""));
        assert!(svg.contains("transform=\"rotate(-90 15 300)\" style=\"font-size:10pt\""));
    }
}
