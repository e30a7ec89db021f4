// File: crates/viz-core/src/theme.rs
// Summary: Light/Dark theming for chart marks, axes and annotations.

use std::fmt;

/// Straight (non-premultiplied) RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl fmt::Display for Rgba {
    /// SVG paint value; alpha is emitted separately as an opacity attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub ink: Rgba,
    pub axis: Rgba,
    pub point: Rgba,
    pub trend_path: Rgba,
    pub actual: Rgba,
    pub predicted: Rgba,
    pub bar_stroke: Rgba,
    pub average_line: Rgba,
    pub badge: Rgba,
    pub regression: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            ink: Rgba::rgb(0, 0, 0),
            axis: Rgba::rgb(0, 0, 0),
            point: Rgba::rgb(0x42, 0x86, 0xf4),
            trend_path: Rgba::rgb(70, 130, 180), // steelblue
            actual: Rgba::rgb(0x7f, 0x7f, 0xff),
            predicted: Rgba::rgb(0xcd, 0x5c, 0x5c),
            bar_stroke: Rgba::rgb(10, 10, 10),
            average_line: Rgba::rgb(0, 128, 0), // green
            badge: Rgba::rgb(0xe7, 0xe7, 0xe7).with_alpha(153),
            regression: Rgba::rgb(0xff, 0x8c, 0x00),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            ink: Rgba::rgb(235, 235, 245),
            axis: Rgba::rgb(180, 180, 190),
            point: Rgba::rgb(64, 160, 255),
            trend_path: Rgba::rgb(96, 156, 255),
            actual: Rgba::rgb(40, 200, 120),
            predicted: Rgba::rgb(220, 80, 80),
            bar_stroke: Rgba::rgb(150, 150, 160),
            average_line: Rgba::rgb(255, 230, 70),
            badge: Rgba::rgb(40, 40, 45).with_alpha(200),
            regression: Rgba::rgb(255, 140, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_colours_and_lookup() {
        assert_eq!(Theme::light().point.to_string(), "#4286f4");
        assert_eq!(Theme::light().bar_stroke.to_string(), "#0a0a0a");
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
