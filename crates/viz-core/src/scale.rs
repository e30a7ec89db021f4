// File: crates/viz-core/src/scale.rs
// Summary: Linear value-to-pixel scale; domains may run backwards (screen Y grows downward).

use crate::ticks::{nice_ticks, tick_step};

/// Data value on either axis.
pub type Value = f64;

/// Maps `domain` linearly onto the pixel `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    fn span(&self) -> f64 {
        let s = self.domain.1 - self.domain.0;
        if s.abs() < 1e-12 { 1e-12_f64.copysign(s) } else { s }
    }

    #[inline]
    pub fn map(&self, v: Value) -> f32 {
        let t = (v - self.domain.0) / self.span();
        self.range.0 + (t as f32) * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn invert(&self, px: f32) -> Value {
        let extent = self.range.1 - self.range.0;
        let t = if extent.abs() < f32::EPSILON { 0.0 } else { ((px - self.range.0) / extent) as f64 };
        self.domain.0 + t * self.span()
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        let (lo, hi) = self.bounds();
        nice_ticks(lo, hi, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = self.bounds();
        tick_step(lo, hi, count)
    }

    /// Domain as (min, max).
    pub fn bounds(&self) -> (Value, Value) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Pixel extent as (min, max).
    pub fn pixel_bounds(&self) -> (f32, f32) {
        let (a, b) = self.range;
        if a <= b { (a, b) } else { (b, a) }
    }
}
