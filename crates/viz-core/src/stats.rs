// File: crates/viz-core/src/stats.rs
// Summary: Descriptive statistics (mean, variance, least-squares fit) and axis limit helpers.

use crate::error::StatsError;

/// Ordinary least-squares fit `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Data extents for a pair of columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

pub fn arithmetic_mean(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

pub fn mean_of_products(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    same_length(a, b)?;
    if a.is_empty() {
        return Err(StatsError::Empty);
    }
    let total: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    Ok(total / a.len() as f64)
}

/// Population variance, E[x^2] - E[x]^2, evaluated about the mean.
pub fn variance(data: &[f64]) -> Result<f64, StatsError> {
    let mean = arithmetic_mean(data)?;
    if is_constant(data) {
        return Ok(0.0);
    }
    let deviations: Vec<f64> = data.iter().map(|v| (v - mean) * (v - mean)).collect();
    arithmetic_mean(&deviations)
}

/// Least-squares fit on centred data; an x column with a single distinct value has no slope.
pub fn linear_regression(independent: &[f64], dependent: &[f64]) -> Result<Regression, StatsError> {
    same_length(independent, dependent)?;
    let x_mean = arithmetic_mean(independent)?;
    let y_mean = arithmetic_mean(dependent)?;
    if is_constant(independent) {
        return Err(StatsError::DegenerateX);
    }
    let (sxy, sxx) = independent.iter().zip(dependent).fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
        let dx = x - x_mean;
        (sxy + dx * (y - y_mean), sxx + dx * dx)
    });
    // spreads below ~1e-154 square to zero
    if !(sxx > 0.0) {
        return Err(StatsError::DegenerateX);
    }
    let slope = sxy / sxx;
    Ok(Regression { slope, intercept: y_mean - slope * x_mean })
}

pub fn extent(data: &[f64]) -> Result<(f64, f64), StatsError> {
    if data.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

pub fn find_limits(xs: &[f64], ys: &[f64]) -> Result<Limits, StatsError> {
    let (x_min, x_max) = extent(xs)?;
    let (y_min, y_max) = extent(ys)?;
    Ok(Limits { x_min, x_max, y_min, y_max })
}

pub fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round up to the next multiple of 0.05, kept at two decimals.
pub fn ceil_to_twentieth(v: f64) -> f64 {
    ((v * 20.0).ceil() / 20.0 * 100.0).round() / 100.0
}

fn is_constant(data: &[f64]) -> bool {
    data.first().is_some_and(|first| data.iter().all(|v| v == first))
}

fn same_length(a: &[f64], b: &[f64]) -> Result<(), StatsError> {
    if a.len() != b.len() {
        return Err(StatsError::LengthMismatch { left: a.len(), right: b.len() });
    }
    Ok(())
}
