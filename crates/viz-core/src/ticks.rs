// File: crates/viz-core/src/ticks.rs
// Summary: Tick layout helpers: "nice" 1/2/5 ticks and explicit ranges.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Half-open arithmetic progression `[start, stop)`.
pub fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step == 0.0 || !step.is_finite() { return Vec::new(); }
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Increment between nice ticks for roughly `count` intervals over `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let (power, factor) = spec(lo, hi, count);
    10f64.powi(power) * factor
}

/// Nice round tick values in `[start, stop]`; the order follows the arguments.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (power, factor) = spec(lo, hi, count);

    let mut out = Vec::new();
    if power < 0 {
        // divide by the inverse so values like 0.3 come out exact
        let inv = 10f64.powi(-power) / factor;
        let mut i1 = (lo * inv).round();
        let mut i2 = (hi * inv).round();
        if i1 / inv < lo { i1 += 1.0; }
        if i2 / inv > hi { i2 -= 1.0; }
        let mut i = i1;
        while i <= i2 {
            out.push(i / inv);
            i += 1.0;
        }
    } else {
        let inc = 10f64.powi(power) * factor;
        let mut i1 = (lo / inc).round();
        let mut i2 = (hi / inc).round();
        if i1 * inc < lo { i1 += 1.0; }
        if i2 * inc > hi { i2 -= 1.0; }
        let mut i = i1;
        while i <= i2 {
            out.push(i * inc);
            i += 1.0;
        }
    }
    if reverse { out.reverse(); }
    out
}

fn spec(lo: f64, hi: f64, count: usize) -> (i32, f64) {
    let step = ((hi - lo) / count.max(1) as f64).max(f64::MIN_POSITIVE);
    let power = step.log10().floor() as i32;
    let error = step / 10f64.powi(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    (power, factor)
}
