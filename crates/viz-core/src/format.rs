// File: crates/viz-core/src/format.rs
// Summary: Number formatting for tick labels and tooltips.

/// Insert thousands separators into the integer part of a formatted number.
pub fn with_commas(text: &str) -> String {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match body.find('.') {
        Some(i) => body.split_at(i),
        None => (body, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return text.to_string();
    }
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac_part}")
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() { return 0; }
    (-step.log10().floor()).max(0.0) as usize
}

/// Grouped, fixed-precision tick label ("1,960", "0.2", "25").
pub fn tick_label(value: f64, step: f64) -> String {
    let precision = precision_for_step(step);
    let mut s = format!("{:.*}", precision, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s.remove(0);
    }
    with_commas(&s)
}

/// Shortest plain rendering: integers without a trailing ".0".
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
