use smallvec::SmallVec;

/// Default number of ticks requested for a linear axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

pub type TickValues = SmallVec<[f64; 16]>;

/// Step between "nice" ticks covering `[start, stop]` with roughly `count`
/// ticks. Steps are 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let span = stop - start;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return None;
    }

    let target = count as f64;
    let exponent = (span / target).log10().floor();
    let mut step = if exponent < 0.0 {
        1.0 / 10f64.powf(-exponent)
    } else {
        10f64.powf(exponent)
    };
    let err = target / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Number of fraction digits needed to print ticks spaced by `step`.
#[must_use]
pub fn tick_precision(step: f64) -> usize {
    let digits = -(step.log10() + 0.01).floor();
    if digits > 0.0 { digits as usize } else { 0 }
}

/// Tick values inside `[start, stop]` and the step that produced them.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> (TickValues, f64) {
    let Some(step) = nice_tick_step(start, stop, count) else {
        return (TickValues::new(), 0.0);
    };

    let first = (start / step).ceil();
    let last = (stop / step + 1e-9).floor();
    let precision = tick_precision(step);
    let scale = 10f64.powi(precision as i32);

    let mut ticks = TickValues::new();
    let mut index = first;
    while index <= last {
        // Snap to the printed precision so 0.1 * 3 is exactly 0.3.
        ticks.push((index * step * scale).round() / scale);
        index += 1.0;
    }
    (ticks, step)
}

/// Formats a tick with thousands separators and `precision` fraction digits.
#[must_use]
pub fn format_tick(value: f64, precision: usize) -> String {
    let plain = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if value < 0.0 && plain.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
