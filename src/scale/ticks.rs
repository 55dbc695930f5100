/// "Nice" tick values (1, 2 or 5 times a power of ten) inside `[min, max]`.
pub(crate) fn nice_ticks_within(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return vec![min, max];
    }

    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .filter(|t| *t >= min - eps && *t <= max + eps)
        // Avoid printing `-0` and accumulated drift such as 0.30000000000000004.
        .map(|t| if t.abs() < eps { 0.0 } else { round_to_step(t, step) })
        .collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

fn round_to_step(t: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let f = 10_f64.powi(decimals);
    (t * f).round() / f
}

/// Powers of ten inside `[min, max]`; falls back to the endpoints when no power fits.
pub(crate) fn log_ticks(mut min: f64, mut max: f64) -> Vec<f64> {
    if !(min > 0.0 && max > 0.0 && min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let first = (min.log10() - 1e-9).ceil() as i32;
    let last = (max.log10() + 1e-9).floor() as i32;
    if first > last {
        return if min == max { vec![min] } else { vec![min, max] };
    }
    (first..=last).map(|k| 10_f64.powi(k)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scale/ticks.rs"]
mod tests;
