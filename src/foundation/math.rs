use rand::{Rng, RngExt};

use crate::foundation::error::{MarqueeError, MarqueeResult};

/// Progress of `value` through the range `start..=end`, clamped to `[0, 1]`.
///
/// Values at or past `end` report `1.0`, values at or before `start` report
/// `0.0`. When `start == end` the range is degenerate: a value at or past the
/// shared endpoint is already at the target and reports `1.0`, anything below
/// reports `0.0`. Non-finite arguments and `start > end` are rejected.
pub fn percent_between(value: f64, start: f64, end: f64) -> MarqueeResult<f64> {
    if !value.is_finite() || !start.is_finite() || !end.is_finite() {
        return Err(MarqueeError::validation(
            "percent_between arguments must be finite",
        ));
    }
    if start > end {
        return Err(MarqueeError::validation(
            "percent_between start must be <= end",
        ));
    }

    if value >= end {
        return Ok(1.0);
    }
    if value <= start {
        return Ok(0.0);
    }
    Ok((value - start) / (end - start))
}

/// Linear interpolation from `start` to `end` at `percent`.
///
/// Not clamped: percents outside `[0, 1]` extrapolate past the endpoints.
/// Inverse of [`percent_between`] over the in-range interval.
pub fn value_between(percent: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * percent
}

/// Uniform random value in `[min, max)` drawn from `rng`.
///
/// `min == max` yields `min`. Non-finite bounds and `min > max` are rejected.
pub fn random_between(rng: &mut impl Rng, min: f64, max: f64) -> MarqueeResult<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(MarqueeError::validation(
            "random_between bounds must be finite",
        ));
    }
    if min > max {
        return Err(MarqueeError::validation(
            "random_between min must be <= max",
        ));
    }
    if min == max {
        return Ok(min);
    }

    Ok(rng.random_range(min..max))
}
