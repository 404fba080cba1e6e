//! Small descriptive statistics over `f64` slices.
//!
//! Non-finite inputs are the caller's problem; the loaders never produce them.

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[must_use]
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile `q` in `[0, 1]` with linear interpolation between closest ranks.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(quantile_sorted(&sorted(values), q))
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// First quartile, median, third quartile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted(values);
        Some(Self {
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
        })
    }

    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Tukey fences at 1.5 IQR.
    #[must_use]
    pub fn fences(&self) -> (f64, f64) {
        let reach = 1.5 * self.iqr();
        (self.q1 - reach, self.q3 + reach)
    }
}

/// Values outside the 1.5 IQR fences, in input order.
#[must_use]
pub fn iqr_outliers(values: &[f64]) -> Vec<f64> {
    let Some(quartiles) = Quartiles::of(values) else {
        return Vec::new();
    };
    let (low, high) = quartiles.fences();
    values
        .iter()
        .copied()
        .filter(|value| *value < low || *value > high)
        .collect()
}

/// Least-squares line through `(x, y)` points with Pearson's r.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r: f64,
}

impl LinearFit {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Fit `y = slope * x + intercept`.
///
/// `None` when the slices differ in length, hold fewer than two points, or
/// all `x` are equal. `r` is `0.0` when all `y` are equal.
#[must_use]
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let r = if syy == 0.0 {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };
    Some(LinearFit {
        slope,
        intercept: slope.mul_add(-mean_x, mean_y),
        r,
    })
}

/// One equal-width histogram bin, `[start, end)` except the last, which is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Split the range of `values` into `bins` equal-width bins.
///
/// Returns no bins for empty input or `bins == 0`. When every value is equal
/// the single value gets one bin of width 1 centred on it.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let (Some(low), Some(high)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if low == high {
        return vec![Bin {
            start: low - 0.5,
            end: high + 0.5,
            count: values.len(),
        }];
    }

    let width = (high - low) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|index| Bin {
            start: (index as f64).mul_add(width, low),
            end: ((index + 1) as f64).mul_add(width, low),
            count: 0,
        })
        .collect();
    for value in values {
        let index = (((value - low) / width) as usize).min(bins - 1);
        out[index].count += 1;
    }
    out
}
