//! First-order statistics shared by the trend estimator, the correlation row
//! and the region time-series trend line.

use serde::{Deserialize, Serialize};

/// Degree-1 least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares over paired samples.
///
/// Returns slope 0 and intercept mean(y) when x has no variance beyond
/// rounding noise or fewer than two pairs are given. Extra elements in the longer slice are ignored.
pub fn linear_fit(x: &[f64], y: &[f64]) -> LinearFit {
    let len = x.len().min(y.len());
    if len == 0 {
        return LinearFit { slope: 0.0, intercept: 0.0 };
    }
    let (x, y) = (&x[..len], &y[..len]);
    let n = len as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    // Centered about the means; x may be calendar years.
    let sxx: f64 = x.iter().map(|v| (v - mx).powi(2)).sum();
    let sxy: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    if len < 2 || negligible(sxx, x) {
        return LinearFit { slope: 0.0, intercept: my };
    }
    let slope = sxy / sxx;
    LinearFit { slope, intercept: my - slope * mx }
}

/// Pearson correlation coefficient, clamped to [-1, 1]. Zero when either side
/// has zero variance or the input is empty.
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    let len = x.len().min(y.len());
    if len == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..len], &y[..len]);
    let n = len as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let num: f64 = x.iter().zip(y).map(|(&a, &b)| (a - mx) * (b - my)).sum();
    let sxx: f64 = x.iter().map(|&a| (a - mx).powi(2)).sum();
    let syy: f64 = y.iter().map(|&b| (b - my).powi(2)).sum();
    if negligible(sxx, x) || negligible(syy, y) {
        return 0.0;
    }
    (num / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// A centered sum of squares at rounding-noise level relative to the raw
/// magnitude of `values`.
fn negligible(centered_ss: f64, values: &[f64]) -> bool {
    let raw_ss: f64 = values.iter().map(|v| v * v).sum();
    centered_ss <= f64::EPSILON * raw_ss
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
