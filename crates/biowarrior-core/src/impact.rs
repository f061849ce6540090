//! What-if projection: slider deltas × trend slopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::region::Variable;
use crate::trend::TrendCoefficient;

pub const SLIDER_MIN_PCT: f64 = -50.0;
pub const SLIDER_MAX_PCT: f64 = 50.0;

/// A slider position, clamped to the slider's range on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderState {
    pub variable: Variable,
    pub delta_pct: f64,
}

impl SliderState {
    pub fn new(variable: Variable, delta_pct: f64) -> Self {
        let delta_pct = if delta_pct.is_finite() {
            delta_pct.clamp(SLIDER_MIN_PCT, SLIDER_MAX_PCT)
        } else {
            0.0
        };
        Self { variable, delta_pct }
    }
}

/// Collect slider positions into a delta map. A later slider for the same
/// variable replaces an earlier one.
pub fn deltas_from_sliders(sliders: &[SliderState]) -> BTreeMap<Variable, f64> {
    sliders.iter().map(|s| (s.variable, s.delta_pct)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    /// Per-variable `slope * delta`, for variables present in both inputs.
    pub contributions: BTreeMap<Variable, f64>,
    /// Estimated change in endangered-species count.
    pub total: f64,
}

pub fn project_breakdown(
    deltas: &BTreeMap<Variable, f64>,
    coefficients: &BTreeMap<Variable, TrendCoefficient>,
) -> ImpactBreakdown {
    let contributions: BTreeMap<Variable, f64> = deltas
        .iter()
        .filter_map(|(v, delta)| coefficients.get(v).map(|c| (*v, c.slope * delta)))
        .collect();
    let total = contributions.values().sum();
    ImpactBreakdown { contributions, total }
}

/// Sum of `slope * delta` over variables present in both maps. A variable
/// missing from either side contributes nothing.
pub fn project_impact(
    deltas: &BTreeMap<Variable, f64>,
    coefficients: &BTreeMap<Variable, TrendCoefficient>,
) -> f64 {
    project_breakdown(deltas, coefficients).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn coefficients(slopes: &[(Variable, f64)]) -> BTreeMap<Variable, TrendCoefficient> {
        slopes
            .iter()
            .map(|&(v, slope)| (v, TrendCoefficient { explanatory_variable: v, slope }))
            .collect()
    }

    #[test]
    fn single_variable_projection() {
        let mut coefs = coefficients(&[(Variable::Mining, 2.0)]);
        for v in [Variable::Co2, Variable::Forest, Variable::Marine, Variable::Terrestrial] {
            coefs.insert(v, TrendCoefficient { explanatory_variable: v, slope: 0.0 });
        }
        let deltas = BTreeMap::from([(Variable::Mining, 10.0)]);
        assert_eq!(project_impact(&deltas, &coefs), 20.0);
    }

    #[test]
    fn empty_deltas_project_zero() {
        let coefs = coefficients(&[(Variable::Mining, 2.0), (Variable::Co2, -1.0)]);
        assert_eq!(project_impact(&BTreeMap::new(), &coefs), 0.0);
    }

    #[test]
    fn missing_coefficient_contributes_nothing() {
        let coefs = coefficients(&[(Variable::Forest, -0.5)]);
        let deltas = BTreeMap::from([(Variable::Forest, 10.0), (Variable::Marine, 30.0)]);
        let breakdown = project_breakdown(&deltas, &coefs);
        assert_eq!(breakdown.contributions.len(), 1);
        assert_abs_diff_eq!(breakdown.total, -5.0);
    }

    #[test]
    fn contributions_sum_to_total() {
        let coefs = coefficients(&[
            (Variable::Mining, 1.2),
            (Variable::Co2, 0.3),
            (Variable::Forest, -0.7),
            (Variable::Marine, -0.1),
            (Variable::Terrestrial, 0.05),
        ]);
        let sliders = [
            SliderState::new(Variable::Mining, 10.0),
            SliderState::new(Variable::Co2, -20.0),
            SliderState::new(Variable::Forest, 5.0),
            SliderState::new(Variable::Marine, 50.0),
            SliderState::new(Variable::Terrestrial, -50.0),
        ];
        let deltas = deltas_from_sliders(&sliders);
        let b = project_breakdown(&deltas, &coefs);
        assert_abs_diff_eq!(b.total, 12.0 - 6.0 - 3.5 - 5.0 - 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(b.total, project_impact(&deltas, &coefs), epsilon = 1e-12);
    }

    #[test]
    fn slider_clamps_to_range() {
        assert_eq!(SliderState::new(Variable::Co2, 80.0).delta_pct, 50.0);
        assert_eq!(SliderState::new(Variable::Co2, -51.0).delta_pct, -50.0);
        assert_eq!(SliderState::new(Variable::Co2, f64::NAN).delta_pct, 0.0);
    }

    #[test]
    fn later_slider_wins() {
        let d = deltas_from_sliders(&[
            SliderState::new(Variable::Mining, 5.0),
            SliderState::new(Variable::Mining, -5.0),
        ]);
        assert_eq!(d[&Variable::Mining], -5.0);
    }
}
