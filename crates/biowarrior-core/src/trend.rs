//! Per-variable linear trends and correlations against trigger species.
//!
//! Five independent one-variable fits, not a joint regression. Each fit uses
//! the rows where both its explanatory column and the response are present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::observations::ObservationRow;
use crate::region::Variable;
use crate::stats::{linear_fit, pearson_r};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendCoefficient {
    pub explanatory_variable: Variable,
    /// Change in trigger-species count per unit of the variable.
    pub slope: f64,
}

/// Complete (x, response) pairs for one variable.
pub fn paired(observations: &[ObservationRow], variable: Variable) -> (Vec<f64>, Vec<f64>) {
    observations
        .iter()
        .filter_map(|o| Some((o.value(variable)?, o.trigger_species?)))
        .unzip()
}

/// Fit one slope per explanatory variable. A variable with zero variance or
/// fewer than two complete rows gets slope 0.
pub fn fit_trends(observations: &[ObservationRow]) -> BTreeMap<Variable, TrendCoefficient> {
    Variable::ALL
        .iter()
        .map(|&variable| {
            let (x, y) = paired(observations, variable);
            let slope = linear_fit(&x, &y).slope;
            debug!(?variable, rows = x.len(), slope, "fitted trend");
            (variable, TrendCoefficient { explanatory_variable: variable, slope })
        })
        .collect()
}

/// Pearson r of each variable with trigger species over pairwise-complete
/// rows: the single row of the correlation heatmap.
pub fn correlate_with_response(observations: &[ObservationRow]) -> BTreeMap<Variable, f64> {
    Variable::ALL
        .iter()
        .map(|&variable| {
            let (x, y) = paired(observations, variable);
            (variable, pearson_r(&x, &y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn linear_rows() -> Vec<ObservationRow> {
        (0..12)
            .map(|i| {
                let x = i as f64 * 1.5;
                ObservationRow {
                    mining: Some(x),
                    co2: Some(-x),
                    forest: Some(5.0),
                    marine: if i % 3 == 0 { None } else { Some(2.0 * x) },
                    terrestrial: Some((i % 2) as f64),
                    trigger_species: Some(3.0 * x + 7.0),
                    country: None,
                }
            })
            .collect()
    }

    #[test]
    fn recovers_slope_of_perfect_line() {
        let trends = fit_trends(&linear_rows());
        assert_abs_diff_eq!(trends[&Variable::Mining].slope, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(trends[&Variable::Co2].slope, -3.0, epsilon = 1e-9);
        assert_eq!(trends[&Variable::Mining].explanatory_variable, Variable::Mining);
    }

    #[test]
    fn rows_with_blanks_are_excluded_per_fit() {
        let trends = fit_trends(&linear_rows());
        // y = 3x + 7 and marine = 2x, so slope against marine is 1.5.
        assert_abs_diff_eq!(trends[&Variable::Marine].slope, 1.5, epsilon = 1e-9);
        let (x, _) = paired(&linear_rows(), Variable::Marine);
        assert_eq!(x.len(), 8);
    }

    #[test]
    fn constant_column_has_zero_slope() {
        let trends = fit_trends(&linear_rows());
        assert_eq!(trends[&Variable::Forest].slope, 0.0);
        assert_eq!(trends.len(), 5);
    }

    #[test]
    fn missing_response_excludes_row_from_every_fit() {
        let mut rows = linear_rows();
        rows.push(ObservationRow {
            mining: Some(1000.0),
            trigger_species: None,
            ..ObservationRow::default()
        });
        assert_abs_diff_eq!(fit_trends(&rows)[&Variable::Mining].slope, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_input_gives_zero_slopes() {
        let trends = fit_trends(&[]);
        assert!(trends.values().all(|t| t.slope == 0.0));
    }

    #[test]
    fn correlation_row() {
        let r = correlate_with_response(&linear_rows());
        assert_abs_diff_eq!(r[&Variable::Mining], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[&Variable::Co2], -1.0, epsilon = 1e-9);
        assert_eq!(r[&Variable::Forest], 0.0);
    }
}
