//! Browser bindings for the dashboard front end.
//!
//! Tables arrive as CSV text and maps as JSON text; results go back as plain
//! JS objects keyed by variable name ("Mining", "Co2", ...).

use std::collections::BTreeMap;

use biowarrior_core::impact::deltas_from_sliders;
use biowarrior_core::observations::observations_from_reader;
use biowarrior_core::{
    correlate_with_response, fit_trends as fit, project_breakdown, ImpactBreakdown, SliderState,
    TrendCoefficient, Variable,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Slopes fitted from an observation table.
pub fn trends_from_csv(observations_csv: &str) -> Result<BTreeMap<Variable, TrendCoefficient>, String> {
    let rows = observations_from_reader("observations", observations_csv.as_bytes())
        .map_err(|e| e.to_string())?;
    Ok(fit(&rows))
}

pub fn correlations_from_csv(observations_csv: &str) -> Result<BTreeMap<Variable, f64>, String> {
    let rows = observations_from_reader("observations", observations_csv.as_bytes())
        .map_err(|e| e.to_string())?;
    Ok(correlate_with_response(&rows))
}

/// Deltas are clamped to the slider range before projection.
pub fn breakdown_from_json(deltas_json: &str, coefficients_json: &str) -> Result<ImpactBreakdown, String> {
    let raw: BTreeMap<Variable, f64> =
        serde_json::from_str(deltas_json).map_err(|e| format!("invalid deltas: {e}"))?;
    let coefficients: BTreeMap<Variable, TrendCoefficient> = serde_json::from_str(coefficients_json)
        .map_err(|e| format!("invalid coefficients: {e}"))?;
    let sliders: Vec<SliderState> = raw.into_iter().map(|(v, d)| SliderState::new(v, d)).collect();
    Ok(project_breakdown(&deltas_from_sliders(&sliders), &coefficients))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Region label for a country name; "Unknown" when it does not resolve.
#[wasm_bindgen]
pub fn classify(country_name: &str) -> String {
    biowarrior_core::classify(country_name).label().to_string()
}

#[wasm_bindgen]
pub fn fit_trends(observations_csv: &str) -> Result<JsValue, JsValue> {
    to_js(&trends_from_csv(observations_csv).map_err(|e| JsValue::from_str(&e))?)
}

#[wasm_bindgen]
pub fn correlations(observations_csv: &str) -> Result<JsValue, JsValue> {
    to_js(&correlations_from_csv(observations_csv).map_err(|e| JsValue::from_str(&e))?)
}

/// Estimated change in endangered species. `coefficients_json` is the object
/// `fit_trends` returns, serialized.
#[wasm_bindgen]
pub fn project_impact(deltas_json: &str, coefficients_json: &str) -> Result<f64, JsValue> {
    breakdown_from_json(deltas_json, coefficients_json)
        .map(|b| b.total)
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn impact_breakdown(deltas_json: &str, coefficients_json: &str) -> Result<JsValue, JsValue> {
    to_js(&breakdown_from_json(deltas_json, coefficients_json).map_err(|e| JsValue::from_str(&e))?)
}
