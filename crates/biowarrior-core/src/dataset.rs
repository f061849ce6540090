//! Stateless service surface over one set of input files.
//!
//! A `Dataset` is bound to a `SourceManifest` for its whole life. The merged
//! country table, both region tables and the protected-area lookup are built
//! once per dataset and never invalidated; the inputs are static. The
//! observation table is re-read and its trends refit on every call.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;
use crate::merge::{load_and_merge, CountryRecord};
use crate::observations::{load_observations, ObservationRow};
use crate::protected::ProtectedAreaLookup;
use crate::region::{Metric, Variable};
use crate::series::{load_region_series, RegionTimeSeries};
use crate::sources::SourceManifest;
use crate::trend::{correlate_with_response, fit_trends, TrendCoefficient};

pub struct Dataset {
    manifest: SourceManifest,
    merged: OnceLock<Vec<CountryRecord>>,
    region_forest: OnceLock<Vec<RegionTimeSeries>>,
    region_mining: OnceLock<Vec<RegionTimeSeries>>,
    protected: OnceLock<ProtectedAreaLookup>,
}

/// Value of `cell`, loading it on first use. A failed load leaves the cell
/// empty so the next call retries.
fn cached<T>(cell: &OnceLock<T>, load: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = load()?;
    Ok(cell.get_or_init(|| value))
}

impl Dataset {
    pub fn new(manifest: SourceManifest) -> Self {
        Self {
            manifest,
            merged: OnceLock::new(),
            region_forest: OnceLock::new(),
            region_mining: OnceLock::new(),
            protected: OnceLock::new(),
        }
    }

    /// Dataset over the default file names under `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self::new(SourceManifest::in_dir(dir))
    }

    pub fn manifest(&self) -> &SourceManifest {
        &self.manifest
    }

    /// The merged country table, computed on first call. A failed load is not
    /// cached; the next call retries.
    pub fn load_and_merge(&self) -> Result<&[CountryRecord]> {
        cached(&self.merged, || load_and_merge(&self.manifest)).map(Vec::as_slice)
    }

    pub fn is_merged(&self) -> bool {
        self.merged.get().is_some()
    }

    /// Region aggregate table for `metric`, read on first call.
    pub fn load_region_series(&self, metric: Metric) -> Result<&[RegionTimeSeries]> {
        let (cell, path) = match metric {
            Metric::Forest => (&self.region_forest, &self.manifest.region_forest),
            Metric::Mining => (&self.region_mining, &self.manifest.region_mining),
        };
        cached(cell, || load_region_series(path, metric)).map(Vec::as_slice)
    }

    pub fn load_observations(&self) -> Result<Vec<ObservationRow>> {
        load_observations(&self.manifest.observations)
    }

    pub fn protected_areas(&self) -> Result<&ProtectedAreaLookup> {
        cached(&self.protected, || ProtectedAreaLookup::load(&self.manifest.protected_areas))
    }

    /// `None` when the country is unknown or has no value.
    pub fn lookup_protected_area(&self, country_name: &str) -> Result<Option<f64>> {
        Ok(self.protected_areas()?.lookup(country_name))
    }

    /// Trend slopes, refit from the observation table on every call.
    pub fn fit_trends(&self) -> Result<BTreeMap<Variable, TrendCoefficient>> {
        Ok(fit_trends(&self.load_observations()?))
    }

    pub fn correlations(&self) -> Result<BTreeMap<Variable, f64>> {
        Ok(correlate_with_response(&self.load_observations()?))
    }
}
