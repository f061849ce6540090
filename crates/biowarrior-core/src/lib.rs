//! Data pipeline behind the Biodiversity Warrior dashboard.
//!
//! Loads the prepared environmental tables, merges them by country, and
//! derives the figures the dashboard shows: region time series, the
//! trigger-species correlation row, per-variable trend slopes and the
//! what-if impact estimate. No rendering lives here.

pub mod classify;
pub mod dataset;
pub mod error;
pub mod impact;
pub mod merge;
pub mod observations;
pub mod protected;
pub mod region;
pub mod series;
pub mod sources;
pub mod stats;
pub mod table;
pub mod trend;

pub use classify::classify;
pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use impact::{project_breakdown, project_impact, ImpactBreakdown, SliderState};
pub use merge::{load_and_merge, records_in_region, CountryRecord};
pub use observations::ObservationRow;
pub use protected::ProtectedAreaLookup;
pub use region::{Metric, Region, Variable};
pub use series::{load_region_series, RegionTimeSeries};
pub use sources::SourceManifest;
pub use trend::{correlate_with_response, fit_trends, TrendCoefficient};
