//! Per-region yearly aggregates (mean forest area, mean mining share).
//!
//! The source tables are already aggregated: one row per region, one column
//! per year. Year headers may carry a prefix ("Forest Area, 1990"); they are
//! reduced to the bare year on load.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::region::{Metric, Region};
use crate::stats::{linear_fit, LinearFit};
use crate::table::{number_cell, text_cell, ColumnRef, Table};

pub const REGION_COLUMN: &str = "Region";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTimeSeries {
    pub region: Region,
    pub metric: Metric,
    /// Year → value, ascending by year. Years with a blank cell are absent.
    pub series: BTreeMap<i32, f64>,
}

impl RegionTimeSeries {
    pub fn first(&self) -> Option<(i32, f64)> {
        self.series.iter().next().map(|(&y, &v)| (y, v))
    }

    pub fn last(&self) -> Option<(i32, f64)> {
        self.series.iter().next_back().map(|(&y, &v)| (y, v))
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.series.get(&year).copied()
    }

    pub fn years(&self) -> Vec<i32> {
        self.series.keys().copied().collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.series.values().copied().collect()
    }

    /// Value in the last year is below the value in the first year.
    /// False for an empty series.
    pub fn is_declining(&self) -> bool {
        matches!((self.first(), self.last()), (Some((_, a)), Some((_, b))) if b < a)
    }

    /// Least-squares line of value against year. `None` with fewer than two years.
    pub fn linear_fit(&self) -> Option<LinearFit> {
        if self.series.len() < 2 {
            return None;
        }
        let years: Vec<f64> = self.series.keys().map(|&y| f64::from(y)).collect();
        Some(linear_fit(&years, &self.values()))
    }

    /// The trend line evaluated at every year of the series.
    pub fn fitted(&self) -> Vec<(i32, f64)> {
        match self.linear_fit() {
            Some(fit) => self.series.keys().map(|&y| (y, fit.predict(f64::from(y)))).collect(),
            None => Vec::new(),
        }
    }
}

/// Bare year of a column header: "1990" or "Forest Area, 1990" → 1990.
pub fn parse_year_header(header: &str) -> Option<i32> {
    let tail = header
        .trim()
        .rsplit(|c: char| c == ',' || c.is_whitespace())
        .next()?;
    if tail.len() == 4 && tail.chars().all(|c| c.is_ascii_digit()) {
        tail.parse().ok()
    } else {
        None
    }
}

/// Read a region aggregate table from disk.
pub fn load_region_series(path: &Path, metric: Metric) -> Result<Vec<RegionTimeSeries>> {
    region_series_from_table(&Table::from_path(path)?, metric)
}

pub fn region_series_from_reader<R: Read>(
    source_name: &str,
    reader: R,
    metric: Metric,
) -> Result<Vec<RegionTimeSeries>> {
    region_series_from_table(&Table::from_reader(source_name, reader)?, metric)
}

/// Rows without a region label are dropped; labels that are not one of the
/// six regions are dropped with a warning.
pub fn region_series_from_table(table: &Table, metric: Metric) -> Result<Vec<RegionTimeSeries>> {
    let region_idx = table.column_index(&ColumnRef::name(REGION_COLUMN))?;
    let year_columns: Vec<(usize, i32)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != region_idx)
        .filter_map(|(i, h)| parse_year_header(h).map(|y| (i, y)))
        .collect();

    let mut out = Vec::new();
    for row in table.rows() {
        let Some(label) = text_cell(row, region_idx) else {
            continue;
        };
        let region: Region = match label.parse() {
            Ok(r) => r,
            Err(e) => {
                warn!(source = table.source_name(), "{e}");
                continue;
            }
        };
        let series = year_columns
            .iter()
            .filter_map(|&(i, year)| number_cell(row, i).map(|v| (year, v)))
            .collect();
        out.push(RegionTimeSeries { region, metric, series });
    }

    info!(
        source = table.source_name(),
        regions = out.len(),
        years = year_columns.len(),
        ?metric,
        "loaded region series"
    );
    Ok(out)
}

/// The series for `region`, if the table has one.
pub fn series_for(series: &[RegionTimeSeries], region: Region) -> Option<&RegionTimeSeries> {
    series.iter().find(|s| s.region == region)
}
