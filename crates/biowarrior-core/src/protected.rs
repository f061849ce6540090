//! Country-level terrestrial + marine protected-area lookup and the 30x30
//! target it is compared against.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::table::{number_cell, text_cell, ColumnRef, Table};

pub const COUNTRY_COLUMN: &str = "Country and area";
pub const PROTECTED_COLUMN: &str = "Terrestrial and marine protected areas";

/// Share of land and ocean the 30x30 goal protects by 2030.
pub const THIRTY_BY_THIRTY_TARGET_PCT: f64 = 30.0;
/// Share of the world's land and oceans protected as of 2018.
pub const GLOBAL_PROTECTED_2018_PCT: f64 = 14.5;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProtectedAreaLookup {
    /// Every distinct country in file order, including those without a value.
    countries: Vec<String>,
    values: HashMap<String, f64>,
}

impl ProtectedAreaLookup {
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_table(&Table::from_path(path)?)
    }

    pub fn from_reader<R: Read>(source_name: &str, reader: R) -> Result<Self> {
        Self::from_table(&Table::from_reader(source_name, reader)?)
    }

    /// The first row of a country is authoritative, whether or not it has a value.
    pub fn from_table(table: &Table) -> Result<Self> {
        let country_idx = table.column_index(&ColumnRef::name(COUNTRY_COLUMN))?;
        let value_idx = table.column_index(&ColumnRef::name(PROTECTED_COLUMN))?;

        let mut lookup = Self::default();
        let mut seen = HashSet::new();
        for row in table.rows() {
            let Some(country) = text_cell(row, country_idx) else {
                continue;
            };
            if !seen.insert(country.to_string()) {
                continue;
            }
            lookup.countries.push(country.to_string());
            if let Some(value) = number_cell(row, value_idx) {
                lookup.values.insert(country.to_string(), value);
            }
        }

        info!(
            source = table.source_name(),
            countries = lookup.countries.len(),
            with_data = lookup.values.len(),
            "loaded protected-area lookup"
        );
        Ok(lookup)
    }

    /// Protected share for `country_name` (trimmed, exact match). `None`
    /// means "no data", whether the country is absent or its cell is blank.
    pub fn lookup(&self, country_name: &str) -> Option<f64> {
        self.values.get(country_name.trim()).copied()
    }

    /// Countries available for selection, in file order.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Percentage points still needed to reach the 30x30 target; zero once met.
    pub fn shortfall_to_target(&self, country_name: &str) -> Option<f64> {
        self.lookup(country_name)
            .map(|pct| (THIRTY_BY_THIRTY_TARGET_PCT - pct).max(0.0))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Header carries the trailing space of the original sheet.
    const CSV: &str = "\
CountryID,Country and area,Terrestrial and marine protected areas \n\
404,  Kenya ,12.4\n\
250,France,33.0\n\
0,Atlantis,\n\
404,Kenya,99\n";

    fn lookup() -> ProtectedAreaLookup {
        ProtectedAreaLookup::from_reader("protected", CSV.as_bytes()).unwrap()
    }

    #[test]
    fn lookup_trims_names() {
        let l = lookup();
        assert_eq!(l.lookup("Kenya"), Some(12.4));
        assert_eq!(l.lookup(" Kenya  "), Some(12.4));
    }

    #[test]
    fn unknown_or_blank_is_no_data() {
        let l = lookup();
        assert_eq!(l.lookup("Atlantis"), None);
        assert_eq!(l.lookup("Narnia"), None);
        assert!(l.countries().iter().any(|c| c == "Atlantis"));
    }

    #[test]
    fn countries_are_distinct_in_file_order() {
        assert_eq!(lookup().countries(), ["Kenya", "France", "Atlantis"]);
    }

    #[test]
    fn shortfall_against_thirty_by_thirty() {
        let l = lookup();
        assert_abs_diff_eq!(l.shortfall_to_target("Kenya").unwrap(), 17.6, epsilon = 1e-9);
        assert_eq!(l.shortfall_to_target("France"), Some(0.0));
        assert_eq!(l.shortfall_to_target("Atlantis"), None);
    }

    #[test]
    fn missing_value_column_is_fatal() {
        let csv = "Country and area,Protected\nKenya,1\n";
        assert!(ProtectedAreaLookup::from_reader("protected", csv.as_bytes()).is_err());
    }
}
