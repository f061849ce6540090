//! Five-way country merge.
//!
//! Each source contributes one value column keyed by country/area name. Rows
//! with a blank required cell are dropped per source; the join keeps only
//! names present in all five (exact match on trimmed text); joined rows whose
//! name does not classify to a region are dropped last.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classify::classify;
use crate::error::Result;
use crate::region::Region;
use crate::sources::{SourceManifest, TableSource};
use crate::table::{number_cell, text_cell, Table};

/// One country of the merged table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country_name: String,
    /// Country id from the terrestrial table, when that source maps one.
    pub country_id: Option<String>,
    pub co2_pct_change_since_1990: f64,
    pub mining_value_added_pct: f64,
    pub forest_area_pct_2020: f64,
    pub marine_protected_pct: f64,
    pub terrestrial_protected_pct: f64,
    pub region: Region,
}

/// A single value column pulled from one source, keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedColumn {
    pub source_name: String,
    rows: Vec<KeyedValue>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyedValue {
    pub name: String,
    pub id: Option<String>,
    pub value: f64,
}

impl KeyedColumn {
    pub fn get(&self, name: &str) -> Option<&KeyedValue> {
        self.index.get(name).map(|&i| &self.rows[i])
    }

    pub fn rows(&self) -> &[KeyedValue] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Select and rename one source's columns.
///
/// Fails when a mapped column is absent. Blank or non-numeric required cells
/// drop the row. A name repeated within the source keeps its first row.
pub fn extract(table: &Table, mapping: &TableSource) -> Result<KeyedColumn> {
    let indices = table.column_indices(&mapping.columns())?;
    let (key_idx, value_idx, id_idx) = (indices[0], indices[1], indices.get(2).copied());

    let mut rows = Vec::new();
    let mut index = HashMap::new();
    let mut dropped = 0usize;
    for row in table.rows().iter().skip(mapping.skip_rows) {
        let (Some(name), Some(value)) = (text_cell(row, key_idx), number_cell(row, value_idx)) else {
            dropped += 1;
            continue;
        };
        let id = match id_idx {
            Some(i) => match text_cell(row, i) {
                Some(id) => Some(id.to_string()),
                None => {
                    dropped += 1;
                    continue;
                }
            },
            None => None,
        };
        if index.contains_key(name) {
            warn!(source = table.source_name(), country = name, "duplicate country row ignored");
            continue;
        }
        index.insert(name.to_string(), rows.len());
        rows.push(KeyedValue { name: name.to_string(), id, value });
    }

    debug!(
        source = table.source_name(),
        kept = rows.len(),
        dropped,
        "extracted value column"
    );
    Ok(KeyedColumn {
        source_name: table.source_name().to_string(),
        rows,
        index,
    })
}

/// The five extracted columns of a merge, in canonical order.
#[derive(Debug, Clone)]
pub struct MergeInputs {
    pub co2: KeyedColumn,
    pub mining: KeyedColumn,
    pub forest: KeyedColumn,
    pub marine: KeyedColumn,
    pub terrestrial: KeyedColumn,
}

impl MergeInputs {
    pub fn from_tables(
        tables: [&Table; 5],
        manifest: &SourceManifest,
    ) -> Result<Self> {
        let [co2, mining, forest, marine, terrestrial] = tables;
        Ok(Self {
            co2: extract(co2, &manifest.co2)?,
            mining: extract(mining, &manifest.mining)?,
            forest: extract(forest, &manifest.forest)?,
            marine: extract(marine, &manifest.marine)?,
            terrestrial: extract(terrestrial, &manifest.terrestrial)?,
        })
    }
}

/// Inner-join the five columns and attach regions. Output follows the row
/// order of the CO2 source.
pub fn join(inputs: &MergeInputs) -> Vec<CountryRecord> {
    let mut out = Vec::new();
    let mut missing = 0usize;
    let mut unclassified = 0usize;

    for co2 in inputs.co2.rows() {
        let name = co2.name.as_str();
        let (Some(mining), Some(forest), Some(marine), Some(terrestrial)) = (
            inputs.mining.get(name),
            inputs.forest.get(name),
            inputs.marine.get(name),
            inputs.terrestrial.get(name),
        ) else {
            debug!(country = name, "not present in every source");
            missing += 1;
            continue;
        };

        let region = classify(name);
        if !region.is_known() {
            debug!(country = name, "no region for country");
            unclassified += 1;
            continue;
        }

        out.push(CountryRecord {
            country_name: name.to_string(),
            country_id: terrestrial.id.clone(),
            co2_pct_change_since_1990: co2.value,
            mining_value_added_pct: mining.value,
            forest_area_pct_2020: forest.value,
            marine_protected_pct: marine.value,
            terrestrial_protected_pct: terrestrial.value,
            region,
        });
    }

    info!(
        merged = out.len(),
        missing_from_a_source = missing,
        unclassified,
        "merged country table"
    );
    out
}

/// Read all five sources named by `manifest` and merge them. Pure given
/// unchanged files; see `Dataset::load_and_merge` for the cached form.
pub fn load_and_merge(manifest: &SourceManifest) -> Result<Vec<CountryRecord>> {
    let co2 = Table::from_path(&manifest.co2.path)?;
    let mining = Table::from_path(&manifest.mining.path)?;
    let forest = Table::from_path(&manifest.forest.path)?;
    let marine = Table::from_path(&manifest.marine.path)?;
    let terrestrial = Table::from_path(&manifest.terrestrial.path)?;
    let inputs = MergeInputs::from_tables([&co2, &mining, &forest, &marine, &terrestrial], manifest)?;
    Ok(join(&inputs))
}

/// Records belonging to `region`.
pub fn records_in_region(records: &[CountryRecord], region: Region) -> Vec<&CountryRecord> {
    records.iter().filter(|r| r.region == region).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::table::ColumnRef;

    fn table(name: &str, csv: &str) -> Table {
        Table::from_reader(name, csv.as_bytes()).unwrap()
    }

    fn mapping(key: &str, value: &str, id: Option<&str>) -> TableSource {
        TableSource {
            path: "unused.csv".into(),
            skip_rows: 0,
            key: ColumnRef::name(key),
            id: id.map(ColumnRef::name),
            value: ColumnRef::name(value),
        }
    }

    fn fixture_inputs() -> MergeInputs {
        let co2 = table(
            "co2",
            "meta,name,x,y,change\n\
             ,Kenya,,,12.5\n\
             ,France,,,-18\n\
             ,World,,,55\n\
             ,Peru,,,40\n\
             ,Japan,,,\n",
        );
        let mining = table(
            "mining",
            "Country and area,2018\nKenya,0.8\nFrance,0.1\nWorld,2.3\nPeru,9.1\nJapan,0.05\n",
        );
        let forest = table(
            "forest",
            "CountryID,Country and Area,Forest\n404,Kenya,6.3\n250,France,31.5\n0,World,31\n604,Peru,56.5\n392,Japan,68.4\n",
        );
        let marine = table(
            "marine",
            "CountryID,Country and area,Marine\n404,Kenya,0.8\n250,France,45.2\n0,World,7.7\n392,Japan,8.2\n",
        );
        let terrestrial = table(
            "terrestrial",
            "CountryID,Country and area,Terrestrial\n404,Kenya,12.4\n250,France,28.4\n0,World,15.1\n604,Peru,22.1\n392,Japan,20.5\n",
        );

        let mut co2_mapping = mapping("", "", None);
        co2_mapping.key = ColumnRef::Index(1);
        co2_mapping.value = ColumnRef::Index(4);

        MergeInputs {
            co2: extract(&co2, &co2_mapping).unwrap(),
            mining: extract(&mining, &mapping("Country and area", "2018", None)).unwrap(),
            forest: extract(&forest, &mapping("Country and Area", "Forest", Some("CountryID"))).unwrap(),
            marine: extract(&marine, &mapping("Country and area", "Marine", Some("CountryID"))).unwrap(),
            terrestrial: extract(&terrestrial, &mapping("Country and area", "Terrestrial", Some("CountryID")))
                .unwrap(),
        }
    }

    #[test]
    fn join_keeps_intersection_and_drops_unknown_regions() {
        let merged = join(&fixture_inputs());
        let names: Vec<&str> = merged.iter().map(|r| r.country_name.as_str()).collect();
        // Peru lacks marine data, Japan lacks a CO2 value, World has no region.
        assert_eq!(names, ["Kenya", "France"]);
        assert!(merged.iter().all(|r| r.region.is_known()));
    }

    #[test]
    fn joined_values_come_from_the_right_sources() {
        let merged = join(&fixture_inputs());
        let kenya = &merged[0];
        assert_eq!(kenya.region, Region::Africa);
        assert_eq!(kenya.country_id.as_deref(), Some("404"));
        assert_eq!(kenya.co2_pct_change_since_1990, 12.5);
        assert_eq!(kenya.mining_value_added_pct, 0.8);
        assert_eq!(kenya.forest_area_pct_2020, 6.3);
        assert_eq!(kenya.marine_protected_pct, 0.8);
        assert_eq!(kenya.terrestrial_protected_pct, 12.4);
        assert_eq!(merged[1].region, Region::Europe);
    }

    #[test]
    fn skip_rows_discards_leading_data_rows() {
        let t = table("co2", "h0,h1\nnote,Source: UNFCCC\nKenya,1\nPeru,2\n");
        let mut s = mapping("h0", "h1", None);
        s.skip_rows = 1;
        let col = extract(&t, &s).unwrap();
        assert_eq!(col.len(), 2);
        assert!(col.get("Kenya").is_some());
    }

    #[test]
    fn blank_id_drops_row() {
        let t = table("forest", "CountryID,Country and Area,Forest\n,Kenya,6.3\n250,France,31.5\n");
        let col = extract(&t, &mapping("Country and Area", "Forest", Some("CountryID"))).unwrap();
        assert!(col.get("Kenya").is_none());
        assert_eq!(col.get("France").map(|v| v.value), Some(31.5));
    }

    #[test]
    fn duplicate_names_keep_first_row() {
        let t = table("mining", "Country and area,2018\nKenya,0.8\nKenya,9.9\n");
        let col = extract(&t, &mapping("Country and area", "2018", None)).unwrap();
        assert_eq!(col.len(), 1);
        assert_eq!(col.get("Kenya").map(|v| v.value), Some(0.8));
    }

    #[test]
    fn names_are_trimmed_before_joining() {
        let t = table("mining", "Country and area,2018\n  Kenya ,0.8\n");
        let col = extract(&t, &mapping("Country and area", "2018", None)).unwrap();
        assert!(col.get("Kenya").is_some());
    }

    #[test]
    fn missing_value_column_fails_fast() {
        let t = table("mining", "Country and area,2017\nKenya,0.8\n");
        let err = extract(&t, &mapping("Country and area", "2018", None)).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column, .. } if column.contains("2018")));
    }

    #[test]
    fn mapped_id_column_must_exist() {
        let t = table("marine", "Country and area,Marine\nKenya,0.8\n");
        let err = extract(&t, &mapping("Country and area", "Marine", Some("CountryID"))).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column, .. } if column.contains("CountryID")));
        assert!(extract(&t, &mapping("Country and area", "Marine", None)).is_ok());
    }

    #[test]
    fn region_filter() {
        let merged = join(&fixture_inputs());
        let africa = records_in_region(&merged, Region::Africa);
        assert_eq!(africa.len(), 1);
        assert!(records_in_region(&merged, Region::Oceania).is_empty());
    }
}
