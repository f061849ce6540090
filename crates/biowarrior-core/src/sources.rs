//! Source manifest: where every input table lives and which columns to read.
//!
//! Defaults reproduce the UNdata exports the dashboard ships with. A JSON
//! manifest may override any subset of fields; relative paths in it resolve
//! against the manifest's own directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::table::ColumnRef;

/// One country-keyed input table of the five-way merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableSource {
    pub path: PathBuf,
    /// Data rows to discard after the header (metadata blocks at the top of a sheet).
    #[serde(default)]
    pub skip_rows: usize,
    /// Country/area name column, the join key.
    pub key: ColumnRef,
    /// Country id column. Required when present in the mapping.
    #[serde(default)]
    pub id: Option<ColumnRef>,
    pub value: ColumnRef,
}

impl TableSource {
    /// Columns that must exist and be non-blank for a row to survive, in
    /// order: key, value, then id when mapped.
    pub fn columns(&self) -> Vec<ColumnRef> {
        let mut cols = vec![self.key.clone(), self.value.clone()];
        if let Some(id) = &self.id {
            cols.push(id.clone());
        }
        cols
    }
}

/// Complete set of inputs. Equality of two manifests is the identity the
/// merged-table cache is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceManifest {
    pub co2: TableSource,
    pub mining: TableSource,
    pub forest: TableSource,
    pub marine: TableSource,
    pub terrestrial: TableSource,
    /// Per-region mean forest area, one column per year.
    pub region_forest: PathBuf,
    /// Per-region mean mining share, one column per year.
    pub region_mining: PathBuf,
    /// Country-level combined terrestrial and marine protected areas.
    pub protected_areas: PathBuf,
    /// Country-level observation table for correlation and trends.
    pub observations: PathBuf,
}

impl Default for SourceManifest {
    fn default() -> Self {
        Self {
            co2: TableSource {
                path: "CO2_Emissions.csv".into(),
                skip_rows: 17,
                key: ColumnRef::Index(1),
                id: None,
                value: ColumnRef::Index(4),
            },
            mining: TableSource {
                path: "Contribution of mining to value added.csv".into(),
                skip_rows: 0,
                key: ColumnRef::name("Country and area"),
                id: None,
                value: ColumnRef::name("2018"),
            },
            forest: TableSource {
                path: "Forest Area.csv".into(),
                skip_rows: 0,
                key: ColumnRef::name("Country and Area"),
                id: Some(ColumnRef::name("CountryID")),
                value: ColumnRef::name("Forest Area as a Proportion of Total Land Area, 2020"),
            },
            marine: TableSource {
                path: "Marine protected areas.csv".into(),
                skip_rows: 0,
                key: ColumnRef::name("Country and area"),
                id: Some(ColumnRef::name("CountryID")),
                value: ColumnRef::name("Marine protected areas"),
            },
            terrestrial: TableSource {
                path: "Terrestrial protected areas.csv".into(),
                skip_rows: 0,
                key: ColumnRef::name("Country and area"),
                id: Some(ColumnRef::name("CountryID")),
                value: ColumnRef::name("Terrestrial protected areas"),
            },
            region_forest: "region_forest_means.csv".into(),
            region_mining: "region_mining_means.csv".into(),
            protected_areas: "Terrestrial_Marine protected areas.csv".into(),
            observations: "newer_datasetfinal.csv".into(),
        }
    }
}

impl SourceManifest {
    /// Default layout with every file under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::default().resolved_against(dir)
    }

    /// Load a JSON manifest. Omitted fields take their defaults; relative
    /// paths resolve against the manifest's directory.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: SourceManifest =
            serde_json::from_str(&text).map_err(|source| DataError::Manifest {
                path: path.to_path_buf(),
                source,
            })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(manifest.resolved_against(base))
    }

    pub fn resolved_against(mut self, base: &Path) -> Self {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        for table in [
            &mut self.co2,
            &mut self.mining,
            &mut self.forest,
            &mut self.marine,
            &mut self.terrestrial,
        ] {
            join(&mut table.path);
        }
        join(&mut self.region_forest);
        join(&mut self.region_mining);
        join(&mut self.protected_areas);
        join(&mut self.observations);
        self
    }
}
