//! Country-level observation table behind the correlation row and the trend
//! estimator. Loaded independently of the five-way merge.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::region::Variable;
use crate::table::{number_cell, text_cell, ColumnRef, Table};

pub const RESPONSE_COLUMN: &str = "Trigger Species";
pub const COUNTRY_COLUMN: &str = "Country and Area";

/// One observation row. Any cell may be blank; each fit uses only the rows
/// where its own two columns are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    pub country: Option<String>,
    pub mining: Option<f64>,
    pub co2: Option<f64>,
    pub forest: Option<f64>,
    pub marine: Option<f64>,
    pub terrestrial: Option<f64>,
    pub trigger_species: Option<f64>,
}

impl ObservationRow {
    pub fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Mining => self.mining,
            Variable::Co2 => self.co2,
            Variable::Forest => self.forest,
            Variable::Marine => self.marine,
            Variable::Terrestrial => self.terrestrial,
        }
    }

    pub fn set(&mut self, variable: Variable, value: Option<f64>) {
        let slot = match variable {
            Variable::Mining => &mut self.mining,
            Variable::Co2 => &mut self.co2,
            Variable::Forest => &mut self.forest,
            Variable::Marine => &mut self.marine,
            Variable::Terrestrial => &mut self.terrestrial,
        };
        *slot = value;
    }
}

pub fn load_observations(path: &Path) -> Result<Vec<ObservationRow>> {
    observations_from_table(&Table::from_path(path)?)
}

pub fn observations_from_reader<R: Read>(source_name: &str, reader: R) -> Result<Vec<ObservationRow>> {
    observations_from_table(&Table::from_reader(source_name, reader)?)
}

/// The five explanatory columns and the response are required; the country
/// column is read when present.
pub fn observations_from_table(table: &Table) -> Result<Vec<ObservationRow>> {
    let response_idx = table.column_index(&ColumnRef::name(RESPONSE_COLUMN))?;
    let variable_idx = Variable::ALL
        .iter()
        .map(|&v| Ok((v, table.column_index(&ColumnRef::name(v.column()))?)))
        .collect::<Result<Vec<_>>>()?;
    let country_idx = table.column_index(&ColumnRef::name(COUNTRY_COLUMN)).ok();

    let rows: Vec<ObservationRow> = table
        .rows()
        .iter()
        .map(|row| {
            let mut obs = ObservationRow {
                country: country_idx.and_then(|i| text_cell(row, i)).map(str::to_string),
                trigger_species: number_cell(row, response_idx),
                ..ObservationRow::default()
            };
            for &(variable, idx) in &variable_idx {
                obs.set(variable, number_cell(row, idx));
            }
            obs
        })
        .collect();

    info!(source = table.source_name(), rows = rows.len(), "loaded observations");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Country and Area,Mining,Forest,Marine protected areas,Terrestrial protected areas,% change since 1990,Trigger Species
Kenya,0.8,6.3,0.8,12.4,12.5,40
France,0.1,31.5,45.2,28.4,-18,
Peru,9.1,,8,22.1,40,120
";

    #[test]
    fn reads_all_six_columns_with_blanks() {
        let rows = observations_from_reader("obs", CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].country.as_deref(), Some("Kenya"));
        assert_eq!(rows[0].value(Variable::Co2), Some(12.5));
        assert_eq!(rows[0].trigger_species, Some(40.0));
        assert_eq!(rows[1].trigger_species, None);
        assert_eq!(rows[2].value(Variable::Forest), None);
        assert_eq!(rows[2].value(Variable::Marine), Some(8.0));
    }

    #[test]
    fn country_column_is_optional() {
        let csv = "Mining,Forest,Marine protected areas,Terrestrial protected areas,% change since 1990,Trigger Species\n1,2,3,4,5,6\n";
        let rows = observations_from_reader("obs", csv.as_bytes()).unwrap();
        assert_eq!(rows[0].country, None);
        assert_eq!(rows[0].value(Variable::Terrestrial), Some(4.0));
    }

    #[test]
    fn missing_response_column_is_fatal() {
        let csv = "Mining,Forest,Marine protected areas,Terrestrial protected areas,% change since 1990\n1,2,3,4,5\n";
        assert!(observations_from_reader("obs", csv.as_bytes()).is_err());
    }
}
