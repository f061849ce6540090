//! Builds the per-region yearly mean tables (region_forest_means.csv,
//! region_mining_means.csv) from a country-level wide table.
//!
//! Every country is classified into a region; countries that do not resolve
//! are skipped. Each year's mean is taken over the countries with a value
//! for that year. Output keeps the input's year headers so the series loader
//! reads it back unchanged.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use biowarrior_core::series::{parse_year_header, REGION_COLUMN};
use biowarrior_core::stats::mean;
use biowarrior_core::table::{number_cell, text_cell, ColumnRef, Table};
use biowarrior_core::{classify, Region};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "region_means", about = "Average a country-level yearly table by region")]
struct Args {
    /// Country-level CSV with one column per year.
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path.
    #[arg(short, long)]
    output: PathBuf,

    /// Header of the country-name column.
    #[arg(short, long, default_value = "Country and area")]
    country_column: String,

    /// Rows to skip after the header.
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,
}

// ── Aggregation ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct RegionMeans {
    /// Year column headers, in input order.
    year_headers: Vec<String>,
    /// One row per region with at least one value, in selector order.
    rows: Vec<(Region, Vec<Option<f64>>)>,
}

/// Columns whose header carries a year, other than the country column.
fn year_columns(headers: &[String], country_idx: usize) -> Vec<(usize, String)> {
    headers
        .iter()
        .enumerate()
        .filter(|&(i, h)| i != country_idx && parse_year_header(h).is_some())
        .map(|(i, h)| (i, h.clone()))
        .collect()
}

fn aggregate(table: &Table, country_column: &str, skip_rows: usize) -> Result<RegionMeans> {
    let country_idx = table.column_index(&ColumnRef::name(country_column))?;
    let years = year_columns(table.headers(), country_idx);
    if years.is_empty() {
        warn!(source = table.source_name(), "no year columns found");
    }

    // region → per-year collected values
    let mut buckets: BTreeMap<Region, Vec<Vec<f64>>> = BTreeMap::new();
    let mut skipped = 0usize;
    for row in table.rows().iter().skip(skip_rows) {
        let Some(country) = text_cell(row, country_idx) else {
            continue;
        };
        let region = classify(country);
        if !region.is_known() {
            debug!(country, "no region for country");
            skipped += 1;
            continue;
        }
        let bucket = buckets
            .entry(region)
            .or_insert_with(|| vec![Vec::new(); years.len()]);
        for (slot, &(idx, _)) in bucket.iter_mut().zip(&years) {
            if let Some(v) = number_cell(row, idx) {
                slot.push(v);
            }
        }
    }

    let rows: Vec<(Region, Vec<Option<f64>>)> = Region::KNOWN
        .iter()
        .filter_map(|region| {
            let bucket = buckets.get(region)?;
            let means: Vec<Option<f64>> = bucket.iter().map(|vals| mean(vals)).collect();
            means.iter().any(Option::is_some).then_some((*region, means))
        })
        .collect();

    info!(
        source = table.source_name(),
        regions = rows.len(),
        years = years.len(),
        skipped_countries = skipped,
        "aggregated region means"
    );
    Ok(RegionMeans {
        year_headers: years.into_iter().map(|(_, h)| h).collect(),
        rows,
    })
}

fn write_means<W: Write>(writer: W, means: &RegionMeans) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec![REGION_COLUMN.to_string()];
    header.extend(means.year_headers.iter().cloned());
    wtr.write_record(&header)?;
    for (region, values) in &means.rows {
        let mut record = vec![region.label().to_string()];
        record.extend(values.iter().map(|v| v.map(|x| x.to_string()).unwrap_or_default()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let table = Table::from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let means = aggregate(&table, &args.country_column, args.skip_rows)?;

    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_means(file, &means)?;
    eprintln!("Wrote {} regions to {}", means.rows.len(), args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biowarrior_core::series::region_series_from_reader;
    use biowarrior_core::Metric;

    const FOREST: &str = r#"CountryID,Country and area,"Forest Area, 1990","Forest Area, 2020",Notes
404,Kenya,6.0,5.0,x
566,Nigeria,20.0,,
250,France,26.0,31.0,
0,World,32.0,31.0,
999,Narnia,1.0,1.0,
"#;

    fn table() -> Table {
        Table::from_reader("forest", FOREST.as_bytes()).unwrap()
    }

    #[test]
    fn year_columns_skip_non_year_headers() {
        let t = table();
        let cols = year_columns(t.headers(), 1);
        assert_eq!(
            cols,
            [(2, "Forest Area, 1990".to_string()), (3, "Forest Area, 2020".to_string())]
        );
    }

    #[test]
    fn means_per_region_over_present_values() {
        let means = aggregate(&table(), "Country and area", 0).unwrap();
        assert_eq!(means.rows.len(), 2);
        let (region, africa) = &means.rows[0];
        assert_eq!(*region, Region::Africa);
        assert_eq!(africa[0], Some(13.0));
        // Nigeria has no 2020 value.
        assert_eq!(africa[1], Some(5.0));
        assert_eq!(means.rows[1], (Region::Europe, vec![Some(26.0), Some(31.0)]));
    }

    #[test]
    fn unknown_country_column_is_an_error() {
        assert!(aggregate(&table(), "Country", 0).is_err());
    }

    #[test]
    fn output_reads_back_as_region_series() {
        let means = aggregate(&table(), "Country and area", 0).unwrap();
        let mut buf = Vec::new();
        write_means(&mut buf, &means).unwrap();

        let series = region_series_from_reader("means", buf.as_slice(), Metric::Forest).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].region, Region::Africa);
        assert_eq!(series[0].first(), Some((1990, 13.0)));
        assert!(series[0].is_declining());
    }
}
