//! Command-line host for the Biodiversity Warrior pipeline.
//! Prints the figures the dashboard pages show: the merged country table,
//! per-region forest and mining trends, protected-area lookups and the
//! what-if estimate.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use biowarrior_core::impact::deltas_from_sliders;
use biowarrior_core::protected::{GLOBAL_PROTECTED_2018_PCT, THIRTY_BY_THIRTY_TARGET_PCT};
use biowarrior_core::series::series_for;
use biowarrior_core::{
    classify, project_breakdown, records_in_region, Dataset, Metric, Region, SliderState,
    SourceManifest, Variable,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "biowarrior", about = "Explore biodiversity indicators by country and region")]
struct Args {
    /// Directory holding the input tables under their default names.
    #[arg(short, long, default_value = "data", global = true)]
    data_dir: PathBuf,

    /// JSON source manifest; overrides --data-dir.
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the merged, region-tagged country table.
    Merge {
        /// Keep only countries in this region.
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Forest and mining trends for one region.
    Explore {
        #[arg(short, long)]
        region: String,
    },
    /// Terrestrial and marine protected share for a country.
    Protected {
        #[arg(short, long, conflicts_with = "list")]
        country: Option<String>,

        /// List the countries the lookup knows.
        #[arg(long)]
        list: bool,
    },
    /// Estimated change in endangered species for percentage changes in
    /// each variable. Each delta is clamped to [-50, 50].
    WhatIf {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        co2: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        mining: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        marine: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        forest: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        terrestrial: f64,
    },
    /// Region a country name resolves to.
    Classify { name: String },
}

// ── Output types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ExploreReport {
    region: Region,
    country_count: usize,
    forest: Option<SeriesReport>,
    mining: Option<SeriesReport>,
}

#[derive(Serialize)]
struct SeriesReport {
    points: Vec<(i32, f64)>,
    declining: bool,
    slope: Option<f64>,
    fitted: Vec<(i32, f64)>,
}

#[derive(Serialize)]
struct ProtectedReport<'a> {
    country: &'a str,
    protected_pct: Option<f64>,
    shortfall_to_target: Option<f64>,
}

#[derive(Serialize)]
struct WhatIfReport {
    correlations: BTreeMap<Variable, f64>,
    slopes: BTreeMap<Variable, f64>,
    sliders: Vec<SliderState>,
    contributions: BTreeMap<Variable, f64>,
    estimated_change: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open_dataset(args: &Args) -> Result<Dataset> {
    let manifest = match &args.manifest {
        Some(path) => SourceManifest::from_json_file(path)
            .with_context(|| format!("reading manifest {}", path.display()))?,
        None => SourceManifest::in_dir(&args.data_dir),
    };
    Ok(Dataset::new(manifest))
}

fn parse_region(label: &str) -> Result<Region> {
    label
        .parse::<Region>()
        .with_context(|| format!("expected one of: {}", region_choices()))
}

fn region_choices() -> String {
    Region::KNOWN.iter().map(|r| r.label()).collect::<Vec<_>>().join(", ")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn series_report(ds: &Dataset, metric: Metric, region: Region) -> Result<Option<SeriesReport>> {
    let all = ds
        .load_region_series(metric)
        .with_context(|| format!("loading {metric:?} region means"))?;
    Ok(series_for(all, region).map(|s| SeriesReport {
        points: s.series.iter().map(|(&y, &v)| (y, v)).collect(),
        declining: s.is_declining(),
        slope: s.linear_fit().map(|f| f.slope),
        fitted: s.fitted(),
    }))
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_merge(ds: &Dataset, region: Option<&str>, json: bool) -> Result<()> {
    let records = ds.load_and_merge().context("merging country sources")?;
    let selected: Vec<_> = match region {
        Some(label) => records_in_region(records, parse_region(label)?),
        None => records.iter().collect(),
    };
    if json {
        return print_json(&selected);
    }
    println!(
        "{:<40} {:>5} {:<14} {:>9} {:>8} {:>8} {:>8} {:>8}",
        "Country", "ID", "Region", "CO2 %1990", "Mining", "Forest", "Marine", "Terr."
    );
    for r in &selected {
        println!(
            "{:<40} {:>5} {:<14} {:>9.1} {:>8.2} {:>8.1} {:>8.1} {:>8.1}",
            r.country_name,
            r.country_id.as_deref().unwrap_or("-"),
            r.region.label(),
            r.co2_pct_change_since_1990,
            r.mining_value_added_pct,
            r.forest_area_pct_2020,
            r.marine_protected_pct,
            r.terrestrial_protected_pct,
        );
    }
    println!("{} countries", selected.len());
    Ok(())
}

fn run_explore(ds: &Dataset, label: &str, json: bool) -> Result<()> {
    let region = parse_region(label)?;
    let records = ds.load_and_merge().context("merging country sources")?;
    let report = ExploreReport {
        region,
        country_count: records_in_region(records, region).len(),
        forest: series_report(ds, Metric::Forest, region)?,
        mining: series_report(ds, Metric::Mining, region)?,
    };
    if json {
        return print_json(&report);
    }

    println!("{} ({} countries in the merged table)", region.label(), report.country_count);
    match &report.forest {
        Some(forest) => {
            println!("\nForest area");
            for (year, value) in &forest.points {
                println!("  {year}  {value:>8.2}");
            }
            if forest.declining {
                println!("Forest area in {} has declined since {}.", region.label(), forest.points[0].0);
            }
        }
        None => println!("\nNo forest series for {}.", region.label()),
    }
    match &report.mining {
        Some(mining) => {
            println!("\nMining, % of value added");
            for ((year, value), (_, trend)) in mining.points.iter().zip(&mining.fitted) {
                println!("  {year}  {value:>8.2}  (trend {trend:>6.2})");
            }
            if let Some(slope) = mining.slope {
                println!("Trend: {slope:+.3} percentage points per year");
            }
        }
        None => println!("\nNo mining series for {}.", region.label()),
    }
    Ok(())
}

fn run_protected(ds: &Dataset, country: Option<&str>, list: bool, json: bool) -> Result<()> {
    let lookup = ds.protected_areas().context("loading protected-area table")?;
    if list {
        if json {
            return print_json(&lookup.countries());
        }
        for name in lookup.countries() {
            println!("{name}");
        }
        return Ok(());
    }
    let Some(country) = country else {
        bail!("pass --country <NAME> or --list");
    };

    let report = ProtectedReport {
        country,
        protected_pct: lookup.lookup(country),
        shortfall_to_target: lookup.shortfall_to_target(country),
    };
    if json {
        return print_json(&report);
    }
    println!(
        "The 30x30 initiative aims to protect {THIRTY_BY_THIRTY_TARGET_PCT}% of the planet's \
         land and ocean by 2030. In 2018, {GLOBAL_PROTECTED_2018_PCT}% of the world's land \
         and oceans were protected."
    );
    match (report.protected_pct, report.shortfall_to_target) {
        (Some(pct), Some(gap)) if gap > 0.0 => println!(
            "{country}: {pct:.1}% protected, {gap:.1} points short of the target."
        ),
        (Some(pct), _) => println!("{country}: {pct:.1}% protected, target met."),
        _ => println!("{country}: no data."),
    }
    Ok(())
}

fn run_what_if(ds: &Dataset, sliders: Vec<SliderState>, json: bool) -> Result<()> {
    let correlations = ds.correlations().context("loading observation table")?;
    let trends = ds.fit_trends().context("fitting trends")?;
    let deltas = deltas_from_sliders(&sliders);
    let breakdown = project_breakdown(&deltas, &trends);
    info!(total = breakdown.total, "projected impact");

    let report = WhatIfReport {
        correlations,
        slopes: trends.iter().map(|(v, t)| (*v, t.slope)).collect(),
        sliders,
        contributions: breakdown.contributions,
        estimated_change: breakdown.total,
    };
    if json {
        return print_json(&report);
    }

    println!("Correlation with trigger species");
    for (v, r) in &report.correlations {
        println!("  {:<30} {r:>6.2}", v.label());
    }
    println!("\nTrend slopes");
    for (v, slope) in &report.slopes {
        println!("  {:<30} {slope:>10.4}", v.label());
    }
    println!("\nContributions");
    for s in &report.sliders {
        let part = report.contributions.get(&s.variable).copied().unwrap_or(0.0);
        println!("  {:<30} {:>+6.1}%  {part:>+10.2}", s.variable.label(), s.delta_pct);
    }
    println!("\nEstimated change in endangered species: {:.2}", report.estimated_change);
    Ok(())
}

fn run_classify(name: &str, json: bool) -> Result<()> {
    let region = classify(name);
    if json {
        return print_json(&region);
    }
    println!("{}", region.label());
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match &args.command {
        Command::Merge { region } => run_merge(&open_dataset(&args)?, region.as_deref(), args.json),
        Command::Explore { region } => run_explore(&open_dataset(&args)?, region, args.json),
        Command::Protected { country, list } => {
            run_protected(&open_dataset(&args)?, country.as_deref(), *list, args.json)
        }
        Command::WhatIf { co2, mining, marine, forest, terrestrial } => {
            let sliders = vec![
                SliderState::new(Variable::Co2, *co2),
                SliderState::new(Variable::Mining, *mining),
                SliderState::new(Variable::Marine, *marine),
                SliderState::new(Variable::Forest, *forest),
                SliderState::new(Variable::Terrestrial, *terrestrial),
            ];
            run_what_if(&open_dataset(&args)?, sliders, args.json)
        }
        Command::Classify { name } => run_classify(name, args.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn what_if_accepts_negative_deltas() {
        let args = Args::parse_from(["biowarrior", "what-if", "--co2", "-20", "--forest", "15"]);
        let Command::WhatIf { co2, forest, mining, .. } = args.command else {
            panic!("expected what-if");
        };
        assert_eq!((co2, forest, mining), (-20.0, 15.0, 0.0));
    }

    #[test]
    fn region_argument_accepts_labels() {
        assert_eq!(parse_region("north america").unwrap(), Region::NorthAmerica);
        assert!(parse_region("Atlantis").is_err());
    }

    #[test]
    fn json_region_matches_text_label() {
        let region = classify("Canada");
        assert_eq!(serde_json::to_string(&region).unwrap(), format!("\"{}\"", region.label()));
        assert_eq!(region.label(), "North America");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from(["biowarrior", "classify", "Kenya", "--json", "-d", "/tmp"]);
        assert!(args.json);
        assert_eq!(args.data_dir, PathBuf::from("/tmp"));
    }
}
