use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};
use serde_json::json;

use crate::aggregate::{aggregate, splice_base_year};
use crate::config::{
    AggregationConfig, ComparisonConfig, SourceConfig, StatisticKind, Tail, TrimFractions,
};
use crate::constants::years::BASE_YEAR;
use crate::data::LongRecord;
use crate::metadata::ScenarioMetadata;
use crate::metrics::count_scenarios;
use crate::regions::{MappingKind, catalog};
use crate::source::{
    DataAdapter, ScenarioDatabaseSource, UnDeterministicSource, UnProbabilisticSource,
};
use crate::stats::compare_years;
use crate::types::Year;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Country,
    Proxy,
}

impl From<KindArg> for MappingKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Country => MappingKind::Country,
            KindArg::Proxy => MappingKind::Proxy,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatisticArg {
    Mean,
    StdDev,
    Percentile,
}

impl From<StatisticArg> for StatisticKind {
    fn from(value: StatisticArg) -> Self {
        match value {
            StatisticArg::Mean => StatisticKind::Mean,
            StatisticArg::StdDev => StatisticKind::StdDev,
            StatisticArg::Percentile => StatisticKind::Percentile,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TailArg {
    Less,
    Greater,
    TwoSided,
}

impl From<TailArg> for Tail {
    fn from(value: TailArg) -> Self {
        match value {
            TailArg::Less => Tail::Less,
            TailArg::Greater => Tail::Greater,
            TailArg::TwoSided => Tail::TwoSided,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "region_report",
    disable_help_subcommand = true,
    about = "Aggregate UN country projections into IPCC regions",
    long_about = "Read UN probabilistic sheet exports, sum countries into the world, each IPCC region, and the rest-of-world residual, and print the result as JSON.",
    after_help = "Sheets are read from <ROOT>/<WORKBOOK>__<sheet>.csv with the UN 16-row preamble."
)]
/// CLI for `region_report`.
///
/// Common usage:
/// - R5 regions: `--root data/un --workbook WPP2022`
/// - R10 proxies: `--regions 10 --kind proxy`
/// - Single custom region: repeat `--model-region <COUNTRY>`
/// - Base-year splice: `--estimates WPP2022_DET`
struct RegionReportCli {
    #[arg(long, value_name = "DIR", help = "Directory holding the sheet exports")]
    root: PathBuf,
    #[arg(long, value_name = "STEM", help = "Workbook stem of the probabilistic sheets")]
    workbook: String,
    #[arg(
        long,
        default_value_t = 5,
        value_parser = parse_region_count,
        help = "Region count of the IPCC taxonomy (1, 5, 6 or 10)"
    )]
    regions: usize,
    #[arg(long, value_enum, default_value = "country", help = "Mapping vocabulary")]
    kind: KindArg,
    #[arg(
        long = "model-region",
        value_name = "COUNTRY",
        help = "Country summed into a single model region, repeat as needed"
    )]
    model_region: Vec<String>,
    #[arg(
        long = "reported-world",
        help = "Use the sheet's WORLD row as the world total instead of summing countries"
    )]
    reported_world: bool,
    #[arg(long = "year", value_name = "YEAR", help = "Year to aggregate, repeat as needed")]
    years: Vec<Year>,
    #[arg(
        long,
        value_name = "STEM",
        help = "Workbook stem holding an Estimates sheet to splice in for the base year"
    )]
    estimates: Option<String>,
    #[arg(long, help = "Pretty-print the JSON output")]
    pretty: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "compare_reports",
    disable_help_subcommand = true,
    about = "Compare two scenario databases year by year",
    long_about = "Bucket the scenarios of the first database against a reference statistic of the second, run a Welch test between both ensembles, and print the result as JSON."
)]
/// CLI for `compare_reports`.
///
/// Common usage:
/// - `--first ar6.csv --second ar5.csv --region WORLD`
/// - Trim 5% from both ends of sample 1: `--trim-first 0.05,0.05`
/// - Restrict sample 1 to one climate category: `--metadata AR6_meta.csv --category C1`
struct CompareReportsCli {
    #[arg(long, value_name = "PATH", help = "Scenario database compared (sample 1)")]
    first: PathBuf,
    #[arg(long, value_name = "PATH", help = "Reference scenario database (sample 2)")]
    second: PathBuf,
    #[arg(long, default_value = "WORLD", help = "Region compared")]
    region: String,
    #[arg(long, default_value = "Population", help = "Database variable compared")]
    variable: String,
    #[arg(long, value_enum, default_value = "mean", help = "Statistic compared")]
    statistic: StatisticArg,
    #[arg(long, default_value_t = 0.5, help = "Quantile used with --statistic percentile")]
    quantile: f64,
    #[arg(long, value_enum, default_value = "two-sided", help = "Alternative hypothesis")]
    tail: TailArg,
    #[arg(
        long = "trim-first",
        value_name = "LOW,HIGH",
        value_parser = parse_trim_arg,
        help = "Shares trimmed from the ends of sample 1"
    )]
    trim_first: Option<TrimFractions>,
    #[arg(
        long = "trim-second",
        value_name = "LOW,HIGH",
        value_parser = parse_trim_arg,
        help = "Shares trimmed from the ends of sample 2"
    )]
    trim_second: Option<TrimFractions>,
    #[arg(long = "year", value_name = "YEAR", help = "Year compared, repeat as needed")]
    years: Vec<Year>,
    #[arg(long, value_name = "PATH", help = "Scenario metadata sheet")]
    metadata: Option<PathBuf>,
    #[arg(
        long,
        requires = "metadata",
        help = "Keep only sample-1 scenarios of this climate category"
    )]
    category: Option<String>,
    #[arg(long, help = "Pretty-print the JSON output")]
    pretty: bool,
}

/// Aggregate UN probabilistic country projections into regions and print JSON.
pub fn run_region_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<RegionReportCli, _>(
        std::iter::once("region_report".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = AggregationConfig::default()
        .with_region_count(cli.regions)?
        .with_kind(cli.kind.into())
        .with_reported_world(cli.reported_world)
        .with_model_region(cli.model_region);
    if !cli.years.is_empty() {
        config = config.with_years(cli.years);
    }

    let source_config = SourceConfig::new("un_probabilistic", &cli.root, cli.workbook.as_str())
        .with_years(config.years.clone());
    let records = UnProbabilisticSource::new(source_config).read()?;

    let unmapped = if config.model_region.is_empty() {
        let names = records.iter().map(|record| record.region.as_str());
        catalog().unmapped(config.taxonomy, config.kind, names)
    } else {
        Vec::new()
    };

    let scheme = config.scheme();
    let mut report = aggregate(&records, &scheme, &config.years);
    if let Some(stem) = cli.estimates {
        let estimates_config = SourceConfig::new("un_estimates", &cli.root, stem);
        let estimates = UnDeterministicSource::new(estimates_config).read_estimates(BASE_YEAR)?;
        let estimates = aggregate(&estimates, &scheme, &[BASE_YEAR]);
        let mut totals = estimates.world;
        totals.extend(estimates.regions);
        report = splice_base_year(report, &totals, BASE_YEAR)?;
    }

    let output = json!({
        "taxonomy": config.taxonomy.to_string(),
        "years": config.years,
        "unmapped": unmapped,
        "report": report,
    });
    print_json(&output, cli.pretty)
}

/// Compare two scenario databases year by year and print JSON.
pub fn run_compare_reports<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<CompareReportsCli, _>(
        std::iter::once("compare_reports".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = ComparisonConfig::default()
        .with_statistic(cli.statistic.into())
        .with_tail(cli.tail.into())
        .with_trim(
            cli.trim_first.unwrap_or_default(),
            cli.trim_second.unwrap_or_default(),
        );
    if matches!(cli.statistic, StatisticArg::Percentile) {
        config = config.with_percentile(cli.quantile);
    }
    if !cli.years.is_empty() {
        config = config.with_years(cli.years);
    }

    let mut first = read_region(&cli.first, "first", &cli.variable, &cli.region, &config.years)?;
    let second = read_region(&cli.second, "second", &cli.variable, &cli.region, &config.years)?;

    if let (Some(path), Some(category)) = (&cli.metadata, &cli.category) {
        let metadata = ScenarioMetadata::from_csv(path)?;
        first.retain(|record| metadata.category_for(&record.scenario) == category.as_str());
    }

    let results = compare_years(&first, &second, &config)?;
    let output = json!({
        "region": cli.region,
        "variable": cli.variable,
        "config": config,
        "first_counts": count_scenarios(&first, &cli.region, &config.years),
        "second_counts": count_scenarios(&second, &cli.region, &config.years),
        "results": results,
    });
    print_json(&output, cli.pretty)
}

fn read_region(
    path: &std::path::Path,
    label: &str,
    variable: &str,
    region: &str,
    years: &[Year],
) -> Result<Vec<LongRecord>, Box<dyn Error>> {
    let root = path.parent().map(PathBuf::from).unwrap_or_default();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("--{label} must name a file, got '{}'", path.display()))?;
    let config = SourceConfig::new(label, root, file_name).with_years(years.to_vec());
    let mut records = ScenarioDatabaseSource::new(config, label, variable).read()?;
    records.retain(|record| record.region == region);
    Ok(records)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), Box<dyn Error>> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn parse_region_count(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse --regions value '{raw}' as an integer"))?;
    if !matches!(parsed, 1 | 5 | 6 | 10) {
        return Err(format!("--regions must be 1, 5, 6 or 10, got {parsed}"));
    }
    Ok(parsed)
}

fn parse_trim_arg(raw: &str) -> Result<TrimFractions, String> {
    let Some((low, high)) = raw.split_once(',') else {
        return Err("trim fractions expect LOW,HIGH".to_string());
    };
    let low = low
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid low trim '{}': must be a float", low.trim()))?;
    let high = high
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid high trim '{}': must be a float", high.trim()))?;
    TrimFractions::new(low, high).map_err(|err| err.to_string())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
