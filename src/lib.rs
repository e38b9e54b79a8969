#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Cross-source region aggregation with a rest-of-world residual.
pub mod aggregate;
/// Comparator, aggregation, and source configuration types.
pub mod config;
/// Centralized constants used across regions, adapters, and statistics.
pub mod constants;
/// Long/wide record types and comparator outputs.
pub mod data;
/// Reusable report runners shared by the demo binaries.
pub mod example_apps;
/// Scenario metadata lookups (policy and climate category).
pub mod metadata;
/// Scenario counts, error estimates, and series peaks.
pub mod metrics;
/// IPCC region taxonomies and country mappings.
pub mod regions;
/// External data source adapters.
pub mod source;
/// Trimming, summary statistics, Welch tests, and bucket counts.
pub mod stats;
/// Wide/long reshaping.
pub mod transform;
/// Input transports used by sources.
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Header and cell normalization helpers.
pub mod utils;

mod errors;

pub use aggregate::{aggregate, aggregate_model_region, splice_base_year};
pub use config::{
    AggregationConfig, ComparisonConfig, SourceConfig, StatisticKind, Tail, TrimFractions,
};
pub use data::{
    AggregateReport, BucketCounts, ComparisonResult, LongRecord, WelchOutcome, WideRow, WideTable,
};
pub use errors::PantareiError;
pub use metadata::ScenarioMetadata;
pub use regions::{MappingKind, RegionCatalog, RegionMapping, RegionScheme, Taxonomy};
pub use source::{DataAdapter, WideSource};
pub use stats::{categorize, compare_years, trim, welch_test};
pub use transform::{to_long, to_long_min_max, to_wide};
pub use types::{
    CategoryLabel, CountryName, ModelId, RegionCode, ScenarioName, SourceId, UnitLabel,
    VariableName, Year,
};
