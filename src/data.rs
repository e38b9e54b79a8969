use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::stats::BUCKET_LABELS;
use crate::errors::PantareiError;

pub use crate::types::{ModelId, RegionCode, ScenarioName, UnitLabel, Year};

/// Canonical row-per-year record flowing between adapters, aggregator, and comparator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongRecord {
    /// Taxonomy region code or raw country/area label.
    pub region: RegionCode,
    /// Projection scenario or percentile label.
    pub scenario: ScenarioName,
    /// Source/model identifier.
    pub model: ModelId,
    /// Calendar year.
    pub year: Year,
    /// Quantity in `unit`.
    pub value: f64,
    /// Semantic unit of `value`.
    pub unit: UnitLabel,
}

impl LongRecord {
    /// Build a record from its parts.
    pub fn new(
        region: impl Into<RegionCode>,
        scenario: impl Into<ScenarioName>,
        model: impl Into<ModelId>,
        year: Year,
        value: f64,
        unit: impl Into<UnitLabel>,
    ) -> Self {
        Self {
            region: region.into(),
            scenario: scenario.into(),
            model: model.into(),
            year,
            value,
            unit: unit.into(),
        }
    }

    /// Key that must be unique within one aggregated table.
    pub fn series_key(&self) -> (&str, &str, &str, Year) {
        (&self.region, &self.scenario, &self.model, self.year)
    }
}

/// One series of a wide table: a value per year column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WideRow {
    /// Region or country label of the row.
    pub region: RegionCode,
    /// Scenario or percentile label of the row.
    pub scenario: ScenarioName,
    /// Source/model identifier.
    pub model: ModelId,
    /// Unit shared by every cell of the row.
    pub unit: UnitLabel,
    /// Cells keyed by year. Empty source cells are absent.
    pub values: BTreeMap<Year, f64>,
}

impl WideRow {
    /// Value for `year`, when the source cell was populated.
    pub fn value(&self, year: Year) -> Option<f64> {
        self.values.get(&year).copied()
    }
}

/// Raw external-source table with one column per year.
///
/// The year set is fixed when the table is built; rows carrying a year outside
/// that set are rejected so schema drift surfaces at ingestion time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    years: Vec<Year>,
    rows: Vec<WideRow>,
}

impl WideTable {
    /// Create an empty table with the given year columns.
    pub fn new(mut years: Vec<Year>) -> Self {
        years.sort_unstable();
        years.dedup();
        Self {
            years,
            rows: Vec::new(),
        }
    }

    /// Year columns in ascending order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// All rows in insertion order.
    pub fn rows(&self) -> &[WideRow] {
        &self.rows
    }

    /// Append a row after checking its years against the table columns.
    pub fn push(&mut self, row: WideRow) -> Result<(), PantareiError> {
        if let Some(year) = row
            .values
            .keys()
            .find(|year| self.years.binary_search(year).is_err())
        {
            return Err(PantareiError::schema(
                row.model.clone(),
                format!(
                    "row '{}'/'{}' carries year {} outside the table columns",
                    row.region, row.scenario, year
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Fail unless every `expected` year is a column of this table.
    pub fn require_years(&self, expected: &[Year]) -> Result<(), PantareiError> {
        let missing: Vec<String> = expected
            .iter()
            .filter(|year| self.years.binary_search(year).is_err())
            .map(|year| year.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PantareiError::schema(
                "wide_table",
                format!("missing year columns: {}", missing.join(", ")),
            ))
        }
    }

    /// Rows whose region equals `region`.
    pub fn rows_for_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a WideRow> {
        self.rows.iter().filter(move |row| row.region == region)
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of a Welch unequal-variance t-test.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WelchOutcome {
    /// Test statistic.
    pub t: f64,
    /// Satterthwaite degrees of freedom.
    pub degrees_of_freedom: f64,
    /// p-value for the requested tail.
    pub p_value: f64,
}

/// Count of deviations falling into each magnitude-of-change bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    /// Counts ordered from largest decrease to largest increase.
    pub counts: [usize; 5],
}

impl BucketCounts {
    /// Total elements assigned to any bucket.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Count stored under a bucket label, if the label exists.
    pub fn get(&self, label: &str) -> Option<usize> {
        BUCKET_LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .map(|idx| self.counts[idx])
    }

    /// Pairs of bucket label and count, in bucket order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        BUCKET_LABELS.iter().copied().zip(self.counts.iter().copied())
    }
}

/// Comparator output for one evaluated year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Evaluated year.
    pub year: Year,
    /// Sample-1 deviations bucketed against the sample-2 reference statistic.
    pub buckets: BucketCounts,
    /// Welch test between the trimmed samples' statistics.
    pub welch: WelchOutcome,
}

/// World, named-region, and residual tables returned by the aggregator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Totals of the independently reported world aggregate.
    pub world: Vec<LongRecord>,
    /// Totals per named (non-world) region.
    pub regions: Vec<LongRecord>,
    /// World minus the sum of regions, clamped at zero.
    pub rest_of_world: Vec<LongRecord>,
}

impl AggregateReport {
    /// Concatenate the three tables in world, regions, residual order.
    pub fn concat(&self) -> Vec<LongRecord> {
        self.world
            .iter()
            .chain(self.regions.iter())
            .chain(self.rest_of_world.iter())
            .cloned()
            .collect()
    }
}
