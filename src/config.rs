use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::stats::DEFAULT_BUCKET_MULTIPLIERS;
use crate::constants::years::SCENARIO_DB_YEARS;
use crate::errors::PantareiError;
use crate::regions::{MappingKind, RegionScheme, Taxonomy};
use crate::types::{CountryName, SourceId, Year};

/// Summary statistic computed on each sample before testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticKind {
    /// Arithmetic mean.
    Mean,
    /// Population standard deviation.
    StdDev,
    /// Linear-interpolated quantile; the quantile comes from the config.
    Percentile,
}

/// Alternative hypothesis for the Welch test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tail {
    /// Statistic of sample 1 is smaller.
    Less,
    /// Statistic of sample 1 is larger.
    Greater,
    /// Statistics differ.
    TwoSided,
}

/// Fractions trimmed from each end of a sorted sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrimFractions {
    /// Share of lowest values removed.
    pub low: f64,
    /// Share of highest values removed.
    pub high: f64,
}

impl TrimFractions {
    /// Build trim fractions after checking both lie in `[0, 1)` and sum below 1.
    pub fn new(low: f64, high: f64) -> Result<Self, PantareiError> {
        let valid = |f: f64| (0.0..1.0).contains(&f);
        if !valid(low) || !valid(high) || low + high >= 1.0 {
            return Err(PantareiError::Configuration(format!(
                "invalid trim fractions ({low}, {high})"
            )));
        }
        Ok(Self { low, high })
    }

    /// No trimming.
    pub const fn none() -> Self {
        Self {
            low: 0.0,
            high: 0.0,
        }
    }
}

impl Default for TrimFractions {
    fn default() -> Self {
        Self::none()
    }
}

/// Settings for comparing two scenario ensembles year by year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Statistic compared between samples.
    pub statistic: StatisticKind,
    /// Quantile in `[0, 1]`, used with `StatisticKind::Percentile`.
    pub quantile: f64,
    /// Alternative hypothesis of the Welch test.
    pub tail: Tail,
    /// Trimming applied to sample 1 before the test.
    pub trim_sample1: TrimFractions,
    /// Trimming applied to sample 2 before the test.
    pub trim_sample2: TrimFractions,
    /// Multipliers of the reference statistic delimiting the change buckets.
    pub bucket_multipliers: [f64; 4],
    /// Years evaluated.
    pub years: Vec<Year>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            statistic: StatisticKind::Mean,
            quantile: 0.5,
            tail: Tail::TwoSided,
            trim_sample1: TrimFractions::none(),
            trim_sample2: TrimFractions::none(),
            bucket_multipliers: DEFAULT_BUCKET_MULTIPLIERS,
            years: vec![2030, 2050, 2100],
        }
    }
}

impl ComparisonConfig {
    /// Override the compared statistic.
    pub fn with_statistic(mut self, statistic: StatisticKind) -> Self {
        self.statistic = statistic;
        self
    }

    /// Compare a quantile instead of the mean.
    pub fn with_percentile(mut self, quantile: f64) -> Self {
        self.statistic = StatisticKind::Percentile;
        self.quantile = quantile;
        self
    }

    /// Override the test tail.
    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    /// Override trimming for both samples.
    pub fn with_trim(mut self, sample1: TrimFractions, sample2: TrimFractions) -> Self {
        self.trim_sample1 = sample1;
        self.trim_sample2 = sample2;
        self
    }

    /// Override bucket multipliers.
    pub fn with_bucket_multipliers(mut self, multipliers: [f64; 4]) -> Self {
        self.bucket_multipliers = multipliers;
        self
    }

    /// Override evaluated years.
    pub fn with_years(mut self, years: Vec<Year>) -> Self {
        self.years = years;
        self
    }

    /// Quantile passed to the summary statistic, when one applies.
    pub fn statistic_quantile(&self) -> Option<f64> {
        match self.statistic {
            StatisticKind::Percentile => Some(self.quantile),
            _ => None,
        }
    }
}

/// Settings for grouping country records into regions.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregationConfig {
    /// Taxonomy used when no model region is requested.
    pub taxonomy: Taxonomy,
    /// Member vocabulary of the taxonomy tables.
    pub kind: MappingKind,
    /// Countries grouped into `modelregion`; non-empty replaces the taxonomy.
    pub model_region: Vec<CountryName>,
    /// Take the world total from the source's `WORLD` row instead of the
    /// taxonomy's world member list.
    pub reported_world: bool,
    /// Years aggregated.
    pub years: Vec<Year>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::R5,
            kind: MappingKind::Country,
            model_region: Vec::new(),
            reported_world: false,
            years: vec![2030, 2050, 2100],
        }
    }
}

impl AggregationConfig {
    /// Use the taxonomy with `count` regions.
    pub fn with_region_count(mut self, count: usize) -> Result<Self, PantareiError> {
        self.taxonomy = Taxonomy::from_count(count)?;
        Ok(self)
    }

    /// Override the mapping vocabulary.
    pub fn with_kind(mut self, kind: MappingKind) -> Self {
        self.kind = kind;
        self
    }

    /// Aggregate the listed countries into `modelregion`.
    pub fn with_model_region<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CountryName>,
    {
        self.model_region = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Use the reported `WORLD` row as the world total.
    pub fn with_reported_world(mut self, reported: bool) -> Self {
        self.reported_world = reported;
        self
    }

    /// Override aggregated years.
    pub fn with_years(mut self, years: Vec<Year>) -> Self {
        self.years = years;
        self
    }

    /// Region scheme implied by this configuration.
    pub fn scheme(&self) -> RegionScheme {
        if self.model_region.is_empty() {
            let scheme = RegionScheme::ipcc(self.taxonomy, self.kind);
            if self.reported_world {
                scheme.with_reported_world()
            } else {
                scheme
            }
        } else {
            RegionScheme::model_region(self.model_region.iter().cloned())
        }
    }
}

/// Location and layout of one external source file.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceConfig {
    /// Stable adapter identifier used in logs and errors.
    pub source_id: SourceId,
    /// Directory holding the source files.
    pub root: PathBuf,
    /// File name (or workbook stem for sheet exports).
    pub file_name: String,
    /// Rows skipped before the header row.
    pub header_skip: usize,
    /// Years the file must provide.
    pub years: Vec<Year>,
}

impl SourceConfig {
    /// Config with explicit id, root, and file name.
    pub fn new(
        source_id: impl Into<SourceId>,
        root: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            root: root.into(),
            file_name: file_name.into(),
            header_skip: 0,
            years: SCENARIO_DB_YEARS.to_vec(),
        }
    }

    /// Override skipped header rows.
    pub fn with_header_skip(mut self, rows: usize) -> Self {
        self.header_skip = rows;
        self
    }

    /// Override required years.
    pub fn with_years(mut self, years: Vec<Year>) -> Self {
        self.years = years;
        self
    }

    /// Full path of the configured file.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_fractions_validate_bounds() {
        assert!(TrimFractions::new(0.1, 0.1).is_ok());
        assert!(TrimFractions::new(-0.1, 0.1).is_err());
        assert!(TrimFractions::new(0.6, 0.5).is_err());
        assert_eq!(TrimFractions::default(), TrimFractions::none());
    }

    #[test]
    fn comparison_defaults_use_published_buckets() {
        let config = ComparisonConfig::default();
        assert_eq!(config.bucket_multipliers, [-0.1, -0.01, 0.01, 0.1]);
        assert_eq!(config.statistic_quantile(), None);
        let config = config.with_percentile(0.9);
        assert_eq!(config.statistic, StatisticKind::Percentile);
        assert_eq!(config.statistic_quantile(), Some(0.9));
    }

    #[test]
    fn aggregation_scheme_prefers_model_region() {
        let config = AggregationConfig::default().with_region_count(10).unwrap();
        assert_eq!(config.scheme().taxonomy(), Some(Taxonomy::R10));
        let reported = config.clone().with_reported_world(true).scheme();
        assert_eq!(reported.targets_for("China"), vec!["R10CHINA+"]);
        let config = config.with_model_region(["Italy"]);
        assert_eq!(config.scheme().taxonomy(), None);
        assert!(
            AggregationConfig::default()
                .with_region_count(7)
                .is_err()
        );
    }

    #[test]
    fn source_config_joins_path() {
        let config = SourceConfig::new("ihme", "/data/other", "IHME.csv").with_header_skip(2);
        assert_eq!(config.path(), PathBuf::from("/data/other/IHME.csv"));
        assert_eq!(config.header_skip, 2);
    }
}
