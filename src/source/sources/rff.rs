use std::collections::BTreeMap;

use tracing::info;

use crate::config::SourceConfig;
use crate::constants::regions::WORLD;
use crate::constants::sources::{RFF_QUANTILES, THOUSANDS_PER_BILLION};
use crate::data::LongRecord;
use crate::errors::PantareiError;
use crate::source::DataAdapter;
use crate::stats::quantile;
use crate::transport::fs::read_csv;
use crate::types::Year;

/// Resources for the Future sampled world population (`Pop` in thousands,
/// one row per sample and `year`).
///
/// Each configured year is reduced to the 5/20/50/80/95 percentiles of the
/// samples, emitted as `WORLD` series in billions.
#[derive(Clone, Debug)]
pub struct RffSource {
    config: SourceConfig,
}

impl RffSource {
    /// RFF export described by `config`.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl DataAdapter for RffSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        let csv = read_csv(&self.config.path(), self.id(), self.config.header_skip)?;
        let population = csv.column("Pop")?;
        let year_column = csv.column("year")?;

        let mut samples: BTreeMap<Year, Vec<f64>> = BTreeMap::new();
        for row in csv.rows() {
            let Some(year) = csv.number(row, year_column)? else {
                continue;
            };
            let year = year as Year;
            if !self.config.years.contains(&year) {
                continue;
            }
            if let Some(value) = csv.number(row, population)? {
                samples
                    .entry(year)
                    .or_default()
                    .push(value / THOUSANDS_PER_BILLION);
            }
        }

        let mut records = Vec::with_capacity(samples.len() * RFF_QUANTILES.len());
        for (year, values) in &samples {
            for (q, label) in RFF_QUANTILES {
                records.push(LongRecord::new(
                    WORLD,
                    label,
                    "RFF",
                    *year,
                    quantile(values, q)?,
                    "billion",
                ));
            }
        }
        info!(
            source = self.id(),
            years = samples.len(),
            samples = samples.values().map(Vec::len).sum::<usize>(),
            "computed RFF percentiles"
        );
        Ok(records)
    }
}
