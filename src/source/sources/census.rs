use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::constants::regions::WORLD;
use crate::constants::sources::{CENSUS_EXCLUDED_COLUMNS, INHABITANTS_PER_BILLION};
use crate::data::LongRecord;
use crate::errors::PantareiError;
use crate::source::DataAdapter;
use crate::transport::fs::read_csv;
use crate::types::Year;

const MODEL: &str = "U.S. Census";
const SCENARIO: &str = "Median USC";

/// U.S. Census international database export, one row per country and year
/// with an `IPCCRegion` column already assigned.
///
/// Emits the world total followed by per-region sums, in billions.
#[derive(Clone, Debug)]
pub struct CensusSource {
    config: SourceConfig,
}

impl CensusSource {
    /// Census export described by `config`.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl DataAdapter for CensusSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        let csv = read_csv(&self.config.path(), self.id(), self.config.header_skip)?;
        let dropped = csv
            .headers()
            .iter()
            .filter(|header| CENSUS_EXCLUDED_COLUMNS.contains(&header.as_str()))
            .count();
        debug!(source = self.id(), dropped, "ignoring census indicator columns");

        let year_column = csv.column("Year")?;
        let region_column = csv.column("IPCCRegion")?;
        let population = csv.column("Population")?;

        let mut world: BTreeMap<Year, f64> = BTreeMap::new();
        let mut regions: IndexMap<String, BTreeMap<Year, f64>> = IndexMap::new();
        for row in csv.rows() {
            let Some(year) = csv.number(row, year_column)? else {
                continue;
            };
            let year = year as Year;
            if !self.config.years.contains(&year) {
                continue;
            }
            let Some(value) = csv.number(row, population)? else {
                continue;
            };
            *world.entry(year).or_default() += value;
            *regions
                .entry(row[region_column].trim().to_string())
                .or_default()
                .entry(year)
                .or_default() += value;
        }
        regions.sort_keys();

        let mut records: Vec<LongRecord> = world
            .into_iter()
            .map(|(year, sum)| billions(WORLD, year, sum))
            .collect();
        for (region, sums) in regions {
            records.extend(
                sums.into_iter()
                    .map(|(year, sum)| billions(region.as_str(), year, sum)),
            );
        }
        info!(source = self.id(), records = records.len(), "loaded census totals");
        Ok(records)
    }
}

fn billions(region: &str, year: Year, inhabitants: f64) -> LongRecord {
    LongRecord::new(
        region,
        SCENARIO,
        MODEL,
        year,
        inhabitants / INHABITANTS_PER_BILLION,
        "billion",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sums_regions_and_world_in_billions() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("uscensus.csv"),
            "Country,Year,IPCCRegion,Population,Total Fertility Rate\n\
             China,2050,R5ASIA,1300000000,1.5\n\
             India,2050,R5ASIA,1600000000,1.8\n\
             Brazil,2050,R5LAM,230000000,1.6\n\
             Brazil,2040,R5LAM,225000000,1.6\n",
        )
        .unwrap();
        let config = SourceConfig::new("census", temp.path(), "uscensus.csv")
            .with_years(vec![2050, 2100]);
        let records = CensusSource::new(config).read().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].region, "WORLD");
        assert!((records[0].value - 3.13).abs() < 1e-12);
        assert_eq!(records[0].model, "U.S. Census");
        assert_eq!(records[0].scenario, "Median USC");
        assert_eq!(records[1].region, "R5ASIA");
        assert!((records[1].value - 2.9).abs() < 1e-12);
        assert_eq!(records[2].region, "R5LAM");
    }

    #[test]
    fn missing_population_column_is_schema_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("uscensus.csv"), "Year,IPCCRegion\n2050,R5ASIA\n").unwrap();
        let config = SourceConfig::new("census", temp.path(), "uscensus.csv");
        assert!(matches!(
            CensusSource::new(config).read(),
            Err(PantareiError::Schema { .. })
        ));
    }
}
