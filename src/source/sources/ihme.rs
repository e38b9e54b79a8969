use std::collections::BTreeMap;

use tracing::info;

use crate::config::SourceConfig;
use crate::constants::labels::IHME_SCENARIO_ALIASES;
use crate::constants::regions::WORLD;
use crate::constants::sources::{IHME_GLOBAL_LOCATION, INHABITANTS_PER_BILLION};
use crate::data::LongRecord;
use crate::errors::PantareiError;
use crate::source::DataAdapter;
use crate::transport::fs::read_csv;
use crate::types::Year;

/// IHME global population forecast export with `location_name`, `year_id`,
/// `scenario_name`, and `val` columns.
///
/// Rows are summed per (location, year, scenario); only the global location
/// is kept, relabelled `WORLD`, in billions.
#[derive(Clone, Debug)]
pub struct IhmeSource {
    config: SourceConfig,
    short_names: bool,
}

impl IhmeSource {
    /// IHME export described by `config`, keeping full scenario names.
    pub fn new(config: SourceConfig) -> Self {
        Self {
            config,
            short_names: false,
        }
    }

    /// Shorten scenario names (`Faster Met Need and Education` -> `Faster`).
    pub fn with_short_scenario_names(mut self, short_names: bool) -> Self {
        self.short_names = short_names;
        self
    }

    fn scenario_label<'a>(&self, scenario: &'a str) -> &'a str {
        if !self.short_names {
            return scenario;
        }
        IHME_SCENARIO_ALIASES
            .iter()
            .find(|(full, _)| *full == scenario)
            .map(|(_, short)| *short)
            .unwrap_or(scenario)
    }
}

impl DataAdapter for IhmeSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        let csv = read_csv(&self.config.path(), self.id(), self.config.header_skip)?;
        let location = csv.column("location_name")?;
        let year_column = csv.column("year_id")?;
        let scenario = csv.column("scenario_name")?;
        let value_column = csv.column("val")?;

        let mut sums: BTreeMap<(String, Year), f64> = BTreeMap::new();
        for row in csv.rows() {
            if row[location].trim() != IHME_GLOBAL_LOCATION {
                continue;
            }
            let Some(year) = csv.number(row, year_column)? else {
                continue;
            };
            let year = year as Year;
            if !self.config.years.contains(&year) {
                continue;
            }
            if let Some(value) = csv.number(row, value_column)? {
                *sums
                    .entry((row[scenario].trim().to_string(), year))
                    .or_default() += value;
            }
        }
        let records: Vec<LongRecord> = sums
            .into_iter()
            .map(|((scenario, year), value)| {
                LongRecord::new(
                    WORLD,
                    self.scenario_label(&scenario),
                    "IHME",
                    year,
                    value / INHABITANTS_PER_BILLION,
                    "billion",
                )
            })
            .collect();
        info!(source = self.id(), records = records.len(), "loaded IHME forecasts");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_export(root: &std::path::Path) {
        fs::write(
            root.join("IHME.csv"),
            "location_name,year_id,scenario_name,val,upper,lower\n\
             Global,2100,Reference,8000000000,9000000000,7000000000\n\
             Global,2100,Reference,800000000,0,0\n\
             Global,2100,SDG Met Need and Education,6300000000,0,0\n\
             Global,2050,Reference,9700000000,0,0\n\
             China,2100,Reference,730000000,0,0\n",
        )
        .unwrap();
    }

    #[test]
    fn keeps_global_rows_summed_in_billions() {
        let temp = tempdir().unwrap();
        write_export(temp.path());
        let config = SourceConfig::new("ihme", temp.path(), "IHME.csv").with_years(vec![2100]);
        let records = IhmeSource::new(config).read().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, "WORLD");
        assert_eq!(records[0].scenario, "Reference");
        assert!((records[0].value - 8.8).abs() < 1e-12);
        assert_eq!(records[1].scenario, "SDG Met Need and Education");
    }

    #[test]
    fn short_scenario_names_are_optional() {
        let temp = tempdir().unwrap();
        write_export(temp.path());
        let config = SourceConfig::new("ihme", temp.path(), "IHME.csv").with_years(vec![2100]);
        let records = IhmeSource::new(config)
            .with_short_scenario_names(true)
            .read()
            .unwrap();
        assert_eq!(records[1].scenario, "SDG");
    }
}
