use std::collections::{BTreeMap, HashMap};

use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::constants::labels::SSP_SCENARIO_ALIASES;
use crate::constants::regions::WORLD;
use crate::constants::sources::{SCENARIO_DB_COLUMNS, SSP_EXCLUDED_MODEL};
use crate::data::{LongRecord, WideRow, WideTable};
use crate::errors::PantareiError;
use crate::source::{DataAdapter, WideSource};
use crate::transform::to_long_all;
use crate::transport::fs::read_csv;
use crate::types::{CountryName, VariableName};
use crate::utils::title_case;

/// SSP country database (`MODEL, SCENARIO, REGION, VARIABLE, UNIT, <years>`)
/// with ISO3 region codes resolved to country names through a two-column
/// codes file (`ISO, Country`) stored next to it.
///
/// Versioned scenario names (`SSP2_v9_130115`) are collapsed to their pathway.
#[derive(Clone, Debug)]
pub struct SspSource {
    config: SourceConfig,
    codes_file: String,
    variable: VariableName,
}

impl SspSource {
    /// SSP database filtered to the `Population` variable.
    pub fn new(config: SourceConfig, codes_file: impl Into<String>) -> Self {
        Self {
            config,
            codes_file: codes_file.into(),
            variable: "Population".to_string(),
        }
    }

    /// Select another variable (e.g. `GDP|PPP`).
    pub fn with_variable(mut self, variable: impl Into<VariableName>) -> Self {
        self.variable = variable.into();
        self
    }

    /// ISO3 code to country name table.
    pub fn country_codes(&self) -> Result<HashMap<String, CountryName>, PantareiError> {
        let path = self.config.root.join(&self.codes_file);
        let csv = read_csv(&path, self.id(), 0)?;
        if csv.headers().len() < 2 {
            return Err(PantareiError::schema(
                self.id(),
                format!("codes file '{}' needs ISO and country columns", self.codes_file),
            ));
        }
        Ok(csv
            .rows()
            .iter()
            .map(|row| (row[0].trim().to_string(), row[1].trim().to_string()))
            .collect())
    }

    /// World totals per (model, scenario, year), summing every country.
    ///
    /// The country-level GDP model is left out of world groupings.
    pub fn read_world(&self) -> Result<Vec<LongRecord>, PantareiError> {
        let mut sums: BTreeMap<(String, String), BTreeMap<i32, (f64, String)>> = BTreeMap::new();
        for record in self.read()? {
            if record.model == SSP_EXCLUDED_MODEL {
                continue;
            }
            let entry = sums
                .entry((record.model, record.scenario))
                .or_default()
                .entry(record.year)
                .or_insert_with(|| (0.0, record.unit));
            entry.0 += record.value;
        }
        Ok(sums
            .into_iter()
            .flat_map(|((model, scenario), years)| {
                years.into_iter().map(move |(year, (value, unit))| {
                    LongRecord::new(WORLD, scenario.as_str(), model.as_str(), year, value, unit)
                })
            })
            .collect())
    }
}

fn canonical_scenario(scenario: &str) -> &str {
    SSP_SCENARIO_ALIASES
        .iter()
        .find(|(versioned, _)| *versioned == scenario)
        .map(|(_, pathway)| *pathway)
        .unwrap_or(scenario)
}

impl DataAdapter for SspSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        Ok(to_long_all(&self.read_wide()?, false))
    }
}

impl WideSource for SspSource {
    fn read_wide(&self) -> Result<WideTable, PantareiError> {
        let codes = self.country_codes()?;
        let mut csv = read_csv(&self.config.path(), self.id(), self.config.header_skip)?;
        csv.map_headers(title_case);
        let [model, scenario, region, variable, unit] = [
            csv.column(SCENARIO_DB_COLUMNS[0])?,
            csv.column(SCENARIO_DB_COLUMNS[1])?,
            csv.column(SCENARIO_DB_COLUMNS[2])?,
            csv.column(SCENARIO_DB_COLUMNS[3])?,
            csv.column(SCENARIO_DB_COLUMNS[4])?,
        ];
        let years = csv.require_year_columns(&self.config.years)?;

        let mut unknown = Vec::new();
        let mut table = WideTable::new(self.config.years.clone());
        for row in csv.rows().iter().filter(|row| row[variable] == self.variable) {
            let iso = row[region].trim();
            let Some(country) = codes.get(iso) else {
                unknown.push(iso.to_string());
                continue;
            };
            let mut values = BTreeMap::new();
            for (year, column) in &years {
                if let Some(value) = csv.number(row, *column)? {
                    values.insert(*year, value);
                }
            }
            table.push(WideRow {
                region: country.clone(),
                scenario: canonical_scenario(row[scenario].trim()).to_string(),
                model: row[model].clone(),
                unit: row[unit].clone(),
                values,
            })?;
        }
        if !unknown.is_empty() {
            unknown.sort();
            unknown.dedup();
            warn!(
                source = self.id(),
                codes = ?unknown,
                "SSP rows with unknown ISO codes were skipped"
            );
        }
        info!(
            source = self.id(),
            variable = %self.variable,
            rows = table.rows().len(),
            "loaded SSP database"
        );
        Ok(table)
    }
}
