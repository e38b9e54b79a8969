use std::collections::BTreeMap;

use tracing::info;

use crate::config::SourceConfig;
use crate::constants::sources::SCENARIO_DB_COLUMNS;
use crate::data::{LongRecord, WideRow, WideTable};
use crate::errors::PantareiError;
use crate::source::{DataAdapter, WideSource};
use crate::transform::to_long_all;
use crate::transport::fs::read_csv;
use crate::types::VariableName;
use crate::utils::title_case;

/// Scenario database export with columns
/// `Model, Scenario, Region, Variable, Unit, <years>`.
///
/// Headers are title-cased on read, so `MODEL` and `Model` are equivalent.
/// Only rows of the configured variable are kept.
#[derive(Clone, Debug)]
pub struct ScenarioDatabaseSource {
    config: SourceConfig,
    report: String,
    variable: VariableName,
}

impl ScenarioDatabaseSource {
    /// Database for `report` (e.g. `AR6`) filtered to `variable`.
    pub fn new(
        config: SourceConfig,
        report: impl Into<String>,
        variable: impl Into<VariableName>,
    ) -> Self {
        Self {
            config,
            report: report.into(),
            variable: variable.into(),
        }
    }

    /// Assessment report tag used as dataset label downstream.
    pub fn report(&self) -> &str {
        &self.report
    }

    /// Selected variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl DataAdapter for ScenarioDatabaseSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        Ok(to_long_all(&self.read_wide()?, false))
    }
}

impl WideSource for ScenarioDatabaseSource {
    fn read_wide(&self) -> Result<WideTable, PantareiError> {
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

        let mut table = WideTable::new(self.config.years.clone());
        for row in csv.rows().iter().filter(|row| row[variable] == self.variable) {
            let mut values = BTreeMap::new();
            for (year, column) in &years {
                if let Some(value) = csv.number(row, *column)? {
                    values.insert(*year, value);
                }
            }
            table.push(WideRow {
                region: row[region].clone(),
                scenario: row[scenario].clone(),
                model: row[model].clone(),
                unit: row[unit].clone(),
                values,
            })?;
        }
        info!(
            source = self.id(),
            report = %self.report,
            variable = %self.variable,
            rows = table.rows().len(),
            "loaded scenario database"
        );
        Ok(table)
    }
}
