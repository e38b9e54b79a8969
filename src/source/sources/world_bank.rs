use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::info;

use crate::config::SourceConfig;
use crate::constants::regions::{WORLD, WORLD_BANK_REGIONS};
use crate::constants::sources::INHABITANTS_PER_BILLION;
use crate::data::{LongRecord, WideRow, WideTable};
use crate::errors::PantareiError;
use crate::source::{DataAdapter, WideSource};
use crate::transform::to_long_all;
use crate::transport::fs::read_csv;
use crate::types::Year;

const MODEL: &str = "World Bank";
const SCENARIO: &str = "Median WB";

/// World Bank population indicator export with `Country Name`, `IPCCRegion`,
/// and `<y> [YR<y>]` year columns.
///
/// Rows outside the R5 regions (aggregates, income groups) are dropped. The
/// wide table holds `WORLD` followed by each region, in billions.
#[derive(Clone, Debug)]
pub struct WorldBankSource {
    config: SourceConfig,
}

impl WorldBankSource {
    /// World Bank export described by `config`.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl DataAdapter for WorldBankSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        Ok(to_long_all(&self.read_wide()?, false))
    }
}

impl WideSource for WorldBankSource {
    fn read_wide(&self) -> Result<WideTable, PantareiError> {
        let csv = read_csv(&self.config.path(), self.id(), self.config.header_skip)?;
        csv.column("Country Name")?;
        let region_column = csv.column("IPCCRegion")?;
        let years = csv.require_year_columns(&self.config.years)?;

        let mut world: BTreeMap<Year, f64> = BTreeMap::new();
        let mut regions: IndexMap<&str, BTreeMap<Year, f64>> = IndexMap::new();
        for row in csv.rows() {
            let region = row[region_column].trim();
            let Some(code) = WORLD_BANK_REGIONS.iter().find(|code| **code == region) else {
                continue;
            };
            for (year, column) in &years {
                if let Some(value) = csv.number(row, *column)? {
                    let value = value / INHABITANTS_PER_BILLION;
                    *world.entry(*year).or_default() += value;
                    *regions.entry(*code).or_default().entry(*year).or_default() += value;
                }
            }
        }
        regions.sort_keys();

        let mut table = WideTable::new(self.config.years.clone());
        table.push(wide_row(WORLD, world))?;
        for (region, values) in regions {
            table.push(wide_row(region, values))?;
        }
        info!(source = self.id(), regions = table.rows().len() - 1, "loaded world bank totals");
        Ok(table)
    }
}

fn wide_row(region: &str, values: BTreeMap<Year, f64>) -> WideRow {
    WideRow {
        region: region.to_string(),
        scenario: SCENARIO.to_string(),
        model: MODEL.to_string(),
        unit: "billion".to_string(),
        values,
    }
}
