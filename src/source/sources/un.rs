use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::constants::sources::{
    THOUSANDS_PER_MILLION, UN_ESTIMATES_SCENARIO, UN_ESTIMATES_SHEET, UN_HEADER_SKIP,
    UN_POPULATION_COLUMN, UN_PROBABILISTIC_SHEETS, UN_REGION_COLUMN, UN_VARIANT_SHEETS,
};
use crate::data::{LongRecord, WideRow, WideTable};
use crate::errors::PantareiError;
use crate::source::{DataAdapter, WideSource};
use crate::transform::to_long_all;
use crate::transport::fs::{SheetDirectory, read_csv};
use crate::types::Year;

const MILLION: &str = "million";

/// UN probabilistic projections: one sheet per percentile band, countries by
/// row and years by column, in thousands. Values are emitted in millions.
///
/// `config.file_name` is the workbook stem; sheets are read from
/// `<stem>__<sheet>.csv` exports under `config.root`.
#[derive(Clone, Debug)]
pub struct UnProbabilisticSource {
    config: SourceConfig,
    model: String,
}

impl UnProbabilisticSource {
    /// Source with the UN header offset applied.
    pub fn new(config: SourceConfig) -> Self {
        Self {
            config: config.with_header_skip(UN_HEADER_SKIP),
            model: "UN".to_string(),
        }
    }

    /// Override the model tag (e.g. `pUN`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl DataAdapter for UnProbabilisticSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        Ok(to_long_all(&self.read_wide()?, false))
    }
}

impl WideSource for UnProbabilisticSource {
    fn read_wide(&self) -> Result<WideTable, PantareiError> {
        let directory = SheetDirectory::new(&self.config.root);
        let mut table = WideTable::new(self.config.years.clone());
        for sheet in UN_PROBABILISTIC_SHEETS {
            let path = directory.sheet(&self.config.file_name, sheet)?;
            let csv = read_csv(&path, self.id(), self.config.header_skip)?;
            if csv.rows().len() <= 1 {
                warn!(source = self.id(), sheet, "sheet has no data rows, skipping");
                continue;
            }
            let region = csv.column(UN_REGION_COLUMN)?;
            let years = csv.require_year_columns(&self.config.years)?;
            for row in csv.rows() {
                let mut values = BTreeMap::new();
                for (year, column) in &years {
                    if let Some(value) = csv.number(row, *column)? {
                        values.insert(*year, value / THOUSANDS_PER_MILLION);
                    }
                }
                table.push(WideRow {
                    region: row[region].trim().to_string(),
                    scenario: sheet.to_string(),
                    model: self.model.clone(),
                    unit: MILLION.to_string(),
                    values,
                })?;
            }
        }
        info!(source = self.id(), rows = table.rows().len(), "loaded UN percentiles");
        Ok(table)
    }
}

/// UN deterministic projections: one long-form sheet per variant with a
/// `Year` column and total population in thousands. Values are emitted in
/// millions. Variant sheets absent from a revision are skipped.
#[derive(Clone, Debug)]
pub struct UnDeterministicSource {
    config: SourceConfig,
    model: String,
}

impl UnDeterministicSource {
    /// Source with the UN header offset applied.
    pub fn new(config: SourceConfig) -> Self {
        Self {
            config: config.with_header_skip(UN_HEADER_SKIP),
            model: "dUN".to_string(),
        }
    }

    /// Override the model tag.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Historical estimates for `year` from the `Estimates` sheet.
    pub fn read_estimates(&self, year: Year) -> Result<Vec<LongRecord>, PantareiError> {
        let directory = SheetDirectory::new(&self.config.root);
        let path = directory.sheet(&self.config.file_name, UN_ESTIMATES_SHEET)?;
        self.read_sheet(&path, UN_ESTIMATES_SCENARIO, &[year])
    }

    fn read_sheet(
        &self,
        path: &std::path::Path,
        scenario: &str,
        years: &[Year],
    ) -> Result<Vec<LongRecord>, PantareiError> {
        let csv = read_csv(path, self.id(), self.config.header_skip)?;
        let region = csv.column(UN_REGION_COLUMN)?;
        let year_column = csv.column("Year")?;
        let population = csv.column(UN_POPULATION_COLUMN)?;
        let mut records = Vec::new();
        for row in csv.rows() {
            let Some(year) = csv.number(row, year_column)? else {
                continue;
            };
            let year = year as Year;
            if !years.contains(&year) {
                continue;
            }
            if let Some(value) = csv.number(row, population)? {
                records.push(LongRecord::new(
                    row[region].trim(),
                    scenario,
                    self.model.as_str(),
                    year,
                    value / THOUSANDS_PER_MILLION,
                    MILLION,
                ));
            }
        }
        Ok(records)
    }
}

impl DataAdapter for UnDeterministicSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn read(&self) -> Result<Vec<LongRecord>, PantareiError> {
        let sheets = SheetDirectory::new(&self.config.root).sheets(&self.config.file_name);
        let mut records = Vec::new();
        for variant in UN_VARIANT_SHEETS {
            let Some(path) = sheets.get(variant) else {
                continue;
            };
            records.extend(self.read_sheet(path, variant, &self.config.years)?);
        }
        if records.is_empty() {
            return Err(PantareiError::SourceUnavailable {
                source_id: self.id().to_string(),
                reason: format!("no variant sheets found for '{}'", self.config.file_name),
            });
        }
        info!(source = self.id(), records = records.len(), "loaded UN variants");
        Ok(records)
    }
}

impl WideSource for UnDeterministicSource {
    fn read_wide(&self) -> Result<WideTable, PantareiError> {
        let mut rows: BTreeMap<(String, String), BTreeMap<Year, f64>> = BTreeMap::new();
        let mut order = Vec::new();
        for record in self.read()? {
            let key = (record.region, record.scenario);
            if !rows.contains_key(&key) {
                order.push(key.clone());
            }
            rows.entry(key).or_default().insert(record.year, record.value);
        }
        let mut table = WideTable::new(self.config.years.clone());
        for key in order {
            let values = rows.remove(&key).unwrap_or_default();
            table.push(WideRow {
                region: key.0,
                scenario: key.1,
                model: self.model.clone(),
                unit: MILLION.to_string(),
                values,
            })?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn preamble() -> String {
        "notes\n".repeat(UN_HEADER_SKIP)
    }

    fn write_probabilistic(root: &Path) {
        for (sheet, scale) in UN_PROBABILISTIC_SHEETS.iter().zip([0.9, 0.95, 1.0, 1.05, 1.1]) {
            let body = format!(
                "{}Index,\"{}\",2050,2100\n1,WORLD,{},{}\n2,China,{},{}\n",
                preamble(),
                UN_REGION_COLUMN,
                9_700_000.0 * scale,
                10_400_000.0 * scale,
                1_300_000.0 * scale,
                770_000.0 * scale,
            );
            fs::write(root.join(format!("WPP2022__{sheet}.csv")), body).unwrap();
        }
    }

    #[test]
    fn probabilistic_sheets_become_millions() {
        let temp = tempdir().unwrap();
        write_probabilistic(temp.path());
        let config = SourceConfig::new("un", temp.path(), "WPP2022").with_years(vec![2050, 2100]);
        let source = UnProbabilisticSource::new(config);
        let table = source.read_wide().unwrap();
        assert_eq!(table.rows().len(), 10);
        let median = table
            .rows()
            .iter()
            .find(|row| row.region == "WORLD" && row.scenario == "Median")
            .unwrap();
        assert!((median.value(2050).unwrap() - 9700.0).abs() < 1e-9);
        assert_eq!(median.unit, "million");
        assert_eq!(source.read().unwrap().len(), 20);
    }

    #[test]
    fn probabilistic_source_requires_every_sheet() {
        let temp = tempdir().unwrap();
        write_probabilistic(temp.path());
        fs::remove_file(temp.path().join("WPP2022__Upper 95.csv")).unwrap();
        let config = SourceConfig::new("un", temp.path(), "WPP2022").with_years(vec![2050]);
        assert!(matches!(
            UnProbabilisticSource::new(config).read_wide(),
            Err(PantareiError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn deterministic_variants_and_estimates() {
        let temp = tempdir().unwrap();
        let header = format!("Index,\"{UN_REGION_COLUMN}\",Year,\"{UN_POPULATION_COLUMN}\"\n");
        fs::write(
            temp.path().join("WPP2022__Low variant.csv"),
            format!("{}{header}1,WORLD,2050,8900000\n2,WORLD,2100,7000000\n", preamble()),
        )
        .unwrap();
        fs::write(
            temp.path().join("WPP2022__High variant.csv"),
            format!("{}{header}1,WORLD,2050,10600000\n2,WORLD,2100,14000000\n", preamble()),
        )
        .unwrap();
        fs::write(
            temp.path().join("WPP2022__Estimates.csv"),
            format!("{}{header}1,WORLD,2019,7700000\n2,WORLD,2020,7800000\n", preamble()),
        )
        .unwrap();
        let config = SourceConfig::new("wpp", temp.path(), "WPP2022").with_years(vec![2050, 2100]);
        let source = UnDeterministicSource::new(config);

        let records = source.read().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].scenario, "High variant");
        assert_eq!(records[0].model, "dUN");
        assert!((records[1].value - 14000.0).abs() < 1e-9);

        let table = source.read_wide().unwrap();
        assert_eq!(table.rows().len(), 2);

        let estimates = source.read_estimates(2020).unwrap();
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].scenario, "Estimates");
        assert!((estimates[0].value - 7800.0).abs() < 1e-9);
    }
}
