//! Reshaping between wide (year-per-column) and long (row-per-year) tables.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::constants::labels::{PERCENTILE_LABELS, SSP_SCENARIO_ORDER};
use crate::data::{LongRecord, WideRow, WideTable};
use crate::errors::PantareiError;
use crate::stats::quantile;
use crate::types::{ModelId, ScenarioName, Year};

/// Map a UN percentile label (`Lower 95`, `Median`, ...) to its cumulative
/// probability (`5`, `50`, ...). Unknown labels pass through unchanged.
pub fn rename_percentile_label(label: &str) -> &str {
    PERCENTILE_LABELS
        .iter()
        .find(|(from, _)| *from == label)
        .map(|(_, to)| *to)
        .unwrap_or(label)
}

/// Emit one record per (series, year) for the rows of `region`.
///
/// Series are emitted in row order, years ascending. Empty cells produce no
/// record. With `rename_labels`, percentile labels become probabilities.
pub fn to_long(table: &WideTable, region: &str, rename_labels: bool) -> Vec<LongRecord> {
    rows_to_long(table.years(), table.rows_for_region(region), rename_labels)
}

/// Emit one record per (series, year) for every row of `table`.
pub fn to_long_all(table: &WideTable, rename_labels: bool) -> Vec<LongRecord> {
    rows_to_long(table.years(), table.rows().iter(), rename_labels)
}

fn rows_to_long<'a>(
    years: &[Year],
    rows: impl Iterator<Item = &'a WideRow>,
    rename_labels: bool,
) -> Vec<LongRecord> {
    let mut records = Vec::new();
    for row in rows {
        let scenario = if rename_labels {
            rename_percentile_label(&row.scenario).to_string()
        } else {
            row.scenario.clone()
        };
        for year in years {
            if let Some(value) = row.value(*year) {
                records.push(LongRecord {
                    region: row.region.clone(),
                    scenario: scenario.clone(),
                    model: row.model.clone(),
                    year: *year,
                    value,
                    unit: row.unit.clone(),
                });
            }
        }
    }
    records
}

/// Long records restricted to the two extreme series at the final year.
#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxSelection {
    /// Records of the two selected series.
    pub records: Vec<LongRecord>,
    /// Series holding the largest value at the final year.
    pub max_series: ScenarioName,
    /// Series holding the smallest value at the final year.
    pub min_series: ScenarioName,
}

/// Keep only the series with the largest and smallest value at `final_year`,
/// ignoring the series named in `denylist`.
///
/// Ties resolve to the series seen first.
pub fn to_long_min_max(
    table: &WideTable,
    region: &str,
    rename_labels: bool,
    denylist: &[&str],
    final_year: Year,
) -> Result<MinMaxSelection, PantareiError> {
    let records: Vec<LongRecord> = to_long(table, region, rename_labels)
        .into_iter()
        .filter(|record| !denylist.contains(&record.scenario.as_str()))
        .collect();

    let mut max: Option<&LongRecord> = None;
    let mut min: Option<&LongRecord> = None;
    for record in records.iter().filter(|record| record.year == final_year) {
        if max.is_none_or(|current| record.value > current.value) {
            max = Some(record);
        }
        if min.is_none_or(|current| record.value < current.value) {
            min = Some(record);
        }
    }
    let (Some(max), Some(min)) = (max, min) else {
        return Err(PantareiError::schema(
            "wide_table",
            format!("region '{region}' has no series reporting year {final_year}"),
        ));
    };
    let max_series = max.scenario.clone();
    let min_series = min.scenario.clone();
    let records = records
        .into_iter()
        .filter(|record| record.scenario == max_series || record.scenario == min_series)
        .collect();
    Ok(MinMaxSelection {
        records,
        max_series,
        min_series,
    })
}

/// Pivot long records back to one row per (region, scenario, model).
///
/// Fails when two records share a series key, since the wide cell would be
/// ambiguous.
pub fn to_wide(records: &[LongRecord]) -> Result<WideTable, PantareiError> {
    let years: BTreeSet<Year> = records.iter().map(|record| record.year).collect();
    let mut rows: IndexMap<(String, String, String), WideRow> = IndexMap::new();
    for record in records {
        let key = (
            record.region.clone(),
            record.scenario.clone(),
            record.model.clone(),
        );
        let row = rows.entry(key).or_insert_with(|| WideRow {
            region: record.region.clone(),
            scenario: record.scenario.clone(),
            model: record.model.clone(),
            unit: record.unit.clone(),
            values: BTreeMap::new(),
        });
        if row.values.insert(record.year, record.value).is_some() {
            return Err(PantareiError::schema(
                record.model.clone(),
                format!(
                    "duplicate value for '{}'/'{}' in {}",
                    record.region, record.scenario, record.year
                ),
            ));
        }
    }
    let mut table = WideTable::new(years.into_iter().collect());
    for row in rows.into_values() {
        table.push(row)?;
    }
    Ok(table)
}

/// Quantile band applied per year to assessment-report values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantileBand {
    /// Lower quantile; values below it are dropped.
    pub low: f64,
    /// Upper quantile; values at or above it are dropped.
    pub high: f64,
}

impl QuantileBand {
    /// Build a band after checking `0 <= low <= high <= 1`.
    pub fn new(low: f64, high: f64) -> Result<Self, PantareiError> {
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
            return Err(PantareiError::Configuration(format!(
                "invalid quantile band ({low}, {high})"
            )));
        }
        Ok(Self { low, high })
    }
}

/// Long records of one assessment-report table for `region`, labelled with
/// `dataset` as model and filtered per year to `[q(low), q(high))`.
///
/// `table` holds a single variable, as returned by
/// `ScenarioDatabaseSource::read_wide` for the variable it was built with.
pub fn ar_to_long(
    table: &WideTable,
    region: &str,
    dataset: &str,
    band: QuantileBand,
    years: &[Year],
) -> Result<Vec<LongRecord>, PantareiError> {
    table.require_years(years)?;
    let rows: Vec<&WideRow> = table.rows_for_region(region).collect();
    let mut records = Vec::new();
    for year in years {
        let values: Vec<f64> = rows.iter().filter_map(|row| row.value(*year)).collect();
        if values.is_empty() {
            continue;
        }
        let low = quantile(&values, band.low)?;
        let high = quantile(&values, band.high)?;
        for row in &rows {
            let Some(value) = row.value(*year) else {
                continue;
            };
            if value >= low && value < high {
                records.push(LongRecord {
                    region: row.region.clone(),
                    scenario: row.scenario.clone(),
                    model: dataset.to_string(),
                    year: *year,
                    value,
                    unit: row.unit.clone(),
                });
            }
        }
    }
    Ok(records)
}

/// Sum SSP records of `region` per (model, scenario, year).
///
/// Only the canonical SSP scenarios are kept, emitted in canonical order per
/// model; models are emitted in name order.
pub fn ssp_to_long(records: &[LongRecord], region: &str, years: &[Year]) -> Vec<LongRecord> {
    let mut sums: BTreeMap<(ModelId, usize, Year), (f64, String)> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|record| record.region == region && years.contains(&record.year))
    {
        let Some(order) = SSP_SCENARIO_ORDER
            .iter()
            .position(|scenario| *scenario == record.scenario)
        else {
            continue;
        };
        let entry = sums
            .entry((record.model.clone(), order, record.year))
            .or_insert_with(|| (0.0, record.unit.clone()));
        entry.0 += record.value;
    }
    sums.into_iter()
        .map(|((model, order, year), (value, unit))| LongRecord {
            region: region.to_string(),
            scenario: SSP_SCENARIO_ORDER[order].to_string(),
            model,
            year,
            value,
            unit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn un_table() -> WideTable {
        let mut table = WideTable::new(vec![2030, 2050, 2100]);
        for (scenario, values) in [
            ("Lower 95", [8.3, 9.1, 8.9]),
            ("Median", [8.5, 9.7, 10.4]),
            ("Upper 95", [8.7, 10.3, 12.4]),
        ] {
            table
                .push(WideRow {
                    region: "WORLD".to_string(),
                    scenario: scenario.to_string(),
                    model: "UN".to_string(),
                    unit: "billion".to_string(),
                    values: [2030, 2050, 2100].into_iter().zip(values).collect(),
                })
                .unwrap();
        }
        table
            .push(WideRow {
                region: "AFRICA".to_string(),
                scenario: "Median".to_string(),
                model: "UN".to_string(),
                unit: "billion".to_string(),
                values: [(2030, 1.7)].into_iter().collect(),
            })
            .unwrap();
        table
    }

    #[test]
    fn rename_percentile_label_maps_known_labels() {
        assert_eq!(rename_percentile_label("Lower 95"), "5");
        assert_eq!(rename_percentile_label("Lower 80"), "20");
        assert_eq!(rename_percentile_label("Median"), "50");
        assert_eq!(rename_percentile_label("Upper 95"), "95");
        assert_eq!(rename_percentile_label("High variant"), "High variant");
    }

    #[test]
    fn to_long_emits_row_per_series_and_year() {
        let records = to_long(&un_table(), "WORLD", true);
        assert_eq!(records.len(), 9);
        assert_eq!(records[0].scenario, "5");
        assert_eq!(records[0].year, 2030);
        assert_eq!(records[4].scenario, "50");
        assert_eq!(records[4].year, 2050);
        assert!((records[4].value - 9.7).abs() < 1e-12);
        assert!(records.iter().all(|record| record.region == "WORLD"));

        let kept = to_long(&un_table(), "WORLD", false);
        assert_eq!(kept[0].scenario, "Lower 95");
    }

    #[test]
    fn to_long_all_covers_every_region() {
        let records = to_long_all(&un_table(), false);
        assert_eq!(records.len(), 10);
        assert_eq!(records.last().map(|record| record.region.as_str()), Some("AFRICA"));
    }

    #[test]
    fn to_long_skips_empty_cells() {
        let records = to_long(&un_table(), "AFRICA", false);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2030);
    }

    #[test]
    fn min_max_selects_extremes_at_final_year() {
        let selection = to_long_min_max(&un_table(), "WORLD", false, &[], 2100).unwrap();
        assert_eq!(selection.max_series, "Upper 95");
        assert_eq!(selection.min_series, "Lower 95");
        assert_eq!(selection.records.len(), 6);

        let selection =
            to_long_min_max(&un_table(), "WORLD", false, &["Upper 95"], 2100).unwrap();
        assert_eq!(selection.max_series, "Median");
    }

    #[test]
    fn min_max_fails_without_final_year_values() {
        let err = to_long_min_max(&un_table(), "AFRICA", false, &[], 2100).unwrap_err();
        assert!(matches!(err, PantareiError::Schema { .. }));
    }

    #[test]
    fn to_wide_rejects_duplicate_series_years() {
        let records = vec![
            LongRecord::new("WORLD", "50", "UN", 2050, 9.7, "billion"),
            LongRecord::new("WORLD", "50", "UN", 2050, 9.8, "billion"),
        ];
        assert!(to_wide(&records).is_err());
    }

    #[test]
    fn ar_to_long_keeps_values_inside_band() {
        let mut table = WideTable::new(vec![2050]);
        for (idx, value) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
            table
                .push(WideRow {
                    region: "World".to_string(),
                    scenario: format!("S{idx}"),
                    model: "MESSAGE".to_string(),
                    unit: "million".to_string(),
                    values: [(2050, value)].into_iter().collect(),
                })
                .unwrap();
        }
        let band = QuantileBand::new(0.25, 0.75).unwrap();
        let records = ar_to_long(&table, "World", "AR6", band, &[2050]).unwrap();
        let values: Vec<f64> = records.iter().map(|record| record.value).collect();
        assert_eq!(values, vec![2.0, 3.0]);
        assert!(records.iter().all(|record| record.model == "AR6"));

        assert!(ar_to_long(&table, "World", "AR6", band, &[2100]).is_err());
        assert!(QuantileBand::new(0.8, 0.2).is_err());
    }

    #[test]
    fn ssp_to_long_sums_countries_in_canonical_order() {
        let records = vec![
            LongRecord::new("R5ASIA", "SSP2", "IIASA", 2050, 1400.0, "million"),
            LongRecord::new("R5ASIA", "SSP1", "IIASA", 2050, 1300.0, "million"),
            LongRecord::new("R5ASIA", "SSP1", "IIASA", 2050, 1500.0, "million"),
            LongRecord::new("R5LAM", "SSP1", "IIASA", 2050, 200.0, "million"),
            LongRecord::new("R5ASIA", "SSPx", "IIASA", 2050, 1.0, "million"),
        ];
        let out = ssp_to_long(&records, "R5ASIA", &[2050]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].scenario, "SSP1");
        assert!((out[0].value - 2800.0).abs() < 1e-9);
        assert_eq!(out[1].scenario, "SSP2");
    }
}
