use std::collections::BTreeMap;
use std::fs;

use tempfile::tempdir;

use pantarei::source::ScenarioDatabaseSource;
use pantarei::transform::{QuantileBand, ar_to_long, to_long_all};
use pantarei::{
    LongRecord, SourceConfig, WideRow, WideSource, WideTable, to_long, to_long_min_max, to_wide,
};

fn un_variants() -> WideTable {
    let mut table = WideTable::new(vec![2030, 2050, 2100]);
    for (scenario, values) in [
        ("Medium variant", [8.5, 9.7, 10.4]),
        ("High variant", [8.7, 10.6, 14.0]),
        ("Low variant", [8.3, 8.9, 7.0]),
        ("Constant-fertility", [8.8, 11.0, 17.0]),
    ] {
        table
            .push(WideRow {
                region: "WORLD".to_string(),
                scenario: scenario.to_string(),
                model: "dUN".to_string(),
                unit: "billion".to_string(),
                values: [2030, 2050, 2100].into_iter().zip(values).collect(),
            })
            .unwrap();
    }
    table
}

#[test]
fn long_then_wide_restores_the_table() {
    let table = un_variants();
    let records = to_long(&table, "WORLD", false);
    assert_eq!(records.len(), 12);
    assert_eq!(to_wide(&records).unwrap(), table);
}

#[test]
fn wide_then_long_restores_the_records() {
    let records = vec![
        LongRecord::new("R5ASIA", "SSP1", "IIASA", 2050, 5.1, "billion"),
        LongRecord::new("R5ASIA", "SSP1", "IIASA", 2100, 3.9, "billion"),
        LongRecord::new("R5LAM", "SSP1", "IIASA", 2050, 0.7, "billion"),
    ];
    let table = to_wide(&records).unwrap();
    assert_eq!(table.years(), &[2050, 2100]);
    assert_eq!(table.rows().len(), 2);
    assert_eq!(to_long_all(&table, false), records);
}

#[test]
fn min_max_with_denylist_keeps_two_series() {
    let table = un_variants();
    let selection =
        to_long_min_max(&table, "WORLD", false, &["Constant-fertility"], 2100).unwrap();
    assert_eq!(selection.max_series, "High variant");
    assert_eq!(selection.min_series, "Low variant");
    assert_eq!(selection.records.len(), 6);
}

#[test]
fn assessment_band_drops_tails_per_year() {
    let mut table = WideTable::new(vec![2050]);
    for (idx, value) in [8.0, 9.0, 9.5, 10.0, 12.0].into_iter().enumerate() {
        table
            .push(WideRow {
                region: "World".to_string(),
                scenario: format!("S{idx}"),
                model: format!("M{idx}"),
                unit: "million".to_string(),
                values: BTreeMap::from([(2050, value)]),
            })
            .unwrap();
    }
    let band = QuantileBand::new(0.25, 0.75).unwrap();
    let records = ar_to_long(&table, "World", "AR6", band, &[2050]).unwrap();
    // q(0.25) = 9.0, q(0.75) = 10.0; the band is half-open.
    let kept: Vec<f64> = records.iter().map(|record| record.value).collect();
    assert_eq!(kept, vec![9.0, 9.5]);
    assert!(records.iter().all(|record| record.model == "AR6"));
}

#[test]
fn assessment_band_only_sees_the_selected_variable() {
    let temp = tempdir().unwrap();
    let mut body = String::from("Model,Scenario,Region,Variable,Unit,2050\n");
    for (idx, value) in [8.0, 9.0, 9.5, 10.0, 12.0].into_iter().enumerate() {
        body.push_str(&format!("M{idx},S{idx},World,Population,million,{value}\n"));
        body.push_str(&format!(
            "M{idx},S{idx},World,GDP|PPP,billion US$2010/yr,{}\n",
            value * 1e4
        ));
    }
    fs::write(temp.path().join("ar6.csv"), body).unwrap();
    let config = SourceConfig::new("ar6", temp.path(), "ar6.csv").with_years(vec![2050]);
    let table = ScenarioDatabaseSource::new(config, "AR6", "Population")
        .read_wide()
        .unwrap();
    assert_eq!(table.rows().len(), 5);

    let band = QuantileBand::new(0.25, 0.75).unwrap();
    let records = ar_to_long(&table, "World", "AR6", band, &[2050]).unwrap();
    let kept: Vec<f64> = records.iter().map(|record| record.value).collect();
    assert_eq!(kept, vec![9.0, 9.5]);
    assert!(records.iter().all(|record| record.unit == "million"));
}
