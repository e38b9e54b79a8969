//! Region totals and the clamped rest-of-world residual.

use std::collections::{BTreeMap, HashMap};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::constants::regions::{MODEL_REGION, WORLD};
use crate::data::{AggregateReport, LongRecord};
use crate::errors::PantareiError;
use crate::regions::RegionScheme;
use crate::types::{CountryName, ModelId, RegionCode, ScenarioName, UnitLabel, Year};

type SeriesKey = (RegionCode, ScenarioName, ModelId);
type SeriesValues = BTreeMap<Year, (f64, UnitLabel)>;

fn is_total(code: &str) -> bool {
    code == WORLD || code == MODEL_REGION
}

/// Sum `records` into world, named-region, and residual tables.
///
/// Each record contributes to every region whose member list holds its
/// `region` label; the world row is whatever the scheme maps to `WORLD`, so it
/// is reported independently of the named regions. Records listed by no
/// region are dropped unless the scheme has a catch-all. An empty `years`
/// keeps every year.
pub fn aggregate(
    records: &[LongRecord],
    scheme: &RegionScheme,
    years: &[Year],
) -> AggregateReport {
    let mut groups: IndexMap<SeriesKey, SeriesValues> = IndexMap::new();
    let mut unmapped: IndexSet<&str> = IndexSet::new();

    for record in records
        .iter()
        .filter(|record| years.is_empty() || years.contains(&record.year))
    {
        let targets = scheme.targets_for(&record.region);
        if targets.is_empty() {
            unmapped.insert(&record.region);
            continue;
        }
        for target in targets {
            let cell = groups
                .entry((
                    target.to_string(),
                    record.scenario.clone(),
                    record.model.clone(),
                ))
                .or_default()
                .entry(record.year)
                .or_insert_with(|| (0.0, record.unit.clone()));
            cell.0 += record.value;
        }
    }
    if !unmapped.is_empty() {
        warn!(
            count = unmapped.len(),
            first = unmapped.first().copied().unwrap_or_default(),
            "records outside every region were excluded"
        );
    }

    let order: HashMap<&str, usize> = scheme
        .mappings()
        .iter()
        .map(|mapping| mapping.code())
        .chain(scheme.catch_all())
        .enumerate()
        .map(|(idx, code)| (code, idx))
        .collect();
    groups.sort_by_cached_key(|(region, _, _), _| order.get(region.as_str()).copied());

    let mut report = AggregateReport::default();
    for ((region, scenario, model), values) in groups {
        let target = if is_total(&region) {
            &mut report.world
        } else {
            &mut report.regions
        };
        for (year, (value, unit)) in values {
            target.push(LongRecord {
                region: region.clone(),
                scenario: scenario.clone(),
                model: model.clone(),
                year,
                value,
                unit,
            });
        }
    }

    if let Some(code) = scheme.rest_of_world_code() {
        report.rest_of_world = rest_of_world(&report.world, &report.regions, &code);
    }
    debug!(
        world = report.world.len(),
        regions = report.regions.len(),
        rest_of_world = report.rest_of_world.len(),
        "aggregated records"
    );
    report
}

/// Sum the listed countries into a single `modelregion` world row.
pub fn aggregate_model_region<I, S>(
    records: &[LongRecord],
    countries: I,
    years: &[Year],
) -> AggregateReport
where
    I: IntoIterator<Item = S>,
    S: Into<CountryName>,
{
    aggregate(records, &RegionScheme::model_region(countries), years)
}

/// `max(0, world - sum(regions))` per scenario, model, and year.
fn rest_of_world(world: &[LongRecord], regions: &[LongRecord], code: &str) -> Vec<LongRecord> {
    let mut region_sums: HashMap<(&str, &str, Year), f64> = HashMap::new();
    for record in regions {
        *region_sums
            .entry((record.scenario.as_str(), record.model.as_str(), record.year))
            .or_default() += record.value;
    }
    world
        .iter()
        .map(|total| {
            let named = region_sums
                .get(&(total.scenario.as_str(), total.model.as_str(), total.year))
                .copied()
                .unwrap_or(0.0);
            LongRecord {
                region: code.to_string(),
                scenario: total.scenario.clone(),
                model: total.model.clone(),
                year: total.year,
                value: (total.value - named).max(0.0),
                unit: total.unit.clone(),
            }
        })
        .collect()
}

/// Replace `base_year` in every world and region series with the historical
/// estimate of that region, then recompute the clamped residual for that year.
///
/// `estimates` holds one value per region (the first one wins). A series whose
/// region has no estimate is a schema error.
pub fn splice_base_year(
    mut report: AggregateReport,
    estimates: &[LongRecord],
    base_year: Year,
) -> Result<AggregateReport, PantareiError> {
    let mut lookup: HashMap<&str, &LongRecord> = HashMap::new();
    for estimate in estimates.iter().filter(|estimate| estimate.year == base_year) {
        lookup.entry(estimate.region.as_str()).or_insert(estimate);
    }

    splice_section(&mut report.world, base_year, |region| {
        lookup.get(region).map(|estimate| estimate.value)
    })?;
    splice_section(&mut report.regions, base_year, |region| {
        lookup.get(region).map(|estimate| estimate.value)
    })?;

    if let Some(code) = report.rest_of_world.first().map(|record| record.region.clone()) {
        let world_estimate = report
            .world
            .iter()
            .find(|record| record.year == base_year)
            .map(|record| record.value)
            .unwrap_or(0.0);
        let mut regional: IndexSet<&str> = IndexSet::new();
        for record in &report.regions {
            regional.insert(&record.region);
        }
        let named: f64 = regional
            .iter()
            .filter_map(|region| lookup.get(region).map(|estimate| estimate.value))
            .sum();
        let residual = (world_estimate - named).max(0.0);
        splice_section(&mut report.rest_of_world, base_year, |region| {
            (region == code).then_some(residual)
        })?;
    }
    Ok(report)
}

fn splice_section<F>(
    section: &mut Vec<LongRecord>,
    base_year: Year,
    value_for: F,
) -> Result<(), PantareiError>
where
    F: Fn(&str) -> Option<f64>,
{
    let mut series: IndexMap<SeriesKey, UnitLabel> = IndexMap::new();
    for record in section.iter() {
        series
            .entry((
                record.region.clone(),
                record.scenario.clone(),
                record.model.clone(),
            ))
            .or_insert_with(|| record.unit.clone());
    }
    section.retain(|record| record.year != base_year);
    for ((region, scenario, model), unit) in &series {
        let value = value_for(region).ok_or_else(|| {
            PantareiError::schema(
                "estimates",
                format!("no {base_year} estimate for region '{region}'"),
            )
        })?;
        section.push(LongRecord::new(
            region.as_str(),
            scenario.as_str(),
            model.as_str(),
            base_year,
            value,
            unit.as_str(),
        ));
    }
    section.sort_by_key(|record| {
        let position = series.get_index_of(&(
            record.region.clone(),
            record.scenario.clone(),
            record.model.clone(),
        ));
        (position, record.year)
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::{MappingKind, RegionMapping, Taxonomy};

    fn asia_scheme() -> RegionScheme {
        RegionScheme::custom(vec![
            RegionMapping::new(WORLD, [WORLD]),
            RegionMapping::new("R5ASIA", ["China", "India"]),
        ])
    }

    fn values(records: &[LongRecord]) -> Vec<(String, Year, f64)> {
        records
            .iter()
            .map(|record| (record.region.clone(), record.year, record.value))
            .collect()
    }

    #[test]
    fn sums_countries_into_their_region() {
        let records = vec![
            LongRecord::new("China", "50", "UN", 2050, 100.0, "million"),
            LongRecord::new("India", "50", "UN", 2050, 50.0, "million"),
            LongRecord::new("Peru", "50", "UN", 2050, 30.0, "million"),
        ];
        let report = aggregate(&records, &asia_scheme(), &[2050]);
        assert_eq!(values(&report.regions), vec![("R5ASIA".to_string(), 2050, 150.0)]);
        assert!(report.world.is_empty());
    }

    #[test]
    fn residual_is_world_minus_named_regions() {
        let records = vec![
            LongRecord::new("China", "50", "UN", 2050, 100.0, "million"),
            LongRecord::new("India", "50", "UN", 2050, 50.0, "million"),
            LongRecord::new(WORLD, "50", "UN", 2050, 500.0, "million"),
        ];
        let report = aggregate(&records, &asia_scheme(), &[2050]);
        assert!(report.rest_of_world.is_empty());

        let report = aggregate(&records, &asia_scheme().with_rest_of_world("R5OWO"), &[2050]);
        assert_eq!(values(&report.world), vec![(WORLD.to_string(), 2050, 500.0)]);
        assert_eq!(values(&report.regions), vec![("R5ASIA".to_string(), 2050, 150.0)]);
        assert_eq!(
            values(&report.rest_of_world),
            vec![("R5OWO".to_string(), 2050, 350.0)]
        );
    }

    #[test]
    fn reported_world_drives_builtin_residual() {
        let records = vec![
            LongRecord::new("China", "50", "UN", 2050, 100.0, "million"),
            LongRecord::new("India", "50", "UN", 2050, 50.0, "million"),
            LongRecord::new(WORLD, "50", "UN", 2050, 500.0, "million"),
        ];
        let scheme = RegionScheme::ipcc(Taxonomy::R5, MappingKind::Country);
        let summed = aggregate(&records, &scheme, &[2050]);
        assert_eq!(values(&summed.world), vec![(WORLD.to_string(), 2050, 150.0)]);
        assert_eq!(summed.rest_of_world[0].value, 0.0);

        let reported = aggregate(&records, &scheme.with_reported_world(), &[2050]);
        assert_eq!(values(&reported.world), vec![(WORLD.to_string(), 2050, 500.0)]);
        assert_eq!(
            values(&reported.regions),
            vec![("R5ASIA".to_string(), 2050, 150.0)]
        );
        assert_eq!(
            values(&reported.rest_of_world),
            vec![("R5OWO".to_string(), 2050, 350.0)]
        );
    }

    #[test]
    fn residual_clamps_at_zero() {
        let records = vec![
            LongRecord::new(WORLD, "50", "UN", 2050, 100.0, "million"),
            LongRecord::new("China", "50", "UN", 2050, 80.0, "million"),
            LongRecord::new("India", "50", "UN", 2050, 40.0, "million"),
        ];
        let report = aggregate(&records, &asia_scheme().with_rest_of_world("R5OWO"), &[2050]);
        assert_eq!(report.rest_of_world[0].value, 0.0);
    }

    #[test]
    fn builtin_taxonomy_reports_world_regions_and_residual() {
        let records = vec![
            LongRecord::new("China", "50", "UN", 2050, 1300.0, "million"),
            LongRecord::new("Brazil", "50", "UN", 2050, 230.0, "million"),
            LongRecord::new("China", "50", "UN", 2030, 1400.0, "million"),
        ];
        let scheme = RegionScheme::ipcc(Taxonomy::R5, MappingKind::Country);
        let report = aggregate(&records, &scheme, &[2050]);
        assert_eq!(values(&report.world), vec![(WORLD.to_string(), 2050, 1530.0)]);
        assert_eq!(
            values(&report.regions),
            vec![
                ("R5ASIA".to_string(), 2050, 1300.0),
                ("R5LAM".to_string(), 2050, 230.0),
            ]
        );
        assert_eq!(values(&report.rest_of_world), vec![("R5OWO".to_string(), 2050, 0.0)]);
        assert_eq!(report.world[0].unit, report.regions[0].unit);
    }

    #[test]
    fn catch_all_collects_unlisted_countries() {
        let records = vec![
            LongRecord::new("China", "50", "UN", 2050, 100.0, "million"),
            LongRecord::new("Peru", "50", "UN", 2050, 30.0, "million"),
        ];
        let report = aggregate(&records, &asia_scheme().with_catch_all("other"), &[]);
        assert_eq!(
            values(&report.regions),
            vec![
                ("R5ASIA".to_string(), 2050, 100.0),
                ("other".to_string(), 2050, 30.0),
            ]
        );
    }

    #[test]
    fn model_region_becomes_world_row() {
        let records = vec![
            LongRecord::new("Italy", "Median", "UN", 2050, 55.0, "million"),
            LongRecord::new("Spain", "Median", "UN", 2050, 45.0, "million"),
            LongRecord::new("France", "Median", "UN", 2050, 65.0, "million"),
        ];
        let report = aggregate_model_region(&records, ["Italy", "Spain"], &[2050]);
        assert_eq!(values(&report.world), vec![(MODEL_REGION.to_string(), 2050, 100.0)]);
        assert!(report.regions.is_empty());
        assert!(report.rest_of_world.is_empty());
    }

    #[test]
    fn splice_base_year_overwrites_estimates_and_residual() {
        let report = AggregateReport {
            world: vec![
                LongRecord::new(WORLD, "50", "UN", 2020, 1.0, "million"),
                LongRecord::new(WORLD, "50", "UN", 2050, 500.0, "million"),
            ],
            regions: vec![LongRecord::new("R5ASIA", "50", "UN", 2050, 150.0, "million")],
            rest_of_world: vec![LongRecord::new("R5OWO", "50", "UN", 2050, 350.0, "million")],
        };
        let estimates = vec![
            LongRecord::new(WORLD, "Estimates", "UN", 2020, 400.0, "million"),
            LongRecord::new("R5ASIA", "Estimates", "UN", 2020, 120.0, "million"),
        ];
        let spliced = splice_base_year(report, &estimates, 2020).unwrap();
        assert_eq!(
            values(&spliced.world),
            vec![(WORLD.to_string(), 2020, 400.0), (WORLD.to_string(), 2050, 500.0)]
        );
        assert_eq!(spliced.regions[0].year, 2020);
        assert_eq!(spliced.regions[0].value, 120.0);
        assert_eq!(spliced.rest_of_world[0].year, 2020);
        assert_eq!(spliced.rest_of_world[0].value, 280.0);
        assert_eq!(spliced.rest_of_world[0].scenario, "50");
    }

    #[test]
    fn splice_base_year_requires_every_region_estimate() {
        let report = AggregateReport {
            world: vec![LongRecord::new(WORLD, "50", "UN", 2050, 500.0, "million")],
            regions: vec![LongRecord::new("R5LAM", "50", "UN", 2050, 150.0, "million")],
            rest_of_world: Vec::new(),
        };
        let estimates = vec![LongRecord::new(WORLD, "Estimates", "UN", 2020, 400.0, "million")];
        assert!(matches!(
            splice_base_year(report, &estimates, 2020),
            Err(PantareiError::Schema { .. })
        ));
    }
}
