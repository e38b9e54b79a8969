use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::LongRecord;
use crate::errors::PantareiError;
use crate::stats::mean;
use crate::types::{ModelId, RegionCode, ScenarioName, Year};

/// Number of populated scenarios for one region and year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCount {
    /// Counted region.
    pub region: RegionCode,
    /// Counted year.
    pub year: Year,
    /// Scenarios with a positive value.
    pub count: usize,
}

/// Count strictly positive values of `region` per requested year.
pub fn count_scenarios(records: &[LongRecord], region: &str, years: &[Year]) -> Vec<ScenarioCount> {
    years
        .iter()
        .map(|year| ScenarioCount {
            region: region.to_string(),
            year: *year,
            count: records
                .iter()
                .filter(|record| {
                    record.region == region && record.year == *year && record.value > 0.0
                })
                .count(),
        })
        .collect()
}

/// Deviation of an ensemble from the mean of a reference projection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorEstimate {
    /// Mean absolute error.
    pub mae: f64,
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error as a percentage of the reference mean.
    pub rmse_percent: f64,
}

/// Score `predicted` against the mean of `reference` divided by `scaler`.
///
/// Sums are divided by `n - 1`, with `n` the number of predicted values.
pub fn error_against_reference(
    predicted: &[f64],
    reference: &[f64],
    scaler: f64,
) -> Result<ErrorEstimate, PantareiError> {
    if predicted.len() < 2 {
        return Err(PantareiError::EmptySample(format!(
            "error estimate needs at least two predictions, got {}",
            predicted.len()
        )));
    }
    if scaler == 0.0 {
        return Err(PantareiError::Configuration(
            "error scaler must be non-zero".to_string(),
        ));
    }
    let truth = mean(reference)? / scaler;
    let denominator = (predicted.len() - 1) as f64;
    let mae = predicted.iter().map(|value| (truth - value).abs()).sum::<f64>() / denominator;
    let mse = predicted
        .iter()
        .map(|value| (truth - value).powi(2))
        .sum::<f64>()
        / denominator;
    Ok(ErrorEstimate {
        mae,
        mse,
        rmse_percent: 100.0 * mse.sqrt() / truth,
    })
}

/// Largest value of one series and the year it is reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPeak {
    /// Model of the series.
    pub model: ModelId,
    /// Scenario of the series.
    pub scenario: ScenarioName,
    /// First year reaching the peak.
    pub year: Year,
    /// Peak value.
    pub value: f64,
}

/// Peak of every (model, scenario) series, in first-seen order.
/// Ties keep the earliest year.
pub fn series_peaks(records: &[LongRecord]) -> Vec<SeriesPeak> {
    let mut peaks: IndexMap<(&str, &str), SeriesPeak> = IndexMap::new();
    for record in records {
        let candidate = SeriesPeak {
            model: record.model.clone(),
            scenario: record.scenario.clone(),
            year: record.year,
            value: record.value,
        };
        peaks
            .entry((record.model.as_str(), record.scenario.as_str()))
            .and_modify(|peak| {
                if record.value > peak.value
                    || (record.value == peak.value && record.year < peak.year)
                {
                    *peak = candidate.clone();
                }
            })
            .or_insert(candidate);
    }
    peaks.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scenarios_ignores_non_positive_values() {
        let records = vec![
            LongRecord::new("World", "a", "AR6", 2050, 9.1, "billion"),
            LongRecord::new("World", "b", "AR6", 2050, 0.0, "billion"),
            LongRecord::new("World", "c", "AR6", 2100, 10.2, "billion"),
            LongRecord::new("R5ASIA", "a", "AR6", 2050, 4.8, "billion"),
        ];
        let counts = count_scenarios(&records, "World", &[2050, 2100]);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].count, 1);
        assert_eq!(counts[1].year, 2100);
    }

    #[test]
    fn error_against_reference_uses_n_minus_one() {
        let estimate = error_against_reference(&[9.0, 11.0], &[10.0, 10.0], 1.0).unwrap();
        assert!((estimate.mae - 2.0).abs() < 1e-12);
        assert!((estimate.mse - 2.0).abs() < 1e-12);
        assert!((estimate.rmse_percent - 100.0 * 2.0_f64.sqrt() / 10.0).abs() < 1e-12);

        let scaled = error_against_reference(&[9.0, 11.0], &[10_000.0], 1000.0).unwrap();
        assert!((scaled.mae - estimate.mae).abs() < 1e-12);
        assert!(error_against_reference(&[9.0], &[10.0], 1.0).is_err());
    }

    #[test]
    fn series_peaks_track_maximum_per_series() {
        let records = vec![
            LongRecord::new("World", "SSP1", "SSP", 2050, 8.5, "billion"),
            LongRecord::new("World", "SSP1", "SSP", 2070, 8.9, "billion"),
            LongRecord::new("World", "SSP1", "SSP", 2100, 7.0, "billion"),
            LongRecord::new("World", "SSP3", "SSP", 2100, 12.6, "billion"),
        ];
        let peaks = series_peaks(&records);
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].scenario, "SSP1");
        assert_eq!(peaks[0].year, 2070);
        assert_eq!(peaks[1].value, 12.6);
    }
}
