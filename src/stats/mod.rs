//! Trimming, summary statistics, Welch tests, and magnitude-of-change buckets.
//!
//! Every function here is pure. Empty samples are rejected with
//! `PantareiError::EmptySample` instead of yielding NaN.

use tracing::debug;

use crate::config::{ComparisonConfig, StatisticKind, Tail, TrimFractions};
use crate::constants::stats::OUTER_BUCKET_SCALE;
use crate::data::{BucketCounts, ComparisonResult, LongRecord, WelchOutcome};
use crate::errors::PantareiError;
use crate::types::Year;

pub mod distribution;

use distribution::students_t_cdf;

/// Quantile with linear interpolation between closest ranks.
pub fn quantile(values: &[f64], q: f64) -> Result<f64, PantareiError> {
    if !(0.0..=1.0).contains(&q) {
        return Err(PantareiError::Configuration(format!(
            "quantile {q} outside [0, 1]"
        )));
    }
    if values.is_empty() {
        return Err(PantareiError::EmptySample(format!("quantile {q}")));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, PantareiError> {
    if values.is_empty() {
        return Err(PantareiError::EmptySample("mean".to_string()));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by `n`).
pub fn variance(values: &[f64]) -> Result<f64, PantareiError> {
    let center = mean(values)?;
    let squares: f64 = values.iter().map(|value| (value - center).powi(2)).sum();
    Ok(squares / values.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Result<f64, PantareiError> {
    Ok(variance(values)?.sqrt())
}

/// Remove the lowest `low` and highest `high` share of `sample`.
///
/// `floor(low * n)` values are cut from the bottom and `floor(high * n)` from
/// the top of the sorted sample. Survivors keep their input order. Exact zeros
/// are then discarded, since zero marks a trimmed slot in the source data.
pub fn trim(sample: &[f64], fractions: TrimFractions) -> Vec<f64> {
    let n = sample.len();
    let low_idx = (fractions.low * n as f64) as usize;
    let up_idx = n.saturating_sub((fractions.high * n as f64) as usize);
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|a, b| sample[*a].total_cmp(&sample[*b]));
    let mut keep = vec![false; n];
    for idx in order.iter().take(up_idx).skip(low_idx) {
        keep[*idx] = true;
    }
    sample
        .iter()
        .zip(keep)
        .filter(|(value, kept)| *kept && **value != 0.0)
        .map(|(value, _)| *value)
        .collect()
}

/// Statistic, variance, and size of one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStat {
    /// Requested statistic.
    pub value: f64,
    /// Population variance of the sample.
    pub variance: f64,
    /// Number of values.
    pub count: usize,
}

/// Compute `kind` on `sample`; `Percentile` requires `quantile`.
pub fn summary_stat(
    sample: &[f64],
    kind: StatisticKind,
    quantile_value: Option<f64>,
) -> Result<SummaryStat, PantareiError> {
    let value = match kind {
        StatisticKind::Mean => mean(sample)?,
        StatisticKind::StdDev => std_dev(sample)?,
        StatisticKind::Percentile => {
            let q = quantile_value.ok_or_else(|| {
                PantareiError::Configuration("percentile statistic needs a quantile".to_string())
            })?;
            quantile(sample, q)?
        }
    };
    Ok(SummaryStat {
        value,
        variance: variance(sample)?,
        count: sample.len(),
    })
}

/// Welch's unequal-variance t-test between two sample statistics.
///
/// Degrees of freedom follow Welch-Satterthwaite. With a single observation in
/// sample 2 only sample 1 contributes to the denominator. When both variances
/// are zero the statistic is 0 (equal values) or infinite, and the degrees of
/// freedom fall back to `n1 + n2 - 2`.
pub fn welch_test(
    v1: f64,
    var1: f64,
    n1: usize,
    v2: f64,
    var2: f64,
    n2: usize,
    tail: Tail,
) -> Result<WelchOutcome, PantareiError> {
    if n1 < 2 {
        return Err(PantareiError::EmptySample(format!(
            "welch test needs at least two values in sample 1, got {n1}"
        )));
    }
    if n2 == 0 {
        return Err(PantareiError::EmptySample("welch test sample 2".to_string()));
    }
    let se1 = var1 / n1 as f64;
    let se2 = var2 / n2 as f64;
    let pooled = se1 + se2;
    let diff = v1 - v2;

    let t = if pooled > 0.0 {
        diff / pooled.sqrt()
    } else if diff == 0.0 {
        0.0
    } else {
        diff.signum() * f64::INFINITY
    };

    let denominator = if n2 > 1 {
        se1.powi(2) / (n1 - 1) as f64 + se2.powi(2) / (n2 - 1) as f64
    } else {
        se1.powi(2) / (n1 - 1) as f64
    };
    let mut degrees_of_freedom = pooled.powi(2) / denominator;
    if !degrees_of_freedom.is_finite() || degrees_of_freedom <= 0.0 {
        degrees_of_freedom = ((n1 + n2).saturating_sub(2)).max(1) as f64;
    }

    let p_value = tail_probability(t, degrees_of_freedom, tail);
    Ok(WelchOutcome {
        t,
        degrees_of_freedom,
        p_value,
    })
}

fn tail_probability(t: f64, df: f64, tail: Tail) -> f64 {
    match tail {
        Tail::Less => students_t_cdf(t, df),
        Tail::Greater => students_t_cdf(-t, df),
        Tail::TwoSided => (2.0 * students_t_cdf(-t.abs(), df)).min(1.0),
    }
}

/// Bucket each `sample1 - reference` deviation into five ordered intervals.
///
/// Edges are `|reference| * multipliers`; the outer buckets extend to
/// `OUTER_BUCKET_SCALE` times the outer edges. Intervals are right-closed and
/// deviations beyond the outer buckets are not counted.
pub fn categorize(
    sample1: &[f64],
    reference: f64,
    multipliers: [f64; 4],
) -> Result<BucketCounts, PantareiError> {
    let scale = reference.abs();
    let edges = [
        OUTER_BUCKET_SCALE * multipliers[0] * scale,
        multipliers[0] * scale,
        multipliers[1] * scale,
        multipliers[2] * scale,
        multipliers[3] * scale,
        OUTER_BUCKET_SCALE * multipliers[3] * scale,
    ];
    if !edges.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(PantareiError::Configuration(format!(
            "bucket edges {edges:?} are not strictly increasing (reference {reference})"
        )));
    }
    let mut buckets = BucketCounts::default();
    for value in sample1 {
        let deviation = value - reference;
        if let Some(idx) = edges
            .windows(2)
            .position(|pair| deviation > pair[0] && deviation <= pair[1])
        {
            buckets.counts[idx] += 1;
        }
    }
    Ok(buckets)
}

fn values_for_year(records: &[LongRecord], year: Year) -> Vec<f64> {
    records
        .iter()
        .filter(|record| record.year == year)
        .map(|record| record.value)
        .collect()
}

/// Compare two ensembles for every configured year.
///
/// Sample 2 provides the reference statistic (untrimmed) against which each
/// sample-1 value is bucketed; the Welch test runs on the trimmed samples.
pub fn compare_years(
    sample1: &[LongRecord],
    sample2: &[LongRecord],
    config: &ComparisonConfig,
) -> Result<Vec<ComparisonResult>, PantareiError> {
    let q = config.statistic_quantile();
    let mut results = Vec::with_capacity(config.years.len());
    for year in &config.years {
        let first = values_for_year(sample1, *year);
        let second = values_for_year(sample2, *year);
        let reference = summary_stat(&second, config.statistic, q)?.value;
        let buckets = categorize(&first, reference, config.bucket_multipliers)?;

        let trimmed1 = trim(&first, config.trim_sample1);
        let trimmed2 = trim(&second, config.trim_sample2);
        let stat1 = summary_stat(&trimmed1, config.statistic, q)?;
        let stat2 = summary_stat(&trimmed2, config.statistic, q)?;
        let welch = welch_test(
            stat1.value,
            stat1.variance,
            stat1.count,
            stat2.value,
            stat2.variance,
            stat2.count,
            config.tail,
        )?;
        debug!(
            year = *year,
            sample1 = first.len(),
            sample2 = second.len(),
            t = welch.t,
            p = welch.p_value,
            "compared year"
        );
        results.push(ComparisonResult {
            year: *year,
            buckets,
            welch,
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert!((quantile(&values, 0.5).unwrap() - 2.5).abs() < EPS);
        assert!((quantile(&values, 0.0).unwrap() - 1.0).abs() < EPS);
        assert!((quantile(&values, 1.0).unwrap() - 4.0).abs() < EPS);
        assert!((quantile(&values, 0.25).unwrap() - 1.75).abs() < EPS);
        assert!(matches!(
            quantile(&values, 1.5),
            Err(PantareiError::Configuration(_))
        ));
        assert!(matches!(
            quantile(&[], 0.5),
            Err(PantareiError::EmptySample(_))
        ));
    }

    #[test]
    fn variance_divides_by_count() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values).unwrap() - 5.0).abs() < EPS);
        assert!((variance(&values).unwrap() - 4.0).abs() < EPS);
        assert!((std_dev(&values).unwrap() - 2.0).abs() < EPS);
    }

    #[test]
    fn trim_removes_one_value_from_each_end_of_ten() {
        let sample = [5.0, 1.0, 9.0, 3.0, 10.0, 2.0, 8.0, 4.0, 7.0, 6.0];
        let trimmed = trim(&sample, TrimFractions::new(0.1, 0.1).unwrap());
        assert_eq!(trimmed, vec![5.0, 9.0, 3.0, 2.0, 8.0, 4.0, 7.0, 6.0]);
    }

    #[test]
    fn trim_drops_zero_placeholders() {
        let sample = [0.0, 3.0, 1.0, 2.0];
        assert_eq!(trim(&sample, TrimFractions::none()), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn summary_stat_requires_quantile_for_percentile() {
        let sample = [1.0, 2.0, 3.0];
        let stat = summary_stat(&sample, StatisticKind::Percentile, Some(0.5)).unwrap();
        assert!((stat.value - 2.0).abs() < EPS);
        assert_eq!(stat.count, 3);
        assert!(summary_stat(&sample, StatisticKind::Percentile, None).is_err());
        assert!(summary_stat(&[], StatisticKind::Mean, None).is_err());
    }

    #[test]
    fn welch_on_identical_samples_has_zero_statistic() {
        let outcome = welch_test(10.0, 4.0, 20, 10.0, 4.0, 20, Tail::TwoSided).unwrap();
        assert!(outcome.t.abs() < EPS);
        assert!((outcome.p_value - 1.0).abs() < EPS);
        assert!((outcome.degrees_of_freedom - 38.0).abs() < EPS);
        let one_sided = welch_test(10.0, 4.0, 20, 10.0, 4.0, 20, Tail::Less).unwrap();
        assert!((one_sided.p_value - 0.5).abs() < EPS);
    }

    #[test]
    fn welch_tails_are_complementary() {
        let less = welch_test(11.0, 4.0, 10, 10.0, 9.0, 12, Tail::Less).unwrap();
        let greater = welch_test(11.0, 4.0, 10, 10.0, 9.0, 12, Tail::Greater).unwrap();
        let two = welch_test(11.0, 4.0, 10, 10.0, 9.0, 12, Tail::TwoSided).unwrap();
        assert!(less.t > 0.0);
        assert!((less.p_value + greater.p_value - 1.0).abs() < 1e-9);
        assert!((two.p_value - 2.0 * greater.p_value).abs() < 1e-9);
    }

    #[test]
    fn welch_single_reference_value_uses_sample_one_degrees_of_freedom() {
        let outcome = welch_test(12.0, 4.0, 5, 10.0, 0.0, 1, Tail::TwoSided).unwrap();
        assert!((outcome.degrees_of_freedom - 4.0).abs() < EPS);
        assert!((outcome.t - 2.0 / (0.8_f64).sqrt()).abs() < EPS);
    }

    #[test]
    fn welch_rejects_tiny_samples() {
        assert!(welch_test(1.0, 0.0, 1, 1.0, 0.0, 3, Tail::TwoSided).is_err());
        assert!(welch_test(1.0, 0.0, 3, 1.0, 0.0, 0, Tail::TwoSided).is_err());
    }

    #[test]
    fn categorize_puts_reference_equal_values_in_nearest() {
        let buckets = categorize(&[50.0; 6], 50.0, [-0.1, -0.01, 0.01, 0.1]).unwrap();
        assert_eq!(buckets.get("nearest"), Some(6));
        assert_eq!(buckets.total(), 6);
    }

    #[test]
    fn categorize_uses_right_closed_intervals() {
        // Reference 100: edges -1000, -10, -1, 1, 10, 1000.
        let sample = [90.0, 95.0, 99.0, 101.0, 105.0, 150.0, 2000.0];
        let buckets = categorize(&sample, 100.0, [-0.1, -0.01, 0.01, 0.1]).unwrap();
        assert_eq!(buckets.counts, [1, 2, 1, 1, 1]);
    }

    #[test]
    fn categorize_rejects_degenerate_edges() {
        assert!(categorize(&[1.0], 0.0, [-0.1, -0.01, 0.01, 0.1]).is_err());
        assert!(categorize(&[1.0], 10.0, [0.1, -0.01, 0.01, 0.1]).is_err());
    }

    #[test]
    fn compare_years_buckets_each_year() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        for (idx, value) in [100.0, 102.0, 98.0, 100.5].into_iter().enumerate() {
            first.push(LongRecord::new("World", format!("a{idx}"), "AR6", 2050, value, "million"));
        }
        for (idx, value) in [99.0, 101.0, 100.0].into_iter().enumerate() {
            second.push(LongRecord::new("World", format!("b{idx}"), "AR5", 2050, value, "million"));
        }
        let config = ComparisonConfig::default().with_years(vec![2050]);
        let results = compare_years(&first, &second, &config).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].year, 2050);
        assert_eq!(results[0].buckets.total(), 4);
        assert_eq!(results[0].buckets.get("nearest"), Some(2));
        assert!(results[0].welch.p_value > 0.05);

        let missing = ComparisonConfig::default().with_years(vec![2100]);
        assert!(matches!(
            compare_years(&first, &second, &missing),
            Err(PantareiError::EmptySample(_))
        ));
    }
}
