use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::labels::UNKNOWN_CATEGORY;
use crate::data::LongRecord;
use crate::errors::PantareiError;
use crate::types::{CategoryLabel, ModelId, ScenarioName};

#[derive(Debug, Deserialize)]
struct MetadataRow {
    #[serde(rename = "Scenario")]
    scenario: ScenarioName,
    #[serde(rename = "Policy_category", default)]
    policy: Option<CategoryLabel>,
    #[serde(rename = "Category_subset", default)]
    category: Option<CategoryLabel>,
}

/// Policy and climate category of one scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioLabels {
    /// Policy category (`P1`, `P2b`, ...).
    pub policy: CategoryLabel,
    /// Climate category (`C1`, ...).
    pub category: CategoryLabel,
}

impl Default for ScenarioLabels {
    fn default() -> Self {
        Self {
            policy: UNKNOWN_CATEGORY.to_string(),
            category: UNKNOWN_CATEGORY.to_string(),
        }
    }
}

/// Scenario name to category lookup read from an assessment metadata sheet.
///
/// Scenarios missing from the sheet, or listed with empty cells, resolve to
/// `"Unknown"`. When a scenario is listed twice the last row wins.
#[derive(Clone, Debug, Default)]
pub struct ScenarioMetadata {
    labels: HashMap<ScenarioName, ScenarioLabels>,
}

/// A record together with its resolved labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// Source record.
    pub record: LongRecord,
    /// Policy category of the record's scenario.
    pub policy: CategoryLabel,
    /// Climate category of the record's scenario.
    pub category: CategoryLabel,
}

/// Series with the smallest and largest sum over years inside one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryExtremes {
    /// Category label.
    pub category: CategoryLabel,
    /// Series with the smallest sum.
    pub min: SeriesSum,
    /// Series with the largest sum.
    pub max: SeriesSum,
}

/// Sum over years of one (model, scenario) series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSum {
    /// Model of the series.
    pub model: ModelId,
    /// Scenario of the series.
    pub scenario: ScenarioName,
    /// Sum over the series' years.
    pub total: f64,
}

impl ScenarioMetadata {
    /// Load the sheet at `path` (columns `Scenario`, `Policy_category`,
    /// `Category_subset`). Bytes that are not UTF-8 are replaced.
    pub fn from_csv(path: &Path) -> Result<Self, PantareiError> {
        let bytes = fs::read(path).map_err(|err| PantareiError::SourceUnavailable {
            source_id: "scenario_metadata".to_string(),
            reason: format!("{}: {err}", path.display()),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut labels = HashMap::new();
        for row in reader.deserialize::<MetadataRow>() {
            let row = row?;
            labels.insert(
                row.scenario,
                ScenarioLabels {
                    policy: non_empty(row.policy),
                    category: non_empty(row.category),
                },
            );
        }
        info!(
            path = %path.display(),
            scenarios = labels.len(),
            "loaded scenario metadata"
        );
        Ok(Self { labels })
    }

    /// Build metadata from explicit `(scenario, policy, category)` triples.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ScenarioName, CategoryLabel, CategoryLabel)>,
    {
        let labels = entries
            .into_iter()
            .map(|(scenario, policy, category)| (scenario, ScenarioLabels { policy, category }))
            .collect();
        Self { labels }
    }

    /// Number of scenarios listed.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no scenario is listed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Policy category of `scenario`, or `"Unknown"`.
    pub fn policy_for(&self, scenario: &str) -> &str {
        self.labels
            .get(scenario)
            .map(|labels| labels.policy.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Climate category of `scenario`, or `"Unknown"`.
    pub fn category_for(&self, scenario: &str) -> &str {
        self.labels
            .get(scenario)
            .map(|labels| labels.category.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Attach policy and category labels to every record.
    pub fn annotate(&self, records: &[LongRecord]) -> Vec<AnnotatedRecord> {
        records
            .iter()
            .map(|record| AnnotatedRecord {
                record: record.clone(),
                policy: self.policy_for(&record.scenario).to_string(),
                category: self.category_for(&record.scenario).to_string(),
            })
            .collect()
    }

    /// For each category (first-seen order), the series with the smallest and
    /// the largest sum over years. Ties keep the series seen first.
    pub fn extremes_by_category(&self, records: &[LongRecord]) -> Vec<CategoryExtremes> {
        let mut sums: IndexMap<(&str, &str), f64> = IndexMap::new();
        for record in records {
            *sums
                .entry((record.model.as_str(), record.scenario.as_str()))
                .or_default() += record.value;
        }
        let mut by_category: IndexMap<&str, (SeriesSum, SeriesSum)> = IndexMap::new();
        for ((model, scenario), total) in sums {
            let series = SeriesSum {
                model: model.to_string(),
                scenario: scenario.to_string(),
                total,
            };
            by_category
                .entry(self.category_for(scenario))
                .and_modify(|(min, max)| {
                    if series.total < min.total {
                        *min = series.clone();
                    }
                    if series.total > max.total {
                        *max = series.clone();
                    }
                })
                .or_insert_with(|| (series.clone(), series.clone()));
        }
        by_category
            .into_iter()
            .map(|(category, (min, max))| CategoryExtremes {
                category: category.to_string(),
                min,
                max,
            })
            .collect()
    }
}

fn non_empty(label: Option<CategoryLabel>) -> CategoryLabel {
    label
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn metadata() -> ScenarioMetadata {
        ScenarioMetadata::from_entries([
            ("SSP1-19".to_string(), "P1b".to_string(), "C1".to_string()),
            ("SSP2-45".to_string(), "P2a".to_string(), "C3".to_string()),
            ("SSP5-85".to_string(), "P0".to_string(), "C3".to_string()),
        ])
    }

    #[test]
    fn loads_sheet_and_defaults_missing_cells() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Model,Scenario,Policy_category,Category_subset").unwrap();
        writeln!(file, "REMIND,SSP1-19,P1b,C1").unwrap();
        writeln!(file, "GCAM,EN_NPi2100,,C7").unwrap();
        writeln!(file, "GCAM,EN_INDCi2030,P2,").unwrap();
        let metadata = ScenarioMetadata::from_csv(file.path()).unwrap();
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.policy_for("SSP1-19"), "P1b");
        assert_eq!(metadata.policy_for("EN_NPi2100"), "Unknown");
        assert_eq!(metadata.category_for("EN_INDCi2030"), "Unknown");
        assert_eq!(metadata.category_for("not listed"), "Unknown");
    }

    #[test]
    fn missing_sheet_is_source_unavailable() {
        let err = ScenarioMetadata::from_csv(Path::new("/nonexistent/AR6_meta.csv")).unwrap_err();
        assert!(matches!(err, PantareiError::SourceUnavailable { .. }));
    }

    #[test]
    fn annotate_attaches_labels() {
        let records = vec![
            LongRecord::new("World", "SSP2-45", "GCAM", 2050, 40.0, "Gt CO2/yr"),
            LongRecord::new("World", "custom", "GCAM", 2050, 30.0, "Gt CO2/yr"),
        ];
        let annotated = metadata().annotate(&records);
        assert_eq!(annotated[0].policy, "P2a");
        assert_eq!(annotated[0].category, "C3");
        assert_eq!(annotated[1].category, "Unknown");
    }

    #[test]
    fn extremes_pick_min_and_max_sum_per_category() {
        let records = vec![
            LongRecord::new("World", "SSP2-45", "GCAM", 2050, 40.0, "Gt CO2/yr"),
            LongRecord::new("World", "SSP2-45", "GCAM", 2100, 20.0, "Gt CO2/yr"),
            LongRecord::new("World", "SSP5-85", "GCAM", 2050, 60.0, "Gt CO2/yr"),
            LongRecord::new("World", "SSP5-85", "GCAM", 2100, 120.0, "Gt CO2/yr"),
            LongRecord::new("World", "SSP1-19", "GCAM", 2050, 5.0, "Gt CO2/yr"),
        ];
        let extremes = metadata().extremes_by_category(&records);
        assert_eq!(extremes.len(), 2);
        assert_eq!(extremes[0].category, "C3");
        assert_eq!(extremes[0].min.scenario, "SSP2-45");
        assert_eq!(extremes[0].max.scenario, "SSP5-85");
        assert!((extremes[0].max.total - 180.0).abs() < 1e-12);
        assert_eq!(extremes[1].category, "C1");
        assert_eq!(extremes[1].min, extremes[1].max);
    }
}
