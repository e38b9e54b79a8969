use std::io;

use thiserror::Error;

use crate::types::{RegionCode, SourceId};

/// Error type for ingestion, region lookup, and comparison failures.
#[derive(Debug, Error)]
pub enum PantareiError {
    #[error("data source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("data source '{source_id}' has an unexpected layout: {details}")]
    Schema {
        source_id: SourceId,
        details: String,
    },
    #[error("region '{region}' is not part of the {taxonomy} taxonomy")]
    UnknownRegion {
        taxonomy: String,
        region: RegionCode,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("sample '{0}' is empty after trimming")]
    EmptySample(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PantareiError {
    pub(crate) fn schema(source_id: impl Into<SourceId>, details: impl Into<String>) -> Self {
        Self::Schema {
            source_id: source_id.into(),
            details: details.into(),
        }
    }
}
