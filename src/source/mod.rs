//! External data source adapters.
//!
//! Ownership model:
//! - `DataAdapter` is the pipeline-facing interface: one blocking read of a
//!   local file set, returning long records with raw (unmapped) region labels.
//! - `WideSource` is implemented by adapters whose files are year-per-column
//!   tables, so callers can reshape them with the transformer instead.
//!
//! Adapters never map regions or compare sources; they rename columns, scale
//! units, and tag model/scenario labels.

use crate::data::{LongRecord, WideTable};
use crate::errors::PantareiError;

/// Source implementation modules.
pub mod sources;

pub use sources::census::CensusSource;
pub use sources::ihme::IhmeSource;
pub use sources::rff::RffSource;
pub use sources::scenario_db::ScenarioDatabaseSource;
pub use sources::ssp::SspSource;
pub use sources::un::{UnDeterministicSource, UnProbabilisticSource};
pub use sources::world_bank::WorldBankSource;

/// Pipeline-facing ingestion interface.
pub trait DataAdapter {
    /// Stable source identifier used in logs and errors.
    fn id(&self) -> &str;
    /// Read the source and return canonical long records.
    fn read(&self) -> Result<Vec<LongRecord>, PantareiError>;
}

/// Adapters exposing their raw year-per-column table.
pub trait WideSource: DataAdapter {
    /// Read the source as a wide table validated against the expected years.
    fn read_wide(&self) -> Result<WideTable, PantareiError>;
}

/// Read every adapter in order, concatenating their records.
pub fn read_all(adapters: &[&dyn DataAdapter]) -> Result<Vec<LongRecord>, PantareiError> {
    let mut records = Vec::new();
    for adapter in adapters {
        records.extend(adapter.read()?);
    }
    Ok(records)
}
