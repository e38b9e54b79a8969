/// IPCC assessment-report scenario databases (AR5, SR1.5, AR6).
pub mod scenario_db;
/// UN World Population Prospects sheet exports.
pub mod un;
/// U.S. Census international database.
pub mod census;
/// World Bank population indicators.
pub mod world_bank;
/// IHME global population forecasts.
pub mod ihme;
/// Resources for the Future sampled population.
pub mod rff;
/// Shared Socioeconomic Pathways country database.
pub mod ssp;
