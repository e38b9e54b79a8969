/// Region code in one of the IPCC taxonomies, or a raw country/area label.
/// Examples: `R5ASIA`, `R10PAC_OECD`, `WORLD`, `Viet Nam`
pub type RegionCode = String;
/// Country or area name as spelled in UN population tables.
/// Examples: `China`, `Côte d'Ivoire`, `United Republic of Tanzania`
pub type CountryName = String;
/// Named projection pathway or percentile label.
/// Examples: `SSP2`, `Median`, `50`, `Low variant`
pub type ScenarioName = String;
/// Source or model identifier.
/// Examples: `UN`, `pUN`, `SSP`, `World Bank`, `MESSAGE-GLOBIOM 1.0`
pub type ModelId = String;
/// Identifier for the adapter that produced a table.
/// Examples: `un_probabilistic`, `world_bank`, `ar6`
pub type SourceId = String;
/// Semantic unit attached to a value.
/// Examples: `million`, `billion`, `Gt CO2/yr`
pub type UnitLabel = String;
/// Variable name inside a scenario database.
/// Examples: `Population`, `GDP|PPP`, `Emissions|CO2`
pub type VariableName = String;
/// Policy or climate category attached to a scenario by metadata.
/// Examples: `C1`, `P1b`, `Unknown`
pub type CategoryLabel = String;
/// Calendar year.
pub type Year = i32;
