//! IPCC regional taxonomies and country-to-region lookup.
//!
//! Tables are immutable and built once per process into a catalog keyed by
//! taxonomy and mapping kind. Two kinds exist:
//! - `MappingKind::Country` lists UN country/area names per region; the world
//!   entry lists every country/area, so the world total is the sum of the
//!   member countries and the residual only picks up countries that no named
//!   region lists. `RegionScheme::with_reported_world` swaps that entry for
//!   the source's own `WORLD` row.
//! - `MappingKind::Proxy` lists coarse UN aggregate labels (`AFRICA`,
//!   `LATIN AMERICA AND THE CARIBBEAN`, ...) standing in for each region. It
//!   is a best-effort approximation, not an exact partition. Its world entry
//!   is the reported `WORLD` row.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::constants::regions::{MODEL_REGION, REST_OF_WORLD_SUFFIX, WORLD};
use crate::errors::PantareiError;
use crate::types::{CountryName, RegionCode};

mod tables;

/// Number of regions a taxonomy splits the world into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Taxonomy {
    /// World only.
    R1,
    /// Five IPCC regions.
    R5,
    /// Six IPCC regions (R5 with the Middle East split out of Africa).
    R6,
    /// Ten IPCC regions.
    R10,
}

impl Taxonomy {
    /// Every taxonomy, coarsest first.
    pub const ALL: [Taxonomy; 4] = [Taxonomy::R1, Taxonomy::R5, Taxonomy::R6, Taxonomy::R10];

    /// Resolve a taxonomy from its region count (1, 5, 6, or 10).
    pub fn from_count(count: usize) -> Result<Self, PantareiError> {
        match count {
            1 => Ok(Taxonomy::R1),
            5 => Ok(Taxonomy::R5),
            6 => Ok(Taxonomy::R6),
            10 => Ok(Taxonomy::R10),
            other => Err(PantareiError::Configuration(format!(
                "unsupported region count {other}; expected 1, 5, 6, or 10"
            ))),
        }
    }

    /// Number of named regions, excluding the world row.
    pub fn region_count(self) -> usize {
        match self {
            Taxonomy::R1 => 1,
            Taxonomy::R5 => 5,
            Taxonomy::R6 => 6,
            Taxonomy::R10 => 10,
        }
    }

    /// Code prefix shared by the taxonomy's regions (`R5`).
    pub fn prefix(self) -> &'static str {
        match self {
            Taxonomy::R1 => "R1",
            Taxonomy::R5 => "R5",
            Taxonomy::R6 => "R6",
            Taxonomy::R10 => "R10",
        }
    }

    /// Code of the residual region; the 1-region taxonomy has none.
    pub fn rest_of_world_code(self) -> Option<RegionCode> {
        match self {
            Taxonomy::R1 => None,
            other => Some(format!("{}{}", other.prefix(), REST_OF_WORLD_SUFFIX)),
        }
    }

    fn table(self, kind: MappingKind) -> &'static [(&'static str, &'static [&'static str])] {
        match (self, kind) {
            (Taxonomy::R1, _) => tables::R1_COUNTRY,
            (Taxonomy::R5, MappingKind::Country) => tables::R5_COUNTRY,
            (Taxonomy::R6, MappingKind::Country) => tables::R6_COUNTRY,
            (Taxonomy::R10, MappingKind::Country) => tables::R10_COUNTRY,
            (Taxonomy::R5, MappingKind::Proxy) => tables::R5_PROXY,
            (Taxonomy::R6, MappingKind::Proxy) => tables::R6_PROXY,
            (Taxonomy::R10, MappingKind::Proxy) => tables::R10_PROXY,
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-region", self.region_count())
    }
}

/// Which member vocabulary a mapping uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingKind {
    /// Individual UN countries and areas.
    Country,
    /// Coarse UN aggregates used as approximate stand-ins.
    Proxy,
}

/// Members of one region code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMapping {
    code: RegionCode,
    members: IndexSet<CountryName>,
    repeated: Vec<CountryName>,
}

impl RegionMapping {
    /// Build a mapping; names listed twice are kept once and remembered.
    pub fn new<I, S>(code: impl Into<RegionCode>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CountryName>,
    {
        let mut set = IndexSet::new();
        let mut repeated = Vec::new();
        for member in members {
            let member = member.into();
            if set.contains(&member) {
                repeated.push(member);
            } else {
                set.insert(member);
            }
        }
        Self {
            code: code.into(),
            members: set,
            repeated,
        }
    }

    /// Region code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Distinct member names in listing order.
    pub fn members(&self) -> &IndexSet<CountryName> {
        &self.members
    }

    /// Whether `name` belongs to this region.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Whether this is the world aggregate row.
    pub fn is_world(&self) -> bool {
        self.code == WORLD
    }

    /// Names that the source table lists more than once for this region.
    pub fn repeated_members(&self) -> &[CountryName] {
        &self.repeated
    }
}

/// A name listed more than once across the non-world regions of a taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateMember {
    /// Duplicated country/area name.
    pub country: CountryName,
    /// Region codes listing the name, one entry per listing.
    pub regions: Vec<RegionCode>,
}

/// Lookup over every built-in taxonomy table.
pub struct RegionCatalog {
    mappings: HashMap<(Taxonomy, MappingKind), Vec<RegionMapping>>,
}

static CATALOG: LazyLock<RegionCatalog> = LazyLock::new(RegionCatalog::build);

/// Process-wide catalog of built-in taxonomies.
pub fn catalog() -> &'static RegionCatalog {
    &CATALOG
}

/// Member set of `region` under `taxonomy`, using country-level tables.
pub fn regions_for(
    taxonomy: Taxonomy,
    region: &str,
) -> Result<&'static IndexSet<CountryName>, PantareiError> {
    catalog().regions_for(taxonomy, MappingKind::Country, region)
}

impl RegionCatalog {
    fn build() -> Self {
        let mut mappings = HashMap::new();
        for taxonomy in Taxonomy::ALL {
            for kind in [MappingKind::Country, MappingKind::Proxy] {
                let entries = taxonomy
                    .table(kind)
                    .iter()
                    .map(|(code, members)| RegionMapping::new(*code, members.iter().copied()))
                    .collect();
                mappings.insert((taxonomy, kind), entries);
            }
        }
        Self { mappings }
    }

    /// All mappings of a taxonomy, world first.
    pub fn mappings(&self, taxonomy: Taxonomy, kind: MappingKind) -> &[RegionMapping] {
        self.mappings
            .get(&(taxonomy, kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Region codes of a taxonomy, world first.
    pub fn region_codes(&self, taxonomy: Taxonomy, kind: MappingKind) -> Vec<&str> {
        self.mappings(taxonomy, kind)
            .iter()
            .map(RegionMapping::code)
            .collect()
    }

    /// Member set for one region code.
    pub fn regions_for(
        &self,
        taxonomy: Taxonomy,
        kind: MappingKind,
        region: &str,
    ) -> Result<&IndexSet<CountryName>, PantareiError> {
        self.mappings(taxonomy, kind)
            .iter()
            .find(|mapping| mapping.code() == region)
            .map(RegionMapping::members)
            .ok_or_else(|| PantareiError::UnknownRegion {
                taxonomy: taxonomy.to_string(),
                region: region.to_string(),
            })
    }

    /// Non-world regions listing `name`.
    pub fn region_of(&self, taxonomy: Taxonomy, kind: MappingKind, name: &str) -> Vec<&str> {
        self.mappings(taxonomy, kind)
            .iter()
            .filter(|mapping| !mapping.is_world() && mapping.contains(name))
            .map(RegionMapping::code)
            .collect()
    }

    /// Names from `names` that no non-world region lists.
    pub fn unmapped<'a, I>(&self, taxonomy: Taxonomy, kind: MappingKind, names: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = IndexSet::new();
        for name in names {
            if name != WORLD && self.region_of(taxonomy, kind, name).is_empty() {
                seen.insert(name);
            }
        }
        seen.into_iter().collect()
    }

    /// Names listed more than once across non-world regions, including
    /// repeated listings inside one region. Reported, never corrected.
    pub fn known_duplicates(&self, taxonomy: Taxonomy, kind: MappingKind) -> Vec<DuplicateMember> {
        let mut listings: IndexMap<&str, Vec<RegionCode>> = IndexMap::new();
        for mapping in self
            .mappings(taxonomy, kind)
            .iter()
            .filter(|mapping| !mapping.is_world())
        {
            for member in mapping.members().iter().chain(mapping.repeated_members()) {
                listings
                    .entry(member.as_str())
                    .or_default()
                    .push(mapping.code().to_string());
            }
        }
        listings
            .into_iter()
            .filter(|(_, regions)| regions.len() > 1)
            .map(|(country, mut regions)| {
                regions.sort();
                DuplicateMember {
                    country: country.to_string(),
                    regions,
                }
            })
            .collect()
    }
}

/// Active set of mappings used for one aggregation run.
#[derive(Clone, Debug)]
pub struct RegionScheme {
    taxonomy: Option<Taxonomy>,
    mappings: Vec<RegionMapping>,
    catch_all: Option<RegionCode>,
    rest_of_world: Option<RegionCode>,
}

impl RegionScheme {
    /// Scheme backed by a built-in taxonomy table.
    pub fn ipcc(taxonomy: Taxonomy, kind: MappingKind) -> Self {
        Self {
            taxonomy: Some(taxonomy),
            mappings: catalog().mappings(taxonomy, kind).to_vec(),
            catch_all: None,
            rest_of_world: taxonomy.rest_of_world_code(),
        }
    }

    /// Scheme aggregating a caller-chosen country list into `modelregion`.
    ///
    /// The model region doubles as the world row: it is the total the
    /// caller asked for, and no residual is computed.
    pub fn model_region<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CountryName>,
    {
        Self {
            taxonomy: None,
            mappings: vec![RegionMapping::new(MODEL_REGION, countries)],
            catch_all: None,
            rest_of_world: None,
        }
    }

    /// Scheme built from explicit mappings. No residual is computed unless
    /// one is named with `with_rest_of_world`.
    pub fn custom(mappings: Vec<RegionMapping>) -> Self {
        Self {
            taxonomy: None,
            mappings,
            catch_all: None,
            rest_of_world: None,
        }
    }

    /// Report `max(0, world - sum(regions))` under `code`.
    pub fn with_rest_of_world(mut self, code: impl Into<RegionCode>) -> Self {
        self.rest_of_world = Some(code.into());
        self
    }

    /// Take the world total from records labelled `WORLD` instead of summing
    /// the world member list.
    pub fn with_reported_world(mut self) -> Self {
        let reported = RegionMapping::new(WORLD, [WORLD]);
        match self.mappings.iter_mut().find(|mapping| mapping.is_world()) {
            Some(world) => *world = reported,
            None => self.mappings.insert(0, reported),
        }
        self
    }

    /// Route names that no region lists into `code` instead of dropping them.
    pub fn with_catch_all(mut self, code: impl Into<RegionCode>) -> Self {
        self.catch_all = Some(code.into());
        self
    }

    /// Taxonomy backing the scheme, when it is a built-in one.
    pub fn taxonomy(&self) -> Option<Taxonomy> {
        self.taxonomy
    }

    /// Mappings in declaration order.
    pub fn mappings(&self) -> &[RegionMapping] {
        &self.mappings
    }

    /// Catch-all region code, if configured.
    pub fn catch_all(&self) -> Option<&str> {
        self.catch_all.as_deref()
    }

    /// Code of the residual region for this scheme.
    pub fn rest_of_world_code(&self) -> Option<RegionCode> {
        self.rest_of_world.clone()
    }

    /// Every region code a raw `name` contributes to.
    pub fn targets_for(&self, name: &str) -> Vec<&str> {
        let mut targets: Vec<&str> = self
            .mappings
            .iter()
            .filter(|mapping| mapping.contains(name))
            .map(RegionMapping::code)
            .collect();
        let named = targets.iter().any(|code| *code != WORLD);
        if !named && name != WORLD {
            if let Some(catch_all) = self.catch_all.as_deref() {
                targets.push(catch_all);
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_from_count_accepts_published_sizes_only() {
        assert_eq!(Taxonomy::from_count(5).unwrap(), Taxonomy::R5);
        assert_eq!(Taxonomy::from_count(10).unwrap(), Taxonomy::R10);
        assert!(matches!(
            Taxonomy::from_count(4),
            Err(PantareiError::Configuration(_))
        ));
    }

    #[test]
    fn region_codes_match_published_order() {
        let codes = catalog().region_codes(Taxonomy::R5, MappingKind::Country);
        assert_eq!(
            codes,
            vec!["WORLD", "R5ASIA", "R5LAM", "R5MAF", "R5OECD90+EU", "R5REF"]
        );
        for taxonomy in Taxonomy::ALL {
            for kind in [MappingKind::Country, MappingKind::Proxy] {
                assert_eq!(
                    catalog().mappings(taxonomy, kind).len(),
                    if taxonomy == Taxonomy::R1 {
                        1
                    } else {
                        taxonomy.region_count() + 1
                    }
                );
            }
        }
    }

    #[test]
    fn regions_for_returns_fixed_members() {
        let asia = regions_for(Taxonomy::R5, "R5ASIA").unwrap();
        assert!(asia.contains("China"));
        assert!(asia.contains("India"));
        assert!(!asia.contains("Brazil"));
        let pac = catalog()
            .regions_for(Taxonomy::R10, MappingKind::Proxy, "R10PAC_OECD")
            .unwrap();
        assert_eq!(pac.iter().collect::<Vec<_>>(), vec!["Japan", "OCEANIA"]);
        assert!(matches!(
            regions_for(Taxonomy::R5, "R10AFRICA"),
            Err(PantareiError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn rest_of_world_codes_follow_taxonomy_prefix() {
        assert_eq!(Taxonomy::R1.rest_of_world_code(), None);
        assert_eq!(Taxonomy::R5.rest_of_world_code().as_deref(), Some("R5OWO"));
        assert_eq!(Taxonomy::R10.rest_of_world_code().as_deref(), Some("R10OWO"));
    }

    #[test]
    fn ten_region_table_keeps_known_duplicates() {
        let duplicates = catalog().known_duplicates(Taxonomy::R10, MappingKind::Country);
        let listed: Vec<(&str, Vec<&str>)> = duplicates
            .iter()
            .map(|dup| {
                (
                    dup.country.as_str(),
                    dup.regions.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(
            listed,
            vec![
                ("Libya", vec!["R10AFRICA", "R10MIDDLE_EAST"]),
                (
                    "Venezuela (Bolivarian Republic of)",
                    vec!["R10LATIN_AM", "R10LATIN_AM"]
                ),
            ]
        );
    }

    #[test]
    fn five_and_six_region_tables_only_repeat_venezuela_within_one_region() {
        for (taxonomy, lam) in [(Taxonomy::R5, "R5LAM"), (Taxonomy::R6, "R6LAM")] {
            let duplicates = catalog().known_duplicates(taxonomy, MappingKind::Country);
            assert_eq!(duplicates.len(), 1);
            assert_eq!(duplicates[0].country, "Venezuela (Bolivarian Republic of)");
            assert_eq!(duplicates[0].regions, vec![lam.to_string(), lam.to_string()]);
        }
    }

    #[test]
    fn proxy_tables_are_partitions() {
        for taxonomy in Taxonomy::ALL {
            assert!(
                catalog()
                    .known_duplicates(taxonomy, MappingKind::Proxy)
                    .is_empty()
            );
        }
    }

    #[test]
    fn region_of_and_unmapped_use_named_regions_only() {
        let catalog = catalog();
        assert_eq!(
            catalog.region_of(Taxonomy::R10, MappingKind::Country, "Libya"),
            vec!["R10AFRICA", "R10MIDDLE_EAST"]
        );
        let unmapped = catalog.unmapped(
            Taxonomy::R5,
            MappingKind::Country,
            ["China", "Monaco", "WORLD", "Monaco"],
        );
        assert_eq!(unmapped, vec!["Monaco"]);
    }

    #[test]
    fn world_row_lists_every_named_member() {
        let catalog = catalog();
        for taxonomy in [Taxonomy::R5, Taxonomy::R6, Taxonomy::R10] {
            let world = catalog
                .regions_for(taxonomy, MappingKind::Country, WORLD)
                .unwrap();
            for mapping in catalog.mappings(taxonomy, MappingKind::Country) {
                assert!(mapping.members().iter().all(|name| world.contains(name)));
            }
        }
    }

    #[test]
    fn scheme_targets_route_unmapped_names_to_catch_all() {
        let scheme = RegionScheme::custom(vec![
            RegionMapping::new("WORLD", ["WORLD"]),
            RegionMapping::new("R5ASIA", ["China", "India"]),
        ]);
        assert_eq!(scheme.targets_for("China"), vec!["R5ASIA"]);
        assert!(scheme.targets_for("Peru").is_empty());
        let scheme = scheme.with_catch_all("other");
        assert_eq!(scheme.targets_for("Peru"), vec!["other"]);
        assert_eq!(scheme.targets_for("WORLD"), vec!["WORLD"]);
    }

    #[test]
    fn residual_code_follows_taxonomy_or_caller() {
        let scheme = RegionScheme::ipcc(Taxonomy::R6, MappingKind::Proxy);
        assert_eq!(scheme.rest_of_world_code().as_deref(), Some("R6OWO"));
        let scheme = RegionScheme::custom(vec![RegionMapping::new("R5ASIA", ["China"])]);
        assert_eq!(scheme.rest_of_world_code(), None);
        let scheme = scheme.with_rest_of_world("R5OWO");
        assert_eq!(scheme.rest_of_world_code().as_deref(), Some("R5OWO"));
    }

    #[test]
    fn reported_world_replaces_country_world_list() {
        let scheme = RegionScheme::ipcc(Taxonomy::R5, MappingKind::Country);
        assert_eq!(scheme.targets_for("China"), vec!["WORLD", "R5ASIA"]);
        let scheme = scheme.with_reported_world();
        assert_eq!(scheme.targets_for("China"), vec!["R5ASIA"]);
        assert_eq!(scheme.targets_for("WORLD"), vec!["WORLD"]);
        assert_eq!(scheme.mappings().len(), 6);
        assert_eq!(scheme.mappings()[0].code(), WORLD);

        let custom = RegionScheme::custom(vec![RegionMapping::new("R5ASIA", ["China"])])
            .with_reported_world();
        assert_eq!(custom.mappings()[0].code(), WORLD);
        assert_eq!(custom.targets_for("WORLD"), vec!["WORLD"]);
    }

    #[test]
    fn model_region_scheme_has_no_residual() {
        let scheme = RegionScheme::model_region(["Italy", "Spain"]);
        assert_eq!(scheme.targets_for("Italy"), vec![MODEL_REGION]);
        assert_eq!(scheme.rest_of_world_code(), None);
    }
}
