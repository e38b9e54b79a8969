/// Constants used by the region mapper and aggregator.
pub mod regions {
    /// Canonical code of the world aggregate in every taxonomy.
    pub const WORLD: &str = "WORLD";
    /// Region code assigned to a caller-defined country group.
    pub const MODEL_REGION: &str = "modelregion";
    /// Suffix appended to the taxonomy prefix for the residual region (`R5OWO`).
    pub const REST_OF_WORLD_SUFFIX: &str = "OWO";
    /// Region codes accepted by World Bank spreadsheets (R5 plus its residual).
    pub const WORLD_BANK_REGIONS: [&str; 6] =
        ["R5ASIA", "R5OECD90+EU", "R5OWO", "R5LAM", "R5MAF", "R5REF"];
}

/// Constants used when relabelling scenarios.
pub mod labels {
    /// UN probabilistic percentile labels and their cumulative probability.
    pub const PERCENTILE_LABELS: [(&str, &str); 5] = [
        ("Lower 95", "5"),
        ("Lower 80", "20"),
        ("Median", "50"),
        ("Upper 80", "80"),
        ("Upper 95", "95"),
    ];
    /// Label used when metadata has no entry for a scenario.
    pub const UNKNOWN_CATEGORY: &str = "Unknown";
    /// SSP scenario order used when emitting long tables.
    pub const SSP_SCENARIO_ORDER: [&str; 6] =
        ["SSP1", "SSP2", "SSP3", "SSP4", "SSP5", "Historical Reference"];
    /// Versioned SSP database scenario names and their canonical pathway.
    pub const SSP_SCENARIO_ALIASES: [(&str, &str); 21] = [
        ("SSP3_v9_130115", "SSP3"),
        ("SSP1_v9_130219", "SSP1"),
        ("SSP2_v9_130219", "SSP2"),
        ("SSP3_v9_130219", "SSP3"),
        ("SSP4_v9_130219", "SSP4"),
        ("SSP5_v9_130219", "SSP5"),
        ("SSP1_v9_130325", "SSP1"),
        ("SSP2_v9_130325", "SSP2"),
        ("SSP3_v9_130325", "SSP3"),
        ("SSP4_v9_130325", "SSP4"),
        ("SSP5_v9_130325", "SSP5"),
        ("SSP1_v9_130424", "SSP1"),
        ("SSP2_v9_130424", "SSP2"),
        ("SSP3_v9_130424", "SSP3"),
        ("SSP4_v9_130424", "SSP4"),
        ("SSP5_v9_130424", "SSP5"),
        ("SSP5_v9_130115", "SSP5"),
        ("SSP1_v9_130115", "SSP1"),
        ("SSP2_v9_130115", "SSP2"),
        ("SSP4_v9_130115", "SSP4"),
        ("SSP4d_v9_130115", "SSP4"),
    ];
    /// IHME scenario names shortened for reporting.
    pub const IHME_SCENARIO_ALIASES: [(&str, &str); 5] = [
        ("Faster Met Need and Education", "Faster"),
        ("Fastest Met Need and Education", "Fastest"),
        ("Reference", "Reference"),
        ("SDG Met Need and Education", "SDG"),
        ("Slower Met Need and Education", "Slower"),
    ];
}

/// Constants used by the statistical comparator.
pub mod stats {
    /// Default multipliers of the reference statistic delimiting the buckets.
    pub const DEFAULT_BUCKET_MULTIPLIERS: [f64; 4] = [-0.1, -0.01, 0.01, 0.1];
    /// Scale applied to the outer thresholds to form the open-ended buckets.
    pub const OUTER_BUCKET_SCALE: f64 = 100.0;
    /// Ordered magnitude-of-change bucket labels.
    pub const BUCKET_LABELS: [&str; 5] = [
        "medium-to-high decrease",
        "low decrease",
        "nearest",
        "low increase",
        "medium-to-high increase",
    ];
    /// Convergence tolerance for the incomplete beta continued fraction.
    pub const BETA_CF_EPSILON: f64 = 1e-14;
    /// Iteration cap for the incomplete beta continued fraction.
    pub const BETA_CF_MAX_ITER: usize = 300;
}

/// Constants describing the layout of external source files.
pub mod sources {
    /// Header rows preceding the column header in UN WPP sheets.
    pub const UN_HEADER_SKIP: usize = 16;
    /// UN WPP column holding the region/country label.
    pub const UN_REGION_COLUMN: &str = "Region, subregion, country or area *";
    /// UN WPP column holding total population in long-form sheets.
    pub const UN_POPULATION_COLUMN: &str = "Total Population, as of 1 July (thousands)";
    /// UN probabilistic projection sheets, one per percentile band.
    pub const UN_PROBABILISTIC_SHEETS: [&str; 5] =
        ["Lower 95", "Lower 80", "Median", "Upper 80", "Upper 95"];
    /// UN deterministic projection variant sheets.
    pub const UN_VARIANT_SHEETS: [&str; 12] = [
        "Medium variant",
        "High variant",
        "Low variant",
        "Constant-fertility",
        "Instant-replacement",
        "Instant-replacement zero migr",
        "Momentum",
        "Zero-migration",
        "Constant-mortality",
        "No change",
        "No_AIDS_Projection",
        "AIDS_Projection",
    ];
    /// UN sheet holding historical estimates.
    pub const UN_ESTIMATES_SHEET: &str = "Estimates";
    /// Scenario label attached to UN historical estimates.
    pub const UN_ESTIMATES_SCENARIO: &str = "Estimates";
    /// Separator between a workbook stem and a sheet name in exported CSV names.
    pub const SHEET_FILE_SEPARATOR: &str = "__";
    /// Non-year columns of IPCC scenario databases.
    pub const SCENARIO_DB_COLUMNS: [&str; 5] = ["Model", "Scenario", "Region", "Variable", "Unit"];
    /// Census indicator columns ignored during ingestion.
    pub const CENSUS_EXCLUDED_COLUMNS: [&str; 6] = [
        "Annual Growth Rate %",
        "Area (sq km)",
        "Density (per sq km)",
        "Total Fertility Rate",
        "Life Expectancy at Birth",
        "Under-5 Mortality Rate",
    ];
    /// Quantiles extracted from the RFF sampled population distribution.
    pub const RFF_QUANTILES: [(f64, &str); 5] = [
        (0.05, "5 pRFF"),
        (0.2, "20 pRFF"),
        (0.5, "50 pRFF"),
        (0.8, "80 pRFF"),
        (0.95, "95 pRFF"),
    ];
    /// SSP model excluded from world groupings.
    pub const SSP_EXCLUDED_MODEL: &str = "PIK GDP-32";
    /// IHME location label of the global aggregate.
    pub const IHME_GLOBAL_LOCATION: &str = "Global";
    /// Divisor turning thousands into millions.
    pub const THOUSANDS_PER_MILLION: f64 = 1e3;
    /// Divisor turning thousands into billions.
    pub const THOUSANDS_PER_BILLION: f64 = 1e6;
    /// Divisor turning inhabitants into billions.
    pub const INHABITANTS_PER_BILLION: f64 = 1e9;
}

/// Years reported by IPCC scenario databases.
pub mod years {
    /// Five-year steps from 2010 through 2100 as published in AR5/SR1.5/AR6.
    pub const SCENARIO_DB_YEARS: [i32; 19] = [
        2010, 2015, 2020, 2025, 2030, 2035, 2040, 2045, 2050, 2055, 2060, 2065, 2070, 2075, 2080,
        2085, 2090, 2095, 2100,
    ];
    /// Base year spliced in from historical estimates.
    pub const BASE_YEAR: i32 = 2020;
}
