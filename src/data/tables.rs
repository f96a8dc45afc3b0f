//! Indexed reference tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{
    CountryEntry, GenericTldSld, Industry, Region, SldEntry, COUNTRIES, COUNTRY_SLDS,
    GENERIC_TLD_SLDS, INDUSTRIES, UNIVERSAL_SLDS,
};

/// Raw table slices a [`ReferenceTables`] is built from.
///
/// Tests build their own `TableData` (usually starting from [`BUILTIN_DATA`])
/// to exercise resolver rules against controlled contents.
#[derive(Debug, Clone, Copy)]
pub struct TableData {
    pub countries: &'static [CountryEntry],
    pub generic_tld_slds: &'static [GenericTldSld],
    pub country_slds: &'static [(&'static str, &'static [SldEntry])],
    pub universal_slds: &'static [SldEntry],
    pub industries: &'static [Industry],
}

/// The tables shipped with the crate.
pub const BUILTIN_DATA: TableData = TableData {
    countries: COUNTRIES,
    generic_tld_slds: GENERIC_TLD_SLDS,
    country_slds: COUNTRY_SLDS,
    universal_slds: UNIVERSAL_SLDS,
    industries: INDUSTRIES,
};

static BUILTIN: LazyLock<ReferenceTables> =
    LazyLock::new(|| ReferenceTables::from_data(&BUILTIN_DATA));

/// A set of second-level labels, each with an optional implied category.
#[derive(Debug, Clone, Default)]
pub struct SldTable {
    entries: HashMap<&'static str, SldEntry>,
}

impl SldTable {
    pub fn from_entries(entries: &[SldEntry]) -> Self {
        Self {
            entries: entries.iter().map(|e| (e.label, *e)).collect(),
        }
    }

    pub fn lookup(&self, label: &str) -> Option<&SldEntry> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lookup indexes over the reference data.
///
/// Immutable once built and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    countries_by_tld: HashMap<&'static str, CountryEntry>,
    regions_by_country: HashMap<&'static str, Region>,
    country_names: Vec<&'static str>,
    generic_tld_slds: HashMap<&'static str, GenericTldSld>,
    country_slds: HashMap<&'static str, SldTable>,
    universal_slds: SldTable,
    industries: Vec<Industry>,
}

impl ReferenceTables {
    /// Indexes the given raw tables.
    pub fn from_data(data: &TableData) -> Self {
        let mut regions_by_country = HashMap::new();
        let mut country_names = Vec::new();
        for entry in data.countries {
            if regions_by_country.insert(entry.country, entry.region).is_none() {
                country_names.push(entry.country);
            }
        }

        Self {
            countries_by_tld: data.countries.iter().map(|c| (c.tld, *c)).collect(),
            regions_by_country,
            country_names,
            generic_tld_slds: data
                .generic_tld_slds
                .iter()
                .map(|g| (g.label, *g))
                .collect(),
            country_slds: data
                .country_slds
                .iter()
                .map(|(tld, entries)| (*tld, SldTable::from_entries(entries)))
                .collect(),
            universal_slds: SldTable::from_entries(data.universal_slds),
            industries: data.industries.to_vec(),
        }
    }

    /// Process-wide tables built from [`BUILTIN_DATA`].
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    /// Looks up a ccTLD (e.g. `"uk"`).
    pub fn country_for_tld(&self, tld: &str) -> Option<&CountryEntry> {
        self.countries_by_tld.get(tld)
    }

    /// Region of a country in the taxonomy, matched by exact name.
    pub fn region_for_country(&self, country: &str) -> Option<Region> {
        self.regions_by_country.get(country).copied()
    }

    /// Distinct country names, in table order.
    pub fn country_names(&self) -> &[&'static str] {
        &self.country_names
    }

    /// Curated SLD table for a ccTLD, if one exists.
    pub fn country_sld_table(&self, tld: &str) -> Option<&SldTable> {
        self.country_slds.get(tld)
    }

    /// SLD table that applies under every ccTLD.
    pub fn universal_sld_table(&self) -> &SldTable {
        &self.universal_slds
    }

    /// Second-level label under a generic TLD.
    pub fn generic_tld_sld(&self, label: &str) -> Option<&GenericTldSld> {
        self.generic_tld_slds.get(label)
    }

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    pub fn industry_names(&self) -> Vec<&'static str> {
        self.industries.iter().map(|i| i.name).collect()
    }

    pub fn is_industry(&self, name: &str) -> bool {
        self.industries.iter().any(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_country_lookup() {
        let tables = ReferenceTables::builtin();
        let uk = tables.country_for_tld("uk").unwrap();
        assert_eq!(uk.country, "United Kingdom");
        assert_eq!(uk.region, Region::WesternEurope);
        assert!(tables.country_for_tld("com").is_none());
    }

    #[test]
    fn test_region_for_country_is_exact() {
        let tables = ReferenceTables::builtin();
        assert_eq!(
            tables.region_for_country("Brazil"),
            Some(Region::LatinAmerica)
        );
        assert_eq!(tables.region_for_country("brazil"), None);
        assert_eq!(tables.region_for_country("Other"), None);
    }

    #[test]
    fn test_country_names_are_deduplicated() {
        let tables = ReferenceTables::builtin();
        let us = tables
            .country_names()
            .iter()
            .filter(|n| **n == "United States of America")
            .count();
        assert_eq!(us, 1);
    }

    #[test]
    fn test_sld_tables_present_only_for_curated_cctlds() {
        let tables = ReferenceTables::builtin();
        assert!(tables.country_sld_table("uk").is_some());
        assert!(tables.country_sld_table("fr").is_some());
        assert!(tables.country_sld_table("br").is_none());
        let nhs = tables.country_sld_table("uk").unwrap().lookup("nhs").unwrap();
        assert_eq!(nhs.category, Some("Healthcare"));
        assert!(!tables.universal_sld_table().is_empty());
    }

    #[test]
    fn test_tables_from_builtin_data_match_builtin() {
        let owned = ReferenceTables::from_data(&BUILTIN_DATA);
        let shared = ReferenceTables::builtin();
        assert_eq!(owned.country_names(), shared.country_names());
        assert_eq!(
            owned.country_for_tld("ae").map(|c| c.country),
            Some("United Arab Emirates")
        );
        assert!(owned.country_sld_table("uk").is_some());
    }

    #[test]
    fn test_is_industry() {
        let tables = ReferenceTables::builtin();
        assert!(tables.is_industry("Government"));
        assert!(!tables.is_industry("government"));
        assert!(!tables.is_industry("Gardening"));
    }
}
