//! Base-domain resolution.
//!
//! Rules, first match wins:
//! 1. ccTLD: country and region come from the TLD. With three or more labels
//!    the candidate SLD is looked up in the ccTLD's curated table, then in the
//!    universal table.
//! 2. Generic TLD with three or more labels: the candidate is looked up in the
//!    generic-TLD SLD table, which may imply a country and/or region.
//! 3. Otherwise the base domain is the last two labels.
//!
//! Any SLD match makes the base domain the last three labels, whether or not
//! the match implies a category.

use super::Hostname;
use crate::data::{CountryEntry, GenericTldSld, ReferenceTables, Region, SldEntry};

/// Structural information derived from a hostname alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical key for caching: two or three labels.
    pub base_domain: String,
    /// The recognised second-level label, if any.
    pub sld: Option<&'static str>,
    /// Categories implied by the SLD (at most one with the builtin tables).
    pub categories: Vec<&'static str>,
    pub country: Option<&'static str>,
    pub region: Option<Region>,
}

impl Resolution {
    fn for_host(host: &Hostname) -> Self {
        Self {
            base_domain: host.last(2),
            sld: None,
            categories: Vec::new(),
            country: None,
            region: None,
        }
    }

    fn with_country(mut self, entry: &CountryEntry) -> Self {
        self.country = Some(entry.country);
        self.region = Some(entry.region);
        self
    }

    fn with_sld(mut self, host: &Hostname, label: &'static str) -> Self {
        self.sld = Some(label);
        self.base_domain = host.last(3);
        self
    }

    fn with_sld_match(self, host: &Hostname, found: SldMatch<'_>) -> Self {
        match found {
            SldMatch::CountrySpecific(entry) | SldMatch::Universal(entry) => {
                let mut next = self.with_sld(host, entry.label);
                if let Some(category) = entry.category {
                    next.categories.push(category);
                }
                next
            }
            SldMatch::GenericTld(entry) => {
                let mut next = self.with_sld(host, entry.label);
                if let Some(country) = entry.country {
                    next.country = Some(country);
                }
                if let Some(region) = entry.region {
                    next.region = Some(region);
                }
                next
            }
        }
    }

    /// Both country and region were determined structurally.
    pub fn has_full_geo(&self) -> bool {
        self.country.is_some() && self.region.is_some()
    }
}

/// Where a candidate SLD was found.
#[derive(Debug, Clone, Copy)]
enum SldMatch<'t> {
    CountrySpecific(&'t SldEntry),
    Universal(&'t SldEntry),
    GenericTld(&'t GenericTldSld),
}

fn find_sld<'t>(host: &Hostname, tables: &'t ReferenceTables) -> Option<SldMatch<'t>> {
    let candidate = host.sld_candidate()?;
    let tld = host.tld();

    if tables.country_for_tld(tld).is_some() {
        // A curated table is authoritative for its ccTLD, even for labels
        // that it maps to no category.
        if let Some(entry) = tables
            .country_sld_table(tld)
            .and_then(|table| table.lookup(candidate))
        {
            return Some(SldMatch::CountrySpecific(entry));
        }
        return tables
            .universal_sld_table()
            .lookup(candidate)
            .map(SldMatch::Universal);
    }

    tables.generic_tld_sld(candidate).map(SldMatch::GenericTld)
}

/// Resolves the base domain and structural signal of a hostname.
pub fn resolve(host: &Hostname, tables: &ReferenceTables) -> Resolution {
    let mut resolution = Resolution::for_host(host);

    if let Some(entry) = tables.country_for_tld(host.tld()) {
        resolution = resolution.with_country(entry);
    }
    if let Some(found) = find_sld(host, tables) {
        resolution = resolution.with_sld_match(host, found);
    }

    log::trace!(
        "Resolved {} -> base={} sld={:?} categories={:?}",
        host,
        resolution.base_domain,
        resolution.sld,
        resolution.categories
    );
    resolution
}

/// Whether the hostname carries a recognised SLD (and so a 3-label base).
///
/// Uses the same lookups as [`resolve`] without building a result.
pub fn has_structural_sld(host: &Hostname, tables: &ReferenceTables) -> bool {
    find_sld(host, tables).is_some()
}
