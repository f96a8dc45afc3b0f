//! Static reference data.
//!
//! This module holds the lookup tables the resolver and classifier work from:
//! - Country-code TLDs and the country taxonomy (`countries`)
//! - The industry taxonomy (`industries`)
//! - Second-level domain tables (`slds`)
//!
//! The raw tables are `const` slices. [`ReferenceTables`] indexes them for
//! lookup and is what the rest of the crate consumes.

mod countries;
mod industries;
mod slds;
mod tables;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

pub use countries::COUNTRIES;
pub use industries::{INDUSTRIES, OTHER};
pub use slds::{COUNTRY_SLDS, GENERIC_TLD_SLDS, UNIVERSAL_SLDS};
pub use tables::{ReferenceTables, SldTable, TableData, BUILTIN_DATA};

/// Geographic region a country belongs to.
///
/// Serialized using its display name, e.g. `"Western Europe"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
pub enum Region {
    #[default]
    Other,
    #[serde(rename = "Middle East and North Africa")]
    MiddleEastAndNorthAfrica,
    #[serde(rename = "South and South East Asia")]
    SouthAndSouthEastAsia,
    #[serde(rename = "Eastern Europe")]
    EasternEurope,
    #[serde(rename = "Sub Saharan Africa")]
    SubSaharanAfrica,
    #[serde(rename = "Latin America")]
    LatinAmerica,
    #[serde(rename = "Western Europe")]
    WesternEurope,
    #[serde(rename = "Western Offshoots")]
    WesternOffshoots,
    #[serde(rename = "East Asia")]
    EastAsia,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Other => "Other",
            Region::MiddleEastAndNorthAfrica => "Middle East and North Africa",
            Region::SouthAndSouthEastAsia => "South and South East Asia",
            Region::EasternEurope => "Eastern Europe",
            Region::SubSaharanAfrica => "Sub Saharan Africa",
            Region::LatinAmerica => "Latin America",
            Region::WesternEurope => "Western Europe",
            Region::WesternOffshoots => "Western Offshoots",
            Region::EastAsia => "East Asia",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country-code TLD and the country it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub tld: &'static str,
    pub country: &'static str,
    pub region: Region,
}

/// A second-level label used under generic TLDs (e.g. `br` in `example.br.com`).
///
/// Either field may be missing: some labels only imply a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericTldSld {
    pub label: &'static str,
    pub country: Option<&'static str>,
    pub region: Option<Region>,
}

/// A second-level label under a ccTLD, optionally implying an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SldEntry {
    pub label: &'static str,
    pub category: Option<&'static str>,
}

/// An industry in the category taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
}
