//! Second-level domain tables.
//!
//! Three kinds of table live here:
//! - [`COUNTRY_SLDS`]: curated SLDs for a handful of ccTLDs, each optionally
//!   implying a category (`nhs.uk` is healthcare, `co.uk` implies nothing).
//! - [`UNIVERSAL_SLDS`]: SLDs recognised under any ccTLD without a curated
//!   table (`gov.br`, `com.us`, `ac.za`).
//! - [`GENERIC_TLD_SLDS`]: labels sold under generic TLDs that signal a
//!   country or region (`br.com`, `eu.com`).

use super::{GenericTldSld, Region, SldEntry};

const EDUCATION: Option<&str> = Some("Education");
const GOVERNMENT: Option<&str> = Some("Government");
const HEALTHCARE: Option<&str> = Some("Healthcare");
const LEGAL: Option<&str> = Some("Legal");
const NON_PROFIT: Option<&str> = Some("Non-Profit");

/// SLDs that apply under every ccTLD.
pub const UNIVERSAL_SLDS: &[SldEntry] = &[
    sld("ac", EDUCATION),
    sld("co", None),
    sld("com", None),
    sld("edu", EDUCATION),
    sld("gob", GOVERNMENT),
    sld("gouv", GOVERNMENT),
    sld("gov", GOVERNMENT),
    sld("govt", GOVERNMENT),
    sld("mil", GOVERNMENT),
    sld("net", Some("Information Technology and Internet")),
    sld("nic", None),
    sld("or", None),
    sld("org", NON_PROFIT),
    sld("sch", EDUCATION),
];

const UK_SLDS: &[SldEntry] = &[
    sld("ac", EDUCATION),
    sld("co", None),
    sld("gov", GOVERNMENT),
    sld("judiciary", GOVERNMENT),
    sld("ltd", None),
    sld("me", None),
    sld("mod", GOVERNMENT),
    sld("net", None),
    sld("nhs", HEALTHCARE),
    sld("nic", None),
    sld("org", NON_PROFIT),
    sld("parliament", GOVERNMENT),
    sld("plc", None),
    sld("police", GOVERNMENT),
    sld("sch", EDUCATION),
];

const FR_SLDS: &[SldEntry] = &[
    sld("aeroport", Some("Transportation")),
    sld("asso", NON_PROFIT),
    sld("avocat", LEGAL),
    sld("avoues", LEGAL),
    sld("cci", Some("Professional Services")),
    sld("com", None),
    sld("gouv", GOVERNMENT),
    sld("greta", EDUCATION),
    sld("huissier-justice", LEGAL),
    sld("medecin", HEALTHCARE),
    sld("nom", None),
    sld("notaires", LEGAL),
    sld("pharmacien", HEALTHCARE),
    sld("port", Some("Transportation")),
    sld("presse", Some("News and Media")),
    sld("tm", None),
    sld("veterinaire", HEALTHCARE),
];

const UA_SLDS: &[SldEntry] = &[
    sld("biz", None),
    sld("co", None),
    sld("com", None),
    sld("edu", EDUCATION),
    sld("gov", GOVERNMENT),
    sld("in", None),
    sld("kharkiv", None),
    sld("kiev", None),
    sld("kyiv", None),
    sld("lviv", None),
    sld("net", Some("Telecommunications")),
    sld("odesa", None),
    sld("org", NON_PROFIT),
    sld("pp", None),
];

const AU_SLDS: &[SldEntry] = &[
    sld("asn", NON_PROFIT),
    sld("com", None),
    sld("csiro", GOVERNMENT),
    sld("edu", EDUCATION),
    sld("gov", GOVERNMENT),
    sld("id", None),
    sld("net", None),
    sld("org", NON_PROFIT),
];

/// Curated SLD tables keyed by ccTLD.
pub const COUNTRY_SLDS: &[(&str, &[SldEntry])] = &[
    ("au", AU_SLDS),
    ("fr", FR_SLDS),
    ("ua", UA_SLDS),
    ("uk", UK_SLDS),
];

/// SLDs under generic TLDs (`br.com`, `uk.net`) and the geography they imply.
pub const GENERIC_TLD_SLDS: &[GenericTldSld] = &[
    generic("ae", Some("United Arab Emirates"), None),
    generic("africa", None, Some(Region::SubSaharanAfrica)),
    generic("br", Some("Brazil"), None),
    generic("co", None, None),
    generic("de", Some("Germany"), Some(Region::WesternEurope)),
    generic("eu", None, Some(Region::WesternEurope)),
    generic("gb", Some("United Kingdom"), Some(Region::WesternEurope)),
    generic("jpn", Some("Japan"), Some(Region::EastAsia)),
    generic("kr", Some("South Korea"), Some(Region::EastAsia)),
    generic("mex", Some("Mexico"), Some(Region::LatinAmerica)),
    generic("ru", Some("Russia"), Some(Region::EasternEurope)),
    generic("sa", Some("Saudi Arabia"), Some(Region::MiddleEastAndNorthAfrica)),
    generic("uk", Some("United Kingdom"), Some(Region::WesternEurope)),
    generic("us", Some("United States of America"), Some(Region::WesternOffshoots)),
    generic("za", Some("South Africa"), Some(Region::SubSaharanAfrica)),
];

const fn sld(label: &'static str, category: Option<&'static str>) -> SldEntry {
    SldEntry { label, category }
}

const fn generic(
    label: &'static str,
    country: Option<&'static str>,
    region: Option<Region>,
) -> GenericTldSld {
    GenericTldSld {
        label,
        country,
        region,
    }
}
