//! Hostname tokenization and base-domain resolution.
//!
//! This module decides which part of a hostname identifies the organization
//! behind it. Records are cached and deduplicated by that "base domain", so
//! `www.example.co.uk` and `shop.example.co.uk` must both resolve to
//! `example.co.uk`, while `www.example.com` resolves to `example.com`.
//!
//! Key functions:
//! - `Hostname::parse()` - Splits a lowercase hostname into labels
//! - `normalize_domain()` - Cleans user input into a hostname string
//! - `resolve()` - Derives base domain and structural category/geography
//! - `has_structural_sld()` - Whether a hostname carries a recognised SLD
//!
//! Resolution is a pure function of the hostname and the reference tables;
//! it never performs network calls.

mod hostname;
mod resolver;

pub use hostname::{normalize_domain, Hostname};
pub use resolver::{has_structural_sld, resolve, Resolution};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
