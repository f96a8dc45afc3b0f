//! Properties of base-domain resolution over a spread of real-world hostnames.

use catsite::{normalize_domain, resolve, Hostname, ReferenceTables};

const HOSTS: &[&str] = &[
    "example.com",
    "www.example.com",
    "a.b.c.example.com",
    "kmsec.uk",
    "www.kmsec.uk",
    "example.co.uk",
    "mail.example.co.uk",
    "a.b.nhs.uk",
    "portal.example.gov.uk",
    "example.com.br",
    "example.br.com",
    "x.example.eu.com",
    "example.net.ua",
    "example.asso.fr",
    "example.edu.au",
    "whitehouse.gov",
    "co.uk",
    "br.com",
];

fn host(s: &str) -> Hostname {
    Hostname::parse(s).unwrap()
}

#[test]
fn test_base_domain_is_a_label_suffix_of_the_host() {
    let tables = ReferenceTables::builtin();
    for h in HOSTS {
        let base = resolve(&host(h), tables).base_domain;
        assert!(
            *h == base || h.ends_with(&format!(".{base}")),
            "{base} is not a suffix of {h}"
        );
    }
}

#[test]
fn test_base_domain_has_two_or_three_labels() {
    let tables = ReferenceTables::builtin();
    for h in HOSTS {
        let r = resolve(&host(h), tables);
        let labels = r.base_domain.split('.').count();
        assert!((2..=3).contains(&labels), "{h} -> {}", r.base_domain);
        assert_eq!(labels == 3, r.sld.is_some(), "{h}");
    }
}

#[test]
fn test_resolving_the_base_domain_is_a_fixed_point() {
    let tables = ReferenceTables::builtin();
    for h in HOSTS {
        let first = resolve(&host(h), tables);
        let second = resolve(&host(&first.base_domain), tables);
        assert_eq!(second.base_domain, first.base_domain, "{h}");
        assert_eq!(second.categories, first.categories, "{h}");
        assert_eq!(second.country, first.country, "{h}");
        assert_eq!(second.region, first.region, "{h}");
    }
}

#[test]
fn test_subdomains_share_a_base_domain() {
    let tables = ReferenceTables::builtin();
    let bases: Vec<String> = ["example.co.uk", "www.example.co.uk", "a.b.example.co.uk"]
        .iter()
        .map(|h| resolve(&host(h), tables).base_domain)
        .collect();
    assert!(bases.iter().all(|b| b == "example.co.uk"));
}

#[test]
fn test_normalized_user_input_resolves() {
    let tables = ReferenceTables::builtin();
    let cleaned = normalize_domain("  WWW.Example.Gov.UK ").unwrap();
    let r = resolve(&host(&cleaned), tables);
    assert_eq!(r.base_domain, "example.gov.uk");
    assert_eq!(r.categories, vec!["Government"]);
}
