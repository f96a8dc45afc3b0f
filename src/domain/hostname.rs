use std::fmt;
use std::str::FromStr;

use crate::config::{MAX_DOMAIN_LENGTH, MIN_DOMAIN_LENGTH};
use crate::error_handling::HostnameError;

/// A hostname split into its dot-separated labels.
///
/// Always holds at least two non-empty labels. Input is expected to be
/// lowercase and trimmed already; use [`normalize_domain`] for raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname {
    raw: String,
    labels: Vec<String>,
}

impl Hostname {
    /// Tokenizes a hostname.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, has fewer than two labels, or
    /// contains an empty label (`example..com`, `example.com.`).
    pub fn parse(input: &str) -> Result<Self, HostnameError> {
        if input.is_empty() {
            return Err(HostnameError::Empty);
        }

        let labels: Vec<String> = input.split('.').map(str::to_string).collect();
        if labels.len() < 2 {
            return Err(HostnameError::TooFewLabels(input.to_string()));
        }
        if labels.iter().any(String::is_empty) {
            return Err(HostnameError::EmptyLabel(input.to_string()));
        }

        Ok(Self {
            raw: input.to_string(),
            labels,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels (always >= 2).
    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    /// The top-level label, e.g. `uk` for `example.co.uk`.
    pub fn tld(&self) -> &str {
        &self.labels[self.labels.len() - 1]
    }

    /// The label before the TLD, only when a third label precedes it.
    ///
    /// For `example.co.uk` this is `co`. For `example.com` there is nothing to
    /// decide, so `None` is returned.
    pub fn sld_candidate(&self) -> Option<&str> {
        if self.labels.len() < 3 {
            return None;
        }
        Some(&self.labels[self.labels.len() - 2])
    }

    /// Joins the last `n` labels (or all of them if there are fewer).
    pub fn last(&self, n: usize) -> String {
        let start = self.labels.len().saturating_sub(n);
        self.labels[start..].join(".")
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Hostname {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hostname::parse(s)
    }
}

/// Cleans a user-supplied domain into a lowercase hostname string.
///
/// Trims whitespace, lowercases, and checks the characters, length, and
/// presence of a dot before round-tripping through `url::Url` to make sure it
/// is usable as a host.
///
/// # Errors
///
/// Returns `HostnameError::Invalid` when the input cannot be a hostname.
pub fn normalize_domain(raw: &str) -> Result<String, HostnameError> {
    let domain = raw.trim().to_lowercase();
    if domain.is_empty() {
        return Err(HostnameError::Empty);
    }

    let valid_chars = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    if !valid_chars
        || !domain.contains('.')
        || domain.len() < MIN_DOMAIN_LENGTH
        || domain.len() > MAX_DOMAIN_LENGTH
    {
        return Err(HostnameError::Invalid(domain));
    }

    let parsed = url::Url::parse(&format!("http://{}", domain))
        .map_err(|_| HostnameError::Invalid(domain.clone()))?;
    match parsed.host() {
        Some(url::Host::Domain(host)) => Ok(host.to_string()),
        // Dotted-quad input is a valid URL host but not a domain name
        _ => Err(HostnameError::Invalid(domain)),
    }
}
