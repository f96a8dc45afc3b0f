//! Known-term extraction from free text.
//!
//! Model replies are free text. The first (or every) known industry or
//! country name mentioned in them is what counts; anything else is ignored.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

/// Case-insensitive matcher over a fixed list of terms.
///
/// Longer terms are tried first at each position, so "Information Technology
/// and Internet" wins over a shorter term it contains.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<String>,
    by_lowercase: HashMap<String, usize>,
    regex: Option<Regex>,
}

impl TermMatcher {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let mut kept: Vec<String> = Vec::new();
        let mut by_lowercase = HashMap::new();
        for term in terms {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }
            let key = term.to_lowercase();
            if !by_lowercase.contains_key(&key) {
                by_lowercase.insert(key, kept.len());
                kept.push(term.to_string());
            }
        }

        let mut ordered: Vec<&String> = kept.iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));
        let regex = if ordered.is_empty() {
            None
        } else {
            let pattern = ordered
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(re) => Some(re),
                Err(e) => {
                    log::error!("Failed to build term matcher over {} terms: {e}", kept.len());
                    None
                }
            }
        };

        Self {
            terms: kept,
            by_lowercase,
            regex,
        }
    }

    fn indices<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.regex
            .iter()
            .flat_map(move |re| re.find_iter(text))
            .filter_map(move |m| self.by_lowercase.get(&m.as_str().to_lowercase()).copied())
    }

    /// The term occurring earliest in `text`, in its canonical spelling.
    pub fn find_first(&self, text: &str) -> Option<&str> {
        self.indices(text).next().map(|i| self.terms[i].as_str())
    }

    /// Every distinct term in `text`, in order of first occurrence.
    pub fn find_all(&self, text: &str) -> Vec<&str> {
        let mut seen = vec![false; self.terms.len()];
        let mut found = Vec::new();
        for i in self.indices(text) {
            if !seen[i] {
                seen[i] = true;
                found.push(self.terms[i].as_str());
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// First known term mentioned in `text`.
pub fn extract_known_term<'t>(text: &str, terms: &[&'t str]) -> Option<&'t str> {
    let matcher = TermMatcher::new(terms);
    let found = matcher.find_first(text)?;
    terms.iter().copied().find(|t| *t == found)
}

/// All distinct known terms mentioned in `text`, in order of first occurrence.
pub fn extract_known_terms<'t>(text: &str, terms: &[&'t str]) -> Vec<&'t str> {
    let matcher = TermMatcher::new(terms);
    matcher
        .find_all(text)
        .into_iter()
        .filter_map(|found| terms.iter().copied().find(|t| *t == found))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDUSTRIES: &[&str] = &[
        "Information Technology and Internet",
        "Cybersecurity",
        "Social Network",
        "Financial Services",
        "E-commerce",
    ];

    #[test]
    fn test_find_first_is_case_insensitive() {
        assert_eq!(
            extract_known_term("this is a SOCIAL network site", INDUSTRIES),
            Some("Social Network")
        );
    }

    #[test]
    fn test_find_first_returns_earliest_occurrence() {
        assert_eq!(
            extract_known_term("Cybersecurity, Financial Services", INDUSTRIES),
            Some("Cybersecurity")
        );
        assert_eq!(
            extract_known_term("Financial Services, Cybersecurity", INDUSTRIES),
            Some("Financial Services")
        );
    }

    #[test]
    fn test_no_known_term() {
        assert_eq!(extract_known_term("a gardening blog", INDUSTRIES), None);
        assert!(extract_known_terms("", INDUSTRIES).is_empty());
    }

    #[test]
    fn test_find_all_deduplicates_in_order() {
        let found = extract_known_terms(
            "E-commerce; information technology and internet; e-commerce again",
            INDUSTRIES,
        );
        assert_eq!(found, vec!["E-commerce", "Information Technology and Internet"]);
    }

    #[test]
    fn test_longest_term_wins_at_same_position() {
        let terms = ["United States", "United States of America"];
        let matcher = TermMatcher::new(&terms);
        assert_eq!(
            matcher.find_first("Based in the United States of America."),
            Some("United States of America")
        );
        assert_eq!(matcher.find_all("united states"), vec!["United States"]);
    }

    #[test]
    fn test_terms_are_matched_literally() {
        let terms = ["C++ (language)", "a.b"];
        let matcher = TermMatcher::new(&terms);
        assert_eq!(matcher.find_first("about C++ (language)"), Some("C++ (language)"));
        assert_eq!(matcher.find_first("axb"), None);
    }

    #[test]
    fn test_empty_matcher_matches_nothing() {
        let matcher = TermMatcher::new::<&str>(&[]);
        assert!(matcher.is_empty());
        assert_eq!(matcher.find_first("anything"), None);

        let matcher = TermMatcher::new(&["", "x"]);
        assert_eq!(matcher.len(), 1);
    }
}
