//! Case-insensitive name search

use regex::{Regex, RegexBuilder};

/// Matches names containing a search term, ignoring case.
///
/// The empty term matches every name.
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    pattern: Option<Regex>,
    lowercase: String,
}

impl SearchMatcher {
    pub fn new(search: &str) -> Self {
        if search.is_empty() {
            return Self {
                pattern: None,
                lowercase: String::new(),
            };
        }

        let pattern = RegexBuilder::new(&regex::escape(search))
            .case_insensitive(true)
            .build();
        if let Err(err) = &pattern {
            tracing::debug!(search, %err, "search term not usable as a pattern, comparing lowercase text");
        }
        Self {
            pattern: pattern.ok(),
            lowercase: search.to_lowercase(),
        }
    }

    pub fn is_match(&self, name: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(name),
            None => name.to_lowercase().contains(&self.lowercase),
        }
    }
}
