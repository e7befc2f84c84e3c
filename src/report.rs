//! Aggregated result of one scan invocation.

use crate::diff::MatchedNames;
use crate::exit_codes;
use crate::pattern::PatternSet;

/// Running set of matched pattern names across a changeset.
#[derive(Debug, Default)]
pub struct ScanReport {
    matched: MatchedNames,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the names matched in one file.
    pub fn record<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.matched.extend(names);
    }

    #[cfg(test)]
    pub(crate) fn matched(&self) -> &MatchedNames {
        &self.matched
    }

    /// Render the `Patterns:` summary in pattern definition order.
    ///
    /// Returns an empty string when nothing matched.
    pub fn summarize(&self, patterns: &PatternSet) -> String {
        if self.matched.is_empty() {
            return String::new();
        }

        let mut out = String::from("Patterns:\n");
        for pattern in patterns {
            if self.matched.contains(pattern.name()) {
                out.push_str(&format!("{}: {}\n", pattern.name(), pattern.description()));
            }
        }
        out
    }

    /// 1 if any pattern matched, 0 otherwise.
    pub fn result_code(&self) -> i32 {
        if self.matched.is_empty() {
            exit_codes::CLEAN
        } else {
            exit_codes::MATCHES_FOUND
        }
    }
}
