//! Named problem patterns.
//!
//! A [`PatternSet`] is compiled once per checker from the configured
//! [`PatternSpec`] list. Every regex is compiled up front, so an invalid
//! pattern is reported before any diff is fetched.

use crate::error::{CheckError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[cfg(test)]
mod tests;

/// Uncompiled pattern definition, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regular expression searched (unanchored) in each added line.
    pub pattern: String,
    /// Short identifier; `P%03d` by position when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human readable explanation printed in the summary.
    #[serde(default)]
    pub description: String,
}

impl PatternSpec {
    pub fn new(
        pattern: impl Into<String>,
        name: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.map(String::from),
            description: description.into(),
        }
    }
}

/// A compiled, named pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    name: String,
    description: String,
}

impl Pattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ordered collection of compiled patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile every spec, in order.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternSet)` - All patterns compiled
    /// * `Err(CheckError::PatternCompile)` - A regex is invalid
    /// * `Err(CheckError::Config)` - Two patterns share a name
    pub fn compile(specs: &[PatternSpec]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(specs.len());
        let mut seen = HashSet::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            let regex = Regex::new(&spec.pattern)
                .map_err(|e| CheckError::pattern_compile(&spec.pattern, e))?;

            let name = spec
                .name
                .clone()
                .unwrap_or_else(|| default_pattern_name(index));

            if !seen.insert(name.clone()) {
                return Err(CheckError::Config(format!(
                    "duplicate pattern name '{}'. Fix: give each pattern a unique name.",
                    name
                )));
            }

            patterns.push(Pattern {
                regex,
                name,
                description: spec.description.clone(),
            });
        }

        Ok(Self { patterns })
    }

    /// Iterate patterns in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Name given to the pattern at `index` when none is configured.
fn default_pattern_name(index: usize) -> String {
    format!("P{:03}", index)
}
