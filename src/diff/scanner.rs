//! Pattern scanning over the added lines of one file's diff.

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

use console::style;
use regex::Match;

use crate::error::Result;
use crate::pattern::PatternSet;

use super::hunk::{HunkLineTracker, LineClass, LineMarker};

/// Names of the patterns that matched at least once.
pub type MatchedNames = BTreeSet<String>;

/// One pattern match on one added line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Post-image path of the file.
    pub file_path: String,
    /// Line number in the new file (1-based).
    pub line_number: usize,
    pub pattern_name: String,
    /// The added line (without '+') with the match highlighted and `\r` shown as `^M`.
    pub rendered_line: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.file_path, self.line_number, self.pattern_name, self.rendered_line
        )
    }
}

/// Receives findings as soon as they are produced.
pub trait FindingSink {
    fn emit(&mut self, finding: Finding) -> Result<()>;
}

impl FindingSink for Vec<Finding> {
    fn emit(&mut self, finding: Finding) -> Result<()> {
        self.push(finding);
        Ok(())
    }
}

/// Prints each finding as one line to a writer.
pub struct WriteSink<W> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> FindingSink for WriteSink<W> {
    fn emit(&mut self, finding: Finding) -> Result<()> {
        writeln!(self.writer, "{}", finding)?;
        Ok(())
    }
}

/// How the matched span is marked in a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Red background ANSI escape around the match.
    #[default]
    Ansi,
    /// No markup.
    Plain,
}

impl Highlight {
    /// Render `line` with `m` highlighted, replacing `\r` with `^M`.
    pub fn render(self, line: &str, m: Match<'_>) -> String {
        let rendered = match self {
            Highlight::Ansi => format!(
                "{}{}{}",
                &line[..m.start()],
                style(m.as_str()).on_red().force_styling(true),
                &line[m.end()..]
            ),
            Highlight::Plain => line.to_string(),
        };
        rendered.replace('\r', "^M")
    }
}

/// Runs a [`PatternSet`] over the added lines of a diff body.
#[derive(Debug, Clone, Copy)]
pub struct DiffScanner<'a> {
    patterns: &'a PatternSet,
    highlight: Highlight,
}

impl<'a> DiffScanner<'a> {
    pub fn new(patterns: &'a PatternSet, highlight: Highlight) -> Self {
        Self {
            patterns,
            highlight,
        }
    }

    /// Scan one file's diff body, emitting a finding per (added line, pattern) match.
    ///
    /// `diff_body` starts with the optional `---`/`+++` identity lines followed
    /// by one or more hunks. Lines are split on `\n` only so a trailing `\r`
    /// stays part of the line.
    ///
    /// # Returns
    ///
    /// * `Ok(MatchedNames)` - Names of patterns that matched in this file
    /// * `Err(CheckError::MalformedHunkHeader)` - Remaining hunks were not scanned
    pub fn scan<S>(&self, file_path: &str, diff_body: &str, sink: &mut S) -> Result<MatchedNames>
    where
        S: FindingSink + ?Sized,
    {
        let mut matched = MatchedNames::new();
        self.scan_into(file_path, diff_body, sink, &mut matched)?;
        Ok(matched)
    }

    /// Like [`scan`](Self::scan), but adds matched names to `matched` as
    /// findings are emitted.
    ///
    /// On error `matched` still holds every name emitted before the failure.
    pub fn scan_into<S>(
        &self,
        file_path: &str,
        diff_body: &str,
        sink: &mut S,
        matched: &mut MatchedNames,
    ) -> Result<()>
    where
        S: FindingSink + ?Sized,
    {
        let mut tracker = HunkLineTracker::new();

        for line in body_lines(diff_body) {
            let content = match tracker.classify(line)? {
                LineClass::Header => continue,
                LineClass::Content(content) => content,
            };
            if content.marker != LineMarker::Added {
                continue;
            }

            let added = &line[1..];
            for pattern in self.patterns {
                let Some(m) = pattern.regex().find(added) else {
                    continue;
                };
                matched.insert(pattern.name().to_string());
                sink.emit(Finding {
                    file_path: file_path.to_string(),
                    line_number: content.new_line_number,
                    pattern_name: pattern.name().to_string(),
                    rendered_line: self.highlight.render(added, m),
                })?;
            }
        }

        Ok(())
    }
}

/// Split a diff body into lines, skipping the leading file identity lines.
fn body_lines(diff_body: &str) -> impl Iterator<Item = &str> {
    let body = diff_body.strip_suffix('\n').unwrap_or(diff_body);
    let mut lines = body.split('\n').peekable();

    if body.is_empty() {
        lines.next();
    }
    if lines.next_if(|l| l.starts_with("--- ")).is_some() {
        lines.next_if(|l| l.starts_with("+++ "));
    }

    lines
}
