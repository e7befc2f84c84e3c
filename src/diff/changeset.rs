//! Splitting multi-file `git diff` output into per-file entries.

use std::io::BufRead;

use crate::error::Result;

use super::helpers::{parse_diff_git_line, parse_new_file_line};

const GIT_HEADER: &str = "diff --git ";

/// Headers of combined diffs, printed for unmerged paths.
const COMBINED_HEADERS: [&str; 2] = ["diff --cc ", "diff --combined "];

fn combined_path(line: &str) -> Option<&str> {
    COMBINED_HEADERS
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .map(|rest| rest.trim_end_matches(['\r', '\n']))
}

fn is_entry_header(line: &str) -> bool {
    line.starts_with(GIT_HEADER) || combined_path(line).is_some()
}

/// One file's entry in a changeset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Post-image path; None when the file was deleted.
    pub path: Option<String>,
    /// Unified diff body: `---`/`+++` identity lines followed by the hunks.
    /// Empty for binary files, mode-only changes and pure renames.
    pub diff_text: String,
}

/// Lazily reads [`FileDiff`] entries from `git diff` output.
///
/// Only one file's body is held in memory at a time. Anything before the
/// first `diff --git` line is ignored. Combined diff entries (`diff --cc`,
/// `diff --combined`) have no single pre-image and are skipped with a warning.
pub struct ChangesetReader<R> {
    reader: R,
    pending_header: Option<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> ChangesetReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending_header: None,
            buf: Vec::new(),
        }
    }

    /// Read one line including its terminator; None at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn next_header(&mut self) -> Result<Option<String>> {
        if let Some(header) = self.pending_header.take() {
            return Ok(Some(header));
        }
        while let Some(line) = self.read_line()? {
            if is_entry_header(&line) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Consume lines up to the next entry header.
    fn skip_entry(&mut self) -> Result<()> {
        while let Some(line) = self.read_line()? {
            if is_entry_header(&line) {
                self.pending_header = Some(line);
                break;
            }
        }
        Ok(())
    }

    fn read_file(&mut self) -> Result<Option<FileDiff>> {
        loop {
            let Some(header) = self.next_header()? else {
                return Ok(None);
            };
            if let Some(path) = combined_path(&header) {
                log::warn!("skipping combined diff for unmerged path {}", path);
                self.skip_entry()?;
                continue;
            }
            return self.read_entry(&header).map(Some);
        }
    }

    fn read_entry(&mut self, header: &str) -> Result<FileDiff> {
        let mut path = header.strip_prefix(GIT_HEADER).and_then(parse_diff_git_line);

        let mut diff_text = String::new();
        let mut in_body = false;
        let mut expect_new_path = false;

        while let Some(line) = self.read_line()? {
            if is_entry_header(&line) {
                self.pending_header = Some(line);
                break;
            }

            if !in_body {
                // Extended header lines (index, mode, rename, Binary files ...)
                if line.starts_with("--- ") {
                    in_body = true;
                    expect_new_path = true;
                    diff_text.push_str(&line);
                } else if line.starts_with("@@") {
                    in_body = true;
                    diff_text.push_str(&line);
                }
                continue;
            }

            if expect_new_path {
                expect_new_path = false;
                if let Some(rest) = line.strip_prefix("+++ ") {
                    if let Some(new_path) = parse_new_file_line(rest) {
                        path = new_path;
                    }
                }
            }
            diff_text.push_str(&line);
        }

        Ok(FileDiff { path, diff_text })
    }
}

impl<R: BufRead> Iterator for ChangesetReader<R> {
    type Item = Result<FileDiff>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_file().transpose()
    }
}

/// Parse a complete `git diff` output string into file entries.
pub fn parse_changeset(diff_output: &str) -> Result<Vec<FileDiff>> {
    ChangesetReader::new(diff_output.as_bytes()).collect()
}
