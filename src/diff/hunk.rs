//! Hunk header parsing and per-line cursor tracking.

use crate::error::{CheckError, Result};

/// Two-sided line cursor inside one hunk.
///
/// Each side holds the number of the last line consumed on that side, so the
/// header's start offsets minus one are stored right after `begin_hunk`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCursor {
    pub old_line_number: usize,
    pub new_line_number: usize,
}

/// Leading marker of a hunk body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    /// `+`: present only in the post-image.
    Added,
    /// `-`: present only in the pre-image.
    Removed,
    /// Present in both images (normally a leading space).
    Context,
    /// `\ No newline at end of file`; belongs to neither image.
    Annotation,
}

impl LineMarker {
    fn of(line: &str) -> Self {
        match line.as_bytes().first() {
            Some(b'+') => LineMarker::Added,
            Some(b'-') => LineMarker::Removed,
            Some(b'\\') => LineMarker::Annotation,
            _ => LineMarker::Context,
        }
    }
}

/// A countable hunk body line and the cursor position it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine {
    pub marker: LineMarker,
    pub old_line_number: usize,
    pub new_line_number: usize,
}

/// Result of classifying one physical diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// An `@@` line; it reset the cursor and is never pattern-checked.
    Header,
    Content(ContentLine),
}

/// Tracks old/new line numbers across the hunks of one file.
#[derive(Debug, Default)]
pub struct HunkLineTracker {
    cursor: LineCursor,
}

impl HunkLineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> LineCursor {
        self.cursor
    }

    /// Reset the cursor from a hunk header.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Cursor now sits one line before each side's start
    /// * `Err(CheckError::MalformedHunkHeader)` - Header does not parse
    pub fn begin_hunk(&mut self, header_line: &str) -> Result<()> {
        let (old_start, new_start) =
            parse_hunk_header(header_line).ok_or_else(|| CheckError::MalformedHunkHeader {
                line: header_line.trim_end().to_string(),
            })?;

        self.cursor = LineCursor {
            old_line_number: old_start.saturating_sub(1),
            new_line_number: new_start.saturating_sub(1),
        };
        Ok(())
    }

    /// Classify `line`, advancing the cursor for content lines.
    pub fn classify(&mut self, line: &str) -> Result<LineClass> {
        if line.starts_with("@@") {
            self.begin_hunk(line)?;
            return Ok(LineClass::Header);
        }

        let marker = LineMarker::of(line);
        match marker {
            LineMarker::Removed => self.cursor.old_line_number += 1,
            LineMarker::Added => self.cursor.new_line_number += 1,
            LineMarker::Context => {
                self.cursor.old_line_number += 1;
                self.cursor.new_line_number += 1;
            }
            LineMarker::Annotation => {}
        }

        Ok(LineClass::Content(ContentLine {
            marker,
            old_line_number: self.cursor.old_line_number,
            new_line_number: self.cursor.new_line_number,
        }))
    }
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start[,old_len] +new_start[,new_len] @@[ section heading]"
///
/// Returns (old_start, new_start) or None if parsing fails.
pub fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let line = line.strip_prefix("@@ ")?;

    // Closing marker, optionally followed by the section heading
    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let mut parts = range_part.split(' ').filter(|p| !p.is_empty());
    let old_part = parts.next()?.strip_prefix('-')?;
    let new_part = parts.next()?.strip_prefix('+')?;
    if parts.next().is_some() {
        return None;
    }

    let old_start = parse_range_start(old_part)?;
    let new_start = parse_range_start(new_part)?;

    Some((old_start, new_start))
}

/// Parse "start" or "start,len" and return start. Both must be decimal.
fn parse_range_start(range: &str) -> Option<usize> {
    let (start, len) = match range.split_once(',') {
        Some((start, len)) => (start, Some(len)),
        None => (range, None),
    };

    if let Some(len) = len {
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    if start.is_empty() || !start.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    start.parse().ok()
}
