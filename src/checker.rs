//! Scan orchestration: one checker, one changeset, one report.

use std::io::Write;
use std::path::Path;

use crate::config::{Config, MalformedHunkPolicy, ScanMode, ScanOptions};
use crate::diff::{DiffScanner, FileDiff, Highlight, MatchedNames, WriteSink};
use crate::error::{CheckError, Result};
use crate::filter::ChangesetFilter;
use crate::git;
use crate::pattern::PatternSet;
use crate::report::ScanReport;

/// Scans changesets for configured patterns.
#[derive(Debug)]
pub struct Checker {
    patterns: PatternSet,
    filter: ChangesetFilter,
    verbose: bool,
    highlight: Highlight,
    on_malformed_hunk: MalformedHunkPolicy,
}

impl Checker {
    pub fn new(patterns: PatternSet, filter: ChangesetFilter) -> Self {
        Self {
            patterns,
            filter,
            verbose: false,
            highlight: Highlight::default(),
            on_malformed_hunk: MalformedHunkPolicy::default(),
        }
    }

    /// Compile every pattern in `config`.
    ///
    /// # Returns
    ///
    /// * `Err(CheckError::PatternCompile)` - A content or path regex is invalid
    /// * `Err(CheckError::Config)` - Duplicate pattern names
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = PatternSet::compile(&config.patterns)?;
        let filter = ChangesetFilter::new(&config.ignores, &config.checks)?;
        Ok(Self::new(patterns, filter).with_malformed_hunk_policy(config.on_malformed_hunk))
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_malformed_hunk_policy(mut self, policy: MalformedHunkPolicy) -> Self {
        self.on_malformed_hunk = policy;
        self
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Scan the changeset git produces for `mode` in `repo`.
    ///
    /// Findings and the summary are written to `out` as they are produced.
    ///
    /// # Returns
    ///
    /// * `Ok(0)` - No pattern matched
    /// * `Ok(1)` - At least one pattern matched
    /// * `Err(_)` - Git failure, malformed diff or output error
    pub fn check<W: Write>(
        &self,
        repo: &Path,
        mode: ScanMode,
        revisions: &[String],
        out: &mut W,
    ) -> Result<i32> {
        let mut report = ScanReport::new();
        git::for_each_file_diff(repo, mode, revisions, |file| {
            self.check_file(&file, &mut report, out)
        })?;
        self.finish(&report, out)
    }

    /// Scan an already materialized changeset, in order.
    pub fn check_changeset<I, W>(&self, files: I, out: &mut W) -> Result<i32>
    where
        I: IntoIterator<Item = FileDiff>,
        W: Write,
    {
        let mut report = ScanReport::new();
        for file in files {
            self.check_file(&file, &mut report, out)?;
        }
        self.finish(&report, out)
    }

    fn check_file<W: Write>(
        &self,
        file: &FileDiff,
        report: &mut ScanReport,
        out: &mut W,
    ) -> Result<()> {
        // Deleted files have nothing added
        let Some(path) = file.path.as_deref() else {
            return Ok(());
        };
        if !self.filter.in_scope(path) {
            log::debug!("skipping {} (out of scope)", path);
            return Ok(());
        }

        if self.verbose {
            writeln!(out, "Checking {}", path)?;
        }

        let scanner = DiffScanner::new(&self.patterns, self.highlight);
        let mut matched = MatchedNames::new();
        let scanned = scanner.scan_into(
            path,
            &file.diff_text,
            &mut WriteSink::new(&mut *out),
            &mut matched,
        );
        // Findings before a failure are already printed
        report.record(matched);

        match scanned {
            Ok(()) => Ok(()),
            Err(CheckError::MalformedHunkHeader { line })
                if self.on_malformed_hunk == MalformedHunkPolicy::SkipFile =>
            {
                log::warn!("skipping rest of {}: malformed hunk header '{}'", path, line);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn finish<W: Write>(&self, report: &ScanReport, out: &mut W) -> Result<i32> {
        out.write_all(report.summarize(&self.patterns).as_bytes())?;
        out.flush()?;
        Ok(report.result_code())
    }
}

/// Run one full check for a front-end's options.
///
/// Usage errors are reported before the repository is touched.
pub fn run<W: Write>(options: &ScanOptions, out: &mut W) -> Result<i32> {
    options.validate()?;

    let start = options.repo.as_deref().unwrap_or_else(|| Path::new("."));
    let repo_root = git::get_repo_root(start)?;
    let config = Config::resolve(&repo_root, options.config_path.as_deref())?;

    let highlight = if options.color {
        Highlight::Ansi
    } else {
        Highlight::Plain
    };
    let checker = Checker::from_config(&config)?
        .with_verbose(options.verbose)
        .with_highlight(highlight);

    log::debug!(
        "checking {} with {} pattern(s), mode {}",
        repo_root.display(),
        checker.patterns().len(),
        options.mode
    );
    checker.check(&repo_root, options.mode, &options.revisions, out)
}
