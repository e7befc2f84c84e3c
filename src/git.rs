//! Git command runner for commitcheck.
//!
//! Provides a wrapper around git commands with captured output and structured
//! error handling, plus the streamed `git diff` used to build a changeset.

use crate::config::ScanMode;
use crate::diff::{ChangesetReader, FileDiff};
use crate::error::{CheckError, Result};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Options passed to every `git diff` so the output format is predictable
/// regardless of user configuration.
const DIFF_FORMAT_ARGS: &[&str] = &[
    "--no-color",
    "--no-ext-diff",
    "--src-prefix=a/",
    "--dst-prefix=b/",
];

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

fn git_command<P: AsRef<Path>>(cwd: P) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(cwd).args(["-c", "core.quotepath=off"]);
    cmd
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(CheckError::Git)` - Git could not be started or exited non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    log::debug!("running git {}", args.join(" "));

    let output = git_command(cwd).args(args).output().map_err(|e| {
        CheckError::Git(format!(
            "failed to execute git {}: {} (is git installed?)",
            args.first().unwrap_or(&""),
            e
        ))
    })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(CheckError::Git(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd, &["rev-parse", "--show-toplevel"]).map_err(|_| {
        CheckError::Git(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        )
    })?;
    Ok(PathBuf::from(output.stdout))
}

/// Build the `git diff` arguments for a scan mode.
///
/// | mode   | revisions | compares                                |
/// |--------|-----------|-----------------------------------------|
/// | diff   | -         | index vs working tree                   |
/// | diff   | c         | c vs working tree                       |
/// | staged | [c]       | c (default HEAD) vs index               |
/// | tree   | -         | HEAD vs working tree                    |
/// | tree   | b [a]     | b vs a (default working tree)           |
///
/// # Returns
///
/// * `Err(CheckError::Usage)` - More revisions than the mode accepts
pub fn diff_args(mode: ScanMode, revisions: &[String]) -> Result<Vec<String>> {
    mode.check_revisions(revisions)?;

    let mut args: Vec<String> = std::iter::once("diff")
        .chain(DIFF_FORMAT_ARGS.iter().copied())
        .map(String::from)
        .collect();

    match mode {
        ScanMode::Diff => {}
        ScanMode::Staged => args.push("--cached".to_string()),
        ScanMode::Tree if revisions.is_empty() => args.push("HEAD".to_string()),
        ScanMode::Tree => {}
    }
    args.extend(revisions.iter().cloned());
    // Keep revisions from being read as paths
    args.push("--".to_string());

    Ok(args)
}

/// Stream the changeset for `mode` file by file.
///
/// `each` is called with every file entry in git's output order. The git
/// process is killed if `each` fails.
///
/// # Returns
///
/// * `Ok(())` - Every entry was handled and git exited successfully
/// * `Err(CheckError::Git)` - Git could not be started or exited non-zero
/// * `Err(_)` - The first error returned by `each`
pub fn for_each_file_diff<P, F>(
    cwd: P,
    mode: ScanMode,
    revisions: &[String],
    mut each: F,
) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(FileDiff) -> Result<()>,
{
    let args = diff_args(mode, revisions)?;
    log::debug!("running git {}", args.join(" "));

    let mut child = git_command(cwd)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            CheckError::Git(format!(
                "failed to execute git diff: {} (is git installed?)",
                e
            ))
        })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| CheckError::Git("git diff stdout was not captured".to_string()))?;

    let streamed = ChangesetReader::new(BufReader::new(stdout))
        .try_for_each(|file| file.and_then(&mut each));

    if let Err(e) = streamed {
        let _ = child.kill();
        let _ = child.wait();
        return Err(e);
    }

    let status = child
        .wait()
        .map_err(|e| CheckError::Git(format!("failed to wait for git diff: {}", e)))?;
    if !status.success() {
        return Err(CheckError::Git(format!(
            "git diff failed (exit code {})",
            status.code().unwrap_or(-1)
        )));
    }

    Ok(())
}
