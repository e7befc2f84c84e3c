use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository on `main` with one commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init", "-q"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    // Keep line endings byte-exact on every platform
    git(path, &["config", "core.autocrlf", "false"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    commit_file(path, "README.md", "# Test\n", "Initial commit");

    temp_dir
}

/// Write `content` to `relative` inside the repository, creating parent dirs.
pub(crate) fn write_file(repo_dir: &Path, relative: &str, content: &str) {
    let file = repo_dir.join(relative);
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(file, content).unwrap();
}

/// Write, stage and commit one file.
pub(crate) fn commit_file(repo_dir: &Path, relative: &str, content: &str, message: &str) {
    write_file(repo_dir, relative, content);
    git(repo_dir, &["add", relative]);
    git(repo_dir, &["commit", "-q", "-m", message]);
}

/// Run git in `repo_dir`, panicking with its output on failure.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
