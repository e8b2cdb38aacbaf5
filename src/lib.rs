use error_set::error_set;
use std::process::Command;

pub mod diff;
pub mod language;
pub mod render;

pub use diff::{Diff, DiffSummary, FileDiff, FileStatus, Hunk, HunkHeader, parse_diff};

/// Revision compared against when no reference is given
pub const DEFAULT_REFERENCE: &str = "HEAD";

error_set! {
    /// Top-level error for cc-review operations
    ReviewError := {
        #[display("No changes against {reference}")]
        NoChanges { reference: String },
    } || GitCommandError

    /// Errors from git command execution
    GitCommandError := {
        #[display("Failed to run git diff: {message}")]
        DiffFailed { message: String },
        #[display("git diff failed: {stderr}")]
        DiffExitError { stderr: String },
        #[display("Invalid UTF-8 in git diff output: {message}")]
        InvalidUtf8 { message: String },
    }
}

/// Reads diffs out of a git repository
pub struct DiffSource<'a> {
    repo_path: &'a str,
}

impl<'a> DiffSource<'a> {
    /// Create a new DiffSource for the given repository path
    pub fn new(repo_path: &'a str) -> Self {
        Self { repo_path }
    }

    /// Diff the working tree against `reference`, or `HEAD` when absent, and
    /// parse the result.
    ///
    /// # Examples
    /// ```no_run
    /// # use cc_review::DiffSource;
    /// let source = DiffSource::new(".");
    /// let diff = source.review(None).unwrap(); // against HEAD
    /// let diff = source.review(Some("main")).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoChanges`] when git reports an empty diff, and
    /// the [`GitCommandError`] variants when git cannot be run or fails.
    pub fn review(&self, reference: Option<&str>) -> Result<Diff, ReviewError> {
        let raw = self.fetch(reference)?;

        if raw.trim().is_empty() {
            return Err(ReviewError::NoChanges {
                reference: reference.unwrap_or(DEFAULT_REFERENCE).to_string(),
            });
        }

        Ok(Diff::parse(&raw))
    }

    /// Get raw `git diff` output against `reference`, or `HEAD` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`GitCommandError`] if git cannot be spawned, exits non-zero,
    /// or prints something other than UTF-8.
    pub fn fetch(&self, reference: Option<&str>) -> Result<String, GitCommandError> {
        let reference = reference.unwrap_or(DEFAULT_REFERENCE);
        log::debug!("running git diff {reference} in {}", self.repo_path);

        let output = Command::new("git")
            .args([
                "-C",
                self.repo_path,
                "diff",
                "--no-ext-diff",
                "--no-color",
                "--src-prefix=a/",
                "--dst-prefix=b/",
                "--end-of-options",
                reference,
            ])
            .output()
            .map_err(|e| GitCommandError::DiffFailed {
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitCommandError::DiffExitError {
                stderr: stderr.into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| GitCommandError::InvalidUtf8 {
            message: e.to_string(),
        })
    }
}
