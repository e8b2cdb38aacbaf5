use super::hunk::Hunk;
use std::fmt;

/// Marker line that opens each file section of a git diff
pub const FILE_BOUNDARY: &str = "diff --git";

/// How a file changed, as shown to a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Deleted,
    Renamed,
    Modified,
}

/// A complete diff for a single file.
///
/// `is_new` and `is_deleted` are copied from the diff's status lines as-is;
/// nothing guarantees they are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Path before the change, `a/` prefix removed
    pub old_path: String,
    /// Path after the change, `b/` prefix removed
    pub new_path: String,
    pub is_new: bool,
    pub is_deleted: bool,
    /// Hunks in order of appearance
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Open an empty file record from a `diff --git a/<old> b/<new>` line.
    ///
    /// The last two tokens of the line are taken as the old and new paths and
    /// their two-character prefixes dropped. A line with fewer than two path
    /// tokens yields empty paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use cc_review::diff::file::FileDiff;
    ///
    /// let file = FileDiff::open("diff --git a/src/x.py b/src/y.py");
    /// assert_eq!(file.old_path, "src/x.py");
    /// assert_eq!(file.new_path, "src/y.py");
    /// assert!(file.hunks.is_empty());
    /// ```
    #[must_use]
    pub fn open(boundary_line: &str) -> Self {
        let tokens: Vec<&str> = boundary_line
            .strip_prefix(FILE_BOUNDARY)
            .unwrap_or(boundary_line)
            .split_whitespace()
            .collect();

        let (old_path, new_path) = match tokens.as_slice() {
            [.., old, new] => (strip_side_prefix(old), strip_side_prefix(new)),
            _ => (String::new(), String::new()),
        };

        FileDiff {
            old_path,
            new_path,
            is_new: false,
            is_deleted: false,
            hunks: Vec::new(),
        }
    }

    /// Whether the file moved (old and new paths differ)
    #[must_use]
    pub fn is_renamed(&self) -> bool {
        self.old_path != self.new_path
    }

    /// Status used for labelling. New wins over deleted, deleted over renamed.
    #[must_use]
    pub fn status(&self) -> FileStatus {
        if self.is_new {
            FileStatus::Added
        } else if self.is_deleted {
            FileStatus::Deleted
        } else if self.is_renamed() {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        }
    }
}

/// Drop the `a/` or `b/` side marker git puts in front of each path
fn strip_side_prefix(token: &str) -> String {
    token.chars().skip(2).collect()
}

impl fmt::Display for FileDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} a/{} b/{}",
            FILE_BOUNDARY, self.old_path, self.new_path
        )?;
        if self.is_new {
            writeln!(f, "new file mode 100644")?;
        }
        if self.is_deleted {
            writeln!(f, "deleted file mode 100644")?;
        }
        for hunk in &self.hunks {
            write!(f, "{}", hunk)?;
        }
        Ok(())
    }
}
