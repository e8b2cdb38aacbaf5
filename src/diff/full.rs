use super::file::{FILE_BOUNDARY, FileDiff};
use super::hunk::Hunk;

/// A complete git diff containing changes for multiple files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub files: Vec<FileDiff>,
}

/// File and hunk counts for a parsed diff.
///
/// `modified` is whatever is neither new nor deleted. A file flagged as both
/// is counted under `added` and `deleted`, so the parts may not sum to `files`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub files: usize,
    pub modified: usize,
    pub added: usize,
    pub deleted: usize,
    pub hunks: usize,
}

impl Diff {
    /// Parse a complete git diff output into file diffs
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Diff {
            files: parse_diff(text),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Count files by status along with the total number of hunks
    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        let files = self.files.len();
        let added = self.files.iter().filter(|f| f.is_new).count();
        let deleted = self.files.iter().filter(|f| f.is_deleted).count();

        DiffSummary {
            files,
            modified: files.saturating_sub(added).saturating_sub(deleted),
            added,
            deleted,
            hunks: self.files.iter().map(|f| f.hunks.len()).sum(),
        }
    }
}

impl std::fmt::Display for Diff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for file_diff in &self.files {
            write!(f, "{}", file_diff)?;
        }
        Ok(())
    }
}

/// What a raw diff line means to the parser, before cursor state is considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    FileBoundary,
    NewFile,
    DeletedFile,
    HunkHeader,
    Content,
    /// Index lines, `---`/`+++` headers, mode changes, `\ No newline` markers,
    /// blank lines and anything else the review has no use for
    Unrecognized,
}

impl LineKind {
    pub(crate) fn classify(line: &str) -> Self {
        if line.starts_with(FILE_BOUNDARY) {
            LineKind::FileBoundary
        } else if line.starts_with("new file mode") {
            LineKind::NewFile
        } else if line.starts_with("deleted file mode") {
            LineKind::DeletedFile
        } else if line.starts_with("@@") {
            LineKind::HunkHeader
        } else if Hunk::is_content_line(line) {
            LineKind::Content
        } else {
            LineKind::Unrecognized
        }
    }
}

/// Parse unified diff text into per-file records.
///
/// Single pass over the lines, keeping the file and hunk under construction.
/// Never fails: lines that make no sense where they appear are dropped.
/// File, hunk and line order all follow the input.
///
/// # Examples
///
/// ```
/// use cc_review::parse_diff;
///
/// let files = parse_diff(
///     "diff --git a/a.txt b/a.txt\n@@ -1,2 +1,3 @@\n line1\n-line2\n+line2-changed\n+line3",
/// );
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].hunks[0].lines.len(), 4);
/// ```
#[must_use]
pub fn parse_diff(text: &str) -> Vec<FileDiff> {
    let mut files = Vec::new();
    let mut current_file: Option<FileDiff> = None;
    let mut current_hunk: Option<Hunk> = None;

    for line in text.split('\n') {
        let kind = LineKind::classify(line);
        match kind {
            LineKind::FileBoundary => {
                close_hunk(&mut current_file, &mut current_hunk);
                files.extend(current_file.take());
                current_file = Some(FileDiff::open(line));
            }
            LineKind::NewFile | LineKind::DeletedFile => match current_file.as_mut() {
                Some(file) if kind == LineKind::NewFile => file.is_new = true,
                Some(file) => file.is_deleted = true,
                None => drop_line(kind, line),
            },
            LineKind::HunkHeader => {
                close_hunk(&mut current_file, &mut current_hunk);
                if current_file.is_none() {
                    drop_line(kind, line);
                    continue;
                }
                current_hunk = Hunk::open(line);
                if current_hunk.is_none() {
                    log::debug!("malformed hunk header: {line:?}");
                }
            }
            LineKind::Content => match current_hunk.as_mut() {
                Some(hunk) => hunk.lines.push(line.to_string()),
                None => drop_line(kind, line),
            },
            LineKind::Unrecognized => drop_line(kind, line),
        }
    }

    close_hunk(&mut current_file, &mut current_hunk);
    files.extend(current_file.take());

    log::debug!("parsed {} file(s) from diff", files.len());
    files
}

/// Move the open hunk, if any, onto the end of the open file
fn close_hunk(file: &mut Option<FileDiff>, hunk: &mut Option<Hunk>) {
    if let Some(hunk) = hunk.take()
        && let Some(file) = file.as_mut()
    {
        file.hunks.push(hunk);
    }
}

/// Fallback for every line that has no meaning in the current context
fn drop_line(kind: LineKind, line: &str) {
    log::trace!("dropping {kind:?} line: {line:?}");
}
