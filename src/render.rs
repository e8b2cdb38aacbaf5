//! Terminal rendering of a parsed diff for review.
//!
//! Every function returns a `String` so output can be inspected before it is
//! printed. Colors come from [`colored`], which honours `NO_COLOR` and
//! [`colored::control::set_override`].

use crate::diff::{Diff, DiffSummary, FileDiff, FileStatus, Hunk};
use crate::language;
use colored::Colorize;

/// Width of banners and file rules
const RULE_WIDTH: usize = 80;

/// Summary block: file counts by status and total number of hunks
pub fn format_summary(summary: &DiffSummary) -> String {
    let banner = "=".repeat(RULE_WIDTH);
    let added = summary.added.to_string();
    let deleted = summary.deleted.to_string();

    let mut result = String::new();
    result.push_str(&format!("\n{}\n", banner));
    result.push_str(&format!("{}\n", "Diff Summary".bold().cyan()));
    result.push_str(&format!("{}\n\n", banner));
    result.push_str(&format!("Files changed: {}\n", summary.files));
    result.push_str(&format!("  - Modified: {}\n", summary.modified));
    result.push_str(&format!("  - New: {}\n", added.as_str().green()));
    result.push_str(&format!("  - Deleted: {}\n", deleted.as_str().red()));
    result.push_str(&format!("Total sections: {}\n", summary.hunks));
    result.push_str(&format!("{}\n", banner));
    result
}

/// File title line with status and language, followed by a rule
pub fn format_file_header(file_diff: &FileDiff) -> String {
    let status = match file_diff.status() {
        FileStatus::Added => format!(" {}", "(new file)".green()),
        FileStatus::Deleted => format!(" {}", "(deleted)".red()),
        FileStatus::Renamed => {
            let renamed = format!("(renamed from {})", file_diff.old_path);
            format!(" {}", renamed.as_str().yellow())
        }
        FileStatus::Modified => String::new(),
    };

    let label = language::label(&file_diff.new_path);
    let language_tag = if label == language::PLAIN_TEXT {
        String::new()
    } else {
        let tag = format!("[{}]", label);
        format!(" {}", tag.as_str().dimmed())
    };

    format!(
        "\n{} {}{}{}\n{}\n",
        "File:".bold().blue(),
        file_diff.new_path,
        status,
        language_tag,
        "─".repeat(RULE_WIDTH)
    )
}

/// Hunk header and lines; additions green, deletions red, context dimmed
pub fn format_hunk(hunk: &Hunk) -> String {
    let mut result = format!("\n{}\n", hunk.header.as_str().dimmed());

    for line in &hunk.lines {
        let styled = if line.starts_with('+') {
            line.as_str().green()
        } else if line.starts_with('-') {
            line.as_str().red()
        } else {
            line.as_str().dimmed()
        };
        result.push_str(&format!("{}\n", styled));
    }

    result
}

/// Full review: the summary, then every file header followed by its hunks
pub fn format_review(diff: &Diff) -> String {
    let mut result = format_summary(&diff.summary());

    for file_diff in &diff.files {
        result.push_str(&format_file_header(file_diff));
        for hunk in &file_diff.hunks {
            result.push_str(&format_hunk(hunk));
        }
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn summary_block() {
        plain();
        let summary = DiffSummary {
            files: 4,
            modified: 2,
            added: 1,
            deleted: 1,
            hunks: 7,
        };
        insta::assert_snapshot!(format_summary(&summary), @r"
================================================================================
Diff Summary
================================================================================

Files changed: 4
  - Modified: 2
  - New: 1
  - Deleted: 1
Total sections: 7
================================================================================
");
    }

    #[test]
    fn file_header_modified() {
        plain();
        let file = FileDiff::open("diff --git a/flake.nix b/flake.nix");
        assert_eq!(
            format_file_header(&file),
            format!("\nFile: flake.nix\n{}\n", "─".repeat(80))
        );
    }

    #[test]
    fn file_header_statuses() {
        plain();
        let mut file = FileDiff::open("diff --git a/src/old.rs b/src/new.rs");
        assert!(
            format_file_header(&file)
                .starts_with("\nFile: src/new.rs (renamed from src/old.rs) [rust]\n")
        );

        file.is_deleted = true;
        assert!(format_file_header(&file).starts_with("\nFile: src/new.rs (deleted) [rust]\n"));

        file.is_new = true;
        assert!(format_file_header(&file).starts_with("\nFile: src/new.rs (new file) [rust]\n"));
    }

    #[test]
    fn hunk_lines_in_order() {
        plain();
        let file = crate::parse_diff(
            "diff --git a/a.txt b/a.txt\n@@ -1,2 +1,3 @@\n line1\n-line2\n+line2-changed\n+line3",
        );
        assert_eq!(
            format_hunk(&file[0].hunks[0]),
            "\n@@ -1,2 +1,3 @@\n line1\n-line2\n+line2-changed\n+line3\n"
        );
    }

    #[test]
    fn review_lists_files_after_summary() {
        plain();
        let diff = Diff::parse(
            "diff --git a/one.py b/one.py
@@ -1 +1 @@
-a
+b
diff --git a/two.txt b/two.txt
new file mode 100644
@@ -0,0 +1 @@
+hello
",
        );
        let rendered = format_review(&diff);

        let summary = rendered.find("Diff Summary").unwrap();
        let one = rendered.find("File: one.py [python]").unwrap();
        let two = rendered.find("File: two.txt (new file)").unwrap();
        assert!(summary < one && one < two);
        assert!(rendered.contains("Files changed: 2\n  - Modified: 1\n  - New: 1\n"));
        assert!(rendered.contains("Total sections: 2\n"));
        assert!(rendered.ends_with("\n@@ -0,0 +1 @@\n+hello\n"));
    }
}
