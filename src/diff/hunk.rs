use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, space0, space1, u64 as line_number},
    combinator::opt,
    sequence::preceded,
};
use std::fmt;

/// Line ranges parsed from a `@@ -old[,count] +new[,count] @@` header.
///
/// Counts default to 1 when omitted, following the unified diff convention
/// for single-line hunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: u64,
    pub old_count: u64,
    pub new_start: u64,
    pub new_count: u64,
}

impl HunkHeader {
    /// Parse the ranges of a hunk header line.
    ///
    /// Anything after the ranges (the closing `@@` and git's section heading)
    /// is ignored. Returns `None` if the line is not a well-formed two-way hunk
    /// header or a line number does not fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cc_review::diff::hunk::HunkHeader;
    ///
    /// let header = HunkHeader::parse("@@ -10,5 +10,7 @@ fn main() {").unwrap();
    /// assert_eq!((header.old_start, header.old_count), (10, 5));
    /// assert_eq!((header.new_start, header.new_count), (10, 7));
    ///
    /// let header = HunkHeader::parse("@@ -5 +5 @@").unwrap();
    /// assert_eq!((header.old_count, header.new_count), (1, 1));
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        header(line).ok().map(|(_, header)| header)
    }
}

/// `@@ -<start>[,<count>] +<start>[,<count>] [@@]`
///
/// The closing marker is optional; some producers omit it.
fn header(input: &str) -> IResult<&str, HunkHeader> {
    (
        tag("@@"),
        space0,
        range('-'),
        space1,
        range('+'),
        opt((space0, tag("@@"))),
    )
        .map(
            |(_, _, (old_start, old_count), _, (new_start, new_count), _)| HunkHeader {
                old_start,
                old_count,
                new_start,
                new_count,
            },
        )
        .parse(input)
}

/// `<sign><start>[,<count>]`, count defaulting to 1
fn range<'a>(
    sign: char,
) -> impl Parser<&'a str, Output = (u64, u64), Error = nom::error::Error<&'a str>> {
    (
        char(sign),
        line_number,
        opt(preceded(char(','), line_number)),
    )
        .map(|(_, start, count)| (start, count.unwrap_or(1)))
}

/// One contiguous change region within a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// The hunk header line exactly as it appeared in the diff
    pub header: String,
    pub old_start: u64,
    pub old_count: u64,
    pub new_start: u64,
    pub new_count: u64,
    /// Raw diff lines, each still carrying its `+`, `-` or ` ` prefix
    pub lines: Vec<String>,
}

impl Hunk {
    /// Open an empty hunk from its header line.
    ///
    /// Returns `None` if the header ranges cannot be parsed.
    #[must_use]
    pub fn open(header_line: &str) -> Option<Self> {
        let header = HunkHeader::parse(header_line)?;

        Some(Hunk {
            header: header_line.to_string(),
            old_start: header.old_start,
            old_count: header.old_count,
            new_start: header.new_start,
            new_count: header.new_count,
            lines: Vec::new(),
        })
    }

    /// Whether a raw line is hunk content (addition, deletion or context)
    #[must_use]
    pub fn is_content_line(line: &str) -> bool {
        line.starts_with(['+', '-', ' '])
    }

    /// Number of added lines
    #[must_use]
    pub fn additions(&self) -> usize {
        self.lines.iter().filter(|l| l.starts_with('+')).count()
    }

    /// Number of deleted lines
    #[must_use]
    pub fn deletions(&self) -> usize {
        self.lines.iter().filter(|l| l.starts_with('-')).count()
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
