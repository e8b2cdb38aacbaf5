pub mod file;
pub mod full;
pub mod hunk;

pub use file::{FileDiff, FileStatus};
pub use full::{Diff, DiffSummary, parse_diff};
pub use hunk::{Hunk, HunkHeader};
