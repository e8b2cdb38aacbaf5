//! Display labels for source files, keyed by extension.

/// Extension suffixes and the label shown for them
const LABELS: &[(&str, &str)] = &[
    (".py", "python"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".jsx", "javascript"),
    (".tsx", "typescript"),
    (".java", "java"),
    (".go", "go"),
    (".rs", "rust"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".h", "c"),
    (".hpp", "cpp"),
    (".css", "css"),
    (".html", "html"),
    (".json", "json"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".md", "markdown"),
    (".sh", "bash"),
    (".sql", "sql"),
];

/// Fallback label for unknown extensions
pub const PLAIN_TEXT: &str = "text";

/// Label for a path, or [`PLAIN_TEXT`] when the extension is unknown.
///
/// ```
/// use cc_review::language::label;
///
/// assert_eq!(label("src/main.rs"), "rust");
/// assert_eq!(label("Makefile"), "text");
/// ```
#[must_use]
pub fn label(path: &str) -> &'static str {
    LABELS
        .iter()
        .find(|(suffix, _)| path.ends_with(*suffix))
        .map_or(PLAIN_TEXT, |(_, label)| *label)
}
