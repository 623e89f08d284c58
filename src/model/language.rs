/// Language → file extension rules
///
/// Evaluated top to bottom, first substring match wins. `GNU C++` must stay
/// above `GNU C`: every C++ language name also contains `GNU C`.
pub const EXTENSION_RULES: &[(&str, &str)] = &[
    ("Java", ".java"),
    ("Py", ".py"),
    ("GNU C++", ".cpp"),
    ("GNU C", ".c"),
];

/// Returns the file extension (with leading dot) for a judge language name
///
/// Unknown languages map to an empty extension.
///
/// # Example
///
/// ```
/// use cf_crawler::model::file_extension;
///
/// assert_eq!(file_extension("GNU C++17 (64)"), ".cpp");
/// assert_eq!(file_extension("Kotlin 1.7"), "");
/// ```
pub fn file_extension(language: &str) -> &'static str {
    EXTENSION_RULES
        .iter()
        .find(|(needle, _)| language.contains(needle))
        .map(|(_, extension)| *extension)
        .unwrap_or("")
}
