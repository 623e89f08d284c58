//! Source code extraction from submission pages
//!
//! Public submissions render their code inside a `<pre>` whose class list
//! contains `program-source`. The element's text is returned verbatim.

use scraper::{Html, Selector};
use thiserror::Error;

/// Selects the rendered program source block
pub const SOURCE_SELECTOR: &str = r#"pre[class*="program-source"]"#;

/// Reasons no source could be taken from a page
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The page has no source block: private, removed, or an error page
    #[error("No program source on page{}", quoted_title(.title))]
    SourceNotFound { title: Option<String> },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

fn quoted_title(title: &Option<String>) -> String {
    title
        .as_ref()
        .map(|t| format!(" '{}'", t))
        .unwrap_or_default()
}

/// Returns the source code embedded in a submission page
///
/// The text of the first matching element is returned with entities decoded
/// and whitespace exactly as authored.
///
/// # Example
///
/// ```
/// use cf_crawler::crawler::extract_source;
///
/// let html = r#"<pre id="program-source-text" class="prettyprint program-source">int main() { return 0; }</pre>"#;
/// assert_eq!(extract_source(html).unwrap(), "int main() { return 0; }");
/// ```
pub fn extract_source(html: &str) -> Result<String, ExtractError> {
    let selector = Selector::parse(SOURCE_SELECTOR).map_err(|e| ExtractError::Selector {
        selector: SOURCE_SELECTOR.to_string(),
        message: format!("{:?}", e),
    })?;

    let document = Html::parse_document(html);

    match document.select(&selector).next() {
        Some(element) => Ok(element.text().collect()),
        None => Err(ExtractError::SourceNotFound {
            title: extract_title(&document),
        }),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
