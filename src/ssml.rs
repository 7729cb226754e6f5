//! Minimal SSML envelope construction.
//!
//! The text is embedded verbatim. Nothing is escaped or validated, so callers
//! may place their own SSML elements (e.g. `<mark name="a" />`) inside it.

/// SSML namespace declared on the `<speak>` element.
pub const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

/// SSML version declared on the `<speak>` element.
pub const SSML_VERSION: &str = "1.0";

/// Wrap `text` in a `<speak>` envelope whose `xml:lang` is `language`.
pub fn wrap(text: &str, language: &str) -> String {
    format!(
        "\n<speak version=\"{SSML_VERSION}\" xmlns=\"{SSML_NAMESPACE}\" xml:lang=\"{language}\">\n{text}\n</speak>\n"
    )
}
