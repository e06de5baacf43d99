//! Directive output types.

/// Output from a directive handler.
///
/// - [`Html`](Self::Html): replaces the directive as is
/// - [`Markdown`](Self::Markdown): replaces the directive after its own
///   directives are processed (for `@@include`)
/// - [`Skip`](Self::Skip): leaves the directive's source text in place
///
/// # Example
///
/// ```
/// use rw_directive::DirectiveOutput;
///
/// let output = DirectiveOutput::html("<kbd>Ctrl+C</kbd>");
/// assert!(matches!(output, DirectiveOutput::Html(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// Replacement text, not processed further.
    Html(String),
    /// Replacement text that may contain more directives.
    Markdown(String),
    /// Don't handle this directive (pass through unchanged).
    Skip,
}

impl DirectiveOutput {
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }

    #[must_use]
    pub fn markdown(s: impl Into<String>) -> Self {
        Self::Markdown(s.into())
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text or attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
