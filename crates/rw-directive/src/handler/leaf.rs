//! Leaf directive trait.

use super::{DirectiveContext, DirectiveOutput};
use crate::directive::Directive;

/// Handler for leaf directives: `@@name[ns](args){attrs}` on its own line.
///
/// Leaf directives are self-contained blocks. They can return markdown
/// (for `@@include`) or HTML (for `@@youtube`).
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its
/// own processor instance.
///
/// # Example
///
/// ```
/// use rw_directive::{Directive, DirectiveContext, DirectiveOutput, LeafDirective};
///
/// struct YoutubeDirective;
///
/// impl LeafDirective for YoutubeDirective {
///     fn name(&self) -> &str { "youtube" }
///
///     fn process(&mut self, directive: &Directive, _ctx: &DirectiveContext) -> DirectiveOutput {
///         let Some(id) = directive.positional().next() else {
///             return DirectiveOutput::Skip;
///         };
///         let width = directive.attribute("width").unwrap_or("560");
///         DirectiveOutput::html(format!(
///             r#"<iframe src="https://www.youtube.com/embed/{id}" width="{width}"></iframe>"#
///         ))
///     }
/// }
/// ```
pub trait LeafDirective: Send {
    /// Directive name, matched against `@@name`.
    fn name(&self) -> &str;

    /// Process the directive.
    ///
    /// Returns:
    /// - [`DirectiveOutput::Html`] to replace the directive
    /// - [`DirectiveOutput::Markdown`] for text whose own directives should
    ///   be processed too
    /// - [`DirectiveOutput::Skip`] to leave it as written
    fn process(&mut self, directive: &Directive, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Warnings generated during processing.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
