//! Inline directive trait.

use super::{DirectiveContext, DirectiveOutput};
use crate::directive::Directive;

/// Handler for text directives: `@name[ns](args){attrs}`.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its
/// own processor instance.
pub trait InlineDirective: Send {
    /// Directive name, matched against `@name`.
    fn name(&self) -> &str;

    /// Process the directive.
    ///
    /// Returns [`DirectiveOutput::Html`] to replace it, or
    /// [`DirectiveOutput::Skip`] to leave it as written.
    fn process(&mut self, directive: &Directive, ctx: &DirectiveContext) -> DirectiveOutput;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    struct TestAbbr;

    impl InlineDirective for TestAbbr {
        fn name(&self) -> &'static str {
            "abbr"
        }

        fn process(&mut self, directive: &Directive, _ctx: &DirectiveContext) -> DirectiveOutput {
            match (directive.positional().next(), directive.attribute("title")) {
                (Some(text), Some(title)) => {
                    DirectiveOutput::html(format!(r#"<abbr title="{title}">{text}</abbr>"#))
                }
                _ => DirectiveOutput::Skip,
            }
        }
    }

    #[test]
    fn test_inline_directive() {
        let directives = parse("@abbr(HTML){title=\"Markup\"} @abbr", &ParseOptions::default()).unwrap();
        let ctx = DirectiveContext {
            source_path: None,
            base_dir: Path::new("."),
            line: 1,
            column: 1,
            source: "",
            read_file: &|_| Ok(String::new()),
        };

        let mut abbr = TestAbbr;
        assert_eq!(abbr.name(), "abbr");
        assert_eq!(
            abbr.process(&directives[0], &ctx),
            DirectiveOutput::Html(r#"<abbr title="Markup">HTML</abbr>"#.to_owned())
        );
        assert_eq!(abbr.process(&directives[1], &ctx), DirectiveOutput::Skip);
    }
}
