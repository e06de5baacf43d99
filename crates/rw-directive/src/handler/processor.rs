//! Directive processor: splice handler output into a document.

use std::io;
use std::path::{Path, PathBuf};

use super::{DirectiveContext, DirectiveOutput, InlineDirective, LeafDirective};
use crate::config::ParseOptions;
use crate::directive::{Directive, DirectiveKind};
use crate::parser::tokenize;

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<String> + Send;

/// Configuration for the directive processor.
pub struct DirectiveProcessorConfig {
    /// Base directory for resolving relative paths (e.g., for `@@include`).
    pub base_dir: PathBuf,
    /// Path to the document being processed (if known).
    pub source_path: Option<PathBuf>,
    /// Callback to read files from the file system.
    ///
    /// Default: `std::fs::read_to_string`
    pub read_file: Option<Box<ReadFileFn>>,
    /// Maximum include depth to prevent infinite recursion.
    ///
    /// Default: 10
    pub max_include_depth: usize,
    /// Options used to tokenize every document, included ones too.
    pub options: ParseOptions,
}

impl Default for DirectiveProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            source_path: None,
            read_file: None,
            max_include_depth: 10,
            options: ParseOptions::default(),
        }
    }

    /// Set the base directory for resolving relative paths.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set the source file path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Set the file reading callback.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + 'static,
    {
        self.read_file = Some(Box::new(read_file));
        self
    }

    /// Set the maximum include depth.
    #[must_use]
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    /// Set the parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    fn create_context<'a>(&'a self, directive: &Directive, source: &'a str) -> DirectiveContext<'a> {
        DirectiveContext {
            source_path: self.source_path.as_deref(),
            base_dir: &self.base_dir,
            line: directive.start.line,
            column: directive.start.column,
            source,
            read_file: self.read_file.as_ref().map_or_else(
                || &default_read_file as &dyn Fn(&Path) -> io::Result<String>,
                |f| f.as_ref(),
            ),
        }
    }
}

fn default_read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Replaces directives in a document with the output of their handlers.
///
/// Handlers are looked up by directive kind and name; the first registered
/// handler with a matching name wins. Directives without a handler, and
/// directives whose handler returns [`DirectiveOutput::Skip`], are left as
/// written. Text between directives is copied unchanged.
///
/// # Example
///
/// ```
/// use rw_directive::{
///     Directive, DirectiveContext, DirectiveOutput, DirectiveProcessor,
///     DirectiveProcessorConfig, LeafDirective,
/// };
///
/// struct IncludeDirective;
///
/// impl LeafDirective for IncludeDirective {
///     fn name(&self) -> &str { "include" }
///
///     fn process(&mut self, directive: &Directive, ctx: &DirectiveContext) -> DirectiveOutput {
///         match directive.arg("src").map(|src| ctx.read(&ctx.resolve_path(src))) {
///             Some(Ok(contents)) => DirectiveOutput::markdown(contents),
///             _ => DirectiveOutput::Skip,
///         }
///     }
/// }
///
/// let config = DirectiveProcessorConfig::new()
///     .with_read_file(|_| Ok("Included text.".to_owned()));
/// let mut processor = DirectiveProcessor::with_config(config).with_leaf(IncludeDirective);
///
/// let output = processor.process("# Title\n@@include(src=\"part.md\")\n");
/// assert_eq!(output, "# Title\nIncluded text.\n");
/// ```
pub struct DirectiveProcessor {
    config: DirectiveProcessorConfig,
    inline_handlers: Vec<Box<dyn InlineDirective>>,
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    warnings: Vec<String>,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    /// Create a new directive processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DirectiveProcessorConfig::default())
    }

    /// Create a new directive processor with custom configuration.
    #[must_use]
    pub fn with_config(config: DirectiveProcessorConfig) -> Self {
        Self {
            config,
            inline_handlers: Vec::new(),
            leaf_handlers: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Register a text directive handler.
    #[must_use]
    pub fn with_inline<D: InlineDirective + 'static>(mut self, handler: D) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    /// Register a leaf directive handler.
    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self
    }

    /// Replace every handled directive in `input`.
    ///
    /// When a handler returns [`DirectiveOutput::Markdown`], the returned
    /// text is processed too (up to `max_include_depth` levels).
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        self.process_with_depth(input, 0)
    }

    fn process_with_depth(&mut self, input: &str, depth: usize) -> String {
        if depth > self.config.max_include_depth {
            self.warnings.push(format!(
                "Maximum include depth ({}) exceeded",
                self.config.max_include_depth
            ));
            tracing::warn!(
                max_depth = self.config.max_include_depth,
                "Maximum include depth exceeded"
            );
            return input.to_owned();
        }

        let directives = match tokenize(input, &self.config.options).directives() {
            Ok(directives) => directives,
            Err(e) => {
                self.warnings.push(format!("Failed to read directives: {e}"));
                tracing::warn!(error = %e, "Failed to read directives");
                return input.to_owned();
            }
        };

        let mut output = String::with_capacity(input.len());
        let mut cursor = 0;

        for directive in &directives {
            let (start, end) = (directive.start.offset, directive.end.offset);
            let source = &input[start..end];
            output.push_str(&input[cursor..start]);

            match self.dispatch(directive, source) {
                DirectiveOutput::Html(html) => output.push_str(&html),
                DirectiveOutput::Markdown(markdown) => {
                    let processed = self.process_with_depth(&markdown, depth + 1);
                    output.push_str(&processed);
                }
                DirectiveOutput::Skip => output.push_str(source),
            }

            cursor = end;
        }

        output.push_str(&input[cursor..]);
        output
    }

    fn dispatch(&mut self, directive: &Directive, source: &str) -> DirectiveOutput {
        let name = directive.name.as_str();
        let ctx = self.config.create_context(directive, source);

        let output = match directive.kind {
            DirectiveKind::Leaf => self
                .leaf_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map(|h| h.process(directive, &ctx)),
            DirectiveKind::Text => self
                .inline_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map(|h| h.process(directive, &ctx)),
        };

        output.unwrap_or_else(|| {
            tracing::debug!(
                name,
                kind = ?directive.kind,
                line = directive.start.line,
                "No handler for directive"
            );
            DirectiveOutput::Skip
        })
    }

    /// Warnings from the processor and every leaf handler.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut all = self.warnings.clone();
        for handler in &self.leaf_handlers {
            all.extend(handler.warnings().iter().cloned());
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParenGroup;
    use crate::handler::escape_html;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(DirectiveProcessor: Send);

    struct Kbd;

    impl InlineDirective for Kbd {
        fn name(&self) -> &'static str {
            "kbd"
        }

        fn process(&mut self, directive: &Directive, _ctx: &DirectiveContext) -> DirectiveOutput {
            let keys: Vec<String> = directive.positional().map(escape_html).collect();
            if keys.is_empty() {
                return DirectiveOutput::Skip;
            }
            DirectiveOutput::html(format!("<kbd>{}</kbd>", keys.join("+")))
        }
    }

    /// Reports where each directive was found.
    struct Where;

    impl LeafDirective for Where {
        fn name(&self) -> &'static str {
            "where"
        }

        fn process(&mut self, _directive: &Directive, ctx: &DirectiveContext) -> DirectiveOutput {
            DirectiveOutput::html(format!("<!-- {} {} -->", ctx.location(), ctx.source))
        }
    }

    struct Include {
        warnings: Vec<String>,
    }

    impl LeafDirective for Include {
        fn name(&self) -> &'static str {
            "include"
        }

        fn process(&mut self, directive: &Directive, ctx: &DirectiveContext) -> DirectiveOutput {
            let Some(src) = directive.arg("src") else {
                self.warnings
                    .push(format!("{}: include without src", ctx.location()));
                return DirectiveOutput::Skip;
            };
            match ctx.read(&ctx.resolve_path(src)) {
                Ok(contents) => DirectiveOutput::markdown(contents),
                Err(e) => {
                    self.warnings
                        .push(format!("{}: cannot include {src}: {e}", ctx.location()));
                    DirectiveOutput::Skip
                }
            }
        }

        fn warnings(&self) -> &[String] {
            &self.warnings
        }
    }

    fn include() -> Include {
        Include {
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_text_directive_replaced() {
        let mut processor = DirectiveProcessor::new().with_inline(Kbd);
        let output = processor.process("Press @kbd(Ctrl, \"<C>\") to copy.\n");
        assert_eq!(output, "Press <kbd>Ctrl+&lt;C&gt;</kbd> to copy.\n");
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_unknown_directive_passthrough() {
        let mut processor = DirectiveProcessor::new().with_inline(Kbd);
        let input = "@@unknown[ns](a){.c}\nSee @other(x, y=\"z\") here.\n";
        assert_eq!(processor.process(input), input);
    }

    #[test]
    fn test_skip_passthrough() {
        let mut processor = DirectiveProcessor::new().with_inline(Kbd);
        let input = "Just @kbd here, and @kbd{.big} there.";
        assert_eq!(processor.process(input), input);
    }

    #[test]
    fn test_leaf_and_text_dispatch_by_kind() {
        let mut processor = DirectiveProcessor::new().with_inline(Kbd);
        // `kbd` is only registered for text directives.
        let input = "@@kbd(a)\n";
        assert_eq!(processor.process(input), input);
    }

    #[test]
    fn test_context_location() {
        let config = DirectiveProcessorConfig::new().with_source_path("guide.md");
        let mut processor = DirectiveProcessor::with_config(config).with_leaf(Where);

        let output = processor.process("intro\n\n  @@where(x){.a}\n");
        assert_eq!(output, "intro\n\n  <!-- guide.md:3:3 @@where(x){.a} -->\n");
    }

    #[test]
    fn test_include_markdown_processed() {
        let config = DirectiveProcessorConfig::new()
            .with_base_dir("/docs")
            .with_read_file(|path| {
                if path == Path::new("/docs/keys.md") {
                    Ok("Use @kbd(Esc).".to_owned())
                } else {
                    Err(io::Error::new(io::ErrorKind::NotFound, "not found"))
                }
            });
        let mut processor = DirectiveProcessor::with_config(config)
            .with_inline(Kbd)
            .with_leaf(include());

        let output = processor.process("# Keys\n@@include(src=\"keys.md\")\n");
        assert_eq!(output, "# Keys\nUse <kbd>Esc</kbd>.\n");
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_handler_warnings_collected() {
        let config = DirectiveProcessorConfig::new()
            .with_read_file(|_| Err(io::Error::new(io::ErrorKind::NotFound, "not found")));
        let mut processor = DirectiveProcessor::with_config(config).with_leaf(include());

        let input = "@@include(src=missing.md)\n@@include\n";
        assert_eq!(processor.process(input), input);

        let warnings = processor.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("1:1: cannot include missing.md"));
        assert_eq!(warnings[1], "2:1: include without src");
    }

    #[test]
    fn test_include_depth_limit() {
        let config = DirectiveProcessorConfig::new()
            .with_max_include_depth(2)
            .with_read_file(|_| Ok("@@include(src=self.md)".to_owned()));
        let mut processor = DirectiveProcessor::with_config(config).with_leaf(include());

        let output = processor.process("@@include(src=self.md)");
        assert_eq!(output, "@@include(src=self.md)");
        assert_eq!(
            processor.warnings(),
            vec!["Maximum include depth (2) exceeded".to_owned()]
        );
    }

    #[test]
    fn test_options_apply() {
        let config = DirectiveProcessorConfig::new()
            .with_options(ParseOptions::default().with_text(false));
        let mut processor = DirectiveProcessor::with_config(config).with_inline(Kbd);

        let input = "Press @kbd(Esc).";
        assert_eq!(processor.process(input), input);
    }

    #[test]
    fn test_labels_group() {
        struct Tags;

        impl LeafDirective for Tags {
            fn name(&self) -> &'static str {
                "tags"
            }

            fn process(&mut self, directive: &Directive, _ctx: &DirectiveContext) -> DirectiveOutput {
                DirectiveOutput::html(directive.labels().join(" | "))
            }
        }

        let config = DirectiveProcessorConfig::new()
            .with_options(ParseOptions::default().with_leaf_group(ParenGroup::Labels));
        let mut processor = DirectiveProcessor::with_config(config).with_leaf(Tags);

        assert_eq!(processor.process("@@tags(rust, \"two words\")"), "rust | two words");
    }

    #[test]
    fn test_escape_left_in_place() {
        let mut processor = DirectiveProcessor::new().with_inline(Kbd);
        assert_eq!(
            processor.process("mail\\@kbd(x) or \\@@kbd(y)"),
            "mail\\@kbd(x) or \\@<kbd>y</kbd>"
        );
    }
}
