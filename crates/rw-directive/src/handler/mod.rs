//! Pluggable handlers for `@@name` and `@name` directives.
//!
//! [`DirectiveProcessor`] tokenizes a document, hands every recognized
//! directive to the handler registered under its name, and splices the
//! handler's output into the text. Everything else, including directives
//! nobody handles, passes through unchanged.
//!
//! # Directive Types
//!
//! - **Leaf** ([`LeafDirective`]): `@@name[ns](args){attrs}` alone on a line
//! - **Inline** ([`InlineDirective`]): `@name[ns](args){attrs}` within text
//!
//! # Example
//!
//! ```
//! use rw_directive::{
//!     Directive, DirectiveContext, DirectiveOutput, DirectiveProcessor, InlineDirective,
//!     escape_html,
//! };
//!
//! struct KbdDirective;
//!
//! impl InlineDirective for KbdDirective {
//!     fn name(&self) -> &str { "kbd" }
//!
//!     fn process(&mut self, directive: &Directive, _ctx: &DirectiveContext) -> DirectiveOutput {
//!         let keys: Vec<String> = directive.positional().map(escape_html).collect();
//!         DirectiveOutput::html(format!("<kbd>{}</kbd>", keys.join("+")))
//!     }
//! }
//!
//! let mut processor = DirectiveProcessor::new().with_inline(KbdDirective);
//!
//! let output = processor.process("Press @kbd(Ctrl, C) to copy.");
//! assert_eq!(output, "Press <kbd>Ctrl+C</kbd> to copy.");
//! ```

mod context;
mod inline;
mod leaf;
mod output;
mod processor;

pub use context::DirectiveContext;
pub use inline::InlineDirective;
pub use leaf::LeafDirective;
pub use output::{DirectiveOutput, escape_html};
pub use processor::{DirectiveProcessor, DirectiveProcessorConfig, ReadFileFn};
