//! Tokenizer for `@@name` and `@name` directives.
//!
//! A directive is a name introduced by `@` with up to three optional
//! bracket groups:
//!
//! ```text
//! @@name[namespace](args){attributes}     leaf: alone on its line
//! @name[namespace](args){attributes}      text: anywhere in a line
//! ```
//!
//! # Architecture
//!
//! Source text is preprocessed into [`Code`]s and fed through a state
//! machine. Each construct is a set of states returning what to run next;
//! optional groups are tried speculatively and rolled back exactly when they
//! don't match, so a broken group never leaves partial tokens behind. The
//! result is a flat list of nested enter/exit [`Event`]s.
//!
//! On top of the events:
//!
//! - [`Directive`]: the structured value of one directive ([`parse`])
//! - [`DirectiveProcessor`]: replaces directives in a document with the
//!   output of registered [`LeafDirective`] and [`InlineDirective`] handlers
//!
//! # Example
//!
//! ```
//! use rw_directive::{ParseOptions, parse};
//!
//! let source = "See @ref[api](parse){.code} below.\n@@include(src=\"usage.md\")\n";
//! let directives = parse(source, &ParseOptions::default())?;
//!
//! assert_eq!(directives[0].name, "ref");
//! assert_eq!(directives[0].namespace.as_deref(), Some("api"));
//! assert_eq!(directives[1].arg("src"), Some("usage.md"));
//! # Ok::<(), rw_directive::CompileError>(())
//! ```

pub mod character;
mod code;
mod config;
mod construct;
mod directive;
mod event;
mod handler;
mod parser;
mod state;
mod tokenizer;

pub use code::{Code, Input, Point, TAB_SIZE};
pub use config::{ConfigError, ParenGroup, ParseOptions};
pub use directive::{
    Arg, Attribute, AttributeForm, CompileError, Directive, DirectiveKind, Group,
};
pub use event::{Event, Kind, Name, Token, tokens};
pub use handler::{
    DirectiveContext, DirectiveOutput, DirectiveProcessor, DirectiveProcessorConfig,
    InlineDirective, LeafDirective, ReadFileFn, escape_html,
};
pub use parser::{Tokens, parse, tokenize, tokenize_leaf, tokenize_text};
