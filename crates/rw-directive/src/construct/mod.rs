//! Constructs: the grammars the tokenizer knows.
//!
//! Modules prefixed with `partial_` are pieces used by other constructs and
//! never run on their own. Each one ends in [`State::Ok`] or [`State::Nok`]
//! so callers can run it through [`Tokenizer::attempt`].
//!
//! | Construct | Syntax |
//! |---|---|
//! | [`directive_leaf`] | `@@name[ns](args){attrs}` on its own line |
//! | [`directive_text`] | `@name[ns](args){attrs}` anywhere in a line |
//! | [`character_escape`] | `\@` |
//! | [`document`] | everything else |
//!
//! [`State::Ok`]: crate::state::State::Ok
//! [`State::Nok`]: crate::state::State::Nok
//! [`Tokenizer::attempt`]: crate::tokenizer::Tokenizer::attempt

pub(crate) mod character_escape;
pub(crate) mod directive_leaf;
pub(crate) mod directive_text;
pub(crate) mod document;
pub(crate) mod partial_args;
pub(crate) mod partial_attributes;
pub(crate) mod partial_labels;
pub(crate) mod partial_name;
pub(crate) mod partial_namespace;
pub(crate) mod partial_separator;
pub(crate) mod partial_space;
pub(crate) mod partial_value;

#[cfg(test)]
pub(crate) mod test_util;
