//! Directive names.
//!
//! ```text
//! name ::= ascii_alpha *( ascii_alphanumeric | '-' | '_' )
//! ```
//!
//! A name may not end in `-` or `_`.

use crate::character::{is_ascii_alpha, is_name};
use crate::code::Code;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// ```text
/// > | @@note
///       ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer, token: Name) -> State {
    if is_ascii_alpha(tokenizer.current()) {
        tokenizer.enter(token);
        tokenizer.consume();
        State::Next(StateName::NameInside(token))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @@note
///        ^^^
/// ```
pub(crate) fn inside(tokenizer: &mut Tokenizer, token: Name) -> State {
    if is_name(tokenizer.current()) {
        tokenizer.consume();
        return State::Next(StateName::NameInside(token));
    }

    tokenizer.exit(token);

    if matches!(tokenizer.previous(), Some(Code::Char('-' | '_'))) {
        State::Nok
    } else {
        State::Ok
    }
}
