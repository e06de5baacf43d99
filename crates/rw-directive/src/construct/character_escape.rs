//! Character escapes: `\` followed by ASCII punctuation.
//!
//! An escaped `@` is data, and the `@` right after it may still start a
//! text directive: `\@@name` is a literal `@` followed by `@name`.

use crate::character::is_ascii_punctuation;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// ```text
/// > | a\@b
///      ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer) -> State {
    assert!(tokenizer.current().is('\\'), "expected `\\`");
    tokenizer.enter(Name::CharacterEscape);
    tokenizer.enter(Name::CharacterEscapeMarker);
    tokenizer.consume();
    tokenizer.exit(Name::CharacterEscapeMarker);
    State::Next(StateName::CharacterEscapeInside)
}

/// ```text
/// > | a\@b
///       ^
/// ```
pub(crate) fn inside(tokenizer: &mut Tokenizer) -> State {
    if is_ascii_punctuation(tokenizer.current()) {
        tokenizer.enter(Name::CharacterEscapeValue);
        tokenizer.consume();
        tokenizer.exit(Name::CharacterEscapeValue);
        tokenizer.exit(Name::CharacterEscape);
        State::Ok
    } else {
        State::Nok
    }
}
