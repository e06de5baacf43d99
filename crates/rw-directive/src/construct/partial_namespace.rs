//! Namespaces: `[string]` after a directive name.
//!
//! ```text
//! namespace ::= '[' *( code - '[' - ']' ) ']'
//! ```
//!
//! The string may be empty. Line endings are only allowed in relaxed mode,
//! where each one is a [`Name::LineEnding`] inside the string.

use crate::character::is_line_ending;
use crate::code::Code;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// Token names for one namespace flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NamespaceNames {
    pub namespace: Name,
    pub marker: Name,
    pub string: Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Namespace {
    pub names: NamespaceNames,
    pub allow_eol: bool,
}

impl Namespace {
    pub fn start(self) -> State {
        State::Retry(StateName::NamespaceStart(self))
    }
}

/// ```text
/// > | @a[b]
///       ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer, ns: Namespace) -> State {
    assert!(tokenizer.current().is('['), "expected `[`");
    tokenizer.enter(ns.names.namespace);
    tokenizer.enter(ns.names.marker);
    tokenizer.consume();
    tokenizer.exit(ns.names.marker);
    State::Next(StateName::NamespaceBefore(ns))
}

/// ```text
/// > | @a[b]
///        ^
/// ```
pub(crate) fn before(tokenizer: &mut Tokenizer, ns: Namespace) -> State {
    if tokenizer.current().is(']') {
        State::Retry(StateName::NamespaceEnd(ns))
    } else {
        tokenizer.enter(ns.names.string);
        State::Retry(StateName::NamespaceInside(ns))
    }
}

/// ```text
/// > | @a[b c]
///        ^^^
/// ```
pub(crate) fn inside(tokenizer: &mut Tokenizer, ns: Namespace) -> State {
    match tokenizer.current() {
        Code::Char(']') => {
            tokenizer.exit(ns.names.string);
            State::Retry(StateName::NamespaceEnd(ns))
        }
        Code::Eof | Code::Char('[') => State::Nok,
        code if is_line_ending(code) => {
            if !ns.allow_eol {
                return State::Nok;
            }
            tokenizer.enter(Name::LineEnding);
            tokenizer.consume();
            tokenizer.exit(Name::LineEnding);
            State::Next(StateName::NamespaceInside(ns))
        }
        _ => {
            tokenizer.consume();
            State::Next(StateName::NamespaceInside(ns))
        }
    }
}

/// ```text
/// > | @a[b]
///         ^
/// ```
pub(crate) fn end(tokenizer: &mut Tokenizer, ns: Namespace) -> State {
    tokenizer.enter(ns.names.marker);
    tokenizer.consume();
    tokenizer.exit(ns.names.marker);
    tokenizer.exit(ns.names.namespace);
    State::Ok
}
