//! Args: `(a, "b c", key=value)`.
//!
//! ```text
//! args  ::= '(' [ separator ] *( entry [ separator ] ) ')'
//! entry ::= [ key ( '=' | ':' ) ] value
//! key   ::= ( ascii_alpha | '@' | '_' ) *bareword
//! ```
//!
//! The keyed form is tried first. If no initializer follows the key right
//! away, the entry is read again as a plain value.

use crate::character::{
    is_bareword, is_initializer, is_key_start, is_quote, is_separator,
};
use crate::construct::partial_separator::Separator;
use crate::construct::partial_value::{Value, ValueNames};
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// Token names for one args flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ArgsNames {
    pub args: Name,
    pub marker: Name,
    pub arg: Name,
    pub key: Name,
    pub initializer: Name,
    pub literal: Name,
    pub value: Name,
    pub value_marker: Name,
    pub data: Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Args {
    pub names: ArgsNames,
    pub allow_eol: bool,
}

impl Args {
    pub fn start(self) -> State {
        State::Retry(StateName::ArgsStart(self))
    }

    fn value(self) -> Value {
        Value {
            names: ValueNames {
                literal: self.names.literal,
                value: self.names.value,
                marker: self.names.value_marker,
                data: self.names.data,
            },
            close: ')',
            allow_eol: self.allow_eol,
            split_on_comma: false,
        }
    }
}

/// ```text
/// > | @a(b)
///       ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer, args: Args) -> State {
    assert!(tokenizer.current().is('('), "expected `(`");
    tokenizer.enter(args.names.args);
    tokenizer.enter(args.names.marker);
    tokenizer.consume();
    tokenizer.exit(args.names.marker);
    State::Next(StateName::ArgsBetween(args))
}

/// Before an entry, a separator or the closing paren.
///
/// ```text
/// > | @a(b, c)
///        ^ ^^^
/// ```
pub(crate) fn between(tokenizer: &mut Tokenizer, args: Args) -> State {
    let code = tokenizer.current();

    if code.is(')') {
        State::Retry(StateName::ArgsEnd(args))
    } else if is_separator(code, args.allow_eol) {
        tokenizer.attempt(State::Next(StateName::ArgsBetween(args)), State::Nok);
        Separator::new(args.allow_eol).start()
    } else if is_key_start(code) {
        tokenizer.enter(args.names.arg);
        let value = State::Next(StateName::ArgsValue(args));
        tokenizer.attempt(value, value);
        State::Retry(StateName::ArgsKeyStart(args))
    } else if is_quote(code) || is_bareword(code) {
        tokenizer.enter(args.names.arg);
        State::Retry(StateName::ArgsValue(args))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @a(key=b)
///        ^
/// ```
pub(crate) fn key_start(tokenizer: &mut Tokenizer, args: Args) -> State {
    tokenizer.enter(args.names.key);
    tokenizer.consume();
    State::Next(StateName::ArgsKeyInside(args))
}

/// ```text
/// > | @a(key=b)
///         ^^^
/// ```
pub(crate) fn key_inside(tokenizer: &mut Tokenizer, args: Args) -> State {
    let code = tokenizer.current();

    if is_bareword(code) {
        tokenizer.consume();
        State::Next(StateName::ArgsKeyInside(args))
    } else if is_initializer(code) {
        tokenizer.exit(args.names.key);
        tokenizer.enter(args.names.initializer);
        tokenizer.consume();
        tokenizer.exit(args.names.initializer);
        State::Ok
    } else {
        State::Nok
    }
}

/// ```text
/// > | @a(key=b)
///            ^
/// ```
pub(crate) fn value(tokenizer: &mut Tokenizer, args: Args) -> State {
    tokenizer.attempt(State::Next(StateName::ArgsAfterValue(args)), State::Nok);
    args.value().start()
}

/// ```text
/// > | @a("b" c)
///           ^
/// ```
pub(crate) fn after_value(tokenizer: &mut Tokenizer, args: Args) -> State {
    tokenizer.exit(args.names.arg);
    let code = tokenizer.current();

    if code.is(')') || is_separator(code, args.allow_eol) {
        State::Retry(StateName::ArgsBetween(args))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @a(b)
///         ^
/// ```
pub(crate) fn end(tokenizer: &mut Tokenizer, args: Args) -> State {
    tokenizer.enter(args.names.marker);
    tokenizer.consume();
    tokenizer.exit(args.names.marker);
    tokenizer.exit(args.names.args);
    State::Ok
}
