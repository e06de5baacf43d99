//! Values of args, labels and attributes.
//!
//! ```text
//! value    ::= bareword | quoted
//! bareword ::= 1*( ascii_alphanumeric | '-' | '.' | '@' | '_' )
//! quoted   ::= '"' *( code - '"' ) '"' | "'" *( code - "'" ) "'"
//! ```
//!
//! A bareword must be followed by the closing bracket of its group or a
//! separator. Quoted values may span lines in relaxed mode; the spaces that
//! open a continuation line are a [`Name::LinePrefix`], not data.

use crate::character::{
    is_bareword, is_comma, is_line_ending, is_quote, is_separator, is_space, is_value_forbidden,
};
use crate::code::Code;
use crate::construct::partial_space::SpaceOrTab;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// Token names for one value flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ValueNames {
    /// Whole quoted value, markers included.
    pub literal: Name,
    /// Text between the markers, or the whole bareword.
    pub value: Name,
    pub marker: Name,
    pub data: Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Value {
    pub names: ValueNames,
    /// Closing bracket of the enclosing group.
    pub close: char,
    pub allow_eol: bool,
    /// Break quoted data at each comma.
    pub split_on_comma: bool,
}

impl Value {
    pub fn start(self) -> State {
        State::Retry(StateName::ValueBefore(self))
    }
}

/// A quoted value being read, with its opening quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Quoted {
    pub value: Value,
    pub marker: char,
}

/// ```text
/// > | (a="b")
///        ^
/// ```
pub(crate) fn before(tokenizer: &mut Tokenizer, value: Value) -> State {
    let code = tokenizer.current();

    if is_value_forbidden(code) || code.is(value.close) {
        return State::Nok;
    }

    if is_line_ending(code) {
        if !value.allow_eol {
            return State::Nok;
        }
        tokenizer.enter(Name::LineEnding);
        tokenizer.consume();
        tokenizer.exit(Name::LineEnding);
        return State::Next(StateName::ValueBefore(value));
    }

    if is_space(code) {
        tokenizer.attempt(State::Next(StateName::ValueBefore(value)), State::Nok);
        return SpaceOrTab::new(Name::Whitespace).start();
    }

    if let Code::Char(marker) = code
        && is_quote(code)
    {
        tokenizer.enter(value.names.literal);
        tokenizer.enter(value.names.marker);
        tokenizer.consume();
        tokenizer.exit(value.names.marker);
        tokenizer.trace("quoted value opened");
        return State::Next(StateName::ValueQuotedStart(Quoted { value, marker }));
    }

    if is_bareword(code) {
        tokenizer.enter(value.names.value);
        tokenizer.enter(value.names.data);
        tokenizer.consume();
        return State::Next(StateName::ValueUnquoted(value));
    }

    State::Nok
}

/// ```text
/// > | (abc)
///       ^^
/// ```
pub(crate) fn unquoted(tokenizer: &mut Tokenizer, value: Value) -> State {
    let code = tokenizer.current();

    if is_bareword(code) {
        tokenizer.consume();
        State::Next(StateName::ValueUnquoted(value))
    } else if code.is(value.close) || is_separator(code, value.allow_eol) {
        tokenizer.exit(value.names.data);
        tokenizer.exit(value.names.value);
        State::Ok
    } else {
        State::Nok
    }
}

/// At the opening quote's end, or right after the value's text.
///
/// ```text
/// > | ("a")
///        ^ ^
/// ```
pub(crate) fn quoted_start(tokenizer: &mut Tokenizer, quoted: Quoted) -> State {
    let names = quoted.value.names;

    if tokenizer.current().is(quoted.marker) {
        tokenizer.enter(names.marker);
        tokenizer.consume();
        tokenizer.exit(names.marker);
        tokenizer.exit(names.literal);
        tokenizer.trace("quoted value closed");
        State::Ok
    } else {
        tokenizer.enter(names.value);
        State::Retry(StateName::ValueQuotedBetween(quoted))
    }
}

/// ```text
/// > | ("a␊  b")
///        ^^ ^
/// ```
pub(crate) fn quoted_between(tokenizer: &mut Tokenizer, quoted: Quoted) -> State {
    let code = tokenizer.current();

    if code.is(quoted.marker) {
        tokenizer.exit(quoted.value.names.value);
        return State::Retry(StateName::ValueQuotedStart(quoted));
    }

    if code == Code::Eof {
        return State::Nok;
    }

    if is_line_ending(code) {
        if !quoted.value.allow_eol {
            return State::Nok;
        }
        tokenizer.enter(Name::LineEnding);
        tokenizer.consume();
        tokenizer.exit(Name::LineEnding);
        let next = State::Next(StateName::ValueQuotedBetween(quoted));
        tokenizer.attempt(next, next);
        return SpaceOrTab::new(Name::LinePrefix).start();
    }

    tokenizer.enter(quoted.value.names.data);
    tokenizer.consume();
    State::Next(StateName::ValueQuoted(quoted))
}

/// ```text
/// > | ("ab")
///         ^
/// ```
pub(crate) fn quoted(tokenizer: &mut Tokenizer, quoted: Quoted) -> State {
    let code = tokenizer.current();

    if code.is(quoted.marker)
        || code == Code::Eof
        || is_line_ending(code)
        || (quoted.value.split_on_comma && is_comma(code))
    {
        tokenizer.exit(quoted.value.names.data);
        State::Retry(StateName::ValueQuotedBetween(quoted))
    } else {
        tokenizer.consume();
        State::Next(StateName::ValueQuoted(quoted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::test_util::{Outcome, names, run_construct};
    use pretty_assertions::assert_eq;

    const NAMES: ValueNames = ValueNames {
        literal: Name::DirectiveTextArgValueLiteral,
        value: Name::DirectiveTextArgValue,
        marker: Name::DirectiveTextArgValueMarker,
        data: Name::DirectiveTextArgValueData,
    };

    fn run(source: &str, allow_eol: bool, split_on_comma: bool) -> Outcome {
        run_construct(
            source,
            StateName::ValueBefore(Value {
                names: NAMES,
                close: ')',
                allow_eol,
                split_on_comma,
            }),
        )
    }

    #[test]
    fn test_bareword() {
        let outcome = run("a.b-c@d_e)", false, false);
        assert!(outcome.ok);
        assert_eq!(outcome.index, 9);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValue), vec!["a.b-c@d_e"]);
        assert_eq!(
            names(&outcome.events),
            vec![Name::DirectiveTextArgValue, Name::DirectiveTextArgValueData]
        );
    }

    #[test]
    fn test_bareword_needs_terminator() {
        assert!(!run("abc", false, false).ok);
        assert!(!run("a/b)", false, false).ok);
        assert!(run("abc ", false, false).ok);
        assert!(run("abc,", false, false).ok);
    }

    #[test]
    fn test_quoted() {
        let outcome = run("\"a b)\")", false, false);
        assert!(outcome.ok);
        assert_eq!(outcome.index, 6);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValue), vec!["a b)"]);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValueLiteral), vec!["\"a b)\""]);
    }

    #[test]
    fn test_single_quotes_keep_double() {
        let outcome = run("'say \"hi\"'", false, false);
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValue), vec!["say \"hi\""]);
    }

    #[test]
    fn test_empty_quoted_has_no_value() {
        let outcome = run("\"\"", false, false);
        assert!(outcome.ok);
        assert_eq!(
            names(&outcome.events),
            vec![
                Name::DirectiveTextArgValueLiteral,
                Name::DirectiveTextArgValueMarker,
                Name::DirectiveTextArgValueMarker,
            ]
        );
    }

    #[test]
    fn test_unclosed_quote() {
        assert!(!run("\"abc", true, false).ok);
    }

    #[test]
    fn test_forbidden_start() {
        for source in ["=a", ":a", "<a", ">a", "`a", ")", ""] {
            assert!(!run(source, true, false).ok, "{source:?}");
        }
    }

    #[test]
    fn test_multiline_quoted() {
        assert!(!run("\"a\nb\"", false, false).ok);

        let outcome = run("\"a\n  b\"", true, false);
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValueData), vec!["a", "b"]);
        assert_eq!(outcome.texts(Name::LinePrefix), vec!["  "]);
        assert_eq!(outcome.texts(Name::LineEnding), vec!["\n"]);
    }

    #[test]
    fn test_split_on_comma() {
        let outcome = run("\"a,b\"", true, true);
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValueData), vec!["a", ",b"]);

        let outcome = run("\"a,b\"", true, false);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValueData), vec!["a,b"]);
    }

    #[test]
    fn test_leading_whitespace() {
        let outcome = run("  x)", false, false);
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::Whitespace), vec!["  "]);
        assert_eq!(outcome.texts(Name::DirectiveTextArgValue), vec!["x"]);
    }
}
