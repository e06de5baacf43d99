//! Attributes: `{#id .class key="value" flag}`.
//!
//! ```text
//! attributes ::= '{' [ separator ] *( entry [ separator ] ) '}'
//! entry      ::= '#' shortcut | '.' shortcut | key [ space ( '=' | ':' ) value ]
//! shortcut   ::= 1*( bareword - '.' )
//! ```
//!
//! A shortcut ends at the next `#` or `.`, so `.a.b#c` is two classes and
//! an id. A key without an initializer is an attribute without a value.

use crate::character::{
    is_bareword, is_initializer, is_key_start, is_line_ending, is_separator, is_shortcut,
    is_space,
};
use crate::code::Code;
use crate::construct::partial_separator::Separator;
use crate::construct::partial_space::SpaceOrTab;
use crate::construct::partial_value::{Value, ValueNames};
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AttributesNames {
    pub attributes: Name,
    pub marker: Name,
    pub attribute: Name,
    pub id: Name,
    pub id_marker: Name,
    pub id_value: Name,
    pub class: Name,
    pub class_marker: Name,
    pub class_value: Name,
    pub name: Name,
    pub initializer: Name,
    pub literal: Name,
    pub value: Name,
    pub value_marker: Name,
    pub data: Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Attributes {
    pub names: AttributesNames,
    pub allow_eol: bool,
}

impl Attributes {
    pub fn start(self) -> State {
        State::Retry(StateName::AttributesStart(self))
    }

    /// Names for a `#id` or `.class` shortcut: whole, marker, value.
    fn shortcut_names(self, kind: Shortcut) -> (Name, Name, Name) {
        match kind {
            Shortcut::Id => (self.names.id, self.names.id_marker, self.names.id_value),
            Shortcut::Class => (
                self.names.class,
                self.names.class_marker,
                self.names.class_value,
            ),
        }
    }
}

/// Kind of shortcut entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shortcut {
    /// `#id`
    Id,
    /// `.class`
    Class,
}

pub(crate) fn start(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    assert!(tokenizer.current().is('{'), "expected `{{`");
    tokenizer.enter(attrs.names.attributes);
    tokenizer.enter(attrs.names.marker);
    tokenizer.consume();
    tokenizer.exit(attrs.names.marker);
    State::Next(StateName::AttributesBetween(attrs))
}

/// Before an entry, a separator or the closing brace.
///
/// ```text
/// > | @a{#b .c d}
///        ^ ^ ^
/// ```
pub(crate) fn between(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    let code = tokenizer.current();

    match code {
        Code::Char('#') => State::Retry(StateName::AttributesShortcutStart(attrs, Shortcut::Id)),
        Code::Char('.') => {
            State::Retry(StateName::AttributesShortcutStart(attrs, Shortcut::Class))
        }
        Code::Char('}') => State::Retry(StateName::AttributesEnd(attrs)),
        _ if is_separator(code, attrs.allow_eol) => {
            tokenizer.attempt(State::Next(StateName::AttributesBetween(attrs)), State::Nok);
            Separator::new(attrs.allow_eol).start()
        }
        _ if is_key_start(code) => {
            tokenizer.enter(attrs.names.attribute);
            tokenizer.enter(attrs.names.name);
            tokenizer.consume();
            State::Next(StateName::AttributesName(attrs))
        }
        _ => State::Nok,
    }
}

/// ```text
/// > | @a{#b}
///        ^
/// ```
pub(crate) fn shortcut_start(tokenizer: &mut Tokenizer, attrs: Attributes, kind: Shortcut) -> State {
    let (whole, marker, _) = attrs.shortcut_names(kind);
    tokenizer.enter(attrs.names.attribute);
    tokenizer.enter(whole);
    tokenizer.enter(marker);
    tokenizer.consume();
    tokenizer.exit(marker);
    State::Next(StateName::AttributesShortcutStartAfter(attrs, kind))
}

/// ```text
/// > | @a{#b}
///         ^
/// ```
pub(crate) fn shortcut_start_after(
    tokenizer: &mut Tokenizer,
    attrs: Attributes,
    kind: Shortcut,
) -> State {
    if is_shortcut(tokenizer.current()) {
        let (_, _, value) = attrs.shortcut_names(kind);
        tokenizer.enter(value);
        tokenizer.consume();
        State::Next(StateName::AttributesShortcut(attrs, kind))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @a{#bc}
///          ^
/// ```
pub(crate) fn shortcut(tokenizer: &mut Tokenizer, attrs: Attributes, kind: Shortcut) -> State {
    let code = tokenizer.current();

    if is_shortcut(code) {
        tokenizer.consume();
        return State::Next(StateName::AttributesShortcut(attrs, kind));
    }

    if matches!(code, Code::Char('#' | '.' | '}')) || is_separator(code, attrs.allow_eol) {
        let (whole, _, value) = attrs.shortcut_names(kind);
        tokenizer.exit(value);
        tokenizer.exit(whole);
        tokenizer.exit(attrs.names.attribute);
        State::Retry(StateName::AttributesBetween(attrs))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @a{key="b"}
///         ^^
/// ```
pub(crate) fn name(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    if is_bareword(tokenizer.current()) {
        tokenizer.consume();
        return State::Next(StateName::AttributesName(attrs));
    }

    tokenizer.exit(attrs.names.name);
    tokenizer.attempt(
        State::Next(StateName::AttributesValue(attrs)),
        State::Next(StateName::AttributesAfterValue(attrs)),
    );
    State::Retry(StateName::AttributesNameAfter(attrs))
}

/// Optional space, then the initializer.
///
/// ```text
/// > | @a{key = "b"}
///           ^^
/// ```
pub(crate) fn name_after(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    let code = tokenizer.current();

    if is_initializer(code) {
        tokenizer.enter(attrs.names.initializer);
        tokenizer.consume();
        tokenizer.exit(attrs.names.initializer);
        State::Ok
    } else if is_space(code) {
        tokenizer.attempt(State::Next(StateName::AttributesNameAfter(attrs)), State::Nok);
        SpaceOrTab::new(Name::Whitespace).start()
    } else if attrs.allow_eol && is_line_ending(code) {
        tokenizer.enter(Name::LineEnding);
        tokenizer.consume();
        tokenizer.exit(Name::LineEnding);
        State::Next(StateName::AttributesNameAfter(attrs))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @a{key="b"}
///           ^
/// ```
pub(crate) fn value(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    tokenizer.attempt(
        State::Next(StateName::AttributesAfterValue(attrs)),
        State::Nok,
    );
    Value {
        names: ValueNames {
            literal: attrs.names.literal,
            value: attrs.names.value,
            marker: attrs.names.value_marker,
            data: attrs.names.data,
        },
        close: '}',
        allow_eol: attrs.allow_eol,
        split_on_comma: attrs.allow_eol,
    }
    .start()
}

/// After a value, or after a key that has none.
///
/// ```text
/// > | @a{key="b" c}
///               ^
/// ```
pub(crate) fn after_value(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    tokenizer.exit(attrs.names.attribute);
    let code = tokenizer.current();

    if code.is('}') || is_separator(code, attrs.allow_eol) {
        State::Retry(StateName::AttributesBetween(attrs))
    } else {
        State::Nok
    }
}

pub(crate) fn end(tokenizer: &mut Tokenizer, attrs: Attributes) -> State {
    tokenizer.enter(attrs.names.marker);
    tokenizer.consume();
    tokenizer.exit(attrs.names.marker);
    tokenizer.exit(attrs.names.attributes);
    State::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::test_util::{Outcome, names, run_construct};
    use pretty_assertions::assert_eq;

    const NAMES: AttributesNames = AttributesNames {
        attributes: Name::DirectiveTextAttributes,
        marker: Name::DirectiveTextAttributesMarker,
        attribute: Name::DirectiveTextAttribute,
        id: Name::DirectiveTextAttributeId,
        id_marker: Name::DirectiveTextAttributeIdMarker,
        id_value: Name::DirectiveTextAttributeIdValue,
        class: Name::DirectiveTextAttributeClass,
        class_marker: Name::DirectiveTextAttributeClassMarker,
        class_value: Name::DirectiveTextAttributeClassValue,
        name: Name::DirectiveTextAttributeName,
        initializer: Name::DirectiveTextAttributeInitializerMarker,
        literal: Name::DirectiveTextAttributeValueLiteral,
        value: Name::DirectiveTextAttributeValue,
        value_marker: Name::DirectiveTextAttributeValueMarker,
        data: Name::DirectiveTextAttributeValueData,
    };

    fn run(source: &str, allow_eol: bool) -> Outcome {
        run_construct(
            source,
            StateName::AttributesStart(Attributes {
                names: NAMES,
                allow_eol,
            }),
        )
    }

    #[test]
    fn test_shortcuts() {
        let outcome = run("{.a.b#c}", false);
        assert!(outcome.ok);
        assert_eq!(
            outcome.texts(Name::DirectiveTextAttributeClassValue),
            vec!["a", "b"]
        );
        assert_eq!(outcome.texts(Name::DirectiveTextAttributeIdValue), vec!["c"]);
        assert_eq!(outcome.texts(Name::DirectiveTextAttribute).len(), 3);
    }

    #[test]
    fn test_shortcut_needs_identifier() {
        for source in ["{#}", "{.}", "{# a}", "{#\"a\"}", "{#.a}", "{.=a}"] {
            assert!(!run(source, true).ok, "{source:?}");
        }
    }

    #[test]
    fn test_shortcut_invalid_code_inside() {
        assert!(!run("{#a\"b}", true).ok);
        assert!(!run("{#a=b}", true).ok);
        assert!(!run("{#a", true).ok);
    }

    #[test]
    fn test_key_value_and_flag() {
        let outcome = run("{key=\"b c\" flag x:y}", false);
        assert!(outcome.ok);
        assert_eq!(
            outcome.texts(Name::DirectiveTextAttributeName),
            vec!["key", "flag", "x"]
        );
        assert_eq!(
            outcome.texts(Name::DirectiveTextAttributeValue),
            vec!["b c", "y"]
        );
        assert_eq!(
            outcome.texts(Name::DirectiveTextAttribute),
            vec!["key=\"b c\"", "flag", "x:y"]
        );
    }

    #[test]
    fn test_space_around_initializer() {
        let outcome = run("{a = b}", false);
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::DirectiveTextAttributeValue), vec!["b"]);
    }

    #[test]
    fn test_flag_keeps_trailing_space_outside() {
        let outcome = run("{a  }", false);
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::DirectiveTextAttribute), vec!["a"]);
        assert_eq!(outcome.texts(Name::LineSuffix), vec!["  "]);
    }

    #[test]
    fn test_invalid_entry_start() {
        assert!(!run("{1a}", false).ok);
        assert!(!run("{\"a\"}", false).ok);
        assert!(!run("{a", false).ok);
    }

    #[test]
    fn test_relaxed_value_splits_on_commas() {
        let outcome = run("{a=\"x,y\nz\"}", true);
        assert!(outcome.ok);
        assert_eq!(
            outcome.texts(Name::DirectiveTextAttributeValueData),
            vec!["x", ",y", "z"]
        );

        assert!(!run("{a=\"x\ny\"}", false).ok);
    }

    #[test]
    fn test_empty() {
        let outcome = run("{}", false);
        assert!(outcome.ok);
        assert_eq!(
            names(&outcome.events),
            vec![
                Name::DirectiveTextAttributes,
                Name::DirectiveTextAttributesMarker,
                Name::DirectiveTextAttributesMarker,
            ]
        );
    }
}
