//! Text directives: `@name[ns](args){attrs}` anywhere in a line.
//!
//! ```text
//! directive_text ::= '@' name [ namespace ] [ args ] [ attributes ]
//! ```
//!
//! Groups are read in relaxed mode, so they may span line endings. A text
//! directive cannot follow a literal `@`, which keeps the second half of
//! `@@name` from matching; use [`previous`] before attempting one.

use crate::code::Code;
use crate::construct::partial_args::{Args, ArgsNames};
use crate::construct::partial_attributes::{Attributes, AttributesNames};
use crate::construct::partial_namespace::{Namespace, NamespaceNames};
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

const NAMESPACE: Namespace = Namespace {
    names: NamespaceNames {
        namespace: Name::DirectiveTextNamespace,
        marker: Name::DirectiveTextNamespaceMarker,
        string: Name::DirectiveTextNamespaceString,
    },
    allow_eol: true,
};

const ARGS: Args = Args {
    names: ArgsNames {
        args: Name::DirectiveTextArgs,
        marker: Name::DirectiveTextArgsMarker,
        arg: Name::DirectiveTextArg,
        key: Name::DirectiveTextArgKey,
        initializer: Name::DirectiveTextArgInitializerMarker,
        literal: Name::DirectiveTextArgValueLiteral,
        value: Name::DirectiveTextArgValue,
        value_marker: Name::DirectiveTextArgValueMarker,
        data: Name::DirectiveTextArgValueData,
    },
    allow_eol: true,
};

const ATTRIBUTES: Attributes = Attributes {
    names: AttributesNames {
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
    },
    allow_eol: true,
};

/// Whether a text directive may start at the current `@`.
///
/// It may unless the code before is another `@`, and an `@` that was
/// itself escaped does not count.
pub(crate) fn previous(tokenizer: &Tokenizer) -> bool {
    tokenizer.previous() != Some(Code::Char('@'))
        || tokenizer
            .events()
            .last()
            .is_some_and(|event| event.name == Name::CharacterEscape)
}

/// ```text
/// > | a @b c
///       ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer) -> State {
    assert!(
        tokenizer.current().is('@'),
        "expected `@` at the start of a text directive"
    );
    assert!(previous(tokenizer), "text directive cannot follow `@`");
    tokenizer.enter(Name::DirectiveText);
    tokenizer.enter(Name::DirectiveTextMarker);
    tokenizer.consume();
    tokenizer.exit(Name::DirectiveTextMarker);
    tokenizer.attempt(State::Next(StateName::TextAfterName), State::Nok);
    State::Retry(StateName::NameStart(Name::DirectiveTextName))
}

/// ```text
/// > | a @b[c] d
///         ^
/// ```
pub(crate) fn after_name(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current() {
        Code::Char('@') => State::Nok,
        Code::Char('[') => {
            let next = State::Next(StateName::TextAfterNamespace);
            tokenizer.attempt(next, next);
            NAMESPACE.start()
        }
        _ => State::Retry(StateName::TextAfterNamespace),
    }
}

/// ```text
/// > | a @b[c](d) e
///            ^
/// ```
pub(crate) fn after_namespace(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current() {
        Code::Char('[') => State::Nok,
        Code::Char('(') => {
            let next = State::Next(StateName::TextAfterArgs);
            tokenizer.attempt(next, next);
            ARGS.start()
        }
        _ => State::Retry(StateName::TextAfterArgs),
    }
}

/// ```text
/// > | a @b(c){d} e
///            ^
/// ```
pub(crate) fn after_args(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('{') {
        let next = State::Next(StateName::TextAfterAttributes);
        tokenizer.attempt(next, next);
        ATTRIBUTES.start()
    } else {
        State::Retry(StateName::TextAfterAttributes)
    }
}

/// ```text
/// > | a @b{d} e
///            ^
/// ```
pub(crate) fn after_attributes(tokenizer: &mut Tokenizer) -> State {
    tokenizer.exit(Name::DirectiveText);
    State::Ok
}
