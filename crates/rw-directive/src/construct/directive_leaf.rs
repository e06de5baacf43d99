//! Leaf directives: `@@name[ns](args){attrs}` alone on a line.
//!
//! ```text
//! directive_leaf ::= '@@' name [ namespace ] [ group ] [ attributes ] *space ( EOL | EOF )
//! group          ::= args | labels
//! ```
//!
//! Every group is read in strict mode: nothing inside may span a line
//! ending. The parenthesized group is read as args or as labels depending
//! on [`ParseOptions::leaf_group`](crate::ParseOptions::leaf_group). An
//! optional group that fails to parse is rolled back, and the directive
//! fails only if its opening bracket is not allowed where it is left.

use crate::character::{is_line_ending, is_space};
use crate::code::Code;
use crate::config::ParenGroup;
use crate::construct::partial_args::{Args, ArgsNames};
use crate::construct::partial_attributes::{Attributes, AttributesNames};
use crate::construct::partial_labels::{Labels, LabelsNames};
use crate::construct::partial_namespace::{Namespace, NamespaceNames};
use crate::construct::partial_space::SpaceOrTab;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

const NAMESPACE: Namespace = Namespace {
    names: NamespaceNames {
        namespace: Name::DirectiveLeafNamespace,
        marker: Name::DirectiveLeafNamespaceMarker,
        string: Name::DirectiveLeafNamespaceString,
    },
    allow_eol: false,
};

const ARGS: Args = Args {
    names: ArgsNames {
        args: Name::DirectiveLeafArgs,
        marker: Name::DirectiveLeafArgsMarker,
        arg: Name::DirectiveLeafArg,
        key: Name::DirectiveLeafArgKey,
        initializer: Name::DirectiveLeafArgInitializerMarker,
        literal: Name::DirectiveLeafArgValueLiteral,
        value: Name::DirectiveLeafArgValue,
        value_marker: Name::DirectiveLeafArgValueMarker,
        data: Name::DirectiveLeafArgValueData,
    },
    allow_eol: false,
};

const LABELS: Labels = Labels {
    names: LabelsNames {
        labels: Name::DirectiveLeafLabels,
        marker: Name::DirectiveLeafLabelsMarker,
        label: Name::DirectiveLeafLabel,
        literal: Name::DirectiveLeafLabelValueLiteral,
        value: Name::DirectiveLeafLabelValue,
        value_marker: Name::DirectiveLeafLabelValueMarker,
        data: Name::DirectiveLeafLabelValueData,
    },
    allow_eol: false,
};

const ATTRIBUTES: Attributes = Attributes {
    names: AttributesNames {
        attributes: Name::DirectiveLeafAttributes,
        marker: Name::DirectiveLeafAttributesMarker,
        attribute: Name::DirectiveLeafAttribute,
        id: Name::DirectiveLeafAttributeId,
        id_marker: Name::DirectiveLeafAttributeIdMarker,
        id_value: Name::DirectiveLeafAttributeIdValue,
        class: Name::DirectiveLeafAttributeClass,
        class_marker: Name::DirectiveLeafAttributeClassMarker,
        class_value: Name::DirectiveLeafAttributeClassValue,
        name: Name::DirectiveLeafAttributeName,
        initializer: Name::DirectiveLeafAttributeInitializerMarker,
        literal: Name::DirectiveLeafAttributeValueLiteral,
        value: Name::DirectiveLeafAttributeValue,
        value_marker: Name::DirectiveLeafAttributeValueMarker,
        data: Name::DirectiveLeafAttributeValueData,
    },
    allow_eol: false,
};

/// ```text
/// > | @@a
///     ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer) -> State {
    assert!(
        tokenizer.current().is('@'),
        "expected `@` at the start of a leaf directive"
    );
    tokenizer.enter(Name::DirectiveLeaf);
    tokenizer.enter(Name::DirectiveLeafSequence);
    tokenizer.consume();
    State::Next(StateName::LeafInStart)
}

/// ```text
/// > | @@a
///      ^
/// ```
pub(crate) fn in_start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('@') {
        tokenizer.consume();
        tokenizer.exit(Name::DirectiveLeafSequence);
        tokenizer.attempt(State::Next(StateName::LeafAfterName), State::Nok);
        State::Retry(StateName::NameStart(Name::DirectiveLeafName))
    } else {
        State::Nok
    }
}

/// ```text
/// > | @@a[b]
///        ^
/// ```
pub(crate) fn after_name(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('[') {
        let next = State::Next(StateName::LeafAfterNamespace);
        tokenizer.attempt(next, next);
        NAMESPACE.start()
    } else {
        State::Retry(StateName::LeafAfterNamespace)
    }
}

/// ```text
/// > | @@a(b)
///        ^
/// ```
pub(crate) fn after_namespace(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('(') {
        let next = State::Next(StateName::LeafAfterGroup);
        tokenizer.attempt(next, next);
        match tokenizer.options.leaf_group {
            ParenGroup::Args => ARGS.start(),
            ParenGroup::Labels => LABELS.start(),
        }
    } else {
        State::Retry(StateName::LeafAfterGroup)
    }
}

/// ```text
/// > | @@a{b}
///        ^
/// ```
pub(crate) fn after_group(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('{') {
        let next = State::Next(StateName::LeafAfterAttributes);
        tokenizer.attempt(next, next);
        ATTRIBUTES.start()
    } else {
        State::Retry(StateName::LeafAfterAttributes)
    }
}

/// ```text
/// > | @@a{b}␠␠
///           ^
/// ```
pub(crate) fn after_attributes(tokenizer: &mut Tokenizer) -> State {
    if is_space(tokenizer.current()) {
        tokenizer.attempt(State::Next(StateName::LeafEnd), State::Nok);
        SpaceOrTab::new(Name::Whitespace).start()
    } else {
        State::Retry(StateName::LeafEnd)
    }
}

/// ```text
/// > | @@a␊
///        ^
/// ```
pub(crate) fn end(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code == Code::Eof || is_line_ending(code) {
        tokenizer.exit(Name::DirectiveLeaf);
        State::Ok
    } else {
        State::Nok
    }
}
