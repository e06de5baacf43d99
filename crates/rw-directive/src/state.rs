//! States of every construct, as data.
//!
//! Each [`StateName`] variant is one step of one construct. Variants carry
//! whatever the step needs to know (token names, strict or relaxed mode,
//! the quote being closed), so nothing is kept in shared mutable fields.

use crate::construct::partial_args::Args;
use crate::construct::partial_attributes::{Attributes, Shortcut};
use crate::construct::partial_labels::Labels;
use crate::construct::partial_namespace::Namespace;
use crate::construct::partial_separator::Separator;
use crate::construct::partial_space::SpaceOrTab;
use crate::construct::partial_value::{Quoted, Value};
use crate::construct::{
    character_escape, directive_leaf, directive_text, document, partial_args,
    partial_attributes, partial_labels, partial_name, partial_namespace, partial_separator,
    partial_space, partial_value,
};
use crate::event::Name;
use crate::tokenizer::Tokenizer;

/// Result of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// The current code was consumed; run this state on the next one.
    Next(StateName),
    /// Run this state on the same code.
    Retry(StateName),
    /// The construct matched.
    Ok,
    /// The construct does not match here.
    Nok,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StateName {
    DocumentLineStart,
    DocumentBeforeFlow,
    DocumentInline,
    DocumentData,
    DocumentDataInside,

    CharacterEscapeStart,
    CharacterEscapeInside,

    SpaceOrTabStart(SpaceOrTab),
    SpaceOrTabInside(SpaceOrTab),

    SeparatorStart(Separator),

    NameStart(Name),
    NameInside(Name),

    NamespaceStart(Namespace),
    NamespaceBefore(Namespace),
    NamespaceInside(Namespace),
    NamespaceEnd(Namespace),

    ValueBefore(Value),
    ValueUnquoted(Value),
    ValueQuotedStart(Quoted),
    ValueQuotedBetween(Quoted),
    ValueQuoted(Quoted),

    ArgsStart(Args),
    ArgsBetween(Args),
    ArgsKeyStart(Args),
    ArgsKeyInside(Args),
    ArgsValue(Args),
    ArgsAfterValue(Args),
    ArgsEnd(Args),

    LabelsStart(Labels),
    LabelsBetween(Labels),
    LabelsAfterValue(Labels),
    LabelsEnd(Labels),

    AttributesStart(Attributes),
    AttributesBetween(Attributes),
    AttributesShortcutStart(Attributes, Shortcut),
    AttributesShortcutStartAfter(Attributes, Shortcut),
    AttributesShortcut(Attributes, Shortcut),
    AttributesName(Attributes),
    AttributesNameAfter(Attributes),
    AttributesValue(Attributes),
    AttributesAfterValue(Attributes),
    AttributesEnd(Attributes),

    LeafStart,
    LeafInStart,
    LeafAfterName,
    LeafAfterNamespace,
    LeafAfterGroup,
    LeafAfterAttributes,
    LeafEnd,

    TextStart,
    TextAfterName,
    TextAfterNamespace,
    TextAfterArgs,
    TextAfterAttributes,
}

/// Run one step.
pub(crate) fn call(tokenizer: &mut Tokenizer, name: StateName) -> State {
    match name {
        StateName::DocumentLineStart => document::line_start(tokenizer),
        StateName::DocumentBeforeFlow => document::before_flow(tokenizer),
        StateName::DocumentInline => document::inline(tokenizer),
        StateName::DocumentData => document::data(tokenizer),
        StateName::DocumentDataInside => document::data_inside(tokenizer),

        StateName::CharacterEscapeStart => character_escape::start(tokenizer),
        StateName::CharacterEscapeInside => character_escape::inside(tokenizer),

        StateName::SpaceOrTabStart(space) => partial_space::start(tokenizer, space),
        StateName::SpaceOrTabInside(space) => partial_space::inside(tokenizer, space),

        StateName::SeparatorStart(separator) => partial_separator::start(tokenizer, separator),

        StateName::NameStart(token) => partial_name::start(tokenizer, token),
        StateName::NameInside(token) => partial_name::inside(tokenizer, token),

        StateName::NamespaceStart(ns) => partial_namespace::start(tokenizer, ns),
        StateName::NamespaceBefore(ns) => partial_namespace::before(tokenizer, ns),
        StateName::NamespaceInside(ns) => partial_namespace::inside(tokenizer, ns),
        StateName::NamespaceEnd(ns) => partial_namespace::end(tokenizer, ns),

        StateName::ValueBefore(value) => partial_value::before(tokenizer, value),
        StateName::ValueUnquoted(value) => partial_value::unquoted(tokenizer, value),
        StateName::ValueQuotedStart(quoted) => partial_value::quoted_start(tokenizer, quoted),
        StateName::ValueQuotedBetween(quoted) => partial_value::quoted_between(tokenizer, quoted),
        StateName::ValueQuoted(quoted) => partial_value::quoted(tokenizer, quoted),

        StateName::ArgsStart(args) => partial_args::start(tokenizer, args),
        StateName::ArgsBetween(args) => partial_args::between(tokenizer, args),
        StateName::ArgsKeyStart(args) => partial_args::key_start(tokenizer, args),
        StateName::ArgsKeyInside(args) => partial_args::key_inside(tokenizer, args),
        StateName::ArgsValue(args) => partial_args::value(tokenizer, args),
        StateName::ArgsAfterValue(args) => partial_args::after_value(tokenizer, args),
        StateName::ArgsEnd(args) => partial_args::end(tokenizer, args),

        StateName::LabelsStart(labels) => partial_labels::start(tokenizer, labels),
        StateName::LabelsBetween(labels) => partial_labels::between(tokenizer, labels),
        StateName::LabelsAfterValue(labels) => partial_labels::after_value(tokenizer, labels),
        StateName::LabelsEnd(labels) => partial_labels::end(tokenizer, labels),

        StateName::AttributesStart(attrs) => partial_attributes::start(tokenizer, attrs),
        StateName::AttributesBetween(attrs) => partial_attributes::between(tokenizer, attrs),
        StateName::AttributesShortcutStart(attrs, kind) => {
            partial_attributes::shortcut_start(tokenizer, attrs, kind)
        }
        StateName::AttributesShortcutStartAfter(attrs, kind) => {
            partial_attributes::shortcut_start_after(tokenizer, attrs, kind)
        }
        StateName::AttributesShortcut(attrs, kind) => {
            partial_attributes::shortcut(tokenizer, attrs, kind)
        }
        StateName::AttributesName(attrs) => partial_attributes::name(tokenizer, attrs),
        StateName::AttributesNameAfter(attrs) => partial_attributes::name_after(tokenizer, attrs),
        StateName::AttributesValue(attrs) => partial_attributes::value(tokenizer, attrs),
        StateName::AttributesAfterValue(attrs) => {
            partial_attributes::after_value(tokenizer, attrs)
        }
        StateName::AttributesEnd(attrs) => partial_attributes::end(tokenizer, attrs),

        StateName::LeafStart => directive_leaf::start(tokenizer),
        StateName::LeafInStart => directive_leaf::in_start(tokenizer),
        StateName::LeafAfterName => directive_leaf::after_name(tokenizer),
        StateName::LeafAfterNamespace => directive_leaf::after_namespace(tokenizer),
        StateName::LeafAfterGroup => directive_leaf::after_group(tokenizer),
        StateName::LeafAfterAttributes => directive_leaf::after_attributes(tokenizer),
        StateName::LeafEnd => directive_leaf::end(tokenizer),

        StateName::TextStart => directive_text::start(tokenizer),
        StateName::TextAfterName => directive_text::after_name(tokenizer),
        StateName::TextAfterNamespace => directive_text::after_namespace(tokenizer),
        StateName::TextAfterArgs => directive_text::after_args(tokenizer),
        StateName::TextAfterAttributes => directive_text::after_attributes(tokenizer),
    }
}
