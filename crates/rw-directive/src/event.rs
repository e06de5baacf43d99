//! Events emitted by the tokenizer.
//!
//! A token is a matching pair of [`Kind::Enter`] and [`Kind::Exit`] events.
//! Tokens nest strictly: an exit always closes the innermost open token.

use crate::code::Point;

/// Whether an event opens or closes a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Enter,
    Exit,
}

/// Token type.
///
/// Leaf (`@@`) and text (`@`) directives have separate tags for each part
/// so a consumer can tell the two forms apart without context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Name {
    // Document level.
    Data,
    LineEnding,
    LinePrefix,
    LineSuffix,
    Whitespace,
    Comma,
    CharacterEscape,
    CharacterEscapeMarker,
    CharacterEscapeValue,

    // Leaf directive: `@@name[ns](args){attrs}`.
    DirectiveLeaf,
    DirectiveLeafSequence,
    DirectiveLeafName,
    DirectiveLeafNamespace,
    DirectiveLeafNamespaceMarker,
    DirectiveLeafNamespaceString,
    DirectiveLeafArgs,
    DirectiveLeafArgsMarker,
    DirectiveLeafArg,
    DirectiveLeafArgKey,
    DirectiveLeafArgInitializerMarker,
    DirectiveLeafArgValueLiteral,
    DirectiveLeafArgValue,
    DirectiveLeafArgValueMarker,
    DirectiveLeafArgValueData,
    DirectiveLeafLabels,
    DirectiveLeafLabelsMarker,
    DirectiveLeafLabel,
    DirectiveLeafLabelValueLiteral,
    DirectiveLeafLabelValue,
    DirectiveLeafLabelValueMarker,
    DirectiveLeafLabelValueData,
    DirectiveLeafAttributes,
    DirectiveLeafAttributesMarker,
    DirectiveLeafAttribute,
    DirectiveLeafAttributeId,
    DirectiveLeafAttributeIdMarker,
    DirectiveLeafAttributeIdValue,
    DirectiveLeafAttributeClass,
    DirectiveLeafAttributeClassMarker,
    DirectiveLeafAttributeClassValue,
    DirectiveLeafAttributeName,
    DirectiveLeafAttributeInitializerMarker,
    DirectiveLeafAttributeValueLiteral,
    DirectiveLeafAttributeValue,
    DirectiveLeafAttributeValueMarker,
    DirectiveLeafAttributeValueData,

    // Text directive: `@name[ns](args){attrs}`.
    DirectiveText,
    DirectiveTextMarker,
    DirectiveTextName,
    DirectiveTextNamespace,
    DirectiveTextNamespaceMarker,
    DirectiveTextNamespaceString,
    DirectiveTextArgs,
    DirectiveTextArgsMarker,
    DirectiveTextArg,
    DirectiveTextArgKey,
    DirectiveTextArgInitializerMarker,
    DirectiveTextArgValueLiteral,
    DirectiveTextArgValue,
    DirectiveTextArgValueMarker,
    DirectiveTextArgValueData,
    DirectiveTextAttributes,
    DirectiveTextAttributesMarker,
    DirectiveTextAttribute,
    DirectiveTextAttributeId,
    DirectiveTextAttributeIdMarker,
    DirectiveTextAttributeIdValue,
    DirectiveTextAttributeClass,
    DirectiveTextAttributeClassMarker,
    DirectiveTextAttributeClassValue,
    DirectiveTextAttributeName,
    DirectiveTextAttributeInitializerMarker,
    DirectiveTextAttributeValueLiteral,
    DirectiveTextAttributeValue,
    DirectiveTextAttributeValueMarker,
    DirectiveTextAttributeValueData,
}

impl Name {
    /// Whether this tags a whole directive.
    #[must_use]
    pub fn is_directive(self) -> bool {
        matches!(self, Self::DirectiveLeaf | Self::DirectiveText)
    }
}

/// Something that happened at a point: a token opened or closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub kind: Kind,
    pub name: Name,
    pub point: Point,
}

/// A closed token, recovered from a pair of events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub name: Name,
    pub start: Point,
    pub end: Point,
    /// Nesting depth; top-level tokens are at 0.
    pub depth: usize,
}

/// Pair up enter and exit events into tokens, in enter order.
///
/// # Panics
///
/// Panics if the events are not balanced. Event lists produced by the
/// tokenizer always are.
#[must_use]
pub fn tokens(events: &[Event]) -> Vec<Token> {
    let mut result = Vec::with_capacity(events.len() / 2);
    let mut open: Vec<usize> = Vec::new();

    for event in events {
        match event.kind {
            Kind::Enter => {
                open.push(result.len());
                result.push(Token {
                    name: event.name,
                    start: event.point,
                    end: event.point,
                    depth: open.len() - 1,
                });
            }
            Kind::Exit => {
                let index = open.pop().expect("exit without matching enter");
                let token = &mut result[index];
                assert_eq!(token.name, event.name, "exit does not match enter");
                token.end = event.point;
            }
        }
    }

    assert!(open.is_empty(), "unclosed tokens");
    result
}
