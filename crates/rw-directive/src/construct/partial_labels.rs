//! Labels: `(first, "second one")`, the alternate reading of a leaf
//! directive's parenthesized group.
//!
//! ```text
//! labels ::= '(' [ separator ] *( label [ separator ] ) ')'
//! label  ::= ( ascii_alpha | '@' | '_' ) *bareword | quoted
//! ```

use crate::character::{is_key_start, is_quote, is_separator};
use crate::construct::partial_separator::Separator;
use crate::construct::partial_value::{Value, ValueNames};
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LabelsNames {
    pub labels: Name,
    pub marker: Name,
    pub label: Name,
    pub literal: Name,
    pub value: Name,
    pub value_marker: Name,
    pub data: Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Labels {
    pub names: LabelsNames,
    pub allow_eol: bool,
}

impl Labels {
    pub fn start(self) -> State {
        State::Retry(StateName::LabelsStart(self))
    }
}

pub(crate) fn start(tokenizer: &mut Tokenizer, labels: Labels) -> State {
    assert!(tokenizer.current().is('('), "expected `(`");
    tokenizer.enter(labels.names.labels);
    tokenizer.enter(labels.names.marker);
    tokenizer.consume();
    tokenizer.exit(labels.names.marker);
    State::Next(StateName::LabelsBetween(labels))
}

/// ```text
/// > | @@a(b, "c")
///         ^^^^
/// ```
pub(crate) fn between(tokenizer: &mut Tokenizer, labels: Labels) -> State {
    let code = tokenizer.current();

    if code.is(')') {
        State::Retry(StateName::LabelsEnd(labels))
    } else if is_separator(code, labels.allow_eol) {
        tokenizer.attempt(State::Next(StateName::LabelsBetween(labels)), State::Nok);
        Separator::new(labels.allow_eol).start()
    } else if is_key_start(code) || is_quote(code) {
        tokenizer.enter(labels.names.label);
        tokenizer.attempt(
            State::Next(StateName::LabelsAfterValue(labels)),
            State::Nok,
        );
        Value {
            names: ValueNames {
                literal: labels.names.literal,
                value: labels.names.value,
                marker: labels.names.value_marker,
                data: labels.names.data,
            },
            close: ')',
            allow_eol: labels.allow_eol,
            split_on_comma: false,
        }
        .start()
    } else {
        State::Nok
    }
}

pub(crate) fn after_value(tokenizer: &mut Tokenizer, labels: Labels) -> State {
    tokenizer.exit(labels.names.label);
    let code = tokenizer.current();

    if code.is(')') || is_separator(code, labels.allow_eol) {
        State::Retry(StateName::LabelsBetween(labels))
    } else {
        State::Nok
    }
}

pub(crate) fn end(tokenizer: &mut Tokenizer, labels: Labels) -> State {
    tokenizer.enter(labels.names.marker);
    tokenizer.consume();
    tokenizer.exit(labels.names.marker);
    tokenizer.exit(labels.names.labels);
    State::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::test_util::{Outcome, run_construct};
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> Outcome {
        run_construct(
            source,
            StateName::LabelsStart(Labels {
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
            }),
        )
    }

    #[test]
    fn test_labels() {
        let outcome = run("(first, \"second one\" _x)");
        assert!(outcome.ok);
        assert_eq!(
            outcome.texts(Name::DirectiveLeafLabelValue),
            vec!["first", "second one", "_x"]
        );
    }

    #[test]
    fn test_no_keys() {
        assert!(!run("(a=b)").ok);
    }

    #[test]
    fn test_identifier_start() {
        assert!(!run("(1a)").ok);
        assert!(!run("(-a)").ok);
        assert!(run("(@a)").ok);
    }

    #[test]
    fn test_empty() {
        assert!(run("()").ok);
        assert!(run("( )").ok);
    }
}
