//! Document host: walks a whole source and tries directives where they may
//! start.
//!
//! ```text
//! document ::= *( line EOL ) line
//! line     ::= [ prefix ] ( directive_leaf | inline )
//! inline   ::= *( character_escape | directive_text | data )
//! ```
//!
//! A leaf directive is only tried at the start of a line, after at most
//! [`ParseOptions::max_indent`](crate::ParseOptions::max_indent) columns
//! of indentation. Anything that does not form a directive or an escape is
//! [`Name::Data`], one token per run, broken before `@`, `\` and line
//! endings.

use crate::character::{is_line_ending, is_space};
use crate::code::Code;
use crate::construct::directive_text;
use crate::construct::partial_space::SpaceOrTab;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// ```text
/// > | ␠␠@@a
///     ^
/// ```
pub(crate) fn line_start(tokenizer: &mut Tokenizer) -> State {
    let max_indent = tokenizer.options.max_indent;

    if max_indent > 0 && is_space(tokenizer.current()) {
        let next = State::Next(StateName::DocumentBeforeFlow);
        tokenizer.attempt(next, next);
        SpaceOrTab::with_max(Name::LinePrefix, max_indent).start()
    } else {
        State::Retry(StateName::DocumentBeforeFlow)
    }
}

/// ```text
/// > | ␠␠@@a
///       ^
/// ```
pub(crate) fn before_flow(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.options.leaf && tokenizer.current().is('@') {
        let inline = State::Next(StateName::DocumentInline);
        tokenizer.attempt(inline, inline);
        State::Retry(StateName::LeafStart)
    } else {
        State::Retry(StateName::DocumentInline)
    }
}

/// ```text
/// > | a @b \@ c
///     ^ ^  ^ ^
/// ```
pub(crate) fn inline(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current() {
        Code::Eof => State::Ok,
        Code::LineEnding => {
            tokenizer.enter(Name::LineEnding);
            tokenizer.consume();
            tokenizer.exit(Name::LineEnding);
            State::Next(StateName::DocumentLineStart)
        }
        Code::Char('\\') => {
            tokenizer.attempt(
                State::Next(StateName::DocumentInline),
                State::Next(StateName::DocumentData),
            );
            State::Retry(StateName::CharacterEscapeStart)
        }
        Code::Char('@') if tokenizer.options.text && directive_text::previous(tokenizer) => {
            tokenizer.attempt(
                State::Next(StateName::DocumentInline),
                State::Next(StateName::DocumentData),
            );
            State::Retry(StateName::TextStart)
        }
        _ => State::Retry(StateName::DocumentData),
    }
}

/// First code of a data run; taken whatever it is.
pub(crate) fn data(tokenizer: &mut Tokenizer) -> State {
    tokenizer.enter(Name::Data);
    tokenizer.consume();
    State::Next(StateName::DocumentDataInside)
}

/// ```text
/// > | ab@c
///      ^
/// ```
pub(crate) fn data_inside(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code == Code::Eof || is_line_ending(code) || code.is('@') || code.is('\\') {
        tokenizer.exit(Name::Data);
        State::Retry(StateName::DocumentInline)
    } else {
        tokenizer.consume();
        State::Next(StateName::DocumentDataInside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;
    use crate::construct::test_util::{Outcome, names, run_construct, run_construct_with};
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> Outcome {
        run_construct(source, StateName::DocumentLineStart)
    }

    #[test]
    fn test_plain_text() {
        let outcome = run("hello\nworld");
        assert!(outcome.ok);
        assert_eq!(
            names(&outcome.events),
            vec![Name::Data, Name::LineEnding, Name::Data]
        );
    }

    #[test]
    fn test_empty() {
        let outcome = run("");
        assert!(outcome.ok);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn test_leaf_and_text() {
        let outcome = run("  @@a(b)\nsee @c here");
        assert!(outcome.ok);
        assert_eq!(outcome.texts(Name::LinePrefix), vec!["  "]);
        assert_eq!(outcome.texts(Name::DirectiveLeaf), vec!["@@a(b)"]);
        assert_eq!(outcome.texts(Name::DirectiveText), vec!["@c"]);
        assert_eq!(outcome.texts(Name::Data), vec!["see ", " here"]);
    }

    #[test]
    fn test_indent_limit() {
        let outcome = run("    @@a");
        assert!(outcome.texts(Name::DirectiveLeaf).is_empty());

        let options = ParseOptions::default().with_max_indent(0);
        let outcome = run_construct_with(" @@a", options, StateName::DocumentLineStart);
        assert!(outcome.texts(Name::DirectiveLeaf).is_empty());
    }

    #[test]
    fn test_leaf_mid_line_is_not_text() {
        let outcome = run("x @@a");
        assert!(outcome.texts(Name::DirectiveLeaf).is_empty());
        assert!(outcome.texts(Name::DirectiveText).is_empty());
        assert_eq!(outcome.texts(Name::Data), vec!["x ", "@", "@a"]);
    }

    #[test]
    fn test_escape_makes_next_admissible() {
        let outcome = run("\\@@a");
        assert_eq!(outcome.texts(Name::CharacterEscapeValue), vec!["@"]);
        assert_eq!(outcome.texts(Name::DirectiveText), vec!["@a"]);
    }

    #[test]
    fn test_failed_escape_is_data() {
        let outcome = run("a\\b");
        assert_eq!(outcome.texts(Name::Data), vec!["a", "\\b"]);
    }

    #[test]
    fn test_disabled_constructs() {
        let options = ParseOptions::default().with_leaf(false).with_text(false);
        let outcome = run_construct_with("@@a\n@b", options, StateName::DocumentLineStart);
        assert!(outcome.texts(Name::DirectiveLeaf).is_empty());
        assert!(outcome.texts(Name::DirectiveText).is_empty());
    }

    #[test]
    fn test_failed_leaf_falls_back_to_text() {
        // Leaf fails on trailing content; `@@` mid-token is not text either.
        let outcome = run("@@a b");
        assert!(outcome.texts(Name::DirectiveLeaf).is_empty());
        assert!(outcome.texts(Name::DirectiveText).is_empty());
        assert_eq!(outcome.texts(Name::Data), vec!["@", "@a b"]);
    }
}
