//! Public entry points: tokenize a document, a single directive, or parse
//! straight to [`Directive`]s.

use crate::code::Input;
use crate::config::ParseOptions;
use crate::directive::{CompileError, Directive};
use crate::event::{Event, Kind, Token, tokens};
use crate::state::StateName;
use crate::tokenizer::Tokenizer;

/// Events of a whole document, with the input they point into.
#[derive(Debug)]
pub struct Tokens<'a> {
    input: Input<'a>,
    events: Vec<Event>,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn input(&self) -> &Input<'a> {
        &self.input
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events paired up into tokens, in enter order.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        tokens(&self.events)
    }

    /// Events of each top-level directive, in document order.
    pub fn directive_events(&self) -> impl Iterator<Item = &[Event]> {
        let mut depth = 0usize;
        let mut start = None;
        let mut spans = Vec::new();

        for (index, event) in self.events.iter().enumerate() {
            match event.kind {
                Kind::Enter => {
                    if depth == 0 && event.name.is_directive() {
                        start = Some(index);
                    }
                    depth += 1;
                }
                Kind::Exit => {
                    depth -= 1;
                    if depth == 0
                        && let Some(start) = start.take()
                    {
                        spans.push(start..=index);
                    }
                }
            }
        }

        spans.into_iter().map(|span| &self.events[span])
    }

    /// Build every directive in the document.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if a directive's events are malformed, which
    /// the tokenizer never produces.
    pub fn directives(&self) -> Result<Vec<Directive>, CompileError> {
        self.directive_events()
            .map(|events| Directive::from_events(events, &self.input))
            .collect()
    }
}

/// Tokenize a whole document.
#[must_use]
pub fn tokenize<'a>(source: &'a str, options: &ParseOptions) -> Tokens<'a> {
    let input = Input::new(source);
    let events = {
        let mut tokenizer = Tokenizer::new(&input, options.clone());
        let ok = tokenizer.run(StateName::DocumentLineStart);
        assert!(ok, "a document always tokenizes");
        tokenizer.into_events()
    };

    tracing::debug!(
        codes = input.len(),
        events = events.len(),
        "Tokenized document"
    );

    Tokens { input, events }
}

/// Tokenize one leaf directive at the start of `source`.
///
/// Returns `None` if `source` does not start with a leaf directive that
/// ends its line.
///
/// # Panics
///
/// Panics if `source` does not start with `@`.
#[must_use]
pub fn tokenize_leaf(source: &str, options: &ParseOptions) -> Option<Vec<Event>> {
    run_one(source, options, StateName::LeafStart)
}

/// Tokenize one text directive at the start of `source`.
///
/// Trailing input after the directive is left alone.
///
/// # Panics
///
/// Panics if `source` does not start with `@`.
#[must_use]
pub fn tokenize_text(source: &str, options: &ParseOptions) -> Option<Vec<Event>> {
    run_one(source, options, StateName::TextStart)
}

fn run_one(source: &str, options: &ParseOptions, start: StateName) -> Option<Vec<Event>> {
    let input = Input::new(source);
    let mut tokenizer = Tokenizer::new(&input, options.clone());
    tokenizer.run(start).then(|| tokenizer.into_events())
}

/// Parse every directive in `source`.
///
/// # Errors
///
/// See [`Tokens::directives`].
pub fn parse(source: &str, options: &ParseOptions) -> Result<Vec<Directive>, CompileError> {
    tokenize(source, options).directives()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{Arg, AttributeForm, DirectiveKind};
    use crate::event::Name;
    use pretty_assertions::assert_eq;

    fn options() -> ParseOptions {
        ParseOptions::default()
    }

    /// Token names with offsets relative to the first event.
    fn shape(events: &[Event]) -> Vec<(Kind, Name, usize)> {
        let base = events.first().map_or(0, |event| event.point.offset);
        events
            .iter()
            .map(|event| (event.kind, event.name, event.point.offset - base))
            .collect()
    }

    fn assert_balanced(events: &[Event]) {
        let mut open = Vec::new();
        for event in events {
            match event.kind {
                Kind::Enter => open.push(event.name),
                Kind::Exit => assert_eq!(open.pop(), Some(event.name)),
            }
        }
        assert!(open.is_empty(), "unclosed: {open:?}");
    }

    const SOURCES: &[&str] = &[
        "@@note",
        "@@note[ref](src=\"a.md\", x){.big #id}",
        "Some @note(a, b=\"x y\") text.\n  @@leaf{k=v}\n",
        "@@note(unterminated",
        "text\\@@note(a)",
        "@@a[ns",
        "@a(\n  \"multi\n  line\",\n  k='v'\n){t=\"a,b\"} and @b[x\ny] @c{#i.j}",
        "tab\t@x(\ta)\r\n\t@@y",
        "email me@example.com or @@ mid @",
    ];

    #[test]
    fn test_events_balanced() {
        for source in SOURCES {
            let tokens = tokenize(source, &options());
            assert_balanced(tokens.events());
            // Panics on mismatch.
            let _ = tokens.tokens();
        }
    }

    #[test]
    fn test_retokenizing_directive_span_is_identical() {
        for source in SOURCES {
            let tokens = tokenize(source, &options());
            for events in tokens.directive_events() {
                let start = events[0].point.offset;
                let end = events[events.len() - 1].point.offset;
                let span = &source[start..end];

                let again = match events[0].name {
                    Name::DirectiveLeaf => tokenize_leaf(span, &options()),
                    _ => tokenize_text(span, &options()),
                };
                let again = again.unwrap_or_else(|| panic!("{span:?} did not tokenize"));
                assert_eq!(shape(&again), shape(events), "{span:?}");
            }
        }
    }

    #[test]
    fn test_failed_group_rolls_back_exactly() {
        let plain = tokenize_text("@a", &options()).unwrap();

        for source in ["@a(x=)", "@a(\"x)", "@a{#}", "@a{k=}", "@a(b c=) x"] {
            let events = tokenize_text(source, &options()).unwrap();
            assert_eq!(events, plain, "{source:?}");
        }
    }

    #[test]
    fn test_failed_namespace_rolls_back_and_fails_directive() {
        assert_eq!(tokenize_leaf("@@a[ns", &options()), None);
        assert_eq!(tokenize_text("@a[ns", &options()), None);

        let tokens = tokenize("@@a[ns", &options());
        assert!(tokens.directives().unwrap().is_empty());
        assert!(tokens.events().iter().all(|event| !event.name.is_directive()));
    }

    #[test]
    fn test_leaf_name_only() {
        let directives = parse("@@note", &options()).unwrap();
        assert_eq!(directives.len(), 1);

        let note = &directives[0];
        assert_eq!(note.kind, DirectiveKind::Leaf);
        assert_eq!(note.name, "note");
        assert_eq!(note.namespace, None);
        assert_eq!(note.group, None);
        assert!(note.attributes.is_empty());
    }

    #[test]
    fn test_leaf_all_groups() {
        let directives = parse("@@note[ref](src=\"a.md\", x){.big #id}", &options()).unwrap();
        let note = &directives[0];

        assert_eq!(note.kind, DirectiveKind::Leaf);
        assert_eq!(note.namespace.as_deref(), Some("ref"));
        assert_eq!(note.args(), &[Arg::keyed("src", "a.md"), Arg::new("x")]);
        assert_eq!(note.classes(), vec!["big"]);
        assert_eq!(note.id(), Some("id"));
        assert_eq!(note.attributes[0].form, AttributeForm::Class);
        assert_eq!(note.attributes[1].form, AttributeForm::Id);
    }

    #[test]
    fn test_text_args() {
        let directives = parse("@note(a, b=\"x y\")", &options()).unwrap();
        let note = &directives[0];

        assert_eq!(note.kind, DirectiveKind::Text);
        assert_eq!(note.args(), &[Arg::new("a"), Arg::keyed("b", "x y")]);
    }

    #[test]
    fn test_unterminated_leaf_is_plain_text() {
        let tokens = tokenize("@@note(unterminated", &options());
        assert!(tokens.directives().unwrap().is_empty());
        assert!(
            tokens
                .events()
                .iter()
                .all(|event| matches!(event.name, Name::Data))
        );
    }

    #[test]
    fn test_escaped_marker_admits_text_directive() {
        let tokens = tokenize("text\\@@note(a)", &options());
        let names: Vec<Name> = tokens
            .tokens()
            .iter()
            .filter(|token| token.depth == 0)
            .map(|token| token.name)
            .collect();
        assert_eq!(
            names,
            vec![Name::Data, Name::CharacterEscape, Name::DirectiveText]
        );

        let directives = tokens.directives().unwrap();
        assert_eq!(directives[0].name, "note");
        assert_eq!(directives[0].positional().collect::<Vec<_>>(), vec!["a"]);

        // Without the escape the second `@` cannot start a directive.
        assert!(parse("text@@note(a)", &options()).unwrap().is_empty());
        // An escaped `@` is literal.
        assert!(parse("text\\@note(a)", &options()).unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_namespace_fails_leaf() {
        assert!(parse("@@a[ns", &options()).unwrap().is_empty());
    }

    #[test]
    fn test_mixed_document() {
        let source = "# Title\n\n@@include(src=\"intro.md\")\nPress @kbd(Ctrl+C) or @kbd(Esc).\n";
        let directives = parse(source, &options()).unwrap();

        // `Ctrl+C` is not a bareword, so that group fails and `@kbd` stands alone.
        let summary: Vec<(DirectiveKind, &str, usize)> = directives
            .iter()
            .map(|directive| (directive.kind, directive.name.as_str(), directive.args().len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DirectiveKind::Leaf, "include", 1),
                (DirectiveKind::Text, "kbd", 0),
                (DirectiveKind::Text, "kbd", 1),
            ]
        );
        assert_eq!(directives[0].start.line, 3);
        assert_eq!(directives[1].start.line, 4);
    }

    #[test]
    fn test_options_disable_constructs() {
        let source = "@@a\n@b";
        let only_text = ParseOptions::default().with_leaf(false);
        let names: Vec<String> = parse(source, &only_text)
            .unwrap()
            .into_iter()
            .map(|directive| directive.name)
            .collect();
        assert_eq!(names, vec!["b"]);

        let none = ParseOptions::default().with_leaf(false).with_text(false);
        assert!(parse(source, &none).unwrap().is_empty());
    }

    #[test]
    fn test_trace_does_not_change_events() {
        let source = SOURCES[6];
        let traced = ParseOptions::default().with_trace(true);
        assert_eq!(
            tokenize(source, &traced).events(),
            tokenize(source, &options()).events()
        );
    }

    #[test]
    #[should_panic(expected = "expected `@`")]
    fn test_tokenize_leaf_requires_marker() {
        let _ = tokenize_leaf("note", &options());
    }
}
