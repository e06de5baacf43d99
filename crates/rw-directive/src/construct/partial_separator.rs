//! Separator runs between list entries.
//!
//! ```text
//! separator ::= 1*( space_or_tab | ',' | EOL )
//! ```
//!
//! Line endings only count in relaxed mode. Each comma is a
//! [`Name::Comma`] token and each line ending a [`Name::LineEnding`].
//! Spaces before the first comma or line ending of the run are a
//! [`Name::LineSuffix`]; spaces after one are a [`Name::LinePrefix`].

use crate::character::{is_comma, is_line_ending, is_space};
use crate::construct::partial_space::SpaceOrTab;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Separator {
    pub allow_eol: bool,
    /// A comma or line ending was seen in this run.
    pub seen: bool,
    /// Something was consumed in this run.
    pub consumed: bool,
}

impl Separator {
    pub fn new(allow_eol: bool) -> Self {
        Self {
            allow_eol,
            seen: false,
            consumed: false,
        }
    }

    pub fn start(self) -> State {
        State::Retry(StateName::SeparatorStart(self))
    }
}

/// ```text
/// > | (a ,␊ b)
///       ^^^^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer, separator: Separator) -> State {
    let code = tokenizer.current();

    if is_comma(code) || (separator.allow_eol && is_line_ending(code)) {
        let name = if is_comma(code) {
            Name::Comma
        } else {
            Name::LineEnding
        };
        tokenizer.enter(name);
        tokenizer.consume();
        tokenizer.exit(name);
        return State::Next(StateName::SeparatorStart(Separator {
            seen: true,
            consumed: true,
            ..separator
        }));
    }

    if is_space(code) {
        let name = if separator.seen {
            Name::LinePrefix
        } else {
            Name::LineSuffix
        };
        tokenizer.attempt(
            State::Next(StateName::SeparatorStart(Separator {
                consumed: true,
                ..separator
            })),
            State::Nok,
        );
        return SpaceOrTab::new(name).start();
    }

    if separator.consumed {
        State::Ok
    } else {
        State::Nok
    }
}
