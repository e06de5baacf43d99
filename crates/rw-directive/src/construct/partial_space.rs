//! Runs of spaces and tabs.
//!
//! ```text
//! space_or_tab ::= 1*max( ' ' | TAB | VIRTUAL_SPACE )
//! ```

use crate::character::is_space;
use crate::event::Name;
use crate::state::{State, StateName};
use crate::tokenizer::Tokenizer;

/// Token to emit, and how many more codes the run may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SpaceOrTab {
    pub name: Name,
    pub remaining: usize,
}

impl SpaceOrTab {
    /// An unbounded run tagged `name`.
    pub fn new(name: Name) -> Self {
        Self::with_max(name, usize::MAX)
    }

    pub fn with_max(name: Name, max: usize) -> Self {
        Self {
            name,
            remaining: max,
        }
    }

    pub fn start(self) -> State {
        State::Retry(StateName::SpaceOrTabStart(self))
    }
}

/// ```text
/// > | a␠␠b
///      ^
/// ```
pub(crate) fn start(tokenizer: &mut Tokenizer, space: SpaceOrTab) -> State {
    if is_space(tokenizer.current()) && space.remaining > 0 {
        tokenizer.enter(space.name);
        State::Retry(StateName::SpaceOrTabInside(space))
    } else {
        State::Nok
    }
}

/// ```text
/// > | a␠␠b
///      ^^
/// ```
pub(crate) fn inside(tokenizer: &mut Tokenizer, space: SpaceOrTab) -> State {
    if is_space(tokenizer.current()) && space.remaining > 0 {
        tokenizer.consume();
        State::Next(StateName::SpaceOrTabInside(SpaceOrTab {
            remaining: space.remaining - 1,
            ..space
        }))
    } else {
        tokenizer.exit(space.name);
        State::Ok
    }
}
