//! Tokenizer: the effects states use, and the loop that drives them.
//!
//! States never call each other directly. A state inspects
//! [`current`](Tokenizer::current), performs effects (enter, consume, exit),
//! and returns a [`State`] saying what to run next. [`Tokenizer::run`] is
//! the only loop, so recursion never grows with the input.
//!
//! Speculative parsing goes through [`attempt`](Tokenizer::attempt): it saves
//! a [`Checkpoint`] and two continuations. When the attempted construct ends
//! in [`State::Ok`] the checkpoint is dropped and the first continuation
//! runs; on [`State::Nok`] the position, events and open-token stack are put
//! back exactly as they were and the second continuation runs.

use crate::code::{Code, Input, Point};
use crate::config::ParseOptions;
use crate::event::{Event, Kind, Name};
use crate::state::{self, State, StateName};

/// Everything needed to undo a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    pub index: usize,
    pub events_len: usize,
    pub stack_len: usize,
}

#[derive(Debug)]
struct Attempt {
    ok: State,
    nok: State,
    checkpoint: Checkpoint,
}

#[derive(Debug)]
pub(crate) struct Tokenizer<'a> {
    input: &'a Input<'a>,
    index: usize,
    events: Vec<Event>,
    /// Names of tokens entered but not yet exited.
    stack: Vec<Name>,
    attempts: Vec<Attempt>,
    pub options: ParseOptions,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a Input<'a>, options: ParseOptions) -> Self {
        Self {
            input,
            index: 0,
            events: Vec::new(),
            stack: Vec::new(),
            attempts: Vec::new(),
            options,
        }
    }

    pub fn current(&self) -> Code {
        self.input.code(self.index)
    }

    /// The code right before the current one, `None` at the start.
    pub fn previous(&self) -> Option<Code> {
        self.index.checked_sub(1).map(|index| self.input.code(index))
    }

    pub fn point(&self) -> Point {
        self.input.point(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Open a token at the current point.
    pub fn enter(&mut self, name: Name) {
        self.events.push(Event {
            kind: Kind::Enter,
            name,
            point: self.point(),
        });
        self.stack.push(name);
    }

    /// Close the innermost open token, which must be `name`.
    pub fn exit(&mut self, name: Name) {
        let open = self.stack.pop();
        assert_eq!(
            open,
            Some(name),
            "cannot close `{name:?}`: innermost open token is `{open:?}`"
        );
        if let Some(attempt) = self.attempts.last() {
            assert!(
                self.stack.len() >= attempt.checkpoint.stack_len,
                "cannot close `{name:?}`: it was opened outside the current attempt"
            );
        }
        self.events.push(Event {
            kind: Kind::Exit,
            name,
            point: self.point(),
        });
    }

    /// Move past the current code.
    pub fn consume(&mut self) {
        assert!(
            !self.stack.is_empty(),
            "expected an open token before consuming {:?}",
            self.current()
        );
        assert_ne!(self.current(), Code::Eof, "cannot consume end of input");
        self.index += 1;
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            index: self.index,
            events_len: self.events.len(),
            stack_len: self.stack.len(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.index;
        self.events.truncate(checkpoint.events_len);
        self.stack.truncate(checkpoint.stack_len);
    }

    /// Run the next construct speculatively.
    ///
    /// Call this right before returning the construct's start state.
    pub fn attempt(&mut self, ok: State, nok: State) {
        let checkpoint = self.checkpoint();
        if self.options.trace {
            tracing::trace!(
                index = checkpoint.index,
                depth = self.attempts.len(),
                "attempt started"
            );
        }
        self.attempts.push(Attempt { ok, nok, checkpoint });
    }

    /// Trace hook for states; a no-op unless tracing is enabled.
    pub fn trace(&self, message: &str) {
        if self.options.trace {
            tracing::trace!(index = self.index, code = ?self.current(), "{message}");
        }
    }

    /// Drive states from `start` until the outermost construct finishes.
    ///
    /// Returns whether it ended in [`State::Ok`]. On `false` the events may
    /// hold a partial construct and should be discarded.
    pub fn run(&mut self, start: StateName) -> bool {
        let mut state = State::Retry(start);

        loop {
            state = match state {
                State::Next(name) | State::Retry(name) => state::call(self, name),
                State::Ok => match self.attempts.pop() {
                    Some(attempt) => {
                        if self.options.trace {
                            tracing::trace!(index = self.index, "attempt succeeded");
                        }
                        attempt.ok
                    }
                    None => return true,
                },
                State::Nok => match self.attempts.pop() {
                    Some(attempt) => {
                        if self.options.trace {
                            tracing::trace!(
                                from = self.index,
                                to = attempt.checkpoint.index,
                                "attempt failed, rolling back"
                            );
                        }
                        self.restore(attempt.checkpoint);
                        attempt.nok
                    }
                    None => return false,
                },
            };
        }
    }
}
