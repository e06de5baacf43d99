//! Helpers for running a single construct in tests.

use crate::code::Input;
use crate::config::ParseOptions;
use crate::event::{Event, Kind, Name, tokens};
use crate::state::StateName;
use crate::tokenizer::Tokenizer;

/// What a construct left behind.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub source: String,
    pub ok: bool,
    pub index: usize,
    pub events: Vec<Event>,
}

impl Outcome {
    /// Source text of every `name` token, in order.
    pub fn texts(&self, name: Name) -> Vec<String> {
        let input = Input::new(&self.source);
        tokens(&self.events)
            .into_iter()
            .filter(|token| token.name == name)
            .map(|token| input.slice(&token.start, &token.end).to_owned())
            .collect()
    }
}

/// Names of entered tokens, in order.
pub(crate) fn names(events: &[Event]) -> Vec<Name> {
    events
        .iter()
        .filter(|event| event.kind == Kind::Enter)
        .map(|event| event.name)
        .collect()
}

/// Run the construct at `start` from the beginning of `source`.
pub(crate) fn run_construct(source: &str, start: StateName) -> Outcome {
    run_construct_with(source, ParseOptions::default(), start)
}

pub(crate) fn run_construct_with(source: &str, options: ParseOptions, start: StateName) -> Outcome {
    let input = Input::new(source);
    let mut tokenizer = Tokenizer::new(&input, options);
    let ok = tokenizer.run(start);
    let index = tokenizer.index();
    Outcome {
        source: source.to_owned(),
        ok,
        index,
        events: tokenizer.into_events(),
    }
}
