use crate::snake::Word;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub stage: String,
    pub label: String,
    pub before: Word,
    pub after: Word,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:016b} -> {:016b}", self.label, self.before, self.after)
    }
}

/// Ordered before/after record of every operation a word went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: &str, label: impl Into<String>, before: Word, after: Word) {
        let entry = TraceEntry {
            stage: stage.to_string(),
            label: label.into(),
            before,
            after,
        };
        log::trace!("[{}] {}", entry.stage, entry);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn stage_entries<'a>(&'a self, stage: &'a str) -> impl Iterator<Item = &'a TraceEntry> {
        self.entries.iter().filter(move |entry| entry.stage == stage)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
