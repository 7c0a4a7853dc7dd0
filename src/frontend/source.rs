use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

/// Identifies a particular source.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceId(usize);

impl SourceId {
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span { source: *self, start, end }
    }
}

impl SourceId {
    #[cfg(test)]
    pub fn new(id: usize) -> Self {
        Self(id)
    }
}

/// Identifies some portion of the source text.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Span {
    pub source: SourceId,
    pub start: usize,
    pub end: usize,
}

impl Add for Span {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(
            self.source, rhs.source,
            "only spans from the same source can be combined"
        );
        Self {
            source: self.source,
            start: self.start.min(rhs.start),
            end: self.end.max(rhs.end),
        }
    }
}

impl AddAssign for Span {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A single source file together with the name it should be reported under.
#[derive(Debug)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub content: String,
}

impl Source {
    /// Get the one-based line and column of the given byte offset.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rfind('\n')
            .map(|newline| before[newline + 1..].chars().count())
            .unwrap_or_else(|| before.chars().count())
            + 1;
        (line, column)
    }
}

/// Stores individual source files.
#[derive(Debug, Default)]
pub struct Sources {
    sources: BTreeMap<SourceId, Source>,
    counter: usize,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> SourceId {
        self.counter += 1;
        let id = SourceId(self.counter);
        let source = Source {
            id,
            name: name.into(),
            content: content.into(),
        };

        self.sources.insert(id, source);
        id
    }

    pub fn get(&self, id: SourceId) -> &Source {
        self.sources
            .get(&id)
            .expect("source ids are only created by this store")
    }
}
