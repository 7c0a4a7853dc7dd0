use std::collections::BTreeMap;

use crate::frontend::source::Span;

/// Identifies a particular reported message.
#[must_use]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ErrorId(usize);

/// Stores reported errors.
#[derive(Clone, Debug, Default)]
pub struct Errors {
    errors: BTreeMap<ErrorId, Error>,
    counter: usize,

    num_errors: usize,
    num_warnings: usize,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: Error) -> ErrorId {
        match error.severity {
            Severity::Error => self.num_errors += 1,
            Severity::Warning => self.num_warnings += 1,
        };

        self.counter += 1;
        let id = ErrorId(self.counter);
        self.errors.insert(id, error);
        id
    }

    pub fn get(&self, id: ErrorId) -> Option<&Error> {
        self.errors.get(&id)
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn num_warnings(&self) -> usize {
        self.num_warnings
    }

    /// Drain this error store of its errors, in the order they were reported.
    /// The error counts are kept, so a drained store still knows whether the
    /// run was successful.
    pub fn drain(&mut self) -> impl Iterator<Item = (ErrorId, Error)> {
        std::mem::take(&mut self.errors).into_iter()
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub ty: ErrorType,
    pub severity: Severity,
    pub at: Span,
    pub title: String,
    pub labels: Vec<(String, Span)>,
    pub notes: Vec<(String, NoteType)>,
}

impl Error {
    pub fn new(ty: ErrorType, severity: Severity, at: Span, title: impl Into<String>) -> Self {
        Self {
            ty,
            severity,
            at,
            title: title.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_label(mut self, at: Span, message: impl Into<String>) -> Self {
        self.labels.push((message.into(), at));
        self
    }

    pub fn with_help(mut self, message: impl Into<String>) -> Self {
        self.notes.push((message.into(), NoteType::Help));
        self
    }

    pub fn with_note(mut self, message: impl Into<String>) -> Self {
        self.notes.push((message.into(), NoteType::Note));
        self
    }
}

/// The category of a reported error.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorType {
    /// Malformed source text.
    Syntax,

    /// An unbound variable or constructor.
    Scope,

    /// A name which cannot be qualified, because of an invalid character or
    /// because it becomes too long.
    Qualification,

    /// Inconsistent constructor arities, inconsistent rule set arities, or
    /// pattern variables applied to arguments.
    Arity,

    /// A pattern variable that is unused or used more than once.
    Linearity,

    /// An identifier declared or defined twice.
    Redefinition,

    /// Some configured structural limit was exceeded.
    Capacity,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NoteType {
    Note,
    Help,
}
