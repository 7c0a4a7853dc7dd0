use crate::frontend::errors::{Error, ErrorId, ErrorType, Errors, Severity};
use crate::frontend::source::Span;

impl Errors {
    pub(crate) fn capacity_error(&mut self, at: Span) -> CapacityErrors {
        CapacityErrors {
            errors: self,
            primary: at,
        }
    }
}

pub(crate) struct CapacityErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl CapacityErrors<'_> {
    pub fn too_many_rules(&mut self, count: usize, max: usize) -> ErrorId {
        let error = self
            .error(format!("rule set has {count} rules, but at most {max} are allowed"))
            .with_help("the limit can be raised with `--max-rules`");
        self.errors.add(error)
    }

    pub fn pattern_too_deep(&mut self, max: usize) -> ErrorId {
        let error = self
            .error(format!("pattern is nested {max} or more levels deep"))
            .with_help("the limit can be raised with `--max-depth`");
        self.errors.add(error)
    }

    pub fn identifier_too_long(&mut self, len: usize, max: usize) -> ErrorId {
        let error = self
            .error(format!("identifier is {len} characters long, but at most {max} are allowed"))
            .with_help("the limit can be raised with `--max-ident`");
        self.errors.add(error)
    }

    fn error(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Capacity, Severity::Error, self.primary, title)
    }
}
