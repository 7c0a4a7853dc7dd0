use crate::frontend::errors::{Error, ErrorId, ErrorType, Errors, Severity};
use crate::frontend::source::Span;
use crate::modules::QualifyError;

impl Errors {
    pub(crate) fn name_error(&mut self, at: Span) -> NameErrors {
        NameErrors {
            errors: self,
            primary: at,
        }
    }
}

pub(crate) struct NameErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl NameErrors<'_> {
    pub fn unknown_name(&mut self, name: &str) -> ErrorId {
        let error = self.error(ErrorType::Scope, format!("unknown name `{name}`"));
        self.errors.add(error)
    }

    pub fn redeclared(&mut self, name: &str) -> ErrorId {
        let error = self.error(ErrorType::Redefinition, format!("redeclaration of `{name}`"));
        self.errors.add(error)
    }

    pub fn redefined(&mut self, name: &str) -> ErrorId {
        let error = self
            .error(ErrorType::Redefinition, format!("redefinition of `{name}`"))
            .with_note("all rules for a symbol must be given in a single rule set");
        self.errors.add(error)
    }

    pub fn foreign_head(&mut self, name: &str, module: &str) -> ErrorId {
        let error = self
            .error(ErrorType::Scope, format!("cannot define rules for `{name}` in module `{module}`"))
            .with_note("rules can only be given for symbols declared in the same module");
        self.errors.add(error)
    }

    pub fn bound_head(&mut self, name: &str, rule: usize) -> ErrorId {
        let error = self
            .error(ErrorType::Scope, format!("the head symbol `{name}` is bound as a pattern variable"))
            .with_note(format!("in rule {rule}"));
        self.errors.add(error)
    }

    /// The type of a pattern variable mentions a variable bound after it.
    pub fn escaped_variable(&mut self, name: &str, binder: &str) -> ErrorId {
        let error = self
            .error(ErrorType::Scope, format!("`{name}` is not in scope in the type of `{binder}`"))
            .with_help(format!("bind `{name}` before `{binder}` in the rule context"));
        self.errors.add(error)
    }

    pub fn duplicate_variable(&mut self, prev: Span, name: &str) -> ErrorId {
        let error = self
            .error(ErrorType::Redefinition, format!("pattern variable `{name}` is bound twice"))
            .with_label(prev, "previous binding here");
        self.errors.add(error)
    }

    pub fn qualification(&mut self, error: &QualifyError) -> ErrorId {
        let error = self.error(ErrorType::Qualification, error.to_string());
        self.errors.add(error)
    }

    fn error(&mut self, ty: ErrorType, title: impl Into<String>) -> Error {
        Error::new(ty, Severity::Error, self.primary, title)
    }
}
