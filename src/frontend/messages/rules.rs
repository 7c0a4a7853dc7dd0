use crate::frontend::errors::{Error, ErrorId, ErrorType, Errors, Severity};
use crate::frontend::source::Span;
use crate::frontend::trees::resolved::Arity;

impl Errors {
    pub(crate) fn rule_error(&mut self, at: Span) -> RuleErrors {
        RuleErrors {
            errors: self,
            primary: at,
        }
    }
}

pub(crate) struct RuleErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl RuleErrors<'_> {
    pub fn arity_mismatch(&mut self, first: Span, expected: Arity, actual: Arity) -> ErrorId {
        let error = self
            .error(
                ErrorType::Arity,
                format!(
                    "rule takes {}, but the first rule takes {}",
                    describe(actual),
                    describe(expected)
                ),
            )
            .with_label(first, "first rule here");
        self.errors.add(error)
    }

    pub fn constant_with_rules(&mut self, name: &str, count: usize) -> ErrorId {
        let error = self
            .error(ErrorType::Arity, format!("constant `{name}` is given {count} rules"))
            .with_note("a rule set without arguments must consist of exactly one rule");
        self.errors.add(error)
    }

    pub fn head_mismatch(&mut self, first: Span, expected: &str, actual: &str) -> ErrorId {
        let error = self
            .error(
                ErrorType::Arity,
                format!("rule for `{actual}` in a rule set for `{expected}`"),
            )
            .with_label(first, "first rule here");
        self.errors.add(error)
    }

    pub fn constructor_arity(
        &mut self,
        prev: Span,
        name: &str,
        expected: Arity,
        actual: Arity,
    ) -> ErrorId {
        let error = self
            .error(
                ErrorType::Arity,
                format!(
                    "`{name}` is applied to {}, but elsewhere to {}",
                    describe(actual),
                    describe(expected)
                ),
            )
            .with_label(prev, "previous use here");
        self.errors.add(error)
    }

    pub fn applied_variable(&mut self, name: &str) -> ErrorId {
        let error = self
            .error(ErrorType::Arity, format!("pattern variable `{name}` applied to arguments"))
            .with_note("higher-order patterns are not supported");
        self.errors.add(error)
    }

    pub fn unused_variable(&mut self, name: &str, rule: usize) -> ErrorId {
        let error = self
            .error(ErrorType::Linearity, format!("unused variable `{name}`"))
            .with_note(format!("in rule {rule}"))
            .with_help("every variable in the context must occur in the pattern");
        self.errors.add(error)
    }

    pub fn non_linear(&mut self, name: &str, count: usize, rule: usize) -> ErrorId {
        let error = self
            .error(
                ErrorType::Linearity,
                format!("non-linear pattern: `{name}` occurs {count} times"),
            )
            .with_note(format!("in rule {rule}"));
        self.errors.add(error)
    }

    fn error(&mut self, ty: ErrorType, title: impl Into<String>) -> Error {
        Error::new(ty, Severity::Error, self.primary, title)
    }
}

fn describe(arity: Arity) -> String {
    let patterns = match arity.patterns {
        1 => "1 argument".to_string(),
        n => format!("{n} arguments"),
    };

    match arity.dots {
        0 => patterns,
        1 => format!("1 dot argument and {patterns}"),
        n => format!("{n} dot arguments and {patterns}"),
    }
}
