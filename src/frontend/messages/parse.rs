use crate::frontend::errors::{Error, ErrorId, ErrorType, Errors, Severity};
use crate::frontend::source::Span;

impl Errors {
    pub(crate) fn parse_error(&mut self, at: Span) -> ParseErrors {
        ParseErrors {
            errors: self,
            primary: at,
        }
    }
}

pub(crate) struct ParseErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl ParseErrors<'_> {
    pub fn unexpected_token(&mut self) -> ErrorId {
        let error = self.error("unexpected token");
        self.errors.add(error)
    }

    pub fn expected(&mut self, what: &str) -> ErrorId {
        let error = self
            .error(format!("expected {what}"))
            .with_label(self.primary, format!("expected {what} here"));
        self.errors.add(error)
    }

    pub fn unexpected_eof(&mut self) -> ErrorId {
        let error = self
            .error("unexpected end of file")
            .with_help("every declaration and rule set ends with a `.`");
        self.errors.add(error)
    }

    pub fn unterminated_comment(&mut self) -> ErrorId {
        let error = self
            .error("unterminated comment")
            .with_help("comments are closed with `;)`");
        self.errors.add(error)
    }

    pub fn dot_after_pattern(&mut self) -> ErrorId {
        let error = self
            .error("dot pattern after an ordinary pattern")
            .with_help("dot patterns like `{t}` come before every ordinary argument");
        self.errors.add(error)
    }

    fn error(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Syntax, Severity::Error, self.primary, title)
    }
}
