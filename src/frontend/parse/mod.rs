pub use self::parser::Parser;
pub use self::tokens::Token;

mod parser;
mod tokens;

use logos::Logos;

use crate::frontend::source::{Source, Span};

pub fn tokens(source: &Source) -> impl Iterator<Item = (Result<Token, ()>, Span)> {
    Token::lexer(&source.content)
        .spanned()
        .map(|(result, span)| (result, source.id.span(span.start, span.end)))
}

#[cfg(test)]
mod tests;
