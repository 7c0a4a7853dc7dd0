use logos::{Lexer, Logos};

#[derive(Logos, Clone, Copy, Debug, Eq, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[regex(r"[A-Za-z_][A-Za-z0-9_']*", |lexer| lexer.slice())]
    Name(&'src str),

    #[token("Type")]
    Type,

    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,
    #[token("=>")]
    FatArrow,
    #[token("-->")]
    LongArrow,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,

    // Trivia
    #[token("(;", comment)]
    Comment(Comment),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comment {
    Closed,
    Unclosed,
}

/// Comments run from `(;` to the first `;)` and do not nest.
fn comment<'src>(lexer: &mut Lexer<'src, Token<'src>>) -> Comment {
    match lexer.remainder().find(";)") {
        Some(end) => {
            lexer.bump(end + 2);
            Comment::Closed
        }

        None => {
            lexer.bump(lexer.remainder().len());
            Comment::Unclosed
        }
    }
}
