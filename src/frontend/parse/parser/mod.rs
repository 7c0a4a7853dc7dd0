use bumpalo::Bump;
use log::trace;

use super::tokens::{Comment, Token};
use crate::frontend::context::Context;
use crate::frontend::errors::{ErrorId, Errors};
use crate::frontend::names::Atom;
use crate::frontend::source::{SourceId, Span};
use crate::frontend::trees::parsed::{Binding, Declaration, Entry, Pattern, Rule, RuleSet};
use crate::frontend::trees::term::Term;

/// A recursive descent parser producing one [`Entry`] at a time, so that
/// every entry can be parsed into the arena of its own phase.
pub struct Parser<'src, 'c, I: Iterator<Item = (Result<Token<'src>, ()>, Span)>> {
    tokens: I,
    ctx: &'c Context,

    current_span: Span,
    prev: Option<(Token<'src>, Span)>,
    next: Option<(Token<'src>, Span)>,
    after: Option<(Token<'src>, Span)>,

    /// Lexer problems which have not been reported yet.
    problems: Vec<(Problem, Span)>,
}

#[derive(Clone, Copy, Debug)]
enum Problem {
    Token,
    Comment,
}

impl<'src, 'c, I: Iterator<Item = (Result<Token<'src>, ()>, Span)>> Parser<'src, 'c, I> {
    pub fn new(ctx: &'c Context, tokens: I, source: SourceId) -> Self {
        let mut parser = Self {
            tokens,
            ctx,
            current_span: source.span(0, 0),
            prev: None,
            next: None,
            after: None,
            problems: Vec::new(),
        };

        parser.advance();
        parser
    }

    /// Parse the next declaration or rule set. Returns `None` at the end of the
    /// source. After a syntax error, the parser skips past the next
    /// terminating `.`, so parsing may continue with the following entry.
    pub fn entry<'a>(
        &mut self,
        alloc: &'a Bump,
        errors: &mut Errors,
    ) -> Option<Result<Entry<'a>, ErrorId>> {
        if self.next.is_none() {
            return self.flush(errors, true).map(Err);
        }

        let result = if self.peek(Token::LeftBracket).is_some() {
            self.rules(alloc, errors).map(Entry::Rules)
        } else {
            self.declaration(alloc, errors).map(Entry::Declaration)
        };

        if result.is_err() {
            self.recover();
        }

        let result = match (result, self.flush(errors, false)) {
            (Ok(_), Some(problem)) => Err(problem),
            (result, _) => result,
        };

        Some(result)
    }

    /// `x : t.`
    fn declaration<'a>(
        &mut self,
        alloc: &'a Bump,
        errors: &mut Errors,
    ) -> Result<Declaration<'a>, ErrorId> {
        let (name, name_span) = self.ident(errors)?;
        self.expect(Token::Colon, "`:`", errors)?;
        let ty = self.term(alloc, errors)?;
        let end = self.terminator(errors)?;

        trace!("parsed declaration of {}", self.ctx.atoms.get(&name));
        Ok(Declaration {
            name,
            name_span,
            ty,
            span: name_span + end,
        })
    }

    /// `rule+ .`
    fn rules<'a>(&mut self, alloc: &'a Bump, errors: &mut Errors) -> Result<RuleSet<'a>, ErrorId> {
        let first = self.rule(alloc, errors)?;
        let mut span = first.span;
        let mut rules = vec![first];

        while self.peek(Token::LeftBracket).is_some() {
            rules.push(self.rule(alloc, errors)?);
        }

        span += self.terminator(errors)?;

        trace!("parsed rule set of {} rules", rules.len());
        Ok(RuleSet {
            rules: alloc.alloc_slice_fill_iter(rules),
            span,
        })
    }

    /// `[x : t, ...] pattern --> term`
    fn rule<'a>(&mut self, alloc: &'a Bump, errors: &mut Errors) -> Result<Rule<'a>, ErrorId> {
        let open = self.expect(Token::LeftBracket, "`[`", errors)?;

        let mut context = Vec::new();
        if self.peek(Token::RightBracket).is_none() {
            loop {
                let (name, span) = self.ident(errors)?;
                self.expect(Token::Colon, "`:`", errors)?;
                let ty = self.term(alloc, errors)?;
                context.push(Binding {
                    name,
                    ty,
                    span: span + ty.span,
                });

                if self.consume(Token::Comma).is_none() {
                    break;
                }
            }
        }

        self.expect(Token::RightBracket, "`]`", errors)?;
        let lhs = self.pattern(alloc, errors)?;
        self.expect(Token::LongArrow, "`-->`", errors)?;
        let rhs = self.term(alloc, errors)?;

        Ok(Rule {
            context: alloc.alloc_slice_fill_iter(context),
            lhs,
            rhs,
            span: open + rhs.span,
        })
    }

    /// `name {t}* p*`, where every argument `p` is a name or a parenthesized
    /// pattern.
    fn pattern<'a>(&mut self, alloc: &'a Bump, errors: &mut Errors) -> Result<Pattern<'a>, ErrorId> {
        let (head, head_span) = self.qident(errors)?;
        let mut span = head_span;
        let mut dots = Vec::new();
        let mut args = Vec::new();

        loop {
            if let Some(open) = self.consume(Token::LeftBrace) {
                if !args.is_empty() {
                    return Err(errors.parse_error(open).dot_after_pattern());
                }

                dots.push(self.term(alloc, errors)?);
                span += self.expect(Token::RightBrace, "`}`", errors)?;
            } else if let Some(open) = self.consume(Token::LeftParen) {
                let inner = self.pattern(alloc, errors)?;
                let close = self.expect(Token::RightParen, "`)`", errors)?;
                args.push(Pattern {
                    span: open + close,
                    ..inner
                });
                span += close;
            } else if self.peek(Token::Name("")).is_some() {
                let (name, at) = self.qident(errors)?;
                args.push(Pattern {
                    head: name,
                    head_span: at,
                    dots: &[],
                    args: &[],
                    span: at,
                });
                span += at;
            } else {
                break;
            }
        }

        Ok(Pattern {
            head,
            head_span,
            dots: alloc.alloc_slice_fill_iter(dots),
            args: alloc.alloc_slice_fill_iter(args),
            span,
        })
    }

    /// `x : app -> term`, `x => term` or `app (-> term)?`
    fn term<'a>(&mut self, alloc: &'a Bump, errors: &mut Errors) -> Result<Term<'a>, ErrorId> {
        if let Some((name, span)) = self.binder(Token::Colon, errors)? {
            let domain = self.app(alloc, errors)?;
            self.expect(Token::Arrow, "`->`", errors)?;
            let codomain = self.term(alloc, errors)?;
            let span = span + codomain.span;
            return Ok(Term::pi(alloc, Some(name), domain, codomain, span));
        }

        if let Some((name, span)) = self.binder(Token::FatArrow, errors)? {
            let body = self.term(alloc, errors)?;
            return Ok(Term::lam(alloc, name, body, span + body.span));
        }

        let domain = self.app(alloc, errors)?;
        if self.consume(Token::Arrow).is_some() {
            let codomain = self.term(alloc, errors)?;
            let span = domain.span + codomain.span;
            return Ok(Term::pi(alloc, None, domain, codomain, span));
        }

        Ok(domain)
    }

    fn app<'a>(&mut self, alloc: &'a Bump, errors: &mut Errors) -> Result<Term<'a>, ErrorId> {
        let mut term = self.atom(alloc, errors)?;
        while self.peek(starts_atom).is_some() {
            let arg = self.atom(alloc, errors)?;
            term = Term::app(alloc, term, arg);
        }

        Ok(term)
    }

    fn atom<'a>(&mut self, alloc: &'a Bump, errors: &mut Errors) -> Result<Term<'a>, ErrorId> {
        if let Some(span) = self.consume(Token::Type) {
            return Ok(Term::universe(span));
        }

        if let Some(open) = self.consume(Token::LeftParen) {
            let inner = self.term(alloc, errors)?;
            let close = self.expect(Token::RightParen, "`)`", errors)?;
            return Ok(Term {
                span: open + close,
                ..inner
            });
        }

        if self.peek(Token::Name("")).is_some() {
            let (name, span) = self.qident(errors)?;
            return Ok(Term::var(name, span));
        }

        Err(self.expected("a term", errors))
    }

    /// Parse the binder `x` of `x : ...` or `x => ...`, if the upcoming tokens
    /// are a name followed by `sep`.
    fn binder(&mut self, sep: Token, errors: &mut Errors) -> Result<Option<(Atom, Span)>, ErrorId> {
        let Some((Token::Name(_), _)) = self.next else {
            return Ok(None);
        };

        if !matches!(self.lookahead(), Some((token, _)) if sep.matches(&token)) {
            return Ok(None);
        }

        let binder = self.ident(errors)?;
        self.advance();
        Ok(Some(binder))
    }

    /// An unqualified name.
    fn ident(&mut self, errors: &mut Errors) -> Result<(Atom, Span), ErrorId> {
        let Some((Token::Name(name), span)) = self.next else {
            return Err(self.expected("a name", errors));
        };

        self.advance();
        let atom = self.intern(name, span, errors)?;
        Ok((atom, span))
    }

    /// A possibly qualified name like `a.b.x`, written without spaces.
    fn qident(&mut self, errors: &mut Errors) -> Result<(Atom, Span), ErrorId> {
        let Some((Token::Name(first), mut span)) = self.next else {
            return Err(self.expected("a name", errors));
        };

        self.advance();
        let mut name = String::from(first);
        while self.at_qualifier_dot() {
            self.advance();
            if let Some((Token::Name(part), at)) = self.next {
                name.push('.');
                name.push_str(part);
                span += at;
                self.advance();
            }
        }

        let atom = self.intern(&name, span, errors)?;
        Ok((atom, span))
    }

    fn intern(&self, name: &str, at: Span, errors: &mut Errors) -> Result<Atom, ErrorId> {
        let max = self.ctx.limits.max_ident_len;
        if name.len() > max {
            return Err(errors.capacity_error(at).identifier_too_long(name.len(), max));
        }

        Ok(self.ctx.atoms.intern(name))
    }

    /// A `.` which ends a declaration or rule set.
    fn terminator(&mut self, errors: &mut Errors) -> Result<Span, ErrorId> {
        self.expect(Token::Dot, "`.`", errors)
    }

    /// Returns `true` if the next token is a `.` directly between two names,
    /// as in `nat.Z`.
    fn at_qualifier_dot(&mut self) -> bool {
        let Some((Token::Dot, dot)) = self.next else {
            return false;
        };

        let after_name = matches!(self.prev, Some((Token::Name(_), prev)) if prev.end == dot.start);
        after_name && matches!(self.lookahead(), Some((Token::Name(_), next)) if next.start == dot.end)
    }

    /// Skip past the next terminating `.`.
    fn recover(&mut self) {
        while self.next.is_some() {
            if self.peek(Token::Dot).is_some() && !self.at_qualifier_dot() {
                self.advance();
                break;
            }

            self.advance();
        }
    }

    /// Report the pending lexer problems up to the last consumed token, or all
    /// of them if `all` is set, returning the first.
    fn flush(&mut self, errors: &mut Errors, all: bool) -> Option<ErrorId> {
        let boundary = match (all, self.prev) {
            (false, Some((_, span))) => span.end,
            _ => usize::MAX,
        };

        let (now, later): (Vec<_>, Vec<_>) = std::mem::take(&mut self.problems)
            .into_iter()
            .partition(|(_, span)| span.start < boundary);
        self.problems = later;

        let mut first = None;
        for (problem, span) in now {
            let id = match problem {
                Problem::Token => errors.parse_error(span).unexpected_token(),
                Problem::Comment => errors.parse_error(span).unterminated_comment(),
            };

            first.get_or_insert(id);
        }

        first
    }

    fn expect(&mut self, m: impl Matcher, what: &str, errors: &mut Errors) -> Result<Span, ErrorId> {
        self.consume(m).ok_or_else(|| self.expected(what, errors))
    }

    fn expected(&self, what: &str, errors: &mut Errors) -> ErrorId {
        match &self.next {
            Some((_, span)) => errors.parse_error(*span).expected(what),
            None => errors.parse_error(self.closest_span()).unexpected_eof(),
        }
    }

    /// Get the span closest to the next token.
    fn closest_span(&self) -> Span {
        self.next
            .as_ref()
            .or(self.prev.as_ref())
            .map(|(_, span)| *span)
            .unwrap_or(self.current_span)
    }

    /// Move to the next token.
    fn advance(&mut self) {
        self.prev = self.next.take();
        self.next = match self.after.take() {
            Some(token) => Some(token),
            None => self.pull(),
        };
    }

    /// Get the token after the next one.
    fn lookahead(&mut self) -> Option<(Token<'src>, Span)> {
        if self.after.is_none() && self.next.is_some() {
            self.after = self.pull();
        }

        self.after
    }

    fn pull(&mut self) -> Option<(Token<'src>, Span)> {
        let mut erred = false;
        for (token, span) in self.tokens.by_ref() {
            match token {
                Ok(Token::Comment(Comment::Closed)) => continue,
                Ok(Token::Comment(Comment::Unclosed)) => {
                    self.problems.push((Problem::Comment, span));
                }

                Ok(token) => {
                    self.current_span = span;
                    return Some((token, span));
                }

                Err(()) if !erred => {
                    self.problems.push((Problem::Token, span));
                    erred = true;
                }

                Err(()) => {}
            }
        }

        None
    }

    /// Returns `Some(next_span)` if the next token matches.
    fn peek(&self, m: impl Matcher) -> Option<Span> {
        self.next
            .as_ref()
            .and_then(|(token, span)| m.matches(token).then_some(*span))
    }

    /// Advances the parser and returns `Some(span)` if the token which was next
    /// matched. If it did not, then the parser is unaffected. The returned span
    /// is from the token which was matched.
    fn consume(&mut self, m: impl Matcher) -> Option<Span> {
        self.peek(m).map(|span| {
            self.advance();
            span
        })
    }
}

fn starts_atom(token: &Token) -> bool {
    matches!(token, Token::Type | Token::LeftParen | Token::Name(_))
}

trait Matcher {
    fn matches(&self, token: &Token) -> bool;
}

impl Matcher for Token<'_> {
    /// Returns `true` if `self` and `token` are the same token kind, even if
    /// they disagree on content.
    fn matches(&self, token: &Token) -> bool {
        match (self, token) {
            (Token::Name(_), Token::Name(_)) => true,
            _ => self == token,
        }
    }
}

impl<F: Fn(&Token) -> bool> Matcher for F {
    /// Returns `true` if the given function returns `true`.
    fn matches(&self, token: &Token) -> bool {
        self(token)
    }
}
