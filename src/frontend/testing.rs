use bumpalo::Bump;

use crate::frontend::context::{Context, Limits};
use crate::frontend::errors::{ErrorId, ErrorType, Errors};
use crate::frontend::names::Atom;
use crate::frontend::parse::{tokens, Parser};
use crate::frontend::session::{self, Compiled, Defined};
use crate::frontend::source::Sources;
use crate::frontend::trees::parsed::Entry;
use crate::modules::Module;

/// Everything needed to push source text through the frontend.
pub struct Store {
    pub ctx: Context,
    pub errors: Errors,
    sources: Sources,
}

impl Store {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        let _ = pretty_env_logger::try_init();
        let module = Module::new("test", limits.max_ident_len).unwrap();
        Self {
            ctx: Context::new(module, limits),
            errors: Errors::new(),
            sources: Sources::new(),
        }
    }

    /// Parse `text`, panicking on syntax errors.
    pub fn parse<'a>(&mut self, alloc: &'a Bump, text: &str) -> Vec<Entry<'a>> {
        self.try_parse(alloc, text)
            .into_iter()
            .map(|entry| entry.unwrap_or_else(|id| panic!("syntax error: {}", self.title(id))))
            .collect()
    }

    pub fn try_parse<'a>(&mut self, alloc: &'a Bump, text: &str) -> Vec<Result<Entry<'a>, ErrorId>> {
        let id = self.sources.add("test.dk", text);
        let source = self.sources.get(id);
        let mut parser = Parser::new(&self.ctx, tokens(source), id);

        let mut entries = Vec::new();
        while let Some(entry) = parser.entry(alloc, &mut self.errors) {
            entries.push(entry);
        }

        entries
    }

    /// Parse and compile every entry of `text`.
    pub fn run<'a>(&mut self, alloc: &'a Bump, text: &str) -> Vec<Result<Compiled<'a>, ErrorId>> {
        let entries = self.parse(alloc, text);
        entries
            .iter()
            .map(|entry| session::entry(&self.ctx, alloc, &mut self.errors, entry))
            .collect()
    }

    /// Compile every entry of `text`, panicking on the first error.
    pub fn accept<'a>(&mut self, alloc: &'a Bump, text: &str) -> Vec<Compiled<'a>> {
        self.run(alloc, text)
            .into_iter()
            .map(|result| result.unwrap_or_else(|id| panic!("unexpected error: {}", self.title(id))))
            .collect()
    }

    /// Compile the single rule set in `text`.
    pub fn define<'a>(&mut self, alloc: &'a Bump, text: &str) -> Result<Defined<'a>, ErrorId> {
        let mut results = self.run(alloc, text);
        assert_eq!(1, results.len(), "expected a single rule set");
        match results.remove(0)? {
            Compiled::Rules(defined) => Ok(defined),
            Compiled::Declaration(_) => panic!("expected a rule set"),
        }
    }

    /// Compile the single rule set in `text`, expecting it to fail, and return
    /// the type of the error.
    pub fn reject(&mut self, alloc: &Bump, text: &str) -> ErrorType {
        match self.define(alloc, text) {
            Ok(_) => panic!("expected `{text}` to be rejected"),
            Err(id) => self.error_type(id),
        }
    }

    pub fn error_type(&self, id: ErrorId) -> ErrorType {
        self.errors.get(id).unwrap().ty
    }

    pub fn title(&self, id: ErrorId) -> &str {
        self.errors.get(id).map(|error| error.title.as_str()).unwrap_or("?")
    }

    pub fn atom(&self, name: &str) -> Atom {
        self.ctx.atoms.intern(name)
    }

    /// The atom of `name` qualified with the test module.
    pub fn qualified(&self, name: &str) -> Atom {
        self.ctx.atoms.intern_qualified(self.ctx.module.name(), name)
    }
}
