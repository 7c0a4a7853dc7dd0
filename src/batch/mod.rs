//! At the command line, the compiler is used as a "batch" compiler: it reads a
//! single module, checks every entry in order, and optionally writes the
//! compiled module out in one go.
//!
//! Every entry is processed in its own phase. Everything a phase allocates
//! lives in one arena, which is reset once the entry has been handed to the
//! backend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use bumpalo::Bump;
use log::{info, warn};

use crate::args::Command;
use crate::backend::{Backend, Emit, Json, Lua};
use crate::frontend::context::{Context, Limits};
use crate::frontend::errors::{Error, Errors, NoteType, Severity};
use crate::frontend::parse::{tokens, Parser};
use crate::frontend::session::{self, Compiled};
use crate::frontend::source::{Source, Sources};
use crate::modules::Module;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug)]
pub struct Options {
    pub path: PathBuf,
    pub module: Option<String>,
    pub limits: Limits,
    pub fail_fast: bool,

    /// The kind of output to produce, if any.
    pub emit: Option<Emit>,
    pub output: Option<PathBuf>,
}

impl From<Command> for Options {
    fn from(command: Command) -> Self {
        match command {
            Command::Check(check) => Self {
                path: check.path,
                module: check.module,
                limits: Limits {
                    max_rules: check.max_rules,
                    max_pattern_depth: check.max_depth,
                    max_ident_len: check.max_ident,
                },
                fail_fast: check.fail_fast,
                emit: None,
                output: None,
            },

            Command::Compile(compile) => Self {
                path: compile.path,
                module: compile.module,
                limits: Limits {
                    max_rules: compile.max_rules,
                    max_pattern_depth: compile.max_depth,
                    max_ident_len: compile.max_ident,
                },
                fail_fast: compile.fail_fast,
                emit: Some(compile.emit),
                output: compile.output,
            },
        }
    }
}

pub fn run(options: &Options) -> anyhow::Result<()> {
    let content = fs::read_to_string(&options.path)
        .with_context(|| format!("cannot read {}", options.path.display()))?;

    match process(options, &content)? {
        Some(output) => match &options.output {
            Some(path) => write(path, &output),
            None => {
                print!("{output}");
                Ok(())
            }
        },

        None => Ok(()),
    }
}

/// Check `content` as the module at `options.path`, reporting diagnostics to
/// stderr, and produce the requested output.
pub fn process(options: &Options, content: &str) -> anyhow::Result<Option<String>> {
    let module = match &options.module {
        Some(name) => Module::new(name, options.limits.max_ident_len),
        None => Module::from_path(&options.path, options.limits.max_ident_len),
    }
    .with_context(|| format!("no module name for {}", options.path.display()))?;

    info!("compiling module {}", module.name());
    let ctx = Context::new(module, options.limits);
    let mut sources = Sources::new();
    let id = sources.add(options.path.display().to_string(), content);
    let source = sources.get(id);

    let mut errors = Errors::new();
    let output = match options.emit {
        None => {
            entries(&ctx, source, options.fail_fast, &mut errors, |_| {});
            None
        }

        Some(Emit::Lua) => Some(emit(Lua::new(&ctx.atoms), &ctx, source, options, &mut errors)),
        Some(Emit::Json) => Some(emit(Json::new(&ctx.atoms), &ctx, source, options, &mut errors)),
    };

    if errors.num_errors() > 0 {
        Err(anyhow!(
            "{} errors and {} warnings",
            errors.num_errors(),
            errors.num_warnings()
        ))
    } else {
        Ok(output)
    }
}

fn emit<B: Backend>(
    mut backend: B,
    ctx: &Context,
    source: &Source,
    options: &Options,
    errors: &mut Errors,
) -> String {
    backend.prologue(&ctx.module);
    entries(ctx, source, options.fail_fast, errors, |compiled| backend.entry(compiled));
    backend.finish()
}

/// Parse and compile every entry of `source` in order, handing every
/// successfully compiled entry to `sink`. Failed entries are reported and
/// skipped, unless `fail_fast` is set.
fn entries(
    ctx: &Context,
    source: &Source,
    fail_fast: bool,
    errors: &mut Errors,
    mut sink: impl FnMut(&Compiled),
) {
    let mut alloc = Bump::new();
    let mut parser = Parser::new(ctx, tokens(source), source.id);
    let mut compiled = 0;

    while let Some(parsed) = parser.entry(&alloc, errors) {
        let result = parsed.and_then(|parsed| session::entry(ctx, &alloc, errors, &parsed));
        let failed = match result {
            Ok(entry) => {
                sink(&entry);
                compiled += 1;
                false
            }

            Err(_) => true,
        };

        report(source, errors);
        alloc.reset();

        if failed && fail_fast {
            warn!("stopping after the first error");
            break;
        }
    }

    report(source, errors);
    info!("compiled {compiled} entries of {}", ctx.module.name());
}

fn report(source: &Source, errors: &mut Errors) {
    for (_, error) in errors.drain() {
        eprintln!("{}", render(source, &error));
    }
}

/// Render a diagnostic as `file:line:column: severity[kind]: title`, followed
/// by its labels and notes.
pub fn render(source: &Source, error: &Error) -> String {
    let (line, column) = source.line_col(error.at.start);
    let severity = match error.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    let mut out = format!(
        "{}:{line}:{column}: {severity}[{:?}]: {}",
        source.name, error.ty, error.title
    );

    for (message, at) in &error.labels {
        let (line, column) = source.line_col(at.start);
        out.push_str(&format!("\n  {line}:{column}: {message}"));
    }

    for (message, ty) in &error.notes {
        let kind = match ty {
            NoteType::Note => "note",
            NoteType::Help => "help",
        };

        out.push_str(&format!("\n  = {kind}: {message}"));
    }

    out
}

fn write(path: &Path, output: &str) -> anyhow::Result<()> {
    fs::write(path, output).with_context(|| format!("cannot write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
