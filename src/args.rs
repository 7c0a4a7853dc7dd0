use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;

use crate::backend::Emit;
use crate::frontend::context::Limits;

/// Resolve, check and compile lambda-Pi modules with rewrite rules.
#[derive(FromArgs, Debug)]
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Check(Check),
    Compile(Compile),
}

impl Command {
    pub fn log(&self) -> LogLevel {
        match self {
            Command::Check(check) => check.log,
            Command::Compile(compile) => compile.log,
        }
    }
}

/// Check a module for static errors.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "check")]
pub struct Check {
    /// the source file to check
    #[argh(positional)]
    pub path: PathBuf,

    /// the amount of logging to perform
    #[argh(option, default = "LogLevel::Off")]
    pub log: LogLevel,

    /// the module name, instead of the one derived from the path
    #[argh(option)]
    pub module: Option<String>,

    /// stop at the first error
    #[argh(switch)]
    pub fail_fast: bool,

    /// the maximum number of rules in a rule set
    #[argh(option, default = "Limits::default().max_rules")]
    pub max_rules: usize,

    /// the depth a pattern must stay below
    #[argh(option, default = "Limits::default().max_pattern_depth")]
    pub max_depth: usize,

    /// the maximum length of an identifier
    #[argh(option, default = "Limits::default().max_ident_len")]
    pub max_ident: usize,
}

/// Check a module and compile it.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "compile")]
pub struct Compile {
    /// the source file to compile
    #[argh(positional)]
    pub path: PathBuf,

    /// the kind of output, either `lua` or `json`
    #[argh(option, default = "Emit::Lua")]
    pub emit: Emit,

    /// the file to write the output to, instead of stdout
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// the amount of logging to perform
    #[argh(option, default = "LogLevel::Off")]
    pub log: LogLevel,

    /// the module name, instead of the one derived from the path
    #[argh(option)]
    pub module: Option<String>,

    /// stop at the first error
    #[argh(switch)]
    pub fail_fast: bool,

    /// the maximum number of rules in a rule set
    #[argh(option, default = "Limits::default().max_rules")]
    pub max_rules: usize,

    /// the depth a pattern must stay below
    #[argh(option, default = "Limits::default().max_pattern_depth")]
    pub max_depth: usize,

    /// the maximum length of an identifier
    #[argh(option, default = "Limits::default().max_ident_len")]
    pub max_ident: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),

            _ => Err("expected one of `off`, `trace`, `debug`, `info`, `warning`, or `error`"),
        }
    }
}
