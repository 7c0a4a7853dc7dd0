use std::path::PathBuf;

use super::{process, render, Options};
use crate::backend::Emit;
use crate::frontend::context::Limits;
use crate::frontend::errors::{Error, ErrorType, Severity};
use crate::frontend::source::Sources;

const NAT: &str = "
(; Peano numerals ;)
nat : Type.
Z : nat.
S : nat -> nat.
plus : nat -> nat -> nat.
[y : nat] plus Z y --> y
[x : nat, y : nat] plus (S x) y --> S (plus x y).
";

fn options(emit: Option<Emit>) -> Options {
    let _ = pretty_env_logger::try_init();
    Options {
        path: PathBuf::from("theories/nat.dk"),
        module: None,
        limits: Limits::default(),
        fail_fast: false,
        emit,
        output: None,
    }
}

#[test]
fn check_produces_nothing() {
    assert!(process(&options(None), NAT).unwrap().is_none());
}

#[test]
fn modules_follow_paths() {
    let lua = process(&options(Some(Emit::Lua)), NAT).unwrap().unwrap();
    assert!(lua.starts_with("--[[ Code for module theories.nat. ]]\nlocal theories = { }\n"));
    assert!(lua.contains("theories.nat.plus_c = { ck = clam, arity = 2"));

    let mut options = options(Some(Emit::Json));
    options.module = Some("peano".into());
    let json = process(&options, NAT).unwrap().unwrap();
    let dump: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!("peano", dump["module"]);
    assert_eq!(5, dump["entries"].as_array().unwrap().len());
}

#[test]
fn errors_are_collected() {
    let text = "nat : Type. Z : nat. bad : nope. [x : nat] nope x --> Z. S : nat -> nat.";
    let error = process(&options(None), text).unwrap_err();
    assert_eq!("2 errors and 0 warnings", error.to_string());
}

#[test]
fn fail_fast_stops_early() {
    let text = "nat : Type. bad : nope. worse : nah.";
    let mut options = options(None);
    options.fail_fast = true;

    let error = process(&options, text).unwrap_err();
    assert_eq!("1 errors and 0 warnings", error.to_string());
}

#[test]
fn bad_module_names() {
    let mut options = options(None);
    options.path = PathBuf::from("my-theory.dk");
    assert!(process(&options, NAT).is_err());
}

#[test]
fn diagnostics() {
    let mut sources = Sources::new();
    let id = sources.add("nat.dk", "nat : Type.\nbad : nope.\n");
    let source = sources.get(id);

    let error = Error::new(ErrorType::Scope, Severity::Error, id.span(18, 22), "unknown name `nope`")
        .with_label(id.span(12, 15), "in this declaration")
        .with_help("declare it first");

    let expected = "\
nat.dk:2:7: error[Scope]: unknown name `nope`
  2:1: in this declaration
  = help: declare it first";
    assert_eq!(expected, render(source, &error));
}
