use bumpalo::Bump;

use super::{parse_lhs, NAT};
use crate::frontend::context::Limits;
use crate::frontend::env::Env;
use crate::frontend::errors::ErrorType;
use crate::frontend::resolve::Resolver;
use crate::frontend::testing::Store;
use crate::frontend::trees::resolved::PatternNode;

#[test]
fn variables_and_paths() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let lhs = parse_lhs(&mut s, &alloc, "[x : nat, y : nat] plus (S x) y --> y.");
    let mut env = Env::new();
    env.bind(s.atom("x"), None);
    env.bind(s.atom("y"), None);

    let (dots, args) = Resolver::new(&s.ctx, &alloc, &mut s.errors)
        .arguments_of_rule(&mut env, &lhs)
        .unwrap();

    assert!(dots.is_empty());
    assert_eq!(2, args.len());

    let PatternNode::Constructor(succ) = &args[0].node else {
        panic!("expected a constructor");
    };

    assert_eq!(s.qualified("S"), succ.name);
    assert_eq!(&[0], succ.path.indices());

    let PatternNode::Var(x, path) = &succ.args[0].node else {
        panic!("expected a variable");
    };

    assert_eq!(s.atom("x"), *x);
    assert_eq!(&[0, 0], path.indices());
    assert!(matches!(args[1].node, PatternNode::Var(_, path) if path.indices() == [1]));
}

#[test]
fn dot_patterns_shift_positions() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, "nat : Type. Z : nat. S : nat -> nat.");
    s.accept(&alloc, "vec : nat -> Type. cons : n : nat -> nat -> vec n -> vec (S n).");
    s.accept(&alloc, "tail : n : nat -> vec (S n) -> vec n.");

    let lhs = parse_lhs(
        &mut s,
        &alloc,
        "[n : nat, h : nat, v : vec n] tail {n} (cons {n} h v) --> v.",
    );

    let mut env = Env::new();
    for name in ["n", "h", "v"] {
        env.bind(s.atom(name), None);
    }

    let (dots, args) = Resolver::new(&s.ctx, &alloc, &mut s.errors)
        .arguments_of_rule(&mut env, &lhs)
        .unwrap();

    assert_eq!(1, dots.len());
    let PatternNode::Constructor(cons) = &args[0].node else {
        panic!("expected a constructor");
    };

    assert_eq!(&[1], cons.path.indices());
    assert_eq!(1, cons.dots.len());
    assert!(matches!(cons.args[0].node, PatternNode::Var(_, path) if path.indices() == [1, 1]));
    assert!(matches!(cons.args[1].node, PatternNode::Var(_, path) if path.indices() == [1, 2]));
}

#[test]
fn applied_variables() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let lhs = parse_lhs(&mut s, &alloc, "[f : nat -> nat] plus (f Z) Z --> Z.");
    let mut env = Env::new();
    env.bind(s.atom("f"), None);

    let result = Resolver::new(&s.ctx, &alloc, &mut s.errors).arguments_of_rule(&mut env, &lhs);
    let Err(id) = result else {
        panic!("expected an arity error");
    };

    assert_eq!(ErrorType::Arity, s.error_type(id));
}

#[test]
fn unknown_constructors() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let lhs = parse_lhs(&mut s, &alloc, "[] plus (T Z) Z --> Z.");
    let result = Resolver::new(&s.ctx, &alloc, &mut s.errors).arguments_of_rule(&mut Env::new(), &lhs);
    let Err(id) = result else {
        panic!("expected a scope error");
    };

    assert_eq!(ErrorType::Scope, s.error_type(id));
}

#[test]
fn pattern_depth() {
    let alloc = Bump::new();
    let limits = Limits {
        max_pattern_depth: 3,
        ..Default::default()
    };

    let mut s = Store::with_limits(limits);
    s.accept(&alloc, NAT);

    let lhs = parse_lhs(&mut s, &alloc, "[] plus (S (S Z)) Z --> Z.");
    let result = Resolver::new(&s.ctx, &alloc, &mut s.errors).arguments_of_rule(&mut Env::new(), &lhs);
    let Err(id) = result else {
        panic!("expected a capacity error");
    };

    assert_eq!(ErrorType::Capacity, s.error_type(id));

    let lhs = parse_lhs(&mut s, &alloc, "[] plus (S Z) Z --> Z.");
    let result = Resolver::new(&s.ctx, &alloc, &mut s.errors).arguments_of_rule(&mut Env::new(), &lhs);
    assert!(result.is_ok());
}
