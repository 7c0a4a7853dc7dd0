use bumpalo::Bump;

use super::{parse_type, resolve, NAT};
use crate::frontend::env::Env;
use crate::frontend::errors::ErrorType;
use crate::frontend::resolve::Resolver;
use crate::frontend::testing::Store;

#[test]
fn free_names_are_qualified() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : plus (S Z) Z.");
    let resolved = resolve(&mut s, &alloc, &[], &term);
    assert_eq!(Ok("test.plus (test.S test.Z) test.Z".into()), resolved);
}

#[test]
fn bound_names_stay() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : n : nat -> (Z => S Z) n.");
    let resolved = resolve(&mut s, &alloc, &[], &term);
    assert_eq!(Ok("n : test.nat -> (Z => test.S Z) n".into()), resolved);
}

#[test]
fn anonymous_products_bind_nothing() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : nat -> n.");
    assert_eq!(Err(ErrorType::Scope), resolve(&mut s, &alloc, &[], &term));

    // the domain of a dependent product is outside the binder
    let term = parse_type(&mut s, &alloc, "t : n : n -> nat.");
    assert_eq!(Err(ErrorType::Scope), resolve(&mut s, &alloc, &[], &term));
}

#[test]
fn unknown_names() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : S one.");
    assert_eq!(Err(ErrorType::Scope), resolve(&mut s, &alloc, &[], &term));

    let term = parse_type(&mut s, &alloc, "t : test.one.");
    assert_eq!(Err(ErrorType::Scope), resolve(&mut s, &alloc, &[], &term));
}

#[test]
fn foreign_names_are_trusted() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : logic.eq nat Z test.Z.");
    let resolved = resolve(&mut s, &alloc, &[], &term);
    assert_eq!(Ok("logic.eq test.nat test.Z test.Z".into()), resolved);
}

#[test]
fn resolution_is_idempotent() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : x : nat -> plus x (S Z).");
    let mut env = Env::new();
    let mut resolver = Resolver::new(&s.ctx, &alloc, &mut s.errors);
    let once = resolver.term(&mut env, &term).unwrap();
    let twice = resolver.term(&mut env, once).unwrap();

    assert_eq!(once, twice);
    assert_ne!(&term, once);
}

#[test]
fn parsed_terms_are_not_mutated() {
    let alloc = Bump::new();
    let mut s = Store::new();
    s.accept(&alloc, NAT);

    let term = parse_type(&mut s, &alloc, "t : S x.");
    let copy = term;

    let bound = resolve(&mut s, &alloc, &["x"], &term);
    let unbound = resolve(&mut s, &alloc, &[], &term);
    s.accept(&alloc, "x : nat.");
    let global = resolve(&mut s, &alloc, &[], &term);

    assert_eq!(Ok("test.S x".into()), bound);
    assert_eq!(Err(ErrorType::Scope), unbound);
    assert_eq!(Ok("test.S test.x".into()), global);
    assert_eq!(copy, term);
}

#[test]
fn qualified_names_have_a_maximum_length() {
    use crate::frontend::context::Limits;

    let alloc = Bump::new();
    let limits = Limits {
        max_ident_len: 12,
        ..Default::default()
    };

    let mut s = Store::with_limits(limits);
    let results = s.run(&alloc, "abcdefghij : Type.");
    let Err(id) = results[0] else {
        panic!("expected a qualification error");
    };

    assert_eq!(ErrorType::Qualification, s.error_type(id));
}
