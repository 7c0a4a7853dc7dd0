use super::tree::{select, Selected};
use crate::frontend::trees::resolved::{Pattern, PatternNode, RuleSet};
use crate::frontend::trees::term::{Term, TermNode};

/// Select the first rule of `set` whose patterns match `args`, by trying
/// every rule in order.
pub fn first_match<'t>(set: &RuleSet, args: &[&'t Term<'t>]) -> Option<Selected<'t>> {
    if args.len() != set.arity.total() {
        return None;
    }

    let offset = set.arity.dots;
    set.rules.iter().enumerate().find_map(|(index, rule)| {
        let matched = rule
            .args
            .iter()
            .zip(&args[offset..])
            .all(|(pattern, arg)| matches(pattern, arg));

        if matched {
            select(index, rule.bindings, args)
        } else {
            None
        }
    })
}

fn matches(pattern: &Pattern, term: &Term) -> bool {
    match &pattern.node {
        PatternNode::Var(..) => true,
        PatternNode::Constructor(ctor) => {
            let (head, sub) = term.arguments();
            let named = matches!(head.node, TermNode::Var(name) if name == ctor.name);
            named
                && sub.len() == ctor.arity().total()
                && ctor
                    .args
                    .iter()
                    .zip(&sub[ctor.dots.len()..])
                    .all(|(pattern, arg)| matches(pattern, arg))
        }
    }
}
