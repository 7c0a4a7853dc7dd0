pub mod check;
pub mod context;
pub mod env;
pub mod errors;
pub mod matching;
pub mod names;
pub mod parse;
pub mod resolve;
pub mod session;
pub mod source;
pub mod symbols;
pub mod trees;

mod messages;

#[cfg(test)]
pub(crate) mod testing;
