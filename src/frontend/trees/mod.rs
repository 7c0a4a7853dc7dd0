//! The syntax trees of the compiler.
//!
//! - [`term`] - terms of the lambda-Pi calculus, shared by every stage
//! - [`parsed`] - declarations and rules as they come out of the parser
//! - [`resolved`] - qualified and validated declarations and rule sets
//!
//! # Lifetime conventions
//!
//! - `'a` - the arena of the current phase, which owns every node

pub mod parsed;
pub mod path;
pub mod pretty;
pub mod resolved;
pub mod term;
