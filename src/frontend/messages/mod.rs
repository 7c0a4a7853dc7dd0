//! Message builders for every kind of diagnostic. Each category is created
//! from the error store with a primary span, like
//! `errors.name_error(at).unknown_name("plus")`.

mod capacity;
mod names;
mod parse;
mod rules;
