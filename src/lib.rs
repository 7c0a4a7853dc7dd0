pub mod args;
pub mod backend;
pub mod batch;
pub mod frontend;
pub mod modules;
