#[macro_use]
extern crate log;
#[cfg(test)]
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate failure_derive;

pub mod lexer;
pub mod stack;
pub mod trace;
pub mod types;
pub mod vm;

pub use lexer::{Lexer, Token};
pub use stack::{IntStack, StackError};
pub use vm::VM;
