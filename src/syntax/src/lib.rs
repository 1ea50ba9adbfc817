//! Syntax tools for a small class-based, curly-brace language.
//!
//! The [`lexer`] breaks source text into [`lexer::Lexeme`]s, and the
//! [`Parser`] checks that they make up a class, recording each grammar rule it
//! walks through in a [`Trace`]. Nothing is built from the input beyond that
//! trace, the result of a parse is only whether it was accepted.
//!
//! ```
//! # use syntax::Parser;
//! let mut parser = Parser::new("class A { void f() { Foo<Bar> x; } }");
//! assert!(parser.start().is_ok());
//!
//! let mut parser = Parser::new("class A { void f() { foo<bar>(); } }");
//! assert!(parser.start().is_err());
//! ```

pub mod lexer;
pub mod parser;

mod block;
mod class;
mod config;
mod declaration;
mod expression;
mod literal;
mod operator;
mod primary;
mod program;
mod statement;
mod trace;
mod types;

pub use crate::{
    config::Config,
    parser::{Parser, Reason, SyntaxError},
    trace::Trace,
};
