//! Literal values.
//!
//! ```text
//! literal = int_literal [ "." int_literal ] | char_literal | string_literal
//!         | "true" | "false" | "null"
//! ```
//!
//! There's no floating point lexeme, `1.5` is two integers around a dot.

use crate::{
    lexer::{Category as C, Keyword as K},
    parser::{Parser, Reason, SyntaxError},
};

impl<'i> Parser<'i> {
    pub(crate) fn literal(&mut self) -> Result<(), SyntaxError> {
        self.rule("literal", |p| match p.peek() {
            Some(C::IntLiteral) => {
                p.consume(C::IntLiteral)?;

                if p.at(C::Dot) && p.at_nth(1, C::IntLiteral) {
                    p.consume(C::Dot)?;
                    p.consume(C::IntLiteral)?;
                }

                Ok(())
            }
            Some(category @ (C::CharLiteral | C::StringLiteral)) => {
                p.consume(category)?;
                Ok(())
            }
            Some(category @ C::Keyword(K::True | K::False | K::Null)) => {
                p.consume(category)?;
                Ok(())
            }
            _ => Err(p.error_here(Reason::NotStartOf("a literal"))),
        })
    }

    /// Is the lookahead the start of a literal?
    pub(crate) fn literal_ahead(&mut self) -> bool {
        matches!(
            self.peek(),
            Some(C::IntLiteral | C::CharLiteral | C::StringLiteral | C::Keyword(K::True | K::False | K::Null))
        )
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn literal(input: &str) -> Result<crate::Trace, SyntaxError> {
        Parser::check(input, |p| p.literal())
    }

    #[test]
    fn literals() {
        for input in ["0", "1234", "3.14", "'a'", "'\\n'", "\"\"", "\"hi there\"", "true", "false", "null"] {
            let result = literal(input);
            assert!(result.is_ok(), "{} got {:?}", input, result);
        }
    }

    #[test]
    fn not_literals() {
        for input in ["x", "this", "3.", "3.x", "(1)"] {
            assert!(literal(input).is_err(), "{} was accepted", input);
        }
    }

    #[test]
    fn decimal_is_three_lexemes() {
        let trace = literal("3.14").unwrap();
        assert_eq!(trace.len(), 5);
        assert!(trace.lines()[2].ends_with("DOT\t Next Lexeme is: ."));
    }

    #[test]
    fn ahead() {
        assert!(Parser::new("'c'").literal_ahead());
        assert!(Parser::new("null").literal_ahead());
        assert!(!Parser::new("nil").literal_ahead());
        assert!(!Parser::new("").literal_ahead());
    }
}
