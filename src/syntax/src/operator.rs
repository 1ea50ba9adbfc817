//! Operators.
//!
//! The lexer never merges `<` or `>` with anything, since they also close
//! type arguments. Shifts like `>>`, comparisons like `<=`, and compound
//! assignments like `>>>=` are put back together here from single lexemes.
//!
//! ```text
//! assignment_operator = "=" | "+=" | ... | "<" "<" "=" | ">" ">" [ ">" ] "="
//! infix_operator      = "||" | "&&" | ... | "<" [ "<" | "=" ] | ">" [ ">" [ ">" ] | "=" ]
//! prefix_operator     = "!" | "~" | "+" | "-" | "++" | "--"
//! postfix_operator    = "++" | "--"
//! ```

use crate::{
    lexer::{Category as C, Delimiter as D},
    parser::{Parser, Reason, SyntaxError},
};

const LESS: C = C::Open(D::Angle);
const GREATER: C = C::Close(D::Angle);

impl<'i> Parser<'i> {
    /// Is an assignment operator next, including the shift assignments that
    /// take several lexemes?
    pub(crate) fn assignment_ahead(&mut self) -> bool {
        if self.at(C::AssignmentOperator) {
            return true;
        }

        if self.at(LESS) {
            return self.at_nth(1, LESS) && self.at_nth_text(2, C::AssignmentOperator, "=");
        }

        if self.at(GREATER) && self.at_nth(1, GREATER) {
            return self.at_nth_text(2, C::AssignmentOperator, "=")
                || (self.at_nth(2, GREATER) && self.at_nth_text(3, C::AssignmentOperator, "="));
        }

        false
    }

    /// Is a binary operator next? Shift assignments are left for
    /// [`Parser::assignment_operator`].
    pub(crate) fn infix_ahead(&mut self) -> bool {
        match self.peek() {
            Some(C::InfixOperator | C::Plus | C::Minus) => true,
            Some(LESS | GREATER) => !self.assignment_ahead(),
            _ => false,
        }
    }

    pub(crate) fn prefix_ahead(&mut self) -> bool {
        matches!(
            self.peek(),
            Some(C::PrefixOperator | C::Plus | C::Minus | C::Increment | C::Decrement)
        )
    }

    pub(crate) fn assignment_operator(&mut self) -> Result<(), SyntaxError> {
        self.rule("assignment_operator", |p| {
            match p.peek() {
                Some(C::AssignmentOperator) => {}
                Some(LESS) => {
                    p.consume(LESS)?;
                    p.consume(LESS)?;
                }
                Some(GREATER) => {
                    p.consume(GREATER)?;
                    p.consume(GREATER)?;
                    p.consume_if(GREATER)?;
                }
                _ => return Err(p.error_here(Reason::Expected(C::AssignmentOperator))),
            }

            p.consume(C::AssignmentOperator)?;
            Ok(())
        })
    }

    pub(crate) fn infix_operator(&mut self) -> Result<(), SyntaxError> {
        self.rule("infix_operator", |p| {
            match p.peek() {
                Some(category @ (C::InfixOperator | C::Plus | C::Minus)) => {
                    p.consume(category)?;
                }
                Some(LESS) => {
                    p.consume(LESS)?;

                    if !p.consume_if(LESS)? {
                        p.consume_equals()?;
                    }
                }
                Some(GREATER) => {
                    p.consume(GREATER)?;

                    if p.consume_if(GREATER)? {
                        p.consume_if(GREATER)?;
                    } else {
                        p.consume_equals()?;
                    }
                }
                _ => return Err(p.error_here(Reason::Expected(C::InfixOperator))),
            }

            Ok(())
        })
    }

    /// The `=` that turns `<` into `<=`, if it's there.
    fn consume_equals(&mut self) -> Result<(), SyntaxError> {
        if self.at_text(C::AssignmentOperator, "=") {
            self.consume(C::AssignmentOperator)?;
        }
        Ok(())
    }

    pub(crate) fn prefix_operator(&mut self) -> Result<(), SyntaxError> {
        self.rule("prefix_operator", |p| match p.peek() {
            Some(category @ (C::PrefixOperator | C::Plus | C::Minus | C::Increment | C::Decrement)) => {
                p.consume(category)?;
                Ok(())
            }
            _ => Err(p.error_here(Reason::Expected(C::PrefixOperator))),
        })
    }

    pub(crate) fn postfix_operator(&mut self) -> Result<(), SyntaxError> {
        self.rule("postfix_operator", |p| match p.peek() {
            Some(category @ (C::Increment | C::Decrement)) => {
                p.consume(category)?;
                Ok(())
            }
            _ => Err(p.error_here(Reason::Expected(C::Increment))),
        })
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    /// How many lexemes an operator rule consumed.
    fn consumed<F>(input: &str, rule: F) -> usize
    where
        F: FnOnce(&mut Parser) -> Result<(), SyntaxError>,
    {
        let mut parser = Parser::new(input);
        rule(&mut parser).unwrap();
        // Enter and exit lines, plus one per lexeme.
        parser.trace().len() - 2
    }

    #[test]
    fn assignment_ahead() {
        for (input, expected) in [
            ("=", true),
            ("+=", true),
            ("< < =", true),
            ("> > =", true),
            ("> > > =", true),
            ("<=", false),
            ("< <", false),
            ("> >", false),
            ("==", false),
            ("x", false),
        ] {
            assert_eq!(Parser::new(input).assignment_ahead(), expected, "{}", input);
        }
    }

    #[test]
    fn shifts_are_reassembled() {
        assert_eq!(consumed(">>>= 1", |p| p.assignment_operator()), 4);
        assert_eq!(consumed("<<= 1", |p| p.assignment_operator()), 3);
        assert_eq!(consumed(">>> 1", |p| p.infix_operator()), 3);
        assert_eq!(consumed(">> 1", |p| p.infix_operator()), 2);
        assert_eq!(consumed("<= 1", |p| p.infix_operator()), 2);
        assert_eq!(consumed("< 1", |p| p.infix_operator()), 1);
        assert_eq!(consumed("&& 1", |p| p.infix_operator()), 1);
    }

    #[test]
    fn infix_stops_at_shift_assignment() {
        assert!(Parser::new("+").infix_ahead());
        assert!(Parser::new("<").infix_ahead());
        assert!(!Parser::new(">>=").infix_ahead());
        assert!(!Parser::new("!").infix_ahead());
    }

    #[test]
    fn wrong_operators() {
        assert!(Parser::new("!").postfix_operator().is_err());
        assert!(Parser::new(";").prefix_operator().is_err());
        assert!(Parser::new("<").assignment_operator().is_err());
    }
}
