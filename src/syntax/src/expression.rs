//! Expressions, from loosest binding to tightest.
//!
//! ```text
//! expression  = expression1 [ assignment_operator expression ]
//! expression1 = expression2 [ "?" expression ":" expression1 ]
//! expression2 = expression3 ( "instanceof" type | { infix_operator expression3 } )
//! expression3 = prefix_operator expression3
//!             | cast
//!             | expression_unit { selector } [ postfix_operator ]
//! cast        = "(" type ")" expression3
//! ```
//!
//! All binary operators share one level, there's no precedence between them
//! beyond what's written above.

use crate::{
    lexer::{Category as C, Delimiter as D, Keyword as K},
    parser::{Parser, SyntaxError},
};

/// Where an expression starts.
///
/// Statements that start with a name can't tell if they're a declaration or an
/// expression until after the name is read. When it turns out to be an
/// expression, it picks up with the name already consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Head {
    /// Nothing has been consumed yet.
    Fresh,
    /// A possibly dotted name has been consumed.
    Name,
}

impl<'i> Parser<'i> {
    pub(crate) fn expression(&mut self, head: Head) -> Result<(), SyntaxError> {
        self.rule("expression", |p| {
            p.expression1(head)?;

            if p.assignment_ahead() {
                p.assignment_operator()?;
                p.expression(Head::Fresh)?;
            }

            Ok(())
        })
    }

    /// The conditional operator.
    pub(crate) fn expression1(&mut self, head: Head) -> Result<(), SyntaxError> {
        self.rule("expression1", |p| {
            p.expression2(head)?;

            if p.consume_if(C::QuestionMark)? {
                p.expression(Head::Fresh)?;
                p.consume(C::Colon)?;
                p.expression1(Head::Fresh)?;
            }

            Ok(())
        })
    }

    /// Binary operators and `instanceof`.
    pub(crate) fn expression2(&mut self, head: Head) -> Result<(), SyntaxError> {
        self.rule("expression2", |p| {
            p.expression3(head)?;

            if p.consume_if(C::Keyword(K::Instanceof))? {
                return p.type_();
            }

            while p.infix_ahead() {
                p.infix_operator()?;
                p.expression3(Head::Fresh)?;
            }

            Ok(())
        })
    }

    /// Prefix operators, casts, and everything that binds tighter.
    pub(crate) fn expression3(&mut self, head: Head) -> Result<(), SyntaxError> {
        self.rule("expression3", |p| {
            if head == Head::Fresh {
                if p.prefix_ahead() {
                    p.prefix_operator()?;
                    return p.expression3(Head::Fresh);
                }

                if p.cast_ahead() {
                    return p.cast();
                }
            }

            p.expression_unit(head)?;

            while p.at(C::Dot) || p.at(C::Open(D::Bracket)) {
                p.selector()?;
            }

            if p.at(C::Increment) || p.at(C::Decrement) {
                p.postfix_operator()?;
            }

            Ok(())
        })
    }

    pub(crate) fn cast(&mut self) -> Result<(), SyntaxError> {
        self.rule("cast", |p| {
            p.consume(C::Open(D::Parenthesis))?;
            p.type_()?;
            p.consume(C::Close(D::Parenthesis))?;
            p.expression3(Head::Fresh)
        })
    }

    pub(crate) fn paren_expression(&mut self) -> Result<(), SyntaxError> {
        self.rule("paren_expression", |p| {
            p.consume(C::Open(D::Parenthesis))?;
            p.expression(Head::Fresh)?;
            p.consume(C::Close(D::Parenthesis))?;
            Ok(())
        })
    }
}
