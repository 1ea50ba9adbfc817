//! Types, and the lookahead scans that tell them apart from expressions.
//!
//! ```text
//! type           = primitive_type { "[]" } | identifier type_rest
//! type_rest      = [ type_arguments ] { "." identifier [ type_arguments ] } { "[]" }
//! type_arguments = "<" [ type_argument { "," type_argument } ] ">"
//! type_argument  = type | "?" [ ( "extends" | "super" ) type ]
//! ```

use crate::{
    lexer::{Category as C, Delimiter as D, Keyword as K},
    parser::{Parser, Reason, SyntaxError},
};

impl<'i> Parser<'i> {
    pub(crate) fn type_(&mut self) -> Result<(), SyntaxError> {
        self.rule("type", |p| match p.peek() {
            Some(C::PrimitiveType) => {
                p.consume(C::PrimitiveType)?;
                p.dimensions()?;
                Ok(())
            }
            Some(C::Identifier) => {
                p.consume(C::Identifier)?;
                p.type_rest()
            }
            _ => Err(p.error_here(Reason::NotStartOf("a type"))),
        })
    }

    /// Everything in a reference type after its first name.
    pub(crate) fn type_rest(&mut self) -> Result<(), SyntaxError> {
        self.rule("type_rest", |p| {
            if p.at(C::Open(D::Angle)) {
                p.type_arguments()?;
            }

            while p.at(C::Dot) {
                p.consume(C::Dot)?;
                p.consume(C::Identifier)?;

                if p.at(C::Open(D::Angle)) {
                    p.type_arguments()?;
                }
            }

            p.dimensions()?;
            Ok(())
        })
    }

    /// Type arguments may be empty, as in `new ArrayList<>()`.
    pub(crate) fn type_arguments(&mut self) -> Result<(), SyntaxError> {
        self.rule("type_arguments", |p| {
            p.consume(C::Open(D::Angle))?;

            if !p.at(C::Close(D::Angle)) {
                p.type_argument()?;

                while p.consume_if(C::Comma)? {
                    p.type_argument()?;
                }
            }

            p.consume(C::Close(D::Angle))?;
            Ok(())
        })
    }

    pub(crate) fn type_argument(&mut self) -> Result<(), SyntaxError> {
        self.rule("type_argument", |p| {
            if !p.at(C::QuestionMark) {
                return p.type_();
            }

            p.consume(C::QuestionMark)?;

            if p.consume_if(C::Keyword(K::Extends))? || p.consume_if(C::Keyword(K::Super))? {
                p.type_()?;
            }

            Ok(())
        })
    }

    /// Any number of `[]` pairs, as on `int[][]`. An `[` that isn't followed
    /// straight away by `]` is left alone, it's probably an index.
    pub(crate) fn dimensions(&mut self) -> Result<usize, SyntaxError> {
        let mut count = 0;

        while self.at(C::Open(D::Bracket)) && self.at_nth(1, C::Close(D::Bracket)) {
            self.consume(C::Open(D::Bracket))?;
            self.consume(C::Close(D::Bracket))?;
            count += 1;
        }

        Ok(count)
    }
}

// Lookahead scans
impl<'i> Parser<'i> {
    /// Does a complete list of type arguments start `n` lexemes past the
    /// lookahead? If it does, this is how many lexemes past the lookahead its
    /// closing `>` ends.
    ///
    /// This only looks at which lexemes appear and that the angle brackets
    /// balance, which is enough to tell `Foo<Bar> x` from `foo < bar`.
    pub(crate) fn type_arguments_ahead(&mut self, n: usize) -> Option<usize> {
        if !self.at_nth(n, C::Open(D::Angle)) {
            return None;
        }

        let mut depth = 0usize;
        let mut i = n;

        loop {
            match self.peek_nth(i)? {
                C::Open(D::Angle) => depth += 1,
                C::Close(D::Angle) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                C::Identifier
                | C::PrimitiveType
                | C::QuestionMark
                | C::Comma
                | C::Dot
                | C::Open(D::Bracket)
                | C::Close(D::Bracket)
                | C::Keyword(K::Extends | K::Super) => {}
                C::InfixOperator if self.peek_text(i) == Some("&") => {}
                _ => return None,
            }

            i += 1;
        }
    }

    /// Is the lookahead the start of a cast like `(int) x` or `(Foo<T>) x`?
    ///
    /// A primitive type in parentheses is always a cast. A reference type in
    /// parentheses is only a cast if what follows can't continue an
    /// expression, so `(a) + b` stays an addition.
    pub(crate) fn cast_ahead(&mut self) -> bool {
        if !self.at(C::Open(D::Parenthesis)) {
            return false;
        }

        match self.peek_nth(1) {
            Some(C::PrimitiveType) => {
                let close = self.dimensions_ahead(2);
                self.at_nth(close, C::Close(D::Parenthesis))
            }
            Some(C::Identifier) => {
                let mut i = 2;

                loop {
                    if let Some(next) = self.type_arguments_ahead(i) {
                        i = next;
                    }

                    if self.at_nth(i, C::Dot) && self.at_nth(i + 1, C::Identifier) {
                        i += 2;
                    } else {
                        break;
                    }
                }

                let close = self.dimensions_ahead(i);

                self.at_nth(close, C::Close(D::Parenthesis))
                    && self.peek_nth(close + 1).map_or(false, |c| c.starts_operand())
            }
            _ => false,
        }
    }

    /// Skip over `[]` pairs starting `n` past the lookahead, returning where
    /// they end.
    fn dimensions_ahead(&mut self, n: usize) -> usize {
        let mut i = n;
        while self.at_nth(i, C::Open(D::Bracket)) && self.at_nth(i + 1, C::Close(D::Bracket)) {
            i += 2;
        }
        i
    }
}
