//! Variable declarations, and deciding whether a statement is one.
//!
//! ```text
//! local_variable_declaration = type variable_declarators
//! variable_declarators       = variable_declarator { "," variable_declarator }
//! variable_declarator        = identifier { "[]" } [ "=" variable_init ]
//! variable_init              = array_init | expression
//! array_init                 = "{" [ variable_init { "," variable_init } [ "," ] ] "}"
//! ```

use crate::{
    expression::Head,
    lexer::{Category as C, Delimiter as D},
    parser::{Parser, Reason, SyntaxError},
};

/// Which way a statement starting with a name turned out to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fork {
    /// `name: statement`
    Label,
    /// `Type<Args>.Name[] x ...`, with the type consumed.
    Declaration,
    /// `name.name ...`, with the dotted name consumed.
    Expression,
}

impl<'i> Parser<'i> {
    pub(crate) fn local_variable_declaration(&mut self) -> Result<(), SyntaxError> {
        self.rule("local_variable_declaration", |p| {
            p.type_()?;
            p.variable_declarators()
        })
    }

    pub(crate) fn variable_declarators(&mut self) -> Result<(), SyntaxError> {
        self.rule("variable_declarators", |p| {
            p.variable_declarator()?;

            while p.consume_if(C::Comma)? {
                p.variable_declarator()?;
            }

            Ok(())
        })
    }

    pub(crate) fn variable_declarator(&mut self) -> Result<(), SyntaxError> {
        self.rule("variable_declarator", |p| {
            p.consume(C::Identifier)?;
            p.declarator_rest()
        })
    }

    /// What can follow the name in a declarator. Only a plain `=` can start an
    /// initializer.
    pub(crate) fn declarator_rest(&mut self) -> Result<(), SyntaxError> {
        self.dimensions()?;

        if self.at_text(C::AssignmentOperator, "=") {
            self.consume(C::AssignmentOperator)?;
            self.variable_init()?;
        }

        Ok(())
    }

    pub(crate) fn variable_init(&mut self) -> Result<(), SyntaxError> {
        self.rule("variable_init", |p| {
            if p.at(C::Open(D::Brace)) {
                p.array_init()
            } else {
                p.expression(Head::Fresh)
            }
        })
    }

    pub(crate) fn array_init(&mut self) -> Result<(), SyntaxError> {
        self.rule("array_init", |p| {
            p.consume(C::Open(D::Brace))?;

            while !p.at(C::Close(D::Brace)) {
                p.variable_init()?;

                if !p.consume_if(C::Comma)? {
                    break;
                }
            }

            p.consume(C::Close(D::Brace))?;
            Ok(())
        })
    }

    /// Statements that start with a name might be a label, a declaration, or
    /// an expression, and there's no telling which from the name alone.
    ///
    /// This consumes the name and keeps going while it could still be either
    /// a type or an expression: dotted names, and type arguments when the scan
    /// says a balanced list is coming. The first thing that settles it decides
    /// the fork. Once type arguments have been consumed, the `<` can't have
    /// been a comparison, so the only way forward is a declaration.
    pub(crate) fn declaration_or_expression(&mut self) -> Result<Fork, SyntaxError> {
        self.consume(C::Identifier)?;

        if self.at(C::Colon) {
            return Ok(Fork::Label);
        }

        let mut saw_type_arguments = false;

        loop {
            if self.type_arguments_ahead(0).is_some() {
                self.type_arguments()?;
                saw_type_arguments = true;
            }

            if self.at(C::Dot) && self.at_nth(1, C::Identifier) {
                self.consume(C::Dot)?;
                self.consume(C::Identifier)?;
            } else {
                break;
            }
        }

        if self.dimensions()? > 0 || self.at(C::Identifier) {
            Ok(Fork::Declaration)
        } else if saw_type_arguments {
            Err(self.error_here(Reason::TypeArgumentsOutsideDeclaration))
        } else {
            Ok(Fork::Expression)
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn fork(input: &str) -> Result<Fork, SyntaxError> {
        Parser::new(input).declaration_or_expression()
    }

    #[test]
    fn forks() {
        assert_eq!(fork("outer: for"), Ok(Fork::Label));
        assert_eq!(fork("Foo<Bar> x;"), Ok(Fork::Declaration));
        assert_eq!(fork("Foo x;"), Ok(Fork::Declaration));
        assert_eq!(fork("a.b.C<D>.E<F>[] x;"), Ok(Fork::Declaration));
        assert_eq!(fork("String[] names;"), Ok(Fork::Declaration));
        assert_eq!(fork("foo < bar;"), Ok(Fork::Expression));
        assert_eq!(fork("a.b.c();"), Ok(Fork::Expression));
        assert_eq!(fork("a[0] = 1;"), Ok(Fork::Expression));
        assert_eq!(fork("i++;"), Ok(Fork::Expression));
    }

    #[test]
    fn type_arguments_need_a_declarator() {
        for input in ["foo<bar>();", "foo<bar> = 1;", "foo<bar>++;", "a.b<c>.d();"] {
            let error = fork(input).unwrap_err();
            assert_eq!(error.reason(), &Reason::TypeArgumentsOutsideDeclaration, "{}", input);
        }
    }

    #[test]
    fn declarators() {
        assert!(Parser::check("a, b[] = {1, {2, 3},}, c = x + 1", |p| p.variable_declarators()).is_ok());
        assert!(Parser::check("a += 1", |p| p.variable_declarators()).is_err());
        assert!(Parser::check("{}", |p| p.array_init()).is_ok());
        assert!(Parser::check("{,}", |p| p.array_init()).is_err());
    }

    #[test]
    fn local_declarations() {
        assert!(Parser::check("int x = 0, y", |p| p.local_variable_declaration()).is_ok());
        assert!(Parser::check("Map<K, List<V>> m = new HashMap<>()", |p| p.local_variable_declaration()).is_ok());
    }
}
