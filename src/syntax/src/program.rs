//! Programs, the top level of the grammar.
//!
//! ```text
//! program = [ "package" qualified_identifier ";" ] { import } class
//! ```

use crate::{
    lexer::{Category as C, Keyword as K},
    parser::{Parser, Reason, SyntaxError},
};

impl<'i> Parser<'i> {
    /// A whole program. Everything after the class must be whitespace or
    /// comments.
    pub(crate) fn program(&mut self) -> Result<(), SyntaxError> {
        self.rule("program", |p| {
            if p.at(C::Keyword(K::Package)) {
                p.consume(C::Keyword(K::Package))?;
                p.qualified_identifier()?;
                p.consume(C::Semicolon)?;
            }

            while p.at(C::Keyword(K::Import)) {
                p.import()?;
            }

            p.class()?;

            if p.at_end() {
                Ok(())
            } else {
                Err(p.error_here(Reason::TrailingInput))
            }
        })
    }

    /// A dotted name like `java.util.List`.
    pub(crate) fn qualified_identifier(&mut self) -> Result<(), SyntaxError> {
        self.rule("qualified_identifier", |p| {
            p.consume(C::Identifier)?;

            while p.at(C::Dot) {
                p.consume(C::Dot)?;
                p.consume(C::Identifier)?;
            }

            Ok(())
        })
    }

    /// ```text
    /// import = "import" [ "static" ] identifier { "." ( identifier | "*" ) } ";"
    /// ```
    ///
    /// A `*` has to be the last part of the name.
    pub(crate) fn import(&mut self) -> Result<(), SyntaxError> {
        self.rule("import", |p| {
            p.consume(C::Keyword(K::Import))?;

            if p.at_text(C::Modifier, "static") {
                p.consume(C::Modifier)?;
            }

            p.consume(C::Identifier)?;

            while p.at(C::Dot) {
                p.consume(C::Dot)?;

                if p.at_text(C::InfixOperator, "*") {
                    p.consume(C::InfixOperator)?;
                    break;
                }

                p.consume(C::Identifier)?;
            }

            p.consume(C::Semicolon)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn package_and_imports() {
        let mut p = Parser::new(
            "package a.b;\nimport java.util.List;\nimport static java.lang.Math.*;\nclass A { }",
        );
        let result = p.start();
        assert!(result.is_ok(), "got {:?}", result);
    }

    #[test]
    fn import_star_must_be_last() {
        let trace = Parser::check("import a.*.b;", |p| p.import());
        assert!(trace.is_err());
    }

    #[test]
    fn import_traces_each_lexeme() {
        let trace = Parser::check("import a;", |p| p.import()).unwrap();
        assert_eq!(trace.len(), 5);
        assert_eq!(trace.first(), Some("Enter <import>"));
        assert_eq!(trace.last(), Some("Exit <import>"));
    }

    #[test]
    fn trailing_input() {
        let mut p = Parser::new("class A { } x");
        let error = p.start().unwrap_err();
        assert_eq!(error.reason(), &Reason::TrailingInput);
        assert_eq!(error.lexeme(), "x");
    }

    #[test]
    fn empty_input() {
        let mut p = Parser::new("");
        let error = p.start().unwrap_err();
        assert_eq!(error.lexeme(), "<EOF>");
        assert_eq!(error.line(), 1);
    }
}
