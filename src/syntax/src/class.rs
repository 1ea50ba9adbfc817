//! Classes and their members.
//!
//! ```text
//! class                  = { modifier } class_declaration
//! class_declaration      = "class" identifier [ type_arguments ] [ extends ] [ implements ] class_body
//! class_body             = "{" { class_body_statement } "}"
//! class_body_statement   = ";" | { modifier } ( block | class_body_declaration )
//! class_body_declaration = [ type_arguments ] ( class_declaration
//!                          | "void" identifier method_declaration
//!                          | identifier method_declaration
//!                          | type identifier ( method_declaration | field_declaration ) )
//! ```

use crate::{
    lexer::{Category as C, Delimiter as D, Keyword as K},
    parser::{Parser, Reason, SyntaxError},
};

impl<'i> Parser<'i> {
    pub(crate) fn class(&mut self) -> Result<(), SyntaxError> {
        self.rule("class", |p| {
            p.modifiers()?;
            p.class_declaration()
        })
    }

    /// Any number of modifiers, like `public static final`.
    pub(crate) fn modifiers(&mut self) -> Result<usize, SyntaxError> {
        let mut count = 0;
        while self.at(C::Modifier) {
            self.consume(C::Modifier)?;
            count += 1;
        }
        Ok(count)
    }

    pub(crate) fn class_declaration(&mut self) -> Result<(), SyntaxError> {
        self.rule("class_declaration", |p| {
            p.consume(C::Keyword(K::Class))?;
            p.consume(C::Identifier)?;

            if p.at(C::Open(D::Angle)) {
                p.type_arguments()?;
            }

            if p.at(C::Keyword(K::Extends)) {
                p.extends()?;
            }

            if p.at(C::Keyword(K::Implements)) {
                p.implements()?;
            }

            p.class_body()
        })
    }

    pub(crate) fn extends(&mut self) -> Result<(), SyntaxError> {
        self.rule("extends", |p| {
            p.consume(C::Keyword(K::Extends))?;
            p.type_()
        })
    }

    pub(crate) fn implements(&mut self) -> Result<(), SyntaxError> {
        self.rule("implements", |p| {
            p.consume(C::Keyword(K::Implements))?;
            p.type_()?;

            while p.consume_if(C::Comma)? {
                p.type_()?;
            }

            Ok(())
        })
    }

    pub(crate) fn class_body(&mut self) -> Result<(), SyntaxError> {
        self.rule("class_body", |p| {
            p.consume(C::Open(D::Brace))?;

            while !p.at(C::Close(D::Brace)) && !p.at_end() {
                p.class_body_statement()?;
            }

            p.consume(C::Close(D::Brace))?;
            Ok(())
        })
    }

    /// An empty member, an initializer block, or a modified declaration.
    pub(crate) fn class_body_statement(&mut self) -> Result<(), SyntaxError> {
        self.rule("class_body_statement", |p| {
            if p.at(C::Semicolon) {
                p.consume(C::Semicolon)?;
                return Ok(());
            }

            p.modifiers()?;

            if p.at(C::Open(D::Brace)) {
                p.block()
            } else {
                p.class_body_declaration()
            }
        })
    }

    /// Nested classes, constructors, methods and fields.
    ///
    /// Methods and fields both start with a type and a name, so those are
    /// consumed before looking at what comes next to decide which it is.
    pub(crate) fn class_body_declaration(&mut self) -> Result<(), SyntaxError> {
        self.rule("class_body_declaration", |p| {
            // Generic methods and constructors.
            if p.at(C::Open(D::Angle)) {
                p.type_arguments()?;
            }

            match p.peek() {
                Some(C::Keyword(K::Class)) => p.class_declaration(),
                Some(C::Keyword(K::Void)) => {
                    p.consume(C::Keyword(K::Void))?;
                    p.consume(C::Identifier)?;
                    p.method_declaration()
                }
                Some(C::Identifier) if p.at_nth(1, C::Open(D::Parenthesis)) => {
                    p.consume(C::Identifier)?;
                    p.method_declaration()
                }
                Some(C::Identifier) => {
                    p.consume(C::Identifier)?;
                    p.type_rest()?;
                    p.member_rest()
                }
                Some(C::PrimitiveType) => {
                    p.consume(C::PrimitiveType)?;
                    p.dimensions()?;
                    p.member_rest()
                }
                _ => Err(p.error_here(Reason::NotStartOf("a class member"))),
            }
        })
    }

    /// The name of a method or field, once its type is known.
    fn member_rest(&mut self) -> Result<(), SyntaxError> {
        self.consume(C::Identifier)?;

        if self.at(C::Open(D::Parenthesis)) {
            self.method_declaration()
        } else {
            self.field_declaration()
        }
    }

    /// The rest of a field, after its type and first name.
    ///
    /// ```text
    /// field_declaration = { "[]" } [ "=" variable_init ] { "," variable_declarator } ";"
    /// ```
    pub(crate) fn field_declaration(&mut self) -> Result<(), SyntaxError> {
        self.rule("field_declaration", |p| {
            p.declarator_rest()?;

            while p.consume_if(C::Comma)? {
                p.variable_declarator()?;
            }

            p.consume(C::Semicolon)?;
            Ok(())
        })
    }

    /// The rest of a method or constructor, after its name.
    ///
    /// ```text
    /// method_declaration = parameters { "[]" } [ "throws" qualified_identifier { "," qualified_identifier } ]
    ///                      ( block | ";" )
    /// ```
    pub(crate) fn method_declaration(&mut self) -> Result<(), SyntaxError> {
        self.rule("method_declaration", |p| {
            p.parameters()?;
            p.dimensions()?;

            if p.consume_if(C::Keyword(K::Throws))? {
                p.qualified_identifier()?;

                while p.consume_if(C::Comma)? {
                    p.qualified_identifier()?;
                }
            }

            if p.at(C::Semicolon) {
                p.consume(C::Semicolon)?;
                Ok(())
            } else {
                p.block()
            }
        })
    }

    pub(crate) fn parameters(&mut self) -> Result<(), SyntaxError> {
        self.rule("parameters", |p| {
            p.consume(C::Open(D::Parenthesis))?;

            if !p.at(C::Close(D::Parenthesis)) {
                p.parameter()?;

                while p.consume_if(C::Comma)? {
                    p.parameter()?;
                }
            }

            p.consume(C::Close(D::Parenthesis))?;
            Ok(())
        })
    }

    /// ```text
    /// parameter = { modifier } type identifier { "[]" }
    /// ```
    pub(crate) fn parameter(&mut self) -> Result<(), SyntaxError> {
        self.rule("parameter", |p| {
            p.modifiers()?;
            p.type_()?;
            p.consume(C::Identifier)?;
            p.dimensions()?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn accepts(input: &str) -> bool {
        let mut parser = Parser::new(input);
        let result = parser.start();
        if let Err(e) = &result {
            eprintln!("{input}: {e} ({})", e.reason());
        }
        result.is_ok()
    }

    #[test]
    fn empty_class() {
        let trace = Parser::check("class A { }", |p| p.class()).unwrap();
        assert_eq!(trace.first(), Some("Enter <class>"));
        assert_eq!(trace.last(), Some("Exit <class>"));
    }

    #[test]
    fn class_headers() {
        assert!(accepts("public final class A<T> extends B<T> implements C, D<E> { }"));
        assert!(accepts("@Deprecated class A extends java.lang.Object { }"));
        assert!(!accepts("class { }"));
        assert!(!accepts("class A implements { }"));
    }

    #[test]
    fn members() {
        assert!(accepts(
            "class A {
                ;
                static { x = 1; }
                { }
                private int x, y[] = {1, 2};
                String name = \"a\";
                java.util.List<String> items;
                A() { }
                public A(int x) throws java.io.IOException, E { this.x = x; }
                void run() { }
                abstract int size();
                public <T> T id(T t) { return t; }
                int[] values()[] { return null; }
                class Inner { }
            }"
        ));
    }

    #[test]
    fn bad_members() {
        assert!(!accepts("class A { int; }"));
        assert!(!accepts("class A { void x; }"));
        assert!(!accepts("class A { int f( { } }"));
        assert!(!accepts("class A { return; }"));
    }

    #[test]
    fn parameters() {
        assert!(Parser::check("()", |p| p.parameters()).is_ok());
        assert!(Parser::check("(final int a, String[] b, java.util.Map<K, V> c, int d[])", |p| p.parameters()).is_ok());
        assert!(Parser::check("(int a,)", |p| p.parameters()).is_err());
    }
}
