//! The operands of expressions, and what can follow them.
//!
//! ```text
//! expression_unit  = literal | paren_expression
//!                  | "this" [ arguments ]
//!                  | "super" ( arguments | "." identifier [ arguments ] )
//!                  | "new" allocator
//!                  | identifier identifier_rest
//!                  | primitive_type { "[]" } "." "class"
//!                  | "void" "." "class"
//! identifier_rest  = { "." identifier } [ arguments
//!                  | { "[]" } "." "class"
//!                  | "." ( "class" | "this" | "super" super_rest | "new" [ type_arguments ] inner_allocator ) ]
//! selector         = "[" expression "]"
//!                  | "." ( identifier [ arguments ] | "this" | "super" super_rest
//!                        | "new" [ type_arguments ] inner_allocator )
//! allocator        = ( identifier [ type_arguments ] { "." identifier [ type_arguments ] } | primitive_type )
//!                    ( class_allocator | array_allocator )
//! class_allocator  = arguments [ class_body ]
//! array_allocator  = "[" ( "]" { "[]" } array_init | expression "]" { "[" expression "]" } { "[]" } )
//! inner_allocator  = identifier [ type_arguments ] class_allocator
//! arguments        = "(" [ expression { "," expression } ] ")"
//! ```

use crate::{
    expression::Head,
    lexer::{Category as C, Delimiter as D, Keyword as K},
    parser::{Parser, Reason, SyntaxError},
};

impl<'i> Parser<'i> {
    pub(crate) fn expression_unit(&mut self, head: Head) -> Result<(), SyntaxError> {
        self.rule("expression_unit", |p| {
            if head == Head::Name {
                return p.identifier_rest();
            }

            match p.peek() {
                Some(C::Open(D::Parenthesis)) => p.paren_expression(),
                Some(C::Keyword(K::This)) => {
                    p.consume(C::Keyword(K::This))?;

                    if p.at(C::Open(D::Parenthesis)) {
                        p.arguments()?;
                    }

                    Ok(())
                }
                Some(C::Keyword(K::Super)) => {
                    p.consume(C::Keyword(K::Super))?;
                    p.super_rest()
                }
                Some(C::Keyword(K::New)) => {
                    p.consume(C::Keyword(K::New))?;
                    p.allocator()
                }
                Some(C::Identifier) => {
                    p.consume(C::Identifier)?;
                    p.identifier_rest()
                }
                Some(C::PrimitiveType) => {
                    p.consume(C::PrimitiveType)?;
                    p.dimensions()?;
                    p.class_literal()
                }
                Some(C::Keyword(K::Void)) => {
                    p.consume(C::Keyword(K::Void))?;
                    p.class_literal()
                }
                _ if p.literal_ahead() => p.literal(),
                _ => Err(p.error_here(Reason::NotStartOf("an expression"))),
            }
        })
    }

    /// What can follow a name in an expression. A dotted name is consumed up
    /// to a call, or a `.class`, `.this`, `.super` or `.new`.
    pub(crate) fn identifier_rest(&mut self) -> Result<(), SyntaxError> {
        self.rule("identifier_rest", |p| {
            while p.at(C::Dot) && p.at_nth(1, C::Identifier) {
                p.consume(C::Dot)?;
                p.consume(C::Identifier)?;
            }

            if p.at(C::Open(D::Parenthesis)) {
                return p.arguments();
            }

            if p.dimensions()? > 0 {
                return p.class_literal();
            }

            if !p.at(C::Dot) {
                return Ok(());
            }

            match p.peek_nth(1) {
                Some(C::Keyword(K::Class)) => p.class_literal(),
                Some(C::Keyword(K::This)) => {
                    p.consume(C::Dot)?;
                    p.consume(C::Keyword(K::This))?;
                    Ok(())
                }
                Some(C::Keyword(K::Super)) => {
                    p.consume(C::Dot)?;
                    p.consume(C::Keyword(K::Super))?;
                    p.super_rest()
                }
                Some(C::Keyword(K::New)) => p.inner_creation(),
                // Anything else after the dot is a selector's problem.
                _ => Ok(()),
            }
        })
    }

    /// `.class`, as in `int[].class`.
    fn class_literal(&mut self) -> Result<(), SyntaxError> {
        self.consume(C::Dot)?;
        self.consume(C::Keyword(K::Class))?;
        Ok(())
    }

    /// After `super`, either a constructor call or a member.
    fn super_rest(&mut self) -> Result<(), SyntaxError> {
        if self.at(C::Open(D::Parenthesis)) {
            return self.arguments();
        }

        self.consume(C::Dot)?;
        self.consume(C::Identifier)?;

        if self.at(C::Open(D::Parenthesis)) {
            self.arguments()?;
        }

        Ok(())
    }

    /// `.new Inner()` on an outer instance.
    fn inner_creation(&mut self) -> Result<(), SyntaxError> {
        self.consume(C::Dot)?;
        self.consume(C::Keyword(K::New))?;

        if self.at(C::Open(D::Angle)) {
            self.type_arguments()?;
        }

        self.inner_allocator()
    }

    pub(crate) fn selector(&mut self) -> Result<(), SyntaxError> {
        self.rule("selector", |p| {
            if p.consume_if(C::Open(D::Bracket))? {
                p.expression(Head::Fresh)?;
                p.consume(C::Close(D::Bracket))?;
                return Ok(());
            }

            match p.peek_nth(1) {
                Some(C::Identifier) => {
                    p.consume(C::Dot)?;
                    p.consume(C::Identifier)?;

                    if p.at(C::Open(D::Parenthesis)) {
                        p.arguments()?;
                    }

                    Ok(())
                }
                Some(C::Keyword(K::This)) => {
                    p.consume(C::Dot)?;
                    p.consume(C::Keyword(K::This))?;
                    Ok(())
                }
                Some(C::Keyword(K::Super)) => {
                    p.consume(C::Dot)?;
                    p.consume(C::Keyword(K::Super))?;
                    p.super_rest()
                }
                Some(C::Keyword(K::New)) => p.inner_creation(),
                _ => {
                    p.consume(C::Dot)?;
                    Err(p.error_here(Reason::NotStartOf("a member access")))
                }
            }
        })
    }

    /// What comes after `new`.
    pub(crate) fn allocator(&mut self) -> Result<(), SyntaxError> {
        self.rule("allocator", |p| {
            match p.peek() {
                Some(C::PrimitiveType) => {
                    p.consume(C::PrimitiveType)?;
                    return p.array_allocator();
                }
                Some(C::Identifier) => {
                    p.consume(C::Identifier)?;

                    loop {
                        if p.at(C::Open(D::Angle)) {
                            p.type_arguments()?;
                        }

                        if !p.consume_if(C::Dot)? {
                            break;
                        }

                        p.consume(C::Identifier)?;
                    }
                }
                _ => return Err(p.error_here(Reason::NotStartOf("an allocation"))),
            }

            if p.at(C::Open(D::Bracket)) {
                p.array_allocator()
            } else {
                p.class_allocator()
            }
        })
    }

    /// Constructor arguments, and an optional anonymous class body.
    pub(crate) fn class_allocator(&mut self) -> Result<(), SyntaxError> {
        self.rule("class_allocator", |p| {
            p.arguments()?;

            if p.at(C::Open(D::Brace)) {
                p.class_body()?;
            }

            Ok(())
        })
    }

    /// Either every dimension is empty and there's an initializer, like
    /// `new int[][] { {1} }`, or at least the first dimension has a size, like
    /// `new int[n][]`.
    pub(crate) fn array_allocator(&mut self) -> Result<(), SyntaxError> {
        self.rule("array_allocator", |p| {
            if p.dimensions()? > 0 {
                return p.array_init();
            }

            p.consume(C::Open(D::Bracket))?;
            p.expression(Head::Fresh)?;
            p.consume(C::Close(D::Bracket))?;

            while p.at(C::Open(D::Bracket)) && !p.at_nth(1, C::Close(D::Bracket)) {
                p.consume(C::Open(D::Bracket))?;
                p.expression(Head::Fresh)?;
                p.consume(C::Close(D::Bracket))?;
            }

            p.dimensions()?;
            Ok(())
        })
    }

    /// The class part of `outer.new Inner<T>()`.
    pub(crate) fn inner_allocator(&mut self) -> Result<(), SyntaxError> {
        self.rule("inner_allocator", |p| {
            p.consume(C::Identifier)?;

            if p.at(C::Open(D::Angle)) {
                p.type_arguments()?;
            }

            p.class_allocator()
        })
    }

    pub(crate) fn arguments(&mut self) -> Result<(), SyntaxError> {
        self.rule("arguments", |p| {
            p.consume(C::Open(D::Parenthesis))?;

            if !p.at(C::Close(D::Parenthesis)) {
                p.expression(Head::Fresh)?;

                while p.consume_if(C::Comma)? {
                    p.expression(Head::Fresh)?;
                }
            }

            p.consume(C::Close(D::Parenthesis))?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn unit(input: &str) -> Result<crate::Trace, SyntaxError> {
        Parser::check(input, |p| p.expression(Head::Fresh))
    }

    #[test]
    fn units() {
        for input in [
            "this",
            "this(1, 2)",
            "super(x)",
            "super.toString()",
            "super.field",
            "int.class",
            "int[][].class",
            "void.class",
            "String.class",
            "String[].class",
            "Outer.this",
            "Outer.super.run()",
            "outer.new Inner()",
            "outer.new Inner<T>(1)",
            "a.b.c",
            "a.b.c(d, e)",
            "f().g().h",
            "xs[i][j]",
            "m.get(k).new Inner()",
        ] {
            let result = unit(input);
            assert!(result.is_ok(), "{} got {:?}", input, result);
        }
    }

    #[test]
    fn allocations() {
        for input in [
            "new Object()",
            "new java.util.ArrayList<String>()",
            "new HashMap<>()",
            "new Outer.Inner()",
            "new Runnable() { public void run() { } }",
            "new int[3]",
            "new int[n][]",
            "new int[2][3]",
            "new int[] {1, 2, 3}",
            "new String[][] { {\"a\"}, {} }",
            "new Foo[size]",
        ] {
            let result = unit(input);
            assert!(result.is_ok(), "{} got {:?}", input, result);
        }
    }

    #[test]
    fn bad_units() {
        for input in ["new", "new int", "new int[]", "new Foo", "this.", "a.1", "int", "super", "new 3()"] {
            let result = unit(input);
            assert!(result.is_err(), "{} was accepted", input);
        }
    }

    #[test]
    fn call_is_traced() {
        let trace = unit("f(x)").unwrap();
        assert!(trace.iter().any(|l| l.trim() == "Enter <arguments>"));
    }
}
