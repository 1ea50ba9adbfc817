//! Statements, mostly control flow.
//!
//! ```text
//! statement = block | ";"
//!           | identifier ":" statement
//!           | "if" paren_expression statement [ "else" statement ]
//!           | "while" paren_expression statement
//!           | "do" statement "while" paren_expression ";"
//!           | "for" "(" for_control ")" statement
//!           | "switch" paren_expression "{" cases "}"
//!           | "assert" expression [ ":" expression ] ";"
//!           | "return" [ expression ] ";"
//!           | ( "break" | "continue" ) [ identifier ] ";"
//!           | "throw" expression ";"
//!           | "try" block ( catches [ "finally" block ] | "finally" block )
//!           | "synchronized" paren_expression block
//!           | expression ";"
//! ```

use crate::{
    declaration::Fork,
    expression::Head,
    lexer::{Category as C, Delimiter as D, Keyword as K},
    parser::{Parser, Reason, SyntaxError},
};

impl<'i> Parser<'i> {
    pub(crate) fn statement(&mut self) -> Result<(), SyntaxError> {
        self.rule("statement", |p| match p.peek() {
            Some(C::Open(D::Brace)) => p.block(),
            Some(C::Semicolon) => {
                p.consume(C::Semicolon)?;
                Ok(())
            }
            Some(C::Identifier) if p.at_nth(1, C::Colon) => {
                p.consume(C::Identifier)?;
                p.consume(C::Colon)?;
                p.statement()
            }
            Some(C::Keyword(K::If)) => {
                p.consume(C::Keyword(K::If))?;
                p.paren_expression()?;
                p.statement()?;

                if p.consume_if(C::Keyword(K::Else))? {
                    p.statement()?;
                }

                Ok(())
            }
            Some(C::Keyword(K::While)) => {
                p.consume(C::Keyword(K::While))?;
                p.paren_expression()?;
                p.statement()
            }
            Some(C::Keyword(K::Do)) => {
                p.consume(C::Keyword(K::Do))?;
                p.statement()?;
                p.consume(C::Keyword(K::While))?;
                p.paren_expression()?;
                p.consume(C::Semicolon)?;
                Ok(())
            }
            Some(C::Keyword(K::For)) => {
                p.consume(C::Keyword(K::For))?;
                p.consume(C::Open(D::Parenthesis))?;
                p.for_control()?;
                p.consume(C::Close(D::Parenthesis))?;
                p.statement()
            }
            Some(C::Keyword(K::Switch)) => {
                p.consume(C::Keyword(K::Switch))?;
                p.paren_expression()?;
                p.consume(C::Open(D::Brace))?;
                p.cases()?;
                p.consume(C::Close(D::Brace))?;
                Ok(())
            }
            Some(C::Keyword(K::Assert)) => {
                p.consume(C::Keyword(K::Assert))?;
                p.expression(Head::Fresh)?;

                if p.consume_if(C::Colon)? {
                    p.expression(Head::Fresh)?;
                }

                p.consume(C::Semicolon)?;
                Ok(())
            }
            Some(C::Keyword(K::Return)) => {
                p.consume(C::Keyword(K::Return))?;

                if !p.at(C::Semicolon) {
                    p.expression(Head::Fresh)?;
                }

                p.consume(C::Semicolon)?;
                Ok(())
            }
            Some(jump @ C::Keyword(K::Break | K::Continue)) => {
                p.consume(jump)?;
                p.consume_if(C::Identifier)?;
                p.consume(C::Semicolon)?;
                Ok(())
            }
            Some(C::Keyword(K::Throw)) => {
                p.consume(C::Keyword(K::Throw))?;
                p.expression(Head::Fresh)?;
                p.consume(C::Semicolon)?;
                Ok(())
            }
            Some(C::Keyword(K::Try)) => p.try_statement(),
            Some(C::Modifier) if p.at_text(C::Modifier, "synchronized") => {
                p.consume(C::Modifier)?;
                p.paren_expression()?;
                p.block()
            }
            _ => {
                p.expression(Head::Fresh)?;
                p.consume(C::Semicolon)?;
                Ok(())
            }
        })
    }

    /// A `try` needs at least one `catch` or a `finally`.
    fn try_statement(&mut self) -> Result<(), SyntaxError> {
        self.consume(C::Keyword(K::Try))?;
        self.block()?;

        let caught = self.at(C::Keyword(K::Catch));
        if caught {
            self.catches()?;
        }

        if self.consume_if(C::Keyword(K::Finally))? {
            self.block()
        } else if caught {
            Ok(())
        } else {
            Err(self.error_here(Reason::Expected(C::Keyword(K::Catch))))
        }
    }

    /// ```text
    /// cases = { ( "case" ( identifier | expression ) | "default" ) ":" { block_statement } }
    /// ```
    ///
    /// An identifier on its own is an enum constant, anything more is an
    /// expression.
    pub(crate) fn cases(&mut self) -> Result<(), SyntaxError> {
        self.rule("cases", |p| {
            loop {
                if p.consume_if(C::Keyword(K::Case))? {
                    if p.at(C::Identifier) && p.at_nth(1, C::Colon) {
                        p.consume(C::Identifier)?;
                    } else {
                        p.expression(Head::Fresh)?;
                    }
                } else if !p.consume_if(C::Keyword(K::Default))? {
                    return Ok(());
                }

                p.consume(C::Colon)?;

                while !p.at(C::Keyword(K::Case))
                    && !p.at(C::Keyword(K::Default))
                    && !p.at(C::Close(D::Brace))
                    && !p.at_end()
                {
                    p.block_statement()?;
                }
            }
        })
    }

    pub(crate) fn catches(&mut self) -> Result<(), SyntaxError> {
        self.rule("catches", |p| {
            p.catch()?;

            while p.at(C::Keyword(K::Catch)) {
                p.catch()?;
            }

            Ok(())
        })
    }

    /// ```text
    /// catch = "catch" "(" { modifier } type { "|" type } identifier ")" block
    /// ```
    pub(crate) fn catch(&mut self) -> Result<(), SyntaxError> {
        self.rule("catch", |p| {
            p.consume(C::Keyword(K::Catch))?;
            p.consume(C::Open(D::Parenthesis))?;
            p.modifiers()?;
            p.type_()?;

            while p.at_text(C::InfixOperator, "|") {
                p.consume(C::InfixOperator)?;
                p.type_()?;
            }

            p.consume(C::Identifier)?;
            p.consume(C::Close(D::Parenthesis))?;
            p.block()
        })
    }

    /// What goes between the parentheses of a `for`.
    ///
    /// ```text
    /// for_control = [ for_init ] ( ":" expression
    ///                            | ";" [ expression ] ";" [ expression { "," expression } ] )
    /// for_init    = { modifier } local_variable_declaration
    ///             | expression { "," expression }
    /// ```
    pub(crate) fn for_control(&mut self) -> Result<(), SyntaxError> {
        self.rule("for_control", |p| {
            if !p.at(C::Semicolon) {
                p.for_init()?;
            }

            if p.consume_if(C::Colon)? {
                return p.expression(Head::Fresh);
            }

            p.consume(C::Semicolon)?;

            if !p.at(C::Semicolon) {
                p.expression(Head::Fresh)?;
            }

            p.consume(C::Semicolon)?;

            if !p.at(C::Close(D::Parenthesis)) {
                p.expression_list(Head::Fresh)?;
            }

            Ok(())
        })
    }

    fn for_init(&mut self) -> Result<(), SyntaxError> {
        if self.modifiers()? > 0 || self.at(C::PrimitiveType) {
            return self.local_variable_declaration();
        }

        match self.peek() {
            Some(C::Identifier) => match self.declaration_or_expression()? {
                Fork::Declaration => self.variable_declarators(),
                Fork::Expression => self.expression_list(Head::Name),
                Fork::Label => Err(self.error_here(Reason::NotStartOf("a for loop"))),
            },
            _ => self.expression_list(Head::Fresh),
        }
    }

    /// Comma separated expressions, where the first may have its name
    /// consumed already.
    fn expression_list(&mut self, head: Head) -> Result<(), SyntaxError> {
        self.expression(head)?;

        while self.consume_if(C::Comma)? {
            self.expression(Head::Fresh)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn statement(input: &str) -> Result<crate::Trace, SyntaxError> {
        Parser::check(input, |p| p.statement())
    }

    #[test]
    fn control_flow() {
        for input in [
            "if (a) b(); else { c(); }",
            "if (a) if (b) c(); else d();",
            "while (i < 10) i++;",
            "do { i--; } while (i > 0);",
            "for (;;) ;",
            "for (int i = 0, j = 1; i < n; i++, j--) { }",
            "for (String s : names) print(s);",
            "for (Map.Entry<K, V> e : map.entrySet()) { }",
            "for (final int x : xs) { }",
            "for (i = 0; i < n; i++) { }",
            "assert x > 0 : \"x must be positive\";",
            "return;",
            "return a + b;",
            "break;",
            "continue outer;",
            "throw new IllegalStateException();",
            "label: for (;;) break label;",
            "synchronized (lock) { count++; }",
            "{ }",
            ";",
        ] {
            let result = statement(input);
            assert!(result.is_ok(), "{} got {:?}", input, result);
        }
    }

    #[test]
    fn switches() {
        let input = "switch (x) {
            case 1: a(); break;
            case RED: b();
            case 2 + 3:
            default: { c(); }
        }";
        let result = statement(input);
        assert!(result.is_ok(), "got {:?}", result);
        assert!(statement("switch (x) { }").is_ok());
        assert!(statement("switch (x) { case: }").is_err());
    }

    #[test]
    fn try_catch_finally() {
        assert!(statement("try { } catch (Exception e) { }").is_ok());
        assert!(statement("try { } catch (final IOException | RuntimeException e) { } finally { }").is_ok());
        assert!(statement("try { } finally { }").is_ok());
        assert!(statement("try { } catch (A a) { } catch (B b) { }").is_ok());

        let error = statement("try { } x();").unwrap_err();
        assert_eq!(error.reason(), &Reason::Expected(C::Keyword(K::Catch)));
    }

    #[test]
    fn bad_statements() {
        for input in ["if a b();", "while (true)", "do x(); while (y)", "return", "for (int i = 0) { }", "break 1;"] {
            assert!(statement(input).is_err(), "{} was accepted", input);
        }
    }

    #[test]
    fn for_header_is_traced() {
        let trace = statement("for (;;) ;").unwrap();
        assert!(trace.iter().any(|l| l.trim() == "Enter <for_control>"));
        assert!(trace.iter().any(|l| l.trim() == "Exit <for_control>"));
    }
}
