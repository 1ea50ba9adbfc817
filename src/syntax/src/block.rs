//! Blocks, like `{ int x = 0; x++; }`
//!
//! ```text
//! block           = "{" { block_statement } "}"
//! block_statement = { modifier } class_declaration
//!                 | { modifier } local_variable_declaration ";"
//!                 | statement
//! ```

use crate::{
    declaration::Fork,
    expression::Head,
    lexer::{Category as C, Delimiter as D, Keyword as K},
    parser::{Parser, SyntaxError},
};

impl<'i> Parser<'i> {
    pub(crate) fn block(&mut self) -> Result<(), SyntaxError> {
        self.rule("block", |p| {
            p.consume(C::Open(D::Brace))?;

            while !p.at(C::Close(D::Brace)) && !p.at_end() {
                p.block_statement()?;
            }

            p.consume(C::Close(D::Brace))?;
            Ok(())
        })
    }

    pub(crate) fn block_statement(&mut self) -> Result<(), SyntaxError> {
        self.rule("block_statement", |p| {
            // `synchronized` is a modifier, but here it starts a statement.
            if p.at_text(C::Modifier, "synchronized") {
                return p.statement();
            }

            if p.modifiers()? > 0 {
                return if p.at(C::Keyword(K::Class)) {
                    p.class_declaration()
                } else {
                    p.local_variable_declaration()?;
                    p.consume(C::Semicolon)?;
                    Ok(())
                };
            }

            match p.peek() {
                Some(C::Keyword(K::Class)) => p.class_declaration(),
                Some(C::PrimitiveType) => {
                    p.local_variable_declaration()?;
                    p.consume(C::Semicolon)?;
                    Ok(())
                }
                Some(C::Identifier) => p.identifier_statement(),
                _ => p.statement(),
            }
        })
    }

    /// A block statement that starts with a name.
    fn identifier_statement(&mut self) -> Result<(), SyntaxError> {
        match self.declaration_or_expression()? {
            Fork::Label => {
                self.consume(C::Colon)?;
                self.statement()
            }
            Fork::Declaration => {
                self.variable_declarators()?;
                self.consume(C::Semicolon)?;
                Ok(())
            }
            Fork::Expression => {
                self.expression(Head::Name)?;
                self.consume(C::Semicolon)?;
                Ok(())
            }
        }
    }
}
