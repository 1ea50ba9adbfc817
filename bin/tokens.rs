//! Print the lexemes in a file.

use std::{path::PathBuf, process::ExitCode};

use diagnostic::{Caret, Diagnostic, Emitter, InputCoordinator, Span, TerminalEmitter};
use syntax::lexer::Lexer;

use crate::{
    check::{read_input, report_read_error},
    Args,
};

/// Print each lexeme in a file with the line it's on
#[derive(clap::Parser)]
pub struct Tokens {
    /// The file to read. If no file is given, stdin is read.
    filename: Option<PathBuf>,
}

impl Tokens {
    pub(crate) fn run(&self, args: &Args) -> ExitCode {
        let mut inputs = InputCoordinator::default();

        let id = match read_input(&mut inputs, self.filename.as_ref()) {
            Ok(id) => id,
            Err(e) => {
                report_read_error(self.filename.as_ref(), &e);
                return ExitCode::from(2);
            }
        };

        let mut lexer = Lexer::new(inputs.get_input_buffer(id));

        loop {
            match lexer.next_lexeme() {
                Ok(Some(lexeme)) => println!("{:>4}  {}", lexeme.line(), lexeme),
                Ok(None) => return ExitCode::SUCCESS,
                Err(e) => {
                    let caret = e.caret();
                    let span = Span::new(caret, Caret::new(caret.line(), caret.column() + 1));
                    let diagnostic = Diagnostic::new(e.to_string())
                        .input(id)
                        .location(caret)
                        .highlight(span, "here");

                    let mut emitter = TerminalEmitter::stderr(args.color.into());
                    if let Err(e) = emitter.emit(&diagnostic, &inputs) {
                        log::warn!("could not write a diagnostic: {}", e);
                    }

                    return ExitCode::from(1);
                }
            }
        }
    }
}
