//! Check a file, or standard input, printing the trace.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use diagnostic::{Diagnostic, Emitter, InputCoordinator, InputId, TerminalEmitter};
use syntax::Parser;

use crate::Args;

/// Check that a file holds a well-formed class
#[derive(clap::Parser)]
pub struct Check {
    /// The file to check. If no file is given, stdin is read.
    filename: Option<PathBuf>,
}

impl Check {
    pub(crate) fn run(&self, args: &Args) -> ExitCode {
        let mut inputs = InputCoordinator::default();

        let id = match read_input(&mut inputs, self.filename.as_ref()) {
            Ok(id) => id,
            Err(e) => {
                report_read_error(self.filename.as_ref(), &e);
                return ExitCode::from(2);
            }
        };

        recognize(args, &inputs, id)
    }
}

/// Read a file, or stdin when there's no file, into `inputs`.
pub(crate) fn read_input(inputs: &mut InputCoordinator, filename: Option<&PathBuf>) -> io::Result<InputId> {
    match filename {
        Some(path) => {
            let buffer = fs::read_to_string(path)?;
            Ok(inputs.file_input(buffer, path.clone()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(inputs.stdin_input(buffer))
        }
    }
}

pub(crate) fn report_read_error(filename: Option<&PathBuf>, e: &io::Error) {
    match filename {
        Some(path) => eprintln!("Error: cannot read '{}': {}", path.display(), e),
        None => eprintln!("Error: cannot read stdin: {}", e),
    }
}

/// Parse an input, print the trace, and report how it went.
///
/// The trace and the one-line error go to stdout, the longer diagnostic goes
/// to stderr.
pub(crate) fn recognize(args: &Args, inputs: &InputCoordinator, id: InputId) -> ExitCode {
    let name = inputs.get_input_name(id);
    let mut parser = Parser::with_config(inputs.get_input_buffer(id), args.config());
    let result = parser.start();

    if !args.quiet {
        print!("{}", parser.trace());
    }

    let error = match result {
        Ok(()) => {
            log::info!("{} is well formed", name);
            return ExitCode::SUCCESS;
        }
        Err(error) => error,
    };

    println!("{}", error);

    let diagnostic = Diagnostic::from(&error).input(id);
    let mut emitter = TerminalEmitter::stderr(args.color.into());

    if let Err(e) = emitter.emit(&diagnostic, inputs) {
        log::warn!("could not write the diagnostic for {}: {}", name, e);
    }

    ExitCode::from(1)
}
