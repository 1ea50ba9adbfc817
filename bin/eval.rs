//! Check source text taken from the command line.

use std::process::ExitCode;

use diagnostic::InputCoordinator;

use crate::{check::recognize, Args};

/// Check the command line argument as source text, printing the trace
#[derive(clap::Parser)]
pub struct Evaluate {
    /// The source text to check
    input: String,
}

impl Evaluate {
    pub(crate) fn run(&self, args: &Args) -> ExitCode {
        let mut inputs = InputCoordinator::default();
        let id = inputs.eval_input(self.input.clone());
        recognize(args, &inputs, id)
    }
}
