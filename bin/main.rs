//! Descent - check that source text is a well-formed class, showing the
//! derivation the parser walks.

use std::process::ExitCode;

use syntax::Config;

mod check;
mod eval;
mod tokens;

/// How the command line asks for colour.
#[derive(clap::ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for diagnostic::ColorChoice {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => diagnostic::ColorChoice::Auto,
            Color::Always => diagnostic::ColorChoice::Always,
            Color::Never => diagnostic::ColorChoice::Never,
        }
    }
}

#[derive(clap::Parser)]
#[clap(version, author, about)]
pub struct Args {
    /// Only report the verdict, without printing the trace
    #[clap(short, long, global = true)]
    quiet: bool,

    /// Spaces of trace indentation per level of nesting
    #[clap(long, global = true, value_name = "N", default_value_t = Config::DEFAULT_INDENT)]
    indent: usize,

    /// How deeply grammar rules may nest before the input is rejected
    #[clap(long, global = true, value_name = "N", default_value_t = Config::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// When to use colour in diagnostics
    #[clap(long, global = true, arg_enum, default_value = "auto")]
    color: Color,

    #[clap(subcommand)]
    command: Command,
}

impl Args {
    /// The parser configuration asked for on the command line.
    pub(crate) fn config(&self) -> Config {
        Config::default().indent(self.indent).max_depth(self.max_depth)
    }
}

#[derive(clap::Subcommand)]
enum Command {
    Check(check::Check),
    Eval(eval::Evaluate),
    Tokens(tokens::Tokens),
}

fn main() -> ExitCode {
    env_logger::init();

    let args = <Args as clap::Parser>::parse();

    match &args.command {
        Command::Check(check) => check.run(&args),
        Command::Eval(eval) => eval.run(&args),
        Command::Tokens(tokens) => tokens.run(&args),
    }
}
