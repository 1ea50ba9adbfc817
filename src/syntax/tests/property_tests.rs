//! Property tests for the lexer and parser.
//!
//! 1. Neither the lexer nor the parser panics, whatever the input.
//! 2. Whitespace and comments between lexemes change nothing but line numbers.
//! 3. Lines are counted by the newlines before each lexeme, including those
//!    inside string literals.
//! 4. Parsing is deterministic.

use proptest::prelude::*;

use syntax::{
    lexer::{Category, Lexer},
    Parser,
};

/// Lexemes that can't merge with a neighbour when separated by trivia.
const FRAGMENTS: &[&str] = &[
    "x", "Foo", "class", "int", "public", "new", "42", "'c'", "\"s\"", "<", ">", "=", "+", "-", "!", "&&",
    "(", ")", "{", "}", "[", "]", ";", ",", ".", "?", ":",
];

/// Accepted programs, written with a single space between every lexeme.
const PROGRAMS: &[&str] = &[
    "class A { }",
    "public class A extends B { int x = 1 ; }",
    "class A { void f ( ) { List < String > xs ; xs . add ( x ) ; } }",
    "class A { int f ( int n ) { return n < 2 ? n : f ( n - 1 ) + f ( n - 2 ) ; } }",
    "import java . util . * ; class A { Map < K , V > m = new HashMap < > ( ) ; }",
    "class A { { for ( int i = 0 ; i < 10 ; i ++ ) { x >>= 1 ; } } }",
];

/// String literals that run over more than one line.
const SPANNING: &[&str] = &["\"a\nb\"", "\"\n\n\""];

const TRIVIA: &[&str] = &[" ", "\t", "\n", "\r\n", "  \n\n", "/* c */", "/* a\nb */", "// c\n"];

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FRAGMENTS)
}

/// Any fragment, or a string literal with newlines in it.
fn spanning_fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![3 => fragment(), 1 => prop::sample::select(SPANNING)]
}

fn program() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PROGRAMS)
}

fn trivia() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TRIVIA), 1..4).prop_map(|parts| format!(" {} ", parts.concat()))
}

/// Put some trivia between each of the space separated lexemes in `input`.
fn respace(input: &str, separators: &[String]) -> String {
    let mut out = String::new();
    for (i, lexeme) in input.split(' ').enumerate() {
        if i > 0 {
            out.push_str(&separators[(i - 1) % separators.len()]);
        }
        out.push_str(lexeme);
    }
    out
}

fn categories(input: &str) -> Vec<Category> {
    let mut lexer = Lexer::new(input);
    let mut buf = Vec::new();
    while let Ok(Some(lexeme)) = lexer.next_lexeme() {
        buf.push(lexeme.category());
    }
    buf
}

/// Default is 512 cases; override via `PROPTEST_CASES` env var for longer runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn lexer_never_panics(input in "\\PC{0,300}") {
        let mut lexer = Lexer::new(&input);
        let mut previous_line = 1;

        while let Ok(Some(lexeme)) = lexer.next_lexeme() {
            prop_assert!(!lexeme.text().is_empty());
            prop_assert!(lexeme.line() >= previous_line);
            previous_line = lexeme.line();
        }
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let mut parser = Parser::new(&input);
        if let Err(e) = parser.start() {
            prop_assert!(e.line() >= 1);
            prop_assert!(e.to_string().starts_with("ERROR: Line "));
        }
    }

    #[test]
    fn trivia_does_not_change_lexemes(
        fragments in prop::collection::vec(fragment(), 1..40),
        separators in prop::collection::vec(trivia(), 1..8),
    ) {
        let plain = fragments.join(" ");
        let noisy = respace(&plain, &separators);
        prop_assert_eq!(categories(&plain), categories(&noisy), "{:?}", noisy);
    }

    #[test]
    fn trivia_does_not_change_the_parse(
        input in program(),
        separators in prop::collection::vec(trivia(), 1..8),
    ) {
        let noisy = respace(input, &separators);

        let mut plain_parser = Parser::new(input);
        let mut noisy_parser = Parser::new(&noisy);

        prop_assert!(plain_parser.start().is_ok());
        prop_assert!(noisy_parser.start().is_ok(), "{:?}", noisy);
        prop_assert_eq!(plain_parser.trace(), noisy_parser.trace());
    }

    #[test]
    fn lines_count_newlines(
        lexemes in prop::collection::vec((spanning_fragment(), 0usize..3), 1..30),
    ) {
        let mut input = String::new();
        let mut expected = Vec::new();
        let mut line = 1;

        for (text, newlines) in &lexemes {
            input.push_str(&"\n".repeat(*newlines));
            input.push(' ');
            line += *newlines as u32;
            input.push_str(text);
            input.push(' ');
            expected.push(line);
            line += text.matches('\n').count() as u32;
        }

        let mut lexer = Lexer::new(&input);
        let mut found = Vec::new();
        while let Ok(Some(lexeme)) = lexer.next_lexeme() {
            found.push(lexeme.line());
        }

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn parses_are_deterministic(input in "\\PC{0,200}") {
        let mut first = Parser::new(&input);
        let mut second = Parser::new(&input);

        prop_assert_eq!(first.start(), second.start());
        prop_assert_eq!(first.trace(), second.trace());
    }
}
