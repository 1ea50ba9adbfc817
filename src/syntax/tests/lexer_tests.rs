use syntax::lexer::*;

fn lexemes(input: &str) -> Vec<(Category, &str, u32)> {
    let mut lexer = Lexer::new(input);
    let mut buf = Vec::new();
    while let Some(lexeme) = lexer.next_lexeme().unwrap() {
        buf.push((lexeme.category(), lexeme.text(), lexeme.line()));
    }
    buf
}

fn categories(input: &str) -> Vec<Category> {
    lexemes(input).into_iter().map(|(c, _, _)| c).collect()
}

#[test]
fn lexer_empty() {
    let mut lexer = Lexer::new("");
    assert!(lexer.is_empty());
    assert!(matches!(lexer.next_lexeme(), Ok(None)));
}

#[test]
fn lexer_only_trivia() {
    let mut lexer = Lexer::new("  \t\r\n // note\n /* more */ \n");
    assert!(matches!(lexer.next_lexeme(), Ok(None)));
    assert_eq!(lexer.line(), 4);
}

#[test]
fn lexer_end_is_sticky() {
    let mut lexer = Lexer::new("a");
    assert!(lexer.next_lexeme().unwrap().is_some());
    assert!(lexer.next_lexeme().unwrap().is_none());
    assert!(lexer.next_lexeme().unwrap().is_none());
}

#[test]
fn lexer_words() {
    assert_eq!(
        categories("class Foo extends int public goto Class"),
        vec![
            Category::Keyword(Keyword::Class),
            Category::Identifier,
            Category::Keyword(Keyword::Extends),
            Category::PrimitiveType,
            Category::Modifier,
            Category::ReservedWord,
            Category::Identifier,
        ]
    );
}

#[test]
fn lexer_unicode_identifier() {
    assert_eq!(lexemes("naïve"), vec![(Category::Identifier, "naïve", 1)]);
}

#[test]
fn lexer_punctuation() {
    use Category::*;
    assert_eq!(
        categories("( ) { } [ ] < > ; , : . \\ ?"),
        vec![
            Open(Delimiter::Parenthesis),
            Close(Delimiter::Parenthesis),
            Open(Delimiter::Brace),
            Close(Delimiter::Brace),
            Open(Delimiter::Bracket),
            Close(Delimiter::Bracket),
            Open(Delimiter::Angle),
            Close(Delimiter::Angle),
            Semicolon,
            Comma,
            Colon,
            Dot,
            Backslash,
            QuestionMark,
        ]
    );
}

#[test]
fn lexer_maximal_munch() {
    assert_eq!(
        lexemes("a+=b==c&&!d"),
        vec![
            (Category::Identifier, "a", 1),
            (Category::AssignmentOperator, "+=", 1),
            (Category::Identifier, "b", 1),
            (Category::InfixOperator, "==", 1),
            (Category::Identifier, "c", 1),
            (Category::InfixOperator, "&&", 1),
            (Category::PrefixOperator, "!", 1),
            (Category::Identifier, "d", 1),
        ]
    );
}

#[test]
fn lexer_literals() {
    assert_eq!(
        lexemes(r#"42 'x' "a // b" @Override"#),
        vec![
            (Category::IntLiteral, "42", 1),
            (Category::CharLiteral, "'x'", 1),
            (Category::StringLiteral, "\"a // b\"", 1),
            (Category::Modifier, "@Override", 1),
        ]
    );
}

#[test]
fn lexer_lines() {
    let found = lexemes("a\nb\r\n\n  c /* \n\n */ d\n// e\nf");
    let lines: Vec<u32> = found.iter().map(|(_, _, line)| *line).collect();
    assert_eq!(lines, vec![1, 2, 4, 6, 8]);
}

#[test]
fn lexer_lines_inside_literals() {
    let mut lexer = Lexer::new("\"a\nb\" /* x\ny */ 'c'\n");
    let found: Vec<(Category, u32)> = std::iter::from_fn(|| lexer.next_lexeme().unwrap())
        .map(|lexeme| (lexeme.category(), lexeme.line()))
        .collect();

    assert_eq!(found, vec![(Category::StringLiteral, 1), (Category::CharLiteral, 3)]);
    assert_eq!(lexer.line(), 4);
}

#[test]
fn lexer_comment_lookalikes() {
    assert_eq!(
        lexemes("a / b /= c"),
        vec![
            (Category::Identifier, "a", 1),
            (Category::InfixOperator, "/", 1),
            (Category::Identifier, "b", 1),
            (Category::AssignmentOperator, "/=", 1),
            (Category::Identifier, "c", 1),
        ]
    );
}

#[test]
fn lexer_remaining_input() {
    let mut lexer = Lexer::new("int x;");
    let _ = lexer.next_lexeme();
    assert_eq!(lexer.remaining_input(), " x;");
}

#[test]
fn lexer_errors() {
    let mut lexer = Lexer::new("a\n  #");
    assert!(lexer.next_lexeme().unwrap().is_some());
    match lexer.next_lexeme() {
        Err(e @ Error::NotStartOfLexeme(_, '#')) => {
            assert_eq!(e.line(), 2);
            assert_eq!(e.caret().column(), 2);
        }
        other => panic!("expected an error, got {:?}", other),
    }

    assert!(matches!(Lexer::new("/* never").next_lexeme(), Err(Error::UnclosedComment(_))));
    assert!(matches!(Lexer::new("\"never").next_lexeme(), Err(Error::UnclosedString(_))));
    assert!(matches!(Lexer::new("'n").next_lexeme(), Err(Error::UnclosedCharacter(_))));
    assert!(matches!(Lexer::new("'\\").next_lexeme(), Err(Error::UnclosedCharacter(_))));
}

#[test]
fn lexer_error_caret_is_where_it_opened() {
    let mut lexer = Lexer::new("x\n\n  /* a\n b");
    let _ = lexer.next_lexeme();
    let e = lexer.next_lexeme().unwrap_err();
    assert_eq!(e.line(), 3);
}
