//! # Lexemes
//!
//! Each lexeme is the smallest unit of meaning in the source, a [`Category`]
//! paired with the exact text it was matched from.

use std::fmt;

use diagnostic::Span;

/// An individual lexeme in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// What sort of thing the lexeme is. See [`Category`] for more.
    pub(crate) category: Category,

    /// The body of the lexeme as it was represented in the original input.
    /// Quoted literals keep their quotes.
    pub(crate) text: &'a str,

    /// This is the `Span` of this lexeme's text, not including any surrounding
    /// whitespace.
    pub(crate) span: Span,
}

impl<'a> Lexeme<'a> {
    pub fn new(category: Category, text: &'a str, span: Span) -> Self {
        Lexeme {
            category,
            text,
            span,
        }
    }

    /// The category of lexeme this is.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The way the lexeme was represented in the source.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The span of the text of this lexeme.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The line the lexeme starts on.
    pub fn line(&self) -> u32 {
        self.span.start().line()
    }
}

/// This is how consumed lexemes appear in a trace.
impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Next token is: {:>10}\t Next Lexeme is: {}",
            self.category.name(),
            self.text
        )
    }
}

/// A [`Lexeme`]'s category is the grammatically relevant part of the lexeme,
/// removed from the source context.
///
/// Categories are mutually exclusive, and which one an identifier-like word
/// gets is decided entirely by [`Category::from_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Names like `foo` or `String`.
    Identifier,
    /// A run of decimal digits like `42`.
    IntLiteral,
    /// A quoted character like `'a'`, quotes included.
    CharLiteral,
    /// A quoted string like `"hi\n"`, quotes included.
    StringLiteral,
    /// `boolean`, `int`, `double`, and the rest.
    PrimitiveType,
    /// Access and non-access modifiers, and `@Name` annotations.
    Modifier,
    /// Words that are reserved but mean nothing, like `goto`.
    ReservedWord,
    /// Words with a specific role in the grammar.
    Keyword(Keyword),

    /// Open a paired delimiter.
    Open(Delimiter),
    /// Close a paired delimiter.
    Close(Delimiter),

    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `\`
    Backslash,

    /// `=` and the compound forms the lexer can see, like `+=`.
    AssignmentOperator,
    /// Binary operators other than `+`, `-`, `<` and `>`.
    InfixOperator,
    /// `!` and `~`.
    PrefixOperator,
    /// `+`, which is both prefix and infix.
    Plus,
    /// `-`, which is both prefix and infix.
    Minus,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `?`
    QuestionMark,
}

impl Category {
    /// The name of the category, as it appears in traces.
    pub fn name(&self) -> &'static str {
        use Category::*;
        use Delimiter::*;
        match self {
            Identifier => "IDENTIFIER",
            IntLiteral => "INT_LITERAL",
            CharLiteral => "CHAR_LITERAL",
            StringLiteral => "STRING_LITERAL",
            PrimitiveType => "PRIMITIVE_TYPE",
            Modifier => "MODIFIER",
            ReservedWord => "RESERVED_WORD",
            Keyword(k) => k.name(),
            Open(Parenthesis) => "LEFT_PAREN",
            Close(Parenthesis) => "RIGHT_PAREN",
            Open(Brace) => "LEFT_BRACE",
            Close(Brace) => "RIGHT_BRACE",
            Open(Bracket) => "LEFT_BRACKET",
            Close(Bracket) => "RIGHT_BRACKET",
            Open(Angle) => "LEFT_ANGLEBRACKET",
            Close(Angle) => "RIGHT_ANGLEBRACKET",
            Semicolon => "SEMICOLON",
            Comma => "COMMA",
            Colon => "COLON",
            Dot => "DOT",
            Backslash => "BACKSLASH",
            AssignmentOperator => "ASSIGNMENT_OPERATOR",
            InfixOperator => "INFIX_OPERATOR",
            PrefixOperator => "PREFIX_OPERATOR",
            Plus => "OPERATOR_PLUS",
            Minus => "OPERATOR_MINUS",
            Increment => "OPERATOR_INCREMENT",
            Decrement => "OPERATOR_DECREMENT",
            QuestionMark => "QUESTION_MARK",
        }
    }

    /// Classify an identifier-like word. Anything that isn't a keyword,
    /// modifier, primitive type or reserved word is an identifier.
    ///
    /// This is case sensitive, so `Class` is an identifier.
    pub fn from_word(word: &str) -> Category {
        match word {
            "public" | "private" | "protected" | "abstract" | "static" | "final" | "strictfp"
            | "transient" | "volatile" | "synchronized" | "native" => Category::Modifier,
            "boolean" | "byte" | "char" | "short" | "int" | "long" | "float" | "double" => {
                Category::PrimitiveType
            }
            "goto" | "const" => Category::ReservedWord,
            _ => match Keyword::try_from_str(word) {
                Some(k) => Category::Keyword(k),
                None => Category::Identifier,
            },
        }
    }

    /// Can a lexeme of this category only be the start of an operand? This is
    /// what tells a cast like `(Foo) bar` apart from a grouping like `(foo)`.
    pub fn starts_operand(&self) -> bool {
        matches!(
            self,
            Category::Identifier
                | Category::IntLiteral
                | Category::CharLiteral
                | Category::StringLiteral
                | Category::PrefixOperator
                | Category::Open(Delimiter::Parenthesis)
                | Category::Keyword(
                    Keyword::This
                        | Keyword::Super
                        | Keyword::New
                        | Keyword::True
                        | Keyword::False
                        | Keyword::Null
                )
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Delimiters are the different sorts of characters with distinct opening and
/// closing characters.
///
/// Angle brackets are delimiters for type arguments, but are also read as
/// relational and shift operators by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `()`
    Parenthesis,

    /// `{}`
    Brace,

    /// `[]`
    Bracket,

    /// `<>`
    Angle,
}

/// Keywords are words with a fixed role in the grammar, which can't be used as
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Assert,
    Break,
    Case,
    Catch,
    Class,
    Continue,
    Default,
    Do,
    Else,
    Enum,
    Extends,
    False,
    Finally,
    For,
    If,
    Implements,
    Import,
    Instanceof,
    Interface,
    New,
    Null,
    Package,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Throws,
    True,
    Try,
    Void,
    While,
}

impl Keyword {
    /// The in-code representation of a keyword.
    pub fn as_str(self) -> &'static str {
        use self::Keyword::*;
        match self {
            Assert => "assert",
            Break => "break",
            Case => "case",
            Catch => "catch",
            Class => "class",
            Continue => "continue",
            Default => "default",
            Do => "do",
            Else => "else",
            Enum => "enum",
            Extends => "extends",
            False => "false",
            Finally => "finally",
            For => "for",
            If => "if",
            Implements => "implements",
            Import => "import",
            Instanceof => "instanceof",
            Interface => "interface",
            New => "new",
            Null => "null",
            Package => "package",
            Return => "return",
            Super => "super",
            Switch => "switch",
            This => "this",
            Throw => "throw",
            Throws => "throws",
            True => "true",
            Try => "try",
            Void => "void",
            While => "while",
        }
    }

    /// The name of the keyword's category, as it appears in traces.
    pub fn name(self) -> &'static str {
        use self::Keyword::*;
        match self {
            Assert => "KEYWORD_ASSERT",
            Break => "KEYWORD_BREAK",
            Case => "KEYWORD_CASE",
            Catch => "KEYWORD_CATCH",
            Class => "KEYWORD_CLASS",
            Continue => "KEYWORD_CONTINUE",
            Default => "KEYWORD_DEFAULT",
            Do => "KEYWORD_DO",
            Else => "KEYWORD_ELSE",
            Enum => "KEYWORD_ENUM",
            Extends => "KEYWORD_EXTENDS",
            False => "KEYWORD_FALSE",
            Finally => "KEYWORD_FINALLY",
            For => "KEYWORD_FOR",
            If => "KEYWORD_IF",
            Implements => "KEYWORD_IMPLEMENTS",
            Import => "KEYWORD_IMPORT",
            Instanceof => "KEYWORD_INSTANCEOF",
            Interface => "KEYWORD_INTERFACE",
            New => "KEYWORD_NEW",
            Null => "KEYWORD_NULL",
            Package => "KEYWORD_PACKAGE",
            Return => "KEYWORD_RETURN",
            Super => "KEYWORD_SUPER",
            Switch => "KEYWORD_SWITCH",
            This => "KEYWORD_THIS",
            Throw => "KEYWORD_THROW",
            Throws => "KEYWORD_THROWS",
            True => "KEYWORD_TRUE",
            Try => "KEYWORD_TRY",
            Void => "KEYWORD_VOID",
            While => "KEYWORD_WHILE",
        }
    }

    pub(crate) fn try_from_str(s: &str) -> Option<Keyword> {
        use self::Keyword::*;
        Some(match s {
            "assert" => Assert,
            "break" => Break,
            "case" => Case,
            "catch" => Catch,
            "class" => Class,
            "continue" => Continue,
            "default" => Default,
            "do" => Do,
            "else" => Else,
            "enum" => Enum,
            "extends" => Extends,
            "false" => False,
            "finally" => Finally,
            "for" => For,
            "if" => If,
            "implements" => Implements,
            "import" => Import,
            "instanceof" => Instanceof,
            "interface" => Interface,
            "new" => New,
            "null" => Null,
            "package" => Package,
            "return" => Return,
            "super" => Super,
            "switch" => Switch,
            "this" => This,
            "throw" => Throw,
            "throws" => Throws,
            "true" => True,
            "try" => Try,
            "void" => Void,
            "while" => While,
            _ => return None,
        })
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_their_text() {
        for k in [Keyword::Class, Keyword::Instanceof, Keyword::Void, Keyword::Throws] {
            assert_eq!(Keyword::try_from_str(k.as_str()), Some(k));
        }
    }

    #[test]
    fn word_classification() {
        assert_eq!(Category::from_word("class"), Category::Keyword(Keyword::Class));
        assert_eq!(Category::from_word("Class"), Category::Identifier);
        assert_eq!(Category::from_word("static"), Category::Modifier);
        assert_eq!(Category::from_word("synchronized"), Category::Modifier);
        assert_eq!(Category::from_word("double"), Category::PrimitiveType);
        assert_eq!(Category::from_word("goto"), Category::ReservedWord);
        assert_eq!(Category::from_word("String"), Category::Identifier);
    }

    #[test]
    fn trace_line() {
        let lexeme = Lexeme::new(Category::Identifier, "Foo", Span::default());
        assert_eq!(
            lexeme.to_string(),
            "Next token is: IDENTIFIER\t Next Lexeme is: Foo"
        );
        let lexeme = Lexeme::new(Category::Dot, ".", Span::default());
        assert_eq!(
            lexeme.to_string(),
            "Next token is:        DOT\t Next Lexeme is: ."
        );
    }

    #[test]
    fn arithmetic_operator_names() {
        assert_eq!(Category::Plus.name(), "OPERATOR_PLUS");
        assert_eq!(Category::Minus.name(), "OPERATOR_MINUS");
        assert_eq!(Category::Increment.name(), "OPERATOR_INCREMENT");
        assert_eq!(Category::Decrement.name(), "OPERATOR_DECREMENT");

        let lexeme = Lexeme::new(Category::Increment, "++", Span::default());
        assert_eq!(
            lexeme.to_string(),
            "Next token is: OPERATOR_INCREMENT\t Next Lexeme is: ++"
        );
    }
}
