use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// All numbers are lexed as `f64`; the language has a single number
    /// type.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. Single and double quotes are equivalent.
    #[regex(r#""[^"\n\r]*""#, parse_string)]
    #[regex(r"'[^'\n\r]*'", parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `undefined`
    #[token("undefined")]
    Undefined,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable or function names such as `x` or
    /// `getFullName`.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*[^/])*\*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Newlines are not tokens in the language; they only advance the line
    /// counter.
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number '{n}'"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::Undefined => write!(f, "'undefined'"),
            Self::Let => write!(f, "'let'"),
            Self::Const => write!(f, "'const'"),
            Self::Function => write!(f, "'function'"),
            Self::Return => write!(f, "'return'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::FatArrow => write!(f, "'=>'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::PlusPlus => write!(f, "'++'"),
            Self::MinusMinus => write!(f, "'--'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Bang => write!(f, "'!'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Dot => write!(f, "'.'"),
            Self::Colon => write!(f, "':'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Comment | Self::MultiLineComment | Self::Newline | Self::Ignored => {
                write!(f, "<skipped>")
            },
        }
    }
}

/// Turns source text into a vector of `(Token, line)` pairs.
///
/// Comments, whitespace and newlines are skipped; every surviving token is
/// paired with the line it started on, which downstream phases use for error
/// reporting.
///
/// # Errors
/// Returns a [`LexError`] when the source contains a character the language
/// does not use, or a string literal that is never closed.
///
/// # Example
/// ```
/// use jslet::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("let x = 1").unwrap();
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[3], (Token::Number(1.0), 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;

            // A lone quote means the closing one never showed up.
            if slice.starts_with('"') || slice.starts_with('\'') {
                return Err(LexError::UnterminatedString { line });
            }
            return Err(LexError::UnexpectedCharacter { slice: slice.to_string(),
                                                       line });
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Strips the surrounding quotes from a string literal slice.
///
/// Works for both quote styles since the lexer guarantees the first and
/// last characters are the matching delimiter.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
/// Parses a boolean literal from the current token slice (`true` or
/// `false`).
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
