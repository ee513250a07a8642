use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("new", TokenKind::New);
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("class", TokenKind::Class);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("foreach", TokenKind::Foreach);
        map.insert("export", TokenKind::Export);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    DotDot,
    SemiColon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    NullishAssignment, // ??=

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Let,
    Const,
    Class,
    New,
    Import,
    From,
    Fn,
    If,
    Else,
    Foreach,
    While,
    For,
    Export,
    Typeof,
    In,
    True,
    False,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "eof",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::OpenCurly => "open_curly",
            TokenKind::CloseCurly => "close_curly",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::Assignment => "assignment",
            TokenKind::Equals => "equals",
            TokenKind::Not => "not",
            TokenKind::NotEquals => "not_equals",
            TokenKind::Less => "less",
            TokenKind::LessEquals => "less_equals",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEquals => "greater_equals",
            TokenKind::Or => "or",
            TokenKind::And => "and",
            TokenKind::Dot => "dot",
            TokenKind::DotDot => "dot_dot",
            TokenKind::SemiColon => "semi_colon",
            TokenKind::Colon => "colon",
            TokenKind::Question => "question",
            TokenKind::Comma => "comma",
            TokenKind::PlusPlus => "plus_plus",
            TokenKind::MinusMinus => "minus_minus",
            TokenKind::PlusEquals => "plus_equals",
            TokenKind::MinusEquals => "minus_equals",
            TokenKind::NullishAssignment => "nullish_assignment",
            TokenKind::Plus => "plus",
            TokenKind::Dash => "dash",
            TokenKind::Slash => "slash",
            TokenKind::Star => "star",
            TokenKind::Percent => "percent",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Class => "class",
            TokenKind::New => "new",
            TokenKind::Import => "import",
            TokenKind::From => "from",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Foreach => "foreach",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Export => "export",
            TokenKind::Typeof => "typeof",
            TokenKind::In => "in",
            TokenKind::True => "true",
            TokenKind::False => "false",
        }
    }

    /// Literal kinds carry source text in `value` rather than a fixed spelling.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::Identifier
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

// Spans are location metadata only.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{} ()", self.kind)
        }
    }
}

impl Token {
    /// Source text that lexes back to this token.
    pub fn to_source(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.value),
            _ => self.value.clone(),
        }
    }
}
