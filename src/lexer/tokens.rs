use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("followed", Keyword::Followed);
        map.insert("by", Keyword::By);
        map.insert("repeated", Keyword::Repeated);
        map.insert("or", Keyword::Or);
        map.insert("more", Keyword::More);
        map.insert("times", Keyword::Times);
        map.insert("from", Keyword::From);
        map.insert("to", Keyword::To);
        map.insert("optional", Keyword::Optional);
        map.insert("character", Keyword::Character);
        map.insert("between", Keyword::Between);
        map.insert("and", Keyword::And);
        map.insert("not", Keyword::Not);
        map.insert("the", Keyword::The);
        map.insert("set", Keyword::Set);
        map.insert("newline", Keyword::Newline);
        map.insert("tab", Keyword::Tab);
        map.insert("any", Keyword::Any);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Followed,
    By,
    Repeated,
    Or,
    More,
    Times,
    From,
    To,
    Optional,
    Character,
    Between,
    And,
    Not,
    The,
    Set,
    Newline,
    Tab,
    Any,
}

impl Keyword {
    pub const ALL: [Keyword; 18] = [
        Keyword::Followed,
        Keyword::By,
        Keyword::Repeated,
        Keyword::Or,
        Keyword::More,
        Keyword::Times,
        Keyword::From,
        Keyword::To,
        Keyword::Optional,
        Keyword::Character,
        Keyword::Between,
        Keyword::And,
        Keyword::Not,
        Keyword::The,
        Keyword::Set,
        Keyword::Newline,
        Keyword::Tab,
        Keyword::Any,
    ];

    /// The source spelling of the keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Followed => "followed",
            Keyword::By => "by",
            Keyword::Repeated => "repeated",
            Keyword::Or => "or",
            Keyword::More => "more",
            Keyword::Times => "times",
            Keyword::From => "from",
            Keyword::To => "to",
            Keyword::Optional => "optional",
            Keyword::Character => "character",
            Keyword::Between => "between",
            Keyword::And => "and",
            Keyword::Not => "not",
            Keyword::The => "the",
            Keyword::Set => "set",
            Keyword::Newline => "newline",
            Keyword::Tab => "tab",
            Keyword::Any => "any",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    LiteralString,
    SpecialCharacter,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "Keyword({})", keyword),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// A classified lexical unit. `text` is the token as written in the source,
/// minus the outer quotes for literal strings; `length` counts its characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub length: usize,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nlength: {},\ntext: {}}}",
            self.kind, self.length, self.text
        )
    }
}

impl Token {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}
