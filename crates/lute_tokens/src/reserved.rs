//! The fixed catalog of reserved symbols and keywords

use crate::token::Category;
use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// A reserved symbol or keyword.
///
/// Each carries its source text, a [Category] and the text it becomes in generated code. The
/// symbolic name of a reserved token is its variant name in `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Reserved {
    /// `|`
    BnOr,
    /// `::=`
    BnReplace,

    Add,
    Sub,
    Mult,
    Div,

    Equals,
    Lt,
    Gt,
    Lte,
    Gte,

    Or,
    And,
    Not,
    /// `!`, reads the value behind a `ref`
    ReadRef,

    List,
    /// `::`
    Cons,
    Head,
    Tail,
    Ref,
    /// `:=`
    Assign,
    /// `:`
    Typedef,

    While,
    Do,
    If,
    Then,
    Else,
    Let,
    In,
    End,

    Ellipsis,
    /// `val`
    Value,

    /// `fun`
    FunctionDec,
    IntegerTypedef,
    FloatTypedef,
    UnitTypedef,
    BooleanTypedef,

    Comma,

    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,

    /// `;`
    Sequence,
}

impl Reserved {
    /// The source text of this token
    pub const fn chars(self) -> &'static str {
        match self {
            Reserved::BnOr => "|",
            Reserved::BnReplace => "::=",
            Reserved::Add => "+",
            Reserved::Sub => "-",
            Reserved::Mult => "*",
            Reserved::Div => "/",
            Reserved::Equals => "=",
            Reserved::Lt => "<",
            Reserved::Gt => ">",
            Reserved::Lte => "<=",
            Reserved::Gte => ">=",
            Reserved::Or => "or",
            Reserved::And => "and",
            Reserved::Not => "not",
            Reserved::ReadRef => "!",
            Reserved::List => "list",
            Reserved::Cons => "::",
            Reserved::Head => "hd",
            Reserved::Tail => "tl",
            Reserved::Ref => "ref",
            Reserved::Assign => ":=",
            Reserved::Typedef => ":",
            Reserved::While => "while",
            Reserved::Do => "do",
            Reserved::If => "if",
            Reserved::Then => "then",
            Reserved::Else => "else",
            Reserved::Let => "let",
            Reserved::In => "in",
            Reserved::End => "end",
            Reserved::Ellipsis => "...",
            Reserved::Value => "val",
            Reserved::FunctionDec => "fun",
            Reserved::IntegerTypedef => "int",
            Reserved::FloatTypedef => "real",
            Reserved::UnitTypedef => "unit",
            Reserved::BooleanTypedef => "bool",
            Reserved::Comma => ",",
            Reserved::LeftBracket => "[",
            Reserved::RightBracket => "]",
            Reserved::LeftParen => "(",
            Reserved::RightParen => ")",
            Reserved::Sequence => ";",
        }
    }

    /// The text this token becomes in generated code. May be empty or span lines.
    pub const fn target(self) -> &'static str {
        match self {
            Reserved::Or => "||",
            Reserved::And => "&&",
            Reserved::Not => "!",
            Reserved::ReadRef => "",
            Reserved::Ref => "",
            Reserved::Assign => "=",
            Reserved::Do => "{\n",
            Reserved::If => "",
            Reserved::Then => "?",
            Reserved::Else => ":",
            Reserved::Let => "{\n",
            Reserved::In => ";\n",
            Reserved::End => "};",
            Reserved::FloatTypedef => "float",
            Reserved::Sequence => ";\n",
            other => other.chars(),
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Reserved::BnOr | Reserved::BnReplace => Category::Bnf,
            Reserved::Add
            | Reserved::Sub
            | Reserved::Mult
            | Reserved::Div
            | Reserved::Equals
            | Reserved::Lt
            | Reserved::Gt
            | Reserved::Lte
            | Reserved::Gte => Category::BinOp,
            Reserved::Or | Reserved::And | Reserved::Not => Category::LogicOp,
            Reserved::While
            | Reserved::Do
            | Reserved::If
            | Reserved::Then
            | Reserved::Else
            | Reserved::Let
            | Reserved::In
            | Reserved::End
            | Reserved::Sequence => Category::Logic,
            Reserved::Value => Category::Other,
            Reserved::IntegerTypedef
            | Reserved::FloatTypedef
            | Reserved::UnitTypedef
            | Reserved::BooleanTypedef => Category::Type,
            Reserved::LeftBracket | Reserved::LeftParen => Category::GroupLeft,
            Reserved::RightBracket | Reserved::RightParen => Category::GroupRight,
            Reserved::ReadRef
            | Reserved::List
            | Reserved::Cons
            | Reserved::Head
            | Reserved::Tail
            | Reserved::Ref
            | Reserved::Assign
            | Reserved::Typedef
            | Reserved::Ellipsis
            | Reserved::FunctionDec
            | Reserved::Comma => Category::Sml,
        }
    }

    /// The symbolic name, such as `SEQUENCE`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Finds the reserved token whose source text is exactly `text`
    pub fn find(text: &str) -> Option<Self> {
        Self::iter().find(|reserved| reserved.chars() == text)
    }

    /// Checks whether `text` could still grow into more than one reserved token.
    ///
    /// A lone grouping symbol is always ambiguous, as it may open a unit or array literal.
    pub fn is_ambiguous_prefix(text: &str) -> bool {
        if matches!(text, "(" | "[" | ")" | "]") {
            return true;
        }
        Self::iter()
            .filter(|reserved| reserved.chars().starts_with(text))
            .nth(1)
            .is_some()
    }
}

impl Display for Reserved {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chars())
    }
}
