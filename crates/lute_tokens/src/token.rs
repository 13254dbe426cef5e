//! A lexical token, either a member of the reserved catalog or a value recognized from source

use crate::reserved::Reserved;
use itertools::Itertools;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use strum::{AsRefStr, EnumDiscriminants};

/// Groups tokens so that juxtaposition rules can be written once per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Grammar notation markers
    Bnf,
    BinOp,
    GroupLeft,
    GroupRight,
    /// Constructs particular to the source language
    Sml,
    /// Type keywords
    Type,
    /// Control flow and binding scope keywords, including the sequence terminator
    Logic,
    LogicOp,
    /// Identifiers and literals
    Value,
    Other,
}

/// A lexical token
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(TokenKind), derive(Hash))]
pub enum Token {
    Reserved(Reserved),
    Identifier(String),
    Integer(i32),
    Float(f32),
    Boolean(bool),
    Unit,
    IntegerArray(Vec<i32>),
    FloatArray(Vec<f32>),
    /// A value that could not be derived
    Error,
    /// End of input, only ever used to close a token listing
    Eof,
}

impl Token {
    pub fn category(&self) -> Category {
        match self {
            Token::Reserved(reserved) => reserved.category(),
            Token::Eof => Category::Other,
            _ => Category::Value,
        }
    }

    /// Gets the kind of this token
    pub fn kind(&self) -> TokenKind {
        TokenKind::from(self)
    }

    /// The symbolic name of this token, such as `ID` or `SEQUENCE`
    pub fn name(&self) -> &'static str {
        match self {
            Token::Reserved(reserved) => reserved.name(),
            Token::Identifier(_) => "ID",
            Token::Integer(_) => "INT",
            Token::Float(_) => "FLOAT",
            Token::Boolean(_) => "BOOL",
            Token::Unit => "UNIT",
            Token::IntegerArray(_) => "INT_ARRAY",
            Token::FloatArray(_) => "FLOAT_ARRAY",
            Token::Error => "ERROR",
            Token::Eof => "EOF",
        }
    }

    /// The source text of this token.
    ///
    /// Floats always carry a fractional part and arrays are rendered without spaces.
    pub fn chars(&self) -> Cow<'_, str> {
        match self {
            Token::Reserved(reserved) => Cow::Borrowed(reserved.chars()),
            Token::Identifier(id) => Cow::Borrowed(id),
            Token::Integer(i) => Cow::Owned(i.to_string()),
            Token::Float(f) => Cow::Owned(format!("{f:?}")),
            Token::Boolean(b) => Cow::Owned(b.to_string()),
            Token::Unit => Cow::Borrowed("()"),
            Token::IntegerArray(values) => Cow::Owned(format!("[{}]", values.iter().join(","))),
            Token::FloatArray(values) => Cow::Owned(format!(
                "[{}]",
                values.iter().map(|f| format!("{f:?}")).join(",")
            )),
            Token::Error | Token::Eof => Cow::Borrowed(""),
        }
    }

    /// The text this token becomes in generated code
    pub fn target(&self) -> Cow<'_, str> {
        if let Some((element, cells)) = self.array_cells() {
            return Cow::Owned(cons_list(element, &cells));
        }
        match self {
            Token::Reserved(reserved) => Cow::Borrowed(reserved.target()),
            other => other.chars(),
        }
    }

    /// Checks if this token is the given reserved token
    pub fn is(&self, reserved: Reserved) -> bool {
        matches!(self, Token::Reserved(r) if *r == reserved)
    }

    pub fn reserved(&self) -> Option<Reserved> {
        match self {
            Token::Reserved(reserved) => Some(*reserved),
            _ => None,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// The element type and rendered elements of an array literal
    pub fn array_cells(&self) -> Option<(&'static str, Vec<String>)> {
        match self {
            Token::IntegerArray(values) => {
                Some(("int", values.iter().map(|i| i.to_string()).collect()))
            }
            Token::FloatArray(values) => Some((
                "float",
                values.iter().map(|f| format!("{f:?}")).collect(),
            )),
            _ => None,
        }
    }
}

/// Renders a chain of cons cells holding `cells`, terminated by the `0` sentinel.
///
/// ```
/// # use lute_tokens::token::cons_list;
/// let cells = ["1".to_string(), "2".to_string()];
/// assert_eq!(cons_list("int", &cells), "new list<int>(1,new list<int>(2,0))");
/// assert_eq!(cons_list("int", &[]), "0");
/// ```
pub fn cons_list(element_type: &str, cells: &[String]) -> String {
    if cells.is_empty() {
        return "0".to_string();
    }
    let mut buffer = String::new();
    for cell in cells {
        buffer.push_str(&format!("new list<{element_type}>({cell},"));
    }
    buffer.push('0');
    buffer.push_str(&")".repeat(cells.len()));
    buffer
}

impl From<Reserved> for Token {
    fn from(value: Reserved) -> Self {
        Token::Reserved(value)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chars())
    }
}
