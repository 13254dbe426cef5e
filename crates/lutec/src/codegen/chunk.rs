//! Multi token constructs recognized in a statement

use lute_tokens::reserved::Reserved;
use lute_tokens::token::{cons_list, Token};
use strum::IntoStaticStr;

/// A variable declaration, such as `val xs : int list =`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub depth: i32,
    pub identifier: String,
    /// The declared type keyword, the element type for lists
    pub element: Reserved,
    pub is_ref: bool,
    pub is_list: bool,
}

impl Declaration {
    /// Lists are declared as pointers to cons cells. References are declared as plain values.
    pub fn render(&self) -> String {
        let element = self.element.target();
        if self.is_list {
            format!("list<{element}>* {} =", self.identifier)
        } else {
            format!("{element} {} =", self.identifier)
        }
    }
}

/// `hd` or `tl`
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum ListOperation {
    #[strum(serialize = "hd")]
    Head,
    #[strum(serialize = "tl")]
    Tail,
}

impl ListOperation {
    pub fn from_reserved(reserved: Reserved) -> Option<Self> {
        match reserved {
            Reserved::Head => Some(ListOperation::Head),
            Reserved::Tail => Some(ListOperation::Tail),
            _ => None,
        }
    }

    pub fn chars(self) -> &'static str {
        self.into()
    }
}

/// Conses an identifier onto a one element list holding a dereferenced identifier,
/// `x :: [ !y ]`
#[derive(Debug, Clone, PartialEq)]
pub struct IdListCons {
    pub head: String,
    pub element: String,
    pub is_float: bool,
}

/// A recognized construct spanning several tokens
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum SemanticChunk {
    Declaration(Declaration),
    Equivalence {
        left: Token,
        right: Token,
    },
    CompareListOp {
        left: String,
        op: ListOperation,
        list: String,
    },
    ListCons {
        head: Token,
        list: Token,
    },
    IdListCons(IdListCons),
    Conditional {
        condition: Token,
        when_true: Token,
        when_false: Token,
    },
}

impl SemanticChunk {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Renders this chunk as target code
    pub fn render(&self) -> String {
        match self {
            SemanticChunk::Declaration(declaration) => declaration.render(),
            SemanticChunk::Equivalence { left, right } => {
                format!("{} == {}", left.chars(), right.target())
            }
            SemanticChunk::CompareListOp { left, op, list } => {
                format!("{left} == {}({list})", op.chars())
            }
            SemanticChunk::ListCons { head, list } => {
                let Some((element, cells)) = list.array_cells() else {
                    return String::new();
                };
                let cells = std::iter::once(head.chars().into_owned())
                    .chain(cells)
                    .collect::<Vec<_>>();
                cons_list(element, &cells)
            }
            SemanticChunk::IdListCons(IdListCons {
                head,
                element,
                is_float,
            }) => {
                let element_type = if *is_float { "float" } else { "int" };
                cons_list(element_type, &[head.clone(), element.clone()])
            }
            SemanticChunk::Conditional {
                condition,
                when_true,
                when_false,
            } => format!("{condition} ? {when_true} : {when_false}"),
        }
    }
}
