//! The token sequences that resolve into a [SemanticChunk]

use crate::codegen::chunk::{Declaration, IdListCons, ListOperation, SemanticChunk};
use itertools::Itertools;
use lute_tokens::positioned::AnnotatedToken;
use lute_tokens::reserved::Reserved;
use lute_tokens::token::{Token, TokenKind};
use tracing::trace;

/// Expectation for a single token of a shape
#[derive(Debug, Clone, Copy)]
pub enum Slot {
    Is(Reserved),
    AnyOf(&'static [Reserved]),
    Kind(&'static [TokenKind]),
}

impl Slot {
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            Slot::Is(reserved) => token.is(*reserved),
            Slot::AnyOf(options) => token
                .reserved()
                .is_some_and(|reserved| options.contains(&reserved)),
            Slot::Kind(kinds) => kinds.contains(&token.kind()),
        }
    }
}

/// An exact sequence of slots, and how to build a chunk from tokens that fit it
#[derive(Debug)]
pub struct Shape {
    pub name: &'static str,
    pub slots: &'static [Slot],
    build: fn(&[AnnotatedToken]) -> Option<SemanticChunk>,
}

impl Shape {
    /// Checks if `tokens` fits this shape exactly
    pub fn matches(&self, tokens: &[AnnotatedToken]) -> bool {
        self.slots.len() == tokens.len()
            && self
                .slots
                .iter()
                .zip(tokens)
                .all(|(slot, token)| slot.accepts(token.token()))
    }
}

const ANY_TYPE: &[Reserved] = &[
    Reserved::IntegerTypedef,
    Reserved::FloatTypedef,
    Reserved::BooleanTypedef,
];
const NUMERIC_TYPE: &[Reserved] = &[Reserved::IntegerTypedef, Reserved::FloatTypedef];
const LIST_OPERATION: &[Reserved] = &[Reserved::Head, Reserved::Tail];
const OPERAND: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::Boolean,
];
const ID: Slot = Slot::Kind(&[TokenKind::Identifier]);

/// Every shape, in the order they are tried
pub static SHAPES: &[Shape] = &[
    Shape {
        name: "declaration",
        slots: &[
            Slot::Is(Reserved::Value),
            ID,
            Slot::Is(Reserved::Typedef),
            Slot::AnyOf(ANY_TYPE),
            Slot::Is(Reserved::Equals),
        ],
        build: declaration,
    },
    Shape {
        name: "list declaration",
        slots: &[
            Slot::Is(Reserved::Value),
            ID,
            Slot::Is(Reserved::Typedef),
            Slot::AnyOf(NUMERIC_TYPE),
            Slot::Is(Reserved::List),
            Slot::Is(Reserved::Equals),
        ],
        build: declaration,
    },
    Shape {
        name: "ref declaration",
        slots: &[
            Slot::Is(Reserved::Value),
            ID,
            Slot::Is(Reserved::Typedef),
            Slot::AnyOf(ANY_TYPE),
            Slot::Is(Reserved::Ref),
            Slot::Is(Reserved::Equals),
        ],
        build: declaration,
    },
    Shape {
        name: "list ref declaration",
        slots: &[
            Slot::Is(Reserved::Value),
            ID,
            Slot::Is(Reserved::Typedef),
            Slot::AnyOf(NUMERIC_TYPE),
            Slot::Is(Reserved::List),
            Slot::Is(Reserved::Ref),
            Slot::Is(Reserved::Equals),
        ],
        build: declaration,
    },
    Shape {
        name: "compare list operation",
        slots: &[
            ID,
            Slot::Is(Reserved::Equals),
            Slot::AnyOf(LIST_OPERATION),
            Slot::Is(Reserved::LeftParen),
            ID,
            Slot::Is(Reserved::RightParen),
        ],
        build: compare_list_op,
    },
    Shape {
        name: "compare dereferenced list operation",
        slots: &[
            ID,
            Slot::Is(Reserved::Equals),
            Slot::AnyOf(LIST_OPERATION),
            Slot::Is(Reserved::LeftParen),
            Slot::Is(Reserved::ReadRef),
            ID,
            Slot::Is(Reserved::RightParen),
        ],
        build: compare_list_op,
    },
    Shape {
        name: "integer list cons",
        slots: &[
            Slot::Kind(&[TokenKind::Integer]),
            Slot::Is(Reserved::Cons),
            Slot::Kind(&[TokenKind::IntegerArray]),
        ],
        build: list_cons,
    },
    Shape {
        name: "float list cons",
        slots: &[
            Slot::Kind(&[TokenKind::Float]),
            Slot::Is(Reserved::Cons),
            Slot::Kind(&[TokenKind::FloatArray]),
        ],
        build: list_cons,
    },
    Shape {
        name: "identifier list cons",
        slots: &[
            ID,
            Slot::Is(Reserved::Cons),
            Slot::Is(Reserved::LeftBracket),
            Slot::Is(Reserved::ReadRef),
            ID,
            Slot::Is(Reserved::RightBracket),
        ],
        build: id_list_cons,
    },
    Shape {
        name: "equivalence",
        slots: &[
            Slot::Kind(OPERAND),
            Slot::Is(Reserved::Equals),
            Slot::Kind(&[
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::Boolean,
                TokenKind::IntegerArray,
                TokenKind::FloatArray,
            ]),
        ],
        build: equivalence,
    },
    Shape {
        name: "conditional",
        slots: &[
            Slot::Is(Reserved::If),
            Slot::Kind(OPERAND),
            Slot::Is(Reserved::Then),
            Slot::Kind(OPERAND),
            Slot::Is(Reserved::Else),
            Slot::Kind(OPERAND),
        ],
        build: conditional,
    },
];

/// Resolves `tokens` into a chunk using the first shape they fit exactly
pub fn resolve(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let shape = SHAPES.iter().find(|shape| shape.matches(tokens))?;
    trace!("{:?} fits the {} shape", canonical(tokens), shape.name);
    (shape.build)(tokens)
}

/// The canonical form of a token sequence, reserved tokens as their text and everything else
/// as its symbolic name
pub fn canonical(tokens: &[AnnotatedToken]) -> String {
    tokens
        .iter()
        .map(|token| match token.token() {
            Token::Reserved(reserved) => reserved.chars(),
            other => other.name(),
        })
        .join(" ")
}

fn identifier(token: &AnnotatedToken) -> Option<String> {
    match token.token() {
        Token::Identifier(id) => Some(id.clone()),
        _ => None,
    }
}

fn declaration(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let [value, id, _, element, rest @ ..] = tokens else {
        return None;
    };
    let has = |reserved| rest.iter().any(|token| token.token().is(reserved));
    Some(SemanticChunk::Declaration(Declaration {
        depth: value.depth(),
        identifier: identifier(id)?,
        element: element.token().reserved()?,
        is_ref: has(Reserved::Ref),
        is_list: has(Reserved::List),
    }))
}

fn compare_list_op(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let [left, _, op, .., list, _] = tokens else {
        return None;
    };
    Some(SemanticChunk::CompareListOp {
        left: identifier(left)?,
        op: ListOperation::from_reserved(op.token().reserved()?)?,
        list: identifier(list)?,
    })
}

fn list_cons(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let [head, _, list] = tokens else {
        return None;
    };
    Some(SemanticChunk::ListCons {
        head: head.token().clone(),
        list: list.token().clone(),
    })
}

/// Float-ness is settled against the declaration table when the chunk is emitted
fn id_list_cons(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let [head, _, _, _, element, _] = tokens else {
        return None;
    };
    Some(SemanticChunk::IdListCons(IdListCons {
        head: identifier(head)?,
        element: identifier(element)?,
        is_float: false,
    }))
}

fn equivalence(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let [left, _, right] = tokens else {
        return None;
    };
    Some(SemanticChunk::Equivalence {
        left: left.token().clone(),
        right: right.token().clone(),
    })
}

fn conditional(tokens: &[AnnotatedToken]) -> Option<SemanticChunk> {
    let [_, condition, _, when_true, _, when_false] = tokens else {
        return None;
    };
    Some(SemanticChunk::Conditional {
        condition: condition.token().clone(),
        when_true: when_true.token().clone(),
        when_false: when_false.token().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lute_tokens::location::Location;
    use lute_tokens::positioned::PositionedToken;

    fn annotate(tokens: impl IntoIterator<Item = Token>) -> Vec<AnnotatedToken> {
        tokens
            .into_iter()
            .enumerate()
            .map(|(column, token)| {
                let positioned =
                    PositionedToken::new(token.clone(), Location::new(1, column, token.chars()));
                AnnotatedToken::new(&positioned, token, 0)
            })
            .collect()
    }

    fn id(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    fn r(reserved: Reserved) -> Token {
        Token::from(reserved)
    }

    #[test]
    fn test_declaration_shapes() {
        let tokens = annotate([
            r(Reserved::Value),
            id("xs"),
            r(Reserved::Typedef),
            r(Reserved::FloatTypedef),
            r(Reserved::List),
            r(Reserved::Ref),
            r(Reserved::Equals),
        ]);
        let Some(SemanticChunk::Declaration(declaration)) = resolve(&tokens) else {
            panic!("expected a declaration");
        };
        assert_eq!(declaration.identifier, "xs");
        assert_eq!(declaration.element, Reserved::FloatTypedef);
        assert!(declaration.is_list);
        assert!(declaration.is_ref);
    }

    #[test]
    fn test_boolean_lists_are_not_declarations() {
        let tokens = annotate([
            r(Reserved::Value),
            id("bs"),
            r(Reserved::Typedef),
            r(Reserved::BooleanTypedef),
            r(Reserved::List),
            r(Reserved::Equals),
        ]);
        assert_eq!(resolve(&tokens), None);
    }

    #[test]
    fn test_prefix_does_not_match() {
        let tokens = annotate([
            r(Reserved::Value),
            id("x"),
            r(Reserved::Typedef),
            r(Reserved::IntegerTypedef),
        ]);
        assert_eq!(resolve(&tokens), None);
    }

    #[test]
    fn test_compare_list_op() {
        let tokens = annotate([
            id("x"),
            r(Reserved::Equals),
            r(Reserved::Tail),
            r(Reserved::LeftParen),
            r(Reserved::ReadRef),
            id("xs"),
            r(Reserved::RightParen),
        ]);
        assert_eq!(
            resolve(&tokens),
            Some(SemanticChunk::CompareListOp {
                left: "x".to_string(),
                op: ListOperation::Tail,
                list: "xs".to_string(),
            })
        );
    }

    #[test]
    fn test_list_operations_on_literals_match_no_shape() {
        let tokens = annotate([r(Reserved::Tail), Token::IntegerArray(vec![7, 8])]);
        assert_eq!(resolve(&tokens), None);
        let tokens = annotate([
            r(Reserved::Head),
            r(Reserved::LeftParen),
            Token::IntegerArray(vec![7, 8]),
            r(Reserved::RightParen),
        ]);
        assert_eq!(resolve(&tokens), None);
    }

    #[test]
    fn test_equivalence_requires_value_on_right() {
        let tokens = annotate([id("x"), r(Reserved::Equals), id("y")]);
        assert_eq!(resolve(&tokens), None);
        let tokens = annotate([id("x"), r(Reserved::Equals), Token::Boolean(true)]);
        assert!(matches!(
            resolve(&tokens),
            Some(SemanticChunk::Equivalence { .. })
        ));
    }

    #[test]
    fn test_canonical() {
        let tokens = annotate([
            id("x"),
            r(Reserved::Cons),
            r(Reserved::LeftBracket),
            r(Reserved::ReadRef),
            id("y"),
            r(Reserved::RightBracket),
        ]);
        assert_eq!(canonical(&tokens), "ID :: [ ! ID ]");
    }
}
