//! Checks each token against the tokens directly around it

use lute_tokens::reserved::Reserved;
use lute_tokens::token::{Category, Token};

/// The tokens around the one being checked. Tokens on other lines are never neighbours.
#[derive(Debug, Default, Clone, Copy)]
pub struct Neighbours<'a> {
    pub prior: Option<&'a Token>,
    pub next: Option<&'a Token>,
    /// The token after `next`
    pub after: Option<&'a Token>,
}

/// Which token a failed check blames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offender {
    Prior,
    Current,
    Next,
}

/// Checks that `token` may sit between its neighbours, returning the token to blame if not
pub fn check(token: &Token, neighbours: &Neighbours) -> Result<(), Offender> {
    let Neighbours { prior, next, after } = *neighbours;
    match token {
        Token::Identifier(_) => {
            if prior.is_some_and(Token::is_identifier) {
                Err(Offender::Prior)
            } else if next.is_some_and(Token::is_identifier) {
                Err(Offender::Next)
            } else {
                Ok(())
            }
        }
        Token::Eof => expect(next.is_none(), Offender::Next),
        Token::Reserved(reserved) => check_reserved(*reserved, prior, next, after),
        _ => Ok(()),
    }
}

fn check_reserved(
    reserved: Reserved,
    prior: Option<&Token>,
    next: Option<&Token>,
    after: Option<&Token>,
) -> Result<(), Offender> {
    match reserved {
        Reserved::Value => {
            let opens_statement = prior.map_or(true, |prior| {
                prior.is(Reserved::Let) || prior.is(Reserved::Sequence)
            });
            let names_identifier = next.is_some_and(Token::is_identifier);
            if !names_identifier {
                Err(Offender::Next)
            } else {
                expect(opens_statement, Offender::Current)
            }
        }
        Reserved::Let => {
            let binds = next.is_some_and(|next| {
                next.is(Reserved::Value)
                    || next.is(Reserved::FunctionDec)
                    || (next.is_identifier() && after.is_some_and(|after| after.is(Reserved::In)))
            });
            expect(binds, Offender::Next)
        }
        Reserved::Do => expect(
            !next.is_some_and(|next| next.is(Reserved::Sequence)),
            Offender::Next,
        ),
        _ if reserved.category() == Category::BinOp => {
            expect(operator_fits(reserved, prior, next), operator_offender(prior, next))
        }
        _ if reserved.category() == Category::Type => {
            let fits = next.map_or(true, |next| {
                next.is(Reserved::Ref)
                    || next.is(Reserved::List)
                    || next.category() != Category::Type
            });
            expect(fits, Offender::Current)
        }
        _ => Ok(()),
    }
}

fn expect(condition: bool, offender: Offender) -> Result<(), Offender> {
    if condition {
        Ok(())
    } else {
        Err(offender)
    }
}

/// A binary operator needs an operand (or closed group) on its left and an operand (or opening
/// group, unary minus, list operation or dereference) on its right.
///
/// `-` may also be a unary minus, and `=` also completes declarations such as `val x : int =`.
fn operator_fits(operator: Reserved, prior: Option<&Token>, next: Option<&Token>) -> bool {
    let Some(prior) = prior else {
        return false;
    };
    let left = matches!(prior.category(), Category::Value | Category::GroupRight)
        || prior.is(Reserved::Head)
        || prior.is(Reserved::Tail);
    let right = next.is_some_and(|next| {
        matches!(next.category(), Category::Value | Category::GroupLeft)
            || next.is(Reserved::Sub)
            || next.is(Reserved::Head)
            || next.is(Reserved::Tail)
            || next.is(Reserved::ReadRef)
    });
    let general = left && right;

    match operator {
        Reserved::Sub => {
            general
                || prior.is(Reserved::Equals)
                || prior.is(Reserved::Assign)
                || prior.is(Reserved::Ref)
                || prior.category() == Category::GroupLeft
        }
        Reserved::Equals => {
            general
                || prior.category() == Category::Type
                || prior.is(Reserved::List)
                || prior.is(Reserved::Ref)
                || next.is_some_and(|next| next.is(Reserved::Ref))
        }
        _ => general,
    }
}

/// Blames the left side unless it is a type keyword or a simple operand, then the right side
/// unless it is a logical operator or a simple operand, then the operator.
fn operator_offender(prior: Option<&Token>, next: Option<&Token>) -> Offender {
    let simple_operand = |token: &Token| {
        matches!(
            token,
            Token::Integer(_) | Token::Float(_) | Token::Identifier(_)
        )
    };
    let prior_fine = prior.is_some_and(|prior| {
        prior.category() == Category::Type || simple_operand(prior)
    });
    let next_fine = next.is_some_and(|next| {
        next.category() == Category::LogicOp || simple_operand(next)
    });
    if !prior_fine {
        Offender::Prior
    } else if !next_fine {
        Offender::Next
    } else {
        Offender::Current
    }
}
