//! Validates a token sequence in two passes.
//!
//! The first pass checks every token against its immediate neighbours. The second walks the
//! control flow keywords, checking that they nest and annotating every token with its logic depth.
//! Validation stops at the first error.

use crate::parser::error::{ErrorKind, SyntaxError, SyntaxResult};
use crate::parser::flow::FlowState;
use crate::parser::juxtapose::{Neighbours, Offender};
use lute_tokens::positioned::{AnnotatedToken, PositionedToken};
use tracing::{debug, instrument, trace};

pub mod error;
pub mod flow;
pub mod juxtapose;

/// Validates `tokens`, producing the depth annotated sequence the code generator works from
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn validate(tokens: &[PositionedToken]) -> SyntaxResult<Vec<AnnotatedToken>> {
    check_juxtaposition(tokens)?;
    debug!("juxtaposition check passed");
    let annotated = check_flow(tokens)?;
    debug!("flow check passed");
    Ok(annotated)
}

/// Checks every token against the tokens around it on the same line
pub fn check_juxtaposition(tokens: &[PositionedToken]) -> SyntaxResult {
    for (index, current) in tokens.iter().enumerate() {
        let on_line = |token: &&PositionedToken| token.line() == current.line();
        let prior = index
            .checked_sub(1)
            .and_then(|prior| tokens.get(prior))
            .filter(on_line);
        let next = tokens.get(index + 1).filter(on_line);
        let after = tokens.get(index + 2).filter(on_line);

        let neighbours = Neighbours {
            prior: prior.map(PositionedToken::token),
            next: next.map(PositionedToken::token),
            after: after.map(PositionedToken::token),
        };
        if let Err(offender) = juxtapose::check(current.token(), &neighbours) {
            let offending = match offender {
                Offender::Prior => prior,
                Offender::Next => next,
                Offender::Current => None,
            }
            .unwrap_or(current);
            trace!("{current} does not fit, blaming {offending}");
            return Err(SyntaxError::new(
                ErrorKind::Juxtaposition {
                    token: offending.text().to_string(),
                },
                offending.location().clone(),
            ));
        }
    }
    Ok(())
}

/// Checks that control flow keywords nest, annotating each token with its logic depth
pub fn check_flow(tokens: &[PositionedToken]) -> SyntaxResult<Vec<AnnotatedToken>> {
    let mut state = FlowState::new();
    tokens
        .iter()
        .map(|positioned| {
            let (token, depth) = state
                .visit(positioned.token())
                .map_err(|kind| SyntaxError::new(kind, positioned.location().clone()))?;
            Ok(AnnotatedToken::new(positioned, token, depth))
        })
        .collect()
}
