//! Tracks how control flow keywords nest

use crate::parser::error::ErrorKind;
use lute_tokens::reserved::Reserved;
use lute_tokens::token::{Category, Token};
use tracing::trace;

/// A control flow keyword and the depth it was found at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicFrame {
    pub token: Reserved,
    pub depth: i32,
}

/// Every frame in the order it was seen, along with the latest frame at each depth
#[derive(Debug, Default)]
struct FrameStack {
    frames: Vec<LogicFrame>,
    /// indexed by `depth + 1`
    latest: Vec<Option<usize>>,
}

impl FrameStack {
    fn push(&mut self, frame: LogicFrame) {
        if let Ok(slot) = usize::try_from(frame.depth + 1) {
            if self.latest.len() <= slot {
                self.latest.resize(slot + 1, None);
            }
            self.latest[slot] = Some(self.frames.len());
        }
        self.frames.push(frame);
    }

    /// The most recent frame at `depth`
    fn peek(&self, depth: i32) -> Option<&LogicFrame> {
        let slot = usize::try_from(depth + 1).ok()?;
        let index = self.latest.get(slot).copied().flatten()?;
        self.frames.get(index)
    }
}

/// The tokens that a continuation keyword may directly follow at the same depth
fn continues(token: Reserved) -> Option<&'static [Reserved]> {
    match token {
        Reserved::Then => Some(&[Reserved::If]),
        Reserved::Else => Some(&[Reserved::Then]),
        Reserved::In => Some(&[Reserved::Let]),
        Reserved::End => Some(&[Reserved::In, Reserved::Then, Reserved::Do, Reserved::End]),
        Reserved::Do => Some(&[Reserved::While]),
        _ => None,
    }
}

/// Walks the tokens in order, checking that control flow keywords continue the block they are
/// in and working out the logic depth of every token.
///
/// Loops have no closing keyword, so the first sequence terminator after a `do` closes the loop
/// body and is replaced with an end marker.
#[derive(Debug)]
pub struct FlowState {
    depth: i32,
    open_loops: usize,
    frames: FrameStack,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowState {
    pub fn new() -> Self {
        Self {
            depth: -1,
            open_loops: 0,
            frames: FrameStack::default(),
        }
    }

    /// The current depth
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// The number of loops whose body has not been closed yet
    pub fn open_loops(&self) -> usize {
        self.open_loops
    }

    /// Visits the next token, returning the token to keep in its place and its logic depth
    pub fn visit(&mut self, token: &Token) -> Result<(Token, i32), ErrorKind> {
        let logic = token
            .reserved()
            .filter(|reserved| reserved.category() == Category::Logic);
        let Some(reserved) = logic else {
            return Ok((token.clone(), self.depth + 1));
        };

        match reserved {
            Reserved::If | Reserved::Let | Reserved::While => self.depth += 1,
            Reserved::Do => self.open_loops += 1,
            _ => {}
        }

        if let Some(expected) = continues(reserved) {
            // continuations always sit inside the block they continue
            let peek = (self.depth >= 0)
                .then(|| self.frames.peek(self.depth))
                .flatten()
                .map(|frame| frame.token);
            match peek {
                Some(Reserved::Sequence) => {}
                Some(found) if expected.contains(&found) => {}
                found => {
                    return Err(ErrorKind::Flow {
                        token: reserved,
                        expected,
                        found,
                    })
                }
            }
        }

        let frame = LogicFrame {
            token: reserved,
            depth: self.depth,
        };
        trace!("pushing {frame:?}");
        self.frames.push(frame);

        let closes = match reserved {
            Reserved::Else | Reserved::End => true,
            Reserved::Sequence => self.open_loops > 0,
            _ => false,
        };
        if closes {
            if self.depth <= -1 {
                return Err(ErrorKind::Unbalanced(reserved));
            }
            self.depth -= 1;
        }

        let kept = if reserved == Reserved::Sequence && self.open_loops > 0 {
            self.open_loops -= 1;
            Reserved::End
        } else {
            reserved
        };

        let depth = match kept {
            Reserved::Else | Reserved::End => self.depth + 1,
            _ => self.depth,
        };
        Ok((kept.into(), depth))
    }
}
