//! Splits a single line of source into tokens

use crate::lexer::token_parsing::classify;
use crate::lexer::{LexResult, LexingError};
use lute_tokens::positioned::PositionedToken;
use lute_tokens::token::Token;
use lute_tokens::Location;
use tracing::trace;

/// Checks whether a character separates tokens
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Scans one line of source. A token never spans lines, so the end of the line always acts as a
/// delimiter.
pub fn scan_line(line: &str, line_number: usize) -> LexResult<Vec<PositionedToken>> {
    let mut scanner = LineScanner::new(line_number);
    for (column, c) in line.chars().enumerate() {
        if is_delimiter(c) {
            scanner.delimit()?;
        } else {
            scanner.push(column, c);
        }
    }
    scanner.delimit()?;
    Ok(scanner.tokens)
}

struct LineScanner {
    line: usize,
    start: usize,
    buffer: String,
    tokens: Vec<PositionedToken>,
}

impl LineScanner {
    fn new(line: usize) -> Self {
        Self {
            line,
            start: 0,
            buffer: String::new(),
            tokens: vec![],
        }
    }

    fn push(&mut self, column: usize, c: char) {
        if self.buffer.is_empty() {
            self.start = column;
        }
        self.buffer.push(c);
        if let Some(token) = classify(&self.buffer, false) {
            let text = std::mem::take(&mut self.buffer);
            self.emit(token, self.start, text);
        }
    }

    /// Called when a delimiter is reached, classifying whatever text is pending
    fn delimit(&mut self) -> LexResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.buffer);
        match classify(&text, true) {
            Some(token) => {
                self.emit(token, self.start, text);
                Ok(())
            }
            None => self.decompose(&text),
        }
    }

    /// Splits a run of text into the longest tokens that can be found from its front. The run
    /// must be covered exactly, otherwise nothing is emitted.
    fn decompose(&mut self, text: &str) -> LexResult<()> {
        let mut rest = text;
        let mut column = self.start;
        let mut pieces = vec![];
        while let Some((len, token)) = longest_prefix(rest) {
            let (piece, remaining) = rest.split_at(len);
            pieces.push((token, column, piece.to_string()));
            column += piece.chars().count();
            rest = remaining;
        }

        if let Some(first) = rest.chars().next() {
            return Err(LexingError::Unresolved {
                rest: rest.to_string(),
                location: Location::new(self.line, column, first),
            });
        }

        trace!("decomposed {text:?} into {} tokens", pieces.len());
        for (token, column, piece) in pieces {
            self.emit(token, column, piece);
        }
        Ok(())
    }

    fn emit(&mut self, token: Token, column: usize, text: String) {
        let positioned = PositionedToken::new(token, Location::new(self.line, column, text));
        trace!("read {positioned}");
        self.tokens.push(positioned);
    }
}

/// Finds the longest prefix of `text` that is a complete token, along with its length in bytes
fn longest_prefix(text: &str) -> Option<(usize, Token)> {
    text.char_indices()
        .map(|(index, c)| index + c.len_utf8())
        .rev()
        .find_map(|end| classify(&text[..end], true).map(|token| (end, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lute_tokens::reserved::Reserved;

    fn scan(line: &str) -> Vec<(Token, usize, String)> {
        scan_line(line, 1)
            .unwrap_or_else(|e| panic!("{e}"))
            .into_iter()
            .map(|token| {
                (
                    token.token().clone(),
                    token.location().column(),
                    token.text().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_scan_declaration() {
        let tokens = scan("val x : int = 5 ;");
        let names = tokens
            .iter()
            .map(|(token, _, _)| token.name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            ["VALUE", "ID", "TYPEDEF", "INTEGER_TYPEDEF", "EQUALS", "INT", "SEQUENCE"]
        );
        assert_eq!(tokens[6].1, 16);
    }

    #[test]
    fn test_glued_run_is_decomposed() {
        let tokens = scan("x:=x+1;");
        assert_eq!(
            tokens,
            vec![
                (Token::Identifier("x".to_string()), 0, "x".to_string()),
                (Token::from(Reserved::Assign), 1, ":=".to_string()),
                (Token::Identifier("x".to_string()), 3, "x".to_string()),
                (Token::from(Reserved::Add), 4, "+".to_string()),
                (Token::Integer(1), 5, "1".to_string()),
                (Token::from(Reserved::Sequence), 6, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_glued_minus_prefers_negative_literal() {
        let tokens = scan("x-1");
        assert_eq!(tokens[1], (Token::Integer(-1), 1, "-1".to_string()));
    }

    #[test]
    fn test_array_literal_followed_by_terminator() {
        let tokens = scan("[1,2,3];");
        assert_eq!(tokens[0].0, Token::IntegerArray(vec![1, 2, 3]));
        assert_eq!(tokens[1], (Token::from(Reserved::Sequence), 7, ";".to_string()));
    }

    #[test]
    fn test_unit_literal() {
        let tokens = scan("f ()");
        assert_eq!(tokens[1].0, Token::Unit);
    }

    #[test]
    fn test_reserved_prefix_commits_early() {
        let tokens = scan("cons ::= x");
        assert_eq!(tokens[1].0, Token::from(Reserved::BnReplace));
    }

    #[test]
    fn test_malformed_float_is_rejected() {
        let error = scan_line("val y : real = 2.532.50 ;", 4).unwrap_err();
        let location = error.location().expect("lexical errors are located");
        assert_eq!(location.line(), 4);
        assert_eq!(location.text(), ".");
        assert_eq!(location.column(), 20);
    }

    #[test]
    fn test_tabs_and_carriage_returns_delimit() {
        let tokens = scan("x\t=\r\n1");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].1, 5);
    }
}
