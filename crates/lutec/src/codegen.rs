//! Generates target code from validated tokens.
//!
//! Tokens are split into statement runs, each closed by a sequence terminator. A run is first
//! matched as a whole against the known [shapes](shapes::SHAPES), then by its shortest matching
//! prefixes. Tokens that start no shape are emitted one at a time as their target text.

use crate::codegen::chunk::SemanticChunk;
use crate::codegen::declarations::DeclarationTable;
use crate::codegen::writer::CodeWriter;
use lute_tokens::positioned::AnnotatedToken;
use lute_tokens::reserved::Reserved;
use tracing::{debug, instrument, trace};

pub mod chunk;
pub mod declarations;
pub mod shapes;
pub mod writer;

/// Generates a target document from one validated token sequence
#[derive(Debug)]
pub struct CodeGenerator {
    writer: CodeWriter,
    declarations: DeclarationTable,
}

impl CodeGenerator {
    pub fn new(header: &str, indent_width: usize) -> Self {
        Self {
            writer: CodeWriter::new(header, indent_width),
            declarations: DeclarationTable::new(),
        }
    }

    /// Generates the whole document
    #[instrument(skip_all)]
    pub fn generate(mut self, tokens: &[AnnotatedToken]) -> String {
        let mut runs = 0_usize;
        for run in tokens.split_inclusive(|token| token.token().is(Reserved::Sequence)) {
            self.emit_run(run);
            runs += 1;
        }
        debug!(
            "generated {runs} statement runs with {} declarations",
            self.declarations.len()
        );
        self.writer.finish()
    }

    fn emit_run(&mut self, run: &[AnnotatedToken]) {
        let Some(first) = run.first() else {
            return;
        };
        if let Some(chunk) = shapes::resolve(run) {
            self.emit_chunk(chunk, first.depth());
        } else {
            let mut rest = run;
            while rest.len() > 1 {
                let prefix = (1..=rest.len())
                    .find_map(|length| shapes::resolve(&rest[..length]).map(|chunk| (length, chunk)));
                match prefix {
                    Some((length, chunk)) => {
                        self.emit_chunk(chunk, rest[0].depth());
                        self.writer.space();
                        rest = &rest[length..];
                    }
                    None => {
                        self.emit_token(&rest[0]);
                        rest = &rest[1..];
                    }
                }
            }
            if let Some(last) = rest.first() {
                self.emit_leftover(last);
            }
        }
        self.writer.terminate();
    }

    fn emit_chunk(&mut self, mut chunk: SemanticChunk, depth: i32) {
        match &mut chunk {
            SemanticChunk::Declaration(declaration) => {
                self.declarations.record(declaration.clone());
            }
            SemanticChunk::IdListCons(cons) => {
                cons.is_float = self.declarations.is_float(&cons.element);
            }
            _ => {}
        }
        let text = chunk.render();
        trace!("emitting {} chunk {text:?}", chunk.name());
        self.writer.fragment(&text, depth);
    }

    /// Emits a token that starts no shape
    fn emit_token(&mut self, token: &AnnotatedToken) {
        let is_end = token.token().is(Reserved::End);
        if is_end {
            self.writer.terminate();
            self.writer.break_line();
        }
        let text = token.token().target();
        if text.is_empty() || (text.starts_with(';') && self.writer.recently_terminated()) {
            return;
        }
        self.writer.fragment(&text, token.depth());
        if is_end {
            self.writer.terminate();
            self.writer.end_line();
        } else if !text.contains('\n') {
            self.writer.space();
        }
    }

    /// Emits the last token of a run
    fn emit_leftover(&mut self, token: &AnnotatedToken) {
        if token.token().is(Reserved::Sequence) && self.writer.recently_terminated() {
            return;
        }
        let is_end = token.token().is(Reserved::End);
        if is_end {
            self.writer.terminate();
            self.writer.break_line();
        }
        let text = token.token().target();
        if !text.is_empty() {
            self.writer.fragment(&text, token.depth());
            if is_end {
                self.writer.end_line();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lute_parsing::parse;
    use test_log::test;

    fn generate(source: &str) -> String {
        let tokens = parse(source.as_bytes()).unwrap_or_else(|e| panic!("{e:#}"));
        CodeGenerator::new("ml-c.h", 4).generate(&tokens)
    }

    fn document(body: &str) -> String {
        format!("#include <ml-c.h>\nint main()\n{{\n{body}}}")
    }

    #[test]
    fn test_declaration() {
        assert_eq!(generate("val x : int = 5 ;"), document("    int x = 5;\n"));
    }

    #[test]
    fn test_conditional() {
        assert_eq!(generate("if b then 1 else 0 ;"), document("    b ? 1 : 0;\n"));
    }

    #[test]
    fn test_loop_body_is_closed() {
        assert_eq!(
            generate("while b do x := x - 1 ;"),
            document("    while b {\n        x = x - 1;\n    };\n")
        );
    }

    #[test]
    fn test_list_cons() {
        assert_eq!(
            generate("val l : int list = 1 :: [2] ;"),
            document("    list<int>* l = new list<int>(1,new list<int>(2,0));\n")
        );
    }

    #[test]
    fn test_id_list_cons_uses_declared_element_type() {
        let generated = generate("val y : real ref = 1.5 ;\nval l : real list = x :: [ ! y ] ;");
        assert!(
            generated.contains("new list<float>(x,new list<float>(y,0))"),
            "{generated}"
        );
        let generated = generate("val y : int ref = 1 ;\nval l : int list = x :: [ ! y ] ;");
        assert!(
            generated.contains("new list<int>(x,new list<int>(y,0))"),
            "{generated}"
        );
    }

    #[test]
    fn test_nested_loops_close_on_consecutive_lines() {
        assert_eq!(
            generate("while a do while b do x := 1 ; ;"),
            document(
                "    while a {\n        while b {\n            x = 1;\n        };\n    };\n"
            )
        );
    }

    #[test]
    fn test_list_operation_on_literal_is_emitted_as_written() {
        assert_eq!(
            generate("x = tl [1,2,3] ;"),
            document("    x = tl new list<int>(1,new list<int>(2,new list<int>(3,0)));\n")
        );
    }

    #[test]
    fn test_let_block() {
        assert_eq!(
            generate("let val y : int = 2 ; in x := y + 1 end ;"),
            document("    {\n        int y = 2;\n        x = y + 1;\n    };\n")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(generate(""), document(""));
    }
}
