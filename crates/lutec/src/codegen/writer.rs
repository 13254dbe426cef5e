//! Accumulates generated code

/// Accumulates generated code, tracking enough about what was written last to decide where
/// terminators and indentation go.
#[derive(Debug)]
pub struct CodeWriter {
    buffer: String,
    indent: String,
}

impl CodeWriter {
    /// Creates a writer, opening the document with the runtime header and the start of `main`
    pub fn new(header: &str, indent_width: usize) -> Self {
        Self {
            buffer: format!("#include <{header}>\nint main()\n{{\n"),
            indent: " ".repeat(indent_width),
        }
    }

    /// The last two characters written
    fn tail(&self) -> &str {
        let start = self
            .buffer
            .char_indices()
            .rev()
            .nth(1)
            .map_or(0, |(index, _)| index);
        &self.buffer[start..]
    }

    /// Whether a line was just broken
    pub fn at_line_start(&self) -> bool {
        self.tail().contains('\n')
    }

    /// Whether a statement was just terminated
    pub fn recently_terminated(&self) -> bool {
        self.tail().contains(';')
    }

    /// Indents for a fragment at logic depth `depth`, one level deeper than the depth to account
    /// for the body of `main`
    pub fn indent(&mut self, depth: i32) {
        let levels = usize::try_from(depth + 1).unwrap_or(0);
        for _ in 0..levels {
            self.buffer.push_str(&self.indent);
        }
    }

    /// Writes `text`. Terminators are never preceded by a space.
    pub fn push(&mut self, text: &str) {
        if text.starts_with(';') {
            let trimmed = self.buffer.trim_end_matches(' ').len();
            self.buffer.truncate(trimmed);
        }
        self.buffer.push_str(text);
    }

    /// Writes a fragment at `depth`, indenting it if it starts a line
    pub fn fragment(&mut self, text: &str, depth: i32) {
        if self.at_line_start() {
            self.indent(depth);
        }
        self.push(text);
    }

    pub fn space(&mut self) {
        self.buffer.push(' ');
    }

    pub fn end_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Ends the line unless one was just ended
    pub fn break_line(&mut self) {
        if !self.at_line_start() {
            self.end_line();
        }
    }

    /// Terminates the current statement unless that was just done
    pub fn terminate(&mut self) {
        if !self.recently_terminated() {
            self.push(";");
        }
    }

    /// Closes `main` and returns the document
    pub fn finish(mut self) -> String {
        self.break_line();
        self.buffer.push('}');
        self.buffer
    }
}
