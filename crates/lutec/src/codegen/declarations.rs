use crate::codegen::chunk::Declaration;
use lute_tokens::reserved::Reserved;

/// Every declaration emitted so far, in order
#[derive(Debug, Default)]
pub struct DeclarationTable {
    declarations: Vec<Declaration>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Checks if `identifier` was declared with a `real` type
    pub fn is_float(&self, identifier: &str) -> bool {
        self.declarations.iter().any(|declaration| {
            declaration.identifier == identifier && declaration.element == Reserved::FloatTypedef
        })
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}
