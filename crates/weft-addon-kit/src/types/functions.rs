use serde_json::Value;

use super::diagnostics::Diagnostic;
use super::operations::Type;

pub type FunctionRunner = fn(&FunctionSpecification, &[Value]) -> Result<Value, Diagnostic>;

#[derive(Clone, Debug)]
pub struct FunctionInput {
    pub name: String,
    pub documentation: String,
    pub typing: Type,
    pub optional: bool,
}

#[derive(Clone, Debug)]
pub struct FunctionOutput {
    pub documentation: String,
    pub typing: Type,
}

/// A pure helper an addon contributes to the engine's expression language.
#[derive(Clone, Debug)]
pub struct FunctionSpecification {
    pub name: String,
    pub documentation: String,
    pub inputs: Vec<FunctionInput>,
    pub output: FunctionOutput,
    pub example: String,
    pub runner: FunctionRunner,
}

impl FunctionSpecification {
    pub fn run(&self, args: &[Value]) -> Result<Value, Diagnostic> {
        (self.runner)(self, args)
    }
}
