#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

pub use futures;
pub use indexmap;
pub use indoc::indoc;
pub use reqwest;
pub use serde;
pub use serde_json;

pub mod types;

use std::collections::HashMap;
use std::fmt::Debug;

use types::functions::FunctionSpecification;
use types::operations::OperationSpecification;

/// An addon packages everything the engine needs to expose one integration:
/// a namespace, the operations its node dispatches on, and the pure utility
/// functions it contributes to expressions.
pub trait Addon: Debug + Sync + Send {
    fn get_name(&self) -> &str;

    fn get_description(&self) -> &str;

    fn get_namespace(&self) -> &str;

    fn get_operations(&self) -> Vec<OperationSpecification> {
        vec![]
    }

    fn get_functions(&self) -> Vec<FunctionSpecification> {
        vec![]
    }

    fn build_operation_lookup(&self) -> HashMap<String, OperationSpecification> {
        let mut operations = HashMap::new();
        for operation in self.get_operations().into_iter() {
            operations.insert(operation.matcher.clone(), operation);
        }
        operations
    }

    fn build_function_lookup(&self) -> HashMap<String, FunctionSpecification> {
        let mut functions = HashMap::new();
        for function in self.get_functions().into_iter() {
            functions.insert(function.name.clone(), function);
        }
        functions
    }
}
