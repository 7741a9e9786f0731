#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate weft_addon_kit;

mod constants;
pub mod credentials;
pub mod execution;
pub mod functions;
mod notice;
pub mod requests;
pub mod resources;
pub mod rpc;

use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::execution::{ItemResult, NodeInputs};
use weft_addon_kit::types::functions::FunctionSpecification;
use weft_addon_kit::types::operations::OperationSpecification;
use weft_addon_kit::Addon;

use constants::NAMESPACE;
use credentials::TronApiCredentials;
use rpc::OperationRunner;

#[derive(Debug)]
pub struct TronNetworkAddon;

impl TronNetworkAddon {
    pub fn new() -> Self {
        Self {}
    }

    /// Entry point for one node invocation: routes the whole batch to the
    /// processor for the resource selected by the first item.
    pub async fn execute(
        &self,
        inputs: &NodeInputs,
        credentials: &TronApiCredentials,
        runner: &dyn OperationRunner,
    ) -> Result<Vec<ItemResult>, Diagnostic> {
        execution::process_batch(inputs, credentials, runner).await
    }
}

impl Default for TronNetworkAddon {
    fn default() -> Self {
        Self::new()
    }
}

impl Addon for TronNetworkAddon {
    fn get_name(&self) -> &str {
        "Tron Blockchain (beta)"
    }

    fn get_description(&self) -> &str {
        weft_addon_kit::indoc! {r#"
            The Tron addon lets workflows interact with the Tron blockchain through
            its JSON/HTTP API: account lookups, transaction creation and broadcast,
            TRC-20 token calls, block queries, and contract deployment. Transactions
            are built unsigned; signing stays with the caller.
            "#}
    }

    fn get_namespace(&self) -> &str {
        NAMESPACE
    }

    fn get_operations(&self) -> Vec<OperationSpecification> {
        resources::OPERATIONS.clone()
    }

    fn get_functions(&self) -> Vec<FunctionSpecification> {
        functions::FUNCTIONS.clone()
    }
}
