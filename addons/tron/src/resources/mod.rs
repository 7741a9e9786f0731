pub mod accounts;
pub mod blocks;
pub mod contracts;
pub mod transactions;
pub mod trc20;

use std::fmt::Display;

use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::operations::OperationSpecification;
use weft_addon_kit::types::stores::ValueStore;

use crate::credentials::TronApiCredentials;
use crate::requests::OperationRequest;

/// One request builder: pure, no I/O, no mutation of its inputs.
pub type BuilderFn =
    fn(&ValueStore, &TronApiCredentials) -> Result<OperationRequest, Diagnostic>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Accounts,
    Transactions,
    Trc20Tokens,
    Blocks,
    SmartContracts,
}

impl ResourceKind {
    pub fn from_name(name: &str) -> Result<Self, Diagnostic> {
        match name {
            "accounts" => Ok(ResourceKind::Accounts),
            "transactions" => Ok(ResourceKind::Transactions),
            "trc20Tokens" => Ok(ResourceKind::Trc20Tokens),
            "blocks" => Ok(ResourceKind::Blocks),
            "smartContracts" => Ok(ResourceKind::SmartContracts),
            other => Err(diagnosed_error!("Unsupported resource: {}", other)),
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Accounts => "accounts",
            ResourceKind::Transactions => "transactions",
            ResourceKind::Trc20Tokens => "trc20Tokens",
            ResourceKind::Blocks => "blocks",
            ResourceKind::SmartContracts => "smartContracts",
        };
        write!(f, "{}", name)
    }
}

/// Selects the builder for an operation within a resource. Re-checked per
/// item by the processor even though the operation is batch-constant, so an
/// unrecognized operation surfaces at the first item.
pub fn dispatch(
    resource: &ResourceKind,
    operation: &str,
) -> Result<(&'static OperationSpecification, BuilderFn), Diagnostic> {
    let entry = match resource {
        ResourceKind::Accounts => accounts::dispatch(operation),
        ResourceKind::Transactions => transactions::dispatch(operation),
        ResourceKind::Trc20Tokens => trc20::dispatch(operation),
        ResourceKind::Blocks => blocks::dispatch(operation),
        ResourceKind::SmartContracts => contracts::dispatch(operation),
    };
    entry.ok_or_else(|| diagnosed_error!("Unknown operation: {}", operation))
}

lazy_static! {
    pub static ref OPERATIONS: Vec<OperationSpecification> = {
        let mut operations = accounts::specifications();
        operations.extend(transactions::specifications());
        operations.extend(trc20::specifications());
        operations.extend(blocks::specifications());
        operations.extend(contracts::specifications());
        operations
    };
}
