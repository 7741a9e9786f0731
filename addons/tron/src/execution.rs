use serde_json::Value as JsonValue;
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::execution::{ItemResult, NodeInputs};
use weft_addon_kit::types::operations::OperationSpecification;
use weft_addon_kit::types::stores::ValueStore;

use crate::constants::{OPERATION, RESOURCE};
use crate::credentials::TronApiCredentials;
use crate::notice;
use crate::resources::{self, BuilderFn, ResourceKind};
use crate::rpc::{OperationRunner, RpcError};

/// Batch-level selectors. The host resolves `resource` and `operation` once,
/// from the first input item, and applies them to the whole batch; every
/// other parameter is re-read per item.
#[derive(Clone, Debug)]
pub struct BatchContext {
    pub resource: ResourceKind,
    pub operation: String,
}

impl BatchContext {
    pub fn resolve(inputs: &NodeInputs) -> Result<Self, Diagnostic> {
        let first = inputs.item_values(0)?;
        let resource = ResourceKind::from_name(first.get_expected_string(RESOURCE)?)?;
        let operation = first.get_expected_string(OPERATION)?.to_string();
        Ok(BatchContext { resource, operation })
    }
}

/// A fault scoped to one item. Parameter faults and transport faults are
/// treated alike here: both are recoverable when continue-on-fail is set.
enum ItemFault {
    Api(RpcError),
    Parameter(Diagnostic),
}

impl ItemFault {
    fn message(&self) -> String {
        match self {
            ItemFault::Api(e) => e.to_string(),
            ItemFault::Parameter(e) => e.message.clone(),
        }
    }
}

/// Runs a whole batch: one transport call per item, strictly in order, each
/// awaited to completion before the next item's parameters are read. Returns
/// either the full ordered result list (with inline error entries when
/// continue-on-fail is set) or the first fatal fault.
pub async fn process_batch(
    inputs: &NodeInputs,
    credentials: &TronApiCredentials,
    runner: &dyn OperationRunner,
) -> Result<Vec<ItemResult>, Diagnostic> {
    notice::emit_usage_notice();

    if inputs.is_empty() {
        return Ok(vec![]);
    }

    let context = BatchContext::resolve(inputs)?;
    let mut results = Vec::with_capacity(inputs.len());

    for index in 0..inputs.len() {
        // Re-dispatched per item even though the operation is batch-constant:
        // an unrecognized operation is a configuration fault and aborts the
        // batch no matter the continue-on-fail setting.
        let (spec, builder) = resources::dispatch(&context.resource, &context.operation)?;

        let values = inputs.item_values(index)?;
        match run_item(spec, builder, values, credentials, runner).await {
            Ok(json) => results.push(ItemResult::success(index, json)),
            Err(fault) if inputs.continue_on_fail() => {
                results.push(ItemResult::error(index, &fault.message()));
            }
            Err(fault) => {
                return Err(diagnosed_error!("item {}: {}", index, fault.message()));
            }
        }
    }

    Ok(results)
}

async fn run_item(
    spec: &OperationSpecification,
    builder: BuilderFn,
    values: &ValueStore,
    credentials: &TronApiCredentials,
    runner: &dyn OperationRunner,
) -> Result<JsonValue, ItemFault> {
    values.check(&spec.matcher, &spec.inputs).map_err(ItemFault::Parameter)?;
    let request = builder(values, credentials).map_err(ItemFault::Parameter)?;
    runner.run(request).await.map_err(ItemFault::Api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::OperationRequest;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use weft_addon_kit::futures::future::BoxFuture;
    use serde_json::json;

    /// Plays back canned transport outcomes in order and records every
    /// request it was handed.
    struct ScriptedRunner {
        outcomes: Mutex<VecDeque<Result<JsonValue, RpcError>>>,
        seen: Mutex<Vec<OperationRequest>>,
    }

    impl ScriptedRunner {
        fn new(outcomes: Vec<Result<JsonValue, RpcError>>) -> Self {
            ScriptedRunner {
                outcomes: Mutex::new(outcomes.into()),
                seen: Mutex::new(vec![]),
            }
        }

        fn requests(&self) -> Vec<OperationRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl OperationRunner for ScriptedRunner {
        fn run<'a>(
            &'a self,
            request: OperationRequest,
        ) -> BoxFuture<'a, Result<JsonValue, RpcError>> {
            self.seen.lock().unwrap().push(request);
            let outcome =
                self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(json!({})));
            Box::pin(async move { outcome })
        }
    }

    fn credentials() -> TronApiCredentials {
        TronApiCredentials::new("https://api.trongrid.io", Some("test-api-key".to_string()))
    }

    fn account_item(address: &str) -> ValueStore {
        ValueStore::tmp()
            .with_value(RESOURCE, json!("accounts"))
            .with_value(OPERATION, json!("getAccount"))
            .with_value("address", json!(address))
    }

    #[tokio::test]
    async fn results_preserve_input_order_and_pairing() {
        let runner = ScriptedRunner::new(vec![
            Ok(json!({ "balance": 1 })),
            Ok(json!({ "balance": 2 })),
            Ok(json!({ "balance": 3 })),
        ]);
        let inputs = NodeInputs::new(vec![
            account_item("T1"),
            account_item("T2"),
            account_item("T3"),
        ]);

        let results = process_batch(&inputs, &credentials(), &runner).await.unwrap();

        assert_eq!(results.len(), 3);
        for (index, result) in results.iter().enumerate() {
            assert_eq!(result.paired_item.item, index);
            assert!(!result.is_error());
        }
        let urls: Vec<String> = runner.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.trongrid.io/v1/accounts/T1",
                "https://api.trongrid.io/v1/accounts/T2",
                "https://api.trongrid.io/v1/accounts/T3",
            ]
        );
    }

    #[tokio::test]
    async fn batch_selectors_come_from_the_first_item_only() {
        let runner = ScriptedRunner::new(vec![Ok(json!({})), Ok(json!({}))]);
        let mut second = account_item("T2");
        // A divergent selector on a later item is ignored by design.
        second.insert(OPERATION, json!("getAccountInfo"));
        let inputs = NodeInputs::new(vec![account_item("T1"), second]);

        process_batch(&inputs, &credentials(), &runner).await.unwrap();

        let urls: Vec<String> = runner.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.trongrid.io/v1/accounts/T1",
                "https://api.trongrid.io/v1/accounts/T2",
            ]
        );
    }

    #[tokio::test]
    async fn continue_on_fail_isolates_the_failing_item() {
        let runner = ScriptedRunner::new(vec![
            Ok(json!({ "balance": 1 })),
            Err(RpcError::Message("Invalid address format".to_string())),
            Ok(json!({ "balance": 3 })),
        ]);
        let inputs = NodeInputs::new(vec![
            account_item("T1"),
            account_item("bogus"),
            account_item("T3"),
        ])
        .with_continue_on_fail(true);

        let results = process_batch(&inputs, &credentials(), &runner).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].json, json!({ "balance": 1 }));
        assert_eq!(results[1].json, json!({ "error": "Invalid address format" }));
        assert_eq!(results[1].paired_item.item, 1);
        assert_eq!(results[2].json, json!({ "balance": 3 }));
    }

    #[tokio::test]
    async fn first_fault_aborts_the_batch_without_continue_on_fail() {
        let runner = ScriptedRunner::new(vec![
            Ok(json!({})),
            Err(RpcError::Status { status: 400, body: "bad address".to_string() }),
        ]);
        let inputs = NodeInputs::new(vec![
            account_item("T1"),
            account_item("bogus"),
            account_item("T3"),
        ]);

        let err = process_batch(&inputs, &credentials(), &runner).await.unwrap_err();

        assert_eq!(err.message, "item 1: error status code 400: bad address");
        // The batch stops at the fault; the third item is never dispatched.
        assert_eq!(runner.requests().len(), 2);
    }

    #[tokio::test]
    async fn unknown_operation_aborts_even_with_continue_on_fail() {
        let runner = ScriptedRunner::new(vec![]);
        let mut item = account_item("T1");
        item.insert(OPERATION, json!("bogusOp"));
        let inputs = NodeInputs::new(vec![item]).with_continue_on_fail(true);

        let err = process_batch(&inputs, &credentials(), &runner).await.unwrap_err();

        assert_eq!(err.message, "Unknown operation: bogusOp");
        assert!(runner.requests().is_empty());
    }

    #[tokio::test]
    async fn unsupported_resource_aborts_before_any_item_runs() {
        let runner = ScriptedRunner::new(vec![]);
        let mut item = account_item("T1");
        item.insert(RESOURCE, json!("utility"));
        let inputs = NodeInputs::new(vec![item]).with_continue_on_fail(true);

        let err = process_batch(&inputs, &credentials(), &runner).await.unwrap_err();

        assert_eq!(err.message, "Unsupported resource: utility");
        assert!(runner.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_parameter_is_recoverable_per_item() {
        let runner = ScriptedRunner::new(vec![Ok(json!({ "balance": 1 }))]);
        // The second row never resolved an address.
        let incomplete = ValueStore::tmp()
            .with_value(RESOURCE, json!("accounts"))
            .with_value(OPERATION, json!("getAccount"));
        let inputs =
            NodeInputs::new(vec![account_item("T1"), incomplete]).with_continue_on_fail(true);

        let results = process_batch(&inputs, &credentials(), &runner).await.unwrap();

        assert_eq!(results.len(), 2);
        assert!(!results[0].is_error());
        assert_eq!(
            results[1].json,
            json!({ "error": "Could not execute operation 'getAccount': required input 'address' missing" })
        );
    }

    #[tokio::test]
    async fn empty_batches_yield_empty_results() {
        let runner = ScriptedRunner::new(vec![]);
        let inputs = NodeInputs::new(vec![]);
        let results = process_batch(&inputs, &credentials(), &runner).await.unwrap();
        assert!(results.is_empty());
    }
}
