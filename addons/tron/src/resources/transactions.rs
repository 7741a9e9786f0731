use serde_json::json;
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::operations::{OperationSpecification, Type};
use weft_addon_kit::types::stores::ValueStore;

use super::BuilderFn;
use crate::constants::{AMOUNT, HASH, OWNER_ADDRESS, RAW_DATA, SIGNATURE, TO_ADDRESS, VALUE};
use crate::credentials::TronApiCredentials;
use crate::requests::OperationRequest;

lazy_static! {
    pub static ref CREATE_TRANSACTION: OperationSpecification = define_operation! {
        "createTransaction" => {
            name: "Create Transaction",
            documentation: "Build an unsigned TRX transfer. Amounts are denominated in Sun.",
            inputs: [
                toAddress: {
                    documentation: "Recipient address.",
                    typing: Type::string(),
                    optional: false
                },
                ownerAddress: {
                    documentation: "Sender address.",
                    typing: Type::string(),
                    optional: false
                },
                amount: {
                    documentation: "Transfer amount in Sun.",
                    typing: Type::integer(),
                    optional: false
                }
            ],
        }
    };
    pub static ref BROADCAST_TRANSACTION: OperationSpecification = define_operation! {
        "broadcastTransaction" => {
            name: "Broadcast Transaction",
            documentation: "Submit an externally signed transaction to the network.",
            inputs: [
                rawData: {
                    documentation: "Raw transaction payload, hex or JSON, passed through verbatim.",
                    typing: Type::string(),
                    optional: false
                },
                signature: {
                    documentation: "Signature over the raw payload.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_TRANSACTION: OperationSpecification = define_operation! {
        "getTransaction" => {
            name: "Get Transaction",
            documentation: "Look up a transaction by its hash.",
            inputs: [
                hash: {
                    documentation: "Transaction hash.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_TRANSACTION_BY_ID: OperationSpecification = define_operation! {
        "getTransactionById" => {
            name: "Get Transaction by ID",
            documentation: "Look up a transaction by its ID.",
            inputs: [
                value: {
                    documentation: "Transaction ID.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_TRANSACTION_INFO: OperationSpecification = define_operation! {
        "getTransactionInfo" => {
            name: "Get Transaction Info",
            documentation: "Fetch execution receipt details (fees, resource usage) for a transaction.",
            inputs: [
                value: {
                    documentation: "Transaction ID.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
}

pub fn dispatch(operation: &str) -> Option<(&'static OperationSpecification, BuilderFn)> {
    match operation {
        "createTransaction" => Some((&CREATE_TRANSACTION, build_create_transaction)),
        "broadcastTransaction" => Some((&BROADCAST_TRANSACTION, build_broadcast_transaction)),
        "getTransaction" => Some((&GET_TRANSACTION, build_get_transaction)),
        "getTransactionById" => Some((&GET_TRANSACTION_BY_ID, build_get_transaction_by_id)),
        "getTransactionInfo" => Some((&GET_TRANSACTION_INFO, build_get_transaction_info)),
        _ => None,
    }
}

pub fn specifications() -> Vec<OperationSpecification> {
    vec![
        CREATE_TRANSACTION.clone(),
        BROADCAST_TRANSACTION.clone(),
        GET_TRANSACTION.clone(),
        GET_TRANSACTION_BY_ID.clone(),
        GET_TRANSACTION_INFO.clone(),
    ]
}

fn build_create_transaction(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let to_address = values.get_expected_string(TO_ADDRESS)?;
    let owner_address = values.get_expected_string(OWNER_ADDRESS)?;
    let amount = values.get_expected_uint(AMOUNT)?;

    let payload = json!({
        "to_address": to_address,
        "owner_address": owner_address,
        "amount": amount,
    });
    let body = serde_json::to_string(&payload)
        .map_err(|e| diagnosed_error!("unable to serialize transfer payload: {}", e))?;

    Ok(OperationRequest::post(format!("{}/wallet/createtransaction", credentials.base_url()))
        .with_raw_body(body)
        .authenticated(credentials))
}

fn build_broadcast_transaction(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let raw_data = values.get_expected_string(RAW_DATA)?;
    let signature = values.get_expected_string(SIGNATURE)?;

    Ok(OperationRequest::post(format!("{}/wallet/broadcasttransaction", credentials.base_url()))
        .with_json_body(json!({ "raw_data": raw_data, "signature": signature }))
        .authenticated(credentials))
}

fn build_get_transaction(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let hash = values.get_expected_string(HASH)?;
    Ok(OperationRequest::post(format!("{}/wallet/gettransactionbyid", credentials.base_url()))
        .with_json_body(json!({ "value": hash }))
        .authenticated(credentials))
}

fn build_get_transaction_by_id(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let id = values.get_expected_string(VALUE)?;
    Ok(OperationRequest::post(format!("{}/wallet/gettransactionbyid", credentials.base_url()))
        .with_json_body(json!({ "value": id }))
        .authenticated(credentials))
}

fn build_get_transaction_info(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let id = values.get_expected_string(VALUE)?;
    Ok(OperationRequest::post(format!("{}/wallet/gettransactioninfobyid", credentials.base_url()))
        .with_json_body(json!({ "value": id }))
        .authenticated(credentials))
}
