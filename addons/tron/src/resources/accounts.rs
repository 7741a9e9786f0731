use serde_json::json;
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::operations::{OperationSpecification, Type};
use weft_addon_kit::types::stores::ValueStore;

use super::BuilderFn;
use crate::constants::{
    ADDRESS, DEFAULT_TRANSACTION_PAGE_SIZE, FINGERPRINT, LIMIT, SEARCH_INTERNAL,
};
use crate::credentials::TronApiCredentials;
use crate::requests::OperationRequest;

lazy_static! {
    pub static ref GET_ACCOUNT: OperationSpecification = define_operation! {
        "getAccount" => {
            name: "Get Account",
            documentation: "Retrieve an account from the indexed v1 API.",
            inputs: [
                address: {
                    documentation: "Account address, base58 or hex.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_ACCOUNT_TRANSACTIONS: OperationSpecification = define_operation! {
        "getAccountTransactions" => {
            name: "Get Account Transactions",
            documentation: "List the transactions an account took part in, newest first.",
            inputs: [
                address: {
                    documentation: "Account address, base58 or hex.",
                    typing: Type::string(),
                    optional: false
                },
                limit: {
                    documentation: "Page size, up to 200.",
                    typing: Type::integer(),
                    optional: true
                },
                fingerprint: {
                    documentation: "Cursor returned by the previous page.",
                    typing: Type::string(),
                    optional: true
                },
                searchInternal: {
                    documentation: "Include internal transactions.",
                    typing: Type::bool(),
                    optional: true
                }
            ],
        }
    };
    pub static ref GET_ACCOUNT_INFO: OperationSpecification = define_operation! {
        "getAccountInfo" => {
            name: "Get Account Info",
            documentation: "Fetch the raw account record from the node API.",
            inputs: [
                address: {
                    documentation: "Account address, base58 or hex.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
}

pub fn dispatch(operation: &str) -> Option<(&'static OperationSpecification, BuilderFn)> {
    match operation {
        "getAccount" => Some((&GET_ACCOUNT, build_get_account)),
        "getAccountTransactions" => Some((&GET_ACCOUNT_TRANSACTIONS, build_get_account_transactions)),
        "getAccountInfo" => Some((&GET_ACCOUNT_INFO, build_get_account_info)),
        _ => None,
    }
}

pub fn specifications() -> Vec<OperationSpecification> {
    vec![GET_ACCOUNT.clone(), GET_ACCOUNT_TRANSACTIONS.clone(), GET_ACCOUNT_INFO.clone()]
}

fn build_get_account(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    Ok(OperationRequest::get(format!("{}/v1/accounts/{}", credentials.base_url(), address))
        .authenticated(credentials))
}

fn build_get_account_transactions(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    let mut url = format!("{}/v1/accounts/{}/transactions", credentials.base_url(), address);

    // Optional parameters are omitted, not sent empty.
    let mut params = vec![];
    let limit = values.get_uint(LIMIT).unwrap_or(DEFAULT_TRANSACTION_PAGE_SIZE);
    if limit > 0 {
        params.push(format!("limit={}", limit));
    }
    if let Some(fingerprint) = values.get_string(FINGERPRINT) {
        if !fingerprint.is_empty() {
            params.push(format!("fingerprint={}", fingerprint));
        }
    }
    if values.get_bool(SEARCH_INTERNAL).unwrap_or(false) {
        params.push("search_internal=true".to_string());
    }
    if !params.is_empty() {
        url = format!("{}?{}", url, params.join("&"));
    }

    Ok(OperationRequest::get(url).authenticated(credentials))
}

fn build_get_account_info(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    Ok(OperationRequest::post(format!("{}/wallet/getaccount", credentials.base_url()))
        .with_json_body(json!({ "address": address }))
        .authenticated(credentials))
}
