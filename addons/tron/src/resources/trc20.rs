use serde_json::json;
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::operations::{OperationSpecification, Type};
use weft_addon_kit::types::stores::ValueStore;

use super::BuilderFn;
use crate::constants::{
    ADDRESS, CONTRACT_ADDRESS, DEFAULT_TRANSACTION_PAGE_SIZE, FINGERPRINT, FUNCTION_SELECTOR,
    LIMIT, OWNER_ADDRESS, PARAMETER,
};
use crate::credentials::TronApiCredentials;
use crate::requests::OperationRequest;

lazy_static! {
    pub static ref TRIGGER_SMART_CONTRACT: OperationSpecification = define_operation! {
        "triggerSmartContract" => {
            name: "Trigger Smart Contract",
            documentation: "Build an unsigned token-contract invocation (transfer, approve, ...).",
            inputs: [
                contractAddress: {
                    documentation: "TRC-20 contract address.",
                    typing: Type::string(),
                    optional: false
                },
                functionSelector: {
                    documentation: "Solidity function signature, e.g. transfer(address,uint256).",
                    typing: Type::string(),
                    optional: false
                },
                parameter: {
                    documentation: "ABI-encoded call parameters, hex, passed through verbatim.",
                    typing: Type::string(),
                    optional: true
                },
                ownerAddress: {
                    documentation: "Caller address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_TRC20_TRANSACTIONS: OperationSpecification = define_operation! {
        "getTrc20Transactions" => {
            name: "Get TRC-20 Transfers",
            documentation: "List TRC-20 transfers an account took part in, optionally scoped to one contract.",
            inputs: [
                address: {
                    documentation: "Account address.",
                    typing: Type::string(),
                    optional: false
                },
                contractAddress: {
                    documentation: "Restrict to transfers of this contract.",
                    typing: Type::string(),
                    optional: true
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
                }
            ],
        }
    };
    pub static ref CONSTANT_CALL: OperationSpecification = define_operation! {
        "constantCall" => {
            name: "Constant Call",
            documentation: "Invoke a read-only contract method (balanceOf, decimals, ...) without broadcasting.",
            inputs: [
                contractAddress: {
                    documentation: "TRC-20 contract address.",
                    typing: Type::string(),
                    optional: false
                },
                functionSelector: {
                    documentation: "Solidity function signature.",
                    typing: Type::string(),
                    optional: false
                },
                parameter: {
                    documentation: "ABI-encoded call parameters, hex.",
                    typing: Type::string(),
                    optional: true
                },
                ownerAddress: {
                    documentation: "Simulated caller address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_CONTRACT: OperationSpecification = define_operation! {
        "getContract" => {
            name: "Get Contract",
            documentation: "Retrieve a token contract's indexed record.",
            inputs: [
                address: {
                    documentation: "Contract address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_CONTRACT_TRANSACTIONS: OperationSpecification = define_operation! {
        "getContractTransactions" => {
            name: "Get Contract Transactions",
            documentation: "List the transactions addressed to a contract.",
            inputs: [
                address: {
                    documentation: "Contract address.",
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
                }
            ],
        }
    };
}

pub fn dispatch(operation: &str) -> Option<(&'static OperationSpecification, BuilderFn)> {
    match operation {
        "triggerSmartContract" => Some((&TRIGGER_SMART_CONTRACT, build_trigger_smart_contract)),
        "getTrc20Transactions" => Some((&GET_TRC20_TRANSACTIONS, build_get_trc20_transactions)),
        "constantCall" => Some((&CONSTANT_CALL, build_constant_call)),
        "getContract" => Some((&GET_CONTRACT, build_get_contract)),
        "getContractTransactions" => {
            Some((&GET_CONTRACT_TRANSACTIONS, build_get_contract_transactions))
        }
        _ => None,
    }
}

pub fn specifications() -> Vec<OperationSpecification> {
    vec![
        TRIGGER_SMART_CONTRACT.clone(),
        GET_TRC20_TRANSACTIONS.clone(),
        CONSTANT_CALL.clone(),
        GET_CONTRACT.clone(),
        GET_CONTRACT_TRANSACTIONS.clone(),
    ]
}

/// Shared by the trigger and constant-call builders; the two operations
/// only differ in the endpoint they target.
pub(super) fn contract_call_payload(values: &ValueStore) -> Result<String, Diagnostic> {
    let contract_address = values.get_expected_string(CONTRACT_ADDRESS)?;
    let function_selector = values.get_expected_string(FUNCTION_SELECTOR)?;
    let owner_address = values.get_expected_string(OWNER_ADDRESS)?;

    let mut payload = json!({
        "contract_address": contract_address,
        "function_selector": function_selector,
    });
    if let Some(parameter) = values.get_string(PARAMETER) {
        if !parameter.is_empty() {
            payload["parameter"] = json!(parameter);
        }
    }
    payload["owner_address"] = json!(owner_address);

    serde_json::to_string(&payload)
        .map_err(|e| diagnosed_error!("unable to serialize contract call payload: {}", e))
}

fn build_trigger_smart_contract(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let body = contract_call_payload(values)?;
    Ok(OperationRequest::post(format!("{}/wallet/triggersmartcontract", credentials.base_url()))
        .with_raw_body(body)
        .authenticated(credentials))
}

fn build_constant_call(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let body = contract_call_payload(values)?;
    Ok(OperationRequest::post(format!(
        "{}/wallet/triggerconstantcontract",
        credentials.base_url()
    ))
    .with_raw_body(body)
    .authenticated(credentials))
}

fn build_get_trc20_transactions(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    let mut url =
        format!("{}/v1/accounts/{}/transactions/trc20", credentials.base_url(), address);

    let mut params = vec![];
    if let Some(contract_address) = values.get_string(CONTRACT_ADDRESS) {
        if !contract_address.is_empty() {
            params.push(format!("contract_address={}", contract_address));
        }
    }
    let limit = values.get_uint(LIMIT).unwrap_or(DEFAULT_TRANSACTION_PAGE_SIZE);
    if limit > 0 {
        params.push(format!("limit={}", limit));
    }
    if let Some(fingerprint) = values.get_string(FINGERPRINT) {
        if !fingerprint.is_empty() {
            params.push(format!("fingerprint={}", fingerprint));
        }
    }
    if !params.is_empty() {
        url = format!("{}?{}", url, params.join("&"));
    }

    Ok(OperationRequest::get(url).authenticated(credentials))
}

fn build_get_contract(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    Ok(OperationRequest::get(format!("{}/v1/contracts/{}", credentials.base_url(), address))
        .authenticated(credentials))
}

fn build_get_contract_transactions(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    let mut url = format!("{}/v1/contracts/{}/transactions", credentials.base_url(), address);

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
    if !params.is_empty() {
        url = format!("{}?{}", url, params.join("&"));
    }

    Ok(OperationRequest::get(url).authenticated(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{API_KEY_HEADER, CONTENT_TYPE_HEADER};
    use crate::requests::RequestBody;
    use weft_addon_kit::reqwest::Method;
    use serde_json::{json, Value as JsonValue};

    const USDT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
    const HOLDER: &str = "TLPamm8gjH7kPLjyENAdZoqJPSZc4ZfNxP";

    fn credentials() -> TronApiCredentials {
        TronApiCredentials::new("https://api.trongrid.io", Some("test-api-key".to_string()))
    }

    fn call_values() -> ValueStore {
        ValueStore::tmp()
            .with_value(CONTRACT_ADDRESS, json!(USDT))
            .with_value(FUNCTION_SELECTOR, json!("transfer(address,uint256)"))
            .with_value(PARAMETER, json!("0000...03e8"))
            .with_value(OWNER_ADDRESS, json!(HOLDER))
    }

    #[test]
    fn trigger_posts_a_pre_serialized_call() {
        let (_, builder) = dispatch("triggerSmartContract").unwrap();
        let request = builder(&call_values(), &credentials()).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://api.trongrid.io/wallet/triggersmartcontract");
        assert_eq!(
            request.headers.get(CONTENT_TYPE_HEADER).map(String::as_str),
            Some("application/json")
        );
        let Some(RequestBody::Raw(body)) = request.body else {
            panic!("expected a pre-serialized body");
        };
        assert_eq!(
            body,
            format!(
                r#"{{"contract_address":"{}","function_selector":"transfer(address,uint256)","parameter":"0000...03e8","owner_address":"{}"}}"#,
                USDT, HOLDER
            )
        );
    }

    #[test]
    fn constant_call_targets_the_readonly_endpoint_with_the_same_payload() {
        let (_, trigger) = dispatch("triggerSmartContract").unwrap();
        let (_, constant) = dispatch("constantCall").unwrap();
        let a = trigger(&call_values(), &credentials()).unwrap();
        let b = constant(&call_values(), &credentials()).unwrap();

        assert_eq!(b.url, "https://api.trongrid.io/wallet/triggerconstantcontract");
        assert_eq!(a.body, b.body);
    }

    #[test]
    fn empty_call_parameter_is_omitted_from_the_payload() {
        let values = call_values().with_value(PARAMETER, json!(""));
        let (_, builder) = dispatch("constantCall").unwrap();
        let request = builder(&values, &credentials()).unwrap();

        let Some(RequestBody::Raw(body)) = request.body else {
            panic!("expected a pre-serialized body");
        };
        let parsed: JsonValue = serde_json::from_str(&body).unwrap();
        assert!(parsed.get("parameter").is_none());
    }

    #[test]
    fn transfer_history_scopes_to_contract_then_paginates() {
        let values = ValueStore::tmp()
            .with_value(ADDRESS, json!(HOLDER))
            .with_value(CONTRACT_ADDRESS, json!(USDT))
            .with_value(LIMIT, json!(20));
        let (_, builder) = dispatch("getTrc20Transactions").unwrap();
        let request = builder(&values, &credentials()).unwrap();

        assert_eq!(
            request.url,
            format!(
                "https://api.trongrid.io/v1/accounts/{}/transactions/trc20?contract_address={}&limit=20",
                HOLDER, USDT
            )
        );
        assert_eq!(request.headers.get(API_KEY_HEADER).map(String::as_str), Some("test-api-key"));
        assert!(!request.headers.contains_key(CONTENT_TYPE_HEADER));
    }

    #[test]
    fn contract_lookups_use_the_indexed_api() {
        let values = ValueStore::tmp().with_value(ADDRESS, json!(USDT));

        let (_, builder) = dispatch("getContract").unwrap();
        let request = builder(&values, &credentials()).unwrap();
        assert_eq!(request.url, format!("https://api.trongrid.io/v1/contracts/{}", USDT));

        let (_, builder) = dispatch("getContractTransactions").unwrap();
        let request = builder(&values, &credentials()).unwrap();
        assert_eq!(
            request.url,
            format!("https://api.trongrid.io/v1/contracts/{}/transactions?limit=20", USDT)
        );
    }
}
