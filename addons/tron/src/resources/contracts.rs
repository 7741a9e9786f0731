use serde_json::{json, Value as JsonValue};
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::operations::{OperationSpecification, Type};
use weft_addon_kit::types::stores::ValueStore;

use super::BuilderFn;
use crate::constants::{ABI, ADDRESS, BYTECODE, CONSTRUCTOR_PARAMETERS, OWNER_ADDRESS, VALUE};
use crate::credentials::TronApiCredentials;
use crate::requests::OperationRequest;

lazy_static! {
    pub static ref DEPLOY_CONTRACT: OperationSpecification = define_operation! {
        "deployContract" => {
            name: "Deploy Contract",
            documentation: "Build an unsigned contract-creation transaction from compiled artifacts.",
            inputs: [
                abi: {
                    documentation: "Contract ABI, as a JSON document or a pre-encoded string.",
                    typing: Type::object(),
                    optional: false
                },
                bytecode: {
                    documentation: "Compiled bytecode, hex.",
                    typing: Type::string(),
                    optional: false
                },
                constructorParameters: {
                    documentation: "ABI-encoded constructor arguments, hex.",
                    typing: Type::string(),
                    optional: true
                },
                ownerAddress: {
                    documentation: "Deployer address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref CALL_CONTRACT: OperationSpecification = define_operation! {
        "callContract" => {
            name: "Call Contract",
            documentation: "Build an unsigned invocation of an arbitrary contract method.",
            inputs: [
                contractAddress: {
                    documentation: "Contract address.",
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
                    documentation: "Caller address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref CALL_CONSTANT_CONTRACT: OperationSpecification = define_operation! {
        "callConstantContract" => {
            name: "Call Constant Contract",
            documentation: "Invoke a read-only contract method without broadcasting.",
            inputs: [
                contractAddress: {
                    documentation: "Contract address.",
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
    pub static ref GET_CONTRACT_INFO: OperationSpecification = define_operation! {
        "getContractInfo" => {
            name: "Get Contract Info",
            documentation: "Retrieve a contract's indexed record (ABI, name, origin).",
            inputs: [
                address: {
                    documentation: "Contract address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_CONTRACT_DATA: OperationSpecification = define_operation! {
        "getContractData" => {
            name: "Get Contract Data",
            documentation: "Fetch a contract's on-chain record (bytecode, settings) from the node API.",
            inputs: [
                value: {
                    documentation: "Contract address.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
}

pub fn dispatch(operation: &str) -> Option<(&'static OperationSpecification, BuilderFn)> {
    match operation {
        "deployContract" => Some((&DEPLOY_CONTRACT, build_deploy_contract)),
        "callContract" => Some((&CALL_CONTRACT, build_call_contract)),
        "callConstantContract" => Some((&CALL_CONSTANT_CONTRACT, build_call_constant_contract)),
        "getContractInfo" => Some((&GET_CONTRACT_INFO, build_get_contract_info)),
        "getContractData" => Some((&GET_CONTRACT_DATA, build_get_contract_data)),
        _ => None,
    }
}

pub fn specifications() -> Vec<OperationSpecification> {
    vec![
        DEPLOY_CONTRACT.clone(),
        CALL_CONTRACT.clone(),
        CALL_CONSTANT_CONTRACT.clone(),
        GET_CONTRACT_INFO.clone(),
        GET_CONTRACT_DATA.clone(),
    ]
}

fn build_deploy_contract(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let owner_address = values.get_expected_string(OWNER_ADDRESS)?;
    let bytecode = values.get_expected_string(BYTECODE)?;

    // The node API wants the ABI as an embedded string; structured documents
    // are encoded, strings pass through untouched.
    let abi = match values.get_expected_value(ABI)? {
        JsonValue::String(abi) => abi.clone(),
        document => serde_json::to_string(document)
            .map_err(|e| diagnosed_error!("unable to serialize contract abi: {}", e))?,
    };

    let mut payload = json!({
        "owner_address": owner_address,
        "abi": abi,
        "bytecode": bytecode,
    });
    if let Some(parameter) = values.get_string(CONSTRUCTOR_PARAMETERS) {
        if !parameter.is_empty() {
            payload["parameter"] = json!(parameter);
        }
    }
    let body = serde_json::to_string(&payload)
        .map_err(|e| diagnosed_error!("unable to serialize deployment payload: {}", e))?;

    Ok(OperationRequest::post(format!("{}/wallet/deploycontract", credentials.base_url()))
        .with_raw_body(body)
        .authenticated(credentials))
}

fn build_call_contract(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let body = super::trc20::contract_call_payload(values)?;
    Ok(OperationRequest::post(format!("{}/wallet/triggersmartcontract", credentials.base_url()))
        .with_raw_body(body)
        .authenticated(credentials))
}

fn build_call_constant_contract(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let body = super::trc20::contract_call_payload(values)?;
    Ok(OperationRequest::post(format!(
        "{}/wallet/triggerconstantcontract",
        credentials.base_url()
    ))
    .with_raw_body(body)
    .authenticated(credentials))
}

fn build_get_contract_info(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(ADDRESS)?;
    Ok(OperationRequest::get(format!("{}/v1/contracts/{}", credentials.base_url(), address))
        .authenticated(credentials))
}

fn build_get_contract_data(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let address = values.get_expected_string(VALUE)?;
    let body = serde_json::to_string(&json!({ "value": address }))
        .map_err(|e| diagnosed_error!("unable to serialize contract lookup: {}", e))?;
    Ok(OperationRequest::post(format!("{}/wallet/getcontract", credentials.base_url()))
        .with_raw_body(body)
        .authenticated(credentials))
}
