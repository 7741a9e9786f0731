use serde_json::json;
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::operations::{OperationSpecification, Type};
use weft_addon_kit::types::stores::ValueStore;

use super::BuilderFn;
use crate::constants::{DEFAULT_BLOCK_PAGE_SIZE, IDENTIFIER, LIMIT, NUM, VALUE};
use crate::credentials::TronApiCredentials;
use crate::requests::OperationRequest;

lazy_static! {
    pub static ref GET_CURRENT_BLOCK: OperationSpecification = define_operation! {
        "getCurrentBlock" => {
            name: "Get Current Block",
            documentation: "Fetch the chain head from the node API.",
            inputs: [],
        }
    };
    pub static ref GET_BLOCK_BY_NUMBER: OperationSpecification = define_operation! {
        "getBlockByNumber" => {
            name: "Get Block by Number",
            documentation: "Fetch a block by height.",
            inputs: [
                num: {
                    documentation: "Block height.",
                    typing: Type::integer(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_BLOCK_BY_ID: OperationSpecification = define_operation! {
        "getBlockById" => {
            name: "Get Block by ID",
            documentation: "Fetch a block by its hash.",
            inputs: [
                value: {
                    documentation: "Block hash.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
    pub static ref GET_LATEST_BLOCKS: OperationSpecification = define_operation! {
        "getLatestBlocks" => {
            name: "Get Latest Blocks",
            documentation: "List the most recent blocks from the indexed v1 API.",
            inputs: [
                limit: {
                    documentation: "Number of blocks to return.",
                    typing: Type::integer(),
                    optional: true
                }
            ],
        }
    };
    pub static ref GET_BLOCK: OperationSpecification = define_operation! {
        "getBlock" => {
            name: "Get Block",
            documentation: "Fetch a block by height or hash through the indexed v1 API.",
            inputs: [
                identifier: {
                    documentation: "Block height or hash.",
                    typing: Type::string(),
                    optional: false
                }
            ],
        }
    };
}

pub fn dispatch(operation: &str) -> Option<(&'static OperationSpecification, BuilderFn)> {
    match operation {
        "getCurrentBlock" => Some((&GET_CURRENT_BLOCK, build_get_current_block)),
        "getBlockByNumber" => Some((&GET_BLOCK_BY_NUMBER, build_get_block_by_number)),
        "getBlockById" => Some((&GET_BLOCK_BY_ID, build_get_block_by_id)),
        "getLatestBlocks" => Some((&GET_LATEST_BLOCKS, build_get_latest_blocks)),
        "getBlock" => Some((&GET_BLOCK, build_get_block)),
        _ => None,
    }
}

pub fn specifications() -> Vec<OperationSpecification> {
    vec![
        GET_CURRENT_BLOCK.clone(),
        GET_BLOCK_BY_NUMBER.clone(),
        GET_BLOCK_BY_ID.clone(),
        GET_LATEST_BLOCKS.clone(),
        GET_BLOCK.clone(),
    ]
}

fn build_get_current_block(
    _values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    Ok(OperationRequest::get(format!("{}/wallet/getnowblock", credentials.base_url()))
        .authenticated(credentials))
}

fn build_get_block_by_number(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let num = values.get_expected_uint(NUM)?;
    Ok(OperationRequest::post(format!("{}/wallet/getblockbynum", credentials.base_url()))
        .with_json_body(json!({ "num": num }))
        .authenticated(credentials))
}

fn build_get_block_by_id(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let id = values.get_expected_string(VALUE)?;
    Ok(OperationRequest::post(format!("{}/wallet/getblockbyid", credentials.base_url()))
        .with_json_body(json!({ "value": id }))
        .authenticated(credentials))
}

fn build_get_latest_blocks(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    // The one operation whose pagination travels as a query map rather than
    // in the URL string.
    let mut request =
        OperationRequest::get(format!("{}/v1/blocks/latest", credentials.base_url()));
    let limit = values.get_uint(LIMIT).unwrap_or(DEFAULT_BLOCK_PAGE_SIZE);
    if limit > 0 {
        request = request.with_query(LIMIT, limit.to_string());
    }
    Ok(request.authenticated(credentials))
}

fn build_get_block(
    values: &ValueStore,
    credentials: &TronApiCredentials,
) -> Result<OperationRequest, Diagnostic> {
    let identifier = values.get_expected_string(IDENTIFIER)?;
    Ok(OperationRequest::get(format!("{}/v1/blocks/{}", credentials.base_url(), identifier))
        .authenticated(credentials))
}
