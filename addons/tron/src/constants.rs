pub const NAMESPACE: &str = "tron";

pub const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const MAINNET_API_URL: &str = "https://api.trongrid.io";
pub const SHASTA_API_URL: &str = "https://api.shasta.trongrid.io";
pub const NILE_API_URL: &str = "https://nile.trongrid.io";

/// 1 TRX = 1,000,000 Sun.
pub const SUN_PER_TRX: u64 = 1_000_000;

pub const DEFAULT_TRANSACTION_PAGE_SIZE: u64 = 20;
pub const DEFAULT_BLOCK_PAGE_SIZE: u64 = 10;

// Batch-level selectors, read once per batch from the first item.
pub const RESOURCE: &str = "resource";
pub const OPERATION: &str = "operation";

// Item-level parameter names, as the host form declares them.
pub const ADDRESS: &str = "address";
pub const LIMIT: &str = "limit";
pub const FINGERPRINT: &str = "fingerprint";
pub const SEARCH_INTERNAL: &str = "searchInternal";
pub const CONTRACT_ADDRESS: &str = "contractAddress";
pub const OWNER_ADDRESS: &str = "ownerAddress";
pub const TO_ADDRESS: &str = "toAddress";
pub const AMOUNT: &str = "amount";
pub const RAW_DATA: &str = "rawData";
pub const SIGNATURE: &str = "signature";
pub const HASH: &str = "hash";
pub const VALUE: &str = "value";
pub const NUM: &str = "num";
pub const IDENTIFIER: &str = "identifier";
pub const FUNCTION_SELECTOR: &str = "functionSelector";
pub const PARAMETER: &str = "parameter";
pub const ABI: &str = "abi";
pub const BYTECODE: &str = "bytecode";
pub const CONSTRUCTOR_PARAMETERS: &str = "constructorParameters";
