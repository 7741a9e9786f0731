use serde_json::Value;

use super::diagnostics::Diagnostic;
use super::stores::ValueStore;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairedItem {
    pub item: usize,
}

/// One entry of a node's output batch, tagged with the input item that
/// produced it. Error entries carry `{"error": message}` as their payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemResult {
    pub json: Value,
    #[serde(rename = "pairedItem")]
    pub paired_item: PairedItem,
}

impl ItemResult {
    pub fn success(item: usize, json: Value) -> Self {
        ItemResult { json, paired_item: PairedItem { item } }
    }

    pub fn error(item: usize, message: &str) -> Self {
        ItemResult {
            json: serde_json::json!({ "error": message }),
            paired_item: PairedItem { item },
        }
    }

    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some()
    }
}

/// The host-resolved side of one node invocation: one value store per input
/// item (each item's parameters are resolved independently) plus the
/// batch-level continue-on-fail switch.
#[derive(Clone, Debug)]
pub struct NodeInputs {
    items: Vec<ValueStore>,
    continue_on_fail: bool,
}

impl NodeInputs {
    pub fn new(items: Vec<ValueStore>) -> Self {
        NodeInputs { items, continue_on_fail: false }
    }

    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }

    pub fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_values(&self, index: usize) -> Result<&ValueStore, Diagnostic> {
        self.items.get(index).ok_or_else(|| {
            Diagnostic::error_from_string(format!("input item {} out of range", index))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValueStore> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn results_serialize_to_the_host_wire_shape() {
        let ok = ItemResult::success(2, json!({ "balance": 1000000 }));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "json": { "balance": 1000000 }, "pairedItem": { "item": 2 } })
        );

        let failed = ItemResult::error(0, "Invalid address format");
        assert!(failed.is_error());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "json": { "error": "Invalid address format" }, "pairedItem": { "item": 0 } })
        );
    }

    #[test]
    fn item_lookup_past_the_batch_is_a_diagnostic() {
        let inputs = NodeInputs::new(vec![ValueStore::tmp()]);
        assert!(inputs.item_values(0).is_ok());
        let err = inputs.item_values(1).unwrap_err();
        assert_eq!(err.message, "input item 1 out of range");
    }
}
