use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Thin view over `/eth/v2/beacon/blocks/{block_id}` responses.
///
/// The body is kept as raw JSON here because its shape is fork-dependent;
/// callers deserialize it once they know the slot's fork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedBlockData {
    pub message: BlockMessageData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockMessageData {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    pub body: Value,
}
