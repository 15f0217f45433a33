use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;
use trestle_bls::PubKey;

#[derive(
    Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
pub struct ConsolidationRequest {
    pub source_address: Address,
    pub source_pubkey: PubKey,
    pub target_pubkey: PubKey,
}
