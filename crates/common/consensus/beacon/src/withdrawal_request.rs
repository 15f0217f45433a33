use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;
use trestle_bls::PubKey;

#[derive(
    Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
pub struct WithdrawalRequest {
    pub source_address: Address,
    pub validator_pubkey: PubKey,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
}
