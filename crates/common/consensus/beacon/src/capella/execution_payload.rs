use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{
    FixedVector, VariableList,
    serde_utils::{hex_fixed_vec, hex_var_list, list_of_hex_var_list},
    typenum::{self, U16, U32, U1048576, U1073741824},
};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;
use trestle_consensus_misc::{constants::BLOCK_HASH_INDEX, misc::checksummed_address};
use trestle_merkle::{generate_proof, merkle_tree};

use crate::{helpers::subtree_merkle_depth, withdrawal::Withdrawal};

pub type Transactions = VariableList<VariableList<u8, U1073741824>, U1048576>;

#[derive(
    Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
pub struct ExecutionPayload {
    // Execution block header fields
    pub parent_hash: B256,
    #[serde(with = "checksummed_address")]
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    #[serde(with = "hex_fixed_vec")]
    pub logs_bloom: FixedVector<u8, typenum::U256>,
    pub prev_randao: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub block_number: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    #[serde(with = "hex_var_list")]
    pub extra_data: VariableList<u8, U32>,
    #[serde(with = "serde_utils::quoted_u256")]
    pub base_fee_per_gas: U256,

    // Extra payload fields
    pub block_hash: B256,
    #[serde(with = "list_of_hex_var_list")]
    pub transactions: Transactions,
    pub withdrawals: VariableList<Withdrawal, U16>,
}

impl ExecutionPayload {
    pub const MERKLE_LEAF_COUNT: usize = 15;

    pub fn merkle_leaves(&self) -> Vec<B256> {
        vec![
            self.parent_hash.tree_hash_root(),
            self.fee_recipient.tree_hash_root(),
            self.state_root.tree_hash_root(),
            self.receipts_root.tree_hash_root(),
            self.logs_bloom.tree_hash_root(),
            self.prev_randao.tree_hash_root(),
            self.block_number.tree_hash_root(),
            self.gas_limit.tree_hash_root(),
            self.gas_used.tree_hash_root(),
            self.timestamp.tree_hash_root(),
            self.extra_data.tree_hash_root(),
            self.base_fee_per_gas.tree_hash_root(),
            self.block_hash.tree_hash_root(),
            self.transactions.tree_hash_root(),
            self.withdrawals.tree_hash_root(),
        ]
    }

    pub fn merkle_depth() -> u64 {
        subtree_merkle_depth(Self::MERKLE_LEAF_COUNT)
    }

    pub fn block_hash_inclusion_proof(&self) -> anyhow::Result<Vec<B256>> {
        let tree = merkle_tree(&self.merkle_leaves(), Self::merkle_depth())?;
        generate_proof(&tree, BLOCK_HASH_INDEX, Self::merkle_depth())
    }
}
