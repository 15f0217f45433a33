use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{
    VariableList,
    typenum::{U2, U16, U128},
};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;
use trestle_bls::BLSSignature;
use trestle_consensus_misc::{
    constants::{BLOCK_BODY_MERKLE_DEPTH, EXECUTION_PAYLOAD_INDEX},
    eth_1_data::Eth1Data,
    sync_aggregate::SyncAggregate,
};
use trestle_merkle::{generate_proof, merkle_tree};

use super::execution_payload::ExecutionPayload;
use crate::{
    attestation::Attestation, attester_slashing::AttesterSlashing,
    bls_to_execution_change::SignedBLSToExecutionChange, deposit::Deposit,
    proposer_slashing::ProposerSlashing, voluntary_exit::SignedVoluntaryExit,
};

#[derive(
    Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
pub struct BeaconBlockBody {
    pub randao_reveal: BLSSignature,

    /// Eth1 data vote
    pub eth1_data: Eth1Data,

    /// Arbitrary data
    pub graffiti: B256,

    // Operations
    pub proposer_slashings: VariableList<ProposerSlashing, U16>,
    pub attester_slashings: VariableList<AttesterSlashing, U2>,
    pub attestations: VariableList<Attestation, U128>,
    pub deposits: VariableList<Deposit, U16>,
    pub voluntary_exits: VariableList<SignedVoluntaryExit, U16>,
    pub sync_aggregate: SyncAggregate,

    // Execution
    pub execution_payload: ExecutionPayload,
    pub bls_to_execution_changes: VariableList<SignedBLSToExecutionChange, U16>,
}

impl BeaconBlockBody {
    pub fn merkle_leaves(&self) -> Vec<B256> {
        vec![
            self.randao_reveal.tree_hash_root(),
            self.eth1_data.tree_hash_root(),
            self.graffiti.tree_hash_root(),
            self.proposer_slashings.tree_hash_root(),
            self.attester_slashings.tree_hash_root(),
            self.attestations.tree_hash_root(),
            self.deposits.tree_hash_root(),
            self.voluntary_exits.tree_hash_root(),
            self.sync_aggregate.tree_hash_root(),
            self.execution_payload.tree_hash_root(),
            self.bls_to_execution_changes.tree_hash_root(),
        ]
    }

    pub fn data_inclusion_proof(&self, index: u64) -> anyhow::Result<Vec<B256>> {
        let tree = merkle_tree(&self.merkle_leaves(), BLOCK_BODY_MERKLE_DEPTH)?;
        generate_proof(&tree, index, BLOCK_BODY_MERKLE_DEPTH)
    }

    pub fn execution_payload_inclusion_proof(&self) -> anyhow::Result<Vec<B256>> {
        self.data_inclusion_proof(EXECUTION_PAYLOAD_INDEX)
    }

    pub fn execution_block_hash_proof(&self) -> anyhow::Result<Vec<B256>> {
        Ok([
            self.execution_payload.block_hash_inclusion_proof()?,
            self.execution_payload_inclusion_proof()?,
        ]
        .concat())
    }
}
