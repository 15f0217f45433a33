use alloy_primitives::B256;
use anyhow::bail;
use serde_json::Value;
use tree_hash::TreeHash;
use trestle_consensus_misc::{
    constants::{BLOCK_BODY_MERKLE_DEPTH, BLOCK_HASH_INDEX, EXECUTION_PAYLOAD_INDEX},
    fork_name::ForkName,
};
use trestle_merkle::{concat_generalized_indices, generalized_index_from_leaf_index};

use crate::{bellatrix, capella, deneb, electra};

/// Fork-indexed view of a beacon block body.
///
/// The wire shape of the body and of its execution payload changes at each
/// fork, so the right variant must be picked from the slot's fork before
/// deserializing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BeaconBlockBody {
    Bellatrix(bellatrix::beacon_block_body::BeaconBlockBody),
    Capella(capella::beacon_block_body::BeaconBlockBody),
    Deneb(deneb::beacon_block_body::BeaconBlockBody),
    Electra(electra::beacon_block_body::BeaconBlockBody),
}

impl BeaconBlockBody {
    pub fn from_value(fork_name: ForkName, body: Value) -> anyhow::Result<Self> {
        match fork_name {
            ForkName::Phase0 | ForkName::Altair => {
                bail!("no execution payload to prove before bellatrix, got {fork_name}")
            }
            ForkName::Bellatrix => Ok(Self::Bellatrix(serde_json::from_value(body)?)),
            ForkName::Capella => Ok(Self::Capella(serde_json::from_value(body)?)),
            ForkName::Deneb => Ok(Self::Deneb(serde_json::from_value(body)?)),
            ForkName::Electra => Ok(Self::Electra(serde_json::from_value(body)?)),
        }
    }

    pub fn fork_name(&self) -> ForkName {
        match self {
            Self::Bellatrix(_) => ForkName::Bellatrix,
            Self::Capella(_) => ForkName::Capella,
            Self::Deneb(_) => ForkName::Deneb,
            Self::Electra(_) => ForkName::Electra,
        }
    }

    pub fn execution_block_hash(&self) -> B256 {
        match self {
            Self::Bellatrix(body) => body.execution_payload.block_hash,
            Self::Capella(body) => body.execution_payload.block_hash,
            Self::Deneb(body) => body.execution_payload.block_hash,
            Self::Electra(body) => body.execution_payload.block_hash,
        }
    }

    /// Branch from the execution payload's `block_hash` leaf up to the body
    /// root: the payload subtree siblings first, then the body siblings.
    pub fn execution_block_hash_proof(&self) -> anyhow::Result<Vec<B256>> {
        match self {
            Self::Bellatrix(body) => body.execution_block_hash_proof(),
            Self::Capella(body) => body.execution_block_hash_proof(),
            Self::Deneb(body) => body.execution_block_hash_proof(),
            Self::Electra(body) => body.execution_block_hash_proof(),
        }
    }

    pub fn execution_block_hash_generalized_index(&self) -> u64 {
        let payload_depth = match self {
            Self::Bellatrix(_) => bellatrix::execution_payload::ExecutionPayload::merkle_depth(),
            Self::Capella(_) => capella::execution_payload::ExecutionPayload::merkle_depth(),
            Self::Deneb(_) | Self::Electra(_) => {
                deneb::execution_payload::ExecutionPayload::merkle_depth()
            }
        };
        concat_generalized_indices(
            generalized_index_from_leaf_index(EXECUTION_PAYLOAD_INDEX, BLOCK_BODY_MERKLE_DEPTH),
            generalized_index_from_leaf_index(BLOCK_HASH_INDEX, payload_depth),
        )
    }

    pub fn tree_hash_root(&self) -> B256 {
        match self {
            Self::Bellatrix(body) => body.tree_hash_root(),
            Self::Capella(body) => body.tree_hash_root(),
            Self::Deneb(body) => body.tree_hash_root(),
            Self::Electra(body) => body.tree_hash_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use rstest::rstest;
    use trestle_merkle::is_valid_normalized_merkle_branch;

    use super::*;

    fn body_for(fork_name: ForkName) -> BeaconBlockBody {
        match fork_name {
            ForkName::Bellatrix => BeaconBlockBody::Bellatrix(Default::default()),
            ForkName::Capella => BeaconBlockBody::Capella(Default::default()),
            ForkName::Deneb => BeaconBlockBody::Deneb(Default::default()),
            ForkName::Electra => BeaconBlockBody::Electra(Default::default()),
            _ => panic!("fork {fork_name} has no execution payload"),
        }
    }

    #[rstest]
    #[case(ForkName::Bellatrix, 412, 8)]
    #[case(ForkName::Capella, 412, 8)]
    #[case(ForkName::Deneb, 812, 9)]
    #[case(ForkName::Electra, 812, 9)]
    fn test_execution_block_hash_generalized_index(
        #[case] fork_name: ForkName,
        #[case] expected_generalized_index: u64,
        #[case] expected_branch_len: usize,
    ) {
        let body = body_for(fork_name);
        assert_eq!(
            body.execution_block_hash_generalized_index(),
            expected_generalized_index
        );
        assert_eq!(
            body.execution_block_hash_proof()
                .expect("proof generation failed")
                .len(),
            expected_branch_len
        );
    }

    #[rstest]
    #[case(ForkName::Bellatrix)]
    #[case(ForkName::Capella)]
    #[case(ForkName::Deneb)]
    #[case(ForkName::Electra)]
    fn test_execution_block_hash_proof_verifies(#[case] fork_name: ForkName) {
        let block_hash = B256::repeat_byte(0xab);
        let mut body = body_for(fork_name);
        match &mut body {
            BeaconBlockBody::Bellatrix(body) => body.execution_payload.block_hash = block_hash,
            BeaconBlockBody::Capella(body) => body.execution_payload.block_hash = block_hash,
            BeaconBlockBody::Deneb(body) => body.execution_payload.block_hash = block_hash,
            BeaconBlockBody::Electra(body) => body.execution_payload.block_hash = block_hash,
        }

        let branch = body
            .execution_block_hash_proof()
            .expect("proof generation failed");
        assert!(is_valid_normalized_merkle_branch(
            body.execution_block_hash(),
            &branch,
            body.execution_block_hash_generalized_index(),
            body.tree_hash_root(),
        ));
    }

    #[test]
    fn test_tampered_proof_is_rejected() {
        let body = body_for(ForkName::Electra);
        let mut branch = body
            .execution_block_hash_proof()
            .expect("proof generation failed");
        branch[3] = B256::repeat_byte(0xff);
        assert!(!is_valid_normalized_merkle_branch(
            body.execution_block_hash(),
            &branch,
            body.execution_block_hash_generalized_index(),
            body.tree_hash_root(),
        ));
    }

    #[rstest]
    #[case(ForkName::Bellatrix, 10)]
    #[case(ForkName::Capella, 11)]
    #[case(ForkName::Deneb, 12)]
    #[case(ForkName::Electra, 13)]
    fn test_body_merkle_leaf_count(#[case] fork_name: ForkName, #[case] expected: usize) {
        let leaves = match body_for(fork_name) {
            BeaconBlockBody::Bellatrix(body) => body.merkle_leaves(),
            BeaconBlockBody::Capella(body) => body.merkle_leaves(),
            BeaconBlockBody::Deneb(body) => body.merkle_leaves(),
            BeaconBlockBody::Electra(body) => body.merkle_leaves(),
        };
        assert_eq!(leaves.len(), expected);
    }

    #[test]
    fn test_payload_merkle_leaf_count_matches_schema() {
        assert_eq!(
            bellatrix::execution_payload::ExecutionPayload::default()
                .merkle_leaves()
                .len(),
            bellatrix::execution_payload::ExecutionPayload::MERKLE_LEAF_COUNT
        );
        assert_eq!(
            capella::execution_payload::ExecutionPayload::default()
                .merkle_leaves()
                .len(),
            capella::execution_payload::ExecutionPayload::MERKLE_LEAF_COUNT
        );
        assert_eq!(
            deneb::execution_payload::ExecutionPayload::default()
                .merkle_leaves()
                .len(),
            deneb::execution_payload::ExecutionPayload::MERKLE_LEAF_COUNT
        );
    }

    #[test]
    fn test_from_value_round_trips_from_json() {
        let body = bellatrix::beacon_block_body::BeaconBlockBody::default();
        let value = serde_json::to_value(&body).expect("serialization failed");
        let decoded = BeaconBlockBody::from_value(ForkName::Bellatrix, value)
            .expect("deserialization failed");
        assert_eq!(decoded, BeaconBlockBody::Bellatrix(body));
    }

    #[test]
    fn test_from_value_rejects_pre_bellatrix() {
        assert!(BeaconBlockBody::from_value(ForkName::Phase0, Value::Null).is_err());
        assert!(BeaconBlockBody::from_value(ForkName::Altair, Value::Null).is_err());
    }
}
