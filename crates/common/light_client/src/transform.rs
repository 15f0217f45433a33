use alloy_primitives::B256;
use trestle_api_types_beacon::light_client::{LightClientFinalityUpdateData, LightClientUpdateData};
use trestle_beacon_client::BeaconApiClient;
use trestle_consensus_beacon::beacon_block_body::BeaconBlockBody;
use trestle_consensus_misc::{
    beacon_block_header::BeaconBlockHeader, fork_name::ForkName, sync_aggregate::SyncAggregate,
};
use trestle_merkle::is_valid_normalized_merkle_branch;
use trestle_network_spec::networks::BeaconNetworkSpec;

use crate::{
    error::LightClientError,
    update::{FinalizedHeaderUpdate, HeaderUpdate, LightClientUpdate, SyncCommitteeUpdate},
};

/// Raw light client update as served by the beacon REST API.
///
/// The two endpoint shapes stay distinct so that only period updates can
/// ever carry sync committee material.
#[derive(Debug, Clone)]
pub enum ConsensusUpdate {
    Period(LightClientUpdateData),
    Finality(LightClientFinalityUpdateData),
}

impl ConsensusUpdate {
    pub fn attested_header(&self) -> &BeaconBlockHeader {
        match self {
            ConsensusUpdate::Period(update) => &update.attested_header.beacon,
            ConsensusUpdate::Finality(update) => &update.attested_header.beacon,
        }
    }

    pub fn finalized_header(&self) -> &BeaconBlockHeader {
        match self {
            ConsensusUpdate::Period(update) => &update.finalized_header.beacon,
            ConsensusUpdate::Finality(update) => &update.finalized_header.beacon,
        }
    }

    pub fn finality_branch(&self) -> &[B256] {
        match self {
            ConsensusUpdate::Period(update) => &update.finality_branch,
            ConsensusUpdate::Finality(update) => &update.finality_branch,
        }
    }

    pub fn sync_aggregate(&self) -> &SyncAggregate {
        match self {
            ConsensusUpdate::Period(update) => &update.sync_aggregate,
            ConsensusUpdate::Finality(update) => &update.sync_aggregate,
        }
    }

    pub fn signature_slot(&self) -> u64 {
        match self {
            ConsensusUpdate::Period(update) => update.signature_slot,
            ConsensusUpdate::Finality(update) => update.signature_slot,
        }
    }

    fn sync_committee_update(&self) -> Option<SyncCommitteeUpdate> {
        match self {
            ConsensusUpdate::Period(update) => Some(SyncCommitteeUpdate {
                next_sync_committee: update.next_sync_committee.clone(),
                next_sync_committee_branch: update.next_sync_committee_branch.clone(),
            }),
            ConsensusUpdate::Finality(_) => None,
        }
    }
}

/// Resolves the fork in force at `slot`, requiring one that carries an
/// execution payload.
pub fn execution_fork_at_slot(
    network_spec: &BeaconNetworkSpec,
    slot: u64,
) -> Result<ForkName, LightClientError> {
    let fork = network_spec.fork_schedule().fork_name_at_slot(slot);
    if !fork.has_execution_payload() {
        return Err(LightClientError::UnsupportedFork { slot, fork });
    }
    Ok(fork)
}

/// Assembles the canonical update from a raw REST update and the finalized
/// block's body.
///
/// The execution hash branch is checked against the finalized header's
/// `body_root` before it leaves the library, which also catches a body that
/// does not belong to the update.
pub fn build_light_client_update(
    update: &ConsensusUpdate,
    body: &BeaconBlockBody,
) -> Result<LightClientUpdate, LightClientError> {
    let finalized_header = *update.finalized_header();
    let execution_block_hash = body.execution_block_hash();
    let execution_hash_branch = body.execution_block_hash_proof()?;
    if !is_valid_normalized_merkle_branch(
        execution_block_hash,
        &execution_hash_branch,
        body.execution_block_hash_generalized_index(),
        finalized_header.body_root,
    ) {
        return Err(LightClientError::ProofResolution {
            slot: finalized_header.slot,
        });
    }

    Ok(LightClientUpdate {
        attested_beacon_header: *update.attested_header(),
        sync_aggregate: update.sync_aggregate().clone(),
        signature_slot: update.signature_slot(),
        finality_update: FinalizedHeaderUpdate {
            header_update: HeaderUpdate {
                beacon_header: finalized_header,
                execution_block_hash,
                execution_hash_branch,
            },
            finality_branch: update.finality_branch().to_vec(),
        },
        sync_committee_update: update.sync_committee_update(),
    })
}

/// Fetches the finalized block's body and produces the canonical update.
pub async fn produce_light_client_update(
    beacon_client: &BeaconApiClient,
    network_spec: &BeaconNetworkSpec,
    update: ConsensusUpdate,
) -> Result<LightClientUpdate, LightClientError> {
    let finalized_slot = update.finalized_header().slot;
    let fork_name = execution_fork_at_slot(network_spec, finalized_slot)?;
    let body = beacon_client
        .get_beacon_block_body(finalized_slot, fork_name)
        .await?;
    build_light_client_update(&update, &body)
}
