use anyhow::ensure;
use tracing::info;
use trestle_beacon_client::BeaconApiClient;
use trestle_consensus_misc::misc::compute_sync_committee_period_at_slot;
use trestle_execution_client::ExecutionApiClient;
use trestle_light_client::{
    execution_header::ExecutionBlockHeader, header::ExtendedBeaconBlockHeader, init::InitInput,
    transform::execution_fork_at_slot,
};
use trestle_network_spec::networks::BeaconNetworkSpec;

/// Operator-chosen parameters of a contract initialization.
#[derive(Debug, Clone)]
pub struct InitSettings {
    pub validate_updates: bool,
    pub verify_bls_signatures: bool,
    pub hashes_gc_threshold: u64,
    pub trusted_signer: Option<String>,
}

/// Assembles the payload that seeds a destination contract from live chain
/// data, anchored at the latest finalized header.
///
/// The current sync committee is recovered from the previous period's
/// handover update, the next one from the current period's.
pub async fn build_init_input(
    beacon_client: &BeaconApiClient,
    execution_client: &ExecutionApiClient,
    network_spec: &BeaconNetworkSpec,
    settings: InitSettings,
) -> anyhow::Result<InitInput> {
    let finality_update = beacon_client.get_light_client_finality_update().await?.data;
    let finalized_header = finality_update.finalized_header.beacon;
    info!(
        "Initializing at finalized slot {} of {}",
        finalized_header.slot, network_spec.network
    );

    let fork_name = execution_fork_at_slot(network_spec, finalized_header.slot)?;
    let body = beacon_client
        .get_beacon_block_body(finalized_header.slot, fork_name)
        .await?;
    ensure!(
        body.tree_hash_root() == finalized_header.body_root,
        "Block body at slot {} does not match the finality update",
        finalized_header.slot
    );
    let execution_block_hash = body.execution_block_hash();

    let block = execution_client
        .eth_get_block_by_hash(execution_block_hash, false)
        .await?;
    let finalized_execution_header = ExecutionBlockHeader::from(&block.header);

    let period = compute_sync_committee_period_at_slot(finalized_header.slot);
    ensure!(
        period > 0,
        "Cannot initialize during the first sync committee period"
    );
    let previous_update = beacon_client
        .get_light_client_update_for_period(period - 1)
        .await?
        .data;
    let current_update = beacon_client
        .get_light_client_update_for_period(period)
        .await?
        .data;

    Ok(InitInput {
        network: network_spec.network.to_string(),
        finalized_execution_header,
        finalized_beacon_header: ExtendedBeaconBlockHeader::from_header(
            finalized_header,
            execution_block_hash,
        ),
        current_sync_committee: previous_update.next_sync_committee,
        next_sync_committee: current_update.next_sync_committee,
        validate_updates: settings.validate_updates,
        verify_bls_signatures: settings.verify_bls_signatures,
        hashes_gc_threshold: settings.hashes_gc_threshold,
        trusted_signer: settings.trusted_signer,
    })
}
