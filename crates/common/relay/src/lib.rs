pub mod init;

use std::{sync::Arc, time::Duration};

use alloy_rpc_types_eth::BlockNumberOrTag;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};
use trestle_beacon_client::BeaconApiClient;
use trestle_consensus_misc::misc::compute_sync_committee_period_at_slot;
use trestle_contract_client::{LightClientContract, mode::ClientMode};
use trestle_execution_client::ExecutionApiClient;
use trestle_light_client::{
    execution_header::ExecutionBlockHeader,
    transform::{ConsensusUpdate, produce_light_client_update},
};
use trestle_network_spec::networks::BeaconNetworkSpec;

/// Next light client submission, given where the contract and the beacon
/// chain finalized heads are.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UpdatePlan {
    /// Contract is at or ahead of the last finalized slot.
    UpToDate,
    /// Same sync committee period, a finality update is enough.
    Finality,
    /// Contract is at least one period behind. Advance it with the committee
    /// handover update of the given period.
    Period(u64),
}

pub fn plan_update(contract_slot: u64, beacon_slot: u64) -> UpdatePlan {
    if contract_slot >= beacon_slot {
        return UpdatePlan::UpToDate;
    }
    let contract_period = compute_sync_committee_period_at_slot(contract_slot);
    let beacon_period = compute_sync_committee_period_at_slot(beacon_slot);
    if contract_period == beacon_period {
        UpdatePlan::Finality
    } else {
        UpdatePlan::Period(contract_period + 1)
    }
}

pub struct Relay<Contract> {
    beacon_client: BeaconApiClient,
    execution_client: ExecutionApiClient,
    contract: Contract,
    network_spec: Arc<BeaconNetworkSpec>,
    interval: Duration,
}

impl<Contract: LightClientContract> Relay<Contract> {
    pub fn new(
        beacon_client: BeaconApiClient,
        execution_client: ExecutionApiClient,
        contract: Contract,
        network_spec: Arc<BeaconNetworkSpec>,
        interval: Duration,
    ) -> Self {
        Relay {
            beacon_client,
            execution_client,
            contract,
            network_spec,
            interval,
        }
    }

    pub async fn run(self) {
        info!(
            "Starting relay for {} with a round interval of {:?}",
            self.network_spec.network, self.interval
        );
        match self.contract.finalized_beacon_block_hash().await {
            Ok(block_hash) => info!("Contract finalized beacon block hash: {block_hash}"),
            Err(err) => warn!("Could not read the contract finalized block hash: {err:?}"),
        }

        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if let Err(err) = self.tick().await {
                error!("Relay round failed: {err:?}");
            }
        }
    }

    /// One relay round. Skipped while the beacon node is syncing, otherwise
    /// the contract's client mode picks the submission path.
    pub async fn tick(&self) -> anyhow::Result<()> {
        let syncing = self.beacon_client.get_node_syncing_status().await?.data;
        if syncing.is_syncing {
            warn!(
                "Beacon node is syncing, head slot {}. Skipping this round",
                syncing.head_slot
            );
            return Ok(());
        }

        match self.contract.client_mode().await? {
            ClientMode::SubmitLightClientUpdate => self.advance_light_client().await,
            ClientMode::SubmitHeader => self.submit_next_execution_header().await,
        }
    }

    async fn advance_light_client(&self) -> anyhow::Result<()> {
        let contract_slot = self.contract.finalized_beacon_block_slot().await?;
        let beacon_slot = self.beacon_client.get_last_finalized_slot().await?;

        let raw_update = match plan_update(contract_slot, beacon_slot) {
            UpdatePlan::UpToDate => {
                debug!("Contract finalized slot {contract_slot} is up to date");
                return Ok(());
            }
            UpdatePlan::Finality => {
                let update = self
                    .beacon_client
                    .get_light_client_finality_update()
                    .await?
                    .data;
                ConsensusUpdate::Finality(update)
            }
            UpdatePlan::Period(period) => {
                let update = self
                    .beacon_client
                    .get_light_client_update_for_period(period)
                    .await?
                    .data;
                ConsensusUpdate::Period(update)
            }
        };

        let finalized_slot = raw_update.finalized_header().slot;
        let update =
            produce_light_client_update(&self.beacon_client, &self.network_spec, raw_update)
                .await?;
        info!(
            "Submitting light client update for finalized slot {finalized_slot}, contract was at slot {contract_slot}"
        );
        self.contract.submit_light_client_update(update).await
    }

    async fn submit_next_execution_header(&self) -> anyhow::Result<()> {
        let next_block_number = self.contract.last_block_number().await? + 1;
        let chain_tip = self.execution_client.eth_block_number().await?.to::<u64>();
        if next_block_number > chain_tip {
            debug!("No execution block {next_block_number} yet, chain tip is {chain_tip}");
            return Ok(());
        }
        if let Some(tail) = self.contract.unfinalized_tail_block_number().await? {
            debug!("Contract unfinalized tail is at block {tail}");
        }

        let block = self
            .execution_client
            .eth_get_block_by_number(BlockNumberOrTag::Number(next_block_number), false)
            .await?;
        info!("Submitting execution header {next_block_number}");
        self.contract
            .submit_execution_header(ExecutionBlockHeader::from(&block.header))
            .await
    }
}
