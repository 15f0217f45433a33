pub mod mode;
pub mod rpc;

use alloy_primitives::B256;
use async_trait::async_trait;
use trestle_light_client::{
    execution_header::ExecutionBlockHeader, init::InitInput, state::LightClientState,
    update::LightClientUpdate,
};

use crate::mode::ClientMode;

/// Destination-chain light client contract, as seen by the relay.
///
/// Submission payloads cross this seam in the canonical borsh encoding, so
/// implementations stay independent of the destination chain's SDK.
#[async_trait]
pub trait LightClientContract {
    async fn client_mode(&self) -> anyhow::Result<ClientMode>;

    async fn finalized_beacon_block_hash(&self) -> anyhow::Result<B256>;

    async fn finalized_beacon_block_slot(&self) -> anyhow::Result<u64>;

    async fn light_client_state(&self) -> anyhow::Result<LightClientState>;

    /// Number of the last execution block known to the contract.
    async fn last_block_number(&self) -> anyhow::Result<u64>;

    /// Oldest submitted block of the unfinalized chain, if any.
    async fn unfinalized_tail_block_number(&self) -> anyhow::Result<Option<u64>>;

    async fn init(&self, input: InitInput) -> anyhow::Result<()>;

    async fn submit_light_client_update(&self, update: LightClientUpdate) -> anyhow::Result<()>;

    async fn submit_execution_header(&self, header: ExecutionBlockHeader) -> anyhow::Result<()>;
}
