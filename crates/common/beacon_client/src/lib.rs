pub mod http_client;

use std::time::Duration;

use http_client::ClientWithBaseUrl;
use reqwest::{StatusCode, Url};
use trestle_api_types_beacon::{
    block::SignedBlockData,
    checkpoints::FinalityCheckpoints,
    error::BeaconClientError,
    light_client::{LightClientFinalityUpdateData, LightClientUpdateData},
    responses::{BeaconResponse, BeaconVersionedResponse, DataResponse, DataVersionedResponse},
    sync::SyncStatus,
};
use trestle_api_types_common::id::ID;
use trestle_consensus_beacon::beacon_block_body::BeaconBlockBody;
use trestle_consensus_misc::{constants::SLOTS_PER_EPOCH, fork_name::ForkName};

#[derive(Debug, Clone)]
pub struct BeaconApiClient {
    http_client: ClientWithBaseUrl,
}

impl BeaconApiClient {
    pub fn new(beacon_api_endpoint: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: ClientWithBaseUrl::new(beacon_api_endpoint, request_timeout)?,
        })
    }

    pub async fn get_light_client_updates(
        &self,
        start_period: u64,
        count: u64,
    ) -> anyhow::Result<Vec<DataVersionedResponse<LightClientUpdateData>>, BeaconClientError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get(format!(
                        "/eth/v1/beacon/light_client/updates?start_period={start_period}&count={count}"
                    ))?
                    .build()?,
            )
            .await?;

        if !response.status().is_success() {
            return Err(BeaconClientError::RequestFailed {
                status_code: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the update advertising the committee handover of `period`. An
    /// empty range response means the period is not served anymore.
    pub async fn get_light_client_update_for_period(
        &self,
        period: u64,
    ) -> anyhow::Result<DataVersionedResponse<LightClientUpdateData>, BeaconClientError> {
        self.get_light_client_updates(period, 1)
            .await?
            .into_iter()
            .next()
            .ok_or(BeaconClientError::NoUpdateFound { period })
    }

    pub async fn get_light_client_finality_update(
        &self,
    ) -> anyhow::Result<DataVersionedResponse<LightClientFinalityUpdateData>, BeaconClientError>
    {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get("/eth/v1/beacon/light_client/finality_update".to_string())?
                    .build()?,
            )
            .await?;

        if !response.status().is_success() {
            return Err(BeaconClientError::RequestFailed {
                status_code: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn get_beacon_block_body(
        &self,
        slot: u64,
        fork_name: ForkName,
    ) -> anyhow::Result<BeaconBlockBody, BeaconClientError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get(format!("/eth/v2/beacon/blocks/{slot}"))?
                    .build()?,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BeaconClientError::NoBlockFound { slot });
        }
        if !response.status().is_success() {
            return Err(BeaconClientError::RequestFailed {
                status_code: response.status(),
            });
        }

        let block: BeaconVersionedResponse<SignedBlockData> = response.json().await?;
        Ok(BeaconBlockBody::from_value(fork_name, block.data.message.body)?)
    }

    pub async fn get_finality_checkpoints(
        &self,
        state_id: ID,
    ) -> anyhow::Result<BeaconResponse<FinalityCheckpoints>, BeaconClientError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get(format!(
                        "/eth/v1/beacon/states/{state_id}/finality_checkpoints"
                    ))?
                    .build()?,
            )
            .await?;

        if !response.status().is_success() {
            return Err(BeaconClientError::RequestFailed {
                status_code: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// First slot of the last finalized epoch, as seen from the head state.
    pub async fn get_last_finalized_slot(&self) -> anyhow::Result<u64, BeaconClientError> {
        let checkpoints = self.get_finality_checkpoints(ID::Head).await?;
        Ok(checkpoints.data.finalized.epoch * SLOTS_PER_EPOCH)
    }

    pub async fn get_node_syncing_status(
        &self,
    ) -> anyhow::Result<DataResponse<SyncStatus>, BeaconClientError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get("/eth/v1/node/syncing".to_string())?
                    .build()?,
            )
            .await?;

        if !response.status().is_success() {
            return Err(BeaconClientError::RequestFailed {
                status_code: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
