use alloy_primitives::{B256, Bytes};
use async_trait::async_trait;
use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use trestle_api_types_common::rpc::{JsonRpcRequest, JsonRpcResponse};
use trestle_light_client::{
    execution_header::ExecutionBlockHeader, init::InitInput, state::LightClientState,
    update::LightClientUpdate,
};

use crate::{LightClientContract, mode::ClientMode};

/// JSON-RPC adapter for a contract endpoint speaking the `light_client_*`
/// method family. Canonical payloads travel as 0x-prefixed hex params.
#[derive(Clone)]
pub struct RpcContractClient {
    http_client: Client,
    contract_rpc_url: Url,
}

impl RpcContractClient {
    pub fn new(contract_rpc_url: Url) -> Self {
        RpcContractClient {
            http_client: Client::new(),
            contract_rpc_url,
        }
    }

    fn build_request(&self, rpc_request: JsonRpcRequest) -> anyhow::Result<Request> {
        Ok(self
            .http_client
            .post(self.contract_rpc_url.clone())
            .json(&rpc_request)
            .build()?)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> anyhow::Result<T> {
        let http_post_request = self.build_request(JsonRpcRequest::new(method, params))?;

        self.http_client
            .execute(http_post_request)
            .await?
            .json::<JsonRpcResponse<T>>()
            .await?
            .to_result()
    }
}

#[async_trait]
impl LightClientContract for RpcContractClient {
    async fn client_mode(&self) -> anyhow::Result<ClientMode> {
        self.call("light_client_mode", vec![]).await
    }

    async fn finalized_beacon_block_hash(&self) -> anyhow::Result<B256> {
        self.call("light_client_finalized_beacon_block_hash", vec![])
            .await
    }

    async fn finalized_beacon_block_slot(&self) -> anyhow::Result<u64> {
        self.call("light_client_finalized_beacon_block_slot", vec![])
            .await
    }

    async fn light_client_state(&self) -> anyhow::Result<LightClientState> {
        let state = self.call::<Bytes>("light_client_state", vec![]).await?;
        Ok(LightClientState::from_bytes(&state)?)
    }

    async fn last_block_number(&self) -> anyhow::Result<u64> {
        self.call("light_client_last_block_number", vec![]).await
    }

    async fn unfinalized_tail_block_number(&self) -> anyhow::Result<Option<u64>> {
        self.call("light_client_unfinalized_tail_block_number", vec![])
            .await
    }

    async fn init(&self, input: InitInput) -> anyhow::Result<()> {
        let payload = Bytes::from(borsh::to_vec(&input)?);
        self.call("light_client_init", vec![json!(payload)]).await
    }

    async fn submit_light_client_update(&self, update: LightClientUpdate) -> anyhow::Result<()> {
        let payload = Bytes::from(borsh::to_vec(&update)?);
        self.call("light_client_submit_update", vec![json!(payload)])
            .await
    }

    async fn submit_execution_header(&self, header: ExecutionBlockHeader) -> anyhow::Result<()> {
        let payload = Bytes::from(borsh::to_vec(&header)?);
        self.call("light_client_submit_execution_header", vec![json!(payload)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_payloads_travel_as_hex() {
        let payload = Bytes::from(borsh::to_vec(&42u64).unwrap());
        assert_eq!(json!(payload), json!("0x2a00000000000000"));
    }
}
