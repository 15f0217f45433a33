use alloy_primitives::{B256, U64};
use alloy_rpc_types_eth::{Block, BlockNumberOrTag};
use reqwest::{Client, Request, Url};
use serde_json::json;
use trestle_api_types_common::rpc::{JsonRpcRequest, JsonRpcResponse};

/// Client for the public execution layer JSON-RPC endpoint.
#[derive(Clone)]
pub struct ExecutionApiClient {
    http_client: Client,
    execution_api_url: Url,
}

impl ExecutionApiClient {
    pub fn new(execution_api_url: Url) -> Self {
        ExecutionApiClient {
            http_client: Client::new(),
            execution_api_url,
        }
    }

    fn build_request(&self, rpc_request: JsonRpcRequest) -> anyhow::Result<Request> {
        Ok(self
            .http_client
            .post(self.execution_api_url.clone())
            .json(&rpc_request)
            .build()?)
    }

    pub async fn eth_block_number(&self) -> anyhow::Result<U64> {
        let request_body = JsonRpcRequest::new("eth_blockNumber", vec![]);

        let http_post_request = self.build_request(request_body)?;

        self.http_client
            .execute(http_post_request)
            .await?
            .json::<JsonRpcResponse<U64>>()
            .await?
            .to_result()
    }

    pub async fn eth_get_block_by_number(
        &self,
        block_number_or_tag: BlockNumberOrTag,
        hydrated: bool,
    ) -> anyhow::Result<Block> {
        let request_body = JsonRpcRequest::new(
            "eth_getBlockByNumber",
            vec![json!(block_number_or_tag), json!(hydrated)],
        );

        let http_post_request = self.build_request(request_body)?;

        self.http_client
            .execute(http_post_request)
            .await?
            .json::<JsonRpcResponse<Block>>()
            .await?
            .to_result()
    }

    pub async fn eth_get_block_by_hash(
        &self,
        block_hash: B256,
        hydrated: bool,
    ) -> anyhow::Result<Block> {
        let request_body = JsonRpcRequest::new(
            "eth_getBlockByHash",
            vec![json!(block_hash), json!(hydrated)],
        );

        let http_post_request = self.build_request(request_body)?;

        self.http_client
            .execute(http_post_request)
            .await?
            .json::<JsonRpcResponse<Block>>()
            .await?
            .to_result()
    }
}
