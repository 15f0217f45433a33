use std::{sync::Arc, time::Duration};

use clap::Parser;
use trestle_network_spec::{cli::beacon_network_parser, networks::BeaconNetworkSpec};
use url::Url;

use crate::cli::{
    constants::{
        DEFAULT_BEACON_API_ENDPOINT, DEFAULT_CONTRACT_API_ENDPOINT,
        DEFAULT_EXECUTION_API_ENDPOINT, DEFAULT_HASHES_GC_THRESHOLD, DEFAULT_NETWORK,
        DEFAULT_REQUEST_TIMEOUT,
    },
    relay::duration_parser,
};

#[derive(Debug, Parser)]
pub struct InitConfig {
    /// Verbosity level
    #[arg(short, long, default_value_t = 3)]
    pub verbosity: u8,

    #[arg(
        long,
        help = "Choose mainnet, holesky, sepolia, hoodi, dev or provide a path to a YAML config file",
        default_value = DEFAULT_NETWORK,
        value_parser = beacon_network_parser
    )]
    pub network: Arc<BeaconNetworkSpec>,

    #[arg(long, help = "Set HTTP url of the beacon api endpoint", default_value = DEFAULT_BEACON_API_ENDPOINT)]
    pub beacon_api_endpoint: Url,

    #[arg(long, help = "Set HTTP url of the execution api endpoint", default_value = DEFAULT_EXECUTION_API_ENDPOINT)]
    pub execution_api_endpoint: Url,

    #[arg(long, help = "Set HTTP url of the light client contract endpoint", default_value = DEFAULT_CONTRACT_API_ENDPOINT)]
    pub contract_api_endpoint: Url,

    #[arg(long, help = "Set HTTP request timeout for beacon api calls", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "Let the contract accept light client updates without validating them")]
    pub skip_update_validation: bool,

    #[arg(long, help = "Have the contract verify BLS signatures of submitted updates")]
    pub verify_bls_signatures: bool,

    #[arg(
        long,
        help = "How many finalized execution block hashes the contract keeps before garbage collecting",
        default_value_t = DEFAULT_HASHES_GC_THRESHOLD
    )]
    pub hashes_gc_threshold: u64,

    #[arg(
        long,
        help = "The only account allowed to submit updates after initialization. Leave unset to accept updates from anyone"
    )]
    pub trusted_signer: Option<String>,
}
