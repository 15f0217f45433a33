use std::{sync::Arc, time::Duration};

use clap::Parser;
use trestle_network_spec::{cli::beacon_network_parser, networks::BeaconNetworkSpec};
use url::Url;

use crate::cli::constants::{
    DEFAULT_BEACON_API_ENDPOINT, DEFAULT_CONTRACT_API_ENDPOINT, DEFAULT_EXECUTION_API_ENDPOINT,
    DEFAULT_NETWORK, DEFAULT_REQUEST_TIMEOUT, DEFAULT_ROUND_INTERVAL,
};

#[derive(Debug, Parser)]
pub struct RelayConfig {
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

    #[arg(long, help = "Set the pause between relay rounds in seconds", default_value = DEFAULT_ROUND_INTERVAL, value_parser = duration_parser)]
    pub round_interval: Duration,
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the duration: {err:?}"),
    )?))
}
