use clap::Parser;
use tracing::{Level, info};

use trestle::cli::{Cli, Commands};
use trestle_beacon_client::BeaconApiClient;
use trestle_contract_client::{LightClientContract, rpc::RpcContractClient};
use trestle_execution_client::ExecutionApiClient;
use trestle_relay::{
    Relay,
    init::{InitSettings, build_init_input},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Relay(config) => {
            let level = init_tracing(config.verbosity);
            info!("Starting relay with verbosity level {:?}", level);

            let beacon_client =
                BeaconApiClient::new(config.beacon_api_endpoint, config.request_timeout)?;
            let execution_client = ExecutionApiClient::new(config.execution_api_endpoint);
            let contract = RpcContractClient::new(config.contract_api_endpoint);
            let relay = Relay::new(
                beacon_client,
                execution_client,
                contract,
                config.network,
                config.round_interval,
            );

            tokio::select! {
                _ = relay.run() => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal, exiting");
                }
            }
        }
        Commands::Init(config) => {
            let level = init_tracing(config.verbosity);
            info!("Starting init with verbosity level {:?}", level);

            let beacon_client =
                BeaconApiClient::new(config.beacon_api_endpoint, config.request_timeout)?;
            let execution_client = ExecutionApiClient::new(config.execution_api_endpoint);
            let contract = RpcContractClient::new(config.contract_api_endpoint);

            let settings = InitSettings {
                validate_updates: !config.skip_update_validation,
                verify_bls_signatures: config.verify_bls_signatures,
                hashes_gc_threshold: config.hashes_gc_threshold,
                trusted_signer: config.trusted_signer,
            };
            let init_input =
                build_init_input(&beacon_client, &execution_client, &config.network, settings)
                    .await?;
            contract.init(init_input).await?;
            info!("Light client contract initialized");
        }
    }

    Ok(())
}

fn init_tracing(verbosity: u8) -> Level {
    let level = match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    level
}
