pub mod constants;
pub mod init;
pub mod relay;

use clap::{Parser, Subcommand};

use crate::cli::{init::InitConfig, relay::RelayConfig};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the relay
    #[command(name = "relay")]
    Relay(RelayConfig),

    /// Initialize the light client contract
    #[command(name = "init")]
    Init(InitConfig),
}
