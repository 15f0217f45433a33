use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use alloy_primitives::{aliases::B32, fixed_bytes};
use serde::Deserialize;
use trestle_consensus_misc::fork::Fork;

use crate::fork_schedule::ForkSchedule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Holesky,
    Sepolia,
    Hoodi,
    Dev,
    Custom(String),
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "holesky" => Ok(Network::Holesky),
            "sepolia" => Ok(Network::Sepolia),
            "hoodi" => Ok(Network::Hoodi),
            "dev" => Ok(Network::Dev),
            custom => Ok(Network::Custom(custom.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Holesky => write!(f, "holesky"),
            Network::Sepolia => write!(f, "sepolia"),
            Network::Hoodi => write!(f, "hoodi"),
            Network::Dev => write!(f, "dev"),
            Network::Custom(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BeaconNetworkSpec {
    pub preset_base: String,
    #[serde(rename = "CONFIG_NAME")]
    pub network: Network,

    // Genesis
    pub min_genesis_time: u64,
    #[serde(with = "crate::b32_hex")]
    pub genesis_fork_version: B32,
    pub genesis_delay: u64,

    // Forking
    #[serde(with = "crate::b32_hex")]
    pub altair_fork_version: B32,
    pub altair_fork_epoch: u64,
    #[serde(with = "crate::b32_hex")]
    pub bellatrix_fork_version: B32,
    pub bellatrix_fork_epoch: u64,
    #[serde(with = "crate::b32_hex")]
    pub capella_fork_version: B32,
    pub capella_fork_epoch: u64,
    #[serde(with = "crate::b32_hex")]
    pub deneb_fork_version: B32,
    pub deneb_fork_epoch: u64,
    #[serde(with = "crate::b32_hex")]
    pub electra_fork_version: B32,
    pub electra_fork_epoch: u64,

    // Time parameters
    pub seconds_per_slot: u64,
}

impl BeaconNetworkSpec {
    pub fn fork_schedule(&self) -> ForkSchedule {
        ForkSchedule([
            Fork {
                previous_version: self.genesis_fork_version,
                current_version: self.genesis_fork_version,
                epoch: 0,
            },
            Fork {
                previous_version: self.genesis_fork_version,
                current_version: self.altair_fork_version,
                epoch: self.altair_fork_epoch,
            },
            Fork {
                previous_version: self.altair_fork_version,
                current_version: self.bellatrix_fork_version,
                epoch: self.bellatrix_fork_epoch,
            },
            Fork {
                previous_version: self.bellatrix_fork_version,
                current_version: self.capella_fork_version,
                epoch: self.capella_fork_epoch,
            },
            Fork {
                previous_version: self.capella_fork_version,
                current_version: self.deneb_fork_version,
                epoch: self.deneb_fork_epoch,
            },
            Fork {
                previous_version: self.deneb_fork_version,
                current_version: self.electra_fork_version,
                epoch: self.electra_fork_epoch,
            },
        ])
    }
}

pub static MAINNET: LazyLock<Arc<BeaconNetworkSpec>> = LazyLock::new(|| {
    BeaconNetworkSpec {
        preset_base: "mainnet".to_string(),
        network: Network::Mainnet,
        min_genesis_time: 1606824000,
        genesis_fork_version: fixed_bytes!("0x00000000"),
        genesis_delay: 604800,
        altair_fork_version: fixed_bytes!("0x01000000"),
        altair_fork_epoch: 74240,
        bellatrix_fork_version: fixed_bytes!("0x02000000"),
        bellatrix_fork_epoch: 144896,
        capella_fork_version: fixed_bytes!("0x03000000"),
        capella_fork_epoch: 194048,
        deneb_fork_version: fixed_bytes!("0x04000000"),
        deneb_fork_epoch: 269568,
        electra_fork_version: fixed_bytes!("0x05000000"),
        electra_fork_epoch: 364032,
        seconds_per_slot: 12,
    }
    .into()
});

pub static HOLESKY: LazyLock<Arc<BeaconNetworkSpec>> = LazyLock::new(|| {
    BeaconNetworkSpec {
        preset_base: "mainnet".to_string(),
        network: Network::Holesky,
        min_genesis_time: 1695902100,
        genesis_fork_version: fixed_bytes!("0x01017000"),
        genesis_delay: 300,
        altair_fork_version: fixed_bytes!("0x02017000"),
        altair_fork_epoch: 0,
        bellatrix_fork_version: fixed_bytes!("0x03017000"),
        bellatrix_fork_epoch: 0,
        capella_fork_version: fixed_bytes!("0x04017000"),
        capella_fork_epoch: 256,
        deneb_fork_version: fixed_bytes!("0x05017000"),
        deneb_fork_epoch: 29696,
        electra_fork_version: fixed_bytes!("0x06017000"),
        electra_fork_epoch: 115968,
        seconds_per_slot: 12,
    }
    .into()
});

pub static SEPOLIA: LazyLock<Arc<BeaconNetworkSpec>> = LazyLock::new(|| {
    BeaconNetworkSpec {
        preset_base: "mainnet".to_string(),
        network: Network::Sepolia,
        min_genesis_time: 1655647200,
        genesis_fork_version: fixed_bytes!("0x90000069"),
        genesis_delay: 86400,
        altair_fork_version: fixed_bytes!("0x90000070"),
        altair_fork_epoch: 50,
        bellatrix_fork_version: fixed_bytes!("0x90000071"),
        bellatrix_fork_epoch: 100,
        capella_fork_version: fixed_bytes!("0x90000072"),
        capella_fork_epoch: 56832,
        deneb_fork_version: fixed_bytes!("0x90000073"),
        deneb_fork_epoch: 132608,
        electra_fork_version: fixed_bytes!("0x90000074"),
        electra_fork_epoch: 222464,
        seconds_per_slot: 12,
    }
    .into()
});

pub static HOODI: LazyLock<Arc<BeaconNetworkSpec>> = LazyLock::new(|| {
    BeaconNetworkSpec {
        preset_base: "mainnet".to_string(),
        network: Network::Hoodi,
        min_genesis_time: 1742212800,
        genesis_fork_version: fixed_bytes!("0x10000910"),
        genesis_delay: 600,
        altair_fork_version: fixed_bytes!("0x20000910"),
        altair_fork_epoch: 0,
        bellatrix_fork_version: fixed_bytes!("0x30000910"),
        bellatrix_fork_epoch: 0,
        capella_fork_version: fixed_bytes!("0x40000910"),
        capella_fork_epoch: 0,
        deneb_fork_version: fixed_bytes!("0x50000910"),
        deneb_fork_epoch: 0,
        electra_fork_version: fixed_bytes!("0x60000910"),
        electra_fork_epoch: 2048,
        seconds_per_slot: 12,
    }
    .into()
});

pub static DEV: LazyLock<Arc<BeaconNetworkSpec>> = LazyLock::new(|| {
    BeaconNetworkSpec {
        preset_base: "mainnet".to_string(),
        network: Network::Dev,
        min_genesis_time: 1606824000,
        genesis_fork_version: fixed_bytes!("0x00000000"),
        genesis_delay: 604800,
        altair_fork_version: fixed_bytes!("0x01000000"),
        altair_fork_epoch: 74240,
        bellatrix_fork_version: fixed_bytes!("0x02000000"),
        bellatrix_fork_epoch: 144896,
        capella_fork_version: fixed_bytes!("0x03000000"),
        capella_fork_epoch: 194048,
        deneb_fork_version: fixed_bytes!("0x04000000"),
        deneb_fork_epoch: 269568,
        electra_fork_version: fixed_bytes!("0x05000000"),
        electra_fork_epoch: 364032,
        seconds_per_slot: 12,
    }
    .into()
});
