use borsh::io;
use thiserror::Error;
use trestle_api_types_beacon::error::BeaconClientError;
use trestle_consensus_misc::fork_name::ForkName;

#[derive(Debug, Error)]
pub enum LightClientError {
    #[error("no execution payload before bellatrix: slot {slot} resolves to {fork}")]
    UnsupportedFork { slot: u64, fork: ForkName },

    #[error("execution hash branch does not verify against the body root for slot {slot}")]
    ProofResolution { slot: u64 },

    #[error("borsh decode error: {0}")]
    Decode(#[from] io::Error),

    #[error(transparent)]
    Upstream(#[from] BeaconClientError),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
