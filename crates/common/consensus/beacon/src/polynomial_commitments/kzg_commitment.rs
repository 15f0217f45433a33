use alloy_primitives::FixedBytes;
use trestle_consensus_misc::constants::BYTES_PER_COMMITMENT;

pub type KZGCommitment = FixedBytes<BYTES_PER_COMMITMENT>;
