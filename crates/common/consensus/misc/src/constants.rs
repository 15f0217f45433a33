pub const BLOCK_BODY_MERKLE_DEPTH: u64 = 4;
pub const BLOCK_HASH_INDEX: u64 = 12;
pub const BYTES_PER_COMMITMENT: usize = 48;
pub const EPOCHS_PER_SYNC_COMMITTEE_PERIOD: u64 = 256;
pub const EXECUTION_PAYLOAD_INDEX: u64 = 9;
pub const FAR_FUTURE_EPOCH: u64 = u64::MAX;
pub const GENESIS_SLOT: u64 = 0;
pub const SLOTS_PER_EPOCH: u64 = 32;
pub const SYNC_COMMITTEE_SIZE: u64 = 512;
