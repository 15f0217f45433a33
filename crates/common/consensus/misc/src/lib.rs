pub mod attestation_data;
pub mod beacon_block_header;
pub mod checkpoint;
pub mod constants;
pub mod deposit_data;
pub mod eth_1_data;
pub mod fork;
pub mod fork_name;
pub mod misc;
pub mod sync_aggregate;
pub mod sync_committee;
