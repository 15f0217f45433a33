pub mod beacon_block_body;
pub mod execution_payload;
