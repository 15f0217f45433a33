pub mod attestation;
pub mod attester_slashing;
pub mod beacon_block_body;
pub mod indexed_attestation;
