pub mod attestation;
pub mod attester_slashing;
pub mod beacon_block_body;
pub mod bellatrix;
pub mod bls_to_execution_change;
pub mod capella;
pub mod consolidation_request;
pub mod deneb;
pub mod deposit;
pub mod deposit_request;
pub mod electra;
pub mod execution_requests;
pub mod helpers;
pub mod indexed_attestation;
pub mod polynomial_commitments;
pub mod proposer_slashing;
pub mod voluntary_exit;
pub mod withdrawal;
pub mod withdrawal_request;
