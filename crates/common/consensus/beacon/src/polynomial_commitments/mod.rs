pub mod kzg_commitment;
