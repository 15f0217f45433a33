pub mod error;
pub mod execution_header;
pub mod header;
pub mod init;
pub mod state;
pub mod transform;
pub mod update;
