pub mod block;
pub mod checkpoints;
pub mod error;
pub mod light_client;
pub mod responses;
pub mod sync;
