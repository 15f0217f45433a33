pub mod id;
pub mod rpc;
