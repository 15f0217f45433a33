pub mod errors;
pub mod pubkey;
pub mod signature;

pub use errors::BLSError;
pub use pubkey::PubKey;
pub use signature::BLSSignature;
