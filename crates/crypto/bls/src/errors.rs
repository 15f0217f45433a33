use thiserror::Error;

#[derive(Error, PartialEq, Debug)]
pub enum BLSError {
    #[error("invalid hex string")]
    InvalidHexString,
    #[error("invalid byte length")]
    InvalidByteLength,
}
