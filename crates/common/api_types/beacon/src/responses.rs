use serde::{Deserialize, Serialize};

/// A DataResponse data struct that wraps the payload of endpoints responding
/// with a bare `data` envelope
///
/// # Example
/// {
///  "data": json!(T)
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// A BeaconResponse data struct that wraps the payload of endpoints carrying
/// chain context next to `data`
///
/// # Example
/// {
///  "execution_optimistic" : bool,
///  "finalized" : bool,
///  "data" : json!(T)
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct BeaconResponse<T> {
    pub execution_optimistic: bool,
    pub finalized: bool,
    pub data: T,
}

/// A BeaconVersionedResponse data struct that additionally carries the fork
/// version the payload was serialized under
///
/// # Example
/// {
///  "version": "electra",
///  "execution_optimistic" : bool,
///  "finalized" : bool,
///  "data" : json!(T)
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct BeaconVersionedResponse<T> {
    pub version: String,
    pub execution_optimistic: bool,
    pub finalized: bool,
    pub data: T,
}

/// A DataVersionedResponse data struct for version-tagged payloads without
/// chain context
///
/// # Example
/// {
///     "version": "electra",
///     "data": T
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct DataVersionedResponse<T> {
    pub version: String,
    pub data: T,
}
