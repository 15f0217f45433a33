pub const DEFAULT_BEACON_API_ENDPOINT: &str = "http://localhost:5052";
pub const DEFAULT_CONTRACT_API_ENDPOINT: &str = "http://localhost:3030";
pub const DEFAULT_EXECUTION_API_ENDPOINT: &str = "http://localhost:8545";
pub const DEFAULT_HASHES_GC_THRESHOLD: u64 = 51_000;
pub const DEFAULT_NETWORK: &str = "mainnet";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "60";
pub const DEFAULT_ROUND_INTERVAL: &str = "12";
