use std::{fs, sync::Arc};

use crate::networks::{BeaconNetworkSpec, DEV, HOLESKY, HOODI, MAINNET, SEPOLIA};

pub fn beacon_network_parser(network_string: &str) -> Result<Arc<BeaconNetworkSpec>, String> {
    match network_string {
        "mainnet" => Ok(MAINNET.clone()),
        "holesky" => Ok(HOLESKY.clone()),
        "sepolia" => Ok(SEPOLIA.clone()),
        "hoodi" => Ok(HOODI.clone()),
        "dev" => Ok(DEV.clone()),
        path => read_network_spec(path),
    }
}

fn read_network_spec(path: &str) -> Result<Arc<BeaconNetworkSpec>, String> {
    let contents = fs::read_to_string(path).map_err(|err| format!("Failed to read file: {err}"))?;
    Ok(Arc::new(serde_yaml::from_str(&contents).map_err(
        |err| format!("Failed to parse YAML from: {err}"),
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::Network;

    #[test]
    fn test_parser_resolves_known_networks() {
        assert_eq!(
            beacon_network_parser("sepolia").unwrap().network,
            Network::Sepolia
        );
        assert_eq!(
            beacon_network_parser("dev").unwrap().network,
            Network::Dev
        );
    }

    #[test]
    fn test_parser_rejects_missing_config_file() {
        assert!(
            beacon_network_parser("/definitely/not/a/config.yaml")
                .unwrap_err()
                .contains("Failed to read file")
        );
    }
}
