use std::str::FromStr;

use alloy_primitives::{B256, hex};
use serde::{Deserialize, Serialize};

/// [ID] can be used to identify a specific state (`state_id`) or block (`block_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ID {
    Finalized,
    Head,
    Slot(u64),
    /// expected to be a 0x-prefixed hex string.
    Root(B256),
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "finalized" => Ok(ID::Finalized),
            "head" => Ok(ID::Head),
            _ => {
                if s.starts_with("0x") {
                    B256::from_str(&s)
                        .map(ID::Root)
                        .map_err(|_| serde::de::Error::custom(format!("Invalid hex root: {s}")))
                } else if s.chars().all(|c| c.is_ascii_digit()) {
                    s.parse::<u64>()
                        .map(ID::Slot)
                        .map_err(|_| serde::de::Error::custom(format!("Invalid slot number: {s}")))
                } else {
                    Err(serde::de::Error::custom(format!("Invalid state ID: {s}")))
                }
            }
        }
    }
}

impl std::fmt::Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ID::Finalized => write!(f, "finalized"),
            ID::Head => write!(f, "head"),
            ID::Slot(slot) => write!(f, "{slot}"),
            ID::Root(root) => write!(f, "0x{}", hex::encode(root)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ID::Finalized, "finalized")]
    #[case(ID::Head, "head")]
    #[case(ID::Slot(7_602_176), "7602176")]
    #[case(
        ID::Root(B256::repeat_byte(0x22)),
        "0x2222222222222222222222222222222222222222222222222222222222222222"
    )]
    fn test_id_display(#[case] id: ID, #[case] expected: &str) {
        assert_eq!(id.to_string(), expected);
    }

    #[test]
    fn test_id_deserialize() {
        let id: ID = serde_json::from_str("\"finalized\"").expect("deserialization failed");
        assert_eq!(id, ID::Finalized);
        let id: ID = serde_json::from_str("\"12345\"").expect("deserialization failed");
        assert_eq!(id, ID::Slot(12345));
        assert!(serde_json::from_str::<ID>("\"justified!\"").is_err());
    }
}
