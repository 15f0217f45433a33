use std::str::FromStr;

use alloy_primitives::hex;
use borsh::{BorshDeserialize, BorshSerialize, io};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum::U48};
use tree_hash_derive::TreeHash;

use crate::errors::BLSError;

pub const PUBKEY_BYTE_LENGTH: usize = 48;

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash, Default, Eq, Hash)]
pub struct PubKey {
    pub inner: FixedVector<u8, U48>,
}

impl Serialize for PubKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let val = format!("0x{}", hex::encode(self.inner.as_ssz_bytes()));
        serializer.serialize_str(&val)
    }
}

impl<'de> Deserialize<'de> for PubKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let result: String = Deserialize::deserialize(deserializer)?;
        let result = hex::decode(&result).map_err(serde::de::Error::custom)?;
        if result.len() != PUBKEY_BYTE_LENGTH {
            return Err(serde::de::Error::custom(format!(
                "invalid pubkey byte length: {}",
                result.len()
            )));
        }
        let key = FixedVector::new(result).expect("length checked above");
        Ok(Self { inner: key })
    }
}

impl PubKey {
    pub fn to_bytes(&self) -> &[u8] {
        self.inner.iter().as_slice()
    }
}

impl FromStr for PubKey {
    type Err = BLSError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean_str = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(clean_str).map_err(|_| BLSError::InvalidHexString)?;

        if bytes.len() != PUBKEY_BYTE_LENGTH {
            return Err(BLSError::InvalidByteLength);
        }

        Ok(PubKey {
            inner: FixedVector::new(bytes).expect("length checked above"),
        })
    }
}

impl BorshSerialize for PubKey {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_bytes())
    }
}

impl BorshDeserialize for PubKey {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let bytes = <[u8; PUBKEY_BYTE_LENGTH]>::deserialize_reader(reader)?;
        Ok(PubKey {
            inner: FixedVector::new(bytes.to_vec()).expect("length checked above"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_serde_round_trip() {
        let json = "\"0x93247f2209abcacf57b75a51dafae777f9dd38bc7053d1af526f220a7489a6d3a2753e5f3e8b1cfe39b56f43611df74a\"";
        let pubkey: PubKey = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&pubkey).unwrap(), json);
    }

    #[test]
    fn test_hex_serde_rejects_wrong_length() {
        assert!(serde_json::from_str::<PubKey>("\"0x1234\"").is_err());
        // One byte short of the 48 the container holds.
        let short = format!("\"0x{}\"", "ab".repeat(47));
        assert!(serde_json::from_str::<PubKey>(&short).is_err());
        let long = format!("\"0x{}\"", "ab".repeat(49));
        assert!(serde_json::from_str::<PubKey>(&long).is_err());
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(
            PubKey::from_str("0xzz"),
            Err(BLSError::InvalidHexString)
        );
        assert_eq!(
            PubKey::from_str("0x1234"),
            Err(BLSError::InvalidByteLength)
        );
    }

    #[test]
    fn test_borsh_layout_is_raw_bytes() {
        let pubkey = PubKey {
            inner: FixedVector::new(vec![0xAB; PUBKEY_BYTE_LENGTH]).unwrap(),
        };
        let encoded = borsh::to_vec(&pubkey).unwrap();
        assert_eq!(encoded, vec![0xAB; PUBKEY_BYTE_LENGTH]);
        assert_eq!(borsh::from_slice::<PubKey>(&encoded).unwrap(), pubkey);
    }
}
