use std::str::FromStr;

use alloy_primitives::hex;
use borsh::{BorshDeserialize, BorshSerialize, io};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum::U96};
use tree_hash_derive::TreeHash;

use crate::errors::BLSError;

pub const SIGNATURE_BYTE_LENGTH: usize = 96;

#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash, Default, Eq, Hash)]
pub struct BLSSignature {
    pub inner: FixedVector<u8, U96>,
}

impl Serialize for BLSSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let val = format!("0x{}", hex::encode(self.inner.as_ssz_bytes()));
        serializer.serialize_str(&val)
    }
}

impl<'de> Deserialize<'de> for BLSSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let result: String = Deserialize::deserialize(deserializer)?;
        let result = hex::decode(&result).map_err(serde::de::Error::custom)?;
        if result.len() != SIGNATURE_BYTE_LENGTH {
            return Err(serde::de::Error::custom(format!(
                "invalid signature byte length: {}",
                result.len()
            )));
        }
        let signature = FixedVector::new(result).expect("length checked above");
        Ok(Self { inner: signature })
    }
}

impl BLSSignature {
    pub fn to_bytes(&self) -> &[u8] {
        self.inner.iter().as_slice()
    }
}

impl FromStr for BLSSignature {
    type Err = BLSError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean_str = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(clean_str).map_err(|_| BLSError::InvalidHexString)?;

        if bytes.len() != SIGNATURE_BYTE_LENGTH {
            return Err(BLSError::InvalidByteLength);
        }

        Ok(BLSSignature {
            inner: FixedVector::new(bytes).expect("length checked above"),
        })
    }
}

impl BorshSerialize for BLSSignature {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_bytes())
    }
}

impl BorshDeserialize for BLSSignature {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let bytes = <[u8; SIGNATURE_BYTE_LENGTH]>::deserialize_reader(reader)?;
        Ok(BLSSignature {
            inner: FixedVector::new(bytes.to_vec()).expect("length checked above"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borsh_round_trip() {
        let signature = BLSSignature {
            inner: FixedVector::new(vec![0x5C; SIGNATURE_BYTE_LENGTH]).unwrap(),
        };
        let encoded = borsh::to_vec(&signature).unwrap();
        assert_eq!(encoded.len(), SIGNATURE_BYTE_LENGTH);
        assert_eq!(
            borsh::from_slice::<BLSSignature>(&encoded).unwrap(),
            signature
        );
    }

    #[test]
    fn test_hex_serde_rejects_wrong_length() {
        let short = format!("\"0x{}\"", "5c".repeat(95));
        assert!(serde_json::from_str::<BLSSignature>(&short).is_err());
        let long = format!("\"0x{}\"", "5c".repeat(97));
        assert!(serde_json::from_str::<BLSSignature>(&long).is_err());

        let exact = format!("\"0x{}\"", "5c".repeat(96));
        let signature: BLSSignature = serde_json::from_str(&exact).unwrap();
        assert_eq!(signature.to_bytes(), &[0x5C; SIGNATURE_BYTE_LENGTH]);
    }

    #[test]
    fn test_borsh_rejects_truncated_input() {
        let bytes = vec![0u8; SIGNATURE_BYTE_LENGTH - 1];
        assert!(borsh::from_slice::<BLSSignature>(&bytes).is_err());
    }
}
