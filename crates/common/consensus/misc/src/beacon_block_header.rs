use alloy_primitives::B256;
use borsh::{BorshDeserialize, BorshSerialize, io};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;
use trestle_bls::BLSSignature;

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct BeaconBlockHeader {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: B256,
    pub state_root: B256,
    pub body_root: B256,
}

impl BorshSerialize for BeaconBlockHeader {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        BorshSerialize::serialize(&self.slot, writer)?;
        BorshSerialize::serialize(&self.proposer_index, writer)?;
        BorshSerialize::serialize(&self.parent_root.0, writer)?;
        BorshSerialize::serialize(&self.state_root.0, writer)?;
        BorshSerialize::serialize(&self.body_root.0, writer)
    }
}

impl BorshDeserialize for BeaconBlockHeader {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(BeaconBlockHeader {
            slot: u64::deserialize_reader(reader)?,
            proposer_index: u64::deserialize_reader(reader)?,
            parent_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
            state_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
            body_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: BLSSignature,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::b256;

    use super::*;

    #[test]
    fn test_borsh_layout() {
        let header = BeaconBlockHeader {
            slot: 0x0102030405060708,
            proposer_index: 7,
            parent_root: b256!("a330dd0ebde9e8a3ff366287bbe295a07e7ab8e74aaaf1ae1ebcbe946dbb701f"),
            state_root: B256::repeat_byte(0x22),
            body_root: B256::repeat_byte(0x33),
        };

        let encoded = borsh::to_vec(&header).unwrap();
        assert_eq!(encoded.len(), 112);
        // Little-endian slot, little-endian proposer index, then the three roots.
        assert_eq!(&encoded[..8], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&encoded[8..16], &[7, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&encoded[16..48], header.parent_root.as_slice());
        assert_eq!(&encoded[48..80], header.state_root.as_slice());
        assert_eq!(&encoded[80..112], header.body_root.as_slice());

        assert_eq!(
            borsh::from_slice::<BeaconBlockHeader>(&encoded).unwrap(),
            header
        );
    }

    #[test]
    fn test_quoted_integer_serde() {
        let json = serde_json::json!({
            "slot": "7602176",
            "proposer_index": "142573",
            "parent_root": "0xa330dd0ebde9e8a3ff366287bbe295a07e7ab8e74aaaf1ae1ebcbe946dbb701f",
            "state_root": "0x0000000000000000000000000000000000000000000000000000000000000022",
            "body_root": "0x0000000000000000000000000000000000000000000000000000000000000033",
        });
        let header: BeaconBlockHeader = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(header.slot, 7_602_176);
        assert_eq!(serde_json::to_value(&header).unwrap(), json);
    }
}
