use alloy_primitives::B256;
use borsh::{BorshDeserialize, BorshSerialize, io};
use tree_hash::TreeHash;
use trestle_consensus_misc::beacon_block_header::BeaconBlockHeader;

/// Finalized beacon header pinned by the destination contract, together with
/// the roots the contract checks submissions against.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ExtendedBeaconBlockHeader {
    pub header: BeaconBlockHeader,
    pub beacon_block_root: B256,
    pub execution_block_hash: B256,
}

impl ExtendedBeaconBlockHeader {
    pub fn from_header(header: BeaconBlockHeader, execution_block_hash: B256) -> Self {
        Self {
            beacon_block_root: header.tree_hash_root(),
            header,
            execution_block_hash,
        }
    }
}

impl BorshSerialize for ExtendedBeaconBlockHeader {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.header.serialize(writer)?;
        self.beacon_block_root.0.serialize(writer)?;
        self.execution_block_hash.0.serialize(writer)
    }
}

impl BorshDeserialize for ExtendedBeaconBlockHeader {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(ExtendedBeaconBlockHeader {
            header: BeaconBlockHeader::deserialize_reader(reader)?,
            beacon_block_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
            execution_block_hash: <[u8; 32]>::deserialize_reader(reader)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_pins_block_root() {
        let header = BeaconBlockHeader {
            slot: 7_602_176,
            proposer_index: 42,
            parent_root: B256::repeat_byte(0x11),
            state_root: B256::repeat_byte(0x22),
            body_root: B256::repeat_byte(0x33),
        };
        let extended = ExtendedBeaconBlockHeader::from_header(header, B256::repeat_byte(0x44));
        assert_eq!(extended.beacon_block_root, header.tree_hash_root());
        assert_eq!(extended.header, header);
    }

    #[test]
    fn test_borsh_layout() {
        let extended = ExtendedBeaconBlockHeader::from_header(
            BeaconBlockHeader::default(),
            B256::repeat_byte(0x44),
        );
        let encoded = borsh::to_vec(&extended).unwrap();
        // Inner header, block root, execution block hash.
        assert_eq!(encoded.len(), 112 + 32 + 32);
        assert_eq!(&encoded[112..144], extended.beacon_block_root.as_slice());
        assert_eq!(&encoded[144..176], &[0x44; 32]);
        assert_eq!(
            borsh::from_slice::<ExtendedBeaconBlockHeader>(&encoded).unwrap(),
            extended
        );
    }
}
