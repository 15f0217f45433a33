use borsh::{BorshDeserialize, BorshSerialize, io};
use serde::{Deserialize, Serialize};
use ssz::{Decode, Encode};
use ssz_derive::{Decode, Encode};
use ssz_types::{BitVector, typenum::U512};
use tree_hash_derive::TreeHash;
use trestle_bls::BLSSignature;

use crate::constants::SYNC_COMMITTEE_SIZE;

pub const SYNC_COMMITTEE_BITS_SIZE: usize = (SYNC_COMMITTEE_SIZE / 8) as usize;

#[derive(
    Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
pub struct SyncAggregate {
    pub sync_committee_bits: BitVector<U512>,
    pub sync_committee_signature: BLSSignature,
}

impl BorshSerialize for SyncAggregate {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.sync_committee_bits.as_ssz_bytes())?;
        BorshSerialize::serialize(&self.sync_committee_signature, writer)
    }
}

impl BorshDeserialize for SyncAggregate {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let bits = <[u8; SYNC_COMMITTEE_BITS_SIZE]>::deserialize_reader(reader)?;
        let sync_committee_bits = BitVector::from_ssz_bytes(&bits)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("{err:?}")))?;
        Ok(SyncAggregate {
            sync_committee_bits,
            sync_committee_signature: BLSSignature::deserialize_reader(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use ssz_types::FixedVector;

    use super::*;

    #[test]
    fn test_borsh_round_trip() {
        let mut sync_committee_bits = BitVector::<U512>::new();
        for index in [0usize, 7, 200, 511] {
            sync_committee_bits.set(index, true).unwrap();
        }
        let aggregate = SyncAggregate {
            sync_committee_bits,
            sync_committee_signature: BLSSignature {
                inner: FixedVector::new(vec![0x42; 96]).unwrap(),
            },
        };

        let encoded = borsh::to_vec(&aggregate).unwrap();
        assert_eq!(encoded.len(), SYNC_COMMITTEE_BITS_SIZE + 96);
        assert_eq!(encoded[0], 0b1000_0001);
        assert_eq!(
            borsh::from_slice::<SyncAggregate>(&encoded).unwrap(),
            aggregate
        );
    }
}
