use borsh::{BorshDeserialize, BorshSerialize, io};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum::U512};
use tree_hash_derive::TreeHash;
use trestle_bls::PubKey;

use crate::constants::SYNC_COMMITTEE_SIZE;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct SyncCommittee {
    pub pubkeys: FixedVector<PubKey, U512>,
    pub aggregate_pubkey: PubKey,
}

impl BorshSerialize for SyncCommittee {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        BorshSerialize::serialize(&(self.pubkeys.len() as u32), writer)?;
        for pubkey in &self.pubkeys {
            BorshSerialize::serialize(pubkey, writer)?;
        }
        BorshSerialize::serialize(&self.aggregate_pubkey, writer)
    }
}

impl BorshDeserialize for SyncCommittee {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let length = u32::deserialize_reader(reader)?;
        if u64::from(length) != SYNC_COMMITTEE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid sync committee length: {length}"),
            ));
        }
        let pubkeys = (0..length)
            .map(|_| PubKey::deserialize_reader(reader))
            .collect::<io::Result<Vec<_>>>()?;
        Ok(SyncCommittee {
            pubkeys: FixedVector::new(pubkeys).expect("length checked above"),
            aggregate_pubkey: PubKey::deserialize_reader(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use ssz_types::typenum::Unsigned;

    use super::*;

    fn sample_committee() -> SyncCommittee {
        let pubkeys = (0..U512::to_u64())
            .map(|index| PubKey {
                inner: FixedVector::new(vec![index as u8; 48]).unwrap(),
            })
            .collect::<Vec<_>>();
        SyncCommittee {
            pubkeys: FixedVector::new(pubkeys).unwrap(),
            aggregate_pubkey: PubKey {
                inner: FixedVector::new(vec![0xEE; 48]).unwrap(),
            },
        }
    }

    #[test]
    fn test_borsh_round_trip() {
        let committee = sample_committee();
        let encoded = borsh::to_vec(&committee).unwrap();
        // u32 length prefix, 512 pubkeys, aggregate pubkey.
        assert_eq!(encoded.len(), 4 + 512 * 48 + 48);
        assert_eq!(&encoded[..4], &[0x00, 0x02, 0x00, 0x00]);
        assert_eq!(
            borsh::from_slice::<SyncCommittee>(&encoded).unwrap(),
            committee
        );
    }

    #[test]
    fn test_borsh_rejects_wrong_committee_size() {
        let committee = sample_committee();
        let mut encoded = borsh::to_vec(&committee).unwrap();
        // Claim 511 entries.
        encoded[0] = 0xFF;
        encoded[1] = 0x01;
        assert!(borsh::from_slice::<SyncCommittee>(&encoded).is_err());
    }
}
