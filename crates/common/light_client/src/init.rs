use borsh::{BorshDeserialize, BorshSerialize, io};
use trestle_consensus_misc::sync_committee::SyncCommittee;

use crate::{execution_header::ExecutionBlockHeader, header::ExtendedBeaconBlockHeader};

/// One-shot payload that seeds a freshly deployed destination contract.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InitInput {
    pub network: String,
    pub finalized_execution_header: ExecutionBlockHeader,
    pub finalized_beacon_header: ExtendedBeaconBlockHeader,
    pub current_sync_committee: SyncCommittee,
    pub next_sync_committee: SyncCommittee,
    pub validate_updates: bool,
    pub verify_bls_signatures: bool,
    pub hashes_gc_threshold: u64,
    pub trusted_signer: Option<String>,
}

impl BorshSerialize for InitInput {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.network.serialize(writer)?;
        self.finalized_execution_header.serialize(writer)?;
        self.finalized_beacon_header.serialize(writer)?;
        self.current_sync_committee.serialize(writer)?;
        self.next_sync_committee.serialize(writer)?;
        self.validate_updates.serialize(writer)?;
        self.verify_bls_signatures.serialize(writer)?;
        self.hashes_gc_threshold.serialize(writer)?;
        self.trusted_signer.serialize(writer)
    }
}

impl BorshDeserialize for InitInput {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(InitInput {
            network: String::deserialize_reader(reader)?,
            finalized_execution_header: ExecutionBlockHeader::deserialize_reader(reader)?,
            finalized_beacon_header: ExtendedBeaconBlockHeader::deserialize_reader(reader)?,
            current_sync_committee: SyncCommittee::deserialize_reader(reader)?,
            next_sync_committee: SyncCommittee::deserialize_reader(reader)?,
            validate_updates: bool::deserialize_reader(reader)?,
            verify_bls_signatures: bool::deserialize_reader(reader)?,
            hashes_gc_threshold: u64::deserialize_reader(reader)?,
            trusted_signer: Option::<String>::deserialize_reader(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use ssz_types::FixedVector;
    use trestle_bls::PubKey;

    use super::*;

    fn committee(fill: u8) -> SyncCommittee {
        SyncCommittee {
            pubkeys: FixedVector::new(vec![
                PubKey {
                    inner: FixedVector::new(vec![fill; 48]).unwrap()
                };
                512
            ])
            .unwrap(),
            aggregate_pubkey: PubKey {
                inner: FixedVector::new(vec![fill; 48]).unwrap(),
            },
        }
    }

    fn sample_input(trusted_signer: Option<String>) -> InitInput {
        InitInput {
            network: "mainnet".to_string(),
            finalized_execution_header: ExecutionBlockHeader::default(),
            finalized_beacon_header: ExtendedBeaconBlockHeader::default(),
            current_sync_committee: committee(0xAA),
            next_sync_committee: committee(0xBB),
            validate_updates: true,
            verify_bls_signatures: false,
            hashes_gc_threshold: 51_000,
            trusted_signer,
        }
    }

    #[test]
    fn test_borsh_round_trip() {
        for signer in [None, Some("relayer.near".to_string())] {
            let input = sample_input(signer);
            let encoded = borsh::to_vec(&input).unwrap();
            assert_eq!(borsh::from_slice::<InitInput>(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn test_network_is_length_prefixed_utf8() {
        let encoded = borsh::to_vec(&sample_input(None)).unwrap();
        assert_eq!(&encoded[..4], &[0x07, 0x00, 0x00, 0x00]);
        assert_eq!(&encoded[4..11], b"mainnet");
    }

    #[test]
    fn test_decode_rejects_bad_bool_byte() {
        let encoded = borsh::to_vec(&sample_input(None)).unwrap();
        // Trailing fields: two bools, the gc threshold, and a None flag.
        let validate_updates_offset = encoded.len() - 11;
        assert_eq!(encoded[validate_updates_offset], 1);
        assert_eq!(encoded[validate_updates_offset + 1], 0);

        let mut corrupted = encoded;
        corrupted[validate_updates_offset] = 7;
        assert!(borsh::from_slice::<InitInput>(&corrupted).is_err());
    }
}
