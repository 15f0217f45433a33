use borsh::{BorshDeserialize, BorshSerialize, io};
use trestle_consensus_misc::sync_committee::SyncCommittee;

use crate::{error::LightClientError, header::ExtendedBeaconBlockHeader};

/// Contract-side light client state, mirrored here so the relay can decode
/// the canonical bytes the contract hands back.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LightClientState {
    pub finalized_beacon_header: ExtendedBeaconBlockHeader,
    pub current_sync_committee: SyncCommittee,
    pub next_sync_committee: SyncCommittee,
}

impl LightClientState {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LightClientError> {
        Ok(borsh::from_slice(bytes)?)
    }
}

impl BorshSerialize for LightClientState {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.finalized_beacon_header.serialize(writer)?;
        self.current_sync_committee.serialize(writer)?;
        self.next_sync_committee.serialize(writer)
    }
}

impl BorshDeserialize for LightClientState {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(LightClientState {
            finalized_beacon_header: ExtendedBeaconBlockHeader::deserialize_reader(reader)?,
            current_sync_committee: SyncCommittee::deserialize_reader(reader)?,
            next_sync_committee: SyncCommittee::deserialize_reader(reader)?,
        })
    }
}
