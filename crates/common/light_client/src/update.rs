use alloy_primitives::B256;
use borsh::{BorshDeserialize, BorshSerialize, io};
use trestle_consensus_misc::{
    beacon_block_header::BeaconBlockHeader, sync_aggregate::SyncAggregate,
    sync_committee::SyncCommittee,
};

/// Finalized beacon header with the Merkle branch binding its execution
/// block hash to the header's `body_root`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderUpdate {
    pub beacon_header: BeaconBlockHeader,
    pub execution_block_hash: B256,
    pub execution_hash_branch: Vec<B256>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FinalizedHeaderUpdate {
    pub header_update: HeaderUpdate,
    pub finality_branch: Vec<B256>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SyncCommitteeUpdate {
    pub next_sync_committee: SyncCommittee,
    pub next_sync_committee_branch: Vec<B256>,
}

/// Canonical update submitted to the destination contract.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LightClientUpdate {
    /// Header attested to by the sync committee
    pub attested_beacon_header: BeaconBlockHeader,
    /// Sync committee aggregate signature
    pub sync_aggregate: SyncAggregate,
    /// Slot at which the aggregate signature was created (untrusted)
    pub signature_slot: u64,
    pub finality_update: FinalizedHeaderUpdate,
    /// Populated only for sync-period boundary updates
    pub sync_committee_update: Option<SyncCommitteeUpdate>,
}

fn serialize_branch<W: io::Write>(branch: &[B256], writer: &mut W) -> io::Result<()> {
    (branch.len() as u32).serialize(writer)?;
    for node in branch {
        node.0.serialize(writer)?;
    }
    Ok(())
}

fn deserialize_branch<R: io::Read>(reader: &mut R) -> io::Result<Vec<B256>> {
    let length = u32::deserialize_reader(reader)?;
    (0..length)
        .map(|_| Ok(B256::from(<[u8; 32]>::deserialize_reader(reader)?)))
        .collect()
}

impl BorshSerialize for HeaderUpdate {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.beacon_header.serialize(writer)?;
        self.execution_block_hash.0.serialize(writer)?;
        serialize_branch(&self.execution_hash_branch, writer)
    }
}

impl BorshDeserialize for HeaderUpdate {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(HeaderUpdate {
            beacon_header: BeaconBlockHeader::deserialize_reader(reader)?,
            execution_block_hash: <[u8; 32]>::deserialize_reader(reader)?.into(),
            execution_hash_branch: deserialize_branch(reader)?,
        })
    }
}

impl BorshSerialize for FinalizedHeaderUpdate {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.header_update.serialize(writer)?;
        serialize_branch(&self.finality_branch, writer)
    }
}

impl BorshDeserialize for FinalizedHeaderUpdate {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(FinalizedHeaderUpdate {
            header_update: HeaderUpdate::deserialize_reader(reader)?,
            finality_branch: deserialize_branch(reader)?,
        })
    }
}

impl BorshSerialize for SyncCommitteeUpdate {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.next_sync_committee.serialize(writer)?;
        serialize_branch(&self.next_sync_committee_branch, writer)
    }
}

impl BorshDeserialize for SyncCommitteeUpdate {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(SyncCommitteeUpdate {
            next_sync_committee: SyncCommittee::deserialize_reader(reader)?,
            next_sync_committee_branch: deserialize_branch(reader)?,
        })
    }
}

impl BorshSerialize for LightClientUpdate {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.attested_beacon_header.serialize(writer)?;
        self.sync_aggregate.serialize(writer)?;
        self.signature_slot.serialize(writer)?;
        self.finality_update.serialize(writer)?;
        self.sync_committee_update.serialize(writer)
    }
}

impl BorshDeserialize for LightClientUpdate {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(LightClientUpdate {
            attested_beacon_header: BeaconBlockHeader::deserialize_reader(reader)?,
            sync_aggregate: SyncAggregate::deserialize_reader(reader)?,
            signature_slot: u64::deserialize_reader(reader)?,
            finality_update: FinalizedHeaderUpdate::deserialize_reader(reader)?,
            sync_committee_update: Option::<SyncCommitteeUpdate>::deserialize_reader(reader)?,
        })
    }
}
