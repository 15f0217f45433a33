use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use trestle_consensus_misc::{
    beacon_block_header::BeaconBlockHeader, sync_aggregate::SyncAggregate,
    sync_committee::SyncCommittee,
};

/// Header container used by the light client endpoints.
///
/// Since capella the wire shape also carries `execution` and
/// `execution_branch`, which are not needed here and are ignored.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct LightClientHeader {
    pub beacon: BeaconBlockHeader,
}

/// One item of `/eth/v1/beacon/light_client/updates`, advertising the next
/// sync committee of its period.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightClientUpdateData {
    /// Header attested to by the sync committee
    pub attested_header: LightClientHeader,
    /// Next sync committee corresponding to `attested_header.beacon.state_root`
    pub next_sync_committee: SyncCommittee,
    pub next_sync_committee_branch: Vec<B256>,
    /// Finalized header corresponding to `attested_header.beacon.state_root`
    pub finalized_header: LightClientHeader,
    pub finality_branch: Vec<B256>,
    /// Sync committee aggregate signature
    pub sync_aggregate: SyncAggregate,
    /// Slot at which the aggregate signature was created (untrusted)
    #[serde(with = "serde_utils::quoted_u64")]
    pub signature_slot: u64,
}

/// Payload of `/eth/v1/beacon/light_client/finality_update`, carrying no
/// sync committee material.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightClientFinalityUpdateData {
    /// Header attested to by the sync committee
    pub attested_header: LightClientHeader,
    /// Finalized header corresponding to `attested_header.beacon.state_root`
    pub finalized_header: LightClientHeader,
    pub finality_branch: Vec<B256>,
    /// Sync committee aggregate signature
    pub sync_aggregate: SyncAggregate,
    /// Slot at which the aggregate signature was created (untrusted)
    #[serde(with = "serde_utils::quoted_u64")]
    pub signature_slot: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn header_json(slot: u64) -> Value {
        json!({
            "beacon": {
                "slot": slot.to_string(),
                "proposer_index": "1023",
                "parent_root": format!("0x{}", "11".repeat(32)),
                "state_root": format!("0x{}", "22".repeat(32)),
                "body_root": format!("0x{}", "33".repeat(32)),
            },
            "execution": { "block_number": "14477121" },
            "execution_branch": vec![format!("0x{}", "44".repeat(32)); 4],
        })
    }

    fn sync_aggregate_json() -> Value {
        json!({
            "sync_committee_bits": format!("0x{}", "ff".repeat(64)),
            "sync_committee_signature": format!("0x{}", "aa".repeat(96)),
        })
    }

    fn sync_committee_json() -> Value {
        let pubkey = format!("0x{}", "bb".repeat(48));
        json!({
            "pubkeys": vec![pubkey.clone(); 512],
            "aggregate_pubkey": pubkey,
        })
    }

    fn period_update_json() -> Value {
        json!({
            "attested_header": header_json(7_610_432),
            "next_sync_committee": sync_committee_json(),
            "next_sync_committee_branch": vec![format!("0x{}", "55".repeat(32)); 6],
            "finalized_header": header_json(7_610_368),
            "finality_branch": vec![format!("0x{}", "66".repeat(32)); 7],
            "sync_aggregate": sync_aggregate_json(),
            "signature_slot": "7610433",
        })
    }

    fn finality_update_json() -> Value {
        json!({
            "attested_header": header_json(7_610_432),
            "finalized_header": header_json(7_610_368),
            "finality_branch": vec![format!("0x{}", "66".repeat(32)); 7],
            "sync_aggregate": sync_aggregate_json(),
            "signature_slot": "7610433",
        })
    }

    #[test]
    fn test_period_update_deserializes() {
        let update: LightClientUpdateData =
            serde_json::from_value(period_update_json()).expect("deserialization failed");
        assert_eq!(update.signature_slot, 7_610_433);
        assert_eq!(update.attested_header.beacon.slot, 7_610_432);
        assert_eq!(update.finalized_header.beacon.proposer_index, 1023);
        assert_eq!(update.next_sync_committee_branch.len(), 6);
        assert_eq!(update.finality_branch.len(), 7);
    }

    #[test]
    fn test_finality_update_deserializes() {
        let update: LightClientFinalityUpdateData =
            serde_json::from_value(finality_update_json()).expect("deserialization failed");
        assert_eq!(update.signature_slot, 7_610_433);
        assert_eq!(
            update.finalized_header.beacon.state_root,
            B256::repeat_byte(0x22)
        );
    }

    #[test]
    fn test_update_shapes_are_exclusive() {
        // A finality payload lacks the sync committee material of a period
        // update, and a period payload carries fields the finality shape
        // must not have.
        assert!(serde_json::from_value::<LightClientUpdateData>(finality_update_json()).is_err());
        assert!(
            serde_json::from_value::<LightClientFinalityUpdateData>(period_update_json()).is_err()
        );
    }
}
