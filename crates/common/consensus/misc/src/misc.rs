use crate::constants::{EPOCHS_PER_SYNC_COMMITTEE_PERIOD, SLOTS_PER_EPOCH};

/// Return the epoch number at ``slot``.
pub fn compute_epoch_at_slot(slot: u64) -> u64 {
    slot / SLOTS_PER_EPOCH
}

/// Return the sync committee period at ``epoch``.
pub fn compute_sync_committee_period(epoch: u64) -> u64 {
    epoch / EPOCHS_PER_SYNC_COMMITTEE_PERIOD
}

/// Return the sync committee period at ``slot``.
pub fn compute_sync_committee_period_at_slot(slot: u64) -> u64 {
    compute_sync_committee_period(compute_epoch_at_slot(slot))
}

/// Return the first slot of the sync committee ``period``.
pub fn compute_start_slot_at_period(period: u64) -> u64 {
    period * EPOCHS_PER_SYNC_COMMITTEE_PERIOD * SLOTS_PER_EPOCH
}

pub mod checksummed_address {
    use alloy_primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&address.to_checksum(None))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse::<Address>().map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(8191, 0)]
    #[case(8192, 1)]
    #[case(7_602_176, 928)]
    #[case(7_602_207, 928)]
    #[case(7_610_368, 929)]
    #[case(50_000_000, 6103)]
    fn test_compute_sync_committee_period_at_slot(#[case] slot: u64, #[case] period: u64) {
        assert_eq!(compute_sync_committee_period_at_slot(slot), period);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(31, 0)]
    #[case(32, 1)]
    #[case(7_602_176, 237_568)]
    fn test_compute_epoch_at_slot(#[case] slot: u64, #[case] epoch: u64) {
        assert_eq!(compute_epoch_at_slot(slot), epoch);
    }

    #[test]
    fn test_compute_start_slot_at_period() {
        assert_eq!(compute_start_slot_at_period(0), 0);
        assert_eq!(compute_start_slot_at_period(929), 7_610_368);
        for period in [1, 928, 1024] {
            let start = compute_start_slot_at_period(period);
            assert_eq!(compute_sync_committee_period_at_slot(start), period);
            assert_eq!(compute_sync_committee_period_at_slot(start - 1), period - 1);
        }
    }
}
