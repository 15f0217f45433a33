use std::slice::Iter;

use serde::{Deserialize, Serialize};
use trestle_consensus_misc::{fork::Fork, fork_name::ForkName, misc::compute_epoch_at_slot};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkSchedule(pub [Fork; ForkSchedule::TOTAL]);

impl ForkSchedule {
    pub const TOTAL: usize = 6;

    /// Names of the schedule entries, oldest first.
    const NAMES: [ForkName; ForkSchedule::TOTAL] = [
        ForkName::Phase0,
        ForkName::Altair,
        ForkName::Bellatrix,
        ForkName::Capella,
        ForkName::Deneb,
        ForkName::Electra,
    ];

    pub const fn new(forks: [Fork; ForkSchedule::TOTAL]) -> Self {
        Self(forks)
    }

    pub fn iter(&self) -> Iter<'_, Fork> {
        self.0.iter()
    }

    pub fn scheduled(&self) -> impl Iterator<Item = &Fork> {
        self.iter()
            .filter(|fork| fork.epoch != Fork::UNSCHEDULED_EPOCH)
    }

    /// Returns the latest fork activated at or before `epoch`.
    ///
    /// Unscheduled forks never activate, no matter how large `epoch` grows.
    pub fn fork_name_at_epoch(&self, epoch: u64) -> ForkName {
        let mut name = ForkName::Phase0;
        for (fork, fork_name) in self.iter().zip(Self::NAMES) {
            if fork.epoch != Fork::UNSCHEDULED_EPOCH && fork.epoch <= epoch {
                name = fork_name;
            }
        }
        name
    }

    pub fn fork_name_at_slot(&self, slot: u64) -> ForkName {
        self.fork_name_at_epoch(compute_epoch_at_slot(slot))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::fixed_bytes;
    use rstest::rstest;

    use super::*;
    use crate::networks::{HOODI, MAINNET};

    #[rstest]
    #[case(0, ForkName::Phase0)]
    #[case(74239, ForkName::Phase0)]
    #[case(74240, ForkName::Altair)]
    #[case(144896, ForkName::Bellatrix)]
    #[case(194048, ForkName::Capella)]
    #[case(269568, ForkName::Deneb)]
    #[case(364031, ForkName::Deneb)]
    #[case(364032, ForkName::Electra)]
    #[case(u64::MAX, ForkName::Electra)]
    fn test_mainnet_fork_name_at_epoch(#[case] epoch: u64, #[case] expected: ForkName) {
        assert_eq!(MAINNET.fork_schedule().fork_name_at_epoch(epoch), expected);
    }

    #[rstest]
    // Electra activated at epoch 364032, slot 11649024.
    #[case(11649023, ForkName::Deneb)]
    #[case(11649024, ForkName::Electra)]
    // Capella activated at epoch 194048, slot 6209536.
    #[case(6209535, ForkName::Bellatrix)]
    #[case(6209536, ForkName::Capella)]
    fn test_mainnet_fork_name_at_slot(#[case] slot: u64, #[case] expected: ForkName) {
        assert_eq!(MAINNET.fork_schedule().fork_name_at_slot(slot), expected);
    }

    #[test]
    fn test_forks_scheduled_at_genesis_resolve_to_latest() {
        // Hoodi launched with every fork through deneb active at epoch 0.
        let schedule = HOODI.fork_schedule();
        assert_eq!(schedule.fork_name_at_epoch(0), ForkName::Deneb);
        assert_eq!(schedule.fork_name_at_epoch(2047), ForkName::Deneb);
        assert_eq!(schedule.fork_name_at_epoch(2048), ForkName::Electra);
    }

    #[test]
    fn test_unscheduled_forks_never_activate() {
        let mut schedule = MAINNET.fork_schedule();
        schedule.0[5].epoch = Fork::UNSCHEDULED_EPOCH;
        assert_eq!(schedule.fork_name_at_epoch(u64::MAX), ForkName::Deneb);
        assert_eq!(schedule.scheduled().count(), 5);
    }

    #[test]
    fn test_schedule_versions_chain() {
        let schedule = MAINNET.fork_schedule();
        assert_eq!(
            schedule.0[0].current_version,
            fixed_bytes!("0x00000000")
        );
        for pair in schedule.0.windows(2) {
            assert_eq!(pair[0].current_version, pair[1].previous_version);
        }
    }
}
