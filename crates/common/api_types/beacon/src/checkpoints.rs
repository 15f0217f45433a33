use serde::{Deserialize, Serialize};
use trestle_consensus_misc::checkpoint::Checkpoint;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct FinalityCheckpoints {
    pub previous_justified: Checkpoint,
    pub current_justified: Checkpoint,
    pub finalized: Checkpoint,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_finality_checkpoints_deserialize() {
        let checkpoints: FinalityCheckpoints = serde_json::from_value(json!({
            "previous_justified": {
                "epoch": "237566",
                "root": format!("0x{}", "11".repeat(32)),
            },
            "current_justified": {
                "epoch": "237567",
                "root": format!("0x{}", "22".repeat(32)),
            },
            "finalized": {
                "epoch": "237566",
                "root": format!("0x{}", "33".repeat(32)),
            },
        }))
        .expect("deserialization failed");

        assert_eq!(checkpoints.finalized.epoch, 237_566);
        assert_eq!(checkpoints.finalized.root, B256::repeat_byte(0x33));
        assert_eq!(checkpoints.current_justified.epoch, 237_567);
    }
}
