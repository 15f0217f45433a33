use serde::{Deserialize, Serialize};

/// What the destination contract expects from the relay next.
///
/// A contract in `SubmitHeader` mode has accepted a light client update and
/// is waiting for the execution headers up to its finalized block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMode {
    SubmitLightClientUpdate,
    SubmitHeader,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(ClientMode::SubmitLightClientUpdate).unwrap(),
            json!("submit_light_client_update")
        );
        assert_eq!(
            serde_json::from_value::<ClientMode>(json!("submit_header")).unwrap(),
            ClientMode::SubmitHeader
        );
        assert!(serde_json::from_value::<ClientMode>(json!("submit")).is_err());
    }
}
