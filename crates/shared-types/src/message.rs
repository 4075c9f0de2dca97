//! The round-tagged proposal message exchanged between participants.

use crate::{ParticipantId, Value};
use serde::{Deserialize, Serialize};

/// A value proposal broadcast by one participant to a peer for a given round.
///
/// JSON body of `POST /message`, camelCase on the wire:
///
/// ```json
/// {"fromNodeId": 2, "round": 3, "value": "1"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalMessage {
    /// The sending participant.
    pub from_node_id: ParticipantId,
    /// The round the sender was in when it broadcast this value.
    pub round: u64,
    /// The sender's current proposal.
    pub value: Value,
}
