//! The top-level gossip unit.

use super::payload::Payload;
use crate::common::MessageId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub network_id: u64,
    /// 1-8 lexicographically sorted, unique parent ids
    pub parents: Vec<MessageId>,
    #[serde(default)]
    pub payload: Option<Payload>,
    pub nonce: u64,
}

impl Message {
    pub fn new(network_id: u64, parents: Vec<MessageId>, payload: Option<Payload>) -> Self {
        Self {
            network_id,
            parents,
            payload,
            nonce: 0,
        }
    }
}
