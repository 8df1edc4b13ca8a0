//! Transaction inputs: UTXO references and treasury (milestone) inputs.

use super::kinds::InputKind;
use crate::common::{MilestoneId, OutputId, TransactionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoInput {
    pub transaction_id: TransactionId,
    pub transaction_output_index: u16,
}

impl UtxoInput {
    pub const fn new(transaction_id: TransactionId, transaction_output_index: u16) -> Self {
        Self {
            transaction_id,
            transaction_output_index,
        }
    }

    pub fn output_id(&self) -> OutputId {
        OutputId::new(self.transaction_id, self.transaction_output_index)
    }
}

impl From<OutputId> for UtxoInput {
    fn from(id: OutputId) -> Self {
        Self::new(id.transaction_id, id.index)
    }
}

impl OutputId {
    pub fn to_utxo_input(&self) -> UtxoInput {
        UtxoInput::from(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryInput {
    pub milestone_id: MilestoneId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Input {
    Utxo(UtxoInput),
    Treasury(TreasuryInput),
}

impl Input {
    pub fn kind(&self) -> InputKind {
        match self {
            Input::Utxo(_) => InputKind::Utxo,
            Input::Treasury(_) => InputKind::Treasury,
        }
    }
}
