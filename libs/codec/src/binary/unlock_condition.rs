//! Unlock condition family.
//!
//! The codec only enforces byte shape and the generic count ceiling; which
//! conditions an output may carry is checked by the validator layer.

use super::address::{deserialize_address, deserialize_alias_address, serialize_address};
use super::{count_u8, require};
use crate::constants::{
    MAX_UNLOCK_CONDITION_COUNT, MIN_ADDRESS_UNLOCK_CONDITION_LENGTH,
    MIN_EXPIRATION_UNLOCK_CONDITION_LENGTH, MIN_STORAGE_DEPOSIT_RETURN_UNLOCK_CONDITION_LENGTH,
    MIN_TIMELOCK_UNLOCK_CONDITION_LENGTH, MIN_UNLOCK_CONDITIONS_LENGTH,
    MIN_UNLOCK_CONDITION_LENGTH,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{
    Address, ExpirationUnlockCondition, StorageDepositReturnUnlockCondition,
    TimelockUnlockCondition, UnlockCondition, UnlockConditionKind,
};

pub fn deserialize_unlock_conditions(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<Vec<UnlockCondition>> {
    require(stream, "Unlock Conditions", MIN_UNLOCK_CONDITIONS_LENGTH)?;
    let count = stream.read_u8("unlockConditions.numUnlockConditions")?;
    (0..count).map(|_| deserialize_unlock_condition(stream)).collect()
}

pub fn serialize_unlock_conditions(
    stream: &mut WriteStream,
    conditions: &[UnlockCondition],
) -> ProtocolResult<()> {
    let count = count_u8(
        "unlock conditions",
        conditions.len(),
        0,
        MAX_UNLOCK_CONDITION_COUNT,
    )?;
    stream.write_u8(count);
    for condition in conditions {
        serialize_unlock_condition(stream, condition)?;
    }
    Ok(())
}

pub fn deserialize_unlock_condition(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<UnlockCondition> {
    require(stream, "Unlock Condition", MIN_UNLOCK_CONDITION_LENGTH)?;

    let tag = stream.peek_u8("unlockCondition.type")?;
    let kind = UnlockConditionKind::try_from(tag)
        .map_err(|_| ProtocolError::unrecognized("unlock condition", tag))?;

    let min = match kind {
        UnlockConditionKind::StorageDepositReturn => {
            MIN_STORAGE_DEPOSIT_RETURN_UNLOCK_CONDITION_LENGTH
        }
        UnlockConditionKind::Timelock => MIN_TIMELOCK_UNLOCK_CONDITION_LENGTH,
        UnlockConditionKind::Expiration => MIN_EXPIRATION_UNLOCK_CONDITION_LENGTH,
        _ => MIN_ADDRESS_UNLOCK_CONDITION_LENGTH,
    };
    require(stream, kind.name(), min)?;
    expect_tag(stream, kind)?;

    let condition = match kind {
        UnlockConditionKind::Address => UnlockCondition::Address {
            address: deserialize_address(stream)?,
        },
        UnlockConditionKind::StorageDepositReturn => {
            UnlockCondition::StorageDepositReturn(StorageDepositReturnUnlockCondition {
                return_address: deserialize_address(stream)?,
                amount: stream.read_u64("storageDepositReturnUnlockCondition.amount")?,
            })
        }
        UnlockConditionKind::Timelock => UnlockCondition::Timelock(TimelockUnlockCondition {
            milestone_index: stream.read_u32("timelockUnlockCondition.milestoneIndex")?,
            unix_time: stream.read_u32("timelockUnlockCondition.unixTime")?,
        }),
        UnlockConditionKind::Expiration => UnlockCondition::Expiration(ExpirationUnlockCondition {
            return_address: deserialize_address(stream)?,
            milestone_index: stream.read_u32("expirationUnlockCondition.milestoneIndex")?,
            unix_time: stream.read_u32("expirationUnlockCondition.unixTime")?,
        }),
        UnlockConditionKind::StateControllerAddress => UnlockCondition::StateControllerAddress {
            address: deserialize_address(stream)?,
        },
        UnlockConditionKind::GovernorAddress => UnlockCondition::GovernorAddress {
            address: deserialize_address(stream)?,
        },
        UnlockConditionKind::ImmutableAlias => UnlockCondition::ImmutableAlias {
            address: Address::Alias(deserialize_alias_address(stream)?),
        },
    };
    Ok(condition)
}

pub fn serialize_unlock_condition(
    stream: &mut WriteStream,
    condition: &UnlockCondition,
) -> ProtocolResult<()> {
    stream.write_u8(condition.kind() as u8);
    match condition {
        UnlockCondition::Address { address }
        | UnlockCondition::StateControllerAddress { address }
        | UnlockCondition::GovernorAddress { address } => serialize_address(stream, address),
        UnlockCondition::ImmutableAlias { address } => {
            if address.as_alias().is_none() {
                return Err(ProtocolError::invalid_value(
                    "immutableAliasUnlockCondition.address",
                    format!("must be an alias address, got {}", address.kind().name()),
                ));
            }
            serialize_address(stream, address)
        }
        UnlockCondition::StorageDepositReturn(c) => {
            serialize_address(stream, &c.return_address)?;
            stream.write_u64(c.amount);
            Ok(())
        }
        UnlockCondition::Timelock(c) => {
            stream.write_u32(c.milestone_index);
            stream.write_u32(c.unix_time);
            Ok(())
        }
        UnlockCondition::Expiration(c) => {
            serialize_address(stream, &c.return_address)?;
            stream.write_u32(c.milestone_index);
            stream.write_u32(c.unix_time);
            Ok(())
        }
    }
}

/// Consume the tag and fail unless it is `kind`
fn expect_tag(stream: &mut ReadStream<'_>, kind: UnlockConditionKind) -> ProtocolResult<()> {
    let tag = stream.read_u8("unlockCondition.type")?;
    if tag != kind as u8 {
        return Err(ProtocolError::type_mismatch(kind.name(), tag));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_types::{AliasId, Ed25519Address};

    fn ed25519() -> Address {
        Address::Ed25519(Ed25519Address::new([0x69; 32]))
    }

    #[test]
    fn test_every_condition_kind_decodes_back() {
        let conditions = vec![
            UnlockCondition::Address { address: ed25519() },
            UnlockCondition::StorageDepositReturn(StorageDepositReturnUnlockCondition {
                return_address: ed25519(),
                amount: 42_000,
            }),
            UnlockCondition::Timelock(TimelockUnlockCondition {
                milestone_index: 10,
                unix_time: 1_650_000_000,
            }),
            UnlockCondition::Expiration(ExpirationUnlockCondition {
                return_address: ed25519(),
                milestone_index: 0,
                unix_time: 1_700_000_000,
            }),
            UnlockCondition::StateControllerAddress { address: ed25519() },
            UnlockCondition::GovernorAddress { address: ed25519() },
            UnlockCondition::ImmutableAlias {
                address: Address::Alias(AliasId::new([1u8; 32])),
            },
        ];
        let mut out = WriteStream::new();
        serialize_unlock_conditions(&mut out, &conditions).unwrap();
        let bytes = out.into_bytes();
        assert_eq!(bytes[0], 7);

        let mut input = ReadStream::new(&bytes);
        assert_eq!(deserialize_unlock_conditions(&mut input).unwrap(), conditions);
        assert_eq!(input.unused(), 0);
    }

    #[test]
    fn test_timelock_layout() {
        let mut out = WriteStream::new();
        serialize_unlock_condition(
            &mut out,
            &UnlockCondition::Timelock(TimelockUnlockCondition {
                milestone_index: 1,
                unix_time: 2,
            }),
        )
        .unwrap();
        assert_eq!(out.final_hex(), "020100000002000000");
    }

    #[test]
    fn test_immutable_alias_requires_alias_address() {
        let err = serialize_unlock_condition(
            &mut WriteStream::new(),
            &UnlockCondition::ImmutableAlias { address: ed25519() },
        )
        .unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidValue { .. }));

        // an ed25519 address under the immutable alias tag fails on decode too
        let mut data = vec![UnlockConditionKind::ImmutableAlias as u8, 0];
        data.extend_from_slice(&[0u8; 32]);
        let err = deserialize_unlock_condition(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(err, ProtocolError::type_mismatch("alias address", 0u8));
    }

    #[test]
    fn test_unknown_condition_kind() {
        let data = [9u8; 40];
        let err = deserialize_unlock_condition(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(err, ProtocolError::unrecognized("unlock condition", 9u8));
    }

    #[test]
    fn test_short_expiration_condition() {
        let mut data = vec![UnlockConditionKind::Expiration as u8];
        data.extend_from_slice(&[0u8; 33]);
        let err = deserialize_unlock_condition(&mut ReadStream::new(&data)).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::minimum_length("Expiration Unlock Condition", 34, 42)
        );
    }

    #[test]
    fn test_variant_tag_rechecked() {
        let data = [0u8, 0, 0];
        let mut input = ReadStream::new(&data);
        assert_eq!(
            expect_tag(&mut input, UnlockConditionKind::Timelock),
            Err(ProtocolError::type_mismatch("Timelock Unlock Condition", 0u8))
        );

        let mut input = ReadStream::new(&data);
        assert!(expect_tag(&mut input, UnlockConditionKind::Address).is_ok());
        assert_eq!(input.read_index(), 1);
    }
}
