//! Unlock blocks: u16 count, then one block per transaction input.

use super::signature::{deserialize_signature, serialize_signature};
use super::{count_u16, require};
use crate::constants::{
    MAX_UNLOCK_BLOCK_COUNT, MIN_REFERENCE_UNLOCK_BLOCK_LENGTH, MIN_SIGNATURE_UNLOCK_BLOCK_LENGTH,
    MIN_UNLOCK_BLOCK_LENGTH, UINT16_SIZE,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{UnlockBlock, UnlockBlockKind};

pub fn deserialize_unlock_blocks(stream: &mut ReadStream<'_>) -> ProtocolResult<Vec<UnlockBlock>> {
    require(stream, "Unlock Blocks", UINT16_SIZE)?;
    let count = stream.read_u16("unlockBlocks.numUnlockBlocks")?;
    (0..count).map(|_| deserialize_unlock_block(stream)).collect()
}

pub fn serialize_unlock_blocks(
    stream: &mut WriteStream,
    blocks: &[UnlockBlock],
) -> ProtocolResult<()> {
    let count = count_u16("unlock blocks", blocks.len(), 0, MAX_UNLOCK_BLOCK_COUNT)?;
    stream.write_u16(count);
    for block in blocks {
        serialize_unlock_block(stream, block)?;
    }
    Ok(())
}

pub fn deserialize_unlock_block(stream: &mut ReadStream<'_>) -> ProtocolResult<UnlockBlock> {
    require(stream, "Unlock Block", MIN_UNLOCK_BLOCK_LENGTH)?;

    let tag = stream.peek_u8("unlockBlock.type")?;
    let kind = UnlockBlockKind::try_from(tag)
        .map_err(|_| ProtocolError::unrecognized("unlock block", tag))?;

    let min = match kind {
        UnlockBlockKind::Signature => MIN_SIGNATURE_UNLOCK_BLOCK_LENGTH,
        _ => MIN_REFERENCE_UNLOCK_BLOCK_LENGTH,
    };
    require(stream, kind.name(), min)?;
    expect_tag(stream, kind)?;

    let block = match kind {
        UnlockBlockKind::Signature => UnlockBlock::Signature {
            signature: deserialize_signature(stream)?,
        },
        UnlockBlockKind::Reference => UnlockBlock::Reference {
            reference: stream.read_u16("referenceUnlockBlock.reference")?,
        },
        UnlockBlockKind::Alias => UnlockBlock::Alias {
            reference: stream.read_u16("aliasUnlockBlock.reference")?,
        },
        UnlockBlockKind::Nft => UnlockBlock::Nft {
            reference: stream.read_u16("nftUnlockBlock.reference")?,
        },
    };
    Ok(block)
}

pub fn serialize_unlock_block(stream: &mut WriteStream, block: &UnlockBlock) -> ProtocolResult<()> {
    stream.write_u8(block.kind() as u8);
    match block {
        UnlockBlock::Signature { signature } => serialize_signature(stream, signature),
        UnlockBlock::Reference { reference }
        | UnlockBlock::Alias { reference }
        | UnlockBlock::Nft { reference } => {
            stream.write_u16(*reference);
            Ok(())
        }
    }
}

/// Consume the tag and fail unless it is `kind`
fn expect_tag(stream: &mut ReadStream<'_>, kind: UnlockBlockKind) -> ProtocolResult<()> {
    let tag = stream.read_u8("unlockBlock.type")?;
    if tag != kind as u8 {
        return Err(ProtocolError::type_mismatch(kind.name(), tag));
    }
    Ok(())
}
