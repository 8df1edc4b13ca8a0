use super::expect_payload_tag;
use crate::binary::{check_count, count_u16, require};
use crate::constants::{
    MAX_INDEXATION_KEY_LENGTH, MIN_INDEXATION_KEY_LENGTH, MIN_INDEXATION_PAYLOAD_LENGTH,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::stream::{ReadStream, WriteStream};
use tangle_types::{IndexationPayload, PayloadKind};

pub fn deserialize_indexation_payload(
    stream: &mut ReadStream<'_>,
) -> ProtocolResult<IndexationPayload> {
    require(stream, "Indexation Payload", MIN_INDEXATION_PAYLOAD_LENGTH)?;
    expect_payload_tag(stream, PayloadKind::Indexation, "indexationPayload")?;

    let index_length = usize::from(stream.read_u16("indexationPayload.indexLength")?);
    check_count(
        "indexation index",
        index_length,
        MIN_INDEXATION_KEY_LENGTH,
        MAX_INDEXATION_KEY_LENGTH,
    )?;
    let index = stream.read_bytes("indexationPayload.index", index_length)?.to_vec();

    let data_length = stream.read_u32("indexationPayload.dataLength")? as usize;
    let data = stream.read_bytes("indexationPayload.data", data_length)?.to_vec();

    Ok(IndexationPayload { index, data })
}

pub fn serialize_indexation_payload(
    stream: &mut WriteStream,
    payload: &IndexationPayload,
) -> ProtocolResult<()> {
    let index_length = count_u16(
        "indexation index",
        payload.index.len(),
        MIN_INDEXATION_KEY_LENGTH,
        MAX_INDEXATION_KEY_LENGTH,
    )?;
    let data_length = u32::try_from(payload.data.len()).map_err(|_| {
        ProtocolError::invalid_value("indexationPayload.data", "longer than a u32 length prefix")
    })?;

    stream.write_u32(PayloadKind::Indexation as u32);
    stream.write_u16(index_length);
    stream.write_bytes(&payload.index);
    stream.write_u32(data_length);
    stream.write_bytes(&payload.data);
    Ok(())
}
