//! Wire format shared by the handshake and every protocol message.
//!
//! Each value travels as one frame: a little-endian `u32` body length
//! followed by the bincode encoding of the value (fixed-width integers,
//! enum variants tagged by their `u32` index).

use bincode::Options;
use bytes::{BufMut, BytesMut};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::SessionError;

pub const MAX_FRAME_LEN: usize = 64 * 1024 * 1024;

const HEADER_LEN: usize = 4;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_FRAME_LEN as u64)
        .reject_trailing_bytes()
}

pub fn encode<T>(value: &T) -> Result<BytesMut, SessionError>
where
    T: Serialize + ?Sized,
{
    let body = options()
        .serialize(value)
        .map_err(|err| SessionError::Protocol(format!("failed to encode message: {}", err)))?;

    let mut frame = BytesMut::with_capacity(HEADER_LEN + body.len());
    frame.put_u32_le(body.len() as u32);
    frame.extend_from_slice(&body);
    Ok(frame)
}

pub fn decode<T>(body: &[u8]) -> Result<T, SessionError>
where
    T: DeserializeOwned,
{
    options()
        .deserialize(body)
        .map_err(|err| SessionError::Protocol(format!("malformed message: {}", err)))
}

/// Writes one frame and flushes it, so the message is on its way before
/// this returns.
pub async fn write_frame<W, T>(writer: &mut W, value: &T) -> Result<(), SessionError>
where
    W: AsyncWrite + Unpin + ?Sized,
    T: Serialize + ?Sized,
{
    let frame = encode(value)?;
    writer.write_all(&frame).await.map_err(SessionError::Write)?;
    writer.flush().await.map_err(SessionError::Write)
}

pub async fn read_frame<R, T>(reader: &mut R) -> Result<T, SessionError>
where
    R: AsyncRead + Unpin + ?Sized,
    T: DeserializeOwned,
{
    let len = reader
        .read_u32_le()
        .await
        .map_err(SessionError::Connection)? as usize;
    if len > MAX_FRAME_LEN {
        return Err(SessionError::Protocol(format!(
            "frame of {} bytes exceeds the {} byte limit",
            len, MAX_FRAME_LEN
        )));
    }

    let mut body = BytesMut::zeroed(len);
    reader
        .read_exact(&mut body)
        .await
        .map_err(SessionError::Connection)?;
    decode(&body)
}
