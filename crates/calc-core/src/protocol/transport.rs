//! Exact-count frame transfer over an async byte stream.
//!
//! The protocol has no length prefixes; every read requests the fixed size
//! of the frame expected next. A single `read` on a TCP stream may deliver
//! fewer bytes than requested, so [`read_frame`] loops until the requested
//! count is reached or the peer closes the connection.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

/// Reads exactly `len` bytes from `reader`, accumulating across partial
/// reads.
///
/// Returns a buffer shorter than `len` only when the peer closes the
/// connection first. Callers hand the buffer to the codec, whose length
/// check turns a short buffer into
/// [`ProtocolError::ShortRead`](super::codec::ProtocolError::ShortRead);
/// a short read is never retried.
///
/// # Errors
///
/// Propagates any I/O error from the underlying stream.
pub async fn read_frame<R>(reader: &mut R, len: usize) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; len];
    let mut filled = 0;
    while filled < len {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            trace!(read = filled, wanted = len, "peer closed mid-frame");
            buf.truncate(filled);
            break;
        }
        filled += n;
    }
    Ok(buf)
}

/// Writes a complete frame to `writer`.
///
/// # Errors
///
/// Propagates any I/O error from the underlying stream.
pub async fn write_frame<W>(writer: &mut W, frame: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(frame).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_frame_assembles_chunked_reads() {
        // The stream delivers the frame in three fragments; the reader must
        // keep going until all requested bytes have arrived.
        let mut mock = tokio_test::io::Builder::new()
            .read(b"CAL")
            .read(b"C\x01")
            .read(b"\x00\x00\x00\x00")
            .build();

        let frame = read_frame(&mut mock, 9).await.unwrap();
        assert_eq!(frame, b"CALC\x01\x00\x00\x00\x00");
    }

    #[tokio::test]
    async fn test_read_frame_returns_short_buffer_on_eof() {
        let mut mock = tokio_test::io::Builder::new().read(b"CALC").build();

        let frame = read_frame(&mut mock, 21).await.unwrap();
        assert_eq!(frame, b"CALC");
    }

    #[tokio::test]
    async fn test_read_frame_on_closed_stream_is_empty() {
        let mut mock = tokio_test::io::Builder::new().build();

        let frame = read_frame(&mut mock, 14).await.unwrap();
        assert!(frame.is_empty());
    }

    #[tokio::test]
    async fn test_read_frame_zero_length_reads_nothing() {
        let mut mock = tokio_test::io::Builder::new().build();

        let frame = read_frame(&mut mock, 0).await.unwrap();
        assert!(frame.is_empty());
    }

    #[tokio::test]
    async fn test_write_frame_writes_all_bytes() {
        let mut mock = tokio_test::io::Builder::new().write(b"CALC\x01").build();

        write_frame(&mut mock, b"CALC\x01").await.unwrap();
    }

    #[tokio::test]
    async fn test_read_frame_over_duplex_round_trips() {
        let (mut client, mut server) = tokio::io::duplex(64);

        write_frame(&mut client, b"\x01\x02\x03\x04").await.unwrap();
        drop(client);

        let frame = read_frame(&mut server, 4).await.unwrap();
        assert_eq!(frame, [1, 2, 3, 4]);
    }
}
