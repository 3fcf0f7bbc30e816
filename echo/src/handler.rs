use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

/// Writes every byte read from `reader` back to `writer` until end-of-stream,
/// then shuts the writer down. Returns the number of bytes echoed.
///
/// On a copy error the connection is abandoned without attempting the shutdown.
pub async fn handle_connection<R, W>(mut reader: R, mut writer: W) -> anyhow::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let echoed = tokio::io::copy(&mut reader, &mut writer)
        .await
        .context("Failed to echo")?;
    writer.shutdown().await.context("Failed to close")?;
    Ok(echoed)
}
