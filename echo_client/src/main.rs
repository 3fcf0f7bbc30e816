use anyhow::Context;
use arguments::Arguments;
use clap::Parser;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing_subscriber::EnvFilter;

mod address;
mod arguments;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let stream = TcpStream::connect((args.address.host.as_str(), args.address.port))
        .await
        .with_context(|| format!("Couldn't connect to {}", args.address))?;
    tracing::info!("Connected to {}", args.address);

    let reply = exchange(stream, args.message.as_bytes()).await?;
    println!("message: {}", String::from_utf8_lossy(&reply));
    Ok(())
}

/// Sends `message`, half-closes, and collects everything the server sends back.
async fn exchange<S>(mut stream: S, message: &[u8]) -> anyhow::Result<Vec<u8>>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream
        .write_all(message)
        .await
        .context("Failed to send message")?;
    stream.shutdown().await.context("Failed to half-close")?;

    let mut reply = Vec::with_capacity(message.len());
    stream
        .read_to_end(&mut reply)
        .await
        .context("Failed to receive reply")?;
    tracing::debug!("Received {} bytes", reply.len());
    Ok(reply)
}
