use crate::handler::handle_connection;
use anyhow::Context;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::{TcpListener, TcpStream};
use tracing::Instrument;

/// Binds the listening socket on all interfaces. Failing here is fatal.
pub async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to listen on port {port}"))?;
    tracing::info!("Listening on port {port} ({})", listener.local_addr()?);
    Ok(listener)
}

/// Accepts connections forever, handing each one to its own task.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => spawn_echo(stream, addr),
            Err(e) => tracing::error!("Failed to accept connection: {e}"),
        }
    }
}

fn spawn_echo(mut stream: TcpStream, addr: SocketAddr) {
    let span = tracing::info_span!("connection", peer = %addr);
    tokio::spawn(
        async move {
            tracing::debug!("Accepted connection");
            let (reader, writer) = stream.split();
            match handle_connection(reader, writer).await {
                Ok(echoed) => tracing::debug!("Connection closed after {echoed} bytes"),
                Err(e) => tracing::error!("{e:#}"),
            }
        }
        .instrument(span),
    );
}
