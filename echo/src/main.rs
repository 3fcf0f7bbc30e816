use arguments::Arguments;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod arguments;
mod handler;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let listener = server::bind(args.port).await?;
    server::serve(listener).await
}
