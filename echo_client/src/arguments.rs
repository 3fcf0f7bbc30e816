use crate::address::HostPort;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Sends one message to an echo server and prints the reply")]
pub struct Arguments {
    /// Echo server to connect to
    #[arg(short, long, default_value = "localhost:8000")]
    pub address: HostPort,

    /// Message to send
    pub message: String,
}
