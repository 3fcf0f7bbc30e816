use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Echoes every byte a TCP client sends back to it")]
pub struct Arguments {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
}
