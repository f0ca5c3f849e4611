use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ipfs-moderation-adapter")]
#[command(about = "Chainlink external adapter: moderate an IPFS image and pin the labels")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the adapter over HTTP (POST /)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,
    },
    /// Run a single job and print the response envelope
    Run {
        #[arg(long)]
        job_id: String,

        #[arg(long)]
        hash: String,
    },
}
