//! CLI for coordination-store operations

use std::time::Duration;

use clap::{Parser, Subcommand};
use coordkv::{BenchConfig, ClientConfig, CoordClient, GetOptions};

#[derive(Parser)]
#[command(name = "coordkv")]
#[command(about = "etcd-style coordination store client")]
#[command(version)]
struct Cli {
    /// Store endpoint
    #[arg(long, default_value = "http://localhost:2379")]
    endpoint: String,

    /// Per-call timeout in milliseconds
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a value
    Get {
        /// Key
        key: String,

        /// Read the subtree recursively
        #[arg(long)]
        recursive: bool,

        /// Linearized read through the leader
        #[arg(long)]
        quorum: bool,
    },

    /// Write a value
    Set {
        /// Key
        key: String,

        /// Value
        value: String,
    },

    /// Create a directory (idempotent)
    Mkdir {
        /// Key
        key: String,
    },

    /// Publish load-generation settings under PREFIX/config
    Publish {
        /// Namespace to publish under
        prefix: String,

        /// Number of concurrent connections to use
        #[arg(short = 'c', long, default_value = "10")]
        concurrency: u32,

        /// Duration of test in seconds
        #[arg(short = 'd', long, default_value = "10")]
        duration: u64,

        /// Socket/request timeout in ms
        #[arg(short = 't', long, default_value = "1000")]
        request_timeout: u64,

        /// HTTP method
        #[arg(short = 'm', long, default_value = "GET")]
        method: String,

        /// Headers sent to the target URL
        #[arg(short = 'H', long, default_value = "")]
        headers: String,

        /// Disable keep-alives
        #[arg(long)]
        disable_keepalive: bool,

        /// Prevent sending the "Accept-Encoding: gzip" header
        #[arg(long)]
        compress: bool,

        /// Load the request payload from a file
        #[arg(long)]
        data_file: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = ClientConfig::new(cli.endpoint.as_str(), Duration::from_millis(cli.timeout_ms));
    let client = CoordClient::from_config(&cfg)?;

    match cli.command {
        Commands::Get {
            key,
            recursive,
            quorum,
        } => {
            let opts = GetOptions {
                recursive,
                quorum,
                ..Default::default()
            };
            let value = client.get_with_options(&key, &opts).await?;
            println!("{}", value);
        }

        Commands::Set { key, value } => {
            client.set(&key, &value).await?;
            println!("OK");
        }

        Commands::Mkdir { key } => {
            client.ensure_dir(&key).await?;
            println!("OK");
        }

        Commands::Publish {
            prefix,
            concurrency,
            duration,
            request_timeout,
            method,
            headers,
            disable_keepalive,
            compress,
            data_file,
        } => {
            let cfg = BenchConfig {
                concurrency,
                duration_secs: duration,
                request_timeout_ms: request_timeout,
                method,
                headers,
                disable_keepalive,
                compress,
                data_file,
            };
            client.ensure_dir(&prefix).await?;
            let key = format!("{}/config", prefix.trim_end_matches('/'));
            client.set(&key, &serde_json::to_string(&cfg)?).await?;
            println!("published {}", key);
        }
    }

    Ok(())
}
