//! GT-Signer: command line signer for governance terms updates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gt_01_challenge_auth::Arc60Signer;
use gt_signer::{build_update, parse_seed, update::sign_update, ApiError, GatewayClient};
use shared_crypto::Ed25519KeyPair;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// GT-Signer: sign and submit governance terms updates
#[derive(Parser, Debug)]
#[command(name = "gt-signer")]
#[command(about = "Sign governance terms updates for the terms gateway")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new Ed25519 seed and print it with its address
    Keygen,

    /// Print the address of a seed
    Address {
        /// Hex-encoded 32-byte seed
        #[arg(long, env = "GT_SIGNER_SEED")]
        seed: String,
    },

    /// Sign a local challenge and print the `PUT /terms` body
    Sign {
        #[arg(long, env = "GT_SIGNER_SEED")]
        seed: String,

        /// Domain the signer believes it is signing for
        #[arg(long)]
        domain: String,

        /// File holding the terms content
        #[arg(long)]
        content_file: PathBuf,
    },

    /// Fetch a challenge from the gateway, sign it and submit the update
    Submit {
        /// Gateway base URL
        #[arg(short, long, default_value = "http://127.0.0.1:8787")]
        endpoint: String,

        #[arg(long, env = "GT_SIGNER_SEED")]
        seed: String,

        #[arg(long)]
        domain: String,

        #[arg(long)]
        content_file: PathBuf,
    },

    /// Print the current terms
    Fetch {
        #[arg(short, long, default_value = "http://127.0.0.1:8787")]
        endpoint: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Key(#[from] gt_signer::KeyError),
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to build challenge: {0}")]
    Challenge(#[from] gt_01_challenge_auth::ChallengeError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Api(ApiError::Rejected {
            status,
            message,
            reason,
        })) => {
            error!(status, reason = reason.as_deref().unwrap_or("-"), "{}", message);
            eprintln!("Error: rejected ({}): {}", status, message);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Keygen => {
            let keypair = Ed25519KeyPair::generate();
            let seed = zeroize::Zeroizing::new(hex::encode(keypair.to_seed()));
            let out = serde_json::json!({
                "seed": seed.as_str(),
                "address": keypair.address(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Address { seed } => {
            println!("{}", parse_seed(&seed)?.address());
        }
        Command::Sign {
            seed,
            domain,
            content_file,
        } => {
            let signer = Arc60Signer::new(parse_seed(&seed)?, domain);
            let content = std::fs::read_to_string(&content_file)?;
            let update = build_update(&signer, &content)?;
            println!("{}", serde_json::to_string_pretty(&update)?);
        }
        Command::Submit {
            endpoint,
            seed,
            domain,
            content_file,
        } => {
            let signer = Arc60Signer::new(parse_seed(&seed)?, domain);
            let content = std::fs::read_to_string(&content_file)?;
            let client = GatewayClient::new(&endpoint)?;

            let issued = client.request_challenge(&signer.address(), &content).await?;
            debug!(challenge = %issued.challenge, "Received challenge");

            let update = sign_update(&signer, &content, &issued.challenge);
            client.submit_update(&update).await?;

            info!(content_hash = %issued.content_hash, "Terms updated");
            println!("Terms updated ({})", issued.content_hash);
        }
        Command::Fetch { endpoint } => {
            let terms = GatewayClient::new(&endpoint)?.fetch_terms().await?;
            println!("{}", serde_json::to_string_pretty(&terms)?);
        }
    }
    Ok(())
}
