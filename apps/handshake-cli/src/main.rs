//! Handshake CLI
//!
//! Command-line access to key generation, shared-secret derivation and
//! payload encryption, for checking interop against a peer.

use anyhow::Context;
use clap::{Parser, Subcommand};
use handshake::{Curve, Handshake, HandshakeConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log directives applied when `RUST_LOG` is unset
const DEFAULT_LOG_DIRECTIVES: &str = "handshake=info,handshake_cli=info";

#[derive(Debug, Parser)]
#[command(name = "handshake-cli", version, about = "ECDH key agreement and AES-CBC payload encryption")]
struct Args {
    /// Elliptic curve used for key generation and agreement
    #[arg(long, global = true, env = "HANDSHAKE_CURVE", default_value = "secp256k1")]
    curve: Curve,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a key pair, or rebuild one from a private key
    Keygen {
        /// Hex private key to derive the public key from
        #[arg(long)]
        private: Option<String>,
    },
    /// Derive the shared secret with a peer
    Secret {
        /// Our hex private key
        #[arg(long)]
        private: String,
        /// The peer's uncompressed hex public key
        #[arg(long)]
        peer: String,
    },
    /// Encrypt a message under a shared secret
    Encrypt {
        /// 64-character hex shared secret
        #[arg(long)]
        secret: String,
        message: String,
    },
    /// Decrypt an `<iv>:<ciphertext>` envelope
    Decrypt {
        /// 64-character hex shared secret
        #[arg(long)]
        secret: String,
        envelope: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(rust_log.as_deref())?)
        .init();

    let args = Args::parse();
    let handshake = Handshake::new(HandshakeConfig::new(args.curve));
    debug!("Using curve {}", handshake.curve());

    let output = run(&handshake, args.command)?;
    println!("{output}");

    Ok(())
}

/// User directives win outright; the defaults only fill in for an unset `RUST_LOG`
fn env_filter(rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).context("invalid RUST_LOG directives"),
        None => Ok(EnvFilter::new(DEFAULT_LOG_DIRECTIVES)),
    }
}

fn run(handshake: &Handshake, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Keygen { private } => {
            let pair = match private {
                Some(private) => handshake
                    .generate_from_private(&private)
                    .context("failed to rebuild key pair")?,
                None => handshake.generate(),
            };
            Ok(serde_json::to_string_pretty(&pair)?)
        }
        Command::Secret { private, peer } => handshake
            .secret(&private, &peer)
            .context("failed to derive shared secret"),
        Command::Encrypt { secret, message } => handshake
            .encrypt(&message, &secret)
            .context("failed to encrypt message"),
        Command::Decrypt { secret, envelope } => handshake
            .decrypt(&envelope, &secret)
            .context("failed to decrypt envelope"),
    }
}
