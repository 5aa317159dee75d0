use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dleq::config::CliConfig;
use dleq::{curves, random_scalar, EncodedProof, HashAlgorithm, Point, Proof, SecureRng};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "dleq")]
#[command(about = "Discrete-logarithm equality proofs over elliptic curves", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a proof for a fresh statement and print it as JSON
    Prove {
        /// Curve name (P-256 or secp256k1)
        #[arg(short, long)]
        curve: Option<String>,

        /// Hash algorithm (sha256, sha384, sha512, sha3-256, sha3-512)
        #[arg(long)]
        hash: Option<HashAlgorithm>,

        /// Secret exponent as big-endian hex; random if omitted
        #[arg(short, long)]
        secret: Option<String>,

        /// Write the proof to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a JSON proof
    Verify {
        /// Read the proof from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn prove(
    config: &CliConfig,
    secret: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let curve = curves::by_name(&config.curve)?;
    let mut rng = SecureRng::new();

    let g = Point::generator(curve.clone());
    let m = loop {
        let (_, k) = random_scalar(&*curve, &mut rng)?;
        if !k.is_zero() {
            break g.mul(&k)?;
        }
    };

    let x = match secret {
        Some(hex_secret) => BigUint::from_bytes_be(&hex::decode(hex_secret.trim())?),
        None => random_scalar(&*curve, &mut rng)?.1,
    };
    let h = g.mul(&x)?;
    let z = m.mul(&x)?;

    let proof = Proof::new(config.hash, &g, &h, &m, &z, &x, &mut rng)?;
    let json = serde_json::to_string_pretty(&EncodedProof::from_proof(&proof)?)?;

    match output {
        Some(path) => {
            fs::write(&path, json + "\n")?;
            info!(path = %path.display(), curve = curve.name(), hash = %config.hash, "proof written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn verify(input: Option<PathBuf>) -> Result<bool, Box<dyn std::error::Error>> {
    let json = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let encoded: EncodedProof = serde_json::from_str(&json)?;
    Ok(encoded.verify())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Prove {
            curve,
            hash,
            secret,
            output,
        } => {
            let mut config = CliConfig::from_env().unwrap_or_else(|e| {
                warn!("Failed to load configuration: {e}");
                info!("Using default configuration");
                CliConfig::default()
            });
            if let Some(curve) = curve {
                config.curve = curve;
            }
            if let Some(hash) = hash {
                config.hash = hash;
            }

            if let Err(e) = prove(&config, secret, output) {
                error!("Proof generation failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Verify { input } => match verify(input) {
            Ok(true) => println!("VALID"),
            Ok(false) => {
                println!("INVALID");
                std::process::exit(1);
            }
            Err(e) => {
                error!("Could not read proof: {e}");
                println!("INVALID");
                std::process::exit(1);
            }
        },
    }

    io::stdout().flush()?;
    Ok(())
}
