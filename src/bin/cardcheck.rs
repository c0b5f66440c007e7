//! Command-line front end for the card validation pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Run the full pipeline
//! cardcheck validate "4532 0151 1283 0366"
//! cardcheck validate 30569309025904 --output json
//!
//! # Individual stages
//! cardcheck luhn 4532015112830366
//! cardcheck classify 6011111111111117
//! cardcheck provider "american express"
//!
//! # Test card generation
//! cardcheck generate --network master-card --count 5
//! ```
//!
//! `validate` exits 0 when the card is accepted and 1 otherwise. Set
//! `RUST_LOG=cardcheck=debug` (or pass `--verbose`) to see which stage
//! rejected a card.

use cardcheck::generate;
use cardcheck::response::respond;
use cardcheck::{classify, passes_luhn, validate, CardNetwork, SupportedProvider};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Payment card number validation tool")]
struct Cli {
    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a card number through the full validation pipeline
    Validate {
        /// Card number to validate (spaces allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Detect the card network from its prefix and length
    Classify {
        /// Card number to classify
        card_number: String,
    },

    /// Parse a provider label
    Provider {
        /// Label such as "Visa" or "american express"
        label: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Network to generate for
        #[arg(short, long, default_value = "visa")]
        network: NetworkArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Visa,
    MasterCard,
    Amex,
    Discover,
    Jcb,
    DinersClub,
    Maestro,
}

impl From<NetworkArg> for CardNetwork {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Visa => CardNetwork::Visa,
            NetworkArg::MasterCard => CardNetwork::MasterCard,
            NetworkArg::Amex => CardNetwork::AmericanExpress,
            NetworkArg::Discover => CardNetwork::Discover,
            NetworkArg::Jcb => CardNetwork::Jcb,
            NetworkArg::DinersClub => CardNetwork::DinersClub,
            NetworkArg::Maestro => CardNetwork::Maestro,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<T> {
    status: u16,
    body: T,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => cmd_validate(&card_number, output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Classify { card_number } => cmd_classify(&card_number),
        Commands::Provider { label } => cmd_provider(&label),
        Commands::Generate {
            network,
            count,
            seed,
        } => cmd_generate(network.into(), count, seed),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cardcheck=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> ExitCode {
    let result = validate(card_number);

    match output {
        OutputFormat::Text => match &result {
            Ok(card) => {
                println!("Valid: yes");
                println!("Card Type: {}", card.provider());
                println!("Length: {}", card.length());
            }
            Err(e) => {
                println!("Valid: no");
                println!("Status: {}", e.status_code());
                println!("Error: {}", e);
            }
        },
        OutputFormat::Json => {
            let (status, body) = respond(&result);
            match serde_json::to_string_pretty(&JsonOutput { status, body }) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: failed to encode output: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    exit_code(result.is_ok())
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    let ok = passes_luhn(card_number);
    println!("Luhn: {}", if ok { "pass" } else { "fail" });
    exit_code(ok)
}

fn cmd_classify(card_number: &str) -> ExitCode {
    match classify(card_number) {
        Some(network) => {
            let supported = SupportedProvider::try_from(network).is_ok();
            println!("Network: {}", network);
            println!("Supported: {}", if supported { "yes" } else { "no" });
            ExitCode::SUCCESS
        }
        None => {
            println!("Network: unknown");
            ExitCode::FAILURE
        }
    }
}

fn cmd_provider(label: &str) -> ExitCode {
    match label.parse::<SupportedProvider>() {
        Ok(provider) => {
            println!("Provider: {}", provider);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_generate(network: CardNetwork, count: usize, seed: Option<u64>) -> ExitCode {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..count {
        println!("{}", generate::generate_with_rng(network, &mut rng));
    }

    ExitCode::SUCCESS
}
