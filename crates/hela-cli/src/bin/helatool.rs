use std::fs;
use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "helatool", about = "Singlish to Sinhala conversion tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Singlish text to Sinhala
    Convert {
        /// Text to convert; stdin is read when neither TEXT nor --file is given
        text: Option<String>,
        /// Read the input from a file
        #[arg(long)]
        file: Option<String>,
    },

    /// Show the token-by-token conversion breakdown for a line of text
    Explain {
        /// Text to break down
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    #[cfg(feature = "trace")]
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, file } => {
            let input = read_input(text, file);
            let output = hela_core::converter::convert(&input);
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
        }

        Command::Explain { text, json } => {
            use hela_core::converter::explain;

            let result = explain::explain(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("JSON serialization failed")
                );
            } else {
                print!("{}", explain::format_text(&result));
            }
        }
    }
}

/// Input precedence: positional text, then --file, then stdin.
fn read_input(text: Option<String>, file: Option<String>) -> String {
    if let Some(text) = text {
        return text;
    }
    if let Some(path) = file {
        return fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Failed to read input file {}: {}", path, e);
            process::exit(1);
        });
    }
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", e);
        process::exit(1);
    }
    input
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hela_core=debug")),
        )
        .init();
}
