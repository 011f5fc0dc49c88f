use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use strictjson::{Envelope, NormalizeOptions, normalize};

#[derive(Parser, Debug)]
#[command(
    name = "strictjson-cli",
    about = "Normalize a decoded JSON document into a strict-JSON response envelope",
    version
)]
struct Args {
    /// Expand large arrays fully instead of summarizing them
    #[arg(long)]
    no_summarize: bool,

    /// Element count above which arrays are summarized
    #[arg(long, default_value_t = 20_000)]
    threshold: usize,

    /// Number of leading elements kept in a summary sample
    #[arg(long, default_value_t = 10)]
    sample: usize,

    /// Pretty-print the response envelope
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = NormalizeOptions {
        summarize_large: !args.no_summarize,
        elem_threshold: args.threshold,
        sample_n: args.sample,
    };

    // Decode failures become a failure envelope and a nonzero exit, the
    // HTTP-400 analog; the envelope itself is always strict JSON.
    let (envelope, code) = match strictjson::decode_json_str(&buf) {
        Ok(decoded) => (
            Envelope::success(normalize(&decoded, &options)),
            ExitCode::SUCCESS,
        ),
        Err(err) => (Envelope::failure(&err), ExitCode::FAILURE),
    };

    if args.pretty {
        println!("{}", envelope.to_json_string_pretty()?);
    } else {
        println!("{}", envelope.to_json_string()?);
    }

    Ok(code)
}
