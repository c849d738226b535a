//! Brio highlighter CLI.

use std::process::ExitCode;

use brioh::commands::{dump_tokens, highlight_file};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut tokens = false;
    let mut color = true;
    let mut path: Option<&str> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" | "-t" => tokens = true,
            "--no-color" => color = false,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other if !other.starts_with('-') && path.is_none() => path = Some(other),
            other => {
                eprintln!("error: unexpected argument `{other}`");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        print_usage();
        return ExitCode::FAILURE;
    };

    if tokens {
        dump_tokens(path)
    } else {
        highlight_file(path, color)
    }
}

fn print_usage() {
    eprintln!("Usage: brioh <file.brio> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --tokens    Print a category/lexeme table instead of styled source");
    eprintln!("  --no-color      Print the source without ANSI styling");
    eprintln!("  -h, --help      Show this help");
}
