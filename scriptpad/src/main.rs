//! # ScriptPad
//!
//! Terminal shell for the editor service. Takes at most one file path,
//! opens it if given, then hands the terminal to the event loop.

mod app;
mod keys;

use app::App;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

struct CliOptions {
    path: Option<PathBuf>,
}

fn main() {
    // Silent unless RUST_LOG asks for output; the terminal belongs to the
    // editor while it runs.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let mut app = App::new(options.path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut path = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("scriptpad {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => {
                if path.is_some() {
                    return Err("At most one file path may be given".to_string());
                }
                path = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    Ok(CliOptions { path })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] [FILE]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Print this help");
    eprintln!("  -V, --version    Print version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Ctrl+O  Open file    Ctrl+S  Save");
    eprintln!("  Ctrl+E  Save as      Ctrl+Q  Quit");
}
