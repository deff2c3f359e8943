use std::io::{self, BufWriter, Write};

use mimalloc::MiMalloc;
use rshowenv::report::{collect_entries, write_report};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Main entry point for the rshowenv (Rusty Showenv) program.
///
/// Prints every environment variable, sorted by name, with rule-based value
/// highlighting:
/// 1. Collects and sorts the process environment.
/// 2. Renders a banner, one aligned line (or multi-line block) per entry,
///    and a closing rule.
/// 3. Writes the styled report to stdout in one buffered pass.
///
/// Colors are emitted unconditionally; redirect through `less -R` to page.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("rshowenv {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => {
                eprintln!("Error: unexpected argument '{}'", other);
                eprintln!("Try 'rshowenv --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let entries = collect_entries();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &entries)?;
    out.flush()?;

    Ok(())
}

/// Print help message to stdout
fn print_help() {
    println!("Rusty Showenv");
    println!();
    println!("Usage: rshowenv [OPTIONS]");
    println!();
    println!("Prints the environment sorted by variable name, with colors for");
    println!("IP addresses, OS names, and terminal capability tokens.");
    println!();
    println!("Options:");
    println!("  --help, -h        Show this help message");
    println!("  --version, -V     Show version");
}
