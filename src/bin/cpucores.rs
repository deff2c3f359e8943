// cpucores: CPU count and host summary companion tool
//
// Prints the logical CPU count for quick use in scripts (worker pools,
// parallel make). With --full, prints a short labeled host summary.

use rshowenv::Style;
use sysinfo::System;

fn main() {
    let mut full = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--full" | "-f" => full = true,
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-V" => {
                println!("cpucores {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            other => {
                eprintln!("Error: unknown option '{}'", other);
                print_help();
                std::process::exit(1);
            }
        }
    }

    let sys = System::new_all();

    if !full {
        println!("{}", sys.cpus().len());
        return;
    }

    let os = match (System::name(), System::os_version()) {
        (Some(name), Some(version)) => format!("{} {}", name, version),
        (Some(name), None) => name,
        _ => "unknown".to_string(),
    };
    let kernel = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
    let brand = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let physical = sys
        .physical_core_count()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    print_row("os:", &os);
    print_row("kernel:", &kernel);
    print_row("arch:", std::env::consts::ARCH);
    print_row("cpu:", &brand);
    print_row(
        "cores:",
        &format!("{} physical, {} logical", physical, sys.cpus().len()),
    );
}

/// Print one aligned summary row with a bold label
fn print_row(label: &str, value: &str) {
    let padded = format!("{:<7}", label);
    println!("{} {}", Style::new().bold().apply_to(&padded), value);
}

/// Print help message
fn print_help() {
    println!("cpucores - CPU count and host summary");
    println!();
    println!("Usage: cpucores [OPTIONS]");
    println!();
    println!("Prints the logical CPU count. With --full, prints a short host");
    println!("summary instead (OS, kernel, architecture, CPU model, cores).");
    println!();
    println!("Options:");
    println!("  --full, -f        Print the host summary");
    println!("  --help, -h        Show this help message");
    println!("  --version, -V     Show version");
}
