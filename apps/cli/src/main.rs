//! # Box Office CLI
//!
//! The Reporter: reads the two positional inputs, runs the pricing engine
//! once, and prints exactly one report.
//!
//! ## Usage
//! ```bash
//! # Price 1 adult, 2 children, 3 seniors at an explicit purchase time
//! boxoffice "1,2,3" "2023/01/04 10:00:00"
//!
//! # Omit the date to price at the current time (venue timezone)
//! boxoffice "1,2,3"
//!
//! # Machine-readable output
//! boxoffice --json "1,2,3" "2023/01/07 10:00:00"
//!
//! # Alternate pricing table (JSON, partial overrides allowed)
//! boxoffice --table promo.json "1,2,3"
//! ```
//!
//! Exit codes: 0 success, 1 validation error, 2 usage error.

mod report;

use std::env;
use std::fs;
use std::process::ExitCode;

use boxoffice_core::{default_timezone, price_purchase, validate_request, PricingTable};
use chrono::Utc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays exactly one report.
    // Off by default; RUST_LOG=debug shows the pipeline steps.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut table_path: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--table" | "-t" => {
                if i + 1 < args.len() {
                    table_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    return usage_error("--table requires a file path");
                }
            }
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            flag if flag.starts_with('-') => {
                return usage_error(&format!("unknown flag: {flag}"));
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    if positional.len() > 2 {
        return usage_error("expected at most two arguments: \"A,C,S\" and an optional date");
    }

    let table = match load_table(table_path.as_deref()) {
        Ok(table) => table,
        Err(msg) => return usage_error(&msg),
    };

    let tickets = positional.first().map(String::as_str);
    let date = positional.get(1).map(String::as_str);
    debug!(?tickets, ?date, "validating inputs");

    match validate_request(tickets, date, default_timezone(), Utc::now()) {
        Ok(request) => {
            let breakdown = price_purchase(&request, &table);
            debug!(
                base = breakdown.base_price.yen(),
                applied = %breakdown.applied,
                "priced purchase"
            );
            if json {
                match serde_json::to_string_pretty(&report::JsonReport::new(&request, &breakdown))
                {
                    Ok(body) => println!("{body}"),
                    Err(err) => return usage_error(&format!("report serialization: {err}")),
                }
            } else {
                println!("{}", report::render_success(&request, &breakdown));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(%err, "validation failed");
            if json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                println!("{}", report::render_error(&err));
            }
            ExitCode::from(1)
        }
    }
}

/// Loads the pricing table: the canonical defaults, or a JSON override
/// file (partial overrides allowed, see `PricingTable`).
fn load_table(path: Option<&str>) -> Result<PricingTable, String> {
    let Some(path) = path else {
        return Ok(PricingTable::default());
    };
    let body =
        fs::read_to_string(path).map_err(|err| format!("cannot read table {path}: {err}"))?;
    serde_json::from_str(&body).map_err(|err| format!("cannot parse table {path}: {err}"))
}

fn usage_error(msg: &str) -> ExitCode {
    eprintln!("boxoffice: {msg}");
    eprintln!("Try 'boxoffice --help' for usage.");
    ExitCode::from(2)
}

fn print_help() {
    println!("Box Office Ticket Pricing");
    println!();
    println!("Usage: boxoffice [OPTIONS] \"A,C,S\" [\"YYYY/MM/DD HH:MM:SS\"]");
    println!();
    println!("Arguments:");
    println!("  A,C,S                Adult, child and senior ticket counts");
    println!("  YYYY/MM/DD HH:MM:SS  Purchase date-time; defaults to now (UTC+9)");
    println!();
    println!("Options:");
    println!("  --json               Emit the report as JSON");
    println!("  -t, --table <PATH>   Load an alternate pricing table (JSON)");
    println!("  -h, --help           Show this help message");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::Money;

    #[test]
    fn test_load_table_defaults_without_path() {
        assert_eq!(load_table(None).unwrap(), PricingTable::default());
    }

    #[test]
    fn test_load_table_missing_file_is_usage_error() {
        // main maps this Err to usage_error, exit code 2
        let err = load_table(Some("/no/such/table.json")).unwrap_err();
        assert!(err.starts_with("cannot read table /no/such/table.json:"));
    }

    #[test]
    fn test_load_table_malformed_json_is_usage_error() {
        let path = env::temp_dir().join("boxoffice_malformed_table.json");
        fs::write(&path, "{ \"adult_unit\": ").unwrap();
        let err = load_table(path.to_str()).unwrap_err();
        assert!(err.starts_with("cannot parse table"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_table_reads_overrides() {
        let path = env::temp_dir().join("boxoffice_override_table.json");
        fs::write(&path, "{ \"adult_unit\": 1200 }").unwrap();
        let table = load_table(path.to_str()).unwrap();
        assert_eq!(table.adult_unit, Money::from_yen(1200));
        assert_eq!(table.child_unit, Money::from_yen(500));
        let _ = fs::remove_file(&path);
    }
}
