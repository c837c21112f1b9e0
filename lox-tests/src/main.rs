//! Main binary for running Lox conformance tests

use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::process;

use lox_tests::config::{usage, TestConfig};
use lox_tests::harness::{LoxHarness, TestRunner};
use lox_tests::TestError;

fn main() {
    env_logger::init();

    let config = match TestConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("Argument error: {}", e);
            let program = env::args().next().unwrap_or_else(|| "lox-tests".to_string());
            println!("{}", TestError::Usage(usage(&program)));
            process::exit(1);
        }
    };

    let harness = match LoxHarness::new(config) {
        Ok(harness) => harness,
        Err(e) => {
            eprintln!("Failed to create test harness: {}", e);
            process::exit(1);
        }
    };

    match harness.run_tests() {
        Ok(report) => {
            if let Err(e) = report.print_summary() {
                eprintln!("Failed to print summary: {}", e);
                process::exit(1);
            }

            process::exit(report.exit_code());
        }
        Err(e) => {
            eprintln!("Test execution failed: {}", e);
            process::exit(1);
        }
    }
}
