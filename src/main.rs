//! phone-store - Inventory, sales and reporting for a phone shop

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = phone_store::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
