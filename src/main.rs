//! u-flowshop - two-stage flow-shop sequencing

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = u_flowshop::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
