use std::process::ExitCode;

use clap::Parser;
use cliptrail_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match cliptrail_lib::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cliptrail: {err:#}");
            ExitCode::FAILURE
        }
    }
}
