use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use wary::args::Args;
use wary::status::ExitStatus;

pub fn main() -> ExitCode {
    let args = Args::parse();
    match wary::run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{}: {err:#}", "Error".red().bold());
            ExitStatus::Error.into()
        }
    }
}
