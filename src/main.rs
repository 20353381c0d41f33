use clap::Parser;
use colored::Colorize;
use ipinfo::cli::{run, Cli, Outcome};
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    ipinfo::logging::init(cli.log_level())?;
    log::debug!("#Start main() {:?}", cli.command);

    match run(&cli) {
        Ok(Outcome::Report(lines)) => {
            for line in lines {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Hint(hint)) => {
            println!("{hint}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{} {e}", "error:".red());
            Ok(ExitCode::FAILURE)
        }
    }
}
